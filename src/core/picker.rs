use crate::core::error::PlatformError;

/// Extensions the backend can ingest.
pub const DATA_FILE_EXTENSIONS: &[&str] = &["csv", "json", "parquet"];

/// Native single-file dialog. `Ok(None)` means the user cancelled.
pub trait FilePicker: Clone + Send + Sync + 'static {
    fn pick_data_file(
        &self,
    ) -> impl Future<Output = Result<Option<String>, PlatformError>> + Send;
}

/// Picker for environments without a desktop, e.g. the headless subcommands.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialog;

impl FilePicker for NoDialog {
    async fn pick_data_file(&self) -> Result<Option<String>, PlatformError> {
        Err(PlatformError::Unavailable)
    }
}

#[cfg(feature = "gui")]
pub use rfd_picker::RfdFilePicker;

#[cfg(feature = "gui")]
mod rfd_picker {
    use rfd::AsyncFileDialog;

    use super::{DATA_FILE_EXTENSIONS, FilePicker};
    use crate::core::error::PlatformError;

    /// Native dialog through rfd, filtered to data files.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RfdFilePicker;

    impl FilePicker for RfdFilePicker {
        fn pick_data_file(
            &self,
        ) -> impl Future<Output = Result<Option<String>, PlatformError>> + Send {
            let picked = AsyncFileDialog::new()
                .set_title("Select a data file")
                .add_filter("Data Files", DATA_FILE_EXTENSIONS)
                .pick_file();
            async move {
                let Some(handle) = picked.await else {
                    return Ok(None);
                };
                let path = handle.path().to_path_buf();
                match path.to_str() {
                    Some(path) => Ok(Some(path.to_string())),
                    None => Err(PlatformError::NonUtf8Path(path)),
                }
            }
        }
    }
}
