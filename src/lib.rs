pub mod backend_process;
pub mod config;
pub mod core;
pub mod logging;

pub use config::{BackendLaunch, ClientConfig};
pub use crate::core::error::{DecodeError, FlowError, GatewayError, PlatformError, ValidationError};
pub use crate::core::gateway::{Gateway, HttpGateway};
pub use crate::core::model::{Project, TableName};
pub use crate::core::picker::{FilePicker, NoDialog};
pub use crate::core::session::{
    Command, Event, MessageKind, OperationKind, OperationStatus, Screen, Session, Ticket,
};

#[cfg(feature = "gui")]
pub mod gui;
