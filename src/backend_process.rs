//! Supervision of a local backend started alongside the client.

use std::{
    net::{TcpStream, ToSocketAddrs},
    process::{Child, Command},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, bail};

use crate::config::{BackendLaunch, ClientConfig};

/// A running backend process. Killed when dropped.
#[derive(Debug)]
pub struct BackendProcess {
    child: Child,
}

impl BackendProcess {
    /// Starts `<python> -m uvicorn main:app` in the backend directory, bound to
    /// the host and port of the configured backend URL.
    pub fn spawn(launch: &BackendLaunch, config: &ClientConfig) -> anyhow::Result<Self> {
        let mut command = uvicorn_command(launch, config);
        tracing::info!(dir = ?launch.backend_dir, ?command, "Starting backend");
        let child = command.spawn().with_context(|| {
            format!(
                "Failed to start backend with {:?} in {:?}",
                launch.python, launch.backend_dir
            )
        })?;
        tracing::info!(pid = child.id(), "Backend started");
        Ok(Self { child })
    }

    /// Blocks until the backend accepts connections on its port.
    ///
    /// Fails if the process exits first or `timeout` runs out.
    pub fn wait_until_ready(
        &mut self,
        config: &ClientConfig,
        timeout: Duration,
    ) -> anyhow::Result<()> {
        let child = &mut self.child;
        wait_for_port(config.host(), config.port(), timeout, || {
            match child.try_wait()? {
                Some(status) => bail!("Backend exited before it was ready ({status})"),
                None => Ok(()),
            }
        })?;
        tracing::info!(pid = self.child.id(), "Backend is accepting connections");
        Ok(())
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Kills the backend and waits for it to exit.
    pub fn shutdown(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                tracing::info!(%status, "Backend already exited");
                return;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to query backend status"),
        }
        if let Err(e) = self.child.kill() {
            tracing::warn!(pid = self.child.id(), error = %e, "Failed to stop backend");
            return;
        }
        let _ = self.child.wait();
        tracing::info!(pid = self.child.id(), "Backend stopped");
    }
}

impl Drop for BackendProcess {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub fn uvicorn_command(launch: &BackendLaunch, config: &ClientConfig) -> Command {
    let mut command = Command::new(&launch.python);
    command
        .args(["-m", "uvicorn", "main:app", "--host"])
        .arg(config.host())
        .arg("--port")
        .arg(config.port().to_string())
        .current_dir(&launch.backend_dir);
    command
}

const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Polls `host:port` until a TCP connection succeeds.
///
/// `still_alive` runs before every attempt; an error from it aborts the wait.
/// Wildcard bind addresses are probed on loopback.
pub fn wait_for_port(
    host: &str,
    port: u16,
    timeout: Duration,
    mut still_alive: impl FnMut() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let host = match host {
        "0.0.0.0" => "127.0.0.1",
        "::" | "[::]" => "::1",
        other => other,
    };
    let deadline = Instant::now() + timeout;
    loop {
        still_alive()?;
        let connected = (host, port)
            .to_socket_addrs()
            .with_context(|| format!("Cannot resolve backend host {host:?}"))?
            .any(|addr| TcpStream::connect_timeout(&addr, READY_POLL_INTERVAL).is_ok());
        if connected {
            return Ok(());
        }
        if Instant::now() >= deadline {
            bail!("Backend at {host}:{port} did not accept connections within {timeout:?}");
        }
        tracing::debug!(host, port, "Waiting for backend");
        thread::sleep(READY_POLL_INTERVAL);
    }
}
