use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::registry::FixtureRegistry;
use crate::{Error, Result};

enum Command {
    Invoke(String, serde_json::Value, oneshot::Sender<Result<String>>),
    Names(oneshot::Sender<Vec<String>>),
    Close(oneshot::Sender<()>),
}

/// An async-friendly fixture host backed by a dedicated worker thread.
///
/// The worker thread owns the [`FixtureRegistry`] and executes commands sent
/// from async tasks, so callers get an async interface without the registry
/// needing to be shared across threads. Handles are cheap to clone; all
/// clones talk to the same worker.
#[derive(Clone)]
pub struct Harness {
    cmd_tx: Sender<Command>,
}

impl Harness {
    /// Spawn the worker thread and hand it the registry.
    pub fn spawn(registry: FixtureRegistry) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Invoke(fixture, props, resp) => {
                        let res = registry.invoke(&fixture, props);
                        let _ = resp.send(res);
                    }
                    Command::Names(resp) => {
                        let _ = resp.send(registry.names());
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(());
                        break;
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    /// Render a registered fixture with the given JSON props.
    pub async fn invoke(&self, fixture: &str, props: serde_json::Value) -> Result<String> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .cmd_tx
            .send(Command::Invoke(fixture.to_string(), props, tx));
        rx.await
            .map_err(|e| Error::Other(format!("Invoke canceled: {}", e)))?
    }

    /// List the fixture names the worker knows, sorted.
    pub async fn names(&self) -> Result<Vec<String>> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Names(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Names canceled: {}", e)))
    }

    /// Shut down the worker thread. Later calls on surviving clones fail
    /// with [`Error::Other`].
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))
    }
}
