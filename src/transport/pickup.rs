use std::fs;
use std::path::{Path, PathBuf};

use lettre::{FileTransport, Message, Transport};
use tracing::debug;

use crate::error::{Error, Result};
use crate::transport::MailTransport;

/// Pickup-directory implementation of [`MailTransport`].
///
/// Writes each message, fully encoded, into a directory that a host mail
/// facility drains on its own schedule (an MTA maildrop or pickup
/// directory). There is no network handshake; a message counts as accepted
/// once the file is durably written.
pub struct PickupMailTransport {
    inner: FileTransport,
    dir: PathBuf,
}

impl PickupMailTransport {
    /// Creates the transport, establishing `dir` if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::Config(format!("cannot create pickup directory {}: {e}", dir.display()))
        })?;
        Ok(Self {
            inner: FileTransport::new(&dir),
            dir,
        })
    }

    /// The directory messages are dropped into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MailTransport for PickupMailTransport {
    fn deliver(&self, message: &Message, recipients: usize) -> Result<usize> {
        let id = self.inner.send(message).map_err(Error::transport)?;
        debug!("message {id:?} written to {}", self.dir.display());
        Ok(recipients)
    }
}
