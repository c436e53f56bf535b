use lettre::{Message, SendmailTransport, Transport};
use tracing::info;

use crate::error::{Error, Result};
use crate::transport::MailTransport;

/// Local-submission implementation of [`MailTransport`].
///
/// Hands the assembled message to a `sendmail`-compatible program on the
/// local host. No network credentials are involved; the local MTA either
/// accepts the whole message or the submission fails, so a partial
/// recipient count never occurs on this channel.
pub struct SendmailMailTransport {
    inner: SendmailTransport,
}

impl SendmailMailTransport {
    /// Uses the platform's default `sendmail` location.
    pub fn new() -> Self {
        Self {
            inner: SendmailTransport::new(),
        }
    }

    /// Uses an explicit submission command instead of the default path.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            inner: SendmailTransport::new_with_command(command.into()),
        }
    }
}

impl Default for SendmailMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MailTransport for SendmailMailTransport {
    fn deliver(&self, message: &Message, recipients: usize) -> Result<usize> {
        self.inner.send(message).map_err(Error::transport)?;
        info!("sendmail accepted message for {recipients} recipient(s)");
        Ok(recipients)
    }
}
