//! Delivery channels for assembled messages.
//!
//! The [`MailTransport`] trait is the seam between message composition and
//! the wire: the builder hands it a fully assembled [`Message`] and gets back
//! the number of recipients the channel accepted. Three strategies ship with
//! the crate, selected once at construction via [`TransportKind`]:
//!
//! - [`SendmailMailTransport`]: the operating system's local submission
//!   program (`sendmail -bs` compatible).
//! - [`SmtpMailTransport`]: authenticated SMTP over STARTTLS.
//! - [`PickupMailTransport`]: a host pickup/maildrop directory, no network
//!   handshake.
//!
//! All wire encoding (SMTP dialogue, MIME framing) is delegated to `lettre`;
//! this module only adapts outcomes onto the crate's error taxonomy.

mod credentials;
mod pickup;
mod sendmail;
mod smtp;

use std::path::PathBuf;

use lettre::Message;

pub use credentials::Credentials;
pub use pickup::PickupMailTransport;
pub use sendmail::SendmailMailTransport;
pub use smtp::SmtpMailTransport;

use crate::error::Result;
use crate::message::ContentId;

/// Which delivery channel a [`Mailer`](crate::message::Mailer) uses.
///
/// Chosen at construction time and never switched mid-lifetime. The choice
/// does not change the mailer's public contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    /// Local submission through a `sendmail`-compatible program.
    /// No credentials are used.
    Sendmail,
    /// Authenticated SMTP over an encrypted channel.
    Smtp {
        /// Relay host name.
        host: String,
        /// Relay port, typically 587.
        port: u16,
    },
    /// Messages are written fully encoded into a pickup directory that a
    /// host mail facility drains. No network handshake.
    Pickup {
        /// Directory the encoded messages are dropped into.
        dir: PathBuf,
    },
}

/// A delivery channel for assembled messages.
///
/// Implementations are handed the final [`Message`] together with the number
/// of envelope recipients, and report how many of them were accepted.
///
/// ## Outcome vs. failure
///
/// - `Ok(n)`: the channel accepted the message for `n` recipients; `Ok(0)`
///   means it was attempted and rejected outright.
/// - `Err(_)`: delivery could not be attempted at all (connectivity,
///   authentication, missing submission program).
///
/// Implementations must be `Send + Sync` so a mailer can be moved across
/// threads, even though a single mailer is never shared concurrently.
pub trait MailTransport: Send + Sync {
    /// Hands the message to the channel and reports the accepted-recipient
    /// count.
    fn deliver(&self, message: &Message, recipients: usize) -> Result<usize>;

    /// Registers image bytes for inline embedding and mints the content-ID
    /// under which the message body may reference them (`cid:` scheme).
    ///
    /// The bytes themselves travel inside the assembled message; the channel
    /// only issues the identifier.
    fn embed(&self, bytes: &[u8]) -> ContentId {
        let _ = bytes;
        ContentId::generate()
    }
}

/// Builds the transport for `kind`, failing fast on structurally invalid
/// configuration. Host reachability is deliberately not checked here.
pub(crate) fn resolve(
    kind: &TransportKind,
    credentials: &Credentials,
) -> Result<Box<dyn MailTransport>> {
    match kind {
        TransportKind::Sendmail => Ok(Box::new(SendmailMailTransport::new())),
        TransportKind::Smtp { host, port } => Ok(Box::new(SmtpMailTransport::new(
            host,
            *port,
            credentials.clone(),
        )?)),
        TransportKind::Pickup { dir } => Ok(Box::new(PickupMailTransport::new(dir)?)),
    }
}
