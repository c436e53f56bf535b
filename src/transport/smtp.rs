use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::transport::{Credentials, MailTransport};

/// Authenticated SMTP implementation of [`MailTransport`].
///
/// ## Responsibilities
///
/// - Connects to the configured relay over STARTTLS and authenticates with
///   the supplied [`Credentials`]
/// - Submits the assembled message and maps the outcome onto the crate's
///   delivery contract
///
/// ## Outcome mapping
///
/// - connection, TLS or authentication failure → [`Error::Transport`]
/// - server rejects the transaction after it was attempted → `Ok(0)`
/// - server accepts → `Ok(recipients)`
///
/// The relay's reachability is *not* probed at construction time; only the
/// structural validity of the host name is checked.
pub struct SmtpMailTransport {
    mailer: SmtpTransport,
    host: String,
}

impl SmtpMailTransport {
    /// Builds the transport for `host:port` with the given credentials.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the relay host is not a valid host
    /// name.
    pub fn new(host: &str, port: u16, credentials: Credentials) -> Result<Self> {
        info!(
            "SMTP transport: host={} port={} user={}",
            host,
            port,
            credentials.username()
        );

        let creds = SmtpCredentials::new(
            credentials.username().to_string(),
            credentials.password().to_string(),
        );

        let mailer = SmtpTransport::starttls_relay(host)
            .map_err(|e| Error::Config(format!("invalid relay host '{host}': {e}")))?
            .port(port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            host: host.to_string(),
        })
    }
}

impl MailTransport for SmtpMailTransport {
    fn deliver(&self, message: &Message, recipients: usize) -> Result<usize> {
        // Surfaces unreachable-host and rejected-credentials conditions as
        // transport failures before the message transaction starts. A server
        // that answers the probe but rejects the message afterwards is a
        // delivery outcome, not a failure.
        match self.mailer.test_connection() {
            Ok(true) => {}
            Ok(false) => {
                return Err(Error::Transport(
                    format!("SMTP relay '{}' refused the connection check", self.host).into(),
                ));
            }
            Err(e) => return Err(Error::transport(e)),
        }

        match self.mailer.send(message) {
            Ok(response) => {
                info!("SMTP accepted message for {recipients} recipient(s): {response:?}");
                Ok(recipients)
            }
            Err(e) if e.is_permanent() || e.is_transient() => {
                warn!("SMTP relay '{}' rejected the message: {e}", self.host);
                Ok(0)
            }
            Err(e) => Err(Error::transport(e)),
        }
    }
}
