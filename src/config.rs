use std::env;

use tracing::info;

use crate::error::{Error, Result};
use crate::message::Mailer;
use crate::transport::{Credentials, TransportKind};

/// SMTP mailer configuration loaded from environment variables.
///
/// Required:
/// - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
///   `SMTP_FROM_EMAIL`
///
/// Optional:
/// - `SMTP_FROM_NAME`: display name for the sender
///
/// There is deliberately no fallback sender or relay host; a missing
/// required variable is a configuration error.
#[derive(Clone, Debug)]
pub struct MailerConfig {
    /// SMTP server host name or IP address
    pub host: String,
    /// SMTP server port number
    pub port: u16,
    /// Username for SMTP authentication
    pub username: String,
    /// Password for SMTP authentication
    pub password: String,
    /// Sender email address
    pub from_email: String,
    /// Optional sender display name
    pub from_name: Option<String>,
}

impl MailerConfig {
    /// Creates a `MailerConfig` from environment variables.
    ///
    /// # Errors
    /// - When a required environment variable is missing
    /// - When `SMTP_PORT` cannot be parsed as a number
    pub fn from_env() -> Result<Self> {
        let host = require("SMTP_HOST")?;
        let port: u16 = require("SMTP_PORT")?
            .parse()
            .map_err(|_| Error::Config("SMTP_PORT parse error".into()))?;
        let username = require("SMTP_USERNAME")?;
        let password = require("SMTP_PASSWORD")?;
        let from_email = require("SMTP_FROM_EMAIL")?;
        let from_name = env::var("SMTP_FROM_NAME").ok();

        info!("mail config loaded: host={host} port={port} user={username}");

        Ok(Self {
            host,
            port,
            username,
            password,
            from_email,
            from_name,
        })
    }

    /// Builds an SMTP [`Mailer`] from this configuration.
    ///
    /// # Errors
    /// Propagates [`Error::Config`] for a structurally invalid host or
    /// sender address.
    pub fn into_mailer(self) -> Result<Mailer> {
        let sender = match &self.from_name {
            Some(name) => format!("{name} <{}>", self.from_email),
            None => self.from_email.clone(),
        };
        Mailer::new(
            TransportKind::Smtp {
                host: self.host,
                port: self.port,
            },
            &sender,
            Credentials::new(self.username, self.password),
        )
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{name} not set")))
}
