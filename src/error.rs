use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while composing or sending a message.
///
/// The taxonomy distinguishes *configuration and I/O failures* (every variant
/// below) from *delivery outcome*, which is never an error: [`Mailer::send`]
/// reports how many recipients the transport accepted via its `Ok` value, and
/// `Ok(0)` means the transport rejected the whole message after it was
/// attempted. Callers that need to tell "could not attempt the send" apart
/// from "attempted, zero accepted" match on `Err` vs `Ok(0)`.
///
/// [`Mailer::send`]: crate::message::Mailer::send
#[derive(Debug, Error)]
pub enum Error {
    /// A recipient address failed syntactic validation.
    ///
    /// Raised synchronously by the recipient setters; the call is rejected
    /// as a whole and no prior recipient state is modified.
    #[error("'{address}' is not a valid email address")]
    InvalidRecipient {
        /// The offending input, verbatim.
        address: String,
        /// Parser detail from the underlying mail library.
        #[source]
        source: lettre::address::AddressError,
    },

    /// An inline-image path did not exist (or could not be read) at the time
    /// it was embedded.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// An attachment registered earlier could not be turned into message
    /// content at send time: the file was unreadable, or no content type was
    /// given and none could be inferred from its extension.
    #[error("cannot attach {}: {reason}", .path.display())]
    AttachmentRead {
        /// The attachment path as registered.
        path: PathBuf,
        /// Human-readable cause (I/O error text or inference failure).
        reason: String,
    },

    /// Template lookup or rendering failed.
    #[error("template rendering failed")]
    TemplateRender(#[from] tera::Error),

    /// The transport could not attempt delivery: connection refused, TLS
    /// handshake failure, authentication rejected, local submission program
    /// missing, pickup directory unwritable.
    #[error("mail transport failure: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// `send()` was called with no recipients configured.
    #[error("no recipients configured")]
    NoRecipients,

    /// Structurally invalid configuration: unparseable sender address,
    /// invalid SMTP relay host, missing environment variables.
    #[error("invalid mailer configuration: {0}")]
    Config(String),

    /// The mail library rejected the assembled message (e.g. a missing
    /// mandatory header). Not expected for messages built through [`Mailer`].
    ///
    /// [`Mailer`]: crate::message::Mailer
    #[error("message assembly failed")]
    Assembly(#[from] lettre::error::Error),
}

impl Error {
    /// Wraps a transport-library error into [`Error::Transport`].
    pub(crate) fn transport<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(source))
    }

    /// Builds an [`Error::AttachmentRead`] for `path` with the given cause.
    pub(crate) fn attachment_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::AttachmentRead {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
