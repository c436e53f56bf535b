//! # mailsmith
//!
//! A fluent builder for composing and sending email messages: recipients,
//! subject, plain or HTML or template-rendered bodies, file attachments and
//! inline (`cid:`-referenced) images, dispatched through a pluggable
//! transport (local `sendmail`, authenticated SMTP, or a pickup directory).
//!
//! SMTP and MIME wire encoding are delegated to [`lettre`]; template
//! rendering to [Tera](https://crates.io/crates/tera). This crate only does
//! the bookkeeping in between.
//!
//! ## Example
//!
//! ```no_run
//! use mailsmith::{Credentials, Mailer};
//!
//! fn main() -> mailsmith::Result<()> {
//!     let mut mailer = Mailer::smtp(
//!         "smtp.example.com",
//!         587,
//!         "Notifier <noreply@example.com>",
//!         Credentials::new("noreply@example.com", "secret"),
//!     )?;
//!
//!     let accepted = mailer
//!         .to(["mery@example.com", "astrid@example.com"])?
//!         .subject("Monthly report")
//!         .body_from_template("report.html", serde_json::json!({ "month": "May" }))?
//!         .attach("reports/may.pdf")
//!         .send()?;
//!
//!     // 0 accepted recipients is a result to check, not an error.
//!     assert!(accepted > 0);
//!     Ok(())
//! }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use lettre;
pub use serde_json;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod message;
pub mod template;
pub mod transport;

pub use config::MailerConfig;
pub use error::{Error, Result};
pub use message::{Attachment, Body, ContentId, IntoRecipients, Mailer};
pub use template::{TemplateRenderer, TeraRenderer};
pub use transport::{Credentials, MailTransport, TransportKind};
