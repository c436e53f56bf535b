//! Message composition: the fluent [`Mailer`] and the pieces it accumulates.

mod attachment;
mod builder;
mod inline;
mod recipients;

pub use attachment::Attachment;
pub use builder::{Body, Mailer};
pub use inline::ContentId;
pub use recipients::IntoRecipients;
