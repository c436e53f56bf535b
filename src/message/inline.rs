use lettre::message::header::ContentType;
use uuid::Uuid;

/// Identifier of an inline message part, for `cid:` references (RFC 2392).
///
/// Minted by the transport's embedding facility when an image is embedded;
/// read back through [`Mailer::inline_image_cid`] and interpolated into HTML
/// markup via [`ContentId::url`].
///
/// [`Mailer::inline_image_cid`]: crate::message::Mailer::inline_image_cid
///
/// # Example
/// ```
/// use mailsmith::message::ContentId;
///
/// let cid = ContentId::generate();
/// assert!(cid.url().starts_with("cid:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentId(String);

impl ContentId {
    /// Mints a fresh, globally unique content-ID.
    pub fn generate() -> Self {
        Self(format!("{}@mailsmith", Uuid::new_v4().simple()))
    }

    /// The raw identifier, as it appears in the `Content-ID` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `cid:` URL to use in `src` attributes of the HTML body.
    pub fn url(&self) -> String {
        format!("cid:{}", self.0)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image embedded into the message body, keyed by a caller-visible name.
///
/// The bytes are read eagerly when the image is embedded; at send time they
/// become an inline part of a `multipart/related` body.
#[derive(Debug, Clone)]
pub(crate) struct InlineImage {
    pub(crate) name: String,
    pub(crate) content_id: ContentId,
    pub(crate) content_type: ContentType,
    pub(crate) bytes: Vec<u8>,
}
