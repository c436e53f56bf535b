use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use lettre::message::header::ContentType;
use lettre::message::{Attachment as LettreAttachment, Mailbox, Message, MultiPart, SinglePart};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::message::attachment::Attachment;
use crate::message::inline::{ContentId, InlineImage};
use crate::message::recipients::{IntoRecipients, parse_mailboxes};
use crate::template::{DEFAULT_TEMPLATE_DIR, TemplateRenderer, TeraRenderer};
use crate::transport::{self, Credentials, MailTransport, TransportKind};

/// The active body of a message: text paired with its MIME content type.
#[derive(Debug, Clone)]
pub struct Body {
    text: String,
    content_type: ContentType,
}

impl Body {
    /// The body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The MIME type the text will be tagged with.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }
}

/// Fluent accumulator for one outbound email message.
///
/// A `Mailer` is constructed once per message with its delivery channel and
/// sender fixed, configured through chained calls, and consumed by
/// [`send`](Mailer::send):
///
/// ```no_run
/// use mailsmith::message::Mailer;
/// use mailsmith::transport::{Credentials, TransportKind};
///
/// # fn main() -> mailsmith::Result<()> {
/// let mut mailer = Mailer::new(
///     TransportKind::Sendmail,
///     "robot@example.com",
///     Credentials::anonymous(),
/// )?;
/// let accepted = mailer
///     .to(["mery@example.com", "astrid@example.com"])?
///     .subject("Weekly digest")
///     .html("<b>hello</b>")
///     .send()?;
/// assert_eq!(accepted, 2);
/// # Ok(())
/// # }
/// ```
///
/// ## Failure signalling
///
/// Configuration and I/O problems surface as [`Error`]; the delivery outcome
/// does not. `send` returns the number of recipients the transport accepted,
/// and `Ok(0)` means the message was attempted and rejected outright, a
/// result the caller must check, not an error.
///
/// ## Reuse
///
/// One mailer composes one message. After a send the accumulated state is
/// still in place, but the type makes no promise that a second `send`
/// produces a meaningful result; build a fresh mailer per message.
pub struct Mailer {
    transport: Box<dyn MailTransport>,
    kind: Option<TransportKind>,
    sender: Mailbox,
    to: Vec<Mailbox>,
    cc: Vec<Mailbox>,
    bcc: Vec<Mailbox>,
    subject: Option<String>,
    body: Option<Body>,
    attachments: Vec<Attachment>,
    inline_images: Vec<InlineImage>,
}

impl Mailer {
    /// Creates a mailer with the given delivery channel and sender address.
    ///
    /// The transport is resolved eagerly: structurally invalid configuration
    /// (unparseable sender, bad relay host, uncreatable pickup directory)
    /// fails here. Whether an SMTP relay is actually reachable is only
    /// discovered at send time.
    ///
    /// # Errors
    /// Returns [`Error::Config`] on invalid sender or transport
    /// configuration.
    pub fn new(kind: TransportKind, sender: &str, credentials: Credentials) -> Result<Self> {
        let transport = transport::resolve(&kind, &credentials)?;
        let sender = parse_sender(sender)?;
        info!("mailer ready: transport={kind:?} sender={sender}");
        Ok(Self::assemble(transport, Some(kind), sender))
    }

    /// Local-submission mailer; no credentials involved.
    pub fn sendmail(sender: &str) -> Result<Self> {
        Self::new(TransportKind::Sendmail, sender, Credentials::anonymous())
    }

    /// Authenticated SMTP mailer for `host:port`.
    pub fn smtp(host: &str, port: u16, sender: &str, credentials: Credentials) -> Result<Self> {
        Self::new(
            TransportKind::Smtp {
                host: host.to_string(),
                port,
            },
            sender,
            credentials,
        )
    }

    /// Pickup-directory mailer writing into `dir`.
    pub fn pickup(dir: impl Into<PathBuf>, sender: &str) -> Result<Self> {
        Self::new(
            TransportKind::Pickup { dir: dir.into() },
            sender,
            Credentials::anonymous(),
        )
    }

    /// Creates a mailer over a caller-supplied delivery channel.
    ///
    /// The seam for tests and for channels this crate does not ship.
    pub fn with_transport(transport: Box<dyn MailTransport>, sender: &str) -> Result<Self> {
        let sender = parse_sender(sender)?;
        Ok(Self::assemble(transport, None, sender))
    }

    fn assemble(
        transport: Box<dyn MailTransport>,
        kind: Option<TransportKind>,
        sender: Mailbox,
    ) -> Self {
        Self {
            transport,
            kind,
            sender,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: None,
            body: None,
            attachments: Vec::new(),
            inline_images: Vec::new(),
        }
    }

    /// Sets the primary recipients, replacing any previous list.
    ///
    /// Accepts one address or an ordered sequence (see [`IntoRecipients`]).
    /// Validation is all-or-nothing: the first syntactically invalid address
    /// fails the call with [`Error::InvalidRecipient`] and the previously
    /// stored list stays untouched.
    pub fn to(&mut self, recipients: impl IntoRecipients) -> Result<&mut Self> {
        self.to = parse_mailboxes(recipients.into_recipients())?;
        Ok(self)
    }

    /// Sets the carbon-copy recipients; same validation and atomicity as
    /// [`to`](Mailer::to).
    pub fn cc(&mut self, recipients: impl IntoRecipients) -> Result<&mut Self> {
        self.cc = parse_mailboxes(recipients.into_recipients())?;
        Ok(self)
    }

    /// Sets the blind-carbon-copy recipients; same validation and atomicity
    /// as [`to`](Mailer::to).
    pub fn bcc(&mut self, recipients: impl IntoRecipients) -> Result<&mut Self> {
        self.bcc = parse_mailboxes(recipients.into_recipients())?;
        Ok(self)
    }

    /// Sets the subject line, verbatim. Last call wins. CR/LF characters are
    /// stripped at assembly time so a subject can never smuggle extra
    /// headers.
    pub fn subject(&mut self, text: impl Into<String>) -> &mut Self {
        self.subject = Some(text.into());
        self
    }

    /// Sets the body text with an explicit MIME type. Last call wins,
    /// superseding any template-rendered body.
    pub fn body(&mut self, text: impl Into<String>, content_type: ContentType) -> &mut Self {
        self.body = Some(Body {
            text: text.into(),
            content_type,
        });
        self
    }

    /// Sets an HTML body (`text/html`).
    pub fn html(&mut self, text: impl Into<String>) -> &mut Self {
        self.body(text, ContentType::TEXT_HTML)
    }

    /// Sets a plain-text body (`text/plain`).
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.body(text, ContentType::TEXT_PLAIN)
    }

    /// Renders `name` from the default `templates/` directory and stores the
    /// result as an HTML body. See
    /// [`body_from_template_in`](Mailer::body_from_template_in).
    pub fn body_from_template(&mut self, name: &str, vars: impl Serialize) -> Result<&mut Self> {
        self.body_from_template_in(DEFAULT_TEMPLATE_DIR, name, vars)
    }

    /// Renders `name` from `search_path` with `vars` and stores the result
    /// as an HTML body. Last body setter wins, so a later [`body`] call
    /// replaces the rendered text.
    ///
    /// Rendering goes through the filesystem-backed [`TeraRenderer`], which
    /// keeps a render cache under `search_path/cache/`.
    ///
    /// # Errors
    /// [`Error::TemplateRender`] on a missing template, template syntax
    /// error, or a variable the template needs but `vars` lacks.
    ///
    /// [`body`]: Mailer::body
    pub fn body_from_template_in(
        &mut self,
        search_path: impl AsRef<Path>,
        name: &str,
        vars: impl Serialize,
    ) -> Result<&mut Self> {
        let renderer = TeraRenderer::new(search_path)?;
        self.body_from_template_with(&renderer, name, vars)
    }

    /// Renders through a caller-supplied [`TemplateRenderer`].
    pub fn body_from_template_with(
        &mut self,
        renderer: &dyn TemplateRenderer,
        name: &str,
        vars: impl Serialize,
    ) -> Result<&mut Self> {
        let vars = serde_json::to_value(vars).map_err(|e| Error::TemplateRender(tera::Error::msg(e)))?;
        let rendered = renderer.render(name, &vars)?;
        Ok(self.html(rendered))
    }

    /// Registers a file for attachment, content type inferred from its
    /// extension at send time.
    ///
    /// The file is not touched now: a path that cannot be read, or whose
    /// extension defeats inference, fails the eventual [`send`](Mailer::send)
    /// with [`Error::AttachmentRead`].
    pub fn attach(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.attachments.push(Attachment::new(path));
        self
    }

    /// Registers a file for attachment with an explicit content type.
    pub fn attach_with_type(
        &mut self,
        path: impl Into<PathBuf>,
        content_type: impl Into<String>,
    ) -> &mut Self {
        self.attachments
            .push(Attachment::with_content_type(path, content_type));
        self
    }

    /// Embeds an image for inline display, named after its file name.
    ///
    /// Unlike [`attach`](Mailer::attach) this validates eagerly: a missing
    /// file fails with [`Error::FileNotFound`] here and now, before any
    /// transport interaction. On success the transport's embedding facility
    /// mints a [`ContentId`]; read it back with
    /// [`inline_image_cid`](Mailer::inline_image_cid) and reference it from
    /// HTML markup as `cid:<id>`.
    pub fn embed_inline_image(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::FileNotFound {
                path: path.to_path_buf(),
            })?;
        self.embed_inline_image_named(path, name)
    }

    /// Embeds an image for inline display under an explicit name. A second
    /// registration under the same name replaces the first.
    pub fn embed_inline_image_named(
        &mut self,
        path: impl AsRef<Path>,
        name: impl Into<String>,
    ) -> Result<&mut Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|_| Error::FileNotFound {
            path: path.to_path_buf(),
        })?;

        // The guess table only yields parseable types; the fallback covers
        // extension-less paths.
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .and_then(|raw| raw.parse::<ContentType>().ok())
            .unwrap_or(ContentType::TEXT_PLAIN);

        let content_id = self.transport.embed(&bytes);
        let name = name.into();
        debug!(
            "embedded {} as inline image '{name}' ({content_id})",
            path.display()
        );

        self.inline_images.retain(|img| img.name != name);
        self.inline_images.push(InlineImage {
            name,
            content_id,
            content_type,
            bytes,
        });
        Ok(self)
    }

    /// The sender fixed at construction.
    pub fn sender(&self) -> &Mailbox {
        &self.sender
    }

    /// The currently active body, if one has been set. Only ever one: direct
    /// and template-rendered bodies replace each other.
    pub fn body_content(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// The current primary recipient list.
    pub fn recipients(&self) -> &[Mailbox] {
        &self.to
    }

    /// The attachments registered so far, in insertion order.
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// The content-ID minted for the inline image registered under `name`.
    pub fn inline_image_cid(&self, name: &str) -> Option<&ContentId> {
        self.inline_images
            .iter()
            .find(|img| img.name == name)
            .map(|img| &img.content_id)
    }

    /// All inline-image bindings, in registration order.
    pub fn inline_images(&self) -> impl Iterator<Item = (&str, &ContentId)> {
        self.inline_images
            .iter()
            .map(|img| (img.name.as_str(), &img.content_id))
    }

    /// Assembles the message and hands it to the transport.
    ///
    /// Returns the number of recipients the transport accepted. `Ok(0)`
    /// means total delivery failure after a completed attempt. Callers must
    /// check it; it is deliberately not an error.
    ///
    /// # Errors
    /// - [`Error::NoRecipients`] when no recipients are configured
    /// - [`Error::AttachmentRead`] when a registered attachment cannot be
    ///   resolved
    /// - [`Error::Transport`] when the channel cannot attempt delivery
    pub fn send(&mut self) -> Result<usize> {
        let recipient_count = self.to.len() + self.cc.len() + self.bcc.len();
        if recipient_count == 0 {
            return Err(Error::NoRecipients);
        }

        let message = self.build_message()?;
        let accepted = self.transport.deliver(&message, recipient_count)?;
        info!("send complete: {accepted}/{recipient_count} recipient(s) accepted");
        Ok(accepted)
    }

    /// Builds the final MIME structure. Separated from [`send`](Mailer::send)
    /// so assembly can be unit-tested without any delivery channel I/O.
    pub(crate) fn build_message(&self) -> Result<Message> {
        let mut subject = self.subject.clone().unwrap_or_default();
        subject.retain(|c| c != '\r' && c != '\n');

        let mut builder = Message::builder().from(self.sender.clone()).subject(subject);
        for to in &self.to {
            builder = builder.to(to.clone());
        }
        for cc in &self.cc {
            builder = builder.cc(cc.clone());
        }
        for bcc in &self.bcc {
            builder = builder.bcc(bcc.clone());
        }

        let body = self.body.clone().unwrap_or_else(|| Body {
            text: String::new(),
            content_type: ContentType::TEXT_PLAIN,
        });
        let body_part = SinglePart::builder()
            .header(body.content_type)
            .body(body.text);

        let message = match (self.inline_images.is_empty(), self.attachments.is_empty()) {
            (true, true) => builder.singlepart(body_part)?,
            (false, true) => builder.multipart(self.related_body(body_part))?,
            (true, false) => {
                let mut mixed = MultiPart::mixed().singlepart(body_part);
                for attachment in &self.attachments {
                    mixed = mixed.singlepart(attachment_part(attachment)?);
                }
                builder.multipart(mixed)?
            }
            (false, false) => {
                let mut mixed = MultiPart::mixed().multipart(self.related_body(body_part));
                for attachment in &self.attachments {
                    mixed = mixed.singlepart(attachment_part(attachment)?);
                }
                builder.multipart(mixed)?
            }
        };

        Ok(message)
    }

    /// Wraps the body and every inline image into `multipart/related`.
    fn related_body(&self, body_part: SinglePart) -> MultiPart {
        let mut related = MultiPart::related().singlepart(body_part);
        for img in &self.inline_images {
            let part = LettreAttachment::new_inline(img.content_id.as_str().to_string())
                .body(img.bytes.clone(), img.content_type.clone());
            related = related.singlepart(part);
        }
        related
    }
}

fn parse_sender(sender: &str) -> Result<Mailbox> {
    sender
        .parse::<Mailbox>()
        .map_err(|e| Error::Config(format!("invalid sender address '{sender}': {e}")))
}

fn attachment_part(attachment: &Attachment) -> Result<SinglePart> {
    let resolved = attachment.resolve()?;
    Ok(LettreAttachment::new(resolved.filename).body(resolved.bytes, resolved.content_type))
}

impl fmt::Debug for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailer")
            .field("kind", &self.kind)
            .field("sender", &self.sender)
            .field("to", &self.to)
            .field("cc", &self.cc)
            .field("bcc", &self.bcc)
            .field("subject", &self.subject)
            .field("attachments", &self.attachments)
            .field("inline_images", &self.inline_images)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Delivery-channel double: records every assembled message and answers
    /// with a configurable accepted count. Clones share the log, so a test
    /// keeps one clone while the mailer owns the other.
    #[derive(Clone)]
    struct RecordingTransport {
        accept: Option<usize>,
        delivered: Arc<Mutex<Vec<(String, usize)>>>,
    }

    impl RecordingTransport {
        fn accepting_all() -> Self {
            Self {
                accept: None,
                delivered: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn rejecting_all() -> Self {
            Self {
                accept: Some(0),
                delivered: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn log(&self) -> Vec<(String, usize)> {
            self.delivered.lock().unwrap().clone()
        }
    }

    impl MailTransport for RecordingTransport {
        fn deliver(&self, message: &Message, recipients: usize) -> Result<usize> {
            let raw = String::from_utf8_lossy(&message.formatted()).into_owned();
            self.delivered.lock().unwrap().push((raw, recipients));
            Ok(self.accept.unwrap_or(recipients))
        }
    }

    fn mailer_with(transport: RecordingTransport) -> (Mailer, RecordingTransport) {
        let log = transport.clone();
        let mailer = Mailer::with_transport(Box::new(transport), "robot@example.com")
            .expect("mailer");
        (mailer, log)
    }

    fn delivered(log: &RecordingTransport) -> Vec<(String, usize)> {
        log.log()
    }

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mailsmith-{}", uuid::Uuid::new_v4().simple()));
        fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    #[test]
    fn happy_path_returns_the_recipient_count() {
        let (mut mailer, _) = mailer_with(RecordingTransport::accepting_all());
        let accepted = mailer
            .to("a@example.com")
            .unwrap()
            .subject("Hi")
            .html("<b>hello</b>")
            .send()
            .expect("send");
        assert_eq!(accepted, 1);
    }

    #[test]
    fn invalid_recipient_rejects_atomically() {
        let (mut mailer, _) = mailer_with(RecordingTransport::accepting_all());

        mailer.to(["a@example.com", "b@example.com"]).unwrap();
        let before: Vec<String> = mailer.recipients().iter().map(|m| m.to_string()).collect();

        let err = mailer
            .to(vec!["c@example.com", "not-an-email"])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRecipient { .. }));

        let after: Vec<String> = mailer.recipients().iter().map(|m| m.to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn invalid_recipient_on_empty_mailer_leaves_list_empty() {
        let (mut mailer, _) = mailer_with(RecordingTransport::accepting_all());
        assert!(mailer.to("not-an-email").is_err());
        assert!(mailer.recipients().is_empty());
    }

    #[test]
    fn recipient_order_is_preserved() {
        let (mut mailer, _) = mailer_with(RecordingTransport::accepting_all());
        mailer
            .to(["c@example.com", "a@example.com", "b@example.com"])
            .unwrap();
        let emails: Vec<String> = mailer
            .recipients()
            .iter()
            .map(|m| m.email.to_string())
            .collect();
        assert_eq!(emails, ["c@example.com", "a@example.com", "b@example.com"]);
    }

    #[test]
    fn send_without_recipients_fails_fast() {
        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.subject("Hi").text("body");
        assert!(matches!(mailer.send(), Err(Error::NoRecipients)));
        assert!(delivered(&log).is_empty());
    }

    #[test]
    fn zero_accepted_is_a_result_not_an_error() {
        let (mut mailer, _) = mailer_with(RecordingTransport::rejecting_all());
        mailer.to("a@example.com").unwrap().text("body");
        assert_eq!(mailer.send().expect("send attempted"), 0);
    }

    #[test]
    fn last_body_setter_wins() {
        let dir = scratch_dir();
        fs::write(dir.join("welcome.html"), "<p>Hello {{ name }}</p>").unwrap();

        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap();
        mailer
            .body_from_template_in(&dir, "welcome.html", serde_json::json!({"name": "Mery"}))
            .unwrap();
        mailer.text("plain wins");

        let body = mailer.body_content().expect("body set");
        assert_eq!(body.text(), "plain wins");
        assert!(format!("{:?}", body.content_type()).contains("plain"));

        mailer.send().unwrap();

        let (raw, _) = &delivered(&log)[0];
        assert!(raw.contains("plain wins"));
        assert!(!raw.contains("Hello Mery"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn template_body_replaces_direct_body() {
        let dir = scratch_dir();
        fs::write(dir.join("welcome.html"), "<p>Hello {{ name }}</p>").unwrap();

        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap();
        mailer.text("superseded");
        mailer
            .body_from_template_in(&dir, "welcome.html", serde_json::json!({"name": "Mery"}))
            .unwrap();
        mailer.send().unwrap();

        let (raw, _) = &delivered(&log)[0];
        assert!(raw.contains("Hello Mery"));
        assert!(!raw.contains("superseded"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn attachments_appear_in_insertion_order() {
        let dir = scratch_dir();
        let first = dir.join("first.txt");
        let second = dir.join("second.txt");
        fs::write(&first, b"first bytes").unwrap();
        fs::write(&second, b"second bytes").unwrap();

        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap().text("body");
        mailer.attach(&first).attach(&second);
        assert_eq!(mailer.attachments().len(), 2);
        mailer.send().unwrap();

        let (raw, _) = &delivered(&log)[0];
        assert!(raw.contains("multipart/mixed"));
        let pos_first = raw.find("first.txt").expect("first attachment");
        let pos_second = raw.find("second.txt").expect("second attachment");
        assert!(pos_first < pos_second);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_attachment_extension_fails_only_at_send() {
        let dir = scratch_dir();
        let odd = dir.join("blob.zqx");
        fs::write(&odd, b"???").unwrap();

        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap().text("body");
        mailer.attach(&odd);

        assert!(matches!(mailer.send(), Err(Error::AttachmentRead { .. })));
        assert!(delivered(&log).is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_inline_image_fails_before_any_delivery() {
        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap().html("<img>");

        let err = mailer
            .embed_inline_image("/definitely/not/here.png")
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(mailer.inline_images().count(), 0);
        assert!(delivered(&log).is_empty());
    }

    #[test]
    fn inline_image_gets_a_cid_and_a_related_part() {
        let dir = scratch_dir();
        let logo = dir.join("logo.png");
        fs::write(&logo, b"\x89PNG fake").unwrap();

        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap();
        mailer.embed_inline_image(&logo).unwrap();

        let cid = mailer
            .inline_image_cid("logo.png")
            .expect("cid registered")
            .clone();
        mailer.html(format!("<img src=\"{}\">", cid.url()));
        mailer.send().unwrap();

        let (raw, _) = &delivered(&log)[0];
        assert!(raw.contains("multipart/related"));
        assert!(raw.contains(cid.as_str()));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn subject_cannot_inject_headers() {
        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer
            .to("a@example.com")
            .unwrap()
            .subject("Hi\r\nBcc: sneaky@example.com")
            .text("body");
        mailer.send().unwrap();

        let (raw, _) = &delivered(&log)[0];
        assert!(raw.contains("Subject: HiBcc: sneaky@example.com"));
        assert!(!raw.contains("\r\nBcc: sneaky@example.com"));
    }

    #[test]
    fn cc_and_bcc_count_toward_the_envelope() {
        let (mut mailer, log) = mailer_with(RecordingTransport::accepting_all());
        mailer.to("a@example.com").unwrap();
        mailer.cc("b@example.com").unwrap();
        mailer.bcc("c@example.com").unwrap();
        mailer.text("body");

        assert_eq!(mailer.send().unwrap(), 3);
        let (_, count) = &delivered(&log)[0];
        assert_eq!(*count, 3);
    }

    #[test]
    fn construction_rejects_an_invalid_sender() {
        let result = Mailer::with_transport(
            Box::new(RecordingTransport::accepting_all()),
            "not a sender",
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
