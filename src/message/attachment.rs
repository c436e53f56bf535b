use std::fs;
use std::path::{Path, PathBuf};

use lettre::message::header::ContentType;
use tracing::debug;

use crate::error::{Error, Result};

/// A file registered for attachment, by reference.
///
/// Registration is deliberately lazy: nothing on disk is touched until send
/// time, when [`resolve`](Attachment::resolve) reads the bytes and settles
/// the content type. A file that disappears (or turns out to have an
/// unrecognized extension) between registration and send surfaces as
/// [`Error::AttachmentRead`] from `send()`, not from `attach()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    path: PathBuf,
    content_type: Option<String>,
}

impl Attachment {
    /// References `path`, inferring the content type from its extension at
    /// send time.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content_type: None,
        }
    }

    /// References `path` with an explicit content type, bypassing inference.
    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: Some(content_type.into()),
        }
    }

    /// The path as registered.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The explicit content type, when one was given.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Reads the file and settles filename, content type and bytes.
    pub(crate) fn resolve(&self) -> Result<ResolvedAttachment> {
        let bytes = fs::read(&self.path)
            .map_err(|e| Error::attachment_read(&self.path, e.to_string()))?;

        let raw_type = match &self.content_type {
            Some(explicit) => explicit.clone(),
            None => infer_content_type(&self.path)?,
        };
        let content_type = raw_type.parse::<ContentType>().map_err(|_| {
            Error::attachment_read(&self.path, format!("invalid content type '{raw_type}'"))
        })?;

        let filename = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        debug!(
            "resolved attachment {} ({raw_type}, {} bytes)",
            self.path.display(),
            bytes.len()
        );

        Ok(ResolvedAttachment {
            filename,
            content_type,
            bytes,
        })
    }
}

/// An attachment after its bytes and metadata have been settled.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedAttachment {
    pub(crate) filename: String,
    pub(crate) content_type: ContentType,
    pub(crate) bytes: Vec<u8>,
}

/// Maps a file extension onto a MIME type, covering images, PDFs, archives
/// and the other well-known formats the guess table knows.
fn infer_content_type(path: &Path) -> Result<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(str::to_string)
        .ok_or_else(|| {
            Error::attachment_read(path, "cannot infer content type from extension")
        })
}
