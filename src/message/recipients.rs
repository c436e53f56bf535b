use lettre::message::Mailbox;

use crate::error::{Error, Result};

/// Recipient input accepted by the [`Mailer`] recipient setters: one address
/// or an ordered sequence of addresses.
///
/// Implemented for `&str`, `String`, slices, vectors and arrays of either,
/// so all of these are valid:
///
/// ```
/// use mailsmith::message::IntoRecipients;
///
/// fn takes(r: impl IntoRecipients) -> Vec<String> { r.into_recipients() }
///
/// takes("solo@example.com");
/// takes(vec!["a@example.com", "b@example.com"]);
/// takes(["a@example.com".to_string(), "b@example.com".to_string()]);
/// ```
///
/// [`Mailer`]: crate::message::Mailer
pub trait IntoRecipients {
    /// Flattens the input into address strings, order preserved.
    fn into_recipients(self) -> Vec<String>;
}

impl IntoRecipients for &str {
    fn into_recipients(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoRecipients for String {
    fn into_recipients(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoRecipients for &String {
    fn into_recipients(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoRecipients for Vec<&str> {
    fn into_recipients(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoRecipients for Vec<String> {
    fn into_recipients(self) -> Vec<String> {
        self
    }
}

impl IntoRecipients for &[&str] {
    fn into_recipients(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoRecipients for &[String] {
    fn into_recipients(self) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> IntoRecipients for [&str; N] {
    fn into_recipients(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoRecipients for [String; N] {
    fn into_recipients(self) -> Vec<String> {
        self.into_iter().collect()
    }
}

/// Validates every address, failing on the first invalid one.
///
/// All-or-nothing: the caller only swaps its stored list in when the whole
/// input parsed, which is what makes the recipient setters atomic.
pub(crate) fn parse_mailboxes(addresses: Vec<String>) -> Result<Vec<Mailbox>> {
    addresses
        .into_iter()
        .map(|address| {
            address
                .parse::<Mailbox>()
                .map_err(|source| Error::InvalidRecipient { address, source })
        })
        .collect()
}
