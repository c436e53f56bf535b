use std::fmt;

/// Authentication material for the SMTP transport.
///
/// The password is write-only: it is consumed by the transport during
/// construction and is not readable through any public accessor. `Debug`
/// output redacts it, so a `Credentials` value can appear in logs without
/// leaking the secret.
///
/// Transports that do not authenticate (sendmail, pickup directory) take
/// [`Credentials::anonymous`].
///
/// # Example
/// ```
/// use mailsmith::transport::Credentials;
///
/// let creds = Credentials::new("robot@example.com", "hunter2");
/// assert_eq!(creds.username(), "robot@example.com");
/// assert!(!format!("{creds:?}").contains("hunter2"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials for an authenticated transport.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Empty credentials for transports that perform no authentication.
    pub fn anonymous() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
        }
    }

    /// The account name presented to the server.
    pub fn username(&self) -> &str {
        &self.username
    }

    // The password never crosses the crate boundary.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
