use std::fmt::{self, Display, Formatter};

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// A username/password pair.
///
/// Nothing is validated or normalised: both strings are kept exactly as they
/// were given. The password is plain text; it is only wrapped in a `Secret`
/// so that `Debug` output (and therefore logs) never shows it.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    username: String,
    password: Secret<String>,
}

impl User {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

// Compares the plain passwords, `Secret` itself has no equality.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for User {}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.username.fmt(f)
    }
}
