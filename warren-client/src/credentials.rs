use crate::{ClientError, ClientResult};
use std::fmt;

/// Who the upstream API should act for.
///
/// Passed explicitly to every outbound request instead of living in shared state, so one
/// process can talk to the upstream service on behalf of several users at once.
#[derive(Clone, Eq, PartialEq, Deserialize)]
pub struct Credentials {
    email: String,
    token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> ClientResult<Self> {
        let credentials = Self { email: email.into(), token: token.into() };
        credentials.validate()?;
        Ok(credentials)
    }

    pub fn email(&self) -> &str { &self.email }

    pub fn token(&self) -> &str { &self.token }

    /// Rejects values that would break out of a quoted header parameter
    pub fn validate(&self) -> ClientResult<()> {
        fn check(field: &'static str, value: &str) -> ClientResult<()> {
            if value.chars().any(|c| matches!(c, '"' | '\\' | '\r' | '\n')) {
                Err(ClientError::InvalidCredential(field))
            } else {
                Ok(())
            }
        }
        check("email", &self.email)?;
        check("token", &self.token)
    }

    /// `Token token="<token>", email="<email>"`
    pub fn authorization(&self) -> ClientResult<http::HeaderValue> {
        self.validate()?;
        let value = format!("Token token=\"{}\", email=\"{}\"", self.token, self.email);
        let mut value = http::HeaderValue::from_str(&value)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}
