use serde::{Deserialize, Serialize};

/// Portal session material as captured by the browser side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub cookies: String,
    #[serde(default)]
    pub client_code: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, cookies: impl Into<String>, client_code: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            cookies: cookies.into(),
            client_code: client_code.into(),
        }
    }

    /// A token is the minimum the portal accepts.
    pub fn is_usable(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
