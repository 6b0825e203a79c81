// domain/user.rs - Identity values: usernames, session tokens and the credential pairing them

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("invalid username: must not be empty")]
    Empty,
}

/// Ownership key for tasks and timetables. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(name: impl Into<String>) -> Result<Self, UsernameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Username::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Opaque session identifier. Format policy belongs to whoever issues it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are bearer secrets; keep them out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

/// One login session: the binding between a token and its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    username: Username,
    token: Token,
}

impl Credential {
    pub fn new(username: Username, token: Token) -> Self {
        Self { username, token }
    }

    /// Rebuild a credential from raw stored columns, re-checking the username invariant.
    pub fn from_stored(username: String, token: String) -> Result<Self, UsernameError> {
        Ok(Self::new(Username::new(username)?, Token::new(token)))
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn into_username(self) -> Username {
        self.username
    }
}
