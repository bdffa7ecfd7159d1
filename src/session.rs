//! Session identity
//!
//! One identifier is created when the process starts and travels unchanged with
//! every chat request until the process exits. Nothing is written to disk, so a
//! restart always yields a fresh session.

use std::fmt;

use uuid::Uuid;

/// Opaque per-process token correlating chat requests on the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random identifier in canonical UUID v4 form
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-lifetime session context handed to the chat controller
///
/// Created once at startup; the id cannot be replaced afterwards.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: SessionId,
}

impl SessionContext {
    pub fn new() -> Self {
        let id = SessionId::generate();
        log::info!("Started session {}", id);
        Self { id }
    }

    #[cfg(test)]
    pub fn with_id(id: &str) -> Self {
        Self {
            id: SessionId(id.to_string()),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
