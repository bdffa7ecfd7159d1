// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FAILURE_MESSAGE: &str = "Une erreur s'est produite. Veuillez réessayer.";

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Backend server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Chat panel configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Whether the chat panel is shown on startup
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Text of the bot turn appended when a request fails
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
            failure_message: default_failure_message(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_visible() -> bool {
    true
}

fn default_failure_message() -> String {
    DEFAULT_FAILURE_MESSAGE.to_string()
}
