use crate::models::SessionContext;
use crate::services::new_bill::DEFAULT_ALLOWED_EXTENSIONS;
use config::ConfigError;
use reqwest::Url;
use secrecy::Secret;
use serde::Deserialize;
use service_core::config::{configuration_directory, load_layered};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    /// Identity of the connected user, established by the login flow.
    pub session: SessionContext,
    #[serde(default)]
    pub submission: SubmissionSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    /// Base URL of the bills API (e.g., http://localhost:5678).
    pub base_url: String,
    /// Bearer token sent with every store call.
    #[serde(default)]
    pub api_token: Option<Secret<String>>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Extra origins serving bill proofs, beside the store itself
    /// (e.g., a storage bucket).
    #[serde(default)]
    pub proof_origins: Vec<String>,
}

impl StoreSettings {
    /// Origins the proof viewer may send the browser to: the store's own
    /// plus `proof_origins`.
    pub fn allowed_proof_origins(&self) -> Result<ProofOrigins, ConfigError> {
        ProofOrigins::parse(std::iter::once(&self.base_url).chain(&self.proof_origins))
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Origins (scheme, host and port) bill proofs may be opened from. Empty
/// permits nothing.
#[derive(Debug, Clone, Default)]
pub struct ProofOrigins {
    allowed: Vec<Url>,
}

impl ProofOrigins {
    pub fn parse<I, S>(origins: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = origins
            .into_iter()
            .map(|origin| {
                let origin = origin.as_ref();
                Url::parse(origin).map_err(|e| {
                    ConfigError::Message(format!("Invalid proof origin {}: {}", origin, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { allowed })
    }

    /// Whether `url` is absolute and served from one of the allowed origins.
    pub fn permits(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(url) => self
                .allowed
                .iter()
                .any(|allowed| allowed.origin() == url.origin()),
            Err(_) => false,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SubmissionSettings {
    /// Proof file extensions accepted for upload.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint; traces stay local when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    load_layered(&configuration_directory("billed-frontend"))
}
