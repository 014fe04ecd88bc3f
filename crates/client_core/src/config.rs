use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::Deserialize;
use shared::protocol::analyze_route;
use tracing::warn;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
pub const SETTINGS_FILE_NAME: &str = "verifex.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base address of the analysis service, without a trailing slash.
    pub server_url: String,
    /// `None` disables the request timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl ClientSettings {
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.server_url, analyze_route())
    }

    pub fn with_server_url(mut self, raw: &str) -> anyhow::Result<Self> {
        self.server_url = normalize_server_url(raw)?;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = timeout_from_secs(secs);
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Layers defaults, the settings file and the environment.
///
/// An explicit `config_path` must exist; otherwise `verifex.toml` in the
/// working directory is read when present.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            apply_file(&mut settings, &raw, path)?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(SETTINGS_FILE_NAME) {
                apply_file(&mut settings, &raw, Path::new(SETTINGS_FILE_NAME))?;
            }
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut ClientSettings, raw: &str, path: &Path) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.server_url {
        settings.server_url = normalize_server_url(&v)
            .with_context(|| format!("invalid server_url in '{}'", path.display()))?;
    }
    if let Some(secs) = file_cfg.request_timeout_secs {
        settings.request_timeout = timeout_from_secs(secs);
    }
    Ok(())
}

fn apply_env(
    settings: &mut ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    for name in ["VERIFEX_SERVER_URL", "APP__SERVER_URL"] {
        if let Some(v) = lookup(name) {
            settings.server_url =
                normalize_server_url(&v).with_context(|| format!("invalid {name}"))?;
        }
    }

    for name in ["VERIFEX_REQUEST_TIMEOUT_SECS", "APP__REQUEST_TIMEOUT_SECS"] {
        if let Some(v) = lookup(name) {
            match v.trim().parse::<u64>() {
                Ok(secs) => settings.request_timeout = timeout_from_secs(secs),
                Err(error) => warn!(variable = name, value = %v, %error, "ignoring unparsable timeout"),
            }
        }
    }

    Ok(())
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

pub fn normalize_server_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Ok(DEFAULT_SERVER_URL.to_string());
    }

    let parsed =
        Url::parse(trimmed).with_context(|| format!("invalid server url '{trimmed}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("server url '{trimmed}' must use http or https");
    }
    if parsed.host_str().is_none() {
        bail!("server url '{trimmed}' has no host");
    }

    Ok(trimmed.to_string())
}
