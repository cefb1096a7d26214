use std::time::Duration;

use camino::Utf8PathBuf;

use crate::model::ReglensConfigV1;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// CLI flags that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<Utf8PathBuf>,
}

/// The configuration the rest of the client actually consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub service_url: String,
    /// `None` means the deadline is disabled (`timeout_secs = 0`).
    pub timeout: Option<Duration>,
    pub output_dir: Utf8PathBuf,
}

pub fn resolve_config(cfg: ReglensConfigV1, overrides: Overrides) -> EffectiveConfig {
    let service_url = overrides
        .service_url
        .or(cfg.service_url)
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

    let timeout_secs = overrides
        .timeout_secs
        .or(cfg.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

    let output_dir = overrides
        .output_dir
        .or(cfg.output_dir.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));

    EffectiveConfig {
        service_url,
        timeout,
        output_dir,
    }
}
