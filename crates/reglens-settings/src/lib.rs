//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves
//! configuration provided as strings. Reading `reglens.toml` from disk is
//! the CLI's job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::ReglensConfigV1;
pub use resolve::{EffectiveConfig, Overrides};

/// Parse `reglens.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ReglensConfigV1> {
    let cfg: ReglensConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + file + CLI overrides).
pub fn resolve_config(cfg: ReglensConfigV1, overrides: Overrides) -> EffectiveConfig {
    resolve::resolve_config(cfg, overrides)
}
