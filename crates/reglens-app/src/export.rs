use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use reglens_render::canonical_json;
use reglens_types::ComplianceReport;

pub const ARTIFACT_PREFIX: &str = "compliance_report_";

/// The exact text a clipboard copy carries: the canonical serialization,
/// byte for byte the same as the displayed report and the downloaded
/// artifact.
pub fn clipboard_text(report: &ComplianceReport) -> anyhow::Result<String> {
    canonical_json(report)
}

/// Artifact filename and bytes for a download of this report.
pub fn download_artifact(report: &ComplianceReport) -> anyhow::Result<(String, Vec<u8>)> {
    let filename = format!("{ARTIFACT_PREFIX}{}.json", report.regulation_id);
    let bytes = canonical_json(report)?.into_bytes();
    Ok((filename, bytes))
}

/// Write the download artifact under `dir`, creating it if needed.
/// Returns the path written.
pub fn write_artifact(report: &ComplianceReport, dir: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let (filename, bytes) = download_artifact(report)?;
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir {dir}"))?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes).with_context(|| format!("write report artifact {path}"))?;
    Ok(path)
}
