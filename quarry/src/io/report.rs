//! JSON run reports written by `quarry run --report`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::excavate::RunOutcome;
use crate::io::config::QuarryConfig;

/// Persisted summary of one simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<'a> {
    pub side_length: u32,
    pub seed: u64,
    pub depth: u32,
    pub outcome: &'a RunOutcome,
}

impl<'a> RunReport<'a> {
    pub fn new(cfg: &QuarryConfig, outcome: &'a RunOutcome) -> Self {
        Self {
            side_length: cfg.side_length,
            seed: cfg.sim.seed,
            depth: cfg.sim.depth,
            outcome,
        }
    }
}

/// Atomically write the report as pretty JSON (temp file + rename).
pub fn write_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    debug!(path = %path.display(), "writing run report");
    let mut buf = serde_json::to_string_pretty(report).context("serialize run report")?;
    buf.push('\n');
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp report {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace report {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::displacement::Displacement;
    use crate::excavate::{RunStats, StopReason};

    #[test]
    fn report_serializes_stop_reason_with_kind_tag() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("reports/run.json");
        let outcome = RunOutcome {
            stop: StopReason::LayerLimit { layers: 2 },
            stats: RunStats {
                layers_completed: 2,
                ..RunStats::default()
            },
            position: Displacement::HOME,
            fuel: 120,
        };

        write_report(&path, &RunReport::new(&QuarryConfig::default(), &outcome)).expect("write");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(value["outcome"]["stop"]["kind"], "layer_limit");
        assert_eq!(value["outcome"]["stop"]["layers"], 2);
        assert_eq!(value["outcome"]["stats"]["layers_completed"], 2);
        assert_eq!(value["side_length"], 16);
    }
}
