//! Quarry configuration stored as TOML (default `quarry.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::classifier::{DEFAULT_FUEL_PATTERN, DEFAULT_VALUABLE_PATTERNS, ItemClassifier};

/// Controller configuration (TOML).
///
/// Edited by humans; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuarryConfig {
    /// Edge length of the square area, in blocks.
    pub side_length: u32,

    /// Fuel below which the agent refuses to start or resume work.
    pub min_fuel: u32,

    /// Substring identifying fuel items.
    pub fuel_pattern: String,

    /// Substrings identifying items kept during triage.
    pub valuable_patterns: Vec<String>,

    /// Stop after this many completed layers. Unset digs until blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_layers: Option<u32>,

    pub sim: SimConfig,
}

/// Parameters for the simulated world used by `quarry run`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Diggable layers above the bedrock floor.
    pub depth: u32,
    pub seed: u64,
    pub starting_fuel: u32,
    /// Coal items stocked in the fuel chest.
    pub fuel_stock: u32,
    /// Probability that a generated block is an ore.
    pub ore_chance: f64,
    pub fuel_limit: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth: 8,
            seed: 1,
            starting_fuel: 200,
            fuel_stock: 256,
            ore_chance: 0.05,
            fuel_limit: 20_000,
        }
    }
}

impl Default for QuarryConfig {
    fn default() -> Self {
        Self {
            side_length: 16,
            min_fuel: 50,
            fuel_pattern: DEFAULT_FUEL_PATTERN.to_string(),
            valuable_patterns: DEFAULT_VALUABLE_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            max_layers: None,
            sim: SimConfig::default(),
        }
    }
}

impl QuarryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.side_length == 0 {
            return Err(anyhow!("side_length must be > 0"));
        }
        if self.min_fuel == 0 {
            return Err(anyhow!("min_fuel must be > 0"));
        }
        if self.fuel_pattern.is_empty() {
            return Err(anyhow!("fuel_pattern must be non-empty"));
        }
        if self.valuable_patterns.iter().any(|pattern| pattern.is_empty()) {
            return Err(anyhow!("valuable_patterns must not contain empty strings"));
        }
        if !(0.0..=1.0).contains(&self.sim.ore_chance) {
            return Err(anyhow!("sim.ore_chance must be within [0, 1]"));
        }
        if self.sim.fuel_limit < self.min_fuel {
            return Err(anyhow!("sim.fuel_limit must be >= min_fuel"));
        }
        Ok(())
    }

    pub fn classifier(&self) -> ItemClassifier {
        ItemClassifier::new(self.valuable_patterns.clone(), self.fuel_pattern.clone())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QuarryConfig::default()`.
pub fn load_config(path: &Path) -> Result<QuarryConfig> {
    if !path.exists() {
        let cfg = QuarryConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QuarryConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &QuarryConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
