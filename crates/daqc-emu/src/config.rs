//! Configuration for the translation stage.
//!
//! Loaded from, in increasing precedence:
//! 1. Built-in defaults
//! 2. A YAML file
//! 3. Environment variables (`DAQC_SPACING`, `DAQC_INTERACTION`, `DAQC_LOG_LEVEL`)

use daqc_ir::Register;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{EmuError, EmuResult};
use crate::interaction::{DEFAULT_C3, DEFAULT_C6, Interaction, InteractionModel};

/// Translation-stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmulationConfig {
    /// Site spacing in µm for generated line registers.
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    /// Interaction model.
    #[serde(default)]
    pub interaction: Interaction,

    /// Van der Waals coefficient in rad·µm⁶/µs.
    #[serde(default = "default_c6")]
    pub c6: f64,

    /// Dipole coefficient in rad·µm³/µs.
    #[serde(default = "default_c3")]
    pub c3: f64,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "daqc_emu=debug".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for EmulationConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            interaction: Interaction::default(),
            c6: default_c6(),
            c3: default_c3(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl EmulationConfig {
    /// Parse YAML and validate.
    pub fn from_yaml_str(yaml: &str) -> EmuResult<Self> {
        let config: EmulationConfig = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` (or defaults when `None`), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> EmuResult<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_yaml_ng::from_str(&content)?
            }
            None => EmulationConfig::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        info!(
            interaction = %config.interaction,
            spacing = config.spacing,
            "loaded emulation config"
        );
        Ok(config)
    }

    /// Apply `DAQC_*` overrides looked up through `lookup`.
    ///
    /// All overrides are parsed before any is applied; on error `self` is
    /// left unchanged.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> EmuResult<()> {
        let spacing = lookup("DAQC_SPACING")
            .map(|raw| {
                raw.trim().parse::<f64>().map_err(|_| {
                    EmuError::Config(format!("DAQC_SPACING is not a number: '{raw}'"))
                })
            })
            .transpose()?;
        let interaction = lookup("DAQC_INTERACTION")
            .map(|raw| raw.parse::<Interaction>())
            .transpose()?;
        let level = lookup("DAQC_LOG_LEVEL");

        if let Some(spacing) = spacing {
            self.spacing = spacing;
        }
        if let Some(interaction) = interaction {
            self.interaction = interaction;
        }
        if let Some(level) = level {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Reject non-physical values.
    pub fn validate(&self) -> EmuResult<()> {
        for (name, value) in [("spacing", self.spacing), ("c6", self.c6), ("c3", self.c3)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(EmuError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The configured interaction model.
    pub fn model(&self) -> InteractionModel {
        InteractionModel {
            kind: self.interaction,
            c6: self.c6,
            c3: self.c3,
        }
    }

    /// A line register of `n` qubits at the configured spacing.
    pub fn register(&self, n: u32) -> EmuResult<Register> {
        Ok(Register::line(n, self.spacing)?)
    }
}

fn default_spacing() -> f64 {
    8.0
}

fn default_c6() -> f64 {
    DEFAULT_C6
}

fn default_c3() -> f64 {
    DEFAULT_C3
}

fn default_log_level() -> String {
    "info".to_string()
}
