//! Error types for the emulation crate.

use thiserror::Error;

/// Errors produced while configuring or running the translation stage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmuError {
    /// The circuit or one of its blocks is invalid.
    #[error("IR error: {0}")]
    Ir(#[from] daqc_ir::IrError),

    /// A symbol has no value in the supplied bindings.
    #[error("Parameter '{0}' has no value")]
    UnboundParameter(String),

    /// A bound duration came out negative.
    #[error("Slice duration must be non-negative, got {0} ns")]
    NegativeDuration(f64),

    /// A bound duration came out infinite or NaN.
    #[error("Slice duration must be finite, got {0} ns")]
    NonFiniteDuration(f64),

    /// Two qubits share a position, so their coupling diverges.
    #[error("Qubits {first} and {second} sit at the same position")]
    CoincidentQubits {
        /// Lower qubit index.
        first: u32,
        /// Higher qubit index.
        second: u32,
    },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type for emulation operations.
pub type EmuResult<T> = Result<T, EmuError>;
