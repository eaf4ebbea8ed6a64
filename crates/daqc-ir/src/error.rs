//! Error types for the IR crate.

use thiserror::Error;

use crate::parameter::Parameter;
use crate::support::QubitSupport;

/// Errors raised while constructing, composing or validating blocks.
///
/// Every variant describes a rejected composition; none of them leaves a
/// partially built value behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A chain member is an analog primitive without global support.
    #[error(
        "Chain member {index} has support {support}; analog blocks in a chain must be global or wrapped in a kron"
    )]
    InvalidChainComposition {
        /// Position of the offending member in the chain.
        index: usize,
        /// Support of the offending member.
        support: QubitSupport,
    },

    /// A kron member has global support.
    #[error("Kron member {index} has global support; kron members must act on explicit qubits")]
    InvalidKronComposition {
        /// Position of the offending member in the kron.
        index: usize,
    },

    /// Two kron members act on a common qubit.
    #[error("Kron members {first} and {second} overlap on qubits {qubits:?}")]
    OverlappingQubitSupport {
        /// Index of the earlier member.
        first: usize,
        /// Index of the later member.
        second: usize,
        /// Qubits shared by both members.
        qubits: Vec<u32>,
    },

    /// Kron members do not share a duration.
    #[error("Kron member {index} lasts {found} but the kron duration is {expected}")]
    DurationMismatch {
        /// Position of the offending member in the kron.
        index: usize,
        /// Duration of the first member.
        expected: Parameter,
        /// Duration of the offending member.
        found: Parameter,
    },

    /// A kron or digital layer was requested with no members.
    #[error("Cannot compose zero blocks in parallel")]
    EmptyComposition,

    /// A local support with no qubits.
    #[error("Local qubit support must contain at least one qubit")]
    EmptySupport,

    /// A concrete duration below zero.
    #[error("Duration must be non-negative, got {0}")]
    NegativeDuration(f64),

    /// A concrete duration that is infinite or NaN.
    #[error("Duration must be finite, got {0}")]
    NonFiniteDuration(f64),

    /// A qubit index beyond the register.
    #[error("Qubit {qubit} is out of range for a register of {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Size of the register.
        num_qubits: usize,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Duplicate qubit in a gate's operands.
    #[error("Duplicate qubit {qubit} in operands of '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: u32,
        /// Name of the gate.
        gate_name: String,
    },

    /// Parameter has no value in the supplied bindings.
    #[error("Parameter '{0}' is unbound")]
    UnboundParameter(String),

    /// Register spacing must be positive and finite.
    #[error("Invalid register spacing {0}")]
    InvalidSpacing(f64),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = IrError::OverlappingQubitSupport {
            first: 0,
            second: 2,
            qubits: vec![1],
        };
        assert_eq!(err.to_string(), "Kron members 0 and 2 overlap on qubits [1]");

        let err = IrError::DurationMismatch {
            index: 1,
            expected: Parameter::value(1000.0),
            found: Parameter::value(500.0),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("1000"));
    }
}
