//! Digital-analog block representation.
//!
//! This crate provides the values a digital-analog program is built from
//! and the rules for composing them.
//!
//! # Core Components
//!
//! - **Parameters**: [`Parameter`] for concrete or symbolic durations and angles
//! - **Support**: [`QubitSupport`], global or an explicit qubit set
//! - **Blocks**: [`AnalogBlock`] primitives (`wait`, constant rotations),
//!   [`DigitalBlock`] gates, and the composites [`AnalogChain`], [`AnalogKron`]
//!   and [`DigitalLayer`]
//! - **Composition**: [`compose::chain`], [`compose::kron`], [`compose::layer`],
//!   [`compose::validate`]
//! - **Register**: [`Register`] with 2-D qubit coordinates
//! - **Circuit**: [`Circuit`], a validated block on a register
//! - **Constructors**: [`constructors::identity_initialized_ansatz`]
//!
//! # Example: Simultaneous Local Evolution
//!
//! ```rust
//! use daqc_ir::{AnalogBlock, Block, Circuit, QubitSupport, compose};
//!
//! // A wait on qubits {0, 1} and a rotation on {2, 3}, both 1 µs long.
//! let wait = AnalogBlock::wait(1000.0, [0, 1]).unwrap();
//! let rot = AnalogBlock::rotation(1000.0, 2.0, 0.0, 0.0, [2, 3]).unwrap();
//! let layer = compose::kron([wait, rot]).unwrap();
//!
//! // Follow it with a global X rotation.
//! let rx = AnalogBlock::analog_rx(std::f64::consts::PI, QubitSupport::Global).unwrap();
//! let program = compose::chain([Block::from(layer), Block::from(rx)]).unwrap();
//!
//! let circuit = Circuit::with_qubits(4, program).unwrap();
//! let total = circuit.block().duration().as_f64().unwrap();
//! assert!((total - 2000.0).abs() < 1e-9);
//! ```
//!
//! # Composition Rules
//!
//! | Operation | Accepts | Rejects with |
//! |-----------|---------|--------------|
//! | `chain` | digital blocks, layers, krons, chains, global analog blocks | `InvalidChainComposition` |
//! | `kron` | local analog blocks | `InvalidKronComposition`, `OverlappingQubitSupport`, `DurationMismatch` |
//! | `layer` | digital blocks | `OverlappingQubitSupport` |

pub mod block;
pub mod circuit;
pub mod compose;
pub mod constructors;
pub mod error;
pub mod parameter;
pub mod register;
pub mod support;

pub use block::{
    AnalogBlock, AnalogChain, AnalogKron, Block, DigitalBlock, DigitalGate, DigitalLayer,
};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use parameter::Parameter;
pub use register::Register;
pub use support::QubitSupport;
