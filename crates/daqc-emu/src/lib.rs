//! `daqc-emu` — generators for digital-analog circuits.
//!
//! Takes a validated [`daqc_ir::Circuit`] and produces the sequence of
//! time slices an emulator or pulse compiler consumes: each analog block
//! becomes a duration plus a Pauli-sum Hamiltonian made of its drive and
//! a pairwise interaction between all register sites.
//!
//! # Quick start
//!
//! ```rust
//! use daqc_emu::{Emulator, Interaction, InteractionModel, Segment};
//! use daqc_ir::{AnalogBlock, Circuit, QubitSupport, Register, compose};
//! use std::collections::HashMap;
//!
//! let program = compose::chain([
//!     AnalogBlock::wait(500.0, QubitSupport::Global).unwrap(),
//!     AnalogBlock::analog_rx(std::f64::consts::FRAC_PI_2, QubitSupport::Global).unwrap(),
//! ])
//! .unwrap();
//! let circuit = Circuit::new(Register::line(2, 8.0).unwrap(), program).unwrap();
//!
//! let emulator = Emulator::new(InteractionModel::new(Interaction::NN));
//! let segments = emulator.translate(&circuit, &HashMap::new()).unwrap();
//! assert_eq!(segments.len(), 2);
//! assert!(matches!(&segments[0], Segment::Analog(s) if (s.duration_us - 0.5).abs() < 1e-12));
//! ```

pub mod config;
pub mod emulator;
pub mod error;
pub mod hamiltonian;
pub mod interaction;
pub mod logging;

pub use config::{EmulationConfig, LoggingConfig};
pub use emulator::{Emulator, EvolutionSlice, Segment};
pub use error::{EmuError, EmuResult};
pub use hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
pub use interaction::{DEFAULT_C3, DEFAULT_C6, Interaction, InteractionModel};
