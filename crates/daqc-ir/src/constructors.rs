//! Ready-made circuits.
//!
//! # Identity-initialized ansatz
//!
//! A trainable digital ansatz whose initial unitary is the identity, used
//! to avoid barren plateaus at the start of training. Each layer is
//!
//! ```text
//! R_1(α) … R_k(α)   E_0 … E_m   RX(γ)   E_m … E_0   R_k(β) … R_1(β)
//! ```
//!
//! where every `R_i` is a [`DigitalLayer`] of one rotation kind on all
//! qubits and `E_j` are the entangling gates. With `β = −α`, `γ = 0` and
//! zero entangler angles each half undoes the other.
//!
//! Parameter names per layer `l`, qubit `n` and rotation index `i`:
//!
//! | Name | Value at identity |
//! |------|-------------------|
//! | `alpha_{l}{n + N·i}` | random in [0, 2π) |
//! | `beta_{l}{n + N·i}` | `−alpha` of the same index |
//! | `gamma_{l}{n}` | 0 |
//! | `theta_ent__{l}{n}` | 0 (controlled-rotation entanglers only) |
//!
//! Each layer is a chain tagged `BPMA-{l}`.

use rand::Rng;
use std::collections::HashMap;
use std::f64::consts::TAU;
use tracing::debug;

use crate::block::{AnalogChain, Block, DigitalBlock};
use crate::compose;
use crate::error::IrResult;
use crate::parameter::Parameter;

/// Single-qubit rotation kinds for the outer ansatz layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Rotation about X.
    X,
    /// Rotation about Y.
    Y,
    /// Rotation about Z.
    Z,
}

impl Rotation {
    fn gate(self, qubit: u32, theta: Parameter) -> DigitalBlock {
        match self {
            Rotation::X => DigitalBlock::rx(qubit, theta),
            Rotation::Y => DigitalBlock::ry(qubit, theta),
            Rotation::Z => DigitalBlock::rz(qubit, theta),
        }
    }
}

/// Two-qubit entangling gate kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entangler {
    /// Controlled-NOT.
    #[default]
    CNOT,
    /// Controlled-Z.
    CZ,
    /// Controlled X rotation with a trainable angle.
    CRX,
    /// Controlled Y rotation with a trainable angle.
    CRY,
    /// Controlled Z rotation with a trainable angle.
    CRZ,
}

impl Entangler {
    /// Whether the gate carries a trainable angle.
    pub fn is_parameterized(self) -> bool {
        matches!(self, Entangler::CRX | Entangler::CRY | Entangler::CRZ)
    }

    fn gate(self, control: u32, target: u32, angle: &str) -> IrResult<DigitalBlock> {
        match self {
            Entangler::CNOT => DigitalBlock::cnot(control, target),
            Entangler::CZ => DigitalBlock::cz(control, target),
            Entangler::CRX => DigitalBlock::crx(control, target, Parameter::symbol(angle)),
            Entangler::CRY => DigitalBlock::cry(control, target, Parameter::symbol(angle)),
            Entangler::CRZ => DigitalBlock::crz(control, target, Parameter::symbol(angle)),
        }
    }
}

/// Shape of an identity-initialized ansatz.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityAnsatz {
    /// Number of qubits.
    pub n_qubits: u32,
    /// Number of layers.
    pub depth: u32,
    /// Rotation kinds of the outer layers, applied in order on the left.
    pub rotations: Vec<Rotation>,
    /// Entangling gate.
    pub entangler: Entangler,
    /// Also entangle the last qubit with the first.
    pub periodic: bool,
}

impl IdentityAnsatz {
    /// One layer of X and Y rotations with CNOT entanglers on a line.
    pub fn new(n_qubits: u32) -> Self {
        Self {
            n_qubits,
            depth: 1,
            rotations: vec![Rotation::X, Rotation::Y],
            entangler: Entangler::default(),
            periodic: false,
        }
    }

    /// Set the number of layers.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the outer rotation kinds.
    #[must_use]
    pub fn with_rotations(mut self, rotations: impl Into<Vec<Rotation>>) -> Self {
        self.rotations = rotations.into();
        self
    }

    /// Set the entangling gate.
    #[must_use]
    pub fn with_entangler(mut self, entangler: Entangler) -> Self {
        self.entangler = entangler;
        self
    }

    /// Close the entangler ring.
    #[must_use]
    pub fn with_periodic(mut self, periodic: bool) -> Self {
        self.periodic = periodic;
        self
    }

    /// The `(control, target)` pairs of one entangler chain.
    fn entangler_pairs(&self) -> Vec<(u32, u32)> {
        let n = self.n_qubits;
        if self.periodic {
            (0..n).map(|q| (q, (q + 1) % n)).collect()
        } else {
            (0..n.saturating_sub(1)).map(|q| (q, q + 1)).collect()
        }
    }

    /// Build the ansatz with symbolic angles.
    ///
    /// Fails with `EmptyComposition` for zero qubits and with
    /// `DuplicateQubit` for a periodic ansatz on one qubit.
    pub fn build(&self) -> IrResult<AnalogChain> {
        let n = self.n_qubits;
        let mut layers = Vec::with_capacity(self.depth as usize);

        for l in 0..self.depth {
            let mut members: Vec<Block> = Vec::with_capacity(2 * self.rotations.len() + 3);

            for (i, rotation) in self.rotations.iter().enumerate() {
                let i = i as u32;
                let gates = (0..n).map(|q| {
                    rotation.gate(q, Parameter::symbol(format!("alpha_{l}{}", q + n * i)))
                });
                members.push(compose::layer(gates)?.into());
            }

            let entanglers = self
                .entangler_pairs()
                .into_iter()
                .map(|(control, target)| {
                    self.entangler
                        .gate(control, target, &format!("theta_ent__{l}{control}"))
                })
                .collect::<IrResult<Vec<_>>>()?;
            let left = compose::chain(entanglers)?;
            let right = left.reversed();
            members.push(left.into());

            let centre =
                (0..n).map(|q| DigitalBlock::rx(q, Parameter::symbol(format!("gamma_{l}{q}"))));
            members.push(compose::layer(centre)?.into());

            members.push(right.into());

            for (i, rotation) in self.rotations.iter().enumerate().rev() {
                let i = i as u32;
                let gates = (0..n).map(|q| {
                    rotation.gate(q, Parameter::symbol(format!("beta_{l}{}", q + n * i)))
                });
                members.push(compose::layer(gates)?.into());
            }

            layers.push(compose::chain(members)?.with_tag(format!("BPMA-{l}")));
        }

        debug!(
            n_qubits = n,
            depth = self.depth,
            entangler = ?self.entangler,
            "built identity-initialized ansatz"
        );
        compose::chain(layers)
    }

    /// Values that make the ansatz the identity, with `alpha` drawn from `rng`.
    pub fn initial_values_with_rng<R: Rng>(&self, mut rng: R) -> HashMap<String, f64> {
        let n = self.n_qubits;
        let k = self.rotations.len() as u32;
        let mut values = HashMap::new();

        for l in 0..self.depth {
            for index in 0..n * k {
                let alpha = rng.gen_range(0.0..TAU);
                values.insert(format!("alpha_{l}{index}"), alpha);
                values.insert(format!("beta_{l}{index}"), -alpha);
            }
            for q in 0..n {
                values.insert(format!("gamma_{l}{q}"), 0.0);
            }
            if self.entangler.is_parameterized() {
                for (control, _) in self.entangler_pairs() {
                    values.insert(format!("theta_ent__{l}{control}"), 0.0);
                }
            }
        }
        values
    }

    /// [`initial_values_with_rng`](Self::initial_values_with_rng) with the thread RNG.
    pub fn initial_values(&self) -> HashMap<String, f64> {
        self.initial_values_with_rng(rand::thread_rng())
    }
}

/// Build an identity-initialized ansatz with symbolic angles.
///
/// See [`IdentityAnsatz`] for the layout and parameter names.
///
/// # Example
///
/// ```rust
/// use daqc_ir::constructors::{Entangler, Rotation, identity_initialized_ansatz};
///
/// let ansatz =
///     identity_initialized_ansatz(3, 2, &[Rotation::X, Rotation::Y], Entangler::CNOT, false)
///         .unwrap();
/// assert_eq!(ansatz.len(), 2);
/// let first = &ansatz.blocks()[0];
/// assert!(matches!(first, daqc_ir::Block::Chain(c) if c.tag() == Some("BPMA-0")));
/// ```
pub fn identity_initialized_ansatz(
    n_qubits: u32,
    depth: u32,
    rotations: &[Rotation],
    entangler: Entangler,
    periodic: bool,
) -> IrResult<AnalogChain> {
    IdentityAnsatz {
        n_qubits,
        depth,
        rotations: rotations.to_vec(),
        entangler,
        periodic,
    }
    .build()
}
