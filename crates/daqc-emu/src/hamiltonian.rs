//! Pauli-sum Hamiltonians.
//!
//! A slice generator is written as
//!
//!   H = Σ_k  c_k · P_k
//!
//! with real coefficients and each P_k a product of single-qubit Paulis.
//! Identity factors are never stored, so constant energy offsets (global
//! phases) drop out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        };
        write!(f, "{c}")
    }
}

/// A product of Paulis on distinct qubits, sorted by qubit index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Single-qubit operator.
    pub fn single(qubit: u32, op: PauliOp) -> Self {
        Self {
            ops: vec![(qubit, op)],
        }
    }

    /// Two-qubit product `op_a ⊗ op_b` on qubits `a != b`.
    pub fn pair(a: u32, op_a: PauliOp, b: u32, op_b: PauliOp) -> Self {
        debug_assert_ne!(a, b, "a Pauli pair needs two distinct qubits");
        let mut ops = vec![(a, op_a), (b, op_b)];
        ops.sort_unstable_by_key(|&(q, _)| q);
        Self { ops }
    }

    /// The `(qubit, op)` factors in qubit order.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Number of qubits the string acts on non-trivially.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// Highest qubit index, if any.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|&(q, _)| q)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (op_index, (q, op)) in self.ops.iter().enumerate() {
            if op_index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{op}{q}")?;
        }
        Ok(())
    }
}

/// One weighted term `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Coefficient in rad/µs.
    pub coeff: f64,
    /// The operator.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// A new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// `coeff · X_q`.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::X))
    }

    /// `coeff · Y_q`.
    pub fn y(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Y))
    }

    /// `coeff · Z_q`.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::single(qubit, PauliOp::Z))
    }

    /// `coeff · Z_a Z_b`.
    pub fn zz(a: u32, b: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::pair(a, PauliOp::Z, b, PauliOp::Z))
    }

    /// `coeff · X_a X_b`.
    pub fn xx(a: u32, b: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::pair(a, PauliOp::X, b, PauliOp::X))
    }

    /// `coeff · Y_a Y_b`.
    pub fn yy(a: u32, b: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::pair(a, PauliOp::Y, b, PauliOp::Y))
    }
}

/// A Pauli-sum Hamiltonian.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// From a list of terms, kept as given.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self { terms }
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of stored terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append terms.
    pub fn extend(&mut self, terms: impl IntoIterator<Item = HamiltonianTerm>) {
        self.terms.extend(terms);
    }

    /// Sum of the coefficients of every term equal to `pauli`.
    pub fn coefficient(&self, pauli: &PauliString) -> f64 {
        self.terms
            .iter()
            .filter(|t| &t.pauli == pauli)
            .map(|t| t.coeff)
            .sum()
    }

    /// Merge terms with equal strings and drop zero coefficients.
    ///
    /// Each surviving string keeps the position of its first occurrence.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut merged: Vec<HamiltonianTerm> = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match merged.iter_mut().find(|m| m.pauli == term.pauli) {
                Some(existing) => existing.coeff += term.coeff,
                None => merged.push(term.clone()),
            }
        }
        merged.retain(|t| t.coeff != 0.0);
        Self { terms: merged }
    }

    /// One more than the highest qubit index referenced, or 0.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }
}

impl fmt::Display for Hamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}·{}", term.coeff, term.pauli)?;
        }
        Ok(())
    }
}
