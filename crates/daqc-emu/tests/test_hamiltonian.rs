//! Tests for Pauli-sum Hamiltonians.

use daqc_emu::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};

#[test]
fn simplified_merges_equal_strings() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::z(0, 1.0),
        HamiltonianTerm::x(1, 2.0),
        HamiltonianTerm::z(0, 0.5),
    ])
    .simplified();
    assert_eq!(h.n_terms(), 2);
    assert_eq!(h.terms()[0].pauli, PauliString::single(0, PauliOp::Z));
    assert!((h.terms()[0].coeff - 1.5).abs() < 1e-15);
}

#[test]
fn simplified_drops_cancelled_terms() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::zz(0, 1, 0.25),
        HamiltonianTerm::zz(1, 0, -0.25),
        HamiltonianTerm::y(2, 0.0),
    ])
    .simplified();
    assert!(h.is_empty());
}

#[test]
fn coefficient_sums_matching_terms() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::xx(0, 1, 1.0),
        HamiltonianTerm::yy(0, 1, 1.0),
        HamiltonianTerm::xx(1, 0, 0.5),
    ]);
    let xx = PauliString::pair(0, PauliOp::X, 1, PauliOp::X);
    assert!((h.coefficient(&xx) - 1.5).abs() < 1e-15);
}

#[test]
fn min_qubits_from_highest_index() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::z(4, 1.0),
        HamiltonianTerm::zz(0, 2, 1.0),
    ]);
    assert_eq!(h.min_qubits(), 5);
    assert_eq!(Hamiltonian::default().min_qubits(), 0);
}
