//! Composition and validation of analog blocks.
//!
//! [`chain`] composes blocks in time, [`kron`] composes analog primitives
//! side by side on disjoint qubits and [`layer`] does the same for gates.
//! Each checks its rules before building anything and fails on the first
//! violation:
//!
//! - a chain may hold digital blocks, krons, nested chains and analog
//!   primitives with global support, but no local analog primitive;
//! - a kron holds at least one analog primitive, none global, with
//!   pairwise-disjoint supports and one shared duration;
//! - a layer holds at least one gate, on pairwise-disjoint qubits.
//!
//! [`validate`] re-checks a whole block tree, which matters for values
//! that did not come out of these functions (deserialized or re-bound
//! blocks). [`validate_on`] additionally checks qubit indices against a
//! register.

use std::collections::BTreeMap;
use tracing::debug;

use crate::block::{AnalogBlock, AnalogChain, AnalogKron, Block, DigitalBlock, DigitalLayer};
use crate::error::{IrError, IrResult};
use crate::register::Register;

/// Compose blocks sequentially, in the given order.
///
/// # Example
///
/// ```rust
/// use daqc_ir::{AnalogBlock, QubitSupport, compose};
///
/// let a = AnalogBlock::wait(200.0, QubitSupport::Global).unwrap();
/// let b = AnalogBlock::wait(300.0, QubitSupport::Global).unwrap();
/// let chain = compose::chain([a, b]).unwrap();
/// assert_eq!(chain.len(), 2);
/// ```
pub fn chain<I, B>(blocks: I) -> IrResult<AnalogChain>
where
    I: IntoIterator<Item = B>,
    B: Into<Block>,
{
    let blocks: Vec<Block> = blocks.into_iter().map(Into::into).collect();
    check_chain(&blocks)?;
    debug!(members = blocks.len(), "composed chain");
    Ok(AnalogChain::from_checked(blocks))
}

/// Compose analog primitives simultaneously.
///
/// Members keep their input order.
///
/// # Example
///
/// ```rust
/// use daqc_ir::{AnalogBlock, compose};
///
/// let a = AnalogBlock::wait(1000.0, [0, 1]).unwrap();
/// let b = AnalogBlock::analog_rx(1.0, [2, 3]).unwrap();
/// assert!(compose::kron([a.clone(), b]).is_err()); // durations differ
///
/// let c = AnalogBlock::rotation(1000.0, 1.0, 0.0, 0.0, [2, 3]).unwrap();
/// let k = compose::kron([a, c]).unwrap();
/// assert_eq!(k.duration().as_f64(), Some(1000.0));
/// ```
pub fn kron<I>(blocks: I) -> IrResult<AnalogKron>
where
    I: IntoIterator<Item = AnalogBlock>,
{
    let blocks: Vec<AnalogBlock> = blocks.into_iter().collect();
    check_kron(&blocks)?;
    debug!(members = blocks.len(), "composed kron");
    Ok(AnalogKron::from_checked(blocks))
}

/// Compose gates simultaneously.
///
/// # Example
///
/// ```rust
/// use daqc_ir::{DigitalBlock, compose};
///
/// let l = compose::layer([DigitalBlock::rx(0, 0.1), DigitalBlock::ry(1, 0.2)]).unwrap();
/// assert_eq!(l.len(), 2);
/// assert!(compose::layer([DigitalBlock::h(0), DigitalBlock::cnot(1, 0).unwrap()]).is_err());
/// ```
pub fn layer<I>(gates: I) -> IrResult<DigitalLayer>
where
    I: IntoIterator<Item = DigitalBlock>,
{
    let gates: Vec<DigitalBlock> = gates.into_iter().collect();
    check_layer(&gates)?;
    debug!(members = gates.len(), "composed layer");
    Ok(DigitalLayer::from_checked(gates))
}

/// Re-check every invariant of a block tree.
///
/// Pure and idempotent: a block that passes once passes every time.
pub fn validate(block: &Block) -> IrResult<()> {
    match block {
        Block::Digital(digital) => digital.check(),
        Block::Layer(layer) => check_layer(layer.gates()),
        Block::Analog(analog) => analog.check(),
        Block::Kron(kron) => check_kron(kron.blocks()),
        Block::Chain(chain) => check_chain(chain.blocks()),
    }
}

/// [`validate`], then check that every qubit index fits in `register`.
pub fn validate_on(block: &Block, register: &Register) -> IrResult<()> {
    validate(block)?;
    check_range(block, register)
}

fn check_chain(blocks: &[Block]) -> IrResult<()> {
    for (index, block) in blocks.iter().enumerate() {
        if let Block::Analog(analog) = block {
            if !analog.support().is_global() {
                return Err(IrError::InvalidChainComposition {
                    index,
                    support: analog.support().clone(),
                });
            }
        }
        validate(block)?;
    }
    Ok(())
}

fn check_kron(blocks: &[AnalogBlock]) -> IrResult<()> {
    let first = blocks.first().ok_or(IrError::EmptyComposition)?;

    for (index, block) in blocks.iter().enumerate() {
        block.check()?;
        if block.support().is_global() {
            return Err(IrError::InvalidKronComposition { index });
        }
    }

    // qubit -> index of the member that claimed it
    let mut owners: BTreeMap<u32, usize> = BTreeMap::new();
    for (index, block) in blocks.iter().enumerate() {
        for &qubit in block.support().qubits().into_iter().flatten() {
            if let Some(&first_owner) = owners.get(&qubit) {
                return Err(IrError::OverlappingQubitSupport {
                    first: first_owner,
                    second: index,
                    qubits: blocks[first_owner].support().overlap(block.support()),
                });
            }
            owners.insert(qubit, index);
        }
    }

    let expected = first.duration();
    for (index, block) in blocks.iter().enumerate().skip(1) {
        if !block.duration().same_value(expected) {
            return Err(IrError::DurationMismatch {
                index,
                expected: expected.clone(),
                found: block.duration().clone(),
            });
        }
    }
    Ok(())
}

fn check_layer(gates: &[DigitalBlock]) -> IrResult<()> {
    if gates.is_empty() {
        return Err(IrError::EmptyComposition);
    }
    let mut owners: BTreeMap<u32, usize> = BTreeMap::new();
    for (index, gate) in gates.iter().enumerate() {
        gate.check()?;
        for &qubit in gate.qubits() {
            if let Some(&first_owner) = owners.get(&qubit) {
                let qubits = gates[first_owner]
                    .qubits()
                    .iter()
                    .copied()
                    .filter(|q| gate.qubits().contains(q))
                    .collect();
                return Err(IrError::OverlappingQubitSupport {
                    first: first_owner,
                    second: index,
                    qubits,
                });
            }
            owners.insert(qubit, index);
        }
    }
    Ok(())
}

fn check_gate_range(gate: &DigitalBlock, num_qubits: usize) -> IrResult<()> {
    match gate.qubits().iter().find(|&&q| q as usize >= num_qubits) {
        Some(&qubit) => Err(IrError::QubitOutOfRange { qubit, num_qubits }),
        None => Ok(()),
    }
}

fn check_range(block: &Block, register: &Register) -> IrResult<()> {
    let num_qubits = register.num_qubits();
    match block {
        Block::Digital(digital) => check_gate_range(digital, num_qubits),
        Block::Layer(layer) => layer
            .gates()
            .iter()
            .try_for_each(|g| check_gate_range(g, num_qubits)),
        Block::Analog(analog) => analog.support().resolve(register).map(|_| ()),
        Block::Kron(kron) => kron
            .blocks()
            .iter()
            .try_for_each(|b| b.support().resolve(register).map(|_| ())),
        Block::Chain(chain) => chain
            .blocks()
            .iter()
            .try_for_each(|b| check_range(b, register)),
    }
}
