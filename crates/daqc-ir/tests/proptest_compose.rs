//! Property-based tests for the composition rules.

use daqc_ir::{AnalogBlock, Block, IrError, QubitSupport, compose};
use proptest::prelude::*;

/// Durations in ns, kept integral so equality is exact.
fn arb_duration() -> impl Strategy<Value = f64> {
    (0_u32..5000).prop_map(f64::from)
}

/// A global wait or rotation.
fn arb_global_block() -> impl Strategy<Value = AnalogBlock> {
    (arb_duration(), any::<bool>(), -10.0_f64..10.0).prop_map(|(duration, is_wait, omega)| {
        if is_wait {
            AnalogBlock::wait(duration, QubitSupport::Global).unwrap()
        } else {
            AnalogBlock::rotation(duration, omega, 0.0, 0.0, QubitSupport::Global).unwrap()
        }
    })
}

proptest! {
    /// Chains of global primitives always compose and keep their order.
    #[test]
    fn global_chain_preserves_order(blocks in prop::collection::vec(arb_global_block(), 0..8)) {
        let chain = compose::chain(blocks.clone()).unwrap();
        let expected: Vec<Block> = blocks.into_iter().map(Block::from).collect();
        prop_assert_eq!(chain.blocks(), expected.as_slice());
    }

    /// Members on distinct qubits with equal durations always kron.
    #[test]
    fn disjoint_equal_duration_kron_succeeds(n in 1_u32..8, duration in arb_duration()) {
        let members: Vec<_> = (0..n)
            .map(|q| AnalogBlock::wait(duration, [q]).unwrap())
            .collect();
        let k = compose::kron(members).unwrap();
        prop_assert_eq!(k.len(), n as usize);
        prop_assert_eq!(k.duration().as_f64(), Some(duration));
    }

    /// Two members on the same qubit never kron, whatever their durations.
    #[test]
    fn shared_qubit_kron_fails(q in 0_u32..16, d1 in arb_duration(), d2 in arb_duration()) {
        let a = AnalogBlock::wait(d1, [q]).unwrap();
        let b = AnalogBlock::rotation(d2, 1.0, 0.0, 0.0, [q]).unwrap();
        let is_overlap = matches!(
            compose::kron([a, b]),
            Err(IrError::OverlappingQubitSupport { .. })
        );
        prop_assert!(is_overlap);
    }

    /// Different durations on disjoint qubits report a mismatch.
    #[test]
    fn differing_durations_fail(d1 in arb_duration(), d2 in arb_duration()) {
        prop_assume!(d1 != d2);
        let a = AnalogBlock::wait(d1, [0]).unwrap();
        let b = AnalogBlock::wait(d2, [1]).unwrap();
        let is_mismatch = matches!(
            compose::kron([a, b]),
            Err(IrError::DurationMismatch { index: 1, .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Anything the composer builds validates, repeatedly.
    #[test]
    fn composed_blocks_validate(blocks in prop::collection::vec(arb_global_block(), 1..6)) {
        let block = Block::from(compose::chain(blocks).unwrap());
        prop_assert!(compose::validate(&block).is_ok());
        prop_assert!(compose::validate(&block).is_ok());
    }
}
