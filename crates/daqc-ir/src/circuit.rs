//! A block bound to a register.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::compose::validate_on;
use crate::error::IrResult;
use crate::register::Register;

/// A validated block together with the register it runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    register: Register,
    block: Block,
}

impl Circuit {
    /// Pair `block` with `register`, validating qubit indices against it.
    pub fn new(register: Register, block: impl Into<Block>) -> IrResult<Self> {
        let block = block.into();
        validate_on(&block, &register)?;
        Ok(Self { register, block })
    }

    /// Pair `block` with `n` qubits on a unit-spacing line.
    pub fn with_qubits(n: u32, block: impl Into<Block>) -> IrResult<Self> {
        Self::new(Register::line(n, 1.0)?, block)
    }

    /// The register.
    pub fn register(&self) -> &Register {
        &self.register
    }

    /// The block.
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.register.num_qubits()
    }

    /// A copy with `name` bound to `value`, re-validated.
    pub fn bind(&self, name: &str, value: f64) -> IrResult<Self> {
        Self::new(self.register.clone(), self.block.bind(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{AnalogBlock, DigitalBlock};
    use crate::compose::chain;
    use crate::error::IrError;
    use crate::parameter::Parameter;
    use crate::support::QubitSupport;

    #[test]
    fn test_circuit_validates_against_register() {
        let block = chain([
            Block::from(DigitalBlock::x(1)),
            AnalogBlock::wait(100.0, QubitSupport::Global).unwrap().into(),
        ])
        .unwrap();
        let circuit = Circuit::with_qubits(2, block.clone()).unwrap();
        assert_eq!(circuit.num_qubits(), 2);

        assert!(matches!(
            Circuit::with_qubits(1, block),
            Err(IrError::QubitOutOfRange { qubit: 1, .. })
        ));
    }

    #[test]
    fn test_bind_revalidates() {
        let wait = AnalogBlock::wait(Parameter::symbol("t"), QubitSupport::Global).unwrap();
        let circuit = Circuit::with_qubits(2, wait).unwrap();
        assert!(circuit.bind("t", 10.0).is_ok());
        assert!(matches!(
            circuit.bind("t", -10.0),
            Err(IrError::NegativeDuration(_))
        ));
    }
}
