//! Qubit support of a block.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::register::Register;

/// The qubits a block acts on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QubitSupport {
    /// Every qubit of whatever register the block ends up running on.
    Global,
    /// An explicit set of qubit indices.
    Local(BTreeSet<u32>),
}

impl QubitSupport {
    /// Global support.
    pub fn global() -> Self {
        QubitSupport::Global
    }

    /// Local support on the given qubits. Duplicates collapse.
    pub fn local(qubits: impl IntoIterator<Item = u32>) -> Self {
        QubitSupport::Local(qubits.into_iter().collect())
    }

    /// True for [`QubitSupport::Global`].
    pub fn is_global(&self) -> bool {
        matches!(self, QubitSupport::Global)
    }

    /// The explicit qubit set, or `None` for global support.
    pub fn qubits(&self) -> Option<&BTreeSet<u32>> {
        match self {
            QubitSupport::Global => None,
            QubitSupport::Local(qubits) => Some(qubits),
        }
    }

    /// Qubits shared with `other`, in ascending order.
    ///
    /// Global support overlaps with everything except an empty local set.
    pub fn overlap(&self, other: &QubitSupport) -> Vec<u32> {
        match (self, other) {
            (QubitSupport::Local(a), QubitSupport::Local(b)) => {
                a.intersection(b).copied().collect()
            }
            (QubitSupport::Local(q), QubitSupport::Global)
            | (QubitSupport::Global, QubitSupport::Local(q)) => q.iter().copied().collect(),
            // Both global: report nothing concrete; callers reject global supports first.
            (QubitSupport::Global, QubitSupport::Global) => Vec::new(),
        }
    }

    /// Resolve to concrete indices on `register`.
    ///
    /// Local indices must lie inside the register.
    pub fn resolve(&self, register: &Register) -> IrResult<BTreeSet<u32>> {
        let num_qubits = register.num_qubits();
        match self {
            QubitSupport::Global => Ok((0..num_qubits as u32).collect()),
            QubitSupport::Local(qubits) => {
                if let Some(&qubit) = qubits.iter().find(|&&q| q as usize >= num_qubits) {
                    return Err(IrError::QubitOutOfRange { qubit, num_qubits });
                }
                Ok(qubits.clone())
            }
        }
    }
}

impl fmt::Display for QubitSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitSupport::Global => write!(f, "global"),
            QubitSupport::Local(qubits) => {
                write!(f, "{{")?;
                for (i, q) in qubits.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{q}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<u32> for QubitSupport {
    fn from(qubit: u32) -> Self {
        QubitSupport::local([qubit])
    }
}

impl<const N: usize> From<[u32; N]> for QubitSupport {
    fn from(qubits: [u32; N]) -> Self {
        QubitSupport::local(qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_collapses_duplicates() {
        let s = QubitSupport::local([2, 0, 2]);
        assert_eq!(s.qubits().unwrap().len(), 2);
        assert_eq!(s.to_string(), "{0, 2}");
        assert_eq!(QubitSupport::global().to_string(), "global");
    }

    #[test]
    fn test_overlap() {
        let a = QubitSupport::local([0, 1]);
        let b = QubitSupport::local([1, 2]);
        let c = QubitSupport::local([3]);
        assert_eq!(a.overlap(&b), vec![1]);
        assert!(a.overlap(&c).is_empty());
        assert_eq!(QubitSupport::Global.overlap(&c), vec![3]);
    }

    #[test]
    fn test_resolve_against_register() {
        let register = Register::line(3, 1.0).unwrap();
        let all = QubitSupport::Global.resolve(&register).unwrap();
        assert_eq!(all, BTreeSet::from([0, 1, 2]));

        let err = QubitSupport::local([1, 3]).resolve(&register).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitOutOfRange {
                qubit: 3,
                num_qubits: 3
            }
        ));
    }
}
