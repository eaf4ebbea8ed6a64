//! Qubit registers with 2-D coordinates.
//!
//! The register fixes the qubit count that global support resolves to and
//! the pairwise distances the interaction term depends on. Coordinates are
//! in µm.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// An ordered set of qubit positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Register {
    coords: Vec<(f64, f64)>,
}

impl Register {
    /// Qubits at explicit coordinates, indexed in the given order.
    pub fn from_coordinates(coords: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// `n` qubits on a line, `spacing` apart.
    pub fn line(n: u32, spacing: f64) -> IrResult<Self> {
        check_spacing(spacing)?;
        Ok(Self::from_coordinates((0..n).map(|i| (f64::from(i) * spacing, 0.0))))
    }

    /// `side × side` qubits on a square lattice, indexed row by row.
    pub fn square(side: u32, spacing: f64) -> IrResult<Self> {
        check_spacing(spacing)?;
        Ok(Self::from_coordinates((0..side).flat_map(|row| {
            (0..side).map(move |col| (f64::from(col) * spacing, f64::from(row) * spacing))
        })))
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.coords.len()
    }

    /// Qubit coordinates in index order.
    pub fn coordinates(&self) -> &[(f64, f64)] {
        &self.coords
    }

    /// Euclidean distance between qubits `i` and `j`.
    pub fn distance(&self, i: u32, j: u32) -> IrResult<f64> {
        let a = self.coord(i)?;
        let b = self.coord(j)?;
        Ok((a.0 - b.0).hypot(a.1 - b.1))
    }

    fn coord(&self, qubit: u32) -> IrResult<(f64, f64)> {
        self.coords
            .get(qubit as usize)
            .copied()
            .ok_or(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.coords.len(),
            })
    }

    /// All index pairs `(i, j)` with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.coords.len() as u32;
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
    }
}

fn check_spacing(spacing: f64) -> IrResult<()> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(IrError::InvalidSpacing(spacing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let r = Register::line(3, 5.0).unwrap();
        assert_eq!(r.num_qubits(), 3);
        assert_eq!(r.coordinates()[2], (10.0, 0.0));
        assert!((r.distance(0, 2).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_square() {
        let r = Register::square(2, 4.0).unwrap();
        assert_eq!(r.num_qubits(), 4);
        assert_eq!(r.coordinates()[3], (4.0, 4.0));
        assert!((r.distance(0, 3).unwrap() - 32.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_pairs() {
        let r = Register::line(3, 1.0).unwrap();
        let pairs: Vec<_> = r.pairs().collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(Register::line(0, 1.0).unwrap().pairs().count(), 0);
    }

    #[test]
    fn test_rejects_bad_spacing() {
        assert!(matches!(
            Register::line(2, 0.0),
            Err(IrError::InvalidSpacing(_))
        ));
        assert!(Register::square(2, f64::NAN).is_err());
        assert!(Register::line(2, 1.0).unwrap().distance(0, 2).is_err());
    }
}
