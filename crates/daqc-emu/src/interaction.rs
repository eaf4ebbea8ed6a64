//! Pairwise qubit interactions.
//!
//! Two models, both decaying with distance r_ij between register sites:
//!
//! - `NN` (Ising): `Σ_{i<j} C6 / r_ij⁶ · n_i n_j`, with `n = (I − Z)/2`
//! - `XY`: `Σ_{i<j} C3 / r_ij³ · (X_i X_j + Y_i Y_j)`
//!
//! Coefficients are in rad/µs for distances in µm.

use daqc_ir::Register;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EmuError, EmuResult};
use crate::hamiltonian::HamiltonianTerm;

/// C6 for the 60S Rydberg level, rad·µm⁶/µs.
pub const DEFAULT_C6: f64 = 865_723.02;

/// C3 for the XY dipole coupling, rad·µm³/µs.
pub const DEFAULT_C3: f64 = 3700.0;

/// Kind of pairwise interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    /// Ising van der Waals coupling between Rydberg occupations.
    #[default]
    #[serde(alias = "nn")]
    NN,
    /// Resonant dipole exchange.
    #[serde(alias = "xy")]
    XY,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::NN => write!(f, "NN"),
            Interaction::XY => write!(f, "XY"),
        }
    }
}

impl FromStr for Interaction {
    type Err = EmuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nn" | "ising" => Ok(Interaction::NN),
            "xy" => Ok(Interaction::XY),
            other => Err(EmuError::Config(format!(
                "unknown interaction '{other}', expected 'nn' or 'xy'"
            ))),
        }
    }
}

/// An interaction kind with its coupling constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionModel {
    /// Which interaction applies.
    pub kind: Interaction,
    /// Van der Waals coefficient, used by `NN`.
    pub c6: f64,
    /// Dipole coefficient, used by `XY`.
    pub c3: f64,
}

impl InteractionModel {
    /// `kind` with the default coefficients.
    pub fn new(kind: Interaction) -> Self {
        Self {
            kind,
            c6: DEFAULT_C6,
            c3: DEFAULT_C3,
        }
    }

    /// Coupling strength between sites at distance `r`.
    fn strength(&self, r: f64) -> f64 {
        match self.kind {
            Interaction::NN => self.c6 / r.powi(6),
            Interaction::XY => self.c3 / r.powi(3),
        }
    }

    /// Interaction terms over every pair of `register` sites.
    pub fn terms(&self, register: &Register) -> EmuResult<Vec<HamiltonianTerm>> {
        let mut terms = Vec::new();
        for (i, j) in register.pairs() {
            let r = register.distance(i, j)?;
            if r == 0.0 {
                return Err(EmuError::CoincidentQubits {
                    first: i,
                    second: j,
                });
            }
            let strength = self.strength(r);
            match self.kind {
                Interaction::NN => {
                    // n_i n_j = (I - Z_i - Z_j + Z_i Z_j) / 4, identity dropped
                    let quarter = strength / 4.0;
                    terms.push(HamiltonianTerm::z(i, -quarter));
                    terms.push(HamiltonianTerm::z(j, -quarter));
                    terms.push(HamiltonianTerm::zz(i, j, quarter));
                }
                Interaction::XY => {
                    terms.push(HamiltonianTerm::xx(i, j, strength));
                    terms.push(HamiltonianTerm::yy(i, j, strength));
                }
            }
        }
        Ok(terms)
    }
}

impl Default for InteractionModel {
    fn default() -> Self {
        Self::new(Interaction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interaction() {
        assert_eq!("NN".parse::<Interaction>().unwrap(), Interaction::NN);
        assert_eq!(" xy ".parse::<Interaction>().unwrap(), Interaction::XY);
        assert!("zz".parse::<Interaction>().is_err());
    }

    #[test]
    fn test_strength_scaling() {
        let nn = InteractionModel::new(Interaction::NN);
        assert!((nn.strength(1.0) / nn.strength(2.0) - 64.0).abs() < 1e-9);

        let xy = InteractionModel::new(Interaction::XY);
        assert!((xy.strength(1.0) / xy.strength(2.0) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_sites_rejected() {
        let register = Register::from_coordinates([(0.0, 0.0), (0.0, 0.0)]);
        let err = InteractionModel::default().terms(&register).unwrap_err();
        assert!(matches!(
            err,
            EmuError::CoincidentQubits {
                first: 0,
                second: 1
            }
        ));
    }
}
