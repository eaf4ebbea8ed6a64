//! Translation of circuits into time-sliced generators.
//!
//! A validated circuit is flattened into its time-ordered leaves. Each
//! analog leaf becomes one [`EvolutionSlice`]: a duration and the
//! Hamiltonian that acts during it, which is the drive of the leaf plus
//! the interaction of the whole register. Digital leaves pass through
//! with their angles bound; a digital layer yields one segment per gate.
//!
//! For a constant rotation the drive on each addressed qubit is
//!
//!   Ω/2 (cos φ X − sin φ Y) − δ n,   n = (I − Z)/2
//!
//! with the identity part dropped. Kron members contribute their drives in
//! member order, followed by the interaction terms.

use daqc_ir::{AnalogBlock, Block, Circuit, DigitalBlock, IrError, Parameter, compose};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::config::EmulationConfig;
use crate::error::{EmuError, EmuResult};
use crate::hamiltonian::{Hamiltonian, HamiltonianTerm};
use crate::interaction::InteractionModel;

const NS_PER_US: f64 = 1000.0;

/// Evolution under a fixed Hamiltonian.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionSlice {
    /// Duration in µs.
    pub duration_us: f64,
    /// Generator in rad/µs.
    pub hamiltonian: Hamiltonian,
}

/// One step of a translated program.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Continuous evolution.
    Analog(EvolutionSlice),
    /// A gate, angles bound.
    Digital(DigitalBlock),
}

impl Segment {
    /// The slice, for analog segments.
    pub fn as_analog(&self) -> Option<&EvolutionSlice> {
        match self {
            Segment::Analog(slice) => Some(slice),
            Segment::Digital(_) => None,
        }
    }
}

/// Builds generators for circuits under one interaction model.
#[derive(Debug, Clone, Default)]
pub struct Emulator {
    model: InteractionModel,
}

impl Emulator {
    /// An emulator for `model`.
    pub fn new(model: InteractionModel) -> Self {
        Self { model }
    }

    /// An emulator for the model described by `config`.
    pub fn from_config(config: &EmulationConfig) -> Self {
        Self::new(config.model())
    }

    /// The interaction model.
    pub fn model(&self) -> &InteractionModel {
        &self.model
    }

    /// Translate `circuit` with `values` bound to its symbols.
    #[instrument(
        skip_all,
        fields(num_qubits = circuit.num_qubits(), interaction = %self.model.kind)
    )]
    pub fn translate(
        &self,
        circuit: &Circuit,
        values: &HashMap<String, f64>,
    ) -> EmuResult<Vec<Segment>> {
        let register = circuit.register();
        compose::validate_on(circuit.block(), register)?;

        let interaction = self.model.terms(register)?;
        let all_qubits: Vec<u32> = (0..register.num_qubits() as u32).collect();
        let pass = Translation {
            interaction: &interaction,
            all_qubits: &all_qubits,
            values,
        };

        let mut segments = Vec::new();
        pass.emit(circuit.block(), &mut segments)?;
        debug!(segments = segments.len(), "translated circuit");
        Ok(segments)
    }
}

/// State shared by every leaf of one translation.
struct Translation<'a> {
    interaction: &'a [HamiltonianTerm],
    all_qubits: &'a [u32],
    values: &'a HashMap<String, f64>,
}

impl Translation<'_> {
    fn emit(&self, block: &Block, out: &mut Vec<Segment>) -> EmuResult<()> {
        match block {
            Block::Chain(chain) => {
                for member in chain.blocks() {
                    self.emit(member, out)?;
                }
            }
            Block::Digital(digital) => {
                out.push(Segment::Digital(bind_digital(digital, self.values)?));
            }
            Block::Layer(layer) => {
                for gate in layer.gates() {
                    out.push(Segment::Digital(bind_digital(gate, self.values)?));
                }
            }
            Block::Analog(analog) => {
                let qubits: Vec<u32> = match analog.support().qubits() {
                    Some(local) => local.iter().copied().collect(),
                    None => self.all_qubits.to_vec(),
                };
                let mut hamiltonian = Hamiltonian::default();
                hamiltonian.extend(drive_terms(analog, &qubits, self.values)?);
                hamiltonian.extend(self.interaction.iter().cloned());
                out.push(Segment::Analog(slice(analog.duration(), hamiltonian, self.values)?));
            }
            Block::Kron(kron) => {
                let mut hamiltonian = Hamiltonian::default();
                for member in kron.blocks() {
                    let qubits: Vec<u32> = member
                        .support()
                        .qubits()
                        .into_iter()
                        .flatten()
                        .copied()
                        .collect();
                    hamiltonian.extend(drive_terms(member, &qubits, self.values)?);
                }
                hamiltonian.extend(self.interaction.iter().cloned());
                out.push(Segment::Analog(slice(&kron.duration(), hamiltonian, self.values)?));
            }
        }
        Ok(())
    }
}

fn evaluate(param: &Parameter, values: &HashMap<String, f64>) -> EmuResult<f64> {
    param.evaluate(values).map_err(|e| match e {
        IrError::UnboundParameter(name) => EmuError::UnboundParameter(name),
        other => EmuError::Ir(other),
    })
}

fn slice(
    duration: &Parameter,
    hamiltonian: Hamiltonian,
    values: &HashMap<String, f64>,
) -> EmuResult<EvolutionSlice> {
    let duration_ns = evaluate(duration, values)?;
    if !duration_ns.is_finite() {
        return Err(EmuError::NonFiniteDuration(duration_ns));
    }
    if duration_ns < 0.0 {
        return Err(EmuError::NegativeDuration(duration_ns));
    }
    Ok(EvolutionSlice {
        duration_us: duration_ns / NS_PER_US,
        hamiltonian: hamiltonian.simplified(),
    })
}

fn drive_terms(
    block: &AnalogBlock,
    qubits: &[u32],
    values: &HashMap<String, f64>,
) -> EmuResult<Vec<HamiltonianTerm>> {
    let AnalogBlock::ConstantRotation {
        omega,
        delta,
        phase,
        ..
    } = block
    else {
        return Ok(Vec::new());
    };
    let omega = evaluate(omega, values)?;
    let delta = evaluate(delta, values)?;
    let phase = evaluate(phase, values)?;

    let x = omega / 2.0 * phase.cos();
    let y = -omega / 2.0 * phase.sin();
    let z = delta / 2.0;
    Ok(qubits
        .iter()
        .flat_map(|&q| {
            [
                HamiltonianTerm::x(q, x),
                HamiltonianTerm::y(q, y),
                HamiltonianTerm::z(q, z),
            ]
        })
        .collect())
}

fn bind_digital(block: &DigitalBlock, values: &HashMap<String, f64>) -> EmuResult<DigitalBlock> {
    let bound = values
        .iter()
        .fold(block.clone(), |b, (name, &value)| b.bind(name, value));
    if let Some(name) = bound.gate().angle().and_then(|a| a.symbols().into_iter().next()) {
        return Err(EmuError::UnboundParameter(name));
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::{PauliOp, PauliString};
    use daqc_ir::QubitSupport;
    use std::f64::consts::PI;

    #[test]
    fn test_drive_terms_for_x_rotation() {
        let rx = AnalogBlock::analog_rx(PI, QubitSupport::Global).unwrap();
        let terms = drive_terms(&rx, &[0], &HashMap::new()).unwrap();
        let h = Hamiltonian::from_terms(terms).simplified();
        assert_eq!(h.n_terms(), 1);
        assert!((h.coefficient(&PauliString::single(0, PauliOp::X)) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_wait_has_no_drive() {
        let wait = AnalogBlock::wait(10.0, QubitSupport::Global).unwrap();
        assert!(drive_terms(&wait, &[0, 1], &HashMap::new()).unwrap().is_empty());
    }

    #[test]
    fn test_digital_angles_must_bind() {
        let rx = DigitalBlock::rx(0, Parameter::symbol("theta"));
        assert!(matches!(
            bind_digital(&rx, &HashMap::new()),
            Err(EmuError::UnboundParameter(name)) if name == "theta"
        ));
        let values = HashMap::from([("theta".to_string(), 0.3)]);
        let bound = bind_digital(&rx, &values).unwrap();
        assert_eq!(bound.gate().angle().and_then(Parameter::as_f64), Some(0.3));
    }
}
