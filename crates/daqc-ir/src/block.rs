//! Digital and analog blocks.
//!
//! Primitive analog blocks describe continuous evolution for a fixed
//! duration; digital blocks are ordinary gates. Composite values
//! ([`AnalogChain`], [`AnalogKron`]) are only produced by the
//! [`compose`](crate::compose) functions, which enforce the composition
//! rules. Every block converts into the closed sum [`Block`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::f64::consts::FRAC_PI_2;

use crate::error::{IrError, IrResult};
use crate::parameter::Parameter;
use crate::support::QubitSupport;

/// Durations are given in ns, amplitudes in rad/µs.
const NS_PER_US: f64 = 1000.0;

/// A primitive analog operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalogBlock {
    /// Free evolution under the interaction term alone.
    Wait {
        /// Duration in ns.
        duration: Parameter,
        /// Qubits the block is attached to.
        support: QubitSupport,
    },
    /// Evolution under the interaction term plus a constant drive.
    ConstantRotation {
        /// Duration in ns.
        duration: Parameter,
        /// Rabi frequency Ω in rad/µs.
        omega: Parameter,
        /// Detuning δ in rad/µs.
        delta: Parameter,
        /// Drive phase φ in rad.
        phase: Parameter,
        /// Qubits the drive acts on.
        support: QubitSupport,
    },
}

impl AnalogBlock {
    /// Free evolution for `duration` ns.
    pub fn wait(
        duration: impl Into<Parameter>,
        support: impl Into<QubitSupport>,
    ) -> IrResult<Self> {
        let block = AnalogBlock::Wait {
            duration: duration.into(),
            support: support.into(),
        };
        block.check()?;
        Ok(block)
    }

    /// Constant drive with amplitude `omega`, detuning `delta` and `phase`.
    pub fn rotation(
        duration: impl Into<Parameter>,
        omega: impl Into<Parameter>,
        delta: impl Into<Parameter>,
        phase: impl Into<Parameter>,
        support: impl Into<QubitSupport>,
    ) -> IrResult<Self> {
        let block = AnalogBlock::ConstantRotation {
            duration: duration.into(),
            omega: omega.into(),
            delta: delta.into(),
            phase: phase.into(),
            support: support.into(),
        };
        block.check()?;
        Ok(block)
    }

    /// Rotation by `angle` about X: Ω = π rad/µs, no detuning.
    pub fn analog_rx(
        angle: impl Into<Parameter>,
        support: impl Into<QubitSupport>,
    ) -> IrResult<Self> {
        Self::driven_rotation(angle.into(), 0.0, support.into())
    }

    /// Rotation by `angle` about Y: the X rotation with phase −π/2.
    pub fn analog_ry(
        angle: impl Into<Parameter>,
        support: impl Into<QubitSupport>,
    ) -> IrResult<Self> {
        Self::driven_rotation(angle.into(), -FRAC_PI_2, support.into())
    }

    /// Rotation by `angle` about Z: pure detuning δ = π rad/µs.
    pub fn analog_rz(
        angle: impl Into<Parameter>,
        support: impl Into<QubitSupport>,
    ) -> IrResult<Self> {
        let duration = (Parameter::value(NS_PER_US) * angle / Parameter::pi()).simplify();
        Self::rotation(duration, 0.0, Parameter::pi(), 0.0, support)
    }

    fn driven_rotation(angle: Parameter, phase: f64, support: QubitSupport) -> IrResult<Self> {
        let duration = (Parameter::value(NS_PER_US) * angle / Parameter::pi()).simplify();
        Self::rotation(duration, Parameter::pi(), 0.0, phase, support)
    }

    /// Duration in ns.
    pub fn duration(&self) -> &Parameter {
        match self {
            AnalogBlock::Wait { duration, .. } | AnalogBlock::ConstantRotation { duration, .. } => {
                duration
            }
        }
    }

    /// Qubit support.
    pub fn support(&self) -> &QubitSupport {
        match self {
            AnalogBlock::Wait { support, .. } | AnalogBlock::ConstantRotation { support, .. } => {
                support
            }
        }
    }

    /// Short name used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            AnalogBlock::Wait { .. } => "wait",
            AnalogBlock::ConstantRotation { .. } => "rotation",
        }
    }

    /// Check the invariants of a single primitive.
    ///
    /// A concrete duration must be finite and non-negative, and a local
    /// support must not be empty.
    pub fn check(&self) -> IrResult<()> {
        if let Some(d) = self.duration().as_f64() {
            if !d.is_finite() {
                return Err(IrError::NonFiniteDuration(d));
            }
            if d < 0.0 {
                return Err(IrError::NegativeDuration(d));
            }
        }
        match self.support() {
            QubitSupport::Local(qubits) if qubits.is_empty() => Err(IrError::EmptySupport),
            _ => Ok(()),
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        match self {
            AnalogBlock::Wait { duration, .. } => vec![duration],
            AnalogBlock::ConstantRotation {
                duration,
                omega,
                delta,
                phase,
                ..
            } => vec![duration, omega, delta, phase],
        }
    }

    /// A copy with `name` bound to `value` in every parameter.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            AnalogBlock::Wait { duration, support } => AnalogBlock::Wait {
                duration: duration.bind(name, value),
                support: support.clone(),
            },
            AnalogBlock::ConstantRotation {
                duration,
                omega,
                delta,
                phase,
                support,
            } => AnalogBlock::ConstantRotation {
                duration: duration.bind(name, value),
                omega: omega.bind(name, value),
                delta: delta.bind(name, value),
                phase: phase.bind(name, value),
                support: support.clone(),
            },
        }
    }
}

/// Gates available as digital blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DigitalGate {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
    /// Rotation about X.
    Rx(Parameter),
    /// Rotation about Y.
    Ry(Parameter),
    /// Rotation about Z.
    Rz(Parameter),
    /// Controlled-NOT, control first.
    CNOT,
    /// Controlled-Z.
    CZ,
    /// Controlled rotation about X, control first.
    CRx(Parameter),
    /// Controlled rotation about Y, control first.
    CRy(Parameter),
    /// Controlled rotation about Z, control first.
    CRz(Parameter),
}

impl DigitalGate {
    /// Gate name.
    pub fn name(&self) -> &'static str {
        match self {
            DigitalGate::X => "x",
            DigitalGate::Y => "y",
            DigitalGate::Z => "z",
            DigitalGate::H => "h",
            DigitalGate::Rx(_) => "rx",
            DigitalGate::Ry(_) => "ry",
            DigitalGate::Rz(_) => "rz",
            DigitalGate::CNOT => "cnot",
            DigitalGate::CZ => "cz",
            DigitalGate::CRx(_) => "crx",
            DigitalGate::CRy(_) => "cry",
            DigitalGate::CRz(_) => "crz",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            DigitalGate::CNOT
            | DigitalGate::CZ
            | DigitalGate::CRx(_)
            | DigitalGate::CRy(_)
            | DigitalGate::CRz(_) => 2,
            _ => 1,
        }
    }

    /// Rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<&Parameter> {
        match self {
            DigitalGate::Rx(theta)
            | DigitalGate::Ry(theta)
            | DigitalGate::Rz(theta)
            | DigitalGate::CRx(theta)
            | DigitalGate::CRy(theta)
            | DigitalGate::CRz(theta) => Some(theta),
            _ => None,
        }
    }
}

/// A gate applied to specific qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalBlock {
    gate: DigitalGate,
    qubits: Vec<u32>,
}

impl DigitalBlock {
    /// Apply `gate` to `qubits`, checking arity and distinctness.
    pub fn new(gate: DigitalGate, qubits: impl IntoIterator<Item = u32>) -> IrResult<Self> {
        let block = Self {
            gate,
            qubits: qubits.into_iter().collect(),
        };
        block.check()?;
        Ok(block)
    }

    /// Pauli-X on `qubit`.
    pub fn x(qubit: u32) -> Self {
        Self::single(DigitalGate::X, qubit)
    }

    /// Pauli-Y on `qubit`.
    pub fn y(qubit: u32) -> Self {
        Self::single(DigitalGate::Y, qubit)
    }

    /// Pauli-Z on `qubit`.
    pub fn z(qubit: u32) -> Self {
        Self::single(DigitalGate::Z, qubit)
    }

    /// Hadamard on `qubit`.
    pub fn h(qubit: u32) -> Self {
        Self::single(DigitalGate::H, qubit)
    }

    /// X rotation on `qubit`.
    pub fn rx(qubit: u32, theta: impl Into<Parameter>) -> Self {
        Self::single(DigitalGate::Rx(theta.into()), qubit)
    }

    /// Y rotation on `qubit`.
    pub fn ry(qubit: u32, theta: impl Into<Parameter>) -> Self {
        Self::single(DigitalGate::Ry(theta.into()), qubit)
    }

    /// Z rotation on `qubit`.
    pub fn rz(qubit: u32, theta: impl Into<Parameter>) -> Self {
        Self::single(DigitalGate::Rz(theta.into()), qubit)
    }

    /// CNOT with `control` and `target`.
    pub fn cnot(control: u32, target: u32) -> IrResult<Self> {
        Self::new(DigitalGate::CNOT, [control, target])
    }

    /// CZ between `a` and `b`.
    pub fn cz(a: u32, b: u32) -> IrResult<Self> {
        Self::new(DigitalGate::CZ, [a, b])
    }

    /// X rotation on `target` controlled by `control`.
    pub fn crx(control: u32, target: u32, theta: impl Into<Parameter>) -> IrResult<Self> {
        Self::new(DigitalGate::CRx(theta.into()), [control, target])
    }

    /// Y rotation on `target` controlled by `control`.
    pub fn cry(control: u32, target: u32, theta: impl Into<Parameter>) -> IrResult<Self> {
        Self::new(DigitalGate::CRy(theta.into()), [control, target])
    }

    /// Z rotation on `target` controlled by `control`.
    pub fn crz(control: u32, target: u32, theta: impl Into<Parameter>) -> IrResult<Self> {
        Self::new(DigitalGate::CRz(theta.into()), [control, target])
    }

    fn single(gate: DigitalGate, qubit: u32) -> Self {
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// The gate.
    pub fn gate(&self) -> &DigitalGate {
        &self.gate
    }

    /// Operand qubits in gate order.
    pub fn qubits(&self) -> &[u32] {
        &self.qubits
    }

    /// Check operand count and distinctness.
    pub fn check(&self) -> IrResult<()> {
        let expected = self.gate.num_qubits();
        if self.qubits.len() != expected {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.gate.name().to_string(),
                expected,
                got: self.qubits.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for &q in &self.qubits {
            if !seen.insert(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    gate_name: self.gate.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// A copy with `name` bound to `value` in the gate angle.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        let gate = match &self.gate {
            DigitalGate::Rx(t) => DigitalGate::Rx(t.bind(name, value)),
            DigitalGate::Ry(t) => DigitalGate::Ry(t.bind(name, value)),
            DigitalGate::Rz(t) => DigitalGate::Rz(t.bind(name, value)),
            DigitalGate::CRx(t) => DigitalGate::CRx(t.bind(name, value)),
            DigitalGate::CRy(t) => DigitalGate::CRy(t.bind(name, value)),
            DigitalGate::CRz(t) => DigitalGate::CRz(t.bind(name, value)),
            other => other.clone(),
        };
        Self {
            gate,
            qubits: self.qubits.clone(),
        }
    }
}

/// Gates applied simultaneously on disjoint qubits.
///
/// Built by [`layer`](crate::compose::layer); gates keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalLayer {
    gates: Vec<DigitalBlock>,
}

impl DigitalLayer {
    pub(crate) fn from_checked(gates: Vec<DigitalBlock>) -> Self {
        Self { gates }
    }

    /// Gates in input order.
    pub fn gates(&self) -> &[DigitalBlock] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True if the layer has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Every qubit touched by the layer.
    pub fn qubits(&self) -> BTreeSet<u32> {
        self.gates
            .iter()
            .flat_map(|g| g.qubits().iter().copied())
            .collect()
    }
}

/// Analog primitives applied simultaneously on disjoint qubits.
///
/// Built by [`kron`](crate::compose::kron); members keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogKron {
    blocks: Vec<AnalogBlock>,
}

impl AnalogKron {
    pub(crate) fn from_checked(blocks: Vec<AnalogBlock>) -> Self {
        Self { blocks }
    }

    /// Members in input order.
    pub fn blocks(&self) -> &[AnalogBlock] {
        &self.blocks
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if the kron has no members.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The shared member duration.
    pub fn duration(&self) -> Parameter {
        self.blocks
            .first()
            .map(|b| b.duration().clone())
            .unwrap_or_default()
    }

    /// Union of the member supports.
    pub fn support(&self) -> QubitSupport {
        QubitSupport::Local(
            self.blocks
                .iter()
                .filter_map(|b| b.support().qubits())
                .flatten()
                .copied()
                .collect(),
        )
    }
}

/// Blocks applied one after another.
///
/// Built by [`chain`](crate::compose::chain); order is time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogChain {
    blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
}

impl AnalogChain {
    pub(crate) fn from_checked(blocks: Vec<Block>) -> Self {
        Self { blocks, tag: None }
    }

    /// Attach a label.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The label, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Members in time order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of direct members.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The same members in reverse time order, nested chains reversed too.
    ///
    /// Primitives are kept as they are, not inverted.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            blocks: self
                .blocks
                .iter()
                .rev()
                .map(|b| match b {
                    Block::Chain(c) => Block::Chain(c.reversed()),
                    other => other.clone(),
                })
                .collect(),
            tag: self.tag.clone(),
        }
    }

    /// Non-chain leaves in time order, nested chains expanded.
    pub fn flatten(&self) -> Vec<&Block> {
        let mut leaves = Vec::new();
        collect_leaves(&self.blocks, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(blocks: &'a [Block], leaves: &mut Vec<&'a Block>) {
    for block in blocks {
        match block {
            Block::Chain(chain) => collect_leaves(&chain.blocks, leaves),
            leaf => leaves.push(leaf),
        }
    }
}

/// Any block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A gate.
    Digital(DigitalBlock),
    /// A primitive analog operation.
    Analog(AnalogBlock),
    /// Simultaneous gates.
    Layer(DigitalLayer),
    /// Simultaneous analog primitives.
    Kron(AnalogKron),
    /// Sequential composition.
    Chain(AnalogChain),
}

impl Block {
    /// Total analog duration in ns. Digital blocks contribute nothing.
    pub fn duration(&self) -> Parameter {
        match self {
            Block::Digital(_) | Block::Layer(_) => Parameter::value(0.0),
            Block::Analog(b) => b.duration().clone(),
            Block::Kron(k) => k.duration(),
            Block::Chain(c) => c
                .blocks
                .iter()
                .map(Block::duration)
                .fold(Parameter::value(0.0), |acc, d| acc + d)
                .simplify(),
        }
    }

    /// Names of every symbol appearing in the block.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.visit_parameters(&mut |p: &Parameter| names.extend(p.symbols()));
        names
    }

    fn visit_parameters(&self, f: &mut dyn FnMut(&Parameter)) {
        match self {
            Block::Digital(d) => {
                if let Some(theta) = d.gate.angle() {
                    f(theta);
                }
            }
            Block::Layer(l) => l
                .gates
                .iter()
                .filter_map(|g| g.gate.angle())
                .for_each(f),
            Block::Analog(a) => a.parameters().into_iter().for_each(f),
            Block::Kron(k) => k
                .blocks
                .iter()
                .flat_map(AnalogBlock::parameters)
                .for_each(f),
            Block::Chain(c) => c.blocks.iter().for_each(|b| b.visit_parameters(f)),
        }
    }

    /// A copy with `name` bound to `value` everywhere.
    ///
    /// The result is not re-validated; a bound duration may turn out
    /// negative, which [`validate`](crate::compose::validate) reports.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            Block::Digital(d) => Block::Digital(d.bind(name, value)),
            Block::Layer(l) => Block::Layer(DigitalLayer {
                gates: l.gates.iter().map(|g| g.bind(name, value)).collect(),
            }),
            Block::Analog(a) => Block::Analog(a.bind(name, value)),
            Block::Kron(k) => Block::Kron(AnalogKron {
                blocks: k.blocks.iter().map(|b| b.bind(name, value)).collect(),
            }),
            Block::Chain(c) => Block::Chain(AnalogChain {
                blocks: c.blocks.iter().map(|b| b.bind(name, value)).collect(),
                tag: c.tag.clone(),
            }),
        }
    }

    /// A copy with every entry of `values` bound.
    #[must_use]
    pub fn bind_values(&self, values: &HashMap<String, f64>) -> Self {
        values
            .iter()
            .fold(self.clone(), |block, (name, &value)| block.bind(name, value))
    }

    /// Short name used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Digital(d) => d.gate.name(),
            Block::Analog(a) => a.name(),
            Block::Layer(_) => "layer",
            Block::Kron(_) => "kron",
            Block::Chain(_) => "chain",
        }
    }

    /// True for analog primitives and krons.
    pub fn is_analog(&self) -> bool {
        matches!(self, Block::Analog(_) | Block::Kron(_))
    }

    /// Check every composition invariant, see [`crate::compose::validate`].
    pub fn validate(&self) -> IrResult<()> {
        crate::compose::validate(self)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON and validate the result.
    pub fn from_json(json: &str) -> IrResult<Self> {
        let block: Block = serde_json::from_str(json)?;
        block.validate()?;
        Ok(block)
    }
}

impl From<DigitalBlock> for Block {
    fn from(block: DigitalBlock) -> Self {
        Block::Digital(block)
    }
}

impl From<AnalogBlock> for Block {
    fn from(block: AnalogBlock) -> Self {
        Block::Analog(block)
    }
}

impl From<DigitalLayer> for Block {
    fn from(block: DigitalLayer) -> Self {
        Block::Layer(block)
    }
}

impl From<AnalogKron> for Block {
    fn from(block: AnalogKron) -> Self {
        Block::Kron(block)
    }
}

impl From<AnalogChain> for Block {
    fn from(block: AnalogChain) -> Self {
        Block::Chain(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_wait_defaults() {
        let w = AnalogBlock::wait(200.0, QubitSupport::Global).unwrap();
        assert_eq!(w.name(), "wait");
        assert_eq!(w.duration().as_f64(), Some(200.0));
        assert!(w.support().is_global());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = AnalogBlock::wait(-1.0, QubitSupport::Global).unwrap_err();
        assert!(matches!(err, IrError::NegativeDuration(d) if d == -1.0));

        // Symbolic durations are only checked once bound.
        assert!(AnalogBlock::wait(Parameter::symbol("t"), QubitSupport::Global).is_ok());
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        for d in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = AnalogBlock::wait(d, [0]).unwrap_err();
            assert!(matches!(err, IrError::NonFiniteDuration(_)), "{d}: {err:?}");
        }
        let err = AnalogBlock::rotation(f64::INFINITY, 1.0, 0.0, 0.0, QubitSupport::Global)
            .unwrap_err();
        assert!(matches!(err, IrError::NonFiniteDuration(d) if d.is_infinite()));
    }

    #[test]
    fn test_empty_local_support_rejected() {
        let err = AnalogBlock::wait(10.0, QubitSupport::local([])).unwrap_err();
        assert!(matches!(err, IrError::EmptySupport));
    }

    #[test]
    fn test_analog_rotations() {
        let rx = AnalogBlock::analog_rx(PI / 2.0, QubitSupport::Global).unwrap();
        match &rx {
            AnalogBlock::ConstantRotation {
                duration,
                omega,
                delta,
                phase,
                ..
            } => {
                assert!((duration.as_f64().unwrap() - 500.0).abs() < 1e-9);
                assert!((omega.as_f64().unwrap() - PI).abs() < 1e-12);
                assert_eq!(delta.as_f64(), Some(0.0));
                assert_eq!(phase.as_f64(), Some(0.0));
            }
            AnalogBlock::Wait { .. } => panic!("Expected rotation"),
        }

        let ry = AnalogBlock::analog_ry(PI, 0u32).unwrap();
        match &ry {
            AnalogBlock::ConstantRotation { phase, .. } => {
                assert!((phase.as_f64().unwrap() + PI / 2.0).abs() < 1e-12);
            }
            AnalogBlock::Wait { .. } => panic!("Expected rotation"),
        }
        assert!((ry.duration().as_f64().unwrap() - 1000.0).abs() < 1e-9);

        let rz = AnalogBlock::analog_rz(Parameter::symbol("x"), QubitSupport::Global).unwrap();
        assert!(rz.duration().is_symbolic());
        match &rz {
            AnalogBlock::ConstantRotation { omega, delta, .. } => {
                assert_eq!(omega.as_f64(), Some(0.0));
                assert!((delta.as_f64().unwrap() - PI).abs() < 1e-12);
            }
            AnalogBlock::Wait { .. } => panic!("Expected rotation"),
        }
    }

    #[test]
    fn test_digital_blocks() {
        let cnot = DigitalBlock::cnot(0, 1).unwrap();
        assert_eq!(cnot.gate().name(), "cnot");
        assert_eq!(cnot.qubits(), &[0, 1]);

        assert!(matches!(
            DigitalBlock::cz(2, 2),
            Err(IrError::DuplicateQubit { qubit: 2, .. })
        ));
        let crz = DigitalBlock::crz(1, 0, Parameter::symbol("phi")).unwrap();
        assert_eq!(crz.gate().num_qubits(), 2);
        assert_eq!(crz.gate().angle(), Some(&Parameter::symbol("phi")));
        assert_eq!(crz.bind("phi", 0.5).gate(), &DigitalGate::CRz(Parameter::value(0.5)));
        assert!(matches!(
            DigitalBlock::crx(0, 0, 1.0),
            Err(IrError::DuplicateQubit { qubit: 0, .. })
        ));

        assert!(matches!(
            DigitalBlock::new(DigitalGate::H, [0, 1]),
            Err(IrError::QubitCountMismatch {
                expected: 1,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_chain_reversed() {
        let inner = crate::compose::chain([DigitalBlock::x(0), DigitalBlock::y(0)]).unwrap();
        let outer = crate::compose::chain([Block::from(DigitalBlock::h(1)), Block::from(inner)])
            .unwrap()
            .with_tag("t");
        let rev = outer.reversed();
        assert_eq!(rev.tag(), Some("t"));
        let names: Vec<_> = rev.flatten().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["y", "x", "h"]);
    }

    #[test]
    fn test_block_parameters_and_bind() {
        let block = Block::from(
            AnalogBlock::rotation(
                Parameter::symbol("t") * 1000.0,
                Parameter::symbol("omega"),
                0.0,
                0.0,
                QubitSupport::Global,
            )
            .unwrap(),
        );
        let names: Vec<_> = block.parameters().into_iter().collect();
        assert_eq!(names, vec!["omega".to_string(), "t".to_string()]);

        let bound = block.bind("t", 0.25);
        assert_eq!(bound.duration().as_f64(), Some(250.0));
        assert_eq!(bound.parameters().len(), 1);

        let digital = Block::from(DigitalBlock::rx(0, Parameter::symbol("theta")));
        assert!(digital.parameters().contains("theta"));
        assert_eq!(digital.duration().as_f64(), Some(0.0));
    }
}
