//! Symbolic parameters for durations, amplitudes and angles.
//!
//! A [`Parameter`] is either a concrete real number or an expression tree
//! over named symbols. Symbols stay opaque to the composer: it only needs
//! to decide whether two durations are the same, see
//! [`Parameter::same_value`]. Concrete values are supplied later through
//! [`Parameter::bind`] or [`Parameter::evaluate`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{IrError, IrResult};

/// Relative tolerance used when comparing two concrete values.
const VALUE_RTOL: f64 = 1e-12;

/// A real-valued parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// A concrete number.
    Value(f64),
    /// A named symbol, bound at evaluation time.
    Symbol(String),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<Parameter>),
    /// Sum.
    Add(Box<Parameter>, Box<Parameter>),
    /// Difference.
    Sub(Box<Parameter>, Box<Parameter>),
    /// Product.
    Mul(Box<Parameter>, Box<Parameter>),
    /// Quotient.
    Div(Box<Parameter>, Box<Parameter>),
}

impl Parameter {
    /// A concrete value.
    pub fn value(value: f64) -> Self {
        Parameter::Value(value)
    }

    /// A named symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Parameter::Symbol(name.into())
    }

    /// The constant π.
    pub fn pi() -> Self {
        Parameter::Pi
    }

    /// True if the expression mentions at least one symbol.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Parameter::Value(_) | Parameter::Pi => false,
            Parameter::Symbol(_) => true,
            Parameter::Neg(inner) => inner.is_symbolic(),
            Parameter::Add(a, b)
            | Parameter::Sub(a, b)
            | Parameter::Mul(a, b)
            | Parameter::Div(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// The concrete value, if the expression has no symbols.
    pub fn as_f64(&self) -> Option<f64> {
        self.eval_with(&|_| None).ok()
    }

    /// Evaluate against a set of symbol bindings.
    pub fn evaluate(&self, values: &HashMap<String, f64>) -> IrResult<f64> {
        self.eval_with(&|name| values.get(name).copied())
            .map_err(IrError::UnboundParameter)
    }

    fn eval_with(&self, lookup: &dyn Fn(&str) -> Option<f64>) -> Result<f64, String> {
        Ok(match self {
            Parameter::Value(v) => *v,
            Parameter::Pi => PI,
            Parameter::Symbol(name) => lookup(name).ok_or_else(|| name.clone())?,
            Parameter::Neg(inner) => -inner.eval_with(lookup)?,
            Parameter::Add(a, b) => a.eval_with(lookup)? + b.eval_with(lookup)?,
            Parameter::Sub(a, b) => a.eval_with(lookup)? - b.eval_with(lookup)?,
            Parameter::Mul(a, b) => a.eval_with(lookup)? * b.eval_with(lookup)?,
            Parameter::Div(a, b) => a.eval_with(lookup)? / b.eval_with(lookup)?,
        })
    }

    /// Names of all symbols in the expression.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.visit_symbols(&mut names);
        names
    }

    fn visit_symbols(&self, names: &mut BTreeSet<String>) {
        match self {
            Parameter::Value(_) | Parameter::Pi => {}
            Parameter::Symbol(name) => {
                names.insert(name.clone());
            }
            Parameter::Neg(inner) => inner.visit_symbols(names),
            Parameter::Add(a, b)
            | Parameter::Sub(a, b)
            | Parameter::Mul(a, b)
            | Parameter::Div(a, b) => {
                a.visit_symbols(names);
                b.visit_symbols(names);
            }
        }
    }

    /// Substitute `value` for every occurrence of `name`.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        self.map_leaves(&|leaf| match leaf {
            Parameter::Symbol(n) if n == name => Parameter::Value(value),
            other => other.clone(),
        })
    }

    fn map_leaves(&self, f: &dyn Fn(&Parameter) -> Parameter) -> Self {
        let map = |p: &Parameter| Box::new(p.map_leaves(f));
        match self {
            Parameter::Neg(inner) => Parameter::Neg(map(inner)),
            Parameter::Add(a, b) => Parameter::Add(map(a), map(b)),
            Parameter::Sub(a, b) => Parameter::Sub(map(a), map(b)),
            Parameter::Mul(a, b) => Parameter::Mul(map(a), map(b)),
            Parameter::Div(a, b) => Parameter::Div(map(a), map(b)),
            leaf => f(leaf),
        }
    }

    /// Fold every symbol-free subexpression into a single value.
    #[must_use]
    pub fn simplify(&self) -> Self {
        if let Some(v) = self.as_f64() {
            return Parameter::Value(v);
        }
        match self {
            Parameter::Neg(inner) => Parameter::Neg(Box::new(inner.simplify())),
            Parameter::Add(a, b) => Parameter::Add(Box::new(a.simplify()), Box::new(b.simplify())),
            Parameter::Sub(a, b) => Parameter::Sub(Box::new(a.simplify()), Box::new(b.simplify())),
            Parameter::Mul(a, b) => Parameter::Mul(Box::new(a.simplify()), Box::new(b.simplify())),
            Parameter::Div(a, b) => Parameter::Div(Box::new(a.simplify()), Box::new(b.simplify())),
            leaf => leaf.clone(),
        }
    }

    /// Whether two parameters denote the same quantity.
    ///
    /// Concrete values compare within a relative tolerance of 1e-12.
    /// Symbolic expressions compare structurally after [`simplify`](Self::simplify);
    /// a concrete value never equals a symbolic one.
    pub fn same_value(&self, other: &Parameter) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => (a - b).abs() <= VALUE_RTOL * a.abs().max(b.abs()).max(1.0),
            (None, None) => self.simplify() == other.simplify(),
            _ => false,
        }
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::Value(0.0)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Value(v) => write!(f, "{v}"),
            Parameter::Symbol(name) => write!(f, "{name}"),
            Parameter::Pi => write!(f, "π"),
            Parameter::Neg(inner) => write!(f, "-({inner})"),
            Parameter::Add(a, b) => write!(f, "({a} + {b})"),
            Parameter::Sub(a, b) => write!(f, "({a} - {b})"),
            Parameter::Mul(a, b) => write!(f, "({a} * {b})"),
            Parameter::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Value(value)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::Value(f64::from(value))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl<T: Into<Parameter>> std::ops::$trait<T> for Parameter {
            type Output = Parameter;

            fn $method(self, rhs: T) -> Parameter {
                Parameter::$variant(Box::new(self), Box::new(rhs.into()))
            }
        }
    };
}

impl_binary_op!(Add, add, Add);
impl_binary_op!(Sub, sub, Sub);
impl_binary_op!(Mul, mul, Mul);
impl_binary_op!(Div, div, Div);

impl std::ops::Neg for Parameter {
    type Output = Parameter;

    fn neg(self) -> Parameter {
        Parameter::Neg(Box::new(self))
    }
}
