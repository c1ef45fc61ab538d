// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Registry of the operations `fixcheck` can evaluate and digest.

use fixmath::{Fix64, MathError};

use crate::sweep::Domain;

/// Result of one registered operation.
pub type OpResult = Result<Fix64, MathError>;

/// Callable behind a registered operation, with the domain each operand is
/// swept over.
#[derive(Clone, Copy)]
pub enum Kernel {
    /// One operand.
    Unary(fn(Fix64) -> OpResult, Domain),
    /// Two operands.
    Binary(fn(Fix64, Fix64) -> OpResult, Domain, Domain),
}

/// A named operation.
#[derive(Clone, Copy)]
pub struct Op {
    /// Name used on the command line and in digest files.
    pub name: &'static str,
    /// The callable.
    pub kernel: Kernel,
}

impl Op {
    /// Number of operands.
    pub const fn arity(&self) -> usize {
        match self.kernel {
            Kernel::Unary(..) => 1,
            Kernel::Binary(..) => 2,
        }
    }

    /// Applies the operation. `None` when `args` has the wrong length.
    pub fn apply(&self, args: &[Fix64]) -> Option<OpResult> {
        match (self.kernel, args) {
            (Kernel::Unary(f, _), &[x]) => Some(f(x)),
            (Kernel::Binary(f, _, _), &[x, y]) => Some(f(x, y)),
            _ => None,
        }
    }
}

impl core::fmt::Debug for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Op")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish()
    }
}

const fn unary(name: &'static str, f: fn(Fix64) -> OpResult, domain: Domain) -> Op {
    Op {
        name,
        kernel: Kernel::Unary(f, domain),
    }
}

const fn binary(
    name: &'static str,
    f: fn(Fix64, Fix64) -> OpResult,
    lhs: Domain,
    rhs: Domain,
) -> Op {
    Op {
        name,
        kernel: Kernel::Binary(f, lhs, rhs),
    }
}

/// Every operation, in digest order.
pub static OPS: &[Op] = &[
    binary("add", |a, b| Ok(a + b), Domain::Any, Domain::Any),
    binary("sub", |a, b| Ok(a - b), Domain::Any, Domain::Any),
    binary("mul", |a, b| Ok(a * b), Domain::Any, Domain::Any),
    binary("div", |a, b| Ok(a / b), Domain::Any, Domain::Any),
    binary("rem", |a, b| Ok(a % b), Domain::Any, Domain::Any),
    binary("overflow_add", |a, b| Ok(a.overflow_add(b)), Domain::Any, Domain::Any),
    binary("overflow_sub", |a, b| Ok(a.overflow_sub(b)), Domain::Any, Domain::Any),
    binary("overflow_mul", |a, b| Ok(a.overflow_mul(b)), Domain::Any, Domain::Any),
    unary("neg", |x| Ok(-x), Domain::Any),
    unary("abs", |x| Ok(x.abs()), Domain::Any),
    unary("floor", |x| Ok(x.floor()), Domain::Any),
    unary("ceil", |x| Ok(x.ceil()), Domain::Any),
    unary("round", |x| Ok(x.round()), Domain::Any),
    unary("sqrt", Fix64::sqrt, Domain::Moderate),
    unary("sin", |x| Ok(x.sin()), Domain::Any),
    unary("cos", |x| Ok(x.cos()), Domain::Any),
    unary("fast_sin", |x| Ok(x.fast_sin()), Domain::Any),
    unary("fast_cos", |x| Ok(x.fast_cos()), Domain::Any),
    unary("tan", |x| Ok(x.tan()), Domain::Moderate),
    unary("atan", |x| Ok(x.atan()), Domain::Moderate),
    binary("atan2", |y, x| Ok(y.atan2(x)), Domain::Moderate, Domain::Moderate),
    unary("acos", Fix64::acos, Domain::Unit),
    unary("asin", Fix64::asin, Domain::Unit),
    unary("fast_acos", Fix64::fast_acos, Domain::Unit),
    unary("log2", Fix64::log2, Domain::Positive),
    unary("ln", Fix64::ln, Domain::Positive),
    unary("pow2", |x| Ok(x.pow2()), Domain::Exponent),
    binary("pow", Fix64::pow, Domain::Unit, Domain::Exponent),
];

/// Looks an operation up by name.
pub fn find(name: &str) -> Option<&'static Op> {
    OPS.iter().find(|op| op.name == name)
}

/// Stable numeric code for a domain error, used in digests.
pub const fn error_code(err: &MathError) -> u8 {
    match err {
        MathError::NegativeSqrt(_) => 1,
        MathError::AcosDomain(_) => 2,
        MathError::NonPositiveLog(_) => 3,
    }
}
