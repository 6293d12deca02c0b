//! Runtime values for the Minim interpreter.
//!
//! One tagged type is both the expression tree and the runtime value. The
//! identity invariant: any well-formed expression tree is a valid `Value`
//! and vice versa, so `quote` returns literal structure with zero
//! conversion.
//!
//! Heap payloads (lists, closures) are allocated only through the factory
//! methods here; `Heap::new` is not visible outside this module.

mod heap;

use smallvec::SmallVec;
use std::fmt;

use crate::{Env, Name, StringInterner};

pub use heap::Heap;

/// Runtime value / expression tree node.
#[derive(Clone, Debug)]
pub enum Value {
    /// Signed fixed-width integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Interned symbol: a bindable identifier, or inert quoted data.
    Symbol(Name),
    /// Ordered, possibly empty sequence of values.
    List(Heap<Vec<Value>>),
    /// Function value capturing its defining environment.
    Closure(Heap<ClosureValue>),
}

impl Value {
    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a closure value capturing `env`.
    #[inline]
    pub fn closure(params: impl IntoIterator<Item = Name>, body: Value, env: Env) -> Self {
        Value::Closure(Heap::new(ClosureValue {
            params: params.into_iter().collect(),
            body,
            env,
        }))
    }

    /// True for every value that is not a list. The empty list is not an
    /// atom either.
    #[inline]
    pub fn is_atom(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    /// Stable name of this value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Closure(_) => "closure",
        }
    }

    /// Rendered form of this value; symbols need the interner to print.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayValue<'a> {
        DisplayValue {
            value: self,
            interner,
        }
    }
}

/// Structural equality, except closures which compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.as_slice() == b.as_slice(),
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Function value: formal parameters, a body expression, and the
/// environment captured at creation (lexical scoping). Immutable once
/// constructed; the evaluator reads the fields, nothing else touches
/// them.
pub struct ClosureValue {
    /// Ordered formal parameter names.
    pub params: SmallVec<[Name; 4]>,
    /// Body expression; not evaluated until application.
    pub body: Value,
    /// Defining environment, shared with every future invocation.
    pub env: Env,
}

// Manual impl: the captured environment is omitted, since frames can
// reach back to this closure through their bindings.
impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureValue")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// [`fmt::Display`] adapter returned by [`Value::display`].
///
/// Integers print in decimal, booleans as `true`/`false`, symbols by
/// their interned text, lists as `(a b c)`, and closures as
/// `<closure/N>` where N is the parameter count.
pub struct DisplayValue<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Symbol(name) => f.write_str(self.interner.lookup(*name)),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item.display(self.interner))?;
                }
                f.write_str(")")
            }
            Value::Closure(closure) => write!(f, "<closure/{}>", closure.params.len()),
        }
    }
}

#[cfg(test)]
mod tests;
