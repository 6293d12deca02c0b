//! The recursive evaluator.
//!
//! One procedure interprets an already-parsed expression tree inside a
//! lexical environment. Dispatch order matters: later rules assume the
//! earlier ones did not match. Self-evaluating atoms and symbol lookup
//! come first, then the special forms by pre-interned name, then closure
//! application, and finally the call fallback that evaluates the head of
//! any remaining form.
//!
//! The only mutation anywhere in the engine is binding creation: `define`
//! into the current frame, and the one new frame built per closure call.

use minim_ir::{ClosureValue, Env, Name, SharedInterner, Value};
use minim_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::errors::{
    already_defined, arity_mismatch, empty_list, invalid_definition, invalid_parameter_list,
    not_a_function, not_a_list, stack_overflow, type_mismatch, unbound_symbol, EvalResult,
};
use crate::names::SpecialNames;
use crate::operators::eval_arith;

/// Maximum nesting depth of one evaluation, counting every recursive
/// evaluator step (closure bodies included). Exceeding it fails with a
/// `StackOverflow` error instead of aborting the process; depths under
/// the bound are safe because every step also runs under the stack
/// guard.
pub const MAX_EVAL_DEPTH: usize = 10_000;

/// Tree-walking evaluator.
///
/// Holds the pre-interned dispatch names and the interner handle used
/// for error messages. Construction is cheap and one evaluator serves
/// any number of [`eval`](Evaluator::eval) calls; evaluation itself is
/// single-threaded, synchronous, and purely recursive.
pub struct Evaluator {
    interner: SharedInterner,
    names: SpecialNames,
    depth: usize,
}

impl Evaluator {
    /// Create an evaluator over `interner`.
    pub fn new(interner: &SharedInterner) -> Self {
        Evaluator {
            names: SpecialNames::new(interner),
            interner: interner.clone(),
            depth: 0,
        }
    }

    /// Evaluate an expression tree in `env`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, expr: &Value, env: &Env) -> EvalResult {
        self.depth = 0;
        self.eval_expr(expr, env)
    }

    /// One recursive step: depth accounting plus the stack guard.
    fn eval_expr(&mut self, expr: &Value, env: &Env) -> EvalResult {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(stack_overflow(self.depth));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.dispatch(expr, env));
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, expr: &Value, env: &Env) -> EvalResult {
        let items = match expr {
            // Self-evaluating atoms.
            Value::Int(_) | Value::Bool(_) => return Ok(expr.clone()),
            Value::Symbol(name) => {
                return env
                    .lookup(*name)
                    .ok_or_else(|| unbound_symbol(self.interner.lookup(*name)))
            }
            // Every remaining form must be a list.
            Value::Closure(_) => return Err(not_a_list(expr.type_name())),
            Value::List(items) => items,
        };

        let Some((head, operands)) = items.split_first() else {
            // () names no operation.
            return Err(not_a_function(expr.type_name()));
        };

        if let Value::Symbol(op) = head {
            let names = self.names;
            if *op == names.quote {
                return Self::eval_quote(operands);
            }
            if *op == names.atom {
                return self.eval_atom(operands, env);
            }
            if *op == names.eq {
                return self.eval_eq(operands, env);
            }
            if let Some(arith) = names.arith_op(*op) {
                let [left, right] = Self::exactly::<2>(operands)?;
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                return eval_arith(arith, &left, &right);
            }
            if *op == names.if_ {
                return self.eval_if(operands, env);
            }
            if *op == names.define {
                return self.eval_define(operands, env);
            }
            if *op == names.lambda {
                return Self::eval_lambda(operands, env);
            }
            if *op == names.cons {
                return self.eval_cons(operands, env);
            }
            if *op == names.head {
                return self.eval_head(operands, env);
            }
            if *op == names.tail {
                return self.eval_tail(operands, env);
            }
            if *op == names.empty {
                return self.eval_empty(operands, env);
            }
            // Any other symbol falls through to the call rules.
        }

        self.eval_call(head, operands, env)
    }

    /// `(quote x)`: returns `x` unevaluated.
    fn eval_quote(operands: &[Value]) -> EvalResult {
        let [form] = Self::exactly::<1>(operands)?;
        Ok(form.clone())
    }

    /// `(atom x)`: true iff the evaluated operand is not a list.
    fn eval_atom(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [form] = Self::exactly::<1>(operands)?;
        let value = self.eval_expr(form, env)?;
        Ok(Value::Bool(value.is_atom()))
    }

    /// `(eq a b)`: true iff both results are atoms and equal. Lists are
    /// never `eq`-equal, not even to themselves; that is atom-only `eq`,
    /// a language property rather than an oversight. Each operand is
    /// evaluated exactly once.
    fn eval_eq(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [left, right] = Self::exactly::<2>(operands)?;
        let left = self.eval_expr(left, env)?;
        let right = self.eval_expr(right, env)?;
        Ok(Value::Bool(
            left.is_atom() && right.is_atom() && left == right,
        ))
    }

    /// `(if cond then else)`: `then` only when the condition is exactly
    /// `true`; any other value selects `else`. Operands past the third
    /// are ignored.
    fn eval_if(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [cond, then_branch, else_branch, ..] = operands else {
            return Err(arity_mismatch(3, operands.len()));
        };
        let branch = match self.eval_expr(cond, env)? {
            Value::Bool(true) => then_branch,
            _ => else_branch,
        };
        self.eval_expr(branch, env)
    }

    /// `(define sym val)`: evaluate `val` once and write-once bind it in
    /// the current frame. Returns `true`; callers must not depend on the
    /// payload beyond truthiness.
    fn eval_define(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [target, value_expr] = Self::exactly::<2>(operands)?;
        let Value::Symbol(name) = target else {
            return Err(invalid_definition(target.type_name()));
        };
        let value = self.eval_expr(value_expr, env)?;
        env.define(*name, value)
            .map_err(|_| already_defined(self.interner.lookup(*name)))?;
        Ok(Value::Bool(true))
    }

    /// `(lambda params body)`: capture the current environment. The body
    /// is not evaluated at creation time.
    fn eval_lambda(operands: &[Value], env: &Env) -> EvalResult {
        let [params_expr, body] = Self::exactly::<2>(operands)?;
        let Value::List(param_items) = params_expr else {
            return Err(invalid_parameter_list(params_expr.type_name()));
        };
        let mut params = Vec::with_capacity(param_items.len());
        for item in param_items.iter() {
            let Value::Symbol(name) = item else {
                return Err(invalid_parameter_list(item.type_name()));
            };
            params.push(*name);
        }
        Ok(Value::closure(params, body.clone(), env.clone()))
    }

    /// `(cons x xs)`: prepend without disturbing the original list.
    fn eval_cons(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [first, rest] = Self::exactly::<2>(operands)?;
        let first = self.eval_expr(first, env)?;
        let rest = self.eval_expr(rest, env)?;
        let Value::List(items) = &rest else {
            return Err(type_mismatch("list", rest.type_name()));
        };
        let mut joined = Vec::with_capacity(items.len() + 1);
        joined.push(first);
        joined.extend(items.iter().cloned());
        Ok(Value::list(joined))
    }

    /// `(head xs)`.
    fn eval_head(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [form] = Self::exactly::<1>(operands)?;
        let value = self.eval_expr(form, env)?;
        let Value::List(items) = &value else {
            return Err(type_mismatch("list", value.type_name()));
        };
        items.first().cloned().ok_or_else(|| empty_list("head"))
    }

    /// `(tail xs)`: everything but the first element, order preserved.
    fn eval_tail(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [form] = Self::exactly::<1>(operands)?;
        let value = self.eval_expr(form, env)?;
        let Value::List(items) = &value else {
            return Err(type_mismatch("list", value.type_name()));
        };
        match items.split_first() {
            None => Err(empty_list("tail")),
            Some((_, rest)) => Ok(Value::list(rest.to_vec())),
        }
    }

    /// `(empty xs)`: true iff the result is `()`. Atoms are simply not
    /// empty lists, so they answer `false`.
    fn eval_empty(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [form] = Self::exactly::<1>(operands)?;
        let value = self.eval_expr(form, env)?;
        Ok(Value::Bool(
            matches!(&value, Value::List(items) if items.is_empty()),
        ))
    }

    /// Call rules: a closure head applies directly; a symbol or list
    /// head is evaluated once and must produce a closure. Argument
    /// expressions are evaluated exactly once per logical call either
    /// way.
    fn eval_call(&mut self, head: &Value, operands: &[Value], env: &Env) -> EvalResult {
        let callee = match head {
            Value::Closure(_) => head.clone(),
            Value::Symbol(_) | Value::List(_) => self.eval_expr(head, env)?,
            other => return Err(not_a_function(other.type_name())),
        };
        let Value::Closure(closure) = &callee else {
            return Err(not_a_function(callee.type_name()));
        };
        self.apply(closure, operands, env)
    }

    /// Apply a closure: exact arity, arguments evaluated in order in the
    /// caller's environment, results bound positionally in one new frame
    /// chained to the closure's captured environment. That chaining is
    /// what makes scoping lexical rather than dynamic.
    fn apply(&mut self, closure: &ClosureValue, operands: &[Value], env: &Env) -> EvalResult {
        if closure.params.len() != operands.len() {
            return Err(arity_mismatch(closure.params.len(), operands.len()));
        }
        let mut bindings: FxHashMap<Name, Value> = FxHashMap::default();
        bindings.reserve(operands.len());
        for (param, arg) in closure.params.iter().zip(operands) {
            bindings.insert(*param, self.eval_expr(arg, env)?);
        }
        let frame = closure.env.extend(bindings);
        self.eval_expr(&closure.body, &frame)
    }

    /// Exactly `N` operands, or `ArityMismatch`.
    fn exactly<const N: usize>(operands: &[Value]) -> Result<&[Value; N], crate::errors::EvalError> {
        operands
            .try_into()
            .map_err(|_| arity_mismatch(N, operands.len()))
    }
}
