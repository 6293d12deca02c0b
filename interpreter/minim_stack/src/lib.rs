//! Stack safety for deep recursion.
//!
//! Both the reader and the evaluator are recursive over the expression
//! tree, so their recursion depth tracks the nesting depth of the input.
//! A deeply nested source file would overflow the host stack long before
//! it exhausts memory. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! On native targets this uses the `stacker` crate. On wasm32 it is a
//! passthrough (wasm manages its own stack).

/// Minimum stack headroom to keep available (128KB red zone).
///
/// A recursive step that starts with less than this much stack left
/// triggers a growth segment first.
const RED_ZONE: usize = 128 * 1024;

/// Stack space allocated per growth segment (2MB).
const STACK_PER_GROWTH: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// Call this around any step that recurses over user-controlled nesting:
///
/// ```text
/// fn read_form(&mut self) -> Result<Value, ReadError> {
///     ensure_sufficient_stack(|| {
///         // ... recursive descent ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_GROWTH, f)
}

/// wasm32 version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
