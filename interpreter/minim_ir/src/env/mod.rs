//! Lexical environments.
//!
//! An environment is a parent-pointer chain of frames: each frame holds
//! only its own bindings plus a handle to the frame it extends, and
//! lookup falls through to the parent on a miss. Bindings are write-once
//! per frame; the same name can still be bound again in a deeper frame,
//! which is what shadowing is.
//!
//! Frames are shared, not snapshotted. A closure retains a handle to its
//! defining frame, so bindings added to that frame after the closure was
//! created are visible through it (top-level recursion and mutual
//! recursion depend on this).

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{Name, Value};

/// Error returned by [`Env::define`] when the name is already bound in
/// the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyBound(pub Name);

/// One frame's own bindings plus the link to the frame it extends.
struct Frame {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Env>,
}

/// Cheap-to-clone handle to a frame.
///
/// Single-threaded by design, hence `Rc`. Interior mutability covers the
/// only mutation the engine performs: adding a binding to an existing
/// frame.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Frame>>);

impl Env {
    /// Root environment: one empty frame, no parent.
    pub fn new() -> Self {
        Env(Rc::new(RefCell::new(Frame {
            bindings: FxHashMap::default(),
            parent: None,
        })))
    }

    /// New child frame pre-populated with `bindings`, chained to `self`.
    ///
    /// This is how closure-call frames are built: the argument bindings
    /// shadow any outer binding of the same name through ordinary chain
    /// lookup, and the frame is discarded when the last handle to it
    /// drops.
    #[must_use]
    pub fn extend(&self, bindings: FxHashMap<Name, Value>) -> Env {
        Env(Rc::new(RefCell::new(Frame {
            bindings,
            parent: Some(self.clone()),
        })))
    }

    /// Look up a name, searching outward through parent frames.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut scope = Some(self.clone());
        while let Some(env) = scope {
            let frame = env.0.borrow();
            if let Some(value) = frame.bindings.get(&name) {
                return Some(value.clone());
            }
            scope = frame.parent.clone();
        }
        None
    }

    /// Bind `name` to `value` in this frame.
    ///
    /// Write-once: fails if `name` is already bound in this exact frame.
    /// Parent frames are intentionally not consulted, so a deeper frame
    /// may shadow an outer binding.
    pub fn define(&self, name: Name, value: Value) -> Result<(), AlreadyBound> {
        let mut frame = self.0.borrow_mut();
        if frame.bindings.contains_key(&name) {
            return Err(AlreadyBound(name));
        }
        frame.bindings.insert(name, value);
        Ok(())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
