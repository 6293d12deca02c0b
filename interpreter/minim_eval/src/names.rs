//! Pre-interned special form and operator names.
//!
//! Interned once at [`Evaluator`](crate::Evaluator) construction so the
//! dispatch hot path compares `Name`s (`u32 == u32`) instead of strings.

use minim_ir::{Name, StringInterner};

use crate::operators::ArithOp;

/// Every name the evaluator dispatches on.
#[derive(Clone, Copy)]
pub(crate) struct SpecialNames {
    pub(crate) quote: Name,
    pub(crate) atom: Name,
    pub(crate) eq: Name,
    pub(crate) add: Name,
    pub(crate) sub: Name,
    pub(crate) mul: Name,
    pub(crate) div: Name,
    pub(crate) modulo: Name,
    pub(crate) gt: Name,
    pub(crate) lt: Name,
    pub(crate) if_: Name,
    pub(crate) define: Name,
    pub(crate) lambda: Name,
    pub(crate) cons: Name,
    pub(crate) head: Name,
    pub(crate) tail: Name,
    pub(crate) empty: Name,
}

impl SpecialNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        SpecialNames {
            quote: interner.intern("quote"),
            atom: interner.intern("atom"),
            eq: interner.intern("eq"),
            add: interner.intern("+"),
            sub: interner.intern("-"),
            mul: interner.intern("*"),
            div: interner.intern("/"),
            modulo: interner.intern("mod"),
            gt: interner.intern(">"),
            lt: interner.intern("<"),
            if_: interner.intern("if"),
            define: interner.intern("define"),
            lambda: interner.intern("lambda"),
            cons: interner.intern("cons"),
            head: interner.intern("head"),
            tail: interner.intern("tail"),
            empty: interner.intern("empty"),
        }
    }

    /// The arithmetic/comparison operation `name` selects, if any.
    pub(crate) fn arith_op(&self, name: Name) -> Option<ArithOp> {
        if name == self.add {
            Some(ArithOp::Add)
        } else if name == self.sub {
            Some(ArithOp::Sub)
        } else if name == self.mul {
            Some(ArithOp::Mul)
        } else if name == self.div {
            Some(ArithOp::Div)
        } else if name == self.modulo {
            Some(ArithOp::Mod)
        } else if name == self.gt {
            Some(ArithOp::Gt)
        } else if name == self.lt {
            Some(ArithOp::Lt)
        } else {
            None
        }
    }
}
