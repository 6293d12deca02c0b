//! Minim Read - source text to value trees.
//!
//! The reader produces exactly the representation the evaluator consumes:
//! [`minim_ir::Value`] trees. There is no separate AST.
//!
//! Grammar:
//!
//! ```text
//! form    := atom | list | quote
//! list    := "(" form* ")"
//! quote   := "'" form            ; reads as (quote form)
//! atom    := integer | boolean | symbol
//! integer := "-"? [0-9]+         ; i64 range
//! boolean := "true" | "false"
//! symbol  := any other run of non-delimiter characters
//! ```
//!
//! Delimiters are whitespace, `(`, `)`, `'`, and `;`. A `;` starts a
//! comment running to end of line. `-` by itself is a symbol (it names
//! subtraction), not the start of a number.

mod error;
mod lexer;
mod reader;

pub use error::ReadError;
pub use reader::{read, read_all};
