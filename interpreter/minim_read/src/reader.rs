//! Recursive-descent reader over the token stream.

use std::iter::Peekable;

use minim_ir::{Name, StringInterner, Value};
use minim_stack::ensure_sufficient_stack;

use crate::error::ReadError;
use crate::lexer::{Lexer, Token};

/// Read exactly one form from `source`.
///
/// Fails with [`ReadError::Empty`] when the source holds no form and
/// [`ReadError::TrailingInput`] when it holds more than one.
pub fn read(source: &str, interner: &StringInterner) -> Result<Value, ReadError> {
    let mut reader = Reader::new(source, interner);
    let form = reader.next_form()?.ok_or(ReadError::Empty)?;
    if let Some(&(_, offset)) = reader.tokens.peek() {
        return Err(ReadError::TrailingInput { offset });
    }
    Ok(form)
}

/// Read every top-level form from `source`, in order. An empty source
/// reads as an empty vector.
pub fn read_all(source: &str, interner: &StringInterner) -> Result<Vec<Value>, ReadError> {
    let mut reader = Reader::new(source, interner);
    let mut forms = Vec::new();
    while let Some(form) = reader.next_form()? {
        forms.push(form);
    }
    Ok(forms)
}

struct Reader<'src, 'i> {
    tokens: Peekable<Lexer<'src>>,
    interner: &'i StringInterner,
    quote: Name,
}

impl<'src, 'i> Reader<'src, 'i> {
    fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Reader {
            tokens: Lexer::new(source).peekable(),
            interner,
            quote: interner.intern("quote"),
        }
    }

    /// Next top-level form, or `None` at end of input.
    fn next_form(&mut self) -> Result<Option<Value>, ReadError> {
        match self.tokens.next() {
            None => Ok(None),
            Some((token, offset)) => self.form_from(token, offset).map(Some),
        }
    }

    /// Build the form starting at `token`. Recursion depth follows the
    /// nesting depth of the source, so every step runs under the stack
    /// guard.
    fn form_from(&mut self, token: Token<'src>, offset: usize) -> Result<Value, ReadError> {
        ensure_sufficient_stack(|| match token {
            Token::Open => self.finish_list(offset),
            Token::Close => Err(ReadError::UnexpectedClose { offset }),
            Token::Quote => {
                let Some((inner, inner_offset)) = self.tokens.next() else {
                    return Err(ReadError::DanglingQuote { offset });
                };
                let quoted = self.form_from(inner, inner_offset)?;
                Ok(Value::list(vec![Value::Symbol(self.quote), quoted]))
            }
            Token::Atom(text) => self.atom(text, offset),
        })
    }

    /// The `(` at `open_offset` has been consumed; collect forms until
    /// the matching `)`.
    fn finish_list(&mut self, open_offset: usize) -> Result<Value, ReadError> {
        let mut items = Vec::new();
        loop {
            match self.tokens.next() {
                None => {
                    return Err(ReadError::UnterminatedList {
                        offset: open_offset,
                    })
                }
                Some((Token::Close, _)) => return Ok(Value::list(items)),
                Some((token, offset)) => items.push(self.form_from(token, offset)?),
            }
        }
    }

    fn atom(&self, text: &str, offset: usize) -> Result<Value, ReadError> {
        match text {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }
        if is_int_literal(text) {
            return text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ReadError::IntOutOfRange { offset });
        }
        Ok(Value::Symbol(self.interner.intern(text)))
    }
}

/// `-?[0-9]+`. Anything else is a symbol; in particular a lone `-` names
/// subtraction.
fn is_int_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn read_one(src: &str, interner: &StringInterner) -> Value {
        read(src, interner).unwrap()
    }

    #[test]
    fn reads_integers() {
        let interner = StringInterner::new();
        assert_eq!(read_one("42", &interner), Value::Int(42));
        assert_eq!(read_one("-17", &interner), Value::Int(-17));
        assert_eq!(
            read_one("9223372036854775807", &interner),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn reads_booleans() {
        let interner = StringInterner::new();
        assert_eq!(read_one("true", &interner), Value::Bool(true));
        assert_eq!(read_one("false", &interner), Value::Bool(false));
    }

    #[test]
    fn reads_symbols() {
        let interner = StringInterner::new();
        assert_eq!(
            read_one("make-adder", &interner),
            Value::Symbol(interner.intern("make-adder"))
        );
        // A lone minus is the subtraction operator, not a number.
        assert_eq!(read_one("-", &interner), Value::Symbol(interner.intern("-")));
        // Digit runs with a non-digit tail are symbols too.
        assert_eq!(
            read_one("1st", &interner),
            Value::Symbol(interner.intern("1st"))
        );
    }

    #[test]
    fn reads_nested_lists() {
        let interner = StringInterner::new();
        let plus = interner.intern("+");
        assert_eq!(
            read_one("(+ 1 (+ 2 3))", &interner),
            Value::list(vec![
                Value::Symbol(plus),
                Value::Int(1),
                Value::list(vec![Value::Symbol(plus), Value::Int(2), Value::Int(3)]),
            ])
        );
        assert_eq!(read_one("()", &interner), Value::list(vec![]));
    }

    #[test]
    fn quote_shorthand_wraps_the_next_form() {
        let interner = StringInterner::new();
        let quote = interner.intern("quote");
        let x = interner.intern("x");
        assert_eq!(
            read_one("'x", &interner),
            Value::list(vec![Value::Symbol(quote), Value::Symbol(x)])
        );
        assert_eq!(
            read_one("'(1 2)", &interner),
            Value::list(vec![
                Value::Symbol(quote),
                Value::list(vec![Value::Int(1), Value::Int(2)]),
            ])
        );
        // Nested shorthand: ''x is (quote (quote x)).
        assert_eq!(
            read_one("''x", &interner),
            Value::list(vec![
                Value::Symbol(quote),
                Value::list(vec![Value::Symbol(quote), Value::Symbol(x)]),
            ])
        );
    }

    #[test]
    fn comments_are_skipped() {
        let interner = StringInterner::new();
        assert_eq!(
            read_one("(+ 1 ; one\n 2) ; done", &interner),
            read_one("(+ 1 2)", &interner)
        );
    }

    #[test]
    fn read_all_returns_every_form() {
        let interner = StringInterner::new();
        let forms = read_all("(define x 5) x", &interner).unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[1], Value::Symbol(interner.intern("x")));
        assert_eq!(read_all("  ; nothing here\n", &interner).unwrap(), vec![]);
    }

    #[test]
    fn stray_close_is_an_error() {
        let interner = StringInterner::new();
        assert_eq!(
            read(")", &interner),
            Err(ReadError::UnexpectedClose { offset: 0 })
        );
        assert_eq!(
            read("(1 2))", &interner),
            Err(ReadError::TrailingInput { offset: 5 })
        );
    }

    #[test]
    fn unterminated_list_reports_the_open() {
        let interner = StringInterner::new();
        assert_eq!(
            read("(1 (2 3)", &interner),
            Err(ReadError::UnterminatedList { offset: 0 })
        );
    }

    #[test]
    fn dangling_quote_is_an_error() {
        let interner = StringInterner::new();
        assert_eq!(read("'", &interner), Err(ReadError::DanglingQuote { offset: 0 }));
    }

    #[test]
    fn oversized_integer_is_an_error() {
        let interner = StringInterner::new();
        assert_eq!(
            read("9223372036854775808", &interner),
            Err(ReadError::IntOutOfRange { offset: 0 })
        );
    }

    #[test]
    fn empty_source_is_an_error_for_read() {
        let interner = StringInterner::new();
        assert_eq!(read("", &interner), Err(ReadError::Empty));
        assert_eq!(read("; just a comment", &interner), Err(ReadError::Empty));
    }

    #[test]
    fn trailing_form_is_an_error_for_read() {
        let interner = StringInterner::new();
        assert_eq!(
            read("1 2", &interner),
            Err(ReadError::TrailingInput { offset: 2 })
        );
    }

    #[test]
    fn deeply_nested_input_does_not_overflow() {
        let interner = StringInterner::new();
        let depth = 10_000;
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(read(&src, &interner).is_ok());
    }
}
