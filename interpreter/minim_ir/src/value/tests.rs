use pretty_assertions::assert_eq;

use crate::{Env, StringInterner, Value};

#[test]
fn atoms_are_everything_but_lists() {
    let interner = StringInterner::new();
    let sym = interner.intern("x");

    assert!(Value::Int(3).is_atom());
    assert!(Value::Bool(false).is_atom());
    assert!(Value::Symbol(sym).is_atom());
    assert!(Value::closure([sym], Value::Int(1), Env::new()).is_atom());

    assert!(!Value::list(vec![]).is_atom());
    assert!(!Value::list(vec![Value::Int(1)]).is_atom());
}

#[test]
fn type_names_are_stable() {
    let interner = StringInterner::new();
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Symbol(interner.intern("a")).type_name(), "symbol");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(
        Value::closure([], Value::Int(0), Env::new()).type_name(),
        "closure"
    );
}

#[test]
fn lists_compare_structurally() {
    let a = Value::list(vec![Value::Int(1), Value::list(vec![Value::Bool(true)])]);
    let b = Value::list(vec![Value::Int(1), Value::list(vec![Value::Bool(true)])]);
    let c = Value::list(vec![Value::Int(2)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn closures_compare_by_identity() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let env = Env::new();

    let f = Value::closure([x], Value::Symbol(x), env.clone());
    let g = Value::closure([x], Value::Symbol(x), env);

    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn kinds_never_compare_equal_across() {
    let interner = StringInterner::new();
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::Symbol(interner.intern("1")), Value::Int(1));
    assert_ne!(Value::list(vec![]), Value::Bool(false));
}

#[test]
fn display_renders_atoms() {
    let interner = StringInterner::new();
    assert_eq!(Value::Int(-42).display(&interner).to_string(), "-42");
    assert_eq!(Value::Bool(true).display(&interner).to_string(), "true");
    assert_eq!(Value::Bool(false).display(&interner).to_string(), "false");
    let foo = interner.intern("foo");
    assert_eq!(Value::Symbol(foo).display(&interner).to_string(), "foo");
}

#[test]
fn display_renders_lists() {
    let interner = StringInterner::new();
    let plus = interner.intern("+");
    let form = Value::list(vec![
        Value::Symbol(plus),
        Value::Int(1),
        Value::list(vec![Value::Int(2), Value::Int(3)]),
    ]);
    assert_eq!(form.display(&interner).to_string(), "(+ 1 (2 3))");
    assert_eq!(Value::list(vec![]).display(&interner).to_string(), "()");
}

#[test]
fn display_renders_closures_by_arity() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    let closure = Value::closure([x, y], Value::Symbol(x), Env::new());
    assert_eq!(closure.display(&interner).to_string(), "<closure/2>");
}
