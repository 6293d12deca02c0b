//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use crate::session::Session;

/// Run the REPL until end of input. Forms may span lines; input is
/// buffered until the brackets balance.
pub fn run_repl() {
    println!("minim {} (Ctrl-D to exit)", env!("CARGO_PKG_VERSION"));
    let mut session = Session::new();
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt(buffer.is_empty());
        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };
        buffer.push_str(&line);
        buffer.push('\n');
        if !balanced(&buffer) {
            continue;
        }
        if buffer.trim().is_empty() {
            buffer.clear();
            continue;
        }
        match session.eval_source(&buffer) {
            Ok(Some(rendered)) => println!("{rendered}"),
            Ok(None) => {}
            Err(err) => println!("error: {err}"),
        }
        buffer.clear();
    }
}

fn prompt(fresh: bool) {
    print!("{}", if fresh { "minim> " } else { "  ...> " });
    let _ = io::stdout().flush();
}

/// True when every `(` so far has a matching `)` outside comments. Extra
/// closers also count as balanced; the reader reports those.
fn balanced(src: &str) -> bool {
    let mut depth = 0i64;
    let mut in_comment = false;
    for byte in src.bytes() {
        match byte {
            b'\n' => in_comment = false,
            _ if in_comment => {}
            b';' => in_comment = true,
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}
