//! CLI subcommands.

use minim_ir::SharedInterner;
use minim_read::read_all;

use crate::session::Session;

/// `minim run <file>`: evaluate every form and print the last value.
pub fn run_file(path: &str) {
    let source = read_source(path);
    tracing::debug!("evaluating {path}");
    let mut session = Session::new();
    match session.eval_source(&source) {
        Ok(Some(rendered)) => println!("{rendered}"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// `minim parse <file>`: read the file and echo each top-level form.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    let interner = SharedInterner::default();
    match read_all(&source, &interner) {
        Ok(forms) => {
            for form in &forms {
                println!("{}", form.display(&interner));
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            std::process::exit(1);
        }
    }
}
