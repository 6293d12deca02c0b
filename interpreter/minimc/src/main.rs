//! Minim interpreter CLI.

use minimc::commands::{parse_file, run_file};
use minimc::repl::run_repl;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        run_repl();
        return;
    }

    let command = &args[1];
    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: minim run <file.mnm>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: minim parse <file.mnm>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("minim {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare file path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mnm"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Install the tracing subscriber. `MINIM_LOG` selects the filter
/// (same syntax as `RUST_LOG`); default off.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("MINIM_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn print_usage() {
    println!("Minim interpreter");
    println!();
    println!("Usage: minim [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file.mnm>    Evaluate a file and print the last value");
    println!("  parse <file.mnm>  Read a file and echo each form");
    println!("  repl              Interactive session (also the default)");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Environment:");
    println!("  MINIM_LOG         Tracing filter (RUST_LOG syntax), off by default");
    println!();
    println!("Examples:");
    println!("  minim run fib.mnm");
    println!("  minim fib.mnm");
    println!("  minim repl");
}
