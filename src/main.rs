use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use indoscript::{Status, interpreter::evaluator::core::Interpreter, needs_more_input, run};

/// indoscript runs programs written in a small scripting language with
/// Indonesian keywords.
///
/// Without any contents an interactive prompt is started that keeps its
/// variables and functions between entries. An entry that leaves a `{` open
/// continues on the next line until its braces balance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells indoscript to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// The program to run, or the path to it with `--file`.
    contents: Option<String>,
}

/// Installs a stderr logger when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Reads entries from stdin and runs each one on the same interpreter.
///
/// Lines are buffered while a `{` is still open, so a function or loop body
/// can span several lines.
fn repl() -> Status {
    let mut interpreter = Interpreter::new(io::stdout(), io::stderr());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut entry = String::new();

    loop {
        print!("{}", if entry.is_empty() { "> " } else { "... " });
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write the prompt: {e}");
            return Status::RuntimeError;
        }

        match lines.next() {
            Some(Ok(line)) => {
                entry.push_str(&line);
                entry.push('\n');
                if needs_more_input(&entry) {
                    continue;
                }

                run(&entry, &mut interpreter);
                entry.clear();
            },
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return Status::RuntimeError;
            },
            None => {
                println!();
                if entry.is_empty() {
                    return Status::Completed;
                }

                return run(&entry, &mut interpreter);
            },
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        std::process::exit(repl().exit_code());
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. \
                                                    Perhaps this file does not exist?");
                                         std::process::exit(66);
                                     })
    } else {
        contents
    };

    let mut interpreter = Interpreter::new(io::stdout(), io::stderr());
    let status = run(&script, &mut interpreter);
    std::process::exit(status.exit_code());
}
