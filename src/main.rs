use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use minipy::{Interpreter, Value, run_source};

/// minipy is a tree-walking interpreter for a small, indentation-sensitive
/// subset of Python.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to execute; an interactive session starts when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|err| {
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        process::exit(code);
    });

    let mut interpreter = Interpreter::new();

    match args.script {
        Some(path) => process::exit(run_file(&path, &mut interpreter)),
        None => run_repl(&mut interpreter),
    }
}

/// Executes a script file.
///
/// Diagnostics go to standard error. The exit status is 1 when an
/// assertion failed (or the file could not be read) and 0 otherwise, so
/// script suites can be driven by the status alone.
fn run_file(path: &Path, interpreter: &mut Interpreter) -> i32 {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Error: Could not open file '{}'", path.display());
                     process::exit(1);
                 });

    match run_source(&source, interpreter) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            i32::from(err.is_assertion_failure())
        },
    }
}

/// The interactive loop.
///
/// A trimmed line ending in `:` opens a compound statement; its
/// continuation lines are buffered until an empty line dispatches the whole
/// block as one source string. Other lines dispatch individually. The value
/// of the last expression statement is echoed unless it is `None`.
fn run_repl(interpreter: &mut Interpreter) {
    println!("minipy {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit()' or Ctrl+D to quit");
    println!();

    let stdin = io::stdin();
    let mut buffer = String::new();
    let mut in_block = false;

    loop {
        print!("{}", if in_block { "... " } else { ">>> " });
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                break;
            },
            Ok(_) => {},
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if !in_block && (line == "exit()" || line == "quit()") {
            break;
        }

        if line.is_empty() {
            if in_block {
                in_block = false;
                dispatch(&buffer, interpreter);
                buffer.clear();
            }
            continue;
        }

        if in_block {
            buffer.push_str(line);
            buffer.push('\n');
        } else if line.trim_end().ends_with(':') {
            in_block = true;
            buffer.clear();
            buffer.push_str(line);
            buffer.push('\n');
        } else {
            dispatch(line, interpreter);
        }
    }
}

/// Runs one interactive unit and echoes its value.
fn dispatch(source: &str, interpreter: &mut Interpreter) {
    match run_source(source, interpreter) {
        Ok(()) => {
            if let Some(value) = interpreter.last_value()
               && !matches!(value, Value::None)
            {
                println!("{value}");
            }
        },
        Err(err) => eprintln!("{err}"),
    }
}
