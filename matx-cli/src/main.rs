//! Matx REPL
//!
//! Reads one matrix expression per line, hands it to the calculator
//! core, and prints the result. All console I/O lives here; the core
//! only returns tagged values.

mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process;

use matx::{Calculator, Outcome};
use tracing::debug;

use crate::render::Renderer;

fn main() {
    tracing_subscriber::fmt::init();

    let calc = Calculator::new();
    let renderer = Renderer::from_env();

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("\n*** MATRIX CALCULATOR ***\n");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("Enter matrix expression: ");
            let _ = io::stdout().flush();
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("input error: {}", err);
                break;
            }
            None => break, // end of input
        };

        if line.trim().is_empty() {
            continue;
        }

        debug!(%line, "evaluating");
        match calc.eval(&line) {
            Ok(Outcome::Matrix(m)) => println!("\n{}\n", renderer.matrix(&m)),
            Ok(Outcome::Scalar(det)) => println!("determinant: {}\n", renderer.scalar(det)),
            Ok(Outcome::Quit) => break,
            Ok(Outcome::QuitImmediate) => process::exit(1),
            Err(err) => eprintln!("{}\n", err),
        }
    }
}
