mod cli;
mod diagnostic;
mod error;
mod runtime;
mod syntax;

use std::{
    io::{self, BufRead, Write},
    path::Path,
    process,
};

use clap::Parser as _;
use diagnostic::{ConsoleReporter, Reporter};
use runtime::{Interpreter, Value};
use syntax::{render, Lexer, Parser};

/// Runs one source text through scan, parse and evaluation.
fn run(src: &str, reporter: &mut dyn Reporter) -> Option<Value> {
    let tokens = Lexer::new(src).scan_tokens(reporter);
    let expr = Parser::new(tokens, reporter).parse()?;
    reporter.info(&format!("Parse result: {}", render(&expr)));

    let value = Interpreter::new(reporter).interpret(&expr)?;
    reporter.info(&format!("Run result: {value}"));
    Some(value)
}

fn run_file(file_path: &Path, reporter: &mut dyn Reporter) {
    let src = match std::fs::read_to_string(file_path) {
        Ok(src) => src,
        Err(why) => {
            eprintln!("Failed to read {file_path:?}: {why}");
            process::exit(1);
        }
    };

    run(&src, reporter);

    if reporter.had_error() {
        process::exit(65);
    }
}

fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn run_prompt(reporter: &mut dyn Reporter) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        if let Err(why) = write_prompt(&mut io::stdout()) {
            eprintln!("Failed to write prompt: {why}");
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(why) => {
                eprintln!("Failed to read input: {why}");
                break;
            }
        }

        let src = line.trim_end();
        if !src.is_empty() {
            run(src, reporter);
        }
        reporter.reset();
    }
}

fn main() {
    let cli = cli::Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut reporter = ConsoleReporter::default();
    match cli.file {
        Some(file_path) => run_file(&file_path, &mut reporter),
        None => run_prompt(&mut reporter),
    }
}
