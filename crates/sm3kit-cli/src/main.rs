// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `sm3sum` - print or check SM3 digests of text
//!
//! Each positional argument is hashed as one text. Without arguments every
//! line of stdin is hashed, line terminator excluded.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;


#[derive(Parser, Debug)]
#[command(name = "sm3sum", version, about = "Print or check SM3 digests")]
struct Cli {
    /// Texts to hash (reads lines from stdin when omitted)
    text: Vec<String>,

    /// Check every input against this hex digest instead of printing digests
    #[arg(long, value_name = "HEX")]
    verify: Option<String>,

    /// Print only the digest (or only OK/FAILED with --verify)
    #[arg(short, long)]
    quiet: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Hash or check one input, writing its result line. Returns false on a
/// failed check.
fn process(cli: &Cli, text: &str, out: &mut impl Write) -> Result<bool> {
    let Some(expected) = cli.verify.as_deref() else {
        let digest = sm3kit::hash(text);
        if cli.quiet {
            writeln!(out, "{digest}")?;
        } else {
            writeln!(out, "{digest}  {text}")?;
        }
        return Ok(true);
    };

    let matches = sm3kit::verify(text, expected);
    let status = if matches { "OK" } else { "FAILED" };
    if cli.quiet {
        writeln!(out, "{status}")?;
    } else {
        writeln!(out, "{text}: {status}")?;
    }
    Ok(matches)
}

/// Process arguments, or `input` lines when there are none.
fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;
    let mut count = 0usize;

    if cli.text.is_empty() {
        log::debug!("reading inputs from stdin");
        for line in input.lines() {
            let line = line.context("Failed to read input line")?;
            all_ok &= process(cli, &line, out)?;
            count += 1;
        }
    } else {
        for text in &cli.text {
            all_ok &= process(cli, text, out)?;
            count += 1;
        }
    }

    log::debug!("processed {count} inputs, all_ok={all_ok}");
    out.flush().context("Failed to flush output")?;
    Ok(all_ok)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let all_ok = run(&cli, stdin.lock(), &mut stdout.lock())?;

    if all_ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
