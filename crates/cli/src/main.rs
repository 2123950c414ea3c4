// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lvsh: compile leveled scripts to bash and run them.
//!
//! A leveled script is plain shell text where each leading 4-space group
//! nests a line one level deeper; a deeper block is piped into the
//! command above it.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lvsh_script::{compile, render, Event, EventBus, ACTION_STDERR, ACTION_STDOUT};

/// Compile an indentation-leveled script to bash, then run it.
#[derive(Debug, Parser)]
#[command(name = "lvsh", version, about)]
struct Cli {
    /// Leveled script to compile.
    script: PathBuf,

    /// Positional parameters handed to the generated script ($1, $2, …).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Print the equivalent bash script instead of running it.
    #[arg(short, long)]
    bash: bool,

    /// Do not relay the script's stdout and stderr.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("lvsh: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let text = tokio::fs::read_to_string(&cli.script)
        .await
        .with_context(|| format!("reading {}", cli.script.display()))?;

    // Compilation must fail before any process is spawned.
    let compiled = compile(&text)?;
    let rendered = render(&compiled);

    if cli.bash {
        println!("{rendered}");
        return Ok(0);
    }

    let bus = EventBus::new();
    if !cli.quiet {
        relay_to_stdio(&bus);
    }

    let code = lvsh_script::run(&rendered, &cli.args, &bus).await?;
    Ok(code)
}

/// Mirror the child's streams onto our own, raw and unbuffered.
fn relay_to_stdio(bus: &EventBus) {
    bus.on(ACTION_STDOUT, |event| {
        if let Event::Stdout { chunk } = event {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(chunk);
            let _ = stdout.flush();
        }
    });
    bus.on(ACTION_STDERR, |event| {
        if let Event::Stderr { chunk } = event {
            let mut stderr = std::io::stderr().lock();
            let _ = stderr.write_all(chunk);
            let _ = stderr.flush();
        }
    });
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("LVSH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
