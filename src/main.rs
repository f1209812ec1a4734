use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, use_colors};
use cli::session::{self, SessionOptions};
use cli::solve::{self, Outcome};
use cli::{Cli, Commands, DictArgs};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let result = run(cli);
    if let Err(e) = &result {
        eprintln!("{}", display::render_error(&format!("{:#}", e)));
    }
    ExitCode::from(solve::exit_code(&result))
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Commands::Solve(args) => {
            let mut stdout = io::stdout().lock();
            solve::solve(&args, &mut stdout, use_colors())
        }
        Commands::Play { dict, reverse } => run_play(&dict, reverse),
        Commands::Inspect { dict } => run_inspect(&dict),
    }
}

fn run_play(dict: &DictArgs, reverse: bool) -> Result<Outcome> {
    let lexicon = dict.load()?;
    let options = SessionOptions {
        reverse,
        colors: use_colors(),
    };

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let answered = session::play(&lexicon, stdin, &mut stdout, options)?;
    tracing::debug!(answered, "session ended");
    Ok(Outcome::Success)
}

fn run_inspect(dict: &DictArgs) -> Result<Outcome> {
    let lexicon = dict.load()?;
    let histogram = lexicon.length_histogram();

    display::section_top("DICTIONARY");
    display::row(&format!(" {}", dict.dict.display()));
    display::row(&format!(" {} words", lexicon.len()));
    display::row(&format!(" {} distinct lengths", histogram.len()));
    display::section_bot();

    display::section_top("WORDS BY LENGTH");
    display::row(" len    count");
    for line in display::render_histogram(&histogram, use_colors()) {
        display::row(&line);
    }
    display::section_bot();

    Ok(Outcome::Success)
}
