use std::{
	io::{self, IsTerminal, Write},
	path::PathBuf,
	process::ExitCode,
};

use clap::Parser;
use rolltally::{diagnostics::Tracing, extract, Config, Document, Error, Report};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tallies d20 ability check rolls per character from an exported chat log
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
	/// Chat log to read
	#[arg(default_value = "Chat Log for Cursed.html")]
	path: PathBuf,

	/// Show more diagnostics. By default each character's roll messages and the totals are shown; -v adds every
	/// roll looked at, -vv adds trace output. Ignored when RUST_LOG is set.
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	// Diagnostics share stdout with the report, interleaved as they happen
	let default_level = match cli.verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};
	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(io::stdout)
				.with_ansi(io::stdout().is_terminal())
				.with_target(false),
		)
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
		.init();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			// Nowhere left to report a failure to write the message
			let _ = err.write_message(io::stdout().lock());
			if err.is_clean_exit() {
				ExitCode::SUCCESS
			} else {
				ExitCode::FAILURE
			}
		}
	}
}

fn run(cli: &Cli) -> Result<(), Error> {
	let doc = Document::open(&cli.path)?;
	let tally = extract(&doc.root(), &Config::default(), &mut Tracing);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	Report::from_tally(&tally).write_to(&mut out)?;
	out.flush()?;
	Ok(())
}
