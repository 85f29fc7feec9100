use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;
use log::{LevelFilter, info};
use rs_lm_core::config::DEFAULT_SEED;
use rs_lm_core::{LanguageModel, ModelConfig};

/// Sampling mode of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Seeded from OS entropy, output varies run to run
	Random,
	/// Deterministic, seeded with `--seed`
	Fixed,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sliding-window character language model", long_about = None)]
struct Cli {
	/// Number of characters conditioning each prediction
	window_length: usize,

	/// Text to start from; its last `window_length` characters seed generation
	initial_text: String,

	/// Number of characters to add after the seed window
	text_length: usize,

	/// `random` for unseeded sampling, `fixed` for reproducible output
	#[arg(value_enum)]
	mode: Mode,

	/// Corpus file to learn from
	corpus: PathBuf,

	/// Seed used in `fixed` mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// Print the learned windows and distributions to stderr
	#[arg(long)]
	dump_model: bool,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,
}

/// `-v`/`-q` override `RUST_LOG`; without them the environment decides, defaulting to `warn`.
fn verbosity_override(verbose: u8, quiet: u8) -> Option<LevelFilter> {
	if quiet > 0 {
		return Some(LevelFilter::Error);
	}
	match verbose {
		0 => None,
		1 => Some(LevelFilter::Info),
		2 => Some(LevelFilter::Debug),
		_ => Some(LevelFilter::Trace),
	}
}

fn init_logging(verbose: u8, quiet: u8) {
	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
	builder.format_timestamp_millis();
	if let Some(level) = verbosity_override(verbose, quiet) {
		builder.filter_level(level);
	}
	let _ = builder.try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let config = ModelConfig::new(cli.window_length)?;
	let config = match cli.mode {
		Mode::Random => config.unseeded(),
		Mode::Fixed => config.with_seed(cli.seed),
	};
	info!("Window length {}, random source {:?}", config.window_length(), config.random_source);

	let mut model = LanguageModel::new(config);
	let stats = model.train_file(&cli.corpus)?;
	info!("Learned {} windows from {} characters", model.window_count(), stats.characters);

	if cli.dump_model {
		eprint!("{}", model);
	}

	println!("{}", model.generate(&cli.initial_text, cli.text_length));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_flags_leave_the_environment_in_charge() {
		assert_eq!(verbosity_override(0, 0), None);
	}

	#[test]
	fn flags_override_the_environment() {
		assert_eq!(verbosity_override(1, 0), Some(LevelFilter::Info));
		assert_eq!(verbosity_override(2, 0), Some(LevelFilter::Debug));
		assert_eq!(verbosity_override(5, 0), Some(LevelFilter::Trace));
		assert_eq!(verbosity_override(3, 1), Some(LevelFilter::Error));
	}
}
