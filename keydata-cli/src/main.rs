mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keydata_core::quotes::sources::{MONKEYTYPE_URL, TYPERACER_URL};
use keydata_core::stats::percentile::DEFAULT_REFERENCE;

/// Data preparation for keyboard layout analysis.
///
/// Every subcommand is one independent step; they communicate only through
/// the files they read and write. JSON reports go to stdout unless
/// `--output` is given, logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "keydata", version)]
struct Cli {
	/// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
	#[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Download monkeytype and typeracer quotes into three corpus files
	FetchQuotes {
		/// Directory receiving monkeytype.txt, typeracer.txt and monkeyracer.txt
		#[arg(long, default_value = "quotes")]
		out_dir: PathBuf,

		#[arg(long, env = "KEYDATA_MONKEYTYPE_URL", default_value = MONKEYTYPE_URL)]
		monkeytype_url: String,

		#[arg(long, env = "KEYDATA_TYPERACER_URL", default_value = TYPERACER_URL)]
		typeracer_url: String,

		/// HTTP timeout in seconds
		#[arg(long, default_value = "30")]
		timeout: u64,
	},

	/// Count monograms, bigrams, skipgrams and trigrams of a corpus
	ProcessQuotes {
		#[arg(long, default_value = "quotes/monkeyracer.txt")]
		corpus: PathBuf,

		/// Directory receiving out.json
		#[arg(long, default_value = "corpora")]
		out_dir: PathBuf,
	},

	/// Extract complete 30-key layouts from a directory of descriptors
	ProcessLayouts {
		#[arg(long, default_value = "layout_source")]
		source_dir: PathBuf,

		/// Output file (default: stdout)
		#[arg(long, short = 'o')]
		output: Option<PathBuf>,
	},

	/// Compute typing metrics of every layout over the corpus n-grams
	LayoutStats {
		#[arg(long, default_value = "layouts.json")]
		layouts: PathBuf,

		/// Frequency report written by process-quotes
		#[arg(long, default_value = "corpora/out.json")]
		corpus: PathBuf,

		/// Output file (default: stdout)
		#[arg(long, short = 'o')]
		output: Option<PathBuf>,
	},

	/// Compute the 1st to 100th percentiles of every category
	Percentiles {
		#[arg(long, default_value = "data.json")]
		data: PathBuf,

		/// Record whose keys define the categories
		#[arg(long, default_value = DEFAULT_REFERENCE)]
		reference: String,

		/// Emit the 0-100 grades of this record instead of the percentiles
		#[arg(long)]
		rank: Option<String>,

		/// Output file (default: stdout)
		#[arg(long, short = 'o')]
		output: Option<PathBuf>,
	},
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str())).init();
	log::debug!("running {:?}", cli.command);

	match cli.command {
		Command::FetchQuotes { out_dir, monkeytype_url, typeracer_url, timeout } => {
			commands::fetch_quotes::run(&out_dir, &monkeytype_url, &typeracer_url, timeout)?
		}
		Command::ProcessQuotes { corpus, out_dir } => commands::process_quotes::run(&corpus, &out_dir)?,
		Command::ProcessLayouts { source_dir, output } => {
			commands::process_layouts::run(&source_dir, output.as_deref())?
		}
		Command::LayoutStats { layouts, corpus, output } => {
			commands::layout_stats::run(&layouts, &corpus, output.as_deref())?
		}
		Command::Percentiles { data, reference, rank, output } => {
			commands::percentiles::run(&data, &reference, rank.as_deref(), output.as_deref())?
		}
	}

	Ok(())
}
