pub mod entry;
pub mod output;
pub mod range;
pub mod report;
pub mod transfer;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use entry::{process_log_command, process_suggest_command};
use range::RangeArgs;
use report::{process_list_command, process_stats_command};
use tracing::level_filters::LevelFilter;
use transfer::{process_clear_command, process_export_command, process_import_command};

use crate::{
    tracker::{storage::FileStore, Tracker},
    utils::{
        clock::DefaultClock,
        dir::{create_application_default_path, ensure_dir},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "ProcrastiTrack", version, long_about = None)]
#[command(about = "Log what you did instead of what you meant to do", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default $XDG_STATE_HOME/procrastitrack or $HOME/.local/state/procrastitrack"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Record what you did while you meant to do something")]
    Log {
        #[arg(help = "What you meant to do")]
        intended: String,
        #[arg(help = "What you actually did")]
        actual: String,
        #[arg(
            short,
            long,
            allow_hyphen_values = true,
            help = "Minutes spent. Anything that isn't a number counts as 0"
        )]
        minutes: Option<String>,
    },
    #[command(about = "Show entries, newest first")]
    List {
        #[arg(short = 'n', long, help = "Show at most this many entries")]
        limit: Option<usize>,
        #[command(flatten)]
        range: RangeArgs,
    },
    #[command(about = "Show totals, heat and the most frequent activities")]
    Stats {
        #[arg(short, long, default_value_t = crate::analysis::aggregate::DEFAULT_TOP, help = "Amount of activities in each ranking")]
        top: usize,
        #[command(flatten)]
        range: RangeArgs,
    },
    #[command(about = "Show a tip for the latest entry")]
    Suggest {
        #[arg(long, help = "Use a sample distraction instead of the latest entry")]
        sample: bool,
    },
    #[command(about = "Write all entries as JSON")]
    Export {
        #[arg(default_value = transfer::DEFAULT_EXPORT_FILE, help = "Output file, - for stdout")]
        file: PathBuf,
    },
    #[command(about = "Replace all entries with the ones from a JSON file")]
    Import {
        #[arg(help = "JSON file containing a list of entries")]
        file: PathBuf,
    },
    #[command(about = "Delete every entry. This cannot be undone")]
    Clear {
        #[arg(short, long, help = "Don't ask for confirmation")]
        yes: bool,
    },
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = args
        .dir
        .map_or_else(create_application_default_path, ensure_dir)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let mut tracker = Tracker::load(FileStore::new(app_dir)?, Box::new(DefaultClock))?;

    match args.commands {
        Commands::Log {
            intended,
            actual,
            minutes,
        } => process_log_command(&mut tracker, &intended, &actual, minutes.as_deref()),
        Commands::List { limit, range } => process_list_command(&tracker, limit, range),
        Commands::Stats { top, range } => process_stats_command(&tracker, top, range),
        Commands::Suggest { sample } => process_suggest_command(&tracker, sample),
        Commands::Export { file } => process_export_command(&tracker, &file),
        Commands::Import { file } => process_import_command(&mut tracker, &file),
        Commands::Clear { yes } => process_clear_command(&mut tracker, yes),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use clap::Parser;

    use crate::tracker::entities::parse_minutes;

    use super::{Args, Commands};

    fn parse_log_minutes(minutes: &str) -> Result<Option<String>> {
        let args = Args::try_parse_from(["procrastitrack", "log", "study", "nap", "-m", minutes])?;
        match args.commands {
            Commands::Log { minutes, .. } => Ok(minutes),
            other => anyhow::bail!("Expected log, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_minutes_are_accepted() -> Result<()> {
        let minutes = parse_log_minutes("-5")?;
        assert_eq!(minutes.as_deref(), Some("-5"));
        assert_eq!(minutes.as_deref().map_or(0, parse_minutes), 0);
        Ok(())
    }

    #[test]
    fn test_minutes_parse() -> Result<()> {
        assert_eq!(parse_log_minutes("25")?.as_deref().map_or(0, parse_minutes), 25);
        assert_eq!(parse_log_minutes("abc")?.as_deref().map_or(0, parse_minutes), 0);
        Ok(())
    }
}
