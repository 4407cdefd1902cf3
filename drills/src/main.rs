//! List and array console drills.
//!
//! Runs one drill interactively over stdin/stdout, or checks a single
//! comma-separated list with `drills smallest --numbers`.

use std::io::{self, StdinLock, StdoutLock};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drills::core::numbers::join_numbers;
use drills::core::smallest::smallest_n;
use drills::exit_codes;
use drills::io::config::{
    ConfigInit, DEFAULT_CONFIG_FILE, DrillsConfig, SmallestConfig, init_config, load_config,
};
use drills::io::console::Console;
use drills::logging;
use drills::report::SmallestReport;
use drills::session::{
    DrillOutcome, run_distinct, run_likes, run_menu, run_reverse, run_smallest, run_unique,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "drills", version, about = "List and array console drills")]
struct Cli {
    /// Drill config file (TOML). Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Drill to run; shows the numbered menu when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a drill from the numbered menu.
    Menu,
    /// Print the smallest values of a comma-separated list.
    Smallest(SmallestArgs),
    /// Collect names and print who likes the post.
    Likes,
    /// Print a name reversed.
    Reverse,
    /// Collect unique numbers and print them sorted.
    Unique {
        /// How many unique numbers to collect.
        #[arg(long)]
        count: Option<usize>,
    },
    /// Print entered numbers without repeats, in entry order.
    Distinct,
    /// Manage the drill config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the config file with defaults merged with any flags given.
    Init {
        /// Minimum number of values for the smallest drill.
        #[arg(long)]
        min_count: Option<usize>,

        /// How many of the smallest values to print.
        #[arg(short, long)]
        k: Option<usize>,

        /// How many unique numbers the unique drill collects.
        #[arg(long)]
        count: Option<usize>,

        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct SmallestArgs {
    /// Check this list once instead of prompting (e.g. "5,1,9,2,10").
    #[arg(long, allow_hyphen_values = true)]
    numbers: Option<String>,

    /// Minimum number of values the list must contain.
    #[arg(long)]
    min_count: Option<usize>,

    /// How many of the smallest values to print.
    #[arg(short, long)]
    k: Option<usize>,

    /// Print a JSON report instead of plain text.
    #[arg(long, requires = "numbers")]
    json: bool,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config).context("load drill config")?;
    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => interactive(|console| run_menu(console, &config)),
        Command::Smallest(args) => {
            apply_smallest_overrides(&mut config, args.min_count, args.k)?;
            let SmallestConfig { min_count, k } = config.smallest;
            match args.numbers {
                Some(raw) => cmd_smallest_once(&raw, &config.smallest, args.json),
                None => interactive(|console| run_smallest(console, min_count, k)),
            }
        }
        Command::Likes => interactive(run_likes),
        Command::Reverse => interactive(run_reverse),
        Command::Unique { count } => {
            if let Some(count) = count {
                config.unique.count = count;
                config.validate().context("validate --count")?;
            }
            let count = config.unique.count;
            interactive(|console| run_unique(console, count))
        }
        Command::Distinct => interactive(run_distinct),
        Command::Config(ConfigCommand::Init {
            min_count,
            k,
            count,
            force,
        }) => {
            apply_smallest_overrides(&mut config, min_count, k)?;
            if let Some(count) = count {
                config.unique.count = count;
                config.validate().context("validate --count")?;
            }
            cmd_config_init(&cli.config, &config, force)
        }
    }
}

fn cmd_config_init(path: &Path, config: &DrillsConfig, force: bool) -> Result<i32> {
    match init_config(path, config, force).context("init drill config")? {
        ConfigInit::Written => println!("config: wrote {}", path.display()),
        ConfigInit::Kept => println!(
            "config: kept existing {} (use --force to overwrite)",
            path.display()
        ),
    }
    Ok(exit_codes::OK)
}

/// Apply `smallest` flags over the loaded config and re-validate.
fn apply_smallest_overrides(
    config: &mut DrillsConfig,
    min_count: Option<usize>,
    k: Option<usize>,
) -> Result<()> {
    if let Some(min_count) = min_count {
        config.smallest.min_count = min_count;
    }
    if let Some(k) = k {
        config.smallest.k = k;
    }
    config.validate().context("validate smallest options")?;
    debug!(
        min_count = config.smallest.min_count,
        k = config.smallest.k,
        "smallest options"
    );
    Ok(())
}

/// Validate a single list without prompting.
fn cmd_smallest_once(raw: &str, config: &SmallestConfig, json: bool) -> Result<i32> {
    let result = smallest_n(raw, config.min_count, config.k);
    let code = if result.is_ok() {
        exit_codes::OK
    } else {
        exit_codes::INVALID
    };

    if json {
        let report = SmallestReport::from(result);
        let payload = serde_json::to_string(&report).context("serialize smallest report")?;
        println!("{payload}");
    } else {
        match result {
            Ok(smallest) => println!("{}", join_numbers(&smallest)),
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(code)
}

/// Run a session over locked stdin/stdout and map its outcome to an exit code.
fn interactive<F>(session: F) -> Result<i32>
where
    F: FnOnce(&mut Console<StdinLock<'static>, StdoutLock<'static>>) -> Result<DrillOutcome>,
{
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let outcome = session(&mut console)?;
    if outcome == DrillOutcome::InputClosed {
        warn!("input closed before the drill finished");
    }
    Ok(outcome.exit_code())
}
