use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use eclosion::cli::{
    handle_months_command, handle_recurring_command, handle_stash_command, handle_target_command,
    RecurringCommands, StashCommands,
};
use eclosion::config::{paths::EclosionPaths, settings::Settings};
use eclosion::storage::Storage;

#[derive(Parser)]
#[command(
    name = "eclosion",
    version,
    about = "Savings targets for recurring expenses and Stash goals",
    long_about = "Eclosion works out how much to set aside each month so recurring \
                  bills and savings goals are funded on time, and when catch-up \
                  contributions settle to their steady-state rate."
)]
struct Cli {
    /// Log verbosity (overridden by RUST_LOG)
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::Warn,
        env = "ECLOSION_LOG_LEVEL"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly amount needed to reach a goal by a date
    Target {
        /// Goal amount (e.g., "1200")
        goal: String,
        /// Current balance
        #[arg(allow_hyphen_values = true)]
        balance: String,
        /// Target date (YYYY-MM-DD)
        date: String,
        /// Month to calculate for (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Whole months between two dates
    Months {
        /// Start date (YYYY-MM-DD)
        from: String,
        /// End date (YYYY-MM-DD)
        to: String,
    },

    /// Stash savings goal commands
    #[command(subcommand)]
    Stash(StashCommands),

    /// Recurring expense commands
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.into());

    let paths = EclosionPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Target {
            goal,
            balance,
            date,
            month,
        }) => {
            handle_target_command(&settings, &goal, &balance, &date, month.as_deref())?;
        }
        Some(Commands::Months { from, to }) => {
            handle_months_command(&from, &to)?;
        }
        Some(Commands::Stash(cmd)) => {
            let mut storage = Storage::new(&paths)?;
            storage.load_all()?;
            handle_stash_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            let storage = Storage::new(&paths)?;
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized Eclosion at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Eclosion Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Show timeline:   {}", settings.show_timeline);
        }
        None => {
            println!("Eclosion - savings targets for recurring expenses and goals");
            println!();
            println!("Run 'eclosion --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
