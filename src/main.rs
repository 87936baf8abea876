// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use mathcheck::app_config::{self, Config, OutputFormat};
use mathcheck::errors::AppError;
use mathcheck::extraction::RegionOrder;
use mathcheck::MathChecker;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare the math of two LaTeX files (default command)
    Compare(CompareArgs),

    /// Generate shell completions for mathcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct CompareArgs {
    /// Original LaTeX file
    #[arg(value_name = "ORIGINAL")]
    original: PathBuf,

    /// Translated LaTeX file
    #[arg(value_name = "TRANSLATED")]
    translated: PathBuf,

    #[command(flatten)]
    options: CompareOptions,
}

#[derive(clap::Args, Debug, Clone)]
struct CompareOptions {
    /// Keep the category order (inline, display, environments) instead of document order
    #[arg(long, env = "MATHCHECK_LEGACY_ORDER")]
    legacy_order: bool,

    /// Print the comparison result as JSON
    #[arg(long, env = "MATHCHECK_JSON")]
    json: bool,

    /// Disable colored output
    #[arg(long, env = "MATHCHECK_NO_COLOR")]
    no_color: bool,

    /// Characters shown per snippet
    #[arg(short, long, env = "MATHCHECK_WIDTH")]
    width: Option<usize>,

    /// Fail when braces are unbalanced in the translated file
    #[arg(long, env = "MATHCHECK_FAIL_ON_IMBALANCE")]
    fail_on_imbalance: bool,

    /// Set logging level
    #[arg(short, long, value_enum, env = "MATHCHECK_LOG_LEVEL")]
    log_level: Option<CliLogLevel>,
}

/// mathcheck - formula preservation checker for translated LaTeX
///
/// Extracts every formula and math environment from an original LaTeX file
/// and its translation, and reports formulas that were changed, dropped or added.
#[derive(Parser, Debug)]
#[command(name = "mathcheck")]
#[command(version)]
#[command(about = "Check that a LaTeX translation preserved every formula")]
#[command(long_about = "mathcheck compares the math regions of an original LaTeX file and its translation.

EXAMPLES:
    mathcheck paper.tex paper.fi.tex             # Compare two files
    mathcheck --json paper.tex paper.fi.tex      # Machine-readable result
    mathcheck --legacy-order a.tex b.tex         # Category order instead of document order
    mathcheck completions bash > mathcheck.bash  # Generate bash completions

EXIT STATUS:
    0 when every formula matches, 1 on any discrepancy or unreadable input.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Original LaTeX file
    #[arg(value_name = "ORIGINAL")]
    original: Option<PathBuf>,

    /// Translated LaTeX file
    #[arg(value_name = "TRANSLATED")]
    translated: Option<PathBuf>,

    #[command(flatten)]
    options: CompareOptions,
}

impl CompareOptions {
    // @returns: Default configuration overridden by these flags
    fn to_config(&self) -> Config {
        let mut config = Config::default();

        if self.legacy_order {
            config.region_order = RegionOrder::Category;
        }
        if self.json {
            config.output_format = OutputFormat::Json;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(width) = self.width {
            config.snippet_width = width;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone().into();
        }
        config.fail_on_imbalance = self.fail_on_imbalance;

        config
    }
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger accepts everything; the effective level is set per run
    if CustomLogger::init(LevelFilter::Trace).is_err() {
        eprintln!("Failed to initialize logger");
    }
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse();

    let args = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mathcheck", &mut std::io::stdout());
            return ExitCode::SUCCESS;
        }
        Some(Commands::Compare(args)) => args,
        None => match (cli.original, cli.translated) {
            (Some(original), Some(translated)) => CompareArgs {
                original,
                translated,
                options: cli.options,
            },
            _ => {
                let _ = CommandLineOptions::command().print_help();
                return ExitCode::FAILURE;
            }
        },
    };

    match run_compare(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_compare(args: CompareArgs) -> Result<bool> {
    let config = args.options.to_config();
    log::set_max_level(LevelFilter::from(&config.log_level));

    config.validate().context("Configuration validation failed")?;
    debug!("Effective configuration: {:?}", config);

    let checker = MathChecker::with_config(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    checker
        .run(&args.original, &args.translated, &mut out)
        .map_err(|e: AppError| anyhow::Error::new(e).context("Cannot compare documents"))
}
