use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{config, filters, reviews, show, stats, tags, AppContext};
use kdrama_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod ui;

#[derive(Parser)]
#[command(name = "wrapped")]
#[command(about = "my k-drama wrapped - stats, reviews and tags from a published spreadsheet")]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read the drama catalog from a local CSV export instead of the configured URL
    #[arg(long, global = true, value_name = "PATH")]
    dramas_file: Option<PathBuf>,

    /// Read the watch history from a local CSV export instead of the configured URL
    #[arg(long, global = true, value_name = "PATH")]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Feed(FeedCommands),
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

/// Commands that load the feeds
#[derive(Subcommand)]
enum FeedCommands {
    /// Show the wrapped statistics
    #[command(long_about = "Show total dramas watched, the binge-watch record, the most watched show, genre distribution, rating histogram and total minutes watched.")]
    Stats,
    /// List reviews, optionally filtered
    #[command(long_about = "List reviewed dramas. Genre and tag filters match any of the given values; all filter kinds must match. Dramas without a release year never match the year range.")]
    Reviews {
        /// Only dramas with this genre (repeatable)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Only dramas with this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Earliest release year (inclusive)
        #[arg(long, value_name = "YEAR")]
        from_year: Option<i32>,

        /// Latest release year (inclusive)
        #[arg(long, value_name = "YEAR")]
        to_year: Option<i32>,
    },
    /// Show the available genre, year and tag filters
    Filters,
    /// Rank tags or search them
    Tags {
        /// Case-insensitive search over all tags
        #[arg(long, short)]
        search: Option<String>,

        /// Maximum number of tags to show
        #[arg(long, short)]
        limit: Option<usize>,
    },
    /// Show one drama by its slug (e.g. crash-landing-on-you)
    Show {
        slug: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathManager::default().config_file());
    let config = Config::load_or_default(&config_path).map_err(|e| eyre!("{}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, config.logging.file.as_deref())
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let command = match cli.command {
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            return config::run_config(cmd, &config, &config_path, &output);
        }
        Commands::Feed(command) => command,
    };

    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration in {}: {}", config_path.display(), e))?;
    let ctx = AppContext::new(config, cli.dramas_file, cli.history_file);

    match command {
        FeedCommands::Stats => stats::run_stats(&ctx, &output).await,
        FeedCommands::Reviews {
            genres,
            tags,
            from_year,
            to_year,
        } => reviews::run_reviews(&ctx, genres, tags, from_year, to_year, &output).await,
        FeedCommands::Filters => filters::run_filters(&ctx, &output).await,
        FeedCommands::Tags { search, limit } => tags::run_tags(&ctx, search, limit, &output).await,
        FeedCommands::Show { slug } => show::run_show(&ctx, &slug, &output).await,
    }
}
