use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use food_radar::{Config, cli};

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Food Radar: a terminal window into the Notion pocket list of restaurant notes
#[derive(Parser)]
#[command(name = "radar", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source credentials from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the notes database and display it as a table
    List,

    /// Send an article URL to the n8n workflow that writes a new note
    Add {
        /// The article URL to scrape and summarize
        url: String,
    },

    /// Test the Notion token and database id
    Auth,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::from_filename(&cli.env)?;

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let config = Config::from_env()?;

    match cli.command {
        Commands::List => cli::list_notes(&config).await?,
        Commands::Add { url } => cli::add_note(&config, &url).await?,
        Commands::Auth => cli::check_auth(&config).await?,
    }

    Ok(())
}
