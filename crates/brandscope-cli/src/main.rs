use std::path::PathBuf;

use brandscope_core::TemplateKey;
use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod profile_file;
mod scrape;
mod sections;
mod store;

#[derive(Debug, Parser)]
#[command(name = "brandscope")]
#[command(about = "Extract brand profiles from client websites and pick landing-page templates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape one or more sites and print a profile report per URL
    Scrape {
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
        /// Template key, a legacy `tpl-N` id, or `auto`
        #[arg(long, default_value = "auto")]
        template: TemplateKey,
        /// Store the profile under this project id (implies --save)
        #[arg(long)]
        project_id: Option<String>,
        /// Store each profile under a generated project id
        #[arg(long)]
        save: bool,
    },
    /// Resolve the template for an existing profile
    #[command(group(ArgGroup::new("source").required(true).args(["profile", "project_id"])))]
    Select {
        /// JSON file holding a profile, a scrape report, or a stored record
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Project id of a stored profile
        #[arg(long)]
        project_id: Option<String>,
        #[arg(long, default_value = "auto")]
        template: TemplateKey,
    },
    /// Print the default landing-page sections personalized for a client
    Sections {
        #[arg(long)]
        client: String,
        /// Profile whose tone and language drive the rewrite
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Rewrite the copy through the AI service (needs ANTHROPIC_API_KEY)
        #[arg(long)]
        rewrite: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = brandscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Scrape {
            urls,
            template,
            project_id,
            save,
        } => scrape::run_scrape(&config, &urls, template, project_id.as_deref(), save).await,
        Commands::Select {
            profile,
            project_id,
            template,
        } => scrape::run_select(&config, profile.as_deref(), project_id.as_deref(), template).await,
        Commands::Sections {
            client,
            profile,
            rewrite,
        } => sections::run_sections(&config, &client, profile.as_deref(), rewrite).await,
    }
}
