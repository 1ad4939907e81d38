use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pr_dashboard::api::ApiClient;
use pr_dashboard::chart::ChartJsBackend;
use pr_dashboard::config::AppConfig;
use pr_dashboard::dashboard::{Dashboard, TEAM_NAME_INPUT, USERNAME_INPUT};
use pr_dashboard::dom::{html, Document, SubmitEvent};

#[derive(Parser)]
#[command(name = "pr-dashboard", about = "Client for the PR statistics dashboard")]
struct Cli {
    /// Backend base URL (overrides DASHBOARD_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch all dashboard data and write the rendered page
    Render {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Submit a username-to-team mapping through the form handler
    AddMapping {
        username: String,
        team_name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pr_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    info!("Using backend at {}", config.base_url);

    let client = ApiClient::new(config.base_url);
    let document = Document::dashboard_page().into_shared();
    let dashboard = Dashboard::initialize(client, Arc::new(ChartJsBackend), document).await?;

    match cli.command {
        Command::Render { output } => {
            dashboard.run().await;

            let page = {
                let doc = dashboard.document().lock().await;
                html::render_page(&doc, "GitHub Pull Requests Dashboard")?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, page)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Dashboard written to {}", path.display());
                }
                None => print!("{}", page),
            }
        }
        Command::AddMapping {
            username,
            team_name,
        } => {
            {
                let mut doc = dashboard.document().lock().await;
                doc.set_input_value(USERNAME_INPUT, &username)?;
                doc.set_input_value(TEAM_NAME_INPUT, &team_name)?;
            }

            let mut event = SubmitEvent::new();
            dashboard.submit_team_mapping(&mut event).await;
        }
    }

    Ok(())
}
