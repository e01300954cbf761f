//! expboard CLI: serve the dashboard and inspect how experiment pages are laid out.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use expboard::server::{serve, ServerConfig};
use expboard::tabs::duplicate_suffixes;
use expboard::urls::join;
use expboard::{DashboardConfig, DetailController, DetailView, Experiment, NoopCommands, TAB_TABLE};

#[derive(Parser)]
#[command(
    name = "expboard",
    about = "expboard: experiment tracking dashboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that needs the dashboard configuration.
#[derive(clap::Args)]
struct DashboardArgs {
    /// Dashboard config file (YAML or JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Base URL of the tracking API, overrides the config file
    #[arg(long)]
    api_url: Option<String>,
    /// Path prefix of dashboard pages, overrides the config file
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(long, short, default_value_t = 8000)]
        port: u16,
        #[command(flatten)]
        dashboard: DashboardArgs,
    },
    /// Show the breadcrumb and tabs of an experiment's detail page
    Inspect {
        /// Experiment JSON document as returned by the API ("-" for stdin)
        file: PathBuf,
        #[command(flatten)]
        dashboard: DashboardArgs,
    },
    /// List the detail page tab routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, dashboard } => {
            cmd_serve(host, port, load_dashboard(dashboard)?).await?;
        }
        Commands::Inspect { file, dashboard } => {
            cmd_inspect(file, load_dashboard(dashboard)?)?;
        }
        Commands::Routes => {
            cmd_routes();
        }
    }

    Ok(())
}

fn load_dashboard(args: DashboardArgs) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(prefix) = args.prefix {
        config.app_prefix = prefix;
    }
    config.validate()?;
    debug!(?config, "dashboard configuration");
    Ok(config)
}

// ─── Command implementations ──────────────────────────────────────────────────

async fn cmd_serve(host: String, port: u16, dashboard: DashboardConfig) -> Result<()> {
    println!("expboard dashboard");
    println!("   URL:       http://{}:{}{}", host, port, dashboard.app_prefix);
    println!("   API:       {}", dashboard.api_url);
    println!();

    let config = ServerConfig {
        host,
        port,
        dashboard,
    };
    serve(config).await?;
    Ok(())
}

fn read_document(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !file.exists() {
        anyhow::bail!("Experiment file not found: {}", file.display());
    }
    Ok(std::fs::read_to_string(file)?)
}

fn cmd_inspect(file: PathBuf, dashboard: DashboardConfig) -> Result<()> {
    let content = read_document(&file)?;
    let experiment: Option<Experiment> =
        serde_json::from_str(&content).context("not an experiment document")?;

    let controller = DetailController::new(dashboard.app_routes(), Arc::new(NoopCommands));
    let page = match controller.render(experiment.as_ref())? {
        DetailView::Empty(empty) => {
            println!("{}", empty.title());
            return Ok(());
        }
        DetailView::Page(page) => page,
    };

    println!("URL:      {}", page.experiment_url);
    println!("Status:   {}", page.actions.last_status);
    println!("Bookmark: {}", if page.bookmark.active { "yes" } else { "no" });
    println!();

    println!("── Breadcrumb ──────────────────────────");
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Name", "Link"]);
    for link in &page.breadcrumb {
        table.add_row([link.name.as_str(), link.value.as_deref().unwrap_or("-")]);
    }
    println!("{}", table);

    println!("── Tabs ({}) ────────────────────────────", page.tabs.len());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Tab", "URL"]);
    for tab in &page.tabs {
        table.add_row([tab.title.to_string(), join(&page.experiment_url, tab.rel_url)]);
    }
    println!("{}", table);

    Ok(())
}

fn cmd_routes() {
    let shared = duplicate_suffixes(&TAB_TABLE);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["#", "Tab", "Suffix", "Shared with"]);
    for (i, def) in TAB_TABLE.iter().enumerate() {
        let others: Vec<String> = shared
            .iter()
            .filter(|(_, idx)| idx.contains(&i))
            .flat_map(|(_, idx)| idx.iter().filter(move |j| **j != i))
            .map(|j| TAB_TABLE[*j].title.to_string())
            .collect();
        let suffix = if def.rel_url.is_empty() { "(base)" } else { def.rel_url };
        table.add_row([
            i.to_string(),
            def.title.to_string(),
            suffix.to_string(),
            if others.is_empty() { "-".to_string() } else { others.join(", ") },
        ]);
    }
    println!("{}", table);
}
