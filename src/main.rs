use dato_site::api::{build_http_client, fetch_content};
use dato_site::config::{self, SiteSettings, DEFAULT_CONTENT_FILE, DEFAULT_HOST, DEFAULT_OUTPUT_DIR, DEFAULT_PORT};
use dato_site::content::ContentSnapshot;
use dato_site::handlers::build_app;
use dato_site::models::AppState;
use dato_site::pricing::{Billing, PricingData, PricingTable, Selection};
use dato_site::services::SiteBuilder;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

async fn load_snapshot_or_exit(path: &Path) -> ContentSnapshot {
    match ContentSnapshot::load(path).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(%e, path = %path.display(), "Failed to load content snapshot");
            eprintln!("{} {}: {}", yansi::Paint::red("Failed to load content from"), path.display(), e);
            eprintln!("{}", yansi::Paint::new("Run `dato-site fetch` first, or pass --content <file>.").yellow());
            process::exit(1);
        }
    }
}

fn pricing_data_or_exit(snapshot: &ContentSnapshot) -> PricingData {
    match PricingData::from_snapshot(snapshot) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(%e, "Failed to decode plans payload");
            eprintln!("{}: {}", yansi::Paint::red("Invalid plans payload"), e);
            process::exit(1);
        }
    }
}

fn parse_billing_or_exit(raw: &str) -> Billing {
    match raw.parse::<Billing>() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", yansi::Paint::new(e).red());
            process::exit(1);
        }
    }
}

async fn build_site(snapshot: &ContentSnapshot, settings: &SiteSettings, out: &Path) {
    match SiteBuilder::new(settings).build(snapshot, out).await {
        Ok(report) => {
            println!(
                "{} {} files ({} bytes) {} {}",
                yansi::Paint::new("Built").green(),
                report.files,
                report.bytes,
                yansi::Paint::new("into").green(),
                yansi::Paint::new(report.output_dir.display().to_string()).cyan()
            );
        }
        Err(e) => {
            tracing::error!(%e, "Site build failed");
            eprintln!("{}: {}", yansi::Paint::red("Build failed"), e);
            process::exit(1);
        }
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state);
    tracing::info!(%addr, "Starting preview server");
    println!("{} {}", yansi::Paint::new("Preview running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn print_pricing_table(table: &PricingTable) {
    let mut out = Table::new();
    out.load_preset(presets::UTF8_FULL);
    out.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    out.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        out.set_width(w.saturating_sub(4));
    }

    let mut header = vec!["Feature".to_string()];
    header.extend(table.columns.iter().map(|c| {
        if c.active {
            format!("{} *", c.name)
        } else {
            c.name.clone()
        }
    }));
    out.set_header(header);

    let mut price_row = vec![format!("Price ({})", table.selection.billing)];
    price_row.extend(table.columns.iter().map(|c| c.price.label().to_string()));
    out.add_row(price_row);

    for row in &table.rows {
        let mut cells = vec![match &row.footnote {
            Some(note) => format!("{}\n{}", row.name, note),
            None => row.name.clone(),
        }];
        cells.extend(row.cells.iter().map(|c| c.value.to_terminal()));
        out.add_row(cells);
    }

    println!("\n{out}\n");
}

#[derive(Parser)]
#[command(
    name = "dato-site",
    author,
    version,
    about = "Static generator for the marketing site",
    long_about = r#"Builds the pricing page, the product changelog and the integration landing pages from a snapshot of CMS content.

Examples:
  1) Pull content from the CMS:
      dato-site fetch --out content.json
  2) Render the site:
      dato-site build --content content.json --out public
  3) Preview locally:
      dato-site serve --port 8080
  4) Inspect the pricing table:
      dato-site pricing --billing monthly
"#,
    after_help = "Use `dato-site <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page into the output directory
    Build {
        /// Content snapshot to build from
        #[arg(long, default_value = DEFAULT_CONTENT_FILE)]
        content: PathBuf,
        /// Output directory
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,
    },
    /// Fetch content from the CMS and save it as a snapshot
    #[command(about = "Fetch content from the CMS", long_about = "Query the GraphQL content API (CONTENT_API_URL, DATOCMS_API_TOKEN) and download the plans payload (PLANS_URL), then write both to a snapshot file.")]
    Fetch {
        /// Where to write the snapshot
        #[arg(long, default_value = DEFAULT_CONTENT_FILE)]
        out: PathBuf,
    },
    /// Build the site and serve it locally
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long, default_value = DEFAULT_CONTENT_FILE)]
        content: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,
        /// Serve the output directory as is, without rebuilding
        #[arg(long)]
        no_build: bool,
    },
    /// Print the pricing comparison table
    #[command(about = "Print the pricing comparison table", long_about = "Resolve every (plan, feature) cell the way the pricing page does and print it as a table.")]
    Pricing {
        #[arg(long, default_value = DEFAULT_CONTENT_FILE)]
        content: PathBuf,
        /// Billing period (monthly|yearly)
        #[arg(long, default_value = "yearly")]
        billing: String,
        /// Plan to highlight (defaults to DEFAULT_ACTIVE_PLAN)
        #[arg(long)]
        plan: Option<String>,
    },
    /// Validate configuration
    #[command(about = "Validate configuration", long_about = "Check the environment variables used for fetching content and print the effective site settings.")]
    CheckConfig,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());
    let settings = SiteSettings::from_env();

    let command = cli.command.unwrap_or(Commands::Build {
        content: PathBuf::from(DEFAULT_CONTENT_FILE),
        out: PathBuf::from(DEFAULT_OUTPUT_DIR),
    });

    match command {
        Commands::Build { content, out } => {
            let snapshot = load_snapshot_or_exit(&content).await;
            build_site(&snapshot, &settings, &out).await;
        }
        Commands::Fetch { out } => {
            let client = match build_http_client() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
                    process::exit(1);
                }
            };
            let snapshot = match fetch_content(
                &client,
                &config::get_content_api_url(),
                &config::get_api_token(),
                &config::get_plans_url(),
            )
            .await
            {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(%e, "Fetching content failed");
                    eprintln!("{}: {}", yansi::Paint::red("Fetch failed"), e);
                    process::exit(1);
                }
            };
            // Fail before writing anything if the plans payload is unusable
            pricing_data_or_exit(&snapshot);

            let json = match snapshot.to_json_pretty() {
                Ok(j) => j,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Failed to encode snapshot"), e);
                    process::exit(1);
                }
            };
            if let Err(e) = tokio::fs::write(&out, json).await {
                tracing::error!(%e, "Failed to write snapshot");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to write"), out.display(), e);
                process::exit(1);
            }
            println!("{} {}", yansi::Paint::new("Content saved to").green(), yansi::Paint::new(out.display().to_string()).cyan());
        }
        Commands::Serve { host, port, content, out, no_build } => {
            let snapshot = load_snapshot_or_exit(&content).await;
            if !no_build {
                build_site(&snapshot, &settings, &out).await;
            }
            let pricing = pricing_data_or_exit(&snapshot);
            start_server(AppState::new(settings, pricing, out), &host, port).await;
        }
        Commands::Pricing { content, billing, plan } => {
            let billing = parse_billing_or_exit(&billing);
            let snapshot = load_snapshot_or_exit(&content).await;
            let pricing = pricing_data_or_exit(&snapshot);
            let active_plan = plan.unwrap_or_else(|| settings.default_active_plan.clone());
            let table = PricingTable::build(&pricing, &Selection::new(active_plan, billing), &settings);
            print_pricing_table(&table);
        }
        Commands::CheckConfig => {
            let mut ok = true;
            if config::get_api_token().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("DATOCMS_API_TOKEN is not configured (needed by `fetch`)").red());
                ok = false;
            }
            println!("{}", yansi::Paint::new("Effective settings").bold().underline());
            println!("content api\t{}", config::get_content_api_url());
            println!("plans url\t{}", config::get_plans_url());
            match serde_json::to_string_pretty(&settings) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("{}: {}", yansi::Paint::red("Failed to print settings"), e),
            }
            if !ok {
                process::exit(1);
            }
            println!("{}", yansi::Paint::new("Configuration looks valid").green());
        }
    }
}
