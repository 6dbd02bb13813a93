//! Launchdash CLI
//!
//! Command-line interface over the launch dataset:
//! - List sites and summary counts
//! - Print the pie and scatter data for a selection
//! - Check a running dashboard server
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use launchdash::chart::{self, Figure, Trace};
use launchdash::config::Config;
use launchdash::dataset::Dataset;
use launchdash::query::{filter_by_payload, success_counts, SiteSelection, ALL_SITES};
use launchdash::PayloadRange;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "launchdash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect launch records from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset CSV (default: the server's configured dataset path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Dashboard server URL (status command)
    #[arg(long, default_value = "http://localhost:8050", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List distinct launch sites
    Sites,

    /// Show dataset summary
    Summary,

    /// Success counts, per site or per outcome for one site
    Pie {
        /// Site name or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
    },

    /// Launches in a payload range, grouped by booster category
    Scatter {
        /// Site name or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Lower payload bound in kg (default: observed minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: observed maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Show status of a running dashboard server
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data = data_path(cli.data.clone(), &Config::load_default());

    match cli.command {
        Commands::Sites => {
            let dataset = load(&data)?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(dataset.sites())?),
                OutputFormat::Table => {
                    for site in dataset.sites() {
                        println!("{}", site);
                    }
                }
            }
        }

        Commands::Summary => {
            let dataset = load(&data)?;
            let stats = dataset.stats();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Table => {
                    println!("{}", stats);
                    println!();
                    println!("{:<16} {:>8} {:>10}", "Site", "Launches", "Successes");
                    println!("{}", "-".repeat(36));
                    for site in &stats.sites {
                        println!("{:<16} {:>8} {:>10}", site.site, site.launches, site.successes);
                    }
                }
            }
        }

        Commands::Pie { site } => {
            let dataset = load(&data)?;
            let site = SiteSelection::parse(&site);
            let counts = success_counts(&dataset, &site);
            let figure = chart::success_pie(&counts, &site);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&figure)?),
                OutputFormat::Table => {
                    println!("{}", figure.title());
                    println!();
                    if counts.is_empty() {
                        println!("No launches for {}", site);
                    }
                    for (label, count) in counts.labelled() {
                        println!("{:<16} {:>6}", label, count);
                    }
                }
            }
        }

        Commands::Scatter { site, low, high } => {
            let dataset = load(&data)?;
            let site = SiteSelection::parse(&site);
            let bounds = dataset.payload_bounds();
            let range = PayloadRange::new(low.unwrap_or(bounds.min), high.unwrap_or(bounds.max));

            let records = filter_by_payload(&dataset, range, &site);
            let figure = chart::payload_scatter(&records, &site);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&figure)?),
                OutputFormat::Table => print_scatter(&figure, range),
            }
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if cli.format == OutputFormat::Json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "Launch Records Dashboard v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Records: {}", health["records"].as_u64().unwrap_or(0));
                    println!("Sites: {}", health["sites"].as_u64().unwrap_or(0));
                    println!(
                        "Live sessions: {}",
                        health["ws_connections"].as_u64().unwrap_or(0)
                    );
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to dashboard at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the dashboard server is running:");
                    eprintln!("  cargo run --bin launchdash");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = launchdash::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// `--data` wins, then the config file and `LAUNCHDASH_DATA_PATH`
fn data_path(arg: Option<PathBuf>, config: &Config) -> PathBuf {
    arg.unwrap_or_else(|| config.dataset.path.clone())
}

fn load(path: &Path) -> anyhow::Result<Dataset> {
    Dataset::load(path).with_context(|| format!("Failed to load dataset {:?}", path))
}

fn print_scatter(figure: &Figure, range: PayloadRange) {
    println!("{}", figure.title());
    println!("Payload range: {} kg", range);
    println!();

    if figure.is_empty() {
        println!("No launches in range");
        return;
    }

    println!("{:<10} {:>12} {:>6}  {}", "Category", "Payload (kg)", "Class", "Launch");
    println!("{}", "-".repeat(60));

    for trace in &figure.data {
        if let Trace::Scatter(scatter) = trace {
            for ((x, y), text) in scatter.x.iter().zip(&scatter.y).zip(&scatter.text) {
                println!("{:<10} {:>12.1} {:>6}  {}", scatter.name, x, y, text);
            }
        }
    }

    println!();
    println!("{} launches", figure.point_count());
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
