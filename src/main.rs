//! Health Hub CLI
//!
//! Command-line front-end over the same view state as the web UI:
//! - List and register clients
//! - List, create and export programs
//! - Enroll clients in programs
//! - Show the dashboard

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use health_hub::api::http::HttpBackend;
use health_hub::config::{generate_default_config, Config};
use health_hub::export::EXPORT_FILE_NAME;
use health_hub::model::{Category, ClientForm, Gender, ProgramForm};
use health_hub::query::{Histogram, TrendGranularity};
use health_hub::views::{
    ClientsAction, ClientsView, DashboardView, EnrollAction, EnrollView, Notices,
    ProgramsAction, ProgramsView,
};

#[derive(Parser)]
#[command(name = "health-hub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage wellness clients, programs and enrollments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: platform config dir, then ./health-hub.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

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
    /// List or register clients
    Clients {
        #[command(subcommand)]
        action: ClientCommand,
    },

    /// List, create or export programs
    Programs {
        #[command(subcommand)]
        action: ProgramCommand,
    },

    /// Enroll a client in a program
    Enroll {
        /// Client ID
        #[arg(long)]
        client: u64,
        /// Program ID
        #[arg(long)]
        program: u64,
    },

    /// Show totals, programs per category and enrollments per month
    Dashboard {
        /// Trend buckets (month, year-month)
        #[arg(short, long)]
        granularity: Option<TrendGranularity>,
    },

    /// Print or write a default config file
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ClientCommand {
    /// List clients
    List {
        /// Only clients whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Register a client
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<String>,
        /// Male, Female or Other
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        contact: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProgramCommand {
    /// List programs, one page at a time
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Fitness, Nutrition, "Mental Health" or "General Wellness"
        #[arg(short, long)]
        category: Option<Category>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Create a program
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<Category>,
    },
    /// Export the filtered programs as CSV
    Export {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        category: Option<Category>,
        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let search = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    // Logging settings come from the config, so report the search afterwards
    health_hub::telemetry::init_logging(&search.config.logging);
    search.report();

    let mut config = search.config;
    if let Some(url) = &cli.api_url {
        config.backend.base_url = url.clone();
    }
    tracing::debug!(backend = %config.backend.base_url, "Health Hub CLI v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }

        Commands::Clients { action } => {
            let backend = HttpBackend::new(config.backend.http())?;
            let mut view = ClientsView::new(config.views.refresh);

            match action {
                ClientCommand::List { search } => {
                    view.load(&backend).await;
                    fail_on_error(&view.notices)?;
                    if let Some(search) = search {
                        view.apply(ClientsAction::SetSearch(search));
                    }
                    print_clients(&view, cli.format)
                }
                ClientCommand::Add {
                    name,
                    age,
                    gender,
                    contact,
                } => {
                    view.form = ClientForm {
                        name,
                        age: age.unwrap_or_default(),
                        gender,
                        contact: contact.unwrap_or_default(),
                    };
                    view.submit(&backend).await;
                    report(&view.notices)
                }
            }
        }

        Commands::Programs { action } => {
            let backend = HttpBackend::new(config.backend.http())?;
            let mut view = ProgramsView::new(config.views.refresh);

            match action {
                ProgramCommand::List {
                    search,
                    category,
                    page,
                } => {
                    view.load(&backend).await;
                    fail_on_error(&view.notices)?;
                    view.apply(ProgramsAction::SetSearch(search.unwrap_or_default()));
                    view.apply(ProgramsAction::SetCategoryFilter(category));
                    view.apply(ProgramsAction::GoToPage(page));
                    print_programs(&view, cli.format)
                }
                ProgramCommand::Add {
                    name,
                    description,
                    category,
                } => {
                    view.form = ProgramForm {
                        name,
                        description: description.unwrap_or_default(),
                        category,
                    };
                    view.submit(&backend).await;
                    report(&view.notices)
                }
                ProgramCommand::Export {
                    search,
                    category,
                    output,
                } => {
                    view.load(&backend).await;
                    fail_on_error(&view.notices)?;
                    view.apply(ProgramsAction::SetSearch(search.unwrap_or_default()));
                    view.apply(ProgramsAction::SetCategoryFilter(category));

                    let csv = view.export_csv()?;
                    if output.as_os_str() == "-" {
                        print!("{}", csv);
                    } else {
                        std::fs::write(&output, csv)
                            .with_context(|| format!("Failed to write {:?}", output))?;
                        eprintln!("Exported {} programs to {:?}", view.filtered().len(), output);
                    }
                    Ok(())
                }
            }
        }

        Commands::Enroll { client, program } => {
            let backend = HttpBackend::new(config.backend.http())?;
            let mut view = EnrollView::new();
            view.apply(EnrollAction::SelectClient(Some(client)));
            view.apply(EnrollAction::SelectProgram(Some(program)));

            if view.submit(&backend).await {
                if let Some(id) = view.last_enrollment {
                    tracing::debug!(enrollment_id = id, "Enrollment confirmed");
                }
            }
            report(&view.notices)
        }

        Commands::Dashboard { granularity } => {
            let backend = HttpBackend::new(config.backend.http())?;
            let mut view =
                DashboardView::new(granularity.unwrap_or(config.views.trend_granularity));
            view.load(&backend).await;

            if let Some(error) = &view.error {
                bail!("{}", error);
            }
            print_dashboard(&view, cli.format)
        }
    }
}

/// Print the success banner, or fail with the error banner
fn report(notices: &Notices) -> anyhow::Result<()> {
    if let Some(success) = &notices.success {
        println!("{}", success);
    }
    fail_on_error(notices)
}

fn fail_on_error(notices: &Notices) -> anyhow::Result<()> {
    match &notices.error {
        Some(error) => bail!("{}", error),
        None => Ok(()),
    }
}

fn print_clients(view: &ClientsView, format: OutputFormat) -> anyhow::Result<()> {
    let clients = view.filtered();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients found");
        return Ok(());
    }

    println!("{:<6} {:<25} {:<5} {:<8} {}", "ID", "Name", "Age", "Gender", "Contact");
    println!("{}", "-".repeat(70));
    for client in clients {
        println!(
            "{:<6} {:<25} {:<5} {:<8} {}",
            client.id,
            truncate(&client.name, 25),
            client.age_or_placeholder(),
            client.gender_or_placeholder(),
            client.contact_or_placeholder()
        );
    }
    Ok(())
}

fn print_programs(view: &ProgramsView, format: OutputFormat) -> anyhow::Result<()> {
    let page = view.current_page();

    if format == OutputFormat::Json {
        let body = serde_json::json!({
            "page": page.number,
            "total_pages": page.total_pages,
            "total_items": page.total_items,
            "programs": page.items,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No programs found");
        return Ok(());
    }

    println!("{:<6} {:<30} {:<18} {}", "ID", "Name", "Category", "Description");
    println!("{}", "-".repeat(80));
    for program in &page.items {
        println!(
            "{:<6} {:<30} {:<18} {}",
            program.id,
            truncate(&program.name, 30),
            program.category().unwrap_or("-"),
            program.description().unwrap_or("No description")
        );
    }
    if page.show_pager() {
        println!();
        println!("Page {} of {}", page.number, page.total_pages);
    }
    Ok(())
}

fn print_dashboard(view: &DashboardView, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        let body = serde_json::json!({
            "stats": view.stats,
            "categories": chart_rows(&view.categories, "value"),
            "enrollment_trend": chart_rows(&view.trend, "count"),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Total Clients:     {}", view.stats.clients);
    println!("Total Programs:    {}", view.stats.programs);
    println!("Total Enrollments: {}", view.stats.enrollments);

    println!();
    println!("Program Categories");
    print_bars(&view.categories);

    println!();
    println!("Enrollment Trends");
    print_bars(&view.trend);
    Ok(())
}

fn chart_rows(histogram: &Histogram, count_key: &str) -> Vec<serde_json::Value> {
    histogram
        .entries()
        .iter()
        .map(|(name, count)| {
            let mut row = serde_json::Map::new();
            row.insert("name".to_string(), name.clone().into());
            row.insert(count_key.to_string(), (*count).into());
            serde_json::Value::Object(row)
        })
        .collect()
}

fn print_bars(histogram: &Histogram) {
    if histogram.is_empty() {
        println!("  (no data)");
        return;
    }
    let max = histogram.max_count().max(1);
    for (label, count) in histogram.entries() {
        let width = count * 30 / max;
        println!("  {:<18} {:>4} {}", label, count, "#".repeat(width.max(1)));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
