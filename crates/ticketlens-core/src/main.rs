//! TicketLens CLI
//!
//! Command-line front end for the search parser and the analytics engine.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ticketlens::config::LoggingConfig;
use ticketlens::models::{Analytics, Qualifier, SearchFilter, Ticket};
use ticketlens::{analytics::Aggregator, search, source, Config};

/// TicketLens - search and analytics for ticket listings
#[derive(Parser)]
#[command(name = "ticketlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TICKETLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a search string is interpreted
    Parse {
        /// Search string, e.g. "before:31/12/2023 urgent"
        query: String,
    },

    /// Filter tickets with a search string
    Search {
        /// Search string
        query: String,

        /// JSON file holding an array of tickets ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Summarize tickets for the dashboard
    Analytics {
        /// JSON file holding an array of tickets ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging, cli.verbose);
    debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Parse { query } => run_parse(&query, cli.format),
        Commands::Search {
            query,
            input,
            limit,
        } => run_search(&config, &query, &input, limit, cli.format),
        Commands::Analytics { input } => run_analytics(&config, &input, cli.format),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_parse(query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let filter = search::parse(query);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&filter)?),
        OutputFormat::Text => print_filter(&filter),
    }
    Ok(())
}

fn run_search(
    config: &Config,
    query: &str,
    input: &Path,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let tickets = source::load_tickets(input)?;
    let filter = search::parse(query);

    let mut matched = search::apply(&tickets, &filter, &config.search);
    let total = matched.len();
    if let Some(limit) = limit {
        matched.truncate(limit);
    }

    info!(total, shown = matched.len(), "Search complete");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matched)?),
        OutputFormat::Text => {
            for ticket in &matched {
                print_ticket(ticket);
            }
            println!();
            println!("{} of {total} matching tickets shown", matched.len());
        }
    }
    Ok(())
}

fn run_analytics(
    config: &Config,
    input: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let tickets = source::load_tickets(input)?;
    let analytics = Aggregator::new(config.analytics.clone()).aggregate(&tickets);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analytics)?),
        OutputFormat::Text => print_analytics(&analytics),
    }
    Ok(())
}

fn print_filter(filter: &SearchFilter) {
    let qualifier = match &filter.qualifier {
        Qualifier::None => "none".to_string(),
        Qualifier::Before(at) => format!("before {}", at.to_rfc3339()),
        Qualifier::After(at) => format!("after {}", at.to_rfc3339()),
        Qualifier::Reporter(email) => format!("reporter {email}"),
    };

    println!("Qualifier: {qualifier}");
    println!(
        "Text:      {}",
        filter.search_value.as_deref().unwrap_or("(none)")
    );
}

fn print_ticket(ticket: &Ticket) {
    let created = ticket
        .creation_time
        .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());

    println!(
        "{:<12} {:<16} {:<28} {}",
        ticket.id, created, ticket.user_email, ticket.title
    );
}

fn print_analytics(analytics: &Analytics) {
    let stats = &analytics.stats;

    println!("Summary");
    println!("─────────────────────");
    println!("Total tickets:      {}", stats.total_tickets);
    println!("Unique reporters:   {}", stats.unique_reporters);
    println!("Most common label:  {}", stats.most_common_label);
    println!("Tickets per day:    {:.1}", stats.avg_tickets_per_day);

    println!();
    println!("Labels");
    for entry in &analytics.label_counts {
        println!("  {:<24} {}", entry.label, entry.count);
    }

    println!();
    println!("Timeline");
    for entry in &analytics.timeline {
        println!("  {:<24} {}", entry.month, entry.count);
    }

    println!();
    println!("Top reporters");
    for entry in &analytics.top_reporters {
        println!("  {:<24} {}", entry.email, entry.count);
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ticketlens", &mut io::stdout());
}
