use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use folio_core::FolioError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::SourceArgs;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - personal portfolio in the terminal", long_about = None)]
struct Cli {
    /// Config file to read instead of ~/.config/folio/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole portfolio page
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List projects with their tunnel state
    Projects {
        /// Project type to show (all, Web, Mobile, Desktop, Other)
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List skills grouped by category
    Skills {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List work experience
    Experience {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List featured projects
    Featured {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Query the status of a single tunnel
    Tunnel {
        tunnel_id: String,
    },
    /// Print the resolved configuration
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("folio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = commands::AppContext::load(cli.config)?;

    match cli.command {
        Commands::Show { source } => commands::page::show(&ctx, &source).await?,
        Commands::Projects {
            filter,
            page,
            source,
        } => commands::page::projects(&ctx, &source, &filter, page).await?,
        Commands::Skills {
            category,
            page,
            source,
        } => commands::page::skills(&ctx, &source, category.as_deref(), page).await?,
        Commands::Experience { page, source } => {
            commands::page::experience(&ctx, &source, page).await?
        }
        Commands::Featured { source } => commands::page::featured(&ctx, &source).await?,
        Commands::Tunnel { tunnel_id } => commands::tunnel::status(&ctx, &tunnel_id).await?,
        Commands::Config => commands::config::show(&ctx)?,
    }

    Ok(())
}

/// Prints the failure; page-level failures get the "not found" fallback
/// instead of a raw error.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<FolioError>() {
        Some(e) if e.is_fatal_to_page() => {
            tracing::error!("[Folio] Page load failed: {}", e);
            eprintln!("{}", "Portfolio not found".red().bold());
            eprintln!(
                "{}",
                "Check that a portfolio ID is configured and that the profile is active."
                    .bright_black()
            );
        }
        _ => eprintln!("{} {:#}", "Error:".red().bold(), err),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_projects_arguments() {
        let cli = Cli::try_parse_from([
            "folio", "projects", "--filter", "Web", "--page", "2", "--data", "p.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Projects {
                filter,
                page,
                source,
            } => {
                assert_eq!(filter, "Web");
                assert_eq!(page, 2);
                assert_eq!(source.data, Some(PathBuf::from("p.json")));
                assert_eq!(source.profile, None);
            }
            _ => panic!("expected projects command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "config", "--verbose", "--config", "c.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
