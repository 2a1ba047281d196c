use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use papershelf::adapters::SystemLauncher;
use papershelf::commands;
use papershelf::config::{DEFAULT_DB_PATH, DEFAULT_PAPERS_DIR};
use papershelf::models::NewPaper;
use papershelf::storage;
use papershelf::{CatalogError, LibraryConfig};

/// Local research paper library
#[derive(Parser, Debug)]
#[command(name = "papershelf", version, about, long_about = None)]
struct Cli {
    /// Path to the catalog database
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Directory that holds copied papers
    #[arg(long, global = true, default_value = DEFAULT_PAPERS_DIR)]
    papers_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a PDF to the library
    Add {
        /// Path to PDF file
        file: PathBuf,

        /// Title of the paper
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        title: String,

        /// Authors of the paper
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        authors: String,

        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },

    /// List papers
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Open a paper
    View {
        /// ID of the paper
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Generate citation
    Cite {
        /// ID of the paper
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "papershelf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let config = LibraryConfig::new(cli.db, cli.papers_dir);
    storage::init_store(&config.db_path)
        .with_context(|| format!("Failed to initialize catalog at {:?}", config.db_path))?;

    match run(&config, command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_user_facing() => {
            println!("{}", e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}

fn run(config: &LibraryConfig, command: Commands) -> Result<(), CatalogError> {
    match command {
        Commands::Add {
            file,
            title,
            authors,
            year,
        } => {
            let paper = NewPaper {
                title,
                authors,
                year,
            };
            commands::add_paper(config, &file, &paper)?;
            println!("Paper added.");
        }
        Commands::List { json } => {
            let papers = commands::list_papers(config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&papers)?);
            } else {
                for paper in &papers {
                    println!("{}", paper.summary_line());
                }
            }
        }
        Commands::View { id } => {
            commands::view_paper(config, &SystemLauncher::new(), id)?;
        }
        Commands::Cite { id } => {
            println!("{}", commands::cite_paper(config, id)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "papershelf", "add", "x.pdf", "--title", "T", "--authors", "A", "--year", "2020",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add { file, title, authors, year }) => {
                assert_eq!(file, PathBuf::from("x.pdf"));
                assert_eq!(title, "T");
                assert_eq!(authors, "A");
                assert_eq!(year, 2020);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.db, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(cli.papers_dir, PathBuf::from(DEFAULT_PAPERS_DIR));
    }

    #[test]
    fn test_parse_rejects_bad_year_and_empty_title() {
        assert!(Cli::try_parse_from([
            "papershelf", "add", "x.pdf", "--title", "T", "--authors", "A", "--year", "soon",
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "papershelf", "add", "x.pdf", "--title", "", "--authors", "A", "--year", "2020",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_global_paths_after_subcommand() {
        let cli = Cli::try_parse_from(["papershelf", "cite", "3", "--db", "/tmp/lib.db"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/lib.db"));
        assert!(matches!(cli.command, Some(Commands::Cite { id: 3 })));
    }

    #[test]
    fn test_parse_negative_ids() {
        let cli = Cli::try_parse_from(["papershelf", "cite", "-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Cite { id: -1 })));

        let cli = Cli::try_parse_from(["papershelf", "view", "-5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::View { id: -5 })));
    }

    #[test]
    fn test_no_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["papershelf"]).unwrap();
        assert!(cli.command.is_none());
    }
}
