use clap::Parser;
use std::path::Path;
use tipcheck::application::{show_article, CheckCorpusService, InitService, ListArticlesService};
use tipcheck::cli::{format_article, format_listing, format_report, Cli, Commands};
use tipcheck::error::TipcheckError;
use tipcheck::infrastructure::logging::init_logging;
use tipcheck::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let _logger = match init_logging(cli.verbose, cli.quiet) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn repository_for(path: Option<&Path>) -> Result<FileSystemRepository, TipcheckError> {
    match path {
        Some(p) => FileSystemRepository::discover_from(p),
        None => FileSystemRepository::discover(),
    }
}

fn run(cli: Cli) -> Result<i32, TipcheckError> {
    match cli.command {
        Commands::Init { path } => {
            let written = InitService::execute(&path)?;
            println!("Wrote {}", written.display());
            Ok(0)
        }
        Commands::Check { path } => {
            let repo = repository_for(path.as_deref())?;
            let report = CheckCorpusService::new(repo).execute()?;
            print!("{}", format_report(&report));
            Ok(report.exit_code())
        }
        Commands::List { path, all } => {
            let repo = repository_for(path.as_deref())?;
            let entries = ListArticlesService::new(repo).execute(all)?;
            let listing = format_listing(&entries);
            if entries.is_empty() {
                println!("{}", listing);
            } else {
                print!("{}", listing);
            }
            Ok(0)
        }
        Commands::Show { file } => {
            let article = show_article(&file)?;
            print!("{}", format_article(&file, &article));
            Ok(0)
        }
    }
}
