use chrono::Local;
use clap::Parser;
use enjour::application::{
    compose_files, init::init, list_notes::list_notes, ComposeRequest, ConfigService,
    CreateEntryService, RecordStatsService,
};
use enjour::cli::{format_config, format_note_list, format_outcome, Cli, Commands, ComposeKind};
use enjour::domain::{Composer, TimeReference};
use enjour::error::{EnjourError, Result};
use enjour::infrastructure::FileSystemNoteStore;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ENJOUR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::New { time_ref } => {
            let date = TimeReference::parse(&time_ref)?.resolve(Local::now().date_naive());
            let store = FileSystemNoteStore::discover()?;
            let config = store.load_config()?;

            let outcome = CreateEntryService::new(store, config).execute(date)?;
            println!("{}", format_outcome(&outcome));
            Ok(())
        }
        Commands::Compose { kind } => {
            let (request, output) = match kind {
                ComposeKind::Daily {
                    template,
                    previous,
                    output,
                } => (ComposeRequest::Daily { template, previous }, output),
                ComposeKind::Weekly {
                    template,
                    weekly_template,
                    previous,
                    output,
                } => (
                    ComposeRequest::Weekly {
                        template,
                        weekly_template,
                        previous,
                    },
                    output,
                ),
            };

            let content = compose_files(&notebook_composer()?, &request)?;
            write_output(output, &content)
        }
        Commands::Stats { time_ref } => {
            let date = TimeReference::parse(&time_ref)?.resolve(Local::now().date_naive());
            let store = FileSystemNoteStore::discover()?;

            let count = RecordStatsService::new(store).execute(date)?;
            println!("Recorded {} stat(s) for {}", count, date.format("%Y-%m-%d"));
            Ok(())
        }
        Commands::List => {
            let store = FileSystemNoteStore::discover()?;
            let notes = list_notes(&store)?;
            print!("{}", format_note_list(&notes));
            if notes.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemNoteStore::discover()?);

            if list {
                print!("{}", format_config(&service.list()?));
                return Ok(());
            }

            match (key, value) {
                (Some(k), Some(v)) => {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                }
                (Some(k), None) => println!("{}", service.get(&k)?),
                (None, _) => {
                    println!("Usage: enjour config [--list | <key> [<value>]]");
                    println!(
                        "Valid keys: date_format, daily_template, weekly_template, \
                        weekly_day, header_pattern, stats_file"
                    );
                }
            }
            Ok(())
        }
    }
}

/// Composer from the surrounding notebook's config, or the defaults outside a notebook
fn notebook_composer() -> Result<Composer> {
    match FileSystemNoteStore::discover() {
        Ok(store) => store.load_config()?.composer(),
        Err(EnjourError::NotEnjourDirectory(_)) => Ok(Composer::default()),
        Err(e) => Err(e),
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, content)?;
            tracing::info!(path = %path.display(), "wrote composed entry");
        }
        None => print!("{}", content),
    }
    Ok(())
}
