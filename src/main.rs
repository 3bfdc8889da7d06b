// Chunk: docs/chunks/cli_driver - Command-line front end over the editing core
//!
//! lite-pad: the editing core of a small multi-tab text editor, driven from
//! the command line.
//!
//! Each command opens one file as a document, optionally selects a range,
//! runs a text command and prints or saves the result. Messages come from
//! the localization store in the language given by `--lang` or the saved
//! startup language.

mod cli;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lite_pad::commands::{self, character_counts, compute_average};
use lite_pad::i18n::{Language, LocalizationProvider, LocalizationStore, SettingsStore};
use lite_pad::{BufferError, CaretStatus, DirtyLines, Document, LocaleCollator, TextBuffer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, Target};

/// Environment variable holding the log filter, e.g. `LITE_PAD_LOG=debug`.
const LOG_ENV: &str = "LITE_PAD_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = cli
        .settings
        .clone()
        .map(SettingsStore::new)
        .or_else(SettingsStore::default_location);
    let language = match cli.lang.as_deref() {
        Some(tag) => Language::from_tag(tag)?,
        None => settings
            .as_ref()
            .map(SettingsStore::load_startup_language)
            .unwrap_or_default(),
    };
    let store = LocalizationStore::shared(language).context("loading bundled catalogs")?;

    run(cli.command, &store, settings.as_ref())
}

fn run(
    command: Command,
    store: &Arc<LocalizationStore>,
    settings: Option<&SettingsStore>,
) -> anyhow::Result<()> {
    let provider: &dyn LocalizationProvider = &**store;
    match command {
        Command::Upper(target) => edit(target, provider, commands::to_uppercase),
        Command::Lower(target) => edit(target, provider, commands::to_lowercase),
        Command::Invert(target) => edit(target, provider, commands::invert_case),
        Command::Sort { target, descending } => {
            let collator = LocaleCollator::new(language_of(store));
            edit(target, provider, |buffer| {
                commands::sort_lines(buffer, !descending, &collator)
            })
        }
        Command::Unique(target) => edit(target, provider, commands::deduplicate_lines),
        Command::Join { file, in_place } => {
            let target = Target {
                file,
                select: None,
                in_place,
            };
            edit(target, provider, |buffer| {
                Ok::<_, BufferError>(commands::join_lines(buffer))
            })
        }
        Command::Stats { file } => {
            let document = open(&file, provider)?;
            let counts = character_counts(document.buffer());
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}: {}", provider.get_string("charactersWithSpaces")?, counts.with_spaces)?;
            writeln!(out, "{}: {}", provider.get_string("charactersNoSpaces")?, counts.without_spaces)?;
            writeln!(out, "{}: {}", provider.get_string("lines")?, counts.lines)?;
            Ok(())
        }
        Command::Average { file } => {
            let document = open(&file, provider)?;
            match compute_average(document.buffer()) {
                Some(average) => println!(
                    "{} {} {}, {} {}",
                    provider.get_string("outOf")?,
                    average.count,
                    provider.get_string("parsedNumbers")?,
                    provider.get_string("averageIs")?,
                    average.mean
                ),
                None => println!("{}", provider.get_string("noParsableNumbers")?),
            }
            Ok(())
        }
        Command::Status { file, select } => {
            let mut document = open(&file, provider)?;
            if let Some((anchor, caret)) = select {
                document.apply(|buffer| buffer.select(anchor, caret))?;
            }
            println!("{}", CaretStatus::of(document.buffer())?.render(provider)?);
            Ok(())
        }
        Command::SetLanguage { tag } => set_language(&tag, store, settings),
        Command::Languages => {
            let current = language_of(store);
            for language in Language::ALL {
                let marker = if language == current { '*' } else { ' ' };
                println!("{marker} {}\t{}", language.tag(), language.display_name());
            }
            Ok(())
        }
    }
}

fn language_of(store: &LocalizationStore) -> Language {
    Language::from_tag(&store.language()).unwrap_or_default()
}

fn open(path: &Path, provider: &dyn LocalizationProvider) -> anyhow::Result<Document> {
    Document::open(path).with_context(|| {
        let label = provider
            .get_string("errorReadingFile")
            .unwrap_or_else(|_| "Error reading file".to_string());
        format!("{label}: {}", path.display())
    })
}

/// Opens the target, selects, runs `command`, then prints or saves.
fn edit<E>(
    target: Target,
    provider: &dyn LocalizationProvider,
    command: impl FnOnce(&mut TextBuffer) -> Result<DirtyLines, E>,
) -> anyhow::Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let mut document = open(&target.file, provider)?;
    if let Some((anchor, caret)) = target.select {
        document.apply(|buffer| buffer.select(anchor, caret))?;
    }
    document.edit(command)?;
    let changed = document.take_changed_lines();
    if changed.is_none() {
        debug!("command left the document unchanged");
    } else {
        debug!(first_line = changed.start_line(), "document changed");
    }

    if target.in_place {
        if document.is_dirty() {
            document.save().with_context(|| {
                let label = provider
                    .get_string("errorSavingFile")
                    .unwrap_or_else(|_| "Error saving file".to_string());
                format!("{label}: {}", target.file.display())
            })?;
        }
    } else {
        print!("{}", document.buffer().text());
        std::io::stdout().flush()?;
    }
    Ok(())
}

/// Persists the startup language and confirms in that language.
fn set_language(
    tag: &str,
    store: &Arc<LocalizationStore>,
    settings: Option<&SettingsStore>,
) -> anyhow::Result<()> {
    let language = Language::from_tag(tag)?;
    let settings = settings.context("no settings location on this platform")?;
    settings.save_startup_language(language)?;

    store.set_language(language.tag());
    let confirmation = store.get_string("startupLanguageSet")?;
    println!("{} {}", confirmation, language.display_name());
    Ok(())
}
