// Chunk: docs/chunks/cli_driver - Command-line front end over the editing core

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lite-pad")]
#[command(about = "Text commands from a small multi-tab editor, one file at a time")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Language for messages (defaults to the saved startup language)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Settings file holding the startup language
    #[arg(long, global = true, env = "LITE_PAD_SETTINGS", hide_env_values = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// A file to edit and where its result goes.
#[derive(Args, Debug)]
pub struct Target {
    pub file: PathBuf,

    /// Selection as ANCHOR..CARET character offsets (default: caret at 0)
    #[arg(long, value_parser = parse_selection)]
    pub select: Option<(usize, usize)>,

    /// Save the result back to the file instead of printing it
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Uppercase the selection, or the whole file
    Upper(Target),
    /// Lowercase the selection, or the whole file
    Lower(Target),
    /// Invert the case of the selection, or the whole file
    Invert(Target),
    /// Sort the lines the selection touches
    Sort {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        descending: bool,
    },
    /// Remove repeated lines from the lines the selection touches
    Unique(Target),
    /// Join all lines with single spaces
    Join {
        file: PathBuf,
        #[arg(long)]
        in_place: bool,
    },
    /// Character and line counts
    Stats { file: PathBuf },
    /// Average of the numbers in the file
    Average { file: PathBuf },
    /// Caret status line for a selection
    Status {
        file: PathBuf,
        #[arg(long, value_parser = parse_selection)]
        select: Option<(usize, usize)>,
    },
    /// Save the language used at startup
    SetLanguage { tag: String },
    /// List the available languages
    Languages,
}

/// Parses `"A..B"` into `(A, B)`.
fn parse_selection(value: &str) -> Result<(usize, usize), String> {
    let (anchor, caret) = value
        .split_once("..")
        .ok_or_else(|| format!("expected ANCHOR..CARET, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("bad offset `{part}`: {err}"))
    };
    Ok((parse(anchor)?, parse(caret)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("3..10"), Ok((3, 10)));
        assert_eq!(parse_selection("10..3"), Ok((10, 3)));
        assert!(parse_selection("3-10").is_err());
        assert!(parse_selection("a..1").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
