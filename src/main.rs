//! Word Scramble - CLI
//!
//! Interactive anagram game plus one-shot utilities for checking and
//! enumerating plays.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, find_hints, run_play},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::{EmbeddedWords, WordListFile, WordSource},
    output::{print_check_result, print_hints},
    wordlists::{DICTIONARY, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from a scrambled root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom newline-delimited root-word list
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Path to a custom newline-delimited dictionary
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Language tag submissions are checked in
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Play an interactive round (default)
    Play,

    /// Check one word against a root word
    Check {
        /// The round's root word
        root: String,

        /// The word to validate
        word: String,
    },

    /// List every dictionary word spellable from a root
    Hints {
        /// The root word to play from
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Check { ref root, ref word } => run_check_command(&cli, root, word),
        Commands::Hints { ref root, limit } => run_hints_command(&cli, root, limit),
    }
}

/// Build the dictionary oracle from the -d flag, or use the embedded list
fn load_dictionary(cli: &Cli) -> Result<WordListDictionary> {
    match &cli.dictionary {
        Some(path) => Ok(WordListDictionary::from_file(path, &cli.language)?),
        None => Ok(WordListDictionary::from_words(
            DICTIONARY.iter().copied(),
            &cli.language,
        )),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(cli)?;

    let source: Box<dyn WordSource> = match &cli.words {
        Some(path) => Box::new(WordListFile::new(path)),
        None => Box::new(EmbeddedWords),
    };

    run_play(source.as_ref(), &dictionary, &cli.language).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(cli: &Cli, root: &str, word: &str) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let result = check_word(root, word, &dictionary, &cli.language);

    print_check_result(&result);

    if !result.is_accepted() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_hints_command(cli: &Cli, root: &str, limit: Option<usize>) -> Result<()> {
    let vocabulary = match &cli.dictionary {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(DICTIONARY),
    };

    let result = find_hints(root, &vocabulary);
    print_hints(&result, limit);
    Ok(())
}
