//! Interactive game session
//!
//! Line-oriented host around the core: draws a root word, reads submissions,
//! and applies the accept/reject contract. On accept the word is committed
//! and the round redisplayed; on reject the rejection's title and message
//! are shown and nothing changes.

use crate::dictionary::Dictionary;
use crate::game::{GameState, SourceError, StaticWords, WordSource};
use crate::output::display;
use crate::rules::Validator;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Root used when the configured source has no words to offer
///
/// Mirrors the reference behavior of defaulting to a known-good word rather
/// than starting a rootless round.
pub const FALLBACK_ROOT: &str = "silkworm";

/// Run the interactive session until the player quits
///
/// Reserved inputs: `new` restarts with a fresh root, `quit` (or `exit`)
/// ends the session. Everything else is treated as a submission.
///
/// # Errors
///
/// Returns an error if the word source cannot be read or stdin is closed
/// unexpectedly mid-read.
pub fn run_play<S, D>(source: &S, dictionary: &D, language: &str) -> Result<(), String>
where
    S: WordSource + ?Sized,
    D: Dictionary + ?Sized,
{
    let mut rng = rand::rng();
    let mut state = GameState::new();

    start_round(&mut state, source, &mut rng)?;

    display::print_banner();
    display::print_round(&state.snapshot());

    let validator = Validator::with_language(dictionary, language);
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let Some(input) = read_submission(&mut reader, state.root_word())? else {
            // Stdin closed; treat like a quit
            display::print_goodbye(state.score());
            return Ok(());
        };

        match input.trim() {
            "quit" | "exit" => {
                display::print_goodbye(state.score());
                return Ok(());
            }
            "new" => {
                start_round(&mut state, source, &mut rng)?;
                display::print_round(&state.snapshot());
                continue;
            }
            _ => {}
        }

        match validator.check(&input, &state) {
            Ok(word) => {
                state.commit(word);
                display::print_round(&state.snapshot());
            }
            Err(rejection) => display::print_rejection(&rejection),
        }
    }
}

/// Start or restart a round, applying the fallback-root policy
fn start_round<S, R>(state: &mut GameState, source: &S, rng: &mut R) -> Result<(), String>
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    match state.start(source, rng) {
        Ok(_) => Ok(()),
        Err(SourceError::Unavailable) => {
            let fallback = StaticWords::single(FALLBACK_ROOT);
            state
                .start(&fallback, rng)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Prompt for one submission; `None` means stdin reached end-of-input
fn read_submission<R: BufRead>(reader: &mut R, root: &str) -> Result<Option<String>, String> {
    print!("[{root}] > ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}
