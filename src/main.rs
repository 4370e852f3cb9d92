//! Mastermind - interactive terminal game
//!
//! Reads guesses from stdin, prints feedback after every turn and reveals
//! the secret when the turns run out. Logs go to stderr (`RUST_LOG`).

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Input};
use mastermind_engine::{GameConfig, GameRng, GameSession, SessionState};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(cli.length, cli.colors, cli.max_turns)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, ?config, "starting");
    if let Some(hint) = replay_hint(cli.seed, seed) {
        println!("{}", hint);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = match cli.name {
        Some(name) => name,
        None => prompt(&mut input, "Enter your name: ")?.unwrap_or_default(),
    };
    println!("Welcome {}", name.trim());

    let mut rng = GameRng::new(seed);
    loop {
        let mut session = GameSession::new(config, &mut rng.fork())?;
        if !play(&mut session, &mut input)? {
            break;
        }
        match prompt(&mut input, "Play again? [y/N] ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Tells the player how to replay a run whose seed was picked at random.
fn replay_hint(requested: Option<u64>, seed: u64) -> Option<String> {
    match requested {
        Some(_) => None,
        None => Some(format!("Seed {} (replay with --seed {})", seed, seed)),
    }
}

/// Print `message` and read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run one game. Returns `false` if the player quit before it ended.
fn play(session: &mut GameSession, input: &mut impl BufRead) -> Result<bool> {
    let config = *session.config();
    println!(
        "Find {} symbols between 1 and {} in {} turns.",
        config.length, config.alphabet_size, config.max_turns
    );

    loop {
        let message = format!("[{}/{}] > ", session.turns_taken() + 1, config.max_turns);
        let Some(line) = prompt(input, &message)? else {
            return Ok(false);
        };

        let guess = match cli::parse_input(&line) {
            Ok(Input::Guess(guess)) => guess,
            Ok(Input::Blank) => continue,
            Ok(Input::Quit) => return Ok(false),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let (feedback, state) = match session.submit_guess(&guess) {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "guess rejected");
                println!("{}", e);
                continue;
            }
        };

        println!(
            "{} well placed, {} misplaced",
            feedback.exact, feedback.misplaced
        );

        match state {
            SessionState::InProgress { .. } => {}
            SessionState::Won { turns_taken } => {
                println!("Well played, you won in {} turns!", turns_taken);
                return Ok(true);
            }
            SessionState::Lost { secret } => {
                println!("GAME OVER");
                println!("The answer was {}", secret);
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_engine::Combination;
    use std::io::Cursor;

    fn session(max_turns: u32) -> GameSession {
        let config = GameConfig::default().with_max_turns(max_turns);
        GameSession::with_secret(config, Combination::from([1, 2, 3, 4])).unwrap()
    }

    #[test]
    fn test_play_skips_bad_lines_without_using_turns() {
        let mut s = session(2);
        let mut input = Cursor::new("abc\n0 0 0 0\n1 2 3\n\n5 5 5 5\n1,2,3,4\n");

        assert!(play(&mut s, &mut input).unwrap());
        assert_eq!(s.state(), SessionState::Won { turns_taken: 2 });
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_play_finished_by_loss_returns_true() {
        let mut s = session(1);
        let mut input = Cursor::new("5 5 5 5\n1 2 3 4\n");

        assert!(play(&mut s, &mut input).unwrap());
        assert!(matches!(s.state(), SessionState::Lost { .. }));
        assert_eq!(s.turns_taken(), 1);
    }

    #[test]
    fn test_play_quit_and_eof_leave_game() {
        for text in ["quit\n", ""] {
            let mut s = session(10);
            let mut input = Cursor::new(text);

            assert!(!play(&mut s, &mut input).unwrap());
            assert_eq!(s.turns_taken(), 0);
            assert!(!s.is_over());
        }
    }

    #[test]
    fn test_play_eof_mid_game() {
        let mut s = session(10);
        let mut input = Cursor::new("5 5 5 5\n");

        assert!(!play(&mut s, &mut input).unwrap());
        assert_eq!(s.state(), SessionState::InProgress { turns_taken: 1 });
    }

    #[test]
    fn test_replay_hint_only_for_random_seed() {
        assert_eq!(replay_hint(Some(7), 7), None);
        assert_eq!(
            replay_hint(None, 12345).as_deref(),
            Some("Seed 12345 (replay with --seed 12345)")
        );
    }
}
