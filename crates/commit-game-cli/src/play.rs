//! Interactive round loop over line-based input.

use crate::config::{GameConfig, OutputMode};
use anyhow::Context;
use commit_game_core::{GameResult, MoveSet, RoundController, RoundReveal};
use rand::{CryptoRng, RngCore};
use std::io::{BufRead, Write};
use tracing::info;

/// `0`, `?` and `1..=n` are menu entries first, even when a move has that name
const MENU_NOTE: &str = "(0, ? and menu numbers pick entries; type any other text to name a move)";

/// What a line of player input asks for
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Exit,
    Help,
    Move(String),
}

fn parse_choice(line: &str, game_moves: &MoveSet) -> Choice {
    match line {
        "0" => Choice::Exit,
        "?" => Choice::Help,
        _ => match line.parse::<usize>() {
            Ok(n) if (1..=game_moves.len()).contains(&n) => {
                Choice::Move(game_moves.as_slice()[n - 1].clone())
            }
            _ => Choice::Move(line.to_string()),
        },
    }
}

fn print_menu<W: Write>(out: &mut W, game_moves: &MoveSet) -> std::io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, name) in game_moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    writeln!(out, "{}", MENU_NOTE)?;
    write!(out, "Enter your move: ")?;
    out.flush()
}

fn print_reveal<W: Write>(out: &mut W, reveal: &RoundReveal, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            writeln!(out, "{}", serde_json::to_string(reveal)?)?;
        }
        OutputMode::Text => {
            writeln!(out, "Your move: {}", reveal.player_move)?;
            writeln!(out, "Computer move: {}", reveal.computer_move)?;
            let verdict = match reveal.result {
                GameResult::PlayerWins => "You win!",
                GameResult::ComputerWins => "You lose!",
                GameResult::Draw => "Draw!",
            };
            writeln!(out, "{}", verdict)?;
            writeln!(out, "HMAC key: {}", reveal.key)?;
        }
    }
    Ok(())
}

/// Play rounds until the player exits, input ends, or the round cap is hit.
///
/// Returns the number of resolved rounds.
pub fn run<R, I, O>(
    config: &GameConfig,
    game: &mut RoundController<R>,
    mut input: I,
    mut out: O,
) -> anyhow::Result<u64>
where
    R: RngCore + CryptoRng,
    I: BufRead,
    O: Write,
{
    loop {
        if config.rounds.is_some_and(|limit| game.resolved_rounds() >= limit) {
            info!(rounds = game.resolved_rounds(), "Round limit reached");
            return Ok(game.resolved_rounds());
        }

        let commitment = *game.begin_round().context("Failed to start a round")?;
        writeln!(out, "HMAC: {}", commitment)?;

        loop {
            print_menu(&mut out, game.moves())?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(game.resolved_rounds());
            }

            match parse_choice(line.trim(), game.moves()) {
                Choice::Exit => return Ok(game.resolved_rounds()),
                Choice::Help => {
                    writeln!(out)?;
                    write!(out, "{}", game.table())?;
                    writeln!(out, "HMAC: {}", commitment)?;
                }
                Choice::Move(name) => {
                    if let Err(err) = game.submit(&name) {
                        if err.is_fatal() {
                            return Err(err.into());
                        }
                        writeln!(out, "{}", err)?;
                        writeln!(out, "HMAC: {}", commitment)?;
                        continue;
                    }
                    let reveal = game.reveal().context("Resolved round has no reveal")?;
                    print_reveal(&mut out, &reveal, config.output)?;
                    writeln!(out)?;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_game_core::{verify, Commitment, SecretKey};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn config(rounds: Option<u64>, output: OutputMode) -> GameConfig {
        GameConfig {
            moves: MoveSet::classic(),
            rounds,
            output,
        }
    }

    fn play(config: &GameConfig, input: &str) -> (u64, String) {
        let mut game = RoundController::with_rng(config.moves.clone(), StdRng::seed_from_u64(11));
        let mut out = Vec::new();
        let played = run(config, &mut game, Cursor::new(input), &mut out).unwrap();
        // the prompt has no newline of its own; the terminal echo supplies it
        let output = String::from_utf8(out).unwrap().replace("Enter your move: ", "");
        (played, output)
    }

    fn value_after<'a>(output: &'a str, prefix: &str) -> Vec<&'a str> {
        output
            .lines()
            .filter_map(|l| l.strip_prefix(prefix))
            .collect()
    }

    #[test]
    fn test_parse_choice() {
        let moves = MoveSet::classic();
        assert_eq!(parse_choice("0", &moves), Choice::Exit);
        assert_eq!(parse_choice("?", &moves), Choice::Help);
        assert_eq!(parse_choice("2", &moves), Choice::Move("paper".into()));
        assert_eq!(parse_choice("scissors", &moves), Choice::Move("scissors".into()));
        assert_eq!(parse_choice("4", &moves), Choice::Move("4".into()));
    }

    #[test]
    fn test_menu_numbers_take_precedence_over_names() {
        let moves = MoveSet::new(["1", "2", "?"]).unwrap();
        assert_eq!(parse_choice("2", &moves), Choice::Move("2".into()));
        assert_eq!(parse_choice("1", &moves), Choice::Move("1".into()));
        assert_eq!(parse_choice("?", &moves), Choice::Help);
        assert_eq!(parse_choice("3", &moves), Choice::Move("?".into()));

        let shifted = MoveSet::new(["x", "1", "y"]).unwrap();
        assert_eq!(parse_choice("1", &shifted), Choice::Move("x".into()));
        assert_eq!(parse_choice("2", &shifted), Choice::Move("1".into()));

        let mut out = Vec::new();
        print_menu(&mut out, &shifted).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(MENU_NOTE));
    }

    #[test]
    fn test_exit_immediately() {
        let (played, output) = play(&config(None, OutputMode::Text), "0\n");
        assert_eq!(played, 0);
        assert_eq!(value_after(&output, "HMAC: ").len(), 1);
        assert!(output.contains("1 - rock"));
        assert!(output.contains("0 - exit"));
    }

    #[test]
    fn test_round_discloses_verifiable_key() {
        let (played, output) = play(&config(None, OutputMode::Text), "1\n0\n");
        assert_eq!(played, 1);

        let shown: Commitment = value_after(&output, "HMAC: ")[0].parse().unwrap();
        let key: SecretKey = value_after(&output, "HMAC key: ")[0].parse().unwrap();
        let computer = value_after(&output, "Computer move: ")[0];

        assert_eq!(value_after(&output, "Your move: "), vec!["rock"]);
        assert!(verify(&key, computer, &shown));
    }

    #[test]
    fn test_invalid_input_keeps_same_commitment() {
        let (played, output) = play(&config(None, OutputMode::Text), "banana\n?\nrock\n0\n");
        assert_eq!(played, 1);
        assert!(output.contains("Invalid move: banana"));
        assert!(output.contains("v PC \\ User >"));

        // first round's commitment is reprinted unchanged, then the next round's
        let shown = value_after(&output, "HMAC: ");
        assert_eq!(shown.len(), 4);
        assert_eq!(shown[0], shown[1]);
        assert_eq!(shown[1], shown[2]);
        assert_ne!(shown[2], shown[3]);
    }

    #[test]
    fn test_round_limit() {
        let (played, output) = play(&config(Some(2), OutputMode::Text), "1\n2\n3\n");
        assert_eq!(played, 2);
        assert_eq!(value_after(&output, "Your move: "), vec!["rock", "paper"]);
    }

    #[test]
    fn test_end_of_input_stops() {
        let (played, _) = play(&config(None, OutputMode::Text), "3\n");
        assert_eq!(played, 1);
    }

    #[test]
    fn test_json_output() {
        let (_, output) = play(&config(Some(1), OutputMode::Json), "paper\n");
        let line = output.lines().find(|l| l.starts_with('{')).unwrap();
        let reveal: RoundReveal = serde_json::from_str(line).unwrap();

        assert_eq!(reveal.player_move, "paper");
        assert!(reveal.verify());
    }
}
