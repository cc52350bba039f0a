//! Terminal game loop for a single shared device.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use undercover_core::rng::DeterministicRng;
use undercover_round::{Role, RoundController, RoundError, RoundSettings, Seat, Table, Winner};

use crate::args::Command;
use crate::error::AppError;

/// Clears the screen so the next player cannot read the previous card.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Line-oriented terminal used for prompts and output.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `message` and reads one trimmed line. `None` on end of input.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

/// Runs one command to completion.
///
/// # Errors
///
/// Returns `AppError` for invalid round settings or terminal I/O failure.
/// Running out of words is reported to the user, not returned.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    controller: &mut RoundController,
    terminal: &mut Terminal<R, W>,
    rng: &mut dyn DeterministicRng,
) -> Result<(), AppError> {
    match command {
        Command::Play(args) => play(args.into(), controller, terminal, rng),
        Command::Next => {
            match controller.rotation().select_next() {
                Some(pair) => terminal.say(&format!(
                    "Next word pair #{}: {} / {}",
                    pair.id, pair.civilian_term, pair.spy_term
                ))?,
                None => {
                    terminal.say("All word pairs have been used. Run `undercover reset`.")?;
                }
            }
            Ok(())
        }
        Command::Progress => {
            let progress = controller.progress();
            terminal.say(&format!(
                "{} of {} word pairs used, {} remaining.",
                progress.used, progress.total, progress.remaining
            ))?;
            Ok(())
        }
        Command::Reset { yes } => {
            let confirmed = yes
                || terminal
                    .ask("Forget which word pairs have been used? [y/N]")?
                    .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));
            if confirmed {
                controller.reset_history();
                terminal.say("Usage history reset.")?;
            } else {
                terminal.say("Nothing changed.")?;
            }
            Ok(())
        }
    }
}

fn play<R: BufRead, W: Write>(
    settings: RoundSettings,
    controller: &mut RoundController,
    terminal: &mut Terminal<R, W>,
    rng: &mut dyn DeterministicRng,
) -> Result<(), AppError> {
    let round = match controller.start_round(settings, rng) {
        Ok(round) => round,
        Err(RoundError::Exhausted) => {
            terminal.say("All word pairs have been used. Run `undercover reset` to start over.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    terminal.say(&format!(
        "Cards dealt for {} players. Pass the device to player 1.",
        round.seats.len()
    ))?;
    for seat in &round.seats {
        if !reveal(terminal, seat)? {
            controller.abandon_round();
            return Ok(());
        }
    }

    let answer = terminal
        .ask("Everyone has seen a card. Press Enter to start the round, or q to abandon:")?;
    match answer.as_deref() {
        Some(answer) if !answer.eq_ignore_ascii_case("q") => {}
        _ => {
            controller.abandon_round();
            terminal.say("Round abandoned; its words stay available.")?;
            return Ok(());
        }
    }

    let table = controller.confirm_start()?;
    eliminate(terminal, table)
}

/// Shows one seat's card privately. Returns `false` if input ended.
fn reveal<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    seat: &Seat,
) -> Result<bool, AppError> {
    if terminal
        .ask(&format!("Player {}: press Enter to see your word.", seat.number))?
        .is_none()
    {
        return Ok(false);
    }
    match &seat.word {
        Some(word) => terminal.say(&format!("Your word is: {word}"))?,
        None => terminal.say("You have no word. Blend in!")?,
    }
    if terminal
        .ask("Press Enter to hide it and pass the device on.")?
        .is_none()
    {
        return Ok(false);
    }
    terminal.say(CLEAR_SCREEN)?;
    Ok(true)
}

fn eliminate<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    mut table: Table,
) -> Result<(), AppError> {
    loop {
        let alive: Vec<String> = table
            .seats()
            .iter()
            .filter(|seat| table.is_alive(seat.number))
            .map(|seat| seat.number.to_string())
            .collect();
        terminal.say(&format!("Still in: {}", alive.join(", ")))?;

        let Some(answer) = terminal.ask("Seat to eliminate (or restore), q to stop:")? else {
            return Ok(());
        };
        if answer.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        let Ok(number) = answer.parse::<usize>() else {
            terminal.say("Enter a seat number.")?;
            continue;
        };

        match table.toggle(number) {
            Ok(Some(winner)) => {
                announce(terminal, &table, winner)?;
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "invalid seat entered");
                terminal.say(&e.to_string())?;
            }
        }
    }
}

fn announce<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    table: &Table,
    winner: Winner,
) -> Result<(), AppError> {
    info!(?winner, "announcing winner");
    terminal.say(match winner {
        Winner::Spy => "The spies win!",
        Winner::Civilian => "The civilians win!",
    })?;
    for seat in table.seats() {
        let role = match seat.role {
            Role::Civilian => "civilian",
            Role::Spy => "spy",
            Role::Whiteboard => "whiteboard",
        };
        terminal.say(&format!(
            "  Player {}: {role} ({})",
            seat.number,
            seat.word.as_deref().unwrap_or("no word")
        ))?;
    }
    Ok(())
}
