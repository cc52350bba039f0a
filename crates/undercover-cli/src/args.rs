//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use undercover_round::RoundSettings;

/// Who is the Spy, played on one shared device
#[derive(Parser, Debug)]
#[command(name = "undercover")]
#[command(about = "Deal and play rounds of Who is the Spy on one shared device", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command; `play` with default settings when none is given.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deal a round and play it on this device
    Play(PlayArgs),

    /// Show which word pair the next round will use
    Next,

    /// Show how many word pairs have been used
    Progress,

    /// Forget which word pairs have been used
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Table setup for `play`. Counts are checked by `RoundSettings::validate`.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArgs {
    /// Number of players (3-20)
    #[arg(long, default_value_t = 5)]
    pub players: u8,

    /// Number of spies, fewer than half the players
    #[arg(long, default_value_t = 1)]
    pub spies: u8,

    /// Deal one blank card (tables of 5 or more)
    #[arg(long)]
    pub whiteboard: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        let settings = RoundSettings::default();
        Self {
            players: settings.players,
            spies: settings.spies,
            whiteboard: settings.whiteboard,
        }
    }
}

impl From<PlayArgs> for RoundSettings {
    fn from(args: PlayArgs) -> Self {
        Self {
            players: args.players,
            spies: args.spies,
            whiteboard: args.whiteboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("undercover").chain(args.iter().copied()))
            .map(Cli::into_command)
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_plays_with_defaults() {
        let command = parse(&[]).unwrap();
        assert_eq!(command, Command::Play(PlayArgs::default()));
        let Command::Play(args) = command else {
            unreachable!()
        };
        assert_eq!(RoundSettings::from(args), RoundSettings::default());
    }

    #[test]
    fn test_play_options() {
        let command = parse(&["play", "--players", "8", "--spies", "2", "--whiteboard"]).unwrap();
        assert_eq!(
            command,
            Command::Play(PlayArgs {
                players: 8,
                spies: 2,
                whiteboard: true,
            })
        );
    }

    #[test]
    fn test_play_without_options_uses_defaults() {
        assert_eq!(
            parse(&["play"]).unwrap(),
            Command::Play(PlayArgs::default())
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse(&["next"]).unwrap(), Command::Next);
        assert_eq!(parse(&["progress"]).unwrap(), Command::Progress);
        assert_eq!(parse(&["reset"]).unwrap(), Command::Reset { yes: false });
        assert_eq!(
            parse(&["reset", "--yes"]).unwrap(),
            Command::Reset { yes: true }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        for args in [
            vec!["shuffle"],
            vec!["next", "--yes"],
            vec!["play", "--players"],
            vec!["play", "--players", "many"],
            vec!["play", "--players", "300"],
            vec!["play", "--colour"],
        ] {
            assert!(parse(&args).is_err(), "{args:?} should be rejected");
        }
    }
}
