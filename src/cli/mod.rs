//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::PlayerId;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch players, teams and fixtures from the FPL API and store them locally.
    Refresh,

    /// Show the top available players for each position with an analysis.
    ///
    /// Runs one enrichment call per position concurrently (needs `OPENAI_API_KEY`).
    TopPlayers {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Build a squad for a budget and formation.
    Squad {
        /// Budget in millions (e.g. 100.0).
        #[clap(long, short)]
        budget: f64,

        /// Formation as DEF-MID-FWD, e.g. `4-4-2`. A goalkeeper is always added.
        #[clap(long, short, default_value = "4-4-2")]
        formation: String,

        /// Player that must be in the squad (repeatable): `-m 328 -m 351`.
        #[clap(long = "must-have", short = 'm')]
        must_have: Vec<PlayerId>,

        /// Player to leave out (repeatable): `-x 12`.
        #[clap(long = "exclude", short = 'x')]
        exclude: Vec<PlayerId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the current gameweek from stored fixtures.
    Gameweek,
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-mvp",
    about = "Fantasy Premier League squad recommendations"
)]
pub struct Fpl {
    /// Debug-level diagnostics on stderr (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_squad_command() {
        let cli = Fpl::try_parse_from([
            "fpl-mvp", "squad", "--budget", "85.5", "--formation", "3-5-2", "-m", "328", "-m",
            "351", "--exclude", "12", "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Squad {
                budget,
                formation,
                must_have,
                exclude,
                json,
            } => {
                assert_eq!(budget, 85.5);
                assert_eq!(formation, "3-5-2");
                assert_eq!(must_have, vec![PlayerId::new(328), PlayerId::new(351)]);
                assert_eq!(exclude, vec![PlayerId::new(12)]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_squad_defaults() {
        let cli = Fpl::try_parse_from(["fpl-mvp", "-v", "squad", "-b", "100"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Squad {
                formation,
                must_have,
                json,
                ..
            } => {
                assert_eq!(formation, "4-4-2");
                assert!(must_have.is_empty());
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_player_id() {
        assert!(Fpl::try_parse_from(["fpl-mvp", "squad", "-b", "100", "-m", "abc"]).is_err());
        assert!(Fpl::try_parse_from(["fpl-mvp", "squad"]).is_err());
    }

    #[test]
    fn test_simple_commands() {
        assert!(matches!(
            Fpl::try_parse_from(["fpl-mvp", "refresh"]).unwrap().command,
            Commands::Refresh
        ));
        assert!(matches!(
            Fpl::try_parse_from(["fpl-mvp", "gameweek", "--verbose"])
                .unwrap()
                .command,
            Commands::Gameweek
        ));
        assert!(matches!(
            Fpl::try_parse_from(["fpl-mvp", "top-players", "--json"])
                .unwrap()
                .command,
            Commands::TopPlayers { json: true }
        ));
    }
}
