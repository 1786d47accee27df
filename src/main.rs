//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_mvp::{
    cli::{Commands, Fpl},
    commands::{
        common::CommandContext,
        gameweek::handle_gameweek,
        refresh::handle_refresh,
        squad::{handle_squad, SquadParams},
        top_players::handle_top_players,
    },
    logging::init_logging,
    Config, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Fpl::parse();
    init_logging(app.verbose);

    let config = Config::from_env()?;
    let mut ctx = CommandContext::new(config)?;

    match app.command {
        Commands::Refresh => handle_refresh(&mut ctx).await?,

        Commands::TopPlayers { json } => handle_top_players(&ctx, json).await?,

        Commands::Squad {
            budget,
            formation,
            must_have,
            exclude,
            json,
        } => {
            handle_squad(
                &ctx,
                SquadParams {
                    budget,
                    formation,
                    must_have,
                    exclude,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Gameweek => handle_gameweek(&ctx)?,
    }

    Ok(())
}
