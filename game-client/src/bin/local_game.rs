use std::sync::Arc;

use tracing::info;

use game_backend::{GameStore, MemoryStore};
use game_client::{
    Config, DictionaryApi, GameSession, MemorySessionStore, OfflineSupplier, SessionError,
};
use game_types::{GameOptions, GamePhase, Role, Team, TileColor};

/// Four scripted players on one in-memory store: create, join, seat, and play
/// a full match to a winner. Useful for eyeballing the turn flow and the log
/// without a browser in front.
#[tokio::main]
async fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt::init();

    info!("Starting local scripted match...");

    let config = Config::new();
    let store: Arc<dyn GameStore> = Arc::new(MemoryStore::new());

    let mut blue_spymaster = session(&store, &config);
    let mut blue_operative = session(&store, &config);
    let mut red_spymaster = session(&store, &config);
    let mut red_operative = session(&store, &config);

    // Lobby: one creator, three joiners.
    let (game_id, code) = blue_spymaster
        .create_new_game("ada", &[], GameOptions::default())
        .await?;
    info!(%game_id, %code, "lobby open");

    blue_operative.join_game(&code, "grace").await?;
    red_spymaster.join_game(&code, "alan").await?;
    red_operative.join_game(&code, "edsger").await?;

    blue_spymaster
        .select_team_and_role(Team::Blue, Role::Spymaster)
        .await?;
    blue_operative
        .select_team_and_role(Team::Blue, Role::Operative)
        .await?;
    red_spymaster
        .select_team_and_role(Team::Red, Role::Spymaster)
        .await?;
    red_operative
        .select_team_and_role(Team::Red, Role::Operative)
        .await?;

    blue_spymaster.start_game().await?;

    // Play until someone wins. Each turn the active spymaster hints at two of
    // their own tiles, the operative reveals them, then passes.
    loop {
        blue_spymaster.refresh().await;
        blue_operative.refresh().await;
        red_spymaster.refresh().await;
        red_operative.refresh().await;

        let game = blue_spymaster.game().ok_or(SessionError::NoGame)?;
        if let Some(winner) = game.winner {
            info!(?winner, blue = game.blue_score, red = game.red_score, "match over");
            for entry in &game.log {
                info!("  [{:?}] {}: {}", entry.team, entry.player_name, entry.message);
            }
            return Ok(());
        }

        let team = game.current_turn;
        let team_color = TileColor::from(team);
        let phase = game.current_phase;
        let (spymaster, operative) = match team {
            Team::Blue => (&mut blue_spymaster, &mut blue_operative),
            Team::Red => (&mut red_spymaster, &mut red_operative),
        };

        if phase == GamePhase::GivingClue {
            spymaster.give_clue(clue_word(team), 2).await?;
            operative.refresh().await;
        }

        // The script cheats: it reads colors straight off the snapshot.
        let targets: Vec<u8> = operative
            .game()
            .ok_or(SessionError::NoGame)?
            .tiles
            .iter()
            .filter(|t| t.color == team_color && !t.revealed)
            .map(|t| t.id)
            .take(2)
            .collect();

        for tile_id in targets {
            operative.confirm_guess(tile_id).await?;
            operative.refresh().await;
            let game = operative.game().ok_or(SessionError::NoGame)?;
            if game.winner.is_some() || game.current_turn != team {
                break;
            }
        }

        operative.refresh().await;
        let game = operative.game().ok_or(SessionError::NoGame)?;
        if game.winner.is_none()
            && game.current_turn == team
            && game.current_phase == GamePhase::Guessing
        {
            operative.end_turn().await?;
        }
    }
}

fn session(store: &Arc<dyn GameStore>, config: &Config) -> GameSession {
    GameSession::new(
        store.clone(),
        Arc::new(MemorySessionStore::new()),
        Arc::new(OfflineSupplier),
        Arc::new(DictionaryApi::new(config.dictionary_api_base_url.clone())),
        config.clone(),
    )
}

// Clue words that never collide with the local board pool.
fn clue_word(team: Team) -> &'static str {
    match team {
        Team::Blue => "AZURE",
        Team::Red => "CRIMSON",
    }
}
