//! Saves a player to disk and loads it back.
//!
//! # Usage
//!
//! ```bash
//! savegame [path]
//! ```
//!
//! Writes to `player.json` in the temp directory when no path is given.

use example::Player;
use savegen_runtime::{CancellationToken, TracingLog, install_logger};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    install_logger(TracingLog);

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| std::env::temp_dir().join("player.json"), PathBuf::from);
    let cancel = CancellationToken::new();

    let mut player = Player::new("ada");
    player.take_damage(30);
    player.set_speed(2.5);
    player.pick_up("lantern");
    player.set_path(vec![(0, 0), (4, 2)]);

    if !player.try_save_data(&path, &cancel).await {
        return ExitCode::FAILURE;
    }
    tracing::info!(path = %path.display(), "player saved");

    let mut restored = Player::new("");
    if !restored.try_load_data(&path, &cancel).await {
        return ExitCode::FAILURE;
    }
    tracing::info!(
        name = restored.name(),
        health = restored.health(),
        speed = restored.speed(),
        items = restored.inventory().len(),
        waypoints = restored.path_cache().len(),
        "player restored"
    );

    ExitCode::SUCCESS
}
