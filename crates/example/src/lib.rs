//! Game entities persisted with savegen.
//!
//! The entity types are ordinary structs marked with `#[save_data]`. At
//! build time `savegen_build` turns them into save-data carriers and
//! `try_save_data` / `try_load_data` methods:
//!
//! ```text
//! src/entities.rs ──build.rs──▶ $OUT_DIR/PlayerSaveData.g.rs
//!                               $OUT_DIR/Player.ToData.g.rs
//!                               $OUT_DIR/Player.FromData.g.rs
//!                               ...
//!                               $OUT_DIR/savegen.g.rs (index)
//! ```

pub mod entities;

pub use entities::{
    Checkpoint, CheckpointSaveData, Player, PlayerSaveData, SaveHost, Spawner, SpawnerSaveData,
};
