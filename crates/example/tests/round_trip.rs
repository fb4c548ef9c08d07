//! Generated persistence methods against the real file system.

use example::{Checkpoint, CheckpointSaveData, Player, PlayerSaveData, SaveHost, Spawner, SpawnerSaveData};
use savegen_runtime::CancellationToken;
use std::path::{Path, PathBuf};

fn scratch(test: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("savegen_example_{}", std::process::id()))
        .join(test);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn veteran() -> Player {
    let mut player = Player::new("ada");
    player.take_damage(35);
    player.set_speed(3.5);
    player.pick_up("lantern");
    player.pick_up("rope");
    player.set_path(vec![(1, 1), (2, 3)]);
    player
}

#[test]
fn to_save_data_copies_saved_members_under_normalized_names() {
    let data = veteran().to_save_data();

    assert_eq!(
        data,
        PlayerSaveData {
            health: 65,
            Speed: 3.5,
            name: "ada".to_string(),
            inventory: vec!["lantern".to_string(), "rope".to_string()],
        }
    );
}

#[test]
fn apply_save_data_leaves_unsaved_members_alone() {
    let mut player = Player::new("bo");
    player.set_path(vec![(9, 9)]);

    player.apply_save_data(veteran().to_save_data());

    assert_eq!(player.health(), 65);
    assert_eq!(player.name(), "ada");
    assert_eq!(player.path_cache(), [(9, 9)]);
}

#[tokio::test]
async fn save_then_load_restores_saved_members() {
    let path = scratch("round_trip").join("player.json");
    let cancel = CancellationToken::new();
    let original = veteran();

    assert!(original.try_save_data(&path, &cancel).await);

    let mut restored = Player::new("");
    assert!(restored.try_load_data(&path, &cancel).await);

    assert_eq!(restored.health(), original.health());
    assert!((restored.speed() - original.speed()).abs() < f32::EPSILON);
    assert_eq!(restored.name(), original.name());
    assert_eq!(restored.inventory(), original.inventory());
    assert!(restored.path_cache().is_empty());
}

#[tokio::test]
async fn saved_file_uses_normalized_keys() {
    let path = scratch("keys").join("player.json");

    assert!(veteran().try_save_data(&path, &CancellationToken::new()).await);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["Speed", "health", "inventory", "name"]);
}

#[tokio::test]
async fn save_into_missing_directory_returns_false() {
    let path = scratch("missing_dir").join("nope").join("player.json");

    assert!(!veteran().try_save_data(&path, &CancellationToken::new()).await);
    assert!(!path.exists());
}

#[tokio::test]
async fn cancelled_save_returns_false_and_creates_nothing() {
    let path = scratch("cancelled").join("player.json");
    let _ = std::fs::remove_file(&path);
    let cancel = CancellationToken::new();
    cancel.cancel();

    assert!(!veteran().try_save_data(&path, &cancel).await);
    assert!(!path.exists());
}

#[tokio::test]
async fn load_from_missing_file_returns_false_and_keeps_state() {
    let path = scratch("missing_file").join("player.json");
    let _ = std::fs::remove_file(&path);
    let mut player = Player::new("cy");

    assert!(!player.try_load_data(&path, &CancellationToken::new()).await);
    assert_eq!(player, Player::new("cy"));
}

#[tokio::test]
async fn load_from_malformed_file_returns_false_and_keeps_state() {
    let path = scratch("malformed").join("player.json");
    std::fs::write(&path, r#"{"health": "full"}"#).unwrap();
    let mut player = Player::new("cy");

    assert!(!player.try_load_data(&path, &CancellationToken::new()).await);
    assert_eq!(player, Player::new("cy"));
}

#[tokio::test]
async fn empty_save_set_round_trips() {
    let path = scratch("checkpoint").join("checkpoint.json");
    let cancel = CancellationToken::new();
    let checkpoint = Checkpoint { reached: true };

    assert_eq!(checkpoint.to_save_data(), CheckpointSaveData {});
    assert!(checkpoint.try_save_data(&path, &cancel).await);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    let mut other = Checkpoint::default();
    assert!(other.try_load_data(&path, &cancel).await);
    assert!(!other.reached);
}

#[test]
fn non_extendable_host_only_has_a_carrier() {
    let out_dir = Path::new(env!("OUT_DIR"));
    assert!(out_dir.join("SpawnerSaveData.g.rs").exists());
    assert!(!out_dir.join("Spawner.ToData.g.rs").exists());
    assert!(!out_dir.join("Spawner.FromData.g.rs").exists());

    let data = SpawnerSaveData::from(&Spawner::new(0.5, 4));
    assert_eq!(data.max_alive, 4);
}

fn host_name(host: SaveHost) -> &'static str {
    match host {
        SaveHost::Unselected => "Unselected",
        SaveHost::Player => "Player",
        SaveHost::Spawner => "Spawner",
        SaveHost::Checkpoint => "Checkpoint",
    }
}

#[test]
fn save_host_enum_lists_hosts_in_source_order() {
    assert_eq!(SaveHost::default(), SaveHost::Unselected);

    let text = std::fs::read_to_string(Path::new(env!("OUT_DIR")).join("SaveHost.g.rs")).unwrap();
    let positions: Vec<usize> = [
        SaveHost::Unselected,
        SaveHost::Player,
        SaveHost::Spawner,
        SaveHost::Checkpoint,
    ]
    .into_iter()
    .map(|host| {
        text.find(&format!("{} ,", host_name(host)))
            .unwrap_or_else(|| panic!("{} missing from SaveHost.g.rs", host_name(host)))
    })
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    // One documented variant per host; the placeholder has its own doc.
    assert_eq!(text.matches("= \" `").count(), positions.len() - 1);
}
