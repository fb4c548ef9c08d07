//! Entities with generated save data.
//!
//! `build.rs` scans this file; the generated carriers, methods and the
//! [`SaveHost`] enum are included at the bottom.

use savegen_macros::save_data;

/// The player character.
#[save_data(extendable)]
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    #[save]
    _health: i32,
    #[save]
    #[expect(non_snake_case, reason = "engine-side field naming")]
    m_Speed: f32,
    #[save]
    name: String,
    #[save]
    inventory: Vec<String>,
    path_cache: Vec<(i32, i32)>,
}

impl Player {
    /// Full health.
    pub const MAX_HEALTH: i32 = 100;

    /// Creates a player at full health.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            _health: Self::MAX_HEALTH,
            m_Speed: 1.0,
            name: name.into(),
            inventory: Vec::new(),
            path_cache: Vec::new(),
        }
    }

    /// Current health.
    pub fn health(&self) -> i32 {
        self._health
    }

    /// Reduces health, not below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self._health = (self._health - amount).max(0);
    }

    /// Movement speed.
    pub fn speed(&self) -> f32 {
        self.m_Speed
    }

    /// Sets the movement speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.m_Speed = speed;
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Carried items, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Adds an item to the inventory.
    pub fn pick_up(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Cached path waypoints. Not saved.
    pub fn path_cache(&self) -> &[(i32, i32)] {
        &self.path_cache
    }

    /// Replaces the cached path.
    pub fn set_path(&mut self, waypoints: Vec<(i32, i32)>) {
        self.path_cache = waypoints;
    }
}

/// Spawns enemies at a fixed rate.
///
/// Not extendable: only the [`SpawnerSaveData`] carrier is generated.
#[save_data]
#[derive(Debug, Clone)]
pub struct Spawner {
    #[save]
    _rate: f32,
    #[save]
    _max_alive: u32,
}

impl Spawner {
    /// Creates a spawner.
    pub fn new(rate: f32, max_alive: u32) -> Self {
        Self {
            _rate: rate,
            _max_alive: max_alive,
        }
    }

    /// Spawns per second.
    pub fn rate(&self) -> f32 {
        self._rate
    }

    /// Upper bound on live spawns.
    pub fn max_alive(&self) -> u32 {
        self._max_alive
    }
}

impl From<&Spawner> for SpawnerSaveData {
    fn from(spawner: &Spawner) -> Self {
        Self {
            rate: spawner._rate,
            max_alive: spawner._max_alive,
        }
    }
}

/// A level checkpoint. Nothing on it is saved.
#[save_data(extendable)]
#[derive(Debug, Default)]
pub struct Checkpoint {
    /// Whether the player reached it.
    pub reached: bool,
}

include!(concat!(env!("OUT_DIR"), "/savegen.g.rs"));
