//! Game configuration loaded from an optional JSON file.
//!
//! A missing file is not an error; the caller falls back to the defaults
//! below, which match the classic session (Hero 100/20/10, spawns every
//! 2-5 seconds).

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_PATH: &str = "arena.json";

/// Inclusive range a randomized stat is rolled from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Starting stats for the player's hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "Hero".to_string(),
            health: 100,
            attack: 20,
            defense: 10,
        }
    }
}

/// Timing for the background spawner, in whole seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub min_interval_secs: u64,
    pub max_interval_secs: u64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: 2,
            max_interval_secs: 5,
        }
    }
}

/// Name set and stat ranges monsters are generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterTable {
    pub names: Vec<String>,
    pub health: StatRange,
    pub attack: StatRange,
    pub defense: StatRange,
}

impl Default for MonsterTable {
    fn default() -> Self {
        Self {
            names: ["Goblin", "Orc", "Skeleton", "Zombie", "Spider", "Wolf"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            health: StatRange::new(30, 80),
            attack: StatRange::new(5, 25),
            defense: StatRange::new(0, 15),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub hero: HeroConfig,
    pub spawner: SpawnerConfig,
    pub monsters: MonsterTable,
}

impl GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.hero.health <= 0 || self.hero.attack <= 0 {
            return Err("Hero health and attack must be positive".to_string());
        }
        if self.hero.defense < 0 {
            return Err("Hero defense must not be negative".to_string());
        }
        if self.spawner.min_interval_secs > self.spawner.max_interval_secs {
            return Err(format!(
                "Spawn interval is inverted ({}..={})",
                self.spawner.min_interval_secs, self.spawner.max_interval_secs
            ));
        }
        if self.monsters.names.is_empty() {
            return Err("Monster name set is empty".to_string());
        }
        check_range("health", self.monsters.health, 1)?;
        check_range("attack", self.monsters.attack, 1)?;
        check_range("defense", self.monsters.defense, 0)?;
        Ok(())
    }
}

fn check_range(label: &str, range: StatRange, floor: i32) -> Result<(), String> {
    if range.min < floor {
        return Err(format!("Monster {} range starts below {}", label, floor));
    }
    if range.min > range.max {
        return Err(format!(
            "Monster {} range is inverted ({}..={})",
            label, range.min, range.max
        ));
    }
    Ok(())
}

/// Load and validate a config file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, String> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

    let config: GameConfig = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let json = r#"{
            "hero": { "name": "Conan", "attack": 30 },
            "spawner": { "max_interval_secs": 10 }
        }"#;

        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.hero.name, "Conan");
        assert_eq!(config.hero.attack, 30);
        // Untouched fields keep their defaults.
        assert_eq!(config.hero.health, 100);
        assert_eq!(config.spawner.min_interval_secs, 2);
        assert_eq!(config.spawner.max_interval_secs, 10);
        assert_eq!(config.monsters.names.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_spawn_interval_rejected() {
        let mut config = GameConfig::default();
        config.spawner.min_interval_secs = 9;
        config.spawner.max_interval_secs = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_name_set_rejected() {
        let mut config = GameConfig::default();
        config.monsters.names.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_health_monsters_rejected() {
        let mut config = GameConfig::default();
        config.monsters.health = StatRange::new(0, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load("definitely-not-here.json").is_err());
    }
}
