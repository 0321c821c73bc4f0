//! Creatures: the hero and the monsters it fights.

use std::fmt;

use rand::Rng;

use crate::config::MonsterTable;

/// Which side of a battle a creature fights on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Hero,
    Monster,
}

/// A combatant. Health only changes through [`take_damage`] and [`heal`],
/// which keep it within `0..=max_health`.
///
/// [`take_damage`]: Creature::take_damage
/// [`heal`]: Creature::heal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub role: Role,
    health: i32,
    max_health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Creature {
    fn new(name: String, role: Role, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            name,
            role,
            health,
            max_health: health,
            attack,
            defense,
        }
    }

    /// Create the player-controlled hero at full health.
    pub fn hero(name: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self::new(name.into(), Role::Hero, health, attack, defense)
    }

    /// Create a monster at full health.
    pub fn monster(name: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self::new(name.into(), Role::Monster, health, attack, defense)
    }

    /// Generate a monster with stats rolled from the configured ranges
    /// and a name drawn from the configured name set.
    pub fn random_monster(table: &MonsterTable) -> Self {
        let mut rng = rand::thread_rng();

        let name = table.names[rng.gen_range(0..table.names.len())].clone();
        let health = rng.gen_range(table.health.min..=table.health.max);
        let attack = rng.gen_range(table.attack.min..=table.attack.max);
        let defense = rng.gen_range(table.defense.min..=table.defense.max);

        Self::monster(name, health, attack, defense)
    }

    /// Apply an incoming attack. Defense is subtracted from the attack
    /// value with a floor of 1 damage; health never drops below 0.
    pub fn take_damage(&mut self, attack: i32) {
        let actual_damage = (attack - self.defense).max(1);
        self.health = (self.health - actual_damage).max(0);
    }

    /// Restore health, clamped at `max_health`.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP: {}/{}, ATK: {}, DEF: {})",
            self.name, self.health, self.max_health, self.attack, self.defense
        )
    }
}
