//! Shared world state.
//!
//! One `WorldState` is shared (behind an `Arc`) between the foreground
//! game loop and the background spawner. The monster list and the
//! running flag are independent synchronization domains; no method holds
//! both at once, and no method blocks longer than its critical section.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

use crate::entities::{Creature, Role};

pub struct WorldState {
    monsters: Mutex<Vec<Creature>>,
    /// `true` while the session runs. A watch channel doubles as the
    /// shutdown signal: subscribers are woken the moment `stop` flips it.
    running: watch::Sender<bool>,
}

impl WorldState {
    pub fn new() -> Self {
        let (running, _) = watch::channel(true);
        Self {
            monsters: Mutex::new(Vec::new()),
            running,
        }
    }

    fn monsters(&self) -> MutexGuard<'_, Vec<Creature>> {
        // Nothing panics while holding the lock, so poisoning can't occur.
        self.monsters.lock().unwrap()
    }

    /// Append a freshly generated monster to the end of the list.
    pub fn append_monster(&self, monster: Creature) {
        debug_assert_eq!(monster.role, Role::Monster);
        self.monsters().push(monster);
    }

    /// Snapshot of the current monster list, in spawn order.
    pub fn list_monsters(&self) -> Vec<Creature> {
        self.monsters().clone()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters().len()
    }

    /// Remove and return the monster at `index` (0-based). Out-of-range
    /// indices return `None` and leave the list untouched.
    pub fn remove_monster(&self, index: usize) -> Option<Creature> {
        let mut monsters = self.monsters();
        if index < monsters.len() {
            Some(monsters.remove(index))
        } else {
            None
        }
    }

    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    /// End the session. Idempotent; wakes every subscriber.
    pub fn stop(&self) {
        self.running.send_replace(false);
    }

    /// Receiver that resolves `changed()` once the session stops.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.running.subscribe()
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_list_preserve_order() {
        let world = WorldState::new();
        world.append_monster(Creature::monster("Goblin", 30, 5, 0));
        world.append_monster(Creature::monster("Wolf", 40, 10, 2));

        let monsters = world.list_monsters();
        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].name, "Goblin");
        assert_eq!(monsters[1].name, "Wolf");
        assert_eq!(world.monster_count(), 2);
    }

    #[test]
    fn test_remove_monster() {
        let world = WorldState::new();
        world.append_monster(Creature::monster("Goblin", 30, 5, 0));
        world.append_monster(Creature::monster("Wolf", 40, 10, 2));

        let removed = world.remove_monster(0).unwrap();
        assert_eq!(removed.name, "Goblin");
        assert_eq!(world.monster_count(), 1);
        assert_eq!(world.list_monsters()[0].name, "Wolf");
    }

    #[test]
    fn test_remove_out_of_range_leaves_world_unchanged() {
        let world = WorldState::new();
        world.append_monster(Creature::monster("Goblin", 30, 5, 0));

        assert!(world.remove_monster(1).is_none());
        assert!(world.remove_monster(usize::MAX).is_none());
        assert_eq!(world.monster_count(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let world = WorldState::new();
        assert!(world.is_running());

        world.stop();
        assert!(!world.is_running());

        world.stop();
        assert!(!world.is_running());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_stop() {
        let world = WorldState::new();
        let mut shutdown = world.subscribe();

        world.stop();
        shutdown.changed().await.unwrap();
        assert!(!*shutdown.borrow());
    }
}
