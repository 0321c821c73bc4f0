//! Background monster spawner task.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Creature;
use crate::world::WorldState;

/// Periodically generate a monster and append it to the world. Runs
/// until the session stops; the shutdown wakeup interrupts the sleep, so
/// exit latency is not bounded by the spawn interval.
pub async fn run(world: Arc<WorldState>, config: GameConfig) {
    let mut shutdown = world.subscribe();

    loop {
        let secs = rand::thread_rng()
            .gen_range(config.spawner.min_interval_secs..=config.spawner.max_interval_secs);

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(secs)) => {
                if !world.is_running() {
                    break;
                }

                let monster = Creature::random_monster(&config.monsters);
                println!("\nA new monster appeared: {}", monster);
                world.append_monster(monster);
                debug!("Spawned a monster ({} in the world)", world.monster_count());
            }
            _ = shutdown.changed() => break,
        }
    }

    debug!("Spawner task exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawner_populates_world_and_exits_on_stop() {
        let world = Arc::new(WorldState::new());
        let mut config = GameConfig::default();
        config.spawner.min_interval_secs = 0;
        config.spawner.max_interval_secs = 0;

        let handle = tokio::spawn(run(world.clone(), config));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(world.monster_count() >= 1);

        world.stop();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("spawner did not exit after stop")
            .expect("spawner task panicked");
    }

    #[tokio::test]
    async fn test_spawner_exits_mid_sleep() {
        let world = Arc::new(WorldState::new());
        let mut config = GameConfig::default();
        config.spawner.min_interval_secs = 3600;
        config.spawner.max_interval_secs = 3600;

        let handle = tokio::spawn(run(world.clone(), config));

        tokio::time::sleep(Duration::from_millis(10)).await;
        world.stop();

        // Exit is driven by the shutdown wakeup, not the hour-long sleep.
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("spawner did not exit after stop")
            .expect("spawner task panicked");
        assert_eq!(world.monster_count(), 0);
    }
}
