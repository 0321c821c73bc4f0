//! Monster Arena
//!
//! An interactive console game: a background task keeps spawning random
//! monsters into a shared world while the player fights them through a
//! numbered menu on the foreground task.

mod combat;
mod config;
mod entities;
mod game;
mod spawner;
mod world;

use std::path::Path;
use std::sync::Arc;

use log::{debug, error, info};

use crate::config::GameConfig;
use crate::entities::Creature;
use crate::world::WorldState;

fn load_config() -> GameConfig {
    if !Path::new(config::CONFIG_PATH).exists() {
        debug!("No {} found, using default configuration", config::CONFIG_PATH);
        return GameConfig::default();
    }

    match config::load(config::CONFIG_PATH) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", config::CONFIG_PATH);
            cfg
        }
        Err(e) => {
            error!("Failed to load {}: {}", config::CONFIG_PATH, e);
            error!("Using default configuration");
            GameConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Monster Arena...");

    let config = load_config();
    let mut hero = Creature::hero(
        config.hero.name.clone(),
        config.hero.health,
        config.hero.attack,
        config.hero.defense,
    );

    let world = Arc::new(WorldState::new());
    let spawner = tokio::spawn(spawner::run(world.clone(), config));

    println!("Welcome, {}!", hero.name);
    game::run(&world, &mut hero).await;

    // The spawner sees the shutdown signal on its own; wait for it so no
    // background activity survives the session.
    if let Err(e) = spawner.await {
        error!("Spawner task failed: {}", e);
    }

    print!("\nGame over. ");
    if hero.is_alive() {
        println!("You survived!");
    } else {
        println!("You died...");
    }
}
