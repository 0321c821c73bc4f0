//! Turn-based battle resolution between the hero and one monster.

use std::time::Duration;

use log::debug;

use crate::entities::Creature;
use crate::world::WorldState;

/// Pause between rounds so the exchange is readable.
const ROUND_DELAY: Duration = Duration::from_secs(1);

/// Fraction of max health restored after a won battle (1/4).
const VICTORY_HEAL_DIVISOR: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    HeroWon,
    HeroLost,
}

/// Resolve one round. The hero strikes first; the monster only strikes
/// back if it survives the blow.
pub fn fight_round(hero: &mut Creature, monster: &mut Creature) -> BattleState {
    monster.take_damage(hero.attack);
    if !monster.is_alive() {
        return BattleState::HeroWon;
    }

    hero.take_damage(monster.attack);
    if !hero.is_alive() {
        return BattleState::HeroLost;
    }

    BattleState::Ongoing
}

/// Run a battle to completion on the foreground task, narrating each
/// round. A win heals the hero by a quarter of max health; a loss stops
/// the whole session.
pub async fn run_battle(
    hero: &mut Creature,
    mut monster: Creature,
    world: &WorldState,
) -> BattleState {
    println!("\n=== BATTLE ===");
    println!("{} vs {}", hero.name, monster.name);

    loop {
        println!("\n{} attacks {}!", hero.name, monster.name);
        let state = fight_round(hero, &mut monster);
        println!("  {}", monster);

        match state {
            BattleState::Ongoing => {
                println!("{} strikes back!", monster.name);
                println!("  {}", hero);
                tokio::time::sleep(ROUND_DELAY).await;
            }
            BattleState::HeroWon => {
                println!("\n{} defeated {}!", hero.name, monster.name);
                hero.heal(hero.max_health() / VICTORY_HEAL_DIVISOR);
                println!("{} recovers some health.", hero.name);
                println!("  {}", hero);
                return state;
            }
            BattleState::HeroLost => {
                println!("{} strikes back!", monster.name);
                println!("  {}", hero);
                println!("\n{} was slain by {}!", hero.name, monster.name);
                debug!("Hero defeated, stopping session");
                world.stop();
                return state;
            }
        }
    }
}
