//! Interactive menu loop driving the game session.

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::combat;
use crate::entities::Creature;
use crate::world::WorldState;

/// A parsed top-level menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowHero,
    ListMonsters,
    Attack,
    Quit,
}

/// Parse a menu line. Anything but the integers 1-4 is invalid.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().parse::<i32>().ok()? {
        1 => Some(MenuChoice::ShowHero),
        2 => Some(MenuChoice::ListMonsters),
        3 => Some(MenuChoice::Attack),
        4 => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Parse a 1-based target selection into a 0-based index.
pub fn parse_target_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

type InputLines = Lines<BufReader<Stdin>>;

async fn read_line(lines: &mut InputLines) -> Option<String> {
    lines.next_line().await.ok().flatten()
}

fn print_menu() {
    println!("\n=== MENU ===");
    println!("1. Show hero info");
    println!("2. List monsters");
    println!("3. Attack a monster");
    println!("4. Quit");
    println!("Choose an action:");
}

fn show_hero(hero: &Creature) {
    println!("\n=== Your hero ===");
    println!("{}", hero);
}

fn list_monsters(world: &WorldState) {
    let monsters = world.list_monsters();
    if monsters.is_empty() {
        println!("No monsters nearby.");
        return;
    }

    println!("\n=== MONSTERS ===");
    for (i, monster) in monsters.iter().enumerate() {
        println!("{}. {}", i + 1, monster);
    }
}

/// Pick a target and fight it. The selected monster leaves the world at
/// selection time, so it is gone regardless of the battle's outcome and
/// no lock is held while the battle runs.
async fn attack(world: &WorldState, hero: &mut Creature, lines: &mut InputLines) {
    let count = world.monster_count();
    if count == 0 {
        println!("No monsters to attack.");
        return;
    }

    list_monsters(world);
    println!("Choose a monster to attack (1-{}):", count);

    let Some(line) = read_line(lines).await else {
        return;
    };
    let Some(index) = parse_target_index(&line) else {
        println!("Invalid choice.");
        return;
    };

    match world.remove_monster(index) {
        Some(monster) => {
            combat::run_battle(hero, monster, world).await;
        }
        None => println!("Invalid choice."),
    }
}

/// Run the menu until the player quits, the hero falls, or stdin closes.
pub async fn run(world: &WorldState, hero: &mut Creature) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while world.is_running() {
        print_menu();

        let Some(line) = read_line(&mut lines).await else {
            debug!("stdin closed, stopping session");
            world.stop();
            break;
        };

        match parse_menu_choice(&line) {
            Some(MenuChoice::ShowHero) => show_hero(hero),
            Some(MenuChoice::ListMonsters) => list_monsters(world),
            Some(MenuChoice::Attack) => attack(world, hero, &mut lines).await,
            Some(MenuChoice::Quit) => {
                world.stop();
                break;
            }
            None => println!("Invalid choice."),
        }
    }
}
