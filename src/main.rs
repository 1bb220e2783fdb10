use std::io;

use rand::Rng;

use delve::combat::types::{CombatEvent, RoundReport};
use delve::core::game::{Action, FleeAttempt, Game, LootOutcome};
use delve::creatures::player::Player;
use delve::save::SaveManager;
use delve::ui::menus::{character_menu, prompt_player_name, select_index, title_menu, TitleChoice};
use delve::ui::{fatal, Console};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("delve {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Delve - Turn-Based Terminal Dungeon Crawler\n");
                println!("Usage: delve [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'delve --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut console = Console::new();
    let mut rng = rand::thread_rng();

    console.header("========Welcome to DUNGEON DELVER!========\n")?;
    loop {
        match title_menu(&mut console)? {
            TitleChoice::NewGame => {
                console.show(
                    "\nYou wake up alone in a dark dungeon. \
                     You don't remember who you are or how you got here.",
                )?;
                let name = prompt_player_name(&mut console)?;
                let mut game = Game::new(Player::new(name));
                run_game(&mut game, &mut console, &mut rng)?;
                return Ok(());
            }
            TitleChoice::LoadGame => {
                let game = load_game(&mut console)?;
                match game {
                    Some(mut game) => {
                        console.show("Game successfully loaded.")?;
                        console.pause()?;
                        run_game(&mut game, &mut console, &mut rng)?;
                        return Ok(());
                    }
                    None => continue,
                }
            }
            TitleChoice::Exit => return Ok(()),
        }
    }
}

/// Loads the save file, reporting problems and returning to the title
/// menu instead of aborting.
fn load_game(console: &mut Console) -> io::Result<Option<Game>> {
    console.show("Loading saved game...")?;
    let manager = match SaveManager::new() {
        Ok(manager) => manager,
        Err(error) => {
            console.alert(&format!("Could not open the save location: {error}"))?;
            return Ok(None);
        }
    };
    if !manager.save_exists() {
        console.show("No saved game found.")?;
        console.pause()?;
        return Ok(None);
    }
    match manager.load().map(Game::from_snapshot) {
        Ok(Ok(game)) => Ok(Some(game)),
        Ok(Err(error)) => {
            console.alert(&format!("The save file is unusable: {error}"))?;
            Ok(None)
        }
        Err(error) => {
            console.alert(&format!("Failed to load the saved game: {error}"))?;
            Ok(None)
        }
    }
}

/// The main game loop: one turn per iteration until the run ends.
fn run_game(game: &mut Game, console: &mut Console, rng: &mut impl Rng) -> io::Result<()> {
    while game.playing {
        take_turn(game, console, rng)?;
    }
    if game.victorious {
        console.header("\nYou step out of the dungeon and into daylight. You are free!")?;
        console.show(&format!(
            "{} escaped at level {}.",
            game.player.name, game.player.stats.level
        ))?;
    } else {
        console.alert("\nGame Over!")?;
    }
    Ok(())
}

fn take_turn(game: &mut Game, console: &mut Console, rng: &mut impl Rng) -> io::Result<()> {
    let description = game.current_room().map_err(fatal)?.describe();
    console.show(&format!("\n{description}"))?;

    let actions = game.available_actions().map_err(fatal)?;
    let mut lines = String::from("\nActions:");
    for action in &actions {
        let (key, label) = action_entry(*action, game)?;
        lines.push_str(&format!("\n{key}) {label}"));
    }
    console.show(&lines)?;

    loop {
        let choice = console.prompt(">")?.to_uppercase();
        let Some(action) = actions
            .iter()
            .copied()
            .find(|action| action_key(*action).to_string() == choice)
        else {
            console.show("Please enter a valid input.")?;
            continue;
        };
        perform_action(action, game, console, rng)?;
        break;
    }
    if game.playing {
        console.pause()?;
    }
    Ok(())
}

fn action_key(action: Action) -> char {
    match action {
        Action::OpenMenu => 'M',
        Action::TakePotion => 'P',
        Action::TakeWeapon => 'W',
        Action::Attack => 'A',
        Action::Flee => 'F',
        Action::Advance => 'R',
        Action::Retreat => 'L',
        Action::ExitDungeon => 'E',
        Action::Save => 'S',
        Action::Quit => 'Q',
    }
}

fn action_entry(action: Action, game: &Game) -> io::Result<(char, String)> {
    let room = game.current_room().map_err(fatal)?;
    let label = match action {
        Action::OpenMenu => "Menu".to_string(),
        Action::TakePotion => "Take potion(s)".to_string(),
        Action::TakeWeapon => match &room.weapon {
            Some(weapon) => format!("Take {}", weapon.base_name),
            None => "Take weapon".to_string(),
        },
        Action::Attack => match &room.monster {
            Some(monster) => format!("Attack {}", monster.name()),
            None => "Attack".to_string(),
        },
        Action::Flee => "Attempt to flee".to_string(),
        Action::Advance => {
            if game.map.next(game.current).map_err(fatal)?.is_none() {
                "Explore a new room".to_string()
            } else {
                "Advance to next room".to_string()
            }
        }
        Action::Retreat => "Return to last room".to_string(),
        Action::ExitDungeon => "Exit the dungeon".to_string(),
        Action::Save => "Save game".to_string(),
        Action::Quit => "Quit game".to_string(),
    };
    Ok((action_key(action), label))
}

fn perform_action(
    action: Action,
    game: &mut Game,
    console: &mut Console,
    rng: &mut impl Rng,
) -> io::Result<()> {
    match action {
        Action::OpenMenu => character_menu(game, console),
        Action::TakePotion => take_potion(game, console),
        Action::TakeWeapon => take_weapon(game, console),
        Action::Attack => run_fight(game, console, rng),
        Action::Flee => attempt_flee(game, console, rng),
        Action::Advance => advance(game, console, rng),
        Action::Retreat => {
            game.retreat().map_err(fatal)?;
            console.show("You return to the last room.")
        }
        Action::ExitDungeon => {
            game.exit_dungeon().map_err(fatal)?;
            Ok(())
        }
        Action::Save => save_game(game, console),
        Action::Quit => {
            game.quit();
            Ok(())
        }
    }
}

fn take_potion(game: &mut Game, console: &mut Console) -> io::Result<()> {
    let potions = &game.current_room().map_err(fatal)?.potions;
    if potions.is_empty() {
        return Ok(());
    }
    console.show("Which potion would you like to take?")?;
    let mut listing = String::new();
    for (number, potion) in potions.iter().enumerate() {
        listing.push_str(&format!("{}) {}\n", number + 1, potion.display_name()));
    }
    let count = potions.len();
    console.show(listing.trim_end())?;
    let Some(index) = select_index(console, ">", count)? else {
        return Ok(());
    };
    match game.take_potion(index).map_err(fatal)? {
        LootOutcome::Taken(name) => console.show(&format!("You take the {name}.")),
        LootOutcome::InventoryFull => {
            console.show("You are carrying too many potions to take any more.")
        }
        LootOutcome::Missing => Ok(()),
    }
}

fn take_weapon(game: &mut Game, console: &mut Console) -> io::Result<()> {
    match game.take_weapon().map_err(fatal)? {
        LootOutcome::Taken(name) => console.show(&format!("You take the {name}.")),
        LootOutcome::InventoryFull => {
            console.show("You are carrying too many weapons to take this one.")
        }
        LootOutcome::Missing => Ok(()),
    }
}

fn advance(game: &mut Game, console: &mut Console, rng: &mut impl Rng) -> io::Result<()> {
    let passage = game.advance(rng).map_err(fatal)?;
    if passage.newly_generated {
        console.show("You venture into an unexplored room.")?;
    } else {
        console.show("You advance to the next room.")?;
    }
    if let Some(trap) = passage.trap {
        console.alert(&format!(
            "A hidden trap springs! It deals {} damage.",
            trap.damage
        ))?;
        if trap.player_died {
            console.show("\nYou have died.")?;
        }
    }
    if game.current_room().map_err(fatal)?.is_boss {
        console.alert("A deafening roar greets you. This is the dragon's lair!")?;
    }
    Ok(())
}

fn attempt_flee(game: &mut Game, console: &mut Console, rng: &mut impl Rng) -> io::Result<()> {
    let monster_name = match &game.current_room().map_err(fatal)?.monster {
        Some(monster) => monster.name().to_string(),
        None => return Ok(()),
    };
    console.show(&format!("You attempt to flee from the {monster_name}."))?;
    match game.attempt_room_flee(rng).map_err(fatal)? {
        FleeAttempt::Escaped { .. } => {
            console.show(&format!("You successfully flee from the {monster_name}."))
        }
        FleeAttempt::Failed => {
            console.show(&format!("You fail to flee from the {monster_name}."))?;
            console.pause()?;
            run_fight(game, console, rng)
        }
    }
}

fn run_fight(game: &mut Game, console: &mut Console, rng: &mut impl Rng) -> io::Result<()> {
    let monster_name = match &game.current_room().map_err(fatal)?.monster {
        Some(monster) => monster.name().to_string(),
        None => return Ok(()),
    };
    let weapon_name = game.player.weapon_name();

    let mut reports: Vec<RoundReport> = Vec::new();
    game.fight(rng, |report| reports.push(report.clone()))
        .map_err(fatal)?;

    for report in &reports {
        show_round(report, &monster_name, &weapon_name, game, console)?;
    }
    if game.player.is_alive() {
        console.show(&format!(
            "You have {} health remaining.",
            game.player.stats.current_health
        ))?;
    }
    Ok(())
}

fn show_round(
    report: &RoundReport,
    monster_name: &str,
    weapon_name: &str,
    game: &Game,
    console: &mut Console,
) -> io::Result<()> {
    for event in &report.events {
        match event {
            CombatEvent::PlayerStrike { damage, repeat } => {
                if *repeat {
                    console.show(&format!("\nYou attack the {monster_name} again!"))?;
                } else {
                    console.show(&format!(
                        "\nYou attack the {monster_name} with your {weapon_name}!"
                    ))?;
                }
                console.show(&format!("The attack deals {damage} damage."))?;
                console.pause()?;
            }
            CombatEvent::PlayerTooSlow => {
                console.show(&format!(
                    "\nYou are too slow and the {monster_name} dodges your attack."
                ))?;
                console.pause()?;
            }
            CombatEvent::MonsterStrike { damage, repeat } => {
                if *repeat {
                    console.show(&format!("\nThe {monster_name} attacks you again!"))?;
                } else {
                    console.show(&format!("\nThe {monster_name} attacks you!"))?;
                }
                console.show(&format!("The attack deals {damage} damage."))?;
                console.pause()?;
            }
            CombatEvent::MonsterTooSlow => {
                console.show(&format!(
                    "\nThe {monster_name} is too slow and you dodge its attack!"
                ))?;
                console.pause()?;
            }
            CombatEvent::MonsterFled => {
                console.show(&format!("\nThe {monster_name} flees the battle!"))?;
            }
            CombatEvent::MonsterSlain {
                xp_gained,
                levels_gained,
            } => {
                console.show(&format!("\nYou defeat the {monster_name}!"))?;
                console.show(&format!("You gain {xp_gained} XP!"))?;
                if *levels_gained > 0 {
                    console.header(&format!(
                        "You feel stronger! You are now level {}.",
                        game.player.stats.level
                    ))?;
                }
            }
            CombatEvent::PlayerSlain => {
                console.show("\nYou have died.")?;
            }
        }
    }
    Ok(())
}

fn save_game(game: &Game, console: &mut Console) -> io::Result<()> {
    let manager = match SaveManager::new() {
        Ok(manager) => manager,
        Err(error) => {
            console.alert(&format!("Could not open the save location: {error}"))?;
            return Ok(());
        }
    };
    match manager.save(&game.to_snapshot()) {
        Ok(()) => console.show("Game saved."),
        Err(error) => console.alert(&format!("Saving failed: {error}")),
    }
}
