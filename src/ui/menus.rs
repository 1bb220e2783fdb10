//! Interactive menus: the title screen, numbered item selection, and the
//! character sheet. All loops re-prompt on malformed or out-of-range
//! input; none of them mutate state before a choice is validated.

use std::io;

use super::{fatal, Console};
use crate::core::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleChoice {
    NewGame,
    LoadGame,
    Exit,
}

/// The opening menu. Re-prompts until one of the three options is picked.
pub fn title_menu(console: &mut Console) -> io::Result<TitleChoice> {
    console.show("Options:\n1) New Game\n2) Load Game\n3) Exit")?;
    loop {
        match console.prompt(">")?.as_str() {
            "1" => return Ok(TitleChoice::NewGame),
            "2" => return Ok(TitleChoice::LoadGame),
            "3" => return Ok(TitleChoice::Exit),
            _ => console.show("Please enter a valid input.")?,
        }
    }
}

/// Asks until the player supplies a non-empty name.
pub fn prompt_player_name(console: &mut Console) -> io::Result<String> {
    loop {
        let name = console.prompt("What will you call yourself?\n>")?;
        if !name.is_empty() {
            return Ok(name);
        }
    }
}

/// Numbered selection over `count` options shown 1-based. Returns `None`
/// when the player backs out with Q; malformed and out-of-range input
/// re-prompts.
pub fn select_index(
    console: &mut Console,
    label: &str,
    count: usize,
) -> io::Result<Option<usize>> {
    loop {
        let choice = console.prompt(label)?;
        if choice.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match choice.parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Ok(Some(number - 1)),
            Ok(_) => console.show("Your input was out of range.")?,
            Err(_) => console.show("Please enter a valid input.")?,
        }
    }
}

fn inventory_lines(game: &Game) -> String {
    let inventory = &game.player.inventory;
    let mut contents = String::new();
    if !inventory.weapons().is_empty() {
        contents.push_str("\nWeapons:\n");
        for (number, weapon) in inventory.weapons().iter().enumerate() {
            contents.push_str(&format!("{}) {}\n", number + 1, weapon.display_name()));
        }
    }
    if !inventory.potions().is_empty() {
        contents.push_str("\nPotions:\n");
        for (number, potion) in inventory.potions().iter().enumerate() {
            contents.push_str(&format!("{}) {}\n", number + 1, potion.display_name()));
        }
    }
    if contents.is_empty() {
        contents.push_str("\nYour inventory is empty.\n");
    }
    contents
}

/// The character sheet: stats, explored map, inventory, and equipment
/// management.
pub fn character_menu(game: &mut Game, console: &mut Console) -> io::Result<()> {
    loop {
        let player = &game.player;
        console.header("\n========Menu========")?;
        console.show(&format!("Name: {}", player.name))?;
        console.show(&format!(
            "\nStats:\nHealth: {}/{}\nAttack: {}\nSpeed: {:.2}\nLevel: {}\nXP: {}",
            player.stats.current_health,
            player.stats.max_health,
            player.stats.attack,
            player.stats.speed,
            player.stats.level,
            player.stats.xp,
        ))?;
        match &player.equipped_weapon {
            Some(weapon) => console.show(&format!("Equipped Weapon: {}", weapon.display_name()))?,
            None => console.show("Equipped Weapon: None")?,
        }
        console.show(&format!(
            "Auto-equip: {}",
            if player.auto_equip { "On" } else { "Off" }
        ))?;
        console.show(&format!(
            "\nExplored rooms: {}",
            game.map.render(game.current).map_err(fatal)?
        ))?;
        console.show(&format!("\nInventory:{}", inventory_lines(game)))?;

        let mut actions = String::from("Actions:");
        if !game.player.inventory.weapons().is_empty() {
            actions.push_str("\nW) Equip Weapon");
        }
        if game.player.equipped_weapon.is_some() {
            actions.push_str("\nU) Unequip Weapon");
        }
        if !game.player.inventory.potions().is_empty() {
            actions.push_str("\nP) Drink Potion");
        }
        actions.push_str("\nA) Toggle Auto-equip");
        actions.push_str("\nQ) Quit Menu");
        console.show(&actions)?;

        match console.prompt(">")?.to_uppercase().as_str() {
            "W" if !game.player.inventory.weapons().is_empty() => {
                let count = game.player.inventory.weapons().len();
                if let Some(index) = select_index(
                    console,
                    "Select the weapon you want to equip, or enter Q to exit: ",
                    count,
                )? {
                    game.player.equip_weapon(index);
                }
            }
            "U" if game.player.equipped_weapon.is_some() => {
                if !game.player.unequip_weapon() {
                    console.show("You are carrying too many weapons to unequip this one.")?;
                }
            }
            "P" if !game.player.inventory.potions().is_empty() => {
                let count = game.player.inventory.potions().len();
                if let Some(index) = select_index(
                    console,
                    "Select the potion you want to drink, or enter Q to exit: ",
                    count,
                )? {
                    if let Some(potion) = game.player.use_potion(index) {
                        console.show(&format!("You drink the {}.", potion.display_name()))?;
                    }
                }
            }
            "A" => {
                game.player.auto_equip = !game.player.auto_equip;
                game.player.maybe_auto_equip();
                console.show(&format!(
                    "Auto-equip is now {}.",
                    if game.player.auto_equip { "on" } else { "off" }
                ))?;
            }
            "Q" => return Ok(()),
            _ => console.show("Please enter a valid input.")?,
        }
    }
}
