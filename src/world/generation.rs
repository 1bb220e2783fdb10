//! Procedural room content.
//!
//! Monsters and weapons are uniform draws over fixed pools; potions roll
//! three independent bonus axes. Once seven rooms are on the map, a
//! quarter of new rooms become the dragon's boss room instead.

use rand::Rng;

use super::types::Room;
use crate::core::constants::{
    BOSS_ROOM_CHANCE_IN, BOSS_ROOM_MIN_EXPLORED, MAX_ROOM_POTIONS, POTION_ATTACK_BONUS_CHANCE_IN,
    POTION_BONUS_MAX, POTION_BONUS_MIN, POTION_HEALTH_BONUS_CHANCE_IN, POTION_RESTORE_CHANCE_IN,
    POTION_RESTORE_MAX, POTION_RESTORE_MIN,
};
use crate::creatures::types::{Monster, MonsterKind};
use crate::items::types::{Potion, Weapon};

const MONSTER_POOL: [Option<MonsterKind>; 5] = [
    Some(MonsterKind::Goblin),
    Some(MonsterKind::Orc),
    Some(MonsterKind::Troll),
    Some(MonsterKind::Trap),
    None,
];

/// The three fixed weapon templates.
pub fn weapon_pool() -> [Weapon; 3] {
    [
        Weapon::new("Dagger", 5, 2.0),
        Weapon::new("Sword", 10, 1.0),
        Weapon::new("Great Sword", 15, 0.5),
    ]
}

/// The room the player wakes up in: a healing potion and a sword, nothing
/// hostile.
pub fn starting_room() -> Room {
    Room::new(
        None,
        vec![Potion::new("Potion", 0, 10, 0)],
        Some(Weapon::new("Sword", 10, 1.0)),
        false,
    )
}

/// The fixed terminal room: the dragon and nothing else.
pub fn boss_room() -> Room {
    Room::new(Some(Monster::spawn(MonsterKind::Dragon)), Vec::new(), None, true)
}

/// Generates the next room to explore. `explored_rooms` is the number of
/// rooms already on the map; from seven onward each request has a 1-in-4
/// chance of yielding the boss room.
pub fn generate_room(explored_rooms: usize, rng: &mut impl Rng) -> Room {
    if explored_rooms >= BOSS_ROOM_MIN_EXPLORED && rng.gen_range(0..BOSS_ROOM_CHANCE_IN) == 0 {
        return boss_room();
    }

    let monster = MONSTER_POOL[rng.gen_range(0..MONSTER_POOL.len())].map(Monster::spawn);
    let weapon = roll_weapon(rng);
    let potions = roll_potions(rng);
    Room::new(monster, potions, weapon, false)
}

fn roll_weapon(rng: &mut impl Rng) -> Option<Weapon> {
    let pool = weapon_pool();
    // One extra slot for the empty draw.
    let pick = rng.gen_range(0..pool.len() + 1);
    pool.into_iter().nth(pick)
}

fn roll_potions(rng: &mut impl Rng) -> Vec<Potion> {
    let mut potions = Vec::new();
    for _ in 0..rng.gen_range(0..MAX_ROOM_POTIONS + 1) {
        if let Some(potion) = roll_potion(rng) {
            potions.push(potion);
        }
    }
    potions
}

/// Rolls one potion's three bonus axes; a potion that rolled nothing is
/// discarded.
fn roll_potion(rng: &mut impl Rng) -> Option<Potion> {
    let mut health_restore = 0;
    let mut health_bonus = 0;
    let mut damage = 0;
    if rng.gen_range(0..POTION_RESTORE_CHANCE_IN) == 0 {
        health_restore = rng.gen_range(POTION_RESTORE_MIN..=POTION_RESTORE_MAX);
    }
    if rng.gen_range(0..POTION_HEALTH_BONUS_CHANCE_IN) == 0 {
        health_bonus = rng.gen_range(POTION_BONUS_MIN..=POTION_BONUS_MAX);
    }
    if rng.gen_range(0..POTION_ATTACK_BONUS_CHANCE_IN) == 0 {
        damage = rng.gen_range(POTION_BONUS_MIN..=POTION_BONUS_MAX);
    }

    let potion = Potion::new("Potion", damage, health_restore, health_bonus);
    if potion.is_inert() {
        None
    } else {
        Some(potion)
    }
}
