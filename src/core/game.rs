//! Game orchestration: one player moving through an append-only chain of
//! rooms, with fights, traps, looting, fleeing, and the boss-room exit.

use rand::Rng;

use crate::combat::logic::spring_trap;
use crate::combat::types::{Encounter, EncounterOutcome, RoundReport};
use crate::core::constants::{FAST_SPEED, ROOM_FLEE_CHANCE_IN};
use crate::creatures::player::Player;
use crate::save::SaveData;
use crate::world::generation::{generate_room, starting_room};
use crate::world::map::{Map, MapError};
use crate::world::types::Room;

/// Everything the player can be offered on a turn. Which of these are
/// valid follows from the current room's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenMenu,
    TakePotion,
    TakeWeapon,
    Attack,
    Flee,
    Advance,
    Retreat,
    ExitDungeon,
    Save,
    Quit,
}

/// Result of moving into a room.
#[derive(Debug, Clone, Copy)]
pub struct Passage {
    pub entered: usize,
    pub newly_generated: bool,
    pub trap: Option<TrapReport>,
}

/// A trap fired on room entry.
#[derive(Debug, Clone, Copy)]
pub struct TrapReport {
    pub damage: u32,
    pub player_died: bool,
}

/// Result of a player flee attempt from a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleeAttempt {
    Escaped { to: usize },
    Failed,
}

/// Result of trying to pick something up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootOutcome {
    Taken(String),
    InventoryFull,
    Missing,
}

/// The running game: player, explored map, and position.
#[derive(Debug, Clone)]
pub struct Game {
    pub player: Player,
    pub map: Map,
    pub current: usize,
    pub playing: bool,
    pub victorious: bool,
}

impl Game {
    /// Starts a fresh run in the starting room.
    pub fn new(player: Player) -> Self {
        let mut map = Map::new();
        let current = map.add_room(starting_room());
        Self {
            player,
            map,
            current,
            playing: true,
            victorious: false,
        }
    }

    /// Rebuilds a game from a loaded snapshot, validating the stored
    /// position against the map.
    pub fn from_snapshot(data: SaveData) -> Result<Self, MapError> {
        data.map.room(data.current_room)?;
        Ok(Self {
            player: data.player,
            map: data.map,
            current: data.current_room,
            playing: true,
            victorious: false,
        })
    }

    /// Captures the complete game state for persistence.
    pub fn to_snapshot(&self) -> SaveData {
        SaveData {
            player: self.player.clone(),
            map: self.map.clone(),
            current_room: self.current,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn current_room(&self) -> Result<&Room, MapError> {
        self.map.room(self.current)
    }

    /// The actions valid right now, in display order.
    pub fn available_actions(&self) -> Result<Vec<Action>, MapError> {
        let room = self.map.room(self.current)?;
        let has_previous = self.map.previous(self.current)?.is_some();

        let mut actions = vec![Action::OpenMenu];
        if room.monster.is_some() {
            actions.push(Action::Attack);
            if !room.is_boss && self.player.stats.speed >= FAST_SPEED && has_previous {
                actions.push(Action::Flee);
            }
        } else if room.is_boss {
            // The boss room only opens back up once the dragon is down.
            actions.push(Action::ExitDungeon);
        } else {
            if !room.potions.is_empty() {
                actions.push(Action::TakePotion);
            }
            if room.weapon.is_some() {
                actions.push(Action::TakeWeapon);
            }
            if has_previous {
                actions.push(Action::Retreat);
            }
            actions.push(Action::Advance);
        }
        actions.push(Action::Save);
        actions.push(Action::Quit);
        Ok(actions)
    }

    /// Moves forward: to the next visited room, or into a newly generated
    /// one when standing in the newest. Resolves any trap in the entered
    /// room.
    pub fn advance(&mut self, rng: &mut impl Rng) -> Result<Passage, MapError> {
        let (entered, newly_generated) = match self.map.next(self.current)? {
            Some(next) => (next, false),
            None => {
                let room = generate_room(self.map.room_count(), rng);
                (self.map.add_room(room), true)
            }
        };
        self.current = entered;
        let trap = self.resolve_trap(rng)?;
        Ok(Passage {
            entered,
            newly_generated,
            trap,
        })
    }

    /// Steps back to the previous room, if there is one.
    pub fn retreat(&mut self) -> Result<bool, MapError> {
        match self.map.previous(self.current)? {
            Some(previous) => {
                self.current = previous;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fires and removes a trap in the current room, if present.
    fn resolve_trap(&mut self, rng: &mut impl Rng) -> Result<Option<TrapReport>, MapError> {
        let room = self.map.room_mut(self.current)?;
        match room.monster.take() {
            Some(trap) if trap.kind.is_trap() => {
                let damage = spring_trap(&trap, &mut self.player, rng);
                let player_died = !self.player.is_alive();
                if player_died {
                    self.playing = false;
                }
                Ok(Some(TrapReport {
                    damage,
                    player_died,
                }))
            }
            other => {
                room.monster = other;
                Ok(None)
            }
        }
    }

    /// One-in-three escape back to the previous room. Failure means the
    /// fight starts immediately; the caller runs it.
    pub fn attempt_room_flee(&mut self, rng: &mut impl Rng) -> Result<FleeAttempt, MapError> {
        let room = self.map.room(self.current)?;
        let Some(previous) = self.map.previous(self.current)? else {
            return Ok(FleeAttempt::Failed);
        };
        if room.monster.is_none() || room.is_boss || self.player.stats.speed < FAST_SPEED {
            return Ok(FleeAttempt::Failed);
        }
        if rng.gen_range(0..ROOM_FLEE_CHANCE_IN) == 0 {
            self.current = previous;
            Ok(FleeAttempt::Escaped { to: previous })
        } else {
            Ok(FleeAttempt::Failed)
        }
    }

    /// Runs the current room's fight to completion, handing each round's
    /// report to `on_round` for display. A defeated or fled monster leaves
    /// the room; a victorious monster keeps it and the run ends.
    pub fn fight(
        &mut self,
        rng: &mut impl Rng,
        mut on_round: impl FnMut(&RoundReport),
    ) -> Result<Option<EncounterOutcome>, MapError> {
        let Some(mut monster) = self.map.room_mut(self.current)?.remove_monster() else {
            return Ok(None);
        };

        let mut encounter = Encounter::new();
        let outcome = loop {
            let report = encounter.round(&mut self.player, &mut monster, rng);
            let outcome = report.outcome;
            on_round(&report);
            if let Some(outcome) = outcome {
                break outcome;
            }
        };

        if outcome == EncounterOutcome::PlayerSlain {
            self.map.room_mut(self.current)?.monster = Some(monster);
            self.playing = false;
        }
        Ok(Some(outcome))
    }

    /// Picks up the room potion at `index`, unless the pouch is full.
    pub fn take_potion(&mut self, index: usize) -> Result<LootOutcome, MapError> {
        if self.player.inventory.potions_full() {
            return Ok(LootOutcome::InventoryFull);
        }
        let room = self.map.room_mut(self.current)?;
        if room.monster.is_some() {
            return Ok(LootOutcome::Missing);
        }
        match room.take_potion(index) {
            Some(potion) => {
                let name = potion.display_name();
                self.player.inventory.add_potion(potion);
                Ok(LootOutcome::Taken(name))
            }
            None => Ok(LootOutcome::Missing),
        }
    }

    /// Picks up the room weapon, unless the rack is full. Auto-equip may
    /// swap to it immediately.
    pub fn take_weapon(&mut self) -> Result<LootOutcome, MapError> {
        if self.player.inventory.weapons_full() {
            return Ok(LootOutcome::InventoryFull);
        }
        let room = self.map.room_mut(self.current)?;
        if room.monster.is_some() {
            return Ok(LootOutcome::Missing);
        }
        match room.take_weapon() {
            Some(weapon) => {
                let name = weapon.display_name();
                self.player.collect_weapon(weapon);
                Ok(LootOutcome::Taken(name))
            }
            None => Ok(LootOutcome::Missing),
        }
    }

    /// Leaves the dungeon through the boss room. Only valid once the
    /// dragon is defeated; winning ends the run.
    pub fn exit_dungeon(&mut self) -> Result<bool, MapError> {
        let room = self.map.room(self.current)?;
        if room.is_boss && room.monster.is_none() {
            self.victorious = true;
            self.playing = false;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn quit(&mut self) {
        self.playing = false;
    }
}
