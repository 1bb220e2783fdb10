use serde::{Deserialize, Serialize};

use crate::creatures::types::Monster;
use crate::items::types::{Potion, Weapon};

/// One location in the dungeon.
///
/// Created fully populated by the generator; contents are removed as the
/// player interacts until the room is empty. Boss rooms hold the dragon
/// and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub monster: Option<Monster>,
    pub potions: Vec<Potion>,
    pub weapon: Option<Weapon>,
    pub is_boss: bool,
}

impl Room {
    pub fn new(
        monster: Option<Monster>,
        potions: Vec<Potion>,
        weapon: Option<Weapon>,
        is_boss: bool,
    ) -> Self {
        Self {
            monster,
            potions,
            weapon,
            is_boss,
        }
    }

    /// Description recomputed from the current contents on every call.
    pub fn describe(&self) -> String {
        let mut description = String::from("Room Contents:");
        description.push_str("\nMonster: ");
        match &self.monster {
            Some(monster) => description.push_str(monster.name()),
            None => description.push_str("There is no monster in the room."),
        }
        description.push_str("\nPotions: ");
        if self.potions.is_empty() {
            description.push_str("There is no potion in the room.");
        } else {
            let names: Vec<String> = self.potions.iter().map(|p| p.display_name()).collect();
            description.push_str(&names.join(", "));
        }
        description.push_str("\nWeapon: ");
        match &self.weapon {
            Some(weapon) => description.push_str(&weapon.display_name()),
            None => description.push_str("There is no weapon in the room."),
        }
        description
    }

    pub fn take_potion(&mut self, index: usize) -> Option<Potion> {
        if index < self.potions.len() {
            Some(self.potions.remove(index))
        } else {
            None
        }
    }

    pub fn take_weapon(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    pub fn remove_monster(&mut self) -> Option<Monster> {
        self.monster.take()
    }

    pub fn is_empty(&self) -> bool {
        self.monster.is_none() && self.potions.is_empty() && self.weapon.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creatures::types::MonsterKind;

    fn full_room() -> Room {
        Room::new(
            Some(Monster::spawn(MonsterKind::Goblin)),
            vec![Potion::new("Potion", 0, 10, 0), Potion::new("Potion", 2, 0, 0)],
            Some(Weapon::new("Sword", 10, 1.0)),
            false,
        )
    }

    #[test]
    fn test_describe_lists_contents() {
        let room = full_room();
        let description = room.describe();
        assert!(description.contains("Goblin"));
        assert!(description.contains("Health Restore: 10"));
        assert!(description.contains("Sword"));
    }

    #[test]
    fn test_describe_tracks_removals() {
        let mut room = full_room();
        room.remove_monster();
        let description = room.describe();
        assert!(description.contains("There is no monster in the room."));
        assert!(!description.contains("Goblin"));
    }

    #[test]
    fn test_take_potion_by_index() {
        let mut room = full_room();
        let potion = room.take_potion(1).unwrap();
        assert_eq!(potion.damage, 2);
        assert_eq!(room.potions.len(), 1);
        assert!(room.take_potion(5).is_none());
    }

    #[test]
    fn test_take_weapon_empties_slot() {
        let mut room = full_room();
        assert!(room.take_weapon().is_some());
        assert!(room.take_weapon().is_none());
    }

    #[test]
    fn test_emptying_a_room() {
        let mut room = full_room();
        assert!(!room.is_empty());
        room.remove_monster();
        room.take_weapon();
        room.take_potion(0);
        room.take_potion(0);
        assert!(room.is_empty());
    }
}
