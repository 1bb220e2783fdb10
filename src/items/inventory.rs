//! Bounded, insertion-ordered item storage for the player.

use serde::{Deserialize, Serialize};

use super::types::{Potion, Weapon};
use crate::core::constants::{MAX_POTIONS, MAX_WEAPONS};

/// The player's carried items: up to 5 weapons and 10 potions, kept in the
/// order they were picked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    weapons: Vec<Weapon>,
    potions: Vec<Potion>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    pub fn weapons_full(&self) -> bool {
        self.weapons.len() >= MAX_WEAPONS
    }

    pub fn potions_full(&self) -> bool {
        self.potions.len() >= MAX_POTIONS
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.potions.is_empty()
    }

    /// Adds a weapon unless the rack is full. Returns whether it was
    /// accepted; a rejected add leaves the contents unchanged.
    pub fn add_weapon(&mut self, weapon: Weapon) -> bool {
        if self.weapons_full() {
            return false;
        }
        self.weapons.push(weapon);
        true
    }

    /// Adds a potion unless the pouch is full. Returns whether it was
    /// accepted; a rejected add leaves the contents unchanged.
    pub fn add_potion(&mut self, potion: Potion) -> bool {
        if self.potions_full() {
            return false;
        }
        self.potions.push(potion);
        true
    }

    pub fn remove_weapon(&mut self, index: usize) -> Option<Weapon> {
        if index < self.weapons.len() {
            Some(self.weapons.remove(index))
        } else {
            None
        }
    }

    pub fn remove_potion(&mut self, index: usize) -> Option<Potion> {
        if index < self.potions.len() {
            Some(self.potions.remove(index))
        } else {
            None
        }
    }

    /// Index of the highest-damage weapon, if any. Ties keep the earliest
    /// pickup.
    pub fn strongest_weapon(&self) -> Option<usize> {
        self.weapons
            .iter()
            .enumerate()
            .max_by(|(ai, a), (bi, b)| a.damage.cmp(&b.damage).then(bi.cmp(ai)))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword(n: usize) -> Weapon {
        Weapon::new(format!("Sword{n}"), 10, 1.0)
    }

    fn potion(n: usize) -> Potion {
        Potion::new(format!("Potion{n}"), 0, 10, 0)
    }

    #[test]
    fn test_weapon_capacity_enforced() {
        let mut inventory = Inventory::new();
        for n in 0..6 {
            inventory.add_weapon(sword(n));
        }
        assert_eq!(inventory.weapons().len(), 5);
        // The sixth add was rejected, leaving the first five untouched.
        assert_eq!(inventory.weapons()[4].base_name, "Sword4");
        assert!(inventory.weapons_full());
    }

    #[test]
    fn test_potion_capacity_enforced() {
        let mut inventory = Inventory::new();
        for n in 0..11 {
            inventory.add_potion(potion(n));
        }
        assert_eq!(inventory.potions().len(), 10);
        assert_eq!(inventory.potions()[9].base_name, "Potion9");
        assert!(inventory.potions_full());
    }

    #[test]
    fn test_rejected_add_reports_false() {
        let mut inventory = Inventory::new();
        for n in 0..5 {
            assert!(inventory.add_weapon(sword(n)));
        }
        assert!(!inventory.add_weapon(sword(99)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut inventory = Inventory::new();
        for n in 0..3 {
            inventory.add_weapon(sword(n));
        }
        let removed = inventory.remove_weapon(0).unwrap();
        assert_eq!(removed.base_name, "Sword0");
        assert_eq!(inventory.weapons()[0].base_name, "Sword1");
        assert_eq!(inventory.weapons()[1].base_name, "Sword2");
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut inventory = Inventory::new();
        inventory.add_potion(potion(0));
        assert!(inventory.remove_potion(1).is_none());
        assert_eq!(inventory.potions().len(), 1);
    }

    #[test]
    fn test_value_equal_items_allowed() {
        let mut inventory = Inventory::new();
        assert!(inventory.add_weapon(Weapon::new("Sword", 10, 1.0)));
        assert!(inventory.add_weapon(Weapon::new("Sword", 10, 1.0)));
        assert_eq!(inventory.weapons().len(), 2);
    }

    #[test]
    fn test_strongest_weapon_index() {
        let mut inventory = Inventory::new();
        assert!(inventory.strongest_weapon().is_none());
        inventory.add_weapon(Weapon::new("Dagger", 5, 2.0));
        inventory.add_weapon(Weapon::new("Great Sword", 15, 0.5));
        inventory.add_weapon(Weapon::new("Sword", 10, 1.0));
        assert_eq!(inventory.strongest_weapon(), Some(1));
    }

    #[test]
    fn test_strongest_weapon_tie_keeps_earliest() {
        let mut inventory = Inventory::new();
        inventory.add_weapon(Weapon::new("First", 10, 1.0));
        inventory.add_weapon(Weapon::new("Second", 10, 1.0));
        assert_eq!(inventory.strongest_weapon(), Some(0));
    }
}
