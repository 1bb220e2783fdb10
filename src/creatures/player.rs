//! The player character: stats, inventory, and the equipped-weapon slot.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    PLAYER_BASE_ATTACK, PLAYER_BASE_HEALTH, PLAYER_BASE_LEVEL, PLAYER_BASE_SPEED,
};
use crate::core::stats::Stats;
use crate::items::inventory::Inventory;
use crate::items::types::{Potion, Weapon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: Stats,
    pub inventory: Inventory,
    pub equipped_weapon: Option<Weapon>,
    pub auto_equip: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: Stats::new_player(
                PLAYER_BASE_HEALTH,
                PLAYER_BASE_ATTACK,
                PLAYER_BASE_SPEED,
                PLAYER_BASE_LEVEL,
            ),
            inventory: Inventory::new(),
            equipped_weapon: None,
            auto_equip: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Name of whatever the player swings: the equipped weapon or bare
    /// hands.
    pub fn weapon_name(&self) -> String {
        match &self.equipped_weapon {
            Some(weapon) => weapon.base_name.clone(),
            None => "bare hands".to_string(),
        }
    }

    /// Equips the inventory weapon at `index`, returning any previously
    /// equipped weapon to the inventory first (reversing its stat
    /// contribution). Returns false for an out-of-range index.
    pub fn equip_weapon(&mut self, index: usize) -> bool {
        let Some(new_weapon) = self.inventory.remove_weapon(index) else {
            return false;
        };
        if let Some(old_weapon) = self.equipped_weapon.take() {
            self.stats.modify_attack(-(old_weapon.damage as i32));
            self.stats.modify_speed(-old_weapon.speed);
            // The slot freed by remove_weapon guarantees room for the swap.
            self.inventory.add_weapon(old_weapon);
        }
        self.stats.modify_attack(new_weapon.damage as i32);
        self.stats.modify_speed(new_weapon.speed);
        self.equipped_weapon = Some(new_weapon);
        true
    }

    /// Moves the equipped weapon back into the inventory, reversing its
    /// stat contribution. Refused when nothing is equipped or the rack is
    /// full (the weapon would otherwise be lost).
    pub fn unequip_weapon(&mut self) -> bool {
        if self.inventory.weapons_full() {
            return false;
        }
        match self.equipped_weapon.take() {
            Some(weapon) => {
                self.stats.modify_attack(-(weapon.damage as i32));
                self.stats.modify_speed(-weapon.speed);
                self.inventory.add_weapon(weapon);
                true
            }
            None => false,
        }
    }

    /// Adds a picked-up weapon to the inventory, then applies the
    /// auto-equip post-condition. Returns false when the rack is full.
    pub fn collect_weapon(&mut self, weapon: Weapon) -> bool {
        if !self.inventory.add_weapon(weapon) {
            return false;
        }
        self.maybe_auto_equip();
        true
    }

    /// When auto-equip is on, swaps to the strongest carried weapon if it
    /// strictly beats the equipped one by damage.
    pub fn maybe_auto_equip(&mut self) {
        if !self.auto_equip {
            return;
        }
        let equipped_damage = self.equipped_weapon.as_ref().map_or(0, |w| w.damage);
        if let Some(index) = self.inventory.strongest_weapon() {
            if self.inventory.weapons()[index].damage > equipped_damage {
                self.equip_weapon(index);
            }
        }
    }

    /// Drinks the potion at `index`: raise max health, restore health
    /// (capped against the new max), then raise attack.
    pub fn use_potion(&mut self, index: usize) -> Option<Potion> {
        let potion = self.inventory.remove_potion(index)?;
        self.stats.modify_max_health(potion.health_bonus as i32);
        self.stats.modify_current_health(potion.health_restore as i32);
        self.stats.modify_attack(potion.damage as i32);
        Some(potion)
    }

    /// Awards XP from a kill. Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.stats.modify_xp(amount as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_base_stats() {
        let player = Player::new("Anna");
        assert_eq!(player.name, "Anna");
        assert_eq!(player.stats.max_health, 30);
        assert_eq!(player.stats.attack, 5);
        assert_eq!(player.stats.speed, 0.0);
        assert_eq!(player.stats.level, 1);
        assert!(player.equipped_weapon.is_none());
        assert!(player.inventory.is_empty());
        assert!(!player.auto_equip);
    }

    #[test]
    fn test_use_potion_applies_bonuses_in_order() {
        // At full health the restore lands exactly on the raised max.
        let mut player = Player::new("Anna");
        player.inventory.add_potion(Potion::new("Potion", 10, 10, 10));
        let drunk = player.use_potion(0).unwrap();
        assert_eq!(drunk.base_name, "Potion");
        assert_eq!(player.stats.max_health, 40);
        assert_eq!(player.stats.current_health, 40);
        assert_eq!(player.stats.attack, 15);
        assert!(player.inventory.potions().is_empty());
    }

    #[test]
    fn test_use_potion_restore_caps_at_new_max() {
        let mut player = Player::new("Anna");
        player.stats.modify_current_health(-5); // 25/30
        player.inventory.add_potion(Potion::new("Potion", 10, 10, 10));
        player.use_potion(0).unwrap();
        // Max 40, restore lands at 35, attack 15.
        assert_eq!(player.stats.max_health, 40);
        assert_eq!(player.stats.current_health, 35);
        assert_eq!(player.stats.attack, 15);
    }

    #[test]
    fn test_use_potion_out_of_range() {
        let mut player = Player::new("Anna");
        assert!(player.use_potion(0).is_none());
    }

    #[test]
    fn test_equip_weapon_adds_stats() {
        let mut player = Player::new("Anna");
        player.inventory.add_weapon(Weapon::new("Sword", 10, 1.0));
        assert!(player.equip_weapon(0));
        assert_eq!(player.stats.attack, 15);
        assert_eq!(player.stats.speed, 1.0);
        assert_eq!(
            player.equipped_weapon.as_ref().map(|w| w.base_name.as_str()),
            Some("Sword")
        );
        assert!(player.inventory.weapons().is_empty());
    }

    #[test]
    fn test_unequip_weapon_reverses_stats() {
        let mut player = Player::new("Anna");
        player.inventory.add_weapon(Weapon::new("Sword", 10, 1.0));
        player.equip_weapon(0);
        assert!(player.unequip_weapon());
        assert_eq!(player.stats.attack, 5);
        assert_eq!(player.stats.speed, 0.0);
        assert!(player.equipped_weapon.is_none());
        assert_eq!(player.inventory.weapons().len(), 1);
    }

    #[test]
    fn test_equip_swap_returns_old_weapon() {
        let mut player = Player::new("Anna");
        player.inventory.add_weapon(Weapon::new("Dagger", 5, 2.0));
        player.inventory.add_weapon(Weapon::new("Great Sword", 15, 0.5));
        player.equip_weapon(0);
        assert_eq!(player.stats.attack, 10);

        // Swapping reverses the dagger before applying the great sword.
        assert!(player.equip_weapon(0));
        assert_eq!(player.stats.attack, 20);
        assert_eq!(player.stats.speed, 0.5);
        assert_eq!(
            player.equipped_weapon.as_ref().map(|w| w.base_name.as_str()),
            Some("Great Sword")
        );
        assert_eq!(player.inventory.weapons()[0].base_name, "Dagger");
    }

    #[test]
    fn test_unequip_refused_when_rack_full() {
        let mut player = Player::new("Anna");
        player.inventory.add_weapon(Weapon::new("Sword", 10, 1.0));
        player.equip_weapon(0);
        for n in 0..5 {
            player.inventory.add_weapon(Weapon::new(format!("W{n}"), 1, 1.0));
        }
        assert!(!player.unequip_weapon());
        assert!(player.equipped_weapon.is_some());
        assert_eq!(player.stats.attack, 15);
    }

    #[test]
    fn test_auto_equip_picks_up_stronger_weapon() {
        let mut player = Player::new("Anna");
        player.auto_equip = true;
        assert!(player.collect_weapon(Weapon::new("Dagger", 5, 2.0)));
        assert_eq!(
            player.equipped_weapon.as_ref().map(|w| w.base_name.as_str()),
            Some("Dagger")
        );
        assert!(player.collect_weapon(Weapon::new("Great Sword", 15, 0.5)));
        assert_eq!(
            player.equipped_weapon.as_ref().map(|w| w.base_name.as_str()),
            Some("Great Sword")
        );
        // The dagger went back into the inventory during the swap.
        assert_eq!(player.inventory.weapons()[0].base_name, "Dagger");
    }

    #[test]
    fn test_auto_equip_ignores_equal_damage() {
        let mut player = Player::new("Anna");
        player.auto_equip = true;
        player.collect_weapon(Weapon::new("Sword", 10, 1.0));
        player.collect_weapon(Weapon::new("Twin Sword", 10, 1.0));
        assert_eq!(
            player.equipped_weapon.as_ref().map(|w| w.base_name.as_str()),
            Some("Sword")
        );
    }

    #[test]
    fn test_collect_weapon_without_auto_equip() {
        let mut player = Player::new("Anna");
        player.collect_weapon(Weapon::new("Sword", 10, 1.0));
        assert!(player.equipped_weapon.is_none());
        assert_eq!(player.inventory.weapons().len(), 1);
    }

    #[test]
    fn test_gain_xp_levels_up() {
        let mut player = Player::new("Anna");
        let gained = player.gain_xp(1);
        assert_eq!(gained, 1);
        assert_eq!(player.stats.level, 2);
    }

    #[test]
    fn test_weapon_name_defaults_to_bare_hands() {
        let mut player = Player::new("Anna");
        assert_eq!(player.weapon_name(), "bare hands");
        player.inventory.add_weapon(Weapon::new("Sword", 10, 1.0));
        player.equip_weapon(0);
        assert_eq!(player.weapon_name(), "Sword");
    }
}
