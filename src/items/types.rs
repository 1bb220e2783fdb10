use serde::{Deserialize, Serialize};

use crate::core::constants::{FAST_SPEED, SLOW_SPEED};

/// A weapon the player can carry and equip.
///
/// Equipping adds `damage` to the player's attack and `speed` to their
/// speed; unequipping subtracts both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub base_name: String,
    pub damage: u32,
    pub speed: f32,
}

impl Weapon {
    pub fn new(base_name: impl Into<String>, damage: u32, speed: f32) -> Self {
        Self {
            base_name: base_name.into(),
            damage,
            speed,
        }
    }

    /// Coarse speed label shown to the player.
    pub fn speed_class(&self) -> &'static str {
        if self.speed >= FAST_SPEED {
            "Fast"
        } else if self.speed < SLOW_SPEED {
            "Slow"
        } else {
            "Normal"
        }
    }

    /// Display name derived from the current fields, never stored.
    pub fn display_name(&self) -> String {
        format!(
            "{} (Damage: {}, Speed: {})",
            self.base_name,
            self.damage,
            self.speed_class()
        )
    }
}

/// A single-use potion granting any mix of healing, a max-health bonus,
/// and an attack bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub base_name: String,
    pub damage: u32,
    pub health_restore: u32,
    pub health_bonus: u32,
}

impl Potion {
    pub fn new(
        base_name: impl Into<String>,
        damage: u32,
        health_restore: u32,
        health_bonus: u32,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            damage,
            health_restore,
            health_bonus,
        }
    }

    /// True when every bonus rolled zero; such potions are never placed.
    pub fn is_inert(&self) -> bool {
        self.damage == 0 && self.health_restore == 0 && self.health_bonus == 0
    }

    /// Display name listing only the nonzero bonuses.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if self.health_restore > 0 {
            parts.push(format!("Health Restore: {}", self.health_restore));
        }
        if self.health_bonus > 0 {
            parts.push(format!("Health Bonus: {}", self.health_bonus));
        }
        if self.damage > 0 {
            parts.push(format!("Attack Bonus: {}", self.damage));
        }
        if parts.is_empty() {
            self.base_name.clone()
        } else {
            format!("{} ({})", self.base_name, parts.join(", "))
        }
    }
}
