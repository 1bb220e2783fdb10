//! Creature stat block with clamped modifiers and the XP level-up loop.

use serde::{Deserialize, Serialize};

use crate::core::constants::LEVEL_GROWTH_DIVISOR;

/// Numeric attributes owned by exactly one creature.
///
/// Every modifier clamps its field at a floor of 0; `current_health` is
/// additionally capped at `max_health`. The base health/attack values are
/// snapshots taken at creation and drive level-up growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub max_health: u32,
    pub current_health: u32,
    pub attack: u32,
    pub speed: f32,
    pub level: u32,
    pub xp: u32,
    is_player: bool,
    base_health: u32,
    base_attack: u32,
}

impl Stats {
    /// Stat block for a monster. XP accumulates but never triggers level-ups.
    pub fn new(health: u32, attack: u32, speed: f32, level: u32) -> Self {
        Self {
            max_health: health,
            current_health: health,
            attack,
            speed,
            level,
            xp: 0,
            is_player: false,
            base_health: health,
            base_attack: attack,
        }
    }

    /// Stat block for the player; XP gains feed the level-up loop.
    pub fn new_player(health: u32, attack: u32, speed: f32, level: u32) -> Self {
        Self {
            is_player: true,
            ..Self::new(health, attack, speed, level)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_player(&self) -> bool {
        self.is_player
    }

    pub fn modify_max_health(&mut self, amount: i32) {
        self.max_health = self.max_health.saturating_add_signed(amount);
        if self.current_health > self.max_health {
            self.current_health = self.max_health;
        }
    }

    pub fn modify_current_health(&mut self, amount: i32) {
        self.current_health = self
            .current_health
            .saturating_add_signed(amount)
            .min(self.max_health);
    }

    pub fn modify_attack(&mut self, amount: i32) {
        self.attack = self.attack.saturating_add_signed(amount);
    }

    pub fn modify_speed(&mut self, amount: f32) {
        self.speed = (self.speed + amount).max(0.0);
    }

    pub fn modify_level(&mut self, amount: i32) {
        self.level = self.level.saturating_add_signed(amount);
    }

    /// Adjusts XP, then (for the player) consumes it into level-ups.
    ///
    /// Each level costs `level` XP and grows max health and attack by
    /// `base / 10` per new level, refilling health. One large grant can
    /// cascade through several levels. Returns the number of levels gained.
    pub fn modify_xp(&mut self, amount: i32) -> u32 {
        self.xp = self.xp.saturating_add_signed(amount);
        if !self.is_player {
            return 0;
        }
        let mut gained = 0;
        while self.xp >= self.level {
            self.xp -= self.level;
            self.level += 1;
            self.max_health += self.base_health * self.level / LEVEL_GROWTH_DIVISOR;
            self.attack += self.base_attack * self.level / LEVEL_GROWTH_DIVISOR;
            self.current_health = self.max_health;
            gained += 1;
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_initialisation() {
        let stats = Stats::new_player(30, 5, 1.0, 1);
        assert_eq!(stats.max_health, 30);
        assert_eq!(stats.current_health, 30);
        assert_eq!(stats.attack, 5);
        assert_eq!(stats.speed, 1.0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp, 0);
        assert!(stats.is_alive());
        assert!(stats.is_player());
    }

    #[test]
    fn test_modifiers_clamp_at_zero() {
        let mut stats = Stats::new(30, 5, 1.0, 1);
        stats.modify_max_health(-1000);
        assert_eq!(stats.max_health, 0);
        stats.modify_attack(-1000);
        assert_eq!(stats.attack, 0);
        stats.modify_speed(-1000.0);
        assert_eq!(stats.speed, 0.0);
        stats.modify_level(-1000);
        assert_eq!(stats.level, 0);
        stats.modify_xp(-1000);
        assert_eq!(stats.xp, 0);
    }

    #[test]
    fn test_current_health_capped_at_max() {
        let mut stats = Stats::new(30, 5, 1.0, 1);
        stats.modify_current_health(50);
        assert_eq!(stats.current_health, 30);
        stats.modify_current_health(-10);
        assert_eq!(stats.current_health, 20);
        stats.modify_current_health(-1000);
        assert_eq!(stats.current_health, 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_current_health_in_range_for_any_delta() {
        let mut stats = Stats::new(30, 5, 1.0, 1);
        for delta in [-5000, -1, 0, 1, 3, 29, 30, 31, 5000, i32::MAX, i32::MIN] {
            stats.modify_current_health(delta);
            assert!(stats.current_health <= stats.max_health);
        }
    }

    #[test]
    fn test_lowering_max_health_caps_current() {
        let mut stats = Stats::new(30, 5, 1.0, 1);
        stats.modify_max_health(-20);
        assert_eq!(stats.max_health, 10);
        assert_eq!(stats.current_health, 10);
    }

    #[test]
    fn test_xp_cascade_levels_multiple_times() {
        // Level 1, 5 XP: pay 1 -> level 2, pay 2 -> level 3, 2 XP left.
        let mut stats = Stats::new_player(30, 5, 1.0, 1);
        let gained = stats.modify_xp(5);
        assert_eq!(gained, 2);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.xp, 2);
    }

    #[test]
    fn test_level_up_grows_stats_and_refills_health() {
        let mut stats = Stats::new_player(30, 10, 1.0, 1);
        stats.modify_current_health(-25);
        stats.modify_xp(1);
        // Level 2: +30*2/10 = 6 max health, +10*2/10 = 2 attack.
        assert_eq!(stats.level, 2);
        assert_eq!(stats.max_health, 36);
        assert_eq!(stats.current_health, 36);
        assert_eq!(stats.attack, 12);
    }

    #[test]
    fn test_xp_grant_decomposition_is_equivalent() {
        let mut at_once = Stats::new_player(30, 5, 1.0, 1);
        at_once.modify_xp(23);

        let mut split = Stats::new_player(30, 5, 1.0, 1);
        for amount in [7, 0, 11, 5] {
            split.modify_xp(amount);
        }

        assert_eq!(at_once.level, split.level);
        assert_eq!(at_once.xp, split.xp);
        assert_eq!(at_once.max_health, split.max_health);
        assert_eq!(at_once.attack, split.attack);
    }

    #[test]
    fn test_monster_xp_never_levels() {
        let mut stats = Stats::new(30, 5, 1.0, 2);
        let gained = stats.modify_xp(100);
        assert_eq!(gained, 0);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp, 100);
        assert_eq!(stats.max_health, 30);
        assert_eq!(stats.attack, 5);
    }
}
