//! Round-by-round encounter resolution.
//!
//! The engine mutates the combatants and reports typed events; all
//! rendering and pacing happens in the caller. Every probabilistic step
//! draws from the injected RNG, so a seeded generator replays a fight
//! exactly.

use rand::Rng;

use super::types::{CombatEvent, Encounter, EncounterOutcome, RoundReport};
use crate::core::constants::{DAMAGE_DIE_SIDES, FAST_SPEED, FLEE_HEALTH_DIVISOR, SLOW_SPEED};
use crate::core::stats::Stats;
use crate::creatures::player::Player;
use crate::creatures::types::Monster;

/// The sole damage formula: the attack value scales a d20 roll.
/// Integer division keeps the result in `[0, attack]`.
pub fn damage_for_roll(attack: u32, roll: u32) -> u32 {
    attack * roll / DAMAGE_DIE_SIDES
}

/// Rolls the damage die and applies the result to `target`, returning the
/// damage dealt.
pub fn strike(attack: u32, target: &mut Stats, rng: &mut impl Rng) -> u32 {
    let damage = damage_for_roll(attack, rng.gen_range(1..=DAMAGE_DIE_SIDES));
    target.modify_current_health(-(damage as i32));
    damage
}

/// Trap override: a trap fires exactly once on room entry, with no
/// counter-attack, flee check, or XP. Returns the damage dealt.
pub fn spring_trap(trap: &Monster, player: &mut Player, rng: &mut impl Rng) -> u32 {
    strike(trap.stats.attack, &mut player.stats, rng)
}

impl Encounter {
    /// Resolves one exchange round.
    ///
    /// Order within a round: the player's eligible strikes, the monster's
    /// flee attempt when wounded below a third of max health, then the
    /// monster's strikes. A dead or fled monster ends the encounter; a
    /// monster killed outright awards its level as XP.
    pub fn round(
        &mut self,
        player: &mut Player,
        monster: &mut Monster,
        rng: &mut impl Rng,
    ) -> RoundReport {
        let mut events = Vec::new();

        let speed = player.stats.speed;
        if speed >= SLOW_SPEED {
            let damage = strike(player.stats.attack, &mut monster.stats, rng);
            events.push(CombatEvent::PlayerStrike {
                damage,
                repeat: false,
            });
            if speed >= FAST_SPEED && monster.is_alive() {
                let damage = strike(player.stats.attack, &mut monster.stats, rng);
                events.push(CombatEvent::PlayerStrike {
                    damage,
                    repeat: true,
                });
            }
        } else {
            if self.player_gate {
                let damage = strike(player.stats.attack, &mut monster.stats, rng);
                events.push(CombatEvent::PlayerStrike {
                    damage,
                    repeat: false,
                });
            } else {
                events.push(CombatEvent::PlayerTooSlow);
            }
            self.player_gate = !self.player_gate;
        }

        if monster.is_alive()
            && monster.stats.current_health < monster.stats.max_health / FLEE_HEALTH_DIVISOR
            && monster.attempt_flee(rng)
        {
            events.push(CombatEvent::MonsterFled);
            return RoundReport {
                events,
                outcome: Some(EncounterOutcome::MonsterFled),
            };
        }

        if !monster.is_alive() {
            let xp_gained = monster.stats.level;
            let levels_gained = player.gain_xp(xp_gained);
            events.push(CombatEvent::MonsterSlain {
                xp_gained,
                levels_gained,
            });
            return RoundReport {
                events,
                outcome: Some(EncounterOutcome::MonsterSlain),
            };
        }

        let monster_speed = monster.stats.speed;
        if monster_speed >= SLOW_SPEED {
            let damage = strike(monster.stats.attack, &mut player.stats, rng);
            events.push(CombatEvent::MonsterStrike {
                damage,
                repeat: false,
            });
            if monster_speed >= FAST_SPEED && player.is_alive() {
                let damage = strike(monster.stats.attack, &mut player.stats, rng);
                events.push(CombatEvent::MonsterStrike {
                    damage,
                    repeat: true,
                });
            }
        } else {
            if self.monster_gate {
                let damage = strike(monster.stats.attack, &mut player.stats, rng);
                events.push(CombatEvent::MonsterStrike {
                    damage,
                    repeat: false,
                });
            } else {
                events.push(CombatEvent::MonsterTooSlow);
            }
            self.monster_gate = !self.monster_gate;
        }

        if !player.is_alive() {
            events.push(CombatEvent::PlayerSlain);
            return RoundReport {
                events,
                outcome: Some(EncounterOutcome::PlayerSlain),
            };
        }

        RoundReport {
            events,
            outcome: None,
        }
    }
}
