use serde::{Deserialize, Serialize};

/// One observable thing that happened during a combat round, in order.
/// The UI renders these; the engine never prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player landed a hit. `repeat` marks the second strike of a
    /// fast attacker.
    PlayerStrike { damage: u32, repeat: bool },
    /// The player's slow-speed gate was closed this round.
    PlayerTooSlow,
    MonsterStrike { damage: u32, repeat: bool },
    MonsterTooSlow,
    MonsterFled,
    MonsterSlain { xp_gained: u32, levels_gained: u32 },
    PlayerSlain,
}

/// Terminal state of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    MonsterSlain,
    MonsterFled,
    PlayerSlain,
}

/// What one exchange round produced: the ordered events plus the terminal
/// outcome, if the fight ended.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub events: Vec<CombatEvent>,
    pub outcome: Option<EncounterOutcome>,
}

/// Per-encounter pacing state.
///
/// Each side owns an alternating gate consulted only below the slow-speed
/// threshold: a slow combatant strikes on open-gate rounds and loses the
/// closed ones, with the gate toggling every round it is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    pub(super) player_gate: bool,
    pub(super) monster_gate: bool,
}

impl Encounter {
    pub fn new() -> Self {
        Self {
            player_gate: true,
            monster_gate: true,
        }
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::new()
    }
}
