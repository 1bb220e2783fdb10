//! Monster kinds and their fixed behavior table.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::FLEE_CHANCE_IN;
use crate::core::stats::Stats;

/// Discriminator for every hostile creature kind.
///
/// Behavior differences between kinds (base stats, flee willingness, the
/// trap's attack-once override) are table lookups on this tag rather than
/// virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    Orc,
    Troll,
    Dragon,
    Trap,
}

impl MonsterKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            MonsterKind::Goblin => "Goblin",
            MonsterKind::Orc => "Orc",
            MonsterKind::Troll => "Troll",
            MonsterKind::Dragon => "Dragon",
            MonsterKind::Trap => "Trap",
        }
    }

    /// Fixed base stats per kind: (health, attack, speed, level).
    pub fn base_stats(&self) -> Stats {
        match self {
            MonsterKind::Goblin => Stats::new(15, 6, 1.5, 1),
            MonsterKind::Orc => Stats::new(25, 10, 1.0, 2),
            MonsterKind::Troll => Stats::new(40, 14, 0.5, 3),
            MonsterKind::Dragon => Stats::new(80, 20, 1.0, 10),
            MonsterKind::Trap => Stats::new(0, 15, 0.0, 0),
        }
    }

    /// Whether a wounded monster of this kind will try to escape combat.
    pub fn can_flee(&self) -> bool {
        matches!(self, MonsterKind::Goblin | MonsterKind::Orc)
    }

    /// Traps fire once on room entry and never fight a multi-round
    /// encounter.
    pub fn is_trap(&self) -> bool {
        matches!(self, MonsterKind::Trap)
    }
}

/// A hostile occupant of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub stats: Stats,
    pub fled: bool,
}

impl Monster {
    pub fn spawn(kind: MonsterKind) -> Self {
        Self {
            kind,
            stats: kind.base_stats(),
            fled: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// One escape attempt: a 1-in-3 draw, honored only for kinds willing
    /// to flee. Success marks the monster fled and drops it to 0 health,
    /// ending the encounter without an XP award.
    ///
    /// The draw is made before the kind check so the random stream is
    /// identical across kinds.
    pub fn attempt_flee(&mut self, rng: &mut impl Rng) -> bool {
        let escaped = rng.gen_range(0..FLEE_CHANCE_IN) == 0 && self.kind.can_flee();
        if escaped {
            self.fled = true;
            let remaining = self.stats.current_health;
            self.stats.modify_current_health(-(remaining as i32));
        }
        escaped
    }
}
