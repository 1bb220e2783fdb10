// Combat speed thresholds
pub const FAST_SPEED: f32 = 1.33;
pub const SLOW_SPEED: f32 = 0.66;

// Damage roll: attack scales a d20 roll
pub const DAMAGE_DIE_SIDES: u32 = 20;

// Monster flee behavior
pub const FLEE_HEALTH_DIVISOR: u32 = 3; // eligible below max_health / 3
pub const FLEE_CHANCE_IN: u32 = 3; // 1-in-3 per eligible round

// Player flee-from-room
pub const ROOM_FLEE_CHANCE_IN: u32 = 3;

// Player starting stats
pub const PLAYER_BASE_HEALTH: u32 = 30;
pub const PLAYER_BASE_ATTACK: u32 = 5;
pub const PLAYER_BASE_SPEED: f32 = 0.0;
pub const PLAYER_BASE_LEVEL: u32 = 1;

// Level-up stat growth: gain base_stat * level / divisor per level
pub const LEVEL_GROWTH_DIVISOR: u32 = 10;

// Inventory capacities
pub const MAX_WEAPONS: usize = 5;
pub const MAX_POTIONS: usize = 10;

// Room generation
pub const MAX_ROOM_POTIONS: u32 = 2;
pub const POTION_RESTORE_CHANCE_IN: u32 = 2;
pub const POTION_RESTORE_MIN: u32 = 5;
pub const POTION_RESTORE_MAX: u32 = 15;
pub const POTION_HEALTH_BONUS_CHANCE_IN: u32 = 6;
pub const POTION_ATTACK_BONUS_CHANCE_IN: u32 = 11;
pub const POTION_BONUS_MIN: u32 = 1;
pub const POTION_BONUS_MAX: u32 = 5;

// Boss room injection
pub const BOSS_ROOM_MIN_EXPLORED: usize = 7;
pub const BOSS_ROOM_CHANCE_IN: u32 = 4;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x44454C5645520001; // "DELVER" + format version 1
