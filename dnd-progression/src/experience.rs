//! Experience point thresholds.

use crate::config::MAX_LEVEL;

/// XP needed to reach each level, index 0 is level 1.
pub const XP_THRESHOLDS: [u32; 20] = [
    0, 300, 900, 2_700, 6_500, 14_000, 23_000, 34_000, 48_000, 64_000, 85_000, 100_000, 120_000,
    140_000, 165_000, 195_000, 225_000, 265_000, 305_000, 355_000,
];

/// XP needed to reach `level`. Levels past 20 are treated as 20.
pub fn xp_for_level(level: u8) -> u32 {
    let level = level.clamp(1, MAX_LEVEL);
    XP_THRESHOLDS[level as usize - 1]
}

/// Highest level `xp` qualifies for.
pub fn level_for_xp(xp: u32) -> u8 {
    XP_THRESHOLDS
        .iter()
        .rposition(|&threshold| xp >= threshold)
        .map(|i| i as u8 + 1)
        .unwrap_or(1)
}
