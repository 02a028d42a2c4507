//! Points awarded per challenge level

/// Points for levels 1 through 6 (index = level - 1)
pub static POINTS_PER_LEVEL: [u64; 6] = [100, 150, 225, 300, 400, 500];

/// Awarded for any level outside the table
pub const FALLBACK_POINTS: u64 = 100;

/// Points for completing a challenge of the given level
pub fn points_for_level(level: u32) -> u64 {
    level
        .checked_sub(1)
        .and_then(|idx| POINTS_PER_LEVEL.get(idx as usize))
        .copied()
        .filter(|&p| p != 0)
        .unwrap_or(FALLBACK_POINTS)
}

/// Sum of points over a set of completed challenge levels
pub fn total_points(levels: impl IntoIterator<Item = u32>) -> u64 {
    levels.into_iter().map(points_for_level).sum()
}
