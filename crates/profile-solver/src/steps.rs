use tribune_types::TribuneConfig;

/// Step count used for every row when no counts are configured.
pub const DEFAULT_STEP_COUNT: i32 = 1;

/// Step count for the zero-based elevated row `index`.
///
/// Indexes into `elev_counts` when in range, otherwise repeats the last entry,
/// otherwise falls back to `default`. Anything below one step becomes one.
pub fn resolve_step_count(elev_counts: &[i32], index: usize, default: i32) -> u32 {
    let raw = elev_counts
        .get(index)
        .or_else(|| elev_counts.last())
        .copied()
        .unwrap_or(default);
    raw.max(1) as u32
}

/// Resolve every elevated row once. Entry `r` is shared by tribune row `r + 1`
/// and stair flight `r`.
pub fn resolve_step_counts(tribune: &TribuneConfig) -> Vec<u32> {
    (0..tribune.row_count())
        .map(|index| resolve_step_count(&tribune.elev_counts, index, DEFAULT_STEP_COUNT))
        .collect()
}
