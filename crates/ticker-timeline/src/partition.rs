#![forbid(unsafe_code)]

//! Distributing rendered items across lanes.

/// Split `items` into `lanes` contiguous runs.
///
/// With `f = n / lanes`, lane `k` receives `[k*f, (k+1)*f)` and the last lane
/// also receives the remainder. Order is preserved. Leading lanes are empty
/// when `n < lanes`; the last lane is non-empty whenever `n > 0`.
pub fn partition_lanes<T>(items: Vec<T>, lanes: usize) -> Vec<Vec<T>> {
    if lanes == 0 {
        return Vec::new();
    }
    let per_lane = items.len() / lanes;
    let mut out = Vec::with_capacity(lanes);
    let mut rest = items.into_iter();
    for _ in 0..lanes - 1 {
        out.push(rest.by_ref().take(per_lane).collect());
    }
    out.push(rest.collect());
    out
}
