use rayon::prelude::*;

use crate::math::checker::{check_pair, collect_checks, CheckResult, ColorPair, Conformance};
use crate::math::SearchOptions;

/// Audit many color pairs in parallel.
///
/// Uses Rayon's `par_iter()`: every pair is an independent pure computation,
/// so nothing is shared between workers. Output order matches input order.
///
/// This is the batch entry point called from JS via NAPI.
pub fn check_pairs_parallel(
    pairs: &[ColorPair],
    level: Conformance,
    search: &SearchOptions,
) -> CheckResult {
    let checks: Vec<_> = pairs
        .par_iter()
        .map(|pair| check_pair(pair, level, search))
        .collect();
    let result = collect_checks(checks);
    tracing::debug!(
        pairs = pairs.len(),
        violations = result.violations.len(),
        skipped = result.skipped_count,
        "pair audit finished"
    );
    result
}
