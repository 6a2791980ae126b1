//! Splitting an integer into (magnitude, scale word) groups.
//!
//! Decomposition scans the scale steps from the largest threshold down.
//! At the first threshold `t <= n` it emits `(n / t, word)` and carries on
//! with `n % t`. Since the remainder is below `t`, the scan simply continues
//! with the next step; one pass over the table is the whole algorithm.
//!
//! Magnitudes are not capped. A magnitude above the largest threshold is
//! returned as-is and spelled by the renderer with the same table, which is
//! how `10^31` becomes "ten million trillion trillion".

use num_bigint::BigUint;

/// A threshold converted for arbitrary-precision arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub threshold: BigUint,
    pub word: String,
}

/// One emitted group, e.g. `(923, "million")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub magnitude: BigUint,
    pub word: &'a str,
}

/// Decompose `n` against `scales`, which must be strictly descending.
///
/// Returns an empty vector when `n` is below every threshold.
#[must_use]
pub fn decompose<'a>(n: &BigUint, scales: &'a [Scale]) -> Vec<Group<'a>> {
    let mut groups = Vec::new();
    let mut rest = n.clone();
    for scale in scales {
        if scale.threshold > rest {
            continue;
        }
        groups.push(Group {
            magnitude: &rest / &scale.threshold,
            word: &scale.word,
        });
        rest %= &scale.threshold;
    }
    groups
}
