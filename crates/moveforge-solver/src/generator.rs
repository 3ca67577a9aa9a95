//! Magnitude multisets constrained by the sum-of-squares identity.
//!
//! A solution made only of rightward moves changes the first moment of the
//! distribution by `Σ m²`, which must equal `n · distance`. Enumerating the
//! non-increasing magnitude lists with that square sum therefore lists every
//! candidate shape of a forward-only solution.

/// Largest integer whose square fits in an `i64`.
const MAX_ROOT: i64 = 3_037_000_499;

/// Exact integer square root, rounded down. Negative inputs map to 0.
///
/// # Example
///
/// ```
/// use moveforge_solver::generator::isqrt;
///
/// assert_eq!(isqrt(24), 4);
/// assert_eq!(isqrt(25), 5);
/// assert_eq!(isqrt(i64::MAX), 3_037_000_499);
/// ```
pub fn isqrt(value: i64) -> i64 {
    if value < 1 {
        return 0;
    }
    let (mut lo, mut hi) = (0, value.min(MAX_ROOT));
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if mid * mid <= value {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn exact_root(value: i64) -> Option<i64> {
    let root = isqrt(value);
    (root >= 1 && root * root == value).then_some(root)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    remaining: i64,
    // next magnitude to try at this depth, counting down
    next: i64,
}

/// Lazily enumerates `a₁ ≥ a₂ ≥ … ≥ a_count ≥ 1` with `Σ aᵢ² = target`.
///
/// Lists come out in descending lexicographic order. The enumeration is
/// driven by an explicit frame stack; it is finite and cannot be restarted.
///
/// # Example
///
/// ```
/// use moveforge_solver::generator::MagnitudeMultisets;
///
/// let found: Vec<Vec<i64>> = MagnitudeMultisets::new(50, 7, 2).collect();
/// assert_eq!(found, vec![vec![7, 1], vec![5, 5]]);
/// ```
#[derive(Debug, Clone)]
pub struct MagnitudeMultisets {
    count: usize,
    asymmetry_cap: Option<i64>,
    prefix: Vec<i64>,
    frames: Vec<Frame>,
    empty_pending: bool,
}

impl MagnitudeMultisets {
    /// Multisets of `count` magnitudes, none above `max_magnitude`.
    pub fn new(target: i64, max_magnitude: i64, count: usize) -> Self {
        let mut frames = Vec::with_capacity(count);
        if count > 0 && target > 0 {
            frames.push(Frame {
                remaining: target,
                next: max_magnitude.min(isqrt(target)),
            });
        }
        Self {
            count,
            asymmetry_cap: None,
            prefix: Vec::with_capacity(count),
            frames,
            empty_pending: count == 0 && target == 0,
        }
    }

    /// Bounds every magnitude after the first `a` by `cap - a`.
    ///
    /// With `cap = max(n, distance)` this keeps only one of each pair of
    /// lists that differ by exchanging the roles of `n` and `distance`.
    pub fn with_asymmetry_cap(mut self, cap: i64) -> Self {
        self.asymmetry_cap = Some(cap);
        self
    }

    fn ceiling_after(&self, depth: usize, chosen: i64) -> i64 {
        match self.asymmetry_cap {
            Some(cap) if depth == 0 => chosen.min(cap - chosen),
            _ => chosen,
        }
    }
}

impl Iterator for MagnitudeMultisets {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        if self.count == 0 {
            let pending = self.empty_pending;
            self.empty_pending = false;
            return pending.then(Vec::new);
        }

        while let Some(&frame) = self.frames.last() {
            let depth = self.frames.len() - 1;
            let slots = (self.count - depth) as i64;

            if slots == 1 {
                self.frames.pop();
                let found = exact_root(frame.remaining)
                    .filter(|&a| a <= frame.next)
                    .map(|a| {
                        let mut magnitudes = self.prefix.clone();
                        magnitudes.push(a);
                        magnitudes
                    });
                self.prefix.pop();
                if found.is_some() {
                    return found;
                }
                continue;
            }

            let a = frame.next;
            // every later magnitude is at most a
            if a < 1 || slots.saturating_mul(a * a) < frame.remaining {
                self.frames.pop();
                self.prefix.pop();
                continue;
            }
            if let Some(top) = self.frames.last_mut() {
                top.next = a - 1;
            }

            let rest = frame.remaining - a * a;
            if rest < slots - 1 {
                continue;
            }
            let ceiling = self.ceiling_after(depth, a);
            self.prefix.push(a);
            self.frames.push(Frame {
                remaining: rest,
                next: ceiling.min(isqrt(rest)),
            });
        }
        None
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
