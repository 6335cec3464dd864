//! Prime table sizes.
//!
//! Every table allocation goes through [`next_prime`] so that the
//! quadratic probe sequence and `hash % capacity` spread keys well.

/// Smallest prime `>= n`, except that an even `n` is first bumped
/// to `n + 1` (so `next_prime(2) == 3`).
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 {
        return false;
    }

    let mut factor = 3;
    while factor * factor <= n {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}
