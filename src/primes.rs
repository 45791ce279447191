//! Prime sizing for bucket arrays.
//!
//! Bucket indices are `hash % capacity`; keeping the capacity prime spreads
//! hashes with common factors across more buckets.

/// Returns true if `n` is prime.
///
/// Trial division by 2, 3 and then `6k ± 1` up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5usize;
    // `i <= n / i` instead of `i * i <= n` so large `n` cannot overflow.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime strictly greater than `n`, or 2 when `n <= 1`.
///
/// ```
/// use chain_hashmap::primes::find_next_prime;
/// assert_eq!(find_next_prime(10), 11);
/// assert_eq!(find_next_prime(11), 13);
/// assert_eq!(find_next_prime(0), 2);
/// ```
pub fn find_next_prime(n: usize) -> usize {
    if n <= 1 {
        return 2;
    }
    let mut candidate = n;
    loop {
        candidate += 1;
        if is_prime(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    /// Squares of primes and products of twin candidates must be rejected.
    #[test]
    fn composites_on_the_wheel() {
        for n in [25, 35, 49, 77, 121, 143, 169, 289, 323, 1_000_001] {
            assert!(!is_prime(n), "{n} is composite");
        }
        for n in [97, 7919, 104_729, 1_000_003] {
            assert!(is_prime(n), "{n} is prime");
        }
    }

    #[test]
    fn next_prime_is_strictly_greater() {
        assert_eq!(find_next_prime(0), 2);
        assert_eq!(find_next_prime(1), 2);
        assert_eq!(find_next_prime(2), 3);
        assert_eq!(find_next_prime(3), 5);
        assert_eq!(find_next_prime(10), 11);
        assert_eq!(find_next_prime(11), 13);
        assert_eq!(find_next_prime(14), 17);
        assert_eq!(find_next_prime(22), 23);
        assert_eq!(find_next_prime(26), 29);
    }

    #[test]
    fn next_prime_agrees_with_is_prime() {
        for n in 2..2_000 {
            let p = find_next_prime(n);
            assert!(p > n);
            assert!(is_prime(p));
            assert!((n + 1..p).all(|m| !is_prime(m)));
        }
    }

    #[test]
    fn large_prime_does_not_overflow() {
        // Largest prime below 2^32.
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_295));
    }
}
