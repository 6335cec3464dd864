/// Maps a key to a bucket-independent hash. Maps reduce it
/// modulo their capacity themselves.
pub type HashFunction = fn(&str) -> usize;

/// Sum of the key's character codes
pub fn hash_function_1(key: &str) -> usize {
    key.chars()
        .fold(0usize, |hash, c| hash.wrapping_add(c as usize))
}

/// Sum of the key's character codes, each weighted by its 1-based position
pub fn hash_function_2(key: &str) -> usize {
    key.chars().enumerate().fold(0usize, |hash, (i, c)| {
        hash.wrapping_add((i + 1).wrapping_mul(c as usize))
    })
}
