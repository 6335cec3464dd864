use log::trace;
use thiserror::Error;

use crate::hashmap::{ChainedMap, StringMap, hash_function_1};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModeError {
    #[error("cannot find the mode of an empty sequence")]
    EmptyInput,
}

/// Returns the most frequent values of `values` and how often they occur.
///
/// Counting happens in a [`ChainedMap`] sized to the input, so ties come
/// back in the map's bucket order rather than input order.
pub fn find_mode<S: AsRef<str>>(values: &[S]) -> Result<(Vec<String>, usize), ModeError> {
    if values.is_empty() {
        return Err(ModeError::EmptyInput);
    }

    let mut counts: ChainedMap<usize> = ChainedMap::new(values.len(), hash_function_1);
    let mut max_count = 1;

    for value in values {
        let value = value.as_ref();
        let count = counts.get(value).map_or(1, |c| c + 1);
        counts.put(value, count);
        max_count = max_count.max(count);
    }

    let modes: Vec<String> = counts
        .keys_and_values()
        .into_iter()
        .filter(|&(_, &count)| count == max_count)
        .map(|(key, _)| key.to_string())
        .collect();

    trace!(target: "find_mode", "{} distinct values, {} modal at frequency {}", counts.size(), modes.len(), max_count);
    Ok((modes, max_count))
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{ModeError, find_mode};
    use crate::hashmap::{ChainedMap, StringMap, hash_function_1};

    fn as_set(modes: &[String]) -> HashSet<&str> {
        modes.iter().map(String::as_str).collect()
    }

    #[test]
    fn single_mode() {
        let (modes, freq) = find_mode(&["apple", "apple", "grape", "melon", "peach"]).unwrap();
        assert_eq!(modes, vec!["apple".to_string()]);
        assert_eq!(freq, 2);
    }

    #[test]
    fn ties_are_all_returned() {
        let input = ["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"];
        let (modes, freq) = find_mode(&input).unwrap();
        assert_eq!(as_set(&modes), HashSet::from(["Mint", "Ubuntu"]));
        assert_eq!(freq, 3);
    }

    #[test]
    fn ties_follow_bucket_order() {
        // 5 values -> 5 buckets: "a" = 97 % 5 = 2, "b" = 98 % 5 = 3, "c" = 99 % 5 = 4
        let input = ["b", "a", "b", "a", "c"];
        let (modes, freq) = find_mode(&input).unwrap();
        assert_eq!(modes, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(freq, 2);

        // same order as the counting map enumerates its pairs
        let mut counts = ChainedMap::new(input.len(), hash_function_1);
        for value in input {
            let count = counts.get(value).map_or(1, |c| c + 1);
            counts.put(value, count);
        }
        let expected: Vec<String> = counts
            .keys_and_values()
            .into_iter()
            .filter(|&(_, &c)| c == freq)
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(modes, expected);
    }

    #[test]
    fn all_distinct() {
        let input = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let (modes, freq) = find_mode(&input).unwrap();
        assert_eq!(as_set(&modes), HashSet::from(["one", "two", "three"]));
        assert_eq!(freq, 1);
    }

    #[test]
    fn one_value() {
        assert_eq!(find_mode(&["2"]), Ok((vec!["2".to_string()], 1)));
    }

    #[test]
    fn empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(find_mode(&empty), Err(ModeError::EmptyInput));
    }
}
