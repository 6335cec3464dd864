//! Scripted runs of both maps and the mode finder.
//!
//! Each function returns the lines it would print so the demo binary
//! stays a thin shell and the sequences can be checked in tests.

use collections::{HashFunction, OpenAddressingMap, StringMap, find_mode};
use log::{debug, info};

use crate::DemoError;

fn stats<M: StringMap<i64>>(m: &M) -> String {
    format!(
        "empty: {} load: {:.2} size: {} capacity: {}",
        m.empty_buckets(),
        m.table_load(),
        m.size(),
        m.capacity()
    )
}

/// Runs the put / load / resize / lookup / remove / clear sequence
/// against maps built by `make(capacity)`.
pub fn map_walkthrough<M, F>(make: F) -> Vec<String>
where
    M: StringMap<i64>,
    F: Fn(usize) -> M,
{
    let mut out = Vec::new();

    info!(target: "walkthrough", "put");
    let mut m = make(53);
    for i in 0..150 {
        m.put(&format!("str{i}"), i * 100);
        if i % 25 == 24 {
            out.push(stats(&m));
        }
    }

    info!(target: "walkthrough", "put with repeated keys");
    let mut m = make(41);
    for i in 0..50 {
        m.put(&format!("str{}", i / 3), i * 100);
        if i % 10 == 9 {
            out.push(stats(&m));
        }
    }

    info!(target: "walkthrough", "table_load");
    let mut m = make(101);
    out.push(format!("{:.2}", m.table_load()));
    for (k, v) in [("key1", 10), ("key2", 20), ("key1", 30)] {
        m.put(k, v);
        out.push(format!("{:.2} {}", m.table_load(), stats(&m)));
    }

    info!(target: "walkthrough", "resize_table");
    let mut m = make(23);
    m.put("key1", 10);
    out.push(format!("{} {} {:?} {}", m.size(), m.capacity(), m.get("key1"), m.contains_key("key1")));
    m.resize_table(30);
    out.push(format!("{} {} {:?} {}", m.size(), m.capacity(), m.get("key1"), m.contains_key("key1")));

    let mut m = make(79);
    let keys: Vec<i64> = (1..1000).step_by(13).collect();
    for key in &keys {
        m.put(&key.to_string(), key * 42);
    }
    for capacity in (111..1000).step_by(117) {
        m.resize_table(capacity);
        m.put("some key", 0);
        let mut result = m.contains_key("some key");
        m.remove("some key");
        for key in &keys {
            result &= m.contains_key(&key.to_string());
            result &= !m.contains_key(&(key + 1).to_string());
        }
        debug!(target: "walkthrough", "resized to {capacity}, load {:.2}", m.table_load());
        out.push(format!("{capacity} {result} {} {}", m.size(), m.capacity()));
    }

    info!(target: "walkthrough", "get / contains_key / remove");
    let mut m = make(11);
    m.put("key1", 10);
    m.put("key2", 20);
    m.put("key3", 30);
    m.remove("key3");
    m.remove("key4");
    out.push(format!(
        "{:?} {:?} {} {}",
        m.get("key1"),
        m.get("key3"),
        m.contains_key("key2"),
        m.contains_key("key3")
    ));

    info!(target: "walkthrough", "clear");
    m.clear();
    out.push(stats(&m));

    info!(target: "walkthrough", "keys_and_values");
    let mut m = make(11);
    for i in 1..6 {
        m.put(&i.to_string(), i * 10);
    }
    m.resize_table(2);
    m.put("20", 200);
    m.remove("1");
    m.resize_table(12);
    let mut pairs: Vec<String> = m
        .keys_and_values()
        .into_iter()
        .map(|(k, v)| format!("({k}, {v})"))
        .collect();
    pairs.sort();
    out.push(pairs.join(" "));

    out
}

/// Walks an open addressing map with its cursor, after removals
/// have left tombstones behind
pub fn open_addressing_iteration(hash_function: HashFunction) -> Vec<String> {
    info!(target: "walkthrough", "iteration");
    let mut m = OpenAddressingMap::new(10, hash_function);
    for i in 0..5 {
        m.put(&i.to_string(), (i * 10).to_string());
    }
    m.remove("0");
    m.remove("4");

    m.iter()
        .map(|entry| format!("{} {}", entry.key(), entry.value()))
        .collect()
}

pub fn mode_walkthrough() -> Result<Vec<String>, DemoError> {
    let inputs: [&[&str]; 3] = [
        &["apple", "apple", "grape", "melon", "peach"],
        &["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu"],
        &["one", "two", "three", "four", "five"],
    ];

    let mut out = Vec::with_capacity(inputs.len());
    for input in inputs {
        let (mut modes, frequency) = find_mode(input)?;
        modes.sort();
        out.push(format!("{input:?} -> mode: {modes:?}, frequency: {frequency}"));
    }
    Ok(out)
}
