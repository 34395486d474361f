//! Frequency ranking shared by the category and geography aggregators.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

/// One ranked key with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount {
    pub key: String,
    pub count: u64,
}

/// Count occurrences of each key and rank them: count descending, ties broken
/// by first-seen order ascending. The tie-break makes rankings deterministic
/// for identical input order, which the default hash-map iteration would not be.
pub fn count_by_key<'a, I>(keys: I) -> Vec<KeyCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    let mut next_seen = 0usize;
    for key in keys {
        match counts.entry(key) {
            Entry::Occupied(mut e) => e.get_mut().0 += 1,
            Entry::Vacant(v) => {
                v.insert((1, next_seen));
                next_seen += 1;
            }
        }
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(key, (count, first_seen))| (key, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .map(|(key, count, _)| KeyCount {
            key: key.to_string(),
            count,
        })
        .collect()
}
