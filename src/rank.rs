//! Group-by counting and ranking shared by the query modules.
//!
//! Every ranking orders by count descending and breaks ties on the key in
//! ascending order, so equal inputs always produce equal outputs.

use std::hash::Hash;

use rustc_hash::FxHashMap as HashMap;

/// Counts occurrences of each key.
pub fn tally<K, I>(keys: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::default();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts
}

/// All groups, count descending then key ascending.
pub fn ranked<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
    let mut res: Vec<(K, usize)> = counts.into_iter().collect();
    res.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    res
}

pub fn top_k<K: Ord>(counts: HashMap<K, usize>, k: usize) -> Vec<(K, usize)> {
    let mut res = ranked(counts);
    res.truncate(k);
    res
}

/// Every key whose count equals the maximum, in key order.
pub fn leaders<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    let mut res: Vec<(K, usize)> = counts.into_iter().filter(|(_, c)| *c == max).collect();
    res.sort_by(|(ka, _), (kb, _)| ka.cmp(kb));
    res
}
