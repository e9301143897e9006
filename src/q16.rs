use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::data::NetflixData;
use crate::rank::top_k;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub first: String,
    pub second: String,
    pub total: usize,
}

impl Row for PairCount {
    fn header() -> Vec<&'static str> {
        vec!["actor_1", "actor_2", "titles_together"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first.clone(),
            self.second.clone(),
            self.total.to_string(),
        ]
    }
}

/// Actor pairs that share the most titles. `first < second` in every row.
pub fn q16(db: &NetflixData, k: usize) -> Vec<PairCount> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::default();

    for t in db.iter() {
        let mut cast: Vec<&str> = t.cast.iter().map(String::as_str).collect();
        cast.sort_unstable();
        cast.dedup();

        for (i, a) in cast.iter().enumerate() {
            for b in &cast[i + 1..] {
                *counts.entry((*a, *b)).or_default() += 1;
            }
        }
    }

    top_k(counts, k)
        .into_iter()
        .map(|((first, second), total)| PairCount {
            first: first.to_string(),
            second: second.to_string(),
            total,
        })
        .collect()
}

// Actors who appear together most often
// WITH cast_members AS (
//     SELECT show_id, TRIM(UNNEST(STRING_TO_ARRAY(casts, ','))) AS actor
//     FROM netflix
// )
// SELECT a.actor AS actor_1, b.actor AS actor_2, COUNT(*) AS titles_together
// FROM cast_members AS a
// JOIN cast_members AS b
//   ON a.show_id = b.show_id
//  AND a.actor < b.actor
// GROUP BY a.actor, b.actor
// ORDER BY titles_together DESC, actor_1, actor_2
// LIMIT 10;
