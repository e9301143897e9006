use serde::Serialize;

use crate::data::{Kind, NetflixData};
use crate::rank::tally;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub kind: Kind,
    pub total: usize,
}

impl Row for TypeCount {
    fn header() -> Vec<&'static str> {
        vec!["type", "total_content"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.kind.to_string(), self.total.to_string()]
    }
}

/// Number of movies and TV shows.
pub fn q1(db: &NetflixData) -> Vec<TypeCount> {
    let counts = tally(db.iter().map(|t| t.kind));

    let mut res: Vec<TypeCount> = counts
        .into_iter()
        .map(|(kind, total)| TypeCount { kind, total })
        .collect();
    res.sort_by_key(|r| r.kind);
    res
}

// 1. Count the number of Movies vs TV Shows
// SELECT type, COUNT(*) AS total_content
// FROM netflix
// GROUP BY type;
