use serde::Serialize;

use crate::data::{Kind, NetflixData};
use crate::rank::{leaders, tally};
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingLeader {
    pub kind: Kind,
    pub rating: String,
    pub total: usize,
}

impl Row for RatingLeader {
    fn header() -> Vec<&'static str> {
        vec!["type", "rating", "rating_count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.rating.clone(),
            self.total.to_string(),
        ]
    }
}

/// Most common rating for each type. Ratings tied for first are all returned.
pub fn q2(db: &NetflixData) -> Vec<RatingLeader> {
    let mut res = Vec::new();

    for kind in [Kind::Movie, Kind::TvShow] {
        let counts = tally(
            db.iter()
                .filter(|t| t.kind == kind)
                .filter_map(|t| t.rating.as_deref()),
        );
        res.extend(leaders(counts).into_iter().map(|(rating, total)| RatingLeader {
            kind,
            rating: rating.to_string(),
            total,
        }));
    }

    res
}

// 2. Find the most common rating for movies and TV shows
// WITH RatingCounts AS (
//     SELECT type, rating, COUNT(*) AS rating_count
//     FROM netflix
//     GROUP BY type, rating
// ),
// RankedRatings AS (
//     SELECT type, rating, rating_count,
//            RANK() OVER (PARTITION BY type ORDER BY rating_count DESC) AS rank
//     FROM RatingCounts
// )
// SELECT type, rating AS most_frequent_rating
// FROM RankedRatings
// WHERE rank = 1;

#[cfg(test)]
mod test_q2 {
    use super::*;
    use crate::data::Title;
    use crate::data::fixture::{some, title};

    fn rated(id: &str, kind: Kind, rating: Option<&str>) -> Title {
        Title {
            rating: rating.map(|r| r.to_string()),
            ..title(id, kind, id)
        }
    }

    #[test]
    fn test_q2_keeps_ties() {
        let mut titles = Vec::new();
        for i in 0..3 {
            titles.push(rated(&format!("m{i}"), Kind::Movie, Some("TV-MA")));
            titles.push(rated(&format!("n{i}"), Kind::Movie, Some("R")));
        }
        titles.push(rated("m9", Kind::Movie, Some("PG")));
        titles.push(rated("t1", Kind::TvShow, Some("TV-14")));
        titles.push(rated("t2", Kind::TvShow, Some("TV-14")));
        titles.push(rated("t3", Kind::TvShow, Some("TV-MA")));
        let db = NetflixData::from_titles(titles);

        assert_eq!(
            q2(&db),
            vec![
                RatingLeader { kind: Kind::Movie, rating: "R".to_string(), total: 3 },
                RatingLeader { kind: Kind::Movie, rating: "TV-MA".to_string(), total: 3 },
                RatingLeader { kind: Kind::TvShow, rating: "TV-14".to_string(), total: 2 },
            ]
        );
    }

    #[test]
    fn test_q2_ignores_missing_rating() {
        let db = NetflixData::from_titles(vec![
            rated("m1", Kind::Movie, None),
            rated("m2", Kind::Movie, None),
            Title { rating: some("PG"), ..title("m3", Kind::Movie, "C") },
        ]);
        let res = q2(&db);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].rating, "PG");
    }
}
