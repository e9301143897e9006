use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::data::NetflixData;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreRuntime {
    pub genre: String,
    pub movies: usize,
    pub avg_minutes: Decimal,
}

impl Row for GenreRuntime {
    fn header() -> Vec<&'static str> {
        vec!["genre", "movies", "avg_minutes"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.genre.clone(),
            self.movies.to_string(),
            self.avg_minutes.to_string(),
        ]
    }
}

/// Mean movie runtime per genre, longest `k` first. Movies without minutes are skipped.
pub fn q19(db: &NetflixData, k: usize) -> Vec<GenreRuntime> {
    let mut sums: HashMap<&str, (usize, u64)> = HashMap::default();

    for t in db.movies() {
        let Some(minutes) = t.duration_value() else {
            continue;
        };
        for genre in &t.listed_in {
            let (n, total) = sums.entry(genre.as_str()).or_default();
            *n += 1;
            *total += u64::from(minutes);
        }
    }

    let mut res: Vec<GenreRuntime> = sums
        .into_iter()
        .map(|(genre, (n, total))| GenreRuntime {
            genre: genre.to_string(),
            movies: n,
            avg_minutes: (Decimal::from(total) / Decimal::from(n))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect();

    res.sort_by(|a, b| {
        b.avg_minutes
            .cmp(&a.avg_minutes)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    res.truncate(k);
    res
}

// Average movie runtime per genre
// SELECT genre,
//        COUNT(*) AS movies,
//        ROUND(AVG(SPLIT_PART(duration, ' ', 1)::INT), 2) AS avg_minutes
// FROM (
//     SELECT TRIM(UNNEST(STRING_TO_ARRAY(listed_in, ','))) AS genre, duration
//     FROM netflix
//     WHERE type = 'Movie'
// ) AS t
// GROUP BY genre
// ORDER BY avg_minutes DESC, genre;

#[cfg(test)]
mod test_q19 {
    use super::*;
    use crate::data::fixture::{names, some, title};
    use crate::data::{Kind, Title};
    use rust_decimal_macros::dec;

    fn movie(id: &str, kind: Kind, minutes: Option<&str>, genres: &[&str]) -> Title {
        Title {
            duration: minutes.map(|m| m.to_string()),
            listed_in: names(genres),
            ..title(id, kind, id)
        }
    }

    #[test]
    fn test_q19() {
        let db = NetflixData::from_titles(vec![
            movie("s1", Kind::Movie, Some("90 min"), &["Comedies", "Dramas"]),
            movie("s2", Kind::Movie, Some("125 min"), &["Dramas"]),
            movie("s3", Kind::Movie, Some("101 min"), &["Comedies"]),
            movie("s4", Kind::Movie, None, &["Comedies"]),
            Title { duration: some("4 Seasons"), ..movie("s5", Kind::TvShow, None, &["Dramas"]) },
        ]);
        assert_eq!(
            q19(&db, 10),
            vec![
                GenreRuntime { genre: "Dramas".to_string(), movies: 2, avg_minutes: dec!(107.5) },
                GenreRuntime { genre: "Comedies".to_string(), movies: 2, avg_minutes: dec!(95.5) },
            ]
        );
        assert_eq!(q19(&db, 1).len(), 1);
    }
}
