use crate::data::NetflixData;
use crate::rank::{tally, top_k};
use crate::report::ValueCount;

/// Actors appearing in the most movies produced in `country`.
pub fn q14(db: &NetflixData, country: &str, k: usize) -> Vec<ValueCount> {
    let counts = tally(
        db.movies()
            .filter(|t| t.in_country(country))
            .flat_map(|t| t.cast.iter().map(String::as_str)),
    );
    ValueCount::from_ranked(top_k(counts, k))
}

// 14. Find the top 10 actors who have appeared in the highest number of movies produced in India
// SELECT TRIM(UNNEST(STRING_TO_ARRAY(casts, ','))) AS actor,
//        COUNT(*) AS total
// FROM netflix
// WHERE type = 'Movie'
//   AND 'India' = ANY (ARRAY(
//       SELECT TRIM(c) FROM UNNEST(STRING_TO_ARRAY(country, ',')) AS c))
// GROUP BY actor
// ORDER BY total DESC, actor
// LIMIT 10;

#[cfg(test)]
mod test_q14 {
    use super::*;
    use crate::data::fixture::{names, title};
    use crate::data::{Kind, Title};

    fn film(id: &str, kind: Kind, country: &[&str], cast: &[&str]) -> Title {
        Title { country: names(country), cast: names(cast), ..title(id, kind, id) }
    }

    #[test]
    fn test_q14() {
        let db = NetflixData::from_titles(vec![
            film("s1", Kind::Movie, &["India"], &["Anupam Kher", "Shah Rukh Khan"]),
            film("s2", Kind::Movie, &["India", "United Kingdom"], &["Anupam Kher"]),
            film("s3", Kind::Movie, &["United States"], &["Anupam Kher", "Om Puri"]),
            film("s4", Kind::TvShow, &["India"], &["Om Puri", "Om Puri"]),
            film("s5", Kind::Movie, &["India"], &["Om Puri"]),
        ]);
        assert_eq!(
            q14(&db, "India", 10),
            vec![
                ValueCount { name: "Anupam Kher".to_string(), total: 2 },
                ValueCount { name: "Om Puri".to_string(), total: 1 },
                ValueCount { name: "Shah Rukh Khan".to_string(), total: 1 },
            ]
        );
        assert_eq!(q14(&db, "India", 1).len(), 1);
    }
}
