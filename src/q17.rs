use crate::data::NetflixData;
use crate::rank::{tally, top_k};
use crate::report::ValueCount;

/// Directors credited on the most titles.
pub fn q17(db: &NetflixData, k: usize) -> Vec<ValueCount> {
    let counts = tally(db.iter().flat_map(|t| t.director.iter().map(String::as_str)));
    ValueCount::from_ranked(top_k(counts, k))
}

// Top directors by number of titles
// SELECT TRIM(UNNEST(STRING_TO_ARRAY(director, ','))) AS director,
//        COUNT(*) AS total_content
// FROM netflix
// GROUP BY 1
// ORDER BY total_content DESC, director
// LIMIT 10;

#[cfg(test)]
mod test_q17 {
    use super::*;
    use crate::data::fixture::{names, title};
    use crate::data::{Kind, Title};

    #[test]
    fn test_q17() {
        let db = NetflixData::from_titles(vec![
            Title { director: names(&["Rajiv Chilaka"]), ..title("s1", Kind::Movie, "A") },
            Title { director: names(&["Rajiv Chilaka", "Suhas Kadav"]), ..title("s2", Kind::Movie, "B") },
            Title { director: names(&["Suhas Kadav"]), ..title("s3", Kind::Movie, "C") },
            Title { director: names(&["Jay Karas"]), ..title("s4", Kind::Movie, "D") },
            title("s5", Kind::TvShow, "E"),
        ]);
        assert_eq!(
            q17(&db, 2),
            vec![
                ValueCount { name: "Rajiv Chilaka".to_string(), total: 2 },
                ValueCount { name: "Suhas Kadav".to_string(), total: 2 },
            ]
        );
    }
}
