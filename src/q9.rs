use crate::data::NetflixData;
use crate::rank::{ranked, tally};
use crate::report::ValueCount;

/// Title count for every genre in `listed_in`.
pub fn q9(db: &NetflixData) -> Vec<ValueCount> {
    let counts = tally(db.iter().flat_map(|t| t.listed_in.iter().map(String::as_str)));
    ValueCount::from_ranked(ranked(counts))
}

// 9. Count the number of content items in each genre
// SELECT TRIM(UNNEST(STRING_TO_ARRAY(listed_in, ','))) AS genre,
//        COUNT(*) AS total_content
// FROM netflix
// GROUP BY 1
// ORDER BY total_content DESC, genre;
