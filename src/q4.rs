use crate::data::NetflixData;
use crate::rank::{tally, top_k};
use crate::report::ValueCount;

/// Countries with the most titles. A co-production counts for every country.
pub fn q4(db: &NetflixData, k: usize) -> Vec<ValueCount> {
    let counts = tally(db.iter().flat_map(|t| t.country.iter().map(String::as_str)));
    ValueCount::from_ranked(top_k(counts, k))
}

// 4. Find the top 5 countries with the most content on Netflix
// SELECT *
// FROM (
//     SELECT TRIM(UNNEST(STRING_TO_ARRAY(country, ','))) AS country,
//            COUNT(*) AS total_content
//     FROM netflix
//     GROUP BY 1
// ) AS t1
// WHERE country IS NOT NULL
// ORDER BY total_content DESC, country
// LIMIT 5;
