use crate::data::{NetflixData, Title};

/// Everything directed (or co-directed) by `director`.
pub fn q7<'a>(db: &'a NetflixData, director: &str) -> Vec<&'a Title> {
    db.iter().filter(|t| t.has_director(director)).collect()
}

// 7. Find all the movies/TV shows by director 'Rajiv Chilaka'
// SELECT *
// FROM (
//     SELECT *, TRIM(UNNEST(STRING_TO_ARRAY(director, ','))) AS director_name
//     FROM netflix
// ) AS t
// WHERE director_name = 'Rajiv Chilaka';
