use crate::data::{NetflixData, Title};

/// Movies released in `year`, in catalogue order.
pub fn q3(db: &NetflixData, year: i32) -> Vec<&Title> {
    db.movies().filter(|t| t.release_year == year).collect()
}

// 3. List all movies released in a specific year (e.g., 2020)
// SELECT *
// FROM netflix
// WHERE type = 'Movie'
//   AND release_year = 2020;
