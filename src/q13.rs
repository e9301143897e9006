use chrono::{Datelike, NaiveDate};

use crate::data::{NetflixData, Title};

/// Movies featuring `actor` released within the last `years` years of `today`.
pub fn q13<'a>(db: &'a NetflixData, actor: &str, today: NaiveDate, years: u32) -> Vec<&'a Title> {
    let since = today.year() - i32::try_from(years).unwrap_or(i32::MAX);
    db.movies()
        .filter(|t| t.release_year > since && t.has_actor(actor))
        .collect()
}

// 13. Find how many movies actor 'Salman Khan' appeared in the last 10 years
// SELECT *
// FROM netflix
// WHERE type = 'Movie'
//   AND 'Salman Khan' = ANY (ARRAY(
//       SELECT TRIM(a) FROM UNNEST(STRING_TO_ARRAY(casts, ',')) AS a))
//   AND release_year > EXTRACT(YEAR FROM CURRENT_DATE) - 10;
