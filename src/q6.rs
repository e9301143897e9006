use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::data::{NetflixData, Title};

/// Titles added on or after `today` minus `years`, most recent first.
///
/// Rows whose `date_added` does not parse are left out.
pub fn q6(db: &NetflixData, today: NaiveDate, years: u32) -> Vec<&Title> {
    let cutoff = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    let mut skipped = 0usize;
    let mut res: Vec<(NaiveDate, &Title)> = db
        .iter()
        .filter_map(|t| match t.added_on() {
            Some(date) => Some((date, t)),
            None => {
                skipped += 1;
                None
            }
        })
        .filter(|(date, _)| *date >= cutoff)
        .collect();
    debug!(skipped, %cutoff, "q6 date filter");

    // Stable sort keeps catalogue order within a day.
    res.sort_by(|(a, _), (b, _)| b.cmp(a));
    res.into_iter().map(|(_, t)| t).collect()
}

// 6. Find content added in the last 5 years
// SELECT *
// FROM netflix
// WHERE TO_DATE(date_added, 'Month DD, YYYY') >= CURRENT_DATE - INTERVAL '5 years';
