use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::data::NetflixData;
use crate::rank::tally;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub total: usize,
}

impl Row for YearCount {
    fn header() -> Vec<&'static str> {
        vec!["year_added", "total_content"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.year.to_string(), self.total.to_string()]
    }
}

/// Titles added to the catalogue per calendar year, oldest year first.
pub fn q18(db: &NetflixData) -> Vec<YearCount> {
    let added: Vec<i32> = db.iter().filter_map(|t| t.added_on()).map(|d| d.year()).collect();
    debug!(skipped = db.len() - added.len(), "q18 unparsed date_added");

    let mut res: Vec<YearCount> = tally(added)
        .into_iter()
        .map(|(year, total)| YearCount { year, total })
        .collect();
    res.sort_by_key(|r| r.year);
    res
}

// Content added per year
// SELECT EXTRACT(YEAR FROM TO_DATE(date_added, 'Month DD, YYYY')) AS year_added,
//        COUNT(*) AS total_content
// FROM netflix
// WHERE date_added IS NOT NULL
// GROUP BY 1
// ORDER BY 1;

#[cfg(test)]
mod test_q18 {
    use super::*;
    use crate::data::fixture::{some, title};
    use crate::data::{Kind, Title};

    #[test]
    fn test_q18() {
        let db = NetflixData::from_titles(vec![
            Title { date_added: some("September 25, 2021"), ..title("s1", Kind::Movie, "A") },
            Title { date_added: some("January 1, 2019"), ..title("s2", Kind::TvShow, "B") },
            Title { date_added: some("garbage"), ..title("s3", Kind::Movie, "C") },
            Title { date_added: some(" December 31, 2021"), ..title("s4", Kind::Movie, "D") },
            title("s5", Kind::Movie, "E"),
        ]);
        assert_eq!(
            q18(&db),
            vec![YearCount { year: 2019, total: 1 }, YearCount { year: 2021, total: 2 }]
        );
        assert_eq!(db.len(), 5);
    }
}
