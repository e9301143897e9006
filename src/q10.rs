use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::data::NetflixData;
use crate::error::QueryError;
use crate::rank::tally;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearShare {
    pub country: String,
    pub release_year: i32,
    pub total: usize,
    /// Percent of the country's titles, two decimals.
    pub share: Decimal,
}

impl Row for YearShare {
    fn header() -> Vec<&'static str> {
        vec!["country", "release_year", "total_release", "avg_release"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.country.clone(),
            self.release_year.to_string(),
            self.total.to_string(),
            self.share.to_string(),
        ]
    }
}

/// For titles from `country`, the share released in each year, top `k` by share.
///
/// Ties on share go to the earlier year.
pub fn q10(db: &NetflixData, country: &str, k: usize) -> Result<Vec<YearShare>, QueryError> {
    let country = country.trim();
    let years: Vec<i32> = db
        .iter()
        .filter(|t| t.in_country(country))
        .map(|t| t.release_year)
        .collect();

    if years.is_empty() {
        return Err(QueryError::DivisionByZero(format!("country '{country}'")));
    }
    let all = Decimal::from(years.len());

    let mut res: Vec<YearShare> = tally(years)
        .into_iter()
        .map(|(release_year, total)| YearShare {
            country: country.to_string(),
            release_year,
            total,
            share: (Decimal::from(total) * Decimal::ONE_HUNDRED / all)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect();

    res.sort_by(|a, b| {
        b.share
            .cmp(&a.share)
            .then_with(|| a.release_year.cmp(&b.release_year))
    });
    res.truncate(k);
    Ok(res)
}

// 10. Find each year and the average numbers of content release in India on netflix.
//     Return top 5 year with highest avg content release!
// WITH india AS (
//     SELECT show_id, release_year
//     FROM netflix
//     WHERE 'India' = ANY (ARRAY(
//         SELECT TRIM(c) FROM UNNEST(STRING_TO_ARRAY(country, ',')) AS c))
// )
// SELECT 'India' AS country, release_year,
//        COUNT(show_id) AS total_release,
//        ROUND(COUNT(show_id)::numeric / (SELECT COUNT(*) FROM india)::numeric * 100, 2)
//        AS avg_release
// FROM india
// GROUP BY release_year
// ORDER BY avg_release DESC, release_year
// LIMIT 5;

#[cfg(test)]
mod test_q10 {
    use super::*;
    use crate::data::fixture::{names, title};
    use crate::data::{Kind, Title};
    use rust_decimal_macros::dec;

    fn released(id: &str, countries: &[&str], year: i32) -> Title {
        Title {
            country: names(countries),
            release_year: year,
            ..title(id, Kind::Movie, id)
        }
    }

    #[test]
    fn test_q10() -> Result<(), QueryError> {
        let db = NetflixData::from_titles(vec![
            released("s1", &["India"], 2020),
            released("s2", &["India", "United States"], 2019),
            released("s3", &["India"], 2019),
            released("s4", &["United States"], 2020),
        ]);
        let res = q10(&db, "India", 5)?;
        assert_eq!(
            res,
            vec![
                YearShare { country: "India".to_string(), release_year: 2019, total: 2, share: dec!(66.67) },
                YearShare { country: "India".to_string(), release_year: 2020, total: 1, share: dec!(33.33) },
            ]
        );
        assert_eq!(q10(&db, "India", 1)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_q10_rounds_half_up() -> Result<(), QueryError> {
        // 1 of 8 is exactly 12.5; 1 of 16 is 6.25; 1 of 32 is 3.125 -> 3.13.
        let mut titles: Vec<Title> = (0..31).map(|i| released(&format!("s{i}"), &["Japan"], 2000)).collect();
        titles.push(released("s99", &["Japan"], 2001));
        let db = NetflixData::from_titles(titles);
        let res = q10(&db, "Japan", 5)?;
        assert_eq!(res[1].release_year, 2001);
        assert_eq!(res[1].share, dec!(3.13));
        Ok(())
    }

    #[test]
    fn test_q10_agrees_with_country_counts() -> Result<(), QueryError> {
        let db = NetflixData::from_titles(vec![
            released("s1", &["India"], 2020),
            released("s2", &["india"], 2020),
            released("s3", &["India", "France"], 2019),
        ]);
        let india = crate::q4::q4(&db, 10)
            .into_iter()
            .find(|r| r.name == "India")
            .map(|r| r.total);
        let res = q10(&db, "India", 10)?;
        assert_eq!(india, Some(res.iter().map(|r| r.total).sum()));
        assert_eq!(res.iter().map(|r| r.total).sum::<usize>(), 2);
        Ok(())
    }

    #[test]
    fn test_q10_empty_subset() {
        let db = NetflixData::from_titles(vec![released("s1", &["France"], 2020)]);
        assert!(matches!(q10(&db, "India", 5), Err(QueryError::DivisionByZero(_))));
        assert!(matches!(
            q10(&NetflixData::default(), "India", 5),
            Err(QueryError::DivisionByZero(_))
        ));
    }
}
