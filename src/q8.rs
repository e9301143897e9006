use serde::Serialize;

use crate::data::NetflixData;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonCount {
    pub show_id: String,
    pub title: Option<String>,
    pub seasons: u32,
}

impl Row for SeasonCount {
    fn header() -> Vec<&'static str> {
        vec!["show_id", "title", "seasons"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.show_id.clone(),
            self.title.clone().unwrap_or_default(),
            self.seasons.to_string(),
        ]
    }
}

/// TV shows with strictly more than `seasons` seasons, in catalogue order.
pub fn q8(db: &NetflixData, seasons: u32) -> Vec<SeasonCount> {
    db.tv_shows()
        .filter_map(|t| {
            let n = t.duration_value()?;
            (n > seasons).then(|| SeasonCount {
                show_id: t.show_id.clone(),
                title: t.title.clone(),
                seasons: n,
            })
        })
        .collect()
}

// 8. List all TV shows with more than 5 seasons
// SELECT *
// FROM netflix
// WHERE type = 'TV Show'
//   AND SPLIT_PART(duration, ' ', 1)::INT > 5;
