use serde::Serialize;

use crate::data::NetflixData;
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Runtime {
    pub show_id: String,
    pub title: Option<String>,
    pub minutes: u32,
}

impl Row for Runtime {
    fn header() -> Vec<&'static str> {
        vec!["show_id", "title", "minutes"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.show_id.clone(),
            self.title.clone().unwrap_or_default(),
            self.minutes.to_string(),
        ]
    }
}

/// The longest movie, or every movie sharing the longest runtime.
pub fn q5(db: &NetflixData) -> Vec<Runtime> {
    let timed: Vec<(&str, Option<&str>, u32)> = db
        .movies()
        .filter_map(|t| Some((t.show_id.as_str(), t.title.as_deref(), t.duration_value()?)))
        .collect();

    let Some(longest) = timed.iter().map(|(_, _, m)| *m).max() else {
        return Vec::new();
    };

    timed
        .into_iter()
        .filter(|(_, _, m)| *m == longest)
        .map(|(show_id, title, minutes)| Runtime {
            show_id: show_id.to_string(),
            title: title.map(|s| s.to_string()),
            minutes,
        })
        .collect()
}

// 5. Identify the longest movie
// SELECT *
// FROM netflix
// WHERE type = 'Movie'
// ORDER BY SPLIT_PART(duration, ' ', 1)::INT DESC;
