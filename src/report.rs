use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use crate::data::Title;

/// A query result row that can be laid out as a table line.
pub trait Row {
    fn header() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl<R: Row> Row for &R {
    fn header() -> Vec<&'static str> {
        R::header()
    }

    fn cells(&self) -> Vec<String> {
        (*self).cells()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render<R: Row + Serialize>(rows: &[R], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(table(rows).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

pub fn table<R: Row>(rows: &[R]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(R::header());
    for row in rows {
        table.add_row(row.cells());
    }
    table
}

/// A group key with its number of titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub name: String,
    pub total: usize,
}

impl ValueCount {
    pub fn from_ranked(ranked: Vec<(&str, usize)>) -> Vec<ValueCount> {
        ranked
            .into_iter()
            .map(|(name, total)| ValueCount {
                name: name.to_string(),
                total,
            })
            .collect()
    }
}

impl Row for ValueCount {
    fn header() -> Vec<&'static str> {
        vec!["name", "total"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.total.to_string()]
    }
}

impl Row for Title {
    fn header() -> Vec<&'static str> {
        vec![
            "show_id",
            "type",
            "title",
            "director",
            "country",
            "date_added",
            "release_year",
            "rating",
            "duration",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.show_id.clone(),
            self.kind.to_string(),
            self.title.clone().unwrap_or_default(),
            self.director.join(", "),
            self.country.join(", "),
            self.date_added.clone().unwrap_or_default(),
            self.release_year.to_string(),
            self.rating.clone().unwrap_or_default(),
            self.duration.clone().unwrap_or_default(),
        ]
    }
}
