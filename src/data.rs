use std::fmt;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{CsvReadOptions, DataFrame, DataType, ParquetReader, SerReader};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::LoadError;

// CREATE TABLE netflix (
//     show_id      VARCHAR(6) NOT NULL PRIMARY KEY,
//     type         VARCHAR(10) NOT NULL,
//     title        VARCHAR(150),
//     director     VARCHAR(208),
//     casts        VARCHAR(1000),
//     country      VARCHAR(150),
//     date_added   VARCHAR(50),
//     release_year INT NOT NULL,
//     rating       VARCHAR(10),
//     duration     VARCHAR(15),
//     listed_in    VARCHAR(100),
//     description  VARCHAR(250)
// );

pub const COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Kind {
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl Kind {
    pub fn parse(s: &str) -> Option<Kind> {
        if s.eq_ignore_ascii_case("movie") {
            Some(Kind::Movie)
        } else if s.eq_ignore_ascii_case("tv show") || s.eq_ignore_ascii_case("tvshow") {
            Some(Kind::TvShow)
        } else {
            None
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Movie => f.write_str("Movie"),
            Kind::TvShow => f.write_str("TV Show"),
        }
    }
}

/// One row of the catalogue. Multi-valued columns are already split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub show_id: String,
    pub kind: Kind,
    pub title: Option<String>,
    pub director: Vec<String>,
    pub cast: Vec<String>,
    pub country: Vec<String>,
    pub date_added: Option<String>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Vec<String>,
    pub description: Option<String>,
}

impl Title {
    /// `None` when the column is blank or not in `Month DD, YYYY` form.
    pub fn added_on(&self) -> Option<NaiveDate> {
        self.date_added.as_deref().and_then(parse_date_added)
    }

    /// Minutes for a movie, seasons for a TV show.
    pub fn duration_value(&self) -> Option<u32> {
        self.duration.as_deref().and_then(leading_number)
    }

    pub fn has_director(&self, name: &str) -> bool {
        contains(&self.director, name)
    }

    pub fn has_actor(&self, name: &str) -> bool {
        contains(&self.cast, name)
    }

    pub fn in_country(&self, name: &str) -> bool {
        contains(&self.country, name)
    }

    pub fn in_genre(&self, name: &str) -> bool {
        contains(&self.listed_in, name)
    }
}

/// Splits a comma-joined column into trimmed, non-empty elements.
pub fn split_list(s: Option<&str>) -> Vec<String> {
    s.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(|e| e.to_string())
            .collect()
    })
    .unwrap_or_default()
}

pub fn parse_date_added(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%B %d, %Y").ok()
}

/// Membership test against an unnested column. Elements compare exactly, the
/// same way the group-by queries key them, so filters and counts agree.
pub fn contains(list: &[String], name: &str) -> bool {
    let name = name.trim();
    list.iter().any(|e| e == name)
}

/// "142 min" -> 142, "3 Seasons" -> 3. The token must be plain digits.
pub fn leading_number(s: &str) -> Option<u32> {
    let token = s.split_whitespace().next()?;
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// The loaded catalogue. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct NetflixData {
    pub titles: Vec<Title>,
}

impl NetflixData {
    /// Reads a CSV file, or a parquet file when the extension says so.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_parquet = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

        let df = if is_parquet {
            ParquetReader::new(file).finish()?
        } else {
            // Schema inference off: every column comes back as text.
            CsvReadOptions::default()
                .with_has_header(true)
                .with_infer_schema_length(Some(0))
                .into_reader_with_file_handle(file)
                .finish()?
        };
        debug!(path = %path.display(), height = df.height(), "read dataset");

        let data = Self::from_frame(&df)?;
        info!(path = %path.display(), titles = data.len(), "loaded titles");
        Ok(data)
    }

    pub fn from_frame(df: &DataFrame) -> Result<Self, LoadError> {
        for name in COLUMNS {
            if df.column(name).is_err() {
                return Err(LoadError::MissingColumn(name.to_string()));
            }
        }

        let show_id = text_column(df, "show_id")?;
        let kind = text_column(df, "type")?;
        let title = text_column(df, "title")?;
        let director = text_column(df, "director")?;
        let cast = text_column(df, "cast")?;
        let country = text_column(df, "country")?;
        let date_added = text_column(df, "date_added")?;
        let release_year = text_column(df, "release_year")?;
        let rating = text_column(df, "rating")?;
        let duration = text_column(df, "duration")?;
        let listed_in = text_column(df, "listed_in")?;
        let description = text_column(df, "description")?;

        let mut titles = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let kind_text = required(&kind, row, "type")?;
            let year_text = required(&release_year, row, "release_year")?;

            titles.push(Title {
                show_id: required(&show_id, row, "show_id")?.to_string(),
                kind: Kind::parse(kind_text).ok_or_else(|| LoadError::InvalidValue {
                    row,
                    column: "type",
                    value: kind_text.to_string(),
                })?,
                title: title[row].clone(),
                director: split_list(director[row].as_deref()),
                cast: split_list(cast[row].as_deref()),
                country: split_list(country[row].as_deref()),
                date_added: date_added[row].clone(),
                release_year: year_text.parse().map_err(|_| LoadError::InvalidValue {
                    row,
                    column: "release_year",
                    value: year_text.to_string(),
                })?,
                rating: rating[row].clone(),
                duration: duration[row].clone(),
                listed_in: split_list(listed_in[row].as_deref()),
                description: description[row].clone(),
            });
        }

        Ok(Self::from_titles(titles))
    }

    pub fn from_titles(titles: Vec<Title>) -> Self {
        NetflixData { titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.titles.iter()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Title> {
        self.iter().filter(|t| t.kind == Kind::Movie)
    }

    pub fn tv_shows(&self) -> impl Iterator<Item = &Title> {
        self.iter().filter(|t| t.kind == Kind::TvShow)
    }
}

// Blank cells become `None` so they never count as a value downstream.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoadError> {
    let column = df
        .column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?
        .cast(&DataType::String)?;

    Ok(column
        .str()?
        .into_iter()
        .map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        })
        .collect())
}

fn required<'a>(
    values: &'a [Option<String>],
    row: usize,
    column: &'static str,
) -> Result<&'a str, LoadError> {
    values[row].as_deref().ok_or(LoadError::InvalidValue {
        row,
        column,
        value: String::new(),
    })
}
