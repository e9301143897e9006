use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::data::{Kind, NetflixData};
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorMix {
    pub director: String,
    pub movies: usize,
    pub tv_shows: usize,
}

impl Row for DirectorMix {
    fn header() -> Vec<&'static str> {
        vec!["director", "movies", "tv_shows"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.director.clone(),
            self.movies.to_string(),
            self.tv_shows.to_string(),
        ]
    }
}

/// Directors credited on at least one movie and one TV show, busiest first.
pub fn q20(db: &NetflixData) -> Vec<DirectorMix> {
    let mut by_kind: HashMap<&str, (usize, usize)> = HashMap::default();

    for t in db.iter() {
        for director in &t.director {
            let (movies, shows) = by_kind.entry(director.as_str()).or_default();
            match t.kind {
                Kind::Movie => *movies += 1,
                Kind::TvShow => *shows += 1,
            }
        }
    }

    let mut res: Vec<DirectorMix> = by_kind
        .into_iter()
        .filter(|(_, (movies, shows))| *movies > 0 && *shows > 0)
        .map(|(director, (movies, tv_shows))| DirectorMix {
            director: director.to_string(),
            movies,
            tv_shows,
        })
        .collect();

    res.sort_by(|a, b| {
        (b.movies + b.tv_shows)
            .cmp(&(a.movies + a.tv_shows))
            .then_with(|| a.director.cmp(&b.director))
    });
    res
}

// Directors who made both movies and TV shows
// SELECT director,
//        COUNT(*) FILTER (WHERE type = 'Movie') AS movies,
//        COUNT(*) FILTER (WHERE type = 'TV Show') AS tv_shows
// FROM (
//     SELECT TRIM(UNNEST(STRING_TO_ARRAY(director, ','))) AS director, type
//     FROM netflix
// ) AS t
// GROUP BY director
// HAVING COUNT(*) FILTER (WHERE type = 'Movie') > 0
//    AND COUNT(*) FILTER (WHERE type = 'TV Show') > 0
// ORDER BY movies + tv_shows DESC, director;
