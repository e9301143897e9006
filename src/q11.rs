use crate::data::{NetflixData, Title};

pub const DOCUMENTARIES: &str = "Documentaries";

/// Movies listed under `genre`.
pub fn q11<'a>(db: &'a NetflixData, genre: &str) -> Vec<&'a Title> {
    db.movies().filter(|t| t.in_genre(genre)).collect()
}

// 11. List all movies that are documentaries
// SELECT *
// FROM netflix
// WHERE type = 'Movie'
//   AND 'Documentaries' = ANY (ARRAY(
//       SELECT TRIM(g) FROM UNNEST(STRING_TO_ARRAY(listed_in, ',')) AS g));

#[cfg(test)]
mod test_q11 {
    use super::*;
    use crate::data::Kind;
    use crate::data::fixture::{names, title};

    #[test]
    fn test_q11() {
        let db = NetflixData::from_titles(vec![
            Title { listed_in: names(&["Documentaries"]), ..title("s1", Kind::Movie, "A") },
            Title {
                listed_in: names(&["Docuseries", "Science & Nature TV"]),
                ..title("s2", Kind::TvShow, "B")
            },
            Title {
                listed_in: names(&["Documentaries", "International Movies"]),
                ..title("s3", Kind::Movie, "C")
            },
            Title { listed_in: names(&["Documentaries"]), ..title("s4", Kind::TvShow, "D") },
        ]);
        let ids: Vec<&str> = q11(&db, DOCUMENTARIES).iter().map(|t| t.show_id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }
}
