use crate::data::{NetflixData, Title};

pub fn q12(db: &NetflixData) -> Vec<&Title> {
    db.iter().filter(|t| t.director.is_empty()).collect()
}

// 12. Find all content without a director
// SELECT *
// FROM netflix
// WHERE director IS NULL;

#[cfg(test)]
mod test_q12 {
    use super::*;
    use crate::data::Kind;
    use crate::data::fixture::{names, title};

    #[test]
    fn test_q12() {
        let db = NetflixData::from_titles(vec![
            Title { director: names(&["Kirsten Johnson"]), ..title("s1", Kind::Movie, "A") },
            title("s2", Kind::TvShow, "B"),
            title("s3", Kind::Movie, "C"),
        ]);
        let ids: Vec<&str> = q12(&db).iter().map(|t| t.show_id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3"]);
    }
}
