use serde::Serialize;

use crate::classify::KeywordRules;
use crate::data::NetflixData;
use crate::error::ConfigError;
use crate::rank::{ranked, tally};
use crate::report::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub total: usize,
}

impl Row for CategoryCount {
    fn header() -> Vec<&'static str> {
        vec!["category", "content_count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.category.clone(), self.total.to_string()]
    }
}

/// Classifies every description with `rules` and counts titles per category.
pub fn q15(db: &NetflixData, rules: &KeywordRules) -> Result<Vec<CategoryCount>, ConfigError> {
    let classifier = rules.compile()?;
    let counts = tally(db.iter().map(|t| classifier.classify(t.description.as_deref())));

    Ok(ranked(counts)
        .into_iter()
        .map(|(category, total)| CategoryCount {
            category: category.to_string(),
            total,
        })
        .collect())
}

// 15. Categorize the content based on the presence of the keywords 'kill' and 'violence'
//     in the description field. Label content containing these keywords as 'Bad' and all
//     other content as 'Good'. Count how many items fall into each category.
// SELECT category, COUNT(*) AS content_count
// FROM (
//     SELECT CASE
//                WHEN description ILIKE '%kill%' OR description ILIKE '%violence%' THEN 'Bad'
//                ELSE 'Good'
//            END AS category
//     FROM netflix
// ) AS categorized_content
// GROUP BY category;
