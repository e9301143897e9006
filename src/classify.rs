//! Keyword-to-category mapping for description classification.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Rules are tried in order; the first category with a matching keyword wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeywordRules {
    pub categories: Vec<CategoryRule>,
    pub fallback: String,
}

impl Default for KeywordRules {
    fn default() -> Self {
        KeywordRules {
            categories: vec![CategoryRule {
                name: "Bad".to_string(),
                keywords: vec!["kill".to_string(), "violence".to_string()],
            }],
            fallback: "Good".to_string(),
        }
    }
}

impl KeywordRules {
    pub fn compile(&self) -> Result<Classifier<'_>, ConfigError> {
        let mut matchers = Vec::with_capacity(self.categories.len());
        for rule in &self.categories {
            let keywords: Vec<String> = rule
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(regex::escape)
                .collect();
            // An empty alternation would match every description.
            if keywords.is_empty() {
                continue;
            }
            let re = RegexBuilder::new(&keywords.join("|"))
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::Keyword {
                    category: rule.name.clone(),
                    source,
                })?;
            matchers.push((rule.name.as_str(), re));
        }
        Ok(Classifier {
            matchers,
            fallback: &self.fallback,
        })
    }
}

pub struct Classifier<'a> {
    matchers: Vec<(&'a str, Regex)>,
    fallback: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn classify(&self, description: Option<&str>) -> &'a str {
        let Some(text) = description else {
            return self.fallback;
        };
        self.matchers
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(name, _)| *name)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod test_classify {
    use super::*;

    #[test]
    fn test_default_rules() -> Result<(), ConfigError> {
        let rules = KeywordRules::default();
        let c = rules.compile()?;
        assert_eq!(c.classify(Some("A killer returns")), "Bad");
        assert_eq!(c.classify(Some("Senseless VIOLENCE erupts")), "Bad");
        assert_eq!(c.classify(Some("A heartwarming story")), "Good");
        assert_eq!(c.classify(None), "Good");
        Ok(())
    }

    #[test]
    fn test_first_rule_wins_and_keywords_are_literal() -> Result<(), ConfigError> {
        let rules = KeywordRules {
            categories: vec![
                CategoryRule { name: "Empty".to_string(), keywords: vec![" ".to_string()] },
                CategoryRule { name: "Crime".to_string(), keywords: vec!["heist".to_string()] },
                CategoryRule { name: "Odd".to_string(), keywords: vec!["a.b".to_string()] },
            ],
            fallback: "Other".to_string(),
        };
        let c = rules.compile()?;
        assert_eq!(c.classify(Some("The Heist")), "Crime");
        assert_eq!(c.classify(Some("aXb")), "Other");
        assert_eq!(c.classify(Some("from a.b to c")), "Odd");
        Ok(())
    }
}
