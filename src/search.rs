//! Fuzzy matching for Pokemon names

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher as FuzzyMatcherTrait;
use strsim::{jaro_winkler, normalized_damerau_levenshtein};

/// Fuzzy matcher for finding similar Pokemon names
pub struct NameMatcher {
    /// Skim fuzzy matcher
    skim: SkimMatcherV2,
    /// Minimum score threshold
    min_score: f32,
}

impl NameMatcher {
    /// Create a new name matcher
    pub fn new() -> Self {
        Self {
            skim: SkimMatcherV2::default(),
            min_score: 0.6,
        }
    }

    /// Set the minimum score threshold
    pub fn with_min_score(mut self, score: f32) -> Self {
        self.min_score = score;
        self
    }

    /// Similarity between a query and a name, in `0.0..=1.0`
    pub fn score(&self, query: &str, name: &str) -> f32 {
        let query = query.trim().to_lowercase();
        let name = name.to_lowercase();

        if query == name {
            return 1.0;
        }

        let mut scores = Vec::new();

        // Skim scores are unbounded; scale relative to a perfect prefix hit
        if let Some(skim_score) = self.skim.fuzzy_match(&name, &query) {
            let normalized = (skim_score as f32 / (query.len().max(1) as f32 * 20.0)).min(1.0);
            scores.push(normalized);
        }

        // Jaro-Winkler similarity (good for typos and prefixes)
        scores.push(jaro_winkler(&query, &name) as f32);

        // Normalized Damerau-Levenshtein (handles transpositions)
        scores.push(normalized_damerau_levenshtein(&query, &name) as f32);

        let sum: f32 = scores.iter().sum();
        sum / scores.len() as f32
    }

    /// Names scoring at least the threshold, best first
    pub fn find_matches<'n, I>(&self, query: &str, names: I, limit: usize) -> Vec<(&'n str, f32)>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut matches: Vec<(&str, f32)> = names
            .into_iter()
            .map(|name| (name, self.score(query, name)))
            .filter(|(_, score)| *score >= self.min_score)
            .collect();

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(limit);
        matches
    }

    /// Best scoring name, if any reaches the threshold
    pub fn best_match<'n, I>(&self, query: &str, names: I) -> Option<(&'n str, f32)>
    where
        I: IntoIterator<Item = &'n str>,
    {
        self.find_matches(query, names, 1).into_iter().next()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 6] = ["Bulbasaur", "Charmander", "Charmeleon", "Charizard", "Pikachu", "Raichu"];

    #[test]
    fn test_exact_match_scores_one() {
        let matcher = NameMatcher::new();
        assert_eq!(matcher.score("pikachu", "Pikachu"), 1.0);
    }

    #[test]
    fn test_typo_finds_name() {
        let matcher = NameMatcher::new();
        let best = matcher.best_match("Pikachuu", NAMES).unwrap();
        assert_eq!(best.0, "Pikachu");

        let best = matcher.best_match("Bulbsaur", NAMES).unwrap();
        assert_eq!(best.0, "Bulbasaur");
    }

    #[test]
    fn test_unrelated_scores_low() {
        let matcher = NameMatcher::new();
        assert!(matcher.score("zzzz", "Bulbasaur") < 0.5);
        assert!(matcher.best_match("qwxzv", NAMES).is_none());
    }

    #[test]
    fn test_limit_and_order() {
        let matcher = NameMatcher::new().with_min_score(0.5);
        let matches = matcher.find_matches("Char", NAMES, 2);

        assert_eq!(matches.len(), 2);
        assert!(matches[0].1 >= matches[1].1);
        assert!(matches.iter().all(|(name, _)| name.starts_with("Char")));
    }
}
