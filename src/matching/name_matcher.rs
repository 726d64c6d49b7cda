//! "Did you mean" suggestions for mistyped customer and staff names.
//!
//! Scoring works on normalized names (lowercase, collapsed whitespace):
//! - Exact match scores 100
//! - Substring matches score 10-95 by how much of the name they cover
//! - Otherwise Levenshtein similarity scaled to 0-85, dropped when more than
//!   half the characters differ

/// A candidate name with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The candidate exactly as stored
    pub name: String,

    /// Similarity (0-100, where 100 is an exact match after normalization)
    pub score: u8,
}

/// Suggests known names close to what the user typed.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    max_suggestions: usize,
}

impl NameMatcher {
    pub fn new(max_suggestions: usize) -> Self {
        Self { max_suggestions }
    }

    /// Rank `candidates` against `query`, best first.
    ///
    /// Ties keep the candidates' original order. At most `max_suggestions`
    /// names are returned; zero-scored names never are.
    pub fn find_matches<'a, I>(&self, query: &str, candidates: I) -> Vec<NameMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);
        if query.is_empty() || self.max_suggestions == 0 {
            return Vec::new();
        }

        let mut matches: Vec<NameMatch> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let score = Self::calculate_score(&query, &Self::normalize_name(candidate));
                (score > 0).then(|| NameMatch {
                    name: candidate.to_string(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.dedup_by(|a, b| a.name == b.name);
        matches.truncate(self.max_suggestions);
        matches
    }

    /// Names only, for printing.
    pub fn suggest<'a, I>(&self, query: &str, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.find_matches(query, candidates)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }

    fn calculate_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Edit distance between two strings, counted in chars.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    // Two rows of the full matrix are enough.
    let mut previous: Vec<usize> = (0..=s2.len()).collect();
    let mut current = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2.len()]
}
