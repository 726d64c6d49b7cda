//! Name matching for "did you mean" suggestions.

pub mod name_matcher;

pub use name_matcher::{levenshtein_distance, NameMatch, NameMatcher};
