use regex::Regex;
use crate::core::config::SplitPolicy;

/// Splits text on maximal runs of separator characters and lower-cases
/// each segment. The same tokenizer instance must normalize both the
/// indexed fields and the query keywords.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separators: Regex,
}

impl Tokenizer {
    pub fn new(policy: SplitPolicy) -> Self {
        let pattern = match policy {
            SplitPolicy::Letters => "[^A-Za-z]+",
            SplitPolicy::Alphanumeric => "[^A-Za-z0-9]+",
        };
        // Fixed literal patterns, compilation cannot fail.
        Tokenizer {
            separators: Regex::new(pattern).unwrap(),
        }
    }

    /// Lazy token stream over `text`. Empty segments from leading,
    /// trailing, or repeated separators are dropped.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        self.separators
            .split(text)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_ascii_lowercase())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(SplitPolicy::Alphanumeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(tokenizer: &Tokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).collect()
    }

    #[test]
    fn lower_cases_and_splits_on_separator_runs() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokens(&tokenizer, "The Quick -- Brown_Fox!"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn drops_empty_segments_at_edges() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokens(&tokenizer, "  ... movie ...  "), vec!["movie"]);
        assert!(tokens(&tokenizer, " \t .,;! ").is_empty());
        assert!(tokens(&tokenizer, "").is_empty());
    }

    #[test]
    fn digits_follow_the_split_policy() {
        let letters = Tokenizer::new(SplitPolicy::Letters);
        let alphanumeric = Tokenizer::new(SplitPolicy::Alphanumeric);
        assert_eq!(tokens(&letters, "area51 b2"), vec!["area", "b"]);
        assert_eq!(tokens(&alphanumeric, "area51 b2"), vec!["area51", "b2"]);
    }

    #[test]
    fn token_stream_is_restartable() {
        let tokenizer = Tokenizer::default();
        let text = "same text twice";
        let first: Vec<String> = tokenizer.tokenize(text).collect();
        let second: Vec<String> = tokenizer.tokenize(text).collect();
        assert_eq!(first, second);
    }
}
