use std::fmt::Debug;

use super::{ContextFeatureExtractor, FeatureExtractor, FeatureSet, TokenContext, TokenFeatureExtractor};
use crate::config::AnnotatorConfig;

/// Runs an ordered list of extractors and concatenates their output.
pub struct FeatureAggregator {
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl Debug for FeatureAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureAggregator")
            .field("extractors", &self.extractors.len())
            .finish()
    }
}

impl Default for FeatureAggregator {
    fn default() -> Self {
        Self::from_config(&AnnotatorConfig::default())
    }
}

impl FeatureAggregator {
    pub fn new() -> Self {
        Self { extractors: Vec::new() }
    }

    /// Token features first, then context features.
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self::new()
            .with(TokenFeatureExtractor::new(config.suffix_lengths.clone()))
            .with(ContextFeatureExtractor::new(config.preceding, config.following))
    }

    pub fn with(mut self, extractor: impl FeatureExtractor + 'static) -> Self {
        self.push(extractor);
        self
    }

    pub fn push(&mut self, extractor: impl FeatureExtractor + 'static) {
        self.extractors.push(Box::new(extractor));
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// One feature set per token, in sentence order.
    pub fn extract_sentence(&self, sentence: &[&str]) -> Vec<FeatureSet> {
        (0..sentence.len())
            .filter_map(|i| TokenContext::new(sentence, i))
            .map(|token| self.extract(&token))
            .collect()
    }
}

impl FeatureExtractor for FeatureAggregator {
    fn extract(&self, token: &TokenContext<'_>) -> FeatureSet {
        let mut features = FeatureSet::new();
        for extractor in &self.extractors {
            features.extend(extractor.extract(token));
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;

    struct Position;

    impl FeatureExtractor for Position {
        fn extract(&self, token: &TokenContext<'_>) -> FeatureSet {
            vec![Feature::new("position", token.index().to_string())]
        }
    }

    #[test]
    fn token_features_before_context() {
        let sentence = ["Time", "flies"];
        let features = FeatureAggregator::default().extract(&TokenContext::new(&sentence, 0).unwrap());
        let names: Vec<_> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "text",
                "lower",
                "capital-type",
                "numeric-type",
                "suffix-2",
                "suffix-3",
                "text@+1"
            ]
        );
    }

    #[test]
    fn extensible() {
        let aggregator = FeatureAggregator::default().with(Position);
        assert_eq!(aggregator.len(), 3);
        let sequence = aggregator.extract_sentence(&["a", "b", "c"]);
        assert_eq!(sequence.len(), 3);
        for (i, features) in sequence.iter().enumerate() {
            assert_eq!(features.last(), Some(&Feature::new("position", i.to_string())));
        }
    }

    #[test]
    fn reproducible() {
        let sentence = ["Colorless", "green", "ideas", "sleep", "furiously", "."];
        let a = FeatureAggregator::default().extract_sentence(&sentence);
        let b = FeatureAggregator::default().extract_sentence(&sentence);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_sentence() {
        assert!(FeatureAggregator::default().extract_sentence(&[]).is_empty());
    }
}
