use super::{Feature, FeatureExtractor, FeatureSet, TokenContext};

/// Surface text of the neighbouring tokens within the same sentence.
///
/// Features are named `text@-2`, `text@-1`, `text@+1`, `text@+2` (for a window
/// of two) and emitted left to right. Positions past the sentence boundary
/// contribute nothing; no padding value is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextFeatureExtractor {
    preceding: usize,
    following: usize,
}

impl Default for ContextFeatureExtractor {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl ContextFeatureExtractor {
    pub fn new(preceding: usize, following: usize) -> Self {
        Self { preceding, following }
    }
}

impl FeatureExtractor for ContextFeatureExtractor {
    fn extract(&self, token: &TokenContext<'_>) -> FeatureSet {
        let preceding = self.preceding.min(token.num_preceding());
        let following = self.following.min(token.num_following());
        let mut features = Vec::with_capacity(preceding + following);
        for k in (1..=preceding).rev() {
            if let Some(text) = token.before(k) {
                features.push(Feature::new(format!("text@-{k}"), text));
            }
        }
        for k in 1..=following {
            if let Some(text) = token.after(k) {
                features.push(Feature::new(format!("text@+{k}"), text));
            }
        }
        features
    }
}
