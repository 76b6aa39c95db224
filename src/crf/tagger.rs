use crate::error::Result;
use crate::feature::FeatureSet;

/// A trained model that labels a whole sentence at once.
///
/// Implementations must return exactly one label per input item, in input
/// order.
pub trait SequenceClassifier {
    fn classify(&mut self, items: &[FeatureSet]) -> Result<Vec<String>>;
}

impl<F> SequenceClassifier for F
where
    F: FnMut(&[FeatureSet]) -> Result<Vec<String>>,
{
    fn classify(&mut self, items: &[FeatureSet]) -> Result<Vec<String>> {
        self(items)
    }
}
