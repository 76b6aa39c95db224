use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod aggregator;
pub mod context;
pub mod token;

pub use self::aggregator::FeatureAggregator;
pub use self::context::ContextFeatureExtractor;
pub use self::token::{CapitalType, NumericType, TokenFeatureExtractor};

/// A named feature value describing one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub value: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// `name=value`, the attribute string a CRF trainer sees.
impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Features of one token, in extraction order.
pub type FeatureSet = Vec<Feature>;

/// A token seen together with the other tokens of its sentence.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    sentence: &'a [&'a str],
    index: usize,
}

impl<'a> TokenContext<'a> {
    /// `None` unless `index` is a position in `sentence`.
    pub fn new(sentence: &'a [&'a str], index: usize) -> Option<Self> {
        (index < sentence.len()).then_some(Self { sentence, index })
    }

    pub fn text(&self) -> &'a str {
        self.sentence[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sentence_len(&self) -> usize {
        self.sentence.len()
    }

    /// Number of tokens before this one in the sentence.
    pub fn num_preceding(&self) -> usize {
        self.index
    }

    /// Number of tokens after this one in the sentence.
    pub fn num_following(&self) -> usize {
        self.sentence.len() - self.index - 1
    }

    /// Text of the token `k` positions to the left, if it is inside the sentence.
    pub fn before(&self, k: usize) -> Option<&'a str> {
        let i = self.index.checked_sub(k)?;
        self.sentence.get(i).copied()
    }

    /// Text of the token `k` positions to the right, if it is inside the sentence.
    pub fn after(&self, k: usize) -> Option<&'a str> {
        let i = self.index.checked_add(k)?;
        self.sentence.get(i).copied()
    }
}

pub trait FeatureExtractor {
    fn extract(&self, token: &TokenContext<'_>) -> FeatureSet;
}
