//! Part-of-speech tagging on top of a pluggable sequence model.
//!
//! A [`PosAnnotator`] walks the sentences of a [`Document`], turns every token
//! into a [`FeatureSet`] (word shape, suffixes, and neighbouring words), then
//! either hands the sentence and its gold tags to a [`Trainable`] sink or asks
//! a [`SequenceClassifier`] for tags and writes them back to the tokens.
//!
//! ```
//! use postag::{Document, InstanceCollector, Mode, PosAnnotator};
//!
//! let mut doc = Document::new("example");
//! doc.push_tagged(&[("Time", "NN"), ("flies", "VBZ")]);
//!
//! let mut sink = InstanceCollector::default();
//! {
//!     let mut annotator = PosAnnotator::new(Mode::Training(&mut sink));
//!     annotator.process(&mut doc)?;
//!     annotator.finish()?;
//! }
//! assert_eq!(sink.instances()[0].labels(), ["NN", "VBZ"]);
//! # Ok::<(), postag::Error>(())
//! ```

pub mod annotator;
pub mod config;
pub mod crf;
pub mod dataset;
pub mod document;
mod error;
pub mod evaluation;
pub mod feature;

pub use self::annotator::{Mode, PosAnnotator};
pub use self::config::AnnotatorConfig;
pub use self::crf::{CrfSuiteWriter, InstanceCollector, SequenceClassifier, SequenceInstance, Trainable};
pub use self::dataset::{Dataset, Vocabulary};
pub use self::document::{Document, Sentence, Span, Token};
pub use self::error::{Error, Result};
pub use self::evaluation::{Estimation, Evaluation};
pub use self::feature::{Feature, FeatureExtractor, FeatureSet};
