//! Seams to the sequence model: training sinks and sequence classifiers.
pub mod tagger;
pub mod trainer;
pub mod writer;

pub use self::tagger::SequenceClassifier;
pub use self::trainer::{InstanceCollector, SequenceInstance, Trainable};
pub use self::writer::CrfSuiteWriter;
