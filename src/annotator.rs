//! Per-document driver: extracts features sentence by sentence and either
//! records them as training data or tags the tokens with a classifier.

use crate::config::AnnotatorConfig;
use crate::crf::{SequenceClassifier, SequenceInstance, Trainable};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::feature::{FeatureAggregator, FeatureSet};

/// What to do with the extracted features. Fixed for the lifetime of a
/// [`PosAnnotator`].
pub enum Mode<'a> {
    /// Gold tags are read and every sentence is handed to the sink.
    Training(&'a mut dyn Trainable),
    /// The classifier tags every sentence and its output is written to the tokens.
    Inference(&'a mut dyn SequenceClassifier),
}

impl<'a> Mode<'a> {
    /// Selects the mode from an "is training" flag. The collaborator for the
    /// selected mode must be present.
    pub fn select(
        training: bool,
        sink: Option<&'a mut dyn Trainable>,
        classifier: Option<&'a mut dyn SequenceClassifier>,
    ) -> Result<Self> {
        if training {
            sink.map(Mode::Training)
                .ok_or_else(|| Error::ModeMisuse("training requested without a training sink".into()))
        } else {
            classifier
                .map(Mode::Inference)
                .ok_or_else(|| Error::ModeMisuse("inference requested without a classifier".into()))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Training(_) => "training",
            Mode::Inference(_) => "inference",
        }
    }
}

pub struct PosAnnotator<'a> {
    features: FeatureAggregator,
    mode: Mode<'a>,
}

impl<'a> PosAnnotator<'a> {
    pub fn new(mode: Mode<'a>) -> Self {
        Self::with_features(FeatureAggregator::default(), mode)
    }

    pub fn from_config(config: &AnnotatorConfig, mode: Mode<'a>) -> Self {
        Self::with_features(FeatureAggregator::from_config(config), mode)
    }

    pub fn with_features(features: FeatureAggregator, mode: Mode<'a>) -> Self {
        Self { features, mode }
    }

    pub fn mode(&self) -> &Mode<'a> {
        &self.mode
    }

    pub fn features(&self) -> &FeatureAggregator {
        &self.features
    }

    pub fn process(&mut self, doc: &mut Document) -> Result<()> {
        let mut num_tokens = 0;
        for s in 0..doc.sentences().len() {
            let items = {
                let texts = doc.token_texts(s)?;
                self.features.extract_sentence(&texts)
            };
            if items.is_empty() {
                log::debug!("{}: sentence {s} is empty", doc.id());
                continue;
            }
            num_tokens += items.len();
            log::debug!("{}: sentence {s}, {} tokens", doc.id(), items.len());
            match &mut self.mode {
                Mode::Training(sink) => {
                    let labels = gold_labels(doc, s)?;
                    let instance = SequenceInstance::new(items, labels)?;
                    sink.train_on(instance)
                        .map_err(|e| contract_violation(e, doc.id(), s))?;
                }
                Mode::Inference(classifier) => {
                    let outcomes = classifier
                        .classify(&items)
                        .map_err(|e| contract_violation(e, doc.id(), s))?;
                    write_outcomes(doc, s, &items, outcomes)?;
                }
            }
        }
        log::info!(
            "{}: {} sentences, {} tokens ({})",
            doc.id(),
            doc.sentences().len(),
            num_tokens,
            self.mode.name()
        );
        Ok(())
    }

    /// Processes the documents in order, stopping at the first error.
    pub fn process_all(&mut self, docs: &mut [Document]) -> Result<()> {
        for doc in docs {
            self.process(doc)?;
        }
        Ok(())
    }

    /// Lets the training sink flush what it has buffered. Nothing to do in
    /// inference mode.
    pub fn finish(&mut self) -> Result<()> {
        match &mut self.mode {
            Mode::Training(sink) => sink.finish(),
            Mode::Inference(_) => Ok(()),
        }
    }
}

fn gold_labels(doc: &Document, s: usize) -> Result<Vec<String>> {
    doc.sentences()[s]
        .tokens
        .iter()
        .enumerate()
        .map(|(t, token)| {
            token.pos().map(str::to_string).ok_or_else(|| Error::MalformedInput {
                document: doc.id().to_string(),
                sentence: s,
                token: t,
                reason: "token has no gold tag".to_string(),
            })
        })
        .collect()
}

fn write_outcomes(doc: &mut Document, s: usize, items: &[FeatureSet], outcomes: Vec<String>) -> Result<()> {
    if outcomes.len() != items.len() {
        return Err(Error::ContractViolation {
            document: doc.id().to_string(),
            sentence: s,
            expected: items.len(),
            actual: outcomes.len(),
        });
    }
    if let Some(t) = outcomes.iter().position(String::is_empty) {
        return Err(Error::EmptyLabel { document: doc.id().to_string(), sentence: s, token: t });
    }
    let sentence = &mut doc.sentences_mut()[s];
    for (token, outcome) in sentence.tokens.iter_mut().zip(outcomes) {
        token.set_predicted(outcome);
    }
    Ok(())
}

/// Length errors from a collaborator become contract violations of this sentence.
fn contract_violation(e: Error, document: &str, sentence: usize) -> Error {
    match e {
        Error::LengthMismatch { items, labels } => Error::ContractViolation {
            document: document.to_string(),
            sentence,
            expected: items,
            actual: labels,
        },
        e => e,
    }
}
