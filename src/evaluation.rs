use std::{collections::BTreeMap, fmt::Display, iter::zip};

use crate::document::Document;
use crate::error::{Error, Result};

/// Label-wise performance values.
#[derive(Debug, Default, Clone)]
struct LabelMeasure {
    /// Number of correct predictions.
    num_correct: usize,
    /// Number of occurrences of the label in the gold-standard data.
    num_observation: usize,
    /// Number of predictions.
    num_prediction: usize,
    precision: f64,
    recall: f64,
    fmeasure: f64,
}

/// Tagging accuracy of predicted tags against gold tags.
#[derive(Debug, Default)]
pub struct Evaluation {
    tbl: BTreeMap<String, LabelMeasure>,

    /// Number of correctly predicted items.
    item_total_correct: usize,
    /// Total number of items.
    item_total_num: usize,
    item_accuracy: f64,

    /// Number of sentences predicted without a single error.
    inst_total_correct: usize,
    inst_total_num: usize,
    inst_accuracy: f64,

    macro_precision: f64,
    macro_recall: f64,
    macro_fmeasure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimation {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
    pub item_accuracy: f64,
    pub sequence_accuracy: f64,
}

impl Evaluation {
    /// Adds one sentence. Only the common prefix is compared when the lengths
    /// differ; such a sentence never counts as correct.
    pub fn accumulate<R: AsRef<str>, P: AsRef<str>>(&mut self, reference: &[R], prediction: &[P]) {
        let mut matched = 0;
        for (r, p) in zip(reference, prediction) {
            let (r, p) = (r.as_ref(), p.as_ref());
            self.tbl.entry(r.to_string()).or_default().num_observation += 1;
            self.tbl.entry(p.to_string()).or_default().num_prediction += 1;
            if r == p {
                self.tbl.entry(r.to_string()).or_default().num_correct += 1;
                matched += 1;
            }
            self.item_total_num += 1;
        }
        self.item_total_correct += matched;

        if matched == prediction.len() && matched == reference.len() {
            self.inst_total_correct += 1;
        }
        self.inst_total_num += 1;
    }

    /// Adds every non-empty sentence of a tagged document. Every token needs
    /// both a gold and a predicted tag.
    pub fn accumulate_document(&mut self, doc: &Document) -> Result<()> {
        for (s, sentence) in doc.sentences().iter().enumerate() {
            if sentence.is_empty() {
                continue;
            }
            let mut reference = Vec::with_capacity(sentence.len());
            let mut prediction = Vec::with_capacity(sentence.len());
            for (t, token) in sentence.tokens.iter().enumerate() {
                let malformed = |reason: &str| Error::MalformedInput {
                    document: doc.id().to_string(),
                    sentence: s,
                    token: t,
                    reason: reason.to_string(),
                };
                reference.push(token.pos().ok_or_else(|| malformed("token has no gold tag"))?);
                prediction.push(token.predicted().ok_or_else(|| malformed("token has no predicted tag"))?);
            }
            self.accumulate(&reference, &prediction);
        }
        Ok(())
    }

    pub fn num_labels(&self) -> usize {
        self.tbl.values().filter(|lev| lev.num_observation > 0).count()
    }

    pub fn evaluate(&mut self) -> Estimation {
        let num_labels = self.num_labels();
        self.macro_precision = 0.0;
        self.macro_recall = 0.0;
        self.macro_fmeasure = 0.0;
        for lev in self.tbl.values_mut() {
            if lev.num_observation == 0 {
                continue;
            }
            lev.precision = 0.0;
            lev.recall = 0.0;
            lev.fmeasure = 0.0;

            if lev.num_prediction > 0 {
                lev.precision = lev.num_correct as f64 / lev.num_prediction as f64;
            }
            lev.recall = lev.num_correct as f64 / lev.num_observation as f64;
            if lev.precision + lev.recall > 0.0 {
                lev.fmeasure = lev.precision * lev.recall * 2.0 / (lev.precision + lev.recall);
            }
            self.macro_precision += lev.precision;
            self.macro_recall += lev.recall;
            self.macro_fmeasure += lev.fmeasure;
        }

        if num_labels > 0 {
            self.macro_precision /= num_labels as f64;
            self.macro_recall /= num_labels as f64;
            self.macro_fmeasure /= num_labels as f64;
        }
        if self.item_total_num > 0 {
            self.item_accuracy = self.item_total_correct as f64 / self.item_total_num as f64;
        }
        if self.inst_total_num > 0 {
            self.inst_accuracy = self.inst_total_correct as f64 / self.inst_total_num as f64;
        }
        Estimation {
            precision: self.macro_precision,
            recall: self.macro_recall,
            fmeasure: self.macro_fmeasure,
            item_accuracy: self.item_accuracy,
            sequence_accuracy: self.inst_accuracy,
        }
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Performance by label (#match, #model, #ref) (precision, recall, F1):")?;
        for (label, lev) in &self.tbl {
            if lev.num_observation == 0 {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) (******, ******, ******)",
                    label, lev.num_correct, lev.num_prediction, lev.num_observation
                )?;
            } else {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    label,
                    lev.num_correct,
                    lev.num_prediction,
                    lev.num_observation,
                    lev.precision,
                    lev.recall,
                    lev.fmeasure
                )?;
            }
        }
        writeln!(
            f,
            "Macro-average precision, recall, F1: ({:.6}, {:.6}, {:.6})",
            self.macro_precision, self.macro_recall, self.macro_fmeasure
        )?;
        writeln!(
            f,
            "Item accuracy: {} / {} ({:.4})",
            self.item_total_correct, self.item_total_num, self.item_accuracy
        )?;
        writeln!(
            f,
            "Sequence accuracy: {} / {} ({:.4})",
            self.inst_total_correct, self.inst_total_num, self.inst_accuracy
        )
    }
}
