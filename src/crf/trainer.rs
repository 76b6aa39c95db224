use std::iter::zip;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::feature::FeatureSet;

/// One sentence worth of training data: a feature set and a label per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceInstance {
    items: Vec<FeatureSet>,
    labels: Vec<String>,
}

impl SequenceInstance {
    /// Rejects sequences whose lengths differ.
    pub fn new(items: Vec<FeatureSet>, labels: Vec<String>) -> Result<Self> {
        if items.len() != labels.len() {
            return Err(Error::LengthMismatch { items: items.len(), labels: labels.len() });
        }
        Ok(Self { items, labels })
    }

    pub fn push(&mut self, item: FeatureSet, label: impl Into<String>) {
        self.items.push(item);
        self.labels.push(label.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[FeatureSet] {
        &self.items
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureSet, &str)> {
        zip(&self.items, self.labels.iter().map(String::as_str))
    }

    pub fn into_parts(self) -> (Vec<FeatureSet>, Vec<String>) {
        (self.items, self.labels)
    }
}

/// Accepts training data, one sentence per call, in document order.
pub trait Trainable {
    fn train_on(&mut self, instance: SequenceInstance) -> Result<()>;

    /// Called once after the last instance.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every instance in memory.
#[derive(Debug, Default)]
pub struct InstanceCollector {
    instances: Vec<SequenceInstance>,
}

impl InstanceCollector {
    pub fn instances(&self) -> &[SequenceInstance] {
        &self.instances
    }

    pub fn into_instances(self) -> Vec<SequenceInstance> {
        self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.instances.iter().map(SequenceInstance::len).sum()
    }
}

impl Trainable for InstanceCollector {
    fn train_on(&mut self, instance: SequenceInstance) -> Result<()> {
        self.instances.push(instance);
        Ok(())
    }
}
