use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
};

use crate::crf::trainer::{SequenceInstance, Trainable};
use crate::crf::writer::{parse_attribute, unescape};
use crate::error::{Error, Result};

/// Feature or label strings numbered in order of first appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    /// Id of `name`, assigning the next free id if it is new.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attr {
    pub id: usize,
    pub value: f64,
}

impl Attr {
    pub fn new(id: usize, value: f64) -> Self {
        Self { id, value }
    }
}

pub type Item = Vec<Attr>;

/// An instance with attributes and labels replaced by their ids.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sequence {
    pub items: Vec<Item>,
    pub labels: Vec<usize>,
}

impl Sequence {
    pub fn push(&mut self, item: Item, label: usize) {
        self.items.push(item);
        self.labels.push(label);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Training data interned into integer ids, the form a CRF trainer consumes.
#[derive(Debug, Default)]
pub struct Dataset {
    seqs: Vec<Sequence>,
    attrs: Vocabulary,
    labels: Vocabulary,
}

impl Dataset {
    /// Interns one instance; empty instances are dropped.
    pub fn append(&mut self, instance: &SequenceInstance) {
        if instance.is_empty() {
            return;
        }
        let mut seq = Sequence::default();
        for (item, label) in instance.iter() {
            let item = item
                .iter()
                .map(|f| Attr::new(self.attrs.intern(&f.to_string()), 1.0))
                .collect();
            seq.push(item, self.labels.intern(label));
        }
        self.seqs.push(seq);
    }

    /// Reads CRFsuite text data, as written by [`crate::crf::CrfSuiteWriter`].
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut ds = Dataset::default();
        let mut seq = Sequence::default();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                if !seq.is_empty() {
                    ds.seqs.push(std::mem::take(&mut seq));
                }
                continue;
            }
            let mut fields = line.split('\t');
            let label = match fields.next() {
                Some(label) if !label.is_empty() => unescape(label)?,
                _ => return Err(Error::InvalidLine(line.clone())),
            };
            let item = fields
                .filter(|s| !s.is_empty())
                .map(|s| {
                    let (name, value) = parse_attribute(s)?;
                    Ok(Attr::new(ds.attrs.intern(&name), value))
                })
                .collect::<Result<Item>>()?;
            seq.push(item, ds.labels.intern(&label));
        }
        if !seq.is_empty() {
            log::warn!("missing empty line after the last sequence");
            ds.seqs.push(seq);
        }
        log::debug!(
            "read {} sequences (L: {}, A: {}, T: {})",
            ds.len(),
            ds.num_labels(),
            ds.num_attrs(),
            ds.max_length()
        );
        Ok(ds)
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    pub fn max_length(&self) -> usize {
        self.seqs.iter().map(|x| x.len()).max().unwrap_or_default()
    }

    pub fn total_items(&self) -> usize {
        self.seqs.iter().map(|x| x.len()).sum()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.seqs
    }

    pub fn labels(&self) -> &Vocabulary {
        &self.labels
    }

    pub fn attrs(&self) -> &Vocabulary {
        &self.attrs
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.name(id)
    }
}

impl TryFrom<File> for Dataset {
    type Error = Error;

    fn try_from(value: File) -> Result<Self> {
        Self::read(BufReader::new(value))
    }
}

impl Trainable for Dataset {
    fn train_on(&mut self, instance: SequenceInstance) -> Result<()> {
        self.append(&instance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Feature;

    #[test]
    fn vocabulary() {
        let mut vocab = Vocabulary::default();
        for (s, id) in [("NN", 0), ("VB", 1), ("NN", 0), ("IN", 2)] {
            assert_eq!(vocab.intern(s), id, "{s}");
        }
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("VB"), Some(1));
        assert_eq!(vocab.id("JJ"), None);
        assert_eq!(vocab.name(2), Some("IN"));
        assert_eq!(vocab.name(3), None);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), ["NN", "VB", "IN"]);
    }

    #[test]
    fn read_escaped_label() {
        let ds = Dataset::read("\\:\ttext=\\:\n\n".as_bytes()).unwrap();
        assert_eq!(ds.label(0), Some(":"));
        assert_eq!(ds.attrs().id("text=:"), Some(0));
    }

    #[test]
    fn read() {
        let s = "P\thello\tworld\nQ\thi\tthere:0.5\n\nP\thello\n\n";
        let ds = Dataset::read(s.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.num_labels(), 2);
        assert_eq!(ds.num_attrs(), 4);
        assert_eq!(ds.max_length(), 2);
        assert_eq!(ds.total_items(), 3);
        let first = &ds.sequences()[0];
        assert_eq!(first.labels, vec![0, 1]);
        assert_eq!(first.items[1][1], Attr::new(3, 0.5));
        assert_eq!(ds.sequences()[1].items[0][0].id, 0);
        assert_eq!(ds.label(1), Some("Q"));
    }

    #[test]
    fn read_without_trailing_blank_line() {
        let ds = Dataset::read("P\ta\nQ\tb".as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.total_items(), 2);
    }

    #[test]
    fn invalid_line() {
        assert!(matches!(Dataset::read("\tnolabel\n\n".as_bytes()), Err(Error::InvalidLine(_))));
        assert!(matches!(Dataset::read("P\tw:x\n\n".as_bytes()), Err(Error::InvalidLine(_))));
    }

    #[test]
    fn append_interns_features() {
        let mut ds = Dataset::default();
        let mut instance = SequenceInstance::default();
        instance.push(vec![Feature::new("text", "a"), Feature::new("lower", "a")], "DT");
        instance.push(vec![Feature::new("text", "A"), Feature::new("lower", "a")], "DT");
        ds.train_on(instance).unwrap();
        ds.train_on(SequenceInstance::default()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.num_labels(), 1);
        assert_eq!(ds.num_attrs(), 3);
        assert_eq!(ds.attrs().id("lower=a"), Some(1));
        assert_eq!(ds.sequences()[0].items[1][1].id, 1);
    }
}
