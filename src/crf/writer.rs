//! CRFsuite's plain-text training data format.
//!
//! One line per item, `LABEL\tATTR\tATTR...`, and an empty line after each
//! sequence. An attribute may carry a weight as `name:weight`, so `:` and `\`
//! inside attribute names are escaped as `\:` and `\\`. Tabs and line breaks
//! in labels or attributes are written as `\t`, `\n` and `\r`.

use std::io::Write;

use crate::crf::trainer::{SequenceInstance, Trainable};
use crate::error::{Error, Result};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ':' => out.push_str("\\:"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescaped(c: char) -> char {
    match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        c => c,
    }
}

/// Reverses [`escape`] for a field without a weight, such as a label.
pub fn unescape(field: &str) -> Result<String> {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(c) => out.push(unescaped(c)),
                None => return Err(Error::InvalidLine(field.to_string())),
            },
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Splits an attribute field into its unescaped name and weight (1.0 when
/// absent).
pub fn parse_attribute(field: &str) -> Result<(String, f64)> {
    let mut name = String::with_capacity(field.len());
    let mut chars = field.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, c)) => name.push(unescaped(c)),
                None => return Err(Error::InvalidLine(field.to_string())),
            },
            ':' => {
                let weight = field[i + 1..]
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidLine(field.to_string()))?;
                return Ok((name, weight));
            }
            c => name.push(c),
        }
    }
    Ok((name, 1.0))
}

/// Writes training instances as CRFsuite data.
#[derive(Debug)]
pub struct CrfSuiteWriter<W: Write> {
    out: W,
    sequences: usize,
    items: usize,
}

impl<W: Write> CrfSuiteWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sequences: 0, items: 0 }
    }

    pub fn sequences(&self) -> usize {
        self.sequences
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Trainable for CrfSuiteWriter<W> {
    fn train_on(&mut self, instance: SequenceInstance) -> Result<()> {
        if instance.is_empty() {
            return Ok(());
        }
        for (item, label) in instance.iter() {
            self.out.write_all(escape(label).as_bytes())?;
            for feature in item {
                write!(self.out, "\t{}", escape(&feature.to_string()))?;
            }
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(b"\n")?;
        self.sequences += 1;
        self.items += instance.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        log::info!("wrote {} sequences, {} items", self.sequences, self.items);
        Ok(())
    }
}
