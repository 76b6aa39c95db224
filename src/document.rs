//! In-memory annotation store: a document text with sentence and token spans.
//!
//! Tokens do not own their text; the surface text of a token is whatever its
//! span covers in the document. A span that does not resolve (out of range,
//! inverted, or not on a character boundary) leaves the token without text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Half-open byte range `[begin, end)` over the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span: Span,
    /// Gold part-of-speech tag, present in training data only.
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    predicted: Option<String>,
}

impl Token {
    pub fn new(span: Span) -> Self {
        Self { span, pos: None, predicted: None }
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn predicted(&self) -> Option<&str> {
        self.predicted.as_deref()
    }

    pub fn set_predicted(&mut self, tag: impl Into<String>) {
        self.predicted = Some(tag.into());
    }

    pub fn clear_predicted(&mut self) {
        self.predicted = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sentence {
    pub span: Span,
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(span: Span) -> Self {
        Self { span, tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    id: String,
    text: String,
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_text(id, String::new())
    }

    pub fn with_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), sentences: Vec::new() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Appends an already annotated sentence; its spans refer to [`Document::text`].
    pub fn push_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn covered_text(&self, span: Span) -> Option<&str> {
        if span.begin > span.end {
            return None;
        }
        self.text.get(span.begin..span.end)
    }

    /// Appends `words` to the text, separated by single spaces, as a new sentence.
    /// Sentences are separated by a newline.
    pub fn push_words<S: AsRef<str>>(&mut self, words: &[S]) -> &mut Sentence {
        self.push_annotated(words.iter().map(|w| (w.as_ref(), None)))
    }

    /// Like [`Document::push_words`], with a gold tag for every word.
    pub fn push_tagged<W: AsRef<str>, T: AsRef<str>>(&mut self, words: &[(W, T)]) -> &mut Sentence {
        self.push_annotated(words.iter().map(|(w, t)| (w.as_ref(), Some(t.as_ref()))))
    }

    fn push_annotated<'w>(
        &mut self,
        words: impl Iterator<Item = (&'w str, Option<&'w str>)>,
    ) -> &mut Sentence {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        let begin = self.text.len();
        let mut tokens = Vec::new();
        for (word, tag) in words {
            if !tokens.is_empty() {
                self.text.push(' ');
            }
            let span = Span::new(self.text.len(), self.text.len() + word.len());
            self.text.push_str(word);
            let token = Token::new(span);
            tokens.push(match tag {
                Some(tag) => token.with_pos(tag),
                None => token,
            });
        }
        self.sentences.push(Sentence { span: Span::new(begin, self.text.len()), tokens });
        let last = self.sentences.len() - 1;
        &mut self.sentences[last]
    }

    /// Resolves the surface text of every token of sentence `index`, in order.
    ///
    /// Fails on the first token that has no text, lies outside the sentence,
    /// or overlaps its predecessor.
    pub fn token_texts(&self, index: usize) -> Result<Vec<&str>> {
        let sentence = self.sentences.get(index).ok_or_else(|| Error::MalformedInput {
            document: self.id.clone(),
            sentence: index,
            token: 0,
            reason: "no such sentence".to_string(),
        })?;
        let mut texts = Vec::with_capacity(sentence.len());
        let mut prev_end = sentence.span.begin;
        for (t, token) in sentence.tokens.iter().enumerate() {
            let malformed = |reason: &str| Error::MalformedInput {
                document: self.id.clone(),
                sentence: index,
                token: t,
                reason: reason.to_string(),
            };
            if !sentence.span.contains(&token.span) {
                return Err(malformed("token lies outside its sentence"));
            }
            if token.span.begin < prev_end {
                return Err(malformed("token overlaps its predecessor"));
            }
            let text = self
                .covered_text(token.span)
                .ok_or_else(|| malformed("token has no surface text"))?;
            texts.push(text);
            prev_end = token.span.end;
        }
        Ok(texts)
    }
}
