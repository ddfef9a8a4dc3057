use std::collections::HashSet;
use std::io::BufRead;

use thiserror::Error;

/// An error that prevents the corpus from being used at all.
///
/// Individual malformed lines are not errors; they are skipped during
/// loading. See [`Corpus::from_reader`].
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus contains no usable entries")]
    Empty,
}

/// A word along with how frequently it occurs in written text.
///
/// Immutable once loaded into a [`Corpus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: Box<str>,
    pub frequency: u64,
}

impl Word {
    pub fn new(text: impl Into<Box<str>>, frequency: u64) -> Word {
        Word {
            text: text.into(),
            frequency,
        }
    }
}

/// The full vocabulary for a simulation, ordered by descending frequency.
///
/// The order is meaningful: strategies treat "first candidate" as "most
/// frequent remaining word", and it is the tie-break for scored selection.
pub struct Corpus {
    words: Vec<Word>,
    word_len: usize,
}

impl Corpus {
    /// Reads a corpus from lines of the form `<frequency><whitespace><word>`.
    ///
    /// Fields are separated by runs of tabs or spaces, and each line is
    /// lowercased before parsing. A line is skipped if the frequency does not
    /// parse as an unsigned integer, or if the word is not exactly
    /// `word_len` alphabetic characters. Duplicate words keep their highest
    /// frequency entry.
    pub fn from_reader<R: BufRead>(reader: &mut R, word_len: usize) -> Result<Corpus, CorpusError> {
        let mut words = Vec::new();
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            match parse_line(&line, word_len) {
                Some(word) => words.push(word),
                None => {
                    if !line.trim().is_empty() {
                        log::debug!("skipping malformed corpus line: {:?}", line);
                    }
                }
            }
        }
        Self::from_words(words, word_len)
    }

    /// Builds a corpus from `(text, frequency)` pairs, applying the same
    /// validation, ordering and deduplication as [`Corpus::from_reader`].
    pub fn from_entries<S, I>(entries: I, word_len: usize) -> Result<Corpus, CorpusError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, u64)>,
    {
        let words = entries
            .into_iter()
            .filter_map(|(text, frequency)| {
                let text = text.as_ref().to_lowercase();
                if is_valid_word(&text, word_len) {
                    Some(Word::new(text, frequency))
                } else {
                    None
                }
            })
            .collect();
        Self::from_words(words, word_len)
    }

    fn from_words(mut words: Vec<Word>, word_len: usize) -> Result<Corpus, CorpusError> {
        // Stable sort: ties keep their input order.
        words.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        let mut seen: HashSet<Box<str>> = HashSet::with_capacity(words.len());
        words.retain(|word| seen.insert(word.text.clone()));
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Corpus { words, word_len })
    }

    /// The words in descending frequency order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The fixed word length this corpus was loaded for.
    pub fn word_len(&self) -> usize {
        self.word_len
    }
}

fn parse_line(line: &str, word_len: usize) -> Option<Word> {
    let line = line.to_lowercase();
    let mut fields = line.split_whitespace();
    let frequency = fields.next()?.parse::<u64>().ok()?;
    let text = fields.next()?;
    if !is_valid_word(text, word_len) {
        return None;
    }
    Some(Word::new(text, frequency))
}

fn is_valid_word(text: &str, word_len: usize) -> bool {
    text.len() == word_len && text.chars().all(|letter| letter.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(corpus: &Corpus) -> Vec<&str> {
        corpus.words().iter().map(|word| &*word.text).collect()
    }

    #[test]
    fn corpus_from_reader_sorts_by_descending_frequency() -> Result<(), CorpusError> {
        let mut cursor = Cursor::new(String::from("1\tapple\n10 crane\n9\tslate"));

        let corpus = Corpus::from_reader(&mut cursor, 5)?;

        assert_eq!(texts(&corpus), vec!["crane", "slate", "apple"]);
        assert_eq!(corpus.words()[0].frequency, 10);
        Ok(())
    }

    #[test]
    fn corpus_from_reader_lowercases_words() -> Result<(), CorpusError> {
        let mut cursor = Cursor::new(String::from("3 CRANE\n2 Slate"));

        let corpus = Corpus::from_reader(&mut cursor, 5)?;

        assert_eq!(texts(&corpus), vec!["crane", "slate"]);
        Ok(())
    }

    #[test]
    fn corpus_from_reader_skips_malformed_lines() -> Result<(), CorpusError> {
        let mut cursor = Cursor::new(String::from(
            "10 crane\n\
             oops slate\n\
             7 toolong\n\
             6 ab1de\n\
             5\n\
             \n\
             4 pride extra fields are fine\n\
             -3 vague\n",
        ));

        let corpus = Corpus::from_reader(&mut cursor, 5)?;

        assert_eq!(texts(&corpus), vec!["crane", "pride"]);
        Ok(())
    }

    #[test]
    fn corpus_from_reader_dedups_keeping_highest_frequency() -> Result<(), CorpusError> {
        let mut cursor = Cursor::new(String::from("2 crane\n9 slate\n8 crane"));

        let corpus = Corpus::from_reader(&mut cursor, 5)?;

        assert_eq!(texts(&corpus), vec!["slate", "crane"]);
        assert_eq!(corpus.words()[1].frequency, 8);
        Ok(())
    }

    #[test]
    fn corpus_from_reader_empty_is_an_error() {
        let mut cursor = Cursor::new(String::from("not a corpus\n"));

        assert!(matches!(
            Corpus::from_reader(&mut cursor, 5),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn corpus_from_entries_preserves_tie_order() -> Result<(), CorpusError> {
        let corpus = Corpus::from_entries(vec![("crane", 5), ("slate", 5), ("apple", 5)], 5)?;

        assert_eq!(texts(&corpus), vec!["crane", "slate", "apple"]);
        Ok(())
    }
}
