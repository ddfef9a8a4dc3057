use crate::constraints::WordConstraints;
use crate::data::Word;

/// Selects the next guess from the remaining candidates.
///
/// `candidates` is ordered by descending corpus frequency and must already
/// be filtered against `constraints`. Implementations return `None` only if
/// the candidate list is empty; otherwise the selection is a member of
/// `candidates`, and equal inputs always produce the same selection.
pub trait GuessStrategy: Sync {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &WordConstraints,
    ) -> Option<&'a Word>;
}

/// Guesses the first remaining candidate.
///
/// Since candidates preserve the corpus's descending-frequency order, this
/// is the highest-frequency word that could still be the answer.
pub struct ImmediateStrategy;

impl GuessStrategy for ImmediateStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        _constraints: &WordConstraints,
    ) -> Option<&'a Word> {
        candidates.first().copied()
    }
}

/// Guesses the candidate that shares the most positional letters with the
/// other candidates.
///
/// For every position whose letter is not yet confirmed, it counts how many
/// candidates have each letter there, then scores each candidate as the sum
/// of those counts for its own letters. Ties go to the earliest candidate,
/// i.e. the most frequent one.
pub struct MaxSimilarityStrategy;

impl GuessStrategy for MaxSimilarityStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &WordConstraints,
    ) -> Option<&'a Word> {
        let word_len = constraints.word_len();
        let mut occurrences = vec![[0u32; 26]; word_len];
        for word in candidates {
            for (index, letter) in word.text.bytes().enumerate().take(word_len) {
                if constraints.correct_at(index).is_none() {
                    occurrences[index][letter_index(letter)] += 1;
                }
            }
        }

        let mut best: Option<(&'a Word, u32)> = None;
        for &word in candidates {
            let score: u32 = word
                .text
                .bytes()
                .enumerate()
                .take(word_len)
                .filter(|(index, _)| constraints.correct_at(*index).is_none())
                .map(|(index, letter)| occurrences[index][letter_index(letter)])
                .sum();
            // Strict comparison keeps the first candidate on ties.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        best.map(|(word, _)| word)
    }
}

fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}
