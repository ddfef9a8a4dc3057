use std::collections::HashSet;
use std::iter::zip;

use crate::results::{GuessOutcome, Verdict};

/// The knowledge accumulated from feedback over one game.
///
/// Created empty at the start of a game, updated once per round via
/// [`WordConstraints::update`], and discarded when the game ends. The
/// following invariants hold after every update:
///
/// * A letter confirmed at position `i` is never also in the misplaced set
///   for `i`, nor in the absent set.
/// * `required` contains every letter that has produced a `Correct` or
///   `WrongPosition` verdict.
/// * A letter in `required` is never added to `absent`, regardless of the
///   order verdicts arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordConstraints {
    word_len: usize,
    /// Letters confirmed at their exact position.
    correct: Vec<Option<char>>,
    /// Per position, letters known to be in the answer but not here.
    misplaced: Vec<HashSet<char>>,
    /// Letters confirmed to occur somewhere in the answer.
    required: HashSet<char>,
    /// Letters confirmed to be absent from the answer entirely.
    absent: HashSet<char>,
}

impl WordConstraints {
    /// Creates empty constraints for words of the given length.
    pub fn new(word_len: usize) -> WordConstraints {
        WordConstraints {
            word_len,
            correct: vec![None; word_len],
            misplaced: vec![HashSet::new(); word_len],
            required: HashSet::new(),
            absent: HashSet::new(),
        }
    }

    /// Applies one round of feedback. Returns `true` iff the answer is now
    /// fully determined, i.e. every position has a confirmed letter.
    ///
    /// Applying the same outcome twice is a no-op after the first time.
    pub fn update(&mut self, outcome: &GuessOutcome) -> bool {
        for ((index, letter), verdict) in zip(outcome.guess.char_indices(), &outcome.verdicts) {
            match verdict {
                Verdict::Correct => {
                    self.correct[index] = Some(letter);
                    self.required.insert(letter);
                    self.misplaced[index].remove(&letter);
                    self.absent.remove(&letter);
                }
                Verdict::WrongPosition => {
                    self.misplaced[index].insert(letter);
                    self.required.insert(letter);
                    self.absent.remove(&letter);
                }
                Verdict::NotExist => {
                    // A letter already confirmed present stays present.
                    if !self.required.contains(&letter) {
                        self.absent.insert(letter);
                    }
                }
            }
        }
        self.is_solved()
    }

    /// Whether every position has a confirmed letter.
    pub fn is_solved(&self) -> bool {
        self.correct.iter().all(Option::is_some)
    }

    /// Returns `true` iff `word` could still be the answer.
    ///
    /// Pure; the constraints are unchanged. Words of the wrong length are
    /// never candidates.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        if word.len() != self.word_len {
            return false;
        }
        if !self.required.iter().all(|letter| word.contains(*letter)) {
            return false;
        }
        for (index, letter) in word.char_indices() {
            if self.absent.contains(&letter) {
                return false;
            }
            if self.misplaced[index].contains(&letter) {
                return false;
            }
            if let Some(confirmed) = self.correct[index] {
                if confirmed != letter {
                    return false;
                }
            }
        }
        true
    }

    /// The letter confirmed at the given position, if any.
    pub fn correct_at(&self, index: usize) -> Option<char> {
        self.correct[index]
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }
}
