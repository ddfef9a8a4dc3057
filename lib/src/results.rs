/// The verdict for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The letter is in the answer at this exact position.
    Correct,
    /// The letter occurs in the answer, but not at this position.
    WrongPosition,
    /// The letter does not occur in the answer.
    NotExist,
}

/// One guess along with its per-position verdicts.
///
/// `verdicts` is in the same letter order as `guess`.
#[derive(Debug, PartialEq, Eq)]
pub struct GuessOutcome<'a> {
    pub guess: &'a str,
    pub verdicts: Vec<Verdict>,
}

/// How a single simulated game ended.
#[derive(Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The answer was found; carries every guess made, in order.
    Solved(Vec<Box<str>>),
    /// The candidate list became empty before the answer was found. This
    /// means the constraints are contradictory or the answer is missing from
    /// the corpus; carries the guesses made before the game was abandoned.
    OutOfCandidates(Vec<Box<str>>),
}

impl GameResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, GameResult::Solved(_))
    }

    /// The number of guesses made before the game ended.
    pub fn attempts(&self) -> u32 {
        match self {
            GameResult::Solved(guesses) | GameResult::OutOfCandidates(guesses) => {
                guesses.len() as u32
            }
        }
    }
}

/// Determines the verdict for each letter of `guess` against `answer`.
///
/// A letter is `Correct` if it matches the answer at the same position, and
/// otherwise `WrongPosition` if it occurs anywhere in the answer.
///
/// Note this membership check ignores multiplicities: a letter that occurs
/// once in the answer but twice in the guess can earn position credit twice,
/// where the canonical rules would mark the extra occurrence `NotExist`. Use
/// [`strict_verdicts_for_guess`] for the canonical behavior.
///
/// # Panics
///
/// Panics if `guess` and `answer` have different lengths.
pub fn verdicts_for_guess(guess: &str, answer: &str) -> Vec<Verdict> {
    assert_eq!(
        guess.len(),
        answer.len(),
        "guess ({}) must have the same length as the answer ({})",
        guess,
        answer
    );
    guess
        .char_indices()
        .map(|(index, letter)| {
            if answer.chars().nth(index) == Some(letter) {
                Verdict::Correct
            } else if answer.contains(letter) {
                Verdict::WrongPosition
            } else {
                Verdict::NotExist
            }
        })
        .collect()
}

/// Determines verdicts with duplicate letters capped at the number of
/// unmatched occurrences in the answer, as in the canonical puzzle rules.
///
/// # Panics
///
/// Panics if `guess` and `answer` have different lengths, or if either
/// contains non-ASCII-alphabetic characters.
pub fn strict_verdicts_for_guess(guess: &str, answer: &str) -> Vec<Verdict> {
    assert_eq!(
        guess.len(),
        answer.len(),
        "guess ({}) must have the same length as the answer ({})",
        guess,
        answer
    );
    let guess_bytes = guess.as_bytes();
    let answer_bytes = answer.as_bytes();

    let mut verdicts = vec![Verdict::NotExist; guess_bytes.len()];
    let mut remaining = [0u8; 26];
    for (index, letter) in answer_bytes.iter().enumerate() {
        if guess_bytes[index] == *letter {
            verdicts[index] = Verdict::Correct;
        } else {
            remaining[letter_index(*letter)] += 1;
        }
    }
    for (index, letter) in guess_bytes.iter().enumerate() {
        if verdicts[index] == Verdict::Correct {
            continue;
        }
        let slot = &mut remaining[letter_index(*letter)];
        if *slot > 0 {
            verdicts[index] = Verdict::WrongPosition;
            *slot -= 1;
        }
    }
    verdicts
}

fn letter_index(letter: u8) -> usize {
    let index = letter.to_ascii_lowercase().wrapping_sub(b'a') as usize;
    assert!(index < 26, "letter {:?} is not alphabetic", letter as char);
    index
}
