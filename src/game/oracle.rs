//! Hidden sequence ownership, generation and scoring.

use super::{Feedback, FeedbackMark, Sequence};
use crate::constants::{MAX_SYMBOL, MIN_SYMBOL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Score `guess` against `hidden`.
///
/// A position whose guessed symbol does not occur anywhere in `hidden` gets no
/// mark. Otherwise it is compared only with `hidden` at the same position:
/// equal is `Exact`, different is `Present`. Repeated symbols are not
/// reconciled against each other, so a guess with duplicates can collect more
/// `Present` marks than classic peg scoring would give.
pub fn calculate_feedback(guess: &Sequence, hidden: &Sequence) -> Feedback {
    let marks = guess
        .symbols()
        .iter()
        .zip(hidden.symbols())
        .filter(|(g, _)| hidden.contains(**g))
        .map(|(g, h)| {
            if g == h {
                FeedbackMark::Exact
            } else {
                FeedbackMark::Present
            }
        })
        .collect();

    Feedback::from_marks(marks)
}

/// Owns the hidden sequence and the generator that produces it.
#[derive(Debug, Clone)]
pub struct SequenceOracle<R: Rng = StdRng> {
    rng: R,
    hidden: Sequence,
}

impl SequenceOracle<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SequenceOracle<R> {
    /// Create an oracle and draw its first hidden sequence.
    pub fn new(mut rng: R) -> Self {
        let hidden = random_sequence(&mut rng);
        Self { rng, hidden }
    }

    /// Create an oracle with a known hidden sequence, for scripted rounds.
    ///
    /// The generator is still used by later calls to `generate_sequence`.
    pub fn with_hidden(rng: R, hidden: Sequence) -> Self {
        Self { rng, hidden }
    }

    /// Replace the hidden sequence with a fresh uniform draw.
    pub fn generate_sequence(&mut self) {
        self.hidden = random_sequence(&mut self.rng);
    }

    pub fn evaluate_guess(&self, guess: &Sequence) -> Feedback {
        calculate_feedback(guess, &self.hidden)
    }

    pub fn check_win_state(&self, guess: &Sequence) -> bool {
        self.evaluate_guess(guess).is_win()
    }

    pub fn reveal_sequence(&self) -> String {
        self.hidden.to_reveal_string()
    }
}

fn random_sequence<R: Rng>(rng: &mut R) -> Sequence {
    Sequence(std::array::from_fn(|_| {
        rng.gen_range(MIN_SYMBOL..=MAX_SYMBOL)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEQUENCE_LENGTH;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn seq(values: [u8; 4]) -> Sequence {
        Sequence::new(values).unwrap()
    }

    fn oracle_with(hidden: [u8; 4]) -> SequenceOracle<ChaCha8Rng> {
        SequenceOracle::with_hidden(seeded_rng(), seq(hidden))
    }

    #[test]
    fn test_generate_sequence_in_range() {
        let mut oracle = SequenceOracle::new(seeded_rng());
        for _ in 0..200 {
            oracle.generate_sequence();
            assert_eq!(oracle.hidden.symbols().len(), SEQUENCE_LENGTH);
            assert!(oracle
                .hidden
                .symbols()
                .iter()
                .all(|&s| (MIN_SYMBOL..=MAX_SYMBOL).contains(&s)));
        }
    }

    #[test]
    fn test_generate_sequence_covers_all_symbols() {
        let mut oracle = SequenceOracle::new(seeded_rng());
        let mut seen = [false; 7];
        for _ in 0..200 {
            oracle.generate_sequence();
            for &s in oracle.hidden.symbols() {
                seen[s as usize] = true;
            }
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&b| b));
    }

    #[test]
    fn test_generate_sequence_is_reproducible_from_seed() {
        let mut a = SequenceOracle::new(seeded_rng());
        let mut b = SequenceOracle::new(seeded_rng());
        for _ in 0..10 {
            assert_eq!(a.hidden, b.hidden);
            a.generate_sequence();
            b.generate_sequence();
        }
    }

    #[test]
    fn test_generate_sequence_replaces_hidden() {
        let mut oracle = oracle_with([1, 1, 1, 1]);
        let mut changed = false;
        for _ in 0..20 {
            oracle.generate_sequence();
            if oracle.hidden != seq([1, 1, 1, 1]) {
                changed = true;
                break;
            }
        }
        assert!(changed);
    }

    #[test]
    fn test_feedback_all_exact() {
        let oracle = oracle_with([3, 1, 4, 1]);
        let feedback = oracle.evaluate_guess(&seq([3, 1, 4, 1]));
        assert_eq!(feedback.marks(), &[FeedbackMark::Exact; 4]);
        assert!(oracle.check_win_state(&seq([3, 1, 4, 1])));
    }

    #[test]
    fn test_feedback_no_symbols_present() {
        let oracle = oracle_with([1, 2, 3, 4]);
        let feedback = oracle.evaluate_guess(&seq([5, 6, 5, 6]));
        assert!(feedback.is_empty());
        assert!(!oracle.check_win_state(&seq([5, 6, 5, 6])));
    }

    #[test]
    fn test_feedback_all_present() {
        let oracle = oracle_with([1, 2, 3, 4]);
        let feedback = oracle.evaluate_guess(&seq([4, 3, 2, 1]));
        assert_eq!(feedback.marks(), &[FeedbackMark::Present; 4]);
    }

    #[test]
    fn test_feedback_absent_positions_dropped() {
        let oracle = oracle_with([1, 2, 3, 4]);
        let feedback = oracle.evaluate_guess(&seq([1, 6, 2, 5]));
        assert_eq!(
            feedback.marks(),
            &[FeedbackMark::Exact, FeedbackMark::Present]
        );
    }

    #[test]
    fn test_feedback_sorted_exact_first() {
        let oracle = oracle_with([1, 2, 3, 4]);
        let feedback = oracle.evaluate_guess(&seq([2, 1, 3, 4]));
        assert_eq!(
            feedback.marks(),
            &[
                FeedbackMark::Exact,
                FeedbackMark::Exact,
                FeedbackMark::Present,
                FeedbackMark::Present,
            ]
        );
    }

    #[test]
    fn test_feedback_duplicate_quirk_overcounts_present() {
        // Only one 4 left unmatched in the hidden sequence, but every guessed 4
        // off its position is marked Present.
        let oracle = oracle_with([2, 4, 4, 6]);
        let feedback = oracle.evaluate_guess(&seq([4, 2, 4, 4]));
        assert_eq!(
            feedback.marks(),
            &[
                FeedbackMark::Exact,
                FeedbackMark::Present,
                FeedbackMark::Present,
                FeedbackMark::Present,
            ]
        );
        assert!(!oracle.check_win_state(&seq([4, 2, 4, 4])));
    }

    #[test]
    fn test_feedback_duplicate_quirk_single_hidden_symbol() {
        // Classic scoring would give one Exact; here every 5 is marked.
        let oracle = oracle_with([5, 1, 2, 3]);
        let feedback = oracle.evaluate_guess(&seq([5, 5, 5, 5]));
        assert_eq!(feedback.exact_count(), 1);
        assert_eq!(feedback.present_count(), 3);
    }

    #[test]
    fn test_feedback_is_deterministic() {
        let oracle = oracle_with([6, 5, 4, 3]);
        let guess = seq([3, 5, 1, 6]);
        let first = oracle.evaluate_guess(&guess);
        for _ in 0..10 {
            assert_eq!(oracle.evaluate_guess(&guess), first);
        }
    }

    #[test]
    fn test_feedback_exhaustive_properties() {
        // Every guess against a few fixed hidden sequences.
        let hiddens = [[1, 1, 1, 1], [2, 4, 4, 6], [1, 2, 3, 4], [6, 6, 5, 1]];
        for hidden in hiddens {
            let hidden = seq(hidden);
            for code in 0..6u32.pow(4) {
                let mut values = [0u8; 4];
                let mut rest = code;
                for v in values.iter_mut() {
                    *v = (rest % 6) as u8 + 1;
                    rest /= 6;
                }
                let guess = seq(values);
                let feedback = calculate_feedback(&guess, &hidden);

                assert!(feedback.len() <= SEQUENCE_LENGTH);
                let first_present = feedback
                    .marks()
                    .iter()
                    .position(|m| *m == FeedbackMark::Present)
                    .unwrap_or(feedback.len());
                assert!(feedback.marks()[first_present..]
                    .iter()
                    .all(|m| *m == FeedbackMark::Present));

                let expected_len = values.iter().filter(|v| hidden.contains(**v)).count();
                assert_eq!(feedback.len(), expected_len);
                assert_eq!(feedback.is_win(), guess == hidden);
            }
        }
    }

    #[test]
    fn test_reveal_sequence() {
        let oracle = oracle_with([2, 4, 4, 6]);
        assert_eq!(oracle.reveal_sequence(), "2, 4, 4, 6");
    }

    #[test]
    fn test_seeded_oracle_is_reproducible() {
        let a = SequenceOracle::seeded(7);
        let b = SequenceOracle::seeded(7);
        assert_eq!(a.reveal_sequence(), b.reveal_sequence());
    }
}
