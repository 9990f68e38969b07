//! Score consistency invariant: the score replays from the word list.

use super::super::SessionState;
use super::super::rules::leftover_letters;
use super::Invariant;

/// Invariant: the score equals the scoring rules replayed over accepted words.
///
/// Words are replayed oldest first so milestone bonuses land on the same
/// words they were originally awarded to.
pub struct ScoreConsistentInvariant;

impl Invariant<SessionState> for ScoreConsistentInvariant {
    fn holds(state: &SessionState) -> bool {
        let replayed = state
            .words_in_play_order()
            .enumerate()
            .map(|(i, word)| {
                let uses_every_letter = leftover_letters(word, state.root_word())
                    .map(|left| left.is_empty())
                    .unwrap_or(false);
                state
                    .rules()
                    .award(word.letter_count(), i + 1, uses_every_letter)
                    .total()
            })
            .fold(0u32, u32::saturating_add);
        replayed == *state.score()
    }

    fn description() -> &'static str {
        "Score matches a replay of the accepted words"
    }
}
