//! Transcript entity

use super::entities::Turn;
use super::seed::seed_pair;

/// Ordered, append-only history of one chat session.
///
/// Insertion order is conversation order. There is no way to edit or remove
/// a turn once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Number of turns a fresh transcript starts with.
    pub const SEED_LEN: usize = 2;

    /// Create a transcript holding only the seed pair.
    pub fn seeded() -> Self {
        Self {
            turns: seed_pair().into(),
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns after the seed pair.
    pub fn conversation(&self) -> &[Turn] {
        &self.turns[Self::SEED_LEN.min(self.turns.len())..]
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Role;
    use crate::conversation::seed::{SEED_ACKNOWLEDGEMENT, SEED_INSTRUCTION};

    #[test]
    fn seeded_transcript_holds_seed_pair() {
        let transcript = Transcript::seeded();
        assert_eq!(transcript.len(), Transcript::SEED_LEN);
        assert_eq!(transcript.turns()[0].role(), Role::User);
        assert_eq!(transcript.turns()[0].content(), SEED_INSTRUCTION);
        assert_eq!(transcript.turns()[1].role(), Role::Model);
        assert_eq!(transcript.turns()[1].content(), SEED_ACKNOWLEDGEMENT);
        assert!(transcript.conversation().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::seeded();
        transcript.append(Turn::user("pancakes?"));
        transcript.append(Turn::model("Flour, eggs, milk."));

        let conversation: Vec<_> = transcript.conversation().iter().map(Turn::content).collect();
        assert_eq!(conversation, vec!["pancakes?", "Flour, eggs, milk."]);
        assert_eq!(transcript.last().unwrap().role(), Role::Model);
    }

    #[test]
    fn earlier_turns_survive_later_appends() {
        let mut transcript = Transcript::seeded();
        transcript.append(Turn::user("first"));
        let snapshot = transcript.turns().to_vec();

        transcript.append(Turn::model("reply"));
        transcript.append(Turn::user("second"));

        assert_eq!(&transcript.turns()[..snapshot.len()], snapshot.as_slice());
    }
}
