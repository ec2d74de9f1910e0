use itertools::Itertools;
use log::debug;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{affiliation::Affiliation, card::Card};

pub const BOARD_SIZE: usize = 25;
pub const BOARD_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("not enough words to fill the board: {found} distinct words, {required} required")]
    InsufficientWords { found: usize, required: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deals a board from `words`.
    ///
    /// Duplicates are dropped before sampling, so the pool needs at least
    /// [`BOARD_SIZE`] distinct words. The word sample and the affiliation
    /// shuffle are independent draws from `rng`.
    pub fn setup<S, R>(words: &[S], rng: &mut R) -> Result<Self, SetupError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut pool = words.iter().map(|w| w.as_ref()).unique().collect_vec();
        if pool.len() < BOARD_SIZE {
            return Err(SetupError::InsufficientWords {
                found: pool.len(),
                required: BOARD_SIZE,
            });
        }

        let (selected, _) = pool.partial_shuffle(rng, BOARD_SIZE);

        let mut key = Affiliation::key();
        key.shuffle(rng);

        let cards = selected
            .iter()
            .zip(key)
            .map(|(word, affiliation)| Card::new(word.to_string(), affiliation))
            .collect_vec();
        debug!("dealt board of {} cards from a pool of {}", cards.len(), pool.len());

        Ok(Board { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn count(&self, affiliation: Affiliation) -> usize {
        self.cards
            .iter()
            .filter(|c| c.affiliation() == affiliation)
            .count()
    }

    /// Unrevealed cards of the given affiliation.
    pub fn remaining(&self, affiliation: Affiliation) -> usize {
        self.cards
            .iter()
            .filter(|c| c.affiliation() == affiliation && !c.revealed())
            .count()
    }

    /// Position of the first hidden card whose word matches exactly.
    pub fn find_unrevealed(&self, word: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| !c.revealed() && c.word() == word)
    }

    /// Whether `word` names a hidden card, ignoring case.
    pub fn is_hidden_codename(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.cards
            .iter()
            .any(|c| !c.revealed() && c.word().to_lowercase() == word)
    }

    pub(crate) fn reveal(&mut self, index: usize) -> Option<&Card> {
        let card = self.cards.get_mut(index)?;
        if card.revealed() {
            return None;
        }
        card.reveal();
        Some(&*card)
    }
}
