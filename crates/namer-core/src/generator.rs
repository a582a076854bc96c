//! Word-pair generation.
//!
//! The feed only depends on [`WordPairSource`]; [`RandomWordPairs`] is the
//! default source, drawing from the embedded lists in [`crate::words`].

use crate::error::{NamerError, Result};
use crate::word_pair::WordPair;
use crate::words::{ADJECTIVES, NOUNS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MAX_SYLLABLES: usize = 2;

/// Every word counts at least one syllable, so no pair fits below this.
pub const MIN_MAX_SYLLABLES: usize = 2;

/// Draws allowed per requested pair before the source gives up.
const MAX_DRAWS_PER_PAIR: usize = 100;

/// Anything that can hand out a batch of word pairs on request.
///
/// Every call is an independent draw: a source has no notion of position.
pub trait WordPairSource {
    fn generate(&mut self, count: usize) -> Result<Vec<WordPair>>;
}

/// Random pairs: an adjective or noun followed by a noun.
pub struct RandomWordPairs {
    rng: StdRng,
    max_syllables: usize,
}

impl RandomWordPairs {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Same seed, same sequence of batches.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            max_syllables: DEFAULT_MAX_SYLLABLES,
        }
    }

    pub fn with_max_syllables(mut self, max_syllables: usize) -> Self {
        self.max_syllables = max_syllables;
        self
    }

    fn draw(&mut self) -> Option<(&'static str, &'static str)> {
        let prefix_pool = ADJECTIVES.len() + NOUNS.len();
        if prefix_pool == 0 || NOUNS.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..prefix_pool);
        let prefix = if pick < ADJECTIVES.len() {
            ADJECTIVES[pick]
        } else {
            NOUNS[pick - ADJECTIVES.len()]
        };
        let suffix = NOUNS[self.rng.gen_range(0..NOUNS.len())];
        Some((prefix, suffix))
    }

    fn acceptable(&self, prefix: &str, suffix: &str) -> bool {
        prefix != suffix && syllables(prefix) + syllables(suffix) <= self.max_syllables
    }
}

impl Default for RandomWordPairs {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPairSource for RandomWordPairs {
    fn generate(&mut self, count: usize) -> Result<Vec<WordPair>> {
        let mut pairs = Vec::with_capacity(count);
        let budget = count.saturating_mul(MAX_DRAWS_PER_PAIR);
        let mut attempts = 0;

        while pairs.len() < count && attempts < budget {
            attempts += 1;
            let Some((prefix, suffix)) = self.draw() else {
                break;
            };
            if self.acceptable(prefix, suffix) {
                pairs.push(WordPair::new(prefix, suffix)?);
            }
        }

        if pairs.len() < count {
            return Err(NamerError::GeneratorExhausted {
                requested: count,
                produced: pairs.len(),
                attempts,
            });
        }
        Ok(pairs)
    }
}

/// Rough English syllable count: vowel groups, minus a silent trailing "e".
pub fn syllables(word: &str) -> usize {
    let word = word.to_ascii_lowercase();
    let mut count = 0;
    let mut in_vowel_group = false;
    for (i, c) in word.chars().enumerate() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') || (c == 'y' && i > 0);
        if vowel && !in_vowel_group {
            count += 1;
        }
        in_vowel_group = vowel;
    }
    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}
