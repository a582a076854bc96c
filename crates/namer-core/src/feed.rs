//! The endless suggestion list.

use crate::error::{NamerError, Result};
use crate::generator::WordPairSource;
use crate::word_pair::WordPair;
use tracing::debug;

/// Pairs appended per extension.
pub const BATCH_SIZE: usize = 10;

/// Append-only sequence of suggestions that grows in batches on demand.
///
/// Items are never reordered or replaced, so an index always yields the
/// pair it yielded the first time it was requested.
pub struct SuggestionFeed<S> {
    source: S,
    items: Vec<WordPair>,
}

impl<S: WordPairSource> SuggestionFeed<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
        }
    }

    /// Returns the pair at `index`, generating batches until it exists.
    pub fn item_at(&mut self, index: usize) -> Result<&WordPair> {
        while index >= self.items.len() {
            self.extend()?;
        }
        Ok(&self.items[index])
    }

    fn extend(&mut self) -> Result<()> {
        let batch = self.source.generate(BATCH_SIZE)?;
        if batch.len() != BATCH_SIZE {
            return Err(NamerError::GeneratorExhausted {
                requested: BATCH_SIZE,
                produced: batch.len(),
                attempts: 1,
            });
        }
        self.items.extend(batch);
        debug!(len = self.items.len(), "suggestion feed extended");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[WordPair] {
        &self.items
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.items.contains(pair)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generator::RandomWordPairs;

    /// Numbered pairs ("word0", "pair0"), ... so positions are easy to check.
    pub(crate) struct CountingSource {
        pub(crate) next: usize,
        pub(crate) calls: usize,
    }

    impl CountingSource {
        pub(crate) fn new() -> Self {
            Self { next: 0, calls: 0 }
        }
    }

    impl WordPairSource for CountingSource {
        fn generate(&mut self, count: usize) -> Result<Vec<WordPair>> {
            self.calls += 1;
            let pairs = (self.next..self.next + count)
                .map(|n| WordPair::new(format!("word{n}"), format!("pair{n}")))
                .collect();
            self.next += count;
            pairs
        }
    }

    struct ShortSource;

    impl WordPairSource for ShortSource {
        fn generate(&mut self, count: usize) -> Result<Vec<WordPair>> {
            Ok((0..count / 2)
                .map(|n| WordPair::new("half", format!("batch{n}")).unwrap())
                .collect())
        }
    }

    #[test]
    fn test_starts_empty() {
        let feed = SuggestionFeed::new(CountingSource::new());
        assert!(feed.is_empty());
        assert_eq!(feed.len(), 0);
    }

    #[test]
    fn test_grows_one_batch_at_a_time() {
        let mut feed = SuggestionFeed::new(CountingSource::new());

        assert_eq!(feed.item_at(0).unwrap().first(), "word0");
        assert_eq!(feed.len(), 10);

        assert_eq!(feed.item_at(9).unwrap().first(), "word9");
        assert_eq!(feed.len(), 10);

        assert_eq!(feed.item_at(10).unwrap().first(), "word10");
        assert_eq!(feed.len(), 20);
        assert_eq!(feed.source.calls, 2);
    }

    #[test]
    fn test_far_index_fills_every_batch_before_it() {
        let mut feed = SuggestionFeed::new(CountingSource::new());
        assert_eq!(feed.item_at(35).unwrap().second(), "pair35");
        assert_eq!(feed.len(), 40);
        assert_eq!(feed.source.calls, 4);
    }

    #[test]
    fn test_length_is_batch_multiple_past_index() {
        let mut feed = SuggestionFeed::new(RandomWordPairs::seeded(11));
        for k in [0, 3, 9, 10, 17, 42, 99, 100] {
            feed.item_at(k).unwrap();
            assert!(feed.len() > k);
            assert_eq!(feed.len() % BATCH_SIZE, 0);
        }
    }

    #[test]
    fn test_returned_items_never_change() {
        let mut feed = SuggestionFeed::new(RandomWordPairs::seeded(5));
        let mut seen = Vec::new();
        for k in 0..60 {
            seen.push(feed.item_at(k).unwrap().clone());
            for (j, pair) in seen.iter().enumerate() {
                assert_eq!(feed.item_at(j).unwrap(), pair);
            }
        }
    }

    #[test]
    fn test_short_batch_is_an_error() {
        let mut feed = SuggestionFeed::new(ShortSource);
        assert!(matches!(
            feed.item_at(0),
            Err(NamerError::GeneratorExhausted { produced: 5, .. })
        ));
        assert!(feed.is_empty());
    }

    #[test]
    fn test_generator_failure_propagates() {
        let mut feed = SuggestionFeed::new(RandomWordPairs::seeded(2).with_max_syllables(0));
        assert!(matches!(
            feed.item_at(0),
            Err(NamerError::GeneratorExhausted { .. })
        ));
    }
}
