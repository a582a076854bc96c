use crate::word_pair::WordPair;
use std::collections::HashSet;

/// Pairs the user has saved, in the order they were saved.
#[derive(Debug, Default, Clone)]
pub struct Favorites {
    members: HashSet<WordPair>,
    order: Vec<WordPair>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `pair` if absent, removes it if present. Returns whether it is
    /// saved afterwards.
    pub fn toggle(&mut self, pair: &WordPair) -> bool {
        if self.members.remove(pair) {
            self.order.retain(|p| p != pair);
            false
        } else {
            self.members.insert(pair.clone());
            self.order.push(pair.clone());
            true
        }
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.members.contains(pair)
    }

    pub fn all(&self) -> &[WordPair] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
