//! View-model the presentation layer talks to.
//!
//! Owns the feed and the favorites as plain fields. Every mutation is
//! reported to subscribed observers so the UI can schedule a redraw.

use crate::error::{NamerError, Result};
use crate::favorites::Favorites;
use crate::feed::SuggestionFeed;
use crate::generator::WordPairSource;
use crate::word_pair::WordPair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamerEvent {
    /// The feed grew; `len` is its new length.
    FeedExtended { len: usize },
    FavoriteAdded(WordPair),
    FavoriteRemoved(WordPair),
}

type Observer = Box<dyn FnMut(&NamerEvent)>;

pub struct Namer<S> {
    feed: SuggestionFeed<S>,
    favorites: Favorites,
    observers: Vec<Observer>,
}

impl<S: WordPairSource> Namer<S> {
    pub fn new(source: S) -> Self {
        Self {
            feed: SuggestionFeed::new(source),
            favorites: Favorites::new(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&NamerEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn item_at(&mut self, index: usize) -> Result<&WordPair> {
        let before = self.feed.len();
        self.feed.item_at(index)?;
        let len = self.feed.len();
        if len > before {
            self.notify(&NamerEvent::FeedExtended { len });
        }
        Ok(&self.feed.items()[index])
    }

    /// Saves or unsaves `pair`. Only pairs the feed has produced can be
    /// saved; unsaving always succeeds.
    pub fn toggle_favorite(&mut self, pair: &WordPair) -> Result<bool> {
        if !self.favorites.contains(pair) && !self.feed.contains(pair) {
            return Err(NamerError::UnknownSuggestion(pair.to_string()));
        }
        let saved = self.favorites.toggle(pair);
        let event = if saved {
            NamerEvent::FavoriteAdded(pair.clone())
        } else {
            NamerEvent::FavoriteRemoved(pair.clone())
        };
        self.notify(&event);
        Ok(saved)
    }

    pub fn is_favorite(&self, pair: &WordPair) -> bool {
        self.favorites.contains(pair)
    }

    pub fn favorites(&self) -> &[WordPair] {
        self.favorites.all()
    }

    pub fn suggestion_count(&self) -> usize {
        self.feed.len()
    }

    fn notify(&mut self, event: &NamerEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::tests::CountingSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_namer() -> (Namer<CountingSource>, Rc<RefCell<Vec<NamerEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut namer = Namer::new(CountingSource::new());
        let sink = Rc::clone(&events);
        namer.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        (namer, events)
    }

    #[test]
    fn test_feed_growth_is_reported_once_per_extension() {
        let (mut namer, events) = recording_namer();
        namer.item_at(0).unwrap();
        namer.item_at(9).unwrap();
        namer.item_at(10).unwrap();
        assert_eq!(
            *events.borrow(),
            vec![
                NamerEvent::FeedExtended { len: 10 },
                NamerEvent::FeedExtended { len: 20 },
            ]
        );
    }

    #[test]
    fn test_toggle_reports_add_and_remove() {
        let (mut namer, events) = recording_namer();
        let pair = namer.item_at(3).unwrap().clone();
        events.borrow_mut().clear();

        assert!(namer.toggle_favorite(&pair).unwrap());
        assert!(namer.is_favorite(&pair));
        assert!(!namer.toggle_favorite(&pair).unwrap());
        assert!(!namer.is_favorite(&pair));

        assert_eq!(
            *events.borrow(),
            vec![
                NamerEvent::FavoriteAdded(pair.clone()),
                NamerEvent::FavoriteRemoved(pair),
            ]
        );
    }

    #[test]
    fn test_unknown_pair_cannot_be_saved() {
        let (mut namer, events) = recording_namer();
        namer.item_at(0).unwrap();
        events.borrow_mut().clear();

        let stranger = WordPair::new("never", "shown").unwrap();
        assert!(matches!(
            namer.toggle_favorite(&stranger),
            Err(NamerError::UnknownSuggestion(name)) if name == "NeverShown"
        ));
        assert!(namer.favorites().is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_every_observer_is_called() {
        let mut namer = Namer::new(CountingSource::new());
        let hits = Rc::new(RefCell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            namer.subscribe(move |_| *hits.borrow_mut() += 1);
        }
        namer.item_at(0).unwrap();
        assert_eq!(*hits.borrow(), 3);
    }
}
