//! # Namer Core Library
//!
//! Everything behind the Namer terminal app that is independent of the UI:
//! the endless suggestion feed, the saved-names set, and the view-model that
//! ties them together and tells observers when to redraw.
//!
//! ## Modules
//!
//! - `word_pair`: the two-word suggestion value
//! - `generator`: word-pair sources, including the random default
//! - `feed`: the batch-growing suggestion list
//! - `favorites`: saved names
//! - `namer`: view-model with change notifications
//! - `settings`: startup configuration
//! - `theme`: UI theming

pub mod error;
pub mod favorites;
pub mod feed;
pub mod generator;
pub mod namer;
pub mod settings;
pub mod theme;
pub mod word_pair;
pub mod words;

pub use error::{NamerError, Result};
pub use namer::{Namer, NamerEvent};
pub use word_pair::WordPair;
