pub mod numeric;
pub mod signals;

pub use signals::{SignalBag, SignalExtractor, SignalTag, Vocabulary};
