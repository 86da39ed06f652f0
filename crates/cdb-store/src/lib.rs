pub mod collection;
pub mod error;
pub mod loader;

pub use collection::{GameCollection, GameRecord, GameTags, StoredGame, VisibleGame};
pub use error::{CollectionError, LoadingError};
