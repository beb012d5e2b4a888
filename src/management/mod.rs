mod catalog;
mod movies;
mod store;

pub use catalog::CatalogController;
pub use movies::MOVIES_KEY;
pub use movies::MovieStore;
pub use store::FileStore;
pub use store::KeyValueStore;
pub use store::MemoryStore;
