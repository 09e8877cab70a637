//! Video idea tracking: the idea list, its write-through persistence and the
//! add/edit form state.

pub mod error;
pub mod form;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use form::{FormMode, IdeaForm};
pub use models::{Category, ChannelStats, IdeaDraft, IdeaId, Priority, Status, VideoIdea};
pub use seed::seed_ideas;
pub use storage::{IdeaPersistence, JsonPersistence, KeyValueStore, MemoryStorage, DEFAULT_STORAGE_KEY};
pub use store::{IdeaStore, InitStrategy, LoadOrigin};
