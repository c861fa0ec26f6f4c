//! Durable slot for the best score

pub mod best_score;

pub use best_score::{BestScoreStore, JsonFileStore, MemoryStore, StoreError};
