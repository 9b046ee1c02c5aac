//! Spaced-repetition review core for the quiz application.
//!
//! Decides which previously seen questions are due for another look and
//! updates per-question scheduling state after each answer, using the
//! SM-2 algorithm. Scheduling state is a single JSON document persisted
//! through an injected key-value capability; persistence is best effort
//! and failures never reach the caller.

pub mod error;
pub mod identity;
pub mod queue;
pub mod reviewer;
pub mod sm2;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use reviewer::Reviewer;
pub use store::{KeyValueStore, SchedulingStore, STORAGE_KEY};
pub use types::{Question, Quiz, ReviewQuestion, ReviewStats, SchedulingRecord};
