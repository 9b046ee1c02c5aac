//! Consumer interface for the review-session UI.
//!
//! One reviewer per session: constructed with the persistence
//! capability, loads scheduling state once, then serves due-set
//! queries, answer recording, and summary stats. Each recorded answer
//! persists the whole store before returning.

use chrono::Utc;

use crate::identity;
use crate::queue;
use crate::sm2::{self, QUALITY_CORRECT, QUALITY_INCORRECT};
use crate::stats;
use crate::store::{KeyValueStore, SchedulingStore};
use crate::types::{Quiz, ReviewQuestion, ReviewStats, SchedulingRecord};

pub struct Reviewer<K> {
    store: SchedulingStore<K>,
}

impl<K: KeyValueStore> Reviewer<K> {
    /// Create a reviewer and load persisted scheduling state.
    pub async fn new(kv: K) -> Self {
        let mut store = SchedulingStore::new(kv);
        store.load().await;
        Self { store }
    }

    /// Record an answer for a question, creating its scheduling record
    /// on first encounter, and persist the updated store (best effort).
    pub async fn record_answer(&mut self, quiz_name: &str, question_text: &str, was_correct: bool) {
        let now = Utc::now();
        let id = identity::question_id(quiz_name, question_text);
        let current = self
            .store
            .get(&id)
            .cloned()
            .unwrap_or_else(|| SchedulingRecord::new(quiz_name, question_text, now));

        let quality = if was_correct {
            QUALITY_CORRECT
        } else {
            QUALITY_INCORRECT
        };
        let updated = sm2::compute_next_review(&current, quality, now);

        self.store.insert(updated);
        self.store.save().await;
    }

    /// Questions to review this session: due questions first, unseen
    /// questions as filler, capped at `max_questions`.
    pub fn get_due_questions(&self, quizzes: &[Quiz], max_questions: usize) -> Vec<ReviewQuestion> {
        queue::build_due_set(self.store.records(), quizzes, max_questions, Utc::now())
    }

    /// Summary counters for display.
    pub fn get_stats(&self) -> ReviewStats {
        stats::collect(self.store.records(), stats::end_of_today_local())
    }
}
