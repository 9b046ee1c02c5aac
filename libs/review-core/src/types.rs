//! Core types for the quiz review scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity;

/// Interval (in days) at or above which a question counts as mastered.
pub const MASTERED_INTERVAL_DAYS: u32 = 21;

/// Ease factor assigned to a freshly tracked question.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Lower bound the ease factor never drops below.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// A quiz: a named, ordered list of questions. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub name: String,
    pub questions: Vec<Question>,
}

/// A single multiple-choice question within a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Per-question scheduling state, one entry of the persisted document.
///
/// Field names follow the stored JSON shape (`questionId`,
/// `nextReviewDueAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRecord {
    pub question_id: String,
    pub quiz_name: String,
    /// When this question next becomes eligible for review (epoch ms).
    pub next_review_due_at: i64,
    /// Last computed spacing interval in days; 0 until the first success
    /// and again right after a failure.
    pub interval_days: u32,
    pub ease_factor: f64,
    /// Consecutive successful reviews since creation or the last failure.
    pub repetitions: u32,
}

impl SchedulingRecord {
    /// Fresh record for a question first seen at `now`: due immediately,
    /// no interval, default ease.
    pub fn new(quiz_name: &str, question_text: &str, now: DateTime<Utc>) -> Self {
        Self {
            question_id: identity::question_id(quiz_name, question_text),
            quiz_name: quiz_name.to_string(),
            next_review_due_at: now.timestamp_millis(),
            interval_days: 0,
            ease_factor: INITIAL_EASE_FACTOR,
            repetitions: 0,
        }
    }
}

/// A question selected for a review session, carrying its display
/// fields and current scheduling state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewQuestion {
    pub quiz_name: String,
    pub question_text: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub record: SchedulingRecord,
}

/// Summary counters over the whole store, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total_tracked: usize,
    pub due_today: usize,
    pub mastered_count: usize,
}
