//! SM-2 spaced repetition scheduling.
//!
//! Textbook SuperMemo 2: a failed review resets the repetition streak
//! and reschedules after a short relearn gap; a successful review grows
//! the interval (1 day, 6 days, then `interval * ease`). The ease
//! factor adjusts with recall quality in both cases, floored at 1.3.

use chrono::{DateTime, Duration, Utc};

use crate::types::{SchedulingRecord, MIN_EASE_FACTOR};

/// Quality assigned to a correct answer. The app grades answers as
/// right or wrong only; the full 0-5 scale is still honored here.
pub const QUALITY_CORRECT: u8 = 4;
/// Quality assigned to an incorrect answer.
pub const QUALITY_INCORRECT: u8 = 1;

/// Gap before a failed question comes back, independent of its interval.
const RELEARN_GAP_MINUTES: i64 = 10;

/// Compute the scheduling state following a review at `now`.
///
/// Pure: returns a new record, identity and quiz name unchanged. The
/// caller persists the result.
pub fn compute_next_review(
    record: &SchedulingRecord,
    quality: u8,
    now: DateTime<Utc>,
) -> SchedulingRecord {
    let quality = quality.min(5);

    let (interval_days, repetitions, due_at) = if quality < 3 {
        (0, 0, now + Duration::minutes(RELEARN_GAP_MINUTES))
    } else {
        let interval = match record.repetitions {
            0 => 1,
            1 => 6,
            _ => (f64::from(record.interval_days) * record.ease_factor).round() as u32,
        };
        (
            interval,
            record.repetitions + 1,
            now + Duration::days(i64::from(interval)),
        )
    };

    SchedulingRecord {
        question_id: record.question_id.clone(),
        quiz_name: record.quiz_name.clone(),
        next_review_due_at: due_at.timestamp_millis(),
        interval_days,
        ease_factor: next_ease_factor(record.ease_factor, quality),
        repetitions,
    }
}

/// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3.
fn next_ease_factor(ease: f64, quality: u8) -> f64 {
    let q = f64::from(quality);
    (ease + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).max(MIN_EASE_FACTOR)
}
