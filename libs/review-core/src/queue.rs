//! Due-set assembly for review sessions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::identity;
use crate::types::{Question, Quiz, ReviewQuestion, SchedulingRecord};

/// Assemble at most `max_questions` questions for a session.
///
/// Tracked questions whose review time has passed come first, oldest
/// due time first; never-seen questions backfill remaining capacity in
/// corpus order, carrying fresh default records that are not persisted
/// until the question is answered. Questions that are tracked but not
/// yet due are never included.
pub fn build_due_set(
    records: &HashMap<String, SchedulingRecord>,
    quizzes: &[Quiz],
    max_questions: usize,
    now: DateTime<Utc>,
) -> Vec<ReviewQuestion> {
    if max_questions == 0 {
        return Vec::new();
    }

    let now_ms = now.timestamp_millis();
    let mut candidates = Vec::new();

    for quiz in quizzes {
        for question in &quiz.questions {
            let id = identity::question_id(&quiz.name, &question.text);
            if let Some(record) = records.get(&id) {
                if record.next_review_due_at <= now_ms {
                    candidates.push(to_review_question(quiz, question, record.clone()));
                }
            }
        }
    }

    if candidates.len() < max_questions {
        let mut remaining = max_questions - candidates.len();
        'backfill: for quiz in quizzes {
            for question in &quiz.questions {
                let id = identity::question_id(&quiz.name, &question.text);
                if records.contains_key(&id) {
                    continue;
                }
                let record = SchedulingRecord::new(&quiz.name, &question.text, now);
                candidates.push(to_review_question(quiz, question, record));
                remaining -= 1;
                if remaining == 0 {
                    break 'backfill;
                }
            }
        }
    }

    // Stable sort: corpus order breaks ties among equal due times.
    candidates.sort_by_key(|candidate| candidate.record.next_review_due_at);
    candidates.truncate(max_questions);
    candidates
}

fn to_review_question(quiz: &Quiz, question: &Question, record: SchedulingRecord) -> ReviewQuestion {
    ReviewQuestion {
        quiz_name: quiz.name.clone(),
        question_text: question.text.clone(),
        choices: question.choices.clone(),
        correct_answer: question.correct_answer.clone(),
        explanation: question.explanation.clone(),
        record,
    }
}
