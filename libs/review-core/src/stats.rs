//! Summary counters over the scheduling store.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveTime, TimeZone, Utc};

use crate::types::{ReviewStats, SchedulingRecord, MASTERED_INTERVAL_DAYS};

/// Count tracked, due-today, and mastered records.
///
/// `end_of_today_ms` is the last instant of the current local calendar
/// day; a record due at or before it counts as due today.
pub fn collect(records: &HashMap<String, SchedulingRecord>, end_of_today_ms: i64) -> ReviewStats {
    ReviewStats {
        total_tracked: records.len(),
        due_today: records
            .values()
            .filter(|r| r.next_review_due_at <= end_of_today_ms)
            .count(),
        mastered_count: records
            .values()
            .filter(|r| r.interval_days >= MASTERED_INTERVAL_DAYS)
            .count(),
    }
}

/// Last instant (23:59:59.999) of the current local calendar day, epoch ms.
pub fn end_of_today_local() -> i64 {
    let next_midnight = Local::now().date_naive().and_time(NaiveTime::MIN) + Duration::days(1);
    match Local.from_local_datetime(&next_midnight).earliest() {
        Some(dt) => dt.timestamp_millis() - 1,
        // Midnight skipped by a DST transition.
        None => (Utc::now() + Duration::days(1)).timestamp_millis() - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn record(text: &str, due_at: DateTime<Utc>, interval_days: u32) -> SchedulingRecord {
        let mut record = SchedulingRecord::new("Biology", text, due_at);
        record.interval_days = interval_days;
        record
    }

    fn into_map(records: Vec<SchedulingRecord>) -> HashMap<String, SchedulingRecord> {
        records
            .into_iter()
            .map(|r| (r.question_id.clone(), r))
            .collect()
    }

    #[test]
    fn empty_store_reports_zeroes() {
        let stats = collect(&HashMap::new(), end_of_today_local());
        assert_eq!(
            stats,
            ReviewStats {
                total_tracked: 0,
                due_today: 0,
                mastered_count: 0,
            }
        );
    }

    #[test]
    fn mastered_threshold_is_21_days() {
        let now = Utc::now();
        let records = into_map(vec![
            record("mastered question", now, 25),
            record("young question", now, 5),
        ]);
        let stats = collect(&records, end_of_today_local());
        assert_eq!(stats.total_tracked, 2);
        assert_eq!(stats.mastered_count, 1);
    }

    #[test]
    fn due_today_splits_on_end_of_day() {
        let end_of_today = Utc::now().timestamp_millis() + 1_000;
        let overdue = record("overdue", Utc::now() - Duration::days(2), 1);
        let mut far_future = record("far future", Utc::now(), 6);
        far_future.next_review_due_at = end_of_today + 1;
        let records = into_map(vec![overdue, far_future]);

        let stats = collect(&records, end_of_today);
        assert_eq!(stats.total_tracked, 2);
        assert_eq!(stats.due_today, 1);
    }

    #[test]
    fn end_of_today_is_ahead_of_now_within_a_day() {
        let now_ms = Utc::now().timestamp_millis();
        let end = end_of_today_local();
        assert!(end >= now_ms);
        assert!(end - now_ms < Duration::days(1).num_milliseconds());
    }
}
