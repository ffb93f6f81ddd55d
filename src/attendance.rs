use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::parse_local_date;
use crate::models::{AttendanceStatus, Member, RawAttendanceRecord};

/// Lookup from (member, service date) to a binary attendance status.
#[derive(Debug, Default)]
pub struct AttendanceIndex {
    entries: HashMap<(Uuid, NaiveDate), AttendanceStatus>,
}

impl AttendanceIndex {
    /// Indexes raw records, dropping rows with unparsable dates or
    /// non-binary statuses. Duplicate (member, date) keys keep the last
    /// record in input order.
    pub fn build(records: &[RawAttendanceRecord]) -> AttendanceIndex {
        let mut entries = HashMap::new();
        for record in records {
            let Some(date) = parse_local_date(&record.date) else {
                continue;
            };
            let Some(status) = AttendanceStatus::parse(&record.status) else {
                continue;
            };
            entries.insert((record.member_id, date), status);
        }
        AttendanceIndex { entries }
    }

    pub fn lookup(&self, member_id: Uuid, date: NaiveDate) -> Option<AttendanceStatus> {
        self.entries.get(&(member_id, date)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether the member counts toward expected instances on `instance_date`
/// (inclusive of the eligibility start itself).
pub fn is_eligible(member: &Member, instance_date: NaiveDate) -> bool {
    instance_date >= member.eligibility_start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(member_id: Uuid, date: &str, status: &str) -> RawAttendanceRecord {
        RawAttendanceRecord {
            member_id,
            date: date.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn indexes_binary_statuses_only() {
        let member_id = Uuid::new_v4();
        let records = vec![
            record(member_id, "2024-03-10", "PRESENT"),
            record(member_id, "2024-03-17", "EXCUSED"),
            record(member_id, "2024-03-24", "ABSENT"),
        ];
        let index = AttendanceIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.lookup(member_id, date(2024, 3, 10)),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(index.lookup(member_id, date(2024, 3, 17)), None);
        assert_eq!(
            index.lookup(member_id, date(2024, 3, 24)),
            Some(AttendanceStatus::Absent)
        );
    }

    #[test]
    fn skips_malformed_dates_and_truncates_timestamps() {
        let member_id = Uuid::new_v4();
        let records = vec![
            record(member_id, "", "PRESENT"),
            record(member_id, "soon", "PRESENT"),
            record(member_id, "2024-03-10T11:00:00+09:00", "PRESENT"),
        ];
        let index = AttendanceIndex::build(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.lookup(member_id, date(2024, 3, 10)),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn last_record_wins_on_duplicate_keys() {
        let member_id = Uuid::new_v4();
        let records = vec![
            record(member_id, "2024-03-10", "ABSENT"),
            record(member_id, "2024-03-10", "PRESENT"),
        ];
        let index = AttendanceIndex::build(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.lookup(member_id, date(2024, 3, 10)),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn eligibility_boundary_is_inclusive() {
        let start = date(2024, 3, 15);
        let member = Member::new(Uuid::new_v4(), "Dana Kim".to_string(), start);
        assert!(!is_eligible(&member, date(2024, 3, 14)));
        assert!(is_eligible(&member, start));
        assert!(is_eligible(&member, date(2024, 3, 16)));
    }
}
