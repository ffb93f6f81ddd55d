use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Member {
    pub member_id: Uuid,
    pub full_name: String,
    /// First service date this member counts toward expected instances.
    pub eligibility_start: NaiveDate,
}

impl Member {
    pub fn new(member_id: Uuid, full_name: String, eligibility_start: NaiveDate) -> Self {
        Member {
            member_id,
            full_name,
            eligibility_start,
        }
    }
}

/// Cell assignment date when recorded, otherwise January 1 of the join
/// year, so every member has a well-defined eligibility start.
pub fn eligibility_start(join_year: i32, cell_assignment: Option<NaiveDate>) -> NaiveDate {
    cell_assignment
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(join_year, 1, 1).unwrap_or(NaiveDate::MIN))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Semester {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

/// Attendance record as it arrives from upstream data entry. Date and
/// status stay raw strings; filtering happens during index construction.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttendanceRecord {
    pub member_id: Uuid,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Only PRESENT and ABSENT carry information; any other token is
    /// treated the same as a missing record.
    pub fn parse(raw: &str) -> Option<AttendanceStatus> {
        match raw.trim() {
            "PRESENT" => Some(AttendanceStatus::Present),
            "ABSENT" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberStat {
    pub present: usize,
    pub absent: usize,
    pub unchecked: usize,
    /// Rounded percentage of expected instances marked present, 0 when
    /// nothing was expected.
    pub rate: u32,
}
