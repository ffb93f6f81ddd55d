use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::parse_local_date;
use crate::models::{eligibility_start, Member, RawAttendanceRecord, Semester};

pub fn load_members(path: &Path) -> anyhow::Result<Vec<Member>> {
    #[derive(serde::Deserialize)]
    struct MemberRow {
        member_id: Uuid,
        full_name: String,
        join_year: i32,
        cell_assignment_date: Option<String>,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open members file {}", path.display()))?;
    let mut members = Vec::new();

    for result in reader.deserialize::<MemberRow>() {
        let row = result.context("malformed members row")?;
        // An unparsable assignment date is absence of information; the
        // join-year fallback keeps the eligibility start well-defined.
        let assignment: Option<NaiveDate> = row
            .cell_assignment_date
            .as_deref()
            .and_then(parse_local_date);
        members.push(Member::new(
            row.member_id,
            row.full_name,
            eligibility_start(row.join_year, assignment),
        ));
    }

    Ok(members)
}

/// Attendance rows stay raw here; date and status filtering happens in
/// one place, during index construction.
pub fn load_attendance(path: &Path) -> anyhow::Result<Vec<RawAttendanceRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open attendance file {}", path.display()))?;
    let mut records = Vec::new();

    for result in reader.deserialize::<RawAttendanceRecord>() {
        records.push(result.context("malformed attendance row")?);
    }

    Ok(records)
}

pub fn load_semesters(path: &Path) -> anyhow::Result<Vec<Semester>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read semester catalog {}", path.display()))?;
    let semesters: Vec<Semester> =
        serde_json::from_str(&raw).context("malformed semester catalog")?;

    for semester in &semesters {
        if semester.start_date > semester.end_date {
            bail!("semester {} has inverted bounds", semester.id);
        }
    }

    Ok(semesters)
}
