use crate::attendance::{is_eligible, AttendanceIndex};
use crate::models::{AttendanceStatus, Member, MemberStat};
use crate::period::ResolvedPeriod;
use crate::schedule::{count_sundays, enumerate_sundays};

#[derive(Debug, Clone)]
pub struct MemberSummary {
    pub full_name: String,
    pub stat: MemberStat,
}

#[derive(Debug, Clone)]
pub struct GroupSummary {
    /// Sundays in the full resolved period, before per-member clamping.
    pub expected_instances: usize,
    /// Weeks where at least one eligible member is unchecked.
    pub incomplete_instances: usize,
    pub members: Vec<MemberSummary>,
}

/// Counts present/absent/unchecked over the Sundays this member was
/// eligible for. A degenerate period yields the all-zero stat.
pub fn compute_member_stat(
    member: &Member,
    index: &AttendanceIndex,
    period: Option<&ResolvedPeriod>,
) -> MemberStat {
    let Some(period) = period else {
        return MemberStat::default();
    };
    let start = period.start.max(member.eligibility_start);
    let instances = enumerate_sundays(start, period.end);

    let mut stat = MemberStat::default();
    for instance in &instances {
        match index.lookup(member.member_id, *instance) {
            Some(AttendanceStatus::Present) => stat.present += 1,
            Some(AttendanceStatus::Absent) => stat.absent += 1,
            None => stat.unchecked += 1,
        }
    }
    if !instances.is_empty() {
        stat.rate = ((stat.present as f64 / instances.len() as f64) * 100.0).round() as u32;
    }
    stat
}

/// Weeks in the full resolved period where any eligible member lacks a
/// PRESENT/ABSENT record. Weeks with no eligible members are skipped.
pub fn compute_group_incomplete_count(
    members: &[Member],
    index: &AttendanceIndex,
    period: Option<&ResolvedPeriod>,
) -> usize {
    let Some(period) = period else {
        return 0;
    };
    enumerate_sundays(period.start, period.end)
        .into_iter()
        .filter(|instance| {
            // A week with no eligible members never counts as incomplete.
            members.iter().any(|member| {
                is_eligible(member, *instance)
                    && index.lookup(member.member_id, *instance).is_none()
            })
        })
        .count()
}

/// Per-member stats plus the group-level counts, sorted by member name
/// for stable output.
pub fn summarize_group(
    members: &[Member],
    index: &AttendanceIndex,
    period: Option<&ResolvedPeriod>,
) -> GroupSummary {
    let mut summaries: Vec<MemberSummary> = members
        .iter()
        .map(|member| MemberSummary {
            full_name: member.full_name.clone(),
            stat: compute_member_stat(member, index, period),
        })
        .collect();
    summaries.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    let expected_instances = match period {
        Some(p) => count_sundays(p.start, p.end),
        None => 0,
    };

    GroupSummary {
        expected_instances,
        incomplete_instances: compute_group_incomplete_count(members, index, period),
        members: summaries,
    }
}
