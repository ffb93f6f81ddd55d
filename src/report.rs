use std::fmt::Write;

use chrono::NaiveDate;

use crate::calendar::to_local_iso_date;
use crate::period::ResolvedPeriod;
use crate::stats::GroupSummary;

pub fn build_report(
    group_label: &str,
    period: Option<&ResolvedPeriod>,
    summary: &GroupSummary,
    today: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Cell Group Attendance Report");
    let _ = writeln!(
        output,
        "Generated for {} (as of {})",
        group_label,
        to_local_iso_date(today)
    );
    let _ = writeln!(output);

    let Some(period) = period else {
        let _ = writeln!(output, "No expected service dates in the selected period.");
        return output;
    };

    let _ = writeln!(
        output,
        "Period {} to {}: {} expected Sundays.",
        to_local_iso_date(period.start),
        to_local_iso_date(period.end),
        summary.expected_instances
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Check Coverage");

    if summary.incomplete_instances == 0 {
        let _ = writeln!(output, "Every week has all attendance checks recorded.");
    } else {
        let _ = writeln!(
            output,
            "{} of {} weeks have at least one member without a recorded check.",
            summary.incomplete_instances, summary.expected_instances
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Member Attendance");

    if summary.members.is_empty() {
        let _ = writeln!(output, "No members in this cell group.");
    } else {
        for member in &summary.members {
            let _ = writeln!(
                output,
                "- {}: {} present, {} absent, {} unchecked ({}% attendance)",
                member.full_name,
                member.stat.present,
                member.stat.absent,
                member.stat.unchecked,
                member.stat.rate
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberStat;
    use crate::stats::MemberSummary;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn degenerate_period_reports_no_data() {
        let summary = GroupSummary {
            expected_instances: 0,
            incomplete_instances: 0,
            members: Vec::new(),
        };
        let report = build_report("Yeouido cell", None, &summary, date(2024, 4, 1));
        assert!(report.contains("No expected service dates"));
    }

    #[test]
    fn report_lists_members_and_coverage() {
        let period = ResolvedPeriod {
            start: date(2024, 3, 3),
            end: date(2024, 3, 31),
        };
        let summary = GroupSummary {
            expected_instances: 5,
            incomplete_instances: 2,
            members: vec![MemberSummary {
                full_name: "Dana Kim".to_string(),
                stat: MemberStat {
                    present: 3,
                    absent: 1,
                    unchecked: 1,
                    rate: 60,
                },
            }],
        };
        let report = build_report("Yeouido cell", Some(&period), &summary, date(2024, 4, 1));
        assert!(report.contains("Period 2024-03-03 to 2024-03-31: 5 expected Sundays."));
        assert!(report.contains("2 of 5 weeks"));
        assert!(report.contains("- Dana Kim: 3 present, 1 absent, 1 unchecked (60% attendance)"));
    }
}
