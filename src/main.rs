use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser, Subcommand};

mod attendance;
mod calendar;
mod input;
mod models;
mod period;
mod report;
mod schedule;
mod stats;

use attendance::AttendanceIndex;
use models::Semester;
use period::PeriodSelector;

#[derive(Parser)]
#[command(name = "cellgroup-attendance")]
#[command(about = "Attendance period and completeness reporting for cell groups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-member attendance stats and the incomplete-week count
    #[command(group(
        ArgGroup::new("period")
            .args(["from", "year", "semester"])
            .required(true)
            .multiple(false)
    ))]
    Stats {
        #[arg(long)]
        members: PathBuf,
        #[arg(long)]
        attendance: PathBuf,
        #[arg(long)]
        semesters: Option<PathBuf>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        today: Option<String>,
    },
    /// Write a markdown attendance report
    #[command(group(
        ArgGroup::new("period")
            .args(["from", "year", "semester"])
            .required(true)
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        members: PathBuf,
        #[arg(long)]
        attendance: PathBuf,
        #[arg(long)]
        semesters: Option<PathBuf>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        today: Option<String>,
        #[arg(long, default_value = "cell group")]
        group: String,
        #[arg(long, default_value = "attendance-report.md")]
        out: PathBuf,
    },
    /// List the expected Sunday service dates for a period
    #[command(group(
        ArgGroup::new("period")
            .args(["from", "year", "semester"])
            .required(true)
            .multiple(false)
    ))]
    Sundays {
        #[arg(long)]
        semesters: Option<PathBuf>,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        today: Option<String>,
    },
}

fn build_selector(
    from: Option<&str>,
    to: Option<&str>,
    year: Option<i32>,
    month: Option<u32>,
    semester: Option<String>,
) -> anyhow::Result<PeriodSelector> {
    if let (Some(from), Some(to)) = (from, to) {
        let start = calendar::parse_local_date(from).context("invalid --from date")?;
        let end = calendar::parse_local_date(to).context("invalid --to date")?;
        return Ok(PeriodSelector::Range { start, end });
    }
    if let (Some(year), Some(month)) = (year, month) {
        return Ok(PeriodSelector::Month { year, month });
    }
    let semester_id =
        semester.context("select a period with --from/--to, --year/--month, or --semester")?;
    Ok(PeriodSelector::Semester { semester_id })
}

fn resolve_today(flag: Option<&str>) -> anyhow::Result<NaiveDate> {
    match flag {
        Some(raw) => calendar::parse_local_date(raw).context("invalid --today date"),
        None => Ok(Local::now().date_naive()),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Vec<Semester>> {
    match path {
        Some(path) => input::load_semesters(path),
        None => Ok(Vec::new()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            members,
            attendance,
            semesters,
            from,
            to,
            year,
            month,
            semester,
            today,
        } => {
            let members = input::load_members(&members)?;
            let records = input::load_attendance(&attendance)?;
            let catalog = load_catalog(semesters.as_deref())?;
            let selector = build_selector(from.as_deref(), to.as_deref(), year, month, semester)?;
            let today = resolve_today(today.as_deref())?;

            let resolved = period::resolve_period(&selector, &catalog, today);
            let index = AttendanceIndex::build(&records);
            let summary = stats::summarize_group(&members, &index, resolved.as_ref());

            match resolved {
                None => println!("No expected service dates in the selected period."),
                Some(resolved) => {
                    println!(
                        "Period {} to {}: {} expected Sundays, {} incomplete weeks.",
                        calendar::to_local_iso_date(resolved.start),
                        calendar::to_local_iso_date(resolved.end),
                        summary.expected_instances,
                        summary.incomplete_instances
                    );
                    for member in &summary.members {
                        println!(
                            "- {}: {} present, {} absent, {} unchecked ({}%)",
                            member.full_name,
                            member.stat.present,
                            member.stat.absent,
                            member.stat.unchecked,
                            member.stat.rate
                        );
                    }
                }
            }
        }
        Commands::Report {
            members,
            attendance,
            semesters,
            from,
            to,
            year,
            month,
            semester,
            today,
            group,
            out,
        } => {
            let members = input::load_members(&members)?;
            let records = input::load_attendance(&attendance)?;
            let catalog = load_catalog(semesters.as_deref())?;
            let selector = build_selector(from.as_deref(), to.as_deref(), year, month, semester)?;
            let today = resolve_today(today.as_deref())?;

            let resolved = period::resolve_period(&selector, &catalog, today);
            let index = AttendanceIndex::build(&records);
            let summary = stats::summarize_group(&members, &index, resolved.as_ref());
            let report = report::build_report(&group, resolved.as_ref(), &summary, today);

            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Sundays {
            semesters,
            from,
            to,
            year,
            month,
            semester,
            today,
        } => {
            let catalog = load_catalog(semesters.as_deref())?;
            let selector = build_selector(from.as_deref(), to.as_deref(), year, month, semester)?;
            let today = resolve_today(today.as_deref())?;

            match period::resolve_period(&selector, &catalog, today) {
                None => println!("No expected service dates in the selected period."),
                Some(resolved) => {
                    for sunday in schedule::enumerate_sundays(resolved.start, resolved.end) {
                        println!("{}", calendar::to_local_iso_date(sunday));
                    }
                }
            }
        }
    }

    Ok(())
}
