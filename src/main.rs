use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_appender::rolling;

use hrm_portal::api::HolidayBook;
use hrm_portal::config::Config;
use hrm_portal::mock;
use hrm_portal::reports::calendar::{MonthCursor, WEEKDAYS};
use hrm_portal::reports::export::{self, AttendanceCsvRow, LeaveCsvRow};
use hrm_portal::reports::{ReportQuery, ReportTab, attendance_summary, leave_summary};
use hrm_portal::utils::csv_export;
use hrm_portal::utils::local_store::LocalStore;

fn main() -> Result<()> {
    let config = Config::from_env();

    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log dir {}", config.log_dir.display()))?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "portal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(data_dir = %config.data_dir.display(), "Portal report starting...");

    let today = Local::now().date_naive();
    let store = LocalStore::open(&config.data_dir)
        .with_context(|| format!("opening data dir {}", config.data_dir.display()))?;

    // -------------------------
    // Data
    // -------------------------
    let mut rng = match config.mock_seed {
        Some(seed) => mock::seeded_rng(seed),
        None => StdRng::from_entropy(),
    };
    let attendance = mock::generate_attendance(&mut rng, today, config.mock_attendance_days);
    let leaves = mock::generate_leaves();
    let holidays = HolidayBook::load(store.clone());

    // -------------------------
    // Attendance report
    // -------------------------
    let mut query = ReportQuery::new(config.page_size);
    let page = query.run_attendance(&attendance, today);

    println!("== Attendance ({}) ==", query.selection().key.label());
    println!("{:?}", attendance_summary(&attendance));
    for r in &page.data {
        println!("{}  {:<14} {}", r.date, r.employee_name, r.status);
    }
    println!("page {}/{} ({} rows)", page.page, page.total_pages().max(1), page.total);

    let filtered = query.filtered_attendance(&attendance, today);
    let rows: Vec<AttendanceCsvRow> = filtered.iter().map(AttendanceCsvRow::from).collect();
    let csv_path = store.dir().join(export::export_filename(ReportTab::Attendance, today));
    csv_export::write_csv_file(&csv_path, &rows)?;
    fs::write(
        store.dir().join("attendance_report.html"),
        export::printable_report(ReportTab::Attendance, &filtered, &[]),
    )?;

    // -------------------------
    // Leave report
    // -------------------------
    query.set_tab(ReportTab::Leaves);
    let page = query.run_leaves(&leaves, today);

    println!();
    println!("== Leaves ({}) ==", query.selection().key.label());
    println!("{:?}", leave_summary(&leaves));
    for r in &page.data {
        println!("{}  {:<14} {:<9} {} day(s)  {}", r.from, r.employee_name, r.leave_type.label(), r.days, r.status);
    }
    println!("page {}/{} ({} rows)", page.page, page.total_pages().max(1), page.total);

    let filtered = query.filtered_leaves(&leaves, today);
    let rows: Vec<LeaveCsvRow> = filtered.iter().map(LeaveCsvRow::from).collect();
    let csv_path = store.dir().join(export::export_filename(ReportTab::Leaves, today));
    csv_export::write_csv_file(&csv_path, &rows)?;
    fs::write(
        store.dir().join("leaves_report.html"),
        export::printable_report(ReportTab::Leaves, &[], &filtered),
    )?;

    // -------------------------
    // Holiday calendar
    // -------------------------
    let view = holidays.month_view(MonthCursor::containing(today), today);

    println!();
    println!("== {} ({} holidays stored) ==", view.title, holidays.len());
    println!("{}", WEEKDAYS.map(|d| format!("{:>4}", d)).join(""));
    for week in view.weeks() {
        let line: String = week
            .iter()
            .map(|c| {
                let mark = if !c.entries.is_empty() {
                    '*'
                } else if c.is_today {
                    '<'
                } else {
                    ' '
                };
                if c.cell.belongs_to_current_month {
                    format!("{:>3}{}", c.cell.day, mark)
                } else {
                    "    ".to_string()
                }
            })
            .collect();
        println!("{}", line);
    }
    for h in holidays.upcoming(today).iter().take(5) {
        println!("{}  {} ({})", h.date, h.name, h.holiday_type.label());
    }

    info!("Portal report finished");
    Ok(())
}
