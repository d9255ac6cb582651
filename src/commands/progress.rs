use super::open_db;
use crate::libs::messages::Message;
use crate::libs::progress::ProgressService;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ProgressArgs {
    /// Month for the streak calendar (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(args: ProgressArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let month = match args.month {
        Some(value) => match parse_month(&value) {
            Some(month) => month,
            None => {
                msg_error!(Message::InvalidMonth(value));
                return Ok(());
            }
        },
        None => today,
    };

    let db = open_db()?;
    let progress = ProgressService::new(&db).get_progress_data();

    msg_print!(Message::ProgressHeader, true);
    View::progress(&progress);

    msg_print!(Message::StreakCalendarHeader(month.format("%B %Y").to_string()), true);
    msg_print!(View::calendar(month, &progress.streak_dates, today));
    Ok(())
}

/// First day of a `YYYY-MM` month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(parse_month("2024-02"), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("February"), None);
    }
}
