use crate::db::progress::Progress;
use crate::db::settings::Settings;
use crate::libs::word::{Word, WordCard};
use crate::libs::word_service::{PracticeStats, SessionStats};
use chrono::{Datelike, NaiveDate};
use prettytable::{row, Table};
use std::collections::BTreeSet;
use std::fmt::Write;

const CELL_WIDTH: usize = 5;
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub struct View {}

impl View {
    pub fn words(words: &[Word]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "ARTICLE", "GERMAN", "ENGLISH", "DIFFICULTY", "PRACTICED", "MASTERED"]);
        for word in words {
            table.add_row(row![
                word.id,
                word.article.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
                word.german,
                word.english,
                word.difficulty,
                word.times_practiced,
                if word.mastered { "yes" } else { "no" }
            ]);
        }
        table.printstd();
    }

    pub fn word_stats(practice: &PracticeStats, session: &SessionStats) {
        let mut table = Table::new();

        table.add_row(row!["Total words", practice.total_words]);
        table.add_row(row!["Mastered", practice.mastered_words]);
        table.add_row(row!["In progress", practice.words_in_progress]);
        table.add_row(row!["Need practice", session.words_needing_practice]);
        table.add_row(row!["Average practice count", format!("{:.2}", practice.average_practice_count)]);
        table.printstd();
    }

    pub fn settings(settings: &Settings) {
        let mut table = Table::new();

        table.add_row(row!["Theme", settings.theme]);
        table.add_row(row!["Sound", on_off(settings.sound_enabled)]);
        table.add_row(row!["Notifications", on_off(settings.notifications_enabled)]);
        table.add_row(row!["Practice goal", settings.practice_goal]);
        table.add_row(row!["Difficulty", settings.difficulty]);
        table.printstd();
    }

    pub fn progress(progress: &Progress) {
        let mut table = Table::new();

        table.add_row(row!["Words learned", progress.words_learned]);
        table.add_row(row!["Articles mastered", progress.articles_mastered()]);
        table.add_row(row!["Level", progress.level()]);
        table.add_row(row!["Current streak", format!("{} days", progress.streak)]);
        table.add_row(row![
            "Last practiced",
            progress.last_practiced.map(|d| d.to_string()).unwrap_or_else(|| "never".to_string())
        ]);
        table.printstd();
    }

    pub fn card(card: &WordCard) {
        let mut table = Table::new();

        table.add_row(row![bFg => format!("{} {}", card.article, card.german_word)]);
        table.add_row(row![i => card.english_word]);
        table.printstd();
    }

    /// Sunday-first month grid for the month containing `month`.
    ///
    /// Days in `streak_dates` carry a `*` and `today` is wrapped in brackets.
    pub fn calendar(month: NaiveDate, streak_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> String {
        let first = month.with_day(1).unwrap_or(month);
        let mut out = String::new();

        for name in WEEKDAYS {
            let _ = write!(out, "{:^width$}", name, width = CELL_WIDTH);
        }
        out.push('\n');

        let offset = first.weekday().num_days_from_sunday() as usize;
        out.push_str(&" ".repeat(offset * CELL_WIDTH));

        let mut column = offset;
        for day in first.iter_days().take_while(|d| d.month() == first.month()) {
            let mut label = if day == today {
                format!("[{}]", day.day())
            } else {
                day.day().to_string()
            };
            if streak_dates.contains(&day) {
                label.push('*');
            }
            let _ = write!(out, "{:^width$}", label, width = CELL_WIDTH);

            column += 1;
            if column == WEEKDAYS.len() {
                out = out.trim_end().to_string();
                out.push('\n');
                column = 0;
            }
        }

        out.trim_end().to_string()
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_starts_on_sunday() {
        // 2024-09-01 is a Sunday.
        let grid = View::calendar(date(2024, 9, 15), &BTreeSet::new(), date(2000, 1, 1));
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].trim_start().starts_with("Su"));
        assert!(lines[1].trim_start().starts_with("1 "));
        assert!(lines.last().unwrap().contains("30"));
    }

    #[test]
    fn calendar_marks_streak_and_today() {
        let streak: BTreeSet<NaiveDate> = [date(2024, 1, 2), date(2024, 1, 3)].into_iter().collect();
        let grid = View::calendar(date(2024, 1, 1), &streak, date(2024, 1, 3));
        assert!(grid.contains("2*"));
        assert!(grid.contains("[3]*"));
        assert!(!grid.contains("4*"));
    }

    #[test]
    fn calendar_offsets_first_week() {
        // 2024-02-01 is a Thursday, four empty cells precede it.
        let grid = View::calendar(date(2024, 2, 1), &BTreeSet::new(), date(2000, 1, 1));
        let week = grid.lines().nth(1).unwrap();
        assert_eq!(week.find('1'), Some(4 * CELL_WIDTH + 2));
        assert!(grid.contains("29"));
    }
}
