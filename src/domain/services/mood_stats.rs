//! Streaks and chart aggregation for mood entries.
//!
//! All day arithmetic is done on calendar dates in the caller's time zone,
//! so an entry at 23:50 and one at 00:10 the next morning count as two
//! consecutive days.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc, Weekday};

use crate::domain::models::MoodEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    #[default]
    Week,
    Month,
    SixMonths,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Week,
        TimePeriod::Month,
        TimePeriod::SixMonths,
        TimePeriod::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Week => "Weekly",
            TimePeriod::Month => "Monthly",
            TimePeriod::SixMonths => "6 Months",
            TimePeriod::Year => "Yearly",
        }
    }
}

/// One x-axis point of the mood chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    /// Mean rating of the bucket, `None` when nothing was logged
    pub mood: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

fn local_day<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    at.with_timezone(tz).date_naive()
}

/// Local day of every entry, newest entry first
fn entry_days<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz) -> Vec<NaiveDate> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.iter().map(|e| local_day(&e.created_at, tz)).collect()
}

/// Entries walked newest first while entry `i` falls on `today - i`.
/// A second entry on the same day ends the run.
pub fn current_streak<Tz: TimeZone>(entries: &[MoodEntry], today: NaiveDate, tz: &Tz) -> u32 {
    let mut streak = 0;
    for (i, day) in entry_days(entries, tz).iter().enumerate() {
        if *day == today - Duration::days(i as i64) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of neighbouring entries exactly one calendar day apart
pub fn longest_streak<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz) -> u32 {
    let days = entry_days(entries, tz);
    if days.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut run = 1;
    for pair in days.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

pub fn streaks<Tz: TimeZone>(entries: &[MoodEntry], today: NaiveDate, tz: &Tz) -> Streaks {
    let current = current_streak(entries, today, tz);
    Streaks {
        current,
        longest: longest_streak(entries, tz).max(current),
    }
}

pub fn has_entry_on<Tz: TimeZone>(entries: &[MoodEntry], day: NaiveDate, tz: &Tz) -> bool {
    entries.iter().any(|e| local_day(&e.created_at, tz) == day)
}

/// Newest `n` entries
pub fn recent_entries(entries: &[MoodEntry], n: usize) -> Vec<MoodEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

/// What the mood page renders from the entry list
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub streaks: Streaks,
    /// Hides the picker once something is logged today
    pub logged_today: bool,
    pub recent: Vec<MoodEntry>,
}

pub fn summarize<Tz: TimeZone>(
    entries: &[MoodEntry],
    today: NaiveDate,
    tz: &Tz,
    recent: usize,
) -> MoodSummary {
    MoodSummary {
        streaks: streaks(entries, today, tz),
        logged_today: has_entry_on(entries, today, tz),
        recent: recent_entries(entries, recent),
    }
}

/// Add a freshly saved entry to the front of the list
pub fn record_entry(entries: &mut Vec<MoodEntry>, entry: MoodEntry) {
    entries.insert(0, entry);
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn average<'a>(ratings: impl Iterator<Item = &'a MoodEntry>) -> Option<f64> {
    let (sum, count) = ratings.fold((0i64, 0u32), |(s, c), e| (s + e.mood_rating as i64, c + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

fn day_point<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz, day: NaiveDate, fmt: &str) -> ChartPoint {
    ChartPoint {
        label: day.format(fmt).to_string(),
        mood: average(entries.iter().filter(|e| local_day(&e.created_at, tz) == day)),
    }
}

fn month_point<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz, month_start: NaiveDate) -> ChartPoint {
    let next = month_start + Months::new(1);
    ChartPoint {
        label: month_start.format("%b").to_string(),
        mood: average(entries.iter().filter(|e| {
            let day = local_day(&e.created_at, tz);
            day >= month_start && day < next
        })),
    }
}

/// Chart series for `period`, bucketed in `[start, end)` day or month intervals
pub fn chart_points<Tz: TimeZone>(
    entries: &[MoodEntry],
    period: TimePeriod,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<ChartPoint> {
    let today = local_day(&now, tz);
    match period {
        TimePeriod::Week => {
            let monday = today.week(Weekday::Mon).first_day();
            (0..7)
                .map(|i| day_point(entries, tz, monday + Duration::days(i), "%a"))
                .collect()
        }
        TimePeriod::Month => {
            let start = first_of_month(today - Duration::days(29));
            let step = (today - start).num_days() / 6;
            (0..7)
                .map(|i| day_point(entries, tz, start + Duration::days(i * step), "%b %-d"))
                .collect()
        }
        TimePeriod::SixMonths => {
            let start = first_of_month(today) - Months::new(5);
            (0..6)
                .map(|i| month_point(entries, tz, start + Months::new(i)))
                .collect()
        }
        TimePeriod::Year => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            (0..12)
                .map(|i| month_point(entries, tz, start + Months::new(i)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn make_entry(rating: i32, at: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: format!("m-{}", at.timestamp()),
            user_id: "u1".to_string(),
            mood_rating: rating,
            note: None,
            created_at: at,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_streak_counts_back_from_today() {
        let entries = vec![
            make_entry(4, utc(2025, 3, 10, 9)),
            make_entry(3, utc(2025, 3, 9, 20)),
            make_entry(2, utc(2025, 3, 8, 7)),
            make_entry(5, utc(2025, 3, 5, 12)),
        ];
        assert_eq!(current_streak(&entries, day(2025, 3, 10), &Utc), 3);
        // Nothing logged today breaks the streak
        assert_eq!(current_streak(&entries, day(2025, 3, 11), &Utc), 0);
    }

    #[test]
    fn test_second_entry_on_same_day_ends_current_streak() {
        let entries = vec![
            make_entry(4, utc(2025, 3, 10, 9)),
            make_entry(2, utc(2025, 3, 10, 18)),
            make_entry(3, utc(2025, 3, 9, 9)),
        ];
        assert_eq!(current_streak(&entries, day(2025, 3, 10), &Utc), 1);
        // 10 Mar 09:00 and 9 Mar 09:00 are still neighbours one day apart
        assert_eq!(longest_streak(&entries, &Utc), 2);
        assert_eq!(streaks(&entries, day(2025, 3, 10), &Utc).longest, 2);
    }

    #[test]
    fn test_longest_streak_finds_older_run() {
        let entries = vec![
            make_entry(4, utc(2025, 3, 10, 9)),
            make_entry(3, utc(2025, 3, 3, 9)),
            make_entry(3, utc(2025, 3, 2, 9)),
            make_entry(3, utc(2025, 3, 1, 9)),
            make_entry(3, utc(2025, 2, 28, 9)),
        ];
        let s = streaks(&entries, day(2025, 3, 10), &Utc);
        assert_eq!(s.current, 1);
        assert_eq!(s.longest, 4);
    }

    #[test]
    fn test_single_entry_has_longest_one() {
        let entries = vec![make_entry(3, utc(2025, 1, 1, 9))];
        assert_eq!(longest_streak(&entries, &Utc), 1);
        assert_eq!(streaks(&[], day(2025, 1, 1), &Utc), Streaks::default());
    }

    #[test]
    fn test_day_boundary_uses_local_zone() {
        // 23:30 UTC is already the next day at UTC+2
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let entries = vec![make_entry(3, Utc.with_ymd_and_hms(2025, 3, 9, 23, 30, 0).unwrap())];
        assert!(has_entry_on(&entries, day(2025, 3, 10), &plus_two));
        assert!(!has_entry_on(&entries, day(2025, 3, 10), &Utc));
    }

    #[test]
    fn test_week_points_run_monday_to_sunday() {
        // Wednesday 12 March 2025
        let now = utc(2025, 3, 12, 15);
        let entries = vec![
            make_entry(2, utc(2025, 3, 10, 8)),
            make_entry(4, utc(2025, 3, 10, 20)),
            make_entry(5, utc(2025, 3, 12, 9)),
            make_entry(1, utc(2025, 3, 9, 9)),
        ];
        let points = chart_points(&entries, TimePeriod::Week, now, &Utc);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(points[0].mood, Some(3.0));
        assert_eq!(points[1].mood, None);
        assert_eq!(points[2].mood, Some(5.0));
    }

    #[test]
    fn test_month_points_are_evenly_spaced() {
        let now = utc(2025, 3, 31, 12);
        let points = chart_points(&[], TimePeriod::Month, now, &Utc);
        assert_eq!(points.len(), 7);
        // start = 1 Mar, 30 days / 6 = 5 day step
        assert_eq!(points[0].label, "Mar 1");
        assert_eq!(points[1].label, "Mar 6");
        assert_eq!(points[6].label, "Mar 31");
    }

    #[test]
    fn test_six_month_points_average_per_month() {
        let now = utc(2025, 3, 15, 12);
        let entries = vec![
            make_entry(2, utc(2024, 10, 3, 9)),
            make_entry(4, utc(2024, 10, 30, 9)),
            make_entry(5, utc(2025, 3, 1, 0)),
        ];
        let points = chart_points(&entries, TimePeriod::SixMonths, now, &Utc);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert_eq!(points[0].mood, Some(3.0));
        assert_eq!(points[1].mood, None);
        assert_eq!(points[5].mood, Some(5.0));
    }

    #[test]
    fn test_year_points_cover_calendar_year() {
        let now = utc(2025, 6, 1, 12);
        let entries = vec![make_entry(1, utc(2024, 12, 31, 23)), make_entry(3, utc(2025, 12, 31, 23))];
        let points = chart_points(&entries, TimePeriod::Year, now, &Utc);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].label, "Jan");
        assert_eq!(points[0].mood, None);
        assert_eq!(points[11].mood, Some(3.0));
    }

    #[test]
    fn test_recording_entry_adds_one_card_and_hides_picker() {
        let today = day(2025, 3, 10);
        let mut entries = vec![
            make_entry(3, utc(2025, 3, 9, 9)),
            make_entry(2, utc(2025, 3, 8, 9)),
        ];
        let before = summarize(&entries, today, &Utc, 5);
        assert!(!before.logged_today);
        assert_eq!(before.recent.len(), 2);

        let saved = make_entry(5, utc(2025, 3, 10, 8));
        record_entry(&mut entries, saved.clone());

        assert_eq!(entries.len(), 3);
        let after = summarize(&entries, today, &Utc, 5);
        assert!(after.logged_today);
        assert_eq!(after.recent.len(), 3);
        assert_eq!(after.recent[0], saved);
        assert_eq!(after.streaks.current, 3);
    }

    #[test]
    fn test_recent_entries_newest_first() {
        let entries: Vec<MoodEntry> = (1..=7).map(|d| make_entry(3, utc(2025, 1, d, 9))).collect();
        let recent = recent_entries(&entries, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].created_at, utc(2025, 1, 7, 9));
        assert_eq!(recent[4].created_at, utc(2025, 1, 3, 9));
    }
}
