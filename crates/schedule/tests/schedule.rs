use chrono::{Days, NaiveDate};
use datekit_calendar::DatePeriod;
use datekit_schedule::{ScheduleConfig, is_work_day, work_schedule, work_schedule_dmy};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn documented_examples() {
    assert_eq!(
        work_schedule_dmy("01-01-2024", "15-01-2024", 1, 3).unwrap(),
        ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
    );
    assert_eq!(
        work_schedule_dmy("01-01-2024", "10-01-2024", 1, 1).unwrap(),
        [
            "01-01-2024",
            "03-01-2024",
            "05-01-2024",
            "07-01-2024",
            "09-01-2024"
        ]
    );
}

#[test]
fn output_is_ascending_and_within_period() {
    let period = DatePeriod::new(ymd(2023, 11, 17), ymd(2024, 4, 2)).unwrap();
    for work in 1..=5 {
        for off in 1..=5 {
            let config = ScheduleConfig::new(work, off);
            let dates = work_schedule(&period, &config).unwrap();
            assert!(!dates.is_empty());
            assert_eq!(dates[0], period.start());
            assert!(
                dates.windows(2).all(|w| w[0] < w[1]),
                "not strictly ascending for {work}/{off}"
            );
            assert!(
                dates.iter().all(|&d| period.contains(d)),
                "date outside period for {work}/{off}"
            );
        }
    }
}

#[test]
fn agrees_with_is_work_day() {
    let period = DatePeriod::new(ymd(2024, 1, 1), ymd(2024, 3, 31)).unwrap();
    for (work, off) in [(1, 1), (1, 3), (2, 2), (4, 3), (5, 2), (7, 7)] {
        let config = ScheduleConfig::new(work, off);
        let dates = work_schedule(&period, &config).unwrap();

        let expected: Vec<_> = period
            .start()
            .iter_days()
            .take(period.len_days() as usize)
            .filter(|&d| is_work_day(period.start(), &config, d).unwrap())
            .collect();
        assert_eq!(dates, expected, "cycle {work}/{off}");
    }
}

#[test]
fn count_matches_whole_cycles() {
    // 28 days of 4 on / 3 off is exactly four cycles.
    let start = ymd(2024, 2, 1);
    let end = start + Days::new(27);
    let period = DatePeriod::new(start, end).unwrap();
    let dates = work_schedule(&period, &ScheduleConfig::new(4, 3)).unwrap();
    assert_eq!(dates.len(), 16);
}

#[test]
fn off_block_longer_than_period() {
    let period = DatePeriod::new(ymd(2024, 1, 1), ymd(2024, 1, 10)).unwrap();
    let dates = work_schedule(&period, &ScheduleConfig::new(2, 30)).unwrap();
    assert_eq!(dates, [ymd(2024, 1, 1), ymd(2024, 1, 2)]);
}

#[test]
fn work_block_longer_than_period() {
    let period = DatePeriod::new(ymd(2024, 1, 1), ymd(2024, 1, 10)).unwrap();
    let dates = work_schedule(&period, &ScheduleConfig::new(30, 1)).unwrap();
    assert_eq!(dates.len(), 10);
    assert_eq!(dates.last(), Some(&ymd(2024, 1, 10)));
}

#[test]
fn repeated_calls_are_identical() {
    let a = work_schedule_dmy("01-02-2024", "29-02-2024", 3, 2).unwrap();
    let b = work_schedule_dmy("01-02-2024", "29-02-2024", 3, 2).unwrap();
    assert_eq!(a, b);
    // 29 days: five full 3/2 cycles plus three work days.
    assert_eq!(a.len(), 18);
}
