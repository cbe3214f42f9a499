use datekit_calendar::CalendarError;
use datekit_schedule::{ScheduleError, work_schedule_dmy};

#[test]
fn zero_block_lengths() {
    assert_eq!(
        work_schedule_dmy("01-01-2024", "31-01-2024", 0, 2),
        Err(ScheduleError::ZeroWorkDays)
    );
    assert_eq!(
        work_schedule_dmy("01-01-2024", "31-01-2024", 2, 0),
        Err(ScheduleError::ZeroOffDays)
    );
}

#[test]
fn bad_dates() {
    for (start, end, bad) in [
        ("31-02-2024", "10-03-2024", "31-02-2024"),
        ("01-01-2024", "", ""),
        ("01/01/2024", "10-01-2024", "01/01/2024"),
    ] {
        assert_eq!(
            work_schedule_dmy(start, end, 1, 1),
            Err(ScheduleError::Calendar(CalendarError::InvalidDate {
                input: bad.to_string()
            })),
            "{start}..{end}"
        );
    }
}

#[test]
fn inverted_period() {
    let err = work_schedule_dmy("02-01-2024", "01-01-2024", 1, 1).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Calendar(CalendarError::InvertedPeriod { .. })
    ));
    assert_eq!(
        err.to_string(),
        "period end 2024-01-01 is before its start 2024-01-02"
    );
}
