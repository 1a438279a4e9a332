use chrono::NaiveDate;
use fitguide_model::{entry::LogEntry, metric::Metric};
use fitguide_store::logbook::{Error, Logbook, LogbookImpl};
use regex::Regex;

#[test]
fn viewing_before_any_write_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let logbook = LogbookImpl::new(dir.path());

    assert!(matches!(
        logbook.read_text(Metric::Exercise),
        Err(Error::NoData(Metric::Exercise))
    ));
    assert!(matches!(
        logbook.read_series(Metric::Weight),
        Err(Error::NoData(Metric::Weight))
    ));
}

#[test]
fn every_append_adds_one_formatted_line() {
    let dir = tempfile::tempdir().unwrap();
    let logbook = LogbookImpl::new(dir.path());
    let start = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();

    let texts = [
        "70.5 kg",
        "Cycling for 45 minutes",
        "multi\nline\nnote",
        "71 kg",
        "Swimming: laps for 20 minutes",
    ];
    for (i, text) in texts.iter().enumerate() {
        let date = start + chrono::Days::new(i as u64);
        logbook
            .append(Metric::Exercise, &LogEntry::new(date, text))
            .unwrap();
    }

    let entry_line = Regex::new(r"^\d{4}-\d{2}-\d{2}: .+$").unwrap();
    let content = logbook.read_text(Metric::Exercise).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), texts.len());
    for line in lines.iter() {
        assert!(entry_line.is_match(line), "{:?}", line);
    }
    assert_eq!(lines[0], "2024-01-30: 70.5 kg");
    assert_eq!(lines[2], "2024-02-01: multi line note");
}

#[test]
fn series_round_trip_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let logbook = LogbookImpl::new(dir.path());
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let second = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    logbook
        .append(Metric::Weight, &LogEntry::new(first, "70.5 kg"))
        .unwrap();
    logbook
        .append(Metric::Weight, &LogEntry::new(second, "71.0 kg"))
        .unwrap();

    let series = logbook.read_series(Metric::Weight).unwrap();
    assert!(series.rejected.is_empty());
    assert_eq!(
        series.points().collect::<Vec<_>>(),
        vec![(first, 70.5), (second, 71.0)]
    );
}
