use flipnote_core::{
    paginate, CachedMeasure, Entry, LayoutParams, Measure, MonospaceMeasure, Page, TimestampLabel,
};
use std::cell::Cell;
use std::collections::HashMap;

fn layout(page_height: f64) -> LayoutParams {
    LayoutParams {
        content_width: 200.0,
        page_height,
        font_size: 12.0,
        line_height: 16.0,
        item_gap: 4.0,
        top_padding: 0.0,
    }
}

/// Entries `newest..=1`, newest first.
fn logs(newest: i64) -> Vec<Entry> {
    (1..=newest)
        .rev()
        .map(|ts| Entry::new("u", format!("log{ts}"), ts))
        .collect()
}

fn constant(height: f64) -> impl Fn(&str, f64, f64, f64) -> f64 {
    move |_: &str, _: f64, _: f64, _: f64| height
}

fn timestamps(page: &Page) -> Vec<i64> {
    page.entries().iter().map(|entry| entry.timestamp).collect()
}

#[test]
fn ten_entries_three_per_page_yield_four_pages() {
    // 30 + 4 gap per entry; three fill 102 exactly, a fourth would need 136.
    let pages = paginate(&logs(10), &constant(30.0), &layout(102.0), &TimestampLabel::utc()).unwrap();

    assert_eq!(pages.len(), 4);
    let sizes: Vec<usize> = pages.iter().map(Page::len).collect();
    assert_eq!(sizes, vec![1, 3, 3, 3]);
    assert_eq!(timestamps(&pages.pages()[0]), vec![1]);
    assert_eq!(timestamps(&pages.pages()[3]), vec![10, 9, 8]);
}

#[test]
fn empty_entries_yield_zero_pages() {
    let calls = Cell::new(0usize);
    let measure = |_: &str, _: f64, _: f64, _: f64| {
        calls.set(calls.get() + 1);
        10.0
    };
    let pages = paginate(&[], &measure, &layout(100.0), &TimestampLabel::utc()).unwrap();
    assert!(pages.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn oversized_single_entry_gets_one_page() {
    let entries = vec![Entry::new("u", "a very long note", 1)];
    let pages = paginate(&entries, &constant(5_000.0), &layout(100.0), &TimestampLabel::utc()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages.pages()[0].entries(), entries.as_slice());
}

#[test]
fn oversized_entry_in_the_middle_sits_alone() {
    // log3 is huge; neighbours fit together.
    let measure = |text: &str, _: f64, _: f64, _: f64| {
        if text.ends_with("log3") {
            500.0
        } else {
            20.0
        }
    };
    let pages = paginate(&logs(5), &measure, &layout(100.0), &TimestampLabel::utc()).unwrap();

    let layout_by_page: Vec<Vec<i64>> = pages.iter().map(timestamps).collect();
    assert_eq!(layout_by_page, vec![vec![2, 1], vec![3], vec![5, 4]]);
}

#[test]
fn every_entry_appears_exactly_once() {
    let entries = logs(37);
    let measure = |text: &str, _: f64, _: f64, _: f64| (text.len() % 7) as f64 * 9.0 + 5.0;
    let pages = paginate(&entries, &measure, &layout(120.0), &TimestampLabel::utc()).unwrap();

    let mut seen: HashMap<i64, usize> = HashMap::new();
    for page in &pages {
        assert!(!page.is_empty());
        for entry in page.entries() {
            *seen.entry(entry.timestamp).or_default() += 1;
        }
    }
    assert_eq!(seen.len(), entries.len());
    assert!(seen.values().all(|count| *count == 1));
    assert_eq!(pages.entry_count(), entries.len());
}

#[test]
fn pages_run_oldest_to_newest_and_keep_newest_first_inside() {
    let entries = logs(12);
    let pages = paginate(&entries, &constant(16.0), &layout(100.0), &TimestampLabel::utc()).unwrap();

    assert!(pages.pages()[0].entries().iter().any(|e| e.timestamp == 1));
    assert!(pages.pages()[pages.len() - 1]
        .entries()
        .iter()
        .any(|e| e.timestamp == 12));

    for page in &pages {
        let inside = timestamps(page);
        assert!(inside.windows(2).all(|pair| pair[0] > pair[1]));
    }
    for pair in pages.pages().windows(2) {
        let older_newest = pair[0].newest().unwrap().timestamp;
        let newer_oldest = pair[1].oldest().unwrap().timestamp;
        assert!(older_newest < newer_oldest);
    }
}

#[test]
fn no_page_exceeds_height_unless_it_holds_one_entry() {
    let entries = logs(40);
    let measure = |text: &str, _: f64, _: f64, _: f64| ((text.len() * 13) % 90) as f64;
    let params = LayoutParams {
        top_padding: 10.0,
        ..layout(150.0)
    };
    let label = TimestampLabel::utc();
    let pages = paginate(&entries, &measure, &params, &label).unwrap();

    for page in &pages {
        let used: f64 = params.top_padding
            + page
                .entries()
                .iter()
                .map(|e| measure(&label.measure_text(e), 0.0, 0.0, 0.0).ceil() + params.item_gap)
                .sum::<f64>();
        assert!(used <= params.page_height || page.len() == 1, "overfull page: {used}");
    }
}

#[derive(Debug, PartialEq)]
struct FontsNotLoaded;

struct FailOnSecondCall {
    calls: Cell<usize>,
}

impl Measure for FailOnSecondCall {
    type Error = FontsNotLoaded;

    fn measure(&self, _: &str, _: f64, _: f64, _: f64) -> Result<f64, FontsNotLoaded> {
        self.calls.set(self.calls.get() + 1);
        if self.calls.get() == 2 {
            Err(FontsNotLoaded)
        } else {
            Ok(10.0)
        }
    }
}

#[test]
fn measurement_failure_propagates_unchanged() {
    let measure = FailOnSecondCall {
        calls: Cell::new(0),
    };
    let result = paginate(&logs(5), &measure, &layout(100.0), &TimestampLabel::utc());
    assert_eq!(result, Err(FontsNotLoaded));
    assert_eq!(measure.calls.get(), 2);
}

#[test]
fn cached_measure_is_transparent() {
    let entries = logs(25);
    let plain = MonospaceMeasure::default();
    let cached = CachedMeasure::new(MonospaceMeasure::default());
    let params = LayoutParams {
        content_width: 120.0,
        page_height: 400.0,
        ..LayoutParams::default()
    };
    let label = TimestampLabel::utc();

    let expected = paginate(&entries, &plain, &params, &label).unwrap();
    let first = paginate(&entries, &cached, &params, &label).unwrap();
    let second = paginate(&entries, &cached, &params, &label).unwrap();

    assert_eq!(first, expected);
    assert_eq!(second, expected);
    assert_eq!(cached.len(), entries.len());
}

#[test]
fn monospace_measure_breaks_multi_line_notes() {
    // 10 columns, 20px rows. Label (20 cols) wraps to 2 rows; body adds 1 row per line.
    let measure = MonospaceMeasure { advance_ratio: 1.0 };
    let params = LayoutParams {
        content_width: 100.0,
        page_height: 200.0,
        font_size: 10.0,
        line_height: 20.0,
        item_gap: 0.0,
        top_padding: 0.0,
    };
    let entries = vec![
        Entry::new("u", "one\ntwo\nthree", 3_000),
        Entry::new("u", "short", 2_000),
        Entry::new("u", "short", 1_000),
    ];
    let pages = paginate(&entries, &measure, &params, &TimestampLabel::utc()).unwrap();

    // 100px + 60px fit on one page; the oldest (60px) goes to the next.
    let layout_by_page: Vec<Vec<i64>> = pages.iter().map(timestamps).collect();
    assert_eq!(layout_by_page, vec![vec![1_000], vec![3_000, 2_000]]);
}
