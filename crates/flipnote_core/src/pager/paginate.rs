//! Full pagination pass.
//!
//! # Contract
//! - Input entries are newest-first; output pages are oldest-first.
//! - Inside a page, entries keep consumption order (newest first).
//! - Every page starts at `top_padding`; every entry costs its rounded-up
//!   measured height plus `item_gap`.
//! - A page closes only when the next entry would overflow it and it already
//!   holds an entry, so an oversized entry sits alone on its own page.
//! - Empty input yields zero pages.

use crate::model::entry::Entry;
use crate::model::layout::LayoutParams;
use crate::model::page::{Page, PageSet};
use crate::pager::label::TimestampLabel;
use crate::pager::measure::Measure;
use log::{debug, error};
use std::time::Instant;

/// Splits `entries` into height-bounded pages.
///
/// Calls `measure` exactly once per entry, in input order, with the
/// labelled entry text.
///
/// # Errors
/// Returns the first measurement error unchanged; no partial result is kept.
pub fn paginate<M>(
    entries: &[Entry],
    measure: &M,
    layout: &LayoutParams,
    label: &TimestampLabel,
) -> Result<PageSet, M::Error>
where
    M: Measure + ?Sized,
{
    let started_at = Instant::now();
    if entries.is_empty() {
        return Ok(PageSet::empty());
    }

    let mut closed: Vec<Page> = Vec::new();
    let mut open: Vec<Entry> = Vec::new();
    let mut open_height = layout.top_padding;

    for (index, entry) in entries.iter().enumerate() {
        let text = label.measure_text(entry);
        let measured = match measure.measure(
            &text,
            layout.content_width,
            layout.font_size,
            layout.line_height,
        ) {
            Ok(height) => height,
            Err(err) => {
                error!(
                    "event=paginate module=pager status=error error_code=measure_failed entry_index={} duration_ms={}",
                    index,
                    started_at.elapsed().as_millis()
                );
                return Err(err);
            }
        };
        let cost = measured.ceil() + layout.item_gap;

        if open_height + cost > layout.page_height && !open.is_empty() {
            closed.push(Page::new(std::mem::take(&mut open)));
            open_height = layout.top_padding;
        }
        open.push(entry.clone());
        open_height += cost;
    }
    if !open.is_empty() {
        closed.push(Page::new(open));
    }

    closed.reverse();
    debug!(
        "event=paginate module=pager status=ok entries={} pages={} duration_ms={}",
        entries.len(),
        closed.len(),
        started_at.elapsed().as_millis()
    );
    Ok(PageSet::new(closed))
}

#[cfg(test)]
mod tests {
    use super::paginate;
    use crate::model::entry::Entry;
    use crate::model::layout::LayoutParams;
    use crate::pager::label::TimestampLabel;
    use std::cell::RefCell;

    fn layout(page_height: f64, item_gap: f64, top_padding: f64) -> LayoutParams {
        LayoutParams {
            content_width: 100.0,
            page_height,
            font_size: 12.0,
            line_height: 16.0,
            item_gap,
            top_padding,
        }
    }

    fn entries(newest: i64) -> Vec<Entry> {
        (1..=newest)
            .rev()
            .map(|ts| Entry::new("u", format!("log{ts}"), ts))
            .collect()
    }

    fn timestamps(page: &crate::model::page::Page) -> Vec<i64> {
        page.entries().iter().map(|e| e.timestamp).collect()
    }

    #[test]
    fn fractional_heights_are_rounded_up() {
        // ceil(24.2) + 0 = 25 per entry; 4 * 25 = 100 fits, the fifth does not.
        let measure = |_: &str, _: f64, _: f64, _: f64| 24.2;
        let pages = paginate(&entries(5), &measure, &layout(100.0, 0.0, 0.0), &TimestampLabel::utc())
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(timestamps(&pages.pages()[0]), vec![1]);
        assert_eq!(timestamps(&pages.pages()[1]), vec![5, 4, 3, 2]);
    }

    #[test]
    fn top_padding_is_charged_once_per_page() {
        // 20 + 3 * 25 = 95 fits; a fourth entry overflows 100.
        let measure = |_: &str, _: f64, _: f64, _: f64| 20.0;
        let pages = paginate(&entries(4), &measure, &layout(100.0, 5.0, 20.0), &TimestampLabel::utc())
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(timestamps(&pages.pages()[1]), vec![4, 3, 2]);
        assert_eq!(timestamps(&pages.pages()[0]), vec![1]);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let measure = |_: &str, _: f64, _: f64, _: f64| 50.0;
        let pages = paginate(&entries(2), &measure, &layout(100.0, 0.0, 0.0), &TimestampLabel::utc())
            .unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn gap_is_charged_and_exact_fit_with_gap_stays_on_page() {
        // 20 + 5 = 25 per entry; four reach 100 exactly, the fifth breaks.
        let measure = |_: &str, _: f64, _: f64, _: f64| 20.0;
        let pages = paginate(&entries(9), &measure, &layout(100.0, 5.0, 0.0), &TimestampLabel::utc())
            .unwrap();
        let by_page: Vec<Vec<i64>> = pages.iter().map(timestamps).collect();
        assert_eq!(by_page, vec![vec![1], vec![5, 4, 3, 2], vec![9, 8, 7, 6]]);

        // Same entries one unit short of the boundary drop to three per page.
        let pages = paginate(&entries(9), &measure, &layout(99.0, 5.0, 0.0), &TimestampLabel::utc())
            .unwrap();
        let by_page: Vec<Vec<i64>> = pages.iter().map(timestamps).collect();
        assert_eq!(by_page, vec![vec![3, 2, 1], vec![6, 5, 4], vec![9, 8, 7]]);
    }

    #[test]
    fn padding_and_gap_together_meet_page_height_exactly() {
        // 10 + 3 * (25 + 5) = 100.
        let measure = |_: &str, _: f64, _: f64, _: f64| 25.0;
        let pages = paginate(&entries(4), &measure, &layout(100.0, 5.0, 10.0), &TimestampLabel::utc())
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(timestamps(&pages.pages()[1]), vec![4, 3, 2]);
    }

    #[test]
    fn measures_labelled_text_in_input_order() {
        let seen = RefCell::new(Vec::new());
        let measure = |text: &str, width: f64, font: f64, line: f64| {
            seen.borrow_mut().push((text.to_owned(), width, font, line));
            10.0
        };
        let input = vec![Entry::new("u", "second", 86_400_000), Entry::new("u", "first", 0)];
        paginate(&input, &measure, &layout(500.0, 0.0, 0.0), &TimestampLabel::utc()).unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "1970/01/02(金) 00:00\nsecond");
        assert_eq!(seen[1].0, "1970/01/01(木) 00:00\nfirst");
        assert_eq!((seen[0].1, seen[0].2, seen[0].3), (100.0, 12.0, 16.0));
    }
}
