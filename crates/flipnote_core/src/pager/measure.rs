//! Height measurement seam.
//!
//! The pager never lays out text itself. Callers inject a [`Measure`] bound
//! to their live font/layout environment so computed breaks match what is
//! rendered.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use unicode_width::UnicodeWidthStr;

/// Rendered height of `text` wrapped to `content_width`.
///
/// Implementations must be deterministic and free of observable side
/// effects; the result is in the same unit as the page height.
pub trait Measure {
    type Error;

    fn measure(
        &self,
        text: &str,
        content_width: f64,
        font_size: f64,
        line_height: f64,
    ) -> Result<f64, Self::Error>;
}

impl<F> Measure for F
where
    F: Fn(&str, f64, f64, f64) -> f64,
{
    type Error = Infallible;

    fn measure(
        &self,
        text: &str,
        content_width: f64,
        font_size: f64,
        line_height: f64,
    ) -> Result<f64, Infallible> {
        Ok(self(text, content_width, font_size, line_height))
    }
}

/// Fixed-advance estimator for terminals and tests.
///
/// Each `\n`-separated line wraps at `content_width / (font_size * advance_ratio)`
/// columns; wide (East Asian) characters take two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl MonospaceMeasure {
    /// Columns that fit on one row. Never less than one.
    pub fn columns(&self, content_width: f64, font_size: f64) -> usize {
        let advance = font_size * self.advance_ratio;
        if !advance.is_finite() || advance <= 0.0 || !content_width.is_finite() {
            return 1;
        }
        let columns = (content_width / advance).floor();
        if columns < 1.0 {
            1
        } else {
            columns as usize
        }
    }

    /// Visual rows for `text` after hard breaks and wrapping.
    pub fn rows(&self, text: &str, content_width: f64, font_size: f64) -> usize {
        let columns = self.columns(content_width, font_size);
        text.split('\n')
            .map(|line| match line.width() {
                0 => 1,
                width => width.div_ceil(columns),
            })
            .sum()
    }
}

impl Measure for MonospaceMeasure {
    type Error = Infallible;

    fn measure(
        &self,
        text: &str,
        content_width: f64,
        font_size: f64,
        line_height: f64,
    ) -> Result<f64, Infallible> {
        let rows = self.rows(text, content_width, font_size);
        Ok(rows as f64 * line_height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    content_width: u64,
    font_size: u64,
    line_height: u64,
}

/// Memoizing wrapper; repeated measurements hit the cache.
///
/// Failed measurements are not cached.
pub struct CachedMeasure<M> {
    inner: M,
    cache: RefCell<HashMap<MeasureKey, f64>>,
}

impl<M> CachedMeasure<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of cached measurements.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drops all cached values, e.g. after a font change.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<M: Measure> Measure for CachedMeasure<M> {
    type Error = M::Error;

    fn measure(
        &self,
        text: &str,
        content_width: f64,
        font_size: f64,
        line_height: f64,
    ) -> Result<f64, M::Error> {
        let key = MeasureKey {
            text: text.to_owned(),
            content_width: content_width.to_bits(),
            font_size: font_size.to_bits(),
            line_height: line_height.to_bits(),
        };
        if let Some(height) = self.cache.borrow().get(&key) {
            return Ok(*height);
        }

        let height = self
            .inner
            .measure(text, content_width, font_size, line_height)?;
        self.cache.borrow_mut().insert(key, height);
        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use super::{CachedMeasure, Measure, MonospaceMeasure};
    use std::cell::Cell;

    #[test]
    fn closures_are_measurers() {
        let measure = |text: &str, _: f64, _: f64, line_height: f64| {
            text.split('\n').count() as f64 * line_height
        };
        assert_eq!(measure.measure("a\nb", 100.0, 12.0, 20.0), Ok(40.0));
    }

    #[test]
    fn monospace_wraps_long_lines() {
        // 60 / (10 * 0.5) = 12 columns
        let measure = MonospaceMeasure { advance_ratio: 0.5 };
        assert_eq!(measure.columns(60.0, 10.0), 12);
        assert_eq!(measure.rows("abcdefghijklm", 60.0, 10.0), 2);
        assert_eq!(measure.rows("short\n\nline", 60.0, 10.0), 3);
        assert_eq!(measure.measure("abc", 60.0, 10.0, 16.0), Ok(16.0));
    }

    #[test]
    fn monospace_counts_wide_characters_twice() {
        let measure = MonospaceMeasure { advance_ratio: 1.0 };
        // 4 columns; six wide characters need 12 columns
        assert_eq!(measure.rows("日本語のメモ", 40.0, 10.0), 3);
    }

    #[test]
    fn monospace_never_divides_by_zero() {
        let measure = MonospaceMeasure { advance_ratio: 0.0 };
        assert_eq!(measure.columns(100.0, 12.0), 1);
        assert_eq!(MonospaceMeasure::default().columns(1.0, 18.0), 1);
    }

    #[test]
    fn cached_measure_calls_inner_once_per_key() {
        let calls = Cell::new(0usize);
        let inner = |text: &str, _: f64, _: f64, _: f64| {
            calls.set(calls.get() + 1);
            text.len() as f64
        };
        let cached = CachedMeasure::new(inner);

        assert_eq!(cached.measure("hello", 100.0, 12.0, 16.0), Ok(5.0));
        assert_eq!(cached.measure("hello", 100.0, 12.0, 16.0), Ok(5.0));
        assert_eq!(cached.measure("hello", 200.0, 12.0, 16.0), Ok(5.0));
        assert_eq!(calls.get(), 2);
        assert_eq!(cached.len(), 2);

        cached.clear();
        assert!(cached.is_empty());
    }
}
