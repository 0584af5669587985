//! Display-width calculations for terminal cells.
//!
//! Every width in this crate is measured in terminal cells, not bytes or
//! chars: CJK characters and most emoji occupy two cells, control characters
//! occupy none.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex, PoisonError};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

/// Strings shorter than this are measured directly.
const CACHE_MIN_LEN: usize = 8;

static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> = LazyLock::new(|| {
    Mutex::new(LruCache::new(
        NonZeroUsize::new(1024).unwrap_or(NonZeroUsize::MIN),
    ))
});

/// Cell width of a single character.
#[must_use]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn measure(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Total cell width of a string.
///
/// Results for longer strings are memoized in a process-wide LRU cache.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return measure(text);
    }

    let mut cache = CELL_LEN_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(&width) = cache.get(text) {
        return width;
    }
    let width = measure(text);
    cache.put(text.to_owned(), width);
    width
}

/// Split `text` so that the left part is at most `max_width` cells wide.
///
/// A wide character straddling the limit goes to the right part.
#[must_use]
pub fn chop_cells(text: &str, max_width: usize) -> (&str, &str) {
    let mut width = 0;
    let mut split = 0;

    for (idx, c) in text.char_indices() {
        let w = char_width(c);
        if width + w > max_width {
            break;
        }
        width += w;
        split = idx + c.len_utf8();
    }

    text.split_at(split)
}

/// Crop or right-pad `text` so that it is exactly `width` cells wide.
///
/// When a wide character does not fit at the crop point the gap it leaves is
/// filled with spaces.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let (kept, _) = chop_cells(text, width);
    let kept_width = cell_len(kept);
    let mut out = String::with_capacity(kept.len() + width.saturating_sub(kept_width));
    out.push_str(kept);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(kept_width)));
    out
}

/// A string of `count` spaces.
#[must_use]
pub fn blank(count: usize) -> String {
    " ".repeat(count)
}
