//! Locale-aware name comparison used by both browsers.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

thread_local! {
    /// CLDR root collation, non-ignorable, with a code point tiebreak.
    static ROOT_COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Compare two display names with the default (root) locale collation.
///
/// Unicode Collation Algorithm at tertiary strength: base letters first, then
/// accents, then case with lowercase first. Names that collate equal fall back
/// to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
