//! Composite keys identifying one offered occurrence of a quick fix.
//!
//! Arguments are stored as separate fields rather than joined into a single
//! delimited string, so key equality is structural and an argument may
//! contain any character, including the separator used for log output.

use std::fmt;

use super::quick_fix::QuickFixKind;

/// Separator between arguments in log output. Never parsed back.
const DISPLAY_SEPARATOR: char = '|';

/// Identifies one offered occurrence of a quick-fix kind within a pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OfferKey {
    /// Arity-0 kinds: the kind occurring at all is the occurrence.
    Marker,
    /// Arity-1 kinds: the single identifying argument.
    Single(String),
    /// Arity-2 kinds: both identifying arguments, order-sensitive.
    Pair(String, String),
}

impl OfferKey {
    /// Builds the key for `kind` from its identifying arguments.
    ///
    /// # Panics
    ///
    /// Panics when `args.len()` differs from `kind.arity()`. A mismatch is a
    /// caller bug (the kind/arity table is fixed), not a recoverable runtime
    /// condition, and is never silently coerced.
    pub fn for_args(kind: QuickFixKind, args: &[&str]) -> OfferKey {
        assert_eq!(
            args.len(),
            kind.arity(),
            "quick-fix kind {kind} takes {} argument(s), given {}",
            kind.arity(),
            args.len()
        );

        match args {
            [] => OfferKey::Marker,
            [id] => OfferKey::Single((*id).to_string()),
            [first, second] => OfferKey::Pair((*first).to_string(), (*second).to_string()),
            _ => unreachable!("no quick-fix kind takes more than two arguments"),
        }
    }
}

impl fmt::Display for OfferKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferKey::Marker => f.write_str("*"),
            OfferKey::Single(id) => f.write_str(id),
            OfferKey::Pair(first, second) => {
                write!(f, "{first}{DISPLAY_SEPARATOR}{second}")
            }
        }
    }
}
