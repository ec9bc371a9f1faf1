//! Per-pass deduplication state for offered quick fixes.
//!
//! # Duplicate suppression
//!
//! A document analyzer may reach the same logical issue from several code
//! paths within one pass (a broken link re-visited while resolving wiki page
//! titles, for example). Re-emitting the fix each time stacks duplicate
//! suggestions in the editor. The driver asks this state "is this fix new?"
//! before attaching it and records the offer afterwards, or does both at
//! once with [`AnnotationState::record_if_new`].

use std::collections::{HashMap, HashSet};

use super::offer_key::OfferKey;
use super::options::AnnotationOptions;
use super::quick_fix::QuickFixKind;

/// Deduplication and bookkeeping state owned by a single analysis pass.
///
/// Created fresh when the pass starts and discarded when it ends; it carries
/// no cross-pass or cross-document identity and is used by exactly one
/// sequential caller.
#[derive(Debug, Default)]
pub struct AnnotationState {
    /// Policy flags for this pass.
    pub options: AnnotationOptions,
    /// Offered occurrences, keyed by kind. A kind is present iff at least
    /// one occurrence of it has been recorded.
    offered: HashMap<QuickFixKind, HashSet<OfferKey>>,
    had_annotation: bool,
}

impl AnnotationState {
    /// Creates the state for a new pass with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the state for a new pass with the given policy flags.
    pub fn with_options(options: AnnotationOptions) -> Self {
        AnnotationState {
            options,
            ..Self::default()
        }
    }

    /// Records `kind` with `args` as offered, unless it already was.
    ///
    /// Returns `true` on the first offer of this occurrence (the caller
    /// should attach the fix) and `false` on every later identical call (the
    /// caller must suppress the duplicate).
    ///
    /// # Panics
    ///
    /// Panics when `args.len()` differs from `kind.arity()`; see
    /// [`OfferKey::for_args`].
    pub fn record_if_new(&mut self, kind: QuickFixKind, args: &[&str]) -> bool {
        let key = OfferKey::for_args(kind, args);
        let keys = self.offered.entry(kind).or_default();
        if keys.contains(&key) {
            log::debug!("suppressing duplicate quick fix {kind} [{key}]");
            return false;
        }
        keys.insert(key);
        true
    }

    /// Pure query form of [`AnnotationState::record_if_new`].
    ///
    /// Returns `true` iff the occurrence has not yet been offered. Never
    /// mutates, so the answer is stable until a `record_if_new` call for the
    /// same occurrence.
    ///
    /// # Panics
    ///
    /// Panics when `args.len()` differs from `kind.arity()`.
    pub fn is_new(&self, kind: QuickFixKind, args: &[&str]) -> bool {
        let key = OfferKey::for_args(kind, args);
        !self
            .offered
            .get(&kind)
            .is_some_and(|keys| keys.contains(&key))
    }

    /// Whether at least one occurrence of `kind`, with any arguments, has
    /// been recorded this pass.
    pub fn has_any_offered(&self, kind: QuickFixKind) -> bool {
        self.offered.contains_key(&kind)
    }

    /// Whether every listed kind has at least one recorded occurrence.
    ///
    /// Gates compound fixes that should only appear once several distinct
    /// kinds have individually fired. An empty list is vacuously `true`.
    pub fn all_kinds_touched(&self, kinds: &[QuickFixKind]) -> bool {
        kinds.iter().all(|kind| self.offered.contains_key(kind))
    }

    /// Number of distinct occurrences recorded for `kind` this pass.
    ///
    /// Unlike the other queries this never treats the kind as touched; a
    /// count of zero leaves [`AnnotationState::has_any_offered`] unchanged.
    pub fn count_offered(&self, kind: QuickFixKind) -> usize {
        self.offered.get(&kind).map_or(0, HashSet::len)
    }

    /// Records that this pass attached an annotation to the document.
    pub fn mark_annotated(&mut self) {
        self.had_annotation = true;
    }

    /// Whether this pass has attached at least one annotation so far.
    pub fn had_annotation(&self) -> bool {
        self.had_annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_succeeds_and_duplicate_is_suppressed() {
        let mut state = AnnotationState::new();

        assert!(
            state.record_if_new(QuickFixKind::RenameFile, &["old.md", "new.md"]),
            "first offer should be recorded"
        );
        assert!(
            !state.record_if_new(QuickFixKind::RenameFile, &["old.md", "new.md"]),
            "identical offer should be suppressed"
        );
        assert_eq!(state.count_offered(QuickFixKind::RenameFile), 1);
    }

    #[test]
    fn arity_zero_kind_records_at_most_once() {
        let mut state = AnnotationState::new();

        assert!(state.record_if_new(QuickFixKind::DeleteWikiPageTitle, &[]));
        assert!(!state.record_if_new(QuickFixKind::DeleteWikiPageTitle, &[]));
        assert!(state.has_any_offered(QuickFixKind::DeleteWikiPageTitle));
        assert_eq!(state.count_offered(QuickFixKind::DeleteWikiPageTitle), 1);
    }

    #[test]
    fn is_new_does_not_mutate() {
        let state = AnnotationState::new();

        for _ in 0..3 {
            assert!(state.is_new(QuickFixKind::ChangeLinkRef, &["target.md"]));
        }
        assert!(!state.has_any_offered(QuickFixKind::ChangeLinkRef));
        assert_eq!(state.count_offered(QuickFixKind::ChangeLinkRef), 0);
    }

    #[test]
    fn is_new_flips_only_after_record() {
        let mut state = AnnotationState::new();

        assert!(state.is_new(QuickFixKind::CreateFile, &["missing.md"]));
        assert!(state.record_if_new(QuickFixKind::CreateFile, &["missing.md"]));
        assert!(!state.is_new(QuickFixKind::CreateFile, &["missing.md"]));
        assert!(
            state.is_new(QuickFixKind::CreateFile, &["other.md"]),
            "a different target of the same kind is still new"
        );
    }

    #[test]
    fn swapped_arguments_are_distinct_occurrences() {
        let mut state = AnnotationState::new();

        assert!(state.record_if_new(QuickFixKind::RenameFileAndReTarget, &["a.md", "b.md"]));
        assert!(
            state.record_if_new(QuickFixKind::RenameFileAndReTarget, &["b.md", "a.md"]),
            "argument order is part of the identity"
        );
        assert_eq!(state.count_offered(QuickFixKind::RenameFileAndReTarget), 2);
    }

    #[test]
    fn has_any_offered_ignores_arguments() {
        let mut state = AnnotationState::new();
        assert!(!state.has_any_offered(QuickFixKind::ChangeLinkRef));

        state.record_if_new(QuickFixKind::ChangeLinkRef, &["first.md"]);
        assert!(state.has_any_offered(QuickFixKind::ChangeLinkRef));

        state.record_if_new(QuickFixKind::ChangeLinkRef, &["first.md"]);
        assert!(
            state.has_any_offered(QuickFixKind::ChangeLinkRef),
            "duplicate attempts keep the kind touched"
        );
    }

    #[test]
    fn all_kinds_touched_requires_every_kind() {
        let mut state = AnnotationState::new();
        let kinds = [
            QuickFixKind::DeleteWikiPageRef,
            QuickFixKind::DeleteWikiPageTitle,
        ];

        assert!(!state.all_kinds_touched(&kinds));

        state.record_if_new(QuickFixKind::DeleteWikiPageRef, &[]);
        assert!(!state.all_kinds_touched(&kinds), "one untouched kind fails the gate");

        state.record_if_new(QuickFixKind::DeleteWikiPageTitle, &[]);
        assert!(state.all_kinds_touched(&kinds));
        assert!(state.all_kinds_touched(&[]), "empty list is vacuously true");
    }

    #[test]
    fn count_offered_tracks_distinct_keys_only() {
        let mut state = AnnotationState::new();

        state.record_if_new(QuickFixKind::CreateFile, &["a.md"]);
        state.record_if_new(QuickFixKind::CreateFile, &["b.md"]);
        state.record_if_new(QuickFixKind::CreateFile, &["a.md"]);

        assert_eq!(state.count_offered(QuickFixKind::CreateFile), 2);
    }

    #[test]
    fn annotation_marker_starts_false_and_sticks() {
        let mut state = AnnotationState::new();
        assert!(!state.had_annotation());

        state.mark_annotated();
        assert!(state.had_annotation());

        state.mark_annotated();
        assert!(state.had_annotation(), "marker stays set for the pass");
    }

    #[test]
    fn with_options_carries_the_flags() {
        let options = AnnotationOptions {
            warnings_only: false,
            ..AnnotationOptions::default()
        };
        let state = AnnotationState::with_options(options.clone());
        assert_eq!(state.options, options);
    }

    #[test]
    #[should_panic(expected = "quick-fix kind RenameFileQuickFix takes 2 argument(s), given 0")]
    fn record_with_wrong_arity_panics() {
        let mut state = AnnotationState::new();
        state.record_if_new(QuickFixKind::RenameFile, &[]);
    }

    #[test]
    #[should_panic(expected = "takes 1 argument(s), given 2")]
    fn query_with_wrong_arity_panics() {
        let state = AnnotationState::new();
        state.is_new(QuickFixKind::CreateFile, &["a.md", "b.md"]);
    }
}
