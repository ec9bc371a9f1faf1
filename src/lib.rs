//! Quick-fix deduplication state for markdown annotation passes.
//!
//! One [`AnnotationState`] lives for exactly one document analysis pass. The
//! annotation driver consults it before attaching a correction so the same
//! logical fix is never offered twice, no matter how many code paths revisit
//! the same issue.

pub mod annotator;

// Re-export the public vocabulary at the crate root
pub use annotator::{
    AnnotationOptions, AnnotationState, OfferKey, ParseQuickFixKindError, QuickFixKind,
};
