pub mod offer_key;
pub mod options;
pub mod quick_fix;
pub mod state;

// Re-export main types
pub use offer_key::OfferKey;
pub use options::AnnotationOptions;
pub use quick_fix::{ParseQuickFixKindError, QuickFixKind};
pub use state::AnnotationState;
