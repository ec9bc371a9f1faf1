//! Quick-fix kind vocabulary for the annotation pass.
//!
//! Each kind carries a fixed arity: the number of string arguments that
//! identify one occurrence of that fix within a document. Keeping the arity
//! on the enum gives every call site the same table instead of scattering
//! argument-count assumptions across the driver.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A category of correction the annotation driver can propose for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFixKind {
    /// Retarget a broken link reference. Identified by the proposed link.
    ChangeLinkRef,
    /// Create the missing file a link points at. Identified by the file path.
    CreateFile,
    /// Remove a wiki page reference. Offered at most once per pass.
    DeleteWikiPageRef,
    /// Remove a wiki page title. Offered at most once per pass.
    DeleteWikiPageTitle,
    /// Rename the target file and update the reference to follow it.
    /// Identified by the old and new names.
    RenameFileAndReTarget,
    /// Rename the target file. Identified by the old and new names.
    RenameFile,
    /// Swap a wiki page reference with its title. Offered at most once per pass.
    SwapWikiPageRefTitle,
}

impl QuickFixKind {
    /// Every kind, in canonical-name order.
    pub const ALL: [QuickFixKind; 7] = [
        QuickFixKind::ChangeLinkRef,
        QuickFixKind::CreateFile,
        QuickFixKind::DeleteWikiPageRef,
        QuickFixKind::DeleteWikiPageTitle,
        QuickFixKind::RenameFileAndReTarget,
        QuickFixKind::RenameFile,
        QuickFixKind::SwapWikiPageRefTitle,
    ];

    /// Number of string arguments identifying one occurrence of this kind.
    pub const fn arity(self) -> usize {
        match self {
            QuickFixKind::ChangeLinkRef => 1,
            QuickFixKind::CreateFile => 1,
            QuickFixKind::DeleteWikiPageRef => 0,
            QuickFixKind::DeleteWikiPageTitle => 0,
            QuickFixKind::RenameFileAndReTarget => 2,
            QuickFixKind::RenameFile => 2,
            QuickFixKind::SwapWikiPageRefTitle => 0,
        }
    }

    /// Canonical name of the fix class, as the host plugin spells it.
    pub const fn name(self) -> &'static str {
        match self {
            QuickFixKind::ChangeLinkRef => "ChangeLinkRefQuickFix",
            QuickFixKind::CreateFile => "CreateFileQuickFix",
            QuickFixKind::DeleteWikiPageRef => "DeleteWikiPageRefQuickFix",
            QuickFixKind::DeleteWikiPageTitle => "DeleteWikiPageTitleQuickFix",
            QuickFixKind::RenameFileAndReTarget => "RenameFileAndReTargetQuickFix",
            QuickFixKind::RenameFile => "RenameFileQuickFix",
            QuickFixKind::SwapWikiPageRefTitle => "SwapWikiPageRefTitleQuickFix",
        }
    }
}

impl fmt::Display for QuickFixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known quick-fix kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quick-fix kind: {0}")]
pub struct ParseQuickFixKindError(pub String);

impl FromStr for QuickFixKind {
    type Err = ParseQuickFixKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickFixKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseQuickFixKindError(s.to_string()))
    }
}
