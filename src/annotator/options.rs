//! Pass-local policy flags for the annotation driver.

use serde::{Deserialize, Serialize};

/// Policy flags the driver consults while deciding which fixes to offer.
///
/// One value per analysis pass, typically filled from the host plugin's
/// settings blob. Every flag defaults to enabled; fields missing from the
/// blob keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotationOptions {
    /// Annotate at warning severity only, suppressing error-severity output.
    pub warnings_only: bool,
    /// Whether create-file fixes may be offered for missing link targets.
    pub can_create_file: bool,
    /// Whether the pass still needs to collect the link target list.
    pub need_target_list: bool,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        AnnotationOptions {
            warnings_only: true,
            can_create_file: true,
            need_target_list: true,
        }
    }
}
