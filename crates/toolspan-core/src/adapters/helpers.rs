//! Small helpers shared by the projecting adapters

use crate::canonical::CanonicalTool;

/// The description a projected tool should carry: `description`, falling
/// back to `summary`, then `display_name`, then empty.
pub(crate) fn canonical_description(ct: &CanonicalTool) -> &str {
    if !ct.description.is_empty() {
        &ct.description
    } else if !ct.summary.is_empty() {
        &ct.summary
    } else if !ct.display_name.is_empty() {
        &ct.display_name
    } else {
        ""
    }
}
