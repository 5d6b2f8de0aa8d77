//! CMS content: the snapshot file and the plans payload decoder.

mod error;
pub mod flatted;
mod snapshot;

pub use error::LoaderError;
pub use snapshot::{ContentSnapshot, PlansBlob};

use crate::models::{PlanAttributes, PlanCatalog};

/// Decode the serialized plans payload into attribute records.
///
/// The decoded root must be a list of `{id, attributes}` records. Anything
/// else is a [`LoaderError`], which aborts page generation.
pub fn load_plan_attributes(body: &str) -> Result<PlanCatalog, LoaderError> {
    let root = flatted::parse(body)?;
    if !root.is_array() {
        return Err(LoaderError::Shape("expected a list of plans".into()));
    }
    let records: Vec<PlanAttributes> =
        serde_json::from_value(root).map_err(|e| LoaderError::Shape(e.to_string()))?;
    tracing::debug!(count = records.len(), "Decoded plan attributes");
    Ok(PlanCatalog::new(records))
}
