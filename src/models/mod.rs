pub mod app_state;
pub mod changelog;
pub mod display_value;
pub mod faq;
pub mod hint;
pub mod landing;
pub mod plan;
pub mod plan_attributes;

pub use app_state::AppState;
pub use changelog::{ChangelogCategory, ChangelogEntry, Color};
pub use display_value::DisplayValue;
pub use faq::Faq;
pub use hint::{Hint, HintOverride, HintPlanValue, HintRecord, Hints, PlanRef, CHECK_MARKER};
pub use landing::{Customer, Feature, Image, Integration, Review};
pub use plan::Plan;
pub use plan_attributes::{AttributeValue, ExtraPacket, PlanAttributes, PlanCatalog};

use serde::{Deserialize, Deserializer};

/// GraphQL returns `null` for empty optional fields; collapse those into the
/// field's default instead of failing the whole snapshot.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
