// Event domain type
//
// An Event describes a recurring series (e.g. "Tech Talk"), not one occurrence.
// Participation records refer to it by name only.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::record::Record;

/// Event - a named event series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Event series name. Not unique.
    #[cfg_attr(feature = "openapi", schema(example = "AI Symposium"))]
    pub name: String,
    /// Branch primarily associated with the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "AI & ML"))]
    pub branch: Option<String>,
    /// Academic year for this event series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "2024-25"))]
    pub academic_year: Option<String>,
}

impl Record for Event {
    const COLLECTION: &'static str = "event";
}
