// Student domain type
//
// Identity record for an enrolled student. Created once at enrollment; never
// mutated by this system.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::record::Record;
use crate::validation::{validate_semester, ValidationError};

/// Student - an enrolled student identified by roll number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Student {
    /// Unique roll number. Treated as an opaque, sortable token.
    #[cfg_attr(feature = "openapi", schema(example = "249Y1A3901"))]
    pub roll_number: String,
    /// Full name of the student.
    #[cfg_attr(feature = "openapi", schema(example = "Asha Rao"))]
    pub name: String,
    /// Department / branch.
    #[cfg_attr(feature = "openapi", schema(example = "AI & ML"))]
    pub branch: String,
    /// Current semester number (1-12).
    #[cfg_attr(feature = "openapi", schema(example = 3, minimum = 1, maximum = 12))]
    pub current_semester: i32,
    /// Academic year label.
    #[cfg_attr(feature = "openapi", schema(example = "2024-25"))]
    pub academic_year: String,
}

impl Record for Student {
    const COLLECTION: &'static str = "student";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_semester("current_semester", self.current_semester)
    }
}
