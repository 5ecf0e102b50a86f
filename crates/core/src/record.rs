// Record trait shared by the three domain entities
//
// Each entity stands alone; the trait only ties an entity to the collection it
// lives in and to its field-level checks.

use crate::validation::ValidationError;

/// A domain entity that can be written to the record store.
pub trait Record {
    /// Name of the store collection holding this entity.
    const COLLECTION: &'static str;

    /// Check field-level invariants. Records without constraints accept everything.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
