// Typed storage failures that callers need to tell apart
//
// Storage functions return `anyhow::Result`; errors listed here are wrapped
// in it and recovered with `anyhow::Error::downcast_ref`.

/// Error type for store conditions with a defined meaning upstream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Insert rejected by a uniqueness constraint
    #[error("duplicate {collection} key: {key}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },
}

impl StoreError {
    /// Whether an anyhow error from the store is a uniqueness violation
    pub fn is_duplicate_key(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::DuplicateKey { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_survives_anyhow_wrapping() {
        let err = anyhow::Error::new(StoreError::DuplicateKey {
            collection: "student",
            key: "24A01".to_string(),
        });
        assert!(StoreError::is_duplicate_key(&err));
        assert_eq!(err.to_string(), "duplicate student key: 24A01");

        assert!(!StoreError::is_duplicate_key(&anyhow::anyhow!(
            "connection refused"
        )));
    }
}
