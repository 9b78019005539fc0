//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [multilang] Section Defaults
// ============================================================================

pub mod multilang {
    /// Output extensions whose pages may declare a `lang` list.
    pub fn extensions() -> Vec<String> {
        vec![".html".into()]
    }
}
