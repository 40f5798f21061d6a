//! Entity id generation.
//!
//! Every row in the system is keyed by a lowercase ULID. The ids are
//! time-ordered, so `ORDER BY id` doubles as newest-first ordering in
//! the audit and notification listings, and their 26 characters fit
//! the 32-character key columns used throughout the schema.

use ulid::Ulid;

/// Mints identifiers for new entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Mint an id for a new row.
    #[must_use]
    pub fn generate(&self) -> String {
        Ulid::new().to_string().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_sized_for_key_columns() {
        let id_gen = IdGenerator::new();
        let a = id_gen.generate();
        let b = id_gen.generate();

        assert_ne!(a, b);
        assert_eq!(a.len(), 26);
        assert!(a.len() <= 32);
    }

    #[test]
    fn test_ids_are_lowercase() {
        let id = IdGenerator::new().generate();
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn test_ids_from_later_millis_sort_after() {
        let id_gen = IdGenerator::new();
        let earlier = id_gen.generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = id_gen.generate();

        assert!(later > earlier);
    }
}
