//! Public click identifier generation.

use uuid::Uuid;

/// Generates a fresh public click identifier.
///
/// A hyphenated UUIDv4 string (36 characters): globally unique, never
/// reused, assigned once at creation. Not a security token; uniqueness is
/// the only requirement.
pub fn new_public_click_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_public_id_has_uuid_length() {
        assert_eq!(new_public_click_id().len(), 36);
    }

    #[test]
    fn test_public_id_is_hyphenated_uuid() {
        let id = new_public_click_id();
        assert_eq!(id.split('-').count(), 5);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_hexdigit() || c == '-')
        );
    }

    #[test]
    fn test_public_ids_are_unique() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            ids.insert(new_public_click_id());
        }
        assert_eq!(ids.len(), 1000);
    }
}
