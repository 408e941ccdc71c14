use uuid::Uuid;

/// Mints identifiers for new orders.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Random 128-bit ids rendered as 32 lowercase hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_hex_and_distinct() {
        let mut ids = UuidIdGenerator;
        let first = ids.next_id();
        let second = ids.next_id();

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = testing::SequentialIdGenerator::default();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
    }
}
