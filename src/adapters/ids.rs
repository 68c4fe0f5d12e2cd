use crate::domain::ports::IdGenerator;
use uuid::Uuid;

/// Random (v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers counting up from a seed, for reproducible runs and tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn starting_at(seed: u128) -> Self {
        Self { next: seed }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIdGenerator::starting_at(7);
        assert_eq!(ids.generate(), Uuid::from_u128(7));
        assert_eq!(ids.generate(), Uuid::from_u128(8));
    }

    #[test]
    fn test_uuid_generator_is_random() {
        let mut ids = UuidGenerator;
        assert_ne!(ids.generate(), ids.generate());
    }
}
