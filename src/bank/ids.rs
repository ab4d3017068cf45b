//! Instance id generation.

use uuid::Uuid;

/// Source of per-record instance ids.
pub trait IdGenerator {
    /// Produce the next id. Every call returns a fresh value.
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs. Ids differ on every run.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        log::debug!("generated instance id {}", id);
        id
    }
}

/// Deterministic ids (`{prefix}-1`, `{prefix}-2`, ...) for tests.
#[cfg(test)]
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: usize,
}

#[cfg(test)]
impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
