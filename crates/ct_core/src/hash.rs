use std::hash::{BuildHasherDefault, Hasher};

pub const DEFAULT_TABLE_SIZE: usize = 100;

const DJB2_SEED: u64 = 5381;

// Reducing at every step lands in the same bucket as reducing the unbounded hash once.
pub fn simple_hash(input: &str, table_size: usize) -> usize {
    let modulus = table_size.max(1) as u128;
    let mut hash = u128::from(DJB2_SEED) % modulus;
    for ch in input.chars() {
        hash = (hash * 33 + u128::from(u32::from(ch))) % modulus;
    }
    hash as usize
}

#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(b));
        }
    }
}

pub type EmailIndexHasher = BuildHasherDefault<Djb2Hasher>;
