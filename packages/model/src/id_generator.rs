use crc32fast::Hasher;
use std::collections::HashSet;

/// Short stable hash used to seed ids, e.g. from a store id
pub fn get_seed(input: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for sections within one editing session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(input: &str) -> Self {
        Self::from_seed(get_seed(input))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Next id not already in `taken` (documents reloaded from storage may
    /// already hold ids from an earlier session with the same seed)
    pub fn new_unique_id(&mut self, taken: &HashSet<&str>) -> String {
        loop {
            let id = self.new_id();
            if !taken.contains(id.as_str()) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// Deterministic page id derived from its name, skipping ids in `taken`
pub fn derive_page_id(name: &str, taken: &HashSet<&str>) -> String {
    let mut attempt: u32 = 0;
    loop {
        let id = get_seed(&format!("page:{}:{}", name, attempt));
        if !taken.contains(id.as_str()) {
            return id;
        }
        attempt += 1;
    }
}
