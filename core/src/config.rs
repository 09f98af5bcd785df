/// Behaviours that differ between Chip-8 interpreters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quirks {
    /// Whether FX55/FX65 leave I pointing just past the last byte they touched
    /// (I += X + 1) instead of leaving it unchanged.
    pub load_store_increments_i: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            load_store_increments_i: true,
        }
    }
}

/// Settings for a `Chip8` instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub quirks: Quirks,
    /// Seeds the generator behind CXNN; when `None` it's seeded from the OS.
    pub seed: Option<u64>,
}
