/// Worker count the first ramp step runs with.
pub const DEFAULT_START_WORKERS: u32 = 1;

/// Worker count the final ramp step runs with, inclusive.
pub const DEFAULT_MAX_WORKERS: u32 = 100;

/// Port the dashboard server listens on.
pub const DEFAULT_PORT: u16 = 8081;
