/// Decimal precision for percentage output
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Maximum hours a single time entry may carry
pub const MAX_ENTRY_HOURS: u32 = 24;
