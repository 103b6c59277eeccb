// Ids taken from the seeded venue list.

/// UGC-Nice, enabled.
pub const NICE_PROJECT_ID: i64 = -1867723345;

/// UGC-Bordeaux, seeded disabled.
pub const DISABLED_PROJECT_ID: i64 = -621102575;

pub const UNKNOWN_PROJECT_ID: i64 = 42;
