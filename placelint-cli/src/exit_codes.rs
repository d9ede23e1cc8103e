/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const VALIDATION_FAILED: i32 = 1;
pub const INPUT_ERROR: i32 = 2;
