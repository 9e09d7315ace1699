/// Constant value for `DEFAULT_LOG_LEVEL`.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Constant value for `LOG_MAX_FILES`.
pub const LOG_MAX_FILES: usize = 7;
/// Constant value for `LOG_ROTATION_SIZE`.
pub const LOG_ROTATION_SIZE: u64 = 100 * 1024 * 1024; // 100 MB
