//! Runtime settings for batch processing of OFF files.
//!
//! Values are immutable once built and validated by [`BatchConfig::new`], so
//! downstream crates never see an unusable configuration.

use std::fmt;

use crate::constants::MAX_FILE_SIZE;

/// Immutable batch settings shared by the report crate and its binary.
///
/// # Examples
/// ```
/// use config::BatchConfig;
/// let config = BatchConfig::default();
/// assert!(!config.parallel);
/// assert!(config.max_file_size > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Process files on the rayon thread pool instead of sequentially.
    pub parallel: bool,
    /// Largest input file, in bytes, that the parser will read.
    pub max_file_size: usize,
}

impl BatchConfig {
    /// Builds a configuration, rejecting a zero file-size limit.
    ///
    /// # Examples
    /// ```
    /// use config::BatchConfig;
    /// let cfg = BatchConfig::new(true, 1024).expect("valid config");
    /// assert!(cfg.parallel);
    /// ```
    pub fn new(parallel: bool, max_file_size: usize) -> Result<Self, ConfigError> {
        if max_file_size == 0 {
            return Err(ConfigError::InvalidFileSizeLimit(max_file_size));
        }
        Ok(Self {
            parallel,
            max_file_size,
        })
    }

    /// Returns a copy with parallel processing switched on or off.
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the file-size limit would reject every file.
    InvalidFileSizeLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFileSizeLimit(value) => {
                write!(f, "max_file_size must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
