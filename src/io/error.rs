//! Error types for generation and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and rendering operations
#[derive(Debug)]
pub enum CatwalkError {
    /// Failed to load a sprite image from the filesystem
    SpriteLoad {
        /// Path to the sprite file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A sprite's dimensions disagree with the rest of the sheet
    SpriteSize {
        /// Path to the offending sprite file
        path: PathBuf,
        /// Dimensions inferred from the first sprite loaded
        expected: (u32, u32),
        /// Dimensions actually found
        found: (u32, u32),
    },

    /// A glyph category has no sprite variants at all
    MissingSpriteCategory {
        /// Filename prefix of the missing category
        category: &'static str,
    },

    /// The sprite directory contains no usable sprite files
    EmptySpriteDirectory {
        /// Path to the directory
        path: PathBuf,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CatwalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpriteLoad { path, source } => {
                write!(f, "Failed to load sprite '{}': {source}", path.display())
            }
            Self::SpriteSize {
                path,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Inconsistent sprite size for '{}': expected {}x{}, found {}x{}",
                    path.display(),
                    expected.0,
                    expected.1,
                    found.0,
                    found.1
                )
            }
            Self::MissingSpriteCategory { category } => {
                write!(f, "Missing sprite category: no file starts with '{category}'")
            }
            Self::EmptySpriteDirectory { path } => {
                write!(f, "No sprite files in directory '{}'", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CatwalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SpriteLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, CatwalkError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CatwalkError {
    CatwalkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::invalid_parameter;

    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("cat_chance", &250, &"must be a percentage in [0, 100]");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'cat_chance' = '250': must be a percentage in [0, 100]"
        );
    }
}
