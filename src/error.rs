//! Error types for the solar events library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar event calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Polar night: the sun stays below the horizon for the whole day.
    ///
    /// The hour-angle cosine exceeds +1, so no sunrise or sunset exists
    /// at this latitude on this day.
    SunNeverRises,
    /// Polar day: the sun stays above the horizon for the whole day.
    ///
    /// The hour-angle cosine falls below -1, so no sunrise or sunset exists
    /// at this latitude on this day.
    SunNeverSets,
    /// Invalid elevation angle for a custom horizon.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SunNeverRises => {
                write!(f, "sun never rises at this latitude on this day (polar night)")
            }
            Self::SunNeverSets => {
                write!(f, "sun never sets at this latitude on this day (polar day)")
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Checks whether this error reports a polar day or polar night.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(self, Self::SunNeverRises | Self::SunNeverSets)
    }
}
