//! Core data types for solar event calculations.

use crate::{Error, Result};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// Seconds in one calendar day.
const SECONDS_PER_DAY: i64 = 86_400;

/// A fixed observer position on Earth, in decimal degrees.
///
/// Latitude is positive north of the equator and expected in [-90, 90];
/// longitude is positive east of Greenwich and expected in [-180, 180].
///
/// Coordinates are **not validated**: out-of-range values are accepted and
/// produce meaningless results rather than an error. Callers are responsible
/// for supplying valid coordinates.
///
/// # Example
/// ```
/// # use solar_events::ObserverPosition;
/// let vienna = ObserverPosition::new(48.21, 16.37);
/// assert_eq!(vienna.latitude(), 48.21);
/// assert_eq!(vienna.longitude(), 16.37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverPosition {
    /// Latitude in decimal degrees (positive north)
    latitude: f64,
    /// Longitude in decimal degrees (positive east)
    longitude: f64,
}

impl ObserverPosition {
    /// Creates a new observer position from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Predefined solar elevation angles for sunrise/sunset calculations.
///
/// Corresponds to different twilight definitions for consistent sunrise,
/// sunset, and twilight calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (fixed correction for atmospheric refraction
    /// and the solar disc radius)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83, // Refraction plus solar disc radius
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Sunrise and sunset instants for the day containing a queried instant.
///
/// Both values are seconds since the Unix epoch (1970-01-01T00:00:00Z).
/// Days on which the sun never rises or never sets are reported as errors
/// instead of being represented here; whenever a value is produced, sunset
/// does not precede sunrise.
///
/// # Example
/// ```
/// # use solar_events::SolarCalculator;
/// let calculator = SolarCalculator::new(45.0, 0.0);
/// // 2020-01-01T12:00:00Z
/// let events = calculator.solar_events(1_577_880_000).unwrap();
/// assert!(events.sunrise() < events.sunset());
/// assert_eq!(events.day_length() + events.night_length(), 86_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvents {
    /// Sunrise instant in seconds since the Unix epoch
    sunrise: i64,
    /// Sunset instant in seconds since the Unix epoch
    sunset: i64,
}

impl SolarEvents {
    pub(crate) const fn new(sunrise: i64, sunset: i64) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise instant in seconds since the Unix epoch.
    #[must_use]
    pub const fn sunrise(&self) -> i64 {
        self.sunrise
    }

    /// Gets the sunset instant in seconds since the Unix epoch.
    #[must_use]
    pub const fn sunset(&self) -> i64 {
        self.sunset
    }

    /// Gets the time the sun spends above the horizon, in seconds.
    #[must_use]
    pub const fn day_length(&self) -> i64 {
        self.sunset - self.sunrise
    }

    /// Gets the complement of [`day_length`](Self::day_length) within one
    /// calendar day, in seconds.
    ///
    /// This is `86400 - day_length`, not the actual gap between this day's
    /// sunset and the next day's sunrise.
    #[must_use]
    pub const fn night_length(&self) -> i64 {
        SECONDS_PER_DAY - self.day_length()
    }

    /// Gets the sunrise instant as a UTC datetime.
    ///
    /// Returns `None` only if the instant falls outside the range
    /// representable by chrono.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunrise, 0)
    }

    /// Gets the sunset instant as a UTC datetime.
    ///
    /// Returns `None` only if the instant falls outside the range
    /// representable by chrono.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunset, 0)
    }
}
