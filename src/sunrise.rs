//! Sunrise equation implementation.
//!
//! J2000-based approximation of the astronomical sunrise equation, computing
//! sunrise, sunset, and solar transit directly from Unix timestamps.
//! Accuracy is on the order of minutes, which is sufficient for scheduling
//! and daylight detection; it is not an ephemeris-grade algorithm.
//!
//! Reference: <https://en.wikipedia.org/wiki/Sunrise_equation>

#![allow(clippy::unreadable_literal)]

use crate::math::{
    acos, asin, cos, degrees_to_radians, floor, normalize_degrees_0_to_360, radians_to_degrees,
    round, sin,
};
use crate::{Error, Horizon, Result, SolarEvents};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for the J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Unix timestamp of the J2000.0 epoch
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Fractional-day correction for Earth rotation and light travel time
const MEAN_SOLAR_TIME_CORRECTION: f64 = 0.0008;

/// Obliquity of the ecliptic in degrees
const ECLIPTIC_OBLIQUITY_DEGREES: f64 = 23.44;

/// Ecliptic longitude of Earth's perihelion in degrees
const PERIHELION_LONGITUDE_DEGREES: f64 = 102.9372;

/// Per-day solar geometry shared by the event and transit calculations.
struct DayGeometry {
    /// Solar transit (true solar noon) as days since J2000
    transit: f64,
    /// Solar declination in radians
    declination: f64,
}

/// Calculate the transit and declination for the day containing `instant`.
fn day_geometry(instant: i64, longitude: f64) -> DayGeometry {
    // Julian Date of the queried instant
    let jd = instant as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JD;

    // Days since J2000. Truncating the Julian Date to a whole day discards
    // the time-of-day component, anchoring all results to the Julian day
    // containing the instant (Julian days roll over at 12:00 UTC).
    let n = floor(jd) - J2000_JDN + MEAN_SOLAR_TIME_CORRECTION;

    // Mean solar noon at the observer's meridian
    let jstar = n - longitude / 360.0;

    // Solar mean anomaly
    let m = normalize_degrees_0_to_360(357.5291 + 0.98560028 * jstar);
    let m_rad = degrees_to_radians(m);

    // Equation of the center
    let c = 1.9148 * sin(m_rad) + 0.02 * sin(2.0 * m_rad) + 0.0003 * sin(3.0 * m_rad);

    // Ecliptic longitude of the sun
    let lambda = normalize_degrees_0_to_360(m + c + 180.0 + PERIHELION_LONGITUDE_DEGREES);
    let lambda_rad = degrees_to_radians(lambda);

    // Solar transit, corrected for the equation of time
    let transit = jstar + 0.0053 * sin(m_rad) - 0.0069 * sin(2.0 * lambda_rad);

    // Declination of the sun
    let declination = asin(sin(lambda_rad) * sin(degrees_to_radians(ECLIPTIC_OBLIQUITY_DEGREES)));

    DayGeometry {
        transit,
        declination,
    }
}

/// Convert days since J2000 back to seconds since the Unix epoch.
fn days_since_j2000_to_unix(days: f64) -> i64 {
    round(days * SECONDS_PER_DAY) as i64 + J2000_UNIX_SECONDS
}

/// Calculate sunrise and sunset for the day containing a Unix instant.
///
/// The instant is truncated to the Julian day containing it, so every
/// instant within the same noon-to-noon (UTC) window produces identical
/// results.
///
/// Latitude and longitude are not validated; out-of-range coordinates
/// produce meaningless results.
///
/// # Arguments
/// * `instant` - Seconds since the Unix epoch (UTC)
/// * `latitude` - Observer latitude in decimal degrees (-90 to +90)
/// * `longitude` - Observer longitude in decimal degrees (-180 to +180)
/// * `elevation_angle` - Sun elevation angle defining the horizon in degrees
///   (typically -0.83°)
///
/// # Returns
/// Sunrise and sunset instants in seconds since the Unix epoch
///
/// # Errors
/// Returns [`Error::SunNeverRises`] during polar night and
/// [`Error::SunNeverSets`] during polar day, when the hour-angle cosine
/// leaves the [-1, 1] domain.
///
/// # Example
/// ```
/// use solar_events::{sunrise, Horizon};
///
/// // 45°N, prime meridian, 2020-01-01T12:00:00Z
/// let events = sunrise::solar_events_unix(
///     1_577_880_000,
///     45.0,
///     0.0,
///     Horizon::SunriseSunset.elevation_angle(),
/// ).unwrap();
///
/// assert_eq!(events.sunrise(), 1_577_864_363); // 07:39:23Z
/// assert_eq!(events.sunset(), 1_577_896_148); // 16:29:08Z
/// ```
pub fn solar_events_unix(
    instant: i64,
    latitude: f64,
    longitude: f64,
    elevation_angle: f64,
) -> Result<SolarEvents> {
    let geometry = day_geometry(instant, longitude);
    let phi = degrees_to_radians(latitude);

    // Hour angle at which the sun crosses the requested horizon
    let cos_omega0 = (sin(degrees_to_radians(elevation_angle))
        - sin(phi) * sin(geometry.declination))
        / (cos(phi) * cos(geometry.declination));

    // Out-of-domain arguments mean the sun never crosses the horizon that
    // day; report which side it stays on instead of calling acos.
    if cos_omega0 > 1.0 {
        return Err(Error::SunNeverRises);
    }
    if cos_omega0 < -1.0 {
        return Err(Error::SunNeverSets);
    }
    let omega0_degrees = radians_to_degrees(acos(cos_omega0));

    // Sunrise and sunset straddle the transit by the hour angle
    let jrise = geometry.transit - omega0_degrees / 360.0;
    let jset = geometry.transit + omega0_degrees / 360.0;

    Ok(SolarEvents::new(
        days_since_j2000_to_unix(jrise),
        days_since_j2000_to_unix(jset),
    ))
}

/// Calculate sunrise and sunset for a predefined horizon.
///
/// Convenience wrapper over [`solar_events_unix`] for the common horizon
/// definitions (sunrise/sunset and the twilights).
///
/// # Errors
/// Returns [`Error::SunNeverRises`] or [`Error::SunNeverSets`] under polar
/// conditions for the chosen horizon.
pub fn solar_events_unix_for_horizon(
    instant: i64,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SolarEvents> {
    solar_events_unix(instant, latitude, longitude, horizon.elevation_angle())
}

/// Calculate the solar transit (true solar noon) for the day containing a
/// Unix instant.
///
/// The transit only depends on the observer's longitude and is defined on
/// every day, including polar day and polar night.
///
/// # Example
/// ```
/// use solar_events::sunrise;
///
/// // Prime meridian, 2020-01-01T12:00:00Z
/// let noon = sunrise::solar_noon_unix(1_577_880_000, 0.0);
/// assert_eq!(noon, 1_577_880_255); // 12:04:15Z
/// ```
#[must_use]
pub fn solar_noon_unix(instant: i64, longitude: f64) -> i64 {
    days_since_j2000_to_unix(day_geometry(instant, longitude).transit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUNRISE_SUNSET_ANGLE: f64 = -0.83;

    #[test]
    fn test_midwinter_mid_latitude() {
        // 45°N, 0°E on 2020-01-01
        let events = solar_events_unix(1577880000, 45.0, 0.0, SUNRISE_SUNSET_ANGLE).unwrap();
        assert_eq!(events.sunrise(), 1577864363);
        assert_eq!(events.sunset(), 1577896148);
        assert_eq!(events.day_length(), 31785);
    }

    #[test]
    fn test_polar_day_and_night() {
        // 68°N at the June and December 2020 solstices
        assert_eq!(
            solar_events_unix(1592654400, 68.0, 0.0, SUNRISE_SUNSET_ANGLE),
            Err(Error::SunNeverSets)
        );
        assert_eq!(
            solar_events_unix(1608552000, 68.0, 0.0, SUNRISE_SUNSET_ANGLE),
            Err(Error::SunNeverRises)
        );
    }

    #[test]
    fn test_solar_noon_defined_under_polar_conditions() {
        let noon_summer = solar_noon_unix(1592654400, 0.0);
        let noon_winter = solar_noon_unix(1608552000, 0.0);
        assert_eq!(noon_summer, 1592654566);
        assert_eq!(noon_winter, 1608551962);
    }

    #[test]
    fn test_noon_between_sunrise_and_sunset() {
        let events = solar_events_unix(1577880000, 45.0, 0.0, SUNRISE_SUNSET_ANGLE).unwrap();
        let noon = solar_noon_unix(1577880000, 0.0);
        assert!(events.sunrise() < noon);
        assert!(noon < events.sunset());
    }

    #[test]
    fn test_lower_horizon_widens_the_day() {
        let standard =
            solar_events_unix_for_horizon(1577880000, 45.0, 0.0, Horizon::SunriseSunset).unwrap();
        let civil =
            solar_events_unix_for_horizon(1577880000, 45.0, 0.0, Horizon::CivilTwilight).unwrap();
        let nautical =
            solar_events_unix_for_horizon(1577880000, 45.0, 0.0, Horizon::NauticalTwilight)
                .unwrap();

        assert!(civil.day_length() > standard.day_length());
        assert!(nautical.day_length() > civil.day_length());
    }

    #[test]
    fn test_deterministic() {
        let a = solar_events_unix(1687348800, 37.7749, -122.4194, SUNRISE_SUNSET_ANGLE).unwrap();
        let b = solar_events_unix(1687348800, 37.7749, -122.4194, SUNRISE_SUNSET_ANGLE).unwrap();
        assert_eq!(a, b);
    }
}
