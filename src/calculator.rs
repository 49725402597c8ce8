//! Observer-bound convenience layer over the sunrise equation.

use crate::sunrise;
use crate::{Horizon, ObserverPosition, Result, SolarEvents};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculator for solar events at a fixed observer position.
///
/// Holds an immutable [`ObserverPosition`] and exposes pure queries from a
/// Unix instant to sunrise/sunset timestamps and derived day/night lengths.
/// Every call is an independent computation; there is no caching or other
/// hidden state, so a calculator can be shared freely between threads.
///
/// All queries are anchored to the Julian day containing the instant (the
/// time-of-day component is discarded, and the anchor day rolls over at
/// 12:00 UTC). Results are approximate to within a few minutes.
///
/// # Example
/// ```
/// # use solar_events::SolarCalculator;
/// let calculator = SolarCalculator::new(45.0, 0.0);
///
/// // 2020-01-01T12:00:00Z
/// let events = calculator.solar_events(1_577_880_000).unwrap();
/// assert_eq!(events.sunrise(), 1_577_864_363); // 07:39:23Z
/// assert_eq!(events.sunset(), 1_577_896_148); // 16:29:08Z
/// assert_eq!(calculator.day_length(1_577_880_000).unwrap(), 31_785);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    position: ObserverPosition,
}

impl SolarCalculator {
    /// Creates a calculator for the given latitude and longitude in decimal
    /// degrees.
    ///
    /// Coordinates are not validated; see [`ObserverPosition`].
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self::from_position(ObserverPosition::new(latitude, longitude))
    }

    /// Creates a calculator for an existing observer position.
    #[must_use]
    pub const fn from_position(position: ObserverPosition) -> Self {
        Self { position }
    }

    /// Gets the observer position this calculator was built with.
    #[must_use]
    pub const fn position(&self) -> ObserverPosition {
        self.position
    }

    /// Calculates sunrise and sunset for the day containing `instant`.
    ///
    /// Uses the standard [`Horizon::SunriseSunset`] elevation angle of
    /// -0.83°.
    ///
    /// # Errors
    /// Returns [`Error::SunNeverRises`](crate::Error::SunNeverRises) during
    /// polar night and [`Error::SunNeverSets`](crate::Error::SunNeverSets)
    /// during polar day.
    pub fn solar_events(&self, instant: i64) -> Result<SolarEvents> {
        self.solar_events_for_horizon(instant, Horizon::SunriseSunset)
    }

    /// Calculates sunrise and sunset against a caller-chosen horizon, e.g.
    /// one of the twilight definitions.
    ///
    /// # Errors
    /// Returns a polar day/night error when the sun does not cross the
    /// requested horizon that day.
    pub fn solar_events_for_horizon(&self, instant: i64, horizon: Horizon) -> Result<SolarEvents> {
        sunrise::solar_events_unix_for_horizon(
            instant,
            self.position.latitude(),
            self.position.longitude(),
            horizon,
        )
    }

    /// Calculates the sunrise instant for the day containing `instant`.
    ///
    /// # Errors
    /// Returns a polar day/night error when no sunrise exists that day.
    pub fn sunrise(&self, instant: i64) -> Result<i64> {
        Ok(self.solar_events(instant)?.sunrise())
    }

    /// Calculates the sunset instant for the day containing `instant`.
    ///
    /// # Errors
    /// Returns a polar day/night error when no sunset exists that day.
    pub fn sunset(&self, instant: i64) -> Result<i64> {
        Ok(self.solar_events(instant)?.sunset())
    }

    /// Calculates the day length in seconds for the day containing
    /// `instant`.
    ///
    /// # Errors
    /// Returns a polar day/night error when the sun does not both rise and
    /// set that day.
    pub fn day_length(&self, instant: i64) -> Result<i64> {
        Ok(self.solar_events(instant)?.day_length())
    }

    /// Calculates the night length in seconds for the day containing
    /// `instant`.
    ///
    /// This is the complement of [`day_length`](Self::day_length) within one
    /// calendar day, not the gap between this day's sunset and the next
    /// day's sunrise.
    ///
    /// # Errors
    /// Returns a polar day/night error when the sun does not both rise and
    /// set that day.
    pub fn night_length(&self, instant: i64) -> Result<i64> {
        Ok(self.solar_events(instant)?.night_length())
    }

    /// Calculates the solar transit (true solar noon) for the day containing
    /// `instant`.
    ///
    /// Defined on every day, including polar day and polar night.
    #[must_use]
    pub fn solar_noon(&self, instant: i64) -> i64 {
        sunrise::solar_noon_unix(instant, self.position.longitude())
    }

    /// Calculates sunrise and sunset for the day containing a timezone-aware
    /// datetime.
    ///
    /// The datetime is converted to its Unix timestamp; the result carries
    /// UTC instants as usual.
    ///
    /// # Errors
    /// Returns a polar day/night error when the sun does not both rise and
    /// set that day.
    ///
    /// # Example
    /// ```
    /// # use solar_events::SolarCalculator;
    /// use chrono::{DateTime, Utc};
    ///
    /// let calculator = SolarCalculator::new(45.0, 0.0);
    /// let datetime = "2020-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    ///
    /// let events = calculator.solar_events_at(&datetime).unwrap();
    /// assert_eq!(
    ///     events.sunrise_datetime().unwrap(),
    ///     "2020-01-01T07:39:23Z".parse::<DateTime<Utc>>().unwrap()
    /// );
    /// ```
    #[cfg(feature = "chrono")]
    pub fn solar_events_at<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Result<SolarEvents> {
        self.solar_events(datetime.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // 2020-01-01T12:00:00Z
    const NEW_YEAR_NOON: i64 = 1577880000;

    #[test]
    fn test_getters_match_pair_computation() {
        let calculator = SolarCalculator::new(45.0, 0.0);
        let events = calculator.solar_events(NEW_YEAR_NOON).unwrap();

        assert_eq!(calculator.sunrise(NEW_YEAR_NOON).unwrap(), events.sunrise());
        assert_eq!(calculator.sunset(NEW_YEAR_NOON).unwrap(), events.sunset());
        assert_eq!(
            calculator.day_length(NEW_YEAR_NOON).unwrap(),
            events.day_length()
        );
        assert_eq!(
            calculator.night_length(NEW_YEAR_NOON).unwrap(),
            events.night_length()
        );
    }

    #[test]
    fn test_polar_errors_propagate_to_getters() {
        // 68°N at the December 2020 solstice
        let calculator = SolarCalculator::new(68.0, 0.0);
        let winter_solstice = 1608552000;

        assert_eq!(
            calculator.sunrise(winter_solstice),
            Err(Error::SunNeverRises)
        );
        assert_eq!(calculator.sunset(winter_solstice), Err(Error::SunNeverRises));
        assert_eq!(
            calculator.day_length(winter_solstice),
            Err(Error::SunNeverRises)
        );
        assert_eq!(
            calculator.night_length(winter_solstice),
            Err(Error::SunNeverRises)
        );
    }

    #[test]
    fn test_position_round_trip() {
        let position = ObserverPosition::new(48.21, 16.37);
        let calculator = SolarCalculator::from_position(position);
        assert_eq!(calculator.position(), position);
    }
}
