//! # Solar Events Library
//!
//! Sunrise, sunset, day-length and night-length timestamps from the
//! astronomical sunrise equation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes approximate solar event times for a fixed
//! geographic position directly from Unix timestamps, using the J2000-based
//! sunrise equation. It targets resource-constrained embedded environments
//! that need solar-event timing without network access or a full
//! astronomical library: accuracy is on the order of minutes, every
//! operation is a bounded sequence of floating-point arithmetic, and the
//! whole crate runs without `std`.
//!
//! ## Features
//!
//! - Plain `i64` Unix-timestamp API; no datetime dependency required
//! - Explicit polar day / polar night outcomes instead of NaN timestamps
//! - Twilight horizons (civil, nautical, astronomical) via [`Horizon`]
//! - Stateless and immutable; safe to share between threads
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-events = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-events = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_events::SolarCalculator;
//!
//! // 45°N on the prime meridian
//! let calculator = SolarCalculator::new(45.0, 0.0);
//!
//! // 2020-01-01T12:00:00Z
//! let instant = 1_577_880_000;
//!
//! let events = calculator.solar_events(instant).unwrap();
//! assert_eq!(events.sunrise(), 1_577_864_363); // 07:39:23Z
//! assert_eq!(events.sunset(), 1_577_896_148); // 16:29:08Z
//!
//! // Day and night lengths complement each other within one day
//! assert_eq!(events.day_length() + events.night_length(), 86_400);
//! ```
//!
//! ### Polar day and night
//!
//! Inside the polar circles, the sun may stay above or below the horizon
//! for the whole day. The sunrise equation has no solution there, and the
//! library reports which case occurred instead of producing garbage
//! timestamps:
//!
//! ```rust
//! use solar_events::{Error, SolarCalculator};
//!
//! let svalbard = SolarCalculator::new(78.0, 15.0);
//!
//! // 2020-06-20T12:00:00Z, midsummer
//! assert_eq!(svalbard.solar_events(1_592_654_400), Err(Error::SunNeverSets));
//!
//! // 2020-12-21T12:00:00Z, midwinter
//! assert_eq!(svalbard.solar_events(1_608_552_000), Err(Error::SunNeverRises));
//! ```
//!
//! ## Semantics
//!
//! Results are anchored to the whole Julian day containing the queried
//! instant: the time-of-day component is discarded, and since Julian days
//! roll over at 12:00 UTC, an instant shortly after UTC midnight yields the
//! events of the previous calendar date. Timestamps are `i64` seconds, so
//! dates far beyond 2038 are representable.
//!
//! Observer coordinates are never validated; out-of-range latitudes or
//! longitudes produce meaningless results rather than errors.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::calculator::SolarCalculator;
pub use crate::error::{Error, Result};
pub use crate::types::{Horizon, ObserverPosition, SolarEvents};

// Algorithm module
pub mod sunrise;

// Core modules
pub mod calculator;
pub mod error;
pub mod types;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_and_calculator_agree() {
        let calculator = SolarCalculator::new(37.7749, -122.4194);
        // 2023-06-21T12:00:00Z
        let instant = 1_687_348_800;

        let from_calculator = calculator.solar_events(instant).unwrap();
        let from_function = sunrise::solar_events_unix(
            instant,
            37.7749,
            -122.4194,
            Horizon::SunriseSunset.elevation_angle(),
        )
        .unwrap();

        assert_eq!(from_calculator, from_function);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_entry_point_matches_numeric_api() {
        use chrono::{DateTime, FixedOffset};

        let calculator = SolarCalculator::new(48.21, 16.37);
        let datetime = "2023-06-21T14:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();

        let via_datetime = calculator.solar_events_at(&datetime).unwrap();
        let via_timestamp = calculator.solar_events(datetime.timestamp()).unwrap();

        assert_eq!(via_datetime, via_timestamp);
    }
}
