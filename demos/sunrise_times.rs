//! Demo: sunrise/sunset and day length for a few locations.
//!
//! Uses only the numeric Unix-timestamp API, so it works with any feature
//! combination.

use solar_events::{Error, Horizon, SolarCalculator};

fn format_hms(instant: i64) -> String {
    let seconds_of_day = instant.rem_euclid(86400);
    format!(
        "{:02}:{:02}:{:02} UTC",
        seconds_of_day / 3600,
        (seconds_of_day % 3600) / 60,
        seconds_of_day % 60
    )
}

fn report(name: &str, latitude: f64, longitude: f64, instant: i64) {
    let calculator = SolarCalculator::new(latitude, longitude);

    println!("{name} ({latitude}, {longitude}):");
    match calculator.solar_events(instant) {
        Ok(events) => {
            println!("  Sunrise:    {}", format_hms(events.sunrise()));
            println!("  Solar noon: {}", format_hms(calculator.solar_noon(instant)));
            println!("  Sunset:     {}", format_hms(events.sunset()));
            println!(
                "  Day length: {:.2} hours",
                events.day_length() as f64 / 3600.0
            );

            if let Ok(civil) =
                calculator.solar_events_for_horizon(instant, Horizon::CivilTwilight)
            {
                println!("  Civil dawn: {}", format_hms(civil.sunrise()));
                println!("  Civil dusk: {}", format_hms(civil.sunset()));
            }
        }
        Err(Error::SunNeverSets) => println!("  Polar day - sun never sets"),
        Err(Error::SunNeverRises) => println!("  Polar night - sun never rises"),
        Err(e) => println!("  Error: {e}"),
    }
    println!();
}

fn main() {
    // 2020-06-20T12:00:00Z, the June solstice
    let instant = 1592654400;

    report("Ljubljana", 46.0569, 14.5058, instant);
    report("San Francisco", 37.7749, -122.4194, instant);
    report("Sydney", -33.8688, 151.2093, instant);
    report("Longyearbyen", 78.2232, 15.6267, instant);
}
