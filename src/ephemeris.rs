// src/ephemeris.rs
//
// Time conversion and the simplified planetary position model. Longitudes
// come from per-body mean-longitude polynomials in Julian centuries since
// J2000.0, which is plenty for illustrative chart work but nowhere near
// planetary-theory precision.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type JulianDay = f64;

/// 2000-01-01T12:00 UTC as a Julian Day.
pub const J2000: JulianDay = 2451545.0;

pub const DAYS_PER_CENTURY: f64 = 36525.0;

// ---------------------------
// ## Angle / Time Utilities
// ---------------------------

/// Gregorian calendar date/time to Julian Day.
///
/// January and February are counted as months 13 and 14 of the previous
/// year before applying the leap-century correction.
pub fn julian_day(instant: DateTime<Utc>) -> JulianDay {
    let mut year = instant.year() as f64;
    let mut month = instant.month() as f64;
    let day = instant.day() as f64;
    let hour = instant.hour() as f64
        + instant.minute() as f64 / 60.0
        + instant.second() as f64 / 3600.0;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + hour / 24.0 + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn j2000_centuries(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_angle(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Signed difference a - b wrapped into [-180, 180).
pub(crate) fn signed_delta(a: f64, b: f64) -> f64 {
    let mut d = a - b;
    if d >= 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    d
}

// ---------------------------
// ## Celestial Bodies
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub fn iter() -> impl Iterator<Item = Planet> {
        [
            Planet::Sun,
            Planet::Moon,
            Planet::Mercury,
            Planet::Venus,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
            Planet::Uranus,
            Planet::Neptune,
            Planet::Pluto,
        ]
        .iter()
        .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "\u{2609}",
            Planet::Moon => "\u{263D}",
            Planet::Mercury => "\u{263F}",
            Planet::Venus => "\u{2640}",
            Planet::Mars => "\u{2642}",
            Planet::Jupiter => "\u{2643}",
            Planet::Saturn => "\u{2644}",
            Planet::Uranus => "\u{26E2}",
            Planet::Neptune => "\u{2646}",
            Planet::Pluto => "\u{2647}",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------
// ## Mean Longitudes
// ---------------------------

/// Mean ecliptic longitude of a body in degrees, normalized to [0, 360).
///
/// Degree-2 polynomial in centuries since J2000; only the Sun and Moon
/// carry a secular term.
pub fn mean_longitude(planet: Planet, t: f64) -> f64 {
    let l = match planet {
        Planet::Sun => 280.4664567 + 360_007.698_277_9 * t + 0.03032028 * t * t,
        Planet::Moon => 218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t * t,
        Planet::Mercury => 252.250906 + 149_472.674_635_8 * t,
        Planet::Venus => 181.979801 + 58_517.815_676_0 * t,
        Planet::Mars => 355.433275 + 19_140.299_331_3 * t,
        Planet::Jupiter => 34.351484 + 3_034.905_674_6 * t,
        Planet::Saturn => 50.077471 + 1_222.113_794_3 * t,
        Planet::Uranus => 314.055005 + 428.466_998_3 * t,
        Planet::Neptune => 304.348665 + 218.486_200_2 * t,
        Planet::Pluto => 238.92903833 + 145.207_805_15 * t,
    };
    normalize_angle(l)
}

/// Mercury's mean anomaly in degrees, normalized to [0, 360).
pub fn mercury_mean_anomaly(t: f64) -> f64 {
    normalize_angle(174.7948 + 149_472.5153 * t)
}

// Mercury stations inside a 100-260 degree mean-anomaly window. The flag
// covers a fixed central slice of that window sized to the historical ~22%
// retrograde rate, so the result is reproducible for a given instant.
const MERCURY_RETRO_BAND: (f64, f64) = (162.4, 197.6);

/// Coarse retrograde indicator for a body at `t` centuries since J2000.
///
/// Mercury uses the anomaly-band rule above. Every other body compares its
/// longitude against one day earlier; mean motions are all direct, so they
/// report false under this model.
pub fn is_retrograde(planet: Planet, t: f64) -> bool {
    match planet {
        Planet::Mercury => {
            let anomaly = mercury_mean_anomaly(t);
            anomaly >= MERCURY_RETRO_BAND.0 && anomaly < MERCURY_RETRO_BAND.1
        }
        _ => {
            let one_day = 1.0 / DAYS_PER_CENTURY;
            signed_delta(mean_longitude(planet, t), mean_longitude(planet, t - one_day)) < 0.0
        }
    }
}
