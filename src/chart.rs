// src/chart.rs
//
// House geometry and the natal chart assembler. Houses follow an equal
// partition from the Ascendant rather than true Placidus division, and the
// Midheaven is taken as Ascendant + 270, which keeps the chart internally
// consistent at this level of approximation.

use crate::ephemeris::{
    is_retrograde, j2000_centuries, julian_day, mean_longitude, normalize_angle, JulianDay, Planet,
    J2000,
};
use crate::zodiac::{degree_in_sign, ZodiacSign};
use crate::{AstrologyError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------
// ## Houses
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).flat_map(House::from_index)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePosition {
    pub house: House,
    pub sign: ZodiacSign,
    /// Fractional degree of the cusp within its sign.
    pub degree: f64,
}

impl HousePosition {
    /// Absolute ecliptic longitude of the cusp.
    pub fn cusp_longitude(&self) -> f64 {
        self.sign.offset() + self.degree
    }
}

// ---------------------------
// ## Chart Records
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: u32,
    pub minute: u32,
    pub retrograde: bool,
    pub house: Option<House>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAngle {
    pub sign: ZodiacSign,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HousePosition>,
    pub ascendant: ChartAngle,
    pub midheaven: ChartAngle,
}

impl NatalChart {
    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }
}

// ---------------------------
// ## Ascendant and Houses
// ---------------------------

/// Ecliptic longitude of the Ascendant for a Julian Day and geographic
/// coordinates, in degrees normalized to [0, 360).
pub fn ascendant(jd: JulianDay, latitude: f64, longitude: f64) -> f64 {
    let t = j2000_centuries(jd);

    // local sidereal time in degrees
    let theta0 = 280.46061837 + 360.985_647_366_29 * (jd - J2000) + 0.000387933 * t * t;
    let lst = normalize_angle(theta0 + longitude).to_radians();

    let epsilon = (23.439291 - 0.0130042 * t).to_radians();
    let lat = latitude.to_radians();

    let y = -lst.cos();
    let x = lst.sin() * epsilon.cos() + lat.tan() * epsilon.sin();

    normalize_angle(y.atan2(x).to_degrees())
}

/// Equal-house cusps from the Ascendant: cusp(i) = asc + (i - 1) * 30.
pub fn houses(ascendant_longitude: f64) -> Vec<HousePosition> {
    House::all()
        .map(|house| {
            let cusp = normalize_angle(ascendant_longitude + (house.number() - 1) as f64 * 30.0);
            HousePosition {
                house,
                sign: ZodiacSign::from_longitude(cusp),
                degree: cusp % 30.0,
            }
        })
        .collect()
}

/// House containing a planet, testing each cusp-to-next-cusp arc with
/// wraparound. Full coverage of the circle makes the fall-through
/// unreachable; First is kept as a defensive default.
pub fn house_for_planet(planet_longitude: f64, houses: &[HousePosition]) -> House {
    let lon = normalize_angle(planet_longitude);
    for i in 0..houses.len() {
        let current = houses[i].cusp_longitude();
        let mut next = houses[(i + 1) % houses.len()].cusp_longitude();
        if next < current {
            next += 360.0;
        }
        let mut candidate = lon;
        if candidate < current {
            candidate += 360.0;
        }
        if candidate >= current && candidate < next {
            return houses[i].house;
        }
    }
    House::First
}

// ---------------------------
// ## Natal Chart Assembler
// ---------------------------

pub(crate) fn parse_birth_date(birth_date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
        .map_err(|e| AstrologyError::InvalidInput(format!("birth date {birth_date:?}: {e}")))
}

fn parse_birth_time(birth_time: Option<&str>) -> Result<NaiveTime> {
    match birth_time {
        Some(s) if !s.is_empty() => NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|e| AstrologyError::InvalidInput(format!("birth time {s:?}: {e}"))),
        // unknown birth time falls back to noon, degrading the Ascendant
        // and house accuracy but leaving planet signs usable
        _ => Ok(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
    }
}

fn planet_position(planet: Planet, t: f64, houses: Option<&[HousePosition]>) -> PlanetPosition {
    let longitude = mean_longitude(planet, t);
    let (degree, minute) = degree_in_sign(longitude);
    PlanetPosition {
        planet,
        longitude,
        sign: ZodiacSign::from_longitude(longitude),
        degree,
        minute,
        retrograde: is_retrograde(planet, t),
        house: houses.map(|h| house_for_planet(longitude, h)),
    }
}

/// Complete natal chart for a birth moment.
///
/// `birth_date` is `YYYY-MM-DD`; `birth_time` is `HH:MM` in UTC or `None`
/// for an unknown time. Output is fully determined by the inputs.
pub fn natal_chart(
    birth_date: &str,
    birth_time: Option<&str>,
    latitude: f64,
    longitude: f64,
) -> Result<NatalChart> {
    let date = parse_birth_date(birth_date)?;
    let time = parse_birth_time(birth_time)?;
    let instant = Utc.from_utc_datetime(&date.and_time(time));

    let jd = julian_day(instant);
    let t = j2000_centuries(jd);

    let asc = ascendant(jd, latitude, longitude);
    let mc = normalize_angle(asc + 270.0);
    let houses = houses(asc);

    let planets = Planet::iter()
        .map(|planet| planet_position(planet, t, Some(&houses)))
        .collect();

    Ok(NatalChart {
        planets,
        houses,
        ascendant: ChartAngle {
            sign: ZodiacSign::from_longitude(asc),
            degree: asc % 30.0,
        },
        midheaven: ChartAngle {
            sign: ZodiacSign::from_longitude(mc),
            degree: mc % 30.0,
        },
    })
}

/// Per-planet positions for an arbitrary instant, without house assignment.
/// Transits are house-agnostic in this design.
pub fn current_positions(instant: DateTime<Utc>) -> Vec<PlanetPosition> {
    let t = j2000_centuries(julian_day(instant));
    Planet::iter()
        .map(|planet| planet_position(planet, t, None))
        .collect()
}

/// `current_positions` evaluated at the system clock.
pub fn current_positions_now() -> Vec<PlanetPosition> {
    current_positions(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn twelve_equal_cusps() {
        let houses = houses(123.4);
        assert_eq!(houses.len(), 12);
        assert_eq!(houses[0].house, House::First);
        for (i, house) in houses.iter().enumerate() {
            assert_relative_eq!(
                house.cusp_longitude(),
                normalize_angle(123.4 + i as f64 * 30.0),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn planet_on_ascendant_is_in_first_house() {
        for asc in [0.0, 17.25, 123.4, 271.0, 359.5] {
            let houses = houses(asc);
            assert_eq!(house_for_planet(asc, &houses), House::First, "asc {asc}");
        }
    }

    #[test]
    fn house_assignment_covers_the_circle() {
        let houses = houses(301.7);
        let mut lon = 0.25;
        while lon < 360.0 {
            // any longitude lands in exactly one arc; the walk below checks
            // the arc chosen matches the cusp offsets
            let house = house_for_planet(lon, &houses);
            let offset = normalize_angle(lon - 301.7);
            let expected = House::from_index((offset / 30.0).floor() as usize + 1).unwrap();
            assert_eq!(house, expected, "lon {lon}");
            lon += 7.5;
        }
    }

    #[test]
    fn house_wraps_just_below_the_ascendant() {
        let houses = houses(10.0);
        assert_eq!(house_for_planet(9.9, &houses), House::Twelfth);
        assert_eq!(house_for_planet(10.0, &houses), House::First);
    }

    #[test]
    fn natal_chart_is_deterministic() {
        let a = natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060).unwrap();
        let b = natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn natal_chart_has_ten_housed_planets() {
        let chart = natal_chart("1991-06-18", Some("07:10"), 10.522, 76.172).unwrap();
        assert_eq!(chart.planets.len(), 10);
        assert!(chart.planets.iter().all(|p| p.house.is_some()));
        assert_eq!(chart.houses.len(), 12);
    }

    #[test]
    fn ascendant_heads_the_first_house() {
        let chart = natal_chart("1984-02-29", Some("23:45"), 51.5074, -0.1278).unwrap();
        assert_eq!(chart.ascendant.sign, chart.houses[0].sign);
        assert_relative_eq!(chart.ascendant.degree, chart.houses[0].degree, epsilon = 1e-9);
    }

    #[test]
    fn midheaven_sits_at_ascendant_plus_270() {
        let chart = natal_chart("2001-09-09", None, 35.6762, 139.6503).unwrap();
        let asc = chart.ascendant.sign.offset() + chart.ascendant.degree;
        let mc = chart.midheaven.sign.offset() + chart.midheaven.degree;
        assert_relative_eq!(mc, normalize_angle(asc + 270.0), epsilon = 1e-9);
    }

    #[test]
    fn missing_birth_time_defaults_to_noon() {
        let defaulted = natal_chart("1990-11-29", None, 40.7128, -74.0060).unwrap();
        let noon = natal_chart("1990-11-29", Some("12:00"), 40.7128, -74.0060).unwrap();
        assert_eq!(defaulted, noon);
        let empty = natal_chart("1990-11-29", Some(""), 40.7128, -74.0060).unwrap();
        assert_eq!(empty, noon);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(natal_chart("29-11-1990", Some("06:30"), 0.0, 0.0).is_err());
        assert!(natal_chart("1990-13-01", Some("06:30"), 0.0, 0.0).is_err());
        assert!(natal_chart("1990-11-29", Some("25:00"), 0.0, 0.0).is_err());
    }

    #[test]
    fn transit_positions_carry_no_houses() {
        let instant = Utc.with_ymd_and_hms(2024, 4, 8, 18, 0, 0).unwrap();
        let positions = current_positions(instant);
        assert_eq!(positions.len(), 10);
        assert!(positions.iter().all(|p| p.house.is_none()));
    }

    #[test]
    fn positions_match_the_longitude_model() {
        let instant = Utc.with_ymd_and_hms(2020, 12, 21, 0, 0, 0).unwrap();
        let t = j2000_centuries(julian_day(instant));
        for position in current_positions(instant) {
            assert_relative_eq!(position.longitude, mean_longitude(position.planet, t));
            assert_eq!(position.sign, ZodiacSign::from_longitude(position.longitude));
        }
    }
}
