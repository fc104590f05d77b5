// src/lib.rs
//
// celestial_core derives astrological positions, numerology numbers and
// tarot draws from birth data. Everything here is a pure function of its
// inputs; the only state lives behind the Store repository.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod geo;
pub mod guidance;
pub mod moon;
pub mod numerology;
pub mod store;
pub mod tarot;
pub mod zodiac;

pub use aspects::{find_aspects, Aspect, AspectInfo};
pub use chart::{
    ascendant, current_positions, current_positions_now, houses, natal_chart, ChartAngle, House,
    HousePosition, NatalChart, PlanetPosition,
};
pub use ephemeris::{
    j2000_centuries, julian_day, mean_longitude, normalize_angle, JulianDay, Planet,
};
pub use geo::{GeocodedPlace, Geocoder};
pub use guidance::{daily_guidance, DailyGuidance, LuckyColor};
pub use moon::{moon_phase, moon_phase_now, MoonPhase, MoonPhaseInfo};
pub use numerology::{numerology_profile, NumerologyProfile};
pub use store::{JournalEntry, Store, UserProfile};
pub use tarot::{draw_reading, SpreadType, TarotCard, TarotReading};
pub use zodiac::{degree_in_sign, Element, Modality, ZodiacSign};

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug, Error)]
pub enum AstrologyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("geocoding failed: {0}")]
    Geocoding(String),
    #[error("store I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("store record: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AstrologyError>;

/// Seed for date-keyed random streams: the proleptic day number keeps
/// consecutive days on distinct, reproducible seeds.
pub(crate) fn date_seed(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_seed_distinguishes_days() {
        let a = date_seed(NaiveDate::from_ymd_opt(2024, 4, 8).unwrap());
        let b = date_seed(NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
        assert_eq!(b, a + 1);
    }

    #[test]
    fn errors_render_their_context() {
        let err = AstrologyError::InvalidInput("birth date \"x\"".into());
        assert!(err.to_string().contains("invalid input"));
        let err = AstrologyError::Geocoding("no results".into());
        assert!(err.to_string().contains("no results"));
    }
}
