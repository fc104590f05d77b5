// src/moon.rs

use crate::ephemeris::{j2000_centuries, julian_day, mean_longitude, normalize_angle, Planet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Phase for a Sun-Moon elongation angle. The circle is split into
    /// eight 45 degree bands centered on the canonical phase points
    /// (0, 45, 90, ... 315), so 0 maps to New, 90 to First Quarter and
    /// 180 to Full.
    pub fn from_angle(phase_angle: f64) -> Self {
        let index = (normalize_angle(phase_angle + 22.5) / 45.0).floor() as usize % 8;
        PHASES[index]
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoonPhase::New => "\u{1F311}",
            MoonPhase::WaxingCrescent => "\u{1F312}",
            MoonPhase::FirstQuarter => "\u{1F313}",
            MoonPhase::WaxingGibbous => "\u{1F314}",
            MoonPhase::Full => "\u{1F315}",
            MoonPhase::WaningGibbous => "\u{1F316}",
            MoonPhase::LastQuarter => "\u{1F317}",
            MoonPhase::WaningCrescent => "\u{1F318}",
        }
    }

    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }

    pub fn is_waning(self) -> bool {
        matches!(
            self,
            MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    /// Illuminated fraction of the disc, 0-100.
    pub illumination: f64,
}

impl MoonPhaseInfo {
    pub fn name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn emoji(&self) -> &'static str {
        self.phase.emoji()
    }
}

/// Sun-Moon elongation in degrees at `t` centuries since J2000.
pub fn phase_angle(t: f64) -> f64 {
    normalize_angle(mean_longitude(Planet::Moon, t) - mean_longitude(Planet::Sun, t))
}

fn illumination(phase_angle: f64) -> f64 {
    (1.0 - phase_angle.to_radians().cos()) / 2.0 * 100.0
}

/// Moon phase and illumination percentage for an instant.
pub fn moon_phase(instant: DateTime<Utc>) -> MoonPhaseInfo {
    let t = j2000_centuries(julian_day(instant));
    let angle = phase_angle(t);
    MoonPhaseInfo {
        phase: MoonPhase::from_angle(angle),
        illumination: illumination(angle),
    }
}

/// `moon_phase` evaluated at the system clock.
pub fn moon_phase_now() -> MoonPhaseInfo {
    moon_phase(Utc::now())
}
