// src/aspects.rs
//
// Pairwise angular comparison between transiting and natal positions
// against the five major aspects.

use crate::chart::PlanetPosition;
use crate::ephemeris::Planet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

impl Aspect {
    /// Exact angle of the aspect in degrees.
    pub fn angle(self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Sextile => 60.0,
            Aspect::Square => 90.0,
            Aspect::Trine => 120.0,
            Aspect::Opposition => 180.0,
        }
    }

    /// Allowed deviation from the exact angle for a match.
    pub fn orb(self) -> f64 {
        match self {
            Aspect::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn meaning(self) -> &'static str {
        match self {
            Aspect::Conjunction => "intensifies and merges energies",
            Aspect::Sextile => "offers opportunities and ease",
            Aspect::Square => "creates tension and growth",
            Aspect::Trine => "brings harmony and flow",
            Aspect::Opposition => "highlights balance and awareness",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Aspect::Conjunction => "Conjunction",
            Aspect::Sextile => "Sextile",
            Aspect::Square => "Square",
            Aspect::Trine => "Trine",
            Aspect::Opposition => "Opposition",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectInfo {
    pub transit_planet: Planet,
    pub natal_planet: Planet,
    pub aspect: Aspect,
    /// Deviation from the exact aspect angle, rounded to 0.1 degree.
    pub orb: f64,
}

/// Tightest aspects reported per query.
pub const MAX_ASPECTS: usize = 10;

/// Separation between two longitudes folded into [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Every aspect each transiting planet makes to each natal planet, sorted
/// tightest first and truncated to `MAX_ASPECTS`. Overlapping orb windows
/// would let one pair match several aspects; with the present orbs the
/// windows are disjoint, but matches are deliberately not deduplicated.
pub fn find_aspects(transits: &[PlanetPosition], natal: &[PlanetPosition]) -> Vec<AspectInfo> {
    let mut found = Vec::new();

    for transit in transits {
        for natal_planet in natal {
            let separation = angular_separation(transit.longitude, natal_planet.longitude);
            for aspect in ASPECTS {
                let orb = (separation - aspect.angle()).abs();
                if orb <= aspect.orb() {
                    found.push(AspectInfo {
                        transit_planet: transit.planet,
                        natal_planet: natal_planet.planet,
                        aspect,
                        orb: (orb * 10.0).round() / 10.0,
                    });
                }
            }
        }
    }

    found.sort_by(|a, b| a.orb.partial_cmp(&b.orb).unwrap_or(Ordering::Equal));
    found.truncate(MAX_ASPECTS);
    found
}
