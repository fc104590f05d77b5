// src/guidance.rs
//
// Daily guidance assembled from the current sky, the stored profile and
// numerology. Random top-ups are seeded from the evaluation date, so a
// given day always produces the same guidance.

use crate::chart::{current_positions, natal_chart, parse_birth_date};
use crate::date_seed;
use crate::ephemeris::Planet;
use crate::moon::{moon_phase, MoonPhase};
use crate::numerology;
use crate::store::UserProfile;
use crate::zodiac::{Element, ZodiacSign};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyColor {
    pub name: &'static str,
    pub hex: &'static str,
}

const COLORS: [LuckyColor; 10] = [
    LuckyColor { name: "Gold", hex: "#d4af37" },
    LuckyColor { name: "Silver", hex: "#c0c0c0" },
    LuckyColor { name: "Purple", hex: "#7b4397" },
    LuckyColor { name: "Blue", hex: "#4a90d9" },
    LuckyColor { name: "Green", hex: "#2d6a4f" },
    LuckyColor { name: "Red", hex: "#c1292e" },
    LuckyColor { name: "White", hex: "#f5f5f5" },
    LuckyColor { name: "Pink", hex: "#e07b9a" },
    LuckyColor { name: "Orange", hex: "#e76f51" },
    LuckyColor { name: "Turquoise", hex: "#40916c" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyGuidance {
    pub date: NaiveDate,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub moon_phase: MoonPhase,
    pub message: &'static str,
    pub lucky_numbers: Vec<u32>,
    pub lucky_colors: Vec<LuckyColor>,
    pub affirmation: &'static str,
}

/// Guidance for the day containing `instant`. With a usable profile the
/// natal Sun sign drives the personalized pieces; otherwise the current
/// Sun sign stands in.
pub fn daily_guidance(profile: Option<&UserProfile>, instant: DateTime<Utc>) -> DailyGuidance {
    let date = instant.date_naive();
    let day_of_year = date.ordinal();

    let current = current_positions(instant);
    let sun_sign = current
        .iter()
        .find(|p| p.planet == Planet::Sun)
        .map(|p| p.sign)
        .unwrap_or(ZodiacSign::Aries);
    let moon_sign = current
        .iter()
        .find(|p| p.planet == Planet::Moon)
        .map(|p| p.sign)
        .unwrap_or(ZodiacSign::Aries);
    let phase = moon_phase(instant);

    let usable = profile.filter(|p| p.has_birth_data());
    let natal_sun = usable.and_then(|p| {
        let time = (!p.birth_time.is_empty()).then_some(p.birth_time.as_str());
        natal_chart(&p.birth_date, time, p.latitude, p.longitude)
            .ok()
            .and_then(|chart| chart.planet(Planet::Sun).map(|s| s.sign))
    });
    let display_sign = natal_sun.unwrap_or(sun_sign);

    let life_path = usable
        .and_then(|p| parse_birth_date(&p.birth_date).ok())
        .map(numerology::life_path)
        .unwrap_or(day_of_year % 9 + 1);

    DailyGuidance {
        date,
        sun_sign,
        moon_sign,
        moon_phase: phase.phase,
        message: daily_message(display_sign, day_of_year),
        lucky_numbers: lucky_numbers(life_path, day_of_year, date),
        lucky_colors: lucky_colors(display_sign, day_of_year),
        affirmation: affirmation(display_sign),
    }
}

// ---------------------------
// ## Lucky Numbers and Colors
// ---------------------------

/// Five distinct numbers in 1-44: the life path, two day-derived values
/// and a date-seeded top-up, sorted ascending.
pub fn lucky_numbers(life_path: u32, day_of_year: u32, date: NaiveDate) -> Vec<u32> {
    let mut numbers = BTreeSet::new();
    numbers.insert(life_path);
    numbers.insert(day_of_year % 9 + 1);
    numbers.insert((life_path + day_of_year) % 22 + 1);

    let mut rng = ChaCha8Rng::seed_from_u64(date_seed(date));
    while numbers.len() < 5 {
        numbers.insert(rng.gen_range(1..=44));
    }

    numbers.into_iter().collect()
}

fn element_color_names(element: Element) -> &'static [&'static str] {
    match element {
        Element::Fire => &["Red", "Orange", "Gold"],
        Element::Earth => &["Green", "Brown", "Gold"],
        Element::Air => &["Blue", "White", "Silver"],
        Element::Water => &["Blue", "Purple", "Silver"],
    }
}

/// Element colors for the sign plus one day-rotated extra, at most three.
pub fn lucky_colors(sign: ZodiacSign, day_of_year: u32) -> Vec<LuckyColor> {
    let base = element_color_names(sign.element());
    let mut result: Vec<LuckyColor> = COLORS
        .iter()
        .filter(|c| base.contains(&c.name))
        .copied()
        .collect();

    let extra = COLORS[day_of_year as usize % COLORS.len()];
    if !result.iter().any(|c| c.name == extra.name) {
        result.push(extra);
    }

    result.truncate(3);
    result
}

// ---------------------------
// ## Messages and Affirmations
// ---------------------------

fn daily_message(sign: ZodiacSign, day_of_year: u32) -> &'static str {
    let messages: [&'static str; 3] = match sign {
        ZodiacSign::Aries => [
            "Your pioneering spirit leads the way today. Trust your instincts.",
            "Bold action brings rewards. Don't hesitate when opportunity calls.",
            "Your natural leadership shines. Others look to you for guidance.",
        ],
        ZodiacSign::Taurus => [
            "Steady progress wins the day. Trust your practical wisdom.",
            "Beauty and comfort nurture your soul. Take time for sensory pleasures.",
            "Your patience is your power. Good things come to those who wait.",
        ],
        ZodiacSign::Gemini => [
            "Your quick mind dances between ideas. Follow your curiosity.",
            "Communication flows easily. Share your thoughts and make connections.",
            "Versatility is your strength. Embrace the variety life offers.",
        ],
        ZodiacSign::Cancer => [
            "Trust your intuition today. Your feelings are your compass.",
            "Nurturing energy surrounds you. Care for yourself and others.",
            "Home and family bring comfort. Create your sanctuary.",
        ],
        ZodiacSign::Leo => [
            "Your light shines brightly today. Express yourself with confidence.",
            "Creativity flows from your heart. Let your inner artist play.",
            "Generosity returns to you multiplied. Give from the heart.",
        ],
        ZodiacSign::Virgo => [
            "Details matter today. Your analytical skills serve you well.",
            "Service to others brings fulfillment. Your help makes a difference.",
            "Health and wellness call for attention. Honor your body's wisdom.",
        ],
        ZodiacSign::Libra => [
            "Balance and harmony guide your path. Seek fairness in all things.",
            "Relationships flourish with your diplomatic touch. Build bridges.",
            "Beauty uplifts your spirit. Surround yourself with aesthetic pleasure.",
        ],
        ZodiacSign::Scorpio => [
            "Deep transformation is available. Trust the process of renewal.",
            "Your intensity is magnetic. Channel your passion purposefully.",
            "Hidden truths reveal themselves. Your perception cuts through illusion.",
        ],
        ZodiacSign::Sagittarius => [
            "Adventure calls your spirit. Expand your horizons.",
            "Optimism lights your way. Your faith creates possibilities.",
            "Wisdom flows through experience. Every journey teaches.",
        ],
        ZodiacSign::Capricorn => [
            "Your ambition aligns with opportunity. Build toward your goals.",
            "Discipline and patience create lasting success. Stay the course.",
            "Authority comes naturally. Take responsibility with grace.",
        ],
        ZodiacSign::Aquarius => [
            "Innovation sparks your mind. Your unique vision benefits all.",
            "Community connections strengthen. Collaborate for change.",
            "Freedom calls your spirit. Be authentically yourself.",
        ],
        ZodiacSign::Pisces => [
            "Intuition and dreams guide you. Trust your inner knowing.",
            "Compassion opens doors. Your empathy heals others.",
            "Creativity flows like water. Let imagination carry you.",
        ],
    };
    messages[day_of_year as usize % 3]
}

fn affirmation(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => {
            "I am bold, courageous, and capable of achieving anything I set my mind to."
        }
        ZodiacSign::Taurus => "I am grounded, abundant, and worthy of all the beauty life offers.",
        ZodiacSign::Gemini => "I am adaptable, curious, and my mind is a gift to the world.",
        ZodiacSign::Cancer => "I am nurturing, intuitive, and my emotions are my strength.",
        ZodiacSign::Leo => "I am radiant, creative, and my light inspires others.",
        ZodiacSign::Virgo => "I am precise, helpful, and my attention to detail creates excellence.",
        ZodiacSign::Libra => "I am balanced, harmonious, and I create beauty wherever I go.",
        ZodiacSign::Scorpio => "I am powerful, transformative, and I embrace my depth.",
        ZodiacSign::Sagittarius => "I am optimistic, adventurous, and wisdom flows through me.",
        ZodiacSign::Capricorn => "I am disciplined, ambitious, and I build lasting success.",
        ZodiacSign::Aquarius => "I am innovative, unique, and my vision serves humanity.",
        ZodiacSign::Pisces => "I am intuitive, compassionate, and connected to the divine.",
    }
}
