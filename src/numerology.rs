// src/numerology.rs
//
// Pythagorean numerology: cyclic A-Z letter values and digit-sum reduction
// with master-number preservation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Pythagorean value of a letter, 1-9 cycling through the alphabet.
/// Non-alphabetic characters carry no value.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u32 - 'a' as u32) % 9 + 1)
    } else {
        None
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly sum decimal digits until the value is a single digit, or a
/// master number (11, 22, 33) when `preserve_master` is set.
pub fn reduce(mut n: u32, preserve_master: bool) -> u32 {
    while n > 9 && !(preserve_master && MASTER_NUMBERS.contains(&n)) {
        n = digit_sum(n);
    }
    n
}

fn letter_sum(full_name: &str, filter: impl Fn(char) -> bool) -> u32 {
    full_name
        .chars()
        .filter(|c| filter(*c))
        .filter_map(letter_value)
        .sum()
}

/// Life path number. Month, day and year are reduced separately without
/// master preservation, then the sum of the three is reduced with it.
/// Collapsing the whole date in one pass gives wrong results for many
/// dates, so the two-phase order matters.
pub fn life_path(birth_date: NaiveDate) -> u32 {
    let month = reduce(birth_date.month(), false);
    let day = reduce(birth_date.day(), false);
    let year = reduce(birth_date.year().unsigned_abs(), false);
    reduce(month + day + year, true)
}

/// Expression number from every letter of the name.
pub fn expression(full_name: &str) -> u32 {
    reduce(letter_sum(full_name, |c| c.is_ascii_alphabetic()), true)
}

/// Soul urge number from the vowels only.
pub fn soul_urge(full_name: &str) -> u32 {
    reduce(letter_sum(full_name, is_vowel), true)
}

/// Personality number from the consonants only.
pub fn personality(full_name: &str) -> u32 {
    reduce(
        letter_sum(full_name, |c| c.is_ascii_alphabetic() && !is_vowel(c)),
        true,
    )
}

/// Birthday number from the day-of-month alone.
pub fn birthday(birth_date: NaiveDate) -> u32 {
    reduce(birth_date.day(), true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub birthday: u32,
}

pub fn numerology_profile(full_name: &str, birth_date: NaiveDate) -> NumerologyProfile {
    NumerologyProfile {
        life_path: life_path(birth_date),
        expression: expression(full_name),
        soul_urge: soul_urge(full_name),
        personality: personality(full_name),
        birthday: birthday(birth_date),
    }
}

// ---------------------------
// ## Interpretations
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMeaning {
    pub title: &'static str,
    pub keywords: &'static [&'static str],
}

/// Meaning of a reduced number. Only 1-9 and the master numbers are
/// defined; anything else yields None.
pub fn meaning(number: u32) -> Option<NumberMeaning> {
    let meaning = match number {
        1 => NumberMeaning {
            title: "The Leader",
            keywords: &["Independence", "Innovation", "Ambition", "Originality"],
        },
        2 => NumberMeaning {
            title: "The Diplomat",
            keywords: &["Cooperation", "Sensitivity", "Balance", "Partnership"],
        },
        3 => NumberMeaning {
            title: "The Creative",
            keywords: &["Expression", "Joy", "Creativity", "Communication"],
        },
        4 => NumberMeaning {
            title: "The Builder",
            keywords: &["Stability", "Hard Work", "Discipline", "Foundation"],
        },
        5 => NumberMeaning {
            title: "The Freedom Seeker",
            keywords: &["Change", "Adventure", "Freedom", "Versatility"],
        },
        6 => NumberMeaning {
            title: "The Nurturer",
            keywords: &["Responsibility", "Love", "Family", "Service"],
        },
        7 => NumberMeaning {
            title: "The Seeker",
            keywords: &["Wisdom", "Spirituality", "Analysis", "Introspection"],
        },
        8 => NumberMeaning {
            title: "The Powerhouse",
            keywords: &["Success", "Authority", "Material Abundance", "Achievement"],
        },
        9 => NumberMeaning {
            title: "The Humanitarian",
            keywords: &["Compassion", "Wisdom", "Universal Love", "Completion"],
        },
        11 => NumberMeaning {
            title: "The Illuminator",
            keywords: &["Inspiration", "Intuition", "Spiritual Messenger", "Enlightenment"],
        },
        22 => NumberMeaning {
            title: "The Master Builder",
            keywords: &["Master Plans", "Vision", "Large-scale Achievement", "Manifestation"],
        },
        33 => NumberMeaning {
            title: "The Master Teacher",
            keywords: &["Selfless Service", "Healing", "Blessing", "Cosmic Love"],
        },
        _ => return None,
    };
    Some(meaning)
}
