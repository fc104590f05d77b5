// src/tarot.rs
//
// The major arcana deck and deterministic draws. A reading is drawn
// without replacement from a date-seeded shuffle, so the same day and
// spread always yield the same cards.

use crate::date_seed;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TarotCard {
    pub id: &'static str,
    pub name: &'static str,
    pub arcana: Arcana,
    pub number: u8,
    pub keywords: &'static [&'static str],
    pub upright: &'static str,
    pub reversed: &'static str,
}

macro_rules! major {
    ($id:literal, $name:literal, $number:literal, $keywords:expr, $upright:literal, $reversed:literal) => {
        TarotCard {
            id: $id,
            name: $name,
            arcana: Arcana::Major,
            number: $number,
            keywords: $keywords,
            upright: $upright,
            reversed: $reversed,
        }
    };
}

pub const MAJOR_ARCANA: [TarotCard; 22] = [
    major!("major-0", "The Fool", 0, &["Beginnings", "Innocence", "Spontaneity"],
        "A leap of faith into the unknown; trust the journey ahead.",
        "Recklessness or hesitation; look before you leap."),
    major!("major-1", "The Magician", 1, &["Manifestation", "Willpower", "Skill"],
        "You have every tool you need to shape your reality.",
        "Scattered energy or manipulation; align intent with action."),
    major!("major-2", "The High Priestess", 2, &["Intuition", "Mystery", "Inner voice"],
        "Quiet knowing guides you; listen beneath the surface.",
        "Disconnection from intuition; secrets kept too long."),
    major!("major-3", "The Empress", 3, &["Abundance", "Nurturing", "Creativity"],
        "Fertile ground for projects and relationships to flourish.",
        "Creative block or smothering care; tend your own garden."),
    major!("major-4", "The Emperor", 4, &["Structure", "Authority", "Stability"],
        "Order and discipline build something that lasts.",
        "Rigidity or domineering control; loosen the grip."),
    major!("major-5", "The Hierophant", 5, &["Tradition", "Guidance", "Learning"],
        "Wisdom arrives through teachers and time-tested paths.",
        "Dogma constrains you; question convention."),
    major!("major-6", "The Lovers", 6, &["Union", "Choice", "Alignment"],
        "A meaningful connection or a values-defining choice.",
        "Disharmony or avoidance of a necessary decision."),
    major!("major-7", "The Chariot", 7, &["Determination", "Victory", "Control"],
        "Focused will drives opposing forces in one direction.",
        "Lost direction; reins slipping from your hands."),
    major!("major-8", "Strength", 8, &["Courage", "Patience", "Compassion"],
        "Gentle persistence tames what force cannot.",
        "Self-doubt or raw reaction; return to inner steadiness."),
    major!("major-9", "The Hermit", 9, &["Introspection", "Solitude", "Wisdom"],
        "Withdraw to find the answer your own light reveals.",
        "Isolation past its purpose; rejoin the world."),
    major!("major-10", "Wheel of Fortune", 10, &["Cycles", "Destiny", "Turning point"],
        "The wheel turns in your favor; ride the change.",
        "Resistance to a cycle closing; what goes around returns."),
    major!("major-11", "Justice", 11, &["Fairness", "Truth", "Accountability"],
        "Causes meet their effects; act with clear-eyed honesty.",
        "Imbalance or avoided accountability; weigh things again."),
    major!("major-12", "The Hanged Man", 12, &["Surrender", "New perspective", "Pause"],
        "Suspension brings the view that striving could not.",
        "Stalling disguised as patience; release or recommit."),
    major!("major-13", "Death", 13, &["Endings", "Transformation", "Renewal"],
        "An ending clears the ground for what is becoming.",
        "Clinging to the expired; transformation delayed."),
    major!("major-14", "Temperance", 14, &["Balance", "Moderation", "Blending"],
        "Patient mixing of opposites produces the middle way.",
        "Excess in one direction; restore proportion."),
    major!("major-15", "The Devil", 15, &["Attachment", "Shadow", "Temptation"],
        "Name the chain to loosen it; the lock is on your side.",
        "A binding loosens; freedom from an old compulsion."),
    major!("major-16", "The Tower", 16, &["Upheaval", "Revelation", "Liberation"],
        "A sudden collapse of the false makes room for the true.",
        "Disaster resisted or narrowly averted; rebuild deliberately."),
    major!("major-17", "The Star", 17, &["Hope", "Healing", "Inspiration"],
        "After the storm, a quiet light to steer by.",
        "Dimmed faith; reconnect with what renews you."),
    major!("major-18", "The Moon", 18, &["Illusion", "Dreams", "Uncertainty"],
        "Not all is as it appears; move slowly through the fog.",
        "Confusion lifting; fears shrink in daylight."),
    major!("major-19", "The Sun", 19, &["Joy", "Vitality", "Success"],
        "Warmth, clarity and success shine on your efforts.",
        "Clouded optimism; the light is there behind the overcast."),
    major!("major-20", "Judgement", 20, &["Awakening", "Reckoning", "Rebirth"],
        "A call to rise and answer for the life you want.",
        "Harsh self-judgment or an ignored calling."),
    major!("major-21", "The World", 21, &["Completion", "Integration", "Wholeness"],
        "A cycle completes; celebrate before the next begins.",
        "Loose ends prevent closure; finish what is nearly done."),
];

pub fn card_by_id(id: &str) -> Option<&'static TarotCard> {
    MAJOR_ARCANA.iter().find(|card| card.id == id)
}

// ---------------------------
// ## Spreads and Readings
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadType {
    Single,
    ThreeCard,
    CelticCross,
}

impl SpreadType {
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            SpreadType::Single => &["Guidance"],
            SpreadType::ThreeCard => &["Past", "Present", "Future"],
            SpreadType::CelticCross => &[
                "Present Situation",
                "Challenge",
                "Foundation",
                "Recent Past",
                "Crown",
                "Near Future",
                "Self",
                "Environment",
                "Hopes and Fears",
                "Outcome",
            ],
        }
    }

    fn slug(self) -> &'static str {
        match self {
            SpreadType::Single => "single",
            SpreadType::ThreeCard => "three-card",
            SpreadType::CelticCross => "celtic-cross",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCard {
    pub card_id: String,
    pub position: String,
    pub reversed: bool,
}

impl DrawnCard {
    pub fn card(&self) -> Option<&'static TarotCard> {
        card_by_id(&self.card_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotReading {
    pub id: String,
    pub date: NaiveDate,
    pub spread_type: SpreadType,
    pub cards: Vec<DrawnCard>,
    pub question: Option<String>,
}

/// Draw a reading for a date. Cards come from a seeded shuffle of the
/// major arcana, dealt without replacement; each is reversed with even
/// odds from the same stream.
pub fn draw_reading(spread: SpreadType, date: NaiveDate, question: Option<String>) -> TarotReading {
    let seed = date_seed(date) ^ ((spread as u64) << 32);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut deck: Vec<&'static TarotCard> = MAJOR_ARCANA.iter().collect();
    deck.shuffle(&mut rng);

    let cards = spread
        .positions()
        .iter()
        .zip(deck)
        .map(|(position, card)| DrawnCard {
            card_id: card.id.to_string(),
            position: (*position).to_string(),
            reversed: rng.gen_bool(0.5),
        })
        .collect();

    TarotReading {
        id: format!("{}-{}", spread.slug(), date),
        date,
        spread_type: spread,
        cards,
        question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deck_ids_are_unique_and_resolvable() {
        for (i, card) in MAJOR_ARCANA.iter().enumerate() {
            assert_eq!(card.number as usize, i);
            assert_eq!(card_by_id(card.id), Some(card));
        }
        assert!(card_by_id("major-22").is_none());
    }

    #[test]
    fn draws_are_deterministic_per_day_and_spread() {
        let d = date(2024, 4, 8);
        let a = draw_reading(SpreadType::ThreeCard, d, None);
        let b = draw_reading(SpreadType::ThreeCard, d, None);
        assert_eq!(a, b);
    }

    #[test]
    fn different_days_shuffle_differently() {
        let a = draw_reading(SpreadType::CelticCross, date(2024, 4, 8), None);
        let b = draw_reading(SpreadType::CelticCross, date(2024, 4, 9), None);
        assert_ne!(a.cards, b.cards);
    }

    #[test]
    fn spread_sizes_match_their_positions() {
        let d = date(2023, 12, 31);
        assert_eq!(draw_reading(SpreadType::Single, d, None).cards.len(), 1);
        assert_eq!(draw_reading(SpreadType::ThreeCard, d, None).cards.len(), 3);
        assert_eq!(draw_reading(SpreadType::CelticCross, d, None).cards.len(), 10);
    }

    #[test]
    fn cards_are_dealt_without_replacement() {
        let reading = draw_reading(SpreadType::CelticCross, date(2024, 1, 1), None);
        let mut ids: Vec<_> = reading.cards.iter().map(|c| c.card_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn drawn_cards_resolve_to_the_deck() {
        let reading = draw_reading(SpreadType::ThreeCard, date(2024, 2, 2), Some("career?".into()));
        for drawn in &reading.cards {
            let card = drawn.card().expect("drawn card resolves");
            assert_eq!(card.arcana, Arcana::Major);
        }
        assert_eq!(reading.question.as_deref(), Some("career?"));
    }

    #[test]
    fn reading_round_trips_through_json() {
        let reading = draw_reading(SpreadType::Single, date(2024, 3, 3), None);
        let json = serde_json::to_string(&reading).unwrap();
        let back: TarotReading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, back);
    }
}
