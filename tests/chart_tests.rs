use celestial_core::{
    current_positions, daily_guidance, find_aspects, moon_phase, natal_chart, numerology_profile,
    Aspect, House, Planet, Store, UserProfile, ZodiacSign,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Andreas Oracle".into(),
        birth_date: "1990-11-29".into(),
        birth_time: "06:30".into(),
        birth_place: "New York".into(),
        latitude: 40.7128,
        longitude: -74.0060,
        timezone: "America/New_York".into(),
    }
}

#[test]
fn natal_chart_structure_is_complete() {
    let chart = natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060).unwrap();

    assert_eq!(chart.planets.len(), 10);
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.houses[0].house, House::First);
    assert_eq!(chart.ascendant.sign, chart.houses[0].sign);

    for planet in &chart.planets {
        assert!((0.0..360.0).contains(&planet.longitude));
        assert!(planet.degree <= 29);
        assert!(planet.minute <= 59);
        assert!(planet.house.is_some());
        assert_eq!(planet.sign, ZodiacSign::from_longitude(planet.longitude));
    }
}

#[test]
fn same_birth_data_always_yields_the_same_chart() {
    let first = natal_chart("1984-02-29", Some("23:45"), 51.5074, -0.1278).unwrap();
    for _ in 0..5 {
        let again = natal_chart("1984-02-29", Some("23:45"), 51.5074, -0.1278).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn transits_against_the_natal_chart_are_capped_and_sorted() {
    let chart = natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060).unwrap();
    let instant = Utc.with_ymd_and_hms(2024, 4, 8, 18, 20, 0).unwrap();
    let aspects = find_aspects(&current_positions(instant), &chart.planets);

    assert!(aspects.len() <= 10);
    for pair in aspects.windows(2) {
        assert!(pair[0].orb <= pair[1].orb);
    }
    for aspect in &aspects {
        let max_orb = match aspect.aspect {
            Aspect::Sextile => 6.0,
            _ => 8.0,
        };
        assert!(aspect.orb <= max_orb);
    }
}

#[test]
fn moon_phase_and_chart_share_the_longitude_model() {
    let instant = Utc.with_ymd_and_hms(2024, 4, 8, 18, 20, 0).unwrap();
    let positions = current_positions(instant);
    let sun = positions.iter().find(|p| p.planet == Planet::Sun).unwrap();
    let moon = positions.iter().find(|p| p.planet == Planet::Moon).unwrap();

    let elongation = (moon.longitude - sun.longitude).rem_euclid(360.0);
    let info = moon_phase(instant);
    let expected = celestial_core::MoonPhase::from_angle(elongation);
    assert_eq!(info.phase, expected);
    assert!((0.0..=100.0).contains(&info.illumination));
}

#[test]
fn numerology_profile_matches_the_worked_example() {
    let birth_date = NaiveDate::from_ymd_opt(1990, 11, 29).unwrap();
    let profile = numerology_profile("Andreas Oracle", birth_date);
    assert_eq!(profile.life_path, 5);
    assert_eq!(profile.birthday, 11);
    assert!(matches!(profile.expression, 1..=9 | 11 | 22 | 33));
    assert!(matches!(profile.soul_urge, 1..=9 | 11 | 22 | 33));
    assert!(matches!(profile.personality, 1..=9 | 11 | 22 | 33));
}

#[test]
fn guidance_pipeline_runs_from_a_stored_profile() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    store.save_profile(&sample_profile()).unwrap();

    let loaded = store.load_profile().unwrap().expect("saved profile");
    assert!(loaded.has_birth_data());

    let instant = Utc.with_ymd_and_hms(2024, 4, 8, 9, 0, 0).unwrap();
    let guidance = daily_guidance(Some(&loaded), instant);
    assert_eq!(guidance, daily_guidance(Some(&loaded), instant));
    assert_eq!(guidance.lucky_numbers.len(), 5);
    assert!(guidance.lucky_numbers.contains(&5));

    store.clear_profile().unwrap();
    assert_eq!(store.load_profile().unwrap(), None);
}
