use celestial_core::{
    current_positions, daily_guidance, find_aspects, moon_phase, natal_chart, numerology_profile,
};
use chrono::Utc;

fn main() {
    // example: 29 november 1990 06:30 UTC, new york
    let chart = match natal_chart("1990-11-29", Some("06:30"), 40.7128, -74.0060) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    println!(
        "Ascendant {} {:.1}  Midheaven {} {:.1}",
        chart.ascendant.sign, chart.ascendant.degree, chart.midheaven.sign, chart.midheaven.degree
    );
    for planet in &chart.planets {
        println!(
            "{} {:8} {:2}\u{b0} {:02}' {}{}",
            planet.planet.symbol(),
            planet.planet.name(),
            planet.degree,
            planet.minute,
            planet.sign,
            if planet.retrograde { " (retrograde)" } else { "" }
        );
    }

    let now = Utc::now();
    let phase = moon_phase(now);
    println!("\n{} {} ({:.0}% illuminated)", phase.emoji(), phase.name(), phase.illumination);

    if let Ok(birth_date) = "1990-11-29".parse() {
        let numbers = numerology_profile("Ada Lovelace", birth_date);
        println!(
            "Life path {}  Expression {}  Soul urge {}  Personality {}  Birthday {}",
            numbers.life_path,
            numbers.expression,
            numbers.soul_urge,
            numbers.personality,
            numbers.birthday
        );
    }

    let transits = current_positions(now);
    println!("\nTightest transits to the natal chart:");
    for aspect in find_aspects(&transits, &chart.planets) {
        println!(
            "{} {} natal {} (orb {:.1}\u{b0})",
            aspect.transit_planet.name(),
            aspect.aspect,
            aspect.natal_planet.name(),
            aspect.orb
        );
    }

    let guidance = daily_guidance(None, now);
    println!(
        "\nSun in {}, Moon in {}. {}",
        guidance.sun_sign, guidance.moon_sign, guidance.message
    );
}
