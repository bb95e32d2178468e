//! Static pattern tables for intent extraction.
//!
//! Each table is an ordered list of `(pattern, label)` pairs. Extraction walks
//! a table top to bottom, so table order is the tie-break rule wherever a
//! single value is picked. Tables are compiled once on first use and never
//! mutated afterwards.
//!
//! | Table | Matching | Result |
//! |-------|----------|--------|
//! | [`FORMAT_PATTERNS`] | word boundary | first match |
//! | [`COLOR_GROUPS`] | substring | union |
//! | [`COLOR_WORDS`] | word boundary | union |
//! | [`ARCHETYPE_PATTERNS`] | word boundary, synonyms | first match |
//! | [`TRIBE_PATTERNS`] | word boundary | first match |
//! | [`THEME_PATTERNS`] | word boundary | first match |
//! | [`CONSTRAINT_PATTERNS`] | word boundary, synonyms | all matches |

use super::value_objects::{Archetype, Color, Constraint, Format};
use regex::Regex;
use std::sync::LazyLock;

use Color::{Black as B, Blue as U, Green as G, Red as R, White as W};

/// Compile a case-insensitive pattern from the static tables below.
fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?i){}", source)).expect("static intent pattern must compile")
}

pub static FORMAT_PATTERNS: LazyLock<Vec<(Regex, Format)>> = LazyLock::new(|| {
    vec![
        (pattern(r"\bstandard\b"), Format::Standard),
        (pattern(r"\bhistoric\b"), Format::Historic),
        (pattern(r"\bexplorer\b"), Format::Explorer),
        (pattern(r"\bpioneer\b"), Format::Pioneer),
        (pattern(r"\bmodern\b"), Format::Modern),
        (pattern(r"\blegacy\b"), Format::Legacy),
        (pattern(r"\bvintage\b"), Format::Vintage),
        (pattern(r"\bbrawl\b"), Format::Brawl),
        (pattern(r"\btimeless\b"), Format::Timeless),
    ]
});

/// Guild, clan, shard and mono-color names, matched as lowercase substrings.
///
/// Checked before [`COLOR_WORDS`] since these names are more specific.
pub const COLOR_GROUPS: &[(&str, &[Color])] = &[
    // Ravnica guilds
    ("azorius", &[W, U]),
    ("dimir", &[U, B]),
    ("rakdos", &[B, R]),
    ("gruul", &[R, G]),
    ("selesnya", &[G, W]),
    ("orzhov", &[W, B]),
    ("izzet", &[U, R]),
    ("golgari", &[B, G]),
    ("boros", &[R, W]),
    ("simic", &[G, U]),
    // Tarkir clans
    ("abzan", &[W, B, G]),
    ("jeskai", &[U, R, W]),
    ("sultai", &[B, G, U]),
    ("mardu", &[R, W, B]),
    ("temur", &[G, U, R]),
    // Alara shards
    ("bant", &[G, W, U]),
    ("esper", &[W, U, B]),
    ("grixis", &[U, B, R]),
    ("jund", &[B, R, G]),
    ("naya", &[R, G, W]),
    // Mono-color
    ("mono-white", &[W]),
    ("mono-blue", &[U]),
    ("mono-black", &[B]),
    ("mono-red", &[R]),
    ("mono-green", &[G]),
    ("monowhite", &[W]),
    ("monoblue", &[U]),
    ("monoblack", &[B]),
    ("monored", &[R]),
    ("monogreen", &[G]),
];

/// Color words and single-letter mana symbols.
pub static COLOR_WORDS: LazyLock<Vec<(Regex, Color)>> = LazyLock::new(|| {
    vec![
        (pattern(r"\bwhite\b"), W),
        (pattern(r"\bblue\b"), U),
        (pattern(r"\bblack\b"), B),
        (pattern(r"\bred\b"), R),
        (pattern(r"\bgreen\b"), G),
        (pattern(r"\bw\b"), W),
        (pattern(r"\bu\b"), U),
        (pattern(r"\bb\b"), B),
        (pattern(r"\br\b"), R),
        (pattern(r"\bg\b"), G),
    ]
});

pub static ARCHETYPE_PATTERNS: LazyLock<Vec<(Regex, Archetype)>> = LazyLock::new(|| {
    vec![
        (
            pattern(r"\b(aggro|aggressive|fast|beatdown)\b"),
            Archetype::Aggro,
        ),
        (pattern(r"\b(midrange|mid-range|value)\b"), Archetype::Midrange),
        (pattern(r"\b(control|controlling)\b"), Archetype::Control),
        (pattern(r"\b(combo|combination|otk)\b"), Archetype::Combo),
        (pattern(r"\b(tempo)\b"), Archetype::Tempo),
        (pattern(r"\b(ramp|ramping|big.?mana)\b"), Archetype::Ramp),
    ]
});

/// Creature types that indicate a tribal deck.
pub static TRIBE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (pattern(r"\bdragon(s)?\b"), "Dragon"),
        (pattern(r"\bgoblin(s)?\b"), "Goblin"),
        (pattern(r"\belf\b|\belves\b"), "Elf"),
        (pattern(r"\bvampire(s)?\b"), "Vampire"),
        (pattern(r"\bzombie(s)?\b"), "Zombie"),
        (pattern(r"\bmerfolk\b"), "Merfolk"),
        (pattern(r"\bangel(s)?\b"), "Angel"),
        (pattern(r"\bdemon(s)?\b"), "Demon"),
        (pattern(r"\bwarrior(s)?\b"), "Warrior"),
        (pattern(r"\bknight(s)?\b"), "Knight"),
        (pattern(r"\bwizard(s)?\b"), "Wizard"),
        (pattern(r"\bshaman(s)?\b"), "Shaman"),
        (pattern(r"\bdinosaur(s)?\b"), "Dinosaur"),
        (pattern(r"\bpirate(s)?\b"), "Pirate"),
        (pattern(r"\bspirit(s)?\b"), "Spirit"),
        (pattern(r"\bcat(s)?\b"), "Cat"),
        (pattern(r"\bdog(s)?\b"), "Dog"),
        (pattern(r"\brat(s)?\b"), "Rat"),
        (pattern(r"\bsliver(s)?\b"), "Sliver"),
        (pattern(r"\bhuman(s)?\b"), "Human"),
        (pattern(r"\bsoldier(s)?\b"), "Soldier"),
        (pattern(r"\bshrine(s)?\b"), "Shrine"),
    ]
});

/// Non-tribal mechanical themes.
pub static THEME_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (pattern(r"\bsacrifice\b|\bsac\b"), "sacrifice"),
        (pattern(r"\bgraveyard\b|\breanimator\b"), "graveyard"),
        (pattern(r"\bartifact(s)?\b"), "artifacts"),
        (
            pattern(r"\benchantment(s)?\b|\benchantress\b"),
            "enchantments",
        ),
        (pattern(r"\btoken(s)?\b"), "tokens"),
        (pattern(r"\blifegain\b|\blife.?gain\b"), "lifegain"),
        (pattern(r"\bmill\b|\bmilling\b"), "mill"),
        (pattern(r"\bburn\b"), "burn"),
        (pattern(r"\bdiscard\b"), "discard"),
        (pattern(r"\bcounters?\b|\b\+1/\+1\b"), "counters"),
        (pattern(r"\bflicker\b|\bblink\b"), "blink"),
        (pattern(r"\blandfall\b"), "landfall"),
        (
            pattern(r"\bspellslinger\b|\binstants?\s*(and|&)?\s*sorceries?\b"),
            "spellslinger",
        ),
    ]
});

pub static CONSTRAINT_PATTERNS: LazyLock<Vec<(Regex, Constraint)>> = LazyLock::new(|| {
    vec![
        (
            pattern(r"\b(budget|cheap|affordable|low.?cost)\b"),
            Constraint::Budget,
        ),
        (
            pattern(r"\b(competitive|comp|ranked|tournament)\b"),
            Constraint::Competitive,
        ),
        (pattern(r"\b(casual|fun|jank|janky)\b"), Constraint::Casual),
        (pattern(r"\b(singleton|highlander)\b"), Constraint::Singleton),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(FORMAT_PATTERNS.len(), Format::ALL.len());
        assert_eq!(ARCHETYPE_PATTERNS.len(), Archetype::ALL.len());
        assert_eq!(CONSTRAINT_PATTERNS.len(), Constraint::ALL.len());
        assert_eq!(COLOR_WORDS.len(), 10);
        assert!(!TRIBE_PATTERNS.is_empty());
        assert!(!THEME_PATTERNS.is_empty());
    }

    #[test]
    fn test_format_table_follows_enum_order() {
        let order: Vec<Format> = FORMAT_PATTERNS.iter().map(|(_, f)| *f).collect();
        assert_eq!(order, Format::ALL.to_vec());
    }

    #[test]
    fn test_color_group_names_are_lowercase() {
        for (name, colors) in COLOR_GROUPS {
            assert_eq!(*name, name.to_lowercase());
            assert!(!colors.is_empty(), "{} has no colors", name);
        }
    }

    #[test]
    fn test_theme_counters_pattern() {
        let (regex, label) = THEME_PATTERNS
            .iter()
            .find(|(_, label)| *label == "counters")
            .unwrap();
        assert_eq!(*label, "counters");
        assert!(regex.is_match("+1/+1 counter synergies"));
        assert!(regex.is_match("Counters matter"));
        assert!(!regex.is_match("encounter"));
    }
}
