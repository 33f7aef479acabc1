//! Caption text generation from the walk count
//!
//! Produces lines like "a small cat:", "three curious cats (Mog, Biscuit,
//! Pickle):", or "a clowder of improbable cats:". The only structured input is
//! the count; everything else is drawn from the word tables below.

use crate::algorithm::selection::RandomSelector;

// Common descriptions, drawn three times out of four
const PREFERRED_ADJECTIVES: &[&str] = &[
    "small", "soft", "warm", "sleepy", "round", "gentle", "quiet", "happy", "cozy", "curious",
    "fuzzy", "fine", "good", "proud", "lovely", "elegant", "polite", "tidy",
];

// The weirder quarter
const ADJECTIVES: &[&str] = &[
    "angular",
    "improbable",
    "clandestine",
    "ornamental",
    "recursive",
    "bureaucratic",
    "unsupervised",
    "load-bearing",
    "medieval",
    "unsolicited",
    "biodegradable",
    "uninsured",
    "freelance",
    "decorative",
    "anonymous",
    "unique",
];

const NOUNS: &[&str] = &[
    "friend",
    "companion",
    "specimen",
    "wanderer",
    "gremlin",
    "loaf",
    "menace",
    "neighbor",
];

const NAMES: &[&str] = &[
    "Mog", "Jiji", "Biscuit", "Pickle", "Clementine", "Soba", "Turnip", "Marzipan", "Fig",
    "Noodle", "Pepper", "Mochi",
];

// Collective nouns for eight or more cats
const VENERY_TERMS: &[&str] = &["clowder", "glaring", "pounce", "colony", "clutter"];

const JOINERS: &[&str] = &[", ", " but ", " and "];

const DOUBLE_ADJECTIVE_CHANCE: f64 = 0.1;
const PLAIN_ONE_CHANCE: f64 = 0.35;
const NAME_LIST_CHANCE: f64 = 0.18;
const RARE_TABLE_CHANCE: f64 = 0.25;

fn pick_adjective(selector: &mut RandomSelector) -> &'static str {
    let table = if selector.unit() < RARE_TABLE_CHANCE {
        ADJECTIVES
    } else {
        PREFERRED_ADJECTIVES
    };
    selector.pick(table).copied().unwrap_or("small")
}

fn pick_name(selector: &mut RandomSelector) -> &'static str {
    let table = if selector.unit() < RARE_TABLE_CHANCE {
        NOUNS
    } else {
        NAMES
    };
    selector.pick(table).copied().unwrap_or("Mog")
}

/// Indefinite article for a word, with the "u_i" exception ("a unique")
fn indefinite_article(word: &str) -> &'static str {
    let mut chars = word.chars();
    let first = chars.next().unwrap_or('c').to_ascii_lowercase();
    let third = word.chars().nth(2).map(|c| c.to_ascii_lowercase());
    if first == 'u' && third == Some('i') {
        "a"
    } else if matches!(first, 'a' | 'e' | 'i' | 'o' | 'u') {
        "an"
    } else {
        "a"
    }
}

/// Build a caption for a generation that made `cats` walks
pub fn make_status(cats: usize, selector: &mut RandomSelector) -> String {
    let adjective = if selector.unit() < DOUBLE_ADJECTIVE_CHANCE {
        let first = pick_adjective(selector);
        let joiner = selector.pick(JOINERS).copied().unwrap_or(", ");
        let second = pick_adjective(selector);
        format!("{first}{joiner}{second}")
    } else {
        pick_adjective(selector).to_string()
    };

    let prefix = match cats {
        1 => {
            if selector.unit() < PLAIN_ONE_CHANCE {
                "one".to_string()
            } else {
                indefinite_article(&adjective).to_string()
            }
        }
        2 => "two".to_string(),
        3 => "three".to_string(),
        4 => "four".to_string(),
        5 => "five".to_string(),
        6 => "six".to_string(),
        7 => "seven".to_string(),
        _ => {
            let term = selector.pick(VENERY_TERMS).copied().unwrap_or("clowder");
            format!("a {term} of")
        }
    };

    let names = if (2..=4).contains(&cats) && selector.unit() < NAME_LIST_CHANCE {
        let list: Vec<&str> = (0..cats).map(|_| pick_name(selector)).collect();
        format!(" ({})", list.join(", "))
    } else {
        String::new()
    };

    let noun = if cats == 1 { "cat" } else { "cats" };
    format!("{prefix} {adjective} {noun}{names}:")
}
