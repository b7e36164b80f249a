//! Shared dictionaries and expected results for engine and workflow tests.

use std::collections::BTreeSet;

/// Every 6x6 square with distinct words whose first row is "palays", in the order a
/// single-threaded search over a large English word list produces them.
pub(crate) const PALAYS_BOARDS: [[&str; 6]; 79] = [
    ["palays", "abadan", "lexeme", "alisma", "cisted", "eaters"],
    ["palays", "abadan", "lexeme", "alisma", "tested", "esters"],
    ["palays", "aboral", "karaka", "eyelet", "halite", "assays"],
    ["palays", "aboral", "torero", "trices", "encash", "reasty"],
    ["palays", "aboral", "torero", "trines", "encash", "reasty"],
    ["palays", "adonai", "rogers", "crimes", "ancile", "essays"],
    ["palays", "adonai", "tracks", "iodous", "niente", "strass"],
    ["palays", "adonai", "trucks", "iodous", "niente", "strass"],
    ["palays", "adonai", "trunks", "iodous", "niente", "strass"],
    ["palays", "agorae", "rubati", "giants", "esteem", "shears"],
    ["palays", "agorot", "unlade", "palled", "etoile", "repass"],
    ["palays", "amazon", "reside", "insole", "atoner", "lasers"],
    ["palays", "amebae", "namers", "azalea", "monism", "ansate"],
    ["palays", "amenta", "reests", "enters", "nellie", "tremas"],
    ["palays", "amoret", "rafale", "attila", "neesed", "adders"],
    ["palays", "amoret", "regime", "irised", "accend", "nessie"],
    ["palays", "amoret", "tendre", "engobe", "neural", "tressy"],
    ["palays", "amulet", "lascar", "attune", "tories", "elands"],
    ["palays", "amulet", "lessor", "intima", "nerkas", "greens"],
    ["palays", "amulet", "lessor", "intime", "nerkas", "greens"],
    ["palays", "amulet", "retama", "abeles", "narine", "assais"],
    ["palays", "amulet", "ruddle", "aslope", "meused", "ormers"],
    ["palays", "amulet", "woggle", "argala", "weiter", "steeds"],
    ["palays", "amulet", "woggle", "argala", "weiter", "steers"],
    ["palays", "anemia", "ligers", "elands", "settee", "treads"],
    ["palays", "anemia", "ligers", "elands", "settee", "troads"],
    ["palays", "anicut", "topeka", "riatas", "ensate", "stelas"],
    ["palays", "animal", "litera", "amened", "turtle", "essays"],
    ["palays", "animal", "rivera", "amened", "dartle", "essays"],
    ["palays", "animal", "rivera", "amened", "gentle", "essays"],
    ["palays", "aranea", "potass", "aments", "yankee", "asters"],
    ["palays", "aranea", "sanely", "trompe", "easier", "steads"],
    ["palays", "aranea", "sanely", "trompe", "easier", "stears"],
    ["palays", "ararat", "caribe", "enrobe", "reused", "sapors"],
    ["palays", "ararat", "lanate", "incite", "neesed", "gaters"],
    ["palays", "ararat", "lorate", "amrita", "mauser", "aspers"],
    ["palays", "ararat", "retake", "aneled", "danite", "essays"],
    ["palays", "ararat", "retake", "aniler", "danite", "essays"],
    ["palays", "arouet", "coggle", "illipe", "flotel", "yagers"],
    ["palays", "arouet", "measle", "pattle", "achier", "shends"],
    ["palays", "atabal", "nagari", "abused", "denise", "agents"],
    ["palays", "atabek", "coarse", "ingate", "needer", "orrery"],
    ["palays", "atabek", "thyrse", "remote", "enamel", "senary"],
    ["palays", "ativan", "polite", "uniate", "letter", "ashery"],
    ["palays", "avidin", "rebore", "ananke", "mitier", "oreads"],
    ["palays", "avocet", "rattle", "attila", "naiver", "greeds"],
    ["palays", "avowal", "litera", "latten", "otiose", "reests"],
    ["palays", "egeria", "alecky", "retake", "calder", "emeers"],
    ["palays", "elanet", "settle", "exhale", "tiered", "anears"],
    ["palays", "eleven", "liaise", "inmate", "teeter", "eddery"],
    ["palays", "eleven", "liaise", "innate", "teeter", "eddery"],
    ["palays", "eleven", "lupine", "oleate", "tartar", "assess"],
    ["palays", "enerve", "teston", "attend", "lierne", "scryer"],
    ["palays", "evolve", "waggon", "tigons", "elaine", "rended"],
    ["palays", "evovae", "radars", "ungirt", "stelae", "eident"],
    ["palays", "ibadan", "lexeme", "alisma", "fitted", "sayers"],
    ["palays", "ibadan", "lexeme", "alisma", "tested", "esters"],
    ["palays", "ibadan", "lexeme", "alisma", "witted", "sayers"],
    ["palays", "igorot", "lovage", "uranin", "latent", "assais"],
    ["palays", "imaret", "neagle", "engild", "reeved", "orrery"],
    ["palays", "imaret", "nubile", "aslope", "teased", "arbors"],
    ["palays", "imaret", "nubile", "aslope", "teasel", "arbors"],
    ["palays", "imaret", "nubile", "aslope", "teaser", "arbors"],
    ["palays", "imaret", "nuncle", "escape", "reeded", "orders"],
    ["palays", "imaret", "nuncle", "escape", "reeded", "orrery"],
    ["palays", "imaret", "nuncle", "escape", "reeden", "orders"],
    ["palays", "imaret", "nuncle", "escape", "reeder", "orders"],
    ["palays", "imaret", "tingle", "ancile", "reeved", "asters"],
    ["palays", "isobel", "tadema", "aneled", "ranine", "assais"],
    ["palays", "loiret", "unable", "fibula", "falter", "sneers"],
    ["palays", "oberon", "ureide", "sapele", "sieger", "eddery"],
    ["palays", "olivet", "debase", "sprite", "opaled", "loners"],
    ["palays", "olivet", "oppose", "depute", "leered", "enders"],
    ["palays", "olivet", "pinole", "ungula", "leered", "idlers"],
    ["palays", "origan", "monera", "amener", "candle", "essays"],
    ["palays", "origan", "monera", "amener", "dandle", "essays"],
    ["palays", "origan", "soneri", "amened", "dandle", "assays"],
    ["palays", "orison", "tinkle", "ashake", "starer", "sayids"],
    ["palays", "swerve", "orator", "racing", "achene", "skyres"],
];

/// The rows and columns of [`PALAYS_BOARDS`], sorted and deduplicated.
///
/// Any square over this dictionary is also a square over the word list the boards came
/// from, so searching it from "palays" must yield exactly [`PALAYS_BOARDS`].
pub(crate) fn palays_dictionary() -> Vec<String> {
    let mut words = BTreeSet::new();
    for rows in &PALAYS_BOARDS {
        for (col, row) in rows.iter().enumerate() {
            words.insert(row.to_string());
            let column: String = rows.iter().map(|r| char::from(r.as_bytes()[col])).collect();
            words.insert(column);
        }
    }
    words.into_iter().collect()
}

/// A sorted 20-word, 4-letter dictionary small enough to brute force.
///
/// It yields fifteen squares from four starting words. Seven are symmetric, and
/// [`SMALL_UNIQUE_BOARDS`] lists the four whose eight words are all distinct.
pub(crate) fn small_dictionary() -> Vec<String> {
    let mut words: Vec<String> = [
        "card", "area", "rear", "dart", "list", "late", "call", "aria", "rest", "date", "calm",
        "mate", "lift", "east", "miss", "ease", "tale", "step", "acid", "rode",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();
    words.sort();
    words
}

/// Squares over [`small_dictionary`] that pass the uniqueness filter, in search order.
pub(crate) const SMALL_UNIQUE_BOARDS: [[&str; 4]; 4] = [
    ["call", "aria", "rest", "date"],
    ["calm", "aria", "rest", "date"],
    ["card", "area", "list", "late"],
    ["card", "area", "list", "mate"],
];

/// Number of squares over [`small_dictionary`] when duplicate words are allowed.
pub(crate) const SMALL_BOARD_COUNT: usize = 15;
