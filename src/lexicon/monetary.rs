//! Monetary equivalents for coin units, keyed by weight-lexicon canonical
//! names. Figures follow silver/gold content and first-century wage rates.
//!
//! Keys are unique here even though the weight lexicon spells "mina" in two
//! partitions; a spelling shared across partitions gets a single row, so a
//! lookup never depends on which partition matched.

use crate::MonetaryEquivalent;

const fn coin(
    name: &'static str,
    work_days: f64,
    modern_value: f64,
    currency: &'static str,
    metal: &'static str,
) -> MonetaryEquivalent {
    MonetaryEquivalent { name, work_days, modern_value, currency, metal }
}

pub(crate) static COINS: &[MonetaryEquivalent] = &[
    // Russian
    coin("шекель", 0.5, 25.0, "долларов", "серебро"),
    coin("сикль", 0.5, 25.0, "долларов", "серебро"),
    coin("мина", 122.0, 6100.0, "долларов", "серебро"),
    coin("талант", 7300.0, 365000.0, "долларов", "серебро"),
    coin("динарий", 1.0, 50.0, "долларов", "серебро"),
    coin("драхма", 1.0, 45.0, "долларов", "серебро"),
    coin("дидрахма", 2.0, 90.0, "долларов", "серебро"),
    coin("тетрадрахма", 4.0, 180.0, "долларов", "серебро"),
    coin("статир", 4.0, 180.0, "долларов", "серебро"),
    coin("дарик", 20.0, 1000.0, "долларов", "золото"),
    coin("мина греческая", 100.0, 4500.0, "долларов", "серебро"),
    coin("талант греческий", 6000.0, 270000.0, "долларов", "серебро"),
    // English
    coin("shekel", 0.5, 25.0, "dollars", "silver"),
    coin("mina", 122.0, 6100.0, "dollars", "silver"),
    coin("talent", 7300.0, 365000.0, "dollars", "silver"),
    coin("denarius", 1.0, 50.0, "dollars", "silver"),
    coin("drachma", 1.0, 45.0, "dollars", "silver"),
    coin("didrachma", 2.0, 90.0, "dollars", "silver"),
    coin("tetradrachma", 4.0, 180.0, "dollars", "silver"),
    coin("stater", 4.0, 180.0, "dollars", "silver"),
    coin("daric", 20.0, 1000.0, "dollars", "gold"),
    coin("greek mina", 100.0, 4500.0, "dollars", "silver"),
    coin("greek talent", 6000.0, 270000.0, "dollars", "silver"),
    // Spanish
    coin("siclo", 0.5, 25.0, "dólares", "plata"),
    coin("talento", 7300.0, 365000.0, "dólares", "plata"),
    coin("denario", 1.0, 50.0, "dólares", "plata"),
    coin("dracma", 1.0, 45.0, "dólares", "plata"),
    coin("didracma", 2.0, 90.0, "dólares", "plata"),
    coin("tetradracma", 4.0, 180.0, "dólares", "plata"),
    coin("estáter", 4.0, 180.0, "dólares", "plata"),
    coin("dárico", 20.0, 1000.0, "dólares", "oro"),
    coin("mina griega", 100.0, 4500.0, "dólares", "plata"),
    coin("talento griego", 6000.0, 270000.0, "dólares", "plata"),
];

/// Look up the monetary row for a unit's canonical name.
pub(crate) fn lookup(name: &str) -> Option<&'static MonetaryEquivalent> {
    COINS.iter().find(|coin| coin.name == name)
}
