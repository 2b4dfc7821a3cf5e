//! The built-in unit lexicon and the monetary table.
//!
//! All tables are plain `static` data in authored order. Order matters: the
//! matcher walks categories as declared in [`crate::Lexicon::builtin`]
//! (length, weight, volume, time), units top-to-bottom within each file, and
//! surface forms canonical-name-first. A span of text is rewritten by the
//! first pattern that reaches it, so entries that share a prefix ("короткий
//! локоть" and "локоть") are authored longer-form-first.
//!
//! Each file groups its units into Russian, English and Spanish partitions.
//! The same spelling may appear in two partitions ("log", "pim"); that is a
//! deliberate consequence of partitioning, and the one-rewrite-per-span rule
//! makes the first definition win.

pub(crate) mod length;
pub(crate) mod monetary;
pub(crate) mod time;
pub(crate) mod volume;
pub(crate) mod weight;
