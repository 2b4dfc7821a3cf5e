//! Matching, conversion and formatting pipeline.
//!
//! Converting a body of text is a pipeline over accumulating state:
//!
//! ```text
//! lexicon (ordered) ──┐
//!                     │  one substitution pass per
//! input text ─────────┼─ (unit, surface form, separator)   (matcher.rs)
//!                     │        │ each match:
//!                     │        v
//!                     │   value × scale @ precision        (convert.rs)
//!                     │        │
//!                     │        v
//!                     │   output-format policy             (format.rs)
//!                     │        │
//!                     └────────┴──> rewritten text
//! ```
//!
//! The passes are strictly sequential and ordered; each pass observes the
//! previous pass's output, which is what makes a rewritten span ineligible
//! for any later pattern. See `matcher.rs` for the ordering invariant.
//!
//! ## Responsibilities by module
//!
//! - `matcher.rs`: builds the per-surface-form patterns and drives the
//!   substitution passes.
//! - `convert.rs`: numeric scaling and fixed-point rendering.
//! - `format.rs`: output-format policies, bold wrapping and the monetary
//!   augmentation.

mod convert;
mod format;
mod matcher;

#[cfg(test)]
mod tests;

pub(crate) use convert::format_fixed;
pub(crate) use format::{render_primary, render_search};
pub(crate) use matcher::rewrite;
