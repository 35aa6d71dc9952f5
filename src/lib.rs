//! Rejoinder: deterministic composition of written responses to
//! tax-authority notices.
//!
//! A [`LetterContext`] names the notice and carries whatever the caller
//! knows about it. The blueprint registry maps the notice to its family
//! content library; a seed derived from stable context fields picks among
//! pre-authored phrasings, so the same input always yields the same letter.
//!
//! See `DESIGN.md` for the architecture.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod types;

pub mod format;
pub mod headings;
pub mod seed;

pub mod blueprint;
pub mod family;

pub mod compose;
pub mod legacy;

pub use blueprint::{get_blueprint, registered_notices, Blueprint, RegistryError};
pub use compose::{
    assemble, ComposeError, ComposedLetter, LetterComposer, LetterGenerator, Letterhead,
};
pub use family::{FamilyLibrary, PreconditionError, Violation};
pub use seed::{derive_seed, Seed};
pub use types::{BlueprintResult, LetterContext, NoticeFamily, Section};
