//! Blueprint registry: notice identifier → family → letter structure.
//!
//! A [`Blueprint`] is a static description of one notice type plus the
//! function that emits its notice-specific sections. [`Blueprint::build`]
//! runs the shared pipeline: validate, derive the seed, then emit global,
//! family, notice-specific, and requested-action sections in that order.

mod collection;
mod general;
mod global;
mod levy;
mod lien;
mod specific;
mod underreporter;

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::family::{library_for, FamilyLibrary, PreconditionError};
use crate::seed::{derive_seed, Seed};
use crate::types::{BlueprintResult, LetterContext, NoticeFamily, Section};

/// Errors from the blueprint registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No blueprint is registered for the notice identifier.
    #[error("no blueprint registered for notice '{0}'")]
    NotFound(String),
}

/// Emits the notice-specific sections of a blueprint.
pub type SpecificSections = fn(&Blueprint, &Seed, &LetterContext) -> Vec<Section>;

/// Static description of one supported notice type.
#[derive(Debug)]
pub struct Blueprint {
    /// Canonical notice identifier (e.g. "CP14").
    pub notice: &'static str,
    /// Other identifiers that resolve to this blueprint, in normalized form.
    pub aliases: &'static [&'static str],
    /// Descriptive title of the notice.
    pub title: &'static str,
    /// Family whose content library supplies the shared sections.
    pub family: NoticeFamily,
    /// Where the notice sits in its sequence, as a sentence.
    pub stage: &'static str,
    /// Whether responses to this notice go by certified mail.
    pub certified_mail: bool,
    /// Whether responses to this notice normally carry enclosures.
    pub expects_enclosures: bool,
    pub(crate) specific: SpecificSections,
}

impl Blueprint {
    /// The family content library for this notice.
    pub fn library(&self) -> &'static dyn FamilyLibrary {
        library_for(self.family)
    }

    /// Compose the structured letter content for a context.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] when the family's preconditions fail.
    /// No partial content is produced in that case.
    pub fn build(&self, ctx: &LetterContext) -> Result<BlueprintResult, PreconditionError> {
        let library = self.library();
        library.validate(ctx)?;

        if ctx.family != self.family {
            warn!(
                notice = self.notice,
                requested = %ctx.family,
                registered = %self.family,
                "context family differs from the notice's registered family; using registered family"
            );
        }

        let seed = derive_seed(&[
            Some(ctx.notice_id.trim()),
            Some(ctx.name()),
            ctx.external_id(),
            ctx.notice_date(),
        ]);

        // Prose names the notice by its canonical id, whatever alias was given.
        let canonical = self.with_canonical_id(ctx);
        let ctx = &*canonical;

        let mut sections = global::sections(self, &seed, ctx);
        sections.extend(library.sections(&seed, ctx));
        sections.extend((self.specific)(self, &seed, ctx));
        sections.push(library.requested_actions(&seed, ctx));

        debug!(
            notice = self.notice,
            family = %self.family,
            seed = %seed,
            sections = sections.len(),
            "blueprint built"
        );

        Ok(BlueprintResult {
            re_line: global::re_line(self, ctx),
            taxpayer_block: global::taxpayer_block(ctx),
            sections,
            closing_block: global::closing_block(&seed, ctx),
            certified_mail: self.certified_mail,
        })
    }

    fn with_canonical_id<'a>(&self, ctx: &'a LetterContext) -> Cow<'a, LetterContext> {
        if ctx.notice_id.trim() == self.notice {
            Cow::Borrowed(ctx)
        } else {
            let mut owned = ctx.clone();
            owned.notice_id = self.notice.to_owned();
            Cow::Owned(owned)
        }
    }
}

/// Every registered blueprint, grouped by family in a fixed order.
pub fn registered_notices() -> impl Iterator<Item = &'static Blueprint> {
    collection::BLUEPRINTS
        .iter()
        .chain(levy::BLUEPRINTS.iter())
        .chain(lien::BLUEPRINTS.iter())
        .chain(underreporter::BLUEPRINTS.iter())
        .chain(general::BLUEPRINTS.iter())
}

/// Look up the blueprint for a notice identifier.
///
/// Identifiers are matched case-insensitively, ignoring spaces, hyphens,
/// and underscores; a leading "Letter" is read as "L".
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] naming the identifier when no
/// blueprint is registered for it.
pub fn get_blueprint(id: &str) -> Result<&'static Blueprint, RegistryError> {
    let key = normalize_notice_id(id);
    registered_notices()
        .find(|bp| bp.notice == key || bp.aliases.contains(&key.as_str()))
        .ok_or_else(|| RegistryError::NotFound(id.trim().to_owned()))
}

/// Canonical form of a notice identifier used for registry lookups.
pub fn normalize_notice_id(id: &str) -> String {
    let compact: String = id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match compact.strip_prefix("LETTER") {
        Some(rest) if !rest.is_empty() => format!("L{rest}"),
        _ => compact,
    }
}
