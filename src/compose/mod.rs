//! Letter assembly: header, normalized sections, and closing.
//!
//! [`assemble`] turns a [`BlueprintResult`] into the final plain-text
//! letter. [`LetterComposer`] runs the full pipeline for a context:
//! registry lookup, blueprint build, then assembly.

pub mod normalize;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::blueprint::{get_blueprint, RegistryError};
use crate::family::PreconditionError;
use crate::types::{BlueprintResult, LetterContext};

/// Marker line printed under the date for certified-mail notices.
pub const CERTIFIED_MAIL_MARKER: &str = "VIA CERTIFIED MAIL";

/// Errors that abort composition. No partial letter is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The notice identifier is not registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The context failed the family's preconditions.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

/// Recipient and greeting printed in every letter header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    /// Recipient organization lines, printed in order.
    pub recipient_lines: Vec<String>,
    /// Salutation line.
    pub greeting: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            recipient_lines: vec!["Internal Revenue Service".to_owned()],
            greeting: "To Whom It May Concern:".to_owned(),
        }
    }
}

/// A finished letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedLetter {
    /// Full plain-text letter.
    pub text: String,
    /// Canonical notice identifier the letter responds to.
    pub notice: String,
    /// Whether the letter must be sent by certified mail.
    pub certified_mail: bool,
}

/// Shared contract for anything that turns a context into a letter.
pub trait LetterGenerator: Send + Sync {
    /// Compose the letter for `ctx`, dated `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] when the notice is unknown or the context
    /// fails validation.
    fn generate(&self, ctx: &LetterContext, today: &str) -> Result<ComposedLetter, ComposeError>;
}

/// Blueprint-driven letter composer.
#[derive(Debug, Clone, Default)]
pub struct LetterComposer {
    letterhead: Letterhead,
}

impl LetterComposer {
    /// Create a composer printing the given letterhead.
    pub fn new(letterhead: Letterhead) -> Self {
        Self { letterhead }
    }

    /// Letterhead this composer prints.
    pub fn letterhead(&self) -> &Letterhead {
        &self.letterhead
    }

    /// Look up the notice, build its content, and assemble the letter.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Registry`] for an unregistered notice and
    /// [`ComposeError::Precondition`] when validation fails.
    pub fn compose(
        &self,
        ctx: &LetterContext,
        today: &str,
    ) -> Result<ComposedLetter, ComposeError> {
        let blueprint = get_blueprint(&ctx.notice_id).inspect_err(|e| {
            warn!(notice = %ctx.notice_id, error = %e, "notice lookup failed");
        })?;
        let result = blueprint.build(ctx).inspect_err(|e| {
            warn!(
                notice = blueprint.notice,
                violations = e.violations.len(),
                error = %e,
                "context rejected"
            );
        })?;

        let text = assemble(&result, today, result.certified_mail, &self.letterhead);
        info!(
            notice = blueprint.notice,
            family = %blueprint.family,
            sections = result.sections.len(),
            certified_mail = result.certified_mail,
            "letter composed"
        );

        Ok(ComposedLetter {
            text,
            notice: blueprint.notice.to_owned(),
            certified_mail: result.certified_mail,
        })
    }
}

impl LetterGenerator for LetterComposer {
    fn generate(&self, ctx: &LetterContext, today: &str) -> Result<ComposedLetter, ComposeError> {
        self.compose(ctx, today)
    }
}

/// Render structured content as the final letter text.
///
/// The header carries the date, the certified-mail marker when flagged,
/// the recipient lines, subject line, taxpayer block, and greeting. Each
/// section follows as an upper-cased heading, a blank line, the normalized
/// body, and a blank line. The closing block ends the letter.
pub fn assemble(
    result: &BlueprintResult,
    today: &str,
    certified_mail: bool,
    letterhead: &Letterhead,
) -> String {
    let mut lines: Vec<String> = vec![today.trim().to_owned()];
    if certified_mail {
        lines.push(CERTIFIED_MAIL_MARKER.to_owned());
    }
    lines.push(String::new());
    lines.extend(letterhead.recipient_lines.iter().cloned());
    lines.push(String::new());
    lines.push(result.re_line.clone());
    lines.push(String::new());
    lines.push(result.taxpayer_block.clone());
    lines.push(String::new());
    lines.push(letterhead.greeting.clone());
    lines.push(String::new());

    let name = normalize::taxpayer_name_from_block(&result.taxpayer_block);
    for section in &result.sections {
        let section = normalize::normalize_section(section, &name);
        if let Some(heading) = &section.heading {
            lines.push(heading.to_uppercase());
            lines.push(String::new());
        }
        lines.push(section.body);
        lines.push(String::new());
    }

    lines.push(result.closing_block.clone());
    lines.join("\n")
}
