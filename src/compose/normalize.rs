//! Section normalization: divider stripping, canonical default bodies,
//! and taxpayer-name substitution.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::types::Section;

/// Generic body used for headings with no canonical default.
pub const FALLBACK_BODY: &str =
    "The taxpayer asks that this matter be reviewed and that any questions be directed to the contact information provided in this letter.";

// Lines made only of repeated `-`, `=`, `*`, or `_` characters.
static DIVIDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|={3,}|\*{3,}|_{3,})\s*$").ok());

static TAXPAYER_PHRASE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bthe taxpayer\b").ok());

/// Normalize one section for assembly.
///
/// The heading is trimmed, divider lines are removed from the body, a blank
/// body is replaced with the canonical default for the heading, and the
/// first "the taxpayer" in the body becomes `taxpayer_name`.
pub fn normalize_section(section: &Section, taxpayer_name: &str) -> Section {
    let heading = section
        .heading
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_owned);

    let stripped = strip_dividers(&section.body);
    let body = if stripped.trim().is_empty() {
        heading
            .as_deref()
            .map_or(FALLBACK_BODY, default_body)
            .to_owned()
    } else {
        stripped
    };

    Section {
        heading,
        body: substitute_name(&body, taxpayer_name),
    }
}

/// Remove divider lines and trim surrounding blank lines.
pub fn strip_dividers(body: &str) -> String {
    let Some(divider) = DIVIDER.as_ref() else {
        return body.trim().to_owned();
    };
    body.lines()
        .filter(|line| !divider.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// Replace the first case-insensitive "the taxpayer" with `name`.
///
/// Later occurrences are left as written. A blank name leaves the text
/// unchanged.
pub fn substitute_name(text: &str, name: &str) -> String {
    let name = name.trim();
    match TAXPAYER_PHRASE.as_ref() {
        Some(phrase) if !name.is_empty() => phrase.replacen(text, 1, NoExpand(name)).into_owned(),
        _ => text.to_owned(),
    }
}

/// Taxpayer name from the first line of a taxpayer block.
///
/// A blank first line yields an empty name, so no substitution happens;
/// later lines hold the address and identifiers and are never used.
pub fn taxpayer_name_from_block(block: &str) -> String {
    block
        .lines()
        .next()
        .map(str::trim)
        .map(|line| line.strip_prefix("Taxpayer:").unwrap_or(line).trim())
        .unwrap_or_default()
        .to_owned()
}

/// Whether a heading has its own canonical default body.
pub fn has_canonical_default(heading: &str) -> bool {
    canonical_default(heading).is_some()
}

/// Canonical default body for a heading, or the generic fallback.
pub fn default_body(heading: &str) -> &'static str {
    canonical_default(heading).unwrap_or(FALLBACK_BODY)
}

fn canonical_default(heading: &str) -> Option<&'static str> {
    let body = match heading.trim().to_lowercase().as_str() {
        "purpose of this letter" => {
            "This letter is the taxpayer's written response to the notice identified below."
        }
        "taxpayer identifiers" => {
            "The taxpayer's identifying information appears in the heading of this letter."
        }
        "applicable authority" => {
            "The taxpayer relies on the Internal Revenue Code and the taxpayer bill of rights in making this response."
        }
        "background" => {
            "The taxpayer received the notice identified above and is responding to it in writing."
        }
        "taxpayer position" => {
            "The taxpayer is reviewing the notice and requests the information needed to confirm the amounts shown."
        }
        "account status" => {
            "The taxpayer asks that the account be reviewed and that an updated account transcript be provided."
        }
        "supporting information" => {
            "The taxpayer will provide any further information needed to resolve this matter on request."
        }
        "explanation" => "The taxpayer's explanation is set out in the sections above.",
        "penalty relief" => {
            "The taxpayer requests relief from any penalties assessed, to the extent the record supports it."
        }
        "discrepancy analysis" => {
            "The taxpayer is reconciling the return with the information returns described in the notice."
        }
        "lien relief requested" => {
            "The taxpayer requests the lien relief available under the Internal Revenue Code."
        }
        "requested actions" => {
            "The taxpayer requests written confirmation that this response was received and is being considered."
        }
        "notice stage and purpose" => {
            "This response addresses the notice identified above at its current stage."
        }
        "response timing" => {
            "The taxpayer is responding within the time allowed by the notice."
        }
        "documentation provided" => {
            "No documents are enclosed with this letter. The taxpayer will provide supporting documentation on request."
        }
        "examination scope" => {
            "The taxpayer asks that the scope of the examination be confirmed in writing."
        }
        "hearing request" => {
            "The taxpayer requests a collection due process hearing with the Independent Office of Appeals."
        }
        "equivalent hearing request" => {
            "The taxpayer requests an equivalent hearing with the Independent Office of Appeals."
        }
        "collection alternative proposal" => {
            "The taxpayer proposes a collection alternative in place of enforced collection."
        }
        "basis for dispute" => {
            "The taxpayer disputes the liability described in the notice."
        }
        "enclosure checklist" => {
            "The taxpayer will provide any forms required to support this request."
        }
        "tax court rights" => {
            "The taxpayer reserves the right to petition the United States Tax Court."
        }
        "refund status" => {
            "The taxpayer asks that the refund for the period be recomputed and issued."
        }
        _ => return None,
    };
    Some(body)
}
