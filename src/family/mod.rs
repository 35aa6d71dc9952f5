//! Family content libraries.
//!
//! Each notice family owns the canonical phrasing for its background,
//! position, status, and requested-action sections. Blueprints reach a family
//! only through [`FamilyLibrary`], so a new family plugs in here without
//! touching the registry or assembly.

pub mod collection;
pub mod general;
pub mod levy;
pub mod lien;
pub mod position;
pub mod underreporter;

use crate::format;
use crate::headings;
use crate::seed::{pick, Seed};
use crate::types::{LetterContext, NoticeFamily, Section};

use position::{Position, TaxpayerPosition};

/// Content library for one notice family.
pub trait FamilyLibrary: Send + Sync {
    /// The family this library serves.
    fn family(&self) -> NoticeFamily;

    /// Ordered family sections: background, position, family extras,
    /// account status, and (when supplied) the verbatim explanation.
    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section>;

    /// Numbered ask-list closing the letter body.
    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section;

    /// Citations for the optional "Applicable Authority" section.
    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str>;

    /// Check family-specific composition preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] listing every violated rule.
    fn validate(&self, _ctx: &LetterContext) -> Result<(), PreconditionError> {
        Ok(())
    }
}

/// Resolve the content library for a family.
pub fn library_for(family: NoticeFamily) -> &'static dyn FamilyLibrary {
    match family {
        NoticeFamily::Collection => &collection::CollectionLibrary,
        NoticeFamily::Underreporter => &underreporter::UnderreporterLibrary,
        NoticeFamily::LevyIntent => &levy::LevyIntentLibrary,
        NoticeFamily::Lien => &lien::LienLibrary,
        NoticeFamily::General => &general::GeneralLibrary,
    }
}

/// A letter cannot be composed because its inputs contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("letter preconditions not met: {}", describe(.violations))]
pub struct PreconditionError {
    /// Every violated rule, in evaluation order.
    pub violations: Vec<Violation>,
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One violated composition rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The response posture is not one of the known postures.
    #[error("unknown response posture '{0}'")]
    UnknownPosture(String),

    /// The collection alternative sub-type is not recognized.
    #[error("unknown alternative_type '{0}' (expected installment, offer, or hardship)")]
    UnknownAlternativeType(String),

    /// The dispute basis is not recognized.
    #[error(
        "unknown dispute_basis '{0}' (expected procedural_defect, incorrect_balance, or already_resolved)"
    )]
    UnknownDisputeBasis(String),

    /// The posture requires a collection alternative sub-type.
    #[error("response posture '{posture}' requires alternative_type")]
    MissingAlternativeType {
        /// The posture that was chosen.
        posture: String,
    },

    /// The posture requires a dispute basis.
    #[error("response posture '{posture}' requires dispute_basis")]
    MissingDisputeBasis {
        /// The posture that was chosen.
        posture: String,
    },

    /// A collection alternative sub-type was supplied for a posture that does not use it.
    #[error("alternative_type is not used by response posture '{posture}'")]
    UnexpectedAlternativeType {
        /// The posture that was chosen.
        posture: String,
    },

    /// A dispute basis was supplied for a posture that does not use it.
    #[error("dispute_basis is not used by response posture '{posture}'")]
    UnexpectedDisputeBasis {
        /// The posture that was chosen.
        posture: String,
    },
}

/// Variant-selection offsets. Each call site gets its own offset so
/// neighbouring sections do not land on the same index.
pub(crate) mod slot {
    pub const PURPOSE: u32 = 0;
    pub const BACKGROUND: u32 = 1;
    pub const POSITION: u32 = 2;
    pub const STATUS: u32 = 3;
    pub const FAMILY_EXTRA: u32 = 4;
    pub const ACTIONS_INTRO: u32 = 5;
    pub const ASK_RECEIPT: u32 = 6;
    pub const ASK_REVIEW: u32 = 7;
    pub const ASK_VERIFY: u32 = 8;
    pub const ASK_SUSPEND: u32 = 9;
    pub const ASK_RESPOND: u32 = 10;
    pub const NOTICE_STAGE: u32 = 11;
    pub const TIMING: u32 = 12;
    pub const DOCUMENTATION: u32 = 13;
    pub const POSTURE: u32 = 14;
    pub const CLOSING: u32 = 15;
    pub const AUTHORITY: u32 = 16;
}

// ── Shared phrasing ─────────────────────────────────────────────

/// "Notice CP14 dated January 5, 2024" or "Notice CP14".
pub(crate) fn notice_reference(ctx: &LetterContext) -> String {
    let notice = ctx.notice_id.trim();
    match ctx.notice_date() {
        Some(date) => format!("Notice {notice} dated {}", format::display_date(date)),
        None => format!("Notice {notice}"),
    }
}

/// "tax year 2022" or "the tax period shown on the notice".
pub(crate) fn period_phrase(ctx: &LetterContext) -> String {
    match ctx.tax_year() {
        Some(year) => format!("tax year {year}"),
        None => "the tax period shown on the notice".to_owned(),
    }
}

/// "a balance of $1,234.56" or "the balance shown on the notice".
///
/// `noun` carries its own article for the amount case; without an amount
/// the article is replaced by "the".
pub(crate) fn amount_phrase(ctx: &LetterContext, noun: &str) -> String {
    match ctx.amount() {
        Some(amount) => format!("{noun} of {}", format::money(amount)),
        None => format!("the {} shown on the notice", without_article(noun)),
    }
}

fn without_article(noun: &str) -> &str {
    match noun.split_once(' ') {
        Some(("a" | "an" | "the", rest)) => rest,
        _ => noun,
    }
}

const FREE_TEXT_FRAMES: [&str; 3] = [
    "The taxpayer's position is as follows:",
    "The taxpayer states the following regarding this notice:",
    "In response to this notice, the taxpayer's position is:",
];

const UNSTATED_POSITION: [&str; 3] = [
    "The taxpayer is reviewing the matters raised in the notice and reserves all rights to contest the proposed action pending the review requested in this letter.",
    "The taxpayer has not yet reached a final position on the matters raised in the notice and asks for the information described below in order to do so.",
    "Pending the account review requested below, the taxpayer does not concede the balance or the proposed action described in the notice.",
];

/// Build the "Taxpayer Position" section.
///
/// Recognized codes map to the family's phrasing (or the canonical sentence
/// when the family has none); free text is framed and echoed.
pub(crate) fn position_section(
    seed: &Seed,
    ctx: &LetterContext,
    family_phrase: fn(Position) -> Option<&'static str>,
) -> Section {
    let body = match TaxpayerPosition::from_context(ctx) {
        TaxpayerPosition::Code(position) => family_phrase(position)
            .unwrap_or_else(|| position.canonical())
            .to_owned(),
        TaxpayerPosition::FreeText(text) => format!(
            "{} {}",
            pick(seed, slot::POSITION, &FREE_TEXT_FRAMES),
            format::sentence(text)
        ),
        TaxpayerPosition::Unstated => pick(seed, slot::POSITION, &UNSTATED_POSITION).to_owned(),
    };
    Section::new(headings::POSITION, body)
}

const PRIOR_ACTION_FRAMES: [&str; 3] = [
    "The taxpayer has already taken the following steps regarding this matter:",
    "For your records, the following actions have been taken to date:",
    "Before receiving this notice, the taxpayer took the following actions:",
];

/// Build the status section: echoes prior actions or asks for a review.
pub(crate) fn status_section(
    seed: &Seed,
    ctx: &LetterContext,
    heading: &str,
    review_requests: &[&str],
) -> Section {
    let body = match ctx.prior_actions() {
        Some(actions) => format!(
            "{} {}",
            pick(seed, slot::STATUS, &PRIOR_ACTION_FRAMES),
            format::sentence(actions)
        ),
        None => pick(seed, slot::STATUS, review_requests).to_owned(),
    };
    Section::new(heading, body)
}

/// The verbatim explanation section, when an explanation was supplied.
pub(crate) fn explanation_section(ctx: &LetterContext) -> Option<Section> {
    ctx.explanation()
        .map(|text| Section::new(headings::EXPLANATION, text))
}

const ACTION_INTROS: [&str; 3] = [
    "The taxpayer respectfully requests that you:",
    "To resolve this matter, please:",
    "Accordingly, the taxpayer asks that you:",
];

const ASK_RECEIPT: [&str; 2] = [
    "Confirm receipt of this letter and associate it with",
    "Acknowledge receipt of this response and place it in the file for",
];

const ASK_VERIFY: [&str; 2] = [
    "Verify that all payments, credits, and adjustments have been applied to the correct tax period.",
    "Confirm that every payment and credit on the account has been applied to the period it was intended for.",
];

const ASK_SUSPEND: [&str; 2] = [
    "Suspend collection activity on this account while this response is under consideration.",
    "Place a hold on further collection action until the matters raised in this letter are resolved.",
];

const ASK_RESPOND: [&str; 2] = [
    "Respond in writing with the outcome of your review.",
    "Provide a written response explaining the results of your review and any adjustments made.",
];

/// The five standard asks every family opens its list with.
pub(crate) fn standard_asks(seed: &Seed, ctx: &LetterContext, review_ask: String) -> Vec<String> {
    vec![
        format!(
            "{} {}.",
            pick(seed, slot::ASK_RECEIPT, &ASK_RECEIPT),
            notice_reference(ctx)
        ),
        review_ask,
        pick(seed, slot::ASK_VERIFY, &ASK_VERIFY).to_owned(),
        pick(seed, slot::ASK_SUSPEND, &ASK_SUSPEND).to_owned(),
        pick(seed, slot::ASK_RESPOND, &ASK_RESPOND).to_owned(),
    ]
}

/// Asks appended when context signals warrant them.
pub(crate) fn conditional_asks(ctx: &LetterContext) -> Vec<String> {
    let mut asks = Vec::new();
    if let Some(deadline) = ctx.deadline() {
        asks.push(format!(
            "Extend the response deadline of {} by 30 days if additional time is needed to resolve this matter.",
            format::display_date(deadline)
        ));
    }
    match TaxpayerPosition::from_context(ctx).code() {
        Some(Position::NeedsTimeToPay) => asks.push(
            "Provide instructions and any required forms for establishing an installment agreement."
                .to_owned(),
        ),
        Some(Position::Hardship) => asks.push(
            "Review the account for currently-not-collectible status based on economic hardship."
                .to_owned(),
        ),
        _ => {}
    }
    asks
}

/// Assemble the "Requested Actions" section from its asks.
pub(crate) fn actions_section(seed: &Seed, asks: &[String]) -> Section {
    Section::new(
        headings::REQUESTED_ACTIONS,
        format!(
            "{}\n\n{}",
            pick(seed, slot::ACTIONS_INTRO, &ACTION_INTROS),
            format::numbered(asks)
        ),
    )
}
