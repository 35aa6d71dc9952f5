//! Monolithic per-notice generators that predate the blueprint registry.
//!
//! Kept as an alternate implementation of [`LetterGenerator`] for CP14,
//! CP2000, and LT11. Each generator has a single fixed wording per section
//! and shares the seed, assembly, and error contract with
//! [`LetterComposer`](crate::compose::LetterComposer), which should be used
//! instead.

#![allow(deprecated)]

use tracing::debug;

use crate::blueprint::{normalize_notice_id, RegistryError};
use crate::compose::{assemble, ComposeError, ComposedLetter, LetterGenerator, Letterhead};
use crate::family::levy::{LevyResponse, ResponsePosture};
use crate::family::position::TaxpayerPosition;
use crate::family::slot;
use crate::format;
use crate::headings;
use crate::seed::{derive_seed, pick, Seed};
use crate::types::{BlueprintResult, LetterContext, Section};

/// Notices with a legacy generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyNotice {
    /// CP14 balance-due notice.
    Cp14,
    /// CP2000 underreporter proposal.
    Cp2000,
    /// LT11 final notice of intent to levy.
    Lt11,
}

impl LegacyNotice {
    /// Every notice with a legacy generator.
    pub const ALL: [LegacyNotice; 3] = [Self::Cp14, Self::Cp2000, Self::Lt11];

    /// Canonical notice identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cp14 => "CP14",
            Self::Cp2000 => "CP2000",
            Self::Lt11 => "LT11",
        }
    }

    /// Resolve a notice identifier, normalized the same way as the registry.
    pub fn parse(id: &str) -> Option<Self> {
        let key = normalize_notice_id(id);
        Self::ALL.into_iter().find(|notice| notice.as_str() == key)
    }

    fn certified_mail(self) -> bool {
        matches!(self, Self::Lt11)
    }
}

/// Deprecated single-notice letter generator.
#[deprecated(note = "use LetterComposer; legacy generators have fixed wording")]
#[derive(Debug, Clone)]
pub struct LegacyGenerator {
    notice: LegacyNotice,
    letterhead: Letterhead,
}

impl LegacyGenerator {
    /// Create the legacy generator for `notice`.
    pub fn new(notice: LegacyNotice, letterhead: Letterhead) -> Self {
        Self { notice, letterhead }
    }

    /// Find the legacy generator for a notice identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no legacy generator exists
    /// for the identifier.
    pub fn for_notice(id: &str, letterhead: Letterhead) -> Result<Self, RegistryError> {
        LegacyNotice::parse(id)
            .map(|notice| Self::new(notice, letterhead))
            .ok_or_else(|| RegistryError::NotFound(id.trim().to_owned()))
    }

    /// The notice this generator handles.
    pub fn notice(&self) -> LegacyNotice {
        self.notice
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Result<Vec<Section>, ComposeError> {
        let period = ctx
            .tax_year()
            .map_or_else(|| "the period shown".to_owned(), |y| format!("tax year {y}"));
        let amount = ctx
            .amount()
            .map_or_else(|| "the amount shown".to_owned(), format::money);
        let opening = pick(
            seed,
            slot::PURPOSE,
            &[
                "This letter is in response to the notice referenced above.",
                "Please accept this letter as a response to the notice referenced above.",
            ],
        );

        let mut sections = vec![Section::new(
            headings::BACKGROUND,
            format!("{opening} The notice concerns {period} and shows {amount}."),
        )];
        sections.push(Section::new(headings::POSITION, legacy_position(ctx)));

        let actions = match self.notice {
            LegacyNotice::Cp14 => {
                sections.push(Section::new(
                    headings::ACCOUNT_STATUS,
                    ctx.prior_actions()
                        .map(format::sentence)
                        .unwrap_or_default(),
                ));
                vec![
                    "Review the account and correct any error in the balance.".to_owned(),
                    "Suspend collection while this response is reviewed.".to_owned(),
                    "Send a written reply.".to_owned(),
                ]
            }
            LegacyNotice::Cp2000 => {
                sections.push(Section::new(
                    headings::DISCREPANCY,
                    ctx.discrepancy()
                        .map(|kind| format!("The discrepancy is described as: {kind}."))
                        .unwrap_or_default(),
                ));
                sections.push(Section::new(
                    headings::DOCUMENTATION,
                    format::bulleted(&ctx.enclosures()),
                ));
                vec![
                    "Review the enclosed information.".to_owned(),
                    "Withdraw any proposed change that the information does not support.".to_owned(),
                    "Send a written reply.".to_owned(),
                ]
            }
            LegacyNotice::Lt11 => {
                let response = LevyResponse::from_context(ctx)?;
                let body = match response.posture() {
                    ResponsePosture::Hearing => {
                        "The taxpayer requests a collection due process hearing. Form 12153 is enclosed."
                    }
                    ResponsePosture::EquivalentHearing => {
                        "The taxpayer requests an equivalent hearing. Form 12153 is enclosed."
                    }
                    ResponsePosture::CollectionAlternative => {
                        "The taxpayer proposes a collection alternative in place of levy."
                    }
                    ResponsePosture::DisputeLiability => {
                        "The taxpayer disputes the liability the notice proposes to collect."
                    }
                };
                sections.push(Section::new(response.heading(), body));
                vec![
                    "Do not levy while this response is considered.".to_owned(),
                    "Forward this request to the Independent Office of Appeals.".to_owned(),
                    "Send a written reply.".to_owned(),
                ]
            }
        };

        sections.push(Section::new(
            headings::REQUESTED_ACTIONS,
            format!("Please:\n\n{}", format::numbered(&actions)),
        ));
        Ok(sections)
    }
}

fn legacy_position(ctx: &LetterContext) -> String {
    match TaxpayerPosition::from_context(ctx) {
        TaxpayerPosition::Code(position) => position.canonical().to_owned(),
        TaxpayerPosition::FreeText(text) => format::sentence(text),
        TaxpayerPosition::Unstated => String::new(),
    }
}

impl LetterGenerator for LegacyGenerator {
    fn generate(&self, ctx: &LetterContext, today: &str) -> Result<ComposedLetter, ComposeError> {
        if LegacyNotice::parse(&ctx.notice_id) != Some(self.notice) {
            return Err(RegistryError::NotFound(ctx.notice_id.trim().to_owned()).into());
        }

        let seed = derive_seed(&[
            Some(ctx.notice_id.trim()),
            Some(ctx.name()),
            ctx.external_id(),
            ctx.notice_date(),
        ]);
        let sections = self.sections(&seed, ctx)?;

        let mut re_line = format!("Re: Notice {}", self.notice.as_str());
        if let Some(year) = ctx.tax_year() {
            re_line.push_str(&format!(", Tax Year {year}"));
        }
        let mut taxpayer_block = ctx.name().to_owned();
        if let Some(id) = ctx.external_id() {
            taxpayer_block.push_str(&format!("\nTaxpayer ID: {id}"));
        }

        let result = BlueprintResult {
            re_line,
            taxpayer_block,
            sections,
            closing_block: format!("Sincerely,\n\n\n{}", ctx.name()),
            certified_mail: self.notice.certified_mail(),
        };
        debug!(notice = self.notice.as_str(), seed = %seed, "legacy letter generated");

        Ok(ComposedLetter {
            text: assemble(&result, today, result.certified_mail, &self.letterhead),
            notice: self.notice.as_str().to_owned(),
            certified_mail: result.certified_mail,
        })
    }
}
