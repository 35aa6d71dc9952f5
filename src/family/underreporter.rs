//! Underreporter / examination family.

use crate::format;
use crate::headings;
use crate::seed::{pick, pick_with, Phrase, Seed};
use crate::types::{normalize_code, LetterContext, NoticeFamily, Section};

use super::position::{Position, TaxpayerPosition};
use super::{
    actions_section, amount_phrase, conditional_asks, explanation_section, notice_reference,
    period_phrase, position_section, slot, standard_asks, status_section, FamilyLibrary,
};

/// Content library for underreporter and examination notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderreporterLibrary;

/// Kind of mismatch between the return and third-party information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discrepancy {
    /// The same income was reported twice by third parties.
    DuplicateReporting,
    /// The information return shows the wrong amount.
    IncorrectAmount,
    /// Cost basis was omitted from a reported sale.
    BasisOmitted,
    /// The income belongs to someone else.
    NotTaxpayerIncome,
    /// The income was already reported on the return.
    AlreadyReported,
    /// The income belongs to a different tax year.
    WrongYear,
}

impl Discrepancy {
    /// Parse a discrepancy code, or `None` for free text.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "duplicate_reporting" | "duplicate" => Some(Self::DuplicateReporting),
            "incorrect_amount" | "wrong_amount" => Some(Self::IncorrectAmount),
            "basis_omitted" | "missing_basis" | "cost_basis" => Some(Self::BasisOmitted),
            "not_taxpayer_income" | "identity_theft" | "nominee" => Some(Self::NotTaxpayerIncome),
            "already_reported" => Some(Self::AlreadyReported),
            "wrong_year" | "timing" => Some(Self::WrongYear),
            _ => None,
        }
    }

    fn analysis(&self) -> &'static str {
        match self {
            Self::DuplicateReporting => {
                "The proposed adjustment counts the same income twice. Two information returns were filed for a single payment, and the income was reported once on the return as filed."
            }
            Self::IncorrectAmount => {
                "The information return relied on in the notice reports an incorrect amount. The payer's figure does not match the amount actually paid to the taxpayer."
            }
            Self::BasisOmitted => {
                "The proposed adjustment treats the gross proceeds of a sale as income without accounting for cost basis. Once basis is taken into account, the gain is substantially lower than the notice assumes."
            }
            Self::NotTaxpayerIncome => {
                "The income in question was not received by the taxpayer. It was reported under the taxpayer's identification number in error or as the result of misuse of that number."
            }
            Self::AlreadyReported => {
                "The income identified in the notice was already included on the return as filed, on a line or schedule the automated comparison did not match."
            }
            Self::WrongYear => {
                "The income identified in the notice belongs to a different tax year and was reported on the return for the year in which it was actually received."
            }
        }
    }
}

const BACKGROUND: [Phrase; 3] = [
    |ctx| {
        format!(
            "{} proposes changes to the return for {} based on information reported by third parties, resulting in {}.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "a proposed amount due")
        )
    },
    |ctx| {
        format!(
            "The taxpayer received {}, which compares the return for {} with information returns and proposes {}.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "an additional amount")
        )
    },
    |ctx| {
        format!(
            "This letter responds to {}. The notice identifies income or deductions for {} that it says do not match third-party records, and proposes {}.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "an adjustment")
        )
    },
];

const SUPPORTING_REVIEW: [&str; 3] = [
    "The taxpayer asks that the information returns relied on in the notice be compared line by line with the return as filed before the proposed changes are assessed.",
    "The taxpayer requests that the underlying information returns and the return as filed be reviewed together, as the mismatch identified in the notice may not reflect an actual understatement.",
    "Before any assessment is made, the taxpayer asks that the third-party records behind this notice be reviewed against the return as filed.",
];

fn position_phrase(position: Position) -> Option<&'static str> {
    match position {
        Position::Agree => Some(
            "The taxpayer agrees with the changes proposed in the notice and asks that the adjustment be processed as proposed.",
        ),
        Position::PartiallyAgree => Some(
            "The taxpayer agrees with part of the proposed adjustment and disagrees with the remainder, for the reasons set out in this letter.",
        ),
        Position::Disagree => Some(
            "The taxpayer disagrees with the proposed adjustment. The return as filed correctly reports the items identified in the notice.",
        ),
        _ => None,
    }
}

fn discrepancy_section(seed: &Seed, ctx: &LetterContext) -> Option<Section> {
    let raw = ctx.discrepancy()?;
    let body = match Discrepancy::parse(raw) {
        Some(kind) => kind.analysis().to_owned(),
        None => format!(
            "{} {}",
            pick(
                seed,
                slot::FAMILY_EXTRA,
                &[
                    "The discrepancy identified in the notice is explained as follows:",
                    "The mismatch between the return and the information returns arises as follows:",
                ],
            ),
            format::sentence(raw)
        ),
    };
    Some(Section::new(headings::DISCREPANCY, body))
}

impl FamilyLibrary for UnderreporterLibrary {
    fn family(&self) -> NoticeFamily {
        NoticeFamily::Underreporter
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
        let mut sections = vec![
            Section::new(
                headings::BACKGROUND,
                pick_with(seed, slot::BACKGROUND, &BACKGROUND, ctx),
            ),
            position_section(seed, ctx, position_phrase),
        ];
        sections.extend(discrepancy_section(seed, ctx));
        sections.push(status_section(
            seed,
            ctx,
            headings::SUPPORTING_INFORMATION,
            &SUPPORTING_REVIEW,
        ));
        sections.extend(explanation_section(ctx));
        sections
    }

    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section {
        let review = format!(
            "Review the information returns and the return as filed for {}.",
            period_phrase(ctx)
        );
        let mut asks = standard_asks(seed, ctx, review);
        asks.extend(conditional_asks(ctx));
        match TaxpayerPosition::from_context(ctx).code() {
            Some(Position::Agree) => asks.push(
                "Process the agreed adjustment and issue a statement of the corrected balance."
                    .to_owned(),
            ),
            Some(Position::NotMyIncome) => asks.push(
                "Remove the income that does not belong to the taxpayer and note the account for possible identity misuse."
                    .to_owned(),
            ),
            _ => asks.push(
                "Withdraw the proposed adjustment to the extent it is not supported by the return as filed."
                    .to_owned(),
            ),
        }
        if ctx.discrepancy().is_some() {
            asks.push(
                "Reconcile the information return with the payer and correct the account accordingly."
                    .to_owned(),
            );
        }
        actions_section(seed, &asks)
    }

    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str> {
        let mut cites = vec![
            "IRC § 6201 (assessment authority)",
            "IRC § 6212 (notice of deficiency)",
            "IRC § 6213 (restrictions on assessment; petition to the Tax Court)",
        ];
        if TaxpayerPosition::from_context(ctx).code() != Some(Position::Agree) {
            cites.push("IRC § 6662 (accuracy-related penalty)");
        }
        cites
    }
}
