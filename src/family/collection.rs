//! Collection / balance-due family.

use crate::headings;
use crate::seed::{pick, pick_with, Phrase, Seed};
use crate::types::{normalize_code, LetterContext, NoticeFamily, Section};

use super::position::{Position, TaxpayerPosition};
use super::{
    actions_section, amount_phrase, conditional_asks, explanation_section, notice_reference,
    period_phrase, position_section, slot, standard_asks, status_section, FamilyLibrary,
};

/// Content library for balance-due notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionLibrary;

const BACKGROUND: [Phrase; 3] = [
    |ctx| {
        format!(
            "{} states that the taxpayer owes {} for {}.",
            notice_reference(ctx),
            amount_phrase(ctx, "a balance"),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "The taxpayer received {}, which reports {} for {} and requests payment.",
            notice_reference(ctx),
            amount_phrase(ctx, "an unpaid balance"),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "This letter concerns {} for {}. The notice asserts {} and demands payment.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "a balance due")
        )
    },
];

const ACCOUNT_REVIEW: [&str; 3] = [
    "The taxpayer asks that the account be reviewed in full, including all payments, credits, penalties, and interest, before any further collection action is taken.",
    "The taxpayer requests a complete review of the account transcript, including the application of payments and the computation of penalties and interest.",
    "Before collection proceeds, the taxpayer asks that the account history be reviewed to confirm the balance, the payments received, and the additions to tax.",
];

fn position_phrase(position: Position) -> Option<&'static str> {
    match position {
        Position::PaidInFull => Some(
            "The taxpayer has paid this balance in full. Any remaining amount shown on the notice reflects a posting delay or a misapplied payment rather than an unpaid liability.",
        ),
        Position::PartialPayment => Some(
            "The taxpayer has paid part of the balance and asks that the notice amount be recomputed to reflect that payment before any further demand is made.",
        ),
        Position::PaymentNotApplied => Some(
            "The taxpayer made a payment toward this period that has not been credited. The balance on the notice is overstated by at least the amount of that payment.",
        ),
        Position::DisputesBalance => Some(
            "The taxpayer disputes the balance on the notice. The amount does not match the taxpayer's records of the tax reported and the payments made for this period.",
        ),
        _ => None,
    }
}

/// Penalty relief basis supplied in `reason`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyRelief {
    /// First-time abatement under administrative waiver.
    FirstTimeAbatement,
    /// Reasonable cause for the failure.
    ReasonableCause,
    /// Reliance on erroneous written advice.
    ErroneousAdvice,
}

impl PenaltyRelief {
    /// Parse a reason code, or `None` for free text.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "first_time_abatement" | "fta" => Some(Self::FirstTimeAbatement),
            "reasonable_cause" => Some(Self::ReasonableCause),
            "erroneous_advice" | "erroneous_written_advice" => Some(Self::ErroneousAdvice),
            _ => None,
        }
    }

    fn request(&self) -> &'static str {
        match self {
            Self::FirstTimeAbatement => {
                "The taxpayer requests first-time abatement of the failure-to-pay and failure-to-file penalties. The taxpayer has a clean compliance history for the three preceding tax years and has filed all currently required returns."
            }
            Self::ReasonableCause => {
                "The taxpayer requests abatement of penalties for reasonable cause. The taxpayer exercised ordinary business care and prudence but was nevertheless unable to comply on time for the reasons described in this letter."
            }
            Self::ErroneousAdvice => {
                "The taxpayer requests abatement of penalties attributable to erroneous written advice furnished by the agency in response to a specific written request."
            }
        }
    }
}

fn penalty_section(ctx: &LetterContext) -> Option<Section> {
    let reason = ctx.reason()?;
    let body = match PenaltyRelief::parse(reason) {
        Some(relief) => relief.request().to_owned(),
        None => format!(
            "The taxpayer requests abatement of the penalties assessed for {} on the following basis: {}",
            period_phrase(ctx),
            crate::format::sentence(reason)
        ),
    };
    Some(Section::new(headings::PENALTY_RELIEF, body))
}

impl FamilyLibrary for CollectionLibrary {
    fn family(&self) -> NoticeFamily {
        NoticeFamily::Collection
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
        let mut sections = vec![
            Section::new(
                headings::BACKGROUND,
                pick_with(seed, slot::BACKGROUND, &BACKGROUND, ctx),
            ),
            position_section(seed, ctx, position_phrase),
        ];
        sections.extend(penalty_section(ctx));
        sections.push(status_section(
            seed,
            ctx,
            headings::ACCOUNT_STATUS,
            &ACCOUNT_REVIEW,
        ));
        sections.extend(explanation_section(ctx));
        sections
    }

    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section {
        let review = pick(
            seed,
            slot::ASK_REVIEW,
            &[
                "Review the account transcript for",
                "Conduct a full review of the account for",
            ],
        );
        let mut asks = standard_asks(seed, ctx, format!("{review} {}.", period_phrase(ctx)));
        asks.extend(conditional_asks(ctx));
        if ctx.reason().is_some() {
            asks.push(
                "Abate the penalties described in the Penalty Relief section and the interest attributable to them."
                    .to_owned(),
            );
        }
        if let Some(Position::PaidInFull | Position::PaymentNotApplied) =
            TaxpayerPosition::from_context(ctx).code()
        {
            asks.push(
                "Trace the payment described above and apply it to the period shown on the notice."
                    .to_owned(),
            );
        }
        actions_section(seed, &asks)
    }

    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str> {
        let mut cites = vec![
            "IRC § 6303 (notice and demand for tax)",
            "IRC § 6402 (authority to make credits or refunds)",
            "IRC § 6404 (abatements)",
        ];
        if ctx.reason().is_some() {
            cites.push("IRC § 6651 (failure to file or pay penalties)");
        }
        if TaxpayerPosition::from_context(ctx).code() == Some(Position::NeedsTimeToPay) {
            cites.push("IRC § 6159 (installment agreements)");
        }
        cites
    }
}
