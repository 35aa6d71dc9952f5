//! General correspondence family: math-error adjustments, return reviews,
//! and information requests.

use crate::headings;
use crate::seed::{pick_with, Phrase, Seed};
use crate::types::{LetterContext, NoticeFamily, Section};

use super::position::{Position, TaxpayerPosition};
use super::{
    actions_section, conditional_asks, explanation_section, notice_reference, period_phrase,
    position_section, slot, standard_asks, status_section, FamilyLibrary,
};

/// Content library for general correspondence.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralLibrary;

const BACKGROUND: [Phrase; 3] = [
    |ctx| {
        format!(
            "{} concerns the return filed for {} and describes changes made to it or information needed to complete its processing.",
            notice_reference(ctx),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "The taxpayer received {} regarding the return for {}.",
            notice_reference(ctx),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "This letter responds to {}, which relates to the processing of the return for {}.",
            notice_reference(ctx),
            period_phrase(ctx)
        )
    },
];

const SUPPORTING_REVIEW: [&str; 2] = [
    "The taxpayer asks that the return as filed be compared with the changes or requests described in the notice, and that any error in processing be corrected.",
    "The taxpayer requests that the return as originally filed be reviewed together with this letter before the account is adjusted further.",
];

fn position_phrase(position: Position) -> Option<&'static str> {
    match position {
        Position::Disagree => Some(
            "The taxpayer disagrees with the changes described in the notice and asks that they be reversed.",
        ),
        _ => None,
    }
}

impl FamilyLibrary for GeneralLibrary {
    fn family(&self) -> NoticeFamily {
        NoticeFamily::General
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
        let mut sections = vec![
            Section::new(
                headings::BACKGROUND,
                pick_with(seed, slot::BACKGROUND, &BACKGROUND, ctx),
            ),
            position_section(seed, ctx, position_phrase),
            status_section(
                seed,
                ctx,
                headings::SUPPORTING_INFORMATION,
                &SUPPORTING_REVIEW,
            ),
        ];
        sections.extend(explanation_section(ctx));
        sections
    }

    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section {
        let review = format!(
            "Review the return as filed for {} together with the changes described in the notice.",
            period_phrase(ctx)
        );
        let mut asks = standard_asks(seed, ctx, review);
        asks.extend(conditional_asks(ctx));
        match TaxpayerPosition::from_context(ctx).code() {
            Some(Position::Disagree) => asks.push(
                "Reverse the changes described in the notice, treating this letter as a timely request for abatement of any math-error assessment."
                    .to_owned(),
            ),
            Some(Position::InformationProvided) => asks.push(
                "Associate the enclosed information with the return and complete its processing."
                    .to_owned(),
            ),
            _ => {}
        }
        actions_section(seed, &asks)
    }

    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str> {
        let mut cites = vec![
            "IRC § 6213(b) (math or clerical errors)",
            "IRC § 7803(a)(3) (taxpayer bill of rights)",
        ];
        if ctx.amount().is_some() {
            cites.push("IRC § 6402 (authority to make credits or refunds)");
        }
        cites
    }
}
