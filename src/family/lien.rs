//! Federal tax lien family.

use crate::headings;
use crate::seed::{pick, pick_with, Phrase, Seed};
use crate::types::{normalize_code, LetterContext, NoticeFamily, Section};

use super::position::{Position, TaxpayerPosition};
use super::{
    actions_section, amount_phrase, conditional_asks, explanation_section, notice_reference,
    period_phrase, position_section, slot, standard_asks, status_section, FamilyLibrary,
};

/// Content library for lien filings and lien warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LienLibrary;

/// Relief requested with respect to a filed lien, read from `extra.lien_relief`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LienRelief {
    /// Withdrawal of the public notice of lien.
    Withdrawal,
    /// Release after the liability is satisfied.
    Release,
    /// Discharge of specific property from the lien.
    Discharge,
    /// Subordination of the lien to another creditor.
    Subordination,
}

impl LienRelief {
    /// Parse a relief code.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "withdrawal" | "withdraw" => Some(Self::Withdrawal),
            "release" => Some(Self::Release),
            "discharge" => Some(Self::Discharge),
            "subordination" | "subordinate" => Some(Self::Subordination),
            _ => None,
        }
    }

    /// The relief requested on a context, if it names a known kind.
    pub fn from_context(ctx: &LetterContext) -> Option<Self> {
        ctx.extra_text("lien_relief")
            .as_deref()
            .and_then(Self::parse)
    }

    fn request(&self) -> &'static str {
        match self {
            Self::Withdrawal => {
                "The taxpayer requests withdrawal of the notice of federal tax lien. Withdrawal will facilitate collection of the liability and is in the best interests of both the taxpayer and the government."
            }
            Self::Release => {
                "The taxpayer requests a certificate of release of the federal tax lien. The underlying liability has been satisfied or has become legally unenforceable."
            }
            Self::Discharge => {
                "The taxpayer requests a certificate of discharge removing the property identified in this letter from the lien, so that it can be sold or refinanced and the proceeds applied as appropriate."
            }
            Self::Subordination => {
                "The taxpayer requests a certificate of subordination so that a lender may take priority over the federal tax lien, allowing a refinancing that will improve the taxpayer's ability to pay."
            }
        }
    }

    fn ask(&self) -> &'static str {
        match self {
            Self::Withdrawal => {
                "Withdraw the notice of federal tax lien and notify the credit reporting agencies and the recording office of the withdrawal."
            }
            Self::Release => "Issue a certificate of release of the federal tax lien.",
            Self::Discharge => {
                "Issue a certificate of discharge for the property described in this letter."
            }
            Self::Subordination => {
                "Issue a certificate of subordination in favour of the lender described in this letter."
            }
        }
    }

    fn authority(&self) -> &'static str {
        match self {
            Self::Withdrawal => "IRC § 6323(j) (withdrawal of notice of lien)",
            Self::Release => "IRC § 6325(a) (release of lien)",
            Self::Discharge => "IRC § 6325(b) (discharge of property)",
            Self::Subordination => "IRC § 6325(d) (subordination of lien)",
        }
    }
}

const BACKGROUND: [Phrase; 2] = [
    |ctx| {
        format!(
            "{} concerns a federal tax lien securing {} for {}.",
            notice_reference(ctx),
            amount_phrase(ctx, "a balance"),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "The taxpayer received {}, which relates to a federal tax lien for {} arising from {}.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "an unpaid balance")
        )
    },
];

const ACCOUNT_REVIEW: [&str; 2] = [
    "The taxpayer asks that the account be reviewed to confirm the balance the lien secures and whether the lien filing was appropriate.",
    "The taxpayer requests a review of the account and of the decision to file a notice of lien, including whether the balance was correctly assessed.",
];

const UNSPECIFIED_RELIEF: [&str; 2] = [
    "The taxpayer asks that every form of lien relief available on this account be considered, including withdrawal of the notice of lien once the balance is resolved.",
    "The taxpayer requests that the lien be reviewed for withdrawal, release, or other relief as the facts of this account warrant.",
];

fn position_phrase(position: Position) -> Option<&'static str> {
    match position {
        Position::PaidInFull => Some(
            "The taxpayer has paid the balance secured by the lien in full, and the lien should be released.",
        ),
        _ => None,
    }
}

fn relief_section(seed: &Seed, ctx: &LetterContext) -> Section {
    let body = match (LienRelief::from_context(ctx), ctx.extra_text("lien_relief")) {
        (Some(relief), _) => relief.request().to_owned(),
        (None, Some(raw)) => format!(
            "The taxpayer requests the following relief with respect to the lien: {}",
            crate::format::sentence(&raw)
        ),
        (None, None) => pick(seed, slot::FAMILY_EXTRA, &UNSPECIFIED_RELIEF).to_owned(),
    };
    Section::new(headings::LIEN_RELIEF, body)
}

impl FamilyLibrary for LienLibrary {
    fn family(&self) -> NoticeFamily {
        NoticeFamily::Lien
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
        let mut sections = vec![
            Section::new(
                headings::BACKGROUND,
                pick_with(seed, slot::BACKGROUND, &BACKGROUND, ctx),
            ),
            position_section(seed, ctx, position_phrase),
            relief_section(seed, ctx),
            status_section(seed, ctx, headings::ACCOUNT_STATUS, &ACCOUNT_REVIEW),
        ];
        sections.extend(explanation_section(ctx));
        sections
    }

    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section {
        let review = format!(
            "Review the assessment secured by the lien for {} and the basis for the lien filing.",
            period_phrase(ctx)
        );
        let mut asks = standard_asks(seed, ctx, review);
        asks.extend(conditional_asks(ctx));
        if let Some(relief) = LienRelief::from_context(ctx) {
            asks.push(relief.ask().to_owned());
        } else if TaxpayerPosition::from_context(ctx).code() == Some(Position::PaidInFull) {
            asks.push(LienRelief::Release.ask().to_owned());
        }
        actions_section(seed, &asks)
    }

    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str> {
        let mut cites = vec![
            "IRC § 6321 (lien for taxes)",
            "IRC § 6320 (notice and opportunity for hearing upon filing of notice of lien)",
        ];
        if let Some(relief) = LienRelief::from_context(ctx) {
            cites.push(relief.authority());
        }
        cites
    }
}
