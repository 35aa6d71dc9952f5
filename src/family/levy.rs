//! Levy-intent family and its response-posture state machine.
//!
//! A final notice of intent to levy gives the taxpayer a choice of how to
//! respond. The choice is modelled as [`LevyResponse`], an enum whose
//! payload carries the sub-choice the posture requires. Raw context strings
//! are validated into it up front; every contradiction is reported at once.

use crate::format;
use crate::headings;
use crate::seed::{pick, pick_with, Phrase, Seed};
use crate::types::{normalize_code, ExtraValue, LetterContext, NoticeFamily, Section};

use super::position::Position;
use super::{
    actions_section, amount_phrase, conditional_asks, explanation_section, notice_reference,
    period_phrase, position_section, slot, standard_asks, status_section, FamilyLibrary,
    PreconditionError, Violation,
};

/// The posture tag supplied by the caller, before payload validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePosture {
    /// Request a collection due process hearing.
    Hearing,
    /// Request an equivalent hearing after the hearing window closed.
    EquivalentHearing,
    /// Propose a collection alternative.
    CollectionAlternative,
    /// Dispute the underlying liability.
    DisputeLiability,
}

impl ResponsePosture {
    /// Canonical posture code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hearing => "hearing",
            Self::EquivalentHearing => "equivalent_hearing",
            Self::CollectionAlternative => "collection_alternative",
            Self::DisputeLiability => "dispute_liability",
        }
    }

    /// Parse a posture code.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "hearing" | "request_hearing" | "cdp_hearing" => Some(Self::Hearing),
            "equivalent_hearing" | "request_equivalent_hearing" => Some(Self::EquivalentHearing),
            "collection_alternative" | "propose_collection_alternative" | "alternative" => {
                Some(Self::CollectionAlternative)
            }
            "dispute_liability" | "dispute_the_liability" | "dispute" => {
                Some(Self::DisputeLiability)
            }
            _ => None,
        }
    }
}

/// Collection alternative proposed in place of levy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternativeKind {
    /// Monthly installment agreement.
    Installment,
    /// Offer in compromise.
    Offer,
    /// Currently-not-collectible hardship status.
    Hardship,
}

impl AlternativeKind {
    /// Parse an alternative code.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "installment" | "installment_agreement" => Some(Self::Installment),
            "offer" | "offer_in_compromise" | "oic" => Some(Self::Offer),
            "hardship" | "hardship_status" | "currently_not_collectible" | "cnc" => {
                Some(Self::Hardship)
            }
            _ => None,
        }
    }
}

/// Basis on which the liability is disputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeBasis {
    /// The notice or assessment failed a legal or procedural requirement.
    ProceduralDefect,
    /// The balance is wrong.
    IncorrectBalance,
    /// The liability was already paid or otherwise resolved.
    AlreadyResolved,
}

impl DisputeBasis {
    /// Parse a dispute-basis code.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "procedural_defect" | "procedural" => Some(Self::ProceduralDefect),
            "incorrect_balance" | "wrong_balance" => Some(Self::IncorrectBalance),
            "already_resolved" | "resolved" | "already_paid" => Some(Self::AlreadyResolved),
            _ => None,
        }
    }
}

/// Validated levy response posture with its required payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevyResponse {
    /// Collection due process hearing.
    #[default]
    Hearing,
    /// Equivalent hearing.
    EquivalentHearing,
    /// Collection alternative of the given kind.
    CollectionAlternative(AlternativeKind),
    /// Liability dispute on the given basis.
    Dispute(DisputeBasis),
}

impl LevyResponse {
    /// Validate the posture fields of a context.
    ///
    /// An absent posture with no sub-types means a hearing request.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError`] listing every violation: unknown
    /// posture or sub-type values, a sub-type the posture requires but is
    /// missing, and a sub-type supplied for a posture that does not use it.
    pub fn from_context(ctx: &LetterContext) -> Result<Self, PreconditionError> {
        let mut violations = Vec::new();

        let posture = match ctx.response_posture() {
            None => Some(ResponsePosture::Hearing),
            Some(raw) => {
                let parsed = ResponsePosture::parse(raw);
                if parsed.is_none() {
                    violations.push(Violation::UnknownPosture(raw.to_owned()));
                }
                parsed
            }
        };

        let alternative_raw = ctx.alternative_type();
        let alternative = alternative_raw.and_then(|raw| {
            let parsed = AlternativeKind::parse(raw);
            if parsed.is_none() {
                violations.push(Violation::UnknownAlternativeType(raw.to_owned()));
            }
            parsed
        });

        let basis_raw = ctx.dispute_basis();
        let basis = basis_raw.and_then(|raw| {
            let parsed = DisputeBasis::parse(raw);
            if parsed.is_none() {
                violations.push(Violation::UnknownDisputeBasis(raw.to_owned()));
            }
            parsed
        });

        let response = posture.and_then(|posture| {
            let name = posture.as_str().to_owned();
            let uses_alternative = posture == ResponsePosture::CollectionAlternative;
            let uses_basis = posture == ResponsePosture::DisputeLiability;

            if uses_alternative && alternative_raw.is_none() {
                violations.push(Violation::MissingAlternativeType {
                    posture: name.clone(),
                });
            }
            if !uses_alternative && alternative_raw.is_some() {
                violations.push(Violation::UnexpectedAlternativeType {
                    posture: name.clone(),
                });
            }
            if uses_basis && basis_raw.is_none() {
                violations.push(Violation::MissingDisputeBasis {
                    posture: name.clone(),
                });
            }
            if !uses_basis && basis_raw.is_some() {
                violations.push(Violation::UnexpectedDisputeBasis { posture: name });
            }

            match posture {
                ResponsePosture::Hearing => Some(Self::Hearing),
                ResponsePosture::EquivalentHearing => Some(Self::EquivalentHearing),
                ResponsePosture::CollectionAlternative => {
                    alternative.map(Self::CollectionAlternative)
                }
                ResponsePosture::DisputeLiability => basis.map(Self::Dispute),
            }
        });

        match response {
            Some(response) if violations.is_empty() => Ok(response),
            _ => Err(PreconditionError { violations }),
        }
    }

    /// The posture tag of this response.
    pub fn posture(&self) -> ResponsePosture {
        match self {
            Self::Hearing => ResponsePosture::Hearing,
            Self::EquivalentHearing => ResponsePosture::EquivalentHearing,
            Self::CollectionAlternative(_) => ResponsePosture::CollectionAlternative,
            Self::Dispute(_) => ResponsePosture::DisputeLiability,
        }
    }

    /// Heading of the posture section.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Hearing => headings::HEARING_REQUEST,
            Self::EquivalentHearing => headings::EQUIVALENT_HEARING,
            Self::CollectionAlternative(_) => headings::COLLECTION_ALTERNATIVE,
            Self::Dispute(_) => headings::BASIS_FOR_DISPUTE,
        }
    }

    /// Standard enclosures for this posture.
    pub fn enclosures(&self) -> Vec<&'static str> {
        const FORM_12153: &str =
            "Form 12153, Request for a Collection Due Process or Equivalent Hearing";
        const NOTICE_COPY: &str = "A copy of the notice of intent to levy";
        match self {
            Self::Hearing | Self::EquivalentHearing => vec![FORM_12153, NOTICE_COPY],
            Self::CollectionAlternative(AlternativeKind::Installment) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Form 9465, Installment Agreement Request",
                "Form 433-F, Collection Information Statement",
            ],
            Self::CollectionAlternative(AlternativeKind::Offer) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Form 656, Offer in Compromise",
                "Form 433-A (OIC), Collection Information Statement",
                "The application fee and initial payment, or the low-income certification",
            ],
            Self::CollectionAlternative(AlternativeKind::Hardship) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Form 433-A, Collection Information Statement",
                "Proof of monthly household income and necessary living expenses",
            ],
            Self::Dispute(DisputeBasis::ProceduralDefect) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Copies of all notices received, with envelopes showing mailing dates",
            ],
            Self::Dispute(DisputeBasis::IncorrectBalance) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Copies of the returns as filed",
                "Records supporting the correct balance",
            ],
            Self::Dispute(DisputeBasis::AlreadyResolved) => vec![
                FORM_12153,
                NOTICE_COPY,
                "Proof of payment or resolution (canceled checks, bank statements, or closing letters)",
            ],
        }
    }

    fn asks(&self) -> Vec<&'static str> {
        match self {
            Self::Hearing => vec![
                "Forward the enclosed Form 12153 to the Independent Office of Appeals and schedule a collection due process hearing.",
                "Refrain from levy while the hearing and any appeal are pending, as required by IRC § 6330(e).",
            ],
            Self::EquivalentHearing => vec![
                "Forward the enclosed Form 12153 to the Independent Office of Appeals and schedule an equivalent hearing.",
                "Refrain from levy while the equivalent hearing is pending.",
            ],
            Self::CollectionAlternative(AlternativeKind::Installment) => vec![
                "Approve the proposed installment agreement and confirm the monthly payment amount and due date.",
                "Refrain from levy while the installment proposal is under consideration.",
            ],
            Self::CollectionAlternative(AlternativeKind::Offer) => vec![
                "Process the enclosed offer in compromise and refrain from levy while it is under consideration.",
            ],
            Self::CollectionAlternative(AlternativeKind::Hardship) => vec![
                "Place the account in currently-not-collectible status based on the enclosed financial information.",
                "Release any levy already served, as required by IRC § 6343 when a levy creates an economic hardship.",
            ],
            Self::Dispute(DisputeBasis::ProceduralDefect) => vec![
                "Verify that every applicable legal and administrative requirement was met before the notice was issued.",
                "Withdraw the notice of intent to levy if any requirement was not met.",
            ],
            Self::Dispute(DisputeBasis::IncorrectBalance) => vec![
                "Abate the portion of the liability that is not owed and issue a corrected balance.",
            ],
            Self::Dispute(DisputeBasis::AlreadyResolved) => vec![
                "Update the account to reflect that the liability has been resolved and withdraw the notice of intent to levy.",
            ],
        }
    }

    fn authorities(&self) -> Vec<&'static str> {
        match self {
            Self::Hearing => vec!["IRC § 6330(e) (suspension of levy during a hearing)"],
            Self::EquivalentHearing => {
                vec!["Treas. Reg. § 301.6330-1(i) (equivalent hearings)"]
            }
            Self::CollectionAlternative(AlternativeKind::Installment) => {
                vec!["IRC § 6159 (installment agreements)"]
            }
            Self::CollectionAlternative(AlternativeKind::Offer) => {
                vec!["IRC § 7122 (compromises)"]
            }
            Self::CollectionAlternative(AlternativeKind::Hardship) => vec![
                "IRC § 6343(a)(1)(D) (release of levy for economic hardship)",
            ],
            Self::Dispute(DisputeBasis::ProceduralDefect) => vec![
                "IRC § 6330(c)(1) (verification of legal and procedural requirements)",
            ],
            Self::Dispute(DisputeBasis::IncorrectBalance) => {
                vec!["IRC § 6330(c)(2)(B) (challenges to the underlying liability)"]
            }
            Self::Dispute(DisputeBasis::AlreadyResolved) => vec![
                "IRC § 6330(c)(2)(B) (challenges to the underlying liability)",
                "IRC § 6402 (authority to make credits or refunds)",
            ],
        }
    }

    fn statement(&self, seed: &Seed, ctx: &LetterContext) -> String {
        let period = period_phrase(ctx);
        match self {
            Self::Hearing => format!(
                "{} a collection due process hearing under IRC § 6330 with respect to the proposed levy for {period}. A completed Form 12153 is enclosed.",
                pick(
                    seed,
                    slot::POSTURE,
                    &[
                        "The taxpayer requests",
                        "The taxpayer hereby exercises the right to request",
                    ],
                )
            ),
            Self::EquivalentHearing => format!(
                "The taxpayer requests an equivalent hearing with the Independent Office of Appeals regarding the proposed levy for {period}. The taxpayer understands that the period for a collection due process hearing has passed and asks that the matters in this letter be considered in the equivalent hearing."
            ),
            Self::CollectionAlternative(AlternativeKind::Installment) => {
                let payment = monthly_payment(ctx)
                    .map(|amount| format!(" of {amount} per month"))
                    .unwrap_or_default();
                format!(
                    "In place of levy, the taxpayer proposes to pay {} through a monthly installment agreement{payment}. The taxpayer will remain current on all future filing and payment obligations while the agreement is in effect.",
                    amount_phrase(ctx, "the balance")
                )
            }
            Self::CollectionAlternative(AlternativeKind::Offer) => format!(
                "In place of levy, the taxpayer proposes to resolve the liability for {period} through an offer in compromise. The taxpayer's assets and future income are not sufficient to pay the liability in full within the collection period."
            ),
            Self::CollectionAlternative(AlternativeKind::Hardship) => format!(
                "The taxpayer asks that collection of the liability for {period} be suspended and the account placed in currently-not-collectible status. A levy would leave the taxpayer unable to meet necessary living expenses."
            ),
            Self::Dispute(DisputeBasis::ProceduralDefect) => format!(
                "The taxpayer disputes the proposed levy for {period} because the legal and procedural requirements for collection were not satisfied. The taxpayer asks Appeals to obtain verification that each requirement was met."
            ),
            Self::Dispute(DisputeBasis::IncorrectBalance) => format!(
                "The taxpayer disputes the underlying liability for {period}. The taxpayer did not receive a notice of deficiency or another opportunity to dispute this liability, and the balance stated in the notice is incorrect."
            ),
            Self::Dispute(DisputeBasis::AlreadyResolved) => format!(
                "The liability described in the notice for {period} has already been resolved. No balance remains that would support a levy."
            ),
        }
    }
}

/// Content library for final notices of intent to levy.
///
/// The trait methods re-derive the [`LevyResponse`] from the context. The
/// blueprint validates first, so an invalid posture never reaches them; a
/// direct caller with an invalid posture gets hearing-request phrasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevyIntentLibrary;

impl LevyIntentLibrary {
    /// Posture section and enclosure checklist for a validated response.
    pub fn posture_sections(
        &self,
        seed: &Seed,
        ctx: &LetterContext,
        response: &LevyResponse,
    ) -> Vec<Section> {
        let mut enclosures: Vec<String> = response
            .enclosures()
            .into_iter()
            .map(str::to_owned)
            .collect();
        enclosures.extend(ctx.enclosures());

        vec![
            Section::new(response.heading(), response.statement(seed, ctx)),
            Section::new(headings::ENCLOSURE_CHECKLIST, format::bulleted(&enclosures)),
        ]
    }
}

/// Proposed monthly payment. Numbers, and text that reads as a plain
/// number, render as money; other text is echoed.
fn monthly_payment(ctx: &LetterContext) -> Option<String> {
    match ctx.extra.get("payment_amount")? {
        ExtraValue::Number(n) if n.is_finite() => Some(format::money(*n)),
        ExtraValue::Number(_) => None,
        _ => {
            let text = ctx.extra_text("payment_amount")?;
            Some(match text.parse::<f64>() {
                Ok(n) if n.is_finite() => format::money(n),
                _ => text,
            })
        }
    }
}

fn resolved(ctx: &LetterContext) -> LevyResponse {
    LevyResponse::from_context(ctx).unwrap_or_default()
}

const BACKGROUND: [Phrase; 3] = [
    |ctx| {
        format!(
            "{} is a final notice of intent to levy for {}, asserting {}. The notice also advises the taxpayer of the right to a hearing before any levy is made.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "an unpaid balance")
        )
    },
    |ctx| {
        format!(
            "The taxpayer received {}, which states an intent to levy to collect {} for {} and describes the taxpayer's hearing rights.",
            notice_reference(ctx),
            amount_phrase(ctx, "the balance"),
            period_phrase(ctx)
        )
    },
    |ctx| {
        format!(
            "This letter responds to {}, the final notice of intent to levy issued for {}. The notice proposes to collect {} by levy.",
            notice_reference(ctx),
            period_phrase(ctx),
            amount_phrase(ctx, "a balance")
        )
    },
];

const ACCOUNT_REVIEW: [&str; 2] = [
    "The taxpayer asks that the account be reviewed, including every payment, credit, and prior notice, before any levy is made.",
    "Before any levy proceeds, the taxpayer requests a complete review of the account and the notices issued for it.",
];

fn position_phrase(position: Position) -> Option<&'static str> {
    match position {
        Position::PaidInFull => Some(
            "The taxpayer has paid the balance in full. No liability remains that could support a levy.",
        ),
        Position::DisputesBalance => Some(
            "The taxpayer disputes the balance the notice proposes to collect by levy.",
        ),
        _ => None,
    }
}

impl FamilyLibrary for LevyIntentLibrary {
    fn family(&self) -> NoticeFamily {
        NoticeFamily::LevyIntent
    }

    fn sections(&self, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
        let mut sections = vec![
            Section::new(
                headings::BACKGROUND,
                pick_with(seed, slot::BACKGROUND, &BACKGROUND, ctx),
            ),
            position_section(seed, ctx, position_phrase),
            status_section(seed, ctx, headings::ACCOUNT_STATUS, &ACCOUNT_REVIEW),
        ];
        sections.extend(explanation_section(ctx));
        sections
    }

    fn requested_actions(&self, seed: &Seed, ctx: &LetterContext) -> Section {
        let review = format!(
            "Review the account and every notice issued for {} before taking levy action.",
            period_phrase(ctx)
        );
        let mut asks = standard_asks(seed, ctx, review);
        asks.extend(resolved(ctx).asks().into_iter().map(str::to_owned));
        asks.extend(conditional_asks(ctx));
        actions_section(seed, &asks)
    }

    fn authorities(&self, ctx: &LetterContext) -> Vec<&'static str> {
        let mut cites = vec![
            "IRC § 6330 (notice and opportunity for hearing before levy)",
            "IRC § 6331 (levy and distraint)",
        ];
        cites.extend(resolved(ctx).authorities());
        cites
    }

    fn validate(&self, ctx: &LetterContext) -> Result<(), PreconditionError> {
        LevyResponse::from_context(ctx).map(|_| ())
    }
}
