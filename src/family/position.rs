//! Taxpayer position codes and their canonical sentences.

use crate::types::{normalize_code, LetterContext};

/// Enumerated taxpayer positions recognized across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The balance has been paid in full.
    PaidInFull,
    /// Part of the balance has been paid.
    PartialPayment,
    /// A payment was made but not applied to this period.
    PaymentNotApplied,
    /// The taxpayer disputes the balance.
    DisputesBalance,
    /// The taxpayer needs time to pay.
    NeedsTimeToPay,
    /// Payment would cause economic hardship.
    Hardship,
    /// The taxpayer agrees with the proposed change.
    Agree,
    /// The taxpayer agrees with part of the proposed change.
    PartiallyAgree,
    /// The taxpayer disagrees with the proposed change.
    Disagree,
    /// The income was reported elsewhere on the return.
    IncomeReportedElsewhere,
    /// The income does not belong to the taxpayer.
    NotMyIncome,
    /// The lien was filed prematurely.
    LienPremature,
    /// The requested information is being provided.
    InformationProvided,
}

impl Position {
    /// Canonical code for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaidInFull => "paid_in_full",
            Self::PartialPayment => "partial_payment",
            Self::PaymentNotApplied => "payment_not_applied",
            Self::DisputesBalance => "disputes_balance",
            Self::NeedsTimeToPay => "needs_time_to_pay",
            Self::Hardship => "hardship",
            Self::Agree => "agree",
            Self::PartiallyAgree => "partially_agree",
            Self::Disagree => "disagree",
            Self::IncomeReportedElsewhere => "income_reported_elsewhere",
            Self::NotMyIncome => "not_my_income",
            Self::LienPremature => "lien_premature",
            Self::InformationProvided => "information_provided",
        }
    }

    /// Parse a position code. Free text that is not a known code yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "paid_in_full" | "paid" | "fully_paid" => Some(Self::PaidInFull),
            "partial_payment" | "partially_paid" => Some(Self::PartialPayment),
            "payment_not_applied" | "misapplied_payment" => Some(Self::PaymentNotApplied),
            "disputes_balance" | "dispute" | "disputed" => Some(Self::DisputesBalance),
            "needs_time_to_pay" | "installment" | "payment_plan" => Some(Self::NeedsTimeToPay),
            "hardship" | "financial_hardship" => Some(Self::Hardship),
            "agree" | "agrees" => Some(Self::Agree),
            "partially_agree" | "partial_agree" => Some(Self::PartiallyAgree),
            "disagree" | "disagrees" => Some(Self::Disagree),
            "income_reported_elsewhere" | "reported_elsewhere" => {
                Some(Self::IncomeReportedElsewhere)
            }
            "not_my_income" | "not_taxpayer_income" => Some(Self::NotMyIncome),
            "lien_premature" | "premature" => Some(Self::LienPremature),
            "information_provided" | "providing_information" => Some(Self::InformationProvided),
            _ => None,
        }
    }

    /// Family-neutral canonical sentence.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::PaidInFull => {
                "The taxpayer has paid the balance in full and believes no amount remains due for the period at issue."
            }
            Self::PartialPayment => {
                "The taxpayer has made a partial payment toward the balance and requests that the account be updated to reflect it before any further action is taken."
            }
            Self::PaymentNotApplied => {
                "The taxpayer made a payment for this period that does not appear to have been applied to the account."
            }
            Self::DisputesBalance => {
                "The taxpayer disputes the balance shown on the notice and requests that it be reviewed and corrected."
            }
            Self::NeedsTimeToPay => {
                "The taxpayer does not dispute the balance but is unable to pay it in full at this time and wishes to resolve it through an installment arrangement."
            }
            Self::Hardship => {
                "Paying the balance at this time would leave the taxpayer unable to meet basic living expenses."
            }
            Self::Agree => {
                "The taxpayer agrees with the changes proposed in the notice."
            }
            Self::PartiallyAgree => {
                "The taxpayer agrees with some, but not all, of the changes proposed in the notice."
            }
            Self::Disagree => {
                "The taxpayer disagrees with the changes proposed in the notice."
            }
            Self::IncomeReportedElsewhere => {
                "The income identified in the notice was reported on the return, although on a different line or schedule than the information return suggests."
            }
            Self::NotMyIncome => {
                "The income identified in the notice does not belong to the taxpayer and was reported under the taxpayer's identification number in error."
            }
            Self::LienPremature => {
                "The notice of lien was filed before the taxpayer had a reasonable opportunity to resolve the balance."
            }
            Self::InformationProvided => {
                "The taxpayer is providing the information requested in the notice with this letter."
            }
        }
    }
}

/// The taxpayer's position as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxpayerPosition<'a> {
    /// A recognized position code.
    Code(Position),
    /// Free text that is not a recognized code.
    FreeText(&'a str),
    /// No position supplied.
    Unstated,
}

impl<'a> TaxpayerPosition<'a> {
    /// Classify the position carried by a context.
    pub fn from_context(ctx: &'a LetterContext) -> Self {
        match ctx.position() {
            None => Self::Unstated,
            Some(raw) => Position::parse(raw).map_or(Self::FreeText(raw), Self::Code),
        }
    }

    /// The recognized code, if any.
    pub fn code(&self) -> Option<Position> {
        match self {
            Self::Code(position) => Some(*position),
            _ => None,
        }
    }
}
