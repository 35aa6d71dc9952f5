//! Core data model: the letter context consumed by the engine and the
//! structured content it produces.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping of notices that share legal posture and reusable phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeFamily {
    /// Balance-due reminders and demands for payment.
    Collection,
    /// Automated underreporter and examination correspondence.
    Underreporter,
    /// Final notices of intent to levy carrying hearing rights.
    LevyIntent,
    /// Federal tax lien filings and lien warnings.
    Lien,
    /// Math-error, review, and information-request correspondence.
    General,
}

impl NoticeFamily {
    /// All families in registry order.
    pub const ALL: [NoticeFamily; 5] = [
        Self::Collection,
        Self::Underreporter,
        Self::LevyIntent,
        Self::Lien,
        Self::General,
    ];

    /// Returns the serialized identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Underreporter => "underreporter",
            Self::LevyIntent => "levy_intent",
            Self::Lien => "lien",
            Self::General => "general",
        }
    }

    /// Parse a family identifier, tolerating case, spaces, and hyphens.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_code(s).as_str() {
            "collection" | "balance_due" => Some(Self::Collection),
            "underreporter" | "examination" => Some(Self::Underreporter),
            "levy_intent" | "levy" => Some(Self::LevyIntent),
            "lien" => Some(Self::Lien),
            "general" | "general_correspondence" => Some(Self::General),
            _ => None,
        }
    }

    /// Human-readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Collection => "collection / balance due",
            Self::Underreporter => "underreporter / examination",
            Self::LevyIntent => "intent to levy",
            Self::Lien => "federal tax lien",
            Self::General => "general correspondence",
        }
    }
}

impl fmt::Display for NoticeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open-ended value carried in [`LetterContext::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
    /// Boolean flag.
    Flag(bool),
    /// Numeric value.
    Number(f64),
    /// Free text.
    Text(String),
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Everything the engine knows about one letter request.
///
/// Only `notice_id`, `family`, and `taxpayer_name` are required. Every other
/// field may be absent or blank; absence degrades to neutral phrasing and
/// never fails composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterContext {
    /// Notice identifier as printed on the notice (e.g. "CP14").
    pub notice_id: String,
    /// Family the caller believes the notice belongs to.
    pub family: NoticeFamily,
    /// Taxpayer name as it should appear in the letter.
    pub taxpayer_name: String,
    /// Mailing address, possibly multi-line.
    #[serde(default)]
    pub taxpayer_address: Option<String>,
    /// Masked identifier fragment (e.g. last four digits of an SSN).
    #[serde(default)]
    pub external_id: Option<String>,
    /// Date printed on the notice.
    #[serde(default)]
    pub notice_date: Option<String>,
    /// Tax year or period the notice concerns.
    #[serde(default)]
    pub tax_year: Option<String>,
    /// Amount stated on the notice, in dollars.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Date by which a response is requested.
    #[serde(default)]
    pub response_deadline: Option<String>,
    /// Taxpayer position: an enumerated code or free text.
    #[serde(default)]
    pub position: Option<String>,
    /// Discrepancy classifier for underreporter notices.
    #[serde(default)]
    pub discrepancy_type: Option<String>,
    /// Reason classifier (penalty relief basis, lien relief basis, and so on).
    #[serde(default)]
    pub reason: Option<String>,
    /// Free-text explanation, echoed verbatim.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Free-text narrative of actions already taken.
    #[serde(default)]
    pub prior_actions: Option<String>,
    /// Whether to include an "Applicable Authority" section.
    #[serde(default)]
    pub include_authority: bool,
    /// Levy-intent response posture.
    #[serde(default)]
    pub response_posture: Option<String>,
    /// Collection-alternative sub-type for the levy-intent posture.
    #[serde(default)]
    pub alternative_type: Option<String>,
    /// Dispute basis for the levy-intent posture.
    #[serde(default)]
    pub dispute_basis: Option<String>,
    /// Additional fields for forward extension.
    #[serde(default)]
    pub extra: BTreeMap<String, ExtraValue>,
}

impl LetterContext {
    /// Create a context carrying only the required fields.
    pub fn new(
        notice_id: impl Into<String>,
        family: NoticeFamily,
        taxpayer_name: impl Into<String>,
    ) -> Self {
        Self {
            notice_id: notice_id.into(),
            family,
            taxpayer_name: taxpayer_name.into(),
            taxpayer_address: None,
            external_id: None,
            notice_date: None,
            tax_year: None,
            amount: None,
            response_deadline: None,
            position: None,
            discrepancy_type: None,
            reason: None,
            explanation: None,
            prior_actions: None,
            include_authority: false,
            response_posture: None,
            alternative_type: None,
            dispute_basis: None,
            extra: BTreeMap::new(),
        }
    }

    /// Taxpayer name, trimmed.
    pub fn name(&self) -> &str {
        self.taxpayer_name.trim()
    }

    /// Address, if present and non-blank.
    pub fn address(&self) -> Option<&str> {
        present(&self.taxpayer_address)
    }

    /// External identifier, if present and non-blank.
    pub fn external_id(&self) -> Option<&str> {
        present(&self.external_id)
    }

    /// Notice date, if present and non-blank.
    pub fn notice_date(&self) -> Option<&str> {
        present(&self.notice_date)
    }

    /// Tax year, if present and non-blank.
    pub fn tax_year(&self) -> Option<&str> {
        present(&self.tax_year)
    }

    /// Amount, if present and finite.
    pub fn amount(&self) -> Option<f64> {
        self.amount.filter(|a| a.is_finite())
    }

    /// Response deadline, if present and non-blank.
    pub fn deadline(&self) -> Option<&str> {
        present(&self.response_deadline)
    }

    /// Raw position text, if present and non-blank.
    pub fn position(&self) -> Option<&str> {
        present(&self.position)
    }

    /// Discrepancy classifier, if present and non-blank.
    pub fn discrepancy(&self) -> Option<&str> {
        present(&self.discrepancy_type)
    }

    /// Reason classifier, if present and non-blank.
    pub fn reason(&self) -> Option<&str> {
        present(&self.reason)
    }

    /// Free-text explanation, if present and non-blank.
    pub fn explanation(&self) -> Option<&str> {
        present(&self.explanation)
    }

    /// Prior-actions narrative, if present and non-blank.
    pub fn prior_actions(&self) -> Option<&str> {
        present(&self.prior_actions)
    }

    /// Levy response posture, if present and non-blank.
    pub fn response_posture(&self) -> Option<&str> {
        present(&self.response_posture)
    }

    /// Collection-alternative sub-type, if present and non-blank.
    pub fn alternative_type(&self) -> Option<&str> {
        present(&self.alternative_type)
    }

    /// Dispute basis, if present and non-blank.
    pub fn dispute_basis(&self) -> Option<&str> {
        present(&self.dispute_basis)
    }

    /// Render an extra field as text. Blank text and `false` flags read as absent.
    pub fn extra_text(&self, key: &str) -> Option<String> {
        match self.extra.get(key)? {
            ExtraValue::Text(s) if s.trim().is_empty() => None,
            ExtraValue::Text(s) => Some(s.trim().to_owned()),
            ExtraValue::Flag(false) => None,
            other => Some(other.to_string()),
        }
    }

    /// Read an extra field as a boolean flag. Text "true"/"yes" counts as set.
    pub fn extra_flag(&self, key: &str) -> bool {
        match self.extra.get(key) {
            Some(ExtraValue::Flag(b)) => *b,
            Some(ExtraValue::Text(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "1"
            ),
            Some(ExtraValue::Number(n)) => *n != 0.0,
            None => false,
        }
    }

    /// Enclosures listed in `extra.enclosures`, split on newlines or semicolons.
    pub fn enclosures(&self) -> Vec<String> {
        self.extra_text("enclosures")
            .map(|raw| {
                raw.split(['\n', ';'])
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Fold a classifier into its canonical code form: lowercase, with spaces and
/// hyphens collapsed to underscores.
pub fn normalize_code(raw: &str) -> String {
    let mut code = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !code.is_empty() {
                code.push('_');
            }
            pending_sep = false;
            code.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    code
}

/// One heading-plus-body unit of a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Optional heading; case-insensitive key for default bodies.
    pub heading: Option<String>,
    /// Section body text.
    pub body: String,
}

impl Section {
    /// Create a headed section.
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            body: body.into(),
        }
    }

    /// Create a section without a heading.
    pub fn untitled(body: impl Into<String>) -> Self {
        Self {
            heading: None,
            body: body.into(),
        }
    }
}

/// Structured letter content produced by a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintResult {
    /// Subject ("Re:") line.
    pub re_line: String,
    /// Taxpayer identification block; the first line is the taxpayer name.
    pub taxpayer_block: String,
    /// Ordered body sections.
    pub sections: Vec<Section>,
    /// Closing and signature block.
    pub closing_block: String,
    /// Whether the notice type calls for certified mail.
    pub certified_mail: bool,
}
