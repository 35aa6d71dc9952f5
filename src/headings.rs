//! Section headings emitted by the blueprints.
//!
//! Headings double as case-insensitive keys for the default bodies applied
//! during assembly, so every heading used anywhere in the crate lives here.

/// Opening statement of purpose.
pub const PURPOSE: &str = "Purpose of This Letter";
/// Identifiers block listing only the fields supplied.
pub const IDENTIFIERS: &str = "Taxpayer Identifiers";
/// Optional statutory and regulatory references.
pub const AUTHORITY: &str = "Applicable Authority";

/// Family background narrative.
pub const BACKGROUND: &str = "Background";
/// Normalized taxpayer position.
pub const POSITION: &str = "Taxpayer Position";
/// Account status narrative (collection, levy, lien).
pub const ACCOUNT_STATUS: &str = "Account Status";
/// Supporting information narrative (underreporter, general).
pub const SUPPORTING_INFORMATION: &str = "Supporting Information";
/// Verbatim taxpayer explanation.
pub const EXPLANATION: &str = "Explanation";
/// Penalty relief request (collection).
pub const PENALTY_RELIEF: &str = "Penalty Relief";
/// Discrepancy analysis (underreporter).
pub const DISCREPANCY: &str = "Discrepancy Analysis";
/// Lien relief request (lien).
pub const LIEN_RELIEF: &str = "Lien Relief Requested";
/// Closing ask-list appended by every family.
pub const REQUESTED_ACTIONS: &str = "Requested Actions";

/// Names the specific notice and its place in the notice sequence.
pub const NOTICE_STAGE: &str = "Notice Stage and Purpose";
/// Urgency and timing keyed off the response deadline.
pub const RESPONSE_TIMING: &str = "Response Timing";
/// Documents enclosed with the response.
pub const DOCUMENTATION: &str = "Documentation Provided";
/// Examination scope for examination contact letters.
pub const EXAM_SCOPE: &str = "Examination Scope";
/// Collection due process hearing request.
pub const HEARING_REQUEST: &str = "Hearing Request";
/// Equivalent hearing request after the hearing window.
pub const EQUIVALENT_HEARING: &str = "Equivalent Hearing Request";
/// Collection alternative proposal.
pub const COLLECTION_ALTERNATIVE: &str = "Collection Alternative Proposal";
/// Basis for disputing the liability.
pub const BASIS_FOR_DISPUTE: &str = "Basis for Dispute";
/// Posture-specific list of enclosures.
pub const ENCLOSURE_CHECKLIST: &str = "Enclosure Checklist";
/// Preservation of the right to petition the Tax Court.
pub const TAX_COURT: &str = "Tax Court Rights";
/// Refund status for refund-affecting adjustments.
pub const REFUND_STATUS: &str = "Refund Status";

/// Every heading the blueprints can emit.
pub const ALL: [&str; 23] = [
    PURPOSE,
    IDENTIFIERS,
    AUTHORITY,
    BACKGROUND,
    POSITION,
    ACCOUNT_STATUS,
    SUPPORTING_INFORMATION,
    EXPLANATION,
    PENALTY_RELIEF,
    DISCREPANCY,
    LIEN_RELIEF,
    REQUESTED_ACTIONS,
    NOTICE_STAGE,
    RESPONSE_TIMING,
    DOCUMENTATION,
    EXAM_SCOPE,
    HEARING_REQUEST,
    EQUIVALENT_HEARING,
    COLLECTION_ALTERNATIVE,
    BASIS_FOR_DISPUTE,
    ENCLOSURE_CHECKLIST,
    TAX_COURT,
    REFUND_STATUS,
];
