//! The levy response posture state machine.

use rejoinder::family::levy::{
    AlternativeKind, DisputeBasis, LevyIntentLibrary, LevyResponse, ResponsePosture,
};
use rejoinder::family::FamilyLibrary;
use rejoinder::headings;
use rejoinder::seed::Seed;
use rejoinder::{LetterContext, NoticeFamily, Violation};

fn ctx(posture: Option<&str>, alternative: Option<&str>, basis: Option<&str>) -> LetterContext {
    let mut ctx = LetterContext::new("LT11", NoticeFamily::LevyIntent, "Jane Doe");
    ctx.response_posture = posture.map(str::to_owned);
    ctx.alternative_type = alternative.map(str::to_owned);
    ctx.dispute_basis = basis.map(str::to_owned);
    ctx
}

#[test]
fn absent_posture_defaults_to_hearing() {
    assert_eq!(
        LevyResponse::from_context(&ctx(None, None, None)),
        Ok(LevyResponse::Hearing)
    );
}

#[test]
fn valid_postures_carry_their_payload() {
    assert_eq!(
        LevyResponse::from_context(&ctx(Some("equivalent_hearing"), None, None)),
        Ok(LevyResponse::EquivalentHearing)
    );
    assert_eq!(
        LevyResponse::from_context(&ctx(Some("collection_alternative"), Some("offer"), None)),
        Ok(LevyResponse::CollectionAlternative(AlternativeKind::Offer))
    );
    assert_eq!(
        LevyResponse::from_context(&ctx(
            Some("dispute_liability"),
            None,
            Some("already_resolved")
        )),
        Ok(LevyResponse::Dispute(DisputeBasis::AlreadyResolved))
    );
}

#[test]
fn missing_alternative_type_is_named() {
    let err = LevyResponse::from_context(&ctx(Some("collection_alternative"), None, None))
        .expect_err("sub-type required");
    assert_eq!(
        err.violations,
        vec![Violation::MissingAlternativeType {
            posture: "collection_alternative".to_owned()
        }]
    );
    assert!(err.to_string().contains("requires alternative_type"));
}

#[test]
fn every_violation_is_reported_together() {
    let err = LevyResponse::from_context(&ctx(
        Some("dispute_liability"),
        Some("installment"),
        None,
    ))
    .expect_err("two violations");
    assert_eq!(
        err.violations,
        vec![
            Violation::UnexpectedAlternativeType {
                posture: "dispute_liability".to_owned()
            },
            Violation::MissingDisputeBasis {
                posture: "dispute_liability".to_owned()
            },
        ]
    );
    let message = err.to_string();
    assert!(message.contains("alternative_type is not used"));
    assert!(message.contains("requires dispute_basis"));
}

#[test]
fn sub_types_without_a_posture_are_unexpected() {
    let err = LevyResponse::from_context(&ctx(None, Some("offer"), Some("procedural_defect")))
        .expect_err("hearing uses neither");
    assert_eq!(err.violations.len(), 2);
}

#[test]
fn unknown_values_are_reported() {
    let err = LevyResponse::from_context(&ctx(Some("negotiate"), Some("barter"), None))
        .expect_err("unknown values");
    assert!(err
        .violations
        .contains(&Violation::UnknownPosture("negotiate".to_owned())));
    assert!(err
        .violations
        .contains(&Violation::UnknownAlternativeType("barter".to_owned())));
}

#[test]
fn library_validation_matches_state_machine() {
    let library = LevyIntentLibrary;
    assert!(library.validate(&ctx(None, None, None)).is_ok());
    assert!(library
        .validate(&ctx(Some("collection_alternative"), None, None))
        .is_err());
}

#[test]
fn posture_selects_heading_and_checklist() {
    let seed = Seed::from_raw("vhg8mu");
    let context = ctx(Some("collection_alternative"), Some("installment"), None);
    let response = LevyResponse::from_context(&context).expect("valid");
    assert_eq!(response.posture(), ResponsePosture::CollectionAlternative);

    let sections = LevyIntentLibrary.posture_sections(&seed, &context, &response);
    assert_eq!(sections.len(), 2);
    assert_eq!(
        sections[0].heading.as_deref(),
        Some(headings::COLLECTION_ALTERNATIVE)
    );
    assert_eq!(sections[1].heading.as_deref(), Some(headings::ENCLOSURE_CHECKLIST));
    assert!(sections[1].body.contains("Form 9465"));
    assert!(sections[1].body.contains("Form 12153"));
}

#[test]
fn posture_drives_asks_and_authorities() {
    let seed = Seed::from_raw("vhg8mu");
    let offer = ctx(Some("collection_alternative"), Some("offer"), None);
    let actions = LevyIntentLibrary.requested_actions(&seed, &offer);
    assert!(actions.body.contains("offer in compromise"));
    let cites = LevyIntentLibrary.authorities(&offer);
    assert!(cites.iter().any(|c| c.contains("7122")));

    let hearing = ctx(None, None, None);
    let cites = LevyIntentLibrary.authorities(&hearing);
    assert!(cites.iter().any(|c| c.contains("6330(e)")));
}
