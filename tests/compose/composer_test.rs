//! End-to-end composition through the registry.

use rejoinder::types::ExtraValue;
use rejoinder::{
    get_blueprint, registered_notices, ComposeError, LetterComposer, LetterContext,
    LetterGenerator, Letterhead, NoticeFamily, RegistryError,
};

const TODAY: &str = "March 1, 2024";

fn rich(notice: &str, family: NoticeFamily) -> LetterContext {
    let mut ctx = LetterContext::new(notice, family, "Jane Doe");
    ctx.external_id = Some("1234".to_owned());
    ctx.notice_date = Some("2024-01-05".to_owned());
    ctx.tax_year = Some("2022".to_owned());
    ctx.amount = Some(2450.0);
    ctx.response_deadline = Some("2024-02-05".to_owned());
    ctx.position = Some("paid_in_full".to_owned());
    ctx.include_authority = true;
    ctx.extra.insert(
        "signer_name".to_owned(),
        ExtraValue::Text("Pat Lee, CPA".to_owned()),
    );
    ctx
}

#[test]
fn composition_is_deterministic() {
    let composer = LetterComposer::default();
    for bp in registered_notices() {
        let ctx = rich(bp.notice, bp.family);
        let first = composer.compose(&ctx, TODAY).expect("compose");
        let second = composer.compose(&ctx, TODAY).expect("compose");
        assert_eq!(first, second, "{}", bp.notice);
        let other = LetterComposer::default().compose(&ctx, TODAY).expect("compose");
        assert_eq!(first.text, other.text);
    }
}

#[test]
fn minimal_context_composes_every_notice() {
    let composer = LetterComposer::default();
    for bp in registered_notices() {
        let ctx = LetterContext::new(bp.notice, bp.family, "Jane Doe");
        let letter = composer.compose(&ctx, TODAY).expect("minimal context");
        assert_eq!(letter.notice, bp.notice);
        assert_eq!(letter.certified_mail, bp.certified_mail);
        assert!(letter.text.starts_with(TODAY));
        assert!(!letter.text.contains("\n\n\n\n"), "{}: empty section", bp.notice);
        assert!(letter.text.ends_with("Jane Doe"));
    }
}

fn assert_no_doubled_article(notice: &str, text: &str) {
    let lower = text.to_lowercase();
    for doubled in ["the a ", "the an ", "the the "] {
        assert!(!lower.contains(doubled), "{notice}: '{doubled}' in\n{text}");
    }
}

#[test]
fn minimal_context_reads_grammatically() {
    let composer = LetterComposer::default();
    for bp in registered_notices() {
        let ctx = LetterContext::new(bp.notice, bp.family, "Jane Doe");
        let letter = composer.compose(&ctx, TODAY).expect("minimal context");
        assert_no_doubled_article(bp.notice, &letter.text);
    }
}

#[test]
fn installment_posture_without_amount_reads_grammatically() {
    let mut ctx = LetterContext::new("LT11", NoticeFamily::LevyIntent, "Jane Doe");
    ctx.response_posture = Some("collection_alternative".to_owned());
    ctx.alternative_type = Some("installment".to_owned());
    let letter = LetterComposer::default().compose(&ctx, TODAY).expect("compose");
    assert_no_doubled_article("LT11", &letter.text);
    assert!(letter.text.contains("pay the balance shown on the notice"));
}

#[test]
fn blank_name_leaves_taxpayer_phrase_alone() {
    let composer = LetterComposer::default();

    let mut with_address = LetterContext::new("CP14", NoticeFamily::Collection, "   ");
    with_address.taxpayer_address = Some("12 Elm St".to_owned());
    let letter = composer.compose(&with_address, TODAY).expect("compose");
    assert_eq!(letter.text.matches("12 Elm St").count(), 1, "{}", letter.text);

    let mut with_id = LetterContext::new("CP14", NoticeFamily::Collection, "");
    with_id.external_id = Some("1234".to_owned());
    let letter = composer.compose(&with_id, TODAY).expect("compose");
    assert_eq!(
        letter.text.matches("Taxpayer ID: ending in 1234").count(),
        2,
        "{}",
        letter.text
    );
    assert!(!letter.text.contains("1234's"));
}

#[test]
fn certified_marker_follows_the_notice() {
    let composer = LetterComposer::default();
    let lt11 = composer
        .compose(&LetterContext::new("LT11", NoticeFamily::LevyIntent, "Jane Doe"), TODAY)
        .expect("compose");
    assert!(lt11.certified_mail);
    assert!(lt11.text.contains("\nVIA CERTIFIED MAIL\n"));

    let cp14 = composer
        .compose(&LetterContext::new("CP14", NoticeFamily::Collection, "Jane Doe"), TODAY)
        .expect("compose");
    assert!(!cp14.certified_mail);
    assert!(!cp14.text.contains("VIA CERTIFIED MAIL"));
}

#[test]
fn context_changes_move_wording_but_not_structure() {
    let composer = LetterComposer::default();
    let a = composer
        .compose(&rich("CP14", NoticeFamily::Collection), TODAY)
        .expect("compose");
    let mut other = rich("CP14", NoticeFamily::Collection);
    other.taxpayer_name = "John Doe".to_owned();
    let b = composer.compose(&other, TODAY).expect("compose");
    let headings = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.is_empty() && line.chars().all(|c| !c.is_lowercase()))
            .filter(|line| line.chars().any(char::is_alphabetic))
            .map(str::to_owned)
            .collect()
    };
    assert_eq!(headings(&a.text), headings(&b.text));
}

#[test]
fn unknown_notice_fails_with_registry_error() {
    let ctx = LetterContext::new("NOT_A_NOTICE", NoticeFamily::General, "Jane Doe");
    let err = LetterComposer::default()
        .compose(&ctx, TODAY)
        .expect_err("unregistered");
    assert_eq!(
        err,
        ComposeError::Registry(RegistryError::NotFound("NOT_A_NOTICE".to_owned()))
    );
    assert!(err.to_string().contains("NOT_A_NOTICE"));
}

#[test]
fn levy_precondition_failure_aborts_composition() {
    let mut ctx = LetterContext::new("LT11", NoticeFamily::LevyIntent, "Jane Doe");
    ctx.response_posture = Some("hearing".to_owned());
    ctx.alternative_type = Some("installment".to_owned());
    ctx.dispute_basis = Some("incorrect_balance".to_owned());
    let err = LetterComposer::default()
        .compose(&ctx, TODAY)
        .expect_err("sub-types unused by hearing");
    let ComposeError::Precondition(precondition) = err else {
        panic!("expected a precondition error");
    };
    assert_eq!(precondition.violations.len(), 2);
}

#[test]
fn letterhead_and_signer_are_used() {
    let composer = LetterComposer::new(Letterhead {
        recipient_lines: vec!["Department of the Treasury".to_owned()],
        greeting: "Dear Sir or Madam:".to_owned(),
    });
    let letter = composer
        .generate(&rich("CP2000", NoticeFamily::Underreporter), TODAY)
        .expect("compose");
    assert!(letter.text.contains("\nDepartment of the Treasury\n"));
    assert!(letter.text.contains("\nDear Sir or Madam:\n"));
    assert!(letter.text.contains("Sincerely,\n\n\nPat Lee, CPA"));
    assert!(letter.text.contains("APPLICABLE AUTHORITY"));
}

#[test]
fn notice_alias_composes_canonical_notice() {
    let ctx = LetterContext::new("Letter 1058", NoticeFamily::LevyIntent, "Jane Doe");
    let letter = LetterComposer::default().compose(&ctx, TODAY).expect("compose");
    assert_eq!(letter.notice, "L1058");
    assert!(letter.text.contains("Notice L1058"));
    assert!(!letter.text.contains("Letter 1058"), "{}", letter.text);
    assert_eq!(
        letter.certified_mail,
        get_blueprint("L1058").expect("registered").certified_mail
    );
}
