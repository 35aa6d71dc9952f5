//! Blueprint builds: section order, notice-specific sections, and totality.

use rejoinder::compose::normalize::{has_canonical_default, normalize_section};
use rejoinder::headings;
use rejoinder::types::ExtraValue;
use rejoinder::{derive_seed, get_blueprint, registered_notices, Blueprint, LetterContext};

fn minimal(bp: &Blueprint) -> LetterContext {
    LetterContext::new(bp.notice, bp.family, "Jane Doe")
}

fn full(bp: &Blueprint) -> LetterContext {
    let mut ctx = minimal(bp);
    ctx.taxpayer_address = Some("12 Elm St\nSpringfield, IL 62701".to_owned());
    ctx.external_id = Some("1234".to_owned());
    ctx.notice_date = Some("2024-01-05".to_owned());
    ctx.tax_year = Some("2022".to_owned());
    ctx.amount = Some(1234.56);
    ctx.response_deadline = Some("2024-02-05".to_owned());
    ctx.position = Some("disputes_balance".to_owned());
    ctx.discrepancy_type = Some("duplicate_reporting".to_owned());
    ctx.reason = Some("reasonable_cause".to_owned());
    ctx.explanation = Some("The return was filed on time.".to_owned());
    ctx.prior_actions = Some("Paid $500 on December 1, 2023".to_owned());
    ctx.include_authority = true;
    ctx.extra.insert(
        "enclosures".to_owned(),
        ExtraValue::Text("Copy of the notice; Bank statement".to_owned()),
    );
    ctx
}

fn headings_of(ctx: &LetterContext, bp: &Blueprint) -> Vec<String> {
    bp.build(ctx)
        .expect("build")
        .sections
        .into_iter()
        .filter_map(|s| s.heading)
        .collect()
}

#[test]
fn minimal_context_builds_for_every_notice() {
    for bp in registered_notices() {
        let result = bp.build(&minimal(bp)).expect("minimal context");
        assert_eq!(result.certified_mail, bp.certified_mail);
        assert!(result.taxpayer_block.starts_with("Jane Doe"));
        assert!(result.re_line.contains(bp.notice));
        for section in &result.sections {
            let normalized = normalize_section(section, "Jane Doe");
            assert!(!normalized.body.trim().is_empty(), "{}: {:?}", bp.notice, section.heading);
        }
    }
}

#[test]
fn sections_follow_global_family_specific_actions_order() {
    for bp in registered_notices() {
        for ctx in [minimal(bp), full(bp)] {
            let names = headings_of(&ctx, bp);
            assert_eq!(names[0], headings::PURPOSE, "{}", bp.notice);
            assert_eq!(names[1], headings::IDENTIFIERS, "{}", bp.notice);
            assert_eq!(
                names.last().map(String::as_str),
                Some(headings::REQUESTED_ACTIONS),
                "{}",
                bp.notice
            );
            assert!(names.iter().any(|h| h == headings::NOTICE_STAGE));
            assert_eq!(
                names.iter().any(|h| h == headings::AUTHORITY),
                ctx.include_authority
            );
        }
    }
}

#[test]
fn notice_specific_sections_number_one_to_four() {
    for bp in registered_notices() {
        for ctx in [minimal(bp), full(bp)] {
            let seed = derive_seed(&[
                Some(ctx.notice_id.as_str()),
                Some(ctx.name()),
                ctx.external_id(),
                ctx.notice_date(),
            ]);
            let family = bp.library().sections(&seed, &ctx).len();
            let global = if ctx.include_authority { 3 } else { 2 };
            let total = bp.build(&ctx).expect("build").sections.len();
            let specific = total
                .saturating_sub(global)
                .saturating_sub(family)
                .saturating_sub(1);
            assert!((1..=4).contains(&specific), "{}: {specific}", bp.notice);
        }
    }
}

#[test]
fn every_emitted_heading_has_a_canonical_default() {
    for bp in registered_notices() {
        for ctx in [minimal(bp), full(bp)] {
            for heading in headings_of(&ctx, bp) {
                assert!(has_canonical_default(&heading), "{}: {heading}", bp.notice);
                assert!(headings::ALL.contains(&heading.as_str()), "{heading}");
            }
        }
    }
}

#[test]
fn deadline_and_enclosures_add_timing_and_documentation() {
    let bp = get_blueprint("CP2000").expect("registered");
    let minimal_headings = headings_of(&minimal(bp), bp);
    assert!(!minimal_headings.iter().any(|h| h == headings::RESPONSE_TIMING));
    assert!(minimal_headings.iter().any(|h| h == headings::DOCUMENTATION));

    let full_result = bp.build(&full(bp)).expect("build");
    let timing = full_result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some(headings::RESPONSE_TIMING))
        .expect("timing section");
    assert!(timing.body.contains("February 5, 2024"));
    let docs = full_result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some(headings::DOCUMENTATION))
        .expect("documentation section");
    assert!(docs.body.contains("- Bank statement"));
    assert!(full_result.closing_block.contains("Enclosures (2):"));
}

#[test]
fn statutory_notice_states_petition_deadline() {
    let bp = get_blueprint("CP3219A").expect("registered");
    let result = bp.build(&full(bp)).expect("build");
    let court = result
        .sections
        .iter()
        .find(|s| s.heading.as_deref() == Some(headings::TAX_COURT))
        .expect("tax court section");
    assert!(court.body.contains("April 4, 2024"));
}

#[test]
fn notice_specific_extras() {
    let cp12 = get_blueprint("CP12").expect("registered");
    assert!(headings_of(&minimal(cp12), cp12)
        .iter()
        .any(|h| h == headings::REFUND_STATUS));

    let l566 = get_blueprint("L566").expect("registered");
    assert!(headings_of(&minimal(l566), l566)
        .iter()
        .any(|h| h == headings::EXAM_SCOPE));

    let l3172 = get_blueprint("L3172").expect("registered");
    assert!(headings_of(&minimal(l3172), l3172)
        .iter()
        .any(|h| h == headings::LIEN_RELIEF));
}

#[test]
fn levy_notices_carry_posture_and_checklist() {
    for id in ["LT11", "L1058", "CP90", "CP297"] {
        let bp = get_blueprint(id).expect("registered");
        let result = bp.build(&minimal(bp)).expect("build");
        let checklist = result
            .sections
            .iter()
            .find(|s| s.heading.as_deref() == Some(headings::ENCLOSURE_CHECKLIST))
            .expect("checklist");
        assert!(checklist.body.contains("Form 12153"), "{id}");
        assert!(result
            .sections
            .iter()
            .any(|s| s.heading.as_deref() == Some(headings::HEARING_REQUEST)));
    }
}

#[test]
fn invalid_levy_posture_fails_without_output() {
    let bp = get_blueprint("LT11").expect("registered");
    let mut ctx = minimal(bp);
    ctx.response_posture = Some("collection_alternative".to_owned());
    let err = bp.build(&ctx).expect_err("missing sub-type");
    assert_eq!(err.violations.len(), 1);
    assert!(err.to_string().contains("alternative_type"));
}

#[test]
fn registered_family_wins_over_context_family() {
    let bp = get_blueprint("CP14").expect("registered");
    let mut ctx = minimal(bp);
    ctx.family = rejoinder::NoticeFamily::General;
    let names = headings_of(&ctx, bp);
    assert!(names.iter().any(|h| h == headings::ACCOUNT_STATUS));
}

#[test]
fn identifiers_list_only_present_fields() {
    let bp = get_blueprint("CP14").expect("registered");
    let result = bp.build(&minimal(bp)).expect("build");
    let ids = &result.sections[1].body;
    assert!(ids.contains("Taxpayer: Jane Doe"));
    assert!(!ids.contains("Tax year"));
    assert!(!ids.contains("Taxpayer ID"));

    let result = bp.build(&full(bp)).expect("build");
    let ids = &result.sections[1].body;
    assert!(ids.contains("Taxpayer ID: ending in 1234"));
    assert!(ids.contains("Tax year: 2022"));
    assert!(ids.contains("$1,234.56"));
}
