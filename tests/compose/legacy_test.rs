//! The deprecated fixed-wording generators.

#![allow(deprecated)]

use rejoinder::legacy::{LegacyGenerator, LegacyNotice};
use rejoinder::{ComposeError, LetterContext, LetterGenerator, Letterhead, NoticeFamily};

#[test]
fn legacy_generators_cover_three_notices() {
    for notice in LegacyNotice::ALL {
        let generator = LegacyGenerator::for_notice(notice.as_str(), Letterhead::default())
            .expect("legacy generator");
        assert_eq!(generator.notice(), notice);
    }
}

#[test]
fn legacy_output_is_deterministic_and_complete() {
    let cases = [
        ("CP14", NoticeFamily::Collection, false),
        ("CP2000", NoticeFamily::Underreporter, false),
        ("LT11", NoticeFamily::LevyIntent, true),
    ];
    for (id, family, certified) in cases {
        let generator =
            LegacyGenerator::for_notice(id, Letterhead::default()).expect("legacy generator");
        let ctx = LetterContext::new(id, family, "Jane Doe");
        let first = generator.generate(&ctx, "May 1, 2024").expect("compose");
        let second = generator.generate(&ctx, "May 1, 2024").expect("compose");
        assert_eq!(first, second);
        assert_eq!(first.certified_mail, certified, "{id}");
        assert!(first.text.contains("REQUESTED ACTIONS"));
        assert!(!first.text.contains("\n\n\n\n"), "{id}: empty section");
    }
}

#[test]
fn legacy_and_blueprint_share_the_error_contract() {
    let generator = LegacyGenerator::new(LegacyNotice::Lt11, Letterhead::default());
    let mut ctx = LetterContext::new("LT11", NoticeFamily::LevyIntent, "Jane Doe");
    ctx.dispute_basis = Some("procedural_defect".to_owned());
    let err = generator.generate(&ctx, "May 1, 2024").expect_err("unused basis");
    assert!(matches!(err, ComposeError::Precondition(_)));
}
