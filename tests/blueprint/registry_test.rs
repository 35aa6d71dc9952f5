//! Registry lookup, completeness, and the certified-mail policy.

use rejoinder::{get_blueprint, registered_notices, NoticeFamily, RegistryError};

const SUPPORTED: [(&str, NoticeFamily, bool); 19] = [
    ("CP14", NoticeFamily::Collection, false),
    ("CP501", NoticeFamily::Collection, false),
    ("CP503", NoticeFamily::Collection, false),
    ("CP504", NoticeFamily::Collection, true),
    ("LT11", NoticeFamily::LevyIntent, true),
    ("L1058", NoticeFamily::LevyIntent, true),
    ("CP90", NoticeFamily::LevyIntent, true),
    ("CP297", NoticeFamily::LevyIntent, true),
    ("L3172", NoticeFamily::Lien, true),
    ("LT39", NoticeFamily::Lien, false),
    ("CP2000", NoticeFamily::Underreporter, false),
    ("CP2501", NoticeFamily::Underreporter, false),
    ("L566", NoticeFamily::Underreporter, false),
    ("L525", NoticeFamily::Underreporter, false),
    ("CP3219A", NoticeFamily::Underreporter, true),
    ("CP05", NoticeFamily::General, false),
    ("CP11", NoticeFamily::General, false),
    ("CP12", NoticeFamily::General, false),
    ("L12C", NoticeFamily::General, false),
];

#[test]
fn every_supported_notice_is_registered() {
    for (id, family, certified) in SUPPORTED {
        let bp = get_blueprint(id).expect("registered notice");
        assert_eq!(bp.notice, id);
        assert_eq!(bp.family, family, "{id}");
        assert_eq!(bp.certified_mail, certified, "{id}");
        assert!(!bp.title.is_empty() && !bp.stage.is_empty(), "{id}");
    }
    assert_eq!(registered_notices().count(), SUPPORTED.len());
}

#[test]
fn unregistered_notice_is_a_named_error() {
    let err = get_blueprint("NOT_A_NOTICE").expect_err("not registered");
    assert_eq!(err, RegistryError::NotFound("NOT_A_NOTICE".to_owned()));
    assert_eq!(
        err.to_string(),
        "no blueprint registered for notice 'NOT_A_NOTICE'"
    );
    assert!(get_blueprint("").is_err());
}

#[test]
fn lookups_tolerate_common_spellings() {
    assert_eq!(get_blueprint("cp14").expect("lower case").notice, "CP14");
    assert_eq!(get_blueprint(" CP-504 ").expect("hyphen").notice, "CP504");
    assert_eq!(get_blueprint("Letter 1058").expect("long form").notice, "L1058");
    assert_eq!(get_blueprint("LTR1058").expect("alias").notice, "L1058");
    assert_eq!(get_blueprint("cp 3219a").expect("suffix").notice, "CP3219A");
}

#[test]
fn final_and_levy_notices_require_certified_mail() {
    for bp in registered_notices() {
        if bp.family == NoticeFamily::LevyIntent {
            assert!(bp.certified_mail, "{}", bp.notice);
        }
    }
    for reminder in ["CP14", "CP501", "CP503", "LT39"] {
        assert!(!get_blueprint(reminder).expect("registered").certified_mail);
    }
}
