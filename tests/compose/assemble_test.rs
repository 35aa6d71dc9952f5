//! Assembly layout and section normalization.

use rejoinder::compose::{assemble, Letterhead, CERTIFIED_MAIL_MARKER};
use rejoinder::{BlueprintResult, Section};

fn result(sections: Vec<Section>) -> BlueprintResult {
    BlueprintResult {
        re_line: "Re: Response to Notice CP14 (Balance Due Notice)".to_owned(),
        taxpayer_block: "Jane Doe\n12 Elm St\nTaxpayer ID: ending in 1234".to_owned(),
        sections,
        closing_block: "Thank you.\n\nSincerely,\n\n\nJane Doe".to_owned(),
        certified_mail: false,
    }
}

#[test]
fn name_substitution_replaces_only_the_first_occurrence() {
    let text = assemble(
        &result(vec![Section::new(
            "Taxpayer Position",
            "The taxpayer paid the balance. The taxpayer asks for a refund.",
        )]),
        "March 1, 2024",
        false,
        &Letterhead::default(),
    );
    assert!(text.contains("Jane Doe paid the balance. The taxpayer asks for a refund."));
}

#[test]
fn substitution_is_per_section() {
    let text = assemble(
        &result(vec![
            Section::new("Background", "the taxpayer received the notice."),
            Section::new("Account Status", "The taxpayer paid."),
        ]),
        "March 1, 2024",
        false,
        &Letterhead::default(),
    );
    assert!(text.contains("BACKGROUND\n\nJane Doe received the notice.\n"));
    assert!(text.contains("ACCOUNT STATUS\n\nJane Doe paid.\n"));
}

#[test]
fn divider_lines_are_removed_and_blank_bodies_defaulted() {
    let text = assemble(
        &result(vec![
            Section::new("Background", "----------\nReceived the notice.\n=========="),
            Section::new("Response Timing", "***"),
            Section::new("Unusual Heading", ""),
        ]),
        "March 1, 2024",
        false,
        &Letterhead::default(),
    );
    assert!(text.contains("BACKGROUND\n\nReceived the notice.\n\n"));
    assert!(text.contains("RESPONSE TIMING\n\nJane Doe is responding within the time allowed"));
    assert!(text.contains("UNUSUAL HEADING\n\nJane Doe asks that this matter be reviewed"));
    assert!(!text.contains("---"));
}

#[test]
fn header_precedes_sections_and_closing_ends_letter() {
    let text = assemble(
        &result(vec![Section::new("Background", "Body.")]),
        "March 1, 2024",
        true,
        &Letterhead::default(),
    );
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "March 1, 2024");
    assert_eq!(lines[1], CERTIFIED_MAIL_MARKER);
    assert_eq!(lines[3], "Internal Revenue Service");
    assert_eq!(lines[5], "Re: Response to Notice CP14 (Balance Due Notice)");
    assert_eq!(lines[7], "Jane Doe");
    assert_eq!(lines[11], "To Whom It May Concern:");
    assert_eq!(lines[13], "BACKGROUND");
    assert_eq!(lines[15], "Body.");
    assert!(text.ends_with("Sincerely,\n\n\nJane Doe"));
}
