//! Underreporter and examination notices.

use crate::seed::Seed;
use crate::types::{LetterContext, NoticeFamily, Section};

use super::{specific, Blueprint};

fn examination_contact(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    let mut sections = vec![specific::stage(bp, seed, ctx), specific::exam_scope(ctx)];
    sections.extend(specific::timing(bp, seed, ctx));
    sections.extend(specific::documentation(bp, seed, ctx));
    sections
}

fn deficiency(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    let mut sections = vec![specific::stage(bp, seed, ctx)];
    sections.extend(specific::timing(bp, seed, ctx));
    sections.push(specific::tax_court(ctx));
    sections.extend(specific::documentation(bp, seed, ctx));
    sections
}

pub(super) static BLUEPRINTS: [Blueprint; 5] = [
    Blueprint {
        notice: "CP2000",
        aliases: &[],
        title: "Proposed Changes to Your Tax Return",
        family: NoticeFamily::Underreporter,
        stage: "It is an automated underreporter proposal; no assessment has been made and the proposal can be resolved by response.",
        certified_mail: false,
        expects_enclosures: true,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP2501",
        aliases: &[],
        title: "Request for Explanation of Income Discrepancy",
        family: NoticeFamily::Underreporter,
        stage: "It is a preliminary inquiry into a discrepancy between the return and information returns, issued before any proposed change.",
        certified_mail: false,
        expects_enclosures: true,
        specific: specific::standard,
    },
    Blueprint {
        notice: "L566",
        aliases: &["LTR566"],
        title: "Examination Initial Contact Letter",
        family: NoticeFamily::Underreporter,
        stage: "It is the initial contact letter for a correspondence examination.",
        certified_mail: false,
        expects_enclosures: true,
        specific: examination_contact,
    },
    Blueprint {
        notice: "L525",
        aliases: &["LTR525"],
        title: "General 30-Day Letter",
        family: NoticeFamily::Underreporter,
        stage: "It transmits the examination report and gives 30 days to agree, provide more information, or request an appeals conference.",
        certified_mail: false,
        expects_enclosures: true,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP3219A",
        aliases: &["L3219"],
        title: "Statutory Notice of Deficiency",
        family: NoticeFamily::Underreporter,
        stage: "It is the statutory notice of deficiency and the final step before assessment of the proposed tax.",
        certified_mail: true,
        expects_enclosures: true,
        specific: deficiency,
    },
];
