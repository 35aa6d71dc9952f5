//! Final notices of intent to levy with hearing rights.

use crate::family::levy::{LevyIntentLibrary, LevyResponse};
use crate::seed::Seed;
use crate::types::{LetterContext, NoticeFamily, Section};

use super::{specific, Blueprint};

/// Stage, timing, the posture section, and its enclosure checklist.
fn hearing_notice(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    // Blueprint::build validates the posture before this runs.
    let response = LevyResponse::from_context(ctx).unwrap_or_default();
    let mut sections = vec![specific::stage(bp, seed, ctx)];
    sections.extend(specific::timing(bp, seed, ctx));
    sections.extend(LevyIntentLibrary.posture_sections(seed, ctx, &response));
    sections
}

pub(super) static BLUEPRINTS: [Blueprint; 4] = [
    Blueprint {
        notice: "LT11",
        aliases: &[],
        title: "Final Notice of Intent to Levy and Notice of Your Right to a Hearing",
        family: NoticeFamily::LevyIntent,
        stage: "It is the final notice before levy and gives 30 days to request a collection due process hearing.",
        certified_mail: true,
        expects_enclosures: true,
        specific: hearing_notice,
    },
    Blueprint {
        notice: "L1058",
        aliases: &["LTR1058"],
        title: "Final Notice of Intent to Levy and Notice of Your Right to a Hearing",
        family: NoticeFamily::LevyIntent,
        stage: "It is the final notice before levy, issued by a revenue officer, and gives 30 days to request a collection due process hearing.",
        certified_mail: true,
        expects_enclosures: true,
        specific: hearing_notice,
    },
    Blueprint {
        notice: "CP90",
        aliases: &[],
        title: "Final Notice of Intent to Seize Your Property or Rights to Property",
        family: NoticeFamily::LevyIntent,
        stage: "It is the final notice before levy on property and federal payments and gives 30 days to request a collection due process hearing.",
        certified_mail: true,
        expects_enclosures: true,
        specific: hearing_notice,
    },
    Blueprint {
        notice: "CP297",
        aliases: &[],
        title: "Notice of Levy and Notice of Your Right to a Hearing",
        family: NoticeFamily::LevyIntent,
        stage: "It reports a levy on federal payments and gives 30 days to request a collection due process hearing.",
        certified_mail: true,
        expects_enclosures: true,
        specific: hearing_notice,
    },
];
