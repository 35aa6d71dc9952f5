//! General correspondence notices.

use crate::seed::Seed;
use crate::types::{LetterContext, NoticeFamily, Section};

use super::{specific, Blueprint};

fn refund_adjustment(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    let mut sections = vec![specific::stage(bp, seed, ctx), specific::refund_status(ctx)];
    sections.extend(specific::timing(bp, seed, ctx));
    sections
}

pub(super) static BLUEPRINTS: [Blueprint; 4] = [
    Blueprint {
        notice: "CP05",
        aliases: &[],
        title: "Return Under Review",
        family: NoticeFamily::General,
        stage: "It reports that the return is being reviewed to verify income, withholding, or credits before any refund is issued.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP11",
        aliases: &[],
        title: "Math Error Notice, Balance Due",
        family: NoticeFamily::General,
        stage: "It reports changes made to correct a claimed miscalculation that resulted in a balance due.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP12",
        aliases: &[],
        title: "Math Error Notice, Refund Changed",
        family: NoticeFamily::General,
        stage: "It reports changes made to correct a claimed miscalculation that changed the refund on the return.",
        certified_mail: false,
        expects_enclosures: false,
        specific: refund_adjustment,
    },
    Blueprint {
        notice: "L12C",
        aliases: &["LTR12C"],
        title: "Request for Information Needed to Process the Return",
        family: NoticeFamily::General,
        stage: "It asks for information needed to finish processing the return.",
        certified_mail: false,
        expects_enclosures: true,
        specific: specific::standard,
    },
];
