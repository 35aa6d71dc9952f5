//! Collection / balance-due notices.

use crate::types::NoticeFamily;

use super::{specific, Blueprint};

pub(super) static BLUEPRINTS: [Blueprint; 4] = [
    Blueprint {
        notice: "CP14",
        aliases: &[],
        title: "Balance Due Notice",
        family: NoticeFamily::Collection,
        stage: "It is the first notice of a balance due and the first step in the collection sequence.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP501",
        aliases: &[],
        title: "Reminder of Balance Due",
        family: NoticeFamily::Collection,
        stage: "It is a reminder that follows the initial balance-due notice.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP503",
        aliases: &[],
        title: "Second Reminder of Balance Due",
        family: NoticeFamily::Collection,
        stage: "It is the second reminder in the collection sequence and precedes any notice of intent to levy.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
    Blueprint {
        notice: "CP504",
        aliases: &[],
        title: "Notice of Intent to Levy",
        family: NoticeFamily::Collection,
        stage: "It is the final balance-due notice before levy and warns that state tax refunds and other property may be levied.",
        certified_mail: true,
        expects_enclosures: false,
        specific: specific::standard,
    },
];
