//! Federal tax lien notices.

use crate::types::NoticeFamily;

use super::{specific, Blueprint};

pub(super) static BLUEPRINTS: [Blueprint; 2] = [
    Blueprint {
        notice: "L3172",
        aliases: &["LT3172"],
        title: "Notice of Federal Tax Lien Filing and Your Right to a Hearing",
        family: NoticeFamily::Lien,
        stage: "It reports that a notice of federal tax lien has been filed and opens the window to request a hearing on the filing.",
        certified_mail: true,
        expects_enclosures: true,
        specific: specific::standard,
    },
    Blueprint {
        notice: "LT39",
        aliases: &[],
        title: "Reminder of Overdue Taxes",
        family: NoticeFamily::Lien,
        stage: "It is a reminder of overdue taxes that warns a notice of federal tax lien may be filed.",
        certified_mail: false,
        expects_enclosures: false,
        specific: specific::standard,
    },
];
