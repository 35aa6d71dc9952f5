//! Building blocks for notice-specific sections.

use crate::family::{notice_reference, period_phrase, slot};
use crate::format;
use crate::headings;
use crate::seed::{pick, Seed};
use crate::types::{LetterContext, Section};

use super::Blueprint;

/// Stage section, timing when a deadline is known, and documentation when
/// the notice expects enclosures.
pub(super) fn standard(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    let mut sections = vec![stage(bp, seed, ctx)];
    sections.extend(timing(bp, seed, ctx));
    sections.extend(documentation(bp, seed, ctx));
    sections
}

pub(super) fn stage(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Section {
    let opener = pick(
        seed,
        slot::NOTICE_STAGE,
        &["The notice at issue is", "This response addresses"],
    );
    Section::new(
        headings::NOTICE_STAGE,
        format!(
            "{opener} {}, the {}. {}",
            notice_reference(ctx),
            bp.title,
            bp.stage
        ),
    )
}

const FINAL_TIMING: [&str; 2] = [
    "This response is submitted before that date to preserve every right the notice describes, including any right to a hearing.",
    "Because the notice is a final notice, this response is sent before that date so that no right described in the notice is lost.",
];

const ROUTINE_TIMING: [&str; 2] = [
    "This response is submitted within that period. If more time is needed to resolve the matter, the taxpayer asks that the account be held open rather than advanced to the next notice.",
    "The taxpayer is responding within the time requested and asks that no further notices issue while this response is considered.",
];

pub(super) fn timing(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Option<Section> {
    let deadline = format::display_date(ctx.deadline()?);
    let follow = if bp.certified_mail {
        pick(seed, slot::TIMING, &FINAL_TIMING)
    } else {
        pick(seed, slot::TIMING, &ROUTINE_TIMING)
    };
    Some(Section::new(
        headings::RESPONSE_TIMING,
        format!("The notice requests a response by {deadline}. {follow}"),
    ))
}

/// Documentation section for notices that expect enclosures. With no
/// enclosures listed the body is left blank for the assembly default.
pub(super) fn documentation(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Option<Section> {
    if !bp.expects_enclosures {
        return None;
    }
    let enclosures = ctx.enclosures();
    let body = if enclosures.is_empty() {
        String::new()
    } else {
        format!(
            "{}\n{}",
            pick(
                seed,
                slot::DOCUMENTATION,
                &[
                    "The following documents are enclosed in support of this response:",
                    "Copies of the following records accompany this letter:",
                ],
            ),
            format::bulleted(&enclosures)
        )
    };
    Some(Section::new(headings::DOCUMENTATION, body))
}

pub(super) fn exam_scope(ctx: &LetterContext) -> Section {
    let focus = ctx
        .reason()
        .map(|reason| {
            format!(
                " The taxpayer understands the examination concerns {}",
                format::sentence(reason)
            )
        })
        .unwrap_or_default();
    Section::new(
        headings::EXAM_SCOPE,
        format!(
            "The letter opens an examination of the return for {}.{focus} The taxpayer asks that the scope of the examination be confirmed in writing, including the specific items under review and the records requested, and that any interview be scheduled at a mutually convenient time.",
            period_phrase(ctx)
        ),
    )
}

pub(super) fn tax_court(ctx: &LetterContext) -> Section {
    let deadline = ctx
        .notice_date()
        .and_then(|date| format::date_after(date, 90))
        .map(|last_day| {
            format!(" Based on the date of the notice, the last day to file a petition is {last_day}.")
        })
        .unwrap_or_default();
    Section::new(
        headings::TAX_COURT,
        format!(
            "The notice of deficiency gives the taxpayer 90 days from its date to petition the United States Tax Court.{deadline} This response does not waive that right, and the taxpayer reserves the right to file a timely petition if the matter is not resolved."
        ),
    )
}

pub(super) fn refund_status(ctx: &LetterContext) -> Section {
    let change = ctx
        .amount()
        .map(|amount| format!(" by {}", format::money(amount)))
        .unwrap_or_default();
    Section::new(
        headings::REFUND_STATUS,
        format!(
            "The notice changed the refund claimed on the return for {}{change}. The taxpayer asks that the refund be recomputed after the review requested in this letter and that any amount due be issued with applicable interest.",
            period_phrase(ctx)
        ),
    )
}
