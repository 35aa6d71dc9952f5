//! Sections and blocks shared by every blueprint.

use crate::family::{notice_reference, slot};
use crate::format;
use crate::headings;
use crate::seed::{pick, pick_index, Seed};
use crate::types::{LetterContext, Section};

use super::Blueprint;

/// Purpose statement, identifiers block, and (on request) applicable authority.
pub(super) fn sections(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Vec<Section> {
    let mut sections = vec![purpose(bp, seed, ctx), identifiers(bp, ctx)];
    if ctx.include_authority {
        sections.push(authority(bp, seed, ctx));
    }
    sections
}

fn purpose(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Section {
    let reference = notice_reference(ctx);
    let title = bp.title;
    let options = [
        format!("This letter responds to {reference}, the {title}, on behalf of the taxpayer."),
        format!("The taxpayer submits this letter in response to {reference} ({title})."),
        format!("This correspondence is the taxpayer's written response to {reference}, the {title}."),
        format!("Please accept this letter as the taxpayer's formal response to {reference} ({title})."),
    ];
    let body = pick_index(seed, slot::PURPOSE, options.len())
        .and_then(|idx| options.get(idx))
        .cloned()
        .unwrap_or_default();
    Section::new(headings::PURPOSE, body)
}

/// Render a masked identifier: a bare digit fragment reads as "ending in".
pub(super) fn identifier_label(external_id: &str) -> String {
    let digits_only = external_id.chars().all(|c| c.is_ascii_digit());
    if digits_only && external_id.len() <= 4 {
        format!("ending in {external_id}")
    } else {
        external_id.to_owned()
    }
}

fn identifiers(bp: &Blueprint, ctx: &LetterContext) -> Section {
    let mut lines = vec![format!("Taxpayer: {}", ctx.name())];
    if let Some(id) = ctx.external_id() {
        lines.push(format!("Taxpayer ID: {}", identifier_label(id)));
    }
    lines.push(format!("Notice: {} ({})", bp.notice, bp.title));
    if let Some(date) = ctx.notice_date() {
        lines.push(format!("Notice date: {}", format::display_date(date)));
    }
    if let Some(year) = ctx.tax_year() {
        lines.push(format!("Tax year: {year}"));
    }
    if let Some(amount) = ctx.amount() {
        lines.push(format!("Amount shown on notice: {}", format::money(amount)));
    }
    if let Some(deadline) = ctx.deadline() {
        lines.push(format!("Response deadline: {}", format::display_date(deadline)));
    }
    Section::new(headings::IDENTIFIERS, lines.join("\n"))
}

const AUTHORITY_INTROS: [&str; 2] = [
    "The following authorities bear on the matters raised in this letter:",
    "This response relies on the following provisions:",
];

fn authority(bp: &Blueprint, seed: &Seed, ctx: &LetterContext) -> Section {
    let cites: Vec<String> = bp
        .library()
        .authorities(ctx)
        .into_iter()
        .map(str::to_owned)
        .collect();
    Section::new(
        headings::AUTHORITY,
        format!(
            "{}\n{}",
            pick(seed, slot::AUTHORITY, &AUTHORITY_INTROS),
            format::bulleted(&cites)
        ),
    )
}

/// Subject line naming the notice, tax year, and notice date when known.
pub(super) fn re_line(bp: &Blueprint, ctx: &LetterContext) -> String {
    let mut line = format!("Re: Response to Notice {} ({})", bp.notice, bp.title);
    if let Some(year) = ctx.tax_year() {
        line.push_str(&format!(", Tax Year {year}"));
    }
    if let Some(date) = ctx.notice_date() {
        line.push_str(&format!(", Notice Date {}", format::display_date(date)));
    }
    line
}

/// Taxpayer block. The first line is always the taxpayer name.
pub(super) fn taxpayer_block(ctx: &LetterContext) -> String {
    let mut lines = vec![ctx.name().to_owned()];
    if let Some(address) = ctx.address() {
        lines.extend(
            address
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
        );
    }
    if let Some(id) = ctx.external_id() {
        lines.push(format!("Taxpayer ID: {}", identifier_label(id)));
    }
    lines.join("\n")
}

const THANKS: [&str; 3] = [
    "Thank you for your prompt attention to this matter.",
    "Thank you for your assistance in resolving this matter.",
    "Thank you for considering this response.",
];

/// Closing courtesy, signature, and enclosure list.
pub(super) fn closing_block(seed: &Seed, ctx: &LetterContext) -> String {
    let mut closing = pick(seed, slot::CLOSING, &THANKS).to_owned();
    if let Some(phone) = ctx.extra_text("phone") {
        closing.push_str(&format!(
            " Questions about this response may be directed to {phone}."
        ));
    }

    let signer = ctx
        .extra_text("signer_name")
        .unwrap_or_else(|| ctx.name().to_owned());
    closing.push_str(&format!("\n\nSincerely,\n\n\n{signer}"));
    if let Some(title) = ctx.extra_text("signer_title") {
        closing.push_str(&format!("\n{title}"));
    }

    let enclosures = ctx.enclosures();
    if !enclosures.is_empty() {
        closing.push_str(&format!("\n\nEnclosures ({}):\n", enclosures.len()));
        closing.push_str(&format::bulleted(&enclosures));
    }
    closing
}
