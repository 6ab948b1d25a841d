//! iCalendar (RFC 5545) export of anniversaries.
//!
//! Event identifiers depend only on subject, occasion and occurrence number,
//! so a cancellation document can retract previously published events
//! without any stored state. Every event carries a `DTSTAMP`; the `_at`
//! variants take the stamp explicitly and render byte-identical output for
//! identical input.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::anniversary::Anniversary;
use crate::date_utils::format_ics_date;
use crate::ordinal::ordinal;
use crate::variant::Variant;

pub const PRODID: &str = "-//Parsi Calendar//EN";
pub const UID_DOMAIN: &str = "parsi-calendar";

/// Longest content line, in octets, before folding.
const MAX_LINE_OCTETS: usize = 75;

const CRLF: &str = "\r\n";

/// Lowercase slug: alphanumerics kept, whitespace, `-` and `_` runs become a
/// single `-`, everything else dropped.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    out
}

/// Stable event identifier for occurrence `number` of `subject`'s `occasion`.
pub fn event_uid(subject: &str, occasion: &str, number: usize) -> String {
    format!(
        "parsi-{}-{number}@{UID_DOMAIN}",
        slug(&format!("{subject} {occasion}"))
    )
}

/// Event title, e.g. `Hoshi's 2nd Birthday`.
pub fn event_summary(subject: &str, occasion: &str, number: usize) -> String {
    format!("{subject} {} {occasion}", ordinal(number))
}

/// Suggested file name for the anniversary document.
pub fn ics_filename(subject: &str, occasion: &str) -> String {
    format!("{}-{}.ics", file_stem(subject), file_stem(occasion))
}

/// Suggested file name for the cancellation document.
pub fn cancel_filename(subject: &str, occasion: &str) -> String {
    format!("{}-{}-cancel.ics", file_stem(subject), file_stem(occasion))
}

/// Whitespace runs, path separators and characters that are not allowed in
/// file names become `-`. Leading dots are dropped so the result is always
/// a single plain path component.
fn file_stem(text: &str) -> String {
    let dashed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(is_unsafe_in_file_name, "-");
    dashed.trim_start_matches('.').to_string()
}

fn is_unsafe_in_file_name(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// `DTSTAMP` value, UTC form.
fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escapes a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Folds a content line into chunks of at most 75 octets, continuation
/// chunks prefixed by a single space. Never splits a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > MAX_LINE_OCTETS {
            out.push_str(CRLF);
            out.push(' ');
            used = 1;
        }
        out.push(c);
        used += width;
    }
    out
}

/// Accumulates content lines and renders them CRLF-terminated.
struct Document {
    lines: Vec<String>,
}

impl Document {
    fn new(method: &str) -> Self {
        let lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{PRODID}"),
            "CALSCALE:GREGORIAN".to_string(),
            format!("METHOD:{method}"),
        ];
        Self { lines }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn finish(mut self) -> String {
        self.push("END:VCALENDAR");
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&fold_line(line));
            out.push_str(CRLF);
        }
        out
    }
}

/// Renders `anniversaries` as a publishable calendar, one all-day event each,
/// stamped with the current time.
pub fn generate_ics(
    anniversaries: &[Anniversary],
    subject: &str,
    occasion: &str,
    variant: Variant,
) -> String {
    generate_ics_at(anniversaries, subject, occasion, variant, Utc::now())
}

/// Same as [`generate_ics`] with an explicit `DTSTAMP`.
pub fn generate_ics_at(
    anniversaries: &[Anniversary],
    subject: &str,
    occasion: &str,
    variant: Variant,
    stamp: DateTime<Utc>,
) -> String {
    let dtstamp = format!("DTSTAMP:{}", format_stamp(&stamp));
    let mut doc = Document::new("PUBLISH");
    for ann in anniversaries {
        let number = ann.number();
        let description = format!("{} ({})", ann.parsi_date(), variant.label());
        doc.push("BEGIN:VEVENT");
        doc.push(format!("UID:{}", event_uid(subject, occasion, number)));
        doc.push(dtstamp.as_str());
        doc.push("SEQUENCE:0");
        doc.push(format!(
            "DTSTART;VALUE=DATE:{}",
            format_ics_date(&ann.gregorian_date())
        ));
        doc.push(format!(
            "SUMMARY:{}",
            escape_text(&event_summary(subject, occasion, number))
        ));
        doc.push(format!("DESCRIPTION:{}", escape_text(&description)));
        doc.push("END:VEVENT");
    }
    debug!(events = anniversaries.len(), variant = variant.key(), "rendered calendar");
    doc.finish()
}

/// Renders a cancellation for occurrences `1..=count` of `subject`'s `occasion`,
/// stamped with the current time.
pub fn generate_cancel_ics(subject: &str, occasion: &str, count: usize) -> String {
    generate_cancel_ics_at(subject, occasion, count, Utc::now())
}

/// Same as [`generate_cancel_ics`] with an explicit `DTSTAMP`.
pub fn generate_cancel_ics_at(
    subject: &str,
    occasion: &str,
    count: usize,
    stamp: DateTime<Utc>,
) -> String {
    let dtstamp = format!("DTSTAMP:{}", format_stamp(&stamp));
    let mut doc = Document::new("CANCEL");
    for number in 1..=count {
        doc.push("BEGIN:VEVENT");
        doc.push(format!("UID:{}", event_uid(subject, occasion, number)));
        doc.push(dtstamp.as_str());
        doc.push("SEQUENCE:1");
        doc.push("STATUS:CANCELLED");
        doc.push(format!(
            "SUMMARY:{}",
            escape_text(&event_summary(subject, occasion, number))
        ));
        doc.push("END:VEVENT");
    }
    debug!(events = count, "rendered cancellation");
    doc.finish()
}
