//! Marcaje parsing.
//!
//! The portal's "detail" column is a `|`-separated list of
//! `HH:MM:SS <E|S> <code>` tokens in chronological order. `parse_detail`
//! reads that format as-is. `parse_debug_input` is the tolerant variant for
//! hand-written data: it also reads JSON, sorts by time and collapses
//! repeated scans of the same kind.

use crate::errors::{AppError, AppResult};
use crate::models::marcaje::{EventKind, MarcajeEvent};
use crate::models::snapshot::{ParsedDetail, WorkDaySnapshot};
use crate::utils::time::parse_clock;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::debug;

fn detail_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{2}):(\d{2}):(\d{2})\s+([ES])\s+(\d{3})$").expect("valid detail regex")
    })
}

fn debug_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(\d{1,2}:\d{2}(?::\d{2})?)\s*(e|s|entry|exit|in|out)\b(?:\s+\d+)?$")
            .expect("valid debug regex")
    })
}

/// Parse the portal detail string. Malformed tokens are skipped; the
/// order of the input is kept.
pub fn parse_detail(raw: &str) -> ParsedDetail {
    let mut parsed = ParsedDetail::default();

    for token in raw.split('|').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(caps) = detail_token_re().captures(token) else {
            debug!(token, "skipping malformed marcaje token");
            continue;
        };

        // Range check only: output drops the seconds.
        let hm = format!("{}:{}", &caps[1], &caps[2]);
        if NaiveTime::parse_from_str(&format!("{}:{}", hm, &caps[3]), "%H:%M:%S").is_err() {
            debug!(token, "skipping out-of-range marcaje token");
            continue;
        }

        match &caps[4] {
            "E" => parsed.entries.push(hm),
            _ => parsed.exits.push(hm),
        }
    }

    debug!(entries = parsed.entries.len(), exits = parsed.exits.len(), "parsed portal detail");
    parsed
}

// ---------------------------
// Debug input
// ---------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum DebugInput {
    Buckets {
        entries: Vec<String>,
        #[serde(default)]
        exits: Vec<String>,
    },
    Tokens(Vec<DebugToken>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DebugToken {
    Text(String),
    Event {
        time: String,
        #[serde(rename = "type", alias = "kind")]
        kind: String,
    },
}

fn parse_debug_token(token: &str) -> Option<MarcajeEvent> {
    let caps = debug_token_re().captures(token.trim())?;
    let time = parse_clock(&caps[1])?;
    let kind = EventKind::from_tag(&caps[2])?;
    Some(MarcajeEvent::new(time, kind))
}

fn events_from_json(input: DebugInput) -> Vec<MarcajeEvent> {
    match input {
        DebugInput::Buckets { entries, exits } => {
            let ins = entries
                .iter()
                .filter_map(|t| parse_clock(t).map(|t| MarcajeEvent::new(t, EventKind::Entry)));
            let outs = exits
                .iter()
                .filter_map(|t| parse_clock(t).map(|t| MarcajeEvent::new(t, EventKind::Exit)));
            ins.chain(outs).collect()
        }
        DebugInput::Tokens(tokens) => tokens
            .iter()
            .filter_map(|t| match t {
                DebugToken::Text(s) => parse_debug_token(s),
                DebugToken::Event { time, kind } => {
                    Some(MarcajeEvent::new(parse_clock(time)?, EventKind::from_tag(kind)?))
                }
            })
            .collect(),
    }
}

fn events_from_text(raw: &str) -> Vec<MarcajeEvent> {
    raw.split(['|', ',', ';', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter_map(parse_debug_token)
        .collect()
}

/// Sort by time, then fold runs of the same kind into their latest scan.
/// A leading exit has no interval to close and is dropped.
pub fn normalize_events(mut events: Vec<MarcajeEvent>) -> Vec<MarcajeEvent> {
    events.sort_by_key(|e| e.time);

    let mut out: Vec<MarcajeEvent> = Vec::with_capacity(events.len());
    for ev in events {
        let repeated = out.last().is_some_and(|last| last.kind == ev.kind);
        if repeated {
            if let Some(last) = out.last_mut() {
                *last = ev;
            }
        } else if out.is_empty() && !ev.kind.is_entry() {
            debug!(time = %ev.time_str(), "dropping exit before first entry");
        } else {
            out.push(ev);
        }
    }
    out
}

fn bucket(events: &[MarcajeEvent]) -> ParsedDetail {
    let mut parsed = ParsedDetail::default();
    for ev in events {
        if ev.kind.is_entry() {
            parsed.entries.push(ev.time_str());
        } else {
            parsed.exits.push(ev.time_str());
        }
    }
    parsed
}

fn debug_events(raw: &str) -> AppResult<Vec<MarcajeEvent>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let events = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<DebugInput>(trimmed) {
            Ok(input) => events_from_json(input),
            Err(e) => {
                debug!(error = %e, "debug input is not valid JSON, reading it as text");
                events_from_text(trimmed)
            }
        }
    } else {
        events_from_text(trimmed)
    };

    if events.is_empty() {
        return Err(AppError::NoValidTimestamps);
    }

    Ok(normalize_events(events))
}

/// Tolerant parser for manually entered data (text or JSON).
pub fn parse_debug_input(raw: &str) -> AppResult<ParsedDetail> {
    let events = debug_events(raw)?;
    let parsed = bucket(&events);
    debug!(entries = parsed.entries.len(), exits = parsed.exits.len(), "parsed debug input");
    Ok(parsed)
}

/// Render events back into the portal grammar, with a `000` code.
pub fn render_detail(events: &[MarcajeEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{}:00 {} 000", e.time_str(), e.kind.tag()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Build a snapshot out of debug data, as if it came from the portal.
pub fn snapshot_from_debug(date: NaiveDate, raw: &str) -> AppResult<WorkDaySnapshot> {
    let events = debug_events(raw)?;
    Ok(WorkDaySnapshot::new(date, bucket(&events), render_detail(&events)))
}

/// Build a snapshot out of a portal detail string.
pub fn snapshot_from_detail(date: NaiveDate, raw: &str) -> WorkDaySnapshot {
    WorkDaySnapshot::new(date, parse_detail(raw), raw)
}
