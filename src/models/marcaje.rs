use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Entry,
    Exit,
}

impl EventKind {
    /// Portal tag: `E` (entrada) or `S` (salida). Debug input may also
    /// spell the kind out.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "entry" | "in" => Some(Self::Entry),
            "s" | "exit" | "out" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::Entry => "E",
            EventKind::Exit => "S",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, EventKind::Entry)
    }
}

/// A single badge scan. Only lives during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarcajeEvent {
    pub time: NaiveTime,
    pub kind: EventKind,
}

impl MarcajeEvent {
    pub fn new(time: NaiveTime, kind: EventKind) -> Self {
        Self { time, kind }
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
