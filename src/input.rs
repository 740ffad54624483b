//! Input handling module
//!
//! Text entry for the agreement dates. The dialog accepts digits and dashes
//! and parses the buffer as an ISO date on submit.

use chrono::NaiveDate;

use crate::error::Result;
use crate::store::parse_iso_date;

/// Which end of the agreement term is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn label(self) -> &'static str {
        match self {
            DateField::Start => "Start date",
            DateField::End => "End date",
        }
    }
}

/// Date entry dialog state
#[derive(Debug, Clone, PartialEq)]
pub struct DateInput {
    pub field: DateField,
    pub buffer: String,
    /// Parse error from the last submit
    pub error: Option<String>,
}

impl DateInput {
    /// `YYYY-MM-DD`
    pub const MAX_LEN: usize = 10;

    /// Open the dialog pre-filled with the current value
    pub fn new(field: DateField, current: NaiveDate) -> Self {
        Self {
            field,
            buffer: current.format("%Y-%m-%d").to_string(),
            error: None,
        }
    }

    /// Append a character. Returns whether it was accepted.
    pub fn push(&mut self, c: char) -> bool {
        if self.buffer.len() >= Self::MAX_LEN || !(c.is_ascii_digit() || c == '-') {
            return false;
        }
        self.buffer.push(c);
        self.error = None;
        true
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.error = None;
    }

    /// Parse the buffer, recording the error for display on failure
    pub fn submit(&mut self) -> Result<NaiveDate> {
        parse_iso_date(&self.buffer).inspect_err(|e| {
            self.error = Some(e.to_string());
        })
    }
}
