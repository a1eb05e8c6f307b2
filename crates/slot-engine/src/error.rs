//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The bounds do not describe a forward hour range on the 0..=24 grid.
    #[error("invalid time slot {start}..{end}: start must be before end, both within 0..=24")]
    InvalidInterval { start: u8, end: u8 },

    /// The textual form could not be read as `"HH:00-HH:00"`.
    #[error("cannot parse time slot '{0}': expected \"HH:00-HH:00\"")]
    ParseInterval(String),

    /// The day name is not one of the seven weekdays.
    #[error("unknown day of week: '{0}'")]
    ParseDay(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
