use std::time::SystemTime;

use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub trait SystemTimeExt {
    /// Local wall-clock time, falling back to UTC when the offset is unknown.
    fn to_local_datetime(&self) -> OffsetDateTime;
}

impl SystemTimeExt for SystemTime {
    fn to_local_datetime(&self) -> OffsetDateTime {
        let utc = OffsetDateTime::from(*self);
        match UtcOffset::current_local_offset() {
            Ok(offset) => utc.to_offset(offset),
            Err(_) => utc,
        }
    }
}

pub fn format_timestamp(datetime: OffsetDateTime) -> String {
    datetime
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| datetime.to_string())
}
