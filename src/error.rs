use std::fmt;

use crate::query::SlotQuery;

#[derive(Debug)]
pub enum TeeTimeError {
    Timeout { slot: SlotQuery },
    ConnectionFailed { slot: SlotQuery, detail: String },
    RateLimited { slot: SlotQuery },
    HttpStatus { slot: SlotQuery, status: u16 },
    MalformedBody { slot: SlotQuery, detail: String },
    UnknownCourse(String),
    InvalidDate(String),
    Validation(String),
    ClientBuild(String),
    UnsupportedFormat(String),
    OutputFailed(String),
}

impl fmt::Display for TeeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout { slot } => write!(
                f,
                "request timed out for {slot} — the booking API may be slow or unreachable. \
                 Try increasing --timeout or check your connection"
            ),
            Self::ConnectionFailed { slot, detail } => write!(
                f,
                "connection failed for {slot} — check your internet connection ({detail})"
            ),
            Self::RateLimited { slot } => write!(
                f,
                "rate limited by the booking API (HTTP 429) for {slot} — wait a few \
                 minutes before retrying, or narrow the date and hour window"
            ),
            Self::HttpStatus { slot, status } => write!(
                f,
                "unexpected HTTP status {status} from the booking API for {slot}"
            ),
            Self::MalformedBody { slot, detail } => write!(
                f,
                "failed to decode availability response for {slot} — {detail}. \
                 This may indicate a booking API format change"
            ),
            Self::UnknownCourse(course_id) => write!(
                f,
                "unknown course id \"{course_id}\" — no display name is mapped for it; \
                 the configured course ids and the course name table are out of sync"
            ),
            Self::InvalidDate(date) => write!(
                f,
                "invalid date \"{date}\" — must be YYYY-MM-DD format (e.g. 2026-09-24)"
            ),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::ClientBuild(detail) => write!(f, "failed to initialize HTTP client — {detail}"),
            Self::UnsupportedFormat(path) => write!(
                f,
                "unsupported output format \"{path}\" — use a .csv or .json extension"
            ),
            Self::OutputFailed(detail) => write!(f, "failed to write results — {detail}"),
        }
    }
}

impl std::error::Error for TeeTimeError {}

pub fn from_http_error(err: reqwest::Error, slot: &SlotQuery) -> TeeTimeError {
    if err.is_timeout() {
        return TeeTimeError::Timeout { slot: slot.clone() };
    }

    if err.is_decode() {
        return TeeTimeError::MalformedBody {
            slot: slot.clone(),
            detail: err.to_string(),
        };
    }

    TeeTimeError::ConnectionFailed {
        slot: slot.clone(),
        detail: err.to_string(),
    }
}
