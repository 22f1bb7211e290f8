use tracing::debug;

use crate::course;
use crate::error::TeeTimeError;
use crate::model::{AvailabilityResponse, TeeTimeRecord};
use crate::query::SlotQuery;

pub fn format_tee_times(
    response: &AvailabilityResponse,
    slot: &SlotQuery,
) -> Result<Vec<TeeTimeRecord>, TeeTimeError> {
    let course = course::course_name(&slot.course_id)
        .ok_or_else(|| TeeTimeError::UnknownCourse(slot.course_id.clone()))?;

    let records: Vec<TeeTimeRecord> = response
        .results
        .iter()
        .map(|entry| TeeTimeRecord {
            date: slot.date.format("%Y-%m-%d").to_string(),
            time: slot.time.format("%H:%M").to_string(),
            course: course.to_string(),
            price: entry.price,
            players: slot.players,
            start_hole: entry.start_hole,
        })
        .collect();

    debug!(
        "formatted {} tee times for {} on {}",
        records.len(),
        course,
        slot.date
    );

    Ok(records)
}

// dedup() only removes adjacent duplicates, so the sort covers every field.
pub fn sort_and_dedup(records: &mut Vec<TeeTimeRecord>) {
    records.sort_by(|a, b| {
        (a.date.as_str(), a.time.as_str(), a.course.as_str())
            .cmp(&(b.date.as_str(), b.time.as_str(), b.course.as_str()))
            .then_with(|| a.price.total_cmp(&b.price))
            .then_with(|| a.start_hole.cmp(&b.start_hole))
            .then_with(|| a.players.cmp(&b.players))
    });
    records.dedup();
}
