use std::fmt;

use chrono::{Duration, Local, NaiveDate, NaiveTime};

use crate::error::TeeTimeError;

#[derive(Debug, Clone, PartialEq)]
pub struct SlotQuery {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub players: u32,
    pub course_id: String,
}

impl SlotQuery {
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("date".to_string(), self.date.format("%Y-%m-%d").to_string()),
            ("time".to_string(), self.time.format("%H:%M").to_string()),
            ("players".to_string(), self.players.to_string()),
            ("course".to_string(), self.course_id.clone()),
        ]
    }
}

impl fmt::Display for SlotQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} course {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.course_id
        )
    }
}

pub fn parse_date(date: &str) -> Result<NaiveDate, TeeTimeError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TeeTimeError::InvalidDate(date.to_string()))
}

#[derive(Debug, Clone)]
pub struct SearchPlan {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_hour: u32,
    pub end_hour: u32,
    pub players: u32,
    pub course_ids: Vec<String>,
}

impl Default for SearchPlan {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            start_date: today,
            end_date: today + Duration::days(6),
            start_hour: 7,
            end_hour: 16,
            players: 4,
            course_ids: crate::course::all_course_ids(),
        }
    }
}

impl SearchPlan {
    pub fn validate(&self) -> Result<(), TeeTimeError> {
        if self.start_date > self.end_date {
            return Err(TeeTimeError::Validation(
                "start date must be before or equal to end date".into(),
            ));
        }

        if self.start_date < Local::now().date_naive() {
            return Err(TeeTimeError::Validation(
                "start date cannot be in the past".into(),
            ));
        }

        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(TeeTimeError::Validation(format!(
                "hours must be within 0-23, got {}-{}",
                self.start_hour, self.end_hour
            )));
        }

        if self.start_hour > self.end_hour {
            return Err(TeeTimeError::Validation(
                "start hour must be before or equal to end hour".into(),
            ));
        }

        if !(1..=4).contains(&self.players) {
            return Err(TeeTimeError::Validation(format!(
                "players must be between 1 and 4, got {}",
                self.players
            )));
        }

        if self.course_ids.is_empty() {
            return Err(TeeTimeError::Validation(
                "at least one course required".into(),
            ));
        }

        Ok(())
    }

    pub fn slots(&self) -> Vec<SlotQuery> {
        let times: Vec<NaiveTime> = (self.start_hour..=self.end_hour)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .collect();

        let mut slots = Vec::new();
        for date in self
            .start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
        {
            for time in &times {
                for course_id in &self.course_ids {
                    slots.push(SlotQuery {
                        date,
                        time: *time,
                        players: self.players,
                        course_id: course_id.clone(),
                    });
                }
            }
        }

        slots
    }
}
