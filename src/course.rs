use crate::error::TeeTimeError;

pub const SOUTH_COURSE_ID: &str = "35130-201-0000000001";
pub const NORTH_COURSE_ID: &str = "35130-201-0000000002";
pub const LARANJAL_COURSE_ID: &str = "35130-201-0000000003";

pub const COURSES: [(&str, &str); 3] = [
    (SOUTH_COURSE_ID, "South Course"),
    (NORTH_COURSE_ID, "North Course"),
    (LARANJAL_COURSE_ID, "Laranjal"),
];

pub fn course_name(course_id: &str) -> Option<&'static str> {
    COURSES
        .iter()
        .find(|(id, _)| *id == course_id)
        .map(|(_, name)| *name)
}

pub fn all_course_ids() -> Vec<String> {
    COURSES.iter().map(|(id, _)| (*id).to_string()).collect()
}

pub fn resolve_courses(keywords: &[String]) -> Result<Vec<String>, TeeTimeError> {
    if keywords.iter().any(|k| k == "all") {
        return Ok(all_course_ids());
    }

    let mut ids = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let id = match keyword.as_str() {
            "south" => SOUTH_COURSE_ID,
            "north" => NORTH_COURSE_ID,
            "laranjal" => LARANJAL_COURSE_ID,
            _ => {
                return Err(TeeTimeError::Validation(format!(
                    "invalid course \"{keyword}\" — must be one of south, north, laranjal, all"
                )));
            }
        };
        ids.push(id.to_string());
    }

    Ok(ids)
}
