//! Shape checks for the review API payload.
//!
//! The API answers with an untyped JSON object. [`validate`] pulls the
//! `homeworks` list out of it, [`decode`] additionally reads `current_date`.
//! Individual submissions stay as raw records until they are formatted, so a
//! broken entry further down the list never fails a cycle.

use serde_json::Value;

use crate::catalog::ReviewStatus;
use crate::error::ValidationError;

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";
pub const HOMEWORK_NAME_KEY: &str = "homework_name";
pub const STATUS_KEY: &str = "status";

/// One entry of the `homeworks` list, as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord(Value);

impl SubmissionRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Decode into a typed submission.
    ///
    /// Both required keys are checked for presence before the status is looked
    /// up, so a missing key is never reported as an unknown status.
    pub fn decode(&self) -> Result<Submission, ValidationError> {
        let Some(fields) = self.0.as_object() else {
            return Err(shape("submission is not a JSON object", &self.0));
        };
        let name = fields
            .get(HOMEWORK_NAME_KEY)
            .ok_or(ValidationError::MissingKey(HOMEWORK_NAME_KEY))?;
        let status = fields
            .get(STATUS_KEY)
            .ok_or(ValidationError::MissingKey(STATUS_KEY))?;

        let Some(name) = name.as_str() else {
            return Err(shape("homework_name is not a string", name));
        };
        let status = status
            .as_str()
            .and_then(ReviewStatus::from_code)
            .ok_or_else(|| ValidationError::UnknownStatus(plain_text(status)))?;

        Ok(Submission {
            name: name.to_string(),
            status,
        })
    }
}

fn shape(problem: &str, value: &Value) -> ValidationError {
    ValidationError::Shape(format!("{problem}: {value}"))
}

/// String values without JSON quotes, anything else as JSON.
fn plain_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

/// A submission whose name and status have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub status: ReviewStatus,
}

/// A validated API payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Newest submission first.
    pub homeworks: Vec<SubmissionRecord>,
    pub current_date: Option<i64>,
}

impl ApiResponse {
    pub fn latest(&self) -> Option<&SubmissionRecord> {
        self.homeworks.first()
    }
}

/// Check the payload shape and return its submission list.
///
/// An absent `homeworks` key is an error; an empty list is not.
pub fn validate(payload: &Value) -> Result<Vec<SubmissionRecord>, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::Shape("response is not a JSON object".into()))?;

    let homeworks = match object.get(HOMEWORKS_KEY) {
        None | Some(Value::Null) => return Err(ValidationError::MissingKey(HOMEWORKS_KEY)),
        Some(value) => value,
    };

    let Some(list) = homeworks.as_array() else {
        return Err(shape("homeworks is not a list", homeworks));
    };

    if list.is_empty() {
        tracing::debug!("no new statuses in response");
    }

    Ok(list.iter().cloned().map(SubmissionRecord::new).collect())
}

/// Validate the payload and read the server-reported `current_date`.
pub fn decode(payload: &Value) -> Result<ApiResponse, ValidationError> {
    let homeworks = validate(payload)?;

    let current_date = match payload.get(CURRENT_DATE_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_i64() {
            Some(date) => Some(date),
            None => return Err(shape("current_date is not an integer", value)),
        },
    };

    Ok(ApiResponse {
        homeworks,
        current_date,
    })
}
