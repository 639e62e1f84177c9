//! Input validation. Pure functions, called at the API boundary before
//! anything reaches the store; the store itself never re-validates.

use crate::error::{Result, TaskzError};
use crate::ident;
use crate::model::DATE_FORMAT;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

const DUE_DATE_FORMAT_MSG: &str = "The format of the due date is wrong. It should be Y-m-d.";

fn invalid(message: &str) -> TaskzError {
    TaskzError::Validation(message.to_string())
}

pub fn validate_id(id: &str) -> Result<Uuid> {
    if id.is_empty() {
        return Err(invalid("The ID can not be empty."));
    }
    ident::parse(id)
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(invalid("The title can not be empty."));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    if description.is_empty() {
        return Err(invalid("The description can not be empty."));
    }
    Ok(())
}

/// Exact `Y-m-d`: the parsed date re-formatted must equal the input, so
/// `02-12-2023` and `2023-1-1` are both rejected. Comparison against today is
/// by local calendar day, not time of day.
pub fn validate_due_date(date: &str) -> Result<NaiveDate> {
    if date.is_empty() {
        return Err(invalid("The due date can not be empty."));
    }

    let parsed =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid(DUE_DATE_FORMAT_MSG))?;
    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(invalid(DUE_DATE_FORMAT_MSG));
    }

    if parsed < Local::now().date_naive() {
        return Err(invalid("The due date can not be earlier than today."));
    }

    Ok(parsed)
}
