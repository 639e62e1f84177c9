//! Record identifiers: random version-4 uuids, plus parsing for ids the user
//! types on the command line.

use crate::error::{Result, TaskzError};
use uuid::Uuid;

pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Syntactic check used by the validation layer. Only version-4 uuids are
/// accepted, since that is the only kind the store ever assigns.
pub fn is_valid(s: &str) -> bool {
    matches!(Uuid::parse_str(s), Ok(id) if id.get_version_num() == 4)
}

pub fn parse(s: &str) -> Result<Uuid> {
    let id = Uuid::parse_str(s)
        .map_err(|_| TaskzError::Validation("Invalid UUID.".to_string()))?;
    if id.get_version_num() != 4 {
        return Err(TaskzError::Validation("Invalid UUID.".to_string()));
    }
    Ok(id)
}
