use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Fresh conversation key (hyphenated UUID v4)
///
/// Not checked against existing threads; v4 collisions are negligible.
pub fn new_thread_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reject ids that cannot travel as a single URL path segment
///
/// Any other string is a valid thread id, known to the engine or not.
pub fn check_thread_id(thread_id: &str) -> ApiResult<()> {
    if matches!(thread_id, "." | "..") {
        return Err(ApiError::BadRequest(format!("Invalid thread id: {:?}", thread_id)));
    }
    Ok(())
}
