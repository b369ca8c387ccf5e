//! Task id generation.
//!
//! Ids look like `task_1726539900000_k3j9x0a2b`: a Unix millisecond
//! timestamp followed by nine lowercase base-36 characters drawn from a v4
//! UUID.

use chrono::{DateTime, Utc};
use devboard_protocol::TaskId;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a new task id for a task created at `now`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use devboard_store::generate_task_id;
///
/// let id = generate_task_id(Utc::now());
/// assert!(id.as_str().starts_with("task_"));
/// ```
#[must_use]
pub fn generate_task_id(now: DateTime<Utc>) -> TaskId {
    TaskId::new(format!(
        "task_{}_{}",
        now.timestamp_millis(),
        random_suffix()
    ))
}

fn random_suffix() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    (0..SUFFIX_LEN)
        .map(|_| {
            // The low bits of a v4 uuid are all random.
            let digit = (bits % 36) as usize;
            bits /= 36;
            char::from(BASE36[digit])
        })
        .collect()
}
