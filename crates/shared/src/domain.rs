use chrono::Local;
use serde::{Deserialize, Serialize};

pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Contact details after validation and HTML escaping. `phone` is always
/// populated; absent input is replaced with [`PHONE_NOT_PROVIDED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One sanitized chat message ready for composition. Lives only for the
/// duration of a single relay invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayedMessage {
    pub contact: ContactDetails,
    pub message: String,
    pub timestamp: String,
}

/// Server-side fallback when the submitter supplied no timestamp.
pub fn server_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
