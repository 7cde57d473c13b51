// Reasons a command is rejected, and the confirmation texts for accepted ones.
// The Display strings are what callers see in the `detail` field, keep them stable.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub fn signed_up_message(email: &str, activity: &str) -> String {
    format!("Signed up {email} for {activity}")
}

pub fn removed_message(email: &str, activity: &str) -> String {
    format!("Removed {email} from {activity}")
}
