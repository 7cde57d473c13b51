pub mod v1 {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
    pub struct ParticipantSignedUpV1 {
        pub activity: String,
        pub email: String,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
    pub struct ParticipantUnregisteredV1 {
        pub activity: String,
        pub email: String,
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUpV1(v1::ParticipantSignedUpV1),
    ParticipantUnregisteredV1(v1::ParticipantUnregisteredV1),
}
