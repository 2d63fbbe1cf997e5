use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utilisateur_domain::UserRecord;

/// Incoming user create payload.
///
/// Missing and `null` names fail the presence check with the regular
/// validation message.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-request.ts"
)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub nom: Option<String>,
}

/// Incoming user update payload. Empty or absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-user-request.ts"
)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub nom: Option<String>,
}

/// API representation of a user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub prenom: String,
    pub nom: String,
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id().to_string(),
            prenom: value.first_name().to_owned(),
            nom: value.last_name().to_owned(),
        }
    }
}
