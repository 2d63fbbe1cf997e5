mod common;
mod users;

pub use common::{GenericMessageResponse, HealthResponse};
pub use users::{CreateUserRequest, UpdateUserRequest, UserResponse};

#[cfg(test)]
mod tests {
    use super::{
        CreateUserRequest, GenericMessageResponse, HealthResponse, UpdateUserRequest, UserResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        CreateUserRequest::export(&config)?;
        UpdateUserRequest::export(&config)?;
        UserResponse::export(&config)?;
        GenericMessageResponse::export(&config)?;
        HealthResponse::export(&config)?;
        ErrorResponse::export(&config)?;

        Ok(())
    }
}
