use utilisateur_application::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}
