pub mod blogs;
pub mod health;

use service::BlogService;

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: BlogService,
}

impl AppState {
    pub fn new(service: BlogService) -> Self {
        Self { service }
    }
}
