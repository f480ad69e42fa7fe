use std::sync::Arc;

use rbac_admin_core::application::RbacAdminService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RbacAdminService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RbacAdminService) -> Self {
        Self { args, service }
    }
}
