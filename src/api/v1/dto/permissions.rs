use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PermissionCheckResponse {
    pub scope: String,
    pub operation: String,
    pub allowed: bool,
}
