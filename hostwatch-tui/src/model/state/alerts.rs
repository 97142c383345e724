//! 告警页面状态

use hostwatch_client::Alert;

use super::EntityList;

/// 告警页面状态（只读）
#[derive(Debug, Default)]
pub struct AlertsState {
    pub list: EntityList<Alert>,
}

impl AlertsState {
    pub fn new() -> Self {
        Self::default()
    }
}
