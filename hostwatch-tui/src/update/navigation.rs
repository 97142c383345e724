//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),

        NavigationMessage::SelectNext => app.navigation.select_next(),

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                let page = id.page();
                app.current_page = page;
                app.focus = FocusPanel::Content;
                app.clear_status(); // 切换页面时清除状态消息
                // 进入列表页面时重新拉取完整列表
                super::refresh_page(app, page);
            }
        }

        NavigationMessage::SelectFirst => app.navigation.select_first(),

        NavigationMessage::SelectLast => app.navigation.select_last(),
    }
}
