//! 主机列表页面视图

use ratatui::{Frame, layout::Rect};

use crate::model::App;
use crate::view::rows::render_hosts;

/// 渲染主机列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rendered = render_hosts(&app.hosts.list.items);
    super::render_rows(frame, area, &rendered, &app.hosts.list);
}
