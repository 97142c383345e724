//! IP 注册表页面视图

use ratatui::{Frame, layout::Rect};

use crate::model::App;
use crate::view::rows::render_ips;

/// 渲染 IP 注册表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rendered = render_ips(&app.ips.list.items);
    super::render_rows(frame, area, &rendered, &app.ips.list);
}
