//! 告警页面视图

use ratatui::{Frame, layout::Rect};

use crate::model::App;
use crate::view::rows::render_alerts;

/// 渲染告警页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rendered = render_alerts(&app.alerts.list.items);
    super::render_rows(frame, area, &rendered, &app.alerts.list);
}
