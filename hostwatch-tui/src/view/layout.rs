//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" HostWatch Admin v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Hosts => pages::hosts::render(app, frame, inner_area),
        Page::IpRegistry => pages::ip_registry::render(app, frame, inner_area),
        Page::Alerts => pages::alerts::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
    }
}
