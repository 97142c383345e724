//! 左侧导航面板组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    // 构建导航项列表
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let is_current = nav_item.id.page() == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{prefix}{} {}", nav_item.icon, nav_item.id.label());

            let style = if is_selected {
                Styles::selected()
            } else if is_current {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
