//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let common = &texts.common;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, common.select));
        }
        FocusPanel::Content => match app.current_page {
            Page::Hosts => {
                hints.push((DefaultKeymap::ADD_LABEL, common.add));
                hints.push((DefaultKeymap::EDIT_LABEL, common.edit));
                hints.push((DefaultKeymap::DELETE_LABEL, common.delete));
                hints.push((keys.enter, actions.status));
                hints.push((DefaultKeymap::FETCH_LOGS_LABEL, actions.logs));
            }
            Page::IpRegistry => {
                hints.push((DefaultKeymap::ADD_LABEL, common.add));
                hints.push((keys.enter, common.edit));
                hints.push((DefaultKeymap::DELETE_LABEL, common.delete));
            }
            Page::Alerts => {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((DefaultKeymap::REFRESH_LABEL, common.refresh));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, common.select));
                hints.push((keys.arrows_lr, actions.switch_option));
            }
        },
    }

    hints.push((DefaultKeymap::QUIT_LABEL, common.quit));

    hints
}
