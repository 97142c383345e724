//! 设置页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, SettingItem, Theme};
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 < > 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    // === 主题设置 ===
    let theme_value = match settings.theme {
        Theme::Dark => texts.settings.theme.dark,
        Theme::Light => texts.settings.theme.light,
    };
    lines.push(render_setting_row(
        texts.settings.theme.label,
        theme_value,
        settings.current_item() == Some(SettingItem::Theme),
    ));

    // === 语言设置 ===
    lines.push(render_setting_row(
        texts.settings.language.label,
        settings.language.display_name(),
        settings.current_item() == Some(SettingItem::Language),
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", texts.hints.keys.arrows_ud),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.move_up_down),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.arrows_lr, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.actions.switch_option),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.tab, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.actions.switch_panel),
            Style::default().fg(c.muted),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(format!("{:width$}", "", width = label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:width$}", "", width = left_padding)),
        Span::styled(value, value_style),
        Span::raw(format!("{:width$}", "", width = right_padding)),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}
