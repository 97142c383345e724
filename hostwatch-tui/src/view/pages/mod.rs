//! 页面视图

pub mod alerts;
pub mod hosts;
pub mod ip_registry;
pub mod settings;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::EntityList;
use crate::view::rows::{Indicator, RenderedList, Row, RowAction};
use crate::view::theme::colors;

/// 主文本列宽（基于显示宽度）
const PRIMARY_WIDTH: usize = 28;

/// 绘制一个列表页面：顶部一行加载/错误状态，下面是行列表
pub(super) fn render_rows<T>(
    frame: &mut Frame,
    area: Rect,
    rendered: &RenderedList,
    list: &EntityList<T>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new(status_line(list)), chunks[0]);

    let selected = (!rendered.is_placeholder()).then_some(list.selected);
    let items: Vec<ListItem> = rendered
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| ListItem::new(render_row(row, Some(i) == selected)))
        .collect();

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(List::new(items), chunks[1], &mut state);
}

fn status_line<T>(list: &EntityList<T>) -> Line<'static> {
    let c = colors();
    if list.loading {
        Line::styled(
            format!("  {}", t().common.loading),
            Style::default().fg(c.muted),
        )
    } else if let Some(ref error) = list.error {
        Line::styled(format!("  ⚠ {error}"), Style::default().fg(c.error))
    } else {
        Line::from("")
    }
}

fn render_row(row: &Row, is_selected: bool) -> Line<'static> {
    let c = colors();

    if row.placeholder {
        return Line::styled(
            format!("  {}", row.primary),
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        );
    }

    let base = if is_selected {
        Style::default().bg(c.selected_bg).fg(c.selected_fg)
    } else {
        Style::default().fg(c.fg)
    };
    let prefix = if is_selected { "▶ " } else { "  " };

    let mut spans = vec![Span::styled(prefix, base)];

    match row.indicator {
        Some(Indicator::Icon(icon)) => spans.push(Span::styled(format!("{icon} "), base)),
        Some(Indicator::Badge { ref label, tone }) => spans.push(Span::styled(
            format!("[{label}] "),
            base.fg(c.tone(tone)).add_modifier(Modifier::BOLD),
        )),
        None => {}
    }

    let padding = PRIMARY_WIDTH.saturating_sub(row.primary.width());
    spans.push(Span::styled(
        format!("{}{:padding$}", row.primary, ""),
        base.add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", row.secondary),
        if is_selected { base } else { base.fg(c.muted) },
    ));

    if is_selected && !row.actions.is_empty() {
        let common = &t().common;
        let labels: Vec<&str> = row
            .actions
            .iter()
            .map(|action| match action {
                RowAction::Edit => common.edit,
                RowAction::Delete => common.delete,
            })
            .collect();
        spans.push(Span::styled(
            format!("   [{}]", labels.join(" / ")),
            base.fg(c.muted),
        ));
    }

    Line::from(spans)
}
