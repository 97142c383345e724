//! 弹窗组件

use hostwatch_client::HostStatusInfo;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::{AlertDialog, App, DeleteTarget, FormMode, HostDraft, IpDraft, Modal};
use crate::view::rows::{host_icon, ip_badge, Indicator};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗），提示框始终在最上层
pub fn render(app: &App, frame: &mut Frame) {
    if let Some(ref modal) = app.modal.active {
        match modal {
            Modal::HostForm {
                mode,
                draft,
                focus,
                submitting,
                error,
            } => render_host_form(frame, mode, draft, *focus, *submitting, error.as_deref()),
            Modal::IpForm {
                mode,
                draft,
                focus,
                submitting,
                error,
            } => render_ip_form(frame, mode, draft, *focus, *submitting, error.as_deref()),
            Modal::ConfirmDelete {
                target,
                item_name,
                focus,
                ..
            } => render_confirm_delete(frame, *target, item_name, *focus),
            Modal::HostStatus {
                hostname,
                info,
                loading,
            } => render_host_status(frame, hostname, info.as_ref(), *loading),
            Modal::Help => render_help(frame),
        }
    }

    if let Some(alert) = app.modal.current_alert() {
        render_alert(frame, alert);
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 绘制弹窗外框，返回内容区域
fn modal_frame(frame: &mut Frame, title: &str, border: Color, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 文本输入框的两行：标签 + 值
fn text_field(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    lines.push(Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(Color::Gray),
    )));

    let (display, style) = if focused {
        (format!("  {value}▎"), Style::default().fg(Color::Cyan))
    } else if value.is_empty() {
        (format!("  {placeholder}"), Style::default().fg(Color::DarkGray))
    } else {
        (format!("  {value}"), Style::default().fg(colors().fg))
    };
    lines.push(Line::styled(display, style));
    lines.push(Line::from(""));
}

/// 选项字段：标签 + ◀ 值 ▶
fn option_field(lines: &mut Vec<Line<'static>>, label: &str, value: Span<'static>, focused: bool) {
    let mut title = vec![Span::styled(label.to_string(), Style::default().fg(Color::Gray))];
    if focused {
        title.push(Span::styled(
            format!(" ({})", t().hints.keys.arrows_lr),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(title));

    let arrow = |s: &'static str| {
        if focused {
            Span::styled(s, Style::default().fg(Color::Yellow))
        } else {
            Span::raw("  ")
        }
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        arrow("◀ "),
        value,
        arrow(" ▶"),
    ]));
    lines.push(Line::from(""));
}

fn form_footer(lines: &mut Vec<Line<'static>>, submitting: bool, error: Option<&str>) {
    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(colors().error),
        ));
    }
    if submitting {
        lines.push(Line::styled(
            format!("  {}", t().common.submitting),
            Style::default().fg(colors().warning),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", t().modal.form_hints),
        Style::default().fg(Color::DarkGray),
    ));
}

/// 渲染主机表单
fn render_host_form(
    frame: &mut Frame,
    mode: &FormMode,
    draft: &HostDraft,
    focus: usize,
    submitting: bool,
    error: Option<&str>,
) {
    let texts = &t().modal.host_form;
    let title = if mode.is_create() {
        texts.add_title
    } else {
        texts.edit_title
    };
    let inner = modal_frame(frame, title, Color::Cyan, 50, 17);

    let mut lines = Vec::new();
    text_field(
        &mut lines,
        texts.hostname,
        &draft.hostname,
        texts.hostname_hint,
        focus == 0,
    );
    text_field(
        &mut lines,
        texts.ip_address,
        &draft.ip_address,
        texts.ip_address_hint,
        focus == 1,
    );
    let os_style = if focus == 2 {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors().fg)
    };
    option_field(
        &mut lines,
        texts.os_type,
        Span::styled(
            format!("{} {}", host_icon(draft.os_type), draft.os_type.as_str()),
            os_style,
        ),
        focus == 2,
    );
    form_footer(&mut lines, submitting, error);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染 IP 表单
fn render_ip_form(
    frame: &mut Frame,
    mode: &FormMode,
    draft: &IpDraft,
    focus: usize,
    submitting: bool,
    error: Option<&str>,
) {
    let texts = &t().modal.ip_form;
    let title = if mode.is_create() {
        texts.add_title
    } else {
        texts.edit_title
    };
    let inner = modal_frame(frame, title, Color::Cyan, 50, 14);

    let mut lines = Vec::new();
    text_field(
        &mut lines,
        texts.ip_address,
        &draft.ip_address,
        texts.ip_address_hint,
        focus == 0,
    );

    let c = colors();
    let color = match ip_badge(&draft.status) {
        Indicator::Badge { tone, .. } => c.tone(tone),
        Indicator::Icon(_) => c.fg,
    };
    let mut status_style = Style::default().fg(color);
    if focus == 1 {
        status_style = status_style.add_modifier(Modifier::BOLD);
    }
    option_field(
        &mut lines,
        texts.status,
        Span::styled(draft.status.label().to_string(), status_style),
        focus == 1,
    );
    form_footer(&mut lines, submitting, error);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, target: DeleteTarget, item_name: &str, focus: usize) {
    let texts = t();
    let confirm = &texts.modal.confirm_delete;
    let inner = modal_frame(frame, confirm.title, Color::Red, 46, 9);

    let item_type = match target {
        DeleteTarget::Host => confirm.host,
        DeleteTarget::Ip => confirm.ip,
    };

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {} {item_type}?", confirm.message),
            Style::default().fg(colors().fg),
        ),
        Line::styled(
            format!("  \"{item_name}\""),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染主机状态弹窗
fn render_host_status(
    frame: &mut Frame,
    hostname: &str,
    info: Option<&HostStatusInfo>,
    loading: bool,
) {
    let texts = t();
    let status = &texts.modal.host_status;
    let inner = modal_frame(
        frame,
        &format!("{} · {hostname}", status.title),
        Color::Cyan,
        50,
        11,
    );

    let mut lines = vec![Line::from("")];
    match info {
        Some(info) if !loading => {
            let rows = [
                (status.free_ram, &info.free_ram_mb),
                (status.disk_used, &info.disk_info),
                (status.disk_total, &info.disk_total),
                (status.cpu_load, &info.cpu_load),
                (status.uptime, &info.uptime_hours),
            ];
            for (label, value) in rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {label:<16}"), Style::default().fg(Color::Gray)),
                    Span::styled(value.clone(), Style::default().fg(colors().fg)),
                ]));
            }
        }
        _ => lines.push(Line::styled(
            format!("  {}", status.checking),
            Style::default().fg(colors().muted),
        )),
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {} {}", texts.hints.keys.esc, texts.common.close),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let inner = modal_frame(frame, help.title, Color::Cyan, 56, 22);

    let heading = |text: &str| {
        Line::styled(
            text.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc.to_string(), Style::default().fg(colors().fg)),
        ])
    };

    let a = &help.actions;
    let lines = vec![
        heading(help.global),
        Line::from(""),
        entry("Tab", a.switch_panel),
        entry("↑↓/jk", a.move_up_down),
        entry("Enter", a.confirm),
        entry("Esc", a.back),
        entry(DefaultKeymap::REFRESH_LABEL, a.refresh),
        entry(DefaultKeymap::QUIT_LABEL, a.quit),
        Line::from(""),
        heading(help.operations),
        Line::from(""),
        entry(DefaultKeymap::ADD_LABEL, a.add),
        entry(DefaultKeymap::EDIT_LABEL, a.edit),
        entry(DefaultKeymap::DELETE_LABEL, a.delete),
        entry(DefaultKeymap::STATUS_LABEL, a.status),
        entry(DefaultKeymap::FETCH_LOGS_LABEL, a.logs),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染阻塞式提示框
fn render_alert(frame: &mut Frame, alert: &AlertDialog) {
    let inner = modal_frame(frame, &alert.title, Color::Red, 54, 9);

    let lines = vec![
        Line::from(""),
        Line::styled(alert.message.clone(), Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(
            t().modal.alert.dismiss,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
