//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 提示框阻塞其余所有输入
    if app.modal.has_alert() {
        return handle_alert_keys(key);
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理提示框的按键
fn handle_alert_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => AppMessage::DismissAlert,
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => AppMessage::DismissAlert,
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match app.current_page {
        Page::Hosts => handle_host_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::IpRegistry | Page::Alerts => handle_list_keys(key),
    }
}

/// 处理主机页面的按键
fn handle_host_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_STATUS.matches(&key) {
        return AppMessage::Content(ContentMessage::CheckStatus);
    }
    if DefaultKeymap::ACTION_FETCH_LOGS.matches(&key) {
        return AppMessage::Content(ContentMessage::FetchLogs);
    }
    handle_list_keys(key)
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        // 主机表单：0 主机名、1 IP 地址、2 操作系统
        Modal::HostForm { focus, .. } => handle_form_keys(key, *focus, 2),
        // IP 表单：0 IP 地址、1 状态
        Modal::IpForm { focus, .. } => handle_form_keys(key, *focus, 1),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::HostStatus { .. } | Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理表单弹窗的按键，`option_field` 是左右切换选项的字段下标
fn handle_form_keys(key: KeyEvent, focus: usize, option_field: usize) -> AppMessage {
    let on_option = focus == option_field;
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Left if on_option => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right if on_option => AppMessage::Modal(ModalMessage::NextOption),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch)
            if !on_option
                && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use hostwatch_client::EntityId;

    use super::*;
    use crate::model::{DeleteTarget, FocusPanel, FormMode, HostDraft};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn alt(ch: char) -> Event {
        press(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    fn content_app(page: Page) -> App {
        let mut app = App::new();
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn alert_blocks_everything_but_dismiss_keys() {
        let mut app = content_app(Page::Hosts);
        app.modal
            .show_host_form(FormMode::Create, HostDraft::default());
        app.modal.push_alert("Error", "boom");

        assert!(matches!(handle_event(alt('a'), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(key(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(alt('q'), &app),
            AppMessage::Noop
        ));
        for dismiss in [
            key(KeyCode::Enter),
            key(KeyCode::Esc),
            key(KeyCode::Char(' ')),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert!(matches!(
                handle_event(dismiss, &app),
                AppMessage::DismissAlert
            ));
        }
    }

    #[test]
    fn host_form_routes_typing_and_option_keys() {
        let mut app = content_app(Page::Hosts);
        app.modal
            .show_host_form(FormMode::Create, HostDraft::default());

        assert!(matches!(
            handle_event(key(KeyCode::Char('w')), &app),
            AppMessage::Modal(ModalMessage::Input('w'))
        ));
        // 文本字段上左右键无效
        assert!(matches!(
            handle_event(key(KeyCode::Left), &app),
            AppMessage::Noop
        ));

        if let Some(Modal::HostForm { focus, .. }) = app.modal.active.as_mut() {
            *focus = 2;
        }
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::NextOption)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn confirm_delete_toggles_and_confirms() {
        let mut app = content_app(Page::IpRegistry);
        app.modal
            .show_confirm_delete(DeleteTarget::Ip, "203.0.113.7", EntityId::from("4"));

        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
    }

    #[test]
    fn global_shortcuts() {
        let app = App::new();
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::ToggleFocus
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Navigation(NavigationMessage::Confirm)
        ));
    }

    #[test]
    fn host_page_actions() {
        let app = content_app(Page::Hosts);
        assert!(matches!(
            handle_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_event(alt('s'), &app),
            AppMessage::Content(ContentMessage::CheckStatus)
        ));
        assert!(matches!(
            handle_event(alt('l'), &app),
            AppMessage::Content(ContentMessage::FetchLogs)
        ));

        // 日志采集只在主机页面生效
        let ips = content_app(Page::IpRegistry);
        assert!(matches!(handle_event(alt('l'), &ips), AppMessage::Noop));
    }

    #[test]
    fn settings_arrows_toggle_values() {
        let app = content_app(Page::Settings);
        assert!(matches!(
            handle_event(key(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::TogglePrev)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::ToggleNext)
        ));
    }
}
