//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。
//! 列表行的文本内容在 `rows` 中生成，与具体绘制分离，便于测试。

pub mod components;
pub mod layout;
pub mod pages;
pub mod rows;
pub mod theme;

pub use layout::render;

#[cfg(test)]
mod tests {
    use hostwatch_client::{EntityId, Host, OsType};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::i18n::t;
    use crate::model::{App, DeleteTarget};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        terminal
            .draw(|frame| render(app, frame))
            .unwrap_or_else(|e| panic!("draw: {e}"));
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn empty_host_list_shows_placeholder() {
        let app = App::new();
        let screen = draw(&app);
        assert!(screen.contains("HostWatch Admin"));
        assert!(screen.contains(t().hosts.empty));
    }

    #[test]
    fn hosts_are_listed_by_name() {
        let mut app = App::new();
        app.hosts.list.set_items(vec![Host {
            id: EntityId::from("1"),
            hostname: "web-01".into(),
            ip_address: "10.0.0.5".into(),
            os_type: OsType::Linux,
        }]);
        let screen = draw(&app);
        assert!(screen.contains("web-01"));
        assert!(screen.contains("10.0.0.5"));
        assert!(!screen.contains(t().hosts.empty));
    }

    #[test]
    fn alert_dialog_is_drawn_over_modal() {
        let mut app = App::new();
        app.modal
            .show_confirm_delete(DeleteTarget::Host, "web-01", EntityId::from("1"));
        app.modal.push_alert("Error", "Could not delete host");
        let screen = draw(&app);
        assert!(screen.contains("Could not delete host"));
    }
}
