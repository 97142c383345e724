//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     for effect in app.take_effects() {              // Update 层排入的后台任务
//!         executor.spawn(effect)                          // 放到 tokio 运行时执行，不阻塞 UI
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 已完成的后台任务
//!         update::update(&mut app, msg)                   // 结果同样经由 Update 层
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//!
//! 网络请求在后台并发进行，彼此互不等待；
//! 同一列表的过期刷新结果由 Update 层按请求序号丢弃。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    mut rx: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 启动待执行的后台任务
        for effect in app.take_effects() {
            executor.spawn(effect);
        }

        // 4. 处理已完成的后台任务
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    log::info!("Main loop finished");
    Ok(())
}
