//! 列表页面通用状态

use super::RequestTracker;

/// 刷新结果处理方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 已替换为新列表
    Applied,
    /// 刷新失败，保留旧列表
    Failed(String),
    /// 过期的响应，已丢弃
    Stale,
}

/// 服务端列表的本地副本
///
/// `items` 始终是最近一次成功刷新的完整结果，只整体替换，不做合并。
#[derive(Debug)]
pub struct EntityList<T> {
    /// 列表数据
    pub items: Vec<T>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次刷新的错误信息
    pub error: Option<String>,
    tracker: RequestTracker,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
            tracker: RequestTracker::new(),
        }
    }
}

impl<T> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// 获取当前选中的项
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// 开始一次刷新，返回本次请求的序号
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.tracker.issue()
    }

    /// 处理刷新响应
    pub fn apply_refresh(&mut self, token: u64, result: Result<Vec<T>, String>) -> RefreshOutcome {
        if !self.tracker.is_latest(token) {
            return RefreshOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.set_items(items);
                RefreshOutcome::Applied
            }
            Err(message) => {
                self.error = Some(message.clone());
                RefreshOutcome::Failed(message)
            }
        }
    }

    /// 设置列表（整体替换）
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_response_never_replaces_newer_list() {
        let mut list = EntityList::new();
        let old = list.begin_refresh();
        let new = list.begin_refresh();

        assert_eq!(list.apply_refresh(new, Ok(vec![2, 3])), RefreshOutcome::Applied);
        assert_eq!(list.apply_refresh(old, Ok(vec![1])), RefreshOutcome::Stale);
        assert_eq!(list.items, vec![2, 3]);
        assert!(!list.loading);
    }

    #[test]
    fn stale_response_keeps_loading_flag() {
        let mut list: EntityList<u8> = EntityList::new();
        let old = list.begin_refresh();
        let _new = list.begin_refresh();
        assert_eq!(list.apply_refresh(old, Ok(vec![])), RefreshOutcome::Stale);
        assert!(list.loading);
    }

    #[test]
    fn failed_refresh_keeps_last_list() {
        let mut list = EntityList::new();
        let token = list.begin_refresh();
        list.apply_refresh(token, Ok(vec!["a", "b"]));

        let token = list.begin_refresh();
        let outcome = list.apply_refresh(token, Err("Failed to fetch hosts".into()));
        assert_eq!(outcome, RefreshOutcome::Failed("Failed to fetch hosts".into()));
        assert_eq!(list.items, vec!["a", "b"]);
        assert_eq!(list.error.as_deref(), Some("Failed to fetch hosts"));
    }

    #[test]
    fn selection_is_clamped_after_shrinking() {
        let mut list = EntityList::new();
        list.set_items(vec![1, 2, 3]);
        list.select_last();
        list.set_items(vec![1]);
        assert_eq!(list.selected, 0);
        assert_eq!(list.selected_item(), Some(&1));

        list.set_items(Vec::new());
        assert_eq!(list.selected_item(), None);
        list.select_next();
        assert_eq!(list.selected, 0);
    }
}
