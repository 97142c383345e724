//! 刷新请求序号
//!
//! 每个列表各自维护一个单调递增的序号，只有最新一次刷新的响应会被采用。

/// 刷新请求追踪器
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发出一个新的请求序号
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// 该序号是否为最近一次发出的
    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }
}
