//! Resource handles for each API area.

mod alerts;
mod hosts;
mod ips;

use serde::Deserialize;

pub use alerts::AlertsApi;
pub use hosts::HostsApi;
pub use ips::IpRegistryApi;

/// 创建接口的 2xx 响应体：实体本身，或 `[实体, 状态码]` 二元组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedBody<T> {
    Plain(T),
    WithStatus(T, u16),
}

impl<T> CreatedBody<T> {
    pub(crate) fn into_entity(self) -> T {
        match self {
            Self::Plain(entity) | Self::WithStatus(entity, _) => entity,
        }
    }
}
