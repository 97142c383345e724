//! 共享测试工具和辅助函数

#![allow(dead_code)]

use httpmock::MockServer;

use hostwatch_client::{ApiClient, ClientConfig};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// 指向 mock 服务器的客户端
pub fn client_for(server: &MockServer) -> Option<ApiClient> {
    client_with_cookie(server, None)
}

pub fn client_with_cookie(server: &MockServer, cookie: Option<&str>) -> Option<ApiClient> {
    ApiClient::new(&ClientConfig {
        base_url: server.base_url(),
        session_cookie: cookie.map(str::to_string),
        timeout: None,
    })
    .ok()
}
