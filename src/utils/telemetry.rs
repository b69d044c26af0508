// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认日志过滤规则
///
/// 检查通过时不输出任何内容，只有失败会被记录
pub const DEFAULT_FILTER: &str = "warn";

/// 日志过滤规则
///
/// 取自 `RUST_LOG`，未设置时使用 [`DEFAULT_FILTER`]
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// 构建写入指定目标的订阅者
pub fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// 初始化日志
///
/// 输出到标准输出。重复初始化时保留已有的全局订阅者。
pub fn init_telemetry() {
    let _ = build_subscriber(default_filter(), std::io::stdout).try_init();
}
