// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认主机
pub const DEFAULT_HOST: &str = "localhost";
/// 默认端口
pub const DEFAULT_PORT: &str = "80";

/// 冒烟测试配置设置
///
/// 目标服务地址由 `APP_HOST` 与 `APP_PORT` 组合而成，
/// 两者各自独立回退到默认值。
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 目标服务主机名
    pub host: String,
    /// 目标服务端口（保留原始文本，不做校验）
    pub port: String,
    /// 请求超时时间（秒），未设置时不限时
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和 `APP_` 前缀的环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("APP"))
    }

    /// 使用指定的环境变量来源加载配置
    ///
    /// 测试中可通过 `Environment::source` 注入变量，避免修改进程环境
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(environment);

        builder.build()?.try_deserialize()
    }

    /// 解析目标服务的基础URL
    ///
    /// 不校验URL格式，格式错误的配置会在后续请求时表现为连接失败
    pub fn resolve_base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// 请求超时时间
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
