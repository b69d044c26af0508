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

use crate::domain::models::movie::{Movie, MovieCollection};
use async_trait::async_trait;
use thiserror::Error;

/// 电影API错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 传输层失败（DNS、连接被拒绝、连接重置、超时、无法构造的URL）
    #[error("Connection failure: {0}")]
    ConnectionFailure(#[from] reqwest::Error),
    /// 响应状态码不在 [200, 400) 范围内
    #[error("Unexpected status: {status}")]
    BadStatus {
        /// HTTP状态码
        status: u16,
    },
    /// 响应体无法解析为JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// 错误类别名称，用于结构化日志
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ConnectionFailure(_) => "connection_failure",
            ApiError::BadStatus { .. } => "bad_status",
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }
}

/// 状态码是否视为成功（2xx 与 3xx）
pub fn is_accepted_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// 电影API特质
///
/// 对 `/movie` 资源的读写操作，失败时返回显式的错误类别
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// 读取电影列表
    async fn list_movies(&self) -> Result<MovieCollection, ApiError>;

    /// 写入一条电影记录
    async fn create_movie(&self, movie: &Movie) -> Result<(), ApiError>;

    /// 资源地址，用于日志
    fn endpoint(&self) -> &str;
}
