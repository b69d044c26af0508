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

use crate::api::traits::{is_accepted_status, ApiError, MovieApi};
use crate::config::settings::Settings;
use crate::domain::models::movie::{Movie, MovieCollection};
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

/// 电影资源路径
pub const MOVIE_PATH: &str = "/movie";

/// 基于reqwest实现的电影API客户端
pub struct HttpMovieApi {
    /// HTTP客户端
    client: Client,
    /// `<base_url>/movie`
    endpoint: String,
}

impl HttpMovieApi {
    /// 创建新的电影API客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 目标服务基础URL，不做格式校验
    /// * `client` - 复用的HTTP客户端
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), MOVIE_PATH),
        }
    }

    /// 根据配置创建电影API客户端
    ///
    /// # 返回值
    ///
    /// * `Ok(HttpMovieApi)` - 客户端
    /// * `Err(ApiError)` - HTTP客户端构建失败
    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("movie-smoke/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(&settings.resolve_base_url(), builder.build()?))
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn list_movies(&self) -> Result<MovieCollection, ApiError> {
        debug!(url = %self.endpoint, "GET movies");
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status().as_u16();
        if !is_accepted_status(status) {
            return Err(ApiError::BadStatus { status });
        }

        // Read the body first so a decode failure is not reported as a transport error
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn create_movie(&self, movie: &Movie) -> Result<(), ApiError> {
        debug!(url = %self.endpoint, name = %movie.name, "POST movie");
        let response = self.client.post(&self.endpoint).json(movie).send().await?;

        let status = response.status().as_u16();
        if !is_accepted_status(status) {
            return Err(ApiError::BadStatus { status });
        }

        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
#[path = "http_movie_api_test.rs"]
mod tests;
