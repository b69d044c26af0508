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

use movie_smoke::api::http_movie_api::HttpMovieApi;
use movie_smoke::application::smoke_test::SmokeTestClient;
use movie_smoke::config::settings::Settings;
use movie_smoke::utils::telemetry;
use tracing::debug;

/// 主函数
///
/// 写入固定电影并确认其出现在列表中，检查失败时以非零状态退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new()?;
    let base_url = settings.resolve_base_url();
    debug!(%base_url, "Configuration loaded");

    // 3. Run the end-to-end check
    let client = SmokeTestClient::new(HttpMovieApi::from_settings(&settings)?);
    let passed = client.check_movie_addition().await;

    anyhow::ensure!(passed, "movie addition check failed against {}", base_url);
    Ok(())
}
