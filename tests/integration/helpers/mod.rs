// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use movie_smoke::api::http_movie_api::HttpMovieApi;
use movie_smoke::application::smoke_test::SmokeTestClient;
use movie_smoke::config::settings::Settings;
use movie_smoke::utils::telemetry;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// 内存电影服务的存储
pub type MovieStore = Arc<Mutex<Vec<Value>>>;

/// 启动一个内存中的电影服务
///
/// `POST /movie` 保存请求体并返回201，`GET /movie` 返回全部记录
pub async fn spawn_movie_server(store: MovieStore) -> Settings {
    let app = Router::new()
        .route("/movie", get(list_movies).post(create_movie))
        .with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Settings {
        host: addr.ip().to_string(),
        port: addr.port().to_string(),
        timeout_secs: Some(10),
    }
}

async fn list_movies(State(store): State<MovieStore>) -> Json<Value> {
    Json(Value::Array(store.lock().unwrap().clone()))
}

async fn create_movie(State(store): State<MovieStore>, Json(movie): Json<Value>) -> StatusCode {
    store.lock().unwrap().push(movie);
    StatusCode::CREATED
}

/// 解析形如 `http://127.0.0.1:1234` 的地址为配置
pub fn settings_for(uri: &str) -> Settings {
    let authority = uri.trim_start_matches("http://");
    let (host, port) = authority.rsplit_once(':').unwrap();
    Settings {
        host: host.to_string(),
        port: port.to_string(),
        timeout_secs: Some(10),
    }
}

/// 返回一个没有进程监听的本地端口的配置
pub fn unreachable_settings() -> Settings {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Settings {
        host: "127.0.0.1".to_string(),
        port: port.to_string(),
        timeout_secs: Some(10),
    }
}

/// 根据配置创建冒烟测试客户端
pub fn client_for(settings: &Settings) -> SmokeTestClient<HttpMovieApi> {
    SmokeTestClient::new(HttpMovieApi::from_settings(settings).unwrap())
}

/// 收集日志输出的写入器
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// 已收集的日志文本
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// 以默认过滤规则将当前线程的日志写入 `logs`
pub fn capture_default_logs(logs: &CapturedLogs) -> tracing::subscriber::DefaultGuard {
    tracing::subscriber::set_default(telemetry::build_subscriber(
        EnvFilter::new(telemetry::DEFAULT_FILTER),
        logs.clone(),
    ))
}
