// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 冒烟测试写入的电影名称
pub const FIXTURE_NAME: &str = "The Princess Bride";
/// 冒烟测试写入的电影时长（分钟）
pub const FIXTURE_LENGTH: i64 = 98;
/// 冒烟测试写入的电影类型
pub const FIXTURE_GENRE: &str = "comedy";

/// 电影实体
///
/// 客户端不分配标识符，记录的身份由服务端管理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// 电影名称
    pub name: String,
    /// 时长（分钟）
    pub length: i64,
    /// 类型
    pub genre: String,
}

impl Movie {
    /// 创建一个新的电影记录
    pub fn new(name: impl Into<String>, length: i64, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length,
            genre: genre.into(),
        }
    }

    /// 冒烟测试使用的固定电影记录
    pub fn fixture() -> Self {
        Self::new(FIXTURE_NAME, FIXTURE_LENGTH, FIXTURE_GENRE)
    }
}

/// 服务端返回的电影集合
///
/// 接受两种响应形态：记录数组，或单个记录对象。
/// 数组中的非对象元素在扫描时被忽略，其他JSON值视为空集合。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct MovieCollection {
    records: Vec<Map<String, Value>>,
}

impl MovieCollection {
    /// 空集合
    pub fn empty() -> Self {
        Self::default()
    }

    /// 集合中的记录
    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否没有记录
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 判断是否存在 `name` 字段等于给定名称的记录
    pub fn contains_name(&self, name: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.get("name").and_then(Value::as_str) == Some(name))
    }
}

impl From<Value> for MovieCollection {
    fn from(value: Value) -> Self {
        let records = match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect(),
            Value::Object(record) => vec![record],
            _ => Vec::new(),
        };
        Self { records }
    }
}

impl From<Vec<Movie>> for MovieCollection {
    fn from(movies: Vec<Movie>) -> Self {
        let records = movies
            .into_iter()
            .filter_map(|movie| match serde_json::to_value(movie) {
                Ok(Value::Object(record)) => Some(record),
                _ => None,
            })
            .collect();
        Self { records }
    }
}
