// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// API模块
///
/// 定义电影API特质及基于HTTP的实现
pub mod api;

/// 应用程序模块
///
/// 包含端到端冒烟检查
pub mod application;

/// 配置模块
///
/// 处理目标服务地址等配置与环境变量
pub mod config;

/// 领域模块
///
/// 包含电影记录与电影集合
pub mod domain;

/// 工具模块
pub mod utils;
