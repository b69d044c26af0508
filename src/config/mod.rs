// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理冒烟测试的配置设置，包括目标服务地址与请求超时
pub mod settings;
