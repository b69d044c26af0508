// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 包含冒烟测试涉及的业务实体，不依赖任何传输实现
pub mod models;
