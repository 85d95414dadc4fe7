//! HR Management System - 人力资源管理后端
//!
//! # 架构概述
//!
//! 浏览器端 HR 管理工具的 HTTP 后端：九张关联表的增删改查，
//! 统一返回结构化 JSON。
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、服务器启动
//! ├── api/           # HTTP 路由和处理器 (每个实体一个子模块)
//! ├── db/            # 数据库层
//! │   ├── models/      # 行类型、表单载荷、枚举
//! │   └── repository/  # 参数化 SQL 查询
//! └── utils/         # 错误、日志、表单校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::utils::{AppError, AppResponse, AppResult, FieldError};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   __  ______
  / / / / __ \
 / /_/ / /_/ /
/ __  / _, _/
/_/ /_/_/ |_|  Management System
    "#
    );
}
