//! EduConnect 管理控制台
//!
//! 面向学校管理员的控制台后端：对 EduConnect REST 后端的十二类资源
//! 提供列表、表单编辑和成绩计算，后端不可用时可切换到内存夹具数据。
//!
//! # 架构
//! - `config`: 配置管理
//! - `datasource`: 后端数据源（HTTP / 内存夹具）
//! - `errors`: 统一错误处理
//! - `forms`: 表单控制器与草稿
//! - `grading`: 成绩计算
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `utils`: 工具函数

pub mod config;
pub mod datasource;
pub mod errors;
pub mod forms;
pub mod grading;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod utils;
