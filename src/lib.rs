//! Projects Portal command-line shell
//!
//! 项目门户命令行外壳：配置加载、日志初始化、适配器装配

pub mod bootstrap;
pub mod cli;
pub mod render;
