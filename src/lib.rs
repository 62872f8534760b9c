//! Arsenal site tools
//!
//! アセット索引・静的サイト生成・カタログ検索

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod scanner;
