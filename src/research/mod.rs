//! 调研流程 - 查询合成、响应提取与整体编排

pub mod composer;
pub mod extractor;
pub mod orchestrator;
pub mod template;
