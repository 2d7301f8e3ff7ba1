//! 面板视图

pub mod browser;
pub mod form;
