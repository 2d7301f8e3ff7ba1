//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! `App` 持有页面字段、两个选择组件（来自 ticker-selector-core）以及纯界面状态
//! （焦点、列表光标、弹窗）。只有 Update 层会修改它，View 层只读取。
//!

mod app;
mod focus;
pub mod state;

pub use app::{ApiStatus, App};
pub use focus::FocusPanel;
pub use state::{BrowserColumn, BrowserViewState, FormState, Modal, ModalState};
