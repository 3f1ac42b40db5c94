//! legged-panel library root.
//! 보행 로봇 운용 패널의 설정 트리 리듀서/빌더와 Clean Architecture 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::config::{Config, PartialConfig, fill_defaults};
pub use application::settings::{build_settings_tree, reduce};
