//! 운영자/호스트 이벤트별 유스케이스.

pub mod apply_settings_action;
pub mod inspect_panel;
pub mod open_panel;
pub mod select_gait;
pub mod set_target;
pub mod trigger_service;
