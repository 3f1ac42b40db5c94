//! Domain layer
//! 보행 스케줄, 목표값, 토픽 메타데이터, 설정 트리 값 객체를 외부 의존성 없이 표현한다.

pub mod command;
pub mod mode_schedule;
pub mod settings;
pub mod target;
pub mod topic;
