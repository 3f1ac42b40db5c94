//! Application layer
//! 패널 설정/세션 규칙과 유스케이스를 정의하고 포트(호스트 세션 추상 인터페이스)를 통해 인프라를 사용한다.

pub mod config;
pub mod panel;
pub mod ports;
pub mod settings;
pub mod usecases;
