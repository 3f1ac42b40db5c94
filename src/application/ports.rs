//! 애플리케이션 계층이 의존하는 포트(호스트 세션 추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, PartialConfig};
use crate::domain::mode_schedule::ModeSchedulePayload;
use crate::domain::topic::Topic;

/// 패널 상태 복원/저장 포트.
pub trait PanelStateStore: Send + Sync {
    /// 이전에 저장된(일부 필드가 빠졌을 수 있는) 설정을 읽는다.
    fn restore(&self) -> Result<PartialConfig>;
    /// 마지막으로 만들어진 설정을 저장한다.
    fn persist(&self, config: &Config) -> Result<()>;
}

/// 호스트가 알고 있는 토픽 목록(순서 유지) 조회 포트.
pub trait TopicRegistry: Send + Sync {
    fn topics(&self) -> Result<Vec<Topic>>;
}

/// 로봇 스택으로 나가는 원격 호출 포트.
/// 호출 결과는 해석하지 않는다(fire-and-forget).
#[async_trait]
pub trait RobotGateway: Send + Sync {
    async fn advertise(&self, topic: &str, schema_name: &str) -> Result<()>;
    async fn publish(&self, topic: &str, payload: &ModeSchedulePayload) -> Result<()>;
    /// 빈 요청으로 서비스를 호출한다.
    async fn call_service(&self, service: &str) -> Result<()>;
    async fn set_parameter(&self, name: &str, value: f64) -> Result<()>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
}
