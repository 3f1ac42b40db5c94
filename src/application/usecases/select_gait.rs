//! 보행(MPC 모드 스케줄) 선택 유스케이스.

use anyhow::{Context, Result, anyhow};
use tracing::info;

use crate::application::panel::PanelSession;
use crate::application::ports::{PanelStateStore, Reporter, RobotGateway};
use crate::domain::mode_schedule::{ModeSchedule, find_mode_schedule};
use crate::domain::topic::MODE_SCHEDULE_SCHEMA;

/// 카탈로그의 보행을 모드 스케줄 토픽으로 발행하고 현재 선택으로 저장한다.
pub struct SelectGaitUseCase<'a> {
    pub gateway: &'a dyn RobotGateway,
    pub state_store: &'a dyn PanelStateStore,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SelectGaitUseCase<'a> {
    /// `key`는 보행 식별자(name) 또는 표시 이름(label)이다.
    pub async fn execute(&self, session: &mut PanelSession, key: &str) -> Result<ModeSchedule> {
        let schedule = find_mode_schedule(key)
            .ok_or_else(|| anyhow!("unknown gait `{key}` (run `gaits` to list them)"))?;
        let topic = session.config().mode_schedule_topic.clone();

        // 발행 전에 토픽 스키마를 먼저 알린다.
        self.gateway
            .advertise(&topic, MODE_SCHEDULE_SCHEMA)
            .await
            .with_context(|| format!("failed to advertise {topic}"))?;
        self.gateway
            .publish(&topic, &schedule.payload())
            .await
            .with_context(|| format!("failed to publish mode schedule to {topic}"))?;
        info!(gait = %schedule.name, topic = %topic, "published mode schedule");
        self.reporter
            .status("gait", &format!("{} -> {}", schedule.label, topic));
        self.reporter
            .kv("event times", &format!("{:?}", schedule.event_times));
        self.reporter
            .kv("modes", &format!("{:?}", schedule.mode_sequence));

        if session.select_mode_schedule(schedule.clone()) {
            self.state_store
                .persist(session.config())
                .context("failed to persist panel state")?;
        }

        Ok(schedule)
    }
}
