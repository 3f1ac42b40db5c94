//! 저장된 상태와 토픽 목록으로 패널 세션을 여는 유스케이스.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::panel::PanelSession;
use crate::application::ports::{PanelStateStore, TopicRegistry};

/// 상태 복원 → 기본값 채우기 → 토픽 목록 반영 순서로 세션을 만든다.
pub struct OpenPanelUseCase<'a> {
    pub state_store: &'a dyn PanelStateStore,
    pub topic_registry: &'a dyn TopicRegistry,
}

impl<'a> OpenPanelUseCase<'a> {
    pub fn execute(&self) -> Result<PanelSession> {
        let partial = self
            .state_store
            .restore()
            .context("failed to restore panel state")?;
        let mut session = PanelSession::restore(partial);

        let topics = self
            .topic_registry
            .topics()
            .context("failed to list topics")?;
        session.update_topics(topics);
        debug!(topics = session.topics().len(), "panel session opened");

        Ok(session)
    }
}
