//! 현재 설정 트리/설정을 확인하는 유스케이스.

use anyhow::Result;

use crate::application::panel::PanelSession;

/// 세션 상태를 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectPanelUseCase;

impl InspectPanelUseCase {
    /// 호스트 설정 패널에 전달되는 트리 서술.
    pub fn settings_tree_pretty_json(&self, session: &PanelSession) -> Result<String> {
        Ok(serde_json::to_string_pretty(&session.settings_tree())?)
    }

    /// 기본값이 채워진 유효 설정.
    pub fn config_pretty_json(&self, session: &PanelSession) -> Result<String> {
        Ok(serde_json::to_string_pretty(session.config())?)
    }
}
