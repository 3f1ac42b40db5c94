//! 설정 트리 편집을 반영하고 저장하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::panel::PanelSession;
use crate::application::ports::PanelStateStore;
use crate::domain::settings::SettingsTreeAction;

pub struct ApplySettingsActionUseCase<'a> {
    pub state_store: &'a dyn PanelStateStore,
}

impl<'a> ApplySettingsActionUseCase<'a> {
    /// 호스트가 보낸 편집을 반영한다. 해석할 수 없는 편집은 무시된다.
    /// 설정이 바뀌었으면 저장하고 `true`를 반환한다.
    pub fn execute(&self, session: &mut PanelSession, action: &SettingsTreeAction) -> Result<bool> {
        let changed = session.apply_action(action);
        self.persist_if(changed, session)
    }

    /// 운영자가 직접 입력한 편집을 반영한다. 해석 실패는 오류로 돌려준다.
    pub fn execute_strict(
        &self,
        session: &mut PanelSession,
        action: &SettingsTreeAction,
    ) -> Result<bool> {
        let changed = session.try_apply_action(action)?;
        self.persist_if(changed, session)
    }

    fn persist_if(&self, changed: bool, session: &PanelSession) -> Result<bool> {
        if changed {
            self.state_store
                .persist(session.config())
                .context("failed to persist panel state")?;
        }
        Ok(changed)
    }
}
