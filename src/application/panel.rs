//! 패널 인스턴스가 소유하는 상태(설정 + 토픽 목록).
//!
//! 전역 상태 대신 명시적으로 소유되는 값이며, 호스트 이벤트(복원, 편집, 토픽 갱신)마다
//! 리듀서/빌더를 거쳐 갱신된다.

use tracing::debug;

use crate::application::config::{Config, PartialConfig, fill_defaults};
use crate::application::settings::{UpdateRejected, build_settings_tree, reduce, try_reduce};
use crate::domain::mode_schedule::ModeSchedule;
use crate::domain::settings::{SettingsTreeAction, SettingsTreeNodes};
use crate::domain::topic::Topic;

pub const DEFAULT_PANEL_TITLE: &str = "Legged Robot";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSession {
    config: Config,
    topics: Vec<Topic>,
}

impl PanelSession {
    /// 복원된 부분 설정에 기본값을 채워 세션을 시작한다.
    pub fn restore(partial: PartialConfig) -> Self {
        Self {
            config: fill_defaults(partial),
            topics: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn title(&self) -> &'static str {
        DEFAULT_PANEL_TITLE
    }

    /// 현재 설정/토픽으로 트리를 새로 만든다(캐시하지 않음).
    pub fn settings_tree(&self) -> SettingsTreeNodes {
        build_settings_tree(&self.config, &self.topics)
    }

    /// 호스트 편집 이벤트를 반영하고 설정이 바뀌었는지 반환한다.
    pub fn apply_action(&mut self, action: &SettingsTreeAction) -> bool {
        let next = reduce(&self.config, action);
        self.replace_config(next)
    }

    /// [`apply_action`](Self::apply_action)과 같지만 해석 실패를 돌려준다.
    pub fn try_apply_action(
        &mut self,
        action: &SettingsTreeAction,
    ) -> Result<bool, UpdateRejected> {
        let next = try_reduce(&self.config, action)?;
        Ok(self.replace_config(next))
    }

    /// 토픽 목록을 갱신하고 트리 재구성이 필요한지 반환한다.
    pub fn update_topics(&mut self, topics: Vec<Topic>) -> bool {
        if self.topics == topics {
            return false;
        }
        debug!(count = topics.len(), "topic list changed");
        self.topics = topics;
        true
    }

    /// 운영자가 고른 보행을 현재 선택으로 기록한다.
    pub fn select_mode_schedule(&mut self, schedule: ModeSchedule) -> bool {
        let next = Config {
            mode_schedule: schedule,
            ..self.config.clone()
        };
        self.replace_config(next)
    }

    fn replace_config(&mut self, next: Config) -> bool {
        if next == self.config {
            return false;
        }
        self.config = next;
        true
    }
}
