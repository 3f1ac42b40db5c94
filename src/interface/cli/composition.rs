//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;

use crate::application::ports::Reporter;
use crate::application::usecases::apply_settings_action::ApplySettingsActionUseCase;
use crate::application::usecases::inspect_panel::InspectPanelUseCase;
use crate::application::usecases::open_panel::OpenPanelUseCase;
use crate::application::usecases::select_gait::SelectGaitUseCase;
use crate::application::usecases::set_target::SetTargetUseCase;
use crate::application::usecases::trigger_service::TriggerServiceUseCase;
use crate::domain::topic::Topic;
use crate::infrastructure::adapters::{
    ConsoleReporter, JsonLinesGateway, JsonStateStore, StaticTopicRegistry,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    state_store: JsonStateStore,
    topic_registry: StaticTopicRegistry,
    gateway: JsonLinesGateway,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(None, Vec::new())
    }
}

impl AppComposition {
    /// 상태 파일 경로와 알려진 토픽 목록을 받아 실행 조합을 생성한다.
    pub fn new(state_path: Option<PathBuf>, topics: Vec<Topic>) -> Self {
        Self {
            state_store: JsonStateStore::new(state_path),
            topic_registry: StaticTopicRegistry::new(topics),
            gateway: JsonLinesGateway,
            reporter: ConsoleReporter::new(),
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    /// 패널 세션 열기 유스케이스를 생성한다.
    pub fn open_panel_usecase(&self) -> OpenPanelUseCase<'_> {
        OpenPanelUseCase {
            state_store: &self.state_store,
            topic_registry: &self.topic_registry,
        }
    }

    /// 설정 편집 유스케이스를 생성한다.
    pub fn apply_settings_action_usecase(&self) -> ApplySettingsActionUseCase<'_> {
        ApplySettingsActionUseCase {
            state_store: &self.state_store,
        }
    }

    pub fn inspect_panel_usecase(&self) -> InspectPanelUseCase {
        InspectPanelUseCase
    }

    /// 보행 선택 유스케이스를 생성한다.
    pub fn select_gait_usecase(&self) -> SelectGaitUseCase<'_> {
        SelectGaitUseCase {
            gateway: &self.gateway,
            state_store: &self.state_store,
            reporter: &self.reporter,
        }
    }

    pub fn set_target_usecase(&self) -> SetTargetUseCase<'_> {
        SetTargetUseCase {
            gateway: &self.gateway,
            reporter: &self.reporter,
        }
    }

    pub fn trigger_service_usecase(&self) -> TriggerServiceUseCase<'_> {
        TriggerServiceUseCase {
            gateway: &self.gateway,
            reporter: &self.reporter,
        }
    }
}
