//! 패널 상태 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::application::config::{Config, PartialConfig};
use crate::application::ports::PanelStateStore;
use crate::infrastructure::state;

/// JSON 파일 기반 상태 저장소 어댑터.
#[derive(Debug, Clone, Default)]
pub struct JsonStateStore {
    explicit_path: Option<PathBuf>,
}

impl JsonStateStore {
    /// `--state`로 지정된 경로가 있으면 최우선으로 사용한다.
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }
}

impl PanelStateStore for JsonStateStore {
    fn restore(&self) -> Result<PartialConfig> {
        state::restore(self.explicit_path.as_deref())
    }

    fn persist(&self, config: &Config) -> Result<()> {
        let path = state::persist(self.explicit_path.as_deref(), config)?;
        info!(path = %path.display(), "saved panel state");
        Ok(())
    }
}
