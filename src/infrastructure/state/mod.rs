//! 패널 상태(JSON) 복원/저장 모듈.
//! 여러 경로의 상태 파일을 우선순위대로 병합해 부분 설정을 만든다.

mod loader;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::config::{Config, PartialConfig};

pub use loader::{STATE_ENV_VAR, state_paths};

/// 병합된 부분 설정을 읽는다.
pub fn restore(explicit: Option<&Path>) -> Result<PartialConfig> {
    Ok(loader::load_layered_state(explicit)?.partial)
}

/// 설정을 저장하고 기록한 경로를 반환한다.
pub fn persist(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let path = loader::writable_state_path(explicit);
    loader::write_state(&path, config)?;
    Ok(path)
}
