//! 상태 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::config::{Config, PartialConfig};

pub const STATE_ENV_VAR: &str = "LEGGED_PANEL_STATE";

const STATE_DIR: &str = "legged-panel";
const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone)]
pub(crate) struct LoadedState {
    pub partial: PartialConfig,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 상태 파일을 병합한다.
/// 읽을 수 없거나 JSON이 아닌 파일은 경고 후 건너뛴다.
pub(crate) fn load_layered_state(explicit: Option<&Path>) -> Result<LoadedState> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = PartialConfig::default();
    let mut loaded_paths = Vec::new();

    for path in state_paths(explicit) {
        if !path.exists() {
            continue;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read panel state; skipping");
                continue;
            }
        };
        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "panel state is not valid JSON; skipping"
                );
                continue;
            }
        };

        merged.merge_from(PartialConfig::from_value(&value));
        debug!(path = %path.display(), "loaded panel state");
        loaded_paths.push(path);
    }

    Ok(LoadedState {
        partial: merged,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 환경변수 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn state_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc").join(STATE_DIR).join(STATE_FILE)];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join(STATE_DIR).join(STATE_FILE));
    }

    paths.push(project_state_path());

    if let Ok(path) = env::var(STATE_ENV_VAR) {
        paths.push(PathBuf::from(path));
    }

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    dedup_paths(paths)
}

/// 저장 대상 경로를 결정한다.
/// 명시 경로 > 환경변수 > 로딩된 최고 우선순위 파일 > 사용자 설정 디렉터리 순이다.
pub(crate) fn writable_state_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = env::var(STATE_ENV_VAR) {
        return PathBuf::from(path);
    }

    // 시스템 경로(/etc)는 저장 대상에서 제외한다.
    let system = PathBuf::from("/etc").join(STATE_DIR).join(STATE_FILE);
    if let Ok(loaded) = load_layered_state(None)
        && let Some(last) = loaded.loaded_paths.iter().rev().find(|p| **p != system)
    {
        return last.clone();
    }

    match dirs::config_dir() {
        Some(base) => base.join(STATE_DIR).join(STATE_FILE),
        None => project_state_path(),
    }
}

pub(crate) fn write_state(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let rendered = serde_json::to_string_pretty(config)?;
    fs::write(path, format!("{rendered}\n"))
        .with_context(|| format!("failed to write panel state at {}", path.display()))?;
    debug!(path = %path.display(), "persisted panel state");
    Ok(())
}

fn project_state_path() -> PathBuf {
    PathBuf::from(format!(".{STATE_DIR}")).join(STATE_FILE)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
