//! 설정 트리 편집 이벤트를 설정 값에 반영하는 리듀서.

use serde_json::Value;
use tracing::{debug, warn};

use super::path::{ConfigField, ScheduleField, UpdateRejected};
use crate::application::config::Config;
use crate::domain::mode_schedule::ModeSchedule;
use crate::domain::settings::{SettingsTreeAction, UpdatePayload};

/// 편집 하나를 적용한 새 설정을 반환한다. 이전 설정은 변경하지 않는다.
/// - `update`가 아닌 액션은 무시한다.
/// - 해석할 수 없는 경로/값은 경고 후 무시하고 이전 설정을 그대로 돌려준다.
pub fn reduce(config: &Config, action: &SettingsTreeAction) -> Config {
    match try_reduce(config, action) {
        Ok(next) => next,
        Err(err) => {
            warn!(error = %err, "ignoring settings update");
            config.clone()
        }
    }
}

/// [`reduce`]와 같지만 경로/값 해석 실패를 호출자에게 돌려준다.
pub fn try_reduce(config: &Config, action: &SettingsTreeAction) -> Result<Config, UpdateRejected> {
    let SettingsTreeAction::Update(payload) = action else {
        debug!(action = action.kind(), "settings action is not an update; config unchanged");
        return Ok(config.clone());
    };

    let mut next = config.clone();
    apply_update(&mut next, payload)?;
    debug!(path = %payload.path.join("."), "applied settings update");
    Ok(next)
}

fn apply_update(config: &mut Config, payload: &UpdatePayload) -> Result<(), UpdateRejected> {
    // 첫 조각은 트리 그룹 키이므로 설정 필드와 대응하지 않는다.
    let Some((_, segments)) = payload.path.split_first() else {
        return Err(UpdateRejected::MissingField(payload.path.clone()));
    };
    if segments.is_empty() {
        return Err(UpdateRejected::MissingField(payload.path.clone()));
    }

    let field = ConfigField::parse(segments)?;
    let path = segments.join(".");
    let value = &payload.value;

    match field {
        ConfigField::ModeScheduleTopic => config.mode_schedule_topic = as_string(value, &path)?,
        ConfigField::StandUpService => config.stand_up_service = as_string(value, &path)?,
        ConfigField::LayDownService => config.lay_down_service = as_string(value, &path)?,
        ConfigField::ResetSimulationService => {
            config.reset_simulation_service = as_string(value, &path)?
        }
        ConfigField::ComHeightParam => config.com_height_param = as_string(value, &path)?,
        ConfigField::DisplacementVelocityParam => {
            config.displacement_velocity_param = as_string(value, &path)?
        }
        ConfigField::RotationVelocityParam => {
            config.rotation_velocity_param = as_string(value, &path)?
        }
        ConfigField::ModeSchedule(sub) => {
            apply_schedule(&mut config.mode_schedule, sub, value, &path)?
        }
    }

    Ok(())
}

fn apply_schedule(
    schedule: &mut ModeSchedule,
    field: ScheduleField,
    value: &Value,
    path: &str,
) -> Result<(), UpdateRejected> {
    match field {
        ScheduleField::Whole => *schedule = parse_as(value, path, "a mode schedule object")?,
        ScheduleField::Label => schedule.label = as_string(value, path)?,
        ScheduleField::Name => schedule.name = as_string(value, path)?,
        ScheduleField::EventTimes => {
            schedule.event_times = parse_as(value, path, "an array of numbers")?
        }
        ScheduleField::ModeSequence => {
            schedule.mode_sequence = parse_as(value, path, "an array of mode ids")?
        }
        ScheduleField::EventTime(index) => {
            let time = value.as_f64().ok_or_else(|| mismatch(path, "a number"))?;
            set_or_append(&mut schedule.event_times, index, time, path)?
        }
        ScheduleField::Mode(index) => {
            let mode = value
                .as_i64()
                .and_then(|v| i8::try_from(v).ok())
                .ok_or_else(|| mismatch(path, "a mode id"))?;
            set_or_append(&mut schedule.mode_sequence, index, mode, path)?
        }
    }

    Ok(())
}

/// 기존 인덱스는 덮어쓰고, 길이와 같은 인덱스는 끝에 추가한다.
fn set_or_append<T>(
    items: &mut Vec<T>,
    index: usize,
    item: T,
    path: &str,
) -> Result<(), UpdateRejected> {
    let len = items.len();
    if index < len {
        items[index] = item;
    } else if index == len {
        items.push(item);
    } else {
        return Err(UpdateRejected::IndexOutOfRange {
            path: path.to_string(),
            index,
            len,
        });
    }
    Ok(())
}

fn as_string(value: &Value, path: &str) -> Result<String, UpdateRejected> {
    value
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| mismatch(path, "a string"))
}

fn parse_as<T: serde::de::DeserializeOwned>(
    value: &Value,
    path: &str,
    expected: &'static str,
) -> Result<T, UpdateRejected> {
    serde_json::from_value(value.clone()).map_err(|_| mismatch(path, expected))
}

fn mismatch(path: &str, expected: &'static str) -> UpdateRejected {
    UpdateRejected::TypeMismatch {
        path: path.to_string(),
        expected,
    }
}
