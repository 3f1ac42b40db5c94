//! 패널 설정 스키마(순수 데이터)와 기본값 채우기.
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::mode_schedule::ModeSchedule;

pub const DEFAULT_MODE_SCHEDULE_TOPIC: &str = "/legged_robot_mpc_mode_schedule";
pub const DEFAULT_STAND_UP_SERVICE: &str = "/legged_controller/stand_up";
pub const DEFAULT_LAY_DOWN_SERVICE: &str = "/legged_controller/lay_down";
pub const DEFAULT_RESET_SIMULATION_SERVICE: &str = "/legged_robot/reset_simulation";
pub const DEFAULT_COM_HEIGHT_PARAM: &str = "/legged_controller/com_height";
pub const DEFAULT_DISPLACEMENT_VELOCITY_PARAM: &str =
    "/legged_controller/target_displacement_velocity";
pub const DEFAULT_ROTATION_VELOCITY_PARAM: &str = "/legged_controller/target_rotation_velocity";

/// 기본값이 모두 채워진 패널 설정. 설정 트리와 모든 송신 명령의 단일 원천이다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// 모드 스케줄 발행 토픽
    pub mode_schedule_topic: String,
    pub stand_up_service: String,
    pub lay_down_service: String,
    pub reset_simulation_service: String,
    /// 무게중심 높이 파라미터
    pub com_height_param: String,
    pub displacement_velocity_param: String,
    pub rotation_velocity_param: String,
    /// 현재 선택된 보행
    pub mode_schedule: ModeSchedule,
}

/// 복원된(일부 필드가 빠졌을 수 있는) 설정.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    pub mode_schedule_topic: Option<String>,
    pub stand_up_service: Option<String>,
    pub lay_down_service: Option<String>,
    pub reset_simulation_service: Option<String>,
    pub com_height_param: Option<String>,
    pub displacement_velocity_param: Option<String>,
    pub rotation_velocity_param: Option<String>,
    pub mode_schedule: Option<ModeSchedule>,
}

impl Default for Config {
    fn default() -> Self {
        fill_defaults(PartialConfig::default())
    }
}

/// 빠진 필드마다 문서화된 기본값을 채운다. 여러 번 적용해도 결과가 같다.
pub fn fill_defaults(partial: PartialConfig) -> Config {
    Config {
        mode_schedule_topic: partial
            .mode_schedule_topic
            .unwrap_or_else(|| DEFAULT_MODE_SCHEDULE_TOPIC.to_string()),
        stand_up_service: partial
            .stand_up_service
            .unwrap_or_else(|| DEFAULT_STAND_UP_SERVICE.to_string()),
        lay_down_service: partial
            .lay_down_service
            .unwrap_or_else(|| DEFAULT_LAY_DOWN_SERVICE.to_string()),
        reset_simulation_service: partial
            .reset_simulation_service
            .unwrap_or_else(|| DEFAULT_RESET_SIMULATION_SERVICE.to_string()),
        com_height_param: partial
            .com_height_param
            .unwrap_or_else(|| DEFAULT_COM_HEIGHT_PARAM.to_string()),
        displacement_velocity_param: partial
            .displacement_velocity_param
            .unwrap_or_else(|| DEFAULT_DISPLACEMENT_VELOCITY_PARAM.to_string()),
        rotation_velocity_param: partial
            .rotation_velocity_param
            .unwrap_or_else(|| DEFAULT_ROTATION_VELOCITY_PARAM.to_string()),
        mode_schedule: partial.mode_schedule.unwrap_or_else(ModeSchedule::stance),
    }
}

impl PartialConfig {
    /// 호스트가 복원한 원시 JSON을 필드 단위로 관대하게 해석한다.
    /// - 형태가 맞지 않는 필드는 경고 후 비워 두고 기본값 채우기에 맡긴다.
    pub fn from_value(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            if !raw.is_null() {
                warn!(kind = json_kind(raw), "restored panel state is not an object; ignoring it");
            }
            return Self::default();
        };

        Self {
            mode_schedule_topic: lenient_field(obj, "modeScheduleTopic"),
            stand_up_service: lenient_field(obj, "standUpService"),
            lay_down_service: lenient_field(obj, "layDownService"),
            reset_simulation_service: lenient_field(obj, "resetSimulationService"),
            com_height_param: lenient_field(obj, "comHeightParam"),
            displacement_velocity_param: lenient_field(obj, "displacementVelocityParam"),
            rotation_velocity_param: lenient_field(obj, "rotationVelocityParam"),
            mode_schedule: lenient_field(obj, "modeSchedule"),
        }
    }

    /// 후순위 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: PartialConfig) {
        if other.mode_schedule_topic.is_some() {
            self.mode_schedule_topic = other.mode_schedule_topic;
        }
        if other.stand_up_service.is_some() {
            self.stand_up_service = other.stand_up_service;
        }
        if other.lay_down_service.is_some() {
            self.lay_down_service = other.lay_down_service;
        }
        if other.reset_simulation_service.is_some() {
            self.reset_simulation_service = other.reset_simulation_service;
        }
        if other.com_height_param.is_some() {
            self.com_height_param = other.com_height_param;
        }
        if other.displacement_velocity_param.is_some() {
            self.displacement_velocity_param = other.displacement_velocity_param;
        }
        if other.rotation_velocity_param.is_some() {
            self.rotation_velocity_param = other.rotation_velocity_param;
        }
        if other.mode_schedule.is_some() {
            self.mode_schedule = other.mode_schedule;
        }
    }
}

impl From<Config> for PartialConfig {
    fn from(config: Config) -> Self {
        Self {
            mode_schedule_topic: Some(config.mode_schedule_topic),
            stand_up_service: Some(config.stand_up_service),
            lay_down_service: Some(config.lay_down_service),
            reset_simulation_service: Some(config.reset_simulation_service),
            com_height_param: Some(config.com_height_param),
            displacement_velocity_param: Some(config.displacement_velocity_param),
            rotation_velocity_param: Some(config.rotation_velocity_param),
            mode_schedule: Some(config.mode_schedule),
        }
    }
}

fn lenient_field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.get(key).filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(
                field = key,
                error = %err,
                "restored field has an incompatible shape; using default"
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
