//! 편집 경로를 설정 필드로 해석하는 고정 규칙.

use thiserror::Error;

/// 편집 경로 해석/적용 실패 사유.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateRejected {
    #[error("update path has no field segment: {0:?}")]
    MissingField(Vec<String>),
    #[error("no config field at path `{0}`")]
    UnknownPath(String),
    #[error("field `{path}` expects {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },
    #[error("index {index} is out of range for `{path}` (len {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

/// 편집 가능한 설정 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ModeScheduleTopic,
    StandUpService,
    LayDownService,
    ResetSimulationService,
    ComHeightParam,
    DisplacementVelocityParam,
    RotationVelocityParam,
    ModeSchedule(ScheduleField),
}

/// `modeSchedule` 하위 경로.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Whole,
    Label,
    Name,
    EventTimes,
    EventTime(usize),
    ModeSequence,
    Mode(usize),
}

impl ConfigField {
    /// 그룹 키를 제외한 경로 조각을 필드로 해석한다.
    pub fn parse(segments: &[String]) -> Result<Self, UpdateRejected> {
        let unknown = || UpdateRejected::UnknownPath(segments.join("."));
        let keys: Vec<&str> = segments.iter().map(String::as_str).collect();

        let field = match keys.as_slice() {
            [] => return Err(UpdateRejected::MissingField(Vec::new())),
            ["modeScheduleTopic"] => Self::ModeScheduleTopic,
            ["standUpService"] => Self::StandUpService,
            ["layDownService"] => Self::LayDownService,
            ["resetSimulationService"] => Self::ResetSimulationService,
            ["comHeightParam"] => Self::ComHeightParam,
            ["displacementVelocityParam"] => Self::DisplacementVelocityParam,
            ["rotationVelocityParam"] => Self::RotationVelocityParam,
            ["modeSchedule"] => Self::ModeSchedule(ScheduleField::Whole),
            ["modeSchedule", "label"] => Self::ModeSchedule(ScheduleField::Label),
            ["modeSchedule", "name"] => Self::ModeSchedule(ScheduleField::Name),
            ["modeSchedule", "eventTimes"] => Self::ModeSchedule(ScheduleField::EventTimes),
            ["modeSchedule", "modeSequence"] => Self::ModeSchedule(ScheduleField::ModeSequence),
            ["modeSchedule", "eventTimes", idx] => {
                Self::ModeSchedule(ScheduleField::EventTime(idx.parse().map_err(|_| unknown())?))
            }
            ["modeSchedule", "modeSequence", idx] => {
                Self::ModeSchedule(ScheduleField::Mode(idx.parse().map_err(|_| unknown())?))
            }
            _ => return Err(unknown()),
        };

        Ok(field)
    }
}
