//! MPC 보행(gait) 모드 스케줄과 기본 카탈로그.
//!
//! 모드 값은 네 다리의 접지 여부를 비트로 표현한다(15 = 네 발 모두 접지, 0 = 비행 구간).

use serde::{Deserialize, Serialize};

/// 보행 하나를 정의하는 이벤트 시간/모드 시퀀스 묶음.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSchedule {
    /// UI 표시용 이름
    pub label: String,
    /// 기계 식별자
    pub name: String,
    /// 단계 전환 시각(초), 길이는 `mode_sequence.len() + 1`
    pub event_times: Vec<f64>,
    /// 이벤트 시간 사이 구간별 모드 식별자
    pub mode_sequence: Vec<i8>,
}

/// 모드 스케줄 토픽으로 발행되는 메시지 본문.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSchedulePayload {
    pub event_times: Vec<f64>,
    pub mode_sequence: Vec<i8>,
}

impl ModeSchedule {
    pub fn new(label: &str, name: &str, event_times: &[f64], mode_sequence: &[i8]) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            event_times: event_times.to_vec(),
            mode_sequence: mode_sequence.to_vec(),
        }
    }

    /// 기본 선택값인 "Stance" 스케줄.
    pub fn stance() -> Self {
        let (label, name, event_times, mode_sequence) = CATALOG[0];
        Self::new(label, name, event_times, mode_sequence)
    }

    /// 길이 관계와 이벤트 시간 단조성을 검사한다.
    pub fn is_well_formed(&self) -> bool {
        self.event_times.len() == self.mode_sequence.len() + 1
            && self.event_times.windows(2).all(|w| w[0] <= w[1])
    }

    /// 한 주기 길이(초).
    pub fn period(&self) -> f64 {
        match (self.event_times.first(), self.event_times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    pub fn payload(&self) -> ModeSchedulePayload {
        ModeSchedulePayload {
            event_times: self.event_times.clone(),
            mode_sequence: self.mode_sequence.clone(),
        }
    }
}

type CatalogEntry = (&'static str, &'static str, &'static [f64], &'static [i8]);

const CATALOG: &[CatalogEntry] = &[
    ("Stance", "stance", &[0.0, 0.5], &[15]),
    ("Trot", "trot", &[0.0, 0.3, 0.6], &[9, 6]),
    (
        "Standing trot",
        "standing_trot",
        &[0.0, 0.25, 0.3, 0.55, 0.6],
        &[9, 15, 6, 15],
    ),
    (
        "Flying trot",
        "flying_trot",
        &[0.0, 0.15, 0.2, 0.35, 0.4],
        &[9, 0, 6, 0],
    ),
    ("Pace", "pace", &[0.0, 0.28, 0.3, 0.58, 0.6], &[10, 0, 5, 0]),
    (
        "Standing pace",
        "standing_pace",
        &[0.0, 0.3, 0.35, 0.65, 0.7],
        &[10, 15, 5, 15],
    ),
    (
        "Dynamic walk",
        "dynamic_walk",
        &[0.0, 0.2, 0.3, 0.5, 0.7, 0.8, 1.0],
        &[13, 5, 7, 14, 10, 11],
    ),
    (
        "Static walk",
        "static_walk",
        &[0.0, 0.3, 0.6, 0.9, 1.2],
        &[13, 7, 14, 11],
    ),
    ("Amble", "amble", &[0.0, 0.15, 0.4, 0.55, 0.8], &[6, 10, 9, 5]),
    (
        "Lindyhop",
        "lindyhop",
        &[
            0.0, 0.35, 0.45, 0.8, 0.9, 1.125, 1.35, 1.7, 1.8, 2.025, 2.25, 2.6, 2.7,
        ],
        &[9, 15, 6, 15, 10, 5, 10, 15, 5, 10, 5, 15],
    ),
    (
        "Skipping",
        "skipping",
        &[
            0.0, 0.21, 0.3, 0.51, 0.6, 0.81, 0.9, 1.11, 1.2, 1.41, 1.5, 1.71, 1.8, 2.01, 2.1,
            2.31, 2.4,
        ],
        &[9, 0, 9, 0, 9, 0, 9, 0, 6, 0, 6, 0, 6, 0, 6, 0],
    ),
    ("Pawup", "pawup", &[0.0, 2.0], &[7]),
];

/// 운영자에게 제공되는 고정 보행 카탈로그(표시 순서 유지).
pub fn default_mode_schedules() -> Vec<ModeSchedule> {
    CATALOG
        .iter()
        .map(|(label, name, event_times, mode_sequence)| {
            ModeSchedule::new(label, name, event_times, mode_sequence)
        })
        .collect()
}

/// 기계 식별자 또는 표시 이름(대소문자 무시)으로 카탈로그 항목을 찾는다.
pub fn find_mode_schedule(key: &str) -> Option<ModeSchedule> {
    let key = key.trim();
    CATALOG
        .iter()
        .find(|(label, name, _, _)| *name == key || label.eq_ignore_ascii_case(key))
        .map(|(label, name, event_times, mode_sequence)| {
            ModeSchedule::new(label, name, event_times, mode_sequence)
        })
}
