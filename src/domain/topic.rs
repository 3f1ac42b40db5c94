//! 호스트 토픽 레지스트리가 제공하는 토픽 메타데이터.

use serde::{Deserialize, Serialize};

/// MPC 모드 스케줄 메시지 스키마 이름.
pub const MODE_SCHEDULE_SCHEMA: &str = "ocs2_msgs/mode_schedule";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: String,
    pub schema_name: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: schema_name.into(),
        }
    }

    /// `NAME=SCHEMA` 형식 문자열을 토픽으로 해석한다.
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, schema) = raw.split_once('=')?;
        let name = name.trim();
        let schema = schema.trim();
        if name.is_empty() || schema.is_empty() {
            return None;
        }
        Some(Self::new(name, schema))
    }

    pub fn carries_mode_schedule(&self) -> bool {
        self.schema_name == MODE_SCHEDULE_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_name_and_schema() {
        let topic = Topic::parse("/legged_robot_mpc_mode_schedule=ocs2_msgs/mode_schedule")
            .expect("topic must parse");
        assert_eq!(topic.name, "/legged_robot_mpc_mode_schedule");
        assert!(topic.carries_mode_schedule());
    }

    #[test]
    fn parse_rejects_missing_schema() {
        assert!(Topic::parse("/cmd_vel").is_none());
        assert!(Topic::parse("/cmd_vel=").is_none());
    }
}
