//! 로봇 게이트웨이 포트 구현 어댑터.
//!
//! 원격 호출을 한 줄짜리 JSON 레코드로 표준출력에 기록한다.
//! 실제 전송은 이 출력을 소비하는 외부 브리지가 담당한다.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::ports::RobotGateway;
use crate::domain::mode_schedule::ModeSchedulePayload;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum OutgoingCall<'a> {
    Advertise {
        topic: &'a str,
        schema_name: &'a str,
    },
    Publish {
        topic: &'a str,
        payload: &'a ModeSchedulePayload,
    },
    CallService {
        service: &'a str,
        request: serde_json::Value,
    },
    SetParameter {
        name: &'a str,
        value: f64,
    },
}

/// 표준출력 JSON Lines 게이트웨이.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesGateway;

impl JsonLinesGateway {
    async fn emit(&self, call: OutgoingCall<'_>) -> Result<()> {
        let line = serde_json::to_string(&call)?;
        debug!(line = %line, "outgoing robot call");

        let mut out = tokio::io::stdout();
        out.write_all(line.as_bytes())
            .await
            .context("failed to write robot call")?;
        out.write_all(b"\n").await?;
        out.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl RobotGateway for JsonLinesGateway {
    async fn advertise(&self, topic: &str, schema_name: &str) -> Result<()> {
        self.emit(OutgoingCall::Advertise { topic, schema_name }).await
    }

    async fn publish(&self, topic: &str, payload: &ModeSchedulePayload) -> Result<()> {
        self.emit(OutgoingCall::Publish { topic, payload }).await
    }

    async fn call_service(&self, service: &str) -> Result<()> {
        self.emit(OutgoingCall::CallService {
            service,
            request: json!({}),
        })
        .await
    }

    async fn set_parameter(&self, name: &str, value: f64) -> Result<()> {
        self.emit(OutgoingCall::SetParameter { name, value }).await
    }
}
