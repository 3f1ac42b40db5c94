//! 무게중심 높이/목표 속도 파라미터 설정 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::config::Config;
use crate::application::panel::PanelSession;
use crate::application::ports::{Reporter, RobotGateway};
use crate::domain::target::LocomotionTarget;

pub struct SetTargetUseCase<'a> {
    pub gateway: &'a dyn RobotGateway,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SetTargetUseCase<'a> {
    /// 값을 검사한 뒤 설정에 지정된 파라미터로 전달한다.
    pub async fn execute(
        &self,
        session: &PanelSession,
        target: LocomotionTarget,
        value: f64,
    ) -> Result<()> {
        let value = target.validate(value)?;
        let param = parameter_name(session.config(), target);

        self.gateway
            .set_parameter(param, value)
            .await
            .with_context(|| format!("failed to set parameter {param}"))?;
        info!(param, value, "set locomotion target");
        self.reporter.status(
            "parameter",
            &format!("{param} = {value} {}", target.unit()),
        );
        Ok(())
    }
}

/// 목표값 종류에 대응하는 파라미터 이름.
pub fn parameter_name(config: &Config, target: LocomotionTarget) -> &str {
    match target {
        LocomotionTarget::ComHeight => &config.com_height_param,
        LocomotionTarget::DisplacementVelocity => &config.displacement_velocity_param,
        LocomotionTarget::RotationVelocity => &config.rotation_velocity_param,
    }
}
