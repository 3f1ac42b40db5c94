//! 기립/착지/시뮬레이션 리셋 서비스 호출 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::config::Config;
use crate::application::panel::PanelSession;
use crate::application::ports::{Reporter, RobotGateway};
use crate::domain::command::ServiceCommand;

pub struct TriggerServiceUseCase<'a> {
    pub gateway: &'a dyn RobotGateway,
    pub reporter: &'a dyn Reporter,
}

impl<'a> TriggerServiceUseCase<'a> {
    pub async fn execute(&self, session: &PanelSession, command: ServiceCommand) -> Result<()> {
        let service = service_name(session.config(), command);

        self.gateway
            .call_service(service)
            .await
            .with_context(|| format!("failed to call service {service}"))?;
        info!(service, command = command.label(), "called robot service");
        self.reporter.status("service", &format!("{} -> {service}", command.label()));
        Ok(())
    }
}

pub fn service_name(config: &Config, command: ServiceCommand) -> &str {
    match command {
        ServiceCommand::StandUp => &config.stand_up_service,
        ServiceCommand::LayDown => &config.lay_down_service,
        ServiceCommand::ResetSimulation => &config.reset_simulation_service,
    }
}
