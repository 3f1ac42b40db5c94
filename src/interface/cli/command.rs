//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::domain::command::ServiceCommand;
use crate::domain::settings::SettingsTreeAction;
use crate::domain::target::LocomotionTarget;
use crate::domain::topic::Topic;

#[derive(Debug, Parser)]
#[command(name = "legged-panel")]
#[command(about = "Operator panel for a legged robot locomotion controller")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Panel state file (highest priority when restoring, target when saving)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Known topic as NAME=SCHEMA, repeatable
    #[arg(long = "topic", global = true, value_parser = parse_topic_arg)]
    topics: Vec<Topic>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the settings tree handed to the host settings panel
    Tree,
    /// Print the effective panel config
    Config,
    /// Edit a config field, e.g. `set parameters.comHeightParam /robot/com_height`
    Set {
        /// Tree path: group key followed by the field key
        path: String,
        /// New value (JSON, or a plain string)
        value: String,
    },
    /// Apply a raw host settings action (JSON)
    Action { json: String },
    /// List built-in gaits
    Gaits,
    /// Publish a built-in gait to the mode schedule topic
    Gait {
        /// Gait name or label
        #[arg(num_args = 1.., required = true)]
        name: Vec<String>,
    },
    /// Set the COM height target (m)
    ComHeight {
        #[arg(allow_negative_numbers = true)]
        meters: f64,
    },
    /// Set the target displacement velocity (m/s)
    DisplacementVelocity {
        #[arg(allow_negative_numbers = true)]
        meters_per_second: f64,
    },
    /// Set the target rotation velocity (rad/s)
    RotationVelocity {
        #[arg(allow_negative_numbers = true)]
        radians_per_second: f64,
    },
    /// Call the stand-up service
    StandUp,
    /// Call the lay-down service
    LayDown,
    /// Call the reset-simulation service
    ResetSimulation,
}

/// CLI와 REPL이 공유하는 패널 명령.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    ShowTree,
    ShowConfig,
    /// 운영자가 직접 입력한 편집(해석 실패는 오류).
    Edit(SettingsTreeAction),
    /// 호스트 형식의 편집(해석 실패는 무시).
    HostAction(SettingsTreeAction),
    ListGaits,
    SelectGait(String),
    SetTarget(LocomotionTarget, f64),
    Trigger(ServiceCommand),
}

pub enum CliAction {
    Interactive(CliContext),
    Run(CliContext, PanelCommand),
}

/// 명령과 무관한 실행 환경 옵션.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub state_path: Option<PathBuf>,
    pub topics: Vec<Topic>,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        let cli = Cli::parse();
        let context = CliContext {
            state_path: cli.state,
            topics: cli.topics,
        };

        let Some(command) = cli.command else {
            return Ok(CliAction::Interactive(context));
        };

        let command = match command {
            Commands::Tree => PanelCommand::ShowTree,
            Commands::Config => PanelCommand::ShowConfig,
            Commands::Set { path, value } => PanelCommand::Edit(edit_action(&path, &value)?),
            Commands::Action { json } => PanelCommand::HostAction(parse_host_action(&json)?),
            Commands::Gaits => PanelCommand::ListGaits,
            Commands::Gait { name } => PanelCommand::SelectGait(name.join(" ")),
            Commands::ComHeight { meters } => {
                PanelCommand::SetTarget(LocomotionTarget::ComHeight, meters)
            }
            Commands::DisplacementVelocity { meters_per_second } => {
                PanelCommand::SetTarget(LocomotionTarget::DisplacementVelocity, meters_per_second)
            }
            Commands::RotationVelocity { radians_per_second } => {
                PanelCommand::SetTarget(LocomotionTarget::RotationVelocity, radians_per_second)
            }
            Commands::StandUp => PanelCommand::Trigger(ServiceCommand::StandUp),
            Commands::LayDown => PanelCommand::Trigger(ServiceCommand::LayDown),
            Commands::ResetSimulation => PanelCommand::Trigger(ServiceCommand::ResetSimulation),
        };

        Ok(CliAction::Run(context, command))
    }
}

/// `group.field[.sub...]` 경로와 값 문자열로 update 액션을 만든다.
pub fn edit_action(path: &str, raw_value: &str) -> Result<SettingsTreeAction, String> {
    let segments: Vec<&str> = path
        .split(['.', '/'])
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() < 2 {
        return Err(format!(
            "path must name a group and a field (e.g. parameters.comHeightParam), got `{path}`"
        ));
    }
    Ok(SettingsTreeAction::update(&segments, parse_value(raw_value)))
}

/// JSON으로 해석되면 그 값을, 아니면 일반 문자열을 사용한다.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn parse_host_action(json: &str) -> Result<SettingsTreeAction, String> {
    serde_json::from_str(json).map_err(|err| format!("invalid settings action: {err}"))
}

fn parse_topic_arg(raw: &str) -> Result<Topic, String> {
    Topic::parse(raw).ok_or_else(|| format!("expected NAME=SCHEMA, got `{raw}`"))
}
