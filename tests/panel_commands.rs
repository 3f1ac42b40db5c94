//! Integration tests for operator commands against in-memory host adapters.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;
use legged_panel::application::config::{Config, PartialConfig};
use legged_panel::application::panel::PanelSession;
use legged_panel::application::ports::{PanelStateStore, Reporter, RobotGateway, TopicRegistry};
use legged_panel::application::usecases::apply_settings_action::ApplySettingsActionUseCase;
use legged_panel::application::usecases::open_panel::OpenPanelUseCase;
use legged_panel::application::usecases::select_gait::SelectGaitUseCase;
use legged_panel::application::usecases::set_target::SetTargetUseCase;
use legged_panel::application::usecases::trigger_service::TriggerServiceUseCase;
use legged_panel::domain::command::ServiceCommand;
use legged_panel::domain::mode_schedule::ModeSchedulePayload;
use legged_panel::domain::settings::SettingsTreeAction;
use legged_panel::domain::target::LocomotionTarget;
use legged_panel::domain::topic::Topic;

// ── Fakes ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryStateStore {
    restored: PartialConfig,
    saved: Mutex<Vec<Config>>,
}

impl PanelStateStore for MemoryStateStore {
    fn restore(&self) -> Result<PartialConfig> {
        Ok(self.restored.clone())
    }

    fn persist(&self, config: &Config) -> Result<()> {
        self.saved.lock().unwrap().push(config.clone());
        Ok(())
    }
}

struct FixedTopics(Vec<Topic>);

impl TopicRegistry for FixedTopics {
    fn topics(&self) -> Result<Vec<Topic>> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Advertise(String, String),
    Publish(String, ModeSchedulePayload),
    Service(String),
    Parameter(String, f64),
}

#[derive(Default)]
struct RecordingGateway {
    calls: Mutex<Vec<Call>>,
    fail_services: bool,
}

impl RecordingGateway {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RobotGateway for RecordingGateway {
    async fn advertise(&self, topic: &str, schema_name: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Advertise(topic.to_string(), schema_name.to_string()));
        Ok(())
    }

    async fn publish(&self, topic: &str, payload: &ModeSchedulePayload) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Publish(topic.to_string(), payload.clone()));
        Ok(())
    }

    async fn call_service(&self, service: &str) -> Result<()> {
        if self.fail_services {
            bail!("service {service} unavailable");
        }
        self.calls.lock().unwrap().push(Call::Service(service.to_string()));
        Ok(())
    }

    async fn set_parameter(&self, name: &str, value: f64) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Parameter(name.to_string(), value));
        Ok(())
    }
}

struct SilentReporter;

impl Reporter for SilentReporter {
    fn kv(&self, _key: &str, _value: &str) {}
    fn status(&self, _scope: &str, _message: &str) {}
}

fn default_session() -> PanelSession {
    PanelSession::restore(PartialConfig::default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_open_panel_restores_partial_state_and_topics() {
    let store = MemoryStateStore {
        restored: PartialConfig {
            lay_down_service: Some("/robot/lay_down".to_string()),
            ..PartialConfig::default()
        },
        ..MemoryStateStore::default()
    };
    let registry = FixedTopics(vec![Topic::new("/schedule", "ocs2_msgs/mode_schedule")]);

    let session = OpenPanelUseCase {
        state_store: &store,
        topic_registry: &registry,
    }
    .execute()
    .expect("panel must open");

    assert_eq!(session.config().lay_down_service, "/robot/lay_down");
    assert_eq!(session.config().stand_up_service, "/legged_controller/stand_up");
    assert_eq!(session.topics().len(), 1);
}

#[test]
fn test_settings_edit_is_persisted_only_when_changed() {
    let store = MemoryStateStore::default();
    let usecase = ApplySettingsActionUseCase {
        state_store: &store,
    };
    let mut session = default_session();
    let action = SettingsTreeAction::update(&["services", "standUpService"], "/robot/up");

    assert!(usecase.execute(&mut session, &action).unwrap());
    assert!(!usecase.execute(&mut session, &action).unwrap());

    let saved = store.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].stand_up_service, "/robot/up");
}

#[test]
fn test_strict_edit_surfaces_unknown_path() {
    let store = MemoryStateStore::default();
    let usecase = ApplySettingsActionUseCase {
        state_store: &store,
    };
    let mut session = default_session();
    let action = SettingsTreeAction::update(&["services", "sitService"], "/robot/sit");

    let err = usecase.execute_strict(&mut session, &action).unwrap_err();
    assert!(err.to_string().contains("sitService"));
    assert!(!usecase.execute(&mut session, &action).unwrap());
    assert!(store.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_select_gait_advertises_then_publishes() {
    let gateway = RecordingGateway::default();
    let store = MemoryStateStore::default();
    let mut session = default_session();

    let schedule = SelectGaitUseCase {
        gateway: &gateway,
        state_store: &store,
        reporter: &SilentReporter,
    }
    .execute(&mut session, "Trot")
    .await
    .expect("trot must publish");

    let topic = "/legged_robot_mpc_mode_schedule".to_string();
    assert_eq!(
        gateway.calls(),
        vec![
            Call::Advertise(topic.clone(), "ocs2_msgs/mode_schedule".to_string()),
            Call::Publish(
                topic,
                ModeSchedulePayload {
                    event_times: vec![0.0, 0.3, 0.6],
                    mode_sequence: vec![9, 6],
                }
            ),
        ]
    );
    assert_eq!(session.config().mode_schedule, schedule);
    assert_eq!(store.saved.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_select_unknown_gait_sends_nothing() {
    let gateway = RecordingGateway::default();
    let store = MemoryStateStore::default();
    let mut session = default_session();

    let result = SelectGaitUseCase {
        gateway: &gateway,
        state_store: &store,
        reporter: &SilentReporter,
    }
    .execute(&mut session, "gallop")
    .await;

    assert!(result.is_err());
    assert!(gateway.calls().is_empty());
    assert_eq!(session.config().mode_schedule.name, "stance");
}

#[tokio::test]
async fn test_gait_follows_edited_topic() {
    let gateway = RecordingGateway::default();
    let store = MemoryStateStore::default();
    let mut session = default_session();
    session.apply_action(&SettingsTreeAction::update(
        &["topics", "modeScheduleTopic"],
        "/anymal/mode_schedule",
    ));

    SelectGaitUseCase {
        gateway: &gateway,
        state_store: &store,
        reporter: &SilentReporter,
    }
    .execute(&mut session, "pawup")
    .await
    .unwrap();

    assert!(matches!(
        &gateway.calls()[1],
        Call::Publish(topic, _) if topic == "/anymal/mode_schedule"
    ));
}

#[tokio::test]
async fn test_set_target_uses_configured_parameter() {
    let gateway = RecordingGateway::default();
    let usecase = SetTargetUseCase {
        gateway: &gateway,
        reporter: &SilentReporter,
    };
    let session = default_session();

    usecase
        .execute(&session, LocomotionTarget::ComHeight, 0.35)
        .await
        .unwrap();
    usecase
        .execute(&session, LocomotionTarget::RotationVelocity, 1.5)
        .await
        .unwrap();

    assert_eq!(
        gateway.calls(),
        vec![
            Call::Parameter("/legged_controller/com_height".to_string(), 0.35),
            Call::Parameter("/legged_controller/target_rotation_velocity".to_string(), 1.5),
        ]
    );
}

#[tokio::test]
async fn test_out_of_range_target_never_reaches_gateway() {
    let gateway = RecordingGateway::default();
    let usecase = SetTargetUseCase {
        gateway: &gateway,
        reporter: &SilentReporter,
    };
    let session = default_session();

    assert!(
        usecase
            .execute(&session, LocomotionTarget::ComHeight, 3.0)
            .await
            .is_err()
    );
    assert!(
        usecase
            .execute(&session, LocomotionTarget::DisplacementVelocity, f64::NAN)
            .await
            .is_err()
    );
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_service_commands_use_configured_names() {
    let gateway = RecordingGateway::default();
    let usecase = TriggerServiceUseCase {
        gateway: &gateway,
        reporter: &SilentReporter,
    };
    let mut session = default_session();
    session.apply_action(&SettingsTreeAction::update(
        &["services", "resetSimulationService"],
        "/gazebo/reset_world",
    ));

    for command in [
        ServiceCommand::StandUp,
        ServiceCommand::LayDown,
        ServiceCommand::ResetSimulation,
    ] {
        usecase.execute(&session, command).await.unwrap();
    }

    assert_eq!(
        gateway.calls(),
        vec![
            Call::Service("/legged_controller/stand_up".to_string()),
            Call::Service("/legged_controller/lay_down".to_string()),
            Call::Service("/gazebo/reset_world".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_service_failure_is_reported_with_service_name() {
    let gateway = RecordingGateway {
        fail_services: true,
        ..RecordingGateway::default()
    };
    let usecase = TriggerServiceUseCase {
        gateway: &gateway,
        reporter: &SilentReporter,
    };

    let err = usecase
        .execute(&default_session(), ServiceCommand::StandUp)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("/legged_controller/stand_up"));
}
