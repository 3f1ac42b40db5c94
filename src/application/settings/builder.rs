//! 현재 설정과 토픽 목록으로 설정 트리 서술을 만드는 빌더.

use crate::application::config::Config;
use crate::domain::settings::{
    SelectOption, SettingsTreeField, SettingsTreeFields, SettingsTreeNode, SettingsTreeNodes,
};
use crate::domain::topic::Topic;

pub const GROUP_TOPICS: &str = "topics";
pub const GROUP_SERVICES: &str = "services";
pub const GROUP_PARAMETERS: &str = "parameters";

/// topics → services → parameters 순서의 설정 트리를 만든다.
/// 필드 값은 항상 현재 설정 값을 그대로 비춘다.
pub fn build_settings_tree(config: &Config, topics: &[Topic]) -> SettingsTreeNodes {
    let mut topic_fields = SettingsTreeFields::new();
    topic_fields.insert(
        "modeScheduleTopic",
        SettingsTreeField::select(
            "MPC mode schedule",
            &config.mode_schedule_topic,
            mode_schedule_topic_options(topics),
        ),
    );

    let mut service_fields = SettingsTreeFields::new();
    service_fields.insert(
        "standUpService",
        SettingsTreeField::text("Stand up", &config.stand_up_service),
    );
    service_fields.insert(
        "layDownService",
        SettingsTreeField::text("Lay down", &config.lay_down_service),
    );
    service_fields.insert(
        "resetSimulationService",
        SettingsTreeField::text("Reset simulation", &config.reset_simulation_service),
    );

    let mut param_fields = SettingsTreeFields::new();
    param_fields.insert(
        "comHeightParam",
        SettingsTreeField::text("COM height", &config.com_height_param),
    );
    param_fields.insert(
        "displacementVelocityParam",
        SettingsTreeField::text(
            "Target displacement velocity",
            &config.displacement_velocity_param,
        ),
    );
    param_fields.insert(
        "rotationVelocityParam",
        SettingsTreeField::text("Target rotation velocity", &config.rotation_velocity_param),
    );

    let mut nodes = SettingsTreeNodes::new();
    nodes.insert(GROUP_TOPICS, node("Topics", topic_fields));
    nodes.insert(GROUP_SERVICES, node("Services", service_fields));
    nodes.insert(GROUP_PARAMETERS, node("Parameters", param_fields));
    nodes
}

/// 모드 스케줄 스키마를 가진 토픽만 입력 순서대로 선택지로 만든다.
pub fn mode_schedule_topic_options(topics: &[Topic]) -> Vec<SelectOption> {
    topics
        .iter()
        .filter(|topic| topic.carries_mode_schedule())
        .map(|topic| SelectOption {
            label: topic.name.clone(),
            value: topic.name.clone(),
        })
        .collect()
}

fn node(label: &str, fields: SettingsTreeFields) -> SettingsTreeNode {
    SettingsTreeNode {
        label: label.to_string(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::settings::FieldInput;

    fn field<'a>(tree: &'a SettingsTreeNodes, group: &str, key: &str) -> &'a SettingsTreeField {
        tree.get(group)
            .and_then(|node| node.field(key))
            .unwrap_or_else(|| panic!("missing {group}.{key}"))
    }

    #[test]
    fn groups_are_ordered_topics_services_parameters() {
        let tree = build_settings_tree(&Config::default(), &[]);
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["topics", "services", "parameters"]);
    }

    #[test]
    fn field_values_mirror_config() {
        let config = Config {
            stand_up_service: "/robot/up".to_string(),
            rotation_velocity_param: "/robot/yaw_rate".to_string(),
            ..Config::default()
        };
        let tree = build_settings_tree(&config, &[]);

        assert_eq!(
            field(&tree, GROUP_TOPICS, "modeScheduleTopic").value,
            config.mode_schedule_topic
        );
        assert_eq!(field(&tree, GROUP_SERVICES, "standUpService").value, "/robot/up");
        assert_eq!(
            field(&tree, GROUP_SERVICES, "layDownService").value,
            config.lay_down_service
        );
        assert_eq!(
            field(&tree, GROUP_SERVICES, "resetSimulationService").value,
            config.reset_simulation_service
        );
        assert_eq!(
            field(&tree, GROUP_PARAMETERS, "comHeightParam").value,
            config.com_height_param
        );
        assert_eq!(
            field(&tree, GROUP_PARAMETERS, "displacementVelocityParam").value,
            config.displacement_velocity_param
        );
        assert_eq!(
            field(&tree, GROUP_PARAMETERS, "rotationVelocityParam").value,
            "/robot/yaw_rate"
        );
    }

    #[test]
    fn topic_selector_filters_by_schema_and_keeps_order() {
        let topics = vec![
            Topic::new("/b_schedule", "ocs2_msgs/mode_schedule"),
            Topic::new("/odom", "nav_msgs/Odometry"),
            Topic::new("/a_schedule", "ocs2_msgs/mode_schedule"),
        ];
        let tree = build_settings_tree(&Config::default(), &topics);
        let selector = field(&tree, GROUP_TOPICS, "modeScheduleTopic");

        assert_eq!(selector.input, FieldInput::Select);
        let values: Vec<&str> = selector
            .options
            .as_ref()
            .unwrap()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["/b_schedule", "/a_schedule"]);
    }

    #[test]
    fn empty_topic_list_yields_empty_options() {
        let tree = build_settings_tree(&Config::default(), &[]);
        let selector = field(&tree, GROUP_TOPICS, "modeScheduleTopic");
        assert_eq!(selector.options.as_deref(), Some(&[][..]));
    }

    #[test]
    fn building_twice_is_deterministic() {
        let topics = vec![Topic::new("/a", "ocs2_msgs/mode_schedule")];
        let config = Config::default();
        assert_eq!(
            build_settings_tree(&config, &topics),
            build_settings_tree(&config, &topics)
        );
    }

    #[test]
    fn tree_serializes_to_host_shape() {
        let topics = vec![Topic::new("/a", "ocs2_msgs/mode_schedule")];
        let json = serde_json::to_value(build_settings_tree(&Config::default(), &topics)).unwrap();
        assert_eq!(
            json["topics"],
            json!({
                "label": "Topics",
                "fields": {
                    "modeScheduleTopic": {
                        "label": "MPC mode schedule",
                        "input": "select",
                        "value": "/legged_robot_mpc_mode_schedule",
                        "options": [{ "label": "/a", "value": "/a" }]
                    }
                }
            })
        );
        assert_eq!(json["parameters"]["fields"]["comHeightParam"]["label"], "COM height");
    }
}
