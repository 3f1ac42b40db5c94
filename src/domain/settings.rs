//! 호스트 설정 패널과 주고받는 설정 트리 값 객체.
//!
//! 트리는 읽기 전용 투영이며, 편집은 항상 [`SettingsTreeAction`]으로 들어온다.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// 설정 트리에서 발생한 사용자 편집 이벤트.
///
/// 호스트가 새 액션 종류를 추가해도 역직렬화는 실패하지 않고
/// [`SettingsTreeAction::Other`]가 된다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "WireAction", into = "WireAction")]
pub enum SettingsTreeAction {
    /// 경로가 가리키는 필드 값을 교체한다.
    Update(UpdatePayload),
    /// 노드 메뉴 액션(이 패널은 처리하지 않음).
    PerformNodeAction(NodeActionPayload),
    /// 이 패널이 모르는 액션. 태그와 내용을 그대로 보존한다.
    Other { action: String, payload: Value },
}

const UPDATE: &str = "update";
const PERFORM_NODE_ACTION: &str = "perform-node-action";

/// `{"action": ..., "payload": ...}` 형태의 호스트 전송 표현.
#[derive(Deserialize, Serialize)]
struct WireAction {
    action: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl TryFrom<WireAction> for SettingsTreeAction {
    type Error = serde_json::Error;

    fn try_from(wire: WireAction) -> Result<Self, Self::Error> {
        match wire.action.as_str() {
            UPDATE => serde_json::from_value(wire.payload).map(Self::Update),
            PERFORM_NODE_ACTION => {
                serde_json::from_value(wire.payload).map(Self::PerformNodeAction)
            }
            _ => Ok(Self::Other {
                action: wire.action,
                payload: wire.payload,
            }),
        }
    }
}

impl From<SettingsTreeAction> for WireAction {
    fn from(action: SettingsTreeAction) -> Self {
        let kind = action.kind().to_string();
        let payload = match action {
            SettingsTreeAction::Update(payload) => serde_json::to_value(payload),
            SettingsTreeAction::PerformNodeAction(payload) => serde_json::to_value(payload),
            SettingsTreeAction::Other { payload, .. } => Ok(payload),
        };
        Self {
            action: kind,
            payload: payload.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpdatePayload {
    /// 첫 요소는 트리 그룹 키, 이후 요소가 설정 필드를 가리킨다.
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeActionPayload {
    pub id: String,
    pub path: Vec<String>,
}

impl SettingsTreeAction {
    pub fn update(path: &[&str], value: impl Into<Value>) -> Self {
        Self::Update(UpdatePayload {
            path: path.iter().map(|s| s.to_string()).collect(),
            input: None,
            value: value.into(),
        })
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Update(_) => UPDATE,
            Self::PerformNodeAction(_) => PERFORM_NODE_ACTION,
            Self::Other { action, .. } => action,
        }
    }
}

/// 삽입 순서를 유지한 채 JSON 객체로 직렬화되는 키-값 목록.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: &str, value: V) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.0.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub type SettingsTreeNodes = OrderedMap<SettingsTreeNode>;
pub type SettingsTreeFields = OrderedMap<SettingsTreeField>;

/// 라벨이 붙은 필드 그룹.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsTreeNode {
    pub label: String,
    pub fields: SettingsTreeFields,
}

impl SettingsTreeNode {
    pub fn field(&self, key: &str) -> Option<&SettingsTreeField> {
        self.fields.get(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldInput {
    Select,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// 단일 입력 위젯 서술.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsTreeField {
    pub label: String,
    pub input: FieldInput,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl SettingsTreeField {
    pub fn text(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            input: FieldInput::String,
            value: value.to_string(),
            options: None,
        }
    }

    pub fn select(label: &str, value: &str, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.to_string(),
            input: FieldInput::Select,
            value: value.to_string(),
            options: Some(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_action_reads_host_wire_shape() {
        let raw = json!({
            "action": "update",
            "payload": { "path": ["services", "standUpService"], "input": "string", "value": "/up" }
        });
        let action: SettingsTreeAction = serde_json::from_value(raw).unwrap();
        let SettingsTreeAction::Update(payload) = action else {
            panic!("expected update action");
        };
        assert_eq!(payload.path, vec!["services", "standUpService"]);
        assert_eq!(payload.value, json!("/up"));
    }

    #[test]
    fn node_action_reads_host_wire_shape() {
        let raw = json!({
            "action": "perform-node-action",
            "payload": { "id": "reset", "path": ["topics"] }
        });
        let action: SettingsTreeAction = serde_json::from_value(raw).unwrap();
        assert_eq!(action.kind(), "perform-node-action");
    }

    #[test]
    fn unknown_action_kind_is_kept_as_other() {
        let raw = json!({
            "action": "select-node",
            "payload": { "path": ["topics"] }
        });
        let action: SettingsTreeAction = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(action.kind(), "select-node");
        assert_eq!(serde_json::to_value(&action).unwrap(), raw);
    }

    #[test]
    fn known_action_with_bad_payload_is_an_error() {
        let raw = json!({ "action": "update", "payload": { "value": 1 } });
        assert!(serde_json::from_value::<SettingsTreeAction>(raw).is_err());
    }

    #[test]
    fn ordered_map_keeps_insertion_order_in_json() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("zeta", 3);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"zeta":3,"alpha":2}"#);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn text_field_omits_options() {
        let json = serde_json::to_value(SettingsTreeField::text("Stand up", "/up")).unwrap();
        assert_eq!(json, json!({ "label": "Stand up", "input": "string", "value": "/up" }));
    }
}
