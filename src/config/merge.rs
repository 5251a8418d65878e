use crate::config::schema::{EventKind, EventSetting, EventSettings, NotifierConfig};
use serde_json::Value;

/// Event setting as written by the user, before normalization
///
/// The file accepts either a bare boolean or an object. Anything that is not a
/// boolean is read as an object, so `"error": "loud"` behaves like `"error": {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventSetting {
    Flag(bool),
    Object { notification: Option<bool> },
}

impl RawEventSetting {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(flag) => Self::Flag(*flag),
            other => Self::Object {
                notification: other.get("notification").and_then(Value::as_bool),
            },
        }
    }

    /// Normalize to an [`EventSetting`], using `global` for unset objects
    #[must_use]
    pub fn resolve(self, global: bool) -> EventSetting {
        match self {
            Self::Flag(notification) => EventSetting { notification },
            Self::Object { notification } => EventSetting {
                notification: notification.unwrap_or(global),
            },
        }
    }
}

/// Merge raw user JSON against `defaults`
///
/// Precedence is explicit user value, then the computed global flag, then the
/// hardcoded default. Values of the wrong JSON type count as absent, and a
/// non-object document merges like `{}`.
#[must_use]
pub fn merge(raw: &Value, defaults: &NotifierConfig) -> NotifierConfig {
    let global = raw
        .get("notification")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.notification);

    let timeout = raw
        .get("timeout")
        .and_then(Value::as_f64)
        .filter(|t| t.is_finite() && *t > 0.0)
        .unwrap_or(defaults.timeout);

    let show_project_name = raw
        .get("showProjectName")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.show_project_name);

    let mut events = EventSettings::uniform(global);
    let mut messages = defaults.messages.clone();

    for kind in EventKind::ALL {
        if let Some(setting) = raw_event_setting(raw, kind) {
            *events.get_mut(kind) = setting.resolve(global);
        }

        if let Some(message) = raw
            .get("messages")
            .and_then(|m| m.get(kind.as_str()))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
        {
            *messages.get_mut(kind) = message.to_string();
        }
    }

    NotifierConfig {
        notification: global,
        timeout,
        show_project_name,
        events,
        messages,
    }
}

/// Nested `events.<kind>` wins over the legacy top-level `<kind>` alias
fn raw_event_setting(raw: &Value, kind: EventKind) -> Option<RawEventSetting> {
    let key = kind.as_str();
    raw.get("events")
        .and_then(|events| events.get(key))
        .filter(|v| !v.is_null())
        .or_else(|| raw.get(key).filter(|v| !v.is_null()))
        .map(RawEventSetting::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merged(raw: Value) -> NotifierConfig {
        merge(&raw, &NotifierConfig::default())
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        assert_eq!(merged(json!({})), NotifierConfig::default());
    }

    #[test]
    fn test_non_object_document_yields_defaults() {
        for raw in [json!([1, 2]), json!(null), json!("text"), json!(42)] {
            assert_eq!(merged(raw), NotifierConfig::default());
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in [
            json!({"timeout": -1}),
            json!({"timeout": 0}),
            json!({"timeout": "abc"}),
            json!({"timeout": null}),
        ] {
            assert!((merged(raw).timeout - 5.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_valid_timeout_kept() {
        assert!((merged(json!({"timeout": 12})).timeout - 12.0).abs() < f64::EPSILON);
        assert!((merged(json!({"timeout": 0.5})).timeout - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_flag_propagates() {
        let config = merged(json!({"notification": false}));
        assert!(!config.notification);
        for kind in EventKind::ALL {
            assert!(!config.is_enabled(kind), "{kind} should be disabled");
        }
    }

    #[test]
    fn test_nested_boolean_shorthand() {
        let config = merged(json!({"events": {"error": false}}));
        assert!(!config.is_enabled(EventKind::Error));
        assert!(config.is_enabled(EventKind::Permission));
        assert!(config.is_enabled(EventKind::Complete));
        assert!(config.is_enabled(EventKind::Question));
    }

    #[test]
    fn test_legacy_alias_matches_nested_form() {
        let legacy = merged(json!({"error": {"notification": false}}));
        let nested = merged(json!({"events": {"error": {"notification": false}}}));
        assert_eq!(legacy, nested);
        assert!(!legacy.is_enabled(EventKind::Error));
    }

    #[test]
    fn test_nested_wins_over_legacy() {
        let config = merged(json!({
            "events": {"question": true},
            "question": false
        }));
        assert!(config.is_enabled(EventKind::Question));
    }

    #[test]
    fn test_null_nested_falls_through_to_legacy() {
        let config = merged(json!({
            "events": {"complete": null},
            "complete": false
        }));
        assert!(!config.is_enabled(EventKind::Complete));
    }

    #[test]
    fn test_empty_event_object_uses_global() {
        let config = merged(json!({"events": {"complete": {}}, "notification": false}));
        assert!(!config.is_enabled(EventKind::Complete));
    }

    #[test]
    fn test_explicit_event_overrides_global() {
        let config = merged(json!({
            "notification": false,
            "events": {"permission": {"notification": true}},
            "question": true
        }));
        assert!(config.is_enabled(EventKind::Permission));
        assert!(config.is_enabled(EventKind::Question));
        assert!(!config.is_enabled(EventKind::Error));
    }

    #[test]
    fn test_non_boolean_event_value_reads_as_object() {
        let config = merged(json!({"notification": false, "events": {"error": "loud"}}));
        assert!(!config.is_enabled(EventKind::Error));
    }

    #[test]
    fn test_show_project_name_false_is_kept() {
        assert!(!merged(json!({"showProjectName": false})).show_project_name);
        assert!(merged(json!({"showProjectName": "no"})).show_project_name);
    }

    #[test]
    fn test_messages_override_and_fallback() {
        let config = merged(json!({
            "notification": false,
            "messages": {"complete": "Done!", "error": "", "question": 7}
        }));
        assert_eq!(config.message(EventKind::Complete), "Done!");
        assert_eq!(config.message(EventKind::Error), "Session encountered an error");
        assert_eq!(config.message(EventKind::Question), "Session has a question");
        assert_eq!(config.message(EventKind::Permission), "Session needs permission");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = merged(json!({"sound": true, "events": {"idle": false}}));
        assert_eq!(config, NotifierConfig::default());
    }

    #[test]
    fn test_merge_is_fixed_point() {
        let inputs = [
            json!({}),
            json!({"notification": false, "timeout": 3, "events": {"error": true}}),
            json!({"showProjectName": false, "permission": false, "messages": {"question": "?"}}),
        ];

        for raw in inputs {
            let first = merged(raw);
            let reparsed = serde_json::to_value(&first).unwrap();
            assert_eq!(merged(reparsed), first);
        }
    }

    #[test]
    fn test_raw_event_setting_resolve() {
        assert_eq!(RawEventSetting::from_value(&json!(true)), RawEventSetting::Flag(true));
        assert_eq!(
            RawEventSetting::from_value(&json!({"notification": "x"})),
            RawEventSetting::Object { notification: None }
        );
        assert!(!RawEventSetting::Object { notification: None }.resolve(false).notification);
        assert!(!RawEventSetting::Flag(false).resolve(true).notification);
    }
}
