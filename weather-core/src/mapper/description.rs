use serde_json::Value;
use tracing::debug;

use crate::{
    extract::{Object, field, get_array, get_string},
    model::ConditionDescription,
};

/// Map one element of a `weather` array.
///
/// `id` defaults to 0. The three text fields are all required; if any is
/// missing the whole description is treated as absent.
pub fn map_description(value: &Value) -> Option<ConditionDescription> {
    let obj = value.as_object()?;

    Some(ConditionDescription {
        id: field(obj, "id"),
        main: get_string(obj, "main")?.to_owned(),
        description: get_string(obj, "description")?.to_owned(),
        icon: get_string(obj, "icon")?.to_owned(),
    })
}

/// Description of an entry, taken from the first element of its `weather` array.
pub(crate) fn description_of(entry: &Object) -> ConditionDescription {
    get_array(entry, "weather")
        .and_then(<[Value]>::first)
        .and_then(map_description)
        .unwrap_or_else(|| {
            debug!("weather description missing or incomplete, leaving it empty");
            ConditionDescription::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::test_support::object;
    use serde_json::json;

    #[test]
    fn maps_complete_description() {
        let value = json!({ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01n" });

        let descr = map_description(&value).expect("complete description");
        assert_eq!(
            descr,
            ConditionDescription {
                id: 800,
                main: "Clear".into(),
                description: "clear sky".into(),
                icon: "01n".into(),
            }
        );
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let value = json!({ "main": "Snow", "description": "light snow", "icon": "13d" });

        assert_eq!(map_description(&value).map(|d| d.id), Some(0));
    }

    #[test]
    fn partial_description_is_absent() {
        let value = json!({ "id": 800, "main": "Clear", "description": null, "icon": "01n" });
        assert!(map_description(&value).is_none());

        let value = json!({ "id": 800, "main": "Clear", "description": "clear sky" });
        assert!(map_description(&value).is_none());

        assert!(map_description(&json!("Clear")).is_none());
    }

    #[test]
    fn description_of_reads_first_element_only() {
        let entry = object(json!({
            "weather": [
                { "id": 600, "main": "Snow", "description": "light snow", "icon": "13n" },
                { "id": 701, "main": "Mist", "description": "mist", "icon": "50n" }
            ]
        }));

        assert_eq!(description_of(&entry).main, "Snow");
    }

    #[test]
    fn description_of_defaults_when_array_missing_or_empty() {
        assert_eq!(description_of(&object(json!({}))), ConditionDescription::default());
        assert_eq!(
            description_of(&object(json!({ "weather": [] }))),
            ConditionDescription::default()
        );
        assert_eq!(
            description_of(&object(json!({ "weather": { "main": "Clear" } }))),
            ConditionDescription::default()
        );
    }
}
