use orakel_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Converts loosely-typed objects into record shape `T`.
///
/// The batch is all-or-nothing: the first item that fails to convert aborts
/// the call with `AppError::Conversion` and no items are returned.
pub fn convert_all<T: DeserializeOwned>(kind: &str, items: Vec<Value>) -> AppResult<Vec<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| convert_one(kind, index, item))
        .collect()
}

fn convert_one<T: DeserializeOwned>(kind: &str, index: usize, item: Value) -> AppResult<T> {
    let name = item
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .map(str::to_owned);

    serde_json::from_value(item).map_err(|error| {
        let item_label = match name {
            Some(name) => format!("item {index} ('{name}')"),
            None => format!("item {index}"),
        };
        AppError::Conversion(format!(
            "failed to convert {item_label} to {kind}: {error}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use orakel_core::AppError;
    use orakel_domain::{NamespaceCheck, WorkloadCheck};
    use serde_json::{Value, json};

    use super::convert_all;

    fn namespace_check(name: &str) -> Value {
        json!({
            "apiVersion": "checks.example.io/v1alpha1",
            "kind": "NamespaceHardeningCheck",
            "metadata": {"name": name, "namespace": "audits"},
            "spec": {"targetNamespace": "shop", "suffix": "ab12"},
            "status": {"conditions": [{"type": "Finished", "status": "False"}]}
        })
    }

    #[test]
    fn converts_every_well_formed_item_in_order() {
        let items = vec![namespace_check("audit-1"), namespace_check("audit-2")];

        let converted = convert_all::<NamespaceCheck>("NamespaceHardeningCheck", items);
        assert!(converted.is_ok());
        let converted = converted.unwrap_or_default();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].name(), "audit-1");
        assert_eq!(converted[1].spec.target_namespace, "shop");
    }

    #[test]
    fn one_malformed_item_fails_the_whole_batch() {
        let mut items: Vec<Value> = (0..5)
            .map(|index| namespace_check(&format!("audit-{index}")))
            .collect();
        items.insert(
            3,
            json!({
                "metadata": {"name": "broken", "namespace": "audits"},
                "spec": "not-an-object"
            }),
        );

        let converted = convert_all::<NamespaceCheck>("NamespaceHardeningCheck", items);
        match converted {
            Err(AppError::Conversion(message)) => {
                assert!(message.contains("item 3"));
                assert!(message.contains("'broken'"));
                assert!(message.contains("NamespaceHardeningCheck"));
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn item_without_name_is_reported_by_index() {
        let items = vec![json!({"metadata": {"namespace": "shop"}, "spec": {}})];

        let converted = convert_all::<WorkloadCheck>("WorkloadHardeningCheck", items);
        match converted {
            Err(AppError::Conversion(message)) => {
                assert!(message.starts_with("failed to convert item 0 to WorkloadHardeningCheck"));
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn empty_batch_converts_to_empty_list() {
        let converted = convert_all::<WorkloadCheck>("WorkloadHardeningCheck", Vec::new());
        assert!(converted.is_ok());
        assert!(converted.unwrap_or_default().is_empty());
    }
}
