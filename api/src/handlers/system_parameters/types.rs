use crate::schema::SystemParameter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemParameters {
    pub success: bool,
    /// Iterates and serializes in key order, not in the category/key order
    /// the parameters were folded in.
    pub parameters: BTreeMap<String, Value>,
}

impl SystemParameters {
    /// Folds parameters into a `key -> value` map in the order given, so a
    /// repeated key keeps the value that comes last.
    pub fn from_ordered(parameters: impl IntoIterator<Item = SystemParameter>) -> Self {
        let mut map = BTreeMap::new();
        for parameter in parameters {
            map.insert(parameter.key, parameter.value);
        }

        SystemParameters {
            success: true,
            parameters: map,
        }
    }
}
