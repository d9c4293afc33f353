use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource scope → allowed operations, as returned by the permission lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(BTreeMap<String, Vec<String>>);

impl Permissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn grant(&mut self, scope: impl Into<String>, operation: impl Into<String>) {
        let ops = self.0.entry(scope.into()).or_default();
        let operation = operation.into();
        if !ops.contains(&operation) {
            ops.push(operation);
        }
    }

    pub fn allows(&self, scope: &str, operation: &str) -> bool {
        self.0
            .get(scope)
            .is_some_and(|ops| ops.iter().any(|op| op == operation))
    }
}

impl<S, O> FromIterator<(S, O)> for Permissions
where
    S: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, O)>>(iter: I) -> Self {
        let mut perms = Permissions::new();
        for (scope, op) in iter {
            perms.grant(scope, op);
        }
        perms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grants_are_grouped_and_deduplicated() {
        let perms: Permissions = [("proj1", "read"), ("proj1", "write"), ("proj1", "read")]
            .into_iter()
            .collect();

        assert_eq!(
            serde_json::to_value(&perms).unwrap(),
            json!({"proj1": ["read", "write"]})
        );
    }

    #[test]
    fn allows_checks_scope_and_operation() {
        let perms: Permissions = [("proj1", "read")].into_iter().collect();

        assert!(perms.allows("proj1", "read"));
        assert!(!perms.allows("proj1", "write"));
        assert!(!perms.allows("proj2", "read"));
    }

    #[test]
    fn empty_mapping() {
        let perms: Permissions = serde_json::from_value(json!({})).unwrap();
        assert!(perms.is_empty());
        assert!(!perms.allows("proj1", "read"));
    }
}
