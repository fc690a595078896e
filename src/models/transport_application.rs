use serde::{Deserialize, Serialize};

/// Driver identity as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A driver's application to perform transports, awaiting review.
///
/// Never mutated in place: a decided application is removed from the local
/// list instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportApplication {
    pub id: u64,
    pub driver: User,
    pub document_public_id: String,
}

/// Ordered removal by id. Returns `None` when the id is absent so callers
/// can skip the state update entirely.
pub fn remove_application(
    applications: &[TransportApplication],
    id: u64,
) -> Option<Vec<TransportApplication>> {
    let index = applications.iter().position(|app| app.id == id)?;
    let mut remaining = applications.to_vec();
    remaining.remove(index);
    Some(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(id: u64) -> TransportApplication {
        TransportApplication {
            id,
            driver: User {
                first_name: format!("First{}", id),
                last_name: format!("Last{}", id),
            },
            document_public_id: format!("doc-{}", id),
        }
    }

    #[test]
    fn removal_preserves_relative_order() {
        let apps = vec![application(1), application(2), application(3)];
        let remaining = remove_application(&apps, 2).unwrap();
        let ids: Vec<u64> = remaining.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn removing_missing_id_returns_none() {
        let apps = vec![application(1), application(3)];
        assert!(remove_application(&apps, 2).is_none());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let app: TransportApplication = serde_json::from_str(
            r#"{"id":9,"driver":{"firstName":"Anna","lastName":"Berzina"},"documentPublicId":"abc123"}"#,
        )
        .unwrap();
        assert_eq!(app.driver.full_name(), "Anna Berzina");
        assert_eq!(app.document_public_id, "abc123");
    }
}
