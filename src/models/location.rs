use serde::{Deserialize, Serialize};

/// City autocomplete option. No identity beyond the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub name: String,
}

/// Street autocomplete option. No identity beyond the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Street {
    pub name: String,
}

/// One endpoint of a transport route. Field order matters: the backend and
/// the duplicate check both work on the serialized form `home → street → city`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLocation {
    pub home: u32,
    pub street: Street,
    pub city: City,
}

impl GeoLocation {
    pub fn new(home: u32, street: &str, city: &str) -> Self {
        Self {
            home,
            street: Street {
                name: street.to_string(),
            },
            city: City {
                name: city.to_string(),
            },
        }
    }

    /// Equality on the structurally-serialized form, not on the Rust value.
    /// Two locations collide iff their JSON renderings are byte-identical.
    pub fn structurally_equal(&self, other: &GeoLocation) -> bool {
        match (serde_json::to_string(self), serde_json::to_string(other)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_locations_are_structurally_equal() {
        let a = GeoLocation::new(12, "Main Street", "Riga");
        let b = GeoLocation::new(12, "Main Street", "Riga");
        assert!(a.structurally_equal(&b));
    }

    #[test]
    fn differing_home_breaks_equality() {
        let a = GeoLocation::new(12, "Main Street", "Riga");
        let b = GeoLocation::new(13, "Main Street", "Riga");
        assert!(!a.structurally_equal(&b));
    }

    #[test]
    fn differing_street_breaks_equality() {
        let a = GeoLocation::new(12, "Main Street", "Riga");
        let b = GeoLocation::new(12, "Elm Street", "Riga");
        assert!(!a.structurally_equal(&b));
    }

    #[test]
    fn differing_city_breaks_equality() {
        let a = GeoLocation::new(12, "Main Street", "Riga");
        let b = GeoLocation::new(12, "Main Street", "Daugavpils");
        assert!(!a.structurally_equal(&b));
    }

    #[test]
    fn serialized_field_order_is_home_street_city() {
        let loc = GeoLocation::new(5, "Brivibas", "Riga");
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(
            json,
            r#"{"home":5,"street":{"name":"Brivibas"},"city":{"name":"Riga"}}"#
        );
    }
}
