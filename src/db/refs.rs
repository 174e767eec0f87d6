//! Parent references for write operations.

/// A caller-supplied pointer to a parent entity, by numeric id, by
/// human-readable name, or both.
///
/// The stored routines own the resolution precedence: id first, then
/// lookup by name, then creation by name. This type only carries the
/// reference to the backend unchanged; it never performs a lookup and
/// never fabricates an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParentRef {
    /// No reference supplied. Allowed where the relationship is optional;
    /// a required relationship left unset is rejected by the backend, not
    /// here.
    #[default]
    Unset,
    ById(i32),
    ByName(String),
    Both(i32, String),
}

impl ParentRef {
    /// Build a reference from the two optional fields of a request body.
    /// Names are expected to be validated and trimmed upstream.
    pub fn new(id: Option<i32>, name: Option<String>) -> Self {
        match (id, name) {
            (None, None) => Self::Unset,
            (Some(id), None) => Self::ById(id),
            (None, Some(name)) => Self::ByName(name),
            (Some(id), Some(name)) => Self::Both(id, name),
        }
    }

    /// The id half of the bind pair, as the stored routines expect it.
    pub fn id(&self) -> Option<i32> {
        match self {
            Self::ById(id) | Self::Both(id, _) => Some(*id),
            _ => None,
        }
    }

    /// The name half of the bind pair.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ByName(name) | Self::Both(_, name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_absent_is_unset() {
        let r = ParentRef::new(None, None);
        assert_eq!(r, ParentRef::Unset);
        assert_eq!(r.id(), None);
        assert_eq!(r.name(), None);
    }

    #[test]
    fn id_only_passes_id_through() {
        let r = ParentRef::new(Some(3), None);
        assert_eq!(r, ParentRef::ById(3));
        assert_eq!(r.id(), Some(3));
        assert_eq!(r.name(), None);
    }

    #[test]
    fn name_only_does_not_fabricate_an_id() {
        let r = ParentRef::new(None, Some("Colombia".to_string()));
        assert_eq!(r.id(), None);
        assert_eq!(r.name(), Some("Colombia"));
    }

    #[test]
    fn both_halves_survive_together() {
        let r = ParentRef::new(Some(1), Some("Colombia".to_string()));
        assert_eq!(r.id(), Some(1));
        assert_eq!(r.name(), Some("Colombia"));
    }
}
