//! Translation of store-native failures into the registry's error vocabulary.
//!
//! The store reports "nothing matched" as an error kind of its own. Callers
//! must be able to tell that apart from a broken store, so it is the one kind
//! that maps to [`DeviceStoreError::NotFound`].

use da_core::ports::DeviceStoreError;

use super::error::{StoreError, StoreErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    AccessFailure,
}

pub const ERROR_CLASSES: &[(StoreErrorKind, ErrorClass)] = &[
    (StoreErrorKind::NoMatch, ErrorClass::NotFound),
    (StoreErrorKind::Connection, ErrorClass::AccessFailure),
    (StoreErrorKind::Query, ErrorClass::AccessFailure),
    (StoreErrorKind::Serialization, ErrorClass::AccessFailure),
    (StoreErrorKind::Other, ErrorClass::AccessFailure),
];

pub fn classify(kind: StoreErrorKind) -> ErrorClass {
    ERROR_CLASSES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, class)| *class)
        .unwrap_or(ErrorClass::AccessFailure)
}

/// Map a store error to the domain error, attaching `context` to access
/// failures.
pub fn to_domain_error(err: StoreError, context: &'static str) -> DeviceStoreError {
    match classify(err.kind()) {
        ErrorClass::NotFound => DeviceStoreError::NotFound,
        ErrorClass::AccessFailure => DeviceStoreError::access(context, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [StoreErrorKind; 5] = [
        StoreErrorKind::NoMatch,
        StoreErrorKind::Connection,
        StoreErrorKind::Query,
        StoreErrorKind::Serialization,
        StoreErrorKind::Other,
    ];

    #[test]
    fn every_kind_has_an_entry() {
        for kind in ALL_KINDS {
            assert!(
                ERROR_CLASSES.iter().any(|(k, _)| *k == kind),
                "missing mapping for {kind}"
            );
        }
    }

    #[test]
    fn only_no_match_is_not_found() {
        for kind in ALL_KINDS {
            let expected = if kind == StoreErrorKind::NoMatch {
                ErrorClass::NotFound
            } else {
                ErrorClass::AccessFailure
            };
            assert_eq!(classify(kind), expected, "kind {kind}");
        }
    }

    #[test]
    fn no_match_becomes_not_found() {
        let err = to_domain_error(StoreError::no_match(), "failed to fetch device");

        assert!(err.is_not_found());
    }

    #[test]
    fn other_failures_keep_context() {
        let err = to_domain_error(
            StoreError::new(StoreErrorKind::Connection, "connection reset by peer"),
            "failed to fetch device",
        );

        match err {
            DeviceStoreError::Access { context, source } => {
                assert_eq!(context, "failed to fetch device");
                assert_eq!(source.to_string(), "connection reset by peer");
            }
            other => panic!("expected access failure, got {other:?}"),
        }
    }
}
