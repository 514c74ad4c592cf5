use error_fold::inspect::{find, inspect, is, walk};
use error_fold::{append, merge_prefixed, message, share, MultiError, SharedError};
use std::error::Error;

use crate::common::{messages, nested_tree, CodedError, Sentinel, Wrapped};

#[test]
fn inspect_returns_stored_errors() {
    let result = inspect(append(message("e1"), [message("e2")]));
    assert_eq!(messages(&result), ["e1", "e2"]);
}

#[test]
fn inspect_wraps_plain_error() {
    let err = message("plain");
    let result = inspect(err.clone());

    assert_eq!(result.len(), 1);
    assert!(std::sync::Arc::ptr_eq(&result[0], &err));
}

#[test]
fn inspect_absent_is_empty() {
    assert!(inspect(None::<SharedError>).is_empty());
    assert!(inspect(None::<MultiError>).is_empty());
    assert!(inspect(MultiError::new()).is_empty());
}

#[test]
fn inspect_does_not_expand_nested_composites() {
    let (outer, _, _) = nested_tree(message("b2"));
    assert_eq!(inspect(outer).len(), 4);
}

#[test]
fn is_finds_sentinel_at_any_depth() {
    let (outer, middle, inner) = nested_tree(share(Sentinel));

    assert!(!is(&inner, &Sentinel));
    assert!(is(&middle, &Sentinel));
    assert!(is(&outer, &Sentinel));
}

#[test]
fn is_finds_sentinel_in_deepest_composite() {
    let inner = append!(message("c1"), share(Sentinel));
    let middle = append!(message("b1"), inner);
    let outer = append!(message("a1"), middle, message("a2")).unwrap();

    assert!(is(&outer, &Sentinel));
}

#[test]
fn is_compares_values() {
    let err = append!(share(CodedError { code: 1 }), share(CodedError { code: 2 })).unwrap();

    assert!(is(&err, &CodedError { code: 2 }));
    assert!(!is(&err, &CodedError { code: 3 }));
}

#[test]
fn find_returns_typed_reference() {
    let (outer, middle, inner) = nested_tree(share(CodedError { code: 404 }));

    assert!(find::<CodedError>(&inner).is_none());
    assert_eq!(find::<CodedError>(&middle).map(|e| e.code), Some(404));
    assert_eq!(find::<CodedError>(&outer).map(|e| e.code), Some(404));
}

#[test]
fn find_follows_sources_of_leaves() {
    let wrapped = Wrapped { context: "parsing", inner: share(CodedError { code: 9 }) };
    let err = append!(message("a"), share(wrapped)).unwrap();

    assert_eq!(find::<CodedError>(&err).map(|e| e.code), Some(9));
    assert_eq!(find::<Wrapped>(&err).map(|e| e.context), Some("parsing"));
}

#[test]
fn find_reaches_composites_behind_prefixes() {
    let deep = append!(message("c1"), share(Sentinel));
    let middle = append!(None::<SharedError>, deep);
    let prefixed = merge_prefixed(None::<SharedError>, "item 1: ", [middle]).unwrap();

    assert_eq!(prefixed.len(), 1);
    assert!(is(&prefixed, &Sentinel));
}

#[test]
fn find_can_return_the_composite_itself() {
    let err = append(message("a"), [message("b")]).unwrap();
    let found = find::<MultiError>(&err).unwrap();

    assert_eq!(found.len(), 2);
}

#[test]
fn walk_visits_in_depth_first_order() {
    let (outer, _, _) = nested_tree(message("b2"));
    let mut seen = Vec::new();
    let none: Option<()> = walk(&outer, &mut |err: &(dyn Error + 'static)| {
        if err.downcast_ref::<MultiError>().is_none() {
            seen.push(err.to_string());
        }
        None
    });

    assert!(none.is_none());
    assert_eq!(seen, ["a1", "a2", "b1", "b2", "c1", "a3"]);
}
