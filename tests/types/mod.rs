use error_fold::{append, message, MultiError, SharedError, NO_ERRORS_MESSAGE};
use std::error::Error;

use crate::common::Sentinel;


#[test]
fn error_or_none_reports_presence() {
    let mut err = MultiError::new();
    err.push(message("err"));
    assert!(err.clone().error_or_none().is_some());

    assert!(MultiError::new().error_or_none().is_none());

    let unset: Option<MultiError> = None;
    assert!(unset.and_then(MultiError::error_or_none).is_none());
}

#[test]
fn into_result_maps_empty_to_ok() {
    assert!(MultiError::new().into_result().is_ok());

    let mut err = MultiError::new();
    err.push("broken");
    let err = err.into_result().unwrap_err();
    assert_eq!(err.len(), 1);
}

#[test]
fn titled_simple_error() {
    let err = MultiError::with_title(message("err"), "title").unwrap();
    assert_eq!(err.to_string(), "title\n  - err");
}

#[test]
fn titled_multi_error() {
    let mut multi = MultiError::new();
    multi.push(message("err"));

    let err = MultiError::with_title(multi, "title").unwrap();
    assert_eq!(err.to_string(), "title\n  - err");
}

#[test]
fn titled_absent_error_is_none() {
    assert!(MultiError::with_title(None::<SharedError>, "title").is_none());
    assert!(MultiError::with_prefix(None::<SharedError>, "prefix").is_none());
}

#[test]
fn titled_unset_composite_seeds_accumulator() {
    let err = MultiError::with_title(None::<MultiError>, "title").unwrap();
    assert!(err.is_empty());
    assert_eq!(err.to_string(), NO_ERRORS_MESSAGE);

    let err = append(err, [message("err")]).unwrap();
    assert_eq!(err.to_string(), "title\n  - err");
}

#[test]
fn titled_empty_composite_keeps_title_for_later_appends() {
    let err = MultiError::with_title(MultiError::new(), "title").unwrap();
    assert_eq!(err.to_string(), "no errors occurred");

    let err = append(err, [message("err")]).unwrap();
    assert_eq!(err.to_string(), "title\n  - err");
}

#[test]
fn titled_fmt_builds_title() {
    let err = MultiError::with_title_fmt(message("err"), format_args!("{} failed", "sync")).unwrap();
    assert_eq!(err.to_string(), "sync failed\n  - err");
}

#[test]
fn prefixed_replaces_formatter() {
    let err = append(message("a"), [message("b")]);
    let err = MultiError::with_prefix(err, "> ").unwrap();
    assert_eq!(err.to_string(), "> a\n> b");

    let err = MultiError::with_prefix_fmt(message("c"), format_args!("[{}] ", 3)).unwrap();
    assert_eq!(err.to_string(), "[3] c");
}

#[test]
fn prefixed_unset_composite_seeds_accumulator() {
    let err = MultiError::with_prefix(None::<MultiError>, "- ").unwrap();
    let err = append(err, [message("x")]).unwrap();
    assert_eq!(err.to_string(), "- x");
}

#[test]
fn clear_formatter_falls_back_to_default() {
    let mut err = MultiError::with_title(message("err"), "title").unwrap();
    err.clear_formatter();
    assert_eq!(err.to_string(), "1 error occurred:\n  - err");
}

#[test]
fn nested_composite_uses_its_own_formatter() {
    let inner = MultiError::with_title(append(message("b1"), [message("b2")]), "inner").unwrap();
    let outer = append(message("a1"), [inner]).unwrap();

    assert_eq!(
        outer.to_string(),
        "2 errors occurred:\n  - a1\n  - inner\n      - b1\n      - b2"
    );
}

#[test]
fn source_is_first_leaf() {
    let inner = append(error_fold::share(Sentinel), [message("b")]);
    let outer = append!(None::<SharedError>, inner, message("a")).unwrap();

    let source = outer.source().unwrap();
    assert!(source.downcast_ref::<Sentinel>().is_some());
    assert!(MultiError::new().source().is_none());
}

#[test]
fn source_loop_sees_only_first_leaf() {
    let outer = append(message("a"), [message("b"), message("c")]).unwrap();

    let mut seen = Vec::new();
    let mut cursor = outer.source();
    while let Some(err) = cursor {
        seen.push(err.to_string());
        cursor = err.source();
    }
    assert_eq!(seen, ["a"]);

    let all: Vec<String> = outer.leaves().map(ToString::to_string).collect();
    assert_eq!(all, ["a", "b", "c"]);
}

#[test]
fn push_follows_append_rules() {
    let mut err = MultiError::new();
    err.push(message("a"))
        .push(None::<SharedError>)
        .push(MultiError::new())
        .push(append(message("b"), [message("c")]));

    assert_eq!(err.len(), 2);
    assert!(err.errors()[1].downcast_ref::<MultiError>().is_some());
}

#[test]
fn collects_from_iterator() {
    let err: MultiError = vec![Some(message("a")), None, Some(message("b"))]
        .into_iter()
        .collect();
    assert_eq!(err.len(), 2);

    let mut err = err;
    err.extend(["c", "d"]);
    let texts: Vec<String> = err.iter().map(ToString::to_string).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);

    let owned: Vec<SharedError> = err.into_iter().collect();
    assert_eq!(owned.len(), 4);
}

#[test]
fn debug_output_lists_errors() {
    let err = MultiError::with_title(message("boom"), "title").unwrap();
    let debug = format!("{err:?}");

    assert!(debug.starts_with("MultiError"));
    assert!(debug.contains("boom"));
    assert!(debug.contains("custom_formatter: true"));
}
