use error_fold::{append, merge, merge_prefixed, message, prefixed, titled, MultiError, SharedError};

use crate::common::messages;

#[test]
fn append_macro_mixes_operand_types() {
    let nested = append(message("n1"), [message("n2")]);
    let err = append!(
        message("a"),
        None::<SharedError>,
        "b",
        String::from("c"),
        nested,
        None::<MultiError>
    )
    .unwrap();

    assert_eq!(err.len(), 4);
    assert_eq!(messages(&err.errors()[..3]), ["a", "b", "c"]);
}

#[test]
fn append_macro_with_seed_only() {
    assert_eq!(append!(message("solo")).map(|e| e.len()), Some(1));
    assert!(append!(None::<SharedError>).is_none());
}

#[test]
fn merge_macro_flattens() {
    let nested = append!(message("n1"), message("n2"));
    let err = merge!(message("a"), nested, "b",).unwrap();

    assert_eq!(messages(err.errors()), ["a", "n1", "n2", "b"]);
}

#[test]
fn merge_prefixed_macro_prefixes_every_operand() {
    let nested = append!(message("n1"), message("n2"));
    let err = merge_prefixed!(None::<SharedError>, "x: ", nested, "b").unwrap();

    assert_eq!(messages(err.errors()), ["x: n1", "x: n2", "x: b"]);
}

#[test]
fn titled_macro_formats_title() {
    let err = titled!(message("boom"), "{} of {} failed", 1, 2).unwrap();
    assert_eq!(err.to_string(), "1 of 2 failed\n  - boom");

    assert!(titled!(None::<SharedError>, "title").is_none());
}

#[test]
fn prefixed_macro_formats_prefix() {
    let err = prefixed!(append!(message("a"), message("b\nc")), "[{}] ", "job").unwrap();
    assert_eq!(err.to_string(), "[job] a\n[job] b\n      c");
}
