use std::fmt;

use error_fold::prelude::*;
use error_fold::{inspect, merge_prefixed};

#[derive(Debug, Clone, PartialEq)]
enum FieldError {
    Empty(&'static str),
    OutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Empty(field) => write!(f, "{field} is empty"),
            FieldError::OutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for FieldError {}

struct Row<'a> {
    name: &'a str,
    email: &'a str,
    age: &'a str,
}

fn validate_row(row: &Row<'_>) -> Option<MultiError> {
    let mut errs = MultiError::new();
    if row.name.is_empty() {
        errs.push(error_fold::share(FieldError::Empty("name")));
    }
    if !row.email.contains('@') {
        errs.push(format!("email {:?} has no domain", row.email));
    }

    let mut parse_errs = None;
    if let Some(age) = row.age.parse::<i64>().or_accumulate(&mut parse_errs) {
        if !(0..150).contains(&age) {
            errs.push(error_fold::share(FieldError::OutOfRange { field: "age", value: age }));
        }
    }
    errs.extend(parse_errs.into_iter().flatten());
    errs.error_or_none()
}

fn main() {
    let rows = [
        Row { name: "ann", email: "ann@example.com", age: "34" },
        Row { name: "", email: "nobody", age: "x" },
        Row { name: "bo", email: "bo@example.com", age: "212" },
    ];

    let mut report: Option<MultiError> = None;
    for (i, row) in rows.iter().enumerate() {
        report = merge_prefixed(report, &format!("row {}: ", i + 1), [validate_row(row)]);
    }

    let Some(report) = report.and_then(|r| titled!(r, "{} rows checked", rows.len())) else {
        println!("all rows valid");
        return;
    };

    println!("{report}\n");

    for (i, leaf) in report.leaves().enumerate() {
        println!("#{i}: {leaf}");
    }

    if inspect::is(&report, &FieldError::Empty("name")) {
        println!("\nat least one row is missing a name");
    }
}
