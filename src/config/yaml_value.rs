use std::borrow::Cow;

use saphyr::{Scalar, Yaml};

pub(super) fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

pub(super) fn is_null(value: &Yaml) -> bool {
    matches!(value, Yaml::Value(Scalar::Null))
}

/// Unquoted floats lose their spelling (`1.10` reads back as `1.1`), so they
/// have to be quoted wherever text is expected.
pub(super) fn is_float(value: &Yaml) -> bool {
    matches!(value, Yaml::Value(Scalar::FloatingPoint(_)))
}

/// Textual form of a scalar, so unquoted names like `2024` still count.
/// Floats are not text; see [`is_float`].
pub(super) fn scalar_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(text)) => Some(text.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Some(number.to_string()),
        _ => None,
    }
}
