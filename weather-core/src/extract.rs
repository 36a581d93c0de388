//! Typed lookups on JSON objects.
//!
//! Every accessor here answers "is there a value of this kind under this
//! key?" and reports `None` otherwise. Callers decide whether absence
//! matters; the mappers mostly go through [`field`] / [`field_or`], which
//! turn absence into a default.

use serde_json::{Map, Value};
use tracing::trace;

/// A JSON object, as handed to every mapper.
pub type Object = Map<String, Value>;

pub fn get_number(obj: &Object, key: &str) -> Option<f64> {
    obj.get(key)?.as_f64()
}

/// Integer read; floats are truncated toward zero.
pub fn get_integer(obj: &Object, key: &str) -> Option<i64> {
    obj.get(key).and_then(integer_value)
}

pub fn get_string<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    obj.get(key)?.as_str()
}

pub fn get_object<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key)?.as_object()
}

pub fn get_array<'a>(obj: &'a Object, key: &str) -> Option<&'a [Value]> {
    obj.get(key)?.as_array().map(Vec::as_slice)
}

fn integer_value(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }

    let f = number.as_f64()?;
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// A scalar that can be pulled out of a single JSON value.
pub trait FieldValue: Sized {
    /// Name of the expected JSON kind, used in trace output.
    const KIND: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for f64 {
    const KIND: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for String {
    const KIND: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

// Values outside the target width count as a type mismatch.
macro_rules! integer_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: &'static str = "integer";

                fn from_value(value: &Value) -> Option<Self> {
                    integer_value(value).and_then(|n| <$ty>::try_from(n).ok())
                }
            }
        )*
    };
}

integer_field!(i32, i64, u8, u16, u32);

/// Extract `key` as `T`, or return `default` when it is absent or mistyped.
pub fn field_or<T: FieldValue>(obj: &Object, key: &str, default: T) -> T {
    match obj.get(key) {
        None => {
            trace!(key, "field absent, using default");
            default
        }
        Some(value) => T::from_value(value).unwrap_or_else(|| {
            trace!(key, expected = T::KIND, "field has unexpected type, using default");
            default
        }),
    }
}

/// [`field_or`] with the type's zero value as the default.
pub fn field<T: FieldValue + Default>(obj: &Object, key: &str) -> T {
    field_or(obj, key, T::default())
}
