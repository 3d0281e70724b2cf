/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects keep the order their keys are written in. Any other expression is
/// converted with `Value::from`, so strings, integers up to 32 bits, floats,
/// nested `Value`s and `KvMap`s can be spliced in directly. Negative numbers
/// need parentheses: `kv!([(-1), 2])`.
///
/// ```rust
/// use serde_kv::kv;
///
/// let settings = kv!({
///     "Name": "launcher",
///     "Size": [800, 600],
///     "Debug": false,
///     "Paths": { "Cache": "/tmp/cache" }
/// });
/// assert_eq!(settings.to_string(),
///     r#"{"Name" "launcher" "Size" [800 600] "Debug" false "Paths" {"Cache" "/tmp/cache"}}"#);
/// ```
#[macro_export]
macro_rules! kv {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![$($crate::kv!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::KvMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::KvMap::new();
        $(
            object.insert($key, $crate::kv!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
