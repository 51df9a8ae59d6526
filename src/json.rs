use std::collections::BTreeMap;

/// Parsed JSON value.
///
/// Object keys are kept sorted, so two objects compare equal whenever they hold
/// the same pairs regardless of the order they were written in.
#[derive(Clone, Debug, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Array(Vec<Json>),
    Object(BTreeMap<String, Json>),
}

impl Json {
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Json::Bool(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Json::Integer(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Json>> {
        match self {
            Json::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Json>> {
        match self {
            Json::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.as_object()?.get(key)
    }
}

impl From<bool> for Json {
    fn from(val: bool) -> Self {
        Json::Bool(val)
    }
}

impl From<i64> for Json {
    fn from(val: i64) -> Self {
        Json::Integer(val)
    }
}

impl From<&str> for Json {
    fn from(val: &str) -> Self {
        Json::String(val.to_string())
    }
}

impl From<String> for Json {
    fn from(val: String) -> Self {
        Json::String(val)
    }
}

impl From<Vec<Json>> for Json {
    fn from(v: Vec<Json>) -> Self {
        Json::Array(v)
    }
}

impl From<BTreeMap<String, Json>> for Json {
    fn from(m: BTreeMap<String, Json>) -> Self {
        Json::Object(m)
    }
}

#[macro_export]
macro_rules! json_array {
    () => {
        $crate::Json::Array(vec![])
    };
    ( $( $x:expr ), *) => {
        {
            let mut v: Vec<$crate::Json> = vec![];
            $(
                v.push($crate::Json::from($x));
            )*
            $crate::Json::Array(v)
        }
    };
}

#[macro_export]
macro_rules! json_object {
    () => {
        $crate::Json::Object(::std::collections::BTreeMap::new())
    };
    ( $( $k:expr; $v:expr), *) => {
        {
            let mut m: ::std::collections::BTreeMap<String, $crate::Json> =
                ::std::collections::BTreeMap::new();
            $(
                m.insert($k.to_string(), $crate::Json::from($v));
            )*
            $crate::Json::Object(m)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Json;
    use pretty_assertions::assert_eq;

    #[test]
    fn object_equality_ignores_insertion_order() {
        assert_eq!(
            crate::json_object! { "a"; 1i64, "b"; true },
            crate::json_object! { "b"; true, "a"; 1i64 },
        );
    }

    #[test]
    fn array_equality_respects_order() {
        assert_ne!(
            crate::json_array![1i64, 2i64],
            crate::json_array![2i64, 1i64]
        );
    }

    #[test]
    fn accessors() {
        let obj = crate::json_object! {
            "name"; "mini",
            "list"; crate::json_array![Json::Null, false],
            "size"; 3i64
        };

        assert_eq!(obj.get("name").and_then(Json::as_str), Some("mini"));
        assert_eq!(obj.get("size").and_then(Json::as_i64), Some(3));
        assert_eq!(obj.get("missing"), None);

        let list = obj.get("list").and_then(Json::as_array).unwrap();
        assert!(list[0].is_null());
        assert_eq!(list[1].as_bool(), Some(false));

        assert_eq!(Json::Integer(1).get("name"), None);
        assert_eq!(Json::Null.as_str(), None);
        assert_eq!(obj.as_object().map(|m| m.len()), Some(3));
    }

    #[test]
    fn empty_macros() {
        assert_eq!(crate::json_array![], Json::Array(vec![]));
        assert_eq!(
            crate::json_object! {},
            Json::Object(std::collections::BTreeMap::new())
        );
    }
}
