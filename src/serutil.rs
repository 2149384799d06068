use {
    serde::{
        de::{self, Deserializer, IntoDeserializer, SeqAccess, Visitor},
        ser::{SerializeSeq, Serializer},
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        marker::PhantomData,
        ops::Index,
        slice::Iter,
    },
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                $crate::serutil::write_pretty_json(self, f)
            }
        }
    };
}

/// Implement FromStr for a given class by parsing it as JSON.
#[macro_export]
macro_rules! from_str_json {
    ($cls:ident) => {
        impl ::std::str::FromStr for $cls {
            type Err = ::serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match ::serde_json::from_str::<Self>(s) {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        ::log::debug!("Failed to parse: {}: {:?}", s, e);
                        Err(e)
                    }
                }
            }
        }
    };
}

/// Write `value` to `f` as JSON pretty-printed with a four-space indent.
pub fn write_pretty_json<T: Serialize + ?Sized>(value: &T, f: &mut Formatter) -> FmtResult {
    let buf = Vec::new();
    let serde_formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(buf, serde_formatter);
    match value.serialize(&mut ser) {
        Ok(()) => (),
        Err(e) => {
            log::error!("Failed to serialize: {}", e);
            return Err(std::fmt::Error {});
        }
    };
    match std::str::from_utf8(&ser.into_inner()) {
        Ok(s) => write!(f, "{}", s),
        Err(e) => {
            log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
            Err(std::fmt::Error {})
        }
    }
}

/// Whether a [StringLikeList] holds a bare element or an explicit list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Single,
    List,
}

/// A JSON field that may be a single string-like element or a list of them.
///
/// IAM accepts both `"Action": "s3:GetObject"` and `"Action": ["s3:GetObject"]`; the two forms compare equal.
#[derive(Clone, Debug)]
pub enum StringLikeList<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> StringLikeList<T> {
    /// Build a list from `items`, emitting a bare element when there is exactly one.
    pub fn one_or_many(mut items: Vec<T>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return Self::Single(item);
            }
        }

        Self::List(items)
    }

    #[inline]
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Single(_) => ListKind::Single,
            Self::List(_) => ListKind::List,
        }
    }

    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(v) => vec![v],
            Self::List(v) => v,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Single(v) => std::slice::from_ref(v).iter(),
            Self::List(v) => v.iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::List(v) => v.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(v) => v.len(),
        }
    }
}

impl<T: PartialEq> PartialEq for StringLikeList<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(v1), Self::Single(v2)) => v1 == v2,
            (Self::List(v1), Self::List(v2)) => v1 == v2,
            (Self::Single(v1), Self::List(v2)) => v2.len() == 1 && v1 == &v2[0],
            (Self::List(v1), Self::Single(v2)) => v1.len() == 1 && &v1[0] == v2,
        }
    }
}

impl<T: Eq> Eq for StringLikeList<T> {}

impl<T> From<T> for StringLikeList<T> {
    fn from(v: T) -> Self {
        Self::Single(v)
    }
}

impl<T> From<Vec<T>> for StringLikeList<T> {
    fn from(v: Vec<T>) -> Self {
        Self::List(v)
    }
}

impl<T> Index<usize> for StringLikeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Single(v) => {
                if index == 0 {
                    v
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index);
                }
            }
            Self::List(v) => &v[index],
        }
    }
}

impl<'a, T> IntoIterator for &'a StringLikeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Serialize> Display for StringLikeList<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_pretty_json(self, f)
    }
}

impl<T: Serialize> Serialize for StringLikeList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(v) => v.serialize(serializer),
            Self::List(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for e in v {
                    seq.serialize_element(e)?;
                }
                seq.end()
            }
        }
    }
}

/// Deserializes `T` from a JSON string, boolean, or number.
///
/// Condition values such as `true` or `3600` are accepted unquoted by IAM; they are normalized to their string form
/// before `T` sees them.
struct Scalar<T>(T);

struct ScalarVisitor<T> {
    phantom: PhantomData<T>,
}

impl<T> ScalarVisitor<T> {
    fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

fn from_string<'de, T: Deserialize<'de>, E: de::Error>(v: String) -> Result<T, E> {
    T::deserialize(v.into_deserializer())
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ScalarVisitor<T> {
    type Value = Scalar<T>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string, boolean, or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Scalar(from_string(v.to_string())?))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Scalar(from_string(v.to_string())?))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Scalar(from_string(v.to_string())?))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Scalar(from_string(v.to_string())?))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Scalar(from_string(v.to_string())?))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Scalar<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor::new())
    }
}

struct StringLikeListVisitor<T> {
    phantom: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for StringLikeListVisitor<T> {
    type Value = StringLikeList<T>;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string or list of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(ScalarVisitor::<T>::new().visit_str::<E>(v)?.0))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(ScalarVisitor::<T>::new().visit_bool::<E>(v)?.0))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(ScalarVisitor::<T>::new().visit_i64::<E>(v)?.0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(ScalarVisitor::<T>::new().visit_u64::<E>(v)?.0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(StringLikeList::Single(ScalarVisitor::<T>::new().visit_f64::<E>(v)?.0))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut result = match access.size_hint() {
            Some(size) => Vec::with_capacity(size),
            None => Vec::new(),
        };

        while let Some(Scalar(item)) = access.next_element::<Scalar<T>>()? {
            result.push(item);
        }

        Ok(StringLikeList::List(result))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StringLikeList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringLikeListVisitor {
            phantom: PhantomData,
        })
    }
}
