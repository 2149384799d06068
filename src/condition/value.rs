use {
    chrono::{DateTime, SecondsFormat, Utc},
    ipnet::IpNet,
    std::net::IpAddr,
};

/// A single value that can appear in a condition clause.
///
/// IAM compares every condition value as a string, so booleans, numbers, dates, and addresses are rendered the same
/// way the console writes them.
pub trait ConditionValue {
    fn to_condition_value(&self) -> String;
}

/// Something that expands into one or more condition values.
pub trait IntoConditionValues {
    fn into_condition_values(self) -> Vec<String>;
}

impl ConditionValue for str {
    fn to_condition_value(&self) -> String {
        self.to_string()
    }
}

impl ConditionValue for String {
    fn to_condition_value(&self) -> String {
        self.clone()
    }
}

impl<T: ConditionValue + ?Sized> ConditionValue for &T {
    fn to_condition_value(&self) -> String {
        (**self).to_condition_value()
    }
}

impl ConditionValue for DateTime<Utc> {
    fn to_condition_value(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

macro_rules! display_condition_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConditionValue for $ty {
                fn to_condition_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_condition_value!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, IpAddr, IpNet);

macro_rules! single_condition_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoConditionValues for $ty {
                fn into_condition_values(self) -> Vec<String> {
                    vec![self.to_condition_value()]
                }
            }
        )*
    };
}

single_condition_value!(
    &str,
    String,
    &String,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    DateTime<Utc>,
    IpAddr,
    IpNet,
);

impl<T: ConditionValue> IntoConditionValues for Vec<T> {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue> IntoConditionValues for &Vec<T> {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue> IntoConditionValues for &[T] {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue, const N: usize> IntoConditionValues for [T; N] {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

impl<T: ConditionValue, const N: usize> IntoConditionValues for &[T; N] {
    fn into_condition_values(self) -> Vec<String> {
        self.iter().map(ConditionValue::to_condition_value).collect()
    }
}

/// Encode raw bytes for use with the `BinaryEquals` operator.
pub fn binary_value(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

#[cfg(test)]
mod tests {
    use {
        super::{binary_value, ConditionValue, IntoConditionValues},
        chrono::{DateTime, Utc},
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        std::{
            net::{IpAddr, Ipv4Addr},
            str::FromStr,
        },
    };

    #[test_log::test]
    fn test_scalars() {
        assert_eq!("prod".into_condition_values(), vec!["prod"]);
        assert_eq!("prod".to_string().into_condition_values(), vec!["prod"]);
        assert_eq!(true.into_condition_values(), vec!["true"]);
        assert_eq!(3600u32.into_condition_values(), vec!["3600"]);
        assert_eq!((-1i64).into_condition_values(), vec!["-1"]);
        assert_eq!(1.5f64.into_condition_values(), vec!["1.5"]);
        assert_eq!(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)).into_condition_values(), vec!["10.0.0.1"]);
        assert_eq!(IpNet::from_str("192.0.2.0/24").unwrap().into_condition_values(), vec!["192.0.2.0/24"]);
    }

    #[test_log::test]
    fn test_dates() {
        let dt = DateTime::parse_from_rfc3339("2022-03-14T16:09:26.535+01:00").unwrap().with_timezone(&Utc);
        assert_eq!(dt.to_condition_value(), "2022-03-14T15:09:26.535Z");
        assert_eq!(dt.into_condition_values(), vec!["2022-03-14T15:09:26.535Z"]);

        let dt = DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(dt.to_condition_value(), "2020-01-01T00:00:00.000Z");
    }

    #[test_log::test]
    fn test_collections() {
        assert_eq!(vec!["a", "b"].into_condition_values(), vec!["a", "b"]);
        assert_eq!(["a", "b", "a"].into_condition_values(), vec!["a", "b", "a"]);
        let owned = vec!["x".to_string()];
        assert_eq!((&owned).into_condition_values(), vec!["x"]);
        assert_eq!(owned[..].into_condition_values(), vec!["x"]);
        assert_eq!([1u16, 2].into_condition_values(), vec!["1", "2"]);
        assert!(Vec::<&str>::new().into_condition_values().is_empty());
    }

    #[test_log::test]
    fn test_binary() {
        assert_eq!(binary_value(b"hello"), "aGVsbG8=");
        assert_eq!(binary_value(&[]), "");
    }
}
