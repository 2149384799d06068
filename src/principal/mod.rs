mod aws;
mod specified;

pub use {
    aws::AwsPrincipal,
    specified::{SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError},
};

use {
    crate::display_json,
    log::debug,
    serde::{
        de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// The `Principal` or `NotPrincipal` element of a resource-based policy statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Principal {
    Any,
    Specified(SpecifiedPrincipal),
}

impl Principal {
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn specified(&self) -> Option<&SpecifiedPrincipal> {
        match self {
            Self::Any => None,
            Self::Specified(sp) => Some(sp),
        }
    }
}

impl From<SpecifiedPrincipal> for Principal {
    fn from(sp: SpecifiedPrincipal) -> Self {
        Self::Specified(sp)
    }
}

struct PrincipalVisitor {}

impl<'de> Visitor<'de> for PrincipalVisitor {
    type Value = Principal;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "map of principal types to values or \"*\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "*" => Ok(Principal::Any),
            _ => {
                debug!("Principal string {:?} is not \"*\"", v);
                Err(E::invalid_value(Unexpected::Str(v), &self))
            }
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        SpecifiedPrincipal::deserialize(MapAccessDeserializer::new(access)).map(Principal::Specified)
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrincipalVisitor {})
    }
}

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Specified(specified) => specified.serialize(serializer),
        }
    }
}

display_json!(Principal);

#[cfg(test)]
mod tests {
    use {
        crate::{AwsPrincipal, Principal, SpecifiedPrincipal},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_formatting() {
        let aws_principal = vec![
            AwsPrincipal::from_str("123456789012").unwrap(),
            AwsPrincipal::from_str("arn:aws:iam::123456789012:role/test").unwrap(),
        ];
        let p1 = Principal::Any;
        let p2 = Principal::Specified(SpecifiedPrincipal::builder().aws(aws_principal).build().unwrap());

        assert_eq!(format!("{}", p1), r#""*""#);
        assert_eq!(
            format!("{}", p2),
            indoc! { r#"
            {
                "AWS": [
                    "123456789012",
                    "arn:aws:iam::123456789012:role/test"
                ]
            }"#}
        )
    }

    #[test_log::test]
    fn test_deserialize() {
        assert!(serde_json::from_str::<Principal>(r#""*""#).unwrap().is_any());

        let p: Principal = serde_json::from_str(r#"{"Service": "iot.amazonaws.com"}"#).unwrap();
        assert!(!p.is_any());
        assert_eq!(p.specified().unwrap().service().unwrap()[0], "iot.amazonaws.com");
        assert!(Principal::Any.specified().is_none());

        let e = serde_json::from_str::<Principal>(r#""everyone""#).unwrap_err();
        assert!(e.to_string().starts_with(r#"invalid value: string "everyone""#));
    }
}
