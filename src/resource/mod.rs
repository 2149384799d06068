mod arn;

use {
    crate::serutil::StringLikeList,
    serde::{
        de::{self, Deserializer, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        convert::Infallible,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub use arn::{ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError, ArnTemplate, ResourceArn};

pub type ResourceList = StringLikeList<Resource>;

/// A resource element. Strings that are neither `*` nor ARN-shaped are carried through as [Resource::Other].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    Any,
    Arn(ResourceArn),
    Other(String),
}

impl Resource {
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn arn(&self) -> Option<&ResourceArn> {
        match self {
            Self::Arn(arn) => Some(arn),
            _ => None,
        }
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        if s == "*" {
            return Self::Any;
        }

        match ResourceArn::from_str(&s) {
            Ok(arn) => Self::Arn(arn),
            Err(_) => {
                log::debug!("Resource {:?} is not an ARN; passing it through", s);
                Self::Other(s)
            }
        }
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ResourceArn> for Resource {
    fn from(arn: ResourceArn) -> Self {
        Self::Arn(arn)
    }
}

impl FromStr for Resource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Arn(arn) => f.write_str(arn.as_str()),
            Self::Other(s) => f.write_str(s),
        }
    }
}

struct ResourceVisitor {}

impl<'de> Visitor<'de> for ResourceVisitor {
    type Value = Resource;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "resource ARN or \"*\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Resource::from(v))
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ResourceVisitor {})
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
