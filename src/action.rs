use {
    crate::{serutil::StringLikeList, BuilderError},
    log::debug,
    serde::{
        de::{self, Deserializer, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub type ActionList = StringLikeList<Action>;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    Any,
    Specific {
        service: String,
        action: String,
    },
}

impl Action {
    /// Create a validated action. Service prefixes are alphanumeric with interior `-` or `_`; action names may
    /// additionally carry the `*` and `?` wildcards.
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Result<Self, BuilderError> {
        let service = service.into();
        let action = action.into();

        if service.is_empty() || action.is_empty() {
            debug!("Action '{service}:{action}' has an empty component.");
            return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
        }

        if !service.is_ascii() || !action.is_ascii() {
            debug!("Action '{service}:{action}' is not ASCII.");
            return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
        }

        for (i, c) in service.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && !(i > 0 && i < service.len() - 1 && (c == b'-' || c == b'_')) {
                debug!("Action '{service}:{action}' has an invalid service.");
                return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        for (i, c) in action.bytes().enumerate() {
            if !c.is_ascii_alphanumeric()
                && c != b'*'
                && c != b'?'
                && !(i > 0 && i < action.len() - 1 && (c == b'-' || c == b'_'))
            {
                debug!("Action '{service}:{action}' has an invalid action.");
                return Err(BuilderError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        Ok(Action::Specific {
            service,
            action,
        })
    }

    /// Create an action without validating either component.
    ///
    /// Service descriptors are snapshots that may lag behind AWS, so the builder passes names through as given.
    pub fn verbatim<S: Into<String>, A: Into<String>>(service: S, action: A) -> Self {
        Action::Specific {
            service: service.into(),
            action: action.into(),
        }
    }

    /// Split `v` at its first `:` without validating either side. `*` is [Action::Any].
    ///
    /// This accepts everything [PolicyStatement::to](crate::PolicyStatement::to) can emit, so serialized statements
    /// parse back unchanged.
    pub fn parse_verbatim(v: &str) -> Result<Self, BuilderError> {
        if v == "*" {
            return Ok(Self::Any);
        }

        match v.split_once(':') {
            Some((service, action)) => Ok(Self::verbatim(service, action)),
            None => {
                debug!("Action '{}' has no service prefix.", v);
                Err(BuilderError::InvalidAction(v.to_string()))
            }
        }
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific { .. })
    }

    #[inline]
    pub fn service(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                service,
                ..
            } => service,
        }
    }

    #[inline]
    pub fn action(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                action,
                ..
            } => action,
        }
    }
}

impl FromStr for Action {
    type Err = BuilderError;
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        if v == "*" {
            return Ok(Self::Any);
        }

        let parts: Vec<&str> = v.split(':').collect();
        if parts.len() != 2 {
            return Err(BuilderError::InvalidAction(v.to_string()));
        }

        Action::new(parts[0], parts[1])
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Specific {
                service,
                action,
            } => write!(f, "{}:{}", service, action),
        }
    }
}

struct ActionVisitor {}
impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "service:action or \"*\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match Action::parse_verbatim(v) {
            Ok(action) => Ok(action),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ActionVisitor {})
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
