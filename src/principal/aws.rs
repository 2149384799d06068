use {
    crate::{BuilderError, ResourceArn},
    lazy_static::lazy_static,
    regex::Regex,
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

lazy_static! {
    static ref AWS_ACCOUNT_ID: Regex = Regex::new(r"^\d{12}$").unwrap();
}

/// An entry in the `AWS` principal list: a bare account id, an IAM ARN, or `*`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AwsPrincipal {
    Account(String),
    Any,
    Arn(ResourceArn),
}

impl AwsPrincipal {
    /// The root principal of `account_id` in `partition`, e.g. `arn:aws:iam::123456789012:root`.
    pub fn account_root(partition: &str, account_id: &str) -> Self {
        Self::Arn(ResourceArn::new(partition, "iam", "", account_id, "root"))
    }

    /// An IAM user or role ARN; `kind` is `user` or `role`.
    pub fn iam(partition: &str, account_id: &str, kind: &str, name: &str) -> Self {
        Self::Arn(ResourceArn::new(partition, "iam", "", account_id, &format!("{}/{}", kind, name)))
    }
}

impl Display for AwsPrincipal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Account(account_id) => f.write_str(account_id),
            Self::Any => f.write_str("*"),
            Self::Arn(arn) => arn.fmt(f),
        }
    }
}

impl FromStr for AwsPrincipal {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, BuilderError> {
        if s == "*" {
            Ok(Self::Any)
        } else if AWS_ACCOUNT_ID.is_match(s) {
            Ok(AwsPrincipal::Account(s.to_string()))
        } else {
            match ResourceArn::from_str(s) {
                Ok(arn) => Ok(AwsPrincipal::Arn(arn)),
                Err(_) => {
                    log::debug!("AWS principal {:?} is neither an account id nor an ARN", s);
                    Err(BuilderError::InvalidPrincipal(s.to_string()))
                }
            }
        }
    }
}

struct AwsPrincipalVisitor {}

impl<'de> Visitor<'de> for AwsPrincipalVisitor {
    type Value = AwsPrincipal;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "AWS account ID or ARN pattern")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match AwsPrincipal::from_str(v) {
            Ok(principal) => Ok(principal),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for AwsPrincipal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AwsPrincipalVisitor {})
    }
}

impl Serialize for AwsPrincipal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{AwsPrincipal, BuilderError},
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_derived() {
        let ap1a = AwsPrincipal::Any;
        let ap1b = AwsPrincipal::Any;
        let ap2a = AwsPrincipal::Account("123456789012".to_string());
        let ap2b = AwsPrincipal::Account("123456789012".to_string());
        let ap3a = AwsPrincipal::Arn("arn:aws:iam::123456789012:root".parse().unwrap());
        let ap3b = AwsPrincipal::account_root("aws", "123456789012");

        assert_eq!(ap1a, ap1b);
        assert_eq!(ap2a, ap2b);
        assert_eq!(ap3a, ap3b);
        assert_ne!(ap1a, ap2a);
        assert_ne!(ap1a, ap3a);
        assert_ne!(ap2a, ap3a);

        assert_eq!(ap1a.clone(), ap1a);
        assert_eq!(ap2a.clone(), ap2a);
        assert_eq!(ap3a.clone(), ap3a);
    }

    #[test_log::test]
    fn test_parse() {
        assert_eq!(AwsPrincipal::from_str("*").unwrap(), AwsPrincipal::Any);
        assert_eq!(AwsPrincipal::from_str("123456789012").unwrap().to_string(), "123456789012");
        assert_eq!(
            AwsPrincipal::from_str("arn:aws-cn:iam::123456789012:role/admin").unwrap(),
            AwsPrincipal::iam("aws-cn", "123456789012", "role", "admin")
        );
        assert_eq!(
            AwsPrincipal::from_str("12345").unwrap_err(),
            BuilderError::InvalidPrincipal("12345".to_string())
        );

        let e = serde_json::from_str::<AwsPrincipal>(r#""bob""#).unwrap_err();
        assert!(e.to_string().starts_with(r#"invalid value: string "bob", expected AWS account ID or ARN pattern"#));
        assert_eq!(
            serde_json::to_string(&AwsPrincipal::iam("aws", "123456789012", "user", "bob")).unwrap(),
            r#""arn:aws:iam::123456789012:user/bob""#
        );
    }
}
