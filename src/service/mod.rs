mod dynamodb;
mod iot;
mod s3express;

pub use {dynamodb::DYNAMODB, iot::IOT, s3express::S3EXPRESS};
use {
    crate::{condop, AccessLevel, AccessLevelList, ArnTemplate, BuilderError, ConditionOp},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The value type AWS documents for a condition key. It determines the operator used when a caller does not name
/// one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionKeyType {
    Arn,
    Binary,
    Bool,
    Date,
    IpAddress,
    Numeric,
    String,
}

impl ConditionKeyType {
    pub fn default_operator(&self) -> ConditionOp {
        match self {
            Self::Arn => condop::ArnLike,
            Self::Binary => condop::BinaryEquals,
            Self::Bool => condop::Bool,
            Self::Date => condop::DateEquals,
            Self::IpAddress => condop::IpAddress,
            Self::Numeric => condop::NumericEquals,
            Self::String => condop::StringLike,
        }
    }
}

/// A service-specific condition key. Names are stored without the service prefix; tag-style keys use a trailing
/// placeholder, e.g. `BucketTag/${TagKey}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConditionKey {
    pub(crate) name: &'static str,
    pub(crate) key_type: ConditionKeyType,
}

impl ConditionKey {
    pub const fn new(name: &'static str, key_type: ConditionKeyType) -> Self {
        Self {
            name,
            key_type,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn key_type(&self) -> ConditionKeyType {
        self.key_type
    }

    /// Whether `key` (without service prefix) names this condition key, filling in any placeholder.
    pub fn matches(&self, key: &str) -> bool {
        match self.name.find("${") {
            None => self.name == key,
            Some(pos) => {
                let prefix = &self.name[..pos];
                key.len() > prefix.len() && key.starts_with(prefix)
            }
        }
    }
}

/// A resource type a service defines, with the ARN template used to address it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceType {
    pub(crate) name: &'static str,
    pub(crate) arn: ArnTemplate,
    pub(crate) condition_keys: &'static [&'static str],
}

impl ResourceType {
    pub const fn new(name: &'static str, arn: ArnTemplate, condition_keys: &'static [&'static str]) -> Self {
        Self {
            name,
            arn,
            condition_keys,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arn_template(&self) -> ArnTemplate {
        self.arn
    }

    /// Fully-qualified condition keys (e.g. `aws:ResourceTag/${TagKey}`) AWS documents for this resource type.
    #[inline]
    pub fn condition_keys(&self) -> &'static [&'static str] {
        self.condition_keys
    }
}

/// Static description of one AWS service: its prefix, actions by access level, resource types and condition keys.
#[derive(Debug)]
pub struct ServiceDescriptor {
    pub(crate) prefix: &'static str,
    pub(crate) name: &'static str,
    pub(crate) access_levels: AccessLevelList,
    pub(crate) resource_types: &'static [ResourceType],
    pub(crate) condition_keys: &'static [ConditionKey],
}

impl ServiceDescriptor {
    /// Describe a service so statements can be built for it.
    ///
    /// ```
    /// use scratchstack_iam_builder::{
    ///     service::{ResourceType, ServiceDescriptor},
    ///     AccessLevel, AccessLevelList, ArnTemplate, PolicyStatement,
    /// };
    ///
    /// static SQS: ServiceDescriptor = ServiceDescriptor::new(
    ///     "sqs",
    ///     "Amazon SQS",
    ///     AccessLevelList::new(&[(AccessLevel::Write, &["SendMessage"]), (AccessLevel::Read, &["ReceiveMessage"])]),
    ///     &[ResourceType::new(
    ///         "queue",
    ///         ArnTemplate::new("arn:${Partition}:sqs:${Region}:${Account}:${QueueName}"),
    ///         &[],
    ///     )],
    ///     &[],
    /// );
    ///
    /// let mut stmt = PolicyStatement::new(&SQS);
    /// stmt.all_write_actions().on_resource("queue", &["jobs"]).unwrap();
    /// assert_eq!(stmt.to_json().unwrap()["Resource"], "arn:aws:sqs:*:*:jobs");
    /// ```
    pub const fn new(
        prefix: &'static str,
        name: &'static str,
        access_levels: AccessLevelList,
        resource_types: &'static [ResourceType],
        condition_keys: &'static [ConditionKey],
    ) -> Self {
        Self {
            prefix,
            name,
            access_levels,
            resource_types,
            condition_keys,
        }
    }

    /// The action and condition key prefix, e.g. `iot`.
    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn access_levels(&self) -> &AccessLevelList {
        &self.access_levels
    }

    #[inline]
    pub fn access_level(&self, action: &str) -> Option<AccessLevel> {
        self.access_levels.access_level(action)
    }

    /// Every action the service defines, in table order.
    pub fn actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.access_levels.all_actions()
    }

    #[inline]
    pub fn resource_types(&self) -> &'static [ResourceType] {
        self.resource_types
    }

    pub fn resource_type(&self, name: &str) -> Result<&'static ResourceType, BuilderError> {
        match self.resource_types.iter().find(|rt| rt.name == name) {
            Some(rt) => Ok(rt),
            None => {
                log::debug!("Service {} has no resource type {}", self.prefix, name);
                Err(BuilderError::UnknownResourceType {
                    service: self.prefix.to_string(),
                    resource_type: name.to_string(),
                })
            }
        }
    }

    #[inline]
    pub fn condition_keys(&self) -> &'static [ConditionKey] {
        self.condition_keys
    }

    /// Look up a condition key by name, with or without this service's prefix.
    pub fn condition_key(&self, key: &str) -> Option<&'static ConditionKey> {
        let key = match key.split_once(':') {
            Some((prefix, rest)) if prefix == self.prefix => rest,
            Some(_) => return None,
            None => key,
        };

        self.condition_keys.iter().find(|ck| ck.matches(key))
    }

    /// Check the descriptor's tables for internal consistency.
    pub fn validate(&self) -> Result<(), BuilderError> {
        self.access_levels.validate(self.prefix)?;
        for rt in self.resource_types {
            rt.arn.identifiers()?;
        }
        Ok(())
    }
}

impl Display for ServiceDescriptor {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{} ({})", self.name, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            condop,
            service::{ConditionKeyType, DYNAMODB, IOT, S3EXPRESS},
            service::{ConditionKey, ResourceType, ServiceDescriptor},
            AccessLevel, AccessLevelList, ArnTemplate, BuilderError, PolicyStatement,
        },
        pretty_assertions::assert_eq,
    };

    static S3: ServiceDescriptor = ServiceDescriptor::new(
        "s3",
        "Amazon S3",
        AccessLevelList::new(&[
            (AccessLevel::Read, &["GetObject", "GetObjectVersion"]),
            (AccessLevel::Write, &["PutObject"]),
            (AccessLevel::List, &["ListBucket"]),
        ]),
        &[
            ResourceType::new("bucket", ArnTemplate::new("arn:${Partition}:s3:::${BucketName}"), &[]),
            ResourceType::new("object", ArnTemplate::new("arn:${Partition}:s3:::${BucketName}/${ObjectName}"), &[]),
        ],
        &[
            ConditionKey::new("prefix", ConditionKeyType::String),
            ConditionKey::new("max-keys", ConditionKeyType::Numeric),
        ],
    );

    #[test_log::test]
    fn test_caller_defined_descriptor() {
        S3.validate().unwrap();
        assert_eq!(S3.to_string(), "Amazon S3 (s3)");
        assert_eq!(S3.access_level("PutObject"), Some(AccessLevel::Write));

        let mut stmt = PolicyStatement::new(&S3);
        stmt.all_read_actions()
            .on_resource("object", &["reports", "2024/*"])
            .unwrap()
            .if_key("max-keys", 100u32, None)
            .unwrap();

        assert_eq!(
            serde_json::to_string(&stmt.to_statement().unwrap()).unwrap(),
            concat!(
                r#"{"Effect":"Allow","Action":["s3:GetObject","s3:GetObjectVersion"],"#,
                r#""Resource":"arn:aws:s3:::reports/2024/*","#,
                r#""Condition":{"NumericEquals":{"s3:max-keys":"100"}}}"#
            )
        );
    }

    #[test_log::test]
    fn test_bundled_tables_complete() {
        assert_eq!(IOT.actions().count(), 285);
        assert_eq!(DYNAMODB.actions().count(), 71);
        assert_eq!(S3EXPRESS.actions().count(), 24);
        assert_eq!(IOT.access_level("CreateThingGroup"), Some(AccessLevel::Write));
        assert_eq!(DYNAMODB.access_level("ListImports"), Some(AccessLevel::List));
        assert_eq!(
            IOT.resource_type("packageversion").unwrap().arn_template().identifiers().unwrap(),
            vec!["PackageName", "VersionName"]
        );
        assert_eq!(
            IOT.condition_key("CommandExecutionParameterNumber/timeout").unwrap().key_type(),
            ConditionKeyType::Numeric
        );
    }

    #[test_log::test]
    fn test_bundled_descriptors_valid() {
        for svc in [&IOT, &DYNAMODB, &S3EXPRESS] {
            svc.validate().unwrap();
            assert!(svc.actions().count() > 0);
            assert!(!svc.resource_types().is_empty());
        }

        assert_eq!(IOT.to_string(), "AWS IoT (iot)");
    }

    #[test_log::test]
    fn test_access_levels() {
        assert_eq!(IOT.access_level("CreateThing"), Some(AccessLevel::Write));
        assert_eq!(IOT.access_level("AttachPolicy"), Some(AccessLevel::PermissionsManagement));
        assert_eq!(IOT.access_level("ListThings"), Some(AccessLevel::List));
        assert_eq!(IOT.access_level("creatething"), None);
        assert_eq!(DYNAMODB.access_level("GetItem"), Some(AccessLevel::Read));
        assert_eq!(DYNAMODB.access_level("TagResource"), Some(AccessLevel::Tagging));
        assert_eq!(S3EXPRESS.access_level("PutBucketPolicy"), Some(AccessLevel::PermissionsManagement));
        assert_eq!(
            DYNAMODB.access_levels().actions(AccessLevel::PermissionsManagement),
            vec!["DeleteResourcePolicy", "PutResourcePolicy", "UpdateAbacStatus"]
        );
    }

    #[test_log::test]
    fn test_resource_types() {
        let thing = IOT.resource_type("thing").unwrap();
        assert_eq!(thing.name(), "thing");
        assert_eq!(thing.arn_template().as_str(), "arn:${Partition}:iot:${Region}:${Account}:thing/${ThingName}");

        let index = DYNAMODB.resource_type("index").unwrap();
        assert_eq!(index.arn_template().identifiers().unwrap(), vec!["TableName", "IndexName"]);

        let bucket = S3EXPRESS.resource_type("bucket").unwrap();
        assert!(bucket.condition_keys().contains(&"s3express:BucketTag/${TagKey}"));

        assert_eq!(
            IOT.resource_type("gizmo").unwrap_err(),
            BuilderError::UnknownResourceType {
                service: "iot".to_string(),
                resource_type: "gizmo".to_string(),
            }
        );
    }

    #[test_log::test]
    fn test_condition_keys() {
        let delete = IOT.condition_key("Delete").unwrap();
        assert_eq!(delete.key_type(), ConditionKeyType::Bool);
        assert_eq!(delete.key_type().default_operator(), condop::Bool);
        assert_eq!(IOT.condition_key("iot:Delete"), Some(delete));
        assert_eq!(IOT.condition_key("dynamodb:Delete"), None);

        let tag = S3EXPRESS.condition_key("BucketTag/env").unwrap();
        assert_eq!(tag.name(), "BucketTag/${TagKey}");
        assert!(S3EXPRESS.condition_key("BucketTag/").is_none());
        assert_eq!(S3EXPRESS.condition_key("TlsVersion").unwrap().key_type().default_operator(), condop::NumericEquals);
        assert_eq!(
            S3EXPRESS.condition_key("DataAccessPointArn").unwrap().key_type().default_operator(),
            condop::ArnLike
        );
        assert_eq!(DYNAMODB.condition_key("LeadingKeys").unwrap().key_type(), ConditionKeyType::String);
        assert_eq!(ConditionKeyType::Date.default_operator(), condop::DateEquals);
        assert_eq!(ConditionKeyType::IpAddress.default_operator(), condop::IpAddress);
        assert_eq!(ConditionKeyType::Binary.default_operator(), condop::BinaryEquals);
    }
}
