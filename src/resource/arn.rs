use {
    crate::BuilderError,
    derive_builder::Builder,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

const PARTITION_START: usize = 4;

/// An Amazon Resource Name (ARN) in a resource statement.
///
/// Segments may contain the `*` and `?` wildcards; no segment is validated beyond splitting on the first five colons.
/// For example, `arn:aws:iot:*:*:thing/MyThing` has a partition of `aws`, a region and account ID of `*`, and a
/// resource of `thing/MyThing`.
///
/// [ResourceArn] objects are immutable.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ResourceArn {
    arn: String,
    service_start: usize,
    region_start: usize,
    account_id_start: usize,
    resource_start: usize,
}

impl ResourceArn {
    /// Create a new ARN from the specified components.
    ///
    /// * `partition` - The partition the resource is in.
    /// * `service` - The service the resource belongs to.
    /// * `region` - The region the resource is in.
    /// * `account_id` - The account ID the resource belongs to.
    /// * `resource` - The resource name.
    pub fn new(partition: &str, service: &str, region: &str, account_id: &str, resource: &str) -> Self {
        let arn = format!("arn:{partition}:{service}:{region}:{account_id}:{resource}");
        let service_start = PARTITION_START + partition.len() + 1;
        let region_start = service_start + service.len() + 1;
        let account_id_start = region_start + region.len() + 1;
        let resource_start = account_id_start + account_id.len() + 1;

        Self {
            arn,
            service_start,
            region_start,
            account_id_start,
            resource_start,
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.arn[PARTITION_START..self.service_start - 1]
    }

    #[inline]
    pub fn service(&self) -> &str {
        &self.arn[self.service_start..self.region_start - 1]
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.arn[self.region_start..self.account_id_start - 1]
    }

    #[inline]
    pub fn account_id(&self) -> &str {
        &self.arn[self.account_id_start..self.resource_start - 1]
    }

    #[inline]
    pub fn resource(&self) -> &str {
        &self.arn[self.resource_start..]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.arn
    }
}

impl FromStr for ResourceArn {
    type Err = BuilderError;

    /// Create a [ResourceArn] from a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" {
            return Err(BuilderError::InvalidResource(s.to_string()));
        }

        let arn = s.to_string();
        let service_start = PARTITION_START + parts[1].len() + 1;
        let region_start = service_start + parts[2].len() + 1;
        let account_id_start = region_start + parts[3].len() + 1;
        let resource_start = account_id_start + parts[4].len() + 1;

        Ok(Self {
            arn,
            service_start,
            region_start,
            account_id_start,
            resource_start,
        })
    }
}

impl Display for ResourceArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.arn)
    }
}

/// Values substituted into ARN templates when a call does not override them.
///
/// The defaults leave region and account unscoped (`*`) in the `aws` partition.
#[derive(Builder, Clone, Debug, Eq, Hash, PartialEq)]
#[builder(default)]
pub struct ArnDefaults {
    #[builder(setter(into))]
    partition: String,

    #[builder(setter(into))]
    region: String,

    #[builder(setter(into))]
    account: String,
}

impl ArnDefaults {
    #[inline]
    pub fn builder() -> ArnDefaultsBuilder {
        ArnDefaultsBuilder::default()
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }
}

impl Default for ArnDefaults {
    fn default() -> Self {
        Self {
            partition: "aws".to_string(),
            region: "*".to_string(),
            account: "*".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Partition,
    Region,
    Account,
    Identifier(&'a str),
}

/// An ARN template in AWS documentation syntax, e.g. `arn:${Partition}:iot:${Region}:${Account}:thing/${ThingName}`.
///
/// `${Partition}`, `${Region}`, and `${Account}` are filled from per-call overrides or [ArnDefaults]. Every other
/// placeholder is a mandatory identifier, filled positionally and verbatim.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArnTemplate(&'static str);

impl ArnTemplate {
    #[inline]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    fn segments(&self) -> Result<Vec<Segment<'static>>, BuilderError> {
        let mut result = Vec::new();
        let mut rest = self.0;

        while let Some(start) = rest.find("${") {
            if start > 0 {
                result.push(Segment::Literal(&rest[..start]));
            }

            let after = &rest[start + 2..];
            let end = match after.find('}') {
                Some(end) => end,
                None => {
                    log::debug!("ARN template {} has an unterminated placeholder", self.0);
                    return Err(BuilderError::InvalidArnTemplate(self.0.to_string()));
                }
            };

            let name = &after[..end];
            result.push(match name {
                "Partition" => Segment::Partition,
                "Region" => Segment::Region,
                "Account" => Segment::Account,
                "" => return Err(BuilderError::InvalidArnTemplate(self.0.to_string())),
                _ => Segment::Identifier(name),
            });
            rest = &after[end + 1..];
        }

        if !rest.is_empty() {
            result.push(Segment::Literal(rest));
        }

        Ok(result)
    }

    /// The names of the identifier placeholders, in the order they must be supplied.
    pub fn identifiers(&self) -> Result<Vec<&'static str>, BuilderError> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|s| match s {
                Segment::Identifier(name) => Some(name),
                _ => None,
            })
            .collect())
    }

    /// Render the template.
    ///
    /// `account`, `region`, and `partition` override the corresponding entries in `defaults` when present.
    pub fn resolve(
        &self,
        defaults: &ArnDefaults,
        ids: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<String, BuilderError> {
        let segments = self.segments()?;
        let expected = segments.iter().filter(|s| matches!(s, Segment::Identifier(_))).count();
        if expected != ids.len() {
            log::debug!("ARN template {} expects {} identifier(s), got {:?}", self.0, expected, ids);
            return Err(BuilderError::ResourceIdentifierCount {
                resource_type: self.0.to_string(),
                expected,
                actual: ids.len(),
            });
        }

        let mut result = String::with_capacity(self.0.len() + ids.iter().map(|id| id.len()).sum::<usize>());
        let mut ids = ids.iter();

        for segment in segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Partition => result.push_str(partition.unwrap_or(defaults.partition())),
                Segment::Region => result.push_str(region.unwrap_or(defaults.region())),
                Segment::Account => result.push_str(account.unwrap_or(defaults.account())),
                Segment::Identifier(_) => {
                    if let Some(id) = ids.next() {
                        result.push_str(id);
                    }
                }
            }
        }

        Ok(result)
    }
}

impl Display for ArnTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ArnDefaults, ArnTemplate, ResourceArn},
        crate::BuilderError,
        pretty_assertions::{assert_eq, assert_ne},
        std::{collections::hash_map::DefaultHasher, hash::Hash, str::FromStr},
    };

    const THING: ArnTemplate = ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:thing/${ThingName}");
    const GLOBAL_TABLE: ArnTemplate =
        ArnTemplate::new("arn:${Partition}:dynamodb::${Account}:global-table/${GlobalTableName}");
    const INDEX: ArnTemplate =
        ArnTemplate::new("arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}");

    #[test_log::test]
    fn check_arn_derived() {
        let arn1a = ResourceArn::from_str("arn:*:ec2:us-*-1:123456789012:instance/*").unwrap();
        let arn1b = ResourceArn::new("*", "ec2", "us-*-1", "123456789012", "instance/*");
        let arn1c = arn1a.clone();
        let arn2 = ResourceArn::from_str("arn:aws:ec2:us-east-1:123456789012:instance/*").unwrap();

        assert_eq!(arn1a, arn1b);
        assert_ne!(arn1a, arn2);
        assert_eq!(arn1c, arn1b);

        assert_eq!(arn1a.partition(), "*");
        assert_eq!(arn1a.service(), "ec2");
        assert_eq!(arn1a.region(), "us-*-1");
        assert_eq!(arn1a.account_id(), "123456789012");
        assert_eq!(arn1a.resource(), "instance/*");

        let mut h = DefaultHasher::new();
        arn2.hash(&mut h);
        _ = format!("{arn2:?}");
        assert_eq!(arn2.to_string(), "arn:aws:ec2:us-east-1:123456789012:instance/*");
    }

    #[test_log::test]
    fn check_arn_components() {
        let arn = ResourceArn::from_str("arn:aws:s3:::bucket/key:with:colons").unwrap();
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "s3");
        assert_eq!(arn.region(), "");
        assert_eq!(arn.account_id(), "");
        assert_eq!(arn.resource(), "bucket/key:with:colons");
        assert_eq!(arn.as_str(), "arn:aws:s3:::bucket/key:with:colons");
    }

    #[test_log::test]
    fn check_malformed_arns() {
        for wrong in ["arn", "arn:aws", "arn:aws:ec2:us-east-1:123456789012", "https:aws:ec2:us-east-1:1:x"] {
            assert_eq!(ResourceArn::from_str(wrong).unwrap_err(), BuilderError::InvalidResource(wrong.to_string()));
        }
    }

    #[test_log::test]
    fn check_defaults() {
        let d = ArnDefaults::default();
        assert_eq!(d.partition(), "aws");
        assert_eq!(d.region(), "*");
        assert_eq!(d.account(), "*");
        assert_eq!(ArnDefaults::builder().build().unwrap(), d);

        let partial = ArnDefaults::builder().account("123456789012").build().unwrap();
        assert_eq!(partial.partition(), d.partition());
        assert_eq!(partial.region(), d.region());
        assert_eq!(partial.account(), "123456789012");

        let d =
            ArnDefaults::builder().partition("aws-cn").region("cn-north-1").account("123456789012").build().unwrap();
        assert_eq!(d.partition(), "aws-cn");
        assert_eq!(d.region(), "cn-north-1");
        assert_eq!(d.account(), "123456789012");
    }

    #[test_log::test]
    fn check_resolve_defaults() {
        let d = ArnDefaults::default();
        assert_eq!(THING.resolve(&d, &["MyThing"], None, None, None).unwrap(), "arn:aws:iot:*:*:thing/MyThing");

        let d = ArnDefaults::builder().region("us-west-2").account("111122223333").build().unwrap();
        assert_eq!(
            THING.resolve(&d, &["MyThing"], None, None, None).unwrap(),
            "arn:aws:iot:us-west-2:111122223333:thing/MyThing"
        );
    }

    #[test_log::test]
    fn check_resolve_overrides() {
        let d = ArnDefaults::builder().region("us-west-2").account("111122223333").build().unwrap();
        assert_eq!(
            THING.resolve(&d, &["T"], Some("444455556666"), None, None).unwrap(),
            "arn:aws:iot:us-west-2:444455556666:thing/T"
        );
        assert_eq!(
            THING.resolve(&d, &["T"], None, Some("eu-west-1"), Some("aws-us-gov")).unwrap(),
            "arn:aws-us-gov:iot:eu-west-1:111122223333:thing/T"
        );
    }

    #[test_log::test]
    fn check_resolve_shapes() {
        let d = ArnDefaults::default();
        assert_eq!(
            GLOBAL_TABLE.resolve(&d, &["Orders"], None, Some("ignored"), None).unwrap(),
            "arn:aws:dynamodb::*:global-table/Orders"
        );
        assert_eq!(
            INDEX.resolve(&d, &["Orders", "ByDate"], None, None, None).unwrap(),
            "arn:aws:dynamodb:*:*:table/Orders/index/ByDate"
        );
        assert_eq!(INDEX.identifiers().unwrap(), vec!["TableName", "IndexName"]);

        // Identifiers are substituted verbatim.
        assert_eq!(THING.resolve(&d, &[""], None, None, None).unwrap(), "arn:aws:iot:*:*:thing/");
        assert_eq!(THING.resolve(&d, &["a/b:c*"], None, None, None).unwrap(), "arn:aws:iot:*:*:thing/a/b:c*");
    }

    #[test_log::test]
    fn check_resolve_errors() {
        let d = ArnDefaults::default();
        assert_eq!(
            INDEX.resolve(&d, &["Orders"], None, None, None).unwrap_err(),
            BuilderError::ResourceIdentifierCount {
                resource_type: INDEX.to_string(),
                expected: 2,
                actual: 1,
            }
        );

        let bad = ArnTemplate::new("arn:${Partition}:iot:${Region");
        assert_eq!(
            bad.resolve(&d, &[], None, None, None).unwrap_err(),
            BuilderError::InvalidArnTemplate("arn:${Partition}:iot:${Region".to_string())
        );
        let empty = ArnTemplate::new("arn:${}:iot");
        assert!(empty.identifiers().is_err());
    }
}
