use {
    crate::{
        condop,
        service::ServiceDescriptor,
        serutil::StringLikeList,
        AccessLevel, Action, ArnDefaults, AwsPrincipal, BuilderError, Condition, Effect, IntoConditionValues,
        Operator, Principal, Resource, SpecifiedPrincipal, Statement, StatementBuilderError,
    },
    log::{debug, trace},
    regex::Regex,
    std::str::FromStr,
};

/// Principals accumulated for a resource-based statement.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct PrincipalSet {
    public: bool,
    aws: Vec<AwsPrincipal>,
    canonical_users: Vec<String>,
    federated: Vec<String>,
    services: Vec<String>,
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) -> bool {
    if list.contains(&item) {
        false
    } else {
        list.push(item);
        true
    }
}

fn one_or_many<T: Clone>(items: &[T]) -> Option<StringLikeList<T>> {
    if items.is_empty() {
        None
    } else {
        Some(StringLikeList::one_or_many(items.to_vec()))
    }
}

impl PrincipalSet {
    fn has_specific(&self) -> bool {
        !(self.aws.is_empty()
            && self.canonical_users.is_empty()
            && self.federated.is_empty()
            && self.services.is_empty())
    }

    fn is_empty(&self) -> bool {
        !self.public && !self.has_specific()
    }

    fn to_principal(&self) -> Result<Option<Principal>, BuilderError> {
        if self.is_empty() {
            return Ok(None);
        }

        let mut aws = self.aws.clone();
        if self.public {
            if !self.has_specific() {
                return Ok(Some(Principal::Any));
            }
            aws.insert(0, AwsPrincipal::Any);
        }

        let mut builder = SpecifiedPrincipal::builder();
        if let Some(aws) = one_or_many(&aws) {
            builder.aws(aws);
        }
        if let Some(canonical_users) = one_or_many(&self.canonical_users) {
            builder.canonical_user(canonical_users);
        }
        if let Some(federated) = one_or_many(&self.federated) {
            builder.federated(federated);
        }
        if let Some(services) = one_or_many(&self.services) {
            builder.service(services);
        }

        match builder.build() {
            Ok(sp) => Ok(Some(Principal::Specified(sp))),
            Err(e) => Err(BuilderError::InvalidPrincipal(e.to_string())),
        }
    }
}

/// A fluent builder for one IAM policy statement against a single AWS service.
///
/// Actions, resources, conditions, and principals accumulate across calls; [PolicyStatement::to_statement] produces
/// the serialized form.
///
/// ```
/// use scratchstack_iam_builder::{service::IOT, PolicyStatement};
///
/// let mut stmt = PolicyStatement::new(&IOT);
/// stmt.to("CreateThing")
///     .on_resource("thing", &["MyThing"])
///     .unwrap()
///     .if_aws_resource_tag("env", "prod", None)
///     .unwrap();
/// assert_eq!(
///     serde_json::to_string(&stmt.to_statement().unwrap()).unwrap(),
///     concat!(
///         r#"{"Effect":"Allow","Action":"iot:CreateThing","Resource":"arn:aws:iot:*:*:thing/MyThing","#,
///         r#""Condition":{"StringLike":{"aws:ResourceTag/env":"prod"}}}"#
///     )
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PolicyStatement {
    service: &'static ServiceDescriptor,
    defaults: ArnDefaults,
    sid: Option<String>,
    effect: Effect,
    actions: Vec<Action>,
    not_action: bool,
    resources: Vec<Resource>,
    not_resource: bool,
    conditions: Condition,
    principals: PrincipalSet,
    not_principal: bool,
}

impl PolicyStatement {
    /// Create an empty `Allow` statement for `service` using the default ARN partition, region, and account.
    pub fn new(service: &'static ServiceDescriptor) -> Self {
        Self::with_defaults(service, ArnDefaults::default())
    }

    pub fn with_sid<S: Into<String>>(service: &'static ServiceDescriptor, sid: S) -> Self {
        let mut result = Self::new(service);
        result.sid = Some(sid.into());
        result
    }

    pub fn with_defaults(service: &'static ServiceDescriptor, defaults: ArnDefaults) -> Self {
        Self {
            service,
            defaults,
            sid: None,
            effect: Effect::Allow,
            actions: Vec::new(),
            not_action: false,
            resources: Vec::new(),
            not_resource: false,
            conditions: Condition::new(),
            principals: PrincipalSet::default(),
            not_principal: false,
        }
    }

    /// Replace the ARN defaults. Resources already added are not affected.
    pub fn set_defaults(&mut self, defaults: ArnDefaults) -> &mut Self {
        self.defaults = defaults;
        self
    }

    pub fn sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn allow(&mut self) -> &mut Self {
        self.effect = Effect::Allow;
        self
    }

    pub fn deny(&mut self) -> &mut Self {
        self.effect = Effect::Deny;
        self
    }

    // Actions

    fn add_action(&mut self, action: Action) {
        trace!("Adding action {}", action);
        push_unique(&mut self.actions, action);
    }

    /// Add `service:action`. The name is not checked against the service's action table.
    pub fn to(&mut self, action: &str) -> &mut Self {
        self.add_action(Action::verbatim(self.service.prefix(), action));
        self
    }

    /// Add `service:*`.
    pub fn all_actions(&mut self) -> &mut Self {
        self.to("*")
    }

    /// Add every known action of the service whose name matches `pattern`.
    pub fn all_matching_actions(&mut self, pattern: &str) -> Result<&mut Self, BuilderError> {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                debug!("Invalid action pattern {}: {}", pattern, e);
                return Err(BuilderError::InvalidPattern(pattern.to_string()));
            }
        };

        let service = self.service;
        for action in service.actions().filter(|a| re.is_match(a)) {
            self.to(action);
        }

        Ok(self)
    }

    /// Add every known action of the service at `level`.
    pub fn all_actions_with_access_level(&mut self, level: AccessLevel) -> &mut Self {
        let service = self.service;
        for action in service.access_levels().actions(level) {
            self.to(action);
        }
        self
    }

    pub fn all_list_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::List)
    }

    pub fn all_read_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Read)
    }

    pub fn all_write_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Write)
    }

    pub fn all_permission_management_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::PermissionsManagement)
    }

    pub fn all_tagging_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Tagging)
    }

    /// Emit the accumulated actions as `NotAction` instead of `Action`.
    pub fn not_action(&mut self) -> &mut Self {
        self.not_action = true;
        self
    }

    // Resources

    fn add_resource(&mut self, resource: Resource) {
        trace!("Adding resource {}", resource);
        push_unique(&mut self.resources, resource);
    }

    /// Add a resource ARN (or pattern) verbatim.
    pub fn on(&mut self, arn: &str) -> &mut Self {
        self.add_resource(Resource::from(arn));
        self
    }

    /// Add `*`.
    pub fn on_all_resources(&mut self) -> &mut Self {
        self.add_resource(Resource::Any);
        self
    }

    /// Add the ARN of a `resource_type` defined by the service, using the configured defaults for the partition,
    /// region, and account.
    pub fn on_resource(&mut self, resource_type: &str, ids: &[&str]) -> Result<&mut Self, BuilderError> {
        self.on_resource_with(resource_type, ids, None, None, None)
    }

    /// Add the ARN of a `resource_type`, overriding any of the account, region, or partition defaults.
    pub fn on_resource_with(
        &mut self,
        resource_type: &str,
        ids: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Self, BuilderError> {
        let rt = self.service.resource_type(resource_type)?;
        let arn = match rt.arn_template().resolve(&self.defaults, ids, account, region, partition) {
            Ok(arn) => arn,
            Err(BuilderError::ResourceIdentifierCount {
                expected,
                actual,
                ..
            }) => {
                return Err(BuilderError::ResourceIdentifierCount {
                    resource_type: resource_type.to_string(),
                    expected,
                    actual,
                })
            }
            Err(e) => return Err(e),
        };

        self.add_resource(Resource::from(arn));
        Ok(self)
    }

    /// Emit the accumulated resources as `NotResource` instead of `Resource`.
    pub fn not_resource(&mut self) -> &mut Self {
        self.not_resource = true;
        self
    }

    // Conditions

    /// Add a condition. A `key` without a prefix is taken to belong to this service. The operator defaults to
    /// `StringLike`.
    ///
    /// Adding the same key again with the same operator extends its values; adding it with a different operator fails
    /// and leaves the statement unchanged.
    pub fn add_condition<V: IntoConditionValues>(
        &mut self,
        key: &str,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        let operator = operator.unwrap_or_else(|| condop::StringLike.into());
        let key = if key.contains(':') {
            key.to_string()
        } else {
            format!("{}:{}", self.service.prefix(), key)
        };

        self.conditions.add(key, values.into_condition_values(), operator)?;
        Ok(self)
    }

    /// Add a condition on one of the service's own keys. Without an explicit operator, the operator is chosen from the
    /// key's documented type; unknown keys use `StringLike`.
    pub fn if_key<V: IntoConditionValues>(
        &mut self,
        name: &str,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        let operator = match operator {
            Some(operator) => operator,
            None => match self.service.condition_key(name) {
                Some(ck) => ck.key_type().default_operator().into(),
                None => {
                    debug!("{} has no condition key {}; using StringLike", self.service.prefix(), name);
                    condop::StringLike.into()
                }
            },
        };

        self.add_condition(name, values, Some(operator))
    }

    /// Add a `Bool` condition on one of the service's own keys. `value` defaults to `true`.
    pub fn if_key_bool(&mut self, name: &str, value: Option<bool>) -> Result<&mut Self, BuilderError> {
        self.add_condition(name, value.unwrap_or(true), Some(condop::Bool.into()))
    }

    fn global<V: IntoConditionValues>(
        &mut self,
        key: &str,
        values: V,
        operator: Option<Operator>,
        default: Operator,
    ) -> Result<&mut Self, BuilderError> {
        self.add_condition(key, values, Some(operator.unwrap_or(default)))
    }

    /// `aws:CalledVia`. Default operator: `ForAnyValue:StringEquals`.
    pub fn if_aws_called_via<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:CalledVia", values, operator, Operator::new(condop::StringEquals).for_any_value())
    }

    /// `aws:CalledViaFirst`. Default operator: `StringLike`.
    pub fn if_aws_called_via_first<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:CalledViaFirst", values, operator, condop::StringLike.into())
    }

    /// `aws:CalledViaLast`. Default operator: `StringLike`.
    pub fn if_aws_called_via_last<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:CalledViaLast", values, operator, condop::StringLike.into())
    }

    /// `aws:CurrentTime`. Dates are rendered as ISO 8601 in UTC. Default operator: `DateLessThanEquals`.
    pub fn if_aws_current_time<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:CurrentTime", values, operator, condop::DateLessThanEquals.into())
    }

    /// `aws:EpochTime`. Accepts epoch seconds or dates. Default operator: `DateLessThanEquals`.
    pub fn if_aws_epoch_time<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:EpochTime", values, operator, condop::DateLessThanEquals.into())
    }

    /// `aws:MultiFactorAuthAge`, in seconds. Default operator: `NumericLessThan`.
    pub fn if_aws_multi_factor_auth_age<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:MultiFactorAuthAge", values, operator, condop::NumericLessThan.into())
    }

    /// `aws:MultiFactorAuthPresent`. `value` defaults to `true`.
    pub fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> Result<&mut Self, BuilderError> {
        self.add_condition("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(condop::Bool.into()))
    }

    pub fn if_aws_principal_account<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:PrincipalAccount", values, operator, condop::StringLike.into())
    }

    /// `aws:PrincipalArn`. Default operator: `ArnLike`.
    pub fn if_aws_principal_arn<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:PrincipalArn", values, operator, condop::ArnLike.into())
    }

    pub fn if_aws_principal_org_id<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:PrincipalOrgID", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_principal_org_paths<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:PrincipalOrgPaths", values, operator, condop::StringLike.into())
    }

    /// `aws:PrincipalTag/<tag_key>`.
    pub fn if_aws_principal_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global(&format!("aws:PrincipalTag/{}", tag_key), values, operator, condop::StringLike.into())
    }

    pub fn if_aws_principal_type<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:PrincipalType", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_referer<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:Referer", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_requested_region<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:RequestedRegion", values, operator, condop::StringLike.into())
    }

    /// `aws:RequestTag/<tag_key>`.
    pub fn if_aws_request_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global(&format!("aws:RequestTag/{}", tag_key), values, operator, condop::StringLike.into())
    }

    /// `aws:ResourceTag/<tag_key>`.
    pub fn if_aws_resource_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global(&format!("aws:ResourceTag/{}", tag_key), values, operator, condop::StringLike.into())
    }

    /// `aws:SecureTransport`. `value` defaults to `true`.
    pub fn if_aws_secure_transport(&mut self, value: Option<bool>) -> Result<&mut Self, BuilderError> {
        self.add_condition("aws:SecureTransport", value.unwrap_or(true), Some(condop::Bool.into()))
    }

    pub fn if_aws_source_account<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:SourceAccount", values, operator, condop::StringLike.into())
    }

    /// `aws:SourceArn`. Default operator: `ArnLike`.
    pub fn if_aws_source_arn<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:SourceArn", values, operator, condop::ArnLike.into())
    }

    /// `aws:SourceIp`. Default operator: `IpAddress`.
    pub fn if_aws_source_ip<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:SourceIp", values, operator, condop::IpAddress.into())
    }

    pub fn if_aws_source_vpc<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:SourceVpc", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_source_vpce<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:SourceVpce", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_tag_keys<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:TagKeys", values, operator, condop::StringLike.into())
    }

    /// `aws:TokenIssueTime`. Default operator: `DateGreaterThanEquals`.
    pub fn if_aws_token_issue_time<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:TokenIssueTime", values, operator, condop::DateGreaterThanEquals.into())
    }

    pub fn if_aws_user_agent<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:UserAgent", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_userid<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:userid", values, operator, condop::StringLike.into())
    }

    pub fn if_aws_username<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:username", values, operator, condop::StringLike.into())
    }

    /// `aws:ViaAWSService`. `value` defaults to `true`.
    pub fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> Result<&mut Self, BuilderError> {
        self.add_condition("aws:ViaAWSService", value.unwrap_or(true), Some(condop::Bool.into()))
    }

    /// `aws:VpcSourceIp`. Default operator: `IpAddress`.
    pub fn if_aws_vpc_source_ip<V: IntoConditionValues>(
        &mut self,
        values: V,
        operator: Option<Operator>,
    ) -> Result<&mut Self, BuilderError> {
        self.global("aws:VpcSourceIp", values, operator, condop::IpAddress.into())
    }

    // Principals

    /// Grant to everyone (`"Principal": "*"`).
    pub fn for_public(&mut self) -> &mut Self {
        self.principals.public = true;
        self
    }

    /// Grant to the root principal of `account_id` in the configured partition.
    pub fn for_account(&mut self, account_id: &str) -> &mut Self {
        let principal = AwsPrincipal::account_root(self.defaults.partition(), account_id);
        trace!("Adding principal {}", principal);
        push_unique(&mut self.principals.aws, principal);
        self
    }

    /// Grant to an AWS principal given as an account id or IAM ARN.
    pub fn for_arn(&mut self, arn: &str) -> Result<&mut Self, BuilderError> {
        let principal = AwsPrincipal::from_str(arn)?;
        trace!("Adding principal {}", principal);
        push_unique(&mut self.principals.aws, principal);
        Ok(self)
    }

    pub fn for_user(&mut self, account_id: &str, user: &str) -> &mut Self {
        let principal = AwsPrincipal::iam(self.defaults.partition(), account_id, "user", user);
        push_unique(&mut self.principals.aws, principal);
        self
    }

    pub fn for_role(&mut self, account_id: &str, role: &str) -> &mut Self {
        let principal = AwsPrincipal::iam(self.defaults.partition(), account_id, "role", role);
        push_unique(&mut self.principals.aws, principal);
        self
    }

    /// Grant to an AWS service principal such as `lambda.amazonaws.com`.
    pub fn for_service(&mut self, service: &str) -> &mut Self {
        push_unique(&mut self.principals.services, service.to_string());
        self
    }

    /// Grant to a web identity or SAML provider.
    pub fn for_federated(&mut self, provider: &str) -> &mut Self {
        push_unique(&mut self.principals.federated, provider.to_string());
        self
    }

    pub fn for_canonical_user(&mut self, canonical_user_id: &str) -> &mut Self {
        push_unique(&mut self.principals.canonical_users, canonical_user_id.to_string());
        self
    }

    /// Emit the accumulated principals as `NotPrincipal` instead of `Principal`.
    pub fn not_principal(&mut self) -> &mut Self {
        self.not_principal = true;
        self
    }

    // Queries

    #[inline]
    pub fn service(&self) -> &'static ServiceDescriptor {
        self.service
    }

    #[inline]
    pub fn defaults(&self) -> &ArnDefaults {
        &self.defaults
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    #[inline]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[inline]
    pub fn conditions(&self) -> &Condition {
        &self.conditions
    }

    #[inline]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    #[inline]
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    #[inline]
    pub fn has_principals(&self) -> bool {
        !self.principals.is_empty()
    }

    /// The access level of `action`, with or without the service prefix. `None` if the service does not list it.
    pub fn access_level(&self, action: &str) -> Option<AccessLevel> {
        let action = match action.split_once(':') {
            Some((prefix, rest)) if prefix == self.service.prefix() => rest,
            Some(_) => return None,
            None => action,
        };

        self.service.access_level(action)
    }

    // Output

    /// Produce the serialized statement.
    pub fn to_statement(&self) -> Result<Statement, BuilderError> {
        let mut builder = Statement::builder();
        builder.effect(self.effect);

        if let Some(sid) = &self.sid {
            builder.sid(sid.clone());
        }

        if let Some(principal) = self.principals.to_principal()? {
            if self.not_principal {
                builder.not_principal(principal);
            } else {
                builder.principal(principal);
            }
        }

        if let Some(actions) = one_or_many(&self.actions) {
            if self.not_action {
                builder.not_action(actions);
            } else {
                builder.action(actions);
            }
        }

        if let Some(resources) = one_or_many(&self.resources) {
            if self.not_resource {
                builder.not_resource(resources);
            } else {
                builder.resource(resources);
            }
        }

        if !self.conditions.is_empty() {
            builder.condition(self.conditions.clone());
        }

        builder.build().map_err(|e| {
            debug!("Statement for {} failed to build: {}", self.service.prefix(), e);
            match e {
                StatementBuilderError::ValidationError(msg) => BuilderError::InvalidStatement(msg),
                e => BuilderError::InvalidStatement(e.to_string()),
            }
        })
    }

    /// Produce the statement as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value, BuilderError> {
        let statement = self.to_statement()?;
        serde_json::to_value(&statement).map_err(|e| BuilderError::InvalidStatement(e.to_string()))
    }
}
