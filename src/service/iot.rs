use {
    super::{ConditionKey, ConditionKeyType, ResourceType, ServiceDescriptor},
    crate::{AccessLevel, AccessLevelList, ArnTemplate},
};

/// AWS IoT.
pub static IOT: ServiceDescriptor = ServiceDescriptor {
    prefix: "iot",
    name: "AWS IoT",
    access_levels: AccessLevelList::new(&[
        (
            AccessLevel::Write,
            &[
                "AcceptCertificateTransfer",
                "AddThingToBillingGroup",
                "AddThingToThingGroup",
                "AssociateSbomWithPackageVersion",
                "AssociateTargetsWithJob",
                "AttachSecurityProfile",
                "AttachThingPrincipal",
                "CancelAuditMitigationActionsTask",
                "CancelAuditTask",
                "CancelCertificateTransfer",
                "CancelDetectMitigationActionsTask",
                "CancelJob",
                "CancelJobExecution",
                "ClearDefaultAuthorizer",
                "CloseTunnel",
                "ConfirmTopicRuleDestination",
                "Connect",
                "CreateAuditSuppression",
                "CreateAuthorizer",
                "CreateBillingGroup",
                "CreateCertificateFromCsr",
                "CreateCertificateProvider",
                "CreateCommand",
                "CreateCustomMetric",
                "CreateDimension",
                "CreateDomainConfiguration",
                "CreateDynamicThingGroup",
                "CreateFleetMetric",
                "CreateJob",
                "CreateJobTemplate",
                "CreateKeysAndCertificate",
                "CreateMitigationAction",
                "CreateOTAUpdate",
                "CreatePackage",
                "CreatePackageVersion",
                "CreatePolicy",
                "CreatePolicyVersion",
                "CreateProvisioningClaim",
                "CreateProvisioningTemplate",
                "CreateProvisioningTemplateVersion",
                "CreateRoleAlias",
                "CreateScheduledAudit",
                "CreateSecurityProfile",
                "CreateStream",
                "CreateThing",
                "CreateThingGroup",
                "CreateThingType",
                "CreateTopicRule",
                "CreateTopicRuleDestination",
                "DeleteAccountAuditConfiguration",
                "DeleteAuditSuppression",
                "DeleteAuthorizer",
                "DeleteBillingGroup",
                "DeleteCACertificate",
                "DeleteCertificate",
                "DeleteCertificateProvider",
                "DeleteCommand",
                "DeleteCommandExecution",
                "DeleteCustomMetric",
                "DeleteDimension",
                "DeleteDomainConfiguration",
                "DeleteDynamicThingGroup",
                "DeleteFleetMetric",
                "DeleteJob",
                "DeleteJobExecution",
                "DeleteJobTemplate",
                "DeleteMitigationAction",
                "DeleteOTAUpdate",
                "DeletePackage",
                "DeletePackageVersion",
                "DeletePolicy",
                "DeletePolicyVersion",
                "DeleteProvisioningTemplate",
                "DeleteProvisioningTemplateVersion",
                "DeleteRegistrationCode",
                "DeleteRoleAlias",
                "DeleteScheduledAudit",
                "DeleteSecurityProfile",
                "DeleteStream",
                "DeleteThing",
                "DeleteThingGroup",
                "DeleteThingShadow",
                "DeleteThingType",
                "DeleteTopicRule",
                "DeleteTopicRuleDestination",
                "DeleteV2LoggingLevel",
                "DeprecateThingType",
                "DetachSecurityProfile",
                "DetachThingPrincipal",
                "DisableTopicRule",
                "DisassociateSbomFromPackageVersion",
                "EnableTopicRule",
                "OpenTunnel",
                "Publish",
                "PutVerificationStateOnViolation",
                "Receive",
                "RegisterCACertificate",
                "RegisterCertificate",
                "RegisterCertificateWithoutCA",
                "RegisterThing",
                "RejectCertificateTransfer",
                "RemoveThingFromBillingGroup",
                "RemoveThingFromThingGroup",
                "ReplaceTopicRule",
                "RetainPublish",
                "RotateTunnelAccessToken",
                "SetLoggingOptions",
                "SetV2LoggingLevel",
                "SetV2LoggingOptions",
                "StartAuditMitigationActionsTask",
                "StartCommandExecution",
                "StartDetectMitigationActionsTask",
                "StartOnDemandAuditTask",
                "StartThingRegistrationTask",
                "StopThingRegistrationTask",
                "Subscribe",
                "TransferCertificate",
                "UpdateAccountAuditConfiguration",
                "UpdateAuditSuppression",
                "UpdateAuthorizer",
                "UpdateBillingGroup",
                "UpdateCACertificate",
                "UpdateCertificate",
                "UpdateCertificateProvider",
                "UpdateCommand",
                "UpdateCustomMetric",
                "UpdateDimension",
                "UpdateDomainConfiguration",
                "UpdateDynamicThingGroup",
                "UpdateEventConfigurations",
                "UpdateFleetMetric",
                "UpdateIndexingConfiguration",
                "UpdateJob",
                "UpdateMitigationAction",
                "UpdatePackage",
                "UpdatePackageConfiguration",
                "UpdatePackageVersion",
                "UpdateProvisioningTemplate",
                "UpdateRoleAlias",
                "UpdateScheduledAudit",
                "UpdateSecurityProfile",
                "UpdateStream",
                "UpdateThing",
                "UpdateThingGroup",
                "UpdateThingGroupsForThing",
                "UpdateThingShadow",
                "UpdateThingType",
                "UpdateTopicRuleDestination",
            ],
        ),
        (
            AccessLevel::PermissionsManagement,
            &[
                "AttachPolicy",
                "AttachPrincipalPolicy",
                "DetachPolicy",
                "DetachPrincipalPolicy",
                "SetDefaultAuthorizer",
                "SetDefaultPolicyVersion",
            ],
        ),
        (
            AccessLevel::Read,
            &[
                "DescribeAccountAuditConfiguration",
                "DescribeAuditFinding",
                "DescribeAuditMitigationActionsTask",
                "DescribeAuditSuppression",
                "DescribeAuditTask",
                "DescribeAuthorizer",
                "DescribeBillingGroup",
                "DescribeCACertificate",
                "DescribeCertificate",
                "DescribeCertificateProvider",
                "DescribeCustomMetric",
                "DescribeDefaultAuthorizer",
                "DescribeDetectMitigationActionsTask",
                "DescribeDimension",
                "DescribeDomainConfiguration",
                "DescribeEndpoint",
                "DescribeEventConfigurations",
                "DescribeFleetMetric",
                "DescribeIndex",
                "DescribeJob",
                "DescribeJobExecution",
                "DescribeJobTemplate",
                "DescribeManagedJobTemplate",
                "DescribeMitigationAction",
                "DescribeProvisioningTemplate",
                "DescribeProvisioningTemplateVersion",
                "DescribeRoleAlias",
                "DescribeScheduledAudit",
                "DescribeSecurityProfile",
                "DescribeStream",
                "DescribeThing",
                "DescribeThingGroup",
                "DescribeThingRegistrationTask",
                "DescribeThingType",
                "DescribeTunnel",
                "GetBucketsAggregation",
                "GetCardinality",
                "GetCommand",
                "GetCommandExecution",
                "GetEffectivePolicies",
                "GetIndexingConfiguration",
                "GetJobDocument",
                "GetLoggingOptions",
                "GetOTAUpdate",
                "GetPackage",
                "GetPackageConfiguration",
                "GetPackageVersion",
                "GetPercentiles",
                "GetPolicy",
                "GetPolicyVersion",
                "GetRegistrationCode",
                "GetRetainedMessage",
                "GetStatistics",
                "GetThingConnectivityData",
                "GetThingShadow",
                "GetTopicRule",
                "GetTopicRuleDestination",
                "GetV2LoggingOptions",
                "ListTagsForResource",
                "SearchIndex",
                "TestAuthorization",
                "TestInvokeAuthorizer",
                "ValidateSecurityProfileBehaviors",
            ],
        ),
        (
            AccessLevel::List,
            &[
                "GetBehaviorModelTrainingSummaries",
                "ListActiveViolations",
                "ListAttachedPolicies",
                "ListAuditFindings",
                "ListAuditMitigationActionsExecutions",
                "ListAuditMitigationActionsTasks",
                "ListAuditSuppressions",
                "ListAuditTasks",
                "ListAuthorizers",
                "ListBillingGroups",
                "ListCACertificates",
                "ListCertificateProviders",
                "ListCertificates",
                "ListCertificatesByCA",
                "ListCommandExecutions",
                "ListCommands",
                "ListCustomMetrics",
                "ListDetectMitigationActionsExecutions",
                "ListDetectMitigationActionsTasks",
                "ListDimensions",
                "ListDomainConfigurations",
                "ListFleetMetrics",
                "ListIndices",
                "ListJobExecutionsForJob",
                "ListJobExecutionsForThing",
                "ListJobTemplates",
                "ListJobs",
                "ListManagedJobTemplates",
                "ListMetricValues",
                "ListMitigationActions",
                "ListNamedShadowsForThing",
                "ListOTAUpdates",
                "ListOutgoingCertificates",
                "ListPackageVersions",
                "ListPackages",
                "ListPolicies",
                "ListPolicyPrincipals",
                "ListPolicyVersions",
                "ListPrincipalPolicies",
                "ListPrincipalThings",
                "ListProvisioningTemplateVersions",
                "ListProvisioningTemplates",
                "ListRelatedResourcesForAuditFinding",
                "ListRetainedMessages",
                "ListRoleAliases",
                "ListSbomValidationResults",
                "ListScheduledAudits",
                "ListSecurityProfiles",
                "ListSecurityProfilesForTarget",
                "ListStreams",
                "ListTargetsForPolicy",
                "ListTargetsForSecurityProfile",
                "ListThingGroups",
                "ListThingGroupsForThing",
                "ListThingPrincipals",
                "ListThingRegistrationTaskReports",
                "ListThingRegistrationTasks",
                "ListThingTypes",
                "ListThings",
                "ListThingsInBillingGroup",
                "ListThingsInThingGroup",
                "ListTopicRuleDestinations",
                "ListTopicRules",
                "ListTunnels",
                "ListV2LoggingLevels",
                "ListViolationEvents",
            ],
        ),
        (AccessLevel::Tagging, &["TagResource", "UntagResource"]),
    ]),
    resource_types: &[
        ResourceType {
            name: "client",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:client/${ClientId}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "index",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:index/${IndexName}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "fleetmetric",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:fleetmetric/${FleetMetricName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "job",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:job/${JobId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "jobtemplate",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:jobtemplate/${JobTemplateId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "tunnel",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:tunnel/${TunnelId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "thing",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:thing/${ThingName}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "thinggroup",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:thinggroup/${ThingGroupName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "billinggroup",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:billinggroup/${BillingGroupName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "dynamicthinggroup",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:thinggroup/${ThingGroupName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "thingtype",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:thingtype/${ThingTypeName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "topic",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:topic/${TopicName}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "topicfilter",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:topicfilter/${TopicFilter}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "rolealias",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:rolealias/${RoleAlias}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "authorizer",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:authorizer/${AuthorizerName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "policy",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:policy/${PolicyName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "cert",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:cert/${Certificate}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "cacert",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:cacert/${CACertificate}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "stream",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:stream/${StreamId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "otaupdate",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:otaupdate/${OtaUpdateId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "scheduledaudit",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:scheduledaudit/${ScheduleName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "mitigationaction",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:mitigationaction/${MitigationActionName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "securityprofile",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:securityprofile/${SecurityProfileName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "custommetric",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:custommetric/${MetricName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "dimension",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:dimension/${DimensionName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "rule",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:rule/${RuleName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "destination",
            arn: ArnTemplate::new(
                "arn:${Partition}:iot:${Region}:${Account}:ruledestination/${DestinationType}/${Uuid}",
            ),
            condition_keys: &[],
        },
        ResourceType {
            name: "provisioningtemplate",
            arn: ArnTemplate::new(
                "arn:${Partition}:iot:${Region}:${Account}:provisioningtemplate/${ProvisioningTemplate}",
            ),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "domainconfiguration",
            arn: ArnTemplate::new(
                "arn:${Partition}:iot:${Region}:${Account}:domainconfiguration/${DomainConfigurationName}/${Id}",
            ),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "package",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:package/${PackageName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "packageversion",
            arn: ArnTemplate::new(
                "arn:${Partition}:iot:${Region}:${Account}:package/${PackageName}/version/${VersionName}",
            ),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "certificateprovider",
            arn: ArnTemplate::new(
                "arn:${Partition}:iot:${Region}:${Account}:certificateprovider/${CertificateProviderName}",
            ),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "command",
            arn: ArnTemplate::new("arn:${Partition}:iot:${Region}:${Account}:command/${CommandId}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
    ],
    condition_keys: &[
        ConditionKey {
            name: "ClientMode",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "CommandExecutionParameterBoolean/${CommandParameterName}",
            key_type: ConditionKeyType::Bool,
        },
        ConditionKey {
            name: "CommandExecutionParameterNumber/${CommandParameterName}",
            key_type: ConditionKeyType::Numeric,
        },
        ConditionKey {
            name: "CommandExecutionParameterString/${CommandParameterName}",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "Delete",
            key_type: ConditionKeyType::Bool,
        },
        ConditionKey {
            name: "DomainName",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "ThingGroupArn",
            key_type: ConditionKeyType::Arn,
        },
        ConditionKey {
            name: "TunnelDestinationService",
            key_type: ConditionKeyType::String,
        },
    ],
};
