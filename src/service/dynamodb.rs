use {
    super::{ConditionKey, ConditionKeyType, ResourceType, ServiceDescriptor},
    crate::{AccessLevel, AccessLevelList, ArnTemplate},
};

/// Amazon DynamoDB.
pub static DYNAMODB: ServiceDescriptor = ServiceDescriptor {
    prefix: "dynamodb",
    name: "Amazon DynamoDB",
    access_levels: AccessLevelList::new(&[
        (
            AccessLevel::Read,
            &[
                "BatchGetItem",
                "ConditionCheckItem",
                "DescribeBackup",
                "DescribeContinuousBackups",
                "DescribeContributorInsights",
                "DescribeEndpoints",
                "DescribeExport",
                "DescribeGlobalTable",
                "DescribeGlobalTableSettings",
                "DescribeImport",
                "DescribeKinesisStreamingDestination",
                "DescribeLimits",
                "DescribeReservedCapacity",
                "DescribeReservedCapacityOfferings",
                "DescribeStream",
                "DescribeTable",
                "DescribeTableReplicaAutoScaling",
                "DescribeTimeToLive",
                "GetAbacStatus",
                "GetItem",
                "GetRecords",
                "GetResourcePolicy",
                "GetShardIterator",
                "ListStreams",
                "ListTagsOfResource",
                "PartiQLSelect",
                "Query",
                "Scan",
            ],
        ),
        (
            AccessLevel::Write,
            &[
                "BatchWriteItem",
                "CreateBackup",
                "CreateGlobalTable",
                "CreateTable",
                "CreateTableReplica",
                "DeleteBackup",
                "DeleteItem",
                "DeleteTable",
                "DeleteTableReplica",
                "DisableKinesisStreamingDestination",
                "EnableKinesisStreamingDestination",
                "ExportTableToPointInTime",
                "ImportTable",
                "PartiQLDelete",
                "PartiQLInsert",
                "PartiQLUpdate",
                "PurchaseReservedCapacityOfferings",
                "PutItem",
                "RestoreTableFromAwsBackup",
                "RestoreTableFromBackup",
                "RestoreTableToPointInTime",
                "StartAwsBackupJob",
                "UpdateContinuousBackups",
                "UpdateContributorInsights",
                "UpdateGlobalTable",
                "UpdateGlobalTableSettings",
                "UpdateGlobalTableVersion",
                "UpdateItem",
                "UpdateKinesisStreamingDestination",
                "UpdateTable",
                "UpdateTableReplicaAutoScaling",
                "UpdateTimeToLive",
            ],
        ),
        (AccessLevel::PermissionsManagement, &["DeleteResourcePolicy", "PutResourcePolicy", "UpdateAbacStatus"]),
        (
            AccessLevel::List,
            &[
                "ListBackups",
                "ListContributorInsights",
                "ListExports",
                "ListGlobalTables",
                "ListImports",
                "ListTables",
            ],
        ),
        (AccessLevel::Tagging, &["TagResource", "UntagResource"]),
    ]),
    resource_types: &[
        ResourceType {
            name: "index",
            arn: ArnTemplate::new(
                "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}",
            ),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "stream",
            arn: ArnTemplate::new(
                "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/stream/${StreamLabel}",
            ),
            condition_keys: &[],
        },
        ResourceType {
            name: "table",
            arn: ArnTemplate::new("arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}"],
        },
        ResourceType {
            name: "backup",
            arn: ArnTemplate::new(
                "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/backup/${BackupName}",
            ),
            condition_keys: &[],
        },
        ResourceType {
            name: "export",
            arn: ArnTemplate::new(
                "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/export/${ExportName}",
            ),
            condition_keys: &[],
        },
        ResourceType {
            name: "global-table",
            arn: ArnTemplate::new("arn:${Partition}:dynamodb::${Account}:global-table/${GlobalTableName}"),
            condition_keys: &[],
        },
        ResourceType {
            name: "import",
            arn: ArnTemplate::new(
                "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/import/${ImportName}",
            ),
            condition_keys: &[],
        },
    ],
    condition_keys: &[
        ConditionKey {
            name: "Attributes",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "EnclosingOperation",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "FullTableScan",
            key_type: ConditionKeyType::Bool,
        },
        ConditionKey {
            name: "LeadingKeys",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "ReturnConsumedCapacity",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "ReturnValues",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "Select",
            key_type: ConditionKeyType::String,
        },
    ],
};
