use {
    super::{ConditionKey, ConditionKeyType, ResourceType, ServiceDescriptor},
    crate::{AccessLevel, AccessLevelList, ArnTemplate},
};

/// Amazon S3 Express (directory buckets).
pub static S3EXPRESS: ServiceDescriptor = ServiceDescriptor {
    prefix: "s3express",
    name: "Amazon S3 Express",
    access_levels: AccessLevelList::new(&[
        (
            AccessLevel::Write,
            &[
                "CreateAccessPoint",
                "CreateBucket",
                "CreateSession",
                "DeleteAccessPoint",
                "DeleteBucket",
                "PutEncryptionConfiguration",
                "PutLifecycleConfiguration",
            ],
        ),
        (
            AccessLevel::PermissionsManagement,
            &[
                "DeleteAccessPointPolicy",
                "DeleteAccessPointScope",
                "DeleteBucketPolicy",
                "PutAccessPointPolicy",
                "PutAccessPointScope",
                "PutBucketPolicy",
            ],
        ),
        (
            AccessLevel::Read,
            &[
                "GetAccessPoint",
                "GetAccessPointPolicy",
                "GetAccessPointScope",
                "GetBucketPolicy",
                "GetEncryptionConfiguration",
                "GetLifecycleConfiguration",
            ],
        ),
        (
            AccessLevel::List,
            &[
                "ListAccessPointsForDirectoryBuckets",
                "ListAllMyDirectoryBuckets",
                "ListTagsForResource",
            ],
        ),
        (AccessLevel::Tagging, &["TagResource", "UntagResource"]),
    ]),
    resource_types: &[
        ResourceType {
            name: "bucket",
            arn: ArnTemplate::new("arn:${Partition}:s3express:${Region}:${Account}:bucket/${BucketName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}", "s3express:BucketTag/${TagKey}"],
        },
        ResourceType {
            name: "accesspoint",
            arn: ArnTemplate::new("arn:${Partition}:s3express:${Region}:${Account}:accesspoint/${AccessPointName}"),
            condition_keys: &["aws:ResourceTag/${TagKey}", "s3express:AccessPointTag/${TagKey}"],
        },
    ],
    condition_keys: &[
        ConditionKey {
            name: "AccessPointNetworkOrigin",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "AccessPointTag/${TagKey}",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "AllAccessRestrictedToLocalZoneGroup",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "BucketTag/${TagKey}",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "DataAccessPointAccount",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "DataAccessPointArn",
            key_type: ConditionKeyType::Arn,
        },
        ConditionKey {
            name: "LocationName",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "Permissions",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "ResourceAccount",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "SessionMode",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "TlsVersion",
            key_type: ConditionKeyType::Numeric,
        },
        ConditionKey {
            name: "authType",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "signatureAge",
            key_type: ConditionKeyType::Numeric,
        },
        ConditionKey {
            name: "signatureversion",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "x-amz-content-sha256",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "x-amz-server-side-encryption",
            key_type: ConditionKeyType::String,
        },
        ConditionKey {
            name: "x-amz-server-side-encryption-aws-kms-key-id",
            key_type: ConditionKeyType::Arn,
        },
    ],
};
