use {
    crate::Operator,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

#[derive(Debug, Eq, PartialEq)]
pub enum BuilderError {
    ConflictingConditionOperator {
        key: String,
        existing: Operator,
        requested: Operator,
    },
    DuplicateAccessLevel {
        service: String,
        action: String,
    },
    EmptyConditionValues(String),
    InvalidAccessLevel(String),
    InvalidAction(String),
    InvalidArnTemplate(String),
    InvalidConditionOperator(String),
    InvalidPattern(String),
    InvalidPrincipal(String),
    InvalidResource(String),
    InvalidStatement(String),
    ResourceIdentifierCount {
        resource_type: String,
        expected: usize,
        actual: usize,
    },
    UnknownResourceType {
        service: String,
        resource_type: String,
    },
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::ConflictingConditionOperator {
                key,
                existing,
                requested,
            } => {
                write!(f, "Condition key {} already uses operator {}; cannot add it with {}", key, existing, requested)
            }
            Self::DuplicateAccessLevel {
                service,
                action,
            } => write!(f, "Action {}:{} is listed under more than one access level", service, action),
            Self::EmptyConditionValues(key) => write!(f, "Condition key {} must have at least one value", key),
            Self::InvalidAccessLevel(level) => write!(f, "Invalid access level: {}", level),
            Self::InvalidAction(action) => write!(f, "Invalid action: {}", action),
            Self::InvalidArnTemplate(template) => write!(f, "Invalid ARN template: {}", template),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPattern(pattern) => write!(f, "Invalid action pattern: {}", pattern),
            Self::InvalidPrincipal(principal) => write!(f, "Invalid principal: {}", principal),
            Self::InvalidResource(resource) => write!(f, "Invalid resource: {}", resource),
            Self::InvalidStatement(msg) => write!(f, "Invalid statement: {}", msg),
            Self::ResourceIdentifierCount {
                resource_type,
                expected,
                actual,
            } => write!(f, "Resource type {} takes {} identifier(s); {} given", resource_type, expected, actual),
            Self::UnknownResourceType {
                service,
                resource_type,
            } => write!(f, "Unknown resource type for {}: {}", service, resource_type),
        }
    }
}

impl Error for BuilderError {}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, BuilderError},
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", BuilderError::InvalidAction("foo".to_string()));
        assert_eq!(BuilderError::InvalidAction("foo".to_string()).to_string(), "Invalid action: foo");
        assert_eq!(BuilderError::InvalidPrincipal("foo".to_string()).to_string(), "Invalid principal: foo");
        assert_eq!(
            BuilderError::EmptyConditionValues("aws:SourceIp".to_string()).to_string(),
            "Condition key aws:SourceIp must have at least one value"
        );
        assert_eq!(
            BuilderError::InvalidConditionOperator("StringSorta".to_string()).to_string(),
            "Invalid condition operator: StringSorta"
        );
        assert_eq!(
            BuilderError::ConflictingConditionOperator {
                key: "aws:TagKeys".to_string(),
                existing: condop::StringLike.into(),
                requested: condop::StringEquals.into(),
            }
            .to_string(),
            "Condition key aws:TagKeys already uses operator StringLike; cannot add it with StringEquals"
        );
        assert_eq!(
            BuilderError::ResourceIdentifierCount {
                resource_type: "thing".to_string(),
                expected: 1,
                actual: 2,
            }
            .to_string(),
            "Resource type thing takes 1 identifier(s); 2 given"
        );
        assert_eq!(
            BuilderError::UnknownResourceType {
                service: "iot".to_string(),
                resource_type: "gizmo".to_string(),
            }
            .to_string(),
            "Unknown resource type for iot: gizmo"
        );
        assert_eq!(
            BuilderError::DuplicateAccessLevel {
                service: "iot".to_string(),
                action: "CreateThing".to_string(),
            }
            .to_string(),
            "Action iot:CreateThing is listed under more than one access level"
        );
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = BuilderError::InvalidAction("foo".to_string());
        let e1b = BuilderError::InvalidAction("foo".to_string());
        let e2 = BuilderError::InvalidArnTemplate("foo".to_string());
        let e3 = BuilderError::InvalidAction("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e2, e3);
    }
}
