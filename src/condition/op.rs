use {
    crate::BuilderError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        cmp::Ordering,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub use ConditionOp::*;

/// A base operator for a condition clause.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionOp {
    ArnEquals,
    ArnEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    DateGreaterThanIfExists,
    DateLessThan,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateLessThanIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    NumericGreaterThanIfExists,
    NumericLessThan,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericLessThanIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringNotLike,
    StringNotLikeIfExists,
}

const ALL_OPS: [ConditionOp; 53] = [
    ArnEquals,
    ArnEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    DateGreaterThanIfExists,
    DateLessThan,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateLessThanIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    NumericGreaterThanIfExists,
    NumericLessThan,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericLessThanIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringNotLike,
    StringNotLikeIfExists,
];

impl ConditionOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArnEquals => "ArnEquals",
            ArnEqualsIfExists => "ArnEqualsIfExists",
            ArnLike => "ArnLike",
            ArnLikeIfExists => "ArnLikeIfExists",
            ArnNotEquals => "ArnNotEquals",
            ArnNotEqualsIfExists => "ArnNotEqualsIfExists",
            ArnNotLike => "ArnNotLike",
            ArnNotLikeIfExists => "ArnNotLikeIfExists",
            BinaryEquals => "BinaryEquals",
            BinaryEqualsIfExists => "BinaryEqualsIfExists",
            Bool => "Bool",
            BoolIfExists => "BoolIfExists",
            DateEquals => "DateEquals",
            DateEqualsIfExists => "DateEqualsIfExists",
            DateGreaterThan => "DateGreaterThan",
            DateGreaterThanEquals => "DateGreaterThanEquals",
            DateGreaterThanEqualsIfExists => "DateGreaterThanEqualsIfExists",
            DateGreaterThanIfExists => "DateGreaterThanIfExists",
            DateLessThan => "DateLessThan",
            DateLessThanEquals => "DateLessThanEquals",
            DateLessThanEqualsIfExists => "DateLessThanEqualsIfExists",
            DateLessThanIfExists => "DateLessThanIfExists",
            DateNotEquals => "DateNotEquals",
            DateNotEqualsIfExists => "DateNotEqualsIfExists",
            IpAddress => "IpAddress",
            IpAddressIfExists => "IpAddressIfExists",
            NotIpAddress => "NotIpAddress",
            NotIpAddressIfExists => "NotIpAddressIfExists",
            Null => "Null",
            NumericEquals => "NumericEquals",
            NumericEqualsIfExists => "NumericEqualsIfExists",
            NumericGreaterThan => "NumericGreaterThan",
            NumericGreaterThanEquals => "NumericGreaterThanEquals",
            NumericGreaterThanEqualsIfExists => "NumericGreaterThanEqualsIfExists",
            NumericGreaterThanIfExists => "NumericGreaterThanIfExists",
            NumericLessThan => "NumericLessThan",
            NumericLessThanEquals => "NumericLessThanEquals",
            NumericLessThanEqualsIfExists => "NumericLessThanEqualsIfExists",
            NumericLessThanIfExists => "NumericLessThanIfExists",
            NumericNotEquals => "NumericNotEquals",
            NumericNotEqualsIfExists => "NumericNotEqualsIfExists",
            StringEquals => "StringEquals",
            StringEqualsIfExists => "StringEqualsIfExists",
            StringEqualsIgnoreCase => "StringEqualsIgnoreCase",
            StringEqualsIgnoreCaseIfExists => "StringEqualsIgnoreCaseIfExists",
            StringLike => "StringLike",
            StringLikeIfExists => "StringLikeIfExists",
            StringNotEquals => "StringNotEquals",
            StringNotEqualsIfExists => "StringNotEqualsIfExists",
            StringNotEqualsIgnoreCase => "StringNotEqualsIgnoreCase",
            StringNotEqualsIgnoreCaseIfExists => "StringNotEqualsIgnoreCaseIfExists",
            StringNotLike => "StringNotLike",
            StringNotLikeIfExists => "StringNotLikeIfExists",
        }
    }

    /// Whether this operator tolerates a missing key.
    #[inline]
    pub fn is_if_exists(&self) -> bool {
        self.as_str().ends_with("IfExists")
    }

    /// The `...IfExists` form of this operator. `Null` and operators that are already `...IfExists` are returned
    /// unchanged.
    pub fn if_exists(self) -> Self {
        match self {
            ArnEquals => ArnEqualsIfExists,
            ArnLike => ArnLikeIfExists,
            ArnNotEquals => ArnNotEqualsIfExists,
            ArnNotLike => ArnNotLikeIfExists,
            BinaryEquals => BinaryEqualsIfExists,
            Bool => BoolIfExists,
            DateEquals => DateEqualsIfExists,
            DateGreaterThan => DateGreaterThanIfExists,
            DateGreaterThanEquals => DateGreaterThanEqualsIfExists,
            DateLessThan => DateLessThanIfExists,
            DateLessThanEquals => DateLessThanEqualsIfExists,
            DateNotEquals => DateNotEqualsIfExists,
            IpAddress => IpAddressIfExists,
            NotIpAddress => NotIpAddressIfExists,
            NumericEquals => NumericEqualsIfExists,
            NumericGreaterThan => NumericGreaterThanIfExists,
            NumericGreaterThanEquals => NumericGreaterThanEqualsIfExists,
            NumericLessThan => NumericLessThanIfExists,
            NumericLessThanEquals => NumericLessThanEqualsIfExists,
            NumericNotEquals => NumericNotEqualsIfExists,
            StringEquals => StringEqualsIfExists,
            StringEqualsIgnoreCase => StringEqualsIgnoreCaseIfExists,
            StringLike => StringLikeIfExists,
            StringNotEquals => StringNotEqualsIfExists,
            StringNotEqualsIgnoreCase => StringNotEqualsIgnoreCaseIfExists,
            StringNotLike => StringNotLikeIfExists,
            other => other,
        }
    }
}

// Operators sort by name so condition blocks serialize in a stable, readable order.
impl Ord for ConditionOp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for ConditionOp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionOp {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ALL_OPS.iter().find(|op| op.as_str() == s) {
            Some(op) => Ok(*op),
            None => {
                log::debug!("Unknown condition operator: {}", s);
                Err(BuilderError::InvalidConditionOperator(s.to_string()))
            }
        }
    }
}

/// A multi-valued key modifier: `ForAnyValue:` or `ForAllValues:`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    ForAllValues,
    ForAnyValue,
}

impl SetQualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForAllValues => "ForAllValues",
            Self::ForAnyValue => "ForAnyValue",
        }
    }
}

impl Display for SetQualifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A complete condition operator as it appears as a key in a `Condition` block, e.g. `StringLike` or
/// `ForAnyValue:StringEquals`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Operator {
    op: ConditionOp,
    qualifier: Option<SetQualifier>,
}

impl Operator {
    #[inline]
    pub fn new(op: ConditionOp) -> Self {
        Self {
            op,
            qualifier: None,
        }
    }

    #[inline]
    pub fn op(&self) -> ConditionOp {
        self.op
    }

    #[inline]
    pub fn qualifier(&self) -> Option<SetQualifier> {
        self.qualifier
    }

    /// Apply the `ForAnyValue:` modifier.
    #[inline]
    pub fn for_any_value(self) -> Self {
        Self {
            qualifier: Some(SetQualifier::ForAnyValue),
            ..self
        }
    }

    /// Apply the `ForAllValues:` modifier.
    #[inline]
    pub fn for_all_values(self) -> Self {
        Self {
            qualifier: Some(SetQualifier::ForAllValues),
            ..self
        }
    }

    /// Switch the base operator to its `...IfExists` form.
    #[inline]
    pub fn if_exists(self) -> Self {
        Self {
            op: self.op.if_exists(),
            ..self
        }
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self::new(op)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.qualifier {
            None => f.write_str(self.op.as_str()),
            Some(qualifier) => write!(f, "{}:{}", qualifier, self.op),
        }
    }
}

impl FromStr for Operator {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (qualifier, op) = match s.split_once(':') {
            None => (None, s),
            Some(("ForAnyValue", op)) => (Some(SetQualifier::ForAnyValue), op),
            Some(("ForAllValues", op)) => (Some(SetQualifier::ForAllValues), op),
            Some(_) => {
                log::debug!("Unknown condition operator qualifier: {}", s);
                return Err(BuilderError::InvalidConditionOperator(s.to_string()));
            }
        };

        match ConditionOp::from_str(op) {
            Ok(op) => Ok(Self {
                op,
                qualifier,
            }),
            Err(_) => Err(BuilderError::InvalidConditionOperator(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Operator::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ALL_OPS,
        crate::{condop, BuilderError, ConditionOp, Operator, SetQualifier},
        pretty_assertions::{assert_eq, assert_ne},
        std::{cmp::Ordering, collections::HashSet, str::FromStr},
    };

    #[test_log::test]
    fn test_names_round_trip() {
        let mut seen = HashSet::new();
        for op in ALL_OPS.iter() {
            assert!(seen.insert(op.as_str()));
            assert_eq!(ConditionOp::from_str(op.as_str()).unwrap(), *op);
            assert_eq!(op.to_string(), op.as_str());
        }

        assert_eq!(
            ConditionOp::from_str("StringSorta").unwrap_err(),
            BuilderError::InvalidConditionOperator("StringSorta".to_string())
        );
    }

    #[test_log::test]
    fn test_sorted() {
        for pair in ALL_OPS.windows(2) {
            assert_eq!(pair[0].cmp(&pair[1]), Ordering::Less);
        }
        assert_eq!(condop::Null.partial_cmp(&condop::Null), Some(Ordering::Equal));
    }

    #[test_log::test]
    fn test_if_exists() {
        for op in ALL_OPS.iter() {
            let ife = op.if_exists();
            assert_eq!(ife.if_exists(), ife);
            if *op == condop::Null {
                assert_eq!(ife, condop::Null);
                assert!(!ife.is_if_exists());
            } else {
                assert!(ife.is_if_exists());
                assert!(ife.as_str().starts_with(op.as_str()) || ife == *op);
            }
        }

        assert_eq!(condop::StringLike.if_exists(), condop::StringLikeIfExists);
        assert_eq!(condop::DateGreaterThanEquals.if_exists(), condop::DateGreaterThanEqualsIfExists);
    }

    #[test_log::test]
    fn test_operator_display() {
        let op: Operator = condop::StringEquals.into();
        assert_eq!(op.to_string(), "StringEquals");
        assert_eq!(op.qualifier(), None);

        let op = op.for_any_value();
        assert_eq!(op.to_string(), "ForAnyValue:StringEquals");
        assert_eq!(op.qualifier(), Some(SetQualifier::ForAnyValue));
        assert_eq!(op.op(), condop::StringEquals);

        let op = Operator::new(condop::StringLike).for_all_values().if_exists();
        assert_eq!(op.to_string(), "ForAllValues:StringLikeIfExists");
        assert_eq!(SetQualifier::ForAllValues.to_string(), "ForAllValues");
    }

    #[test_log::test]
    fn test_operator_parse() {
        assert_eq!(Operator::from_str("ArnLike").unwrap(), Operator::new(condop::ArnLike));
        assert_eq!(
            Operator::from_str("ForAnyValue:StringEquals").unwrap(),
            Operator::new(condop::StringEquals).for_any_value()
        );
        assert_ne!(
            Operator::from_str("ForAllValues:StringEquals").unwrap(),
            Operator::from_str("ForAnyValue:StringEquals").unwrap()
        );

        for bad in ["ForSomeValues:StringEquals", "ForAnyValue:StringSorta", "", "ForAnyValue:"] {
            assert_eq!(Operator::from_str(bad).unwrap_err(), BuilderError::InvalidConditionOperator(bad.to_string()));
        }
    }

    #[test_log::test]
    fn test_operator_serde() {
        let op = Operator::new(condop::IpAddress).for_any_value();
        assert_eq!(serde_json::to_string(&op).unwrap(), r#""ForAnyValue:IpAddress""#);
        assert_eq!(serde_json::from_str::<Operator>(r#""ForAnyValue:IpAddress""#).unwrap(), op);

        let e = serde_json::from_str::<Operator>(r#""Fuzzy""#).unwrap_err();
        assert!(e.to_string().starts_with("Invalid condition operator: Fuzzy"));
        let e = serde_json::from_str::<Operator>("3").unwrap_err();
        assert!(e.to_string().starts_with("invalid type: integer `3`, expected a string"));
    }
}
