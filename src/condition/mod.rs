pub mod op;
mod value;

pub use {
    op::{ConditionOp, Operator, SetQualifier},
    value::{binary_value, ConditionValue, IntoConditionValues},
};
use {
    crate::{display_json, from_str_json, serutil::StringLikeList, BuilderError},
    log::{debug, trace},
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        collections::{
            btree_map::{Iter, Keys, Values},
            BTreeMap,
        },
        iter::IntoIterator,
        ops::Index,
    },
};

pub type ConditionMap = BTreeMap<String, StringLikeList<String>>;

/// The `Condition` block of a statement: operator to condition key to values.
///
/// Keys under one operator are ANDed together; values for a single key are ORed. When built through [Condition::add],
/// each key is governed by exactly one operator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<Operator, ConditionMap>,
}

display_json!(Condition);
from_str_json!(Condition);

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::deserialize(deserializer)?;

        Ok(Self {
            map,
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Add `values` for `key` under `operator`.
    ///
    /// A new key is inserted. A key already present under the same operator has `values` unioned into its existing
    /// values, keeping first-insertion order. A key already present under a different operator is rejected and the
    /// condition is left untouched, as it is when `values` is empty.
    pub fn add<K, V>(&mut self, key: K, values: V, operator: Operator) -> Result<(), BuilderError>
    where
        K: Into<String>,
        V: IntoIterator<Item = String>,
    {
        let key = key.into();
        let values: Vec<String> = values.into_iter().collect();

        if values.is_empty() {
            debug!("Condition key {} given no values", key);
            return Err(BuilderError::EmptyConditionValues(key));
        }

        if let Some(existing) = self.operator_for(&key) {
            if existing != operator {
                debug!("Condition key {} already uses {}; rejecting {}", key, existing, operator);
                return Err(BuilderError::ConflictingConditionOperator {
                    key,
                    existing,
                    requested: operator,
                });
            }
        }

        let cmap = self.map.entry(operator).or_default();
        let mut merged = match cmap.remove(&key) {
            Some(existing) => existing.into_vec(),
            None => Vec::new(),
        };

        for value in values {
            if !merged.contains(&value) {
                merged.push(value);
            }
        }

        trace!("Condition {} {} now has {} value(s)", operator, key, merged.len());
        cmap.insert(key, StringLikeList::one_or_many(merged));
        Ok(())
    }

    /// The operator governing `key`, if the key is present.
    pub fn operator_for(&self, key: &str) -> Option<Operator> {
        self.map.iter().find(|(_, cmap)| cmap.contains_key(key)).map(|(op, _)| *op)
    }

    /// The values accumulated for `key`, if the key is present.
    pub fn values_for(&self, key: &str) -> Option<&StringLikeList<String>> {
        self.map.values().find_map(|cmap| cmap.get(key))
    }

    #[inline]
    pub fn contains_operator(&self, operator: &Operator) -> bool {
        self.map.contains_key(operator)
    }

    #[inline]
    pub fn get(&self, operator: &Operator) -> Option<&ConditionMap> {
        self.map.get(operator)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.values().all(|cmap| cmap.is_empty())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Operator, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn operators(&self) -> Keys<'_, Operator, ConditionMap> {
        self.map.keys()
    }

    /// The number of distinct condition keys across all operators.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.values().map(|cmap| cmap.len()).sum()
    }

    #[inline]
    pub fn values(&self) -> Values<'_, Operator, ConditionMap> {
        self.map.values()
    }
}

impl Default for Condition {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<&Operator> for Condition {
    type Output = ConditionMap;

    fn index(&self, operator: &Operator) -> &ConditionMap {
        self.map.index(operator)
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a Operator, &'a ConditionMap);
    type IntoIter = Iter<'a, Operator, ConditionMap>;
    fn into_iter(self) -> Iter<'a, Operator, ConditionMap> {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, serutil::StringLikeList, BuilderError, Condition, ConditionMap, Operator},
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test_log::test]
    fn test_or_merge() {
        let mut c = Condition::new();
        assert!(c.is_empty());

        c.add("aws:RequestedRegion", strings(&["us-east-1"]), condop::StringEquals.into()).unwrap();
        c.add("aws:RequestedRegion", strings(&["us-west-2", "us-east-1"]), condop::StringEquals.into()).unwrap();

        assert_eq!(c.len(), 1);
        assert_eq!(c.operator_for("aws:RequestedRegion"), Some(condop::StringEquals.into()));
        assert_eq!(
            c.values_for("aws:RequestedRegion").unwrap(),
            &StringLikeList::List(strings(&["us-east-1", "us-west-2"]))
        );
    }

    #[test_log::test]
    fn test_single_value_is_scalar() {
        let mut c = Condition::new();
        c.add("aws:ResourceTag/env", strings(&["prod", "prod"]), condop::StringLike.into()).unwrap();
        assert_eq!(c.values_for("aws:ResourceTag/env"), Some(&StringLikeList::Single("prod".to_string())));
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"StringLike":{"aws:ResourceTag/env":"prod"}}"#);
    }

    #[test_log::test]
    fn test_and_across_keys() {
        let mut c = Condition::default();
        c.add("iot:Delete", strings(&["true"]), condop::Bool.into()).unwrap();
        c.add("aws:SourceIp", strings(&["192.0.2.0/24"]), condop::IpAddress.into()).unwrap();
        c.add("aws:TagKeys", strings(&["a", "b"]), Operator::new(condop::StringEquals).for_any_value()).unwrap();
        c.add("aws:CalledVia", strings(&["x"]), condop::StringLike.into()).unwrap();

        assert_eq!(c.len(), 4);
        assert_eq!(c.operators().count(), 4);
        assert!(c.contains_operator(&Operator::new(condop::Bool)));
        assert_eq!(c[&Operator::new(condop::IpAddress)].len(), 1);
        assert!(c.get(&Operator::new(condop::Null)).is_none());
        assert_eq!(c.values().map(|cmap| cmap.len()).sum::<usize>(), 4);

        assert_eq!(
            c.to_string(),
            indoc! { r#"
            {
                "Bool": {
                    "iot:Delete": "true"
                },
                "IpAddress": {
                    "aws:SourceIp": "192.0.2.0/24"
                },
                "ForAnyValue:StringEquals": {
                    "aws:TagKeys": [
                        "a",
                        "b"
                    ]
                },
                "StringLike": {
                    "aws:CalledVia": "x"
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_conflicting_operator() {
        let mut c = Condition::new();
        c.add("aws:TagKeys", strings(&["a"]), condop::StringLike.into()).unwrap();
        let before = c.clone();

        let e = c.add("aws:TagKeys", strings(&["b"]), condop::StringEquals.into()).unwrap_err();
        assert_eq!(
            e,
            BuilderError::ConflictingConditionOperator {
                key: "aws:TagKeys".to_string(),
                existing: condop::StringLike.into(),
                requested: condop::StringEquals.into(),
            }
        );
        assert_eq!(c, before);

        let e = c.add("aws:TagKeys", strings(&["b"]), Operator::new(condop::StringLike).for_all_values()).unwrap_err();
        assert_ne!(e, BuilderError::InvalidConditionOperator("StringLike".to_string()));
        assert_eq!(c, before);
    }

    #[test_log::test]
    fn test_empty_values() {
        let mut c = Condition::new();
        let e = c.add("aws:SourceIp", Vec::new(), condop::IpAddress.into()).unwrap_err();
        assert_eq!(e, BuilderError::EmptyConditionValues("aws:SourceIp".to_string()));
        assert!(c.is_empty());
        assert_eq!(c.operator_for("aws:SourceIp"), None);

        // A rejected empty add does not claim the key for its operator.
        c.add("aws:SourceIp", strings(&["10.0.0.0/8"]), condop::NotIpAddress.into()).unwrap();
        let before = c.clone();
        let e = c.add("aws:SourceIp", Vec::new(), condop::NotIpAddress.into()).unwrap_err();
        assert_eq!(e, BuilderError::EmptyConditionValues("aws:SourceIp".to_string()));
        assert_eq!(c, before);
        assert_eq!(c.to_string(), indoc! { r#"
            {
                "NotIpAddress": {
                    "aws:SourceIp": "10.0.0.0/8"
                }
            }"# });
    }

    #[test_log::test]
    fn test_round_trip() {
        let c = Condition::from_str(indoc! { r#"
            {
                "ForAllValues:StringLike": {"aws:TagKeys": ["env", "team"]},
                "NumericLessThan": {"aws:MultiFactorAuthAge": 3600},
                "Bool": {"aws:SecureTransport": true}
            }"# })
        .unwrap();

        assert_eq!(c.len(), 3);
        assert_eq!(c.operator_for("aws:MultiFactorAuthAge"), Some(condop::NumericLessThan.into()));
        assert_eq!(c.values_for("aws:SecureTransport"), Some(&StringLikeList::Single("true".to_string())));

        let mut cmap = ConditionMap::new();
        cmap.insert("aws:TagKeys".to_string(), StringLikeList::List(strings(&["env", "team"])));
        assert_eq!(c.get(&Operator::from_str("ForAllValues:StringLike").unwrap()), Some(&cmap));

        let c2 = Condition::from_str(&c.to_string()).unwrap();
        assert_eq!(c, c2);
        assert_eq!((&c2).into_iter().count(), 3);

        assert!(Condition::from_str(r#"{"StringSorta": {"a": "b"}}"#).is_err());
    }
}
