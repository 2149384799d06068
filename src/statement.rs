use {
    crate::{
        display_json, from_str_json, serutil::StringLikeList, ActionList, Condition, Effect, Principal, ResourceList,
    },
    derive_builder::Builder,
    serde::{
        de::{Deserializer, MapAccess, Visitor},
        Deserialize, Serialize,
    },
    std::fmt::{Formatter, Result as FmtResult},
};

/// A single IAM policy statement in its serialized shape.
///
/// Fields serialize in the order `Sid`, `Effect`, `Principal`/`NotPrincipal`, `Action`/`NotAction`,
/// `Resource`/`NotResource`, `Condition`; absent or empty fields are omitted.
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct Statement {
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<String>,

    effect: Effect,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "is_none_or_empty")]
    action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "is_none_or_empty")]
    not_action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "is_none_or_empty")]
    resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "is_none_or_empty")]
    not_resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "condition_is_empty")]
    condition: Option<Condition>,
}

fn is_none_or_empty<T>(list: &Option<StringLikeList<T>>) -> bool {
    match list {
        None => true,
        Some(list) => list.is_empty(),
    }
}

fn condition_is_empty(condition: &Option<Condition>) -> bool {
    match condition {
        None => true,
        Some(condition) => condition.is_empty(),
    }
}

impl Statement {
    pub fn builder() -> StatementBuilder {
        StatementBuilder::default()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn not_principal(&self) -> Option<&Principal> {
        self.not_principal.as_ref()
    }

    #[inline]
    pub fn action(&self) -> Option<&ActionList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&ActionList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&ResourceList> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn not_resource(&self) -> Option<&ResourceList> {
        self.not_resource.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

display_json!(Statement);
from_str_json!(Statement);

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatementVisitor {})
    }
}

struct StatementVisitor;
impl<'de> Visitor<'de> for StatementVisitor {
    type Value = Statement;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("a map of statement properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Statement, A::Error> {
        let mut builder = Statement::builder();
        let mut sid_seen = false;
        let mut effect_seen = false;
        let mut action_seen = false;
        let mut not_action_seen = false;
        let mut resource_seen = false;
        let mut not_resource_seen = false;
        let mut principal_seen = false;
        let mut not_principal_seen = false;
        let mut condition_seen = false;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "Sid" => {
                    if sid_seen {
                        return Err(serde::de::Error::duplicate_field("Sid"));
                    }

                    sid_seen = true;
                    builder.sid(access.next_value::<String>()?);
                }
                "Effect" => {
                    if effect_seen {
                        return Err(serde::de::Error::duplicate_field("Effect"));
                    }

                    effect_seen = true;
                    builder.effect(access.next_value::<Effect>()?);
                }
                "Action" => {
                    if action_seen {
                        return Err(serde::de::Error::duplicate_field("Action"));
                    }

                    action_seen = true;
                    builder.action(access.next_value::<ActionList>()?);
                }
                "NotAction" => {
                    if not_action_seen {
                        return Err(serde::de::Error::duplicate_field("NotAction"));
                    }

                    not_action_seen = true;
                    builder.not_action(access.next_value::<ActionList>()?);
                }
                "Resource" => {
                    if resource_seen {
                        return Err(serde::de::Error::duplicate_field("Resource"));
                    }

                    resource_seen = true;
                    builder.resource(access.next_value::<ResourceList>()?);
                }
                "NotResource" => {
                    if not_resource_seen {
                        return Err(serde::de::Error::duplicate_field("NotResource"));
                    }

                    not_resource_seen = true;
                    builder.not_resource(access.next_value::<ResourceList>()?);
                }
                "Principal" => {
                    if principal_seen {
                        return Err(serde::de::Error::duplicate_field("Principal"));
                    }

                    principal_seen = true;
                    builder.principal(access.next_value::<Principal>()?);
                }
                "NotPrincipal" => {
                    if not_principal_seen {
                        return Err(serde::de::Error::duplicate_field("NotPrincipal"));
                    }

                    not_principal_seen = true;
                    builder.not_principal(access.next_value::<Principal>()?);
                }
                "Condition" => {
                    if condition_seen {
                        return Err(serde::de::Error::duplicate_field("Condition"));
                    }

                    condition_seen = true;
                    builder.condition(access.next_value::<Condition>()?);
                }
                _ => {
                    return Err(serde::de::Error::unknown_field(
                        &key,
                        &[
                            "Sid",
                            "Effect",
                            "Principal",
                            "NotPrincipal",
                            "Action",
                            "NotAction",
                            "Resource",
                            "NotResource",
                            "Condition",
                        ],
                    ));
                }
            }
        }

        builder.build().map_err(|e| match e {
            StatementBuilderError::ValidationError(s) => {
                let msg2 = s.replace('.', ";").trim_end_matches(|c| c == ';').to_string();
                serde::de::Error::custom(StatementBuilderError::ValidationError(msg2))
            }
            _ => serde::de::Error::custom(e),
        })
    }
}

impl StatementBuilder {
    fn validate(&self) -> Result<(), StatementBuilderError> {
        let mut errors = Vec::with_capacity(4);
        if self.effect.is_none() {
            errors.push("Effect must be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.action, &self.not_action) {
            errors.push("Action and NotAction cannot both be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.resource, &self.not_resource) {
            errors.push("Resource and NotResource cannot both be set.");
        }

        if let (Some(Some(_)), Some(Some(_))) = (&self.principal, &self.not_principal) {
            errors.push("Principal and NotPrincipal cannot both be set.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("Statement failed validation: {}", errors.join(" "));
            Err(StatementBuilderError::ValidationError(errors.join(" ")))
        }
    }
}
