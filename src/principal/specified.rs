use {
    super::AwsPrincipal,
    crate::{display_json, serutil::StringLikeList},
    derive_builder::Builder,
    serde::{Deserialize, Serialize},
};

/// A `Principal` map naming principals by type.
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(deny_unknown_fields)]
pub struct SpecifiedPrincipal {
    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "AWS", skip_serializing_if = "Option::is_none")]
    aws: Option<StringLikeList<AwsPrincipal>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "CanonicalUser", skip_serializing_if = "Option::is_none")]
    canonical_user: Option<StringLikeList<String>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Federated", skip_serializing_if = "Option::is_none")]
    federated: Option<StringLikeList<String>>,

    #[builder(setter(into, strip_option), default)]
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    service: Option<StringLikeList<String>>,
}

display_json!(SpecifiedPrincipal);

impl SpecifiedPrincipal {
    #[inline]
    pub fn builder() -> SpecifiedPrincipalBuilder {
        SpecifiedPrincipalBuilder::default()
    }

    #[inline]
    pub fn aws(&self) -> Option<&StringLikeList<AwsPrincipal>> {
        self.aws.as_ref()
    }

    #[inline]
    pub fn canonical_user(&self) -> Option<&StringLikeList<String>> {
        self.canonical_user.as_ref()
    }

    #[inline]
    pub fn federated(&self) -> Option<&StringLikeList<String>> {
        self.federated.as_ref()
    }

    #[inline]
    pub fn service(&self) -> Option<&StringLikeList<String>> {
        self.service.as_ref()
    }
}

impl SpecifiedPrincipalBuilder {
    fn validate(&self) -> Result<(), String> {
        let empty = |v: &Option<Option<StringLikeList<String>>>| !matches!(v, Some(Some(l)) if !l.is_empty());
        let aws_empty = !matches!(&self.aws, Some(Some(l)) if !l.is_empty());

        if aws_empty && empty(&self.canonical_user) && empty(&self.federated) && empty(&self.service) {
            Err("At least one principal type must be set.".to_string())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::SpecifiedPrincipal,
        crate::{serutil::StringLikeList, AwsPrincipal},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_deserialize_basic1() {
        let sp: SpecifiedPrincipal = serde_json::from_str(
            r#"
            {
                "AWS": ["123456789012", "arn:aws:iam::123456789012:user/*"],
                "CanonicalUser": ["df22d4799ef444d6434c676951d8b390145f2fc5f9107140d0e4b733ad40516d"],
                "Federated": ["cognito-identity.amazonaws.com"],
                "Service": ["ec2.amazonaws.com", "lambda.amazonaws.com"]
            }
        "#,
        )
        .unwrap();

        assert_eq!(sp.aws().unwrap().len(), 2);
        assert_eq!(sp.aws().unwrap()[0], AwsPrincipal::Account("123456789012".to_string()));
        assert!(sp.canonical_user().is_some());
        assert_eq!(sp.federated().unwrap()[0], "cognito-identity.amazonaws.com");
        assert_eq!(sp.service().unwrap().len(), 2);

        assert!(serde_json::from_str::<SpecifiedPrincipal>(r#"{"Robot": "r2d2"}"#).is_err());
    }

    #[test_log::test]
    fn test_builder() {
        let sp = SpecifiedPrincipal::builder()
            .service(StringLikeList::one_or_many(vec!["lambda.amazonaws.com".to_string()]))
            .build()
            .unwrap();
        assert_eq!(
            sp.to_string(),
            indoc! { r#"
            {
                "Service": "lambda.amazonaws.com"
            }"# }
        );

        let e = SpecifiedPrincipal::builder().build().unwrap_err();
        assert_eq!(e.to_string(), "At least one principal type must be set.");
        let e = SpecifiedPrincipal::builder().federated(StringLikeList::List(vec![])).build().unwrap_err();
        assert_eq!(e.to_string(), "At least one principal type must be set.");
    }
}
