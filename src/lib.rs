#![warn(clippy::all)]
pub(crate) mod access_level;
pub(crate) mod action;
pub(crate) mod builder;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod principal;
pub(crate) mod resource;
pub mod service;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    access_level::{AccessLevel, AccessLevelList},
    action::{Action, ActionList},
    builder::PolicyStatement,
    condition::{
        binary_value, op as condop, Condition, ConditionMap, ConditionOp, ConditionValue, IntoConditionValues,
        Operator, SetQualifier,
    },
    effect::Effect,
    error::BuilderError,
    principal::{
        AwsPrincipal, Principal, SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError,
    },
    resource::{
        ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError, ArnTemplate, Resource, ResourceArn, ResourceList,
    },
    serutil::{ListKind, StringLikeList},
    statement::{Statement, StatementBuilder, StatementBuilderError},
};
