//! A small people graph served from memory.
//!
//! People are stored with their height in centimeters and weight in kilograms;
//! the `height` and `weight` fields read them in whatever unit the operation
//! asks for through [`unit_conversion::convert`]. Around that sit the usual
//! GraphQL building blocks: queries with input filters, mutations, a `Date`
//! custom scalar, an `@upper` executable directive and a `@baseUnit` schema
//! directive.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod config;
mod directives;
mod error;
mod mutation;
mod person;
mod query;
mod scalars;
mod store;
mod units;

use async_graphql::EmptySubscription;

pub use {
    config::{ConfigError, OperationLimitsConfig, PersonSeed, SchemaConfig},
    error::StoreError,
    mutation::{Mutation, PersonInput, PersonPatch},
    person::Person,
    query::{PeopleFilter, Query, UnitCatalog, UnitFactor},
    scalars::Date,
    store::{NewPerson, PeopleStore, PersonChanges, PersonRecord},
    units::{HeightUnit, WeightUnit},
};

pub type PeopleSchema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

/// Builds a schema over the configured seed people, or the built-in ones.
pub fn build_schema(config: &SchemaConfig) -> Result<PeopleSchema, ConfigError> {
    let store = match &config.people {
        Some(seed) => PeopleStore::from_seed(seed)?,
        None => PeopleStore::seeded(),
    };

    Ok(build_schema_with_store(config, store))
}

/// Builds a schema over an existing store. Mutations executed through the schema
/// are visible through every clone of `store`.
pub fn build_schema_with_store(config: &SchemaConfig, store: PeopleStore) -> PeopleSchema {
    tracing::debug!(people = store.len(), "building people schema");

    let mut builder = async_graphql::Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .directive(directives::upper);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    if let Some(depth) = config.operation_limits.depth {
        builder = builder.limit_depth(depth);
    }

    if let Some(complexity) = config.operation_limits.complexity {
        builder = builder.limit_complexity(complexity);
    }

    builder.finish()
}
