//! Case graph adapters

pub mod graphql;

pub use graphql::GraphQlCaseGraph;
