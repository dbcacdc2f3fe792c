//! Statistics visitors over GraphQL schema documents.
//!
//! Each analysis here is a [`Visitor`](libgraphql_astvisitor::Visitor) that
//! gathers its numbers during a single walk of a
//! [`Document`](libgraphql_schema_ast::Document). The `gather_*` functions
//! wire a fresh visitor into a walker and return what it collected.

mod document_stats;
mod example_schema;
mod star_wars;
mod string_field_stats;

pub use document_stats::gather_document_stats;
pub use document_stats::gather_document_stats_with_config;
pub use document_stats::DocumentStats;
pub use document_stats::DocumentStatsVisitor;
pub use example_schema::build_example_document;
pub use example_schema::SCHEMA_EXAMPLE;
pub use star_wars::STAR_WARS_SCHEMA;
pub use string_field_stats::gather_string_field_stats;
pub use string_field_stats::is_string_type;
pub use string_field_stats::StringFieldStats;
pub use string_field_stats::StringFieldStatsVisitor;

#[cfg(test)]
mod tests;
