mod example_schema_tests;
mod star_wars_stats_tests;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
