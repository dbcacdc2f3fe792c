use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_astvisitor::Report;
use libgraphql_astvisitor::WalkerConfig;
use libgraphql_astvisitor::DEFAULT_MAX_DEPTH;
use libgraphql_schema_ast::parse_schema;
use libgraphql_schema_stats::gather_document_stats_with_config;
use libgraphql_schema_stats::DocumentStats;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct StatsCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=DEFAULT_MAX_DEPTH,
        help="Maximum depth the schema walker may descend to before giving \
             up on a file.",
        long,
    )]
    max_depth: usize,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files to gather stats for.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for StatsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(anyhow::Error::new(e).context(format!(
                            "Failed to scan {path:#?}",
                        )));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                log::trace!("Found file at {entry_path:#?}.");
                if has_graphql_ext(entry_path, &graphql_file_exts) {
                    match std::fs::canonicalize(entry_path) {
                        Ok(canonical_path) => file_paths.push(canonical_path),
                        Err(e) => errors.push(anyhow::Error::new(e).context(format!(
                            "Failed to resolve {entry_path:#?}",
                        ))),
                    }
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // A single file path given explicitly is presumed to be a schema file,
        // even if its extension isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            match std::fs::canonicalize(first_arg_path) {
                Ok(canonical_path) => {
                    log::warn!(
                        "Proceeding to gather stats for {canonical_path:#?} \
                        even though it doesn't match any of the \
                        --graphql-file-exts ({}).",
                        output_utils::comma_list(
                            graphql_file_exts.iter().map(|ext| format!("`{ext}`")),
                        ),
                    );
                    num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
                    file_paths.push(canonical_path);
                },
                Err(e) => errors.push(anyhow::Error::new(e).context(format!(
                    "Failed to resolve {first_arg_path:#?}",
                ))),
            }
        }

        log::debug!(
            "Found {} GraphQL files to gather stats for.",
            file_paths.len(),
        );

        let config = WalkerConfig::with_max_depth(self.max_depth);
        let mut sections = vec![];
        for file_path in &file_paths {
            match gather_file_stats(file_path, config) {
                Ok(stats) => sections.push(format_stats(file_path, &stats)),
                Err(e) => errors.push(e),
            }
        }

        let summary = format!(
            "{}\n{} Gathered stats for {} of {} files (skipped {} non-graphql \
            files).",
            sections.join("\n"),
            if errors.is_empty() {
                output_utils::GREEN_CHECK
            } else {
                output_utils::RED_X
            },
            sections.len(),
            file_paths.len(),
            num_non_graphql_files,
        );

        if errors.is_empty() {
            CommandResult::stdout(format_args!("{summary}"))
        } else {
            let error_list = errors.iter()
                .map(|e| format!("  * {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");
            CommandResult::partial_failure(
                summary,
                format!("{} Errors gathering stats:\n{error_list}", output_utils::RED_X),
            )
        }
    }
}

fn gather_file_stats(file_path: &Path, config: WalkerConfig) -> anyhow::Result<DocumentStats> {
    let content = file_reader::read_content(file_path)?;
    let document = parse_schema(&content)
        .with_context(|| format!("Failed to load {file_path:#?}"))?;

    let mut report = Report::new();
    let (stats, outcome) = gather_document_stats_with_config(&document, config, &mut report);
    for diag in report.diagnostics() {
        log::debug!("{file_path:#?}: {diag}");
    }
    if !outcome.is_success() {
        let reason = report.errors()
            .map(|diag| diag.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Failed to walk {file_path:#?}: {reason}");
    }
    Ok(stats)
}

fn format_stats(file_path: &Path, stats: &DocumentStats) -> String {
    format!(
        concat!(
            "{}\n",
            "  * Unique field names ({}): {}\n",
            "  * Object types ({}): {}\n",
            "  * Enum values ({}): {}\n",
            "  * String fields: {}",
        ),
        file_path.display(),
        stats.unique_field_names().len(),
        output_utils::comma_list(stats.unique_field_names()),
        stats.object_type_names().len(),
        output_utils::comma_list(stats.object_type_names()),
        stats.enum_values().len(),
        output_utils::comma_list(stats.enum_values()),
        stats.string_field_count(),
    )
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// Prefixes each extension with a `.` unless it already has one.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use libgraphql_schema_stats::STAR_WARS_SCHEMA;
    use std::process::ExitCode;

    fn stats_cmd(paths: &[&Path], max_depth: usize) -> StatsCmd {
        StatsCmd {
            graphql_file_exts: vec!["graphql".to_string()],
            max_depth,
            file_or_dir_paths: paths.iter().map(|path| path.to_path_buf()).collect(),
        }
    }

    fn cli() -> Cli {
        Cli {
            cmd: None,
            verbose: false,
        }
    }

    #[test]
    fn file_exts_are_normalized_with_a_leading_dot() {
        let exts = normalize_file_exts(&["graphql".to_string(), ".gql".to_string()]);
        assert!(exts.contains(".graphql"));
        assert!(exts.contains(".gql"));
        assert!(has_graphql_ext(Path::new("schema.gql"), &exts));
        assert!(!has_graphql_ext(Path::new("schema.json"), &exts));
        assert!(!has_graphql_ext(Path::new("graphql"), &exts));
    }

    #[test]
    fn star_wars_stats_are_formatted_per_file() {
        let document = parse_schema(STAR_WARS_SCHEMA).expect("schema parses");
        let mut report = Report::new();
        let (stats, _) = gather_document_stats_with_config(
            &document,
            WalkerConfig::default(),
            &mut report,
        );

        let output = format_stats(Path::new("starwars.graphql"), &stats);
        assert_eq!(output, concat!(
            "starwars.graphql\n",
            "  * Unique field names (13): commentary, createReview, droid, ",
            "friends, height, hero, id, length, name, primaryFunction, ",
            "remainingJedis, search, stars\n",
            "  * Object types (7): Query, Mutation, Subscription, Review, ",
            "Human, Droid, Starship\n",
            "  * Enum values (3): NEWHOPE, EMPIRE, JEDI\n",
            "  * String fields: 9",
        ));
    }

    #[test]
    fn walk_deeper_than_max_depth_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("starwars.graphql");
        std::fs::write(&file_path, STAR_WARS_SCHEMA)?;

        let err = gather_file_stats(&file_path, WalkerConfig::with_max_depth(3))
            .expect_err("walk should exceed the max depth");
        let message = format!("{err:#}");
        assert!(message.starts_with("Failed to walk"), "{message}");
        assert!(message.contains("maximum walk depth of 3 exceeded"), "{message}");

        assert!(gather_file_stats(&file_path, WalkerConfig::default()).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn unparseable_file_fails_the_run_but_keeps_other_stats() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("broken.graphql"), "type Query {")?;
        std::fs::write(dir.path().join("starwars.graphql"), STAR_WARS_SCHEMA)?;
        std::fs::write(dir.path().join("notes.txt"), "not a schema")?;

        let result = stats_cmd(&[dir.path()], DEFAULT_MAX_DEPTH).run(cli()).await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        let stdout = result.stdout.expect("stats for the valid file are printed");
        assert!(stdout.contains("starwars.graphql\n"), "{stdout}");
        assert!(stdout.contains("  * String fields: 9"), "{stdout}");
        assert!(
            stdout.ends_with("Gathered stats for 1 of 2 files (skipped 1 non-graphql files)."),
            "{stdout}",
        );
        let stderr = result.stderr.expect("the failed file is listed");
        assert!(stderr.contains("Errors gathering stats:"), "{stderr}");
        assert!(stderr.contains("Failed to load"), "{stderr}");
        assert!(stderr.contains("broken.graphql"), "{stderr}");
        Ok(())
    }

    #[tokio::test]
    async fn all_files_succeeding_exits_successfully() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("starwars.graphql");
        std::fs::write(&file_path, STAR_WARS_SCHEMA)?;

        let result = stats_cmd(&[file_path.as_path()], DEFAULT_MAX_DEPTH).run(cli()).await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        assert!(result.stderr.is_none());
        Ok(())
    }
}
