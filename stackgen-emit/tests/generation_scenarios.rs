//! End-to-end generation runs over realistic team parameter directories.

use std::fs;
use std::path::Path;

use stackgen_core::{JobConfig, NamingPolicy};
use stackgen_emit::{pipeline, EmitError};
use tempfile::TempDir;

const TEMPLATE: &str = "\
Description: stack for {{ schema_name }}.{{ table_name }}
Resources:
  Fn:
    Type: AWS::Lambda::Function
    Properties:
      FunctionName: ingest-{{ schema_name }}-{{ table_name }}
";

fn setup(template: &str) -> (TempDir, JobConfig) {
    let root = TempDir::new().unwrap();
    let template_path = root.path().join("templates").join("lambda-eventbridge.yaml.tera");
    fs::create_dir_all(template_path.parent().unwrap()).unwrap();
    fs::write(&template_path, template).unwrap();
    let params_dir = root.path().join("team_configs");
    fs::create_dir_all(&params_dir).unwrap();
    let job = JobConfig::new(template_path, params_dir, root.path().join("output"));
    (root, job)
}

fn write_params(job: &JobConfig, name: &str, content: &str) {
    fs::write(job.params_dir.join(name), content).unwrap();
}

fn read_output(job: &JobConfig, name: &str) -> String {
    fs::read_to_string(job.output_dir.join(name)).unwrap()
}

fn output_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn filename_policy_single_config_file() {
    let (_root, mut job) = setup("team: {{ team }}\n");
    job.naming = NamingPolicy::FileStem;
    write_params(&job, "parameters_victory.yaml", "team: victory\n");

    let summary = pipeline::run(&job, false).unwrap();
    assert_eq!(summary.written(), 1);
    assert_eq!(read_output(&job, "lambda-eb-victory.yaml"), "team: victory\n");
}

#[test]
fn schema_table_policy_one_output_per_entry() {
    let (_root, mut job) = setup(TEMPLATE);
    job.naming = NamingPolicy::SchemaTable { normalize: false };
    write_params(
        &job,
        "parameters_sales.yaml",
        "- schema_name: sales\n  table_name: orders\n- schema_name: sales\n  table_name: returns\n",
    );

    let summary = pipeline::run(&job, false).unwrap();
    assert_eq!(summary.written(), 2);
    assert!(job.output_dir.join("lambda-eb-sales-orders.yaml").exists());
    assert!(job.output_dir.join("lambda-eb-sales-returns.yaml").exists());
}

#[test]
fn normalizing_policy_replaces_underscores_in_names_only() {
    let (_root, job) = setup(TEMPLATE);
    write_params(
        &job,
        "parameters_eu.yaml",
        "schema_name: sales_eu\ntable_name: orders_v2\n",
    );

    pipeline::run(&job, false).unwrap();
    let content = read_output(&job, "lambda-eb-sales-eu-orders-v2.yaml");
    // The rendered body keeps the raw field values.
    assert!(content.contains("ingest-sales_eu-orders_v2"));
}

#[test]
fn missing_key_aborts_before_later_files() {
    let (_root, job) = setup(TEMPLATE);
    write_params(&job, "parameters_a_broken.yaml", "schema_name: only\n");
    write_params(&job, "parameters_z_fine.yaml", "schema_name: ok\ntable_name: fine\n");

    let err = pipeline::run(&job, false).unwrap_err();
    assert!(err.to_string().contains("table_name"), "got: {err}");
    assert!(
        !job.output_dir.join("lambda-eb-ok-fine.yaml").exists(),
        "files after the failure must not be processed"
    );
}

#[test]
fn filename_policy_last_config_wins_on_overwrite() {
    let (_root, mut job) = setup("team: {{ team }}\n");
    job.naming = NamingPolicy::FileStem;
    write_params(
        &job,
        "parameters_victory.yaml",
        "- team: first\n- team: second\n",
    );

    let summary = pipeline::run(&job, false).unwrap();
    assert_eq!(output_count(&job.output_dir), 1);
    assert_eq!(read_output(&job, "lambda-eb-victory.yaml"), "team: second\n");
    // Both configurations were rendered and written; the second replaced the first.
    assert_eq!(summary.written(), 2);
}

#[test]
fn output_bytes_are_identical_across_runs() {
    let (_root, job) = setup(TEMPLATE);
    write_params(&job, "parameters_a.yaml", "schema_name: a\ntable_name: b\n");

    pipeline::run(&job, false).unwrap();
    let first = read_output(&job, "lambda-eb-a-b.yaml");
    fs::remove_file(job.output_dir.join("lambda-eb-a-b.yaml")).unwrap();
    pipeline::run(&job, false).unwrap();
    let second = read_output(&job, "lambda-eb-a-b.yaml");
    assert_eq!(first, second);
}

#[test]
fn cross_file_collision_fails_when_asked_to() {
    let (_root, mut job) = setup(TEMPLATE);
    job.on_collision = stackgen_core::CollisionPolicy::Fail;
    write_params(&job, "parameters_a.yaml", "schema_name: x\ntable_name: y\n");
    write_params(&job, "parameters_b.yaml", "schema_name: x\ntable_name: y\n");

    let err = pipeline::run(&job, false).unwrap_err();
    assert!(matches!(err, EmitError::Collision { .. }));
}

#[test]
fn keep_going_reports_failures_and_finishes_the_rest() {
    let (_root, mut job) = setup(TEMPLATE);
    job.keep_going = true;
    write_params(&job, "parameters_a_broken.yaml", "not yaml: [unclosed\n");
    write_params(&job, "parameters_b.yaml", "schema_name: b\ntable_name: t\n");
    write_params(&job, "parameters_c.yaml", "schema_name: c\ntable_name: t\n");

    let summary = pipeline::run(&job, false).unwrap();
    assert_eq!(summary.failed_files(), 1);
    assert_eq!(summary.written(), 2);
    assert!(job.output_dir.join("lambda-eb-b-t.yaml").exists());
    assert!(job.output_dir.join("lambda-eb-c-t.yaml").exists());

    let failed = summary.reports.iter().find(|r| r.error.is_some()).unwrap();
    assert!(failed.source.ends_with("parameters_a_broken.yaml"));
}
