mod common;

use clap::Parser;
use hashparam_cli::Commands;
use hashparam_cli::HashParamCli;
use hashparam_core::AnyEmptyResult;
use rstest::rstest;
use similar_asserts::assert_eq;

#[test]
fn parse_render_arguments() -> AnyEmptyResult {
	let cli = HashParamCli::try_parse_from([
		"hashparam",
		"render",
		"#{env}",
		"--param",
		"env=prod",
		"-P",
		"region=eu",
	])?;

	let Some(Commands::Render { input, params }) = cli.command else {
		return Err("expected render command".into());
	};
	assert_eq!(input.text.as_deref(), Some("#{env}"));
	assert_eq!(params, vec!["env=prod".to_string(), "region=eu".to_string()]);

	Ok(())
}

#[test]
fn render_text_and_file_conflict() {
	let result = HashParamCli::try_parse_from(["hashparam", "render", "abc", "--file", "in.txt"]);
	assert!(result.is_err());
}

#[test]
fn render_substitutes_params_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("hashparam.toml"),
		"[params]\nenv = \"staging\"\nregion = \"us-east-1\"\n",
	)?;

	common::hashparam_cmd()
		.arg("render")
		.arg("deploy-#{env} in #{region} ##1")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("deploy-staging in us-east-1 #1");

	Ok(())
}

#[test]
fn render_overrides_take_precedence() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("hashparam.toml"),
		"[params]\nenv = \"staging\"\n",
	)?;

	common::hashparam_cmd()
		.arg("render")
		.arg("#{env}")
		.arg("--param")
		.arg("env=production")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("production");

	Ok(())
}

#[test]
fn render_reads_input_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("pipeline.yml");
	std::fs::write(&input, "stage: #{stage}\nlabel: build-##\n")?;

	common::hashparam_cmd()
		.arg("render")
		.arg("--file")
		.arg(&input)
		.arg("--param")
		.arg("stage=test")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("stage: test\nlabel: build-#\n");

	Ok(())
}

#[test]
fn render_reads_stdin() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hashparam_cmd()
		.arg("render")
		.arg("-P")
		.arg("name=world")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("hello #{name}")
		.assert()
		.success()
		.stdout("hello world");

	Ok(())
}

#[rstest]
#[case::undefined("#{missing}", "parameter `missing` is not defined")]
#[case::incomplete("#{env", "incomplete parameter usage")]
#[case::invalid("#env", "invalid parameter usage")]
fn render_reports_errors(#[case] text: &str, #[case] message: &str) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hashparam_cmd()
		.arg("render")
		.arg(text)
		.arg("--param")
		.arg("env=prod")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stdout("")
		.stderr(predicates::str::contains(message));

	Ok(())
}

#[test]
fn render_rejects_malformed_override() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hashparam_cmd()
		.arg("render")
		.arg("abc")
		.arg("--param")
		.arg("novalue")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid parameter override"));

	Ok(())
}

#[test]
fn render_reports_config_parse_errors() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("hashparam.toml"), "[params\n")?;

	common::hashparam_cmd()
		.arg("render")
		.arg("abc")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hashparam_cmd()
		.arg("render")
		.arg("plain")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("plain")
		.stderr(predicates::str::contains("parameter scan finished"));

	Ok(())
}

#[test]
fn missing_subcommand_fails() {
	common::hashparam_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
