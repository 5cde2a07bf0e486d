mod common;

use confprop_core::AnyEmptyResult;

const PROJECT_A_METADATA: &str = r#"{
	"properties": [{ "name": "project.a.alpha" }]
}"#;

#[test]
fn validate_resolves_metadata_paths_from_confprop_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("build"))?;
	std::fs::write(tmp.path().join("build/metadata.json"), PROJECT_A_METADATA)?;
	std::fs::write(
		tmp.path().join("confprop.toml"),
		"[metadata]\npaths = [\"build/metadata.json\"]\n",
	)?;

	common::confprop_cmd()
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("project.a.alpha")
		.assert()
		.success()
		.stdout(predicates::str::contains("project.a.alpha"));

	Ok(())
}

#[test]
fn validate_resolves_dot_confprop_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("metadata.json"), PROJECT_A_METADATA)?;
	std::fs::write(
		tmp.path().join(".confprop.toml"),
		"[metadata]\npaths = [\"metadata.json\"]\n",
	)?;

	common::confprop_cmd()
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("project.a.alpha")
		.assert()
		.success();

	Ok(())
}

#[test]
fn metadata_flags_override_config_paths() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("configured.json"), PROJECT_A_METADATA)?;
	std::fs::write(
		tmp.path().join("explicit.json"),
		r#"{ "properties": [{ "name": "project.a.echo" }] }"#,
	)?;
	std::fs::write(
		tmp.path().join("confprop.toml"),
		"[metadata]\npaths = [\"configured.json\"]\n",
	)?;

	// With an explicit --metadata flag the configured document is ignored.
	common::confprop_cmd()
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--metadata")
		.arg(tmp.path().join("explicit.json"))
		.arg("project.a.alpha")
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains(
			"Configuration property 'project.a.alpha' not found.",
		));

	Ok(())
}

#[test]
fn malformed_config_is_a_hard_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("confprop.toml"), "[metadata\npaths = 1")?;

	common::confprop_cmd()
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("project.a.alpha")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}
