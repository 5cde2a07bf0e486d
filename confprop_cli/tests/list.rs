mod common;

use confprop_core::AnyEmptyResult;
use serde_json::Value;

const PROJECT_A_METADATA: &str = r#"{
	"properties": [
		{ "name": "project.a.bravo-property", "deprecated": true },
		{ "name": "project.a.alpha" }
	]
}"#;

#[test]
fn list_prints_properties_in_name_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("metadata.json"), PROJECT_A_METADATA)?;

	common::confprop_cmd()
		.arg("list")
		.arg("--metadata")
		.arg(tmp.path().join("metadata.json"))
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"project.a.alpha\nproject.a.bravo-property (deprecated)",
		))
		.stdout(predicates::str::contains("2 properties known"));

	Ok(())
}

#[test]
fn list_emits_json_for_tooling() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("metadata.json"), PROJECT_A_METADATA)?;

	let output = common::confprop_cmd()
		.arg("list")
		.arg("--format")
		.arg("json")
		.arg("--metadata")
		.arg(tmp.path().join("metadata.json"))
		.output()?;

	assert!(output.status.success());

	let value: Value = serde_json::from_slice(&output.stdout)?;
	let properties = value["properties"].as_array().unwrap();

	assert_eq!(properties.len(), 2);
	assert_eq!(properties[0]["name"], "project.a.alpha");
	assert_eq!(properties[0]["deprecated"], false);
	assert_eq!(properties[1]["name"], "project.a.bravo-property");
	assert_eq!(properties[1]["deprecated"], true);

	Ok(())
}

#[test]
fn list_reports_an_empty_store() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::confprop_cmd()
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No configuration properties found."));

	Ok(())
}
