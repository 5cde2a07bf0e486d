use std::sync::Arc;
use std::sync::Mutex;

use crate::Logger;
use crate::MetadataStore;
use crate::PropertyRecord;
use crate::PropertyValidator;

/// A [`Logger`] that records every diagnostic for later assertions.
#[derive(Debug, Default)]
pub struct TestLogger {
	warns: Mutex<Vec<String>>,
	debugs: Mutex<Vec<String>>,
}

impl TestLogger {
	pub fn warn_messages(&self) -> Vec<String> {
		self.warns.lock().unwrap().clone()
	}

	pub fn debug_messages(&self) -> Vec<String> {
		self.debugs.lock().unwrap().clone()
	}
}

impl Logger for TestLogger {
	fn warn(&self, message: &str) {
		self.warns.lock().unwrap().push(message.to_string());
	}

	fn debug(&self, message: &str) {
		self.debugs.lock().unwrap().push(message.to_string());
	}
}

pub fn project_a_records() -> Vec<PropertyRecord> {
	vec![
		PropertyRecord::new("project.a.alpha", false),
		PropertyRecord::new("project.a.bravo-property", true),
		PropertyRecord::new("project.a.charlie", false),
		PropertyRecord::new("example.property.delta.a.b.c", false),
	]
}

pub fn project_a_store() -> MetadataStore {
	MetadataStore::from_source(&project_a_records()).unwrap()
}

pub fn project_a_validator() -> (Arc<TestLogger>, PropertyValidator) {
	let logger = Arc::new(TestLogger::default());
	let validator = PropertyValidator::new(logger.clone(), project_a_store());

	(logger, validator)
}

pub const PROJECT_A_METADATA: &str = r#"{
	"properties": [
		{ "name": "project.a.alpha", "type": "string", "description": "Alpha." },
		{ "name": "project.a.bravo-property", "deprecated": true },
		{ "name": "project.a.charlie", "deprecation": { "replacement": "project.a.alpha" } }
	]
}"#;
