//! Facade integration tests
//!
//! Exercises the helpers through the `trellis` facade with settings loaded
//! from a TOML file, as an application would at startup.

use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;
use trellis::prelude::*;

choice_enum! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Plan {
		Free,
		ProMonthly,
		ProYearly,
	}
}

struct Account {
	plan: Plan,
	email: String,
}

impl Account {
	const PLAN: Field<Account, Plan> = Field::new("Plan", |a| &a.plan);
	const EMAIL: Field<Account, String> = Field::new("Email", |a| &a.email);
}

#[fixture]
fn settings_file() -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	writeln!(file, r#"application_path = "/billing""#).unwrap();
	writeln!(file, r#"html_field_prefix = "Account""#).unwrap();
	file
}

#[rstest]
fn test_helpers_with_file_settings(settings_file: NamedTempFile) {
	let settings = HelperSettings::from_file(settings_file.path()).unwrap();
	let registry = MetadataRegistry::builder()
		.field(&Account::EMAIL, |m| m.with_description("Used for invoices"))
		.build();
	let env = HelperEnvironment::new(settings, registry);

	let account = Account {
		plan: Plan::ProYearly,
		email: "a@example.com".to_string(),
	};
	let ctx = env.context(&account);
	let html = ctx.html();

	assert_eq!(
		html.description_for(&Account::EMAIL).as_str(),
		"Used for invoices"
	);
	assert_eq!(
		html.image("~/logo.svg").unwrap().as_str(),
		r#"<img src="/billing/logo.svg" alt="" />"#
	);

	let select = html
		.enum_drop_down_list_for_with(
			&Account::PLAN,
			None,
			Some(&AttributeMap::from([("class", "plan")])),
		)
		.unwrap();
	assert_eq!(
		select.as_str(),
		"<select class=\"plan\" name=\"Account.Plan\" id=\"Account_Plan\">\
		 <option value=\"Free\">Free</option>\n\
		 <option value=\"ProMonthly\">Pro Monthly</option>\n\
		 <option value=\"ProYearly\" selected=\"selected\">Pro Yearly</option>\n\
		 </select>"
	);
}

#[rstest]
fn test_invalid_settings_file_rejected() {
	let mut file = NamedTempFile::new().unwrap();
	writeln!(file, r#"application_path = "billing""#).unwrap();

	let err = HelperSettings::from_file(file.path()).unwrap_err();
	assert!(matches!(err, trellis::SettingsError::Invalid { .. }));
}

#[rstest]
fn test_non_enum_rejected_through_facade() {
	let env = HelperEnvironment::default();
	let ctx = env.context_without_model::<Account>();

	let err = ctx.html().enum_drop_down_list_for(&Account::EMAIL).unwrap_err();
	assert_eq!(err.to_string(), "Must be a valid Enum type.");
}
