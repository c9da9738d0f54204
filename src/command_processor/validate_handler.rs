//! Validate command handler
//!
//! Runs a form validator over values supplied as flags, mapped onto the
//! fixed field identifiers the templates use. Omitted flags surface as
//! missing-field failures.

use super::{CommandArgs, CommandHandler};
use crate::config::Config;
use crate::forms::{self, fields, FormFields};
use crate::ui::{TerminalUi, Ui};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug)]
pub struct ValidateHandler;

fn collect(args: &CommandArgs, mapping: &[(&str, &'static str)]) -> FormFields {
    let mut form = FormFields::new();
    for (flag, field_id) in mapping {
        if let Some(value) = args.flag_value(flag) {
            form.set(*field_id, value);
        }
    }
    form
}

impl CommandHandler for ValidateHandler {
    fn execute(&self, args: CommandArgs) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            let config = Config::load()?;
            let policy = config.validation.policy.policy();

            let result = match args.args.first().map(|s| s.as_str()) {
                Some("login") => {
                    let form = collect(
                        &args,
                        &[("name", fields::LOGIN_NAME), ("password", fields::LOGIN_PASSWORD)],
                    );
                    forms::validate_login_form(&form, policy)
                }
                Some("court") => {
                    let form = collect(
                        &args,
                        &[("title", fields::COURT_TITLE), ("address", fields::COURT_ADDRESS)],
                    );
                    forms::validate_court_form(&form, policy)
                }
                Some("note") => {
                    let form = collect(
                        &args,
                        &[
                            ("case", fields::NOTE_CASE),
                            ("court", fields::NOTE_COURT),
                            ("status", fields::NOTE_STATUS),
                            ("details", fields::NOTE_DETAILS),
                            ("date", fields::NOTE_DATE),
                            ("time", fields::NOTE_TIME),
                        ],
                    );
                    forms::validate_note_form(&form, policy)
                }
                Some("user") => {
                    let form = collect(&args, &[("email", fields::USER_EMAIL)]);
                    forms::validate_user_form(&form, policy)
                }
                Some("case") => {
                    let form = collect(
                        &args,
                        &[
                            ("title", fields::CASE_TITLE),
                            ("details", fields::CASE_DETAILS),
                            ("full-name", fields::CASE_FULL_NAME),
                            ("phone", fields::CASE_PHONE),
                        ],
                    );
                    forms::validate_case_form(&form, policy)
                }
                _ => {
                    println!("Usage: docket validate <login|court|note|user|case> --<field> <value> ...");
                    return Ok(());
                }
            };

            match result {
                Ok(()) => println!("Valid."),
                Err(e) => TerminalUi.alert(&e.to_string()),
            }
            Ok(())
        })
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "validate"
    }
}
