use std::fmt::Display;

use cliclack::{intro as cliclack_intro, log, outro as cliclack_outro};
use console::{style, Emoji, Term};
use serde::Serialize;

use crate::config::global_config;

const S_BAR: Emoji = Emoji("│", "|");

fn term_write(msg: impl Display) {
    let msg = &format!("{}", msg);
    Term::stderr().write_str(msg).unwrap();
}

pub fn intro() {
    cliclack_intro(style(" CycleBuddy deployer ").on_magenta().black()).unwrap();
}

pub fn outro(msg: impl Display) {
    cliclack_outro(msg).unwrap();
}

pub fn info(msg: impl Display) {
    log::info(msg).unwrap();
}

/// Printed only with `--verbose`.
pub fn debug(msg: impl Display) {
    if global_config().verbose {
        log::remark(style(msg).dim()).unwrap();
    }
}

pub fn warn(msg: impl Display) {
    log::warning(msg).unwrap();
}

pub fn error(msg: impl Display) {
    log::error(style(msg).red()).unwrap();
}

pub fn success(msg: impl Display) {
    log::success(msg).unwrap();
}

pub fn step(msg: impl Display) {
    log::step(msg).unwrap();
}

pub fn raw(msg: impl Display) {
    term_write(msg);
}

pub fn note(msg: impl Display, content: impl Display) {
    cliclack::note(msg, content).unwrap();
}

pub fn error_note(msg: &str, content: &str) {
    cliclack::note(style(msg).red(), content).unwrap();
}

/// Renders a serializable value as an indented `∙ key: value` list.
pub fn object_to_string(obj: impl Serialize) -> String {
    let json = serde_json::to_value(obj).unwrap();

    fn print_object(key: &str, value: &str, indentation: usize) -> String {
        format!(
            "{:indent$}∙ {} {}\n",
            "",
            style(format!("{key}:")).bold(),
            style(value),
            indent = indentation
        )
    }

    fn print_header(header: &str, indentation: usize) -> String {
        format!(
            "{:indent$}∙ {}\n",
            "",
            style(format!("{header}:")).bold(),
            indent = indentation
        )
    }

    fn traverse_json(json: &serde_json::Value, indent: usize) -> String {
        let mut values = String::new();

        if let serde_json::Value::Object(obj) = json {
            for (key, value) in obj {
                match value {
                    serde_json::Value::Object(_) => {
                        values.push_str(&print_header(key, indent));
                        values.push_str(&traverse_json(value, indent + 2));
                    }
                    serde_json::Value::String(s) => {
                        values.push_str(&print_object(key, s, indent))
                    }
                    _ => values.push_str(&print_object(key, &value.to_string(), indent)),
                }
            }
        }

        values
    }

    traverse_json(&json, 2)
}

pub fn new_empty_line() {
    term_write("\n");
}

pub fn new_line() {
    term_write(format!("{}\n", style(S_BAR).dim()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_to_string_nests_objects() {
        console::set_colors_enabled(false);
        let rendered = object_to_string(json!({
            "network": "bahamut",
            "contracts": { "CycleStreakToken": "0x01" }
        }));
        assert!(rendered.contains("  ∙ network: bahamut\n"));
        assert!(rendered.contains("  ∙ contracts:\n"));
        assert!(rendered.contains("    ∙ CycleStreakToken: 0x01\n"));
    }
}
