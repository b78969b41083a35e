// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{
    format_text, write_action_error, write_action_result, CmdContext, CmdError, Command,
    CommandAction, ExecContext, OutputFormat,
};
use anyhow::format_err;
use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Parser)]
struct GlobalOpt {
    #[clap(long, short = 'V', global = true)]
    verbose: bool,
}

struct Counter {
    base: u64,
}

#[derive(Debug, Parser)]
#[clap(name = "add")]
struct AddOpt {
    #[clap(name = "value")]
    value: u64,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Serialize)]
struct AddResult {
    sum: u64,
    verbose: bool,
}

struct AddCommand;

impl CommandAction for AddCommand {
    type State = Counter;
    type GlobalOpt = GlobalOpt;
    type Opt = AddOpt;
    type ReturnItem = AddResult;

    fn run(
        &self,
        ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>,
    ) -> Result<Self::ReturnItem> {
        Ok(AddResult {
            sum: ctx.state().base + ctx.opt().value,
            verbose: ctx.global_opt().verbose,
        })
    }
}

#[derive(Debug, Parser)]
#[clap(name = "base")]
struct BaseOpt {}

fn context() -> CmdContext<Counter, GlobalOpt> {
    CmdContext::with_state(Counter { base: 40 }).command(
        Command::with_name("math").subcommand(AddCommand).subcommand(
            Command::with_action_fn(|ctx: &ExecContext<Counter, GlobalOpt, BaseOpt>| {
                Ok(ctx.state().base)
            })
            .with_about("Print the base value"),
        ),
    )
}

#[test]
fn test_exec_subcommand() -> Result<()> {
    let result: AddResult = context().exec_with_args(vec!["cli", "math", "add", "2"])?;
    assert_eq!(
        result,
        AddResult {
            sum: 42,
            verbose: false
        }
    );
    Ok(())
}

#[test]
fn test_exec_action_fn() -> Result<()> {
    let base: u64 = context().exec_with_args(vec!["cli", "math", "base"])?;
    assert_eq!(base, 40);
    Ok(())
}

#[test]
fn test_global_opt_after_subcommand() -> Result<()> {
    let result: AddResult = context().exec_with_args(vec!["cli", "math", "add", "1", "-V"])?;
    assert!(result.verbose);
    assert_eq!(result.sum, 41);
    Ok(())
}

#[test]
fn test_group_without_subcommand_needs_help() {
    let err = context()
        .exec_with_args::<AddResult>(vec!["cli", "math"])
        .unwrap_err();
    match err.downcast_ref::<CmdError>() {
        Some(CmdError::NeedHelp { help }) => assert!(help.contains("add")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_version_flag() {
    let err = context()
        .exec_with_args::<AddResult>(vec!["cli", "-v"])
        .unwrap_err();
    match err.downcast_ref::<CmdError>() {
        Some(CmdError::ClapError(e)) => assert_eq!(e.kind(), clap::ErrorKind::DisplayVersion),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_positional_is_usage_error() {
    let err = context()
        .exec_with_args::<AddResult>(vec!["cli", "math", "add"])
        .unwrap_err();
    let cmd_error = err.downcast_ref::<CmdError>().unwrap();
    assert!(matches!(cmd_error, CmdError::ClapError(_)));
}

#[test]
fn test_output_format_flags() {
    assert_eq!(OutputFormat::from_flags(false, false, false), OutputFormat::Text);
    assert_eq!(OutputFormat::from_flags(true, false, false), OutputFormat::Json);
    assert_eq!(OutputFormat::from_flags(true, true, false), OutputFormat::Raw);
    assert_eq!(OutputFormat::from_flags(true, true, true), OutputFormat::Both);
}

#[test]
fn test_output_format_action_runs_before_state() -> Result<()> {
    let seen = Rc::new(Cell::new(None));
    let seen_by_action = seen.clone();
    let seen_by_init = seen.clone();
    let context = CmdContext::<Counter, GlobalOpt>::with_initializer(move |_| {
        assert_eq!(seen_by_init.get(), Some(OutputFormat::Both));
        Ok(Counter { base: 1 })
    })
    .with_output_format_action(move |format| seen_by_action.set(Some(format)))
    .command(Command::with_name("math").subcommand(AddCommand));
    let result: AddResult = context.exec_with_args(vec!["cli", "--both", "math", "add", "1"])?;
    assert_eq!(result.sum, 2);
    assert_eq!(seen.get(), Some(OutputFormat::Both));
    Ok(())
}

#[test]
fn test_initializer_error_is_command_error() {
    let context = CmdContext::<Counter, GlobalOpt>::with_initializer(|_| {
        Err(format_err!("no config"))
    })
    .command(Command::with_name("math").subcommand(AddCommand));
    let err = context
        .exec_with_args::<AddResult>(vec!["cli", "math", "add", "1"])
        .unwrap_err();
    assert_eq!(err.to_string(), "no config");
}

#[test]
fn test_write_both() -> Result<()> {
    let value = json!({"transaction_id": "abc", "signed": true, "transaction": {"actions": []}});
    let mut out = vec![];
    let mut err = vec![];
    write_action_result(OutputFormat::Both, &value, &mut out, &mut err)?;
    assert_eq!(String::from_utf8(out)?, "transaction id: abc\nsigned: true\n");
    let json: serde_json::Value = serde_json::from_slice(&err)?;
    assert_eq!(json, value);
    assert_eq!(err.iter().filter(|b| **b == b'\n').count(), 1);
    Ok(())
}

#[test]
fn test_write_json_and_raw_use_stdout() -> Result<()> {
    let value = json!({"sum": 42});
    for (format, expect) in [
        (OutputFormat::Raw, "{\"sum\":42}\n"),
        (OutputFormat::Json, "{\n  \"sum\": 42\n}\n"),
        (OutputFormat::Text, "sum: 42\n"),
    ] {
        let mut out = vec![];
        let mut err = vec![];
        write_action_result(format, &value, &mut out, &mut err)?;
        assert_eq!(String::from_utf8(out)?, expect);
        assert!(err.is_empty());
    }
    Ok(())
}

#[test]
fn test_write_null_prints_nothing() -> Result<()> {
    let mut out = vec![];
    let mut err = vec![];
    write_action_result(OutputFormat::Both, &serde_json::Value::Null, &mut out, &mut err)?;
    assert!(out.is_empty());
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn test_write_error_stream() -> Result<()> {
    let error = format_err!("missing required argument: creator");
    let mut out = vec![];
    let mut err = vec![];
    write_action_error(OutputFormat::Both, &error, &mut out, &mut err)?;
    assert_eq!(
        String::from_utf8(out)?,
        "ERROR: missing required argument: creator\n"
    );
    assert!(err.is_empty());

    let mut out = vec![];
    let mut err = vec![];
    write_action_error(OutputFormat::Text, &error, &mut out, &mut err)?;
    assert!(out.is_empty());
    assert!(String::from_utf8(err)?.starts_with("ERROR: "));
    Ok(())
}

#[test]
fn test_format_text() {
    let value = json!({
        "name": "default",
        "head_block_num": 3,
        "list": [1, 2],
        "nested": {"a": [1, 2]},
    });
    let text = format_text(&value);
    assert_eq!(text, "name: default\nhead block num: 3\nlist: [1,2]");
    assert_eq!(format_text(&json!("plain")), "plain");
}
