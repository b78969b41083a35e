// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::command::help_message;
use crate::error::CmdError;
use crate::{
    print_action_error, print_action_result, Command, CommandAction, CommandExec, OutputFormat,
};
use anyhow::Result;
use clap::{crate_version, Arg, ArgAction, ArgMatches, Command as App, Parser};
use serde_json::Value;
use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::Arc;

static JSON_ARG: &str = "json";
static RAW_ARG: &str = "raw";
static BOTH_ARG: &str = "both";
static VERSION_ARG: &str = "version";
static VERSION: &str = crate_version!();

type StateInitializer<State, GlobalOpt> = Box<dyn FnOnce(&GlobalOpt) -> Result<State>>;
type OutputFormatAction = Box<dyn FnOnce(OutputFormat)>;

pub struct CmdContext<State, GlobalOpt>
where
    State: 'static,
    GlobalOpt: Parser + 'static,
{
    app: App<'static>,
    commands: HashMap<String, Box<dyn CommandExec<State, GlobalOpt>>>,
    state_initializer: StateInitializer<State, GlobalOpt>,
    output_format_action: Option<OutputFormatAction>,
}

impl<State, GlobalOpt> CmdContext<State, GlobalOpt>
where
    State: 'static,
    GlobalOpt: Parser + 'static,
{
    /// Init new CmdContext with State
    pub fn with_state(state: State) -> Self {
        Self::with_initializer(|_opts| Ok(state))
    }

    /// Init new CmdContext with state_initializer.
    /// The initializer runs once the global options are parsed.
    pub fn with_initializer<I>(state_initializer: I) -> Self
    where
        I: FnOnce(&GlobalOpt) -> Result<State> + 'static,
    {
        let app = GlobalOpt::command()
            .version(VERSION)
            .disable_version_flag(true)
            .arg(
                Arg::new(VERSION_ARG)
                    .short('v')
                    .long("version")
                    .action(ArgAction::Version)
                    .help("Print version information"),
            )
            .arg(
                Arg::new(JSON_ARG)
                    .short('j')
                    .long("json")
                    .global(true)
                    .help("Print the result as formatted json"),
            )
            .arg(
                Arg::new(RAW_ARG)
                    .short('r')
                    .long("raw")
                    .global(true)
                    .help("Print the result as unformatted json"),
            )
            .arg(
                Arg::new(BOTH_ARG)
                    .long("both")
                    .global(true)
                    .help("Print text to stdout and json to stderr"),
            );
        Self {
            app,
            commands: HashMap::new(),
            state_initializer: Box::new(state_initializer),
            output_format_action: None,
        }
    }

    /// Run `action` once the output format is parsed, before the state initializer.
    pub fn with_output_format_action<A>(mut self, action: A) -> Self
    where
        A: FnOnce(OutputFormat) + 'static,
    {
        self.output_format_action = Some(Box::new(action));
        self
    }

    /// # Panics
    /// A command name may only be registered once.
    pub fn command<Opt, ReturnItem, Action, CMD>(mut self, command: CMD) -> Self
    where
        Opt: Parser + 'static,
        ReturnItem: serde::Serialize + 'static,
        Action: CommandAction<State = State, GlobalOpt = GlobalOpt, Opt = Opt, ReturnItem = ReturnItem>
            + 'static,
        CMD: Into<Command<State, GlobalOpt, Opt, ReturnItem, Action>> + 'static,
    {
        let command = command.into();
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            panic!("Command with name {} exist.", name);
        }
        let order = self.commands.len();
        self.app = self
            .app
            .subcommand(command.app().clone().display_order(order));
        self.commands.insert(name, Box::new(command));
        self
    }

    /// Execute command by parse std::env::args_os() and print result.
    /// Help and usage errors are printed by clap, which then exits the process.
    /// Any other error is printed as `ERROR: ..` before it is returned.
    pub fn exec(self) -> Result<()> {
        let (output_format, result) = match self.exec_inner(std::env::args_os()) {
            Ok(ret) => ret,
            Err(e) => match e.downcast::<CmdError>() {
                Ok(CmdError::ClapError(clap_error)) => clap_error.exit(),
                Ok(cmd_error) => (OutputFormat::default(), Err(cmd_error.into())),
                Err(e) => (OutputFormat::default(), Err(e)),
            },
        };
        let result = print_action_result(output_format, result);
        if let Err(e) = result.as_ref() {
            print_action_error(output_format, e);
        }
        result
    }

    /// Execute command by args and return Command execute ReturnItem
    pub fn exec_with_args<ReturnItem>(self, args: Vec<&str>) -> Result<ReturnItem>
    where
        ReturnItem: for<'de> serde::Deserialize<'de> + serde::Serialize + 'static,
    {
        let (_output_format, result) = self.exec_inner(args)?;
        let value = result?;
        Ok(serde_json::from_value(value)?)
    }

    fn exec_inner<I, T>(mut self, iter: I) -> Result<(OutputFormat, Result<Value>)>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .app
            .try_get_matches_from_mut(iter)
            .map_err(CmdError::from)?;
        let output_format = output_format(&matches);
        if let Some(action) = self.output_format_action.take() {
            action(output_format);
        }
        let global_opt = GlobalOpt::from_arg_matches(&matches).map_err(CmdError::from)?;
        let state = match (self.state_initializer)(&global_opt) {
            Ok(state) => state,
            Err(e) => return Ok((output_format, Err(e))),
        };

        let result = match matches.subcommand() {
            None => {
                self.app.print_long_help()?;
                Ok(Value::Null)
            }
            Some((cmd_name, arg_matches)) => match self.commands.get_mut(cmd_name) {
                Some(cmd) => cmd.exec(Arc::new(state), Arc::new(global_opt), arg_matches),
                None => Err(CmdError::InvalidCommand {
                    cmd: cmd_name.to_string(),
                    help: help_message(&mut self.app)?,
                }
                .into()),
            },
        };
        Ok((output_format, result))
    }
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    OutputFormat::from_flags(
        matches.is_present(JSON_ARG),
        matches.is_present(RAW_ARG),
        matches.is_present(BOTH_ARG),
    )
}
