// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::CmdError;
use crate::{CommandAction, EmptyOpt, FnCommandAction, NoneAction};
use anyhow::Result;
use clap::{ArgMatches, Command as App, Parser};
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

pub(crate) trait CommandExec<State, GlobalOpt>
where
    GlobalOpt: Parser + 'static,
    State: 'static,
{
    fn exec(
        &mut self,
        state: Arc<State>,
        global_opt: Arc<GlobalOpt>,
        arg_matches: &ArgMatches,
    ) -> Result<Value>;
}

pub struct ExecContext<State, GlobalOpt, Opt>
where
    State: 'static,
    GlobalOpt: Parser + 'static,
    Opt: Parser + 'static,
{
    state: Arc<State>,
    global_opt: Arc<GlobalOpt>,
    opt: Arc<Opt>,
}

impl<State, GlobalOpt, Opt> ExecContext<State, GlobalOpt, Opt>
where
    GlobalOpt: Parser,
    Opt: Parser,
{
    pub fn new(state: Arc<State>, global_opt: Arc<GlobalOpt>, opt: Arc<Opt>) -> Self {
        Self {
            state,
            global_opt,
            opt,
        }
    }

    pub fn global_opt(&self) -> &GlobalOpt {
        self.global_opt.as_ref()
    }

    pub fn state(&self) -> &State {
        self.state.as_ref()
    }

    pub fn opt(&self) -> &Opt {
        self.opt.as_ref()
    }
}

pub struct Command<State, GlobalOpt, Opt, ReturnItem, Action>
where
    GlobalOpt: Parser + 'static,
    State: 'static,
    Opt: Parser + 'static,
    ReturnItem: serde::Serialize + 'static,
    Action: CommandAction<State = State, GlobalOpt = GlobalOpt, Opt = Opt, ReturnItem = ReturnItem>
        + 'static,
{
    app: App<'static>,
    action: Option<Action>,
    subcommands: HashMap<String, Box<dyn CommandExec<State, GlobalOpt>>>,
    global_opt: PhantomData<GlobalOpt>,
    opt_type: PhantomData<Opt>,
}

impl<State, GlobalOpt> Command<State, GlobalOpt, EmptyOpt, (), NoneAction<State, GlobalOpt>>
where
    GlobalOpt: Parser,
{
    pub fn with_name(name: &'static str) -> Self {
        Self {
            app: App::new(name),
            action: None,
            subcommands: HashMap::new(),
            global_opt: PhantomData,
            opt_type: PhantomData,
        }
    }
}

impl<State, GlobalOpt, Opt, ReturnItem>
    Command<State, GlobalOpt, Opt, ReturnItem, FnCommandAction<State, GlobalOpt, Opt, ReturnItem>>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: serde::Serialize,
{
    pub fn with_action_fn<A>(action: A) -> Self
    where
        A: Fn(&ExecContext<State, GlobalOpt, Opt>) -> Result<ReturnItem> + 'static,
    {
        Self::with_action(FnCommandAction::new(action))
    }
}

impl<State, GlobalOpt, Opt, ReturnItem, Action> Command<State, GlobalOpt, Opt, ReturnItem, Action>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: serde::Serialize + 'static,
    Action: CommandAction<State = State, GlobalOpt = GlobalOpt, Opt = Opt, ReturnItem = ReturnItem>,
{
    pub fn with_action(action: Action) -> Self {
        Self {
            app: Opt::command(),
            action: Some(action),
            subcommands: HashMap::new(),
            global_opt: PhantomData,
            opt_type: PhantomData,
        }
    }

    pub fn with_about(mut self, about: &'static str) -> Self {
        self.app = self.app.about(about);
        self
    }

    pub fn name(&self) -> &str {
        self.app.get_name()
    }

    pub fn app(&self) -> &App<'static> {
        &self.app
    }

    /// # Panics
    /// A subcommand name may only be registered once.
    pub fn subcommand<SubOpt, SubReturnItem, SubAction, CMD>(mut self, subcommand: CMD) -> Self
    where
        SubOpt: Parser + 'static,
        SubReturnItem: serde::Serialize + 'static,
        SubAction: CommandAction<
                State = State,
                GlobalOpt = GlobalOpt,
                Opt = SubOpt,
                ReturnItem = SubReturnItem,
            > + 'static,
        CMD: Into<Command<State, GlobalOpt, SubOpt, SubReturnItem, SubAction>> + 'static,
    {
        let subcommand = subcommand.into();
        let name = subcommand.name().to_string();
        if self.subcommands.contains_key(&name) {
            panic!("Subcommand with name {} exist.", name);
        }
        let order = self.subcommands.len();
        self.app = self
            .app
            .subcommand(subcommand.app().clone().display_order(order));
        self.subcommands.insert(name, Box::new(subcommand));
        self
    }

    pub fn has_subcommand(&self) -> bool {
        !self.subcommands.is_empty()
    }

    pub fn help_message(&mut self) -> Result<String> {
        help_message(&mut self.app)
    }

    fn exec_action(&mut self, ctx: &ExecContext<State, GlobalOpt, Opt>) -> Result<Value> {
        match &self.action {
            Some(action) => {
                let ret = action.run(ctx)?;
                Ok(serde_json::to_value(ret)?)
            }
            None => Err(CmdError::NeedHelp {
                help: self.help_message()?,
            }
            .into()),
        }
    }
}

pub(crate) fn help_message(app: &mut App<'static>) -> Result<String> {
    let mut help_message = vec![];
    app.write_long_help(&mut help_message)?;
    Ok(String::from_utf8(help_message)?)
}

impl<State, GlobalOpt, Opt, ReturnItem, Action> CommandExec<State, GlobalOpt>
    for Command<State, GlobalOpt, Opt, ReturnItem, Action>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: serde::Serialize + 'static,
    Action: CommandAction<State = State, GlobalOpt = GlobalOpt, Opt = Opt, ReturnItem = ReturnItem>,
{
    fn exec(
        &mut self,
        state: Arc<State>,
        global_opt: Arc<GlobalOpt>,
        arg_matches: &ArgMatches,
    ) -> Result<Value> {
        let opt = Arc::new(Opt::from_arg_matches(arg_matches).map_err(CmdError::from)?);
        let ctx = ExecContext::new(state, global_opt, opt);
        match arg_matches.subcommand() {
            Some((subcmd_name, subcmd_matches)) if self.has_subcommand() => {
                match self.subcommands.get_mut(subcmd_name) {
                    Some(subcmd) => subcmd.exec(ctx.state, ctx.global_opt, subcmd_matches),
                    None => Err(CmdError::InvalidCommand {
                        cmd: subcmd_name.to_string(),
                        help: self.help_message()?,
                    }
                    .into()),
                }
            }
            _ => self.exec_action(&ctx),
        }
    }
}

impl<C, State, GlobalOpt, Opt, ReturnItem> From<C>
    for Command<C::State, C::GlobalOpt, C::Opt, C::ReturnItem, C>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: serde::Serialize,
    C: CommandAction<State = State, GlobalOpt = GlobalOpt, Opt = Opt, ReturnItem = ReturnItem>,
{
    fn from(action: C) -> Self {
        Command::with_action(action)
    }
}
