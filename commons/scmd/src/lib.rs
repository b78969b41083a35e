// Copyright (c) The Teos Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::marker::PhantomData;

mod command;
mod context;
pub mod error;
mod result;
#[cfg(test)]
mod tests;

pub(crate) use command::CommandExec;
pub use command::{Command, ExecContext};
pub use context::CmdContext;
pub use error::CmdError;
pub use result::{
    format_text, print_action_error, print_action_result, write_action_error, write_action_result,
    OutputFormat,
};

#[derive(Debug, Clone, Default, Parser)]
pub struct EmptyOpt {}

/// One executable command: parsed `Opt` in, serializable `ReturnItem` out.
pub trait CommandAction {
    type State;
    type GlobalOpt: Parser;
    type Opt: Parser;
    type ReturnItem: Serialize;

    fn run(
        &self,
        ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>,
    ) -> Result<Self::ReturnItem>;
}

type ActionFn<State, GlobalOpt, Opt, ReturnItem> =
    Box<dyn Fn(&ExecContext<State, GlobalOpt, Opt>) -> Result<ReturnItem>>;

pub struct FnCommandAction<State, GlobalOpt, Opt, ReturnItem>
where
    State: 'static,
    GlobalOpt: Parser + 'static,
    Opt: Parser + 'static,
    ReturnItem: Serialize + 'static,
{
    action: ActionFn<State, GlobalOpt, Opt, ReturnItem>,
}

impl<State, GlobalOpt, Opt, ReturnItem> FnCommandAction<State, GlobalOpt, Opt, ReturnItem>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: Serialize,
{
    pub fn new<A>(action: A) -> Self
    where
        A: Fn(&ExecContext<State, GlobalOpt, Opt>) -> Result<ReturnItem> + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }
}

impl<State, GlobalOpt, Opt, ReturnItem> CommandAction
    for FnCommandAction<State, GlobalOpt, Opt, ReturnItem>
where
    GlobalOpt: Parser,
    Opt: Parser,
    ReturnItem: Serialize,
{
    type State = State;
    type GlobalOpt = GlobalOpt;
    type Opt = Opt;
    type ReturnItem = ReturnItem;

    fn run(
        &self,
        ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>,
    ) -> Result<Self::ReturnItem> {
        (self.action)(ctx)
    }
}

/// Placeholder action of a command group such as `create`, which only holds subcommands.
pub struct NoneAction<State, GlobalOpt>
where
    State: 'static,
    GlobalOpt: Parser + 'static,
{
    state_type: PhantomData<State>,
    global_opt_type: PhantomData<GlobalOpt>,
}

impl<State, GlobalOpt> CommandAction for NoneAction<State, GlobalOpt>
where
    GlobalOpt: Parser,
{
    type State = State;
    type GlobalOpt = GlobalOpt;
    type Opt = EmptyOpt;
    type ReturnItem = ();

    fn run(
        &self,
        _ctx: &ExecContext<Self::State, Self::GlobalOpt, Self::Opt>,
    ) -> Result<Self::ReturnItem> {
        Ok(())
    }
}
