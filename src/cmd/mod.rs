use clap::Parser;

use crate::{
    Javaproc,
    cmd::show::{Classpath, Command, Show, Split},
};

mod show;

#[derive(Clone, Debug, Parser)]
pub enum SubCommand {
    Command(Command),
    Classpath(Classpath),
    Split(Split),
    Show(Show),
}

pub trait Execute {
    fn execute(
        lib: &Javaproc,
        cmd: Self,
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

impl Execute for SubCommand {
    async fn execute(lib: &Javaproc, cmd: Self) -> anyhow::Result<()> {
        match cmd {
            SubCommand::Command(command) => lib.execute(command).await,
            SubCommand::Classpath(classpath) => lib.execute(classpath).await,
            SubCommand::Split(split) => lib.execute(split).await,
            SubCommand::Show(show) => lib.execute(show).await,
        }
    }
}
