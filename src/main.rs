mod cmd;

use std::{
    env::current_dir,
    ops::Deref,
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use anyhow::anyhow;
use clap::Parser;
use javaproc::{JavaProcess, Profile};
use stop::fatal;
use tokio::runtime;
use tracing::{Level, debug, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::{Execute, SubCommand};

pub struct JavaprocInner {
    pub args: JavaprocConfig,
    profile_dir: OnceLock<PathBuf>,
    profile: OnceLock<Profile>,
}

#[derive(Clone)]
pub struct Javaproc(Arc<JavaprocInner>);

impl Deref for Javaproc {
    type Target = JavaprocInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Javaproc {
    pub fn new(args: JavaprocConfig) -> Self {
        let val = JavaprocInner {
            args,
            profile_dir: OnceLock::new(),
            profile: OnceLock::new(),
        };
        Self(Arc::new(val))
    }

    pub fn working_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.args.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(current_dir()?),
        }
    }

    pub fn profile_dir(&self) -> anyhow::Result<&PathBuf> {
        if let Some(dir) = self.profile_dir.get() {
            return Ok(dir);
        }
        let wd = self.working_dir()?;
        let found = Profile::find_dir(wd).ok_or(anyhow!("no launch profile found"))?;
        debug!("using launch profile in {found:?}");
        Ok(self.profile_dir.get_or_init(|| found))
    }

    pub async fn profile(&self) -> anyhow::Result<&Profile> {
        if let Some(profile) = self.profile.get() {
            return Ok(profile);
        }
        let profile = Profile::load(self.profile_dir()?).await?;
        Ok(self.profile.get_or_init(|| profile))
    }

    pub async fn process(&self) -> anyhow::Result<JavaProcess> {
        let profile = self.profile().await?;
        profile.to_process(self.profile_dir()?)
    }

    pub async fn execute(&self, cmd: impl Execute) -> anyhow::Result<()> {
        Execute::execute(self, cmd).await
    }
}

#[derive(Clone, Debug, Parser)]
pub struct JavaprocConfig {
    /// Directory to start looking for a launch profile from.
    ///
    /// If not specified, would recursively look up parent directory from current directory until a `javaproc.toml` is found.
    #[arg(name = "dir", short, long)]
    pub working_dir: Option<PathBuf>,
}

/// Java process command line builder.
#[derive(Clone, Debug, Parser)]
#[command(version)]
struct Args {
    #[clap(flatten)]
    cfg: JavaprocConfig,
    /// Set the log filtering level.
    #[arg(name = "loglevel", long, default_value_t = Level::INFO)]
    log_level: Level,
    /// Use verbose output, equivalent to overriding log level to DEBUG.
    #[arg(short, long)]
    verbose: bool,
    /// Use noisy output, equivalent to overriding log level to TRACE.
    #[arg(short, long)]
    noisy: bool,
    #[command(subcommand)]
    cmd: SubCommand,
}

fn main() {
    let Args {
        cfg,
        cmd,
        log_level,
        verbose,
        noisy,
    } = Args::parse();
    let log_level = if noisy {
        Level::TRACE
    } else if verbose {
        Level::DEBUG
    } else {
        log_level
    };
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(log_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    let run = runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(fatal!());
    let javaproc = Javaproc::new(cfg);
    run.block_on(javaproc.execute(cmd)).unwrap_or_else(fatal!());
}
