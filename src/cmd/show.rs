use clap::Parser;
use javaproc::split_args;
use tracing::info;

use crate::{Javaproc, cmd::Execute};

/// Print the command line for the current launch profile.
#[derive(Clone, Debug, Parser)]
pub struct Command {
    /// Print as a JSON array instead of one argument per line.
    #[arg(long)]
    json: bool,
}

impl Execute for Command {
    async fn execute(lib: &Javaproc, cmd: Self) -> anyhow::Result<()> {
        let argv = lib.process().await?.build_command()?;
        info!("built command line of {} arguments", argv.len());
        println!("{}", render_args(&argv, cmd.json)?);
        Ok(())
    }
}

/// One argument per line, or a pretty printed JSON array.
fn render_args(args: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(args)?);
    }
    Ok(args.join("\n"))
}

/// Print the classpath for the current launch profile.
#[derive(Clone, Debug, Parser)]
pub struct Classpath;

impl Execute for Classpath {
    async fn execute(lib: &Javaproc, _cmd: Self) -> anyhow::Result<()> {
        let cp = lib.process().await?.build_classpath()?;
        println!("{cp}");
        Ok(())
    }
}

/// Split a string into arguments the way profile `extra-args` are split.
#[derive(Clone, Debug, Parser)]
pub struct Split {
    /// The string to split.
    #[arg(value_name = "INPUT")]
    input: String,
}

impl Execute for Split {
    async fn execute(_lib: &Javaproc, cmd: Self) -> anyhow::Result<()> {
        println!("{}", render_args(&split_args(&cmd.input), false)?);
        Ok(())
    }
}

/// Load the current launch profile and print it.
#[derive(Clone, Debug, Parser)]
pub struct Show;

impl Execute for Show {
    async fn execute(lib: &Javaproc, _cmd: Self) -> anyhow::Result<()> {
        let profile = lib.profile().await?;
        let toml = toml::to_string_pretty(profile)?;
        println!("{toml}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_argument_per_line() {
        let args = split_args(r#"java -Xmx1G "My Main" --demo"#);
        assert_eq!(
            render_args(&args, false).unwrap(),
            "java\n-Xmx1G\nMy Main\n--demo"
        );
    }

    #[test]
    fn json_array() {
        let args = vec!["java".to_string(), "a \"b\"".to_string()];
        let out = render_args(&args, true).unwrap();
        assert_eq!(serde_json::from_str::<Vec<String>>(&out).unwrap(), args);
        assert!(out.starts_with("[\n"));
    }
}
