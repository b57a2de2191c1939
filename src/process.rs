use std::{
    path::{PathBuf, absolute},
    process::Command,
};

use crate::{LaunchError, Runtime, quirk::PERM_GEN, runtime::path_to_string};

/// Separator between classpath entries on the host platform.
pub const CLASSPATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Description of a java process to launch.
///
/// Every accumulation method consumes the value and returns the updated one, so
/// a `JavaProcess` is never shared in a half configured state:
///
/// ```
/// use javaproc::JavaProcess;
///
/// let cmd = JavaProcess::new("net.minecraft.client.main.Main")
///     .max_memory(1024)
///     .flag("-Dfile.encoding=UTF-8")
///     .arg("--demo")
///     .build_command()
///     .unwrap();
/// assert_eq!(
///     cmd,
///     ["java", "-Dfile.encoding=UTF-8", "-Xmx1024M", "net.minecraft.client.main.Main", "--demo"]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JavaProcess {
    runtime: Runtime,
    min_memory: u32,
    max_memory: u32,
    perm_gen: u32,
    classpath: Vec<PathBuf>,
    flags: Vec<String>,
    args: Vec<String>,
    main_class: String,
}

impl JavaProcess {
    pub fn new(main_class: impl Into<String>) -> Self {
        Self {
            main_class: main_class.into(),
            ..Default::default()
        }
    }

    pub fn runtime(mut self, runtime: impl Into<Runtime>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Initial heap size in megabytes, `0` leaves it to the runtime.
    pub fn min_memory(mut self, megabytes: u32) -> Self {
        self.min_memory = megabytes;
        self
    }

    /// Maximum heap size in megabytes, `0` leaves it to the runtime.
    pub fn max_memory(mut self, megabytes: u32) -> Self {
        self.max_memory = megabytes;
        self
    }

    /// Permanent generation size in megabytes, only honored before java 8.
    pub fn perm_gen(mut self, megabytes: u32) -> Self {
        self.perm_gen = megabytes;
        self
    }

    pub fn main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = main_class.into();
        self
    }

    /// Append a classpath entry. Order is kept, duplicates are allowed.
    pub fn classpath(mut self, path: impl Into<PathBuf>) -> Self {
        self.classpath.push(path.into());
        self
    }

    pub fn classpaths<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.classpath.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Append a flag passed to the runtime before the main class.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn flags<S: Into<String>>(mut self, flags: impl IntoIterator<Item = S>) -> Self {
        self.flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Append a program argument passed after the main class.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn get_runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn get_min_memory(&self) -> u32 {
        self.min_memory
    }

    pub fn get_max_memory(&self) -> u32 {
        self.max_memory
    }

    pub fn get_perm_gen(&self) -> u32 {
        self.perm_gen
    }

    pub fn get_classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    pub fn get_flags(&self) -> &[String] {
        &self.flags
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_main_class(&self) -> &str {
        &self.main_class
    }

    /// Join the absolute forms of all classpath entries with [`CLASSPATH_SEPARATOR`].
    ///
    /// Fails with [`LaunchError::NonUnicodePath`] if an entry is not valid unicode.
    /// The classpath is not added to [`Self::build_command`] automatically, pass it
    /// through `-cp` with [`Self::flag`] where needed.
    pub fn build_classpath(&self) -> Result<String, LaunchError> {
        let entries = self
            .classpath
            .iter()
            // an entry that can not be made absolute is kept as given
            .map(|p| absolute(p).unwrap_or_else(|_| p.clone()))
            .map(path_to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries.join(CLASSPATH_SEPARATOR))
    }

    /// Runtime flags derived from the memory settings.
    pub fn memory_flags(&self) -> Vec<String> {
        let mut flags = vec![];
        if self.min_memory > 0 {
            flags.push(format!("-Xms{}M", self.min_memory));
        }
        if self.max_memory > 0 {
            flags.push(format!("-Xmx{}M", self.max_memory));
        }
        if self.perm_gen > 0 && PERM_GEN.allows(self.runtime.major_version()) {
            flags.push(format!("-XX:MaxPermSize={}M", self.perm_gen));
        }
        flags
    }

    /// Assemble the full argument vector, executable included.
    ///
    /// The order is: executable, flags, memory flags, main class, arguments.
    pub fn build_command(&self) -> Result<Vec<String>, LaunchError> {
        if self.main_class.trim().is_empty() {
            return Err(LaunchError::InvalidConfiguration(
                "main class is not set".into(),
            ));
        }

        let mut cmd = vec![self.runtime.executable()?];
        cmd.extend(self.flags.iter().cloned());
        cmd.extend(self.memory_flags());
        cmd.push(self.main_class.clone());
        cmd.extend(self.args.iter().cloned());
        Ok(cmd)
    }

    /// An unspawned [`Command`] running [`Self::build_command`].
    pub fn command(&self) -> Result<Command, LaunchError> {
        let argv = self.build_command()?;
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| LaunchError::InvalidConfiguration("empty command line".into()))?;
        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }
}
