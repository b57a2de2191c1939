use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use tokio::fs::read_to_string;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::{JavaProcess, JavaRuntime, split_args};

/// File name of a launch profile.
pub const PROFILE_FILE: &str = "javaproc.toml";

/// JVM optimization flags added when `vm-opt-args` is enabled.
pub const VM_OPT_ARGS: [&str; 9] = [
    "-XX:+UnlockExperimentalVMOptions",
    "-XX:+UseG1GC",
    "-XX:G1NewSizePercent=20",
    "-XX:G1ReservePercent=20",
    "-XX:MaxGCPauseMillis=50",
    "-XX:G1HeapRegionSize=32m",
    "-XX:-UseAdaptiveSizePolicy",
    "-XX:-OmitStackTraceInFastThrow",
    "-XX:-DontCompileHugeMethods",
];

/// Defines how a java process is launched.
///
/// This is stored in `javaproc.toml`.
#[serde_inline_default]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Profile {
    /// Fully qualified name of the class to run.
    pub main_class: String,

    /// Classpath entries, relative paths are resolved against the profile directory.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classpath: Vec<PathBuf>,

    /// Directories whose `.jar` files are appended to the classpath.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classpath_dirs: Vec<PathBuf>,

    /// Flags passed to the java runtime.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,

    /// Additional flags written as a single command line string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_flags: String,

    /// Arguments passed to the main class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Additional arguments written as a single command line string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_args: String,

    /// Whether to add JVM optimization arguments.
    #[serde_inline_default(false)]
    pub vm_opt_args: bool,

    /// Whether to pass the assembled classpath through `-cp`.
    #[serde_inline_default(true)]
    pub add_classpath_flag: bool,

    #[serde(default)]
    pub memory: Memory,

    /// Java runtime to use. If unspecified, `java` is taken from the search path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<JavaRuntime>,
}

/// Memory sizes in megabytes, `0` means unset.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Memory {
    #[serde(default)]
    pub min: u32,
    #[serde(default)]
    pub max: u32,
    #[serde(default)]
    pub perm_gen: u32,
}

impl Profile {
    pub async fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let toml = read_to_string(dir.join(PROFILE_FILE)).await?;
        let val = toml::from_str(&toml)?;
        Ok(val)
    }

    /// Given a certain path, retrive the directory of the profile it belongs to.
    pub fn find_dir(start: impl AsRef<Path>) -> Option<PathBuf> {
        let curr = start.as_ref();
        if curr.join(PROFILE_FILE).exists() {
            return Some(curr.into());
        }
        curr.parent().and_then(Self::find_dir)
    }

    /// All classpath entries, explicit ones first, then the scanned jars.
    pub fn java_class_path(&self, dir: impl AsRef<Path>) -> anyhow::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut cp = self
            .classpath
            .iter()
            .map(|p| dir.join(p))
            .collect::<Vec<_>>();
        for lib in &self.classpath_dirs {
            let mut jars = vec![];
            for e in WalkDir::new(dir.join(lib)) {
                let e = e?;
                if e.file_type().is_file()
                    && e.path().extension().is_some_and(|ext| ext == "jar")
                {
                    jars.push(e.into_path());
                }
            }
            // directory traversal order is platform dependent
            jars.sort();
            debug!("found {} jars in {lib:?}", jars.len());
            cp.extend(jars);
        }
        Ok(cp)
    }

    /// Convert into a [`JavaProcess`], resolving relative paths against `dir`.
    #[instrument(skip(self, dir), fields(main_class = %self.main_class))]
    pub fn to_process(&self, dir: impl AsRef<Path>) -> anyhow::Result<JavaProcess> {
        let dir = dir.as_ref();

        let java = self
            .java
            .as_ref()
            .map(|java| JavaRuntime::new(dir.join(&java.dir), java.major_version));

        let mut proc = JavaProcess::new(&self.main_class)
            .runtime(java)
            .min_memory(self.memory.min)
            .max_memory(self.memory.max)
            .perm_gen(self.memory.perm_gen)
            .classpaths(self.java_class_path(dir)?);

        if self.vm_opt_args {
            proc = proc.flags(VM_OPT_ARGS);
        }
        proc = proc
            .flags(self.flags.iter().cloned())
            .flags(split_args(&self.extra_flags));
        if self.add_classpath_flag && !proc.get_classpath().is_empty() {
            let cp = proc.build_classpath()?;
            proc = proc.flag("-cp").flag(cp);
        }

        proc = proc
            .args(self.args.iter().cloned())
            .args(split_args(&self.extra_args));

        debug!("loaded {} classpath entries", proc.get_classpath().len());
        Ok(proc)
    }
}
