use serde::Serialize;

/// Which compilation the driver runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilationMode {
    /// Full compilation of each source into its final artifact.
    #[default]
    Standard,
    /// `-quick`: intermediate artifact, checking deferred.
    Partial,
    /// `-vio2vo`: turn a partial artifact into a final one.
    PartialToFinal,
}

impl CompilationMode {
    /// The option that selects this mode.
    pub fn option_name(self) -> &'static str {
        match self {
            CompilationMode::Standard => "(default)",
            CompilationMode::Partial => "-quick",
            CompilationMode::PartialToFinal => "-vio2vo",
        }
    }
}

/// Where symbol/location (glob) information goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobOutput {
    /// Disabled (`-no-glob`).
    None,
    /// One dump file next to each compiled file.
    #[default]
    MultiFile,
    /// Everything into the given file (`-dump-glob`).
    SingleFile(String),
}

/// One file to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileTarget {
    pub path: String,
    pub verbose: bool,
}

/// Explicit partial-checking tasks for one file (`-check-vio-tasks`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VioTask {
    pub task_ids: Vec<usize>,
    pub task_file: String,
}

/// Finalized driver configuration.
///
/// Built by [`crate::args::parse_command_line`]; read-only afterwards.
/// All list fields are in command-line encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverConfig {
    pub compilation_mode: CompilationMode,
    pub compile_list: Vec<CompileTarget>,
    /// Last `-o` wins.
    pub output_name: Option<String>,
    pub vio_checking: bool,
    pub vio_tasks: Vec<VioTask>,
    pub vio_files: Vec<String>,
    /// 0 means unset (sequential).
    pub vio_files_concurrency: usize,
    /// Default verbosity of files added to the compile list.
    pub echo_all: bool,
    /// Deprecated. Last `-outputstate` wins.
    pub output_state_file: Option<String>,
    pub glob_output: GlobOutput,
}
