/// Suffix MSBuild gives per-target intermediate directories (`foo.dir`)
pub const INTERMEDIATE_DIR_SUFFIX: &str = ".dir";

/// Suffix of the tracker log directory inside an intermediate directory (`foo.tlog`)
pub const LOG_DIR_SUFFIX: &str = ".tlog";

/// File name prefix of compiler command logs (`CL.command.1.tlog`)
pub const COMMAND_LOG_PREFIX: &str = "CL.command";

/// Compiler executable; the logs only record its arguments
pub const COMPILER_EXECUTABLE: &str = "cl.exe";

/// Name of the generated database, written into the build root
pub const OUTPUT_FILE_NAME: &str = "compile_commands.json";

/// Naming conventions of the build tree produced by the toolchain.
///
/// These are dictated by MSBuild and must match it exactly; [`Default`]
/// returns the MSBuild values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainLayout {
    pub intermediate_dir_suffix: String,
    pub log_dir_suffix: String,
    pub command_log_prefix: String,
    pub compiler: String,
    pub output_file_name: String,
}

impl Default for ToolchainLayout {
    fn default() -> Self {
        Self {
            intermediate_dir_suffix: INTERMEDIATE_DIR_SUFFIX.to_string(),
            log_dir_suffix: LOG_DIR_SUFFIX.to_string(),
            command_log_prefix: COMMAND_LOG_PREFIX.to_string(),
            compiler: COMPILER_EXECUTABLE.to_string(),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl ToolchainLayout {
    pub fn is_intermediate_dir(&self, name: &str) -> bool {
        name.ends_with(&self.intermediate_dir_suffix)
    }

    pub fn is_log_dir(&self, name: &str) -> bool {
        name.ends_with(&self.log_dir_suffix)
    }

    pub fn is_command_log(&self, name: &str) -> bool {
        name.starts_with(&self.command_log_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_msbuild() {
        let layout = ToolchainLayout::default();
        assert!(layout.is_intermediate_dir("hello.dir"));
        assert!(layout.is_log_dir("hello.tlog"));
        assert!(layout.is_command_log("CL.command.1.tlog"));
        assert_eq!(layout.compiler, "cl.exe");
        assert_eq!(layout.output_file_name, "compile_commands.json");
    }

    #[test]
    fn test_name_matching_is_case_sensitive() {
        let layout = ToolchainLayout::default();
        assert!(!layout.is_intermediate_dir("hello.DIR"));
        assert!(!layout.is_log_dir("hello.TLOG"));
        assert!(!layout.is_command_log("cl.command.1.tlog"));
    }

    #[test]
    fn test_command_log_prefix_excludes_other_logs() {
        let layout = ToolchainLayout::default();
        assert!(!layout.is_command_log("CL.read.1.tlog"));
        assert!(!layout.is_command_log("CL.write.1.tlog"));
        assert!(!layout.is_command_log("link.command.1.tlog"));
    }
}
