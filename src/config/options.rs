//! The command-line-shaped compilation configuration record.

use serde::{Deserialize, Serialize};

use crate::config::policy::{
    CheckAction, CheckEnable, DeprecationMode, OutputKind, StructAlign, TargetCpu, WarningMode,
};

/// Everything the driver selected for one compilation invocation.
///
/// Built once by the driver, immutable afterwards; every later stage reads
/// the fields it cares about and nothing else. The diagnostics core reads
/// exactly `error_limit`, `warnings`, `show_gagged_errors`, and
/// `show_columns`; the rest is carried for the lexer, parser, semantic
/// analyzer, code generator, and linker driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilationConfig {
    // Output artifacts.
    pub object_output: OutputKind,
    pub perform_link: bool,
    pub shared_library: bool,
    pub static_library: bool,
    pub one_object: bool,
    pub multi_object: bool,
    pub object_dir: Option<String>,
    pub object_name: Option<String>,
    pub library_name: Option<String>,
    pub map_file: bool,

    // Linker inputs.
    pub object_files: Vec<String>,
    pub library_files: Vec<String>,
    pub linker_switches: Vec<String>,
    pub default_library: Option<String>,
    pub debug_library: Option<String>,

    // Verbosity and identification passes.
    pub verbose: bool,
    pub color: bool,
    pub show_columns: bool,
    pub print_ast: bool,
    pub identify_tls: bool,
    pub identify_gc_allocations: bool,
    pub identify_fields: bool,

    // Code generation policy.
    pub optimize: bool,
    pub release: bool,
    pub inline_expand: bool,
    pub position_independent: bool,
    pub always_frame: bool,
    pub stack_stomp: bool,
    pub coverage: bool,
    /// Required coverage percentage, 0..=100.
    pub coverage_percent: u8,
    pub profile_instrument: bool,
    pub target_64bit: bool,
    pub cpu: TargetCpu,
    pub struct_align: StructAlign,

    // Language checks.
    pub bounds_check: CheckEnable,
    pub assert_check: CheckEnable,
    pub switch_error_check: CheckEnable,
    pub check_action: CheckAction,
    pub use_invariants: bool,
    pub use_preconditions: bool,
    pub use_postconditions: bool,
    pub use_unit_tests: bool,
    pub deprecations: DeprecationMode,

    // Diagnostics policy (the part the core reads).
    /// Errors after which compilation aborts; 0 means unlimited.
    pub error_limit: u32,
    pub warnings: WarningMode,
    /// Print gagged errors anyway, flagged as speculative.
    pub show_gagged_errors: bool,

    // Documentation, header, and JSON generation.
    pub doc_generation: bool,
    pub doc_dir: Option<String>,
    pub doc_name: Option<String>,
    pub header_generation: bool,
    pub header_dir: Option<String>,
    pub header_name: Option<String>,
    pub header_strip_plain_functions: bool,
    pub json_generation: bool,
    pub json_file_name: Option<String>,
    pub json_field_flags: u32,

    // Conditional compilation.
    pub debug_level: u32,
    pub debug_identifiers: Vec<String>,
    pub version_level: u32,
    pub version_identifiers: Vec<String>,

    // Import resolution.
    pub import_paths: Vec<String>,
    pub file_import_paths: Vec<String>,
    /// Keep source paths on file names instead of stripping them.
    pub preserve_paths: bool,
}

impl Default for CompilationConfig {
    fn default() -> Self {
        Self {
            object_output: OutputKind::Implied,
            perform_link: true,
            shared_library: false,
            static_library: false,
            one_object: false,
            multi_object: false,
            object_dir: None,
            object_name: None,
            library_name: None,
            map_file: false,

            object_files: Vec::new(),
            library_files: Vec::new(),
            linker_switches: Vec::new(),
            default_library: None,
            debug_library: None,

            verbose: false,
            color: false,
            show_columns: false,
            print_ast: false,
            identify_tls: false,
            identify_gc_allocations: false,
            identify_fields: false,

            optimize: false,
            release: false,
            inline_expand: false,
            position_independent: false,
            always_frame: false,
            stack_stomp: false,
            coverage: false,
            coverage_percent: 0,
            profile_instrument: false,
            target_64bit: true,
            cpu: TargetCpu::Baseline,
            struct_align: StructAlign::Default,

            bounds_check: CheckEnable::Unspecified,
            assert_check: CheckEnable::Unspecified,
            switch_error_check: CheckEnable::Unspecified,
            check_action: CheckAction::Halt,
            use_invariants: true,
            use_preconditions: true,
            use_postconditions: true,
            use_unit_tests: false,
            deprecations: DeprecationMode::Warn,

            error_limit: 20,
            warnings: WarningMode::Informational,
            show_gagged_errors: false,

            doc_generation: false,
            doc_dir: None,
            doc_name: None,
            header_generation: false,
            header_dir: None,
            header_name: None,
            header_strip_plain_functions: false,
            json_generation: false,
            json_file_name: None,
            json_field_flags: 0,

            debug_level: 0,
            debug_identifiers: Vec::new(),
            version_level: 0,
            version_identifiers: Vec::new(),

            import_paths: Vec::new(),
            file_import_paths: Vec::new(),
            preserve_paths: false,
        }
    }
}

impl CompilationConfig {
    pub fn warnings_as_errors(&self) -> bool {
        self.warnings == WarningMode::AsErrors
    }

    /// Directories searched for imported modules, in search order. The
    /// storage is owned here; consumers only ever see the borrowed slice.
    pub fn imports(&self) -> &[String] {
        &self.import_paths
    }

    /// Directories searched for file imports, in search order.
    pub fn file_imports(&self) -> &[String] {
        &self.file_import_paths
    }
}
