//! Compilation configuration: the flag record the driver builds from the
//! command line, and the policy enums downstream stages read from it.

pub mod options;
pub mod policy;

pub use options::CompilationConfig;
pub use policy::{
    CheckAction, CheckEnable, CppMangle, DeprecationMode, InlinePolicy, Linkage, MatchLevel,
    OutputKind, StructAlign, TargetCpu, WarningMode,
};
