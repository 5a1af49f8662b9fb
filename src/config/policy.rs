//! Policy enums read by the downstream compilation stages.
//!
//! Each toggle that used to be an integral tag with a zero-valued
//! "default" sentinel is a proper sum type here, with an explicit
//! unspecified variant where "resolve from context" is a real state.

use serde::{Deserialize, Serialize};

/// When to insert a category of runtime check (array bounds, asserts,
/// switch defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckEnable {
    /// Not set on the command line; resolve from context (release mode,
    /// safety of the enclosing function).
    #[default]
    Unspecified,
    /// Never insert the check.
    Off,
    /// Always insert the check.
    On,
    /// Insert the check only inside safe functions.
    SafeOnly,
}

impl CheckEnable {
    /// Resolve the unspecified state against a context-supplied default.
    pub fn resolved(self, context_default: CheckEnable) -> CheckEnable {
        match self {
            CheckEnable::Unspecified => context_default,
            other => other,
        }
    }
}

/// What a failed runtime check does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckAction {
    /// Raise the language's own check-failure path.
    #[default]
    Halt,
    /// Call the host C runtime's assert machinery.
    HostAssert,
}

/// Instruction set to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetCpu {
    X87,
    Mmx,
    Sse,
    Sse2,
    Sse3,
    Ssse3,
    Sse4_1,
    Sse4_2,
    Avx,
    Avx2,
    Avx512,
    /// The minimum capability CPU. Command-line-only value; does not
    /// survive past driver setup.
    #[default]
    Baseline,
    /// The machine the compiler runs on. Command-line-only value.
    Native,
}

/// Calling/mangling convention of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Linkage {
    /// Resolve from the enclosing scope.
    #[default]
    Unspecified,
    Mica,
    C,
    Cpp,
    Windows,
    ObjC,
    System,
}

/// How a C++-linkage aggregate mangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CppMangle {
    #[default]
    Unspecified,
    Struct,
    Class,
}

/// How well a candidate matches during overload resolution, from no match
/// up to exact. Ordered; picking among candidates is the semantic
/// analyzer's business, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchLevel {
    NoMatch,
    WithConversions,
    WithConstConversion,
    Exact,
}

/// Per-function inlining directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlinePolicy {
    /// As specified on the command line.
    #[default]
    Unspecified,
    Never,
    Always,
}

/// Whether an output artifact is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Explicitly turned off.
    Suppressed,
    /// Produced because it is the default for the invocation.
    Implied,
    /// Explicitly requested.
    Requested,
}

impl OutputKind {
    pub fn enabled(self) -> bool {
        !matches!(self, OutputKind::Suppressed)
    }
}

/// How warnings surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningMode {
    /// Warnings are dropped entirely.
    Disabled,
    /// Warnings are promoted to errors.
    AsErrors,
    /// Warnings are counted and shown but do not block compilation.
    #[default]
    Informational,
}

/// How uses of deprecated features surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeprecationMode {
    /// Using a deprecated feature is an error.
    Error,
    /// Silently allowed.
    Allow,
    /// Allowed with a warning.
    #[default]
    Warn,
}

/// Structure field alignment.
///
/// Replaces the magic all-ones sentinel: "match whatever the underlying C
/// compiler does" is its own variant, and explicit alignments are
/// validated powers of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructAlign {
    /// Match the underlying C compiler.
    Default,
    /// A fixed alignment in bytes; always a power of two.
    Explicit(u32),
}

impl StructAlign {
    /// An explicit alignment; `None` unless `bytes` is a power of two.
    pub fn explicit(bytes: u32) -> Option<StructAlign> {
        bytes
            .is_power_of_two()
            .then_some(StructAlign::Explicit(bytes))
    }

    /// The alignment in bytes, with `host_default` standing in for
    /// [`StructAlign::Default`].
    pub fn bytes(self, host_default: u32) -> u32 {
        match self {
            StructAlign::Default => host_default,
            StructAlign::Explicit(bytes) => bytes,
        }
    }
}

impl Default for StructAlign {
    fn default() -> Self {
        StructAlign::Default
    }
}
