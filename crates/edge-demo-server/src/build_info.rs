//! Compile-time build information.

/// Version, commit, and build time of this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Package version.
    pub version: &'static str,
    /// Short git commit hash, or `unknown` outside a checkout.
    pub git_sha: &'static str,
    /// UTC build time, ISO-8601 with milliseconds.
    pub build_time: &'static str,
}

/// Build information stamped by the build script.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("BUILD_VERSION"),
    git_sha: env!("BUILD_GIT_SHA"),
    build_time: env!("BUILD_TIME"),
};
