//! Platform-specific clipboard backend implementations.

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use desktop::*;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
/// Fallback backend for platforms without clipboard access.
pub mod unsupported;
#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub use unsupported::*;
