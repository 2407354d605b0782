//! Platform capabilities used by the screens.
//!
//! - [`SystemLauncher`] hands URLs to the OS through the `open` crate.
//! - [`request_device_permissions`] reports camera and media-library access.
//!   It does not query the OS: the statuses are fixed per target, and the real
//!   prompt appears when the capture input is first used.

use directory::{LaunchError, UrlLauncher};

pub const PERMISSIONS_TITLE: &str = "Permissions required";
pub const PERMISSIONS_MESSAGE: &str =
    "We need camera and photo library access to take a profile picture.";

/// Opens URLs with the handler the OS has registered for their scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        open::that(url).map_err(|e| LaunchError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Permissions {
    pub media_library: PermissionStatus,
    pub camera: PermissionStatus,
}

impl Permissions {
    /// Both must be granted for the capture flow to work without a warning.
    pub fn all_granted(&self) -> bool {
        self.media_library == PermissionStatus::Granted && self.camera == PermissionStatus::Granted
    }
}

/// Fixed statuses for the current target. Nothing is asked of the OS here.
///
/// Android and iOS report both as granted because the webview raises the
/// system prompt itself when the capture input opens. Desktop reports the
/// camera as undetermined since the input falls back to a file picker, which
/// makes the screen show the permissions warning.
pub async fn request_device_permissions() -> Permissions {
    target_permissions()
}

fn target_permissions() -> Permissions {
    if cfg!(any(target_os = "android", target_os = "ios")) {
        Permissions {
            media_library: PermissionStatus::Granted,
            camera: PermissionStatus::Granted,
        }
    } else {
        Permissions {
            media_library: PermissionStatus::Granted,
            camera: PermissionStatus::Undetermined,
        }
    }
}
