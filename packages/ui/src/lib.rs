//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWhatsapp;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod service;
pub use service::{client_config, make_service};

pub mod notices;
pub use notices::{push_notice, use_notices, NoticeLevel, Notices};

mod notice_banner;
pub use notice_banner::NoticeBanner;

pub mod platform;
pub use platform::{request_device_permissions, PermissionStatus, Permissions, SystemLauncher};

pub mod refresh;
pub use refresh::{use_refresh_request, RefreshRequest};

pub mod views;
