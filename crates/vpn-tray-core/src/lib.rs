//! VPN tray icon core library
//!
//! Animates a ten-frame lock icon between the `unsecured`, `securing` and
//! `secured` connection states. The platform tray, the image decoder and the
//! system theme query are injected, so everything here runs headless.
//!
//! # Example
//!
//! ```no_run
//! use vpn_tray_core::{
//!     Bitmap, ControllerConfig, CoreResult, IconSink, IconState, IconStyle, ImageFrameSet,
//!     ImageLoader, Platform, TrayIconController,
//! };
//!
//! use std::{path::Path, sync::Arc};
//!
//! struct Printer;
//!
//! impl IconSink for Printer {
//!     fn set_icon(&self, frame: usize, _bitmap: &Bitmap) {
//!         println!("showing frame {}", frame);
//!     }
//! }
//!
//! struct Blank;
//!
//! impl ImageLoader for Blank {
//!     fn load_image(&self, _path: &Path) -> CoreResult<Bitmap> {
//!         Ok(Bitmap::from_rgba(vec![0; 4], 1, 1))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let frames = ImageFrameSet::new("assets/menubar-icons", Platform::current(), Arc::new(Blank));
//!     let config = ControllerConfig {
//!         icon_style: IconStyle::Color,
//!         current_state: IconState::Unsecured,
//!     };
//!     let mut controller = TrayIconController::new(Arc::new(Printer), frames, config);
//!
//!     controller.init().await?;
//!     controller.animate_to_icon(IconState::Securing);
//!     Ok(())
//! }
//! ```

mod animation;
mod controller;
mod error;
mod frames;
mod icon_state;

pub use {
    animation::{AnimationRange, DEFAULT_FRAME_INTERVAL, KeyframeAnimation, MIN_FRAME_INTERVAL},
    controller::{ControllerConfig, IconSink, TrayIconController},
    error::{Result as CoreResult, TrayError},
    frames::{
        Bitmap, FRAME_COUNT, FallbackSuffix, FrameIndex, FrameSet, ImageFrameSet, ImageLoader,
        MONOCHROME_FALLBACK_SUFFIX, Platform, RegistryThemeSuffix, SystemTheme, TemplateSuffix,
        ThemeQuery, ThemeSuffixResolver, UnsupportedThemeQuery,
    },
    icon_state::{IconState, IconStyle},
};

#[cfg(target_os = "windows")]
pub use frames::RegistryThemeQuery;
