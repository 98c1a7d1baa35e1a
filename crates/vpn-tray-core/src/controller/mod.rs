mod icon_sink;
mod tray_icon_controller;

pub use {
    icon_sink::IconSink,
    tray_icon_controller::{ControllerConfig, TrayIconController},
};
