mod keyframe;

pub use keyframe::{AnimationRange, DEFAULT_FRAME_INTERVAL, KeyframeAnimation, MIN_FRAME_INTERVAL};
