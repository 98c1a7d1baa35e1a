use crate::{
    CoreResult, IconState, IconStyle,
    animation::{AnimationRange, DEFAULT_FRAME_INTERVAL, KeyframeAnimation},
    controller::IconSink,
    frames::{FrameIndex, FrameSet, ImageFrameSet},
};

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Icon preferences held by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Artwork style in use.
    pub icon_style: IconStyle,
    /// State the icon is showing or heading to.
    pub current_state: IconState,
}

/// Drives the tray icon animation from connection state changes.
///
/// The controller owns the frame images and the animation player. The only
/// visible effect is a call to [`IconSink::set_icon`] for every frame the
/// player shows.
///
/// # Frame set swaps
///
/// Loaded frames are published through a `watch` channel. The timer callback
/// reads the newest complete set on every tick, so a reload never shows a
/// partially loaded set and never interrupts a running animation.
pub struct TrayIconController {
    config: ControllerConfig,
    speed: Duration,
    frame_set: ImageFrameSet,
    frames: watch::Sender<Option<Arc<FrameSet>>>,
    sink: Arc<dyn IconSink>,
    animation: Option<KeyframeAnimation>,
}

impl TrayIconController {
    /// Create an uninitialized controller. Call [`init`](Self::init) before use.
    pub fn new(
        sink: Arc<dyn IconSink>,
        frame_set: ImageFrameSet,
        config: ControllerConfig,
    ) -> Self {
        let (frames, _) = watch::channel(None);
        Self {
            config,
            speed: DEFAULT_FRAME_INTERVAL,
            frame_set,
            frames,
            sink,
            animation: None,
        }
    }

    /// Set the time per animation frame. Takes effect at the next `init`.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// State the icon is showing or heading to.
    pub fn icon_state(&self) -> IconState {
        self.config.current_state
    }

    /// Artwork style in use.
    pub fn icon_style(&self) -> IconStyle {
        self.config.icon_style
    }

    /// Whether `init` has completed and `dispose` has not been called.
    pub fn is_initialized(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether an animation is currently moving frames.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(KeyframeAnimation::is_running)
    }

    /// Load the frames and show the current state's frame without animating.
    ///
    /// # Errors
    ///
    /// Returns an error if any frame fails to load; the controller then stays
    /// uninitialized.
    #[instrument(skip(self))]
    pub async fn init(&mut self) -> CoreResult<()> {
        self.load_images().await?;

        let initial = self.target_frame();
        let mut animation = KeyframeAnimation::new(self.speed, self.frame_renderer());
        animation.play(AnimationRange::hold(initial));

        self.animation = Some(animation);
        info!(state = ?self.config.current_state, frame = initial, "Tray icon initialized");

        Ok(())
    }

    /// Reload the frames, e.g. after a style or theme change.
    ///
    /// An idle player re-renders its target frame with the new images. A
    /// running player is left alone; its next tick uses the new images.
    ///
    /// # Errors
    ///
    /// Returns an error if any frame fails to load. The previous frames stay
    /// in use.
    #[instrument(skip(self))]
    pub async fn reload_images(&mut self) -> CoreResult<()> {
        self.load_images().await?;

        let target = self.target_frame();
        if let Some(animation) = self.animation.as_mut() {
            if animation.is_running() {
                debug!("Animation in flight, new frames apply on next tick");
            } else {
                animation.play(AnimationRange::to(target));
            }
        }

        Ok(())
    }

    /// Switch between color and monochrome artwork.
    ///
    /// # Errors
    ///
    /// Propagates the reload failure; the style change is kept so a later
    /// reload picks it up.
    #[instrument(skip(self))]
    pub async fn set_use_monochromatic_icon(
        &mut self,
        use_monochromatic_icon: bool,
    ) -> CoreResult<()> {
        self.config.icon_style = IconStyle::from_monochrome(use_monochromatic_icon);
        self.reload_images().await
    }

    /// Animate toward the frame for `state`.
    ///
    /// Does nothing if the state is unchanged or the controller is not
    /// initialized. A running animation is redirected, not restarted.
    #[instrument(skip(self))]
    pub fn animate_to_icon(&mut self, state: IconState) {
        if self.config.current_state == state {
            return;
        }
        let Some(animation) = self.animation.as_mut() else {
            debug!("Ignoring icon change before init");
            return;
        };

        self.config.current_state = state;
        animation.play(AnimationRange::to(state.target_frame()));
    }

    /// Stop and release the animation. No frame is rendered after this returns.
    #[instrument(skip(self))]
    pub fn dispose(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
            info!("Tray icon animation disposed");
        }
    }

    fn target_frame(&self) -> FrameIndex {
        self.config.current_state.target_frame()
    }

    async fn load_images(&mut self) -> CoreResult<()> {
        match self.frame_set.load(self.config.icon_style).await {
            Ok(set) => {
                self.frames.send_replace(Some(Arc::new(set)));
                Ok(())
            }
            Err(e) => {
                if self.frames.borrow().is_some() {
                    warn!("Frame load failed, keeping previous frames");
                }
                Err(e)
            }
        }
    }

    fn frame_renderer(&self) -> impl FnMut(FrameIndex) + Send + 'static {
        let frames = self.frames.subscribe();
        let sink = Arc::clone(&self.sink);

        move |frame| {
            let current = frames.borrow().clone();
            match current.as_deref().and_then(|set| set.get(frame)) {
                Some(bitmap) => sink.set_icon(frame, bitmap),
                None => warn!(frame, "No image loaded for frame"),
            }
        }
    }
}

impl Drop for TrayIconController {
    fn drop(&mut self) {
        self.dispose();
    }
}
