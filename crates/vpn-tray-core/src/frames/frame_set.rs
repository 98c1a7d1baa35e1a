use crate::{
    CoreResult, IconStyle, TrayError,
    frames::{
        Bitmap, FRAME_COUNT, FrameIndex, MONOCHROME_FALLBACK_SUFFIX, Platform, ThemeSuffixResolver,
    },
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    sync::Arc,
};

use error_location::ErrorLocation;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

/// Turns an image file into a [`Bitmap`].
///
/// Implementations may block; they are always called on the blocking pool.
pub trait ImageLoader: Send + Sync + 'static {
    /// Load and decode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be decoded.
    fn load_image(&self, path: &Path) -> CoreResult<Bitmap>;
}

/// Complete, immutable set of animation frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<Bitmap>,
}

impl FrameSet {
    pub(crate) fn from_frames(frames: Vec<Bitmap>) -> Self {
        debug_assert_eq!(frames.len(), FRAME_COUNT);
        Self { frames }
    }

    /// Bitmap for a frame index.
    pub fn get(&self, frame: FrameIndex) -> Option<&Bitmap> {
        self.frames.get(frame)
    }

    /// Number of frames in the set.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the set holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Resolves and loads the lock animation frames for a style and theme.
///
/// Frames live at `<base>/<platform>/lock-<n><suffix>.<ext>` with `n` running
/// from 1 to 10. The suffix is empty for color artwork and comes from the
/// platform's [`ThemeSuffixResolver`] for monochrome artwork.
#[derive(Clone)]
pub struct ImageFrameSet {
    base_dir: PathBuf,
    platform: Platform,
    resolver: Arc<dyn ThemeSuffixResolver>,
    loader: Arc<dyn ImageLoader>,
}

impl ImageFrameSet {
    /// Create a frame set loader using the platform's own suffix resolver.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        platform: Platform,
        loader: Arc<dyn ImageLoader>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            platform,
            resolver: Arc::from(platform.suffix_resolver()),
            loader,
        }
    }

    /// Replace the suffix resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn ThemeSuffixResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Platform the frames are resolved for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Path of a one-based frame number with the given suffix.
    pub fn frame_path(&self, frame_number: usize, suffix: &str) -> PathBuf {
        self.base_dir.join(self.platform.segment()).join(format!(
            "lock-{}{}.{}",
            frame_number,
            suffix,
            self.platform.extension()
        ))
    }

    /// File name suffix for the style.
    ///
    /// The resolver may query the system, so it runs on the blocking pool. A
    /// resolver that panics degrades to the fallback suffix.
    #[instrument(skip(self))]
    pub async fn resolve_suffix(&self, style: IconStyle) -> &'static str {
        match style {
            IconStyle::Color => "",
            IconStyle::Monochrome => {
                let resolver = Arc::clone(&self.resolver);
                match tokio::task::spawn_blocking(move || resolver.monochrome_suffix()).await {
                    Ok(suffix) => suffix,
                    Err(e) => {
                        warn!(error = %e, "Suffix resolver task failed, using fallback");
                        MONOCHROME_FALLBACK_SUFFIX
                    }
                }
            }
        }
    }

    /// Load all frames for the style.
    ///
    /// All frames load concurrently. The set is only returned once every frame
    /// succeeded; dropping the future mid-load discards whatever was loaded.
    ///
    /// # Errors
    ///
    /// Returns [`TrayError::FrameLoadFailed`] wrapping the first loader
    /// failure, or
    /// [`TrayError::TaskFailed`] if a loading task panicked.
    #[instrument(skip(self))]
    pub async fn load(&self, style: IconStyle) -> CoreResult<FrameSet> {
        let suffix = self.resolve_suffix(style).await;

        let mut tasks = JoinSet::new();
        for index in 0..FRAME_COUNT {
            let path = self.frame_path(index + 1, suffix);
            let loader = Arc::clone(&self.loader);
            tasks.spawn_blocking(move || (index, loader.load_image(&path)));
        }

        let mut slots: Vec<Option<Bitmap>> = vec![None; FRAME_COUNT];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| TrayError::TaskFailed {
                reason: format!("Frame loading task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            let bitmap = result.map_err(|e| TrayError::FrameLoadFailed {
                frame: index + 1,
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(frame = index, "Frame loaded");
            slots[index] = Some(bitmap);
        }

        let frames = slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| TrayError::TaskFailed {
                reason: "Frame loading finished with missing frames".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(suffix, platform = ?self.platform, "Frame set loaded");

        Ok(FrameSet::from_frames(frames))
    }
}
