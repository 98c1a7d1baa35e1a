#![allow(clippy::unwrap_used)]

use crate::{
    FRAME_COUNT, IconStyle, ImageFrameSet, Platform, RegistryThemeSuffix, SystemTheme, TrayError,
    tests::support::{FakeLoader, MissingFrameLoader, ScriptedThemeQuery, name_of},
};

use std::{path::Path, sync::Arc};

/// WHAT: Frame paths follow <base>/<platform>/lock-<n><suffix>.<ext>
/// WHY: The asset layout is fixed by the shipped artwork
#[test]
fn given_frame_number_and_suffix_when_building_path_then_platform_layout() {
    // Given: Loaders for Windows and Linux
    let loader = Arc::new(FakeLoader::default());
    let windows = ImageFrameSet::new("/icons", Platform::Windows, loader.clone());
    let linux = ImageFrameSet::new("/icons", Platform::Linux, loader);

    // When: Building paths
    let windows_path = windows.frame_path(3, "_black");
    let linux_path = linux.frame_path(10, "");

    // Then: Segment, frame number, suffix and extension in place
    assert_eq!(
        windows_path,
        Path::new("/icons").join("win32").join("lock-3_black.ico")
    );
    assert_eq!(
        linux_path,
        Path::new("/icons").join("linux").join("lock-10.png")
    );
}

/// WHAT: Color style loads all ten frames without a suffix, in order
/// WHY: Frame index i must hold lock-(i+1) regardless of load completion order
#[tokio::test]
async fn given_color_style_when_loading_then_ten_ordered_frames() {
    // Given: A Linux frame set over a fake loader
    let loader = Arc::new(FakeLoader::default());
    let frame_set = ImageFrameSet::new("/icons", Platform::Linux, loader.clone());

    // When: Loading color frames
    let set = frame_set.load(IconStyle::Color).await.unwrap();

    // Then: Ten frames lock-1.png .. lock-10.png in index order
    assert_eq!(set.len(), FRAME_COUNT);
    for index in 0..FRAME_COUNT {
        let expected = format!("lock-{}.png", index + 1);
        assert_eq!(name_of(set.get(index).unwrap()), expected);
    }
    assert_eq!(loader.requested().len(), FRAME_COUNT);
    assert!(set.get(FRAME_COUNT).is_none());
}

/// WHAT: Monochrome style appends the resolved theme suffix
/// WHY: Monochrome artwork is picked per system theme
#[tokio::test]
async fn given_monochrome_style_when_loading_then_suffix_applied() {
    // Given: A Windows frame set whose theme query reports light
    let loader = Arc::new(FakeLoader::default());
    let frame_set = ImageFrameSet::new("/icons", Platform::Windows, loader.clone()).with_resolver(
        Arc::new(RegistryThemeSuffix::new(ScriptedThemeQuery::Answer(SystemTheme::Light))),
    );

    // When: Loading monochrome frames
    let set = frame_set.load(IconStyle::Monochrome).await.unwrap();

    // Then: Every frame is the _black ICO variant
    assert_eq!(name_of(set.get(0).unwrap()), "lock-1_black.ico");
    assert_eq!(name_of(set.get(9).unwrap()), "lock-10_black.ico");
    assert!(
        loader
            .requested()
            .iter()
            .all(|p| p.starts_with(Path::new("/icons").join("win32")))
    );
}

/// WHAT: A failing theme query still loads the white monochrome frames
/// WHY: Theme query failures never propagate into the load
#[tokio::test]
async fn given_failing_theme_query_when_loading_monochrome_then_white_frames() {
    // Given: A frame set whose theme query fails
    let loader = Arc::new(FakeLoader::default());
    let frame_set = ImageFrameSet::new("/icons", Platform::Windows, loader)
        .with_resolver(Arc::new(RegistryThemeSuffix::new(ScriptedThemeQuery::Fail)));

    // When: Resolving and loading
    let suffix = frame_set.resolve_suffix(IconStyle::Monochrome).await;
    let set = frame_set.load(IconStyle::Monochrome).await.unwrap();

    // Then: _white everywhere
    assert_eq!(suffix, "_white");
    assert_eq!(name_of(set.get(4).unwrap()), "lock-5_white.ico");
}

/// WHAT: Color style never consults the theme
/// WHY: The suffix only applies to monochrome artwork
#[tokio::test]
async fn given_color_style_when_resolving_suffix_then_empty() {
    // Given: A frame set with a failing theme query
    let frame_set = ImageFrameSet::new("/icons", Platform::Windows, Arc::new(FakeLoader::default()))
        .with_resolver(Arc::new(RegistryThemeSuffix::new(ScriptedThemeQuery::Fail)));

    // When/Then: Color suffix is empty
    assert_eq!(frame_set.resolve_suffix(IconStyle::Color).await, "");
}

/// WHAT: One missing frame fails the whole set
/// WHY: A partial set must never be displayed
#[tokio::test]
async fn given_one_missing_frame_when_loading_then_load_fails() {
    // Given: A loader missing frame 4
    let frame_set = ImageFrameSet::new(
        "/icons",
        Platform::Linux,
        Arc::new(MissingFrameLoader { missing: 4 }),
    );

    // When: Loading
    let result = frame_set.load(IconStyle::Color).await;

    // Then: FrameLoadFailed for frame 4
    assert!(matches!(
        result,
        Err(TrayError::FrameLoadFailed { frame: 4, .. })
    ));
}
