use crate::Platform;

/// WHAT: Each platform has its asset directory and image format
/// WHY: Artwork is shipped per platform, ICO on Windows and PNG elsewhere
#[test]
fn given_each_platform_when_resolving_assets_then_segment_and_extension_match() {
    // Given/When/Then: Segment and extension per platform
    assert_eq!(Platform::MacOs.segment(), "darwin");
    assert_eq!(Platform::MacOs.extension(), "png");
    assert_eq!(Platform::Windows.segment(), "win32");
    assert_eq!(Platform::Windows.extension(), "ico");
    assert_eq!(Platform::Linux.segment(), "linux");
    assert_eq!(Platform::Linux.extension(), "png");
}

/// WHAT: macOS and Linux resolvers return their fixed suffixes
/// WHY: Only Windows consults the system theme
#[test]
fn given_fixed_suffix_platforms_when_selecting_resolver_then_fixed_suffix() {
    // Given/When: The resolvers for macOS and Linux
    let mac = Platform::MacOs.suffix_resolver();
    let linux = Platform::Linux.suffix_resolver();

    // Then: Template and _white
    assert_eq!(mac.monochrome_suffix(), "Template");
    assert_eq!(linux.monochrome_suffix(), "_white");
}

/// WHAT: The compiled-for platform is detected
/// WHY: The resolver is selected once at startup from this value
#[test]
fn given_build_target_when_detecting_platform_then_matches_cfg() {
    // Given/When: The current platform
    let platform = Platform::current();

    // Then: Matches the target OS
    if cfg!(target_os = "macos") {
        assert_eq!(platform, Platform::MacOs);
    } else if cfg!(target_os = "windows") {
        assert_eq!(platform, Platform::Windows);
    } else {
        assert_eq!(platform, Platform::Linux);
    }
}
