//! Platform icon sets.
//!
//! Each [`IconSet`] lists the files a platform's packaging expects, with the
//! exact relative path and pixel edge length of every rendition. The paths
//! follow a Flutter project layout and must not change: build tooling looks
//! for these names.

use std::fmt;

/// The platform an icon set is packaged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    MacOs,
    Android,
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ios => "ios",
            Self::MacOs => "macos",
            Self::Android => "android",
            Self::Web => "web",
        })
    }
}

/// One output file: a path relative to the project root and the edge length
/// of the square image written there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub path: &'static str,
    pub size: u32,
}

impl IconTarget {
    pub const fn new(path: &'static str, size: u32) -> Self {
        Self { path, size }
    }
}

/// The renditions required by a single platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub platform: Platform,
    pub targets: &'static [IconTarget],
}

impl IconSet {
    /// Returns the number of files in the set.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the set has no files.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns an iterator over the targets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static IconTarget> {
        self.targets.iter()
    }
}

// ============================================================================
// Tables
// ============================================================================

pub const IOS: IconSet = IconSet {
    platform: Platform::Ios,
    targets: &[
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@1x.png", 20),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@2x.png", 40),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@3x.png", 60),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@1x.png", 29),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@2x.png", 58),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@3x.png", 87),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@1x.png", 40),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@2x.png", 80),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@3x.png", 120),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-60x60@2x.png", 120),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-60x60@3x.png", 180),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-76x76@1x.png", 76),
        IconTarget::new("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-76x76@2x.png", 152),
        IconTarget::new(
            "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png",
            167,
        ),
        IconTarget::new(
            "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-1024x1024@1x.png",
            1024,
        ),
    ],
};

pub const MACOS: IconSet = IconSet {
    platform: Platform::MacOs,
    targets: &[
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_16.png", 16),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_32.png", 32),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_64.png", 64),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_128.png", 128),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_256.png", 256),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_512.png", 512),
        IconTarget::new("macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_1024.png", 1024),
    ],
};

pub const ANDROID: IconSet = IconSet {
    platform: Platform::Android,
    targets: &[
        IconTarget::new("android/app/src/main/res/mipmap-mdpi/ic_launcher.png", 48),
        IconTarget::new("android/app/src/main/res/mipmap-hdpi/ic_launcher.png", 72),
        IconTarget::new("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png", 96),
        IconTarget::new("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png", 144),
        IconTarget::new("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png", 192),
    ],
};

pub const WEB: IconSet = IconSet {
    platform: Platform::Web,
    targets: &[
        IconTarget::new("web/icons/Icon-192.png", 192),
        IconTarget::new("web/icons/Icon-512.png", 512),
    ],
};

/// Every icon set, in generation order.
pub const ALL: [IconSet; 4] = [IOS, MACOS, ANDROID, WEB];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn set_sizes() {
        assert_eq!(IOS.len(), 15);
        assert_eq!(MACOS.len(), 7);
        assert_eq!(ANDROID.len(), 5);
        assert_eq!(WEB.len(), 2);
        assert!(ALL.iter().all(|set| !set.is_empty()));
    }

    #[test]
    fn paths_are_unique_and_relative() {
        let mut seen = HashSet::new();
        for target in ALL.iter().flat_map(IconSet::iter) {
            assert!(seen.insert(target.path), "duplicate path {}", target.path);
            assert!(!target.path.starts_with('/'));
            assert!(target.path.ends_with(".png"));
            assert!(target.size > 0);
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn sets_stay_under_their_platform_directory() {
        for set in ALL {
            let prefix = format!("{}/", set.platform);
            assert!(set.iter().all(|t| t.path.starts_with(&prefix)));
        }
    }

    #[test]
    fn ios_marketing_icon_is_1024() {
        let marketing = IOS.iter().last().unwrap();
        assert_eq!(marketing.size, 1024);
        assert!(marketing.path.ends_with("Icon-App-1024x1024@1x.png"));
    }
}
