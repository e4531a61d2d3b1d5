use crate::{AssetKind, Platform};
use std::path::{Path, PathBuf};

/// A single output image with its required pixel dimensions. A missing
/// `height` means the target is square.
#[derive(Clone, Copy, Debug)]
pub struct AssetSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: Option<u32>,
}

impl AssetSpec {
    pub const fn square(name: &'static str, width: u32) -> Self {
        Self {
            name,
            width,
            height: None,
        }
    }

    pub const fn rect(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height: Some(height),
        }
    }

    pub fn target(&self) -> (u32, u32) {
        (self.width, self.height.unwrap_or(self.width))
    }
}

pub const IOS_ICONS: &[AssetSpec] = &[
    AssetSpec::square("icon-20@2x.png", 40),
    AssetSpec::square("icon-20@3x.png", 60),
    AssetSpec::square("icon-24@2x.png", 48),
    AssetSpec::square("icon-27.5@2x.png", 55),
    AssetSpec::square("icon-40.png", 40),
    AssetSpec::square("icon-40@2x.png", 80),
    AssetSpec::square("icon-40@3x.png", 120),
    AssetSpec::square("icon-44@2x.png", 88),
    AssetSpec::square("icon-50.png", 50),
    AssetSpec::square("icon-50@2x.png", 100),
    AssetSpec::square("icon-60.png", 60),
    AssetSpec::square("icon-60@2x.png", 120),
    AssetSpec::square("icon-60@3x.png", 180),
    AssetSpec::square("icon-72.png", 72),
    AssetSpec::square("icon-72@2x.png", 144),
    AssetSpec::square("icon-76.png", 76),
    AssetSpec::square("icon-76@2x.png", 152),
    AssetSpec::square("icon-83.5@2x.png", 167),
    AssetSpec::square("icon-86@2x.png", 172),
    AssetSpec::square("icon-98@2x.png", 196),
    AssetSpec::square("icon-small.png", 29),
    AssetSpec::square("icon-small@2x.png", 58),
    AssetSpec::square("icon-small@3x.png", 87),
    AssetSpec::square("icon.png", 57),
    AssetSpec::square("icon@2x.png", 114),
];

pub const IOS_SPLASHES: &[AssetSpec] = &[
    AssetSpec::rect("Default~iphone.png", 320, 480),
    AssetSpec::rect("Default@2x~iphone.png", 640, 960),
    AssetSpec::rect("Default-Portrait~ipad.png", 768, 1024),
    AssetSpec::rect("Default-Portrait@2x~ipad.png", 1536, 2048),
    AssetSpec::rect("Default-Landscape~ipad.png", 1024, 768),
    AssetSpec::rect("Default-Landscape@2x~ipad.png", 2048, 1536),
    AssetSpec::rect("Default-568h@2x~iphone.png", 640, 1136),
    AssetSpec::rect("Default-667h.png", 750, 1334),
    AssetSpec::rect("Default-736h.png", 1242, 2208),
    AssetSpec::rect("Default-Landscape-736h.png", 2208, 1242),
    AssetSpec::rect("Default-2436h.png", 1125, 2436),
    AssetSpec::rect("Default-Landscape-2436h.png", 2436, 1125),
];

pub const ANDROID_ICONS: &[AssetSpec] = &[
    AssetSpec::square("drawable/icon.png", 96),
    AssetSpec::square("drawable-ldpi/icon.png", 36),
    AssetSpec::square("drawable-mdpi/icon.png", 48),
    AssetSpec::square("drawable-hdpi/icon.png", 72),
    AssetSpec::square("drawable-xhdpi/icon.png", 96),
    AssetSpec::square("drawable-xxhdpi/icon.png", 144),
    AssetSpec::square("drawable-xxxhdpi/icon.png", 192),
    AssetSpec::square("mipmap-ldpi/icon.png", 36),
    AssetSpec::square("mipmap-mdpi/icon.png", 48),
    AssetSpec::square("mipmap-hdpi/icon.png", 72),
    AssetSpec::square("mipmap-xhdpi/icon.png", 96),
    AssetSpec::square("mipmap-xxhdpi/icon.png", 144),
    AssetSpec::square("mipmap-xxxhdpi/icon.png", 192),
    AssetSpec::square("mipmap-ldpi-v26/ic_launcher_foreground.png", 36),
    AssetSpec::square("mipmap-mdpi-v26/ic_launcher_foreground.png", 48),
    AssetSpec::square("mipmap-hdpi-v26/ic_launcher_foreground.png", 72),
    AssetSpec::square("mipmap-xhdpi-v26/ic_launcher_foreground.png", 216),
    AssetSpec::square("mipmap-xxhdpi-v26/ic_launcher_foreground.png", 324),
    AssetSpec::square("mipmap-xxxhdpi-v26/ic_launcher_foreground.png", 432),
];

pub const ANDROID_SPLASHES: &[AssetSpec] = &[
    AssetSpec::rect("drawable-land-ldpi/screen.png", 320, 200),
    AssetSpec::rect("drawable-land-mdpi/screen.png", 480, 320),
    AssetSpec::rect("drawable-land-hdpi/screen.png", 800, 480),
    AssetSpec::rect("drawable-land-xhdpi/screen.png", 1280, 720),
    AssetSpec::rect("drawable-land-xxhdpi/screen.png", 1600, 960),
    AssetSpec::rect("drawable-land-xxxhdpi/screen.png", 1920, 1280),
    AssetSpec::rect("drawable-port-ldpi/screen.png", 200, 320),
    AssetSpec::rect("drawable-port-mdpi/screen.png", 320, 420),
    AssetSpec::rect("drawable-port-hdpi/screen.png", 480, 800),
    AssetSpec::rect("drawable-port-xhdpi/screen.png", 720, 1280),
    AssetSpec::rect("drawable-port-xxhdpi/screen.png", 960, 1600),
    AssetSpec::rect("drawable-port-xxxhdpi/screen.png", 1920, 1280),
];

/// Directory whose presence marks a platform as added to the project.
pub fn detection_dir(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => "platforms/ios",
        Platform::Android => "platforms/android",
    }
}

/// Asset tables and output location for one platform, resolved against the
/// project root.
#[derive(Clone, Debug)]
pub struct PlatformAssets {
    pub platform: Platform,
    pub is_added: bool,
    pub assets_dir: PathBuf,
    pub icons: &'static [AssetSpec],
    pub splashes: &'static [AssetSpec],
}

impl PlatformAssets {
    pub fn assets(&self, kind: AssetKind) -> &'static [AssetSpec] {
        match kind {
            AssetKind::Icon => self.icons,
            AssetKind::Splash => self.splashes,
        }
    }
}

/// Builds the registry for all known platforms. Performs exactly one
/// filesystem probe per platform to set `is_added`.
pub fn platforms(root: &Path, project_name: &str, legacy_ios: bool) -> Vec<PlatformAssets> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let is_added = root.join(detection_dir(platform)).exists();
            PlatformAssets {
                platform,
                is_added,
                assets_dir: root.join(assets_dir(platform, project_name, legacy_ios)),
                icons: match platform {
                    Platform::Ios => IOS_ICONS,
                    Platform::Android => ANDROID_ICONS,
                },
                splashes: match platform {
                    Platform::Ios => IOS_SPLASHES,
                    Platform::Android => ANDROID_SPLASHES,
                },
            }
        })
        .collect()
}

fn assets_dir(platform: Platform, project_name: &str, legacy_ios: bool) -> PathBuf {
    match platform {
        Platform::Ios if legacy_ios => {
            format!("platforms/ios/{}/Resources/icons", project_name).into()
        }
        Platform::Ios => format!(
            "platforms/ios/{}/Images.xcassets/AppIcon.appiconset",
            project_name
        )
        .into(),
        Platform::Android => "platforms/android/app/src/main/res".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tables() -> [(&'static str, &'static [AssetSpec]); 4] {
        [
            ("ios icons", IOS_ICONS),
            ("ios splashes", IOS_SPLASHES),
            ("android icons", ANDROID_ICONS),
            ("android splashes", ANDROID_SPLASHES),
        ]
    }

    #[test]
    fn unique_names_per_table() {
        for (table, specs) in tables() {
            let names: HashSet<_> = specs.iter().map(|spec| spec.name).collect();
            assert_eq!(names.len(), specs.len(), "duplicate name in {}", table);
        }
    }

    #[test]
    fn positive_dimensions() {
        for (table, specs) in tables() {
            for spec in specs {
                assert!(spec.width > 0, "{} {}", table, spec.name);
                if let Some(height) = spec.height {
                    assert!(height > 0, "{} {}", table, spec.name);
                }
            }
        }
    }

    #[test]
    fn splashes_are_rectangles() {
        for spec in IOS_SPLASHES.iter().chain(ANDROID_SPLASHES) {
            assert!(spec.height.is_some(), "{}", spec.name);
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(IOS_ICONS.len(), 25);
        assert_eq!(IOS_SPLASHES.len(), 12);
        assert_eq!(ANDROID_ICONS.len(), 19);
        assert_eq!(ANDROID_SPLASHES.len(), 12);
    }

    #[test]
    fn target_defaults_to_square() {
        assert_eq!(AssetSpec::square("icon.png", 57).target(), (57, 57));
        assert_eq!(AssetSpec::rect("screen.png", 800, 480).target(), (800, 480));
    }

    #[test]
    fn detects_added_platforms() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("platforms/android")).unwrap();
        let platforms = platforms(tmp.path(), "Hello", false);
        let android = platforms
            .iter()
            .find(|p| p.platform == Platform::Android)
            .unwrap();
        let ios = platforms.iter().find(|p| p.platform == Platform::Ios).unwrap();
        assert!(android.is_added);
        assert!(!ios.is_added);
        assert!(android
            .assets_dir
            .ends_with("platforms/android/app/src/main/res"));
    }

    #[test]
    fn ios_dir_depends_on_layout_flag() {
        let tmp = tempfile::tempdir().unwrap();
        let modern = platforms(tmp.path(), "Hello", false);
        let legacy = platforms(tmp.path(), "Hello", true);
        assert!(modern[0]
            .assets_dir
            .ends_with("platforms/ios/Hello/Images.xcassets/AppIcon.appiconset"));
        assert!(legacy[0]
            .assets_dir
            .ends_with("platforms/ios/Hello/Resources/icons"));
    }
}
