use crate::registry::AssetSpec;
use crate::{AssetKind, Platform, RunConfig};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Picks the source image for a platform and asset kind. A sibling file with
/// the platform name inserted before the extension (`icon.png` ->
/// `icon-ios.png`) overrides the generic source when it exists.
pub fn source(config: &RunConfig, platform: Platform, kind: AssetKind) -> PathBuf {
    let generic = config.source(kind);
    if let Some(candidate) = platform_override(generic, platform) {
        if config.root.join(&candidate).exists() {
            tracing::debug!("using {} source {}", platform, candidate.display());
            return config.root.join(candidate);
        }
    }
    config.root.join(generic)
}

fn platform_override(generic: &Path, platform: Platform) -> Option<PathBuf> {
    let stem = generic.file_stem()?.to_str()?;
    let ext = generic.extension()?.to_str()?;
    Some(generic.with_file_name(format!("{}-{}.{}", stem, platform, ext)))
}

/// Destination for one asset inside the platform's assets directory.
pub fn dest(assets_dir: &Path, spec: &AssetSpec) -> PathBuf {
    assets_dir.join(spec.name)
}

/// Creates the destination's parent directory. Idempotent and tolerant of
/// concurrent creation.
pub fn ensure_parent(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(root: &Path) -> RunConfig {
        RunConfig {
            root: root.to_path_buf(),
            descriptor: "config.xml".into(),
            icon: "icon.png".into(),
            splash: "splash.png".into(),
            legacy_ios: false,
        }
    }

    #[test]
    fn falls_back_to_generic_source() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("icon.png"), []).unwrap();
        let src = source(&config(tmp.path()), Platform::Ios, AssetKind::Icon);
        assert_eq!(src, tmp.path().join("icon.png"));
    }

    #[test]
    fn prefers_platform_override() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("icon.png"), []).unwrap();
        std::fs::write(tmp.path().join("icon-android.png"), []).unwrap();
        let src = source(&config(tmp.path()), Platform::Android, AssetKind::Icon);
        assert_eq!(src, tmp.path().join("icon-android.png"));
        // the override is per platform
        let src = source(&config(tmp.path()), Platform::Ios, AssetKind::Icon);
        assert_eq!(src, tmp.path().join("icon.png"));
    }

    #[test]
    fn override_is_per_kind() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("splash-ios.png"), []).unwrap();
        let src = source(&config(tmp.path()), Platform::Ios, AssetKind::Splash);
        assert_eq!(src, tmp.path().join("splash-ios.png"));
        let src = source(&config(tmp.path()), Platform::Ios, AssetKind::Icon);
        assert_eq!(src, tmp.path().join("icon.png"));
    }

    #[test]
    fn dest_joins_relative_name() {
        let spec = AssetSpec::square("drawable-hdpi/icon.png", 72);
        let dest = dest(Path::new("platforms/android/app/src/main/res"), &spec);
        assert_eq!(
            dest,
            Path::new("platforms/android/app/src/main/res/drawable-hdpi/icon.png")
        );
    }

    #[test]
    fn ensure_parent_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("res/drawable-hdpi/icon.png");
        ensure_parent(&dest).unwrap();
        ensure_parent(&dest).unwrap();
        assert!(dest.parent().unwrap().is_dir());
    }
}
