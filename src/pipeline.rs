use crate::registry::{self, AssetSpec, PlatformAssets};
use crate::scaler::Scaler;
use crate::{descriptor, report, resolve, AssetKind, Platform, RunConfig};
use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;

/// Runs the whole generation pipeline. Precondition and descriptor failures
/// abort with an error before anything is written; failures of individual
/// assets are reported and do not affect their siblings.
pub fn run(config: &RunConfig) -> Result<()> {
    report::header("Checking project and sources");
    detect_platforms(config)?;
    ensure_exists(&config.root.join(&config.icon), "icon source")?;
    ensure_exists(&config.root.join(&config.splash), "splash source")?;
    let descriptor = config.root.join(&config.descriptor);
    ensure_exists(&descriptor, "project descriptor")?;
    let project_name = descriptor::project_name(&descriptor)?;
    tracing::debug!("project name is {}", project_name);

    let platforms = registry::platforms(&config.root, &project_name, config.legacy_ios);
    let added: Vec<_> = platforms.into_iter().filter(|p| p.is_added).collect();
    // every platform's icons settle before the first splash is written
    generate_phase(config, &added, AssetKind::Icon);
    generate_phase(config, &added, AssetKind::Splash);
    Ok(())
}

fn detect_platforms(config: &RunConfig) -> Result<Vec<Platform>> {
    let detected: Vec<Platform> = Platform::ALL
        .into_iter()
        .filter(|&platform| {
            config
                .root
                .join(registry::detection_dir(platform))
                .exists()
        })
        .collect();
    if detected.is_empty() {
        anyhow::bail!(
            "no platforms found; run this from the project root after adding a platform under platforms/"
        );
    }
    let names: Vec<_> = detected.iter().map(Platform::to_string).collect();
    report::success(format!("platforms found: {}", names.join(", ")));
    Ok(detected)
}

fn ensure_exists(path: &Path, what: &str) -> Result<()> {
    anyhow::ensure!(path.exists(), "{} {} does not exist", what, path.display());
    report::success(format!("{} exists", path.display()));
    Ok(())
}

fn generate_phase(config: &RunConfig, platforms: &[PlatformAssets], kind: AssetKind) {
    for platform in platforms {
        report::header(&format!(
            "Generating {} assets for {}",
            kind, platform.platform
        ));
        generate_batch(config, platform, kind);
    }
}

/// Generates every asset of one kind for one platform. The source is
/// resolved and decoded once per batch; the writes fan out and join here.
fn generate_batch(config: &RunConfig, platform: &PlatformAssets, kind: AssetKind) {
    let specs = platform.assets(kind);
    let src = resolve::source(config, platform.platform, kind);
    let scaler = match Scaler::open(&src) {
        Ok(scaler) => scaler,
        Err(err) => {
            for spec in specs {
                report::error(format!("{}: {:#}", spec.name, err));
            }
            return;
        }
    };
    specs.par_iter().for_each(|spec| {
        let dest = resolve::dest(&platform.assets_dir, spec);
        match write_asset(&scaler, spec, &dest) {
            Ok(()) => report::success(format!("{} created", spec.name)),
            Err(err) => report::error(format!("{}: {:#}", spec.name, err)),
        }
    });
}

fn write_asset(scaler: &Scaler, spec: &AssetSpec, dest: &Path) -> Result<()> {
    resolve::ensure_parent(dest)?;
    let (width, height) = spec.target();
    scaler.write(dest, width, height)
}
