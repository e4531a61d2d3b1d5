use clap::Parser;
use std::path::PathBuf;

pub mod descriptor;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod scaler;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Self; 2] = [Self::Ios, Self::Android];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Android => write!(f, "android"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(platform: &str) -> Result<Self, Self::Err> {
        Ok(match platform {
            "ios" => Self::Ios,
            "android" => Self::Android,
            _ => anyhow::bail!("unsupported platform {}", platform),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    Icon,
    Splash,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Icon => write!(f, "icon"),
            Self::Splash => write!(f, "splash"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct GenerateArgs {
    /// Path to the project descriptor
    #[clap(long, default_value = "config.xml")]
    config: PathBuf,
    /// Source image for launcher icons
    #[clap(long, default_value = "icon.png")]
    icon: PathBuf,
    /// Source image for splash screens
    #[clap(long, default_value = "splash.png")]
    splash: PathBuf,
    /// Write ios assets to the pre xcode 5 resource layout
    #[clap(long)]
    xcode_old: bool,
}

/// Immutable per run configuration, built once from the parsed arguments.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub root: PathBuf,
    pub descriptor: PathBuf,
    pub icon: PathBuf,
    pub splash: PathBuf,
    pub legacy_ios: bool,
}

impl RunConfig {
    pub fn new(args: GenerateArgs) -> Self {
        Self {
            root: PathBuf::from("."),
            descriptor: args.config,
            icon: args.icon,
            splash: args.splash,
            legacy_ios: args.xcode_old,
        }
    }

    pub fn source(&self, kind: AssetKind) -> &PathBuf {
        match kind {
            AssetKind::Icon => &self.icon,
            AssetKind::Splash => &self.splash,
        }
    }
}
