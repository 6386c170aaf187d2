use std::cmp::Ordering;
use std::env;

// Backends this crate can be built against
#[derive(PartialEq, Eq, Debug)]
struct BackendFeature {
    name: &'static str,
    target_archs: &'static [&'static str],
    target_feature: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl BackendFeature {
    // Define priority order between backends (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "sse2" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all SIMD backends that have an implementation in this crate
    fn features() -> Vec<BackendFeature> {
        vec![
            BackendFeature {
                name: "sse2",
                target_archs: &["x86", "x86_64"],
                target_feature: "sse2",
                cfg_flag: "sse2",
                detected: false,
            },
            BackendFeature {
                name: "neon",
                target_archs: &["aarch64"],
                target_feature: "neon",
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for BackendFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for BackendFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Backend selection only looks at the *target* being compiled for, never at the
// machine running the build, so cross compilation picks the right register layout.
struct TargetDetector {
    arch: String,
    features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_string)
            .collect();

        Self { arch, features }
    }

    fn detect_features(&self, features: &mut [BackendFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.target_archs.contains(&self.arch.as_str())
                && self.features.iter().any(|f| f == feature.target_feature);
        }
    }
}

fn apply(features: &mut [BackendFeature], force_fallback: bool) {
    // Sort features by priority (highest first)
    features.sort();

    // Find and use the highest detected backend (if any)
    // if none is detected, or the fallback is forced, use the scalar-array implementation
    let cfg_flag = features
        .iter()
        .filter(|_| !force_fallback)
        .find(|feature| feature.detected)
        .map(|feature| feature.cfg_flag)
        .unwrap_or("fallback");

    println!("applying backend: {cfg_flag}");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(sse2)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_FORCE_FALLBACK");

    let force_fallback = env::var_os("CARGO_FEATURE_FORCE_FALLBACK").is_some();

    let mut features = BackendFeature::features();

    TargetDetector::from_env().detect_features(&mut features);

    apply(&mut features, force_fallback);
}
