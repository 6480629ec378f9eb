//! Reusable manifests and payloads

/// Small valid icon
pub const RUN_ICON_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\"><path fill=\"#fff\" d=\"M.462 11.653H1.72V6.296H.462Z\"/></svg>\n";

/// Another valid icon
pub const LOGO_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"32\" height=\"32\"><path fill=\"#bfbfbf\" d=\"M1 23.27h2.504V12.61H1z\"/></svg>\n";

/// Two iOS entries, default output layout
pub const TWO_ASSET_MANIFEST: &str = r#"
[[asset]]
platform = "ios"
name = "run_icon"
source = "assets/run_icon.svg"

[[asset]]
platform = "ios"
name = "logo"
source = "assets/logo.svg"
"#;

/// Both entries write to the same header
pub const DUPLICATE_OUTPUT_MANIFEST: &str = r#"
[[asset]]
platform = "ios"
name = "logo"
source = "assets/logo.svg"

[[asset]]
platform = "ios"
name = "run_icon"
source = "assets/run_icon.svg"
output = "ios/logo_svg.gen.h"
"#;

pub const RUN_ICON_HEADER: &str = "generated/ios/run_icon_svg.gen.h";
pub const LOGO_HEADER: &str = "generated/ios/logo_svg.gen.h";

/// Project with `TWO_ASSET_MANIFEST` and both sources present
pub fn two_asset_project() -> super::TestEnv {
    let env = super::TestEnv::new();
    env.write("assetgen.toml", TWO_ASSET_MANIFEST)
        .write("assets/run_icon.svg", RUN_ICON_SVG)
        .write("assets/logo.svg", LOGO_SVG);
    env
}
