mod common;

use common::*;

#[test]
fn list_prints_constants_without_reading_sources() {
    let env = TestEnv::new();
    env.write("assetgen.toml", TWO_ASSET_MANIFEST);

    let result = env.run(&["list"]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(result.stdout.contains("_ios_run_icon_svg"));
    assert!(result.stdout.contains("_ios_logo_svg"));
    assert!(result
        .stdout
        .contains("assets/logo.svg -> generated/ios/logo_svg.gen.h"));
    assert!(!env.exists("generated"));
}

#[test]
fn list_still_validates_the_plan() {
    let env = TestEnv::new();
    env.write("assetgen.toml", DUPLICATE_OUTPUT_MANIFEST);

    let result = env.run(&["list"]);

    assert_eq!(result.exit_code, 2);
}
