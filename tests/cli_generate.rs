mod common;

use common::*;

#[test]
fn generate_writes_one_header_per_entry() {
    let env = two_asset_project();

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    let run_icon = env.read(RUN_ICON_HEADER);
    assert!(run_icon.contains("/* THIS FILE IS GENERATED. EDITS WILL BE LOST. */\n\n#pragma once\n\n"));
    assert!(run_icon.ends_with(&format!(
        "inline constexpr const char *_ios_run_icon_svg = R\"<!>({RUN_ICON_SVG})<!>\";\n"
    )));
    let logo = env.read(LOGO_HEADER);
    assert!(logo.contains("inline constexpr const char *_ios_logo_svg = R\"<!>("));
    assert!(result.stdout.contains("Generated 2 headers"));
}

#[test]
fn second_run_leaves_headers_untouched() {
    let env = two_asset_project();
    assert_eq!(env.run(&["generate"]).exit_code, 0);
    let before = env.mtime(LOGO_HEADER);
    let content = env.read(LOGO_HEADER);

    std::thread::sleep(std::time::Duration::from_millis(20));
    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 0);
    assert_eq!(env.mtime(LOGO_HEADER), before);
    assert_eq!(env.read(LOGO_HEADER), content);
    assert!(result.stdout.contains("All 2 headers up to date"));
}

#[test]
fn edited_source_rewrites_its_header() {
    let env = two_asset_project();
    assert_eq!(env.run(&["generate"]).exit_code, 0);

    env.write("assets/logo.svg", "<svg><g/></svg>\n");
    let result = env.run(&["generate", "-v"]);

    assert_eq!(result.exit_code, 0);
    assert!(env.read(LOGO_HEADER).contains("R\"<!>(<svg><g/></svg>\n)<!>\";"));
    assert!(result.stdout.contains("logo_svg.gen.h updated"));
    assert!(result.stdout.contains("run_icon_svg.gen.h unchanged"));
}

#[test]
fn missing_source_fails_only_that_entry() {
    let env = TestEnv::new();
    env.write("assetgen.toml", TWO_ASSET_MANIFEST)
        .write("assets/logo.svg", LOGO_SVG);

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 1);
    assert!(env.exists(LOGO_HEADER));
    assert!(!env.exists(RUN_ICON_HEADER));
    assert!(result.stderr.contains("[FAIL] assets/run_icon.svg"));
    assert!(result.stderr.contains("file not found"));
    assert!(!result.stderr.contains("logo.svg"));
    assert!(result.stdout.contains("1 of 2 entries failed"));
}

#[test]
fn outputs_differing_only_in_case_are_rejected() {
    let env = TestEnv::new();
    env.write(
        "assetgen.toml",
        "[[asset]]\nplatform = \"ios\"\nname = \"Logo\"\nsource = \"assets/Logo.svg\"\n\n\
         [[asset]]\nplatform = \"ios\"\nname = \"logo\"\nsource = \"assets/logo.svg\"\n",
    )
    .write("assets/Logo.svg", LOGO_SVG)
    .write("assets/logo.svg", LOGO_SVG);

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(!env.exists("generated"));
}

#[test]
fn payload_with_default_closer_escalates_delimiter() {
    let env = TestEnv::new();
    env.write("assetgen.toml", TWO_ASSET_MANIFEST)
        .write("assets/logo.svg", LOGO_SVG)
        .write(
            "assets/run_icon.svg",
            "<svg><desc>)<!>\"</desc></svg>\n",
        );

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(env
        .read(RUN_ICON_HEADER)
        .ends_with("R\"<!1>(<svg><desc>)<!>\"</desc></svg>\n)<!1>\";\n"));
    assert!(env.read(LOGO_HEADER).contains("R\"<!>("));
}

#[test]
fn duplicate_output_aborts_before_writing() {
    let env = TestEnv::new();
    env.write("assetgen.toml", DUPLICATE_OUTPUT_MANIFEST)
        .write("assets/logo.svg", LOGO_SVG)
        .write("assets/run_icon.svg", RUN_ICON_SVG);

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 2);
    assert!(!env.exists("generated"));
    assert!(result.stderr.contains("is produced by both"));
}

#[test]
fn invalid_name_is_config_error() {
    let env = TestEnv::new();
    env.write(
        "assetgen.toml",
        "[[asset]]\nplatform = \"ios\"\nname = \"run-icon\"\nsource = \"run-icon.svg\"\n",
    );

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("invalid name 'run-icon'"));
}

#[test]
fn malformed_svg_is_rejected() {
    let env = two_asset_project();
    env.write("assets/logo.svg", "<svg><g></svg>");

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 1);
    assert!(!env.exists(LOGO_HEADER));
    assert!(result.stdout.contains("not well-formed"));
}

#[test]
fn validation_can_be_disabled_from_env() {
    let env = two_asset_project();
    env.write("assets/logo.svg", "<svg><g></svg>");

    let result = env.run_with_env(&["generate"], &[("ASSETGEN_VALIDATE_SVG", "0")]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(env.read(LOGO_HEADER).contains("R\"<!>(<svg><g></svg>)<!>\";"));
}

#[test]
fn out_flag_overrides_output_root() {
    let env = two_asset_project();

    let result = env.run(&["generate", "--out", "build/gen", "-j", "2"]);

    assert_eq!(result.exit_code, 0);
    assert!(env.exists("build/gen/ios/logo_svg.gen.h"));
    assert!(!env.exists("generated"));
}

#[test]
fn scan_without_manifest_uses_directory_layout() {
    let env = TestEnv::new();
    env.write("icons/ios/export/logo.svg", LOGO_SVG)
        .write("icons/web/run_icon.svg", RUN_ICON_SVG);

    let result = env.run(&["generate", "--scan", "icons", "--out", "gen"]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(env
        .read("gen/ios/export/logo_svg.gen.h")
        .contains("_ios_logo_svg"));
    assert!(env
        .read("gen/web/run_icon_svg.gen.h")
        .contains("_web_run_icon_svg"));
}

#[test]
fn missing_manifest_is_config_error() {
    let env = TestEnv::new();

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("manifest not found"));
}

#[test]
fn manifest_in_subdirectory_resolves_relative_paths() {
    let env = TestEnv::new();
    env.write("build/assetgen.toml", TWO_ASSET_MANIFEST)
        .write("build/assets/logo.svg", LOGO_SVG)
        .write("build/assets/run_icon.svg", RUN_ICON_SVG);

    let result = env.run(&["generate", "--manifest", "build/assetgen.toml"]);

    assert_eq!(result.exit_code, 0, "{}", result.combined_output());
    assert!(env.exists("build/generated/ios/logo_svg.gen.h"));
}

#[test]
fn unknown_manifest_key_warns_but_runs() {
    let env = two_asset_project();
    env.write(
        "assetgen.toml",
        &format!("{TWO_ASSET_MANIFEST}\n[run]\njbos = 2\n"),
    );

    let result = env.run(&["generate"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stderr.contains("unknown key 'jbos'"));
    assert!(result.stderr.contains("did you mean 'jobs'?"));
}
