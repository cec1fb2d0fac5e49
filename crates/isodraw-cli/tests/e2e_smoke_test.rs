use std::{fs, path::PathBuf};

use miette::Diagnostic;
use tempfile::tempdir;

use isodraw_cli::{Args, error_adapter::to_reportable, run};

/// Collects all .toml scene files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demo scenes live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_scene_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir
            .path()
            .join(demo_path.file_name().unwrap());

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        match run(&args) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("Output was written");
                let document: toml::Table = toml::from_str(&written).expect("Output is TOML");
                assert!(document.contains_key("item"), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

/// The diagnostic code each error demo must fail with
const EXPECTED_ERROR_CODES: &[(&str, &str)] = &[
    ("flat_shape_added_as_solid", "isodraw::drawing"),
    ("misspelled_field", "isodraw::scene"),
    ("origin_not_point", "isodraw::invalid_argument"),
    ("too_few_vertices", "isodraw::invalid_argument"),
    ("transform_extrusion", "isodraw::unsupported_kind"),
    ("unknown_binding", "isodraw::binding"),
    ("unknown_op", "isodraw::scene"),
];

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_scene_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut mismatched = Vec::new();

    for demo_path in &error_demos {
        let stem = demo_path.file_stem().unwrap().to_string_lossy().to_string();
        let expected = EXPECTED_ERROR_CODES
            .iter()
            .find(|(name, _)| *name == stem)
            .map(|(_, code)| *code)
            .unwrap_or_else(|| panic!("No expected code listed for {}", demo_path.display()));

        let output_path = temp_dir.path().join(format!("error_{stem}.toml"));

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        let actual = match run(&args) {
            Ok(()) => "succeeded".to_string(),
            Err(err) => {
                let reportable = to_reportable(&err);
                reportable
                    .code()
                    .map(|code| code.to_string())
                    .unwrap_or_default()
            }
        };

        if actual != expected {
            mismatched.push((demo_path.clone(), expected, actual));
        }
    }

    if !mismatched.is_empty() {
        eprintln!("\nError demos that did not fail as expected:");
        for (path, expected, actual) in &mismatched {
            eprintln!("  - {}: expected {expected}, got {actual}", path.display());
        }
        panic!("{} error demo(s) failed differently", mismatched.len());
    }

    assert_eq!(error_demos.len(), EXPECTED_ERROR_CODES.len());
}

#[test]
fn e2e_explicit_config_sets_background() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[drawing]\ncull = true\n\n[style]\nbackground_color = \"white\"\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("town.toml");

    let args = Args {
        input: demos_path().join("town.toml").to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    run(&args).expect("town demo renders");

    let document: toml::Table =
        toml::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(document["background"].as_str(), Some("#ffffffff"));
    assert_eq!(document["drawing"]["cull"].as_bool(), Some(true));
    assert_eq!(document["item"].as_array().unwrap().len(), 4);
}
