//! Build script for badgeview-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates badge.toml and generates the settings constant
//! - Validates the badge assets and generates the embedded image table

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 296×128 at 1 bit per pixel
const IMAGE_BYTES: u64 = 296 * 128 / 8;
/// 104×128 at 1 bit per pixel
const PORTRAIT_BYTES: u64 = 104 * 128 / 8;
/// Catalog capacity of the core
const MAX_IMAGES: usize = 64;
/// Largest stored profile document
const MAX_PROFILE_BYTES: usize = 512;

const MIN_BATTERY_MV: i64 = 2000;
const MAX_BATTERY_MV: i64 = 3700;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_settings(&out_dir);
    generate_assets(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Print a boxed error and stop the build
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .flat_map(|msg| msg.lines())
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up `[section] key` as a non-negative integer
fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(value)) if *value >= 0 && *value <= i64::from(u32::MAX) => *value,
        Some(_) => {
            errors.push(format!("[{}] {} must be a non-negative integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Validate badge.toml and emit `settings.rs`
fn generate_settings(out_dir: &Path) {
    println!("cargo:rerun-if-changed=badge.toml");

    let config_path = Path::new("badge.toml");
    if !config_path.exists() {
        fail(
            "badge.toml not found!",
            &["Create one in the badgeview-firmware directory.".to_string()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read badge.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in badge.toml", &[e.to_string()]),
    };

    let mut errors = Vec::new();
    let idle_delay_ms = integer(&config, "gallery", "idle_delay_ms", &mut errors);
    let autoscroll_period_ms = integer(&config, "gallery", "autoscroll_period_ms", &mut errors);
    let tick_ms = integer(&config, "input", "tick_ms", &mut errors);
    let debounce_ms = integer(&config, "input", "debounce_ms", &mut errors);
    let combo_ms = integer(&config, "input", "combo_ms", &mut errors);
    let min_millivolts = integer(&config, "battery", "min_millivolts", &mut errors);
    let battery_warning_ms = integer(&config, "battery", "warning_ms", &mut errors);
    let empty_warning_ms = integer(&config, "gallery_empty", "warning_ms", &mut errors);

    if errors.is_empty() {
        if autoscroll_period_ms == 0 {
            errors.push("[gallery] autoscroll_period_ms must be greater than 0".to_string());
        }
        if idle_delay_ms <= autoscroll_period_ms {
            errors.push(
                "[gallery] idle_delay_ms must be greater than autoscroll_period_ms".to_string(),
            );
        }
        if tick_ms == 0 {
            errors.push("[input] tick_ms must be greater than 0".to_string());
        }
        if combo_ms < tick_ms {
            errors.push("[input] combo_ms must be at least tick_ms".to_string());
        }
        if !(MIN_BATTERY_MV..=MAX_BATTERY_MV).contains(&min_millivolts) {
            errors.push(format!(
                "[battery] min_millivolts must be {}-{}",
                MIN_BATTERY_MV, MAX_BATTERY_MV
            ));
        }
    }

    if !errors.is_empty() {
        fail("Invalid settings in badge.toml", &errors);
    }

    let generated = format!(
        "pub const SETTINGS: Settings = Settings {{\n\
        \x20   gallery: GalleryTiming {{\n\
        \x20       idle_delay_ms: {idle_delay_ms},\n\
        \x20       autoscroll_period_ms: {autoscroll_period_ms},\n\
        \x20   }},\n\
        \x20   input: InputTiming {{\n\
        \x20       tick_ms: {tick_ms},\n\
        \x20       debounce_ms: {debounce_ms},\n\
        \x20       combo_ms: {combo_ms},\n\
        \x20   }},\n\
        \x20   battery: BatteryLimits {{\n\
        \x20       min_millivolts: {min_millivolts},\n\
        \x20       warning_ms: {battery_warning_ms},\n\
        \x20   }},\n\
        \x20   no_images_warning_ms: {empty_warning_ms},\n\
        }};\n"
    );
    fs::write(out_dir.join("settings.rs"), generated).unwrap();
}

/// Validate badge.txt, badge.bin and images/*.bin, emit `assets.rs`
fn generate_assets(out_dir: &Path) {
    println!("cargo:rerun-if-changed=badge.txt");
    println!("cargo:rerun-if-changed=badge.bin");
    println!("cargo:rerun-if-changed=images");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let mut errors = Vec::new();
    let mut generated = String::new();

    // Profile document
    let profile_path = manifest_dir.join("badge.txt");
    match fs::read(&profile_path) {
        Ok(bytes) => {
            if std::str::from_utf8(&bytes).is_err() {
                errors.push("badge.txt is not valid UTF-8".to_string());
            }
            if bytes.len() > MAX_PROFILE_BYTES {
                errors.push(format!("badge.txt exceeds {} bytes", MAX_PROFILE_BYTES));
            }
            generated.push_str(&format!(
                "pub const PROFILE_TEXT: &str = include_str!({:?});\n",
                profile_path.display().to_string()
            ));
        }
        Err(_) => generated.push_str("pub const PROFILE_TEXT: &str = \"\";\n"),
    }

    // Portrait
    let portrait_path = manifest_dir.join("badge.bin");
    match fs::metadata(&portrait_path) {
        Ok(meta) if meta.len() != PORTRAIT_BYTES => errors.push(format!(
            "badge.bin is {} bytes, expected {} (104x128 1-bit)",
            meta.len(),
            PORTRAIT_BYTES
        )),
        Ok(_) => generated.push_str(&format!(
            "pub static PORTRAIT: Option<&[u8]> = Some(include_bytes!({:?}));\n",
            portrait_path.display().to_string()
        )),
        Err(_) => generated.push_str("pub static PORTRAIT: Option<&[u8]> = None;\n"),
    }

    // Gallery images
    let mut images = Vec::new();
    if let Ok(entries) = fs::read_dir(manifest_dir.join("images")) {
        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_bitmap = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("bin"))
                .unwrap_or(false);
            if !is_bitmap {
                println!("cargo:warning=images/{} skipped (not a .bin bitmap)", name);
                continue;
            }
            match entry.metadata() {
                Ok(meta) if meta.len() == IMAGE_BYTES => images.push((name, path)),
                Ok(meta) => errors.push(format!(
                    "images/{} is {} bytes, expected {} (296x128 1-bit)",
                    name,
                    meta.len(),
                    IMAGE_BYTES
                )),
                Err(e) => errors.push(format!("images/{}: {}", name, e)),
            }
        }
    }
    images.sort();

    if images.len() > MAX_IMAGES {
        errors.push(format!(
            "{} images found, at most {} are supported",
            images.len(),
            MAX_IMAGES
        ));
    }
    if images.is_empty() {
        println!("cargo:warning=images/ holds no bitmaps, the gallery will power the badge off");
    }

    if !errors.is_empty() {
        fail("Invalid badge assets", &errors);
    }

    generated.push_str("pub static IMAGES: &[(&str, &[u8])] = &[\n");
    for (name, path) in &images {
        generated.push_str(&format!(
            "    ({:?}, include_bytes!({:?})),\n",
            name,
            path.display().to_string()
        ));
    }
    generated.push_str("];\n");

    fs::write(out_dir.join("assets.rs"), generated).unwrap();
}
