//! CLI entry point for brandscale.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};

use brandscale::accessibility::{Severity, ensure_accessibility, validate_palette_contrast};
use brandscale::analyze::analyze_brand_colors;
use brandscale::assemble::{GenerateOptions, build_palette, generate_scales};
use brandscale::cli::{Cli, FormatArg, ModeArg};
use brandscale::config::BrandConfig;
use brandscale::curves::Mode;
use brandscale::{emit, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let _log_guard = logging::init(&logging::LogOptions::new(
        cli.log_file.as_deref(),
        &cli.log_level,
    ));

    let config = match &cli.config {
        Some(path) => {
            let config = BrandConfig::load(path)
                .wrap_err_with(|| format!("Failed to load config {}", path.display()))?;
            config.validate().wrap_err("Invalid configuration")?;
            Some(config)
        }
        None => None,
    };

    if let Some(path) = &cli.save_config {
        cli.to_config()
            .save(path)
            .wrap_err_with(|| format!("Failed to save config to {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    let colors = cli.effective_colors(config.as_ref());
    let name = cli.effective_name(config.as_ref());
    let no_adjust = cli.no_adjust || config.as_ref().is_some_and(|c| c.contrast.no_adjust);

    // One profile for both modes, so the light and dark maps carry the same
    // keys; the two generations are independent after that.
    let analysis = analyze_brand_colors(&colors, Mode::Light);
    for warning in &analysis.warnings {
        eprintln!("Warning: {warning}");
    }

    let profile = analysis.profile;
    let (light, dark) = rayon::join(
        || {
            generate_scales(&GenerateOptions {
                brand_colors: colors.clone(),
                mode: Mode::Light,
                tuning: Some(profile.clone()),
            })
        },
        || {
            generate_scales(&GenerateOptions {
                brand_colors: colors.clone(),
                mode: Mode::Dark,
                tuning: Some(profile.clone()),
            })
        },
    );
    let palette = build_palette(light, dark, &colors);

    let palette = if no_adjust {
        let report = validate_palette_contrast(&palette);
        if !report.passed {
            eprintln!("Contrast failures:");
            for issue in report.issues.iter().filter(|i| i.severity == Severity::Fail) {
                eprintln!("  {issue}");
            }
            bail!("Contrast validation failed");
        }
        palette
    } else {
        ensure_accessibility(palette)
    };

    let report = validate_palette_contrast(&palette);
    for issue in report.issues.iter().filter(|i| i.severity == Severity::Warning) {
        eprintln!("Warning: {issue}");
    }

    if cli.check {
        print!("{}", emit::text_summary(&palette));
        println!(
            "contrast: {}/{} checks passed",
            report.passed_checks, report.total_checks
        );
        return Ok(());
    }

    let artifact = match cli.format {
        FormatArg::Css => emit::css_tokens(&palette),
        FormatArg::Json => emit::json_document(&palette, &name)
            .wrap_err("Failed to serialize palette to JSON")?,
        FormatArg::Tailwind => emit::tailwind_theme(&palette, tailwind_mode(cli.mode)),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &artifact)
                .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Wrote palette to {}", path.display());
        }
        None => print!("{artifact}"),
    }

    Ok(())
}

fn tailwind_mode(arg: ModeArg) -> Mode {
    match arg {
        ModeArg::Dark => Mode::Dark,
        ModeArg::Both | ModeArg::Light => Mode::Light,
    }
}
