//! CLI boundary shell for the positioning core
//!
//! Parses free-text numeric arguments, validates them, runs the pipeline
//! once and prints the result. All range and parse errors are reported
//! here; the core only ever sees well-formed numbers.

use subsea_positioning::api::{CsvFormatter, JsonFormatter, PositioningApi, TextFormatter};
use subsea_positioning::processing::svp::SvpProfile;
use subsea_positioning::utils::config::SystemConfig;
use subsea_positioning::validation::parse_field;

struct CliOptions {
    positional: Vec<String>,
    svp_path: Option<String>,
    raw_depth: Option<String>,
    config_path: Option<String>,
    output: OutputMode,
}

enum OutputMode {
    Text,
    Json,
    Csv,
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <lat_deg> <lon_deg> <alt_m> <east_m> <north_m> <up_m> [options]",
        program
    );
    eprintln!(
        "   or: {} <lat_deg> <lon_deg> <alt_m> <east_m> <north_m> --svp <profile.csv> --depth <raw_depth_m> [options]",
        program
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --svp <file>     SVP profile CSV (Depth,Velocity) for depth correction");
    eprintln!("  --depth <m>      Raw measured depth to correct (requires --svp)");
    eprintln!("  --config <file>  JSON system configuration");
    eprintln!("  --json           Emit the fix as JSON");
    eprintln!("  --csv            Emit the fix as a CSV record");
}

fn parse_cli(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        positional: Vec::new(),
        svp_path: None,
        raw_depth: None,
        config_path: None,
        output: OutputMode::Text,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--svp" => {
                options.svp_path = Some(
                    iter.next()
                        .ok_or("--svp requires a file argument")?
                        .clone(),
                );
            }
            "--depth" => {
                options.raw_depth = Some(
                    iter.next()
                        .ok_or("--depth requires a value argument")?
                        .clone(),
                );
            }
            "--config" => {
                options.config_path = Some(
                    iter.next()
                        .ok_or("--config requires a file argument")?
                        .clone(),
                );
            }
            "--json" => options.output = OutputMode::Json,
            "--csv" => options.output = OutputMode::Csv,
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {}", other));
            }
            _ => options.positional.push(arg.clone()),
        }
    }

    Ok(options)
}

fn run(options: &CliOptions) -> Result<String, Box<dyn std::error::Error>> {
    let config = match &options.config_path {
        Some(path) => SystemConfig::from_file(path)?,
        None => SystemConfig::default(),
    };
    let api = PositioningApi::from_config(&config);

    let depth_mode = options.raw_depth.is_some() || options.svp_path.is_some();
    let expected = if depth_mode { 5 } else { 6 };
    if options.positional.len() != expected {
        return Err(format!(
            "Expected {} positional arguments, got {}",
            expected,
            options.positional.len()
        )
        .into());
    }

    let lat = parse_field("vessel latitude", &options.positional[0])?;
    let lon = parse_field("vessel longitude", &options.positional[1])?;
    let alt = parse_field("vessel altitude", &options.positional[2])?;
    let east = parse_field("east displacement", &options.positional[3])?;
    let north = parse_field("north displacement", &options.positional[4])?;

    let fix = if depth_mode {
        let depth_text = options
            .raw_depth
            .as_ref()
            .ok_or("--svp requires --depth <raw_depth_m>")?;
        let profile_path = options
            .svp_path
            .clone()
            .or_else(|| config.svp.profile_path.clone())
            .ok_or("--depth requires --svp <profile.csv> or a configured profile path")?;

        let raw_depth = parse_field("raw depth", depth_text)?;
        let profile = SvpProfile::from_csv_file(&profile_path)?;
        api.compute_fix_with_svp(lat, lon, alt, east, north, raw_depth, &profile)?
    } else {
        let up = parse_field("up displacement", &options.positional[5])?;
        api.compute_fix(lat, lon, alt, east, north, up)?
    };

    let rendered = match options.output {
        OutputMode::Text => TextFormatter::new()
            .with_precision(config.output)
            .format(&fix),
        OutputMode::Json => JsonFormatter::pretty().format(&fix)?,
        OutputMode::Csv => CsvFormatter::new().format(&fix),
    };

    Ok(rendered)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map_or("subsea-positioning", |s| s.as_str())
        .to_string();

    let options = match parse_cli(&args[1..]) {
        Ok(options) if !options.positional.is_empty() => options,
        Ok(_) => {
            print_usage(&program);
            return Err("Missing arguments".into());
        }
        Err(message) => {
            print_usage(&program);
            return Err(message.into());
        }
    };

    match run(&options) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(e)
        }
    }
}
