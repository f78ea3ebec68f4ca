// demos/make_header.rs
//
// usage: make_header name.hdr x y z t datatype max min
use analyze_rs::header::narrow_dim;
use analyze_rs::*;
use std::fs::File;
use std::process::ExitCode;

fn usage() {
    eprintln!("usage: make_header name.hdr x y z t datatype max min");
    eprintln!(" x = width, y = height, z = depth, t = number of volumes");
    eprintln!(" datatype: BINARY, CHAR, SHORT, INT, FLOAT, COMPLEX, DOUBLE or RGB");
    eprintln!(" max = maximum voxel value, min = minimum voxel value");
}

fn parse_int(name: &str, arg: &str) -> Result<i64> {
    arg.trim().parse::<i64>().map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} must be an integer, got '{}'", name, arg),
        )
        .into()
    })
}

fn run(args: &[String]) -> Result<()> {
    let width = narrow_dim("width", parse_int("width", &args[2])?);
    let height = narrow_dim("height", parse_int("height", &args[3])?);
    let depth = narrow_dim("depth", parse_int("depth", &args[4])?);
    let volumes = narrow_dim("volumes", parse_int("volumes", &args[5])?);
    let glmax = parse_int("max", &args[7])? as i32;
    let glmin = parse_int("min", &args[8])? as i32;

    // Validate before the destination file is created
    let header = HeaderRecord::build(width, height, depth, volumes, &args[6], glmax, glmin)?;

    let mut file = File::create(&args[1])?;
    header.write_to(&mut file)?;
    log::info!("wrote {} ({} bytes)", args[1], HEADER_SIZE);
    Ok(())
}

fn main() -> ExitCode {
    stderrlog::new()
        .module(module_path!())
        .module("analyze_rs")
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 9 {
        usage();
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("make_header: {}", e);
            if matches!(e, AnalyzeError::InvalidDatatype(_)) {
                usage();
            }
            ExitCode::FAILURE
        }
    }
}
