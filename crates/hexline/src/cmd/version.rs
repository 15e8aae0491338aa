use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("hexline {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: hexline");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "build_target: {}",
        option_env!("HEXLINE_BUILD_TARGET").unwrap_or("unknown")
    );

    Ok(SUCCESS)
}
