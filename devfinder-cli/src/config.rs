use colored::Colorize;
use devfinder_lib::config::CoreConfig;
use sysexits::ExitCode;

pub fn handle() -> ExitCode {
    let path = match CoreConfig::path() {
        Ok(path) => path,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::Config;
        }
    };

    let contents = CoreConfig::load_from(&path).and_then(|cfg| cfg.to_toml());

    match contents {
        Ok(contents) => {
            println!("{}", format!("# {}", path.display()).dimmed());
            print!("{contents}");
            ExitCode::Ok
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::Config
        }
    }
}
