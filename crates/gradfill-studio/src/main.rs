use std::path::PathBuf;

use anyhow::{Result, bail};

use gradfill_engine::control::StandardControl;
use gradfill_engine::logging::{LoggingConfig, init_logging};
use gradfill_engine::session::Session;
use gradfill_ui::{GradientFill, RadialGradientFill};

mod scenario;

use scenario::{ControlKind, Scenario};

const USAGE: &str = "usage: gradfill-studio [scenario.json] [--all]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    scenario: Option<PathBuf>,
    /// Print markup after every update instead of only at the end.
    all: bool,
    help: bool,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    for arg in argv {
        match arg.as_str() {
            "--all" => args.all = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with('-') => bail!("unknown flag '{flag}'\n{USAGE}"),
            path if args.scenario.is_none() => args.scenario = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => {
            log::info!("no scenario given; running the built-in demo");
            Scenario::builtin()?
        }
    };

    log::info!("driving {:?} through {} updates", scenario.control, scenario.updates.len());
    match scenario.control {
        ControlKind::GradientFill => run(GradientFill::new(), &scenario, args.all),
        ControlKind::RadialGradientFill => run(RadialGradientFill::new(), &scenario, args.all),
    }
    Ok(())
}

fn run<C: StandardControl>(control: C, scenario: &Scenario, all: bool) {
    let mut session = Session::new(control);
    let mut init_ctx = scenario.updates.first().cloned().unwrap_or_default();
    session.mount(&mut init_ctx);
    if all {
        print_step("init", &session.markup());
    }

    for (i, ctx) in scenario.updates.iter().enumerate() {
        session.update(ctx);
        if all {
            print_step(&format!("update {}", i + 1), &session.markup());
        }
    }

    if !all {
        println!("{}", session.markup());
    }
    session.unmount();
}

fn print_step(label: &str, markup: &str) {
    println!("── {label} ──");
    println!("{markup}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args> {
        parse_args(argv.iter().map(|a| a.to_string()))
    }

    #[test]
    fn help_flag_is_reported_not_acted_on() {
        let args = parse(&["demo.json", "--help"]).unwrap();
        assert!(args.help);
        assert_eq!(args.scenario, Some(PathBuf::from("demo.json")));
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn no_arguments_runs_the_builtin_demo() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn bad_arguments_are_rejected() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(err.to_string().contains("unknown flag '--verbose'"));
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
