//! greeknames - Greek name correction CLI

use clap::{Arg, ArgAction, Command};
use greeknames::config::load_config;
use greeknames::{CorrectionRequest, CorrectionResponse, GrammaticalCase, NameCorrector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("greeknames")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Correct, classify and decline Greek personal names")
        .arg(
            Arg::new("names")
                .help("Names to correct (Greek or Latin script)")
                .num_args(1..)
                .required_unless_present("request"),
        )
        .arg(
            Arg::new("case")
                .long("case")
                .short('c')
                .help("Target case: nominative, genitive, accusative or vocative"),
        )
        .arg(
            Arg::new("fix-errors")
                .long("fix-errors")
                .short('f')
                .help("Repair common spelling mistakes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("request")
                .long("request")
                .short('r')
                .help("Process one JSON request body: {\"name\": ..., \"options\": {...}}")
                .conflicts_with("names"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print one JSON object per line")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config();
    let corrector = NameCorrector::new();
    let pretty = config.pretty && !matches.get_flag("compact");

    let responses: Vec<CorrectionResponse> = match matches.get_one::<String>("request") {
        Some(body) => {
            let request: CorrectionRequest = serde_json::from_str(body)?;
            vec![corrector.correct_request(&request)]
        }
        None => {
            let mut options = config.options();
            if let Some(case) = matches.get_one::<String>("case") {
                let case: GrammaticalCase = case.parse()?;
                options = options.with_target_case(case);
            }
            if matches.get_flag("fix-errors") {
                options = options.with_fix_common_errors(true);
            }
            let names = matches
                .get_many::<String>("names")
                .into_iter()
                .flatten();
            corrector.correct_batch(names, &options)
        }
    };

    for response in &responses {
        let line = if pretty {
            serde_json::to_string_pretty(response)?
        } else {
            serde_json::to_string(response)?
        };
        println!("{}", line);
    }

    if responses.iter().any(|r| r.error().is_some()) {
        std::process::exit(1);
    }

    Ok(())
}
