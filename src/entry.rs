use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use loadshot::app::{RunConfig, render_report, run_load};
use loadshot::args::LoadArgs;
use loadshot::error::{AppError, AppResult, ValidationError};
use loadshot::http::ReqwestTransport;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose);

    apply_config(&mut args, &matches)?;
    let config = build_run_config(&args)?;
    let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(run_load(&config, transport))?;
    println!("{}", render_report(&report, args.output_format)?);
    Ok(())
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut LoadArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = loadshot::config::load_config(args.config.as_deref())? {
        loadshot::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn build_run_config(args: &LoadArgs) -> AppResult<RunConfig> {
    RunConfig::from_args(args).inspect_err(|err| {
        if matches!(err, AppError::Validation(ValidationError::MissingUrl)) {
            tracing::error!("Missing URL (set --url or provide it in the config file).");
        } else {
            tracing::error!("Invalid run configuration: {}", err);
        }
    })
}
