use std::{path::PathBuf, process};
use clap::Parser;
use dotenv::dotenv;
use log::*;

use weblog_alert::{healthcheck, processor, utility, Opts};
use weblog_alert::processor::ProcessorConfig;

fn main()
{
    env_logger::init();
    dotenv().ok();
    let options = Opts::parse();

    let webhook_url = options.webhook_url.clone().unwrap_or_else(utility::get_webhook_url);
    if webhook_url.is_empty() {
        eprintln!("No webhook URL set. Use --webhook-url or the SLACK_WEBHOOK_URL environment variable.");
        process::exit(1);
    }

    if options.health_check {
        let target_url = options.target_url.clone().unwrap_or_else(utility::get_target_url);
        if target_url.is_empty() {
            eprintln!("No target URL set. Use --target-url or the TARGET_URL environment variable.");
            process::exit(1);
        }
        if let Err(e) = healthcheck::run_health_check(&target_url, &webhook_url) {
            error!("health check alert delivery failed: {:#}", e);
        }
        return;
    }

    let log_dir = options.log_dir.clone().unwrap_or_else(utility::get_log_dir);
    if log_dir.is_empty() {
        eprintln!("No log directory set. Use --log-dir or the LOG_DIR environment variable.");
        process::exit(1);
    }
    let date = options.date.clone().unwrap_or_else(utility::today);

    let config = ProcessorConfig { log_dir: PathBuf::from(log_dir), webhook_url };
    // Expected anomalies (missing file, malformed lines, webhook failures) are
    // handled inside the run; an error here is a real filesystem problem.
    if let Err(e) = processor::process_logs_for_date(&config, &date) {
        error!("run aborted: {:#}", e);
        process::exit(1);
    }
}
