//! Prints weekly schedules, prescriptions and a weekly MET-minute summary.
//!
//! ```bash
//! cargo run --bin prescription-report -- --age 10 --age 35 --age 70 --weight 70
//! cargo run --bin prescription-report -- --activity 快走:30x5 --activity 游泳:45x2
//! cargo run --bin prescription-report -- --intro
//! ```

use clap::Parser;
use env_logger::Env;
use fittvp_backend::{
    models::activity::ActivityLogEntry,
    models::guideline::PrescriptionRequest,
    report,
    services::{energy, guidelines},
};

#[derive(Parser)]
#[command(
    name = "prescription-report",
    about = "Age-based exercise prescriptions and weekly MET-minute totals"
)]
struct ReportArgs {
    /// Ages to build schedules and prescriptions for
    #[arg(long = "age", default_values_t = [10, 35, 70])]
    ages: Vec<i32>,

    /// Body weight in kilograms used for calorie estimates
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Weekly activity as NAME:MINUTESxSESSIONS (repeatable)
    #[arg(long = "activity", value_parser = report::parse_log_entry)]
    activities: Vec<ActivityLogEntry>,

    /// Fail when an activity name has no catalog match
    #[arg(long)]
    strict: bool,

    /// Print the MET introduction first
    #[arg(long)]
    intro: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = ReportArgs::parse();

    if !(args.weight.is_finite() && args.weight > 0.0) {
        eprintln!("--weight must be a positive number");
        std::process::exit(2);
    }

    if args.intro {
        println!("{}", report::format_met_introduction(energy::met_introduction()));
    }

    for &age in &args.ages {
        println!("{}", report::format_schedule(age, &guidelines::create_weekly_schedule(age)));

        let request = PrescriptionRequest::new(age, args.weight);
        println!("{}", report::format_prescription(&guidelines::create_individualized_prescription(&request)));
    }

    println!("{}", report::format_activity_table(args.weight));

    let activities = if args.activities.is_empty() {
        vec![ActivityLogEntry::new("快走", 30, 5), ActivityLogEntry::new("游泳", 45, 2)]
    } else {
        args.activities
    };

    let summary = if args.strict {
        match energy::calculate_weekly_met_minutes_strict(&activities) {
            Ok(summary) => summary,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    } else {
        energy::calculate_weekly_met_minutes(&activities)
    };

    print!("{}", report::format_met_summary(&summary));
}
