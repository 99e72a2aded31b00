use dayofweek::{DayOfWeekOptions, WeekdayLabeler};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<_> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [options json]", args[0]);
        return;
    }

    let options: DayOfWeekOptions = match args.get(1) {
        Some(json) => serde_json::from_str(json).expect("Failed to parse options"),
        None => DayOfWeekOptions::default(),
    };

    match WeekdayLabeler::new().resolve(&options) {
        Ok(resolved) => println!(
            "{}",
            serde_json::to_string_pretty(&resolved).expect("Failed to serialize")
        ),
        Err(err) => {
            eprintln!("{} ({})", err, err.type_string());
            std::process::exit(1);
        }
    }
}
