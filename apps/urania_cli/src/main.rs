mod replay;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use urania::chart::{ChartAssembler, SubjectRequest};
use urania::narrator::narrate_localized;
use urania::source::{resolve_source, ChartProvider};
use urania::timezone::{estimate_offset_hours, to_utc};
use urania::zodiac::Locale;
use urania_astrologer::AstrologerClient;

use replay::ReplayProvider;

#[derive(Parser, Debug)]
#[command(name = "urania", author, version, about = "Natal chart builder")]
struct Args {
    /// Person the chart is for.
    #[arg(long)]
    name: Option<String>,

    /// Birth date, `YYYY-MM-DD`.
    #[arg(long)]
    date: Option<String>,

    /// Local birth time, `HH:mm`.
    #[arg(long)]
    time: Option<String>,

    /// Birth place; the part before the first comma is sent as the city.
    #[arg(long)]
    place: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Config file (defaults to configs/urania.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display locale for sign names (`pt-BR` or `en`). Overrides the config.
    #[arg(long)]
    locale: Option<Locale>,

    /// Skip the provider and use demo data.
    #[arg(long)]
    offline: bool,

    /// Replay a recorded provider response instead of calling the API.
    #[arg(long, conflicts_with = "offline")]
    payload: Option<PathBuf>,

    /// Print the plain-text summary instead of JSON.
    #[arg(long)]
    narrate: bool,
}

impl Args {
    fn subject_request(&self) -> SubjectRequest {
        SubjectRequest {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            place: self.place.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = urania_config::load_settings(args.config.as_deref())?;
    let locale = args.locale.unwrap_or(settings.chart.locale);

    let subject = match args.subject_request().validate() {
        Ok(subject) => subject,
        Err(err) => {
            eprintln!("Invalid birth data:");
            for issue in &err.issues {
                eprintln!("  {}: {}", issue.field, issue.message);
            }
            std::process::exit(2);
        }
    };

    if let Some(offset) = estimate_offset_hours(subject.longitude) {
        let utc = to_utc(&subject.date, &subject.time, offset);
        log::info!(
            "Approximate UTC birth time: {} {} (offset {:+}h)",
            utc.date,
            utc.time,
            offset
        );
    }

    let provider: Option<Box<dyn ChartProvider>> = if args.offline {
        None
    } else if let Some(path) = &args.payload {
        Some(Box::new(ReplayProvider::new(path.clone())))
    } else {
        let client = AstrologerClient::from_env(settings.provider.clone())
            .context("Failed to build Astrologer client")?;
        Some(Box::new(client))
    };

    let source = resolve_source(provider.as_deref(), &subject).await;
    let assembler = ChartAssembler::new(locale);
    let generated = assembler.assemble(&subject, source);

    if let Some(warning) = &generated.warning {
        eprintln!("warning: {}", warning);
    }

    if args.narrate {
        print!("{}", narrate_localized(&generated.chart, assembler.locale()));
    } else {
        let json = serde_json::to_string_pretty(&generated).context("Failed to serialize chart")?;
        println!("{}", json);
    }
    Ok(())
}
