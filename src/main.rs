mod cli;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{parse_filters, parse_stage, Cli, Commands, SoilArgs, WeatherArgs};
use farmadvisor::datasources::WeatherSource;
use farmadvisor::logic::dosage::{estimate_soil_supply, requirement_for, DosagePlanner};
use farmadvisor::logic::rules::disease_pressure::diseases_at_risk;
use farmadvisor::logic::rules::AdvisoryContext;
use farmadvisor::logic::{analytics, season};
use farmadvisor::models::{DataSource, EnvironmentReading, RainfallPeriod};
use farmadvisor::{report, AdvisoryEngine, Catalog, Config};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.clone()).context("Configuration error")?;
    let json = cli.json;

    match cli.command {
        None => {
            println!("No command given. Run `farmadvisor --help` for usage.");
            Ok(())
        }
        Some(Commands::Crops {
            weather,
            soil,
            season,
            profitability,
            name,
            extended,
            month,
        }) => {
            let filters = parse_filters(season.as_deref(), profitability.as_deref(), name)?;
            run_crops(&config, &weather, &soil, filters, extended, month, json).await
        }
        Some(Commands::Fertilizers { crop, soil, stage }) => {
            run_fertilizers(&config, crop.as_deref(), &soil, stage.as_deref(), json)
        }
        Some(Commands::Plan {
            crop,
            yield_target,
            soil,
        }) => run_plan(&config, &crop, yield_target, &soil, json),
        Some(Commands::Season { month }) => run_season(&config, month, json),
        Some(Commands::Soil { soil }) => run_soil(&soil, json),
        Some(Commands::Diseases {
            crop,
            temperature,
            humidity,
            fetch,
        }) => run_diseases(&config, crop.as_deref(), temperature, humidity, fetch, json).await,
        Some(Commands::Analytics) => {
            let catalog = config.load_catalog()?;
            let summary = analytics::analyze(&catalog);
            emit(json, &summary, || report::analytics_text(&summary))
        }
        Some(Commands::Prices) => {
            let prices = config.load_catalog()?.price_list();
            emit(json, &prices, || report::price_list_text(&prices))
        }
        Some(Commands::Check) => run_check(&config).await,
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

async fn resolve_weather(
    config: &Config,
    args: &WeatherArgs,
) -> anyhow::Result<Option<EnvironmentReading>> {
    if args.fetch {
        let source = WeatherSource::new(config);
        tracing::debug!(provider = source.provider(), "Fetching current weather");
        return Ok(Some(source.current().await?));
    }
    Ok(args.manual_reading()?)
}

async fn run_crops(
    config: &Config,
    weather_args: &WeatherArgs,
    soil_args: &SoilArgs,
    filters: farmadvisor::CropFilters,
    extended: bool,
    month: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let mut ranker = config.ranker()?;
    if let Some(month) = month {
        ranker = ranker.with_month(month)?;
    }

    let weather = resolve_weather(config, weather_args).await?;
    let soil = soil_args.reading()?;

    if weather.is_none() && soil.is_none() && filters.is_empty() {
        let season = season::current_season(ranker.month())?;
        tracing::info!(%season, "No conditions given, using seasonal recommendations");
        let ranked = ranker.seasonal_recommendations(&catalog)?;
        return emit(json, &ranked, || {
            format!(
                "No weather data; showing {} season crops.\n{}",
                season,
                report::crop_table(&ranked)
            )
        });
    }

    let ranked = if extended {
        ranker.rank_crops_extended(&catalog.crops, weather.as_ref(), soil.as_ref(), &filters)?
    } else {
        ranker.rank_crops(&catalog.crops, weather.as_ref(), soil.as_ref(), &filters)?
    };

    emit(json, &ranked, || {
        let mut out = String::new();
        if let Some(w) = &weather {
            out.push_str(&format!("Weather: {}\n", report::weather_line(w)));
        }
        out.push_str(&report::crop_table(&ranked));
        out
    })
}

fn run_fertilizers(
    config: &Config,
    crop: Option<&str>,
    soil_args: &SoilArgs,
    stage: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let crop_name = crop.map(|c| display_crop_name(&catalog, c));
    let soil = soil_args.reading()?;
    let stage = parse_stage(stage)?;

    let ranked = config.fertilizer_ranker()?.rank(
        &catalog.fertilizers,
        crop_name.as_deref(),
        soil.as_ref(),
        stage,
    )?;
    emit(json, &ranked, || report::fertilizer_table(&ranked))
}

/// Catalog name for a crop id or name, or the input as typed.
fn display_crop_name(catalog: &Catalog, key: &str) -> String {
    catalog
        .find_crop(key)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| key.to_string())
}

fn run_plan(
    config: &Config,
    crop: &str,
    yield_target: Option<f64>,
    soil_args: &SoilArgs,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let crop_name = display_crop_name(&catalog, crop);
    let soil = soil_args.reading()?;

    let requirement = requirement_for(&catalog, crop);
    let supply = estimate_soil_supply(soil.as_ref());
    let plans = DosagePlanner::new(&catalog)?.plan(&requirement, &supply, yield_target)?;

    emit(json, &plans, || {
        let mut out = format!(
            "{}: requirement {}, estimated soil supply {}\n\n",
            crop_name, requirement, supply
        );
        for plan in &plans {
            out.push_str(&report::plan_text(plan));
            out.push('\n');
        }
        out
    })
}

#[derive(Serialize)]
struct SeasonSummary<'a> {
    month: u32,
    season: farmadvisor::models::CropSeason,
    temperate_season: farmadvisor::models::CropSeason,
    crops: Vec<&'a str>,
}

fn run_season(config: &Config, month: Option<u32>, json: bool) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let month = month.unwrap_or_else(season::current_month);
    let current = season::current_season(month)?;
    let summary = SeasonSummary {
        month,
        season: current,
        temperate_season: season::temperate_season(month)?,
        crops: season::seasonal_crops(&catalog, current)
            .iter()
            .map(|c| c.name.as_str())
            .collect(),
    };

    emit(json, &summary, || {
        format!(
            "Month {}: {} season ({})\nCrops: {}\n",
            summary.month,
            summary.season,
            summary.temperate_season,
            summary.crops.join(", ")
        )
    })
}

fn run_soil(soil_args: &SoilArgs, json: bool) -> anyhow::Result<()> {
    let soil = soil_args
        .reading()?
        .ok_or_else(|| anyhow!("soil analysis needs at least --ph"))?;
    let report = AdvisoryEngine::new().soil_report(&soil);
    emit(json, &report, || report::soil_report_text(&report))
}

async fn run_diseases(
    config: &Config,
    crop: Option<&str>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    fetch: bool,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;

    let Some(crop) = crop else {
        return emit(json, &catalog.diseases, || {
            catalog.diseases.iter().map(report::disease_text).collect()
        });
    };
    let profile = catalog
        .find_crop(crop)
        .ok_or_else(|| anyhow!("crop '{}' is not in the catalog", crop))?;

    let weather = match (fetch, temperature, humidity) {
        (true, _, _) => Some(WeatherSource::new(config).current().await?),
        (false, Some(t), Some(h)) => {
            let reading =
                EnvironmentReading::new(DataSource::Manual, t, h, 0.0, RainfallPeriod::Daily);
            reading.validate()?;
            Some(reading)
        }
        (false, None, None) => None,
        _ => return Err(anyhow!("--temperature and --humidity must be given together")),
    };

    let Some(weather) = weather else {
        let diseases = catalog.diseases_for_crop(&profile.name);
        return emit(json, &diseases, || {
            diseases.iter().map(|d| report::disease_text(d)).collect()
        });
    };

    let at_risk = diseases_at_risk(
        &catalog.diseases,
        &profile.name,
        weather.temperature_c,
        weather.humidity_percent,
    );
    let ctx = AdvisoryContext {
        weather: Some(&weather),
        crop: Some(profile),
        diseases: &catalog.diseases,
        ..Default::default()
    };
    let advisory = AdvisoryEngine::new().evaluate_rule("disease_pressure", &ctx);

    if json {
        #[derive(Serialize)]
        struct DiseaseRisk<'a> {
            crop: &'a str,
            weather: &'a EnvironmentReading,
            at_risk: Vec<&'a str>,
            advisory: Option<farmadvisor::models::Advisory>,
        }
        let risk = DiseaseRisk {
            crop: &profile.name,
            weather: &weather,
            at_risk: at_risk.iter().map(|d| d.id.as_str()).collect(),
            advisory,
        };
        println!("{}", serde_json::to_string_pretty(&risk)?);
        return Ok(());
    }

    println!("Weather: {}", report::weather_line(&weather));
    match advisory {
        Some(advisory) => print!("{}", report::advisory_text(&advisory)),
        None => println!("No disease pressure expected for {}.", profile.name),
    }
    Ok(())
}

async fn run_check(config: &Config) -> anyhow::Result<()> {
    println!("Validating configuration...");
    println!(
        "  Location: {} ({:.4}, {:.4})",
        config.location.name, config.location.latitude, config.location.longitude
    );

    let issues = config.validate().context("Configuration is invalid")?;
    println!("  Scoring weights: OK");
    if issues.is_empty() {
        println!("  Catalog: OK");
    } else {
        println!("  Catalog: {} entries skipped", issues.len());
        for issue in &issues {
            println!("    - {}", issue);
        }
    }

    let engine = AdvisoryEngine::new();
    println!("  Advisory rules: {}", engine.list_rules().len());

    let source = WeatherSource::new(config);
    print!("  Weather provider ({}): ", source.provider());
    if source.check_connection().await {
        println!("OK");
    } else {
        println!("OFFLINE");
    }
    Ok(())
}
