use clap::{Args, Parser, Subcommand};
use farmadvisor::logic::CropFilters;
use farmadvisor::models::{
    CropSeason, DataSource, EnvironmentReading, Fertility, RainfallPeriod, SoilReading, Tier,
};
use farmadvisor::{AdvisorError, GrowthStage, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmadvisor",
    version,
    about = "Crop, fertilizer and soil advisory engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank crops for the given weather and soil
    Crops {
        #[command(flatten)]
        weather: WeatherArgs,

        #[command(flatten)]
        soil: SoilArgs,

        /// Only crops grown in this season (kharif, rabi, zaid, ...)
        #[arg(long)]
        season: Option<String>,

        /// Only crops in this profitability tier (high, medium, low)
        #[arg(long)]
        profitability: Option<String>,

        /// Only crops whose name contains this text
        #[arg(long)]
        name: Option<String>,

        /// Return the longer result list
        #[arg(long)]
        extended: bool,

        /// Month (1-12) used for season alignment instead of today
        #[arg(long)]
        month: Option<u32>,
    },
    /// Rank fertilizers for a crop, soil and growth stage
    Fertilizers {
        #[arg(long)]
        crop: Option<String>,

        #[command(flatten)]
        soil: SoilArgs,

        /// Growth stage: seedling, vegetative, flowering or fruiting
        #[arg(long)]
        stage: Option<String>,
    },
    /// Build balanced, straight and organic dosage plans for a crop
    Plan {
        #[arg(long)]
        crop: String,

        /// Yield target as a percentage of the standard requirement
        #[arg(long)]
        yield_target: Option<f64>,

        #[command(flatten)]
        soil: SoilArgs,
    },
    /// Show the cropping season and in-season crops for a month
    Season {
        #[arg(long)]
        month: Option<u32>,
    },
    /// Soil status and corrective advisories
    Soil {
        #[command(flatten)]
        soil: SoilArgs,
    },
    /// Plant diseases for a crop, with risk under given conditions
    Diseases {
        #[arg(long)]
        crop: Option<String>,

        #[arg(long)]
        temperature: Option<f64>,

        #[arg(long)]
        humidity: Option<f64>,

        /// Fetch current conditions from the configured provider
        #[arg(long, conflicts_with_all = ["temperature", "humidity"])]
        fetch: bool,
    },
    /// Summary statistics over the reference catalog
    Analytics,
    /// Fertilizer price list
    Prices,
    /// Validate config and catalog, and test connections
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WeatherArgs {
    /// Air temperature in °C
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Relative humidity in %
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Rainfall in mm (daily unless --annual-rainfall)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Treat --rainfall as an annual total
    #[arg(long, requires = "rainfall")]
    pub annual_rainfall: bool,

    /// Fetch current conditions from the configured provider
    #[arg(long, conflicts_with_all = ["temperature", "humidity", "rainfall"])]
    pub fetch: bool,
}

impl WeatherArgs {
    /// Reading from the manual flags. All three values or none.
    pub fn manual_reading(&self) -> Result<Option<EnvironmentReading>> {
        match (self.temperature, self.humidity, self.rainfall) {
            (None, None, None) => Ok(None),
            (Some(t), Some(h), Some(rain)) => {
                let period = if self.annual_rainfall {
                    RainfallPeriod::Annual
                } else {
                    RainfallPeriod::Daily
                };
                let reading = EnvironmentReading::new(DataSource::Manual, t, h, rain, period);
                reading.validate()?;
                Ok(Some(reading))
            }
            _ => Err(AdvisorError::invalid(
                "--temperature, --humidity and --rainfall must be given together",
            )),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SoilArgs {
    /// Soil pH (0-14)
    #[arg(long)]
    pub ph: Option<f64>,

    /// Soil fertility: high, medium or low
    #[arg(long)]
    pub fertility: Option<String>,

    /// Soil type, e.g. loamy or clay
    #[arg(long)]
    pub soil_type: Option<String>,

    /// Available nitrogen in kg/ha
    #[arg(long)]
    pub nitrogen: Option<f64>,

    /// Available phosphorus in kg/ha
    #[arg(long)]
    pub phosphorus: Option<f64>,

    /// Available potassium in kg/ha
    #[arg(long)]
    pub potassium: Option<f64>,
}

impl SoilArgs {
    /// `None` when no soil flags were given. Any soil flag requires --ph.
    pub fn reading(&self) -> Result<Option<SoilReading>> {
        let any_other = self.fertility.is_some()
            || self.soil_type.is_some()
            || self.nitrogen.is_some()
            || self.phosphorus.is_some()
            || self.potassium.is_some();

        let ph = match self.ph {
            Some(ph) => ph,
            None if any_other => {
                return Err(AdvisorError::invalid("soil flags require --ph"));
            }
            None => return Ok(None),
        };

        let fertility = self
            .fertility
            .as_deref()
            .map(Fertility::from_str)
            .unwrap_or(Fertility::Unknown);

        let mut reading = SoilReading::new(ph, fertility);
        reading.source = DataSource::Manual;
        reading.soil_type = self.soil_type.clone();
        reading.nitrogen = self.nitrogen;
        reading.phosphorus = self.phosphorus;
        reading.potassium = self.potassium;
        reading.validate()?;
        Ok(Some(reading))
    }
}

pub fn parse_filters(
    season: Option<&str>,
    profitability: Option<&str>,
    name: Option<String>,
) -> Result<CropFilters> {
    let season = season
        .map(|s| {
            CropSeason::from_str(s)
                .ok_or_else(|| AdvisorError::invalid(format!("unknown season '{}'", s)))
        })
        .transpose()?;
    let profitability = profitability
        .map(|s| {
            Tier::from_str(s)
                .ok_or_else(|| AdvisorError::invalid(format!("unknown profitability tier '{}'", s)))
        })
        .transpose()?;

    Ok(CropFilters {
        season,
        profitability,
        name,
    })
}

pub fn parse_stage(stage: Option<&str>) -> Result<Option<GrowthStage>> {
    stage
        .map(|s| {
            GrowthStage::from_str(s)
                .ok_or_else(|| AdvisorError::invalid(format!("unknown growth stage '{}'", s)))
        })
        .transpose()
}
