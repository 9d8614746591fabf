use std::path::PathBuf;

use clap::{Parser, Subcommand};

use predictors::artifacts::heart::{HeartModels, load_logistic_regression};
use predictors::artifacts::laptop::{LaptopOptions, LaptopPipeline};
use predictors::artifacts::movie::MovieLibrary;
use predictors::artifacts::spam::{SpamVectorizer, load_model};
use predictors::domain::heart::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, HeartRecord, RestingEcg, Sex, StSlope,
};
use predictors::domain::laptop::LaptopQuery;
use predictors::metadata::{MovieMetadataFetcher, OmdbFetcher};
use predictors::models::config::AppConfig;
use predictors::processing::heart::{BulkPredictError, bulk_predict, predict_single};
use predictors::processing::laptop::predict_price;
use predictors::processing::recommend::{
    DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS, recommend,
};
use predictors::processing::spam::{SpamVerdict, TextNormalizer, classify_message};

#[derive(Parser)]
#[command(
    name = "predictors",
    about = "Demo predictors over pre-trained model artifacts"
)]
struct Cli {
    /// Configuration file name, resolved by the config loader.
    #[arg(long, default_value = "config", env = "PREDICTORS_CONFIG")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend movies similar to a catalog title.
    Recommend {
        #[arg(long)]
        title: String,
        /// Number of recommendations, clamped to 3..=9.
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATIONS)]
        count: usize,
    },
    /// Classify a message as spam or not spam.
    Spam {
        #[arg(long)]
        message: String,
    },
    /// Predict heart disease for one patient with all four models.
    Heart {
        #[arg(long)]
        age: u32,
        /// Male or Female (or the numeric code).
        #[arg(long)]
        sex: String,
        /// Chest pain type label or code.
        #[arg(long)]
        chest_pain: String,
        #[arg(long)]
        resting_bp: u32,
        #[arg(long)]
        cholesterol: u32,
        /// "> 120 mg/dl" / "<= 120 mg/dl" or the numeric code.
        #[arg(long)]
        fasting_bs: String,
        /// Resting ECG label or code.
        #[arg(long)]
        resting_ecg: String,
        #[arg(long)]
        max_hr: u32,
        /// Yes or No (or the numeric code).
        #[arg(long)]
        exercise_angina: String,
        #[arg(long)]
        oldpeak: f32,
        /// ST slope label or code.
        #[arg(long)]
        st_slope: String,
    },
    /// Predict a CSV of patients with the logistic regression model.
    HeartBulk {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Predict a laptop price from its configuration.
    Laptop {
        #[arg(long)]
        company: String,
        #[arg(long)]
        type_name: String,
        #[arg(long)]
        ram_gb: u32,
        #[arg(long)]
        weight_kg: f32,
        #[arg(long)]
        touchscreen: bool,
        #[arg(long)]
        ips: bool,
        #[arg(long)]
        screen_size_in: f32,
        /// Display resolution, e.g. 1920x1080.
        #[arg(long)]
        resolution: String,
        #[arg(long)]
        cpu_brand: String,
        #[arg(long)]
        hdd_gb: u32,
        #[arg(long)]
        ssd_gb: u32,
        #[arg(long)]
        gpu_brand: String,
        #[arg(long)]
        os: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Recommend { title, count } => run_recommend(&config, &title, count).await,
        Command::Spam { message } => run_spam(&config, &message),
        Command::Heart {
            age,
            sex,
            chest_pain,
            resting_bp,
            cholesterol,
            fasting_bs,
            resting_ecg,
            max_hr,
            exercise_angina,
            oldpeak,
            st_slope,
        } => {
            let record = HeartRecord {
                age,
                sex: parse_field("sex", &sex, Sex::parse),
                chest_pain: parse_field("chest pain type", &chest_pain, ChestPainType::parse),
                resting_bp,
                cholesterol,
                fasting_bs: parse_field("fasting blood sugar", &fasting_bs, FastingBloodSugar::parse),
                resting_ecg: parse_field("resting ECG", &resting_ecg, RestingEcg::parse),
                max_hr,
                exercise_angina: parse_field(
                    "exercise angina",
                    &exercise_angina,
                    ExerciseAngina::parse,
                ),
                oldpeak,
                st_slope: parse_field("ST slope", &st_slope, StSlope::parse),
            };
            run_heart(&config, &record);
        }
        Command::HeartBulk { input, output } => run_heart_bulk(&config, &input, &output),
        Command::Laptop {
            company,
            type_name,
            ram_gb,
            weight_kg,
            touchscreen,
            ips,
            screen_size_in,
            resolution,
            cpu_brand,
            hdd_gb,
            ssd_gb,
            gpu_brand,
            os,
        } => {
            let query = LaptopQuery {
                company,
                type_name,
                ram_gb,
                weight_kg,
                touchscreen,
                ips,
                screen_size_in,
                resolution,
                cpu_brand,
                hdd_gb,
                ssd_gb,
                gpu_brand,
                os,
            };
            run_laptop(&config, &query);
        }
    }
}

fn parse_field<T>(field: &str, value: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    match parse(value) {
        Some(parsed) => parsed,
        None => {
            log::error!("Invalid {field}: {value:?}");
            std::process::exit(1);
        }
    }
}

async fn run_recommend(config: &AppConfig, title: &str, count: usize) {
    let library = match MovieLibrary::load(&config.artifacts_dir) {
        Ok(library) => library,
        Err(e) => {
            log::error!("Failed to load movie artifacts: {e}");
            std::process::exit(1);
        }
    };
    let fetcher = match OmdbFetcher::new(&config.omdb_base_url, &config.omdb_api_key) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::error!("Invalid metadata endpoint {}: {e}", config.omdb_base_url);
            std::process::exit(1);
        }
    };

    match fetcher.fetch(title).await {
        Some(selected) => {
            println!("{} ({})", selected.title, selected.year);
            println!("{}", selected.plot);
            println!("Poster: {}", selected.poster);
            println!();
        }
        None => log::warn!("Could not fetch details for {title:?}"),
    }

    let count = count.clamp(MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS);
    match recommend(&library, &fetcher, title, count).await {
        Ok(recommendations) if recommendations.is_empty() => {
            log::warn!("Could not find any recommendations");
        }
        Ok(recommendations) => {
            println!("Recommended for you:");
            for movie in recommendations {
                println!("  {} ({}) - {}", movie.title, movie.year, movie.poster);
            }
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run_spam(config: &AppConfig, message: &str) {
    let vectorizer = match SpamVectorizer::load(&config.artifacts_dir) {
        Ok(vectorizer) => vectorizer,
        Err(e) => {
            log::error!("Failed to load spam vectorizer: {e}");
            std::process::exit(1);
        }
    };
    let model = match load_model(&config.artifacts_dir, &vectorizer) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to load spam model: {e}");
            std::process::exit(1);
        }
    };
    let normalizer = TextNormalizer::from_vectorizer(&vectorizer);

    match classify_message(&normalizer, &vectorizer, &model, message) {
        Some(SpamVerdict::Spam) => println!("This message is SPAM."),
        Some(SpamVerdict::Ham) => println!("This message is NOT SPAM."),
        None => {}
    }
}

fn run_heart(config: &AppConfig, record: &HeartRecord) {
    let models = match HeartModels::load(&config.artifacts_dir) {
        Ok(models) => models,
        Err(e) => {
            log::error!("Failed to load heart models: {e}");
            std::process::exit(1);
        }
    };

    for verdict in predict_single(&models, record) {
        let outcome = if verdict.positive {
            "Heart Disease Detected"
        } else {
            "No Heart Disease Detected"
        };
        println!("{}: {outcome}", verdict.model);
    }
}

fn run_heart_bulk(config: &AppConfig, input: &std::path::Path, output: &std::path::Path) {
    let model = match load_logistic_regression(&config.artifacts_dir) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to load the logistic regression model: {e}");
            std::process::exit(1);
        }
    };

    match bulk_predict(&model, input, output) {
        Ok(stats) => {
            println!(
                "Predicted {} rows ({} positive); results written to {}",
                stats.rows,
                stats.positives,
                output.display()
            );
        }
        Err(BulkPredictError::MissingColumns(missing)) => {
            log::warn!(
                "Please make sure the CSV file has the correct columns; missing: {}",
                missing.join(", ")
            );
        }
        Err(e) => {
            log::error!("Bulk prediction failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run_laptop(config: &AppConfig, query: &LaptopQuery) {
    let pipeline = match LaptopPipeline::load(&config.artifacts_dir) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            log::error!("Failed to load the laptop pipeline: {e}");
            std::process::exit(1);
        }
    };

    match predict_price(&pipeline, query) {
        Ok(price) => println!("Estimated price: {price}"),
        Err(e) => {
            log::error!("{e}");
            if let Ok(options) = LaptopOptions::load(&config.artifacts_dir) {
                if let Some(valid) = options_for(&options, e.column) {
                    log::error!("Valid options for {}: {}", e.column, valid.join(", "));
                }
            }
            std::process::exit(1);
        }
    }
}

fn options_for<'a>(options: &'a LaptopOptions, column: &str) -> Option<&'a [String]> {
    match column {
        "company" => Some(&options.companies),
        "type name" => Some(&options.type_names),
        "CPU brand" => Some(&options.cpu_brands),
        "GPU brand" => Some(&options.gpu_brands),
        "OS" => Some(&options.oses),
        _ => None,
    }
}
