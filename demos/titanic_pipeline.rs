//! Titanic Feature Pipeline
//!
//! This demo runs the passenger feature pipeline end to end:
//! - Mixed feature types (numerical, categorical, cabin codes)
//! - Missing value indicators and imputation
//! - Rare label grouping and one-hot encoding
//! - Pipeline serialization
//!
//! Run with: cargo run --example titanic_pipeline
//! Set `RUST_LOG=titanic_features=debug` to see per-step logging.

use std::error::Error;
use titanic_features::{
    config::PipelineConfig,
    dataset::{Column, Dataset},
    preprocessing::{Pipeline, Transformer},
    serialization::SerializableParams,
};
use tracing_subscriber::EnvFilter;

/// One row of the passenger table:
/// (pclass, survived, sex, age, sibsp, parch, fare, cabin, embarked, title)
type Passenger = (
    f64,
    f64,
    &'static str,
    Option<f64>,
    f64,
    f64,
    f64,
    Option<&'static str>,
    Option<&'static str>,
    &'static str,
);

/// Subset of the classic passenger list, with its missing ages and cabins.
fn get_titanic_data() -> Vec<Passenger> {
    vec![
        (1.0, 1.0, "female", Some(29.0), 0.0, 0.0, 211.3375, Some("B5"), Some("S"), "Miss"),
        (1.0, 1.0, "male", Some(0.9167), 1.0, 2.0, 151.55, Some("C22"), Some("S"), "Master"),
        (1.0, 0.0, "female", Some(2.0), 1.0, 2.0, 151.55, Some("C22"), Some("S"), "Miss"),
        (1.0, 0.0, "male", Some(30.0), 1.0, 2.0, 151.55, Some("C22"), Some("S"), "Mr"),
        (1.0, 1.0, "female", Some(25.0), 1.0, 2.0, 151.55, Some("C22"), Some("S"), "Mrs"),
        (1.0, 1.0, "male", Some(48.0), 0.0, 0.0, 26.55, Some("E12"), Some("S"), "Mr"),
        (1.0, 1.0, "female", Some(63.0), 1.0, 0.0, 77.9583, Some("D7"), Some("S"), "Mrs"),
        (1.0, 0.0, "male", Some(39.0), 0.0, 0.0, 0.0, Some("A36"), Some("S"), "Mr"),
        (1.0, 1.0, "female", Some(53.0), 2.0, 0.0, 51.4792, Some("C101"), Some("S"), "Mrs"),
        (1.0, 0.0, "male", Some(71.0), 0.0, 0.0, 49.5042, None, Some("C"), "Mr"),
        (1.0, 0.0, "male", Some(47.0), 1.0, 0.0, 227.525, Some("C62"), Some("C"), "Col"),
        (1.0, 1.0, "female", Some(18.0), 1.0, 0.0, 227.525, Some("C62"), Some("C"), "Mrs"),
        (2.0, 1.0, "female", Some(24.0), 0.0, 0.0, 13.0, None, Some("S"), "Miss"),
        (2.0, 0.0, "male", Some(32.0), 0.0, 0.0, 10.5, None, Some("S"), "Mr"),
        (2.0, 1.0, "female", Some(28.0), 0.0, 0.0, 12.65, None, Some("S"), "Miss"),
        (2.0, 0.0, "male", Some(36.0), 0.0, 0.0, 13.0, None, Some("S"), "Mr"),
        (2.0, 1.0, "female", None, 0.0, 0.0, 10.5, None, Some("S"), "Mrs"),
        (2.0, 0.0, "male", Some(19.0), 1.0, 0.0, 26.0, None, Some("S"), "Mr"),
        (2.0, 1.0, "female", Some(23.0), 0.0, 0.0, 10.5, Some("E101"), Some("Q"), "Miss"),
        (2.0, 0.0, "male", Some(54.0), 1.0, 0.0, 26.0, None, Some("S"), "Rev"),
        (3.0, 0.0, "male", Some(22.0), 1.0, 0.0, 7.25, None, Some("S"), "Mr"),
        (3.0, 1.0, "female", Some(26.0), 0.0, 0.0, 7.925, None, Some("S"), "Miss"),
        (3.0, 0.0, "male", None, 0.0, 0.0, 8.4583, None, Some("Q"), "Mr"),
        (3.0, 1.0, "female", Some(27.0), 0.0, 2.0, 11.1333, None, Some("S"), "Mrs"),
        (3.0, 0.0, "male", Some(2.0), 3.0, 1.0, 21.075, None, Some("S"), "Master"),
        (3.0, 1.0, "female", Some(14.0), 1.0, 0.0, 30.0708, None, Some("C"), "Mrs"),
        (3.0, 0.0, "male", None, 0.0, 0.0, 7.8958, None, Some("S"), "Mr"),
        (3.0, 1.0, "female", Some(4.0), 1.0, 1.0, 16.7, Some("G6"), Some("S"), "Miss"),
        (3.0, 0.0, "male", Some(20.0), 0.0, 0.0, 8.05, None, Some("S"), "Mr"),
        (3.0, 1.0, "female", None, 0.0, 0.0, 7.75, None, Some("Q"), "Miss"),
        (3.0, 0.0, "male", Some(39.0), 1.0, 5.0, 31.275, None, Some("S"), "Mr"),
        (3.0, 0.0, "female", Some(14.0), 0.0, 0.0, 7.8542, None, Some("S"), "Miss"),
        (3.0, 1.0, "male", None, 0.0, 0.0, 7.2292, None, Some("C"), "Mr"),
        (3.0, 0.0, "female", Some(31.0), 1.0, 0.0, 18.0, None, Some("S"), "Mrs"),
        (3.0, 1.0, "female", None, 0.0, 0.0, 7.8792, None, None, "Miss"),
        (3.0, 0.0, "male", Some(35.0), 0.0, 0.0, 8.05, None, Some("S"), "Mr"),
        (3.0, 0.0, "male", Some(34.0), 0.0, 0.0, 13.0, Some("F33"), Some("S"), "Mr"),
        (3.0, 1.0, "female", Some(15.0), 0.0, 0.0, 8.0292, None, Some("Q"), "Miss"),
        (3.0, 0.0, "male", Some(28.0), 0.0, 0.0, 7.05, None, Some("S"), "Mr"),
        (3.0, 0.0, "female", Some(8.0), 3.0, 1.0, 21.075, None, Some("S"), "Miss"),
    ]
}

fn text<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<Option<String>> {
    values.map(|v| v.map(String::from)).collect()
}

/// Build a typed table from passenger rows.
fn to_dataset(rows: &[Passenger]) -> Result<Dataset, Box<dyn Error>> {
    Ok(Dataset::new(vec![
        Column::numeric("pclass", rows.iter().map(|r| Some(r.0)).collect()),
        Column::numeric("survived", rows.iter().map(|r| Some(r.1)).collect()),
        Column::categorical("sex", text(rows.iter().map(|r| Some(r.2)))),
        Column::numeric("age", rows.iter().map(|r| r.3).collect()),
        Column::numeric("sibsp", rows.iter().map(|r| Some(r.4)).collect()),
        Column::numeric("parch", rows.iter().map(|r| Some(r.5)).collect()),
        Column::numeric("fare", rows.iter().map(|r| Some(r.6)).collect()),
        Column::categorical("cabin", text(rows.iter().map(|r| r.7))),
        Column::categorical("embarked", text(rows.iter().map(|r| r.8))),
        Column::categorical("title", text(rows.iter().map(|r| Some(r.9)))),
    ])?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Titanic Feature Pipeline ===\n");

    // 1. Load data
    println!("Loading Titanic dataset...");
    let rows = get_titanic_data();
    let config = PipelineConfig::default();
    let raw = to_dataset(&rows)?;
    println!("  {} passengers loaded", raw.n_rows());
    println!(
        "  Missing: age={}, cabin={}, embarked={}",
        raw.column("age")?.data().missing_count(),
        raw.column("cabin")?.data().missing_count(),
        raw.column("embarked")?.data().missing_count(),
    );

    // 2. Train/test split (first 30 train, last 10 test)
    let split = 30;
    let train = to_dataset(&rows[..split])?;
    let test = to_dataset(&rows[split..])?;
    let x_train = train.select(&config.features)?;
    let x_test = test.select(&config.features)?;
    let y_train = train.numeric(&config.target)?;
    println!(
        "  Train: {} rows ({} survived), Test: {} rows",
        x_train.n_rows(),
        y_train.iter().flatten().filter(|&&y| y == 1.0).count(),
        x_test.n_rows()
    );

    // 3. Build and fit the pipeline
    println!("\nBuilding preprocessing pipeline...");
    let mut pipeline = config.build_pipeline()?;
    println!("  Steps: {}", pipeline.step_names().join(" -> "));

    println!("Fitting pipeline...");
    let train_features = pipeline.fit_transform(&x_train)?;
    println!("  Input features: {}", x_train.n_columns());
    println!("  Output features: {}", train_features.n_columns());
    println!("  Schema: {:?}", train_features.column_names());

    // 4. Transform unseen passengers
    println!("\n=== Transforming Test Set ===\n");
    let test_features = pipeline.transform(&x_test)?;
    let matrix = test_features.to_array2()?;
    println!("  Test matrix shape: {:?}", matrix.dim());
    assert_eq!(
        test_features.column_names(),
        train_features.column_names(),
        "schema must not depend on the batch"
    );

    // 5. Save and reload
    println!("\n=== Saving Pipeline ===");
    let temp_file = std::env::temp_dir().join(&config.pipeline_name);
    std::fs::write(&temp_file, pipeline.to_bytes()?)?;
    println!("Pipeline saved to: {:?}", temp_file);

    println!("\nLoading pipeline...");
    let loaded = Pipeline::from_bytes(&std::fs::read(&temp_file)?)?;
    let reloaded_features = loaded.transform(&x_test)?;
    println!("Pipeline loaded successfully!");
    println!(
        "  Reloaded output matches: {}",
        reloaded_features == test_features
    );

    // 6. A single new passenger with an unseen title and no cabin
    println!("\n=== Demo: Features for New Passenger ===");
    let passenger = to_dataset(&[(
        1.0, 0.0, "female", None, 0.0, 0.0, 100.0, None, Some("S"), "Countess",
    )])?
    .select(&config.features)?;
    let features = loaded.transform(&passenger)?;
    for (name, value) in features
        .column_names()
        .iter()
        .zip(features.to_array2()?.row(0).iter())
    {
        println!("  {:<12} {}", name, value);
    }

    let _ = std::fs::remove_file(&temp_file);
    println!("\n=== Pipeline Complete ===");
    Ok(())
}
