//! MPU Plot - shows acceleration and gyroscope charts for an MPU6050 capture.

use anyhow::Context;
use log::info;
use mpu_plot::charts::ChartStyle;
use mpu_plot::config::{AppConfig, CONFIG_FILE};
use mpu_plot::error::AppError;
use mpu_plot::{build_charts, gui, logger};

fn run() -> Result<(), AppError> {
    let config = AppConfig::load(CONFIG_FILE)?;
    info!("Reading samples from {}", config.data.csv_path.display());

    let style = ChartStyle::from(&config.plot);
    let charts = build_charts(&config.data.csv_path, &style)?;
    gui::run(charts, &config.window)
}

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    run().context("mpu_plot failed")
}
