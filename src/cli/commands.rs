use std::time::Duration;

use crate::analyzers::UhiAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::collectors::DatasetCollector;
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::models::all_cities;
use crate::utils::filename::{generate_default_dataset_filename, generate_default_report_filename};
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, ReportWriter};

pub async fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "uhi_collector=debug".into()),
            )
            .init();
    }

    match cli.command {
        Commands::Collect {
            output_file,
            seed,
            delay_ms,
            limit,
            skip_network,
        } => {
            let config = CollectorConfig::load()?;

            let mut cities = all_cities();
            if let Some(n) = limit {
                cities.truncate(n);
            }

            let output_file = output_file
                .unwrap_or_else(|| generate_default_dataset_filename(&config.output_dir));

            println!("Collecting UHI data for {} cities...", cities.len());
            println!("Output file: {}", output_file.display());
            if skip_network {
                println!("Network lookups disabled - estimating from defaults");
            }

            let mut collector = DatasetCollector::new(&config)?
                .with_offline(skip_network);
            if let Some(seed) = seed {
                collector = collector.with_seed(seed);
            }
            if let Some(ms) = delay_ms {
                collector = collector.with_delay(Duration::from_millis(ms));
            }

            let progress = ProgressReporter::new(cities.len() as u64, "Collecting...", false);
            let (records, report) = collector.collect_all(&cities, Some(&progress)).await;
            progress.finish_with_message(&format!(
                "Collected {}/{} cities",
                report.successful,
                cities.len()
            ));

            if !report.failures.is_empty() {
                println!("\nFailed cities:");
                for (name, reason) in &report.failures {
                    println!("  {} - {}", name, reason);
                }
            }

            if records.is_empty() {
                println!("No records collected - nothing to write");
                return Ok(());
            }

            CsvWriter::new().write_records(&records, &output_file)?;
            println!(
                "\nWrote {} records to {}",
                records.len(),
                output_file.display()
            );

            let stats = UhiAnalyzer::new().analyze(&records)?;
            println!("\n{}", stats.summary());
        }

        Commands::Analyze { file, top, report } => {
            println!("Analyzing dataset: {}", file.display());

            let records = CsvWriter::new().read_records(&file)?;
            let analyzer = UhiAnalyzer::new();
            let stats = analyzer.analyze(&records)?;

            println!("\n{}", stats.detailed_summary());

            println!("\nTop {} cities by UHI intensity:", top);
            for (i, record) in analyzer.rank_by_uhi(&records).iter().take(top).enumerate() {
                println!(
                    "{:2}. {:20} ({:20}) UHI {:.2}°C, impervious {:.1}%",
                    i + 1,
                    record.city_name,
                    record.state,
                    record.uhi_intensity_c,
                    record.impervious_surface_pct
                );
            }

            println!("\nTop {} cities by vegetation (NDVI):", top);
            for (i, record) in analyzer.rank_by_ndvi(&records).iter().take(top).enumerate() {
                println!(
                    "{:2}. {:20} NDVI {:.3}, greenness {:.1}%, UHI {:.2}°C",
                    i + 1,
                    record.city_name,
                    record.ndvi,
                    record.urban_greenness_pct,
                    record.uhi_intensity_c
                );
            }

            if let Some(report_path) = report {
                let config = CollectorConfig::load()?;
                let report_path = if report_path.as_os_str().is_empty() {
                    generate_default_report_filename(&config.output_dir)
                } else {
                    report_path
                };
                ReportWriter::new().write_summary(&stats, &records, &report_path)?;
                println!("\nSummary report written to {}", report_path.display());
            }
        }

        Commands::Info { file, sample } => {
            println!("Dataset: {}", file.display());

            let records = CsvWriter::new().read_sample_records(&file, sample)?;
            println!("Showing {} records:\n", records.len());

            for (i, record) in records.iter().enumerate() {
                let temperature = record
                    .temperature_c
                    .map(|t| format!("{:.1}°C", t))
                    .unwrap_or_else(|| "n/a".to_string());
                println!(
                    "{:2}. {:20} ({:20}) {} | UHI {:.2}°C | {} | pop {:.0}",
                    i + 1,
                    record.city_name,
                    record.state,
                    temperature,
                    record.uhi_intensity_c,
                    record.land_cover.label(),
                    record.population
                );
            }
        }
    }

    Ok(())
}
