use std::path::PathBuf;
use std::process::ExitCode;

use debata::pipeline::AnalysisPipelineDirector;
use debata::CsvLoader;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Batch beh debatnej štúdie: načíta CSV s pozorovaniami, vytvorí
/// (alebo znovu použije) train/test split, spustí analýzu a zapíše
/// selekčný report.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let data_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Použitie: debata <data.csv> [výstupný_adresár]");
            return ExitCode::from(2);
        }
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| {
        data_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    match run(&data_path, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Chyba: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(data_path: &std::path::Path, out_dir: &std::path::Path) -> debata::Result<()> {
    let table = CsvLoader::new().load_from_path(data_path)?;

    let pipeline = AnalysisPipelineDirector::build_debate_study()?;

    pipeline.prepare_split(
        &table,
        &out_dir.join("train.csv"),
        &out_dir.join("test.csv"),
        false,
    )?;

    let report = pipeline.run(&table)?;
    report.selection.write_csv(&out_dir.join("model_selection.csv"))?;
    report.print_summary();

    Ok(())
}
