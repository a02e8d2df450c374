//! The warehouse build: load both sources, derive the star schema, export.
//!
//! Each stage runs in its own span and logs its duration at `debug`. The
//! first failure is logged at `error` and ends the run; tables already
//! written by earlier exports stay on disk.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span};

use dwh_ingest::{SourceTable, read_source_table};
use dwh_model::schema::{APPOINTMENTS_SOURCE, DIM_FECHA, DIM_PACIENTE, HECHO_CITAS, PATIENTS_SOURCE};
use dwh_output::{OutputTable, write_csv_table};
use dwh_transform::{
    StarSchema, build_star_schema, date_dimension_frame, fact_table_frame,
    patient_dimension_frame,
};

use crate::config::PipelineConfig;
use crate::types::{RunResult, TableSummary};

/// Both loaded source tables.
#[derive(Debug, Clone)]
pub struct Sources {
    pub patients: SourceTable,
    pub appointments: SourceTable,
}

/// Runs the whole build described by `config`.
pub fn run(config: &PipelineConfig) -> Result<RunResult> {
    let run_span = info_span!(
        "run",
        output_dir = %config.output_dir.display(),
        dry_run = config.dry_run
    );
    let _run_guard = run_span.enter();
    let run_start = Instant::now();
    info!("warehouse build started");

    let sources = load_sources(config)?;
    let star = build(&sources, config)?;
    let mut tables = output_tables(&star)?;

    let summaries = if config.dry_run {
        info!("dry run, no files written");
        tables
            .iter()
            .map(|table| TableSummary {
                name: table.name.clone(),
                records: table.record_count(),
                output: None,
            })
            .collect()
    } else {
        export(&config.output_dir, &mut tables)?
    };

    info!(
        duration_ms = run_start.elapsed().as_millis(),
        "warehouse build finished"
    );
    Ok(RunResult {
        output_dir: config.output_dir.clone(),
        dry_run: config.dry_run,
        tables: summaries,
        join_stats: star.facts.stats(),
    })
}

/// Loads the patient and appointment files.
pub fn load_sources(config: &PipelineConfig) -> Result<Sources> {
    info_span!("load").in_scope(|| -> Result<Sources> {
        let start = Instant::now();
        let patients = load_one(&config.source_patient_path, PATIENTS_SOURCE)?;
        let appointments = load_one(&config.source_appointment_path, APPOINTMENTS_SOURCE)?;
        debug!(
            duration_ms = start.elapsed().as_millis(),
            "sources loaded"
        );
        Ok(Sources {
            patients,
            appointments,
        })
    })
}

fn load_one(path: &Path, name: &str) -> Result<SourceTable> {
    read_source_table(path, name)
        .inspect_err(|err| error!(source = name, error = %err, "load failed"))
        .with_context(|| format!("load {name} from {}", path.display()))
}

/// Derives both dimensions and the fact table.
pub fn build(sources: &Sources, config: &PipelineConfig) -> Result<StarSchema> {
    info_span!("transform").in_scope(|| -> Result<StarSchema> {
        let start = Instant::now();
        let star = build_star_schema(
            &sources.patients.data,
            &sources.appointments.data,
            &config.transform_options(),
        )
        .inspect_err(|err| error!(error = %err, "transform failed"))
        .with_context(|| {
            format!(
                "build star schema from {} patient and {} appointment records",
                sources.patients.record_count(),
                sources.appointments.record_count()
            )
        })?;
        debug!(
            duration_ms = start.elapsed().as_millis(),
            patients = star.patients.len(),
            dates = star.dates.len(),
            facts = star.facts.len(),
            "star schema built"
        );
        Ok(star)
    })
}

/// The three derived tables in export order.
pub fn output_tables(star: &StarSchema) -> Result<Vec<OutputTable>> {
    let frame_error = |name: &str| format!("build {name} frame");
    Ok(vec![
        OutputTable::new(
            DIM_PACIENTE,
            patient_dimension_frame(&star.patients).with_context(|| frame_error(DIM_PACIENTE))?,
        ),
        OutputTable::new(
            DIM_FECHA,
            date_dimension_frame(&star.dates).with_context(|| frame_error(DIM_FECHA))?,
        ),
        OutputTable::new(
            HECHO_CITAS,
            fact_table_frame(&star.facts).with_context(|| frame_error(HECHO_CITAS))?,
        ),
    ])
}

/// Writes each table to `output_dir`, stopping at the first failure.
pub fn export(output_dir: &Path, tables: &mut [OutputTable]) -> Result<Vec<TableSummary>> {
    info_span!("export").in_scope(|| -> Result<Vec<TableSummary>> {
        let start = Instant::now();
        let mut summaries = Vec::with_capacity(tables.len());
        for table in tables.iter_mut() {
            let records = table.record_count();
            let path = write_csv_table(output_dir, table)
                .inspect_err(|err| error!(table = %table.name, error = %err, "export failed"))
                .with_context(|| format!("export {} ({records} records)", table.name))?;
            summaries.push(TableSummary {
                name: table.name.clone(),
                records,
                output: Some(path),
            });
        }
        debug!(
            duration_ms = start.elapsed().as_millis(),
            tables = summaries.len(),
            "export complete"
        );
        Ok(summaries)
    })
}
