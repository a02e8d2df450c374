//! End-to-end runs over files in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use dwh_cli::config::PipelineConfig;
use dwh_cli::pipeline::run;
use dwh_ingest::LoadError;
use dwh_model::PatientKeyMode;
use dwh_output::ExportError;
use dwh_transform::TransformError;

const PATIENT_HEADER: &str = "id_paciente,nombre,sexo,fecha_nacimiento,edad,ciudad,email,telefono";
const APPOINTMENT_HEADER: &str = "id_cita,id_paciente,fecha_cita,especialidad,medico,costo,estado_cita";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(patients: &[&str], appointments: &[&str]) -> Self {
        let dir = TempDir::new().expect("temp dir");
        write_csv(&dir.path().join("pacientes.csv"), PATIENT_HEADER, patients);
        write_csv(
            &dir.path().join("citas.csv"),
            APPOINTMENT_HEADER,
            appointments,
        );
        Self { dir }
    }

    fn output_dir(&self) -> PathBuf {
        self.dir.path().join("warehouse")
    }

    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            source_patient_path: self.dir.path().join("pacientes.csv"),
            source_appointment_path: self.dir.path().join("citas.csv"),
            output_dir: self.output_dir(),
            ..PipelineConfig::default()
        }
    }

    fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(format!("{name}.csv"))).expect("output file")
    }
}

fn write_csv(path: &Path, header: &str, rows: &[&str]) {
    let mut contents = format!("{header}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(path, contents).expect("write fixture");
}

#[test]
fn builds_all_three_tables() {
    let fixture = Fixture::new(
        &["1,Ana,F,1990-01-01,34,Lima,a@x,555"],
        &["100,1,2024-03-10,Cardio,Dr. X,50,done"],
    );

    let result = run(&fixture.config()).expect("run");

    assert_eq!(
        fixture.read_output("dim_paciente"),
        "id_paciente,nombre,sexo,fecha_nacimiento,edad,ciudad,email,telefono,surrogate_key\n\
         1,Ana,F,1990-01-01,34,Lima,a@x,555,1\n"
    );
    assert_eq!(
        fixture.read_output("dim_fecha"),
        "date,surrogate_key,year,month,day,day_of_week\n\
         1990-01-01,1,1990,1,1,0\n\
         2024-03-10,2,2024,3,10,6\n"
    );
    assert_eq!(
        fixture.read_output("hecho_citas"),
        "id_cita,patient_surrogate_key,date_surrogate_key,especialidad,medico,costo,estado_cita\n\
         100,1,2,Cardio,Dr. X,50,done\n"
    );

    assert!(!result.dry_run);
    assert_eq!(result.tables.len(), 3);
    assert_eq!(result.table("dim_fecha").map(|t| t.records), Some(2));
    assert_eq!(result.join_stats.unmatched_patients, 0);
}

#[test]
fn unmatched_values_become_empty_fields() {
    let fixture = Fixture::new(
        &["1,Ana,F,1990-01-01,,Lima,,555"],
        &[
            "100,999,2024-03-10,Cardio,Dr. X,50,done",
            "101,1,not-a-date,Cardio,Dr. X,50,done",
        ],
    );

    let result = run(&fixture.config()).expect("run");

    assert_eq!(
        fixture.read_output("dim_paciente"),
        "id_paciente,nombre,sexo,fecha_nacimiento,edad,ciudad,email,telefono,surrogate_key\n\
         1,Ana,F,1990-01-01,,Lima,,555,1\n"
    );
    assert_eq!(
        fixture.read_output("hecho_citas"),
        "id_cita,patient_surrogate_key,date_surrogate_key,especialidad,medico,costo,estado_cita\n\
         100,,2,Cardio,Dr. X,50,done\n\
         101,1,,Cardio,Dr. X,50,done\n"
    );
    assert_eq!(result.join_stats.unmatched_patients, 1);
    assert_eq!(result.join_stats.unmatched_dates, 1);
}

#[test]
fn header_only_sources_give_header_only_tables() {
    let fixture = Fixture::new(&[], &[]);

    run(&fixture.config()).expect("run");

    assert_eq!(
        fixture.read_output("dim_fecha"),
        "date,surrogate_key,year,month,day,day_of_week\n"
    );
    assert_eq!(
        fixture.read_output("hecho_citas"),
        "id_cita,patient_surrogate_key,date_surrogate_key,especialidad,medico,costo,estado_cita\n"
    );
}

#[test]
fn second_run_is_byte_identical() {
    let fixture = Fixture::new(
        &[
            "2,Luis,M,1985-06-15,39,Cusco,l@x,777",
            "1,Ana,F,1990-01-01,34,Lima,a@x,555",
            "2,Luis,M,1985-06-15,39,Cusco,l@x,777",
        ],
        &[
            "100,1,2024-03-10,Cardio,Dr. X,50,done",
            "101,2,2024-01-05 09:30:00,Pediatria,Dr. Y,35.5,pending",
        ],
    );
    let config = fixture.config();

    run(&config).expect("first run");
    let first: Vec<String> = ["dim_paciente", "dim_fecha", "hecho_citas"]
        .iter()
        .map(|name| fixture.read_output(name))
        .collect();
    run(&config).expect("second run");
    let second: Vec<String> = ["dim_paciente", "dim_fecha", "hecho_citas"]
        .iter()
        .map(|name| fixture.read_output(name))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first[0].lines().count(), 3);
}

#[test]
fn dry_run_writes_nothing() {
    let fixture = Fixture::new(
        &["1,Ana,F,1990-01-01,34,Lima,a@x,555"],
        &["100,1,2024-03-10,Cardio,Dr. X,50,done"],
    );
    let config = PipelineConfig {
        dry_run: true,
        ..fixture.config()
    };

    let result = run(&config).expect("run");

    assert!(result.dry_run);
    assert!(!fixture.output_dir().exists());
    assert!(result.tables.iter().all(|table| table.output.is_none()));
    assert_eq!(result.table("hecho_citas").map(|t| t.records), Some(1));
}

#[test]
fn missing_source_is_a_load_error() {
    let fixture = Fixture::new(&[], &[]);
    let config = PipelineConfig {
        source_patient_path: fixture.dir.path().join("absent.csv"),
        ..fixture.config()
    };

    let err = run(&config).expect_err("missing file");

    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::FileNotFound { .. })
    ));
    assert!(!fixture.output_dir().exists());
}

#[test]
fn failed_export_keeps_earlier_tables() {
    let fixture = Fixture::new(
        &["1,Ana,F,1990-01-01,34,Lima,a@x,555"],
        &["100,1,2024-03-10,Cardio,Dr. X,50,done"],
    );
    // The fact table is exported last; a directory at its path blocks the rename.
    let blocked = fixture.output_dir().join("hecho_citas.csv");
    fs::create_dir_all(&blocked).expect("block fact table");

    let err = run(&fixture.config()).expect_err("export must fail");

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::Rename { .. })
    ));
    assert_eq!(
        fixture.read_output("dim_paciente"),
        "id_paciente,nombre,sexo,fecha_nacimiento,edad,ciudad,email,telefono,surrogate_key\n\
         1,Ana,F,1990-01-01,34,Lima,a@x,555,1\n"
    );
    assert_eq!(
        fixture.read_output("dim_fecha"),
        "date,surrogate_key,year,month,day,day_of_week\n\
         1990-01-01,1,1990,1,1,0\n\
         2024-03-10,2,2024,3,10,6\n"
    );
    assert!(blocked.is_dir());
    assert!(!fixture.output_dir().join("hecho_citas.csv.tmp").exists());
}

#[test]
fn missing_column_is_a_transform_error() {
    let fixture = Fixture::new(&[], &[]);
    fs::write(
        fixture.dir.path().join("citas.csv"),
        "id_cita,id_paciente,fecha_cita\n100,1,2024-03-10\n",
    )
    .expect("rewrite fixture");

    let err = run(&fixture.config()).expect_err("missing column");

    match err.downcast_ref::<TransformError>() {
        Some(TransformError::MissingColumn { table, column }) => {
            assert_eq!(table, "citas_medicas");
            assert_eq!(column, "especialidad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_file_settings_are_applied() {
    let fixture = Fixture::new(
        &[
            "1,Ana,F,1990-01-01,34,Lima,a@x,555",
            "1,Ana,F,1990-01-01,34,Cusco,a@x,555",
        ],
        &["100,1,03/10/2024,Cardio,Dr. X,50,done"],
    );
    let config_path = fixture.dir.path().join("clinic-dwh.toml");
    fs::write(
        &config_path,
        format!(
            "source_patient_path = {:?}\nsource_appointment_path = {:?}\noutput_dir = {:?}\n\
             patient_key_mode = \"natural-key\"\nday_first = true\n",
            fixture.dir.path().join("pacientes.csv"),
            fixture.dir.path().join("citas.csv"),
            fixture.output_dir(),
        ),
    )
    .expect("write config");

    let config = PipelineConfig::load(&config_path).expect("load config");
    assert_eq!(config.patient_key_mode, PatientKeyMode::NaturalKey);

    let result = run(&config).expect("run");

    assert_eq!(result.table("dim_paciente").map(|t| t.records), Some(1));
    assert!(fixture.read_output("dim_fecha").contains("2024-10-03,2,2024,10,3,3\n"));
}
