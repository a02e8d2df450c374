//! Column and table names of the source files and the exported tables.

pub const ID_PACIENTE: &str = "id_paciente";
pub const NOMBRE: &str = "nombre";
pub const SEXO: &str = "sexo";
pub const FECHA_NACIMIENTO: &str = "fecha_nacimiento";
pub const EDAD: &str = "edad";
pub const CIUDAD: &str = "ciudad";
pub const EMAIL: &str = "email";
pub const TELEFONO: &str = "telefono";

pub const ID_CITA: &str = "id_cita";
pub const FECHA_CITA: &str = "fecha_cita";
pub const ESPECIALIDAD: &str = "especialidad";
pub const MEDICO: &str = "medico";
pub const COSTO: &str = "costo";
pub const ESTADO_CITA: &str = "estado_cita";

pub const SURROGATE_KEY: &str = "surrogate_key";
pub const DATE: &str = "date";
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const PATIENT_SURROGATE_KEY: &str = "patient_surrogate_key";
pub const DATE_SURROGATE_KEY: &str = "date_surrogate_key";

/// Patient columns, in source (and dimension) order.
pub const PATIENT_COLUMNS: [&str; 8] = [
    ID_PACIENTE,
    NOMBRE,
    SEXO,
    FECHA_NACIMIENTO,
    EDAD,
    CIUDAD,
    EMAIL,
    TELEFONO,
];

/// Appointment columns, in source order.
pub const APPOINTMENT_COLUMNS: [&str; 7] = [
    ID_CITA,
    ID_PACIENTE,
    FECHA_CITA,
    ESPECIALIDAD,
    MEDICO,
    COSTO,
    ESTADO_CITA,
];

/// Logical names of the source tables.
pub const PATIENTS_SOURCE: &str = "pacientes";
pub const APPOINTMENTS_SOURCE: &str = "citas_medicas";

/// Names of the exported tables (also their file stems).
pub const DIM_PACIENTE: &str = "dim_paciente";
pub const DIM_FECHA: &str = "dim_fecha";
pub const HECHO_CITAS: &str = "hecho_citas";
