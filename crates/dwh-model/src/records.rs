//! Source records as read from the cleaned CSV files.
//!
//! Every field is kept as the raw (nullable) text from the source so that
//! dimension rows can be written back verbatim.

/// One row of the patients source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatientRecord {
    pub id_paciente: Option<String>,
    pub nombre: Option<String>,
    pub sexo: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub edad: Option<String>,
    pub ciudad: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

impl PatientRecord {
    /// The natural key, trimmed. Blank identifiers count as missing.
    pub fn patient_id(&self) -> Option<&str> {
        natural_key(self.id_paciente.as_deref())
    }

    /// Attribute values in source column order.
    pub fn values(&self) -> [Option<&str>; 8] {
        [
            self.id_paciente.as_deref(),
            self.nombre.as_deref(),
            self.sexo.as_deref(),
            self.fecha_nacimiento.as_deref(),
            self.edad.as_deref(),
            self.ciudad.as_deref(),
            self.email.as_deref(),
            self.telefono.as_deref(),
        ]
    }
}

/// One row of the medical appointments source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AppointmentRecord {
    pub id_cita: Option<String>,
    pub id_paciente: Option<String>,
    pub fecha_cita: Option<String>,
    pub especialidad: Option<String>,
    pub medico: Option<String>,
    pub costo: Option<String>,
    pub estado_cita: Option<String>,
}

impl AppointmentRecord {
    /// The referenced patient identifier, trimmed.
    pub fn patient_id(&self) -> Option<&str> {
        natural_key(self.id_paciente.as_deref())
    }
}

fn natural_key(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
