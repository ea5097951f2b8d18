//! New-student admission applications.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::fields::{blank_as_none, required};
use crate::errors::{AppError, AppResult};

/// Application review state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdmissionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl AdmissionStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(AdmissionStatus::Pending),
            "Accepted" => Some(AdmissionStatus::Accepted),
            "Rejected" => Some(AdmissionStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdmissionStatus::Pending => "Pending",
            AdmissionStatus::Accepted => "Accepted",
            AdmissionStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    LakiLaki,
    Perempuan,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Laki-laki" => Some(Gender::LakiLaki),
            "Perempuan" => Some(Gender::Perempuan),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::LakiLaki => "Laki-laki",
            Gender::Perempuan => "Perempuan",
        }
    }
}

/// Registration form body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Nama harus memiliki minimal 2 karakter."))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 3, message = "Sekolah asal harus diisi."))]
    pub previous_school: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, message = "Nama orang tua harus diisi."))]
    pub parent_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 10, message = "Nomor kontak harus diisi."))]
    #[schema(example = "081234567890")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub birth_place: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2011-05-17")]
    pub birth_date: Option<NaiveDate>,
    /// `Laki-laki` or `Perempuan`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "2026/2027")]
    pub academic_year: Option<String>,
}

/// Validated application; always starts as `Pending`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmission {
    pub name: String,
    pub previous_school: String,
    pub parent_name: String,
    pub contact: String,
    pub birth_place: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub academic_year: String,
}

impl TryFrom<AdmissionRequest> for NewAdmission {
    type Error = AppError;

    fn try_from(request: AdmissionRequest) -> AppResult<Self> {
        let gender = required(request.gender, "Jenis kelamin harus diisi.")?;
        Ok(Self {
            name: required(request.name, "Nama harus diisi.")?,
            previous_school: required(request.previous_school, "Sekolah asal harus diisi.")?,
            parent_name: required(request.parent_name, "Nama orang tua harus diisi.")?,
            contact: required(request.contact, "Nomor kontak harus diisi.")?,
            birth_place: required(request.birth_place, "Tempat lahir harus diisi.")?,
            birth_date: request
                .birth_date
                .ok_or_else(|| AppError::validation("Tanggal lahir harus diisi."))?,
            gender: Gender::parse(&gender)
                .ok_or_else(|| AppError::validation("Jenis kelamin tidak valid."))?,
            address: required(request.address, "Alamat harus diisi.")?,
            academic_year: required(request.academic_year, "Tahun ajaran harus diisi.")?,
        })
    }
}

/// Review decision body
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AdmissionStatusRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Accepted")]
    pub status: Option<String>,
}

impl AdmissionStatusRequest {
    pub fn into_status(self) -> AppResult<AdmissionStatus> {
        let status = required(self.status, "Status harus diisi.")?;
        AdmissionStatus::parse(&status)
            .ok_or_else(|| AppError::validation("Status pendaftaran tidak valid."))
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdmissionFilter {
    pub status: Option<AdmissionStatus>,
}

/// Stored application
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    #[schema(example = "ADM-r4e3w2q1a0")]
    pub id: String,
    pub name: String,
    pub previous_school: String,
    pub registration_date: DateTime<Utc>,
    pub status: AdmissionStatus,
    pub parent_name: String,
    pub contact: String,
    pub birth_place: String,
    #[schema(value_type = String, format = Date)]
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub academic_year: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdmissionList {
    pub admissions: Vec<Admission>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionCreated {
    pub message: String,
    pub admission_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AdmissionRequest {
        serde_json::from_str(
            r#"{
                "name": "Rina Maharani",
                "previousSchool": "SDN 01 Bandung",
                "parentName": "Hendra",
                "contact": "081234567890",
                "birthPlace": "Bandung",
                "birthDate": "2014-08-17",
                "gender": "Perempuan",
                "address": "Jl. Merdeka 10",
                "academicYear": "2026/2027"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_complete_form_is_accepted() {
        let request = form();
        assert!(request.validate().is_ok());
        let admission = NewAdmission::try_from(request).unwrap();
        assert_eq!(admission.gender, Gender::Perempuan);
    }

    #[test]
    fn test_short_contact_fails_rules() {
        let mut request = form();
        request.contact = Some("0812".into());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_gender_is_checked() {
        let mut request = form();
        request.gender = Some("L".into());
        let err = NewAdmission::try_from(request).unwrap_err();
        assert_eq!(err.to_string(), "Jenis kelamin tidak valid.");
    }

    #[test]
    fn test_status_update_values() {
        let request = AdmissionStatusRequest {
            status: Some("Accepted".into()),
        };
        assert_eq!(request.into_status().unwrap(), AdmissionStatus::Accepted);

        let request = AdmissionStatusRequest {
            status: Some("Waitlist".into()),
        };
        assert!(request.into_status().is_err());
    }

    #[test]
    fn test_gender_serializes_with_dash() {
        assert_eq!(serde_json::to_string(&Gender::LakiLaki).unwrap(), r#""Laki-laki""#);
    }
}
