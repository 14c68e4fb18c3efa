//! Catalog entity types and search result structures
//!
//! Field names follow the wire format the catalog has always used:
//! entity references are camelCase (`universityKey`, `collegeKey`) while
//! major detail fields are snake_case (`plan_url`, `study_info`).

use serde::{Deserialize, Serialize};

/// Whether a university is publicly or privately funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniversityType {
    Public,
    Private,
}

/// Broad academic field a major belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicField {
    Engineering,
    Medical,
    It,
    Business,
    Arts,
    Science,
}

/// A university in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    /// Store-assigned document id
    #[serde(default)]
    pub id: String,
    /// Human-chosen short identifier, unique across universities
    pub key: String,
    /// Display name
    pub name: String,
    /// Display color (hex)
    pub color: String,
    /// Funding type
    #[serde(rename = "type")]
    pub university_type: UniversityType,
}

/// A college belonging to a university
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    #[serde(default)]
    pub id: String,
    /// Unique within the owning university
    pub key: String,
    pub name: String,
    /// Owning university's `key` (denormalized, matched by string equality)
    #[serde(rename = "universityKey")]
    pub university_key: String,
}

/// Admission requirements for a major
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdmissionRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_subjects: Option<Vec<String>>,
}

/// Study details for a major
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hour_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuition_fees: Option<f64>,
}

/// A major offered by a college
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Major {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "universityKey")]
    pub university_key: String,
    #[serde(rename = "collegeKey")]
    pub college_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_field: Option<AcademicField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_requirements: Option<AdmissionRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_info: Option<StudyInfo>,
}

/// Lightweight parent summary attached to college and major hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversitySummary {
    pub name: String,
    #[serde(rename = "type")]
    pub university_type: UniversityType,
    pub color: String,
}

impl UniversitySummary {
    pub fn of(university: &University) -> Self {
        Self {
            name: university.name.clone(),
            university_type: university.university_type,
            color: university.color.clone(),
        }
    }
}

/// Lightweight college summary attached to major hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeSummary {
    pub name: String,
}

impl CollegeSummary {
    pub fn of(college: &College) -> Self {
        Self {
            name: college.name.clone(),
        }
    }
}

/// A college search hit enriched with its owning university
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeHit {
    #[serde(flatten)]
    pub college: College,
    /// `None` when the `universityKey` reference dangles
    pub university: Option<UniversitySummary>,
}

/// A major search hit enriched with its owning university and college
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorHit {
    #[serde(flatten)]
    pub major: Major,
    pub university: Option<UniversitySummary>,
    pub college: Option<CollegeSummary>,
}

/// The three-list bundle every search returns
///
/// All three keys are always present, possibly as empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub universities: Vec<University>,
    pub colleges: Vec<CollegeHit>,
    pub majors: Vec<MajorHit>,
}

impl SearchResults {
    /// The bundle returned for empty queries
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty() && self.colleges.is_empty() && self.majors.is_empty()
    }

    /// Total hit count across the three lists
    pub fn len(&self) -> usize {
        self.universities.len() + self.colleges.len() + self.majors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_university_wire_format() {
        let u = University {
            id: "1".to_string(),
            key: "iu".to_string(),
            name: "الجامعة الإسلامية".to_string(),
            color: "#0a4b78".to_string(),
            university_type: UniversityType::Public,
        };
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json["type"], "public");
        assert_eq!(json["key"], "iu");
    }

    #[test]
    fn test_college_key_is_camel_case() {
        let c = College {
            id: String::new(),
            key: "eng".to_string(),
            name: "كلية الهندسة".to_string(),
            university_key: "iu".to_string(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["universityKey"], "iu");
        assert!(json.get("university_key").is_none());
    }

    #[test]
    fn test_major_optional_fields_omitted() {
        let m = Major {
            id: String::new(),
            name: "هندسة الحاسوب".to_string(),
            university_key: "iu".to_string(),
            college_key: "eng".to_string(),
            description: None,
            plan_url: None,
            academic_field: Some(AcademicField::Engineering),
            admission_requirements: None,
            study_info: None,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["academic_field"], "engineering");
        assert!(json.get("plan_url").is_none());
        assert!(json.get("study_info").is_none());
    }

    #[test]
    fn test_hit_flattening() {
        let hit = CollegeHit {
            college: College {
                id: String::new(),
                key: "eng".to_string(),
                name: "Engineering".to_string(),
                university_key: "nowhere".to_string(),
            },
            university: None,
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["key"], "eng");
        assert_eq!(json["university"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_bundle_has_all_keys() {
        let json = serde_json::to_value(SearchResults::empty()).unwrap();
        assert!(json["universities"].as_array().unwrap().is_empty());
        assert!(json["colleges"].as_array().unwrap().is_empty());
        assert!(json["majors"].as_array().unwrap().is_empty());
    }
}
