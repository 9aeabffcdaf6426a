//! Faculties, departments, buildings and classrooms

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::entity::{BoundQuery, Draft, Entity};
use super::validation::{require_text, MAX_ADDRESS_LEN, MAX_NAME_LEN};
use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDraft {
    pub name: String,
}

impl Entity for Faculty {
    const RESOURCE: &'static str = "faculty";
    const TABLE: &'static str = "faculties";
    const COLUMNS: &'static str = "id, name";
    type Draft = FacultyDraft;
}

impl Draft for FacultyDraft {
    const FIELDS: &'static [&'static str] = &["name"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDraft {
    pub name: String,
    pub address: String,
}

impl Entity for Building {
    const RESOURCE: &'static str = "building";
    const TABLE: &'static str = "buildings";
    const COLUMNS: &'static str = "id, name, address";
    type Draft = BuildingDraft;
}

impl Draft for BuildingDraft {
    const FIELDS: &'static [&'static str] = &["name", "address"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("address", &self.address, MAX_ADDRESS_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(&self.name).bind(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub faculty_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
    pub faculty_id: i32,
}

impl Entity for Department {
    const RESOURCE: &'static str = "department";
    const TABLE: &'static str = "departments";
    const COLUMNS: &'static str = "id, name, faculty_id";
    const PARENTS: &'static [&'static str] = &["faculty_id"];
    type Draft = DepartmentDraft;
}

impl Draft for DepartmentDraft {
    const FIELDS: &'static [&'static str] = &["name", "faculty_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query.bind(&self.name).bind(self.faculty_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: i32,
    pub number: i32,
    pub capacity: i32,
    pub building_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomDraft {
    pub number: i32,
    pub capacity: i32,
    pub building_id: i32,
}

impl Entity for Classroom {
    const RESOURCE: &'static str = "classroom";
    const TABLE: &'static str = "classrooms";
    const COLUMNS: &'static str = "id, number, capacity, building_id";
    const PARENTS: &'static [&'static str] = &["building_id"];
    type Draft = ClassroomDraft;
}

impl Draft for ClassroomDraft {
    const FIELDS: &'static [&'static str] = &["number", "capacity", "building_id"];

    fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity < 0 {
            return Err(ValidationError::InvalidFormat {
                field: "capacity",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E> {
        query
            .bind(self.number)
            .bind(self.capacity)
            .bind(self.building_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case() {
        let draft: DepartmentDraft =
            serde_json::from_str(r#"{"name": "Applied Mathematics", "facultyId": 2}"#).unwrap();
        assert_eq!(draft.faculty_id, 2);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn serializes_camel_case() {
        let room = Classroom {
            id: 1,
            number: 101,
            capacity: 30,
            building_id: 1,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["buildingId"], 1);
        assert!(json.get("building_id").is_none());
    }

    #[test]
    fn fields_match_columns() {
        assert_eq!(Classroom::COLUMNS, format!("id, {}", ClassroomDraft::FIELDS.join(", ")));
        assert_eq!(Building::COLUMNS, format!("id, {}", BuildingDraft::FIELDS.join(", ")));
    }

    #[test]
    fn rejects_negative_capacity() {
        let draft = ClassroomDraft {
            number: 5,
            capacity: -1,
            building_id: 1,
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidFormat { field: "capacity", .. })
        ));
    }

    #[test]
    fn missing_field_fails_decoding() {
        assert!(serde_json::from_str::<BuildingDraft>(r#"{"name": "Annex"}"#).is_err());
    }
}
