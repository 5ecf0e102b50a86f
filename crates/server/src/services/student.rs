// Student service for business logic
//
// Enrollment enforces roll number uniqueness before writing; roster listings
// are sorted by roll number here, not by the store.

use crate::api::common::Stored;
use crate::storage::{StorageBackend, StoreError, StudentFilter, StudentRow};
use eventstats_core::{sort_by_roll_number, sorted_roll_numbers, Record, Student};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::error::{Result, ServiceError};

pub struct StudentService {
    db: Arc<StorageBackend>,
}

impl StudentService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    /// Enroll a student. Fails with a conflict when the roll number is taken.
    pub async fn create(&self, student: Student) -> Result<Uuid> {
        let span = tracing::info_span!(
            "student.create",
            collection = Student::COLLECTION,
            roll_number = %student.roll_number,
            id = tracing::field::Empty,
        );

        self.create_inner(student).instrument(span).await
    }

    async fn create_inner(&self, student: Student) -> Result<Uuid> {
        student.validate()?;

        if self
            .db
            .get_student_by_roll_number(&student.roll_number)
            .await?
            .is_some()
        {
            return Err(Self::duplicate(&student.roll_number));
        }

        // A concurrent enrollment can still win between the check and the
        // insert; the store's uniqueness constraint reports it as a duplicate.
        let row = self
            .db
            .create_student(&student)
            .await
            .map_err(|e| Self::create_error(&student.roll_number, e))?;
        tracing::Span::current().record("id", row.id.to_string().as_str());
        tracing::info!("Student enrolled");
        Ok(row.id)
    }

    pub async fn get(&self, roll_number: &str) -> Result<Stored<Student>> {
        self.db
            .get_student_by_roll_number(roll_number)
            .await?
            .map(Self::row_to_student)
            .ok_or_else(|| ServiceError::not_found("Student not found"))
    }

    /// Students of one academic year and branch, sorted by roll number
    pub async fn list(&self, academic_year: &str, branch: &str) -> Result<Vec<Stored<Student>>> {
        let rows = self.db.list_students(&Self::roster_filter(academic_year, branch)).await?;
        let mut students: Vec<Stored<Student>> =
            rows.into_iter().map(Self::row_to_student).collect();
        sort_by_roll_number(&mut students);
        Ok(students)
    }

    /// Roll numbers of one academic year and branch, sorted lexicographically
    pub async fn roll_numbers(&self, academic_year: &str, branch: &str) -> Result<Vec<String>> {
        let rows = self.db.list_students(&Self::roster_filter(academic_year, branch)).await?;
        let students: Vec<Student> = rows.into_iter().map(Student::from).collect();
        Ok(sorted_roll_numbers(&students))
    }

    fn duplicate(roll_number: &str) -> ServiceError {
        tracing::warn!("Student with roll number {} already exists", roll_number);
        ServiceError::conflict("Student with this roll number already exists")
    }

    fn create_error(roll_number: &str, err: anyhow::Error) -> ServiceError {
        if StoreError::is_duplicate_key(&err) {
            Self::duplicate(roll_number)
        } else {
            ServiceError::Internal(err)
        }
    }

    fn roster_filter(academic_year: &str, branch: &str) -> StudentFilter {
        StudentFilter {
            academic_year: Some(academic_year.to_string()),
            branch: Some(branch.to_string()),
        }
    }

    fn row_to_student(row: StudentRow) -> Stored<Student> {
        Stored::new(row.id, Student::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventstats_core::{HasRollNumber, ValidationError};

    fn service() -> StudentService {
        StudentService::new(Arc::new(StorageBackend::in_memory()))
    }

    fn student(roll_number: &str, branch: &str, current_semester: i32) -> Student {
        Student {
            roll_number: roll_number.to_string(),
            name: format!("Student {roll_number}"),
            branch: branch.to_string(),
            current_semester,
            academic_year: "2024-25".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let id = service.create(student("249Y1A3901", "AI & ML", 3)).await.unwrap();

        let stored = service.get("249Y1A3901").await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record.branch, "AI & ML");
    }

    #[tokio::test]
    async fn test_duplicate_roll_number_conflicts() {
        let service = service();
        service.create(student("249Y1A3901", "AI & ML", 3)).await.unwrap();

        let err = service
            .create(student("249Y1A3901", "CSE", 5))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err = StudentService::create_error(
            "249Y1A3901",
            StoreError::DuplicateKey {
                collection: "student",
                key: "249Y1A3901".to_string(),
            }
            .into(),
        );
        assert!(matches!(err, ServiceError::Conflict(_)));

        let err = StudentService::create_error("249Y1A3901", anyhow::anyhow!("pool timed out"));
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_enrollment_yields_one_student() {
        let service = Arc::new(service());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service.create(student("249Y1A3901", "AI & ML", 3)).await
                })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(ServiceError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(service.roll_numbers("2024-25", "AI & ML").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_semester_is_not_stored() {
        let service = service();
        let err = service
            .create(student("249Y1A3901", "AI & ML", 13))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            service.get("249Y1A3901").await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_roster_is_filtered_and_sorted() {
        let service = service();
        for roll in ["249Y1A3910", "249Y1A399", "249Y1A3902"] {
            service.create(student(roll, "AI & ML", 3)).await.unwrap();
        }
        service.create(student("249Y1A3801", "CSE", 3)).await.unwrap();

        let roll_numbers = service.roll_numbers("2024-25", "AI & ML").await.unwrap();
        assert_eq!(roll_numbers, vec!["249Y1A3902", "249Y1A3910", "249Y1A399"]);

        let students = service.list("2024-25", "AI & ML").await.unwrap();
        let order: Vec<&str> = students.iter().map(|s| s.roll_number()).collect();
        assert_eq!(order, roll_numbers);

        assert!(service.roll_numbers("2023-24", "AI & ML").await.unwrap().is_empty());
    }
}
