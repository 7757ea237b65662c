//! Provisioning service - creates paired account/profile records.
//!
//! The single generic provisioning operation is keyed by the request's
//! role tag: a per-role prepare phase performs the referenced-entity
//! checks and resolves the identifier scope, then one shared
//! transactional phase allocates the identifier, uploads the optional
//! image and writes both records. Either both records become visible
//! together or neither does.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    next_ordinal, Account, AccountStatus, AdminView, FacultyView, IdScope, Password, ProfileView,
    ProvisionRequest, ProvisionedProfile, Role, StudentView,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{AcademicRepository, AssetUploader, ImageFile, TransactionContext, UnitOfWork};

/// Provisioning service trait for dependency injection.
#[async_trait]
pub trait ProvisioningService: Send + Sync {
    /// Create an account/profile pair for one of the provisionable roles.
    ///
    /// `password` falls back to the configured default when absent. A
    /// supplied image that fails to upload aborts the whole operation;
    /// there is no create-without-photo fallback.
    async fn provision(
        &self,
        request: ProvisionRequest,
        password: Option<String>,
        image: Option<ImageFile>,
    ) -> AppResult<ProvisionedProfile>;

    /// Profile for the authenticated identity, joined with its account.
    ///
    /// Dispatches on the same role tag as provisioning; super-admins have
    /// no profile record and resolve to `None`.
    async fn get_me(&self, identifier: &str, role: Role) -> AppResult<Option<ProfileView>>;

    /// Flip an account between active and blocked
    async fn change_status(&self, account_id: Uuid, status: AccountStatus) -> AppResult<Account>;
}

/// Pre-transaction result of the role-keyed prepare phase: the resolved
/// identifier scope plus the (possibly faculty-enriched) request.
struct ProvisionPlan {
    scope: IdScope,
    request: ProvisionRequest,
}

/// Concrete implementation of ProvisioningService using Unit of Work.
pub struct Provisioner<U: UnitOfWork> {
    uow: Arc<U>,
    academics: Arc<dyn AcademicRepository>,
    uploader: Arc<dyn AssetUploader>,
    /// Explicitly injected default; never read from ambient state
    default_password: String,
}

impl<U: UnitOfWork> Provisioner<U> {
    pub fn new(
        uow: Arc<U>,
        academics: Arc<dyn AcademicRepository>,
        uploader: Arc<dyn AssetUploader>,
        default_password: String,
    ) -> Self {
        Self {
            uow,
            academics,
            uploader,
            default_password,
        }
    }

    /// Role-keyed preconditions, performed before any write.
    ///
    /// Students need their admission semester (which also fixes the
    /// identifier scope) and department; faculty need their department;
    /// admins have no referenced-entity precondition. The department's
    /// owning faculty is copied onto the payload here so the stored
    /// profile never requires a join to know its faculty.
    async fn prepare(&self, request: ProvisionRequest) -> AppResult<ProvisionPlan> {
        match request {
            ProvisionRequest::Student(mut draft) => {
                let semester = self
                    .academics
                    .find_semester(draft.admission_semester)
                    .await?
                    .ok_or_missing("Admission semester")?;

                let department = self
                    .academics
                    .find_department(draft.academic_department)
                    .await?
                    .ok_or_missing("Academic department")?;

                draft.academic_faculty = Some(department.academic_faculty);

                Ok(ProvisionPlan {
                    scope: IdScope::student(semester.year, semester.code),
                    request: ProvisionRequest::Student(draft),
                })
            }
            ProvisionRequest::Faculty(mut draft) => {
                let department = self
                    .academics
                    .find_department(draft.academic_department)
                    .await?
                    .ok_or_missing("Academic department")?;

                draft.academic_faculty = Some(department.academic_faculty);

                Ok(ProvisionPlan {
                    scope: IdScope::Faculty,
                    request: ProvisionRequest::Faculty(draft),
                })
            }
            ProvisionRequest::Admin(draft) => Ok(ProvisionPlan {
                scope: IdScope::Admin,
                request: ProvisionRequest::Admin(draft),
            }),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProvisioningService for Provisioner<U> {
    async fn provision(
        &self,
        request: ProvisionRequest,
        password: Option<String>,
        image: Option<ImageFile>,
    ) -> AppResult<ProvisionedProfile> {
        // Referenced-entity checks happen before any side effect
        let plan = self.prepare(request).await?;

        // Email reuse is rejected up front, soft-deleted accounts included
        if self
            .uow
            .accounts()
            .find_by_email_with_deleted(plan.request.email())
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Account"));
        }

        let password = password.unwrap_or_else(|| self.default_password.clone());
        let password_hash = Password::new(&password)?.into_string();

        let uploader = self.uploader.clone();

        // Serializable isolation: a concurrent allocation in the same
        // scope cannot observe the same latest identifier and commit
        self.uow
            .transaction_serializable(move |ctx: TransactionContext<'_>| {
                Box::pin(async move {
                    let latest = ctx.accounts().latest_identifier(&plan.scope).await?;
                    let ordinal = next_ordinal(latest.as_deref(), &plan.scope)?;
                    let identifier = plan.scope.synthesize(ordinal)?;

                    // Upload failure aborts the transaction as a whole
                    let profile_img = match image {
                        Some(file) => {
                            let name = format!("{}{}", identifier, plan.request.first_name());
                            Some(uploader.upload(&name, file.content).await?.url)
                        }
                        None => None,
                    };

                    let account = ctx
                        .accounts()
                        .create(
                            identifier.clone(),
                            plan.request.email().to_string(),
                            password_hash,
                            plan.request.role(),
                        )
                        .await?;

                    let profile = ctx
                        .profiles()
                        .create(plan.request, &identifier, account.id, profile_img)
                        .await?;

                    tracing::info!(
                        identifier = %identifier,
                        role = %account.role,
                        "Provisioned account/profile pair"
                    );

                    Ok(profile)
                })
            })
            .await
    }

    async fn get_me(&self, identifier: &str, role: Role) -> AppResult<Option<ProfileView>> {
        let profiles = self.uow.profiles();

        match role {
            Role::Student => Ok(profiles.find_student(identifier).await?.map(
                |(profile, account)| {
                    ProfileView::Student(StudentView {
                        profile,
                        account: account.into(),
                    })
                },
            )),
            Role::Faculty => Ok(profiles.find_faculty(identifier).await?.map(
                |(profile, account)| {
                    ProfileView::Faculty(FacultyView {
                        profile,
                        account: account.into(),
                    })
                },
            )),
            Role::Admin => Ok(profiles.find_admin(identifier).await?.map(
                |(profile, account)| {
                    ProfileView::Admin(AdminView {
                        profile,
                        account: account.into(),
                    })
                },
            )),
            // Authorization-only role, no profile record exists
            Role::SuperAdmin => Ok(None),
        }
    }

    async fn change_status(&self, account_id: Uuid, status: AccountStatus) -> AppResult<Account> {
        self.uow.accounts().update_status(account_id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::domain::{
        AcademicDepartment, AcademicSemester, AdminDraft, Gender, PersonName, SemesterName,
        StudentDraft,
    };
    use crate::errors::AppError;
    use crate::infra::repositories::entities::{account, admin, student};
    use crate::infra::{MockAcademicRepository, MockAssetUploader, Persistence, UploadedAsset};

    fn admin_draft() -> AdminDraft {
        AdminDraft {
            designation: "Registrar".to_string(),
            name: PersonName {
                first_name: "Rina".to_string(),
                middle_name: None,
                last_name: "Akter".to_string(),
            },
            gender: Gender::Female,
            email: "admin@example.edu".to_string(),
            contact_no: "01711112222".to_string(),
        }
    }

    fn student_draft(semester: Uuid, department: Uuid) -> StudentDraft {
        StudentDraft {
            name: PersonName {
                first_name: "Jamil".to_string(),
                middle_name: None,
                last_name: "Karim".to_string(),
            },
            gender: Gender::Male,
            date_of_birth: None,
            email: "student@example.edu".to_string(),
            contact_no: "01733334444".to_string(),
            present_address: None,
            admission_semester: semester,
            academic_department: department,
            academic_faculty: None,
        }
    }

    fn semester_fixture(id: Uuid) -> AcademicSemester {
        let now = Utc::now();
        AcademicSemester {
            id,
            name: SemesterName::Autumn,
            code: "01".to_string(),
            year: 2024,
            start_month: "January".to_string(),
            end_month: "May".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn department_fixture(id: Uuid, faculty: Uuid) -> AcademicDepartment {
        let now = Utc::now();
        AcademicDepartment {
            id,
            name: "Department of Computer Science".to_string(),
            academic_faculty: faculty,
            created_at: now,
            updated_at: now,
        }
    }

    fn account_row(identifier: &str, role: &str) -> account::Model {
        let now = Utc::now();
        account::Model {
            id: Uuid::new_v4(),
            identifier: identifier.to_string(),
            email: "someone@example.edu".to_string(),
            password_hash: "hashed".to_string(),
            role: role.to_string(),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn provisioner(
        db: sea_orm::DatabaseConnection,
        academics: MockAcademicRepository,
        uploader: MockAssetUploader,
    ) -> Provisioner<Persistence> {
        Provisioner::new(
            Arc::new(Persistence::new(db)),
            Arc::new(academics),
            Arc::new(uploader),
            "campus-pass-123".to_string(),
        )
    }

    #[tokio::test]
    async fn test_admin_provisioning_starts_scope_at_one() {
        let account = account_row("A-0001", "admin");
        let account_id = account.id;
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // Email not taken
            .append_query_results([Vec::<account::Model>::new()])
            // No prior admin identifier in the scope
            .append_query_results([Vec::<account::Model>::new()])
            .append_query_results([vec![account]])
            .append_query_results([vec![admin::Model {
                id: Uuid::new_v4(),
                identifier: "A-0001".to_string(),
                account_id,
                designation: "Registrar".to_string(),
                first_name: "Rina".to_string(),
                middle_name: None,
                last_name: "Akter".to_string(),
                gender: "female".to_string(),
                email: "admin@example.edu".to_string(),
                contact_no: "01711112222".to_string(),
                profile_img: None,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            }]])
            .into_connection();

        let service = provisioner(db, MockAcademicRepository::new(), MockAssetUploader::new());

        let result = service
            .provision(ProvisionRequest::Admin(admin_draft()), None, None)
            .await
            .unwrap();

        assert_eq!(result.identifier(), "A-0001");
        assert!(result.profile_img().is_none());
    }

    #[tokio::test]
    async fn test_student_provisioning_increments_scope_ordinal() {
        let semester_id = Uuid::new_v4();
        let department_id = Uuid::new_v4();
        let faculty_id = Uuid::new_v4();

        let mut academics = MockAcademicRepository::new();
        academics
            .expect_find_semester()
            .returning(move |id| Ok(Some(semester_fixture(id))));
        academics
            .expect_find_department()
            .returning(move |id| Ok(Some(department_fixture(id, faculty_id))));

        let account = account_row("24010003", "student");
        let account_id = account.id;
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // Email not taken
            .append_query_results([Vec::<account::Model>::new()])
            // Latest identifier in the 2024/"01" scope
            .append_query_results([vec![account_row("24010002", "student")]])
            .append_query_results([vec![account]])
            .append_query_results([vec![student::Model {
                id: Uuid::new_v4(),
                identifier: "24010003".to_string(),
                account_id,
                first_name: "Jamil".to_string(),
                middle_name: None,
                last_name: "Karim".to_string(),
                gender: "male".to_string(),
                date_of_birth: None,
                email: "student@example.edu".to_string(),
                contact_no: "01733334444".to_string(),
                present_address: None,
                profile_img: None,
                admission_semester_id: semester_id,
                academic_department_id: department_id,
                academic_faculty_id: faculty_id,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            }]])
            .into_connection();

        let service = provisioner(db, academics, MockAssetUploader::new());

        let result = service
            .provision(
                ProvisionRequest::Student(student_draft(semester_id, department_id)),
                Some("SecurePass123!".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.identifier(), "24010003");
    }

    #[tokio::test]
    async fn test_prepare_copies_department_faculty_onto_draft() {
        let semester_id = Uuid::new_v4();
        let department_id = Uuid::new_v4();
        let faculty_id = Uuid::new_v4();

        let mut academics = MockAcademicRepository::new();
        academics
            .expect_find_semester()
            .returning(move |id| Ok(Some(semester_fixture(id))));
        academics
            .expect_find_department()
            .returning(move |id| Ok(Some(department_fixture(id, faculty_id))));

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = provisioner(db, academics, MockAssetUploader::new());

        let plan = service
            .prepare(ProvisionRequest::Student(student_draft(
                semester_id,
                department_id,
            )))
            .await
            .unwrap();

        assert_eq!(plan.scope, IdScope::student(2024, "01"));
        match plan.request {
            ProvisionRequest::Student(draft) => {
                assert_eq!(draft.academic_faculty, Some(faculty_id));
            }
            _ => panic!("expected student request"),
        }
    }

    #[tokio::test]
    async fn test_missing_semester_fails_before_any_write() {
        let mut academics = MockAcademicRepository::new();
        academics.expect_find_semester().returning(|_| Ok(None));
        // find_department must not be called once the semester lookup fails

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = provisioner(db, academics, MockAssetUploader::new());

        let result = service
            .provision(
                ProvisionRequest::Student(student_draft(Uuid::new_v4(), Uuid::new_v4())),
                None,
                None,
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::ReferencedEntityMissing(ref entity)) if entity == "Admission semester"
        ));
    }

    #[tokio::test]
    async fn test_missing_department_fails_faculty_provisioning() {
        let mut academics = MockAcademicRepository::new();
        academics.expect_find_department().returning(|_| Ok(None));

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = provisioner(db, academics, MockAssetUploader::new());

        let result = service
            .provision(
                ProvisionRequest::Faculty(crate::domain::FacultyDraft {
                    designation: "Lecturer".to_string(),
                    name: PersonName {
                        first_name: "Sadia".to_string(),
                        middle_name: None,
                        last_name: "Islam".to_string(),
                    },
                    gender: Gender::Female,
                    email: "faculty@example.edu".to_string(),
                    contact_no: "01755556666".to_string(),
                    academic_department: Uuid::new_v4(),
                    academic_faculty: None,
                }),
                None,
                None,
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::ReferencedEntityMissing(ref entity)) if entity == "Academic department"
        ));
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_provisioning() {
        let mut uploader = MockAssetUploader::new();
        uploader
            .expect_upload()
            .returning(|_, _| Err(AppError::upload("asset store unreachable")));

        // Only the email check and the allocator read are reachable; no
        // insert results exist, so any write attempt after the failed
        // upload would error with a different variant and fail this test
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<account::Model>::new()])
            .append_query_results([Vec::<account::Model>::new()])
            .into_connection();

        let service = provisioner(db, MockAcademicRepository::new(), uploader);

        let result = service
            .provision(
                ProvisionRequest::Admin(admin_draft()),
                None,
                Some(crate::infra::ImageFile {
                    file_name: "photo.jpg".to_string(),
                    content: vec![0xFF, 0xD8],
                }),
            )
            .await;

        assert!(matches!(result, Err(AppError::AssetUpload(_))));
    }

    #[tokio::test]
    async fn test_uploaded_image_name_derives_from_identifier_and_first_name() {
        let mut uploader = MockAssetUploader::new();
        uploader
            .expect_upload()
            .withf(|name, _| name == "A-0001Rina")
            .returning(|_, _| {
                Ok(UploadedAsset {
                    url: "https://assets.example.edu/A-0001Rina.jpg".to_string(),
                })
            });

        let account = account_row("A-0001", "admin");
        let account_id = account.id;
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<account::Model>::new()])
            .append_query_results([Vec::<account::Model>::new()])
            .append_query_results([vec![account]])
            .append_query_results([vec![admin::Model {
                id: Uuid::new_v4(),
                identifier: "A-0001".to_string(),
                account_id,
                designation: "Registrar".to_string(),
                first_name: "Rina".to_string(),
                middle_name: None,
                last_name: "Akter".to_string(),
                gender: "female".to_string(),
                email: "admin@example.edu".to_string(),
                contact_no: "01711112222".to_string(),
                profile_img: Some("https://assets.example.edu/A-0001Rina.jpg".to_string()),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            }]])
            .into_connection();

        let service = provisioner(db, MockAcademicRepository::new(), uploader);

        let result = service
            .provision(
                ProvisionRequest::Admin(admin_draft()),
                None,
                Some(crate::infra::ImageFile {
                    file_name: "photo.jpg".to_string(),
                    content: vec![0xFF, 0xD8],
                }),
            )
            .await
            .unwrap();

        assert_eq!(
            result.profile_img(),
            Some("https://assets.example.edu/A-0001Rina.jpg")
        );
    }

    #[tokio::test]
    async fn test_get_me_for_super_admin_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = provisioner(db, MockAcademicRepository::new(), MockAssetUploader::new());

        let result = service.get_me("0001", Role::SuperAdmin).await.unwrap();
        assert!(result.is_none());
    }
}
