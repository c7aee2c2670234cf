use crate::models::{
    Admin, Career, CreateCareerRequest, CreateNewsRequest, CreateSocialMediaRequest,
    CreateStudentRequest, CreateTeacherRequest, News, NewsStatus, NewAdmin, SocialMedia, Student,
    Teacher,
};
use crate::pagination::{PageWindow, Paginated};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// The abstract contract for all persistence operations, one section per
/// entity. Handlers interact with the data layer exclusively through this
/// trait, which keeps the concrete backend (Postgres, in-memory mock)
/// swappable in tests.
///
/// Every list method runs its count query and its windowed fetch
/// concurrently and returns the rows together with the computed pagination
/// metadata.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Admins ---
    async fn find_admins(&self, window: PageWindow) -> Result<Paginated<Admin>, sqlx::Error>;
    async fn find_admin(&self, id: Uuid) -> Result<Option<Admin>, sqlx::Error>;
    // Exact-match lookup used by login and the email uniqueness checks.
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error>;
    async fn create_admin(&self, new: NewAdmin) -> Result<Admin, sqlx::Error>;
    async fn update_admin(&self, id: Uuid, new: NewAdmin) -> Result<Option<Admin>, sqlx::Error>;
    async fn delete_admin(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn admin_count(&self) -> Result<i64, sqlx::Error>;

    // --- Students ---
    async fn find_students(&self, window: PageWindow) -> Result<Paginated<Student>, sqlx::Error>;
    async fn find_student(&self, id: Uuid) -> Result<Option<Student>, sqlx::Error>;
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student, sqlx::Error>;
    async fn update_student(
        &self,
        id: Uuid,
        req: CreateStudentRequest,
    ) -> Result<Option<Student>, sqlx::Error>;
    async fn delete_student(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn student_count(&self) -> Result<i64, sqlx::Error>;
    // Registrations created on or after the cutoff instant.
    async fn student_count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, sqlx::Error>;

    // --- Teachers ---
    async fn find_teachers(&self, window: PageWindow) -> Result<Paginated<Teacher>, sqlx::Error>;
    async fn find_teacher(&self, id: Uuid) -> Result<Option<Teacher>, sqlx::Error>;
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher, sqlx::Error>;
    async fn update_teacher(
        &self,
        id: Uuid,
        req: CreateTeacherRequest,
    ) -> Result<Option<Teacher>, sqlx::Error>;
    async fn delete_teacher(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    // --- News ---
    async fn find_news(&self, window: PageWindow) -> Result<Paginated<News>, sqlx::Error>;
    // Public listing: restricted to PUBLISHED items.
    async fn find_published_news(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<News>, sqlx::Error>;
    async fn find_news_item(&self, id: Uuid) -> Result<Option<News>, sqlx::Error>;
    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, sqlx::Error>;
    async fn update_news(
        &self,
        id: Uuid,
        req: CreateNewsRequest,
    ) -> Result<Option<News>, sqlx::Error>;
    async fn delete_news(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn news_count(&self) -> Result<i64, sqlx::Error>;
    async fn published_news_count(&self) -> Result<i64, sqlx::Error>;

    // --- Social Media ---
    async fn find_social_media(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<SocialMedia>, sqlx::Error>;
    async fn find_social_media_by_id(&self, id: Uuid)
    -> Result<Option<SocialMedia>, sqlx::Error>;
    async fn create_social_media(
        &self,
        req: CreateSocialMediaRequest,
    ) -> Result<SocialMedia, sqlx::Error>;
    async fn update_social_media(
        &self,
        id: Uuid,
        req: CreateSocialMediaRequest,
    ) -> Result<Option<SocialMedia>, sqlx::Error>;
    async fn delete_social_media(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Careers ---
    async fn find_careers(&self, window: PageWindow) -> Result<Paginated<Career>, sqlx::Error>;
    async fn find_career(&self, id: Uuid) -> Result<Option<Career>, sqlx::Error>;
    async fn create_career(&self, req: CreateCareerRequest) -> Result<Career, sqlx::Error>;
    async fn update_career(
        &self,
        id: Uuid,
        req: CreateCareerRequest,
    ) -> Result<Option<Career>, sqlx::Error>;
    async fn delete_career(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the
/// PostgreSQL connection pool created at startup.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Shared shape of every unfiltered list endpoint: run the windowed
    /// fetch and the count concurrently, then attach pagination metadata.
    async fn fetch_page<T>(
        &self,
        list_sql: &str,
        count_sql: &str,
        window: PageWindow,
    ) -> Result<Paginated<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let rows = sqlx::query_as::<_, T>(list_sql)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool);
        let total = sqlx::query_scalar::<_, i64>(count_sql).fetch_one(&self.pool);

        let (rows, total) = tokio::try_join!(rows, total)?;
        Ok(Paginated {
            data: rows,
            pagination: window.describe(total),
        })
    }

    async fn delete_by_id(&self, sql: &str, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    // --- Admins ---

    async fn find_admins(&self, window: PageWindow) -> Result<Paginated<Admin>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM admins ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM admins",
            window,
        )
        .await
    }

    async fn find_admin(&self, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_admin(&self, new: NewAdmin) -> Result<Admin, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, name, email, password, role, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.role)
        .bind(new.status)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_admin(&self, id: Uuid, new: NewAdmin) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET name = $2, email = $3, password = $4, role = $5, status = $6, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.role)
        .bind(new.status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_admin(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM admins WHERE id = $1", id).await
    }

    async fn admin_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
    }

    // --- Students ---

    async fn find_students(&self, window: PageWindow) -> Result<Paginated<Student>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM students ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM students",
            window,
        )
        .await
    }

    async fn find_student(&self, id: Uuid) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, gender, place_of_birth, date_of_birth, address, \
             phone_number, from_school, graduation_year, biological_father, biological_mother, \
             father_condition, mother_condition, father_job, mother_job, \
             parent_guardian_phone_number, major, recommendation_from, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.gender)
        .bind(req.place_of_birth)
        .bind(req.date_of_birth)
        .bind(req.address)
        .bind(req.phone_number)
        .bind(req.from_school)
        .bind(req.graduation_year)
        .bind(req.biological_father)
        .bind(req.biological_mother)
        .bind(req.father_condition)
        .bind(req.mother_condition)
        .bind(req.father_job)
        .bind(req.mother_job)
        .bind(req.parent_guardian_phone_number)
        .bind(req.major)
        .bind(req.recommendation_from)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_student(
        &self,
        id: Uuid,
        req: CreateStudentRequest,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET name = $2, gender = $3, place_of_birth = $4, date_of_birth = $5, \
             address = $6, phone_number = $7, from_school = $8, graduation_year = $9, \
             biological_father = $10, biological_mother = $11, father_condition = $12, \
             mother_condition = $13, father_job = $14, mother_job = $15, \
             parent_guardian_phone_number = $16, major = $17, recommendation_from = $18, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(req.name)
        .bind(req.gender)
        .bind(req.place_of_birth)
        .bind(req.date_of_birth)
        .bind(req.address)
        .bind(req.phone_number)
        .bind(req.from_school)
        .bind(req.graduation_year)
        .bind(req.biological_father)
        .bind(req.biological_mother)
        .bind(req.father_condition)
        .bind(req.mother_condition)
        .bind(req.father_job)
        .bind(req.mother_job)
        .bind(req.parent_guardian_phone_number)
        .bind(req.major)
        .bind(req.recommendation_from)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_student(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM students WHERE id = $1", id)
            .await
    }

    async fn student_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
    }

    async fn student_count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE created_at >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
    }

    // --- Teachers ---

    async fn find_teachers(&self, window: PageWindow) -> Result<Paginated<Teacher>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM teachers ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM teachers",
            window,
        )
        .await
    }

    async fn find_teacher(&self, id: Uuid) -> Result<Option<Teacher>, sqlx::Error> {
        sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher, sqlx::Error> {
        sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (id, name, place_date_of_birth, status, start_working_date, \
             position, role, nuptk_nbm, education, photo, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.place_date_of_birth)
        .bind(req.status)
        .bind(req.start_working_date)
        .bind(req.position)
        .bind(req.role)
        .bind(req.nuptk_nbm)
        .bind(req.education)
        .bind(req.photo)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_teacher(
        &self,
        id: Uuid,
        req: CreateTeacherRequest,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        sqlx::query_as::<_, Teacher>(
            "UPDATE teachers SET name = $2, place_date_of_birth = $3, status = $4, \
             start_working_date = $5, position = $6, role = $7, nuptk_nbm = $8, education = $9, \
             photo = $10, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(req.name)
        .bind(req.place_date_of_birth)
        .bind(req.status)
        .bind(req.start_working_date)
        .bind(req.position)
        .bind(req.role)
        .bind(req.nuptk_nbm)
        .bind(req.education)
        .bind(req.photo)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_teacher(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM teachers WHERE id = $1", id)
            .await
    }

    // --- News ---

    async fn find_news(&self, window: PageWindow) -> Result<Paginated<News>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM news ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM news",
            window,
        )
        .await
    }

    async fn find_published_news(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<News>, sqlx::Error> {
        let rows = sqlx::query_as::<_, News>(
            "SELECT * FROM news WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(NewsStatus::Published)
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool);
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news WHERE status = $1")
            .bind(NewsStatus::Published)
            .fetch_one(&self.pool);

        let (rows, total) = tokio::try_join!(rows, total)?;
        Ok(Paginated {
            data: rows,
            pagination: window.describe(total),
        })
    }

    async fn find_news_item(&self, id: Uuid) -> Result<Option<News>, sqlx::Error> {
        sqlx::query_as::<_, News>("SELECT * FROM news WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, sqlx::Error> {
        sqlx::query_as::<_, News>(
            "INSERT INTO news (id, title, content, photo, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.content)
        .bind(req.photo)
        .bind(req.status)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_news(
        &self,
        id: Uuid,
        req: CreateNewsRequest,
    ) -> Result<Option<News>, sqlx::Error> {
        sqlx::query_as::<_, News>(
            "UPDATE news SET title = $2, content = $3, photo = $4, status = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(req.title)
        .bind(req.content)
        .bind(req.photo)
        .bind(req.status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_news(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM news WHERE id = $1", id).await
    }

    async fn news_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
    }

    async fn published_news_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news WHERE status = $1")
            .bind(NewsStatus::Published)
            .fetch_one(&self.pool)
            .await
    }

    // --- Social Media ---

    async fn find_social_media(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<SocialMedia>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM social_media ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM social_media",
            window,
        )
        .await
    }

    async fn find_social_media_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<SocialMedia>, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>("SELECT * FROM social_media WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_social_media(
        &self,
        req: CreateSocialMediaRequest,
    ) -> Result<SocialMedia, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            "INSERT INTO social_media (id, name, link, created_at, updated_at) \
             VALUES ($1, $2, $3, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.link)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_social_media(
        &self,
        id: Uuid,
        req: CreateSocialMediaRequest,
    ) -> Result<Option<SocialMedia>, sqlx::Error> {
        sqlx::query_as::<_, SocialMedia>(
            "UPDATE social_media SET name = $2, link = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(req.name)
        .bind(req.link)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_social_media(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM social_media WHERE id = $1", id)
            .await
    }

    // --- Careers ---

    async fn find_careers(&self, window: PageWindow) -> Result<Paginated<Career>, sqlx::Error> {
        self.fetch_page(
            "SELECT * FROM careers ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            "SELECT COUNT(*) FROM careers",
            window,
        )
        .await
    }

    async fn find_career(&self, id: Uuid) -> Result<Option<Career>, sqlx::Error> {
        sqlx::query_as::<_, Career>("SELECT * FROM careers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_career(&self, req: CreateCareerRequest) -> Result<Career, sqlx::Error> {
        sqlx::query_as::<_, Career>(
            "INSERT INTO careers (id, title, requirements, job_description, location, benefits, \
             deadline, photo, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW()) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(req.title)
        .bind(req.requirements)
        .bind(req.job_description)
        .bind(req.location)
        .bind(req.benefits)
        .bind(req.deadline)
        .bind(req.photo)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_career(
        &self,
        id: Uuid,
        req: CreateCareerRequest,
    ) -> Result<Option<Career>, sqlx::Error> {
        sqlx::query_as::<_, Career>(
            "UPDATE careers SET title = $2, requirements = $3, job_description = $4, \
             location = $5, benefits = $6, deadline = $7, photo = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(req.title)
        .bind(req.requirements)
        .bind(req.job_description)
        .bind(req.location)
        .bind(req.benefits)
        .bind(req.deadline)
        .bind(req.photo)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_career(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.delete_by_id("DELETE FROM careers WHERE id = $1", id)
            .await
    }
}
