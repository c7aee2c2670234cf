//! Shared test harness: an in-memory repository, a mock image host, and an
//! in-process application instance bound to an ephemeral port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use school_portal::{
    AppConfig, AppState, MockImageHost, create_router,
    auth::{hash_password, issue_token},
    images::ImageHostState,
    models::{
        Admin, AdminRole, Career, CreateCareerRequest, CreateNewsRequest,
        CreateSocialMediaRequest, CreateStudentRequest, CreateTeacherRequest, News, NewAdmin,
        SocialMedia, Student, Teacher, UserStatus,
    },
    pagination::{PageWindow, Paginated},
    repository::{Repository, RepositoryState},
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;

/// MockRepo
///
/// An in-memory `Repository` implementation backed by plain vectors. It
/// honors the same windowing and counting semantics as the Postgres
/// implementation, so list and stats handlers can be exercised end-to-end
/// without a database.
#[derive(Default)]
pub struct MockRepo {
    pub admins: Mutex<Vec<Admin>>,
    pub students: Mutex<Vec<Student>>,
    pub teachers: Mutex<Vec<Teacher>>,
    pub news: Mutex<Vec<News>>,
    pub social_media: Mutex<Vec<SocialMedia>>,
    pub careers: Mutex<Vec<Career>>,
}

fn page_of<T: Clone>(rows: &[T], window: PageWindow) -> Paginated<T> {
    let total = rows.len() as i64;
    let data = rows
        .iter()
        .skip(window.offset as usize)
        .take(window.limit as usize)
        .cloned()
        .collect();
    Paginated {
        data,
        pagination: window.describe(total),
    }
}

#[async_trait]
impl Repository for MockRepo {
    // --- Admins ---

    async fn find_admins(&self, window: PageWindow) -> Result<Paginated<Admin>, sqlx::Error> {
        Ok(page_of(&self.admins.lock().unwrap(), window))
    }

    async fn find_admin(&self, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create_admin(&self, new: NewAdmin) -> Result<Admin, sqlx::Error> {
        let admin = Admin {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            status: new.status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.admins.lock().unwrap().push(admin.clone());
        Ok(admin)
    }

    async fn update_admin(&self, id: Uuid, new: NewAdmin) -> Result<Option<Admin>, sqlx::Error> {
        let mut admins = self.admins.lock().unwrap();
        let Some(admin) = admins.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        admin.name = new.name;
        admin.email = new.email;
        admin.password_hash = new.password_hash;
        admin.role = new.role;
        admin.status = new.status;
        admin.updated_at = Utc::now();
        Ok(Some(admin.clone()))
    }

    async fn delete_admin(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut admins = self.admins.lock().unwrap();
        let before = admins.len();
        admins.retain(|a| a.id != id);
        Ok(admins.len() < before)
    }

    async fn admin_count(&self) -> Result<i64, sqlx::Error> {
        Ok(self.admins.lock().unwrap().len() as i64)
    }

    // --- Students ---

    async fn find_students(&self, window: PageWindow) -> Result<Paginated<Student>, sqlx::Error> {
        Ok(page_of(&self.students.lock().unwrap(), window))
    }

    async fn find_student(&self, id: Uuid) -> Result<Option<Student>, sqlx::Error> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student, sqlx::Error> {
        let student = Student {
            id: Uuid::new_v4(),
            name: req.name,
            gender: req.gender,
            place_of_birth: req.place_of_birth,
            date_of_birth: req.date_of_birth,
            address: req.address,
            phone_number: req.phone_number,
            from_school: req.from_school,
            graduation_year: req.graduation_year,
            biological_father: req.biological_father,
            biological_mother: req.biological_mother,
            father_condition: req.father_condition,
            mother_condition: req.mother_condition,
            father_job: req.father_job,
            mother_job: req.mother_job,
            parent_guardian_phone_number: req.parent_guardian_phone_number,
            major: req.major,
            recommendation_from: req.recommendation_from,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.students.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn update_student(
        &self,
        id: Uuid,
        req: CreateStudentRequest,
    ) -> Result<Option<Student>, sqlx::Error> {
        let mut students = self.students.lock().unwrap();
        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        student.name = req.name;
        student.gender = req.gender;
        student.place_of_birth = req.place_of_birth;
        student.date_of_birth = req.date_of_birth;
        student.address = req.address;
        student.phone_number = req.phone_number;
        student.from_school = req.from_school;
        student.graduation_year = req.graduation_year;
        student.biological_father = req.biological_father;
        student.biological_mother = req.biological_mother;
        student.father_condition = req.father_condition;
        student.mother_condition = req.mother_condition;
        student.father_job = req.father_job;
        student.mother_job = req.mother_job;
        student.parent_guardian_phone_number = req.parent_guardian_phone_number;
        student.major = req.major;
        student.recommendation_from = req.recommendation_from;
        student.updated_at = Utc::now();
        Ok(Some(student.clone()))
    }

    async fn delete_student(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut students = self.students.lock().unwrap();
        let before = students.len();
        students.retain(|s| s.id != id);
        Ok(students.len() < before)
    }

    async fn student_count(&self) -> Result<i64, sqlx::Error> {
        Ok(self.students.lock().unwrap().len() as i64)
    }

    async fn student_count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, sqlx::Error> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.created_at >= cutoff)
            .count() as i64)
    }

    // --- Teachers ---

    async fn find_teachers(&self, window: PageWindow) -> Result<Paginated<Teacher>, sqlx::Error> {
        Ok(page_of(&self.teachers.lock().unwrap(), window))
    }

    async fn find_teacher(&self, id: Uuid) -> Result<Option<Teacher>, sqlx::Error> {
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher, sqlx::Error> {
        let teacher = Teacher {
            id: Uuid::new_v4(),
            name: req.name,
            place_date_of_birth: req.place_date_of_birth,
            status: req.status,
            start_working_date: req.start_working_date,
            position: req.position,
            role: req.role,
            nuptk_nbm: req.nuptk_nbm,
            education: req.education,
            photo: req.photo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.teachers.lock().unwrap().push(teacher.clone());
        Ok(teacher)
    }

    async fn update_teacher(
        &self,
        id: Uuid,
        req: CreateTeacherRequest,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let mut teachers = self.teachers.lock().unwrap();
        let Some(teacher) = teachers.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        teacher.name = req.name;
        teacher.place_date_of_birth = req.place_date_of_birth;
        teacher.status = req.status;
        teacher.start_working_date = req.start_working_date;
        teacher.position = req.position;
        teacher.role = req.role;
        teacher.nuptk_nbm = req.nuptk_nbm;
        teacher.education = req.education;
        teacher.photo = req.photo;
        teacher.updated_at = Utc::now();
        Ok(Some(teacher.clone()))
    }

    async fn delete_teacher(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut teachers = self.teachers.lock().unwrap();
        let before = teachers.len();
        teachers.retain(|t| t.id != id);
        Ok(teachers.len() < before)
    }

    // --- News ---

    async fn find_news(&self, window: PageWindow) -> Result<Paginated<News>, sqlx::Error> {
        Ok(page_of(&self.news.lock().unwrap(), window))
    }

    async fn find_published_news(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<News>, sqlx::Error> {
        let published: Vec<News> = self
            .news
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.status == school_portal::models::NewsStatus::Published)
            .cloned()
            .collect();
        Ok(page_of(&published, window))
    }

    async fn find_news_item(&self, id: Uuid) -> Result<Option<News>, sqlx::Error> {
        Ok(self
            .news
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn create_news(&self, req: CreateNewsRequest) -> Result<News, sqlx::Error> {
        let item = News {
            id: Uuid::new_v4(),
            title: req.title,
            content: req.content,
            photo: req.photo,
            status: req.status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.news.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_news(
        &self,
        id: Uuid,
        req: CreateNewsRequest,
    ) -> Result<Option<News>, sqlx::Error> {
        let mut news = self.news.lock().unwrap();
        let Some(item) = news.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        item.title = req.title;
        item.content = req.content;
        item.photo = req.photo;
        item.status = req.status;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete_news(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut news = self.news.lock().unwrap();
        let before = news.len();
        news.retain(|n| n.id != id);
        Ok(news.len() < before)
    }

    async fn news_count(&self) -> Result<i64, sqlx::Error> {
        Ok(self.news.lock().unwrap().len() as i64)
    }

    async fn published_news_count(&self) -> Result<i64, sqlx::Error> {
        Ok(self
            .news
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.status == school_portal::models::NewsStatus::Published)
            .count() as i64)
    }

    // --- Social Media ---

    async fn find_social_media(
        &self,
        window: PageWindow,
    ) -> Result<Paginated<SocialMedia>, sqlx::Error> {
        Ok(page_of(&self.social_media.lock().unwrap(), window))
    }

    async fn find_social_media_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<SocialMedia>, sqlx::Error> {
        Ok(self
            .social_media
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create_social_media(
        &self,
        req: CreateSocialMediaRequest,
    ) -> Result<SocialMedia, sqlx::Error> {
        let link = SocialMedia {
            id: Uuid::new_v4(),
            name: req.name,
            link: req.link,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.social_media.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn update_social_media(
        &self,
        id: Uuid,
        req: CreateSocialMediaRequest,
    ) -> Result<Option<SocialMedia>, sqlx::Error> {
        let mut links = self.social_media.lock().unwrap();
        let Some(link) = links.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        link.name = req.name;
        link.link = req.link;
        link.updated_at = Utc::now();
        Ok(Some(link.clone()))
    }

    async fn delete_social_media(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut links = self.social_media.lock().unwrap();
        let before = links.len();
        links.retain(|s| s.id != id);
        Ok(links.len() < before)
    }

    // --- Careers ---

    async fn find_careers(&self, window: PageWindow) -> Result<Paginated<Career>, sqlx::Error> {
        Ok(page_of(&self.careers.lock().unwrap(), window))
    }

    async fn find_career(&self, id: Uuid) -> Result<Option<Career>, sqlx::Error> {
        Ok(self
            .careers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create_career(&self, req: CreateCareerRequest) -> Result<Career, sqlx::Error> {
        let career = Career {
            id: Uuid::new_v4(),
            title: req.title,
            requirements: req.requirements,
            job_description: req.job_description,
            location: req.location,
            benefits: req.benefits,
            deadline: req.deadline,
            photo: req.photo,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.careers.lock().unwrap().push(career.clone());
        Ok(career)
    }

    async fn update_career(
        &self,
        id: Uuid,
        req: CreateCareerRequest,
    ) -> Result<Option<Career>, sqlx::Error> {
        let mut careers = self.careers.lock().unwrap();
        let Some(career) = careers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        career.title = req.title;
        career.requirements = req.requirements;
        career.job_description = req.job_description;
        career.location = req.location;
        career.benefits = req.benefits;
        career.deadline = req.deadline;
        career.photo = req.photo;
        career.updated_at = Utc::now();
        Ok(Some(career.clone()))
    }

    async fn delete_career(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut careers = self.careers.lock().unwrap();
        let before = careers.len();
        careers.retain(|c| c.id != id);
        Ok(careers.len() < before)
    }
}

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

/// Boots the full router on an ephemeral port with the given repository and
/// image host, mirroring the production wiring minus the real backends.
pub async fn spawn_app(repo: Arc<MockRepo>, images: ImageHostState) -> TestApp {
    let state = AppState {
        repo: repo as RepositoryState,
        images,
        config: AppConfig::default(),
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

/// Shorthand for the common case: empty repository, non-failing image host.
pub async fn spawn_default_app() -> (TestApp, Arc<MockRepo>) {
    let repo = Arc::new(MockRepo::default());
    let app = spawn_app(repo.clone(), Arc::new(MockImageHost::new())).await;
    (app, repo)
}

/// Seeds an admin account with a real password hash and returns the stored
/// record.
pub async fn seed_admin(
    repo: &MockRepo,
    email: &str,
    password: &str,
    role: AdminRole,
    status: UserStatus,
) -> Admin {
    let new = NewAdmin {
        name: "Seeded Admin".to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).expect("hashing failed"),
        role,
        status,
    };
    repo.create_admin(new).await.expect("seed failed")
}

/// Signs a token for the seeded admin with the same secret the test app
/// validates against.
pub fn token_for(admin: &Admin) -> String {
    issue_token(&AppConfig::default().jwt_secret, admin.id, &admin.email)
        .expect("token signing failed")
}

/// A complete, valid student registration payload.
pub fn sample_student_json() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "gender": "Laki-laki",
        "place_of_birth": "Jakarta",
        "date_of_birth": "2008-01-01T00:00:00Z",
        "address": "Jl. Sudirman No. 1",
        "phone_number": "08123456789",
        "from_school": "SMP Negeri 1",
        "graduation_year": 2024,
        "biological_father": "Budi Santoso",
        "biological_mother": "Siti Aminah",
        "father_condition": "Hidup",
        "mother_condition": "Hidup",
        "father_job": "Pegawai Negeri",
        "mother_job": "Ibu Rumah Tangga",
        "parent_guardian_phone_number": "08123456780",
        "major": "Teknik Komputer dan Jaringan",
        "recommendation_from": "Sekolah"
    })
}
