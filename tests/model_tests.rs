use chrono::{TimeZone, Utc};
use school_portal::models::{
    Admin, AdminRole, Career, News, NewsStatus, SocialMedia, Student, Teacher,
    UpdateAdminRequest, UpdateCareerRequest, UpdateNewsRequest, UpdateSocialMediaRequest,
    UpdateStudentRequest, UpdateTeacherRequest, UserStatus,
};

fn sample_student() -> Student {
    Student {
        name: "Original Name".to_string(),
        gender: "Laki-laki".to_string(),
        place_of_birth: "Jakarta".to_string(),
        date_of_birth: Utc.with_ymd_and_hms(2008, 1, 1, 0, 0, 0).unwrap(),
        address: "Jl. Sudirman No. 1".to_string(),
        phone_number: "08123456789".to_string(),
        from_school: "SMP Negeri 1".to_string(),
        graduation_year: 2024,
        biological_father: "Budi".to_string(),
        biological_mother: "Siti".to_string(),
        father_condition: "Hidup".to_string(),
        mother_condition: "Hidup".to_string(),
        father_job: "Pegawai".to_string(),
        mother_job: "Ibu Rumah Tangga".to_string(),
        parent_guardian_phone_number: "08123456780".to_string(),
        major: "TKJ".to_string(),
        recommendation_from: "Sekolah".to_string(),
        ..Student::default()
    }
}

#[test]
fn student_partial_merge_preserves_absent_fields() {
    let existing = sample_student();
    let patch = UpdateStudentRequest {
        address: Some("Jl. Merdeka No. 2".to_string()),
        ..UpdateStudentRequest::default()
    };

    let merged = patch.merge(&existing);

    assert_eq!(merged.address, "Jl. Merdeka No. 2");
    // Everything not present in the patch is a no-op.
    assert_eq!(merged.name, existing.name);
    assert_eq!(merged.gender, existing.gender);
    assert_eq!(merged.date_of_birth, existing.date_of_birth);
    assert_eq!(merged.graduation_year, existing.graduation_year);
    assert_eq!(merged.major, existing.major);
    assert_eq!(merged.recommendation_from, existing.recommendation_from);
}

#[test]
fn student_empty_patch_is_identity() {
    let existing = sample_student();
    let merged = UpdateStudentRequest::default().merge(&existing);

    assert_eq!(merged.name, existing.name);
    assert_eq!(merged.address, existing.address);
    assert_eq!(merged.phone_number, existing.phone_number);
    assert_eq!(merged.from_school, existing.from_school);
    assert_eq!(merged.biological_father, existing.biological_father);
    assert_eq!(merged.mother_job, existing.mother_job);
}

#[test]
fn teacher_merge_keeps_stored_photo_when_patch_has_none() {
    let existing = Teacher {
        name: "Pak Guru".to_string(),
        photo: Some("https://images.example.com/guru.jpg".to_string()),
        nuptk_nbm: Some("123456789".to_string()),
        status: UserStatus::Active,
        ..Teacher::default()
    };

    let patch = UpdateTeacherRequest {
        position: Some("Kepala Sekolah".to_string()),
        ..UpdateTeacherRequest::default()
    };
    let merged = patch.merge(&existing);

    assert_eq!(merged.position, "Kepala Sekolah");
    assert_eq!(merged.photo.as_deref(), Some("https://images.example.com/guru.jpg"));
    assert_eq!(merged.nuptk_nbm.as_deref(), Some("123456789"));
    assert_eq!(merged.status, UserStatus::Active);
}

#[test]
fn news_merge_replaces_only_given_fields() {
    let existing = News {
        title: "Old Title".to_string(),
        content: "Old content".to_string(),
        status: NewsStatus::Draft,
        photo: None,
        ..News::default()
    };

    let patch = UpdateNewsRequest {
        status: Some(NewsStatus::Published),
        ..UpdateNewsRequest::default()
    };
    let merged = patch.merge(&existing);

    assert_eq!(merged.status, NewsStatus::Published);
    assert_eq!(merged.title, "Old Title");
    assert_eq!(merged.content, "Old content");
    assert_eq!(merged.photo, None);
}

#[test]
fn social_media_merge() {
    let existing = SocialMedia {
        name: "Instagram".to_string(),
        link: "https://instagram.com/old".to_string(),
        ..SocialMedia::default()
    };

    let patch = UpdateSocialMediaRequest {
        link: Some("https://instagram.com/new".to_string()),
        name: None,
    };
    let merged = patch.merge(&existing);

    assert_eq!(merged.name, "Instagram");
    assert_eq!(merged.link, "https://instagram.com/new");
}

#[test]
fn career_merge_keeps_deadline_when_absent() {
    let deadline = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();
    let existing = Career {
        title: "Guru Matematika".to_string(),
        deadline: Some(deadline),
        location: Some("Madiun".to_string()),
        ..Career::default()
    };

    let patch = UpdateCareerRequest {
        benefits: Some("BPJS".to_string()),
        ..UpdateCareerRequest::default()
    };
    let merged = patch.merge(&existing);

    assert_eq!(merged.deadline, Some(deadline));
    assert_eq!(merged.location.as_deref(), Some("Madiun"));
    assert_eq!(merged.benefits.as_deref(), Some("BPJS"));
    assert_eq!(merged.title, "Guru Matematika");
}

#[test]
fn admin_merge_keeps_stored_hash_without_new_password() {
    let existing = Admin {
        name: "Admin One".to_string(),
        email: "one@example.com".to_string(),
        password_hash: "$argon2id$stored".to_string(),
        role: AdminRole::Admin,
        status: UserStatus::Active,
        ..Admin::default()
    };

    let patch = UpdateAdminRequest {
        name: Some("Renamed".to_string()),
        ..UpdateAdminRequest::default()
    };
    let merged = patch.merge(&existing, None);

    assert_eq!(merged.name, "Renamed");
    assert_eq!(merged.email, "one@example.com");
    assert_eq!(merged.password_hash, "$argon2id$stored");
    assert_eq!(merged.role, AdminRole::Admin);
    assert_eq!(merged.status, UserStatus::Active);
}

#[test]
fn admin_merge_takes_fresh_hash_when_password_changes() {
    let existing = Admin {
        password_hash: "$argon2id$stored".to_string(),
        ..Admin::default()
    };

    let patch = UpdateAdminRequest {
        password: Some("new-password".to_string()),
        ..UpdateAdminRequest::default()
    };
    let merged = patch.merge(&existing, Some("$argon2id$fresh".to_string()));

    assert_eq!(merged.password_hash, "$argon2id$fresh");
}

#[test]
fn role_and_status_serialize_screaming_snake_case() {
    assert_eq!(
        serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
        r#""SUPER_ADMIN""#
    );
    assert_eq!(
        serde_json::to_string(&UserStatus::Inactive).unwrap(),
        r#""INACTIVE""#
    );
    assert_eq!(
        serde_json::to_string(&NewsStatus::Published).unwrap(),
        r#""PUBLISHED""#
    );
}

#[test]
fn update_request_none_fields_are_omitted_from_json() {
    let patch = UpdateStudentRequest {
        name: Some("Only Name".to_string()),
        ..UpdateStudentRequest::default()
    };
    let json = serde_json::to_string(&patch).unwrap();
    assert!(json.contains(r#""name":"Only Name""#));
    assert!(!json.contains("address"));
    assert!(!json.contains("graduation_year"));
}
