//! End-to-end tests for the HTTP API over an in-memory SQLite database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{School, TestApp};

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .request(
            axum::http::Method::POST,
            "/api/subjects",
            Some(json!("not an object")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Format data tidak valid.");
}

// =============================================================================
// Classes
// =============================================================================

#[tokio::test]
async fn test_create_class_requires_homeroom() {
    let app = TestApp::spawn().await;
    let (status, body) = app.post("/api/classes", json!({ "name": "X IPA 1" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nama kelas dan wali kelas harus diisi.");
}

#[tokio::test]
async fn test_create_class_with_unknown_homeroom() {
    let app = TestApp::spawn().await;
    let (status, _) = app
        .post(
            "/api/classes",
            json!({ "name": "X IPA 1", "walikelasId": "STF-missing" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/classes").await;
    assert_eq!(body["classes"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_class_ids_are_sequential() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    assert_eq!(school.class_id, "CLS-001");

    let second = app.class("X IPA 2", &school.teacher_id).await;
    assert_eq!(second, "CLS-002");
}

#[tokio::test]
async fn test_class_listing_is_enriched() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    app.student("Budi Santoso", &school.class_id).await;
    app.student("Ani Lestari", &school.class_id).await;

    let (status, body) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["walikelasName"], "Siti Rahmawati");
    assert_eq!(body["studentCount"], 2);
}

#[tokio::test]
async fn test_update_class_may_clear_homeroom() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, _) = app
        .put(
            &format!("/api/classes/{}", school.class_id),
            json!({ "name": "X IPA Unggulan" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(body["name"], "X IPA Unggulan");
    assert!(body["walikelasId"].is_null());
}

#[tokio::test]
async fn test_delete_class_with_students_conflicts() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    app.student("Budi Santoso", &school.class_id).await;

    let (status, _) = app.delete(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Staff
// =============================================================================

#[tokio::test]
async fn test_teacher_staff_requires_nip_and_subject() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .post("/api/staff", json!({ "name": "Siti", "role": "teacher" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Nama, NIP, dan Mata Pelajaran harus diisi untuk guru."
    );
}

#[tokio::test]
async fn test_employee_requires_job_title() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .post("/api/staff", json!({ "name": "Joko", "role": "employee" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Jabatan harus diisi untuk karyawan.");
}

#[tokio::test]
async fn test_staff_role_must_be_known() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .post("/api/staff", json!({ "name": "Joko", "role": "principal" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Peran tidak valid.");
}

#[tokio::test]
async fn test_staff_listing_exposes_taught_classes() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let second = app.class("X IPA 2", &school.teacher_id).await;

    let teacher = app
        .teacher_staff("Rudi Hartono", &school.subject_id, &[&school.class_id, &second])
        .await;
    let employee = app.employee("Joko Widodo", "Tata Usaha").await;

    let (_, body) = app.get(&format!("/api/staff/{}", teacher)).await;
    let mut taught: Vec<String> = body["taughtClassIds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    taught.sort();
    assert_eq!(taught, vec![school.class_id.clone(), second]);
    assert_eq!(body["subjectName"], "Matematika");

    let (_, body) = app.get(&format!("/api/staff/{}", employee)).await;
    assert_eq!(body["taughtClassIds"], json!([]));
    assert_eq!(body["jobTitle"], "Tata Usaha");
    assert!(body["avatarUrl"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_switching_role_clears_teacher_fields() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let staff_id = app
        .teacher_staff("Rudi Hartono", &school.subject_id, &[&school.class_id])
        .await;

    let (status, _) = app
        .put(
            &format!("/api/staff/{}", staff_id),
            json!({ "name": "Rudi Hartono", "role": "employee", "jobTitle": "Pustakawan" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/api/staff/{}", staff_id)).await;
    assert_eq!(body["role"], "employee");
    assert!(body["nip"].is_null());
    assert!(body["subjectId"].is_null());
    assert_eq!(body["taughtClassIds"], json!([]));
}

#[tokio::test]
async fn test_update_missing_staff_is_not_found() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .put(
            "/api/staff/STF-missing",
            json!({ "name": "Joko", "role": "employee", "jobTitle": "Satpam" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Staf tidak ditemukan.");
}

#[tokio::test]
async fn test_delete_staff_cascades_links_and_account() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    // Homeroom of the seeded class, linked to it, and owns an account
    let (status, _) = app
        .put(
            &format!("/api/staff/{}", school.teacher_id),
            json!({
                "name": "Siti Rahmawati",
                "role": "teacher",
                "nip": "198706152010012003",
                "subjectId": school.subject_id,
                "taughtClassIds": [school.class_id],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let user_id = app
        .create(
            "/api/users",
            json!({
                "email": "siti@sekolah.sch.id",
                "password": "RahasiaSekolah123",
                "role": "teacher",
                "staffId": school.teacher_id,
            }),
            "userId",
        )
        .await;

    let (status, _) = app.delete(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, class) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert!(class["walikelasId"].is_null());

    let (status, _) = app.get(&format!("/api/users/{}", user_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_staff_with_journal_conflicts_and_keeps_links() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, _) = app
        .post(
            "/api/journals",
            json!({
                "staffId": school.teacher_id,
                "classId": school.class_id,
                "topic": "Persamaan kuadrat",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.delete(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["message"],
        "Gagal menghapus staf karena masih ada data jurnal atau jadwal yang terkait."
    );

    // Rolled back: still homeroom of the class
    let (status, _) = app.get(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, class) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(class["walikelasId"], school.teacher_id.as_str());
}

#[tokio::test]
async fn test_delete_staff_with_schedule_conflicts() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    app.create(
        "/api/schedules",
        json!({
            "classId": school.class_id,
            "subjectId": school.subject_id,
            "teacherId": school.teacher_id,
            "day": "Monday",
            "startTime": "07:00",
            "endTime": "08:30",
        }),
        "scheduleId",
    )
    .await;

    let (status, _) = app.delete(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// =============================================================================
// Legacy teachers
// =============================================================================

#[tokio::test]
async fn test_legacy_teacher_crud() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, _) = app.post("/api/teachers", json!({ "name": "Pak Dedi" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let teacher_id = app
        .create(
            "/api/teachers",
            json!({
                "name": "Pak Dedi",
                "nip": "197001011995121001",
                "subjectId": school.subject_id,
                "taughtClassIds": [school.class_id],
            }),
            "teacherId",
        )
        .await;

    let (_, body) = app.get("/api/teachers").await;
    let teachers = body["teachers"].as_array().unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0]["taughtClassIds"], json!([school.class_id]));

    let (status, _) = app.delete(&format!("/api/teachers/{}", teacher_id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get(&format!("/api/teachers/{}", teacher_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Guru tidak ditemukan.");
}

// =============================================================================
// Users and login
// =============================================================================

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::spawn().await;
    app.create(
        "/api/users",
        json!({
            "email": "admin@sekolah.sch.id",
            "password": "RahasiaSekolah123",
            "role": "admin",
        }),
        "userId",
    )
    .await;

    let (wrong_status, wrong) = app
        .post(
            "/api/login",
            json!({ "email": "admin@sekolah.sch.id", "password": "salah-sekali" }),
        )
        .await;
    let (unknown_status, unknown) = app
        .post(
            "/api/login",
            json!({ "email": "siapa@sekolah.sch.id", "password": "RahasiaSekolah123" }),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong["message"], "Email atau password salah.");
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_login_returns_user_without_hash() {
    let app = TestApp::spawn().await;
    app.create(
        "/api/users",
        json!({
            "email": "admin@sekolah.sch.id",
            "password": "RahasiaSekolah123",
            "role": "admin",
        }),
        "userId",
    )
    .await;

    let (status, body) = app
        .post(
            "/api/login",
            json!({ "email": "admin@sekolah.sch.id", "password": "RahasiaSekolah123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "admin@sekolah.sch.id");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::spawn().await;
    let (status, _) = app
        .post("/api/login", json!({ "email": "admin@sekolah.sch.id" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;
    let body = json!({
        "email": "admin@sekolah.sch.id",
        "password": "RahasiaSekolah123",
        "role": "admin",
    });
    app.create("/api/users", body.clone(), "userId").await;

    let (status, response) = app.post("/api/users", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["message"], "Email sudah terdaftar.");
}

#[tokio::test]
async fn test_update_user_keeps_password_when_omitted() {
    let app = TestApp::spawn().await;
    let user_id = app
        .create(
            "/api/users",
            json!({
                "email": "admin@sekolah.sch.id",
                "password": "RahasiaSekolah123",
                "role": "admin",
            }),
            "userId",
        )
        .await;

    let (status, _) = app
        .put(
            &format!("/api/users/{}", user_id),
            json!({ "email": "kepsek@sekolah.sch.id", "role": "admin" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            "/api/login",
            json!({ "email": "kepsek@sekolah.sch.id", "password": "RahasiaSekolah123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Students and subjects
// =============================================================================

#[tokio::test]
async fn test_students_filter_by_class() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let other = app.class("X IPS 1", &school.teacher_id).await;
    app.student("Budi Santoso", &school.class_id).await;
    app.student("Ani Lestari", &other).await;

    let (_, body) = app.get("/api/students").await;
    assert_eq!(body["students"].as_array().unwrap().len(), 2);

    let (_, body) = app
        .get(&format!("/api/students?classId={}", other))
        .await;
    let students = body["students"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], "Ani Lestari");
    assert_eq!(students[0]["className"], "X IPS 1");
}

#[tokio::test]
async fn test_student_in_unknown_class_is_rejected() {
    let app = TestApp::spawn().await;
    let (status, _) = app
        .post(
            "/api/students",
            json!({ "name": "Budi Santoso", "classId": "CLS-404" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_subject_in_use_cannot_be_deleted() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, _) = app
        .delete(&format!("/api/subjects/{}", school.subject_id))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let unused = app.subject("Seni Budaya").await;
    let (status, _) = app.delete(&format!("/api/subjects/{}", unused)).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Schedules
// =============================================================================

#[tokio::test]
async fn test_schedules_are_ordered_by_weekday() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    for (day, start, end) in [
        ("Friday", "07:00", "08:00"),
        ("Monday", "09:00", "10:00"),
        ("Monday", "07:00", "08:00"),
        ("Wednesday", "07:00", "08:00"),
    ] {
        app.create(
            "/api/schedules",
            json!({
                "classId": school.class_id,
                "subjectId": school.subject_id,
                "teacherId": school.teacher_id,
                "day": day,
                "startTime": start,
                "endTime": end,
            }),
            "scheduleId",
        )
        .await;
    }

    let (_, body) = app.get("/api/schedules").await;
    let order: Vec<(String, String)> = body["schedules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["day"].as_str().unwrap().to_string(),
                s["startTime"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("Monday".to_string(), "07:00".to_string()),
            ("Monday".to_string(), "09:00".to_string()),
            ("Wednesday".to_string(), "07:00".to_string()),
            ("Friday".to_string(), "07:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_schedule_rejects_employee_as_teacher() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let employee = app.employee("Joko Widodo", "Tata Usaha").await;

    let (status, body) = app
        .post(
            "/api/schedules",
            json!({
                "classId": school.class_id,
                "subjectId": school.subject_id,
                "teacherId": employee,
                "day": "Tuesday",
                "startTime": "07:00",
                "endTime": "08:00",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Guru yang dipilih tidak valid.");
}

#[tokio::test]
async fn test_schedule_end_must_follow_start() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, body) = app
        .post(
            "/api/schedules",
            json!({
                "classId": school.class_id,
                "subjectId": school.subject_id,
                "teacherId": school.teacher_id,
                "day": "Tuesday",
                "startTime": "09:00",
                "endTime": "08:00",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Jam selesai harus setelah jam mulai.");
}

// =============================================================================
// Attendance, journals, admissions and reports
// =============================================================================

#[tokio::test]
async fn test_attendance_for_unknown_student_is_not_found() {
    let app = TestApp::spawn().await;
    let (status, body) = app
        .post(
            "/api/attendance",
            json!({ "studentId": "STD-missing", "status": "Present" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Siswa tidak ditemukan.");
}

#[tokio::test]
async fn test_attendance_window_includes_whole_last_day() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let student = app.student("Budi Santoso", &school.class_id).await;

    for (status, timestamp) in [
        ("Present", "2026-10-05T06:45:00Z"),
        ("Late", "2026-10-06T23:30:00Z"),
        ("Absent", "2026-10-07T07:00:00Z"),
    ] {
        app.create(
            "/api/attendance",
            json!({ "studentId": student, "status": status, "timestamp": timestamp }),
            "recordId",
        )
        .await;
    }

    let (status, body) = app
        .get("/api/attendance?from=2026-10-05&to=2026-10-06")
        .await;
    assert_eq!(status, StatusCode::OK);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["studentName"] == "Budi Santoso"));
}

#[tokio::test]
async fn test_staff_attendance_filters_by_role() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let employee = app.employee("Joko Widodo", "Satpam").await;

    for staff_id in [&school.teacher_id, &employee] {
        app.create(
            "/api/staff-attendance",
            json!({ "staffId": staff_id, "status": "Present" }),
            "recordId",
        )
        .await;
    }

    let (_, body) = app.get("/api/staff-attendance?role=employee").await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["staffId"], employee.as_str());
}

#[tokio::test]
async fn test_journal_defaults_subject_to_teacher() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let journal_id = app
        .create(
            "/api/journals",
            json!({
                "staffId": school.teacher_id,
                "classId": school.class_id,
                "date": "2026-10-05",
                "topic": "Persamaan kuadrat",
            }),
            "journalId",
        )
        .await;

    let (_, body) = app.get(&format!("/api/journals/{}", journal_id)).await;
    assert_eq!(body["subjectId"], school.subject_id.as_str());
    assert_eq!(body["subjectName"], "Matematika");
    assert_eq!(body["className"], "X IPA 1");
}

#[tokio::test]
async fn test_journal_author_must_be_teacher() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let employee = app.employee("Joko Widodo", "Tata Usaha").await;

    let (status, _) = app
        .post(
            "/api/journals",
            json!({
                "staffId": employee,
                "classId": school.class_id,
                "topic": "Persamaan kuadrat",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

fn admission_form(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "previousSchool": "SMP Negeri 1 Bandung",
        "parentName": "Hendra Gunawan",
        "contact": "081234567890",
        "birthPlace": "Bandung",
        "birthDate": "2011-05-17",
        "gender": "Laki-laki",
        "address": "Jl. Merdeka No. 10",
        "academicYear": "2026/2027",
    })
}

#[tokio::test]
async fn test_admission_review_flow() {
    let app = TestApp::spawn().await;
    let first = app
        .create("/api/admissions", admission_form("Rizky Pratama"), "admissionId")
        .await;
    app.create("/api/admissions", admission_form("Dewi Anggraini"), "admissionId")
        .await;

    let (_, body) = app.get(&format!("/api/admissions/{}", first)).await;
    assert_eq!(body["status"], "Pending");

    let (status, _) = app
        .put(
            &format!("/api/admissions/{}/status", first),
            json!({ "status": "Accepted" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .put(
            &format!("/api/admissions/{}/status", first),
            json!({ "status": "Maybe" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/admissions?status=Pending").await;
    let pending = body["admissions"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["name"], "Dewi Anggraini");
}

#[tokio::test]
async fn test_admission_requires_birth_date() {
    let app = TestApp::spawn().await;
    let mut form = admission_form("Rizky Pratama");
    form["birthDate"] = serde_json::Value::Null;

    let (status, body) = app.post("/api/admissions", form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Tanggal lahir harus diisi.");
}

#[tokio::test]
async fn test_monthly_report_groups_by_role() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let employee = app.employee("Joko Widodo", "Satpam").await;
    let student = app.student("Budi Santoso", &school.class_id).await;

    app.create(
        "/api/attendance",
        json!({ "studentId": student, "status": "Late", "timestamp": "2026-10-05T07:10:00Z" }),
        "recordId",
    )
    .await;
    app.create(
        "/api/attendance",
        json!({ "studentId": student, "status": "Present", "timestamp": "2026-11-02T07:00:00Z" }),
        "recordId",
    )
    .await;
    app.create(
        "/api/staff-attendance",
        json!({ "staffId": school.teacher_id, "status": "Present", "timestamp": "2026-10-05T06:30:00Z" }),
        "recordId",
    )
    .await;
    app.create(
        "/api/staff-attendance",
        json!({ "staffId": employee, "status": "Absent", "timestamp": "2026-10-06T06:30:00Z" }),
        "recordId",
    )
    .await;

    let (status, body) = app.get("/api/reports/attendance?year=2026&month=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["totals"]["students"]["late"], 1);
    assert_eq!(body["totals"]["teachers"]["present"], 1);
    assert_eq!(body["totals"]["employees"]["absent"], 1);

    let (status, _) = app.get("/api/reports/attendance?year=2026&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_summary_counts() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    app.employee("Joko Widodo", "Satpam").await;
    app.student("Budi Santoso", &school.class_id).await;
    app.create("/api/admissions", admission_form("Rizky Pratama"), "admissionId")
        .await;

    let (status, body) = app.get("/api/reports/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"], 1);
    assert_eq!(body["teachers"], 1);
    assert_eq!(body["employees"], 1);
    assert_eq!(body["classes"], 1);
    assert_eq!(body["pendingAdmissions"], 1);
    assert_eq!(body["attendanceRate"], 0.0);
}

#[tokio::test]
async fn test_delete_student_with_attendance_conflicts() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let student = app.student("Budi Santoso", &school.class_id).await;
    app.create(
        "/api/attendance",
        json!({ "studentId": student, "status": "Present" }),
        "recordId",
    )
    .await;

    let (status, _) = app.delete(&format!("/api/students/{}", student)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.get(&format!("/api/students/{}", student)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Budi Santoso");
    let (_, body) = app
        .get(&format!("/api/attendance?studentId={}", student))
        .await;
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_legacy_teacher_removes_links_and_account() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;
    let teacher_id = app
        .create(
            "/api/teachers",
            json!({
                "name": "Pak Dedi",
                "nip": "197001011995121001",
                "subjectId": school.subject_id,
                "taughtClassIds": [school.class_id],
            }),
            "teacherId",
        )
        .await;
    let user_id = app
        .create(
            "/api/users",
            json!({
                "email": "dedi@sekolah.sch.id",
                "password": "guru1",
                "role": "teacher",
                "teacherId": teacher_id,
            }),
            "userId",
        )
        .await;

    let (status, body) = app.delete(&format!("/api/teachers/{}", teacher_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Guru berhasil dihapus.");

    let (status, _) = app.get(&format!("/api/users/{}", user_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // The class itself is untouched
    let (status, _) = app.get(&format!("/api/classes/{}", school.class_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&format!("/api/teachers/{}", teacher_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_subject_conflict_leaves_subject_in_place() {
    let app = TestApp::spawn().await;
    let school = School::seed(&app).await;

    let (status, _) = app
        .delete(&format!("/api/subjects/{}", school.subject_id))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.get(&format!("/api/subjects/{}", school.subject_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Matematika");
    let (_, staff) = app.get(&format!("/api/staff/{}", school.teacher_id)).await;
    assert_eq!(staff["subjectId"], school.subject_id.as_str());
}

#[tokio::test]
async fn test_create_messages() {
    let app = TestApp::spawn().await;
    let subject_id = app.subject("Matematika").await;

    let (status, staff) = app
        .post(
            "/api/staff",
            json!({ "name": "Joko Widodo", "role": "employee", "jobTitle": "Satpam" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(staff["message"], "Staf berhasil ditambahkan.");
    let staff_id = staff["staffId"].as_str().unwrap().to_string();

    let (_, class) = app
        .post(
            "/api/classes",
            json!({ "name": "X IPA 1", "walikelasId": staff_id }),
        )
        .await;
    assert_eq!(class["message"], "Kelas berhasil dibuat.");

    let (_, user) = app
        .post(
            "/api/users",
            json!({ "email": "admin@sekolah.sch.id", "password": "admin", "role": "admin" }),
        )
        .await;
    assert_eq!(user["message"], "Pengguna berhasil dibuat.");

    let (_, teacher) = app
        .post(
            "/api/teachers",
            json!({ "name": "Pak Dedi", "nip": "197001011995121001", "subjectId": subject_id }),
        )
        .await;
    assert_eq!(teacher["message"], "Guru berhasil ditambahkan.");

    let (_, deleted) = app.delete(&format!("/api/staff/{}", staff_id)).await;
    // Still homeroom only; the slot is cleared and the delete succeeds
    assert_eq!(deleted["message"], "Staf berhasil dihapus.");
}
