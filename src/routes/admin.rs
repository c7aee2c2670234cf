use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Super Admin Router Module
///
/// Defines the routes reserved for the SUPER_ADMIN role: management of
/// admin accounts and of student registrations, plus their dashboard
/// counters.
///
/// Access control is two-layered: the `AuthAdmin` extractor middleware
/// authenticates the request, and every handler here calls `require_role`
/// with `AdminRole::SuperAdmin` before touching the repository.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // --- Admin Accounts ---
        // GET/POST /api/admins — paginated listing and account creation.
        .route(
            "/admins",
            get(handlers::admins::list_admins).post(handlers::admins::create_admin),
        )
        // GET /api/admins/stats/registered-count
        .route(
            "/admins/stats/registered-count",
            get(handlers::admins::admin_registered_count),
        )
        // GET/PATCH/DELETE /api/admins/{id}
        // Update rejects a self role-change; delete rejects self-deletion.
        .route(
            "/admins/{id}",
            get(handlers::admins::get_admin)
                .patch(handlers::admins::update_admin)
                .delete(handlers::admins::delete_admin),
        )
        // --- Student Registrations ---
        // Everything except the public enrollment form.
        .route("/students", get(handlers::students::list_students))
        .route(
            "/students/stats/registered-count",
            get(handlers::students::student_registered_count),
        )
        .route(
            "/students/stats/last-week-registered-count",
            get(handlers::students::student_last_week_registered_count),
        )
        .route(
            "/students/{id}",
            get(handlers::students::get_student)
                .patch(handlers::students::update_student)
                .delete(handlers::students::delete_student),
        )
}
