/// Router Module Index
///
/// Organizes the application's routing into access-segregated modules, so
/// the required privilege of every endpoint is visible at the router level
/// rather than buried in individual handlers.
///
/// The three modules map directly to the access tiers of the portal.

/// Routes accessible to all clients: login, the public registration form,
/// and read-only website content.
pub mod public;

/// Routes protected by the `AuthAdmin` extractor middleware: content
/// management for any authenticated active admin.
pub mod authenticated;

/// Routes restricted to the SUPER_ADMIN role: admin account management and
/// student-registration administration.
pub mod admin;
