//! The portal's route tables, declared as in-process constants.
//!
//! Two tables exist: user-facing page paths and backend API endpoint paths.
//! Each is exposed both as a closed enum, so static call sites get their route
//! keys checked at compile time, and as a [`RouteTable`] for the occasional
//! genuinely dynamic lookup. Keys follow the dotted `resource.action`
//! convention and are otherwise opaque.

use std::sync::OnceLock;

use crate::params::Params;
use crate::resolve::{ResolveError, resolve};
use crate::table::RouteTable;

/// User-facing page paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    /// Landing dashboard.
    Dashboard,
    /// Student directory listing.
    StudentsIndex,
    /// A single student's profile page.
    StudentsShow,
    /// A student's academic records page.
    StudentsRecords,
    /// Faculty directory listing.
    FacultyIndex,
    /// A single faculty member's profile page.
    FacultyShow,
    /// Deliberation sessions overview.
    DeliberationsIndex,
    /// A single deliberation session.
    DeliberationsSession,
    /// Fee statements listing.
    FeesIndex,
    /// Printable receipt for one fee.
    FeesReceipt,
    /// Enrollment options overview.
    EnrollmentOptions,
    /// Detail page for one enrollment option.
    EnrollmentOption,
}

impl PageRoute {
    /// Every page route, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::StudentsIndex,
        Self::StudentsShow,
        Self::StudentsRecords,
        Self::FacultyIndex,
        Self::FacultyShow,
        Self::DeliberationsIndex,
        Self::DeliberationsSession,
        Self::FeesIndex,
        Self::FeesReceipt,
        Self::EnrollmentOptions,
        Self::EnrollmentOption,
    ];

    /// Route key identifying this page in [`page_routes`].
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::StudentsIndex => "students.index",
            Self::StudentsShow => "students.show",
            Self::StudentsRecords => "students.records",
            Self::FacultyIndex => "faculty.index",
            Self::FacultyShow => "faculty.show",
            Self::DeliberationsIndex => "deliberations.index",
            Self::DeliberationsSession => "deliberations.session",
            Self::FeesIndex => "fees.index",
            Self::FeesReceipt => "fees.receipt",
            Self::EnrollmentOptions => "enrollment.options",
            Self::EnrollmentOption => "enrollment.option",
        }
    }

    /// Path template registered for this page.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::StudentsIndex => "/students",
            Self::StudentsShow => "/students/:id",
            Self::StudentsRecords => "/students/:id/records",
            Self::FacultyIndex => "/faculty",
            Self::FacultyShow => "/faculty/:id",
            Self::DeliberationsIndex => "/deliberations",
            Self::DeliberationsSession => "/deliberations/:sessionId",
            Self::FeesIndex => "/fees",
            Self::FeesReceipt => "/fees/:feeId/receipt",
            Self::EnrollmentOptions => "/enrollment/options",
            Self::EnrollmentOption => "/enrollment/options/:optionId",
        }
    }

    /// Resolve this page's path with the provided parameters.
    pub fn resolve(&self, params: &Params) -> Result<String, ResolveError> {
        resolve(page_routes(), self.key(), params)
    }
}

/// Backend API endpoint paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    /// Student collection endpoint.
    StudentsIndex,
    /// Single-student endpoint.
    StudentsShow,
    /// A student's transcript endpoint.
    StudentsTranscript,
    /// Faculty collection endpoint.
    FacultyIndex,
    /// Courses taught by one faculty member.
    FacultyCourses,
    /// Deliberation session collection endpoint.
    DeliberationsSessions,
    /// Verdicts recorded for one deliberation session.
    DeliberationsVerdicts,
    /// Fee statement collection endpoint.
    FeesIndex,
    /// Payments recorded against one fee.
    FeesPayments,
    /// Enrollment option collection endpoint.
    EnrollmentOptions,
}

impl ApiRoute {
    /// Every API route, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::StudentsIndex,
        Self::StudentsShow,
        Self::StudentsTranscript,
        Self::FacultyIndex,
        Self::FacultyCourses,
        Self::DeliberationsSessions,
        Self::DeliberationsVerdicts,
        Self::FeesIndex,
        Self::FeesPayments,
        Self::EnrollmentOptions,
    ];

    /// Route key identifying this endpoint in [`api_routes`].
    pub fn key(&self) -> &'static str {
        match self {
            Self::StudentsIndex => "students.index",
            Self::StudentsShow => "students.show",
            Self::StudentsTranscript => "students.transcript",
            Self::FacultyIndex => "faculty.index",
            Self::FacultyCourses => "faculty.courses",
            Self::DeliberationsSessions => "deliberations.sessions",
            Self::DeliberationsVerdicts => "deliberations.verdicts",
            Self::FeesIndex => "fees.index",
            Self::FeesPayments => "fees.payments",
            Self::EnrollmentOptions => "enrollment.options",
        }
    }

    /// Path template registered for this endpoint.
    pub fn template(&self) -> &'static str {
        match self {
            Self::StudentsIndex => "/api/v1/students",
            Self::StudentsShow => "/api/v1/students/:id",
            Self::StudentsTranscript => "/api/v1/students/:id/transcript",
            Self::FacultyIndex => "/api/v1/faculty",
            Self::FacultyCourses => "/api/v1/faculty/:id/courses",
            Self::DeliberationsSessions => "/api/v1/deliberations/sessions",
            Self::DeliberationsVerdicts => "/api/v1/deliberations/sessions/:sessionId/verdicts",
            Self::FeesIndex => "/api/v1/fees",
            Self::FeesPayments => "/api/v1/fees/:feeId/payments",
            Self::EnrollmentOptions => "/api/v1/enrollment/options",
        }
    }

    /// Resolve this endpoint's path with the provided parameters.
    pub fn resolve(&self, params: &Params) -> Result<String, ResolveError> {
        resolve(api_routes(), self.key(), params)
    }
}

/// Table of user-facing page paths, built on first use.
pub fn page_routes() -> &'static RouteTable {
    static TABLE: OnceLock<RouteTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RouteTable::from_pairs(
            PageRoute::ALL
                .iter()
                .map(|route| (route.key(), route.template())),
        )
    })
}

/// Table of backend API endpoint paths, built on first use.
pub fn api_routes() -> &'static RouteTable {
    static TABLE: OnceLock<RouteTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        RouteTable::from_pairs(
            ApiRoute::ALL
                .iter()
                .map(|route| (route.key(), route.template())),
        )
    })
}
