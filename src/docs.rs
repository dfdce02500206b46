use crate::api::attendance::{
    DashboardCharts, DashboardResponse, EmployeeCharts, EmployeeDetailResponse, EmployeeSummary,
    UploadResponse,
};
use crate::model::attendance::{AttendanceRecord, Status};
use crate::model::employee::{Employee, EmployeeMetrics};
use crate::model::organization::OrganizationMetrics;
use crate::utils::reports::{DailyHours, EmployeeHours, EmployeeLeaves, StatusCount, TrendPoint};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Insight API",
        version = "1.0.0",
        description = r#"
## Employee Attendance & Productivity Dashboard

Ingests spreadsheet time-clock exports and serves derived attendance and
productivity reporting.

### Key Features
- **Timesheet Upload**
  - One `.xlsx` batch at a time; each upload replaces the previous batch
- **Attendance Derivation**
  - Normalizes mixed date/time cell formats, handles overnight shifts,
    classifies every day as Present / Leave / Partial
- **Organization Dashboard**
  - KPIs plus productivity trend, leave, status-distribution and
    expected-vs-actual chart series
- **Employee Detail**
  - Per-employee metrics, daily hours and status breakdown

### Response Format
- JSON-based RESTful responses, camelCase field names

---
Built with **Rust**, **Actix Web**, **calamine**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::upload_attendance,
        crate::api::attendance::get_dashboard,
        crate::api::attendance::list_employees,
        crate::api::attendance::get_employee,
    ),
    components(
        schemas(
            Status,
            AttendanceRecord,
            Employee,
            EmployeeMetrics,
            OrganizationMetrics,
            UploadResponse,
            DashboardResponse,
            DashboardCharts,
            EmployeeSummary,
            EmployeeDetailResponse,
            EmployeeCharts,
            TrendPoint,
            EmployeeLeaves,
            StatusCount,
            EmployeeHours,
            DailyHours
        )
    ),
    tags(
        (name = "Attendance", description = "Timesheet ingest and reporting APIs"),
    )
)]
pub struct ApiDoc;
