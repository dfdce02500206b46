use std::collections::BTreeMap;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::error::IngestError;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::organization::OrganizationMetrics;
use crate::store::AttendanceStore;
use crate::utils::excel_parser;
use crate::utils::productivity;
use crate::utils::reports::{
    self, DailyHours, EmployeeHours, EmployeeLeaves, StatusCount, TrendPoint,
};

// -------------------- DTOs --------------------

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[schema(example = "File uploaded and processed successfully")]
    pub message: String,
    #[schema(example = 12)]
    pub employees_processed: usize,
    #[schema(example = 240)]
    pub records_processed: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub kpis: OrganizationMetrics,
    pub charts: DashboardCharts,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub productivity_trend: Vec<TrendPoint>,
    pub leaves_per_employee: Vec<EmployeeLeaves>,
    pub work_status_distribution: Vec<StatusCount>,
    pub expected_vs_actual: Vec<EmployeeHours>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 1)]
    pub total_leaves: u32,
    #[schema(example = 92)]
    pub productivity: u32,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailResponse {
    pub employee: Employee,
    pub attendance_records: Vec<AttendanceRecord>,
    pub charts: EmployeeCharts,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCharts {
    pub daily_hours: Vec<DailyHours>,
    pub leave_vs_present: Vec<StatusCount>,
}

// -------------------- Handlers --------------------

/// Upload a timesheet workbook
///
/// Parses the first sheet (name, date, in-time, out-time per row), derives
/// attendance records and per-employee metrics, and atomically replaces the
/// previously stored batch. Rows with no name or an unparseable date are
/// skipped; a workbook with zero usable rows is rejected outright.
#[utoipa::path(
    post,
    path = "/api/attendance/upload",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Batch processed and stored", body = UploadResponse),
        (status = 400, description = "Empty upload or no valid rows", body = Object, example = json!({
            "error": "No valid data found in Excel file"
        })),
        (status = 500, description = "Workbook could not be read", body = Object, example = json!({
            "error": "Excel parsing failed: Zip error: invalid Zip archive"
        }))
    ),
    tag = "Attendance"
)]
pub async fn upload_attendance(
    store: web::Data<AttendanceStore>,
    body: web::Bytes,
) -> impl Responder {
    if body.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "No file uploaded" }));
    }

    // parse_workbook only fails on an unreadable source; an empty result
    // set is checked separately below.
    let records = match excel_parser::parse_workbook(&body) {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Upload failed");
            return HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }));
        }
    };

    if records.is_empty() {
        // Prior batch stays untouched on a rejected upload.
        return HttpResponse::BadRequest()
            .json(json!({ "error": IngestError::EmptyBatch.to_string() }));
    }

    let mut grouped: BTreeMap<String, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in &records {
        grouped
            .entry(record.employee_name.clone())
            .or_default()
            .push(record.clone());
    }

    let employees: Vec<Employee> = grouped
        .iter()
        .map(|(name, employee_records)| Employee {
            name: name.clone(),
            metrics: productivity::calculate_employee_metrics(employee_records),
        })
        .collect();

    let employees_processed = employees.len();
    let records_processed = records.len();
    store.replace(employees, records);

    info!(employees_processed, records_processed, "Batch ingested");

    HttpResponse::Ok().json(UploadResponse {
        message: "File uploaded and processed successfully".to_string(),
        employees_processed,
        records_processed,
    })
}

/// Organization dashboard
///
/// KPI block plus the four chart series over the current batch. Before any
/// upload the KPIs are zeroed and every series is empty.
#[utoipa::path(
    get,
    path = "/api/attendance/dashboard",
    responses(
        (status = 200, description = "Organization metrics and chart series", body = DashboardResponse)
    ),
    tag = "Attendance"
)]
pub async fn get_dashboard(store: web::Data<AttendanceStore>) -> impl Responder {
    let (employees, records) = store.snapshot();

    if employees.is_empty() {
        return HttpResponse::Ok().json(DashboardResponse {
            kpis: OrganizationMetrics::empty(),
            charts: DashboardCharts {
                productivity_trend: vec![],
                leaves_per_employee: vec![],
                work_status_distribution: vec![],
                expected_vs_actual: vec![],
            },
        });
    }

    let kpis = productivity::calculate_organization_metrics(employees.len(), &records);

    HttpResponse::Ok().json(DashboardResponse {
        kpis,
        charts: DashboardCharts {
            productivity_trend: reports::productivity_trend(&records),
            leaves_per_employee: reports::leaves_per_employee(&employees),
            work_status_distribution: reports::work_status_distribution(&records),
            expected_vs_actual: reports::expected_vs_actual(&employees),
        },
    })
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/attendance/employees",
    responses(
        (status = 200, description = "Employees of the current batch", body = Vec<EmployeeSummary>)
    ),
    tag = "Attendance"
)]
pub async fn list_employees(store: web::Data<AttendanceStore>) -> impl Responder {
    let summaries: Vec<EmployeeSummary> = store
        .employees()
        .into_iter()
        .map(|e| EmployeeSummary {
            name: e.name,
            total_leaves: e.metrics.total_leaves,
            productivity: e.metrics.productivity,
        })
        .collect();

    HttpResponse::Ok().json(summaries)
}

/// Employee detail
///
/// One employee's metrics, their records date-ascending, and the two
/// detail chart series.
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{name}",
    params(
        ("name" = String, Path, description = "Employee name as it appears in the sheet")
    ),
    responses(
        (status = 200, description = "Employee metrics and detail series", body = EmployeeDetailResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_employee(
    store: web::Data<AttendanceStore>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();

    let Some((employee, records)) = store.employee(&name) else {
        return HttpResponse::NotFound().json(json!({ "error": "Employee not found" }));
    };

    let charts = EmployeeCharts {
        daily_hours: reports::daily_hours(&records),
        leave_vs_present: reports::status_counts(&records),
    };

    HttpResponse::Ok().json(EmployeeDetailResponse {
        employee,
        attendance_records: records,
        charts,
    })
}
