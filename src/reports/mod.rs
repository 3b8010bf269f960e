//! Admin reports and their export entry point.
//!
//! Four reports are exported from the admin screen. Each has a fixed base
//! file name, and only privileged viewers may export them.

mod rows;

pub use rows::{
    CookPerformanceRow, DeliverySettlementRow, ReferralReportRow, SalesOrder, SalesSummaryRow,
    UNKNOWN_PANCHAYAT, summarize_sales,
};

use crate::common::{Error, Result};
use crate::export::{ExportFormat, ExportOutcome, FileSink, export_with};
use crate::sheet::text::CsvConfig;
use crate::sheet::{Dataset, ToRecord};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Roles allowed to view and export reports.
pub const PRIVILEGED_ROLES: [&str; 2] = ["super_admin", "admin"];

/// The reports available on the admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sales,
    CookPerformance,
    DeliverySettlement,
    Referral,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Sales,
        ReportKind::CookPerformance,
        ReportKind::DeliverySettlement,
        ReportKind::Referral,
    ];

    /// Base file name used for exports of this report.
    pub fn base_filename(&self) -> &'static str {
        match self {
            ReportKind::Sales => "sales-report",
            ReportKind::CookPerformance => "cook-performance",
            ReportKind::DeliverySettlement => "delivery-settlement",
            ReportKind::Referral => "referral-commission",
        }
    }

    /// Parse the JSON rows this report is built from.
    ///
    /// Sales takes raw order rows and groups them by panchayat; the other
    /// reports take their finished rows. Rows are checked against the typed
    /// shape, so a missing or mistyped column is an error.
    pub fn dataset_from_json(&self, input: &str) -> Result<Dataset> {
        match self {
            ReportKind::Sales => {
                let orders: Vec<SalesOrder> = serde_json::from_str(input)?;
                Ok(Dataset::from_rows(&summarize_sales(&orders)))
            },
            ReportKind::CookPerformance => typed_rows::<CookPerformanceRow>(input),
            ReportKind::DeliverySettlement => typed_rows::<DeliverySettlementRow>(input),
            ReportKind::Referral => typed_rows::<ReferralReportRow>(input),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report by Panchayat",
            ReportKind::CookPerformance => "Cook Performance Report",
            ReportKind::DeliverySettlement => "Delivery Settlement Report",
            ReportKind::Referral => "Referral Commission Report",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_filename())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sales" | "sales-report" => Ok(ReportKind::Sales),
            "cook" | "cook-performance" => Ok(ReportKind::CookPerformance),
            "delivery" | "delivery-settlement" => Ok(ReportKind::DeliverySettlement),
            "referral" | "referral-commission" => Ok(ReportKind::Referral),
            other => Err(Error::Other(format!("unknown report '{}'", other))),
        }
    }
}

fn typed_rows<T: DeserializeOwned + ToRecord>(input: &str) -> Result<Dataset> {
    let rows: Vec<T> = serde_json::from_str(input)?;
    Ok(Dataset::from_rows(&rows))
}

/// Whether a role may export reports.
pub fn is_privileged_role(role: &str) -> bool {
    PRIVILEGED_ROLES.contains(&role)
}

/// Export one report on behalf of a viewer.
///
/// Unprivileged viewers get [`Error::AccessDenied`] and nothing is encoded.
/// An empty row set is skipped like any other empty export.
pub fn export_report<T: ToRecord>(
    kind: ReportKind,
    rows: &[T],
    format: ExportFormat,
    privileged: bool,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    export_dataset_report(
        kind,
        &Dataset::from_rows(rows),
        format,
        &CsvConfig::default(),
        privileged,
        sink,
    )
}

/// Like [`export_report`] for an already built dataset and explicit CSV settings.
pub fn export_dataset_report(
    kind: ReportKind,
    dataset: &Dataset,
    format: ExportFormat,
    csv: &CsvConfig,
    privileged: bool,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    if !privileged {
        return Err(Error::AccessDenied(format!(
            "exporting the {} requires an admin role",
            kind.title()
        )));
    }

    debug!(report = %kind, rows = dataset.len(), format = %format, "exporting report");
    export_with(dataset, kind.base_filename(), format, csv, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;
    use crate::sheet::text::encode_csv;

    fn order(name: Option<&str>, amount: Option<f64>, status: &str) -> SalesOrder {
        SalesOrder {
            panchayat_name: name.map(str::to_string),
            total_amount: amount,
            status: status.to_string(),
        }
    }

    fn sales_rows() -> Vec<SalesSummaryRow> {
        summarize_sales(&[
            order(Some("Kottayam, North"), Some(4000.0), "delivered"),
            order(None, Some(900.0), "delivered"),
            order(Some("Kottayam, North"), Some(520.5), "pending"),
            order(Some("Kottayam, North"), None, "cancelled"),
            order(Some(""), Some(100.0), "preparing"),
        ])
    }

    #[test]
    fn test_summarize_sales_groups_by_panchayat() {
        let rows = sales_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            SalesSummaryRow {
                panchayat_name: "Kottayam, North".to_string(),
                total_orders: 3,
                total_sales: 4520.5,
                delivered_orders: 1,
                cancelled_orders: 1,
                pending_orders: 1,
            }
        );
        assert_eq!(rows[1].panchayat_name, UNKNOWN_PANCHAYAT);
        assert_eq!(rows[1].total_orders, 2);
        assert_eq!(rows[1].total_sales, 1000.0);
        assert_eq!(rows[1].delivered_orders, 1);
        assert_eq!(rows[1].pending_orders, 0);
    }

    #[test]
    fn test_sales_rows_to_csv() {
        let csv = encode_csv(&Dataset::from_rows(&sales_rows())).unwrap();
        assert_eq!(
            csv,
            "panchayat_name,total_orders,total_sales,delivered_orders,cancelled_orders,pending_orders\n\
             \"Kottayam, North\",3,4520.5,1,1,1\n\
             Unknown,2,1000,1,0,0"
        );
    }

    #[test]
    fn test_sales_dataset_from_order_json() {
        let input = r#"[
            {"panchayat_name": "Ward <3>", "total_amount": 250, "status": "delivered"},
            {"panchayat_name": null, "total_amount": null, "status": "pending"},
            {"status": "cancelled"}
        ]"#;
        let dataset = ReportKind::Sales.dataset_from_json(input).unwrap();
        assert_eq!(
            encode_csv(&dataset).unwrap(),
            "panchayat_name,total_orders,total_sales,delivered_orders,cancelled_orders,pending_orders\n\
             Ward <3>,1,250,1,0,0\n\
             Unknown,2,0,0,1,1"
        );
    }

    #[test]
    fn test_typed_rows_are_validated() {
        let input = r#"[{"staff_id": "s1", "staff_name": "Ravi", "total_deliveries": "many"}]"#;
        let err = ReportKind::DeliverySettlement.dataset_from_json(input).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let input = r#"[{"cook_id": "c1", "kitchen_name": "Green Leaf", "total_orders": 4,
            "accepted_orders": 4, "rejected_orders": 0, "completed_orders": 3,
            "average_rating": 4.5, "total_earnings": 1800}]"#;
        let dataset = ReportKind::CookPerformance.dataset_from_json(input).unwrap();
        assert_eq!(
            encode_csv(&dataset).unwrap(),
            "cook_id,kitchen_name,total_orders,accepted_orders,rejected_orders,completed_orders,average_rating,total_earnings\n\
             c1,Green Leaf,4,4,0,3,4.5,1800"
        );
    }

    #[test]
    fn test_export_report_uses_kind_filename() {
        let sink = MemorySink::new();
        let outcome =
            export_report(ReportKind::Sales, &sales_rows(), ExportFormat::Spreadsheet, true, &sink)
                .unwrap();

        assert!(matches!(
            outcome,
            ExportOutcome::Delivered { ref filename, .. } if filename == "sales-report.xls"
        ));
        let content = &sink.artifacts()[0].content;
        assert!(content.contains("<Cell><Data ss:Type=\"Number\">4520.5</Data></Cell>"));
        assert!(content.contains("<Cell><Data ss:Type=\"String\">Unknown</Data></Cell>"));
    }

    #[test]
    fn test_unprivileged_viewer_is_denied() {
        let sink = MemorySink::new();
        let err = export_report(ReportKind::Referral, &sales_rows(), ExportFormat::Csv, false, &sink)
            .unwrap_err();
        assert!(matches!(err, Error::AccessDenied(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_report_is_skipped() {
        let sink = MemorySink::new();
        let rows: Vec<CookPerformanceRow> = Vec::new();
        let outcome =
            export_report(ReportKind::CookPerformance, &rows, ExportFormat::Csv, true, &sink)
                .unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_report_kind_names() {
        let names: Vec<_> = ReportKind::ALL.iter().map(|k| k.base_filename()).collect();
        assert_eq!(
            names,
            vec!["sales-report", "cook-performance", "delivery-settlement", "referral-commission"]
        );
        assert_eq!("cook".parse::<ReportKind>().unwrap(), ReportKind::CookPerformance);
        assert!("inventory".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_privileged_roles() {
        assert!(is_privileged_role("admin"));
        assert!(is_privileged_role("super_admin"));
        assert!(!is_privileged_role("cook"));
        assert!(!is_privileged_role(""));
    }

    #[test]
    fn test_row_records_keep_declaration_order() {
        let row = ReferralReportRow {
            referrer_id: "r1".to_string(),
            referrer_name: "Asha".to_string(),
            referral_code: "ASHA10".to_string(),
            total_referrals: 5,
            total_commission: 250.0,
            pending_commission: 50.0,
            paid_commission: 200.0,
        };
        let record = row.to_record();
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec![
                "referrer_id",
                "referrer_name",
                "referral_code",
                "total_referrals",
                "total_commission",
                "pending_commission",
                "paid_commission"
            ]
        );

        let delivery = DeliverySettlementRow {
            staff_id: "s1".to_string(),
            staff_name: "Ravi".to_string(),
            total_deliveries: 30,
            collected_amount: 1200.0,
            job_earnings: 300.0,
            total_settled: 1000.0,
            pending_settlement: 200.0,
        };
        assert_eq!(delivery.to_record().len(), 7);
    }
}
