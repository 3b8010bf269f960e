//! Typed report rows as produced by the reporting queries.
//!
//! Field order in each `to_record` matches the struct declaration and decides
//! the column order of the export.

use crate::sheet::{Record, ToRecord};
use serde::Deserialize;
use std::collections::HashMap;

/// Label used for orders without a panchayat.
pub const UNKNOWN_PANCHAYAT: &str = "Unknown";

/// One order as returned by the sales query, joined with its panchayat name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesOrder {
    #[serde(default)]
    pub panchayat_name: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub status: String,
}

/// Sales totals for one panchayat.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummaryRow {
    pub panchayat_name: String,
    pub total_orders: i64,
    pub total_sales: f64,
    pub delivered_orders: i64,
    pub cancelled_orders: i64,
    pub pending_orders: i64,
}

impl SalesSummaryRow {
    fn empty(panchayat_name: &str) -> Self {
        Self {
            panchayat_name: panchayat_name.to_string(),
            total_orders: 0,
            total_sales: 0.0,
            delivered_orders: 0,
            cancelled_orders: 0,
            pending_orders: 0,
        }
    }

    fn add(&mut self, order: &SalesOrder) {
        self.total_orders += 1;
        self.total_sales += order.total_amount.unwrap_or(0.0);
        match order.status.as_str() {
            "delivered" => self.delivered_orders += 1,
            "cancelled" => self.cancelled_orders += 1,
            "pending" => self.pending_orders += 1,
            _ => {},
        }
    }
}

impl ToRecord for SalesSummaryRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("panchayat_name", self.panchayat_name.as_str())
            .with("total_orders", self.total_orders)
            .with("total_sales", self.total_sales)
            .with("delivered_orders", self.delivered_orders)
            .with("cancelled_orders", self.cancelled_orders)
            .with("pending_orders", self.pending_orders)
    }
}

/// Group orders by panchayat name.
///
/// Groups appear in the order their panchayat is first seen. Orders with no
/// (or an empty) panchayat name are counted under [`UNKNOWN_PANCHAYAT`];
/// statuses other than delivered, cancelled and pending only count towards
/// the totals.
pub fn summarize_sales(orders: &[SalesOrder]) -> Vec<SalesSummaryRow> {
    let mut rows: Vec<SalesSummaryRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        let name = order
            .panchayat_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PANCHAYAT);
        let slot = *index.entry(name).or_insert_with(|| {
            rows.push(SalesSummaryRow::empty(name));
            rows.len() - 1
        });
        rows[slot].add(order);
    }

    rows
}

/// Order handling and earnings for one cook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CookPerformanceRow {
    pub cook_id: String,
    pub kitchen_name: String,
    pub total_orders: i64,
    pub accepted_orders: i64,
    pub rejected_orders: i64,
    pub completed_orders: i64,
    pub average_rating: f64,
    pub total_earnings: f64,
}

impl ToRecord for CookPerformanceRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("cook_id", self.cook_id.as_str())
            .with("kitchen_name", self.kitchen_name.as_str())
            .with("total_orders", self.total_orders)
            .with("accepted_orders", self.accepted_orders)
            .with("rejected_orders", self.rejected_orders)
            .with("completed_orders", self.completed_orders)
            .with("average_rating", self.average_rating)
            .with("total_earnings", self.total_earnings)
    }
}

/// Cash collected and settled by one delivery staff member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliverySettlementRow {
    pub staff_id: String,
    pub staff_name: String,
    pub total_deliveries: i64,
    pub collected_amount: f64,
    pub job_earnings: f64,
    pub total_settled: f64,
    pub pending_settlement: f64,
}

impl ToRecord for DeliverySettlementRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("staff_id", self.staff_id.as_str())
            .with("staff_name", self.staff_name.as_str())
            .with("total_deliveries", self.total_deliveries)
            .with("collected_amount", self.collected_amount)
            .with("job_earnings", self.job_earnings)
            .with("total_settled", self.total_settled)
            .with("pending_settlement", self.pending_settlement)
    }
}

/// Referral count and commission for one referrer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferralReportRow {
    pub referrer_id: String,
    pub referrer_name: String,
    pub referral_code: String,
    pub total_referrals: i64,
    pub total_commission: f64,
    pub pending_commission: f64,
    pub paid_commission: f64,
}

impl ToRecord for ReferralReportRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("referrer_id", self.referrer_id.as_str())
            .with("referrer_name", self.referrer_name.as_str())
            .with("referral_code", self.referral_code.as_str())
            .with("total_referrals", self.total_referrals)
            .with("total_commission", self.total_commission)
            .with("pending_commission", self.pending_commission)
            .with("paid_commission", self.paid_commission)
    }
}
