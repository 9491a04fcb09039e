//! Preparation of the standard variable set for document generation.
//!
//! Builds the fixed map of always-available variables from plain project,
//! company, and contact snapshots. The per-day serial number must already be
//! reserved by the caller; see [`crate::workflows::numbering`].

use crate::workflows::numbering::{generate_document_number, NumberingError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project fields the standard variables draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    pub price: f64,
    pub date: NaiveDate,
}

/// Company fields the standard variables draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub name: String,
    pub address: String,
}

/// Contact fields the standard variables draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Build the standard variable map for one document.
///
/// `counter` is the reserved per-day serial, `tax_rate` the configured sales
/// tax fraction, and `now` the generation timestamp recorded in
/// `created_at`/`updated_at`.
pub fn standard_variables(
    project: &ProjectSnapshot,
    company: &CompanySnapshot,
    contact: &ContactSnapshot,
    counter: u16,
    tax_rate: f64,
    now: NaiveDateTime,
) -> Result<BTreeMap<String, String>, NumberingError> {
    let document_number = generate_document_number(project.date, counter)?;

    let price_before_tax = project.price / (1.0 + tax_rate);
    let tax_amount = project.price - price_before_tax;

    // Minguo (ROC) calendar, used on Taiwanese paperwork.
    let roc_year = project.date.year() - 1911;

    let contact_info = match contact.phone.as_deref() {
        Some(phone) if !phone.is_empty() => format!("{} ({})", contact.name, phone),
        _ => contact.name.clone(),
    };

    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let mut variables = BTreeMap::new();
    variables.insert("project_name".to_string(), project.name.clone());
    variables.insert("company_name".to_string(), company.name.clone());
    variables.insert("contact_name".to_string(), contact.name.clone());

    variables.insert("price".to_string(), format_amount(project.price));
    variables.insert("price_before_tax".to_string(), format_amount(price_before_tax));
    variables.insert("tax_amount".to_string(), format_amount(tax_amount));

    variables.insert("date".to_string(), project.date.format("%Y-%m-%d").to_string());
    variables.insert("year".to_string(), project.date.year().to_string());
    variables.insert("month".to_string(), format!("{:02}", project.date.month()));
    variables.insert("day".to_string(), format!("{:02}", project.date.day()));

    variables.insert("roc_year".to_string(), roc_year.to_string());
    variables.insert(
        "roc_date".to_string(),
        format!("{}/{:02}/{:02}", roc_year, project.date.month(), project.date.day()),
    );

    variables.insert("document_number".to_string(), document_number.clone());
    variables.insert("quotation_number".to_string(), document_number.clone());
    variables.insert("contract_number".to_string(), document_number.clone());
    variables.insert("invoice_number".to_string(), document_number);

    variables.insert("contact_info".to_string(), contact_info);
    variables.insert("contact_email".to_string(), contact.email.clone());
    variables.insert(
        "contact_phone".to_string(),
        contact.phone.clone().unwrap_or_default(),
    );
    variables.insert("company_address".to_string(), company.address.clone());

    variables.insert("created_at".to_string(), timestamp.clone());
    variables.insert("updated_at".to_string(), timestamp);

    Ok(variables)
}

/// Render an amount with thousands separators and two decimals, e.g.
/// `1234567.5` becomes `1,234,567.50`.
fn format_amount(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (integer, fraction) = rendered.split_once('.').unwrap_or((&rendered, "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixtures() -> (ProjectSnapshot, CompanySnapshot, ContactSnapshot) {
        let project = ProjectSnapshot {
            name: "Warehouse Retrofit".to_string(),
            price: 105_000.0,
            date: NaiveDate::from_ymd_opt(2025, 10, 27).expect("valid date"),
        };
        let company = CompanySnapshot {
            name: "Hiyes Interior".to_string(),
            address: "No. 100, Section 2, Taipei".to_string(),
        };
        let contact = ContactSnapshot {
            name: "Lin Wei".to_string(),
            email: "lin.wei@example.com".to_string(),
            phone: Some("02-1234-5678".to_string()),
        };
        (project, company, contact)
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 27)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time")
    }

    #[test]
    fn builds_the_full_standard_set() {
        let (project, company, contact) = fixtures();
        let variables =
            standard_variables(&project, &company, &contact, 1, 0.05, generated_at())
                .expect("variables build");

        assert_eq!(variables.len(), 22);
        assert_eq!(variables["project_name"], "Warehouse Retrofit");
        assert_eq!(variables["document_number"], "HIYES25JBA001");
        assert_eq!(variables["quotation_number"], variables["document_number"]);
        assert_eq!(variables["price"], "105,000.00");
        assert_eq!(variables["price_before_tax"], "100,000.00");
        assert_eq!(variables["tax_amount"], "5,000.00");
        assert_eq!(variables["date"], "2025-10-27");
        assert_eq!(variables["month"], "10");
        assert_eq!(variables["roc_year"], "114");
        assert_eq!(variables["roc_date"], "114/10/27");
        assert_eq!(variables["contact_info"], "Lin Wei (02-1234-5678)");
        assert_eq!(variables["created_at"], "2025-10-27 09:30:00");
    }

    #[test]
    fn contact_info_omits_missing_phone() {
        let (project, company, mut contact) = fixtures();
        contact.phone = None;

        let variables =
            standard_variables(&project, &company, &contact, 3, 0.05, generated_at())
                .expect("variables build");
        assert_eq!(variables["contact_info"], "Lin Wei");
        assert_eq!(variables["contact_phone"], "");
        assert_eq!(variables["document_number"], "HIYES25JBA003");
    }

    #[test]
    fn propagates_counter_errors() {
        let (project, company, contact) = fixtures();
        let err = standard_variables(&project, &company, &contact, 0, 0.05, generated_at())
            .expect_err("counter 0 rejected");
        assert_eq!(err, NumberingError::CounterOutOfRange(0));
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(-4500.0), "-4,500.00");
    }
}
