use super::*;
use crate::state::toast::Severity;

#[test]
fn export_notice_names_report_and_format() {
    let notice = export_notice("GDPR Audit Report", ExportFormat::Json);
    assert_eq!(notice.title, "Report Export Started");
    assert_eq!(notice.description, "Generating GDPR Audit Report in JSON format...");
    assert_eq!(notice.severity, Severity::Default);
}

#[test]
fn templates_generate_pdf() {
    let notice = export_notice("Executive Summary", ExportFormat::Pdf);
    assert_eq!(notice.description, "Generating Executive Summary in PDF format...");
}

#[test]
fn every_report_offers_pdf() {
    assert!(REPORTS.iter().all(|r| r.formats.contains(&ExportFormat::Pdf)));
}
