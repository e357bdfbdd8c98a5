mod common;

use common::{pdf_kinds, render_pdf, GeneratedPdf, TestResult};
use harbor_ledger::RecalcConfig;
use safe_harbor::documents::{evidence_ledger, policy_pack};
use safe_harbor::DocumentKind;
use std::fs;

fn missing_recalc() -> RecalcConfig {
    RecalcConfig {
        program: "harbor-test-no-such-recalc".to_string(),
        ..RecalcConfig::default()
    }
}

#[test]
fn every_pdf_renders_identically_twice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for kind in pdf_kinds() {
        assert_eq!(kind.render()?, kind.render()?, "{kind:?} is not deterministic");
    }
    Ok(())
}

#[test]
fn ledger_bytes_are_deterministic() -> TestResult {
    let first = DocumentKind::EvidenceLedger.render()?;
    let second = DocumentKind::EvidenceLedger.render()?;
    assert_eq!(first, second);
    assert_eq!(&first[..2], b"PK");
    Ok(())
}

#[test]
fn every_pdf_has_pages_and_its_title() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for kind in pdf_kinds() {
        let pdf = render_pdf(kind)?;
        assert_pdf_min_pages!(pdf, 2);
        assert!(pdf.bytes.starts_with(b"%PDF-1.7"), "{kind:?}");
        assert_pdf_info!(pdf, "Author", "KairoLogic Compliance Division");
    }
    Ok(())
}

#[test]
fn policy_pack_end_to_end() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let default = DocumentKind::PolicyPack.default_path();
    assert!(default.ends_with("SB1188_Data_Sovereignty_Policy_Pack.pdf"));

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(policy_pack::FILE_NAME);
    let report = DocumentKind::PolicyPack.build(&path)?;
    assert_eq!(report.path, path);
    assert!(report.bytes > 0);

    let pdf = GeneratedPdf::from_bytes(fs::read(&path)?)?;
    assert_pdf_min_pages!(pdf, 1);
    assert_pdf_info!(pdf, "Title", "Data Sovereignty & Residency Policy — SB 1188 Compliance");
    assert_pdf_contains_text!(pdf, "KairoLogic");
    Ok(())
}

#[test]
fn default_paths_use_the_published_file_names() {
    let expected = [
        (DocumentKind::PolicyPack, "SB1188_Data_Sovereignty_Policy_Pack.pdf"),
        (DocumentKind::ImplementationGuide, "Safe_Harbor_Implementation_Guide.pdf"),
        (DocumentKind::StaffGuide, "Staff_Training_Guide.pdf"),
        (DocumentKind::Roadmap, "Compliance_Roadmap.pdf"),
        (DocumentKind::AiKit, "AI_Disclosure_Kit.pdf"),
        (DocumentKind::EvidenceLedger, "Evidence_Ledger.xlsx"),
    ];
    for (kind, name) in expected {
        assert_eq!(kind.default_path(), std::path::Path::new("/mnt/user-data/outputs").join(name));
    }
}

#[test]
fn nested_output_directories_are_created() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    for kind in pdf_kinds() {
        let path = dir.path().join(format!("{kind:?}/a/b/c")).join(kind.file_name());
        let report = kind.build(&path)?;
        assert!(path.is_file(), "{}", path.display());
        assert_eq!(fs::metadata(&path)?.len(), report.bytes);
    }

    let ledger = dir.path().join("ledger/a/b/c").join(evidence_ledger::FILE_NAME);
    evidence_ledger::build_with(&ledger, &missing_recalc())?;
    assert!(ledger.is_file());
    Ok(())
}

#[test]
fn ledger_survives_a_missing_recalc_helper() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(evidence_ledger::FILE_NAME);
    let report = evidence_ledger::build_with(&path, &missing_recalc())?;
    assert!(report.bytes > 0);
    assert_eq!(fs::read(&path)?, DocumentKind::EvidenceLedger.render()?);

    let outcome = harbor_ledger::recalc::run(&path, &missing_recalc());
    assert!(matches!(outcome, harbor_ledger::RecalcOutcome::Failed(_)), "{outcome:?}");
    assert!(outcome.note().is_some());
    Ok(())
}
