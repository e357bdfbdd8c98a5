//! The Forensic Evidence Ledger workbook: three registers, a quarterly
//! audit trail and a reference tab.

use crate::error::GenerateError;
use crate::output::{print_confirmation, write_output, OutputReport};
use harbor_ledger::blocks::{self, RowKind};
use harbor_ledger::recalc::{self, RecalcConfig, RecalcOutcome};
use harbor_ledger::{
    Borders, CellFormat, CellRange, CellRef, CreationDate, LedgerError, ListValidation, Properties, Sheet, VAlign,
    Workbook,
};
use harbor_style::palette::*;
use harbor_types::Color;
use std::path::Path;

pub const FILE_NAME: &str = "Evidence_Ledger.xlsx";

pub const SUPPLY_CHAIN: &str = "Digital Supply Chain";
pub const RESIDENCY_SIGNALS: &str = "Technical Residency Signals";
pub const REGULATORY_LOG: &str = "Regulatory & Cure Notice Log";
pub const QUARTERLY_AUDIT: &str = "Quarterly Audit Trail";
pub const INSTRUCTIONS: &str = "Instructions & Reference";

/// Rows 1-3 are the title block, 5 the instructions, 7 the headers.
pub const HEADER_ROW: u32 = 7;

/// A dropdown over one column of a register's data rows.
struct Dropdown {
    column: u16,
    options: &'static str,
    prompt: Option<&'static str>,
    error: Option<&'static str>,
}

impl Dropdown {
    const fn new(column: u16, options: &'static str) -> Self {
        Self {
            column,
            options,
            prompt: None,
            error: None,
        }
    }
}

/// A tab laid out as title block, instructions, header row, starter rows
/// and numbered blank rows.
struct Register {
    name: &'static str,
    tab: Color,
    title: &'static str,
    subtitle: &'static str,
    instructions: &'static str,
    headers: &'static [&'static str],
    widths: &'static [f64],
    starters: &'static [&'static [&'static str]],
    /// The leading starter rows set as examples.
    examples: usize,
    blanks: u32,
    dropdowns: &'static [Dropdown],
}

impl Register {
    fn columns(&self) -> u16 {
        self.headers.len() as u16
    }

    fn first_data_row(&self) -> u32 {
        HEADER_ROW + 1
    }

    fn last_row(&self) -> u32 {
        HEADER_ROW + self.starters.len() as u32 + self.blanks
    }

    /// Builds the sheet. Dropdowns reach one row past the last blank row,
    /// the autofilter stops at it.
    fn sheet(&self) -> Result<Sheet, LedgerError> {
        let mut sheet = Sheet::new(self.name).with_tab_color(self.tab);
        let next = blocks::title_block(&mut sheet, self.title, self.subtitle, 1);
        blocks::instruction_line(&mut sheet, next + 1, self.instructions, self.columns())?;
        blocks::header_row(&mut sheet, HEADER_ROW, self.headers, self.widths);

        let mut row = self.first_data_row();
        for (i, values) in self.starters.iter().enumerate() {
            blocks::data_row(&mut sheet, row, self.columns(), values, RowKind::new(i < self.examples, i % 2 == 1));
            highlight_row(&mut sheet, row, self.headers, values);
            row += 1;
        }
        let first_number = self.starters.len() + 1;
        for i in 0..self.blanks {
            let number = (first_number + i as usize).to_string();
            blocks::data_row(&mut sheet, row, self.columns(), &[number.as_str()], RowKind::new(false, i % 2 == 1));
            row += 1;
        }

        for dropdown in self.dropdowns {
            let range = CellRange::column(dropdown.column, self.first_data_row(), self.last_row() + 1)?;
            let mut validation = ListValidation::new(range, dropdown.options);
            if let Some(prompt) = dropdown.prompt {
                validation = validation.with_prompt(prompt);
            }
            if let Some(error) = dropdown.error {
                validation = validation.with_error(error);
            }
            sheet.add_validation(validation);
        }

        sheet.freeze_at(CellRef::new(self.first_data_row(), 1));
        sheet.set_autofilter(CellRange::new(
            CellRef::new(HEADER_ROW, 1),
            CellRef::new(self.last_row(), self.columns()),
        )?);
        Ok(sheet)
    }
}

/// Font and fill for a status-like value, if it gets one.
fn status_highlight(value: &str) -> Option<(CellFormat, Option<Color>)> {
    if value.contains("SOVEREIGN") || value.contains("RESOLVED") {
        Some((blocks::GOOD, Some(GREEN_50)))
    } else if value.contains("PENDING") {
        Some((blocks::CAUTION, Some(AMBER_50)))
    } else if value.contains("OPEN") {
        Some((blocks::ALERT, Some(RED_50)))
    } else {
        None
    }
}

fn highlight_row(sheet: &mut Sheet, row: u32, headers: &[&str], values: &[&str]) {
    for (col, (header, value)) in (1u16..).zip(headers.iter().zip(values)) {
        let styled = match *header {
            "Status" => status_highlight(value),
            "Risk Tier" if value.contains("CRITICAL") => Some((blocks::ALERT, None)),
            "Risk Tier" if value.contains("HIGH") => Some((blocks::CAUTION, None)),
            "Foreign Routing Detected?" if *value == "No" => {
                sheet.update_format(row, col, |f| f.fill(GREEN_50));
                None
            }
            _ => None,
        };
        if let Some((font, fill)) = styled {
            blocks::highlight(sheet, row, col, font, fill);
        }
    }
}

const SUPPLY_CHAIN_REGISTER: Register = Register {
    name: SUPPLY_CHAIN,
    tab: NAVY,
    title: "DIGITAL SUPPLY CHAIN INVENTORY",
    subtitle: "SB 1188 Vendor Due Diligence Register  |  [Practice Name]  |  Effective: February 2026",
    instructions: "INSTRUCTIONS: Document every vendor that accesses, stores, processes, or transmits patient data \
                   (PHI/PII). Update quarterly. Rows in italics are examples — replace with your actual vendors.",
    headers: &[
        "#",
        "Vendor Name",
        "Service Provided",
        "Risk Tier",
        "PHI Access?",
        "Server Location",
        "Cloud Region",
        "Verification Date",
        "Proof Type",
        "Verified By",
        "Status",
    ],
    widths: &[5.0, 22.0, 24.0, 14.0, 12.0, 20.0, 16.0, 16.0, 18.0, 16.0, 16.0],
    starters: &[
        &["1", "eClinicalWorks", "EMR / Patient Portal", "CRITICAL", "Yes", "USA (Texas / Virginia)", "AWS us-east-1", "01/15/2026", "SOC 2 Type II Report", "J. Martinez", "SOVEREIGN"],
        &["2", "Google Workspace", "Email / Calendar / Drive", "HIGH", "Yes", "USA (Multiple)", "GCP us-central1", "01/20/2026", "DPA + Data Residency Cert", "J. Martinez", "SOVEREIGN"],
        &["3", "Mailchimp (Intuit)", "Patient Newsletter", "MODERATE", "No (PII only)", "USA (Atlanta, GA)", "AWS us-east-1", "02/01/2026", "TOS Review + Email Conf.", "S. Lee", "SOVEREIGN"],
        &["4", "Freed Health", "AI Clinical Transcription", "CRITICAL", "Yes", "USA (Verified)", "AWS us-east-2", "02/05/2026", "Vendor Certificate + NPI Audit", "J. Martinez", "SOVEREIGN"],
        &["5", "Doxy.me", "Telehealth Platform", "CRITICAL", "Yes", "USA (Virginia)", "AWS us-east-1", "02/03/2026", "BAA + Server Location Letter", "S. Lee", "SOVEREIGN"],
        &["6", "WP Engine", "Website Hosting", "HIGH", "No (PII only)", "USA (Texas)", "GCP us-central1", "01/25/2026", "DNS + IP Geolocation Audit", "IT Admin", "SOVEREIGN"],
        &["7", "Weave Communications", "Patient Messaging / VoIP", "HIGH", "Yes", "USA (Utah)", "AWS us-west-2", "02/01/2026", "Vendor Email Confirmation", "S. Lee", "SOVEREIGN"],
        &["8", "Waystar", "Billing / Revenue Cycle", "HIGH", "Yes", "USA (Kentucky)", "Private Cloud (US)", "01/28/2026", "SOC 2 Report + BAA", "J. Martinez", "SOVEREIGN"],
        &["9", "[New Vendor]", "[Service]", "[Tier]", "[Yes/No]", "[Location]", "[Region]", "", "", "", "PENDING"],
        &["10"],
    ],
    examples: 8,
    blanks: 20,
    dropdowns: &[
        Dropdown {
            column: 5,
            options: "Yes,No (PII only),No,Pending Review",
            prompt: Some("Does this vendor access PHI?"),
            error: Some("Select from list"),
        },
        Dropdown::new(4, "CRITICAL,HIGH,MODERATE,LOW"),
        Dropdown::new(11, "SOVEREIGN,PENDING,UNVERIFIED,NON-COMPLIANT,UNDER REVIEW"),
        Dropdown::new(
            9,
            "SOC 2 Type II Report,SOC 2 Type I Report,Vendor Certificate,BAA + Server Letter,DPA + Residency Cert,\
             DNS/IP Geolocation Audit,Email Confirmation,TOS Review,NPI Audit,Contract Review,Pending",
        ),
    ],
};

const RESIDENCY_REGISTER: Register = Register {
    name: RESIDENCY_SIGNALS,
    tab: NAVY_LIGHT,
    title: "TECHNICAL RESIDENCY SIGNALS",
    subtitle: "IP Whitelist & Infrastructure Verification Register  |  [Practice Name]",
    instructions: "INSTRUCTIONS: Track all network endpoints, devices, and remote access points. Verify that no data \
                   routes through foreign proxies, VPNs, or offshore IT support. Update quarterly or upon any \
                   infrastructure change.",
    headers: &[
        "#",
        "Device / System",
        "Primary IP Address",
        "Authorized Region",
        "IT Provider",
        "Connection Type",
        "Last Verified",
        "Verified By",
        "Foreign Routing Detected?",
        "Status",
    ],
    widths: &[5.0, 24.0, 20.0, 18.0, 20.0, 16.0, 16.0, 16.0, 22.0, 16.0],
    starters: &[
        &["1", "Main Office Router", "192.168.x.x (Static)", "Austin, TX", "Spectrum Business", "Fiber / Static IP", "02/01/2026", "IT Admin", "No", "SOVEREIGN"],
        &["2", "Billing Dept VPN", "45.x.x.x (Masked)", "US-Central", "Internal IT", "Site-to-Site VPN", "02/01/2026", "IT Admin", "No", "SOVEREIGN"],
        &["3", "Remote Admin Access", "[Masked]", "Dallas, TX", "SecureOps MSP", "RDP over VPN", "01/28/2026", "J. Martinez", "No", "SOVEREIGN"],
        &["4", "Telehealth Endpoint", "[Provider IP]", "US-East", "Doxy.me", "WebRTC (Browser)", "02/03/2026", "S. Lee", "No", "SOVEREIGN"],
        &["5", "Patient Portal CDN", "[CDN Edge IP]", "US-Multi", "Cloudflare (US)", "HTTPS / CDN", "01/25/2026", "IT Admin", "No", "SOVEREIGN"],
        &["6", "Staff Wi-Fi Network", "10.x.x.x", "Austin, TX", "Internal", "WPA3 Enterprise", "02/01/2026", "IT Admin", "No", "SOVEREIGN"],
        &["7", "Backup Replication", "[Backup IP]", "US-East", "Datto", "Encrypted Tunnel", "01/30/2026", "IT Admin", "No", "SOVEREIGN"],
        &["8"],
    ],
    examples: 7,
    blanks: 15,
    dropdowns: &[
        Dropdown::new(9, "No,Yes - Remediated,Yes - Under Investigation,Unknown"),
        Dropdown::new(10, "SOVEREIGN,PENDING,FLAGGED,NON-COMPLIANT"),
    ],
};

const REGULATORY_REGISTER: Register = Register {
    name: REGULATORY_LOG,
    tab: GOLD_DARK,
    title: "REGULATORY & CURE NOTICE LOG",
    subtitle: "Active Defense Register  |  [Practice Name]  |  SB 1188 / HB 149 Compliance",
    instructions: "INSTRUCTIONS: Document ALL regulatory inquiries, audit requests, patient complaints related to data \
                   sovereignty, and Cure Notices received. This log is your primary evidence of \"Active Defense\" \
                   and Reasonable Care. If it isn't in the ledger, it didn't happen.",
    headers: &[
        "#",
        "Date Received",
        "Agency / Entity",
        "Contact Person",
        "Issue Type",
        "Issue Description",
        "Resolution Action",
        "Evidence Attached?",
        "Date Resolved",
        "Status",
    ],
    widths: &[5.0, 16.0, 22.0, 18.0, 18.0, 30.0, 30.0, 16.0, 16.0, 16.0],
    starters: &[
        &[
            "1",
            "02/08/2026",
            "Texas DSHS",
            "Inspector R. Gomez",
            "AI Transparency Inquiry",
            "Routine inquiry regarding AI chatbot on practice website; requested HB 149 disclosure documentation",
            "Provided HB 149 AI Disclosure Kit, website screenshot showing footer notice, signed AI consent forms",
            "Yes (3 docs)",
            "02/10/2026",
            "RESOLVED",
        ],
        &[
            "2",
            "02/12/2026",
            "Patient Complaint",
            "N/A (Anonymous)",
            "Data Residency Concern",
            "Patient inquired whether their data was stored overseas after seeing AI chatbot",
            "Provided patient with AI Transparency Notice; documented conversation in chart; no violation found",
            "Yes (1 doc)",
            "02/12/2026",
            "RESOLVED",
        ],
        &["3"],
    ],
    examples: 2,
    blanks: 20,
    dropdowns: &[
        Dropdown::new(
            5,
            "AI Transparency Inquiry,Data Residency Inquiry,Cure Notice,State Audit,Patient Complaint,\
             Vendor Non-Compliance,HIPAA Breach Report,Internal Incident,Other",
        ),
        Dropdown::new(10, "RESOLVED,OPEN - In Progress,OPEN - Awaiting Response,ESCALATED,PENDING CURE"),
        Dropdown::new(8, "Yes (attached),Yes (on file),Pending,No,N/A"),
    ],
};

/// Appends the "LEDGER SUMMARY" block two rows below the vendor register.
fn ledger_summary(sheet: &mut Sheet, register: &Register) {
    let first = register.first_data_row();
    let last = register.last_row();
    let names = format!("B{first}:B{last}");
    let status = format!("K{first}:K{last}");
    let label = |color| CellFormat::arial(10.0, color);
    let figure = |color| CellFormat::arial(10.0, color).bold();

    let top = last + 3;
    sheet.write(top, 1, "LEDGER SUMMARY", blocks::SECTION);
    let lines = [
        ("Total Vendors Inventoried:", format!("=COUNTA({names})-COUNTBLANK({names})"), GRAY_700, NAVY),
        ("Sovereign (Verified):", format!("=COUNTIF({status},\"SOVEREIGN\")"), GREEN_600, GREEN_600),
        ("Pending Verification:", format!("=COUNTIF({status},\"PENDING\")"), AMBER_600, AMBER_600),
        (
            "Non-Compliant / Unverified:",
            format!("=COUNTIF({status},\"NON-COMPLIANT\")+COUNTIF({status},\"UNVERIFIED\")"),
            RED_600,
            RED_600,
        ),
    ];
    for (row, (text, formula, text_color, figure_color)) in (top + 1..).zip(lines) {
        sheet.write(row, 1, text, label(text_color));
        sheet.write(row, 3, formula, figure(figure_color));
    }
    sheet.write(top + 6, 1, "Last Updated:", label(GRAY_500));
    sheet.write(top + 6, 3, "[Date]", label(NAVY));
    sheet.write(top + 7, 1, "Updated By:", label(GRAY_500));
    sheet.write(top + 7, 3, "[Name / Title]", label(NAVY));
}

const QUARTERS: [&str; 8] = [
    "Q1 2026 (Jan-Mar)",
    "Q2 2026 (Apr-Jun)",
    "Q3 2026 (Jul-Sep)",
    "Q4 2026 (Oct-Dec)",
    "Q1 2027 (Jan-Mar)",
    "Q2 2027 (Apr-Jun)",
    "Q3 2027 (Jul-Sep)",
    "Q4 2027 (Oct-Dec)",
];

/// Columns C to F take a Yes/No/Partial/N/A answer.
const CHECK_COLUMNS: [u16; 4] = [3, 4, 5, 6];

fn quarterly_audit() -> Result<Sheet, LedgerError> {
    let headers = [
        "Quarter",
        "Audit Date",
        "Sentry Scan\nCompleted?",
        "Vendor Certs\nAll Current?",
        "Employee Acks\nAll Current?",
        "Website Disclosure\nVerified?",
        "Issues Found",
        "Remediation Notes",
        "Auditor",
    ];
    let widths = [14.0, 14.0, 16.0, 16.0, 16.0, 18.0, 24.0, 30.0, 16.0];
    let columns = headers.len() as u16;

    let mut sheet = Sheet::new(QUARTERLY_AUDIT).with_tab_color(GREEN_600);
    let next = blocks::title_block(
        &mut sheet,
        "QUARTERLY AUDIT TRAIL",
        "Rolling Compliance Verification Record  |  [Practice Name]",
        1,
    );
    blocks::instruction_line(
        &mut sheet,
        next + 1,
        "INSTRUCTIONS: Complete one row per quarter. This trail demonstrates ongoing compliance diligence — the \
         single strongest element of Safe Harbor defense. \"If it isn't in the ledger, it didn't happen.\"",
        columns,
    )?;
    blocks::header_row(&mut sheet, HEADER_ROW, &headers, &widths);

    let first_quarter = [
        QUARTERS[0],
        "03/31/2026",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "None",
        "Initial implementation complete. All vendors verified.",
        "[Name]",
    ];
    let mut row = HEADER_ROW + 1;
    for (i, quarter) in QUARTERS.iter().enumerate() {
        let name_only = [*quarter];
        let values: &[&str] = if i == 0 { &first_quarter } else { &name_only };
        blocks::data_row(&mut sheet, row, columns, values, RowKind::new(i == 0, i % 2 == 1));
        for col in CHECK_COLUMNS {
            if values.get(usize::from(col) - 1) == Some(&"Yes") {
                blocks::highlight(&mut sheet, row, col, blocks::GOOD, Some(GREEN_50));
            }
        }
        row += 1;
    }

    for col in CHECK_COLUMNS {
        sheet.add_validation(ListValidation::new(
            CellRange::column(col, HEADER_ROW + 1, row)?,
            "Yes,No,Partial,N/A",
        ));
    }
    sheet.freeze_at(CellRef::new(HEADER_ROW + 1, 1));
    Ok(sheet)
}

/// Titled paragraphs for the reference tab. An empty pair is a gap.
const GUIDANCE: [(&str, &str); 11] = [
    (
        "WHAT IS THIS DOCUMENT?",
        "This Evidence Ledger is the operational backbone of your Safe Harbor™ compliance program. It documents \
         every vendor, network endpoint, regulatory interaction, and quarterly audit — creating an irrefutable \
         paper trail that proves \"Reasonable Care\" under Texas SB 1188.",
    ),
    (
        "WHY IT MATTERS",
        "During a state inquiry or Cure Notice, this ledger is what you submit to demonstrate active compliance \
         governance. Without it, your Data Sovereignty Policy is a signed piece of paper. With it, you have a \
         living, auditable record of due diligence that can stop a $250,000 fine or a $2,500/day Cure Notice \
         penalty.",
    ),
    (
        "THE GOLDEN RULE",
        "\"If it isn't in the ledger, it didn't happen.\" Every vendor verification, every audit result, every \
         regulatory interaction MUST be logged here. Verbal confirmations are worthless without written \
         documentation.",
    ),
    ("", ""),
    (
        "TAB 1: DIGITAL SUPPLY CHAIN",
        "Document every vendor that touches patient data. Include their server location, verification proof, and \
         sovereignty status. Send the Vendor Certification email template (from your AI Disclosure Kit) to every \
         CRITICAL and HIGH tier vendor. Save their reply as a PDF and note it here.",
    ),
    (
        "TAB 2: TECHNICAL RESIDENCY SIGNALS",
        "Track your network infrastructure — routers, VPNs, remote access points, CDN endpoints. This tab proves \
         that no data is being routed through foreign proxies or offshore IT support. Your IT provider should \
         assist with this tab.",
    ),
    (
        "TAB 3: REGULATORY & CURE NOTICE LOG",
        "Log ALL regulatory contact, patient complaints about data privacy, and any Cure Notices. Document your \
         response, attach evidence, and track resolution. This is your \"Active Defense\" register.",
    ),
    (
        "TAB 4: QUARTERLY AUDIT TRAIL",
        "Complete one row per quarter confirming that your Sentry Scan is clean, vendor certs are current, \
         employee acknowledgments are signed, and your website disclosure is live. This rolling record is the \
         strongest element of Safe Harbor defense.",
    ),
    ("", ""),
    (
        "THE QUARTERLY SWEEP (Every 90 Days)",
        "1. Run a Sentry Watch scan at kairologic.com\n2. Review all vendor entries — update any that have \
         changed\n3. Check for new employees needing acknowledgment forms\n4. Verify website AI disclosure is \
         still live\n5. Log the audit in Tab 4\n6. File the updated ledger in your compliance folder",
    ),
    (
        "BURDEN OF PROOF",
        "In a Cure Notice scenario, the state gives you a window (typically 30 days) to prove compliance. This \
         ledger, combined with your signed Data Sovereignty Policy, vendor certificates, and Sentry Scan reports, \
         forms a complete evidentiary portfolio. Practices with this documentation have the strongest possible \
         defense.",
    ),
];

/// Row height for a wrapped guidance paragraph in the 80-wide column.
pub fn guidance_row_height(text: &str) -> f64 {
    (text.chars().count() / 3).max(30) as f64
}

fn instructions() -> Sheet {
    let mut sheet = Sheet::new(INSTRUCTIONS).with_tab_color(GOLD);
    sheet.set_column_width(1, 4.0);
    sheet.set_column_width(2, 80.0);

    sheet.write(2, 2, "SAFE HARBOR™ EVIDENCE LEDGER", CellFormat::arial(16.0, NAVY).bold());
    sheet.write(3, 2, "Instructions & Quick Reference Guide", CellFormat::arial(12.0, GRAY_500));
    blocks::accent_bar(&mut sheet, 4, Borders::NONE);

    let heading = CellFormat::arial(11.0, NAVY).bold();
    let body = CellFormat::arial(10.0, GRAY_700).wrap().valign(VAlign::Top);
    let mut row = 6;
    for (title, text) in GUIDANCE {
        if !title.is_empty() {
            sheet.write(row, 2, title, heading);
            row += 1;
        }
        if !text.is_empty() {
            sheet.write(row, 2, text, body);
            sheet.set_row_height(row, guidance_row_height(text));
            row += 1;
        }
        row += 1;
    }
    sheet
}

/// The complete ledger, in tab order.
pub fn workbook() -> Result<Workbook, LedgerError> {
    let mut book = Workbook::new(Properties {
        title: "Safe Harbor Evidence Ledger".to_string(),
        author: "KairoLogic Compliance Division".to_string(),
        subject: "SB 1188 + HB 149 Forensic Evidence Ledger".to_string(),
        company: "KairoLogic".to_string(),
        created: CreationDate::new(2026, 2, 1),
    });

    let mut supply_chain = SUPPLY_CHAIN_REGISTER.sheet()?;
    ledger_summary(&mut supply_chain, &SUPPLY_CHAIN_REGISTER);
    book.push(supply_chain);
    book.push(RESIDENCY_REGISTER.sheet()?);
    book.push(REGULATORY_REGISTER.sheet()?);
    book.push(quarterly_audit()?);
    book.push(instructions());
    log::debug!("Assembled ledger with sheets {:?}", book.sheet_names());
    Ok(book)
}

/// Writes the ledger to `path`, then runs the default recalculation helper.
pub fn build_document(path: &Path) -> Result<OutputReport, GenerateError> {
    build_with(path, &RecalcConfig::default())
}

/// As [`build_document`], with an explicit recalculation helper. A helper
/// that fails or times out is reported and the build still succeeds.
pub fn build_with(path: &Path, recalc_config: &RecalcConfig) -> Result<OutputReport, GenerateError> {
    let bytes = harbor_ledger::to_bytes(&workbook()?)?;
    let report = write_output(path, &bytes)?;

    match recalc::run(path, recalc_config) {
        RecalcOutcome::Completed { stdout, .. } => println!("{stdout}"),
        outcome => {
            if let Some(note) = outcome.note() {
                println!("Recalc note: {note}");
            }
        }
    }

    print_confirmation("XLSX", &report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_ledger::CellValue;

    #[test]
    fn five_tabs_in_order() {
        let book = workbook().unwrap();
        assert_eq!(
            book.sheet_names(),
            [SUPPLY_CHAIN, RESIDENCY_SIGNALS, REGULATORY_LOG, QUARTERLY_AUDIT, INSTRUCTIONS]
        );
        let tabs: Vec<_> = book.sheets.iter().map(|s| s.tab_color).collect();
        assert_eq!(tabs, [Some(NAVY), Some(NAVY_LIGHT), Some(GOLD_DARK), Some(GREEN_600), Some(GOLD)]);
    }

    #[test]
    fn vendor_register_rows_and_numbering() {
        let sheet = SUPPLY_CHAIN_REGISTER.sheet().unwrap();
        assert_eq!(sheet.text(HEADER_ROW, 11), Some("Status"));
        assert_eq!(sheet.text(8, 2), Some("eClinicalWorks"));
        // Ten starter rows, then blanks numbered 11 to 30.
        assert_eq!(sheet.text(18, 1), Some("11"));
        assert_eq!(sheet.text(37, 1), Some("30"));
        assert!(sheet.cell(38, 1).is_none());
        assert_eq!(sheet.freeze, Some(CellRef::new(8, 1)));
        assert_eq!(sheet.autofilter.unwrap().to_string(), "A7:K37");
    }

    #[test]
    fn example_rows_are_italic_and_blank_rows_are_not() {
        let sheet = SUPPLY_CHAIN_REGISTER.sheet().unwrap();
        assert!(sheet.cell(8, 2).unwrap().format.font.italic);
        assert!(sheet.cell(15, 2).unwrap().format.font.italic);
        assert!(!sheet.cell(16, 2).unwrap().format.font.italic);
        assert!(!sheet.cell(20, 2).unwrap().format.font.italic);
    }

    #[test]
    fn validations_cover_their_header_columns() {
        let book = workbook().unwrap();
        let expected: [(&str, &[&str]); 4] = [
            (SUPPLY_CHAIN, &["PHI Access?", "Risk Tier", "Status", "Proof Type"]),
            (RESIDENCY_SIGNALS, &["Foreign Routing Detected?", "Status"]),
            (REGULATORY_LOG, &["Issue Type", "Status", "Evidence Attached?"]),
            (
                QUARTERLY_AUDIT,
                &[
                    "Sentry Scan\nCompleted?",
                    "Vendor Certs\nAll Current?",
                    "Employee Acks\nAll Current?",
                    "Website Disclosure\nVerified?",
                ],
            ),
        ];
        for (name, headers) in expected {
            let sheet = book.sheet(name).unwrap();
            let found: Vec<_> = sheet
                .validations
                .iter()
                .map(|v| sheet.text(HEADER_ROW, v.range.first.col).unwrap())
                .collect();
            assert_eq!(found, headers, "{name}");
        }
    }

    #[test]
    fn validations_extend_one_row_past_the_blanks() {
        let sheet = RESIDENCY_REGISTER.sheet().unwrap();
        // 8 starters and 15 blanks after the header on row 7.
        assert_eq!(sheet.validations[0].range.to_string(), "I8:I31");
        assert_eq!(sheet.autofilter.unwrap().to_string(), "A7:J30");
    }

    #[test]
    fn phi_dropdown_carries_prompt_and_error() {
        let sheet = SUPPLY_CHAIN_REGISTER.sheet().unwrap();
        let phi = &sheet.validations[0];
        assert_eq!(phi.options, ["Yes", "No (PII only)", "No", "Pending Review"]);
        assert_eq!(phi.prompt.as_deref(), Some("Does this vendor access PHI?"));
        assert_eq!(phi.error.as_deref(), Some("Select from list"));
    }

    #[test]
    fn summary_formulas_span_the_whole_register() {
        let book = workbook().unwrap();
        let sheet = book.sheet(SUPPLY_CHAIN).unwrap();
        assert_eq!(sheet.text(40, 1), Some("LEDGER SUMMARY"));
        assert_eq!(
            sheet.cell(41, 3).unwrap().value,
            CellValue::Formula("=COUNTA(B8:B37)-COUNTBLANK(B8:B37)".to_string())
        );
        assert_eq!(
            sheet.cell(44, 3).unwrap().value,
            CellValue::Formula("=COUNTIF(K8:K37,\"NON-COMPLIANT\")+COUNTIF(K8:K37,\"UNVERIFIED\")".to_string())
        );
        assert_eq!(sheet.text(47, 3), Some("[Name / Title]"));
    }

    #[test]
    fn statuses_and_tiers_are_coloured() {
        let sheet = SUPPLY_CHAIN_REGISTER.sheet().unwrap();
        let sovereign = &sheet.cell(8, 11).unwrap().format;
        assert_eq!(sovereign.fill, Some(GREEN_50));
        assert!(sovereign.font.bold);
        assert!(!sovereign.font.italic);
        let pending = &sheet.cell(16, 11).unwrap().format;
        assert_eq!(pending.fill, Some(AMBER_50));
        assert_eq!(sheet.cell(8, 4).unwrap().format.font.color, RED_600);
        assert_eq!(sheet.cell(9, 4).unwrap().format.font.color, AMBER_600);
        assert_eq!(sheet.cell(10, 4).unwrap().format.font.color, GRAY_500);
    }

    #[test]
    fn open_items_are_red() {
        assert_eq!(status_highlight("OPEN - In Progress"), Some((blocks::ALERT, Some(RED_50))));
        assert_eq!(status_highlight("RESOLVED"), Some((blocks::GOOD, Some(GREEN_50))));
        assert_eq!(status_highlight("NON-COMPLIANT"), None);
    }

    #[test]
    fn first_quarter_is_the_worked_example() {
        let sheet = quarterly_audit().unwrap();
        assert_eq!(sheet.text(8, 1), Some("Q1 2026 (Jan-Mar)"));
        assert_eq!(sheet.text(15, 1), Some("Q4 2027 (Oct-Dec)"));
        let yes = &sheet.cell(8, 3).unwrap().format;
        assert_eq!(yes.fill, Some(GREEN_50));
        assert!(yes.font.bold);
        assert_eq!(sheet.validations.len(), 4);
        assert_eq!(sheet.validations[0].range.to_string(), "C8:C16");
        assert_eq!(sheet.autofilter, None);
    }

    #[test]
    fn guidance_rows_grow_with_their_text() {
        assert_eq!(guidance_row_height("short"), 30.0);
        assert_eq!(guidance_row_height(&"x".repeat(300)), 100.0);
        let sheet = instructions();
        assert_eq!(sheet.column_widths.get(&2), Some(&80.0));
        assert_eq!(sheet.text(6, 2), Some("WHAT IS THIS DOCUMENT?"));
        assert_eq!(sheet.row_heights.get(&4), Some(&3.0));
    }
}
