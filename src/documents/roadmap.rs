//! The 30-Day Compliance Roadmap: four week-long phases from "Pre-Audited"
//! to "Verified Sovereign", then the quarterly maintenance cycle.

use crate::documents::write_pdf;
use crate::error::GenerateError;
use crate::output::OutputReport;
use harbor_layout::Document;
use harbor_template_dsl::prelude::*;
use harbor_types::{Color, DocumentMetadata};
use std::path::Path;

pub const FILE_NAME: &str = "Compliance_Roadmap.pdf";
pub const TITLE: &str = "30-Day Compliance Roadmap — Path to Sovereign Verification";

pub fn chrome() -> PageChrome {
    PageChrome::new(
        "|  30-DAY COMPLIANCE ROADMAP",
        "SB 1188 + HB 149  |  CONFIDENTIAL",
        "KairoLogic  |  30-Day Compliance Roadmap  |  kairologic.com",
    )
}

pub fn document(styles: &StyleRegistry) -> Document {
    Document::new(
        DocumentMetadata::new(
            TITLE,
            "KairoLogic Compliance Division",
            "SB 1188 + HB 149 30-Day Implementation Roadmap",
        ),
        story(styles),
    )
}

pub fn build_document(path: &Path) -> Result<OutputReport, GenerateError> {
    let styles = StyleRegistry::standard();
    write_pdf(&document(&styles), &chrome(), path)
}

pub fn story(styles: &StyleRegistry) -> Vec<Node> {
    let mut story = cover(styles);
    story.extend(phase_one(styles));
    story.extend(phase_two(styles));
    story.extend(phase_three(styles));
    story.extend(phase_four(styles));
    story.extend(maintenance(styles));
    story
}

/// The accent shared by a phase's day badge and its checklists.
pub const PHASE_ACCENTS: [Color; 4] = [RED_600, AMBER_600, BLUE_600, GREEN_600];

fn h2(styles: &StyleRegistry, title: &str) -> Node {
    Node::paragraph(format!("<b>{title}</b>"), &styles["h2"])
}

fn body(styles: &StyleRegistry, text: &str) -> Node {
    Node::paragraph(text, &styles["body"])
}

fn deliverable(styles: &StyleRegistry, text: &str) -> Node {
    callout(styles, text, &BoxStyle::SUCCESS)
}

/// A small coloured band with the phase's day range.
fn day_badge(styles: &StyleRegistry, days: &str, color: Color, width: f32) -> Node {
    let style = BoxStyle::custom(color, None, WHITE)
        .font(StandardFont::HelveticaBold)
        .sized(9.0, 12.0)
        .aligned(TextAlign::Center)
        .padded(4.0, 6.0)
        .width(width);
    callout(styles, &format!("<b>{days}</b>"), &style)
}

/// Kicker, title, day badge and the gold rule.
fn roadmap_header(styles: &StyleRegistry, kicker: &str, title: &str, days: &str, color: Color, width: f32) -> Vec<Node> {
    vec![
        Node::paragraph(kicker, &styles["section_num"]),
        Node::paragraph(title, &styles["h1"]),
        day_badge(styles, days, color, width),
        section_rule(10.0),
    ]
}

const TIMELINE: [(&str, &str, &str, &str); 5] = [
    ("Phase 1", "Days 1–7", "Forensic Diagnostic", "Complete inventory of digital supply chain; identify compliance gaps"),
    (
        "Phase 2",
        "Days 8–14",
        "Policy Adoption & Transparency",
        "Signed policy on file; AI disclosures deployed; vendor verification initiated",
    ),
    (
        "Phase 3",
        "Days 15–21",
        "Vendor Hardening & Staff Training",
        "All vendors verified or flagged; staff trained and attestations collected",
    ),
    (
        "Phase 4",
        "Days 22–30",
        "Verification & Defense",
        "Registry verification complete; Safe Harbor evidence portfolio assembled",
    ),
    ("Ongoing", "Every 90 days", "Maintenance & Monitoring", "Quarterly audit; Sentry Watch scan; evidence ledger updated"),
];

fn cover(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = vec![
        Node::spacer(inch(0.9)),
        banner("30-DAY COMPLIANCE ROADMAP  |  SAFE HARBOR™ VERIFICATION", COVER_WIDTH),
        Node::spacer(inch(0.4)),
    ];
    nodes.extend(cover_title(styles, "The 30-Day Path to<br/>Sovereign Verification"));
    nodes.push(cover_lead(
        styles,
        "A structured, phase-by-phase implementation plan to transition your practice from \"Pre-Audited\" \
         (At-Risk) to \"Verified Sovereign\" (Safe Harbor) status on the Texas Sovereignty Registry — \
         establishing documented compliance with SB 1188 and HB 149 within 30 calendar days.",
        20.0,
    ));
    nodes.push(cover_highlight(
        styles,
        "<b>OBJECTIVE</b><br/>Transition from <b>\"Pre-Audited\" (At-Risk)</b> to <b>\"Verified Sovereign\" \
         (Safe Harbor)</b><br/><br/>Upon completion, your practice will have: a signed Data Sovereignty Policy, \
         deployed AI disclosures, verified vendor residency records, trained staff with signed attestations, and \
         a Verified Sovereign listing on the Texas Sovereignty Registry — a complete evidentiary portfolio that \
         constitutes \"Reasonable Care\" under SB 1188.",
    ));
    nodes.push(Node::spacer(inch(0.25)));
    nodes.push(
        DataTable::new(&[inch(0.9), inch(1.0), inch(1.4), inch(2.5)])
            .header(["Phase", "Days", "Focus", "Outcome"])
            .rows(TIMELINE.iter().map(|(phase, days, focus, outcome)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{phase}</b>"), &styles["cell_bold"])),
                    Cell::from(*days),
                    Cell::from(*focus),
                    Cell::from(*outcome),
                ]
            }))
            .padding(6.0, 6.0)
            .wrap_body(&styles["cell"])
            .rule(TableRule::Background(CellRange::cell(0, 5), CREAM))
            .into(),
    );
    nodes.push(Node::spacer(inch(0.2)));
    nodes.push(meta_table(
        &[
            ("Audience:", "Practice Managers, Compliance Officers, Medical Directors"),
            ("Prerequisite:", "KairoLogic Safe Harbor™ Policy Bundle (purchased)"),
            ("Version:", "1.0 — February 2026"),
        ],
        [inch(1.2), inch(4.4)],
        2.0,
    ));
    nodes.push(Node::PageBreak);
    nodes
}

const GAPS: [(&str, &str); 9] = [
    ("Data Residency Policy", "Signed, entity-specific policy on file"),
    ("Vendor Verification", "All Critical/High vendors verified for US residency"),
    ("AI Disclosure (Website)", "Public-facing notice on website per HB 149"),
    ("AI Consent (Intake)", "Patient consent form in intake packet"),
    ("Privacy Policy Update", "AI Transparency section added"),
    ("Employee Training", "All staff trained + attestations signed"),
    ("Evidence Ledger", "Complete vendor inventory with proofs"),
    ("Foreign Script Removal", "No offshore scripts on practice website"),
    ("Shadow IT Sweep", "No unauthorized tools in use by staff"),
];

fn phase_one(styles: &StyleRegistry) -> Vec<Node> {
    let accent = PHASE_ACCENTS[0];
    let mut nodes = roadmap_header(styles, "PHASE 1", "The Forensic Diagnostic", "DAYS 1 – 7", accent, inch(1.2));
    nodes.push(body(
        styles,
        "Before you can fix compliance gaps, you need to know where they are. Phase 1 is a complete forensic \
         inventory of your practice's digital footprint — every vendor, every tool, every script running on your \
         website. This is the diagnostic that tells you exactly what needs to change.",
    ));

    nodes.push(h2(styles, "1.1 Digital Supply Chain Inventory"));
    nodes.push(body(
        styles,
        "Open the Evidence Ledger (Tab 1: Digital Supply Chain). Systematically document every software vendor \
         and digital service that touches patient data:",
    ));
    nodes.push(checklist_table(
        styles,
        &[
            ("List your EMR / EHR system with server location and contract details", "Practice Mgr", "Ledger Row 1"),
            (
                "List your website hosting provider and verify DNS records for US-only hosting",
                "IT / Web Dev",
                "Ledger + DNS audit",
            ),
            ("List your email service provider (Google Workspace, Microsoft 365, etc.)", "Practice Mgr", "Ledger Row"),
            ("List your appointment scheduling and patient communication tools", "Front Desk Mgr", "Ledger Row"),
            ("List your telehealth / video conferencing platform", "Practice Mgr", "Ledger Row"),
            ("List your billing, RCM, and insurance verification tools", "Billing Mgr", "Ledger Row"),
            (
                "List ALL AI tools in use (transcription, chatbots, clinical AI, etc.)",
                "Practice Mgr",
                "Ledger + AI Inventory",
            ),
            ("List your backup and disaster recovery services", "IT Admin", "Ledger Row"),
            ("List any marketing tools (CRM, newsletter, review management)", "Marketing", "Ledger Row"),
            ("List VoIP, phone system, and fax services", "Office Mgr", "Ledger Row"),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "1.2 Digital Perimeter Sweep"));
    nodes.push(body(
        styles,
        "Perform a forensic scan of your practice website to identify hidden scripts, tracking pixels, embedded \
         resources, and third-party integrations that may be routing data through offshore servers. Many \
         practices are unaware that their website contains foreign-hosted scripts added by marketing plugins, \
         analytics tools, or theme components.",
    ));
    nodes.push(checklist_table(
        styles,
        &[
            ("Run a KairoLogic Sentry Scan on your practice website URL", "Practice Mgr", "Sentry Report PDF"),
            ("Review scan results for any foreign-hosted scripts or resources", "Practice Mgr", "Gap list"),
            (
                "Identify all third-party tracking pixels (Google Analytics, Facebook, etc.)",
                "Web Dev",
                "Script inventory",
            ),
            ("Check for CDN endpoints that may route through foreign edge nodes", "IT / Web Dev", "CDN config docs"),
            ("Review website form handlers (intake, contact, appointment request)", "Web Dev", "Form routing audit"),
            (
                "Check for embedded chat widgets or AI chatbots and their hosting origins",
                "Practice Mgr",
                "Widget audit",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "1.3 Compliance Gap Analysis"));
    nodes.push(body(
        styles,
        "Compare your current digital footprint against the requirements of both SB 1188 (Data Sovereignty) and \
         HB 149 (AI Transparency). Identify every gap that must be closed before verification.",
    ));
    nodes.push(
        DataTable::new(&[inch(1.5), inch(2.4), inch(1.9)])
            .header(["Compliance Area", "SB 1188 Requirement", "Your Status"])
            .rows(GAPS.iter().map(|(area, requirement)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{area}</b>"), &styles["cell_bold"])),
                    Cell::from(*requirement),
                    Cell::from("[  ] Complete  [  ] Incomplete"),
                ]
            }))
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(8.0));
    nodes.push(deliverable(
        styles,
        "<b>PHASE 1 DELIVERABLE:</b> A completed Evidence Ledger (Tab 1) with every vendor documented, a Sentry \
         Scan report identifying any foreign-hosted scripts, and a Gap Analysis showing exactly what must be \
         remediated in Phase 2. You should now know precisely where your practice stands.",
    ));
    nodes
}

fn phase_two(styles: &StyleRegistry) -> Vec<Node> {
    let accent = PHASE_ACCENTS[1];
    let mut nodes = vec![Node::spacer(10.0)];
    nodes.extend(roadmap_header(
        styles,
        "PHASE 2",
        "Policy Adoption &amp; Transparency Deployment",
        "DAYS 8 – 14",
        accent,
        inch(1.2),
    ));
    nodes.push(body(
        styles,
        "With your diagnostic complete, Phase 2 focuses on establishing the foundational compliance documents: \
         your signed Data Sovereignty Policy, public-facing AI disclosures, and the initiation of vendor \
         verification outreach.",
    ));

    nodes.push(h2(styles, "2.1 Adopt &amp; Execute the Data Sovereignty Policy"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Open SB 1188 Data Sovereignty Policy; replace all [Practice Name] placeholders with legal entity name",
                "Practice Mgr",
                "Customized policy",
            ),
            (
                "Designate a Data Sovereignty Officer by name and title (typically Office Manager)",
                "Med Director",
                "Officer designation",
            ),
            ("Review the policy with Medical Director or Practice Owner", "Med Director", "Review confirmed"),
            (
                "Print the finalized policy and obtain \"wet ink\" signatures on execution page",
                "Practice Mgr",
                "Signed original",
            ),
            (
                "Scan signed policy as PDF; file original in HIPAA binder, digital copy in compliance folder",
                "Practice Mgr",
                "3 copies secured",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "2.2 Deploy AI Transparency Disclosures (HB 149)"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Deploy website footer AI Transparency Notice (from AI Disclosure Kit, Asset 1) on all pages",
                "Web Dev",
                "Screenshot evidence",
            ),
            (
                "Add AI Consent Form (Asset 2) to new-patient intake packet, after HIPAA Notice of Privacy Practices",
                "Front Desk Mgr",
                "Updated packet",
            ),
            ("Insert AI Transparency section (Asset 3) into website privacy policy", "Web Dev", "Updated policy page"),
            ("Print and post waiting room signage (Asset 7) in patient-facing areas", "Office Mgr", "Signage displayed"),
            (
                "Train front desk staff on phone inquiry scripts (Asset 4, all 3 scenarios)",
                "Practice Mgr",
                "Training log",
            ),
            (
                "Post Staff AI Guidelines (Asset 5) in breakroom and add to employee handbook",
                "Practice Mgr",
                "Posted + handbook",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "2.3 Initiate Vendor Verification Outreach"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Send Vendor AI Verification email (Asset 8) to all CRITICAL-tier vendors in your Evidence Ledger",
                "Practice Mgr",
                "Sent emails logged",
            ),
            ("Send Vendor AI Verification email to all HIGH-tier vendors", "Practice Mgr", "Sent emails logged"),
            ("Set 14-business-day deadline in calendar for vendor responses", "Practice Mgr", "Calendar reminder"),
            (
                "Request Data Processing Addendums (DPAs) or Data Residency Certificates from each vendor",
                "Practice Mgr",
                "Requests sent",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(deliverable(
        styles,
        "<b>PHASE 2 DELIVERABLE:</b> A signed Data Sovereignty Policy filed in your HIPAA binder, AI disclosures \
         live on your website and in patient intake forms, waiting room signage displayed, staff briefed on AI \
         scripts, and vendor verification emails sent to all Critical and High-tier vendors.",
    ));
    nodes
}

fn phase_three(styles: &StyleRegistry) -> Vec<Node> {
    let accent = PHASE_ACCENTS[2];
    let mut nodes = vec![Node::spacer(10.0)];
    nodes.extend(roadmap_header(
        styles,
        "PHASE 3",
        "Vendor Hardening &amp; Staff Training",
        "DAYS 15 – 21",
        accent,
        inch(1.2),
    ));
    nodes.push(body(
        styles,
        "Phase 3 closes the two most common compliance gaps: unverified vendors and untrained staff. By the end of \
         this phase, every vendor should be verified (or flagged for replacement) and every staff member should \
         have completed the sovereignty training with a signed attestation.",
    ));

    nodes.push(h2(styles, "3.1 Vendor Verification &amp; Hardening"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Collect and review vendor responses to verification emails sent in Phase 2",
                "Practice Mgr",
                "Responses on file",
            ),
            (
                "For each confirmed vendor: save reply as PDF, update Evidence Ledger status to \"SOVEREIGN\"",
                "Practice Mgr",
                "Ledger updated",
            ),
            (
                "For vendors providing formal DPAs or Certificates: file in /Compliance/Vendor-Confirmations/",
                "Practice Mgr",
                "Certs on file",
            ),
            ("For non-responsive vendors: send follow-up email with 7-day deadline", "Practice Mgr", "Follow-up sent"),
            (
                "For vendors that CANNOT confirm US residency: flag as \"NON-COMPLIANT\" in Ledger",
                "Practice Mgr",
                "Flagged in Ledger",
            ),
            (
                "For non-compliant vendors: begin researching US-sovereign alternatives and create migration plan",
                "Practice Mgr + IT",
                "Migration plan",
            ),
            ("Remove or replace any foreign-hosted scripts identified in Phase 1 Sentry Scan", "Web Dev", "Clean scan result"),
            (
                "Update Evidence Ledger Tab 2 (Technical Residency Signals) with all network endpoints",
                "IT Admin",
                "Tab 2 complete",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "3.2 Staff Training &amp; Attestation"));
    nodes.push(checklist_table(
        styles,
        &[
            ("Schedule 15-minute \"Sovereignty Huddle\" training session for all staff", "Practice Mgr", "Meeting invite"),
            ("Conduct training using Staff Training Guide (Modules 1–5)", "Practice Mgr", "Training delivered"),
            ("Walk through real-world scenarios (Module 6) with staff", "Practice Mgr", "Discussion complete"),
            (
                "Distribute and collect signed Staff Attestation forms from every employee",
                "Practice Mgr",
                "Signed forms",
            ),
            (
                "File signed attestations in personnel files (physical + digital scan)",
                "Practice Mgr / HR",
                "Filed + scanned",
            ),
            ("Post Quick Reference Card (Module 7) at all workstations and in breakroom", "Office Mgr", "Cards posted"),
            (
                "Distribute Approved Software List to all staff (from Training Guide Module 2)",
                "Practice Mgr",
                "List distributed",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(deliverable(
        styles,
        "<b>PHASE 3 DELIVERABLE:</b> All vendors verified or flagged with migration plans, foreign scripts removed \
         from website, Evidence Ledger fully populated with proofs, all staff trained with signed attestations on \
         file, Quick Reference Cards posted at workstations.",
    ));
    nodes
}

/// The binder contents that make up the Safe Harbor defence.
pub const PORTFOLIO: [&str; 10] = [
    "Signed Data Sovereignty Policy (SB 1188)",
    "Evidence Ledger (all tabs complete)",
    "Vendor Data Residency Certificates / Confirmation PDFs",
    "AI Disclosure Kit deployment evidence (website screenshots)",
    "Signed Patient AI Consent Forms (sample batch)",
    "Signed Employee Attestation Forms (all staff)",
    "Staff Training completion log",
    "KairoLogic Sentry Scan Report (baseline + final)",
    "Quarterly Audit Checklist (Q1 completed)",
    "Registry Verification confirmation",
];

fn phase_four(styles: &StyleRegistry) -> Vec<Node> {
    let accent = PHASE_ACCENTS[3];
    let mut nodes = vec![Node::spacer(10.0)];
    nodes.extend(roadmap_header(
        styles,
        "PHASE 4",
        "Verification &amp; Safe Harbor Defense",
        "DAYS 22 – 30",
        accent,
        inch(1.2),
    ));
    nodes.push(body(
        styles,
        "The final phase brings everything together: a comprehensive audit of your evidence portfolio, \
         verification on the Texas Sovereignty Registry, and assembly of your Safe Harbor defense package.",
    ));

    nodes.push(h2(styles, "4.1 Final Evidence Audit"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Review Evidence Ledger Tab 1: confirm all vendors have status of SOVEREIGN or documented migration plan",
                "Practice Mgr",
                "Ledger audit",
            ),
            (
                "Review Evidence Ledger Tab 2: confirm all network endpoints are documented and sovereign",
                "IT Admin",
                "Tab 2 audit",
            ),
            (
                "Verify all vendor confirmation PDFs are saved and organized in compliance folder",
                "Practice Mgr",
                "File audit",
            ),
            ("Confirm all employee attestation forms are signed, scanned, and filed", "Practice Mgr", "HR file check"),
            ("Verify AI disclosure is live on website footer (screenshot for evidence)", "Practice Mgr", "Screenshot PDF"),
            ("Verify AI Consent Form is in current patient intake packet", "Front Desk Mgr", "Packet check"),
            ("Verify waiting room signage is displayed", "Office Mgr", "Photo evidence"),
            (
                "Complete the Quarterly Audit Checklist (Appendix C of Policy Pack) for Q1",
                "Practice Mgr",
                "Checklist signed",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "4.2 Registry Verification"));
    nodes.push(checklist_table(
        styles,
        &[
            (
                "Run a final KairoLogic Sentry Scan on your practice website to confirm clean results",
                "Practice Mgr",
                "Final scan report",
            ),
            ("Visit kairologic.com/registry and locate your practice listing", "Practice Mgr", "Listing found"),
            ("Click \"Claim & Verify\" and complete identity verification steps", "Practice Mgr", "Verification submitted"),
            (
                "Confirm practice status updates from \"Pre-Audited\" to \"Verified Sovereign\"",
                "Practice Mgr",
                "Status confirmed",
            ),
        ],
        accent,
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "4.3 Assemble Safe Harbor Evidence Portfolio"));
    nodes.push(body(
        styles,
        "Compile the following documents into a single compliance binder (physical and digital). This portfolio \
         is your definitive Safe Harbor defense:",
    ));
    nodes.push(
        DataTable::new(&[inch(0.4), inch(3.8), inch(1.0)])
            .header(["#", "Document", "Status"])
            .rows(PORTFOLIO.iter().enumerate().map(|(i, document)| {
                [
                    Cell::from((i + 1).to_string()),
                    Cell::Paragraph(Paragraph::new(format!("<b>{document}</b>"), &styles["cell_bold"])),
                    Cell::from("[  ] On file"),
                ]
            }))
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(10.0));
    nodes.push(callout(
        styles,
        "<b>CONGRATULATIONS — YOU'RE SOVEREIGN.</b><br/><br/>Your practice now has a complete, documented Safe \
         Harbor defense under Texas SB 1188 and HB 149. Your signed policy, verified vendor records, deployed \
         disclosures, trained staff, and Registry verification collectively establish \"Reasonable Care\" — the \
         strongest protection available against civil penalties, Cure Notices, and regulatory action. You have \
         transitioned from \"Pre-Audited\" to \"Verified Sovereign.\"",
        &BoxStyle::DARK.sized(10.0, 15.0).padded(16.0, 18.0),
    ));
    nodes.push(Node::PageBreak);
    nodes
}

const QUARTERS: [(&str, &str, &str); 5] = [
    ("Q1 2026", "March 31", "Initial implementation complete. Baseline audit."),
    ("Q2 2026", "June 30", "First 90-day review. New vendor check. Staff refresher."),
    ("Q3 2026", "September 30", "Mid-year audit. Website re-scan. Shadow IT sweep."),
    ("Q4 2026", "December 31", "Annual review. Policy version control. Full re-certification."),
    ("Q1 2027", "March 31", "Anniversary audit. Vendor contract renewals. Annual training."),
];

const SUPPORT: [(&str, &str); 7] = [
    ("Implementation questions", "support@kairologic.net"),
    ("Website disclosure help", "support@kairologic.net (subject: \"HB 149 Website Help\")"),
    ("Vendor won't confirm residency", "support@kairologic.net (subject: \"Vendor Escalation\")"),
    ("Registry status issue", "support@kairologic.net (subject: \"Registry Update\")"),
    ("Request a re-scan", "kairologic.com — Scan section (immediate)"),
    ("Upgrade to Sentry Watch monitoring", "kairologic.com — Services page"),
    ("Legal questions (SB 1188 / HB 149)", "Consult your practice attorney"),
];

fn maintenance(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = roadmap_header(
        styles,
        "ONGOING",
        "Quarterly Maintenance &amp; Monitoring",
        "EVERY 90 DAYS",
        GOLD_DARK,
        inch(1.3),
    );
    nodes.push(body(
        styles,
        "Safe Harbor standing requires <b>ongoing compliance</b>, not a one-time implementation. The most common \
         way practices lose their Verified Sovereign status is through \"Shadow IT drift\" — new marketing \
         plugins, staff installing unapproved tools, or vendors changing their infrastructure without notice. The \
         quarterly maintenance cycle prevents this.",
    ));
    nodes.push(callout(
        styles,
        "<b>THE QUARTERLY SWEEP — Set a recurring calendar reminder for every 90 days.</b><br/><br/>Failure to \
         maintain quarterly audits degrades your Safe Harbor evidence portfolio over time. A signed policy from \
         2026 with no subsequent audit trail tells a regulator in 2027 that you \"set it and forgot it\" — \
         undermining your Reasonable Care defense.",
        &BoxStyle::AMBER,
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(checklist_table(
        styles,
        &[
            ("Run a KairoLogic Sentry Watch scan on your practice website", "Practice Mgr", "Scan report PDF"),
            (
                "Review scan results for any new foreign scripts, plugins, or tracking pixels",
                "Practice Mgr",
                "Clean scan confirmed",
            ),
            (
                "Review Evidence Ledger Tab 1: update any vendors that have changed or been added",
                "Practice Mgr",
                "Ledger current",
            ),
            ("Re-verify any vendor whose contract has been renewed or modified", "Practice Mgr", "Updated certs"),
            (
                "Check for new employees needing Data Sovereignty training + attestation",
                "Practice Mgr / HR",
                "New attestations",
            ),
            ("Verify AI disclosure is still live and accurate on website footer", "Practice Mgr", "Screenshot PDF"),
            ("Review AI system inventory for any new or discontinued tools", "Practice Mgr", "Inventory updated"),
            ("Conduct Shadow IT sweep: check for unapproved tools on staff devices", "IT Admin", "Sweep results"),
            ("Complete the Quarterly Audit Checklist (Appendix C of Policy Pack)", "Practice Mgr", "Signed checklist"),
            ("Log the audit in Evidence Ledger Tab 4 (Quarterly Audit Trail)", "Practice Mgr", "Audit trail row"),
            ("Update the \"Last Updated\" date on your Evidence Ledger", "Practice Mgr", "Ledger timestamp"),
        ],
        GOLD_DARK,
    ));
    nodes.push(Node::spacer(12.0));

    nodes.push(h2(styles, "Recommended Quarterly Schedule"));
    nodes.push(
        DataTable::new(&[inch(0.9), inch(1.0), inch(3.0), inch(0.9)])
            .header(["Quarter", "Target Date", "Focus Areas", "Completed"])
            .rows(QUARTERS.iter().map(|(quarter, date, focus)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{quarter}</b>"), &styles["cell_bold"])),
                    Cell::from(*date),
                    Cell::from(*focus),
                    Cell::Paragraph(Paragraph::new("[  ]", &styles["cell_check"])),
                ]
            }))
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(12.0));

    nodes.push(h2(styles, "Support &amp; Escalation"));
    nodes.push(
        DataTable::new(&[inch(2.4), inch(3.4)])
            .header(["Need", "Contact"])
            .rows(SUPPORT.iter().map(|(need, contact)| [*need, *contact]))
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(16.0));

    nodes.push(Node::paragraph("Roadmap Completion Sign-Off", &styles["h2"]));
    nodes.extend(signature_block(
        styles,
        &[
            "Practice Manager Name:",
            "Signature:",
            "Date Roadmap Completed:",
            "Next Quarterly Audit Date:",
        ],
        60.0,
        8.0,
    ));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kickers(story: &[Node]) -> Vec<&str> {
        story
            .iter()
            .filter_map(|node| match node {
                Node::Paragraph(p) if p.markup.starts_with("PHASE ") || p.markup == "ONGOING" => {
                    Some(p.markup.as_str())
                }
                _ => None,
            })
            .collect()
    }

    fn header_background(table: &Table) -> Option<Color> {
        table.style.rules().iter().find_map(|rule| match rule {
            TableRule::Background(range, color) if *range == CellRange::row(0) => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn four_phases_then_maintenance() {
        let styles = StyleRegistry::standard();
        assert_eq!(
            kickers(&story(&styles)),
            ["PHASE 1", "PHASE 2", "PHASE 3", "PHASE 4", "ONGOING"]
        );
    }

    #[test]
    fn checklists_carry_their_phase_accent() {
        let styles = StyleRegistry::standard();
        let phases = [phase_one(&styles), phase_two(&styles), phase_three(&styles), phase_four(&styles)];
        for (nodes, accent) in phases.iter().zip(PHASE_ACCENTS) {
            let checklists: Vec<_> = nodes
                .iter()
                .filter_map(|node| match node {
                    Node::Table(t) if t.col_widths == CHECKLIST_WIDTHS => Some(t),
                    _ => None,
                })
                .collect();
            assert!(!checklists.is_empty());
            for table in checklists {
                assert_eq!(header_background(table), Some(accent));
            }
        }
    }

    #[test]
    fn portfolio_is_numbered_from_one() {
        let styles = StyleRegistry::standard();
        let nodes = phase_four(&styles);
        let table = nodes
            .iter()
            .find_map(|node| match node {
                Node::Table(t) if t.rows.len() == PORTFOLIO.len() + 1 => Some(t),
                _ => None,
            })
            .expect("portfolio table");
        match (&table.rows[1][0], &table.rows[10][0]) {
            (Cell::Paragraph(first), Cell::Paragraph(last)) => {
                assert_eq!(first.markup, "1");
                assert_eq!(last.markup, "10");
            }
            other => panic!("expected wrapped numbers, got {other:?}"),
        }
    }
}
