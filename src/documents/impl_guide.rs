//! The Safe Harbor™ Customization & Implementation Guide: a six-phase,
//! roughly sixty-minute walkthrough for practice managers.

use crate::documents::write_pdf;
use crate::error::GenerateError;
use crate::output::OutputReport;
use harbor_layout::Document;
use harbor_template_dsl::prelude::*;
use harbor_types::DocumentMetadata;
use std::path::Path;

pub const FILE_NAME: &str = "Safe_Harbor_Implementation_Guide.pdf";
pub const TITLE: &str = "Safe Harbor™ Customization & Implementation Guide";

pub fn chrome() -> PageChrome {
    PageChrome::new(
        "|  SAFE HARBOR™ IMPLEMENTATION GUIDE",
        "SB 1188 + HB 149  |  CONFIDENTIAL",
        "KairoLogic  |  Safe Harbor™ Policy Bundle  |  kairologic.com",
    )
}

pub fn document(styles: &StyleRegistry) -> Document {
    Document::new(
        DocumentMetadata::new(TITLE, "KairoLogic Compliance Division", "SB 1188 + HB 149 Implementation Walkthrough"),
        story(styles),
    )
}

pub fn build_document(path: &Path) -> Result<OutputReport, GenerateError> {
    let styles = StyleRegistry::standard();
    write_pdf(&document(&styles), &chrome(), path)
}

pub fn story(styles: &StyleRegistry) -> Vec<Node> {
    let mut story = cover(styles);
    story.extend(toc(styles, "TABLE OF CONTENTS", &CONTENTS));
    story.extend(prerequisites(styles));
    story.extend(phases(styles));
    story.extend(completion_checklist(styles));
    story.extend(support(styles));
    story
}

fn h2(styles: &StyleRegistry, title: &str) -> Node {
    Node::paragraph(format!("<b>{title}</b>"), &styles["h2"])
}

fn body(styles: &StyleRegistry, text: &str) -> Node {
    Node::paragraph(text, &styles["body"])
}

fn lead_in(styles: &StyleRegistry, text: &str) -> Node {
    Node::paragraph(format!("<b>{text}</b>"), &styles["body_bold"])
}

fn cover(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = vec![
        Node::spacer(inch(1.0)),
        banner("SAFE HARBOR™ POLICY BUNDLE  |  IMPLEMENTATION GUIDE", COVER_WIDTH),
        Node::spacer(inch(0.4)),
    ];
    nodes.extend(cover_title(styles, "Customization &amp;<br/>Implementation Guide"));
    nodes.push(cover_lead(
        styles,
        "Your step-by-step walkthrough for deploying the Safe Harbor™ Policy Bundle, establishing documented \
         compliance with Texas SB 1188 and HB 149, and securing your practice's standing on the Texas \
         Sovereignty Registry.",
        24.0,
    ));
    nodes.push(cover_highlight(
        styles,
        "<b>TOTAL IMPLEMENTATION TIME: APPROXIMATELY 60 MINUTES</b><br/>This guide is designed for \
         non-technical Practice Managers and Office Administrators. No coding, IT expertise, or legal \
         background required.",
    ));
    nodes.push(Node::spacer(inch(0.3)));
    nodes.push(meta_table(
        &[
            ("Bundle Version:", "1.0 (February 2026)"),
            ("Governing Statutes:", "Texas SB 1188 + HB 149"),
            ("Audience:", "Practice Managers, Office Administrators, Compliance Officers"),
            ("Prerequisite:", "KairoLogic Safe Harbor™ Policy Bundle (purchased)"),
            ("Support:", "support@kairologic.net  |  kairologic.com/support"),
        ],
        [inch(1.6), inch(4.0)],
        4.0,
    ));
    nodes.push(Node::spacer(inch(0.4)));
    nodes.push(disclaimer(
        styles,
        "<b>IMPORTANT:</b> This implementation guide accompanies the Safe Harbor™ Policy Bundle and is intended \
         to assist practices in deploying compliance documentation. It does not constitute legal advice. \
         Practices should review all customized documents with qualified legal counsel before final execution. \
         KairoLogic provides compliance tooling and documentation; regulatory interpretations should be \
         confirmed with an attorney licensed in the State of Texas.",
    ));
    nodes.push(Node::PageBreak);
    nodes
}

const CONTENTS: [(&str, &str); 11] = [
    ("", "Before You Begin: Bundle Contents Checklist"),
    ("Phase 1:", "Customizing the SB 1188 Data Sovereignty Policy Pack (15 min)"),
    ("Phase 2:", "Deploying the AI Transparency Disclosure Kit — HB 149 (10 min)"),
    ("Phase 3:", "Building Your Forensic Evidence Ledger (15 min)"),
    ("Phase 4:", "Employee Acknowledgment &amp; Training (10 min)"),
    ("Phase 5:", "Finalizing Your Registry Standing (5 min)"),
    ("Phase 6:", "Ongoing Compliance &amp; Quarterly Maintenance (5 min)"),
    ("", "Vendor Email Template Library"),
    ("", "Troubleshooting &amp; FAQ"),
    ("", "Implementation Completion Checklist"),
    ("", "Support &amp; Escalation Contacts"),
];

fn prerequisites(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "BEFORE YOU BEGIN", "Bundle Contents Checklist");
    nodes.push(body(
        styles,
        "Verify that your Safe Harbor™ Policy Bundle download contains all of the following documents. If any \
         item is missing, contact support@kairologic.net before proceeding.",
    ));
    nodes.push(
        DataTable::new(&[inch(0.35), inch(1.9), inch(2.2), inch(1.7)])
            .header(["#", "Document", "Filename", "Purpose"])
            .rows([
                ["1", "SB 1188 Data Sovereignty Policy", "SB1188-Data-Sovereignty-Policy.pdf", "Core compliance policy for data residency"],
                ["2", "AI Transparency Disclosure Kit", "AI-Disclosure-Kit.txt", "Website footer text + patient consent form (HB 149)"],
                ["3", "Vendor Evidence Ledger", "Evidence-Ledger.xlsx", "Vendor inventory + data residency tracking"],
                ["4", "Employee Acknowledgment Form", "Employee-Acknowledgment.pdf", "Staff sign-off on data sovereignty policy"],
                ["5", "Vendor Certification Template", "Vendor-Data-Sovereignty-Cert.pdf", "Send to vendors for residency confirmation"],
                ["6", "Quarterly Audit Checklist", "Quarterly-Audit-Checklist.pdf", "Recurring compliance verification tool"],
                ["7", "Sentry Scan Report (PDF)", "Your-Practice-Sentry-Report.pdf", "Baseline forensic scan of your digital footprint"],
                ["8", "This Implementation Guide", "Safe-Harbor-Implementation-Guide.pdf", "Step-by-step deployment walkthrough"],
            ])
            .padding(5.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(10.0));
    nodes.push(lead_in(styles, "You will also need:"));
    nodes.extend(bullets(
        styles,
        &[
            "Your practice's legal business name (as registered with the Texas Secretary of State)",
            "The name and title of your Medical Director or Practice Owner (signatory)",
            "Access to your practice website (or contact info for your web developer)",
            "A list of your current digital vendors (EMR, website host, email provider, etc.)",
            "A printer and pen (for \"wet ink\" signatures on the executed policy)",
        ],
    ));
    nodes.push(Node::PageBreak);
    nodes
}

fn phases(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_one(styles);
    nodes.extend(phase_two(styles));
    nodes.extend(phase_three(styles));
    nodes.extend(phase_four(styles));
    nodes.extend(phase_five(styles));
    nodes.extend(phase_six(styles));
    nodes.push(Node::PageBreak);
    nodes
}

fn phase_one(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(
        styles,
        "PHASE 1",
        "Customizing the SB 1188 Data Sovereignty Policy Pack",
        "15 minutes",
    );
    nodes.push(body(
        styles,
        "The Data Sovereignty Policy Pack is the cornerstone of your Safe Harbor™ defense. Under Texas SB 1188, \
         demonstrating \"Reasonable Care\" requires a <b>written, executed policy</b> that is specific to your \
         practice. A generic template is insufficient — the policy must be customized to reflect your entity's \
         legal identity, organizational structure, and operational reality.",
    ));

    nodes.push(h2(styles, "Step 1.1: Identify Your Legal Entity"));
    nodes.push(body(
        styles,
        "Open the SB 1188 Data Sovereignty Policy document. Throughout the document, you will see placeholder \
         text that must be replaced with your practice-specific information.",
    ));
    nodes.push(
        DataTable::new(&[inch(1.5), inch(2.0), inch(2.5)])
            .header(["Placeholder", "Replace With", "Example"])
            .rows([
                ["[Practice Name]", "Your legal business name", "Austin Family Care, PLLC"],
                ["[Practice Address]", "Primary business address", "4521 Medical Pkwy, Austin, TX 78756"],
                ["[Compliance Officer]", "Name of designated officer", "Maria Santos, Office Manager"],
                ["[Medical Director]", "Licensed supervising physician", "Dr. James Chen, MD"],
                ["[Effective Date]", "Date of policy execution", "February 8, 2026"],
            ])
            .padding(5.0, 6.0)
            .into(),
    );
    nodes.push(Node::spacer(8.0));
    nodes.push(tip_box(
        styles,
        "PRO TIP: Use Your Legal Entity Name, Not Your DBA",
        "In a state audit, regulators look for the entity registered with the Texas Secretary of State. If your \
         marketing name is \"Bright Smile Dental\" but your legal entity is \"Bright Smile Dental Arts, PLLC,\" \
         use the PLLC name throughout the policy. You may add the DBA in parentheses on the cover page.",
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 1.2: Appoint a Data Sovereignty Officer"));
    nodes.push(body(
        styles,
        "SB 1188 Safe Harbor provisions are strengthened when a practice designates a specific individual as the \
         point of contact for data residency compliance. This person does not need a legal or technical \
         background — they serve as the organizational owner of the policy.",
    ));
    nodes.push(body(styles, "Recommended designees (in order of preference):"));
    nodes.extend(bullets(
        styles,
        &[
            "Office Manager or Practice Administrator (most common — handles day-to-day vendor relationships)",
            "HIPAA Privacy Officer (if already designated, natural extension of existing role)",
            "Medical Director or Practice Owner (appropriate for small practices with fewer than 10 staff)",
            "External compliance consultant (if outsourced, ensure they are named in the policy with contact info)",
        ],
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 1.3: The \"Wet Ink\" Execution Requirement"));
    nodes.push(body(
        styles,
        "Once customization is complete, print the finalized policy and obtain physical signatures from the \
         Practice Owner or Medical Director on the execution page (Section 12).",
    ));
    nodes.push(warning_box(
        styles,
        "A digital-only policy file is <b>insufficient</b> for Safe Harbor standing. Texas regulators and \
         plaintiff attorneys specifically look for signed, dated, physical policy documents during audits and \
         litigation discovery. Print the policy, sign it with pen, and store it in your HIPAA binder alongside \
         your Notice of Privacy Practices and BAAs.",
    ));
    nodes.push(Node::spacer(6.0));
    nodes.push(lead_in(styles, "After signing, you should have:"));
    nodes.extend(bullets(
        styles,
        &[
            "One signed original stored in your HIPAA compliance binder",
            "One digital scan (PDF) stored in your secure practice drive",
            "One copy provided to your designated Data Sovereignty Officer",
        ],
    ));
    nodes
}

fn phase_two(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(
        styles,
        "PHASE 2",
        "Deploying the AI Transparency Disclosure Kit (HB 149)",
        "10 minutes",
    );
    nodes.push(body(
        styles,
        "Texas House Bill 149 requires healthcare practices to provide \"clear and conspicuous\" notice to \
         patients when artificial intelligence, machine learning, or automated decision-making tools are used in \
         any aspect of patient care, communication, or data processing. Non-compliance exposes your practice to \
         regulatory action and undermines your SB 1188 Safe Harbor standing.",
    ));

    nodes.push(h2(styles, "Step 2.1: Website Footer Disclosure"));
    nodes.push(body(
        styles,
        "Add the following disclosure text to your website footer. It should appear on every page of your \
         practice website, immediately above or below your existing HIPAA/privacy notice links.",
    ));
    nodes.push(callout(
        styles,
        "<b>RECOMMENDED FOOTER TEXT:</b><br/><br/><i>\"This practice utilizes AI-assisted tools for \
         administrative and clinical support functions. All artificial intelligence systems employed by this \
         practice process data exclusively on servers located within the continental United States, in \
         compliance with Texas SB 1188 (Data Sovereignty) and HB 149 (AI Transparency). Patients have the right \
         to request human review of any AI-assisted recommendation. For questions about our AI practices, \
         contact our office directly.\"</i>",
        &BoxStyle::INFO.sized(9.0, 13.0).aligned(TextAlign::Left),
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(tip_box(
        styles,
        "HOW TO ADD THIS TO YOUR WEBSITE",
        "If you manage your own website (WordPress, Squarespace, Wix), add this text to your footer widget or \
         site-wide footer HTML. If your website is managed by a developer or agency, forward the \
         AI-Disclosure-Kit.txt file and request the update. Turnaround should be under 24 hours. Keep the \
         confirmation email from your developer as evidence of deployment.",
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 2.2: Patient Intake AI Consent Addendum"));
    nodes.push(body(
        styles,
        "If your practice uses AI for any patient-facing function — including chatbots, intake form auto-fill, \
         appointment scheduling bots, clinical transcription, or diagnostic decision support — you must add the \
         AI Consent Form from your bundle to your standard new-patient packet.",
    ));
    nodes.push(lead_in(styles, "Implementation steps:"));
    nodes.extend(bullets(
        styles,
        &[
            "Print the AI Consent Form from AI-Disclosure-Kit.txt (Page 2)",
            "Add it to your new-patient packet, immediately after the HIPAA Notice of Privacy Practices",
            "Train front desk staff to collect signatures on this form alongside existing intake paperwork",
            "For existing patients: distribute the form at next scheduled visit or include in a mass mailing",
            "Store signed forms in the patient chart (physical or scanned into your EMR)",
        ],
    ));
    nodes.push(Node::spacer(6.0));

    nodes.push(h2(styles, "Step 2.3: AI System Inventory"));
    nodes.push(body(
        styles,
        "Document every AI or automated tool currently in use at your practice. This inventory is required by \
         the Data Sovereignty Policy (Section 7.2) and serves as evidence during audits.",
    ));
    const PENDING: &str = "[ ] Yes  [ ] No  [ ] Pending";
    nodes.push(
        DataTable::new(&[inch(1.5), inch(1.6), inch(1.5), inch(1.4)])
            .header(["AI Tool / Service", "Function", "Vendor", "Data Residency Verified?"])
            .rows([
                ["Example: Freed AI", "Clinical note transcription", "Freed Health, Inc.", PENDING],
                ["Example: Weave", "Patient messaging / reminders", "Weave Communications", PENDING],
                ["", "", "", PENDING],
                ["", "", "", PENDING],
                ["", "", "", PENDING],
            ])
            .padding(5.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes
}

fn phase_three(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(styles, "PHASE 3", "Building Your Forensic Evidence Ledger", "15 minutes");
    nodes.push(body(
        styles,
        "The Forensic Evidence Ledger is your most powerful Safe Harbor artifact. In the event of a state inquiry \
         or Cure Notice, this document proves that you conducted due diligence on every vendor that touches \
         patient data. Regulators have stated that documented vendor verification is the <b>single strongest \
         indicator of Reasonable Care</b>.",
    ));

    nodes.push(h2(styles, "Step 3.1: Inventory Your Digital Vendors"));
    nodes.push(body(
        styles,
        "Open the Evidence-Ledger.xlsx spreadsheet. For each vendor in the following categories, create a row \
         entry:",
    ));
    let critical = &styles["cell_red"];
    let other_tier = styles.derive("cell", |s| s.with_font(StandardFont::HelveticaBold));
    let rows = VENDOR_CATEGORIES.iter().map(|(category, vendors, priority)| {
        let tier = if *priority == "CRITICAL" { critical } else { &other_tier };
        vec![
            Cell::from(*category),
            Cell::from(*vendors),
            Paragraph::new(*priority, tier).into(),
        ]
    });
    nodes.push(
        DataTable::new(&[inch(1.8), inch(2.6), inch(1.1)])
            .header(["Category", "Common Vendors", "Priority"])
            .rows(rows)
            .padding(5.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 3.2: Send Verification Emails"));
    nodes.push(body(
        styles,
        "For each vendor marked CRITICAL or HIGH priority, send the following verification request. A \
         pre-written email template is included later in this guide.",
    ));
    nodes.push(callout(
        styles,
        "<b>VENDOR VERIFICATION EMAIL (Template):</b><br/><br/>Subject: Data Residency Confirmation Request — \
         Texas SB 1188 Compliance<br/><br/>Dear [Vendor Name] Compliance Team,<br/><br/>Our practice is \
         implementing compliance measures under Texas Senate Bill 1188 (the Texas Data Sovereignty Act), which \
         requires healthcare providers to verify that all patient data is stored and processed exclusively \
         within the continental United States.<br/><br/>Please confirm the following:<br/>1. The physical \
         location of servers that store or process our patient data<br/>2. Whether any sub-processors route \
         data outside the United States<br/>3. The cloud regions/availability zones in use for our \
         account<br/><br/>If you have a Data Processing Addendum or Data Residency Certificate available, \
         please provide a copy. We require this confirmation within 14 business days.<br/><br/>Thank you for \
         your cooperation.<br/>[Your Name], [Your Title]<br/>[Practice Name]",
        &BoxStyle::QUOTE
            .sized(8.5, 12.0)
            .aligned(TextAlign::Left)
            .border(1.0, GRAY_400),
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 3.3: Document the Evidence"));
    nodes.extend(bullets(
        styles,
        &[
            "When a vendor replies confirming U.S.-only data residency, save the email as a PDF",
            "Name the file: [VendorName]-DataResidency-Confirmed-[Date].pdf",
            "In the Evidence Ledger spreadsheet, enter the Date Verified, the Vendor Representative name, and set \
             Status to \"Confirmed\"",
            "If a vendor provides a formal Data Processing Addendum (DPA) or Certificate, attach it alongside the \
             email confirmation",
            "Store all evidence PDFs in a dedicated folder: /Compliance/SB1188/Vendor-Confirmations/",
        ],
    ));
    nodes.push(Node::spacer(6.0));
    nodes.push(warning_box(
        styles,
        "If a vendor <b>refuses</b> to confirm U.S.-only data residency, or cannot provide the requested \
         information within 14 business days, flag the vendor as \"Unverified\" in your Evidence Ledger and \
         begin evaluating domestic alternatives immediately. An unverified Critical-tier vendor is your single \
         largest compliance exposure under SB 1188.",
    ));
    nodes
}

const VENDOR_CATEGORIES: [(&str, &str, &str); 10] = [
    ("Electronic Medical Records (EMR)", "Epic, Athenahealth, DrChrono, Kareo, NextGen", "CRITICAL"),
    ("Website Hosting", "GoDaddy, Bluehost, WP Engine, Squarespace, Wix", "CRITICAL"),
    ("Email Service", "Google Workspace, Microsoft 365, Zoho, ProtonMail", "HIGH"),
    ("Appointment Scheduling", "Zocdoc, PatientPop, SimplePractice, Acuity", "HIGH"),
    ("Telehealth Platform", "Doxy.me, Zoom for Healthcare, Amwell", "CRITICAL"),
    ("Billing / RCM", "Waystar, Availity, Tebra, AdvancedMD", "HIGH"),
    ("AI / Transcription", "Freed, DeepScribe, Nuance DAX, Amazon Transcribe", "CRITICAL"),
    ("Marketing / CRM", "Mailchimp, HubSpot, Constant Contact, Birdeye", "MODERATE"),
    ("Phone / VoIP", "Weave, RingCentral, Vonage, 8x8", "MODERATE"),
    ("Cloud Backup", "Carbonite, Datto, Veeam, Backblaze", "HIGH"),
];

fn phase_four(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(styles, "PHASE 4", "Employee Acknowledgment &amp; Training", "10 minutes");
    nodes.push(body(
        styles,
        "Your Data Sovereignty Policy is only enforceable if your staff knows it exists and has formally \
         acknowledged it. SB 1188 Safe Harbor provisions require documented evidence that all personnel with \
         access to patient data have been trained on and have accepted the policy.",
    ));

    nodes.push(h2(styles, "Step 4.1: Distribute Acknowledgment Forms"));
    nodes.extend(bullets(
        styles,
        &[
            "Print one Employee Data Sovereignty Acknowledgment form (Appendix B of the Policy Pack) for each \
             current staff member",
            "Schedule a brief 10-minute all-hands meeting (or distribute individually for small practices)",
            "Walk through the key points: what data sovereignty means, what tools are prohibited, and how to \
             report concerns",
            "Have each employee sign and date their acknowledgment form",
            "Scan signed forms and store both physical and digital copies",
        ],
    ));
    nodes.push(Node::spacer(6.0));

    nodes.push(h2(styles, "Step 4.2: Key Training Points (5-Minute Brief)"));
    let message = styles.derive("cell", |s| s.with_size(8.5, 12.0));
    let rows = TRAINING_POINTS
        .iter()
        .map(|(topic, text)| vec![Cell::from(*topic), Paragraph::new(*text, &message).into()]);
    nodes.push(
        DataTable::new(&[inch(1.5), inch(4.5)])
            .header(["Topic", "Key Message"])
            .rows(rows)
            .body_font_size(8.5)
            .padding(6.0, 8.0)
            .rule(TableRule::Font(CellRange::new((0, 1), (0, -1)), StandardFont::HelveticaBold, None))
            .into(),
    );
    nodes
}

const TRAINING_POINTS: [(&str, &str); 5] = [
    (
        "What is SB 1188?",
        "Texas law requiring patient data to stay in the U.S. Violations = $250K per incident.",
    ),
    (
        "What is prohibited?",
        "No foreign AI tools, no personal email for patient data, no unapproved apps.",
    ),
    (
        "What is Shadow IT?",
        "Any software you use for work that IT hasn't approved. This includes browser extensions, free AI \
         tools, and personal cloud storage.",
    ),
    (
        "How to report a concern",
        "If you suspect data is going offshore, tell [Compliance Officer] within 24 hours. No retaliation.",
    ),
    (
        "What happens if I violate?",
        "First offense = warning + retraining. Repeated = disciplinary action up to termination.",
    ),
];

fn phase_five(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(styles, "PHASE 5", "Finalizing Your Registry Standing", "5 minutes");
    nodes.push(body(
        styles,
        "Once Phases 1 through 4 are complete, your practice's digital compliance footprint will have materially \
         changed. The final step is to update your standing on the Texas Sovereignty Registry.",
    ));

    nodes.push(h2(styles, "Step 5.1: Trigger a Sentry Rescan"));
    nodes.push(body(
        styles,
        "After deploying the AI Transparency disclosure on your website (Phase 2), the KairoLogic Sentry engine \
         will automatically detect the update during its next scheduled scan cycle (within 48 hours). To \
         trigger an immediate rescan:",
    ));
    nodes.extend(bullets(
        styles,
        &[
            "Visit kairologic.com and navigate to the scan section",
            "Enter your practice URL to initiate a fresh Sentry Scan",
            "Review the updated scan results — your AI Transparency score should now reflect the disclosure",
            "If your overall score has improved to Sovereign (80+), proceed to finalize verification",
        ],
    ));
    nodes.push(Node::spacer(6.0));

    nodes.push(h2(styles, "Step 5.2: Finalize Verification on the Registry"));
    nodes.push(body(
        styles,
        "Log into the Texas Sovereignty Registry at kairologic.com/registry and locate your practice listing. \
         Click \"Claim &amp; Verify\" to submit your verified identity and link your compliance documentation. \
         Upon verification, your practice status will update from \"Pre-Audited\" to <b>\"Verified \
         Sovereign\"</b> and the Sovereignty badge will appear next to your listing.",
    ));
    nodes.push(tip_box(
        styles,
        "WHAT \"VERIFIED SOVEREIGN\" MEANS FOR YOUR PRACTICE",
        "Verified Sovereign status is visible to the public, including patients, referral partners, and \
         competitor practices browsing the registry. It signals that your practice has taken active, documented \
         steps to comply with Texas data sovereignty law — a meaningful differentiator in an increasingly \
         compliance-conscious market.",
    ));
    nodes
}

fn phase_six(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = phase_header(
        styles,
        "PHASE 6",
        "Ongoing Compliance &amp; Quarterly Maintenance",
        "5 minutes per quarter",
    );
    nodes.push(body(
        styles,
        "Safe Harbor standing is not a one-time achievement. Texas SB 1188 requires <b>ongoing, documented \
         compliance</b>. The following quarterly cadence will keep your practice protected:",
    ));
    nodes.push(
        DataTable::new(&[inch(1.0), inch(2.5), inch(2.5)])
            .header(["Quarter", "Action Items", "Deliverables"])
            .rows([
                [
                    "Q1 (Jan–Mar)",
                    "Annual policy review + update. New employee acknowledgments. Vendor re-certification for \
                     Critical-tier.",
                    "Updated policy (if amended). Signed acknowledgments. Vendor certs on file.",
                ],
                [
                    "Q2 (Apr–Jun)",
                    "Sentry Watch scan. AI system inventory update. Shadow IT sweep.",
                    "Scan report PDF. Updated AI inventory. Sweep results documented.",
                ],
                [
                    "Q3 (Jul–Sep)",
                    "Mid-year vendor audit. Staff refresher training. Website disclosure review.",
                    "Quarterly Audit Checklist (Appendix C). Training attendance log.",
                ],
                [
                    "Q4 (Oct–Dec)",
                    "Annual forensic audit. Evidence Ledger reconciliation. Policy version control.",
                    "Annual audit report. Complete Evidence Ledger. Policy amendment log.",
                ],
            ])
            .padding(6.0, 8.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes
}

/// Phase, step number and item of the implementation sign-off checklist.
pub const COMPLETION_ITEMS: [(&str, &str, &str); 16] = [
    ("1", "1.1", "Legal entity name inserted throughout policy document"),
    ("1", "1.2", "Data Sovereignty Officer designated by name and title"),
    ("1", "1.3", "Policy printed and signed (\"wet ink\") by authorized signatory"),
    ("1", "1.4", "Signed policy filed in HIPAA compliance binder"),
    ("1", "1.5", "Digital scan (PDF) of signed policy stored securely"),
    ("2", "2.1", "AI Transparency disclosure deployed on website footer"),
    ("2", "2.2", "AI Consent Form added to new-patient intake packet"),
    ("2", "2.3", "AI System Inventory completed and filed"),
    ("3", "3.1", "All digital vendors inventoried in Evidence Ledger"),
    ("3", "3.2", "Verification emails sent to all Critical and High-tier vendors"),
    ("3", "3.3", "Vendor confirmation replies saved as PDFs and logged"),
    ("4", "4.1", "Employee Acknowledgment forms signed by all staff"),
    ("4", "4.2", "Staff training brief completed (key points covered)"),
    ("5", "5.1", "Sentry Scan triggered post-disclosure deployment"),
    ("5", "5.2", "Registry listing claimed and verification initiated"),
    ("6", "6.1", "Quarterly review calendar set (next review date noted)"),
];

fn completion_checklist(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "IMPLEMENTATION COMPLETION", "Final Verification Checklist");
    nodes.push(body(
        styles,
        "Before considering your Safe Harbor™ implementation complete, verify that every item below has been \
         addressed. This checklist serves as your implementation sign-off document.",
    ));
    nodes.push(Node::spacer(6.0));
    let done = CellRange::new((3, 1), (3, -1));
    nodes.push(
        DataTable::new(&[inch(0.6), inch(0.45), inch(3.7), inch(0.5)])
            .header(["Phase", "#", "Item", "Done"])
            .rows(COMPLETION_ITEMS.iter().map(|(phase, step, item)| [*phase, *step, *item, "[ ]"]))
            .body_font_size(8.5)
            .padding(5.0, 6.0)
            .valign(VerticalAlign::Middle)
            .rule(TableRule::Align(CellRange::column(3), TextAlign::Center))
            .rule(TableRule::FontSize(done, 12.0))
            .into(),
    );
    nodes.push(Node::spacer(20.0));
    nodes.extend(signature_line(styles, "Implementation Completed By:", None, 65.0, 10.0));
    nodes.extend(signature_line(styles, "Date:", None, 40.0, 10.0));
    nodes.extend(signature_line(styles, "Next Quarterly Review Date:", None, 40.0, 0.0));
    nodes.push(Node::PageBreak);
    nodes
}

fn support(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "SUPPORT &amp; ESCALATION", "Getting Help When You Need It");
    nodes.push(
        DataTable::new(&[inch(1.8), inch(2.6), inch(1.6)])
            .header(["Issue", "Contact", "Expected Response"])
            .rows([
                ["General implementation questions", "support@kairologic.net", "Within 24 business hours"],
                [
                    "Website disclosure deployment help",
                    "support@kairologic.net (subject: \"HB 149 Website Help\")",
                    "Within 24 business hours",
                ],
                [
                    "Vendor refuses to confirm residency",
                    "support@kairologic.net (subject: \"Vendor Escalation\")",
                    "Within 48 business hours",
                ],
                [
                    "Registry status not updating",
                    "support@kairologic.net (subject: \"Registry Update\")",
                    "Within 24 business hours",
                ],
                [
                    "Legal questions about SB 1188 / HB 149",
                    "Consult your practice attorney. KairoLogic cannot provide legal advice.",
                    "N/A",
                ],
                ["Request a re-scan or updated report", "Visit kairologic.com — Scan section", "Immediate (automated)"],
                ["Upgrade to Sentry Watch monitoring", "kairologic.com — Services page", "Activation within 24 hours"],
            ])
            .padding(5.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(20.0));
    nodes.push(callout(
        styles,
        "<b>YOU'RE PROTECTED.</b><br/><br/>By completing this implementation guide, your practice now has \
         documented evidence of Reasonable Care under Texas SB 1188 — a signed data sovereignty policy, vendor \
         verification records, employee acknowledgments, AI transparency disclosures, and a baseline forensic \
         scan. This portfolio of evidence is your strongest defense against civil penalties and the foundation \
         of your Safe Harbor standing. Welcome to the Texas Sovereignty Registry.",
        &BoxStyle::DARK.sized(10.0, 15.0).padded(16.0, 16.0),
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
                Node::Paragraph(p) if p.markup.starts_with("PHASE ") => Some(p.markup.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn six_phases_in_order() {
        let styles = StyleRegistry::standard();
        let story = story(&styles);
        assert_eq!(
            kickers(&story),
            ["PHASE 1", "PHASE 2", "PHASE 3", "PHASE 4", "PHASE 5", "PHASE 6"]
        );
    }

    #[test]
    fn completion_checklist_covers_every_phase() {
        for phase in 1..=6 {
            let phase = phase.to_string();
            assert!(COMPLETION_ITEMS.iter().any(|(p, _, _)| *p == phase), "phase {phase}");
        }
        let styles = StyleRegistry::standard();
        let story = story(&styles);
        let table = story
            .iter()
            .find_map(|node| match node {
                Node::Table(t) if t.rows.first().is_some_and(|r| r.get(3) == Some(&Cell::from("Done"))) => Some(t),
                _ => None,
            })
            .expect("completion checklist");
        assert_eq!(table.rows.len(), COMPLETION_ITEMS.len() + 1);
    }

    #[test]
    fn critical_vendors_are_flagged_red() {
        let styles = StyleRegistry::standard();
        let story = phase_three(&styles);
        let table = story
            .iter()
            .find_map(|node| match node {
                Node::Table(t) if t.col_widths.len() == 3 => Some(t),
                _ => None,
            })
            .expect("vendor categories");
        match &table.rows[1][2] {
            Cell::Paragraph(p) => {
                assert_eq!(p.markup, "CRITICAL");
                assert_eq!(p.style.color, RED_700);
            }
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }
}
