//! The AI Disclosure Kit: eight copy-ready assets for HB 149 transparency
//! and SB 1188 vendor verification, plus a deployment checklist.

use crate::documents::write_pdf;
use crate::error::GenerateError;
use crate::output::OutputReport;
use harbor_layout::Document;
use harbor_template_dsl::prelude::*;
use harbor_types::DocumentMetadata;
use std::path::Path;

pub const FILE_NAME: &str = "AI_Disclosure_Kit.pdf";
pub const TITLE: &str = "AI Disclosure Kit: Statutory Content & Assets";

pub fn chrome() -> PageChrome {
    PageChrome::new(
        "|  AI DISCLOSURE KIT",
        "HB 149 + SB 1188  |  STATUTORY CONTENT & ASSETS",
        "KairoLogic  |  AI Transparency Disclosure Kit  |  kairologic.com",
    )
}

pub fn document(styles: &StyleRegistry) -> Document {
    Document::new(
        DocumentMetadata::new(
            TITLE,
            "KairoLogic Compliance Division",
            "HB 149 + SB 1188 AI Transparency Compliance Kit",
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
    story.extend(footer_notice(styles));
    story.extend(intake_consent(styles));
    story.extend(privacy_policy(styles));
    story.extend(phone_scripts(styles));
    story.extend(staff_guidelines(styles));
    story.extend(review_response(styles));
    story.extend(signage(styles));
    story.extend(vendor_email(styles));
    story.extend(deployment_checklist(styles));
    story
}

/// Asset, where it is deployed, and the statute it answers.
pub const ASSETS: [(&str, &str, &str); 8] = [
    ("1. Website Footer Notice", "Website footer / navigation bar", "HB 149"),
    ("2. Patient Intake AI Consent Form", "New patient paperwork / digital intake", "HB 149 + SB 1188"),
    ("3. Privacy Policy AI Section", "Website privacy policy page", "HB 149 + SB 1188"),
    ("4. Phone Inquiry Script", "Front desk / reception", "HB 149"),
    ("5. Staff AI Usage Guidelines", "Internal handbook / breakroom", "SB 1188"),
    ("6. Social Media / Review Response Template", "Online reputation management", "HB 149"),
    ("7. Waiting Room Signage", "Physical display / patient-facing areas", "HB 149"),
    ("8. Vendor AI Verification Request", "Email to AI tool vendors", "SB 1188"),
];

fn body(styles: &StyleRegistry, text: &str) -> Node {
    Node::paragraph(text, &styles["body"])
}

/// A bold "Label:" line such as the deployment target or priority.
fn note(styles: &StyleRegistry, label: &str, text: &str) -> Node {
    Node::paragraph(format!("<b>{label}:</b> {text}"), &styles["body_bold"])
}

fn tip(styles: &StyleRegistry, text: &str) -> Node {
    callout(styles, text, &BoxStyle::TIP)
}

/// Full-width form text in a bordered box, for content meant to be reused
/// as a whole document.
fn form_box(styles: &StyleRegistry, text: &str, style: BoxStyle) -> Node {
    callout(styles, text, &style.padded(14.0, 16.0))
}

fn cover(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = vec![
        Node::spacer(inch(1.0)),
        banner("AI DISCLOSURE KIT  |  STATUTORY CONTENT & ASSETS", COVER_WIDTH),
        Node::spacer(inch(0.4)),
    ];
    nodes.extend(cover_title(styles, "AI Transparency<br/>Disclosure Kit"));
    nodes.push(cover_lead(
        styles,
        "Pre-written, copy-ready statutory content for website deployment, patient intake forms, privacy policy \
         updates, staff scripts, and signage — designed to establish documented compliance with Texas House Bill \
         149 (AI Transparency) and Senate Bill 1188 (Data Sovereignty).",
        24.0,
    ));
    nodes.push(
        DataTable::new(&[inch(2.2), inch(2.2), inch(1.2)])
            .header(["Asset", "Deployment Location", "Statute"])
            .rows(ASSETS.iter().map(|(asset, location, statute)| [*asset, *location, *statute]))
            .body_font_size(8.5)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(inch(0.3)));
    nodes.push(meta_table(
        &[
            ("Governing Statutes:", "Texas HB 149 (AI Transparency) + SB 1188 (Data Sovereignty)"),
            ("Version:", "1.0 — February 2026"),
            ("Classification:", "Client Deliverable — Safe Harbor™ Bundle"),
            ("Customization:", "Replace all [Practice Name] placeholders with your legal entity name"),
        ],
        [inch(1.6), inch(4.0)],
        3.0,
    ));
    nodes.push(Node::spacer(inch(0.3)));
    nodes.push(disclaimer(
        styles,
        "<b>CUSTOMIZATION INSTRUCTIONS:</b> All content in this kit is pre-written and copy-ready. Replace every \
         instance of <b>[Practice Name]</b> with your legal business entity name before deployment. Content has \
         been drafted for general healthcare practice use; practices with specialized AI applications \
         (diagnostic imaging AI, clinical decision support, robotic surgery assistance) should consult legal \
         counsel to determine if additional disclosure language is required. This kit does not constitute legal \
         advice.",
    ));
    nodes.push(Node::PageBreak);
    nodes
}

fn footer_notice(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 1", "Website Footer / \"Clear &amp; Conspicuous\" Notice");
    nodes.push(body(
        styles,
        "Texas HB 149 requires healthcare entities that use AI technologies to provide \"clear and conspicuous\" \
         notice to patients and the public. The most effective and legally defensible placement is in your \
         website footer, where it appears on every page of your site. Alternatively, create a dedicated \"AI \
         Transparency\" link in your navigation bar that leads to this disclosure.",
    ));
    nodes.push(note(styles, "Deployment", "Website footer (all pages) or dedicated AI Transparency page"));
    nodes.push(note(styles, "Priority", "CRITICAL — Deploy within 24 hours of bundle purchase"));
    nodes.push(Node::spacer(6.0));
    nodes.push(copy_ready_box(
        styles,
        "COPY-READY CONTENT — WEBSITE FOOTER NOTICE",
        "<b>AI Transparency Notice:</b> [Practice Name] utilizes artificial intelligence (AI) technologies to \
         assist in administrative, scheduling, and clinical data processing functions. In compliance with Texas \
         House Bill 149, we affirm that these tools are deployed to enhance patient care and operational \
         efficiency. All AI-driven processing utilized by this entity has been verified for US-Sovereign data \
         residency in accordance with Texas Senate Bill 1188 (the Texas Data Sovereignty Act). No patient data is \
         processed or stored outside the continental United States. Patients may request human review of any \
         AI-assisted recommendation or opt out of specific AI-driven processes by contacting our office directly.",
        BLUE_50,
        BLUE_600,
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(tip(
        styles,
        "<b>IMPLEMENTATION TIP:</b> If your website is managed by a developer or agency, forward this page to \
         them with instructions to add the text to the global footer template. Request a screenshot of the \
         deployed disclosure as evidence. If you use WordPress, add a \"Custom HTML\" widget to your footer area. \
         For Squarespace or Wix, use the site-wide footer injection setting. The KairoLogic Sentry engine will \
         automatically detect this disclosure during its next scan cycle.",
    ));
    nodes.push(Node::spacer(6.0));
    nodes.push(Node::paragraph(
        "<b>Compact Version</b> (for space-constrained footers):",
        &styles["h3"],
    ));
    nodes.push(copy_ready_box(
        styles,
        "COMPACT FOOTER NOTICE (ONE-LINE)",
        "<b>AI Notice:</b> This practice uses US-Sovereign AI for administrative and clinical support. All data \
         processing is strictly domestic per TX SB 1188 &amp; HB 149. <u>Learn more</u> | <u>Opt out</u>",
        GRAY_50,
        GRAY_400,
    ));
    nodes.push(Node::spacer(10.0));
    nodes
}

const CONSENT_FORM: &str = "<b>[Practice Name]</b><br/>\
    <b>ARTIFICIAL INTELLIGENCE DATA PROCESSING CONSENT</b><br/>\
    <b>Texas House Bill 149 &amp; Senate Bill 1188 Compliance</b><br/><br/>\
    <b>Patient Name:</b> ________________________________________ <b>Date:</b> ________________<br/><br/>\
    I acknowledge that [Practice Name] may utilize artificial intelligence (AI) and automated systems for the \
    following purposes:<br/><br/>\
    \u{2022}  Transcription of clinical notes and medical records<br/>\
    \u{2022}  Automated appointment scheduling, confirmations, and reminders<br/>\
    \u{2022}  Preliminary diagnostic support and clinical data analysis<br/>\
    \u{2022}  Patient communication, including automated responses and follow-ups<br/>\
    \u{2022}  Insurance verification and billing processing<br/>\
    \u{2022}  Quality assurance and clinical documentation review<br/><br/>\
    I understand that:<br/><br/>\
    <b>1. Human Oversight:</b> All AI-generated clinical data, recommendations, and documentation are reviewed \
    and approved by a licensed healthcare professional before being incorporated into my medical record or used \
    in treatment decisions. AI does not replace the clinical judgment of my healthcare provider.<br/><br/>\
    <b>2. Data Sovereignty:</b> [Practice Name] has verified that all AI tools and automated systems process and \
    store my personal health information exclusively on servers located within the continental United States, in \
    compliance with Texas Senate Bill 1188 (the Texas Data Sovereignty Act). My data is not transmitted to, \
    processed in, or accessible from any foreign jurisdiction.<br/><br/>\
    <b>3. Right to Opt Out:</b> I may request that specific administrative tasks be processed manually (without \
    AI assistance) by contacting the Practice Manager at any time. This right does not extend to system-level \
    functions that are required for practice operations (e.g., EMR auto-save features).<br/><br/>\
    <b>4. Right to Human Review:</b> I may request human review of any AI-assisted recommendation, clinical note, \
    or automated communication at any time, at no additional cost.<br/><br/>\
    <b>5. Data Protection:</b> AI systems used by this practice are subject to the same HIPAA privacy and \
    security protections as all other patient data systems. My information is not shared with AI vendors for \
    model training or any purpose beyond the direct services provided to this practice.<br/><br/>\
    <b>Patient Signature:</b> ________________________________________ <b>Date:</b> ________________<br/><br/>\
    <b>Printed Name:</b> ________________________________________<br/><br/>\
    <b>Witness (Staff Member):</b> ________________________________________ <b>Date:</b> ________________";

fn intake_consent(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 2", "Patient Intake AI Consent Form");
    nodes.push(body(
        styles,
        "If your practice uses AI for any patient-facing function — including chatbots, intake auto-fill, \
         clinical transcription, appointment scheduling, or diagnostic decision support — this consent form must \
         be included in your standard new-patient intake packet. It should be positioned immediately after your \
         HIPAA Notice of Privacy Practices.",
    ));
    nodes.push(note(styles, "Deployment", "New patient intake packet (print) and digital intake forms"));
    nodes.push(note(styles, "Retention", "Signed forms must be retained in the patient chart for 6 years minimum"));
    nodes.push(Node::spacer(6.0));
    nodes.push(form_box(
        styles,
        CONSENT_FORM,
        BoxStyle::custom(WHITE, Some(NAVY), NAVY)
            .sized(9.0, 13.0)
            .aligned(TextAlign::Left),
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(tip(
        styles,
        "<b>FOR EXISTING PATIENTS:</b> Distribute this form at the next scheduled visit. For practices with a \
         large patient base, consider including the form in a mass mailing or patient portal notification with a \
         request to sign and return at next visit. Document your distribution method and date for compliance \
         records.",
    ));
    nodes.push(Node::PageBreak);
    nodes
}

const PRIVACY_SECTION: &str = "<b>Section [X]: Artificial Intelligence, Automated Processing &amp; Data \
    Sovereignty</b><br/><br/>\
    In accordance with the Texas Data Sovereignty Act (Senate Bill 1188) and House Bill 149 (AI Transparency in \
    Healthcare), [Practice Name] maintains the following policies regarding the use of artificial intelligence and \
    automated data processing:<br/><br/>\
    <b>1. Scope of AI Usage.</b> [Practice Name] may utilize AI-assisted tools for administrative functions \
    (scheduling, billing, documentation), clinical support functions (transcription, preliminary data analysis, \
    clinical decision support), and patient communication (automated reminders, chatbot-assisted inquiries). AI \
    is used to augment, not replace, human clinical judgment.<br/><br/>\
    <b>2. Human Oversight.</b> All AI-generated clinical data, including transcribed notes, diagnostic \
    suggestions, and treatment recommendations, is reviewed and approved by a licensed healthcare professional \
    prior to incorporation into the patient record or use in care decisions. No autonomous clinical decisions are \
    made by AI systems without physician oversight.<br/><br/>\
    <b>3. Data Residency &amp; Sovereignty.</b> In compliance with Texas SB 1188, [Practice Name] does not \
    utilize AI vendors, sub-processors, or automated systems that process, store, cache, or transmit Protected \
    Health Information (PHI) outside the continental United States. All AI tool vendors have been verified for \
    domestic data residency through our vendor due diligence program. Verification records are maintained in our \
    Forensic Evidence Ledger.<br/><br/>\
    <b>4. Data Protection.</b> Patient data processed by AI systems is subject to the same HIPAA Privacy Rule (45 \
    CFR Part 164) and Security Rule protections as all other patient data maintained by this practice. Patient \
    information is not provided to AI vendors for model training, algorithm development, or any purpose beyond \
    the direct clinical and administrative services rendered to this practice.<br/><br/>\
    <b>5. Patient Right to Opt Out.</b> Patients may request that specific administrative tasks be processed \
    manually (without AI assistance) by submitting a written request to the Practice Manager. This opt-out right \
    applies to elective AI functions and does not extend to system-level operations required for standard \
    practice management (e.g., EMR core functionality).<br/><br/>\
    <b>6. Patient Right to Human Review.</b> Patients may request human review of any AI-assisted \
    recommendation, clinical notation, or automated communication at any time. Such requests may be made \
    verbally or in writing and will be fulfilled at no additional cost to the patient.<br/><br/>\
    <b>7. AI System Transparency.</b> A current inventory of AI systems utilized by [Practice Name] is maintained \
    internally and is available for review by state regulators upon request. Patients may request general \
    information about AI tools used in their care by contacting the Practice Manager.<br/><br/>\
    <b>8. Amendments.</b> This section will be updated as AI technologies are added, modified, or discontinued, \
    or as applicable Texas or federal regulations are amended. Material changes will be communicated to patients \
    through updated privacy policy postings and, where required, direct notice.";

fn privacy_policy(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 3", "Privacy Policy — AI Transparency Section");
    nodes.push(body(
        styles,
        "Add this section to your existing website privacy policy. It should be inserted as a new numbered \
         section, ideally after your existing \"Use and Disclosure of PHI\" section and before \"Patient Rights.\" \
         If your privacy policy is managed by an attorney, forward this content for review and integration.",
    ));
    nodes.push(note(styles, "Deployment", "Website privacy policy page (insert as new section)"));
    nodes.push(Node::spacer(6.0));
    nodes.push(form_box(
        styles,
        PRIVACY_SECTION,
        BoxStyle::QUOTE.border(1.0, GRAY_400).sized(9.0, 13.5),
    ));
    nodes.push(Node::PageBreak);
    nodes
}

fn phone_scripts(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 4", "Verification Script — Phone &amp; In-Person Inquiries");
    nodes.push(body(
        styles,
        "Use these scripts when a patient, prospective patient, or regulatory auditor asks about your practice's \
         use of AI. Train all front desk and patient-facing staff on these responses. Print and post near \
         reception phones for easy reference.",
    ));
    nodes.push(note(styles, "Deployment", "Front desk reference card, staff training, reception area"));
    nodes.push(Node::spacer(6.0));

    let scripts = [
        (
            "Scenario A: Patient Asks About AI",
            "SCRIPT — PATIENT INQUIRY",
            "\"Thank you for asking about that. Yes, we do use AI-assisted tools to help with \
             [scheduling/transcription/documentation]. These tools help us provide more efficient care and reduce \
             wait times. Importantly, all of our AI systems are verified to keep your medical information \
             exclusively within the United States — we comply with the latest Texas data privacy laws, including \
             SB 1188 and HB 149. A licensed provider always reviews anything generated by our AI tools before it \
             goes into your chart. If you'd like more details, I can provide you with our AI transparency notice, \
             or you can find it on our website.\"",
            (GREEN_50, GREEN_600),
        ),
        (
            "Scenario B: Regulatory Auditor or Inspector Asks About AI",
            "SCRIPT — AUDITOR / REGULATORY INQUIRY",
            "\"Absolutely. We maintain a documented AI compliance program under Texas HB 149 and SB 1188. Our Data \
             Sovereignty Policy is on file and includes an inventory of all AI systems in use, vendor data \
             residency certifications, and employee acknowledgment records. I can connect you with our designated \
             Data Sovereignty Officer, [Name/Title], who can provide the full documentation portfolio. Would you \
             like me to pull those records now, or would you prefer to schedule a compliance review meeting?\"",
            (AMBER_50, AMBER_600),
        ),
        (
            "Scenario C: Patient Expresses Concern or Wants to Opt Out",
            "SCRIPT — PATIENT CONCERN / OPT-OUT REQUEST",
            "\"I completely understand your concern, and we take this very seriously. You absolutely have the right \
             to request that we handle your information manually for specific tasks. Let me make a note of your \
             preference in your chart. Just so you know, even with our AI tools, a real person — your doctor or \
             one of our clinical staff — always reviews everything before it becomes part of your record. Your data \
             never leaves the country and is protected by the same HIPAA rules as everything else in your chart. \
             Would you like me to provide a copy of our AI transparency notice for your records?\"",
            (PURPLE_50, PURPLE_600),
        ),
    ];
    for (scenario, label, script, (background, border)) in scripts {
        nodes.push(Node::paragraph(format!("<b>{scenario}</b>"), &styles["h2"]));
        nodes.push(copy_ready_box(styles, label, script, background, border));
        nodes.push(Node::spacer(8.0));
    }
    nodes.push(tip(
        styles,
        "<b>TRAINING NOTE:</b> Staff should never speculate about technical details they are unsure of. If a \
         question exceeds the scope of these scripts, the correct response is: \"That's a great question. Let me \
         connect you with our [Compliance Officer/Practice Manager] who can give you the most accurate \
         information.\" Document all AI-related patient inquiries in a log for compliance records.",
    ));
    nodes
}

const GUIDELINES: [(&str, &str, &str); 6] = [
    (
        "DO use approved AI tools",
        "Only use AI tools on the practice’s approved list. If unsure, ask your manager.",
        "Unapproved tools may route data offshore — $250K violation.",
    ),
    (
        "DO NOT use personal AI",
        "Never paste patient info into ChatGPT, Bard, Gemini, or any free AI tool.",
        "Consumer AI is not HIPAA-compliant and may store data overseas.",
    ),
    (
        "DO NOT use personal email",
        "Never send patient data through Gmail, Yahoo, or Outlook personal accounts.",
        "Personal email servers are unverified for data residency.",
    ),
    (
        "DO report suspicious tools",
        "If you see a coworker using an unapproved tool, report within 24 hours.",
        "Early detection prevents violations. No retaliation policy applies.",
    ),
    (
        "DO check before installing",
        "Do not install extensions, apps, or software on work devices without approval.",
        "Shadow IT is the #1 cause of sovereignty breaches.",
    ),
    (
        "DO protect login credentials",
        "Never share AI system passwords or access tokens. Use unique passwords.",
        "Shared credentials make breach tracing impossible.",
    ),
];

fn staff_guidelines(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 5", "Staff AI Usage Guidelines");
    nodes.push(body(
        styles,
        "Post these guidelines in your breakroom or include them in your employee handbook. These rules \
         operationalize the Data Sovereignty Policy for day-to-day staff behavior.",
    ));
    nodes.push(note(styles, "Deployment", "Breakroom posting, employee handbook, onboarding materials"));
    nodes.push(Node::spacer(6.0));

    let text = styles.derive("cell", |s| s.named("GuidelineCell").with_size(7.5, 10.5));
    let rule = styles.derive("cell_bold", |s| s.named("GuidelineRule").with_size(7.5, 10.5));
    nodes.push(
        DataTable::new(&[inch(1.0), inch(2.7), inch(2.1)])
            .header(["Rule", "Details", "Why It Matters"])
            .rows(GUIDELINES.iter().map(|(name, detail, why)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{name}</b>"), &rule)),
                    Cell::from(*detail),
                    Cell::from(*why),
                ]
            }))
            .padding(6.0, 6.0)
            .wrap_body(&text)
            .into(),
    );
    nodes
}

fn review_response(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 6", "Social Media &amp; Review Response Template");
    nodes.push(body(
        styles,
        "If a patient raises concerns about AI usage in an online review or social media post, use this template \
         as a starting point. Never disclose PHI in a public response. Keep the tone professional, reassuring, \
         and transparent.",
    ));
    nodes.push(copy_ready_box(
        styles,
        "TEMPLATE — PUBLIC REVIEW / SOCIAL MEDIA RESPONSE",
        "\"Thank you for raising this important question. At [Practice Name], we are committed to transparency in \
         how we use technology to support patient care. Any AI tools we use are verified to process data \
         exclusively within the United States, in compliance with Texas data sovereignty laws. A licensed \
         healthcare provider always reviews AI-assisted recommendations. We welcome the opportunity to discuss \
         this further — please contact our office directly so we can address your specific concerns in a private \
         setting.\"",
        GRAY_50,
        GRAY_400,
    ));
    nodes.push(Node::spacer(8.0));
    nodes.push(callout(
        styles,
        "<b>HIPAA REMINDER:</b> Never acknowledge that the reviewer is a patient, reference specific treatments, \
         or disclose any health information in a public response. The template above is designed to address the \
         concern without confirming or denying a patient relationship.",
        &BoxStyle::WARNING,
    ));
    nodes
}

const SIGN: &str = "<b>OUR COMMITMENT TO YOUR DATA PRIVACY</b><br/><br/>\
    [Practice Name] uses AI-assisted technology to enhance your care experience, including appointment management, \
    clinical documentation, and administrative support.<br/><br/>\
    <b>What This Means for You:</b><br/>\
    \u{2022}  Your data never leaves the United States<br/>\
    \u{2022}  A licensed provider reviews all AI-assisted clinical information<br/>\
    \u{2022}  You may request human-only processing at any time<br/>\
    \u{2022}  Your privacy is protected by HIPAA and Texas law<br/><br/>\
    <b>Questions?</b> Ask any member of our team or visit our website for our full AI Transparency Notice.<br/><br/>\
    <i>Compliant with Texas SB 1188 (Data Sovereignty) &amp; HB 149 (AI Transparency)</i>";

fn signage(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 7", "Waiting Room &amp; Patient-Facing Signage");
    nodes.push(body(
        styles,
        "Print and display this notice in your waiting room, at the reception desk, or in treatment rooms. \
         Physical signage demonstrates proactive transparency and satisfies the \"conspicuous\" element of HB \
         149's disclosure requirement.",
    ));
    nodes.push(note(
        styles,
        "Deployment",
        "Framed display in waiting room, reception desk tent card, treatment room posting",
    ));
    nodes.push(Node::spacer(6.0));
    let sign = BoxStyle::custom(WHITE, None, NAVY)
        .border(2.0, NAVY)
        .sized(10.0, 15.0)
        .aligned(TextAlign::Center)
        .padded(20.0, 20.0)
        .width(inch(5.0));
    nodes.push(callout(styles, SIGN, &sign));
    nodes
}

const VENDOR_EMAIL: &str = "<b>Subject:</b> AI System Data Residency Verification — Texas SB 1188 &amp; HB 149 \
    Compliance Request<br/><br/>\
    Dear [Vendor Name] Compliance / Privacy Team,<br/><br/>\
    Our practice, [Practice Name], is implementing compliance measures required by the Texas Data Sovereignty Act \
    (Senate Bill 1188) and House Bill 149 (AI Transparency in Healthcare). As a provider of AI/automated processing \
    tools used in our clinical operations, we require the following verifications:<br/><br/>\
    <b>1. Data Residency:</b> Please confirm that all patient data processed through your platform — including AI \
    model inference, data storage, caching, and backup replication — occurs exclusively on servers located within \
    the continental United States.<br/><br/>\
    <b>2. Sub-Processor Disclosure:</b> Please identify any third-party sub-processors involved in the processing \
    of our patient data and confirm their data residency status.<br/><br/>\
    <b>3. Model Training:</b> Please confirm whether patient data from our practice is used for AI model \
    training, algorithm improvement, or any purpose beyond the direct services provided to our practice.<br/><br/>\
    <b>4. HB 149 Disclosure Support:</b> Please provide any standard AI transparency language or documentation \
    that we may incorporate into our patient-facing disclosures.<br/><br/>\
    If you have a Data Processing Addendum (DPA), Data Residency Certificate, or SOC 2 report that addresses these \
    items, please provide a current copy.<br/><br/>\
    We require this confirmation within <b>14 business days</b> to maintain our compliance timeline. If you have \
    questions about these requirements, please contact our Data Sovereignty Officer at [Contact \
    Email/Phone].<br/><br/>\
    Thank you for your prompt attention to this matter.<br/><br/>\
    Sincerely,<br/>\
    [Your Name], [Your Title]<br/>\
    [Practice Name]<br/>\
    [Phone] | [Email]";

fn vendor_email(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "ASSET 8", "Vendor AI Verification Request Email");
    nodes.push(body(
        styles,
        "Send this email to every vendor that provides AI, machine learning, or automated processing tools used \
         by your practice. This creates documented evidence of your vendor due diligence — a critical component \
         of Safe Harbor standing under SB 1188.",
    ));
    nodes.push(note(styles, "Deployment", "Email to each AI tool vendor"));
    nodes.push(note(
        styles,
        "Deadline",
        "Send within 7 days of bundle purchase; vendor response expected within 14 business days",
    ));
    nodes.push(Node::spacer(6.0));
    nodes.push(form_box(
        styles,
        VENDOR_EMAIL,
        BoxStyle::QUOTE
            .border(1.0, GRAY_400)
            .sized(9.0, 13.0)
            .aligned(TextAlign::Left),
    ));
    nodes.push(Node::spacer(10.0));
    nodes.push(tip(
        styles,
        "<b>EVIDENCE RETENTION:</b> When vendors reply, save the email as a PDF. File it in your Forensic \
         Evidence Ledger folder as: [VendorName]-AI-Verification-[Date].pdf. Log the vendor's response, the date \
         received, and the respondent's name in your Evidence Ledger spreadsheet. This documentation is your \
         strongest Safe Harbor evidence.",
    ));
    nodes.push(Node::PageBreak);
    nodes
}

/// One row per asset: name and the action that counts as deployed.
pub const DEPLOYMENT_STEPS: [(&str, &str); 8] = [
    ("Website Footer Notice", "Deployed on all pages of practice website"),
    ("Patient Intake Consent", "Added to new-patient packet; distribution plan for existing patients"),
    ("Privacy Policy Section", "Inserted into website privacy policy as new section"),
    ("Phone Scripts", "Printed and posted at reception; staff trained on all 3 scenarios"),
    ("Staff AI Guidelines", "Posted in breakroom; included in employee handbook"),
    ("Social Media Template", "Saved and accessible to reputation management / marketing staff"),
    ("Waiting Room Signage", "Printed, framed, and displayed in patient-facing area"),
    ("Vendor AI Verification", "Email sent to all AI tool vendors; responses logged in Evidence Ledger"),
];

fn deployment_checklist(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "DEPLOYMENT CHECKLIST", "AI Disclosure Kit — Complete Verification");
    let check = styles.derive("cell_check", |s| s.named("DeployCheck").with_size(10.0, 12.0));
    nodes.push(
        DataTable::new(&[inch(0.35), inch(1.4), inch(3.2), inch(0.55)])
            .header(["#", "Asset", "Action Required", "Done"])
            .rows(DEPLOYMENT_STEPS.iter().enumerate().map(|(i, (asset, action))| {
                [
                    Cell::from((i + 1).to_string()),
                    Cell::Paragraph(Paragraph::new(format!("<b>{asset}</b>"), &styles["cell_bold"])),
                    Cell::from(*action),
                    Cell::Paragraph(Paragraph::new("[  ]", &check)),
                ]
            }))
            .padding(5.0, 6.0)
            .valign(VerticalAlign::Middle)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(20.0));
    nodes.extend(signature_line(styles, "Deployed By:", None, 55.0, 10.0));
    nodes.extend(signature_line(styles, "Date All Assets Deployed:", None, 40.0, 0.0));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kickers(story: &[Node]) -> Vec<&str> {
        story
            .iter()
            .filter_map(|node| match node {
                Node::Paragraph(p) if p.markup.starts_with("ASSET ") => Some(p.markup.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn eight_assets_in_order() {
        let styles = StyleRegistry::standard();
        let expected: Vec<_> = (1..=8).map(|n| format!("ASSET {n}")).collect();
        assert_eq!(kickers(&story(&styles)), expected);
    }

    #[test]
    fn cover_summary_and_checklist_list_every_asset() {
        assert_eq!(ASSETS.len(), DEPLOYMENT_STEPS.len());
        let styles = StyleRegistry::standard();
        let nodes = deployment_checklist(&styles);
        let table = nodes
            .iter()
            .find_map(|node| match node {
                Node::Table(t) => Some(t),
                _ => None,
            })
            .expect("deployment checklist");
        assert_eq!(table.rows.len(), DEPLOYMENT_STEPS.len() + 1);
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn scripts_are_copy_ready_boxes() {
        let styles = StyleRegistry::standard();
        let labels: Vec<_> = phone_scripts(&styles)
            .iter()
            .filter_map(|node| match node {
                Node::Table(t) if t.rows.len() == 2 => match &t.rows[0][0] {
                    Cell::Paragraph(p) => Some(p.markup.clone()),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            [
                "<b>SCRIPT — PATIENT INQUIRY</b>",
                "<b>SCRIPT — AUDITOR / REGULATORY INQUIRY</b>",
                "<b>SCRIPT — PATIENT CONCERN / OPT-OUT REQUEST</b>",
            ]
        );
    }

    #[test]
    fn deployment_sign_off_lines_narrow_for_the_date() {
        let styles = StyleRegistry::standard();
        let widths: Vec<f32> = deployment_checklist(&styles)
            .iter()
            .filter_map(|node| match node {
                Node::Rule(rule) => Some(rule.width_percent),
                _ => None,
            })
            .collect();
        assert_eq!(widths[widths.len() - 2..], [55.0, 40.0]);
    }
}
