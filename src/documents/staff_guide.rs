//! The Staff Training Guide: seven short modules on Digital Sovereignty
//! and Patient Privacy, closed by a signed attestation.

use crate::documents::write_pdf;
use crate::error::GenerateError;
use crate::output::OutputReport;
use harbor_layout::Document;
use harbor_template_dsl::prelude::*;
use harbor_types::DocumentMetadata;
use std::path::Path;

pub const FILE_NAME: &str = "Staff_Training_Guide.pdf";
pub const TITLE: &str = "Staff Training Guide — Digital Sovereignty & Patient Privacy";

pub fn chrome() -> PageChrome {
    PageChrome::new(
        "|  STAFF TRAINING GUIDE",
        "SB 1188 + HB 149  |  INTERNAL USE ONLY",
        "KairoLogic  |  Staff Training Guide  |  CONFIDENTIAL — Internal Use Only",
    )
}

pub fn document(styles: &StyleRegistry) -> Document {
    Document::new(
        DocumentMetadata::new(TITLE, "KairoLogic Compliance Division", "SB 1188 + HB 149 Staff Training"),
        story(styles),
    )
}

pub fn build_document(path: &Path) -> Result<OutputReport, GenerateError> {
    let styles = StyleRegistry::standard();
    write_pdf(&document(&styles), &chrome(), path)
}

pub fn story(styles: &StyleRegistry) -> Vec<Node> {
    let mut story = cover(styles);
    story.extend(toc(styles, "TRAINING MODULES", &MODULES));
    story.extend(core_rule(styles));
    story.extend(prohibited_tools(styles));
    story.extend(working_with_ai(styles));
    story.extend(vendor_check(styles));
    story.extend(reporting(styles));
    story.extend(scenarios(styles));
    story.extend(reference_card(styles));
    story.extend(attestation(styles));
    story
}

pub const MODULES: [(&str, &str); 8] = [
    ("Module 1:", "The Core Rule — What Is Data Sovereignty?"),
    ("Module 2:", "The Prohibited Tools List — Common Data Leaks"),
    ("Module 3:", "Working with AI — HB 149 Transparency Rules"),
    ("Module 4:", "The 3-Step Vendor Check — Before You Sign Up"),
    ("Module 5:", "Reporting a Data Leak — What to Do If Something Goes Wrong"),
    ("Module 6:", "Real-World Scenarios — Test Your Knowledge"),
    ("Module 7:", "Quick Reference Card — Print &amp; Post"),
    ("", "Staff Attestation Form"),
];

fn h2(styles: &StyleRegistry, title: &str) -> Node {
    Node::paragraph(format!("<b>{title}</b>"), &styles["h2"])
}

fn body(styles: &StyleRegistry, text: &str) -> Node {
    Node::paragraph(text, &styles["body"])
}

fn scenario_box(styles: &StyleRegistry, title: &str, text: &str) -> Node {
    callout(
        styles,
        &format!("<b>{title}</b><br/><br/>{text}"),
        &BoxStyle::DARK.aligned(TextAlign::Left).padded(14.0, 16.0),
    )
}

fn cover(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = vec![
        Node::spacer(inch(1.0)),
        banner("STAFF TRAINING GUIDE  |  INTERNAL USE ONLY", COVER_WIDTH),
        Node::spacer(inch(0.4)),
    ];
    nodes.extend(cover_title(styles, "Digital Sovereignty &amp;<br/>Patient Privacy Standards"));
    nodes.push(cover_lead(
        styles,
        "Mandatory compliance training for all employees, contractors, and temporary staff with access to \
         patient data. Covers Texas Senate Bill 1188 (Data Sovereignty) and House Bill 149 (AI Transparency) \
         requirements, prohibited tools, approved workflows, and incident reporting procedures.",
        24.0,
    ));
    nodes.push(cover_highlight(
        styles,
        "<b>TRAINING DURATION: 15 MINUTES</b><br/>This guide is designed for front-office staff, clinical \
         assistants, billing teams, and any personnel who handle patient information in any form — digital \
         or physical.",
    ));
    nodes.push(Node::spacer(inch(0.25)));
    nodes.push(meta_table(
        &[
            ("Subject:", "Digital Sovereignty & Patient Privacy Standards"),
            ("Governing Statutes:", "Texas SB 1188 (Data Sovereignty) + HB 149 (AI Transparency)"),
            ("Audience:", "All staff with patient data access"),
            ("Frequency:", "Required at hire; annual refresher thereafter"),
            ("Version:", "1.0 — February 2026"),
            ("Prepared By:", "KairoLogic Compliance Division"),
        ],
        [inch(1.6), inch(4.0)],
        3.0,
    ));
    nodes.push(Node::spacer(inch(0.3)));
    nodes.push(disclaimer(
        styles,
        "<b>NOTICE:</b> This training guide contains confidential compliance procedures. Distribution outside \
         the practice is prohibited. Completion of this training and the accompanying attestation form is a \
         condition of employment for all staff with access to patient data systems.",
    ));
    nodes.push(Node::PageBreak);
    nodes
}

fn core_rule(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "MODULE 1", "The Core Rule — What Is Data Sovereignty?");
    nodes.push(body(
        styles,
        "Starting in 2026, Texas law requires that <b>all patient information</b> — medical records, \
         appointment details, billing data, even text messages about scheduling — must stay within the United \
         States at all times. This isn't just a HIPAA issue. It's a <b>Data Sovereignty</b> issue, governed by \
         a new state law called <b>Senate Bill 1188</b>.",
    ));
    nodes.push(key_point_box(
        styles,
        "If <b>any</b> digital tool you use at work processes patient data outside the U.S. — even briefly, \
         even accidentally — our practice could face fines up to <b>$250,000 per violation</b>. That is not a \
         typo. A quarter of a million dollars. Per incident.",
    ));
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "What does \"data sovereignty\" mean in plain English?"));
    nodes.push(body(
        styles,
        "It means patient data must <b>physically exist on computers located inside the United States</b>. \
         When you type a patient's name into an app, that information travels to a server somewhere. If that \
         server is in Germany, Ireland, Singapore, or any other foreign country — even for a split second — it \
         violates Texas law.",
    ));
    nodes.push(h2(styles, "Why should I care? I'm not in IT."));
    nodes.push(body(
        styles,
        "Because most data sovereignty violations don't happen in the server room. They happen at the front \
         desk, in the break room, or on a staff member's phone. Someone copies a patient name into a free AI \
         tool. Someone texts a colleague about a patient on WhatsApp. Someone installs a \"helpful\" browser \
         extension. These everyday actions are where violations happen, and under SB 1188, the practice — and \
         potentially the individual — is held responsible.",
    ));
    nodes.push(Node::spacer(6.0));
    nodes.push(scenario_box(
        styles,
        "REAL-WORLD EXAMPLE: The Front Desk Shortcut",
        "Maria at the front desk is behind on chart notes. She copies three patients' visit summaries into her \
         personal ChatGPT account to \"clean them up.\" ChatGPT processes that text on servers in Ireland. The \
         data has now left the United States. Under SB 1188, this is a violation — even though Maria was trying \
         to be efficient, even though she deleted the conversation afterward, and even though no harm came to \
         the patients. <b>The violation is the data leaving the country. Period.</b>",
    ));
    nodes
}

/// Category, example tools, and the reason each is unsafe.
pub const PROHIBITED: [(&str, &str, &str); 6] = [
    (
        "Personal AI Accounts",
        "ChatGPT (free/personal), Google Gemini, Microsoft Copilot (personal), Claude (free), DeepSeek, any free \
         AI chatbot",
        "Data is processed on global servers. You cannot verify where patient data goes. Free tiers have zero \
         data residency guarantees.",
    ),
    (
        "Foreign Browser Extensions",
        "Grammarly (free), LanguageTool, Google Translate extension, AI writing assistants, \"productivity\" \
         plugins",
        "These extensions read everything you type — including patient data in your EMR. Text is sent to \
         foreign servers for processing.",
    ),
    (
        "Unauthorized Messaging",
        "WhatsApp, Telegram, Signal (personal), Facebook Messenger, Instagram DMs, personal iMessage, personal SMS",
        "Messages route through global server clusters. Even \"encrypted\" apps may store metadata overseas. \
         None are HIPAA-compliant.",
    ),
    (
        "Personal Email",
        "Gmail (personal), Yahoo Mail, Outlook.com (personal), ProtonMail (personal), any non-practice email",
        "Personal email servers are unverified for data residency. You have no control over where backups are \
         stored.",
    ),
    (
        "Free Cloud Storage",
        "Personal Google Drive, personal Dropbox, personal OneDrive, Box (free), WeTransfer, any file-sharing not \
         approved by practice",
        "Files may replicate to servers outside the U.S. for \"global redundancy.\" Free tiers offer zero \
         residency control.",
    ),
    (
        "Unapproved AI Transcription",
        "Otter.ai (free), Whisper (self-hosted without verification), foreign transcription services, \
         voice-to-text apps",
        "Audio containing patient information is processed on unknown servers. Transcription AI often trains on \
         your data.",
    ),
];

const APPROVED: [(&str, &str, &str); 6] = [
    ("Patient Records", "[Your EMR — e.g., eClinicalWorks]", "Only access through practice-issued devices"),
    ("Email", "[Practice email — e.g., Google Workspace]", "Never forward patient data to personal email"),
    ("Messaging", "[Practice system — e.g., Weave]", "Patient messaging only through approved platform"),
    ("Telehealth", "[Approved platform — e.g., Doxy.me]", "HIPAA-compliant, US-hosted video platform"),
    ("AI Transcription", "[If applicable — e.g., Freed Health]", "Enterprise version only; verified for US residency"),
    ("File Storage", "[Practice drive — e.g., Google Drive (Workspace)]", "Enterprise account with US-only data residency"),
];

fn prohibited_tools(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "MODULE 2", "The Prohibited Tools List — Common Data Leaks");
    nodes.push(body(
        styles,
        "The following tools and behaviors are <b>strictly prohibited</b> for any task involving patient \
         information. This includes scheduling, notes, billing, messaging, transcription, and any other activity \
         that touches patient names, dates, conditions, or contact information.",
    ));
    nodes.push(
        DataTable::new(&[inch(1.1), inch(2.3), inch(2.4)])
            .header(["Category", "Prohibited Tools", "Why It's Dangerous"])
            .rows(PROHIBITED.iter().map(|(category, tools, why)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{category}</b>"), &styles["cell_red"])),
                    Cell::from(*tools),
                    Cell::from(*why),
                ]
            }))
            .padding(6.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(8.0));
    nodes.push(warning_box(
        styles,
        "Using <b>any</b> of the tools above for patient-related tasks is a policy violation. First offense: \
         written warning and mandatory retraining within 7 days. Second offense: suspension of system access and \
         formal disciplinary action. Third offense or willful violation: termination.",
    ));
    nodes.push(Node::spacer(6.0));

    nodes.push(h2(styles, "What CAN I use?"));
    nodes.push(body(
        styles,
        "Only tools on the practice's <b>Approved Software List</b>. If you're not sure whether a tool is \
         approved, <b>ask your Practice Manager or Data Sovereignty Officer before using it</b>. The 30-second \
         question could save the practice $250,000.",
    ));
    nodes.push(
        DataTable::new(&[inch(1.3), inch(2.2), inch(2.3)])
            .header(["Function", "Approved Tool(s)", "Notes"])
            .rows(APPROVED.iter().map(|(function, tool, note)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{function}</b>"), &styles["cell_bold"])),
                    Cell::from(*tool),
                    Cell::from(*note),
                ]
            }))
            .stripes(&[WHITE, GREEN_50])
            .padding(6.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(6.0));
    nodes.push(tip_box(
        styles,
        "PRACTICE MANAGER NOTE",
        "Customize the \"Approved Tool(s)\" column above with your specific vendors before distributing this guide \
         to staff. The approved list should match the vendors documented in your Evidence Ledger.",
    ));
    nodes
}

fn working_with_ai(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "MODULE 3", "Working with AI — HB 149 Transparency Rules");
    nodes.push(body(
        styles,
        "Texas House Bill 149 requires healthcare practices to be <b>transparent</b> with patients about AI \
         usage. This means if we use AI for anything — scheduling, transcription, note-taking, reminders, or \
         clinical support — patients have the right to know.",
    ));
    nodes.push(h2(styles, "Rule 1: Always Be Honest About AI"));
    nodes.push(body(
        styles,
        "If a patient asks \"Is this an AI?\" or \"Did a computer write this?\" — always answer truthfully. Never \
         deny or hide that AI is being used. Here are sample responses:",
    ));

    let scripts = [
        (
            "\"Is this message from a computer?\"",
            "\"Yes, we use an AI tool to help draft reminders, but a real team member reviews everything before it \
             goes out to you.\"",
        ),
        (
            "\"Are you using AI on my records?\"",
            "\"We use a US-based AI transcription tool to help document your visit notes accurately. Your doctor \
             reviews and approves everything before it's added to your chart.\"",
        ),
        (
            "\"I don't want AI touching my data.\"",
            "\"Absolutely, I'll make a note of that in your chart. You can opt out of specific AI-assisted \
             processes at any time. Your data privacy is our top priority.\"",
        ),
        (
            "\"Is my data safe?\"",
            "\"Yes. All our AI tools are verified to keep your data exclusively within the United States. We \
             comply with Texas data sovereignty laws, and your information is protected by HIPAA.\"",
        ),
    ];
    nodes.push(
        DataTable::new(&[inch(2.2), inch(3.6)])
            .header(["Patient Asks...", "You Say..."])
            .rows(scripts.iter().map(|(question, answer)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<i>{question}</i>"), &styles["cell"])),
                    Cell::Paragraph(Paragraph::new(*answer, &styles["cell_bold"])),
                ]
            }))
            .stripes(&[WHITE, BLUE_50])
            .padding(7.0, 8.0)
            .into(),
    );
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Rule 2: Human-in-the-Loop — AI Never Gets the Final Word"));
    nodes.push(body(
        styles,
        "Every piece of content generated by AI — whether it's a clinical note, a patient message, a billing code \
         suggestion, or a diagnostic insight — must be <b>reviewed and approved by a human staff member</b> \
         before it is sent to a patient, entered into a medical record, or used in any clinical decision. No \
         exceptions.",
    ));
    nodes.push(key_point_box(
        styles,
        "AI is a <b>tool</b>, not a decision-maker. Think of it like spell-check: it helps, but you always read \
         the final version before hitting send. If AI generates something that looks wrong, override it. You \
         are the quality control.",
    ));
    nodes
}

/// The three residency questions every new vendor must answer.
pub const VENDOR_QUESTIONS: [(&str, &str, &str); 3] = [
    (
        "1",
        "\"Is your data storage and processing 100% based in the United States?\"",
        "\"Yes\" — with a specific answer about server locations. Vague answers like \"we use secure servers\" \
         are not acceptable.",
    ),
    (
        "2",
        "\"Do you use any offshore sub-processors, CDNs, or AI models hosted outside the U.S.?\"",
        "\"No\" — with confirmation that ALL processing stays domestic. Watch for phrases like \"global \
         infrastructure\" which may indicate foreign routing.",
    ),
    (
        "3",
        "\"Can you provide a written Data Residency Certificate for Texas SB 1188 compliance?\"",
        "\"Yes\" — a real document confirming U.S.-only data residency. If they say \"we're HIPAA compliant\" \
         instead, that is NOT the same thing.",
    ),
];

fn vendor_check(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(
        styles,
        "MODULE 4",
        "The 3-Step Vendor Check — Before You Sign Up for Anything",
    );
    nodes.push(body(
        styles,
        "Many data leaks start when a well-meaning staff member signs up for a \"free trial\" of a cool new app. \
         Before creating an account, downloading software, or entering patient data into <b>any new tool</b> — \
         even free ones — you must get approval. Here's how:",
    ));
    nodes.push(h2(styles, "Step 1: STOP. Do not sign up yet."));
    nodes.push(body(
        styles,
        "No matter how useful the tool looks, do not create an account or enter any information until it has \
         been verified. Free trials collect your data from the moment you register.",
    ));
    nodes.push(h2(styles, "Step 2: Ask the vendor these three questions:"));
    nodes.push(
        DataTable::new(&[inch(0.4), inch(2.8), inch(2.6)])
            .header(["#", "Question to Ask the Vendor", "What You Need to Hear"])
            .rows(VENDOR_QUESTIONS.iter().map(|(number, question, answer)| {
                [
                    Cell::Paragraph(Paragraph::new(format!("<b>{number}</b>"), &styles["cell_bold"])),
                    Cell::from(*question),
                    Cell::from(*answer),
                ]
            }))
            .padding(7.0, 6.0)
            .wrap_body(&styles["cell"])
            .into(),
    );
    nodes.push(Node::spacer(8.0));

    nodes.push(h2(styles, "Step 3: Bring the answers to your Practice Manager."));
    nodes.push(body(
        styles,
        "Forward the vendor's responses to your Practice Manager or Data Sovereignty Officer. They will verify \
         the tool, add it to the Evidence Ledger if approved, and give you the go-ahead. This process typically \
         takes 1-3 business days.",
    ));
    nodes.push(tip_box(
        styles,
        "REMEMBER",
        "\"HIPAA compliant\" and \"SB 1188 compliant\" are NOT the same thing. HIPAA protects data \
         <b>security</b>. SB 1188 protects data <b>location</b>. A tool can be perfectly HIPAA-compliant and \
         still violate Texas law by storing data on a server in Ireland.",
    ));
    nodes
}

/// The staff-level incident response, in order.
pub const INCIDENT_STEPS: [(&str, &str); 4] = [
    (
        "STEP 1: STOP",
        "Immediately stop using the tool. Close the app, browser tab, or service. Do not attempt to \"clean up\" \
         or delete data — that may destroy evidence needed for the investigation.",
    ),
    (
        "STEP 2: REPORT",
        "Notify your Practice Manager or Data Sovereignty Officer within 1 hour. This is not optional. You will \
         not be punished for honest reporting. You WILL face consequences for covering it up.",
    ),
    (
        "STEP 3: DOCUMENT",
        "Write down: What tool you used, what patient data was involved, when it happened, and how you \
         discovered the issue. Be specific. This will be logged in the Evidence Ledger.",
    ),
    (
        "STEP 4: COOPERATE",
        "Your Practice Manager will initiate the formal incident response process. Cooperate fully with any \
         investigation. The goal is to remediate the issue within 30 days to protect the practice.",
    ),
];

/// Amber for the urgent steps, grey for the rest.
fn step_style(title: &str) -> BoxStyle {
    let (background, border) = if title.contains("STOP") || title.contains("REPORT") {
        (AMBER_50, AMBER_600)
    } else {
        (GRAY_50, GRAY_400)
    };
    BoxStyle::custom(background, None, GRAY_700)
        .border(1.0, border)
        .aligned(TextAlign::Left)
        .padded(10.0, 14.0)
}

fn reporting(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(
        styles,
        "MODULE 5",
        "Reporting a Data Leak — What to Do If Something Goes Wrong",
    );
    nodes.push(body(
        styles,
        "Mistakes happen. What matters is how quickly you respond. Under Texas law, a practice that \
         <b>self-reports and remediates</b> a data sovereignty issue within 30 days may qualify for Safe Harbor \
         protection — meaning reduced or eliminated penalties. But only if you act fast.",
    ));
    nodes.push(h2(styles, "The 4-Step Incident Response (for any staff member):"));
    for (title, text) in INCIDENT_STEPS {
        nodes.push(callout(styles, &format!("<b>{title}</b><br/>{text}"), &step_style(title)));
        nodes.push(Node::spacer(4.0));
    }
    nodes.push(Node::spacer(4.0));
    nodes.push(key_point_box(
        styles,
        "<b>No retaliation.</b> This practice has a strict no-retaliation policy for good-faith incident \
         reporting. You will never be punished for reporting a suspected data leak. You WILL be held \
         accountable for failing to report one.",
    ));
    nodes
}

/// Title, situation and the correct response.
pub const SCENARIOS: [(&str, &str, &str); 4] = [
    (
        "Scenario 1: The Grammar Checker",
        "You're typing a referral letter in the EMR and realize you have a Grammarly browser extension installed. \
         It's highlighting errors in real-time. Is this okay?",
        "NO. Free Grammarly sends all text to external servers for processing — including any patient \
         information visible on screen. Disable the extension on work devices immediately and notify your \
         Practice Manager. Use your EMR's built-in spell check instead.",
    ),
    (
        "Scenario 2: The Helpful Coworker",
        "A coworker shows you a cool AI app that can summarize patient intake forms in seconds. They've been \
         using it for a week. What do you do?",
        "Report it to your Practice Manager or Data Sovereignty Officer immediately. Even if the tool seems \
         helpful, it hasn't been verified for U.S. data residency. Your coworker isn't in trouble for being \
         unaware, but the tool must be assessed before further use. This is exactly the kind of \"shadow IT\" \
         that causes SB 1188 violations.",
    ),
    (
        "Scenario 3: The After-Hours Text",
        "A doctor texts you on your personal phone asking you to look up a patient's medication list and text it \
         back. What do you do?",
        "Decline politely. Patient data should never be sent via personal text messages. Respond: \"I'd be happy \
         to help, but I need to pull that up through our approved system. I'll send it through [approved \
         platform] first thing in the morning.\" Log the request with your Practice Manager.",
    ),
    (
        "Scenario 4: The Vendor Demo",
        "A sales rep is showing your office a new scheduling tool. During the demo, they ask you to enter some \
         \"test patient data\" to see how it works. Is this okay?",
        "NO. Never enter real patient data into an unverified system, even as a \"test.\" Use obviously fake \
         data (e.g., \"John Doe, 555-0100\") during vendor demonstrations. If the vendor asks for real data, \
         that's a red flag.",
    ),
];

fn scenarios(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "MODULE 6", "Real-World Scenarios — Test Your Knowledge");
    nodes.push(body(
        styles,
        "For each scenario below, think about what you would do before reading the answer.",
    ));
    for (title, situation, answer) in SCENARIOS {
        nodes.push(h2(styles, title));
        nodes.push(scenario_box(styles, "SITUATION", situation));
        nodes.push(Node::spacer(4.0));
        nodes.push(callout(
            styles,
            &format!("<b>CORRECT RESPONSE:</b> {answer}"),
            &BoxStyle::SUCCESS,
        ));
        nodes.push(Node::spacer(8.0));
    }
    nodes
}

const REFERENCE_CARD: &str = "<b>DATA SOVEREIGNTY — STAFF QUICK REFERENCE</b><br/><br/>\
    <b>THE RULE:</b> ALL patient data must stay in the United States. No exceptions.<br/><br/>\
    <b>NEVER USE:</b> Personal ChatGPT/AI, WhatsApp, personal email, free browser extensions, unapproved apps, \
    free cloud storage — for ANY patient-related task.<br/><br/>\
    <b>ALWAYS USE:</b> Practice-approved tools only. If it's not on the approved list, don't use it.<br/><br/>\
    <b>IF A PATIENT ASKS ABOUT AI:</b> Be honest. \"Yes, we use US-based AI to help with [function]. Your doctor \
    always reviews everything. Your data never leaves the country.\"<br/><br/>\
    <b>BEFORE SIGNING UP FOR ANYTHING NEW:</b><br/>\
    1. Is data stored 100% in the U.S.?<br/>\
    2. Any offshore sub-processors?<br/>\
    3. Can they provide a Data Residency Certificate?<br/>\
    Then bring the answers to your Practice Manager.<br/><br/>\
    <b>IF YOU MAKE A MISTAKE:</b> STOP using the tool. REPORT to Practice Manager within 1 hour. DOCUMENT what \
    happened. No retaliation for honest reporting.<br/><br/>\
    <b>THE PENALTY:</b> Up to $250,000 per violation. This is everyone's responsibility.<br/><br/>\
    <i>Questions? Contact: [Data Sovereignty Officer Name] | [Phone/Email]</i>";

fn reference_card(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "MODULE 7", "Quick Reference Card — Print &amp; Post");
    nodes.push(body(
        styles,
        "Print this page and post it at every workstation, in the break room, and at the front desk.",
    ));
    let card = BoxStyle::custom(WHITE, None, NAVY)
        .border(2.5, NAVY)
        .sized(10.0, 15.0)
        .aligned(TextAlign::Left)
        .padded(14.0, 16.0)
        .width(inch(5.2));
    nodes.push(callout(styles, REFERENCE_CARD, &card));
    nodes.push(Node::PageBreak);
    nodes
}

const ATTESTATION: &str = "<b>ATTESTATION</b><br/><br/>\
    I, the undersigned, hereby attest that:<br/><br/>\
    1. I have read and understood the Practice's Data Sovereignty &amp; Residency Policy in its entirety.<br/><br/>\
    2. I have completed the Staff Training Guide on Digital Sovereignty &amp; Patient Privacy Standards.<br/><br/>\
    3. I understand that Texas Senate Bill 1188 requires all patient data to remain within the United States and \
    that violations may result in fines up to $250,000 per incident.<br/><br/>\
    4. I understand that Texas House Bill 149 requires transparency with patients about AI usage and that I must \
    disclose AI use honestly when asked.<br/><br/>\
    5. I agree to use ONLY practice-approved digital tools for all patient-related tasks, including scheduling, \
    documentation, communication, and data processing.<br/><br/>\
    6. I will NOT use personal AI accounts, unauthorized messaging apps, personal email, unapproved browser \
    extensions, or any unverified digital tool for patient data.<br/><br/>\
    7. I will report any suspected data sovereignty violation to the Practice Manager or Data Sovereignty Officer \
    within one (1) hour of discovery.<br/><br/>\
    8. I understand that violation of the Data Sovereignty Policy may result in disciplinary action up to and \
    including termination of employment.<br/><br/>\
    9. I understand that the practice maintains a no-retaliation policy for good-faith reporting of suspected \
    data sovereignty incidents.";

fn attestation(styles: &StyleRegistry) -> Vec<Node> {
    let mut nodes = numbered_header(styles, "STAFF ATTESTATION", "Data Sovereignty Training Acknowledgment");
    nodes.push(body(
        styles,
        "This attestation must be completed by every employee, contractor, and temporary staff member with access \
         to patient data. Signed attestations are retained in personnel files and serve as documented evidence of \
         compliance training under the practice's Safe Harbor™ program.",
    ));
    nodes.push(Node::spacer(12.0));
    nodes.push(callout(
        styles,
        ATTESTATION,
        &BoxStyle::QUOTE.border(1.5, NAVY).aligned(TextAlign::Left),
    ));
    nodes.push(Node::spacer(24.0));
    nodes.extend(signature_block(
        styles,
        &[
            "Employee Name (Print):",
            "Employee Signature:",
            "Position / Department:",
            "Date of Training Completion:",
            "",
            "Training Administered By:",
            "Trainer Signature:",
            "Date:",
        ],
        65.0,
        8.0,
    ));
    nodes.push(Node::spacer(16.0));
    nodes.push(Node::paragraph(
        "<i>This form should be completed within 30 days of hire and annually thereafter during refresher \
         training. Store signed forms in employee personnel files and maintain digital scans in the compliance \
         documentation folder.</i>",
        &styles["small"],
    ));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markups(story: &[Node]) -> Vec<&str> {
        story
            .iter()
            .filter_map(|node| match node {
                Node::Paragraph(p) => Some(p.markup.as_str()),
                _ => None,
            })
            .collect()
    }

    fn box_text(node: &Node) -> &str {
        match node {
            Node::Table(t) => match &t.rows[0][0] {
                Cell::Paragraph(p) => &p.markup,
                other => panic!("expected a paragraph cell, got {other:?}"),
            },
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn seven_modules_then_the_attestation() {
        let styles = StyleRegistry::standard();
        let story = story(&styles);
        let kickers: Vec<_> = markups(&story)
            .into_iter()
            .filter(|m| m.starts_with("MODULE ") || *m == "STAFF ATTESTATION")
            .collect();
        assert_eq!(
            kickers,
            ["MODULE 1", "MODULE 2", "MODULE 3", "MODULE 4", "MODULE 5", "MODULE 6", "MODULE 7", "STAFF ATTESTATION"]
        );
    }

    #[test]
    fn urgent_incident_steps_are_amber() {
        let styles = StyleRegistry::standard();
        let boxes: Vec<_> = reporting(&styles)
            .into_iter()
            .filter(|node| matches!(node, Node::Table(t) if box_text(node).starts_with("<b>STEP") && t.rows.len() == 1))
            .collect();
        assert_eq!(boxes.len(), INCIDENT_STEPS.len());
        let backgrounds: Vec<_> = boxes
            .iter()
            .map(|node| match node {
                Node::Table(t) => t.style.rules().iter().find_map(|rule| match rule {
                    TableRule::Background(_, color) => Some(*color),
                    _ => None,
                }),
                _ => None,
            })
            .collect();
        assert_eq!(backgrounds, [Some(AMBER_50), Some(AMBER_50), Some(GRAY_50), Some(GRAY_50)]);
    }

    #[test]
    fn every_scenario_has_a_correct_response() {
        let styles = StyleRegistry::standard();
        let nodes = scenarios(&styles);
        let responses = nodes
            .iter()
            .filter(|node| matches!(node, Node::Table(_)) && box_text(node).starts_with("<b>CORRECT RESPONSE:</b>"))
            .count();
        assert_eq!(responses, SCENARIOS.len());
    }

    #[test]
    fn attestation_has_two_signature_groups() {
        let styles = StyleRegistry::standard();
        let nodes = attestation(&styles);
        let labels: Vec<_> = markups(&nodes).into_iter().filter(|m| m.ends_with(':')).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.first(), Some(&"Employee Name (Print):"));
        assert_eq!(labels.last(), Some(&"Date:"));
    }
}
