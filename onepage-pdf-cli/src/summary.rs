//! Compiled-in content of the application summary page.

use onepage_pdf::{InstructionList, PageConfig, TextInstruction};

/// Indent of bullet and step lines relative to the margin.
const INDENT: f64 = 12.0;

const TITLE_SIZE: f64 = 18.0;
const HEADING_SIZE: f64 = 12.0;
const BODY_SIZE: f64 = 10.0;
const FOOTER_SIZE: f64 = 9.0;

enum Line {
    Title(f64, &'static str),
    Heading(f64, &'static str),
    Body(f64, &'static str),
    Bullet(f64, &'static str),
    Footer(f64, &'static str),
}

const LINES: &[Line] = &[
    Line::Title(756.0, "IIXL Next.js App - One-Page Summary"),
    Line::Heading(730.0, "What it is"),
    Line::Body(
        715.0,
        "A Next.js educational web app modeled after IXL-style learning flows for school students.",
    ),
    Line::Body(
        702.0,
        "It lets users pick a grade, browse subject skills, and practice question types with live feedback.",
    ),
    Line::Heading(680.0, "Who it's for"),
    Line::Body(
        665.0,
        "Primary persona: school students (Class 1 to Class 9) practicing Math/English/Science microskills.",
    ),
    Line::Body(
        652.0,
        "Secondary audience shown in copy/metadata: educators and parents. (Auth roles: Not found in repo.)",
    ),
    Line::Heading(630.0, "What it does"),
    Line::Bullet(615.0, "- Shows a landing page with grade cards and subject entry points."),
    Line::Bullet(602.0, "- Computes per-subject skill counts from in-repo curriculum data."),
    Line::Bullet(
        589.0,
        "- Renders a skills catalog by grade + subject with unit grouping in 3 columns.",
    ),
    Line::Bullet(
        576.0,
        "- Opens a practice experience per microskill route with mixed question types.",
    ),
    Line::Bullet(
        563.0,
        "- Tracks SmartScore, streak, tokens, challenge stages, and elapsed time in client state.",
    ),
    Line::Bullet(550.0, "- Validates answers and shows immediate correctness + solution feedback."),
    Line::Heading(528.0, "How it works (repo evidence only)"),
    Line::Bullet(
        513.0,
        "- Routing/UI components: App Router pages at /, /skills/[gradeId]/[subjectSlug], /practice/[microskillId].",
    ),
    Line::Bullet(
        500.0,
        "- Data layer: src/data/curriculum.js exports grade/subject/unit/microskill arrays + helper selectors.",
    ),
    Line::Bullet(
        487.0,
        "- Practice engine: page-level state + validateAnswer logic + QuestionRenderer type dispatch map.",
    ),
    Line::Bullet(
        474.0,
        "- Service/backend boundary: API routes, DB integration, auth, and persistence are Not found in repo.",
    ),
    Line::Heading(452.0, "How to run (minimal)"),
    Line::Bullet(437.0, "1. From repo root, install dependencies: npm install"),
    Line::Bullet(424.0, "2. Start dev server: npm run dev"),
    Line::Bullet(411.0, "3. Open http://localhost:3000"),
    Line::Bullet(398.0, "4. Optional production check: npm run build && npm run start"),
    Line::Bullet(385.0, "Node.js version requirement: Not found in repo."),
    Line::Bullet(372.0, "Environment variables/config secrets: Not found in repo."),
    Line::Footer(
        346.0,
        "Evidence files: src/app/page.js, src/app/skills/[gradeId]/[subjectSlug]/page.js,",
    ),
    Line::Footer(
        335.0,
        "src/app/practice/[microskillId]/page.js, src/components/practice/QuestionRenderer.js,",
    ),
    Line::Footer(324.0, "src/data/curriculum.js, package.json, README.md"),
];

/// The summary page's text, top to bottom, positioned from `config.margin_x`.
pub fn summary_instructions(config: &PageConfig) -> InstructionList {
    let margin = config.margin_x;
    LINES
        .iter()
        .map(|line| match *line {
            Line::Title(y, text) => TextInstruction::bold(TITLE_SIZE, margin, y, text),
            Line::Heading(y, text) => TextInstruction::bold(HEADING_SIZE, margin, y, text),
            Line::Body(y, text) => TextInstruction::regular(BODY_SIZE, margin, y, text),
            Line::Bullet(y, text) => TextInstruction::regular(BODY_SIZE, margin + INDENT, y, text),
            Line::Footer(y, text) => TextInstruction::regular(FOOTER_SIZE, margin, y, text),
        })
        .collect()
}
