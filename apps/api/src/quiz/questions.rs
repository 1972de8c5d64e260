//! The question bank: 48 survey items, eight per RIASEC category.

use serde::Serialize;

use crate::models::riasec::Category;

/// A single Likert-scale survey item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
}

const fn q(id: u32, text: &'static str, category: Category) -> Question {
    Question { id, text, category }
}

/// Canonical question order. Presentation order comes from `shuffle`, never from mutating this.
pub static QUESTION_BANK: [Question; 48] = [
    q(1, "Repair a broken household appliance or gadget (e.g., electric fan, phone).", Category::R),
    q(2, "Assemble furniture or build things using tools.", Category::R),
    q(3, "Work on a motorcycle or car engine (mechanical tasks).", Category::R),
    q(4, "Do practical 'DIY' projects around the house or school.", Category::R),
    q(5, "Operate heavy machinery or power tools (like those in TESDA courses).", Category::R),
    q(6, "Spend time gardening or doing outdoor landscaping work.", Category::R),
    q(7, "Install or troubleshoot a home/office network (CCTV, Wi-Fi).", Category::R),
    q(8, "Use a blueprint or technical drawing to build a physical object.", Category::R),
    q(9, "Conduct a scientific experiment in a laboratory.", Category::I),
    q(10, "Solve complex math problems or logic puzzles for fun.", Category::I),
    q(11, "Read about new medical discoveries or scientific breakthroughs.", Category::I),
    q(12, "Use a microscope or lab instruments to study samples.", Category::I),
    q(13, "Analyze data or statistics to find a trend or pattern.", Category::I),
    q(14, "Study the chemical properties of different substances.", Category::I),
    q(15, "Research how the human brain or body works.", Category::I),
    q(16, "Write a program or 'debug' a complex piece of code.", Category::I),
    q(17, "Design digital art, posters, or social media graphics.", Category::A),
    q(18, "Write a poem, short story, or script for a vlog.", Category::A),
    q(19, "Perform in a dance group, choir, or theater production.", Category::A),
    q(20, "Sketch, paint, or create a physical piece of art.", Category::A),
    q(21, "Edit a video with music, transitions, and effects.", Category::A),
    q(22, "Play a musical instrument or compose a song.", Category::A),
    q(23, "Design the 'look and feel' of a room or website.", Category::A),
    q(24, "Express yourself through unique creative hobbies.", Category::A),
    q(25, "Volunteer for a community outreach or NGO program.", Category::S),
    q(26, "Teach a friend or younger student a difficult subject.", Category::S),
    q(27, "Help people resolve a personal conflict or argument.", Category::S),
    q(28, "Take care of someone who is sick or injured.", Category::S),
    q(29, "Work with children or the elderly in a community setting.", Category::S),
    q(30, "Give advice to friends on their life or career problems.", Category::S),
    q(31, "Participate in a group project to solve a social issue.", Category::S),
    q(32, "Lead a youth group or student organization to help others.", Category::S),
    q(33, "Start a small online business (Shopee/Lazada shop).", Category::E),
    q(34, "Convince a group of people to support your idea.", Category::E),
    q(35, "Lead a team or be the 'Group Leader' in a school project.", Category::E),
    q(36, "Sell a product or service to a customer for profit.", Category::E),
    q(37, "Plan and manage a large school event or party.", Category::E),
    q(38, "Give a public speech or presentation in front of a crowd.", Category::E),
    q(39, "Negotiate a deal or discount with a supplier.", Category::E),
    q(40, "Manage the budget and goals for an organization.", Category::E),
    q(41, "Organize files, folders, and documents systematically.", Category::C),
    q(42, "Keep detailed records of expenses for a project.", Category::C),
    q(43, "Check reports or papers for small errors.", Category::C),
    q(44, "Work with spreadsheets (Excel/Google Sheets) for data.", Category::C),
    q(45, "Follow a strict set of rules and procedures.", Category::C),
    q(46, "Manage a database or inventory of items/supplies.", Category::C),
    q(47, "Perform audit or quality-control checks on work.", Category::C),
    q(48, "Organize a schedule or calendar for a team.", Category::C),
];

/// Form field name carrying the answer to `question`.
pub fn answer_key(question: &Question) -> String {
    format!("q{}", question.id)
}
